//! Output trait for rendering reports to different formats.

use std::fmt;

/// One rendered element of a report.
#[derive(Debug, Clone, Copy)]
pub enum Line<'a> {
    Title(&'a str),
    Section(&'a str),
    KeyValue(&'a str, &'a str),
    KeyValueIndented(&'a str, &'a str),
    ListItem(&'a str),
    AddedItem(&'a str),
    Warning(&'a str),
    Error(&'a str),
    Divider(&'a str),
    Preformatted(&'a str),
    Blank,
}

impl Line<'_> {
    /// Diagnostics go to stderr on a terminal.
    pub fn is_diagnostic(&self) -> bool {
        matches!(self, Line::Warning(_) | Line::Error(_))
    }
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Title(text) => write!(f, "{}\n{}", text, "=".repeat(text.chars().count())),
            Line::Section(name) => write!(f, "{}:", name),
            Line::KeyValue(key, value) => write!(f, "{}: {}", key, value),
            Line::KeyValueIndented(key, value) => write!(f, "  {}: {}", key, value),
            Line::ListItem(text) => write!(f, "  - {}", text),
            Line::AddedItem(text) => write!(f, "  + {}", text),
            Line::Warning(msg) => write!(f, "warning: {}", msg),
            Line::Error(msg) => write!(f, "error: {}", msg),
            Line::Divider(label) => write!(f, "── {} ──", label),
            Line::Preformatted(text) => f.write_str(text),
            Line::Blank => Ok(()),
        }
    }
}

/// Target output for reports.
///
/// Reports describe *what* to output using the semantic methods;
/// implementations only decide where each [`Line`] goes.
pub trait Output {
    fn emit(&mut self, line: Line<'_>);

    fn title(&mut self, text: &str) {
        self.emit(Line::Title(text));
    }

    fn section(&mut self, name: &str) {
        self.emit(Line::Section(name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.emit(Line::KeyValue(key, value));
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        self.emit(Line::KeyValueIndented(key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.emit(Line::ListItem(text));
    }

    /// A file that was written.
    fn added_item(&mut self, text: &str) {
        self.emit(Line::AddedItem(text));
    }

    fn warning(&mut self, msg: &str) {
        self.emit(Line::Warning(msg));
    }

    fn error(&mut self, msg: &str) {
        self.emit(Line::Error(msg));
    }

    fn divider(&mut self, label: &str) {
        self.emit(Line::Divider(label));
    }

    fn preformatted(&mut self, text: &str) {
        self.emit(Line::Preformatted(text));
    }

    fn newline(&mut self) {
        self.emit(Line::Blank);
    }
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Prints to stdout, diagnostics to stderr.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn emit(&mut self, line: Line<'_>) {
        if line.is_diagnostic() {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

/// Collects rendered lines, for asserting on report output.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct TextOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl TextOutput {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
impl Output for TextOutput {
    fn emit(&mut self, line: Line<'_>) {
        self.lines.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_underlined_by_width() {
        assert_eq!(Line::Title("Größe").to_string(), "Größe\n=====");
    }

    #[test]
    fn test_only_warnings_and_errors_are_diagnostics() {
        assert!(Line::Warning("x").is_diagnostic());
        assert!(Line::Error("x").is_diagnostic());
        assert!(!Line::Preformatted("x").is_diagnostic());
    }
}

//! Repository file templates.
//!
//! Templates use the placeholder syntax of IDE file templates:
//!
//! - `${Name}` is replaced by the value of `Name`; unknown names are kept
//!   verbatim.
//! - `#if (${A} && ${A} != "")...#end` keeps its body only when every
//!   variable referenced in the condition is set and non-empty. When the `#if`
//!   starts a line, the newline after `#end` belongs to the body.

use std::path::Path;

use eyre::{Context, Result, bail};

use crate::Substitutions;

/// Name of the built-in template.
pub const BUILTIN_NAME: &str = "SpringDataRepo.java";

/// The built-in Spring Data JPA repository template.
pub const BUILTIN_SOURCE: &str = r#"#if (${PACKAGE_NAME} && ${PACKAGE_NAME} != "")package ${PACKAGE_NAME};
#end
import org.springframework.data.jpa.repository.JpaRepository;

public interface ${NAME} extends JpaRepository<${Entity}, ${PrimaryKeyType}> {
}
"#;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Var(String),
    If {
        vars: Vec<String>,
        body: Vec<Segment>,
        /// Newline following `#end`, emitted with the body.
        trailing: String,
    },
}

/// A parsed template.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse a template, rejecting unbalanced `#if`/`#end` directives.
    pub fn parse(name: impl Into<String>, source: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let source = source.into();
        let mut parser = Parser {
            src: &source,
            pos: 0,
        };
        let segments = parser
            .block(false)
            .wrap_err_with(|| format!("invalid template '{}'", name))?;
        Ok(Self {
            name,
            source,
            segments,
        })
    }

    /// The built-in Spring Data JPA repository template.
    pub fn builtin() -> Self {
        Self::parse(BUILTIN_NAME, BUILTIN_SOURCE).expect("built-in template is valid")
    }

    /// Read and parse a template file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read template '{}'", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::parse(name, source)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Render the template with the given placeholder values.
    pub fn render(&self, values: &Substitutions) -> String {
        let mut out = String::with_capacity(self.source.len());
        render_into(&self.segments, values, &mut out);
        out
    }
}

fn render_into(segments: &[Segment], values: &Substitutions, out: &mut String) {
    for segment in segments {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Var(name) => match values.get(name) {
                Some(value) => out.push_str(value),
                None => {
                    out.push_str("${");
                    out.push_str(name);
                    out.push('}');
                }
            },
            Segment::If {
                vars,
                body,
                trailing,
            } => {
                let truthy = vars
                    .iter()
                    .all(|v| values.get(v).is_some_and(|s| !s.is_empty()));
                if truthy {
                    render_into(body, values, out);
                    out.push_str(trailing);
                }
            }
        }
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl Parser<'_> {
    /// Parse until end of input, or until `#end` when inside an `#if`.
    fn block(&mut self, in_if: bool) -> Result<Vec<Segment>> {
        let mut segments = Vec::new();
        let mut text = String::new();

        while self.pos < self.src.len() {
            let rest = &self.src[self.pos..];

            let var = rest.strip_prefix("${").and_then(var_name);

            if let Some(name) = var {
                flush(&mut text, &mut segments);
                segments.push(Segment::Var(name.to_string()));
                self.pos += 2 + name.len() + 1;
            } else if rest.starts_with("#if") {
                flush(&mut text, &mut segments);
                segments.push(self.conditional()?);
            } else if rest.starts_with("#end") {
                if !in_if {
                    bail!("'#end' at byte {} has no matching '#if'", self.pos);
                }
                flush(&mut text, &mut segments);
                self.pos += "#end".len();
                return Ok(segments);
            } else {
                let c = rest.chars().next().unwrap_or_default();
                text.push(c);
                self.pos += c.len_utf8();
            }
        }

        if in_if {
            bail!("'#if' is missing its '#end'");
        }
        flush(&mut text, &mut segments);
        Ok(segments)
    }

    fn conditional(&mut self) -> Result<Segment> {
        let start = self.pos;
        let at_line_start = start == 0 || self.src[..start].ends_with('\n');
        self.pos += "#if".len();

        let rest = &self.src[self.pos..];
        let open = rest.len() - rest.trim_start_matches([' ', '\t']).len();
        if !rest[open..].starts_with('(') {
            bail!("expected '(' after '#if' at byte {}", start);
        }
        self.pos += open + 1;

        let mut depth = 1;
        let cond_start = self.pos;
        let mut cond_end = None;
        for (i, c) in self.src[cond_start..].char_indices() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        cond_end = Some(cond_start + i);
                        break;
                    }
                }
                _ => {}
            }
        }
        let Some(cond_end) = cond_end else {
            bail!("unclosed '#if (' condition at byte {}", start);
        };

        let vars = condition_vars(&self.src[cond_start..cond_end]);
        if vars.is_empty() {
            bail!("'#if' condition at byte {} references no variable", start);
        }
        self.pos = cond_end + 1;

        let body = self.block(true)?;

        let mut trailing = String::new();
        if at_line_start {
            let rest = &self.src[self.pos..];
            for newline in ["\r\n", "\n"] {
                if rest.starts_with(newline) {
                    trailing.push_str(newline);
                    self.pos += newline.len();
                    break;
                }
            }
        }

        Ok(Segment::If {
            vars,
            body,
            trailing,
        })
    }
}

fn flush(text: &mut String, segments: &mut Vec<Segment>) {
    if !text.is_empty() {
        segments.push(Segment::Text(std::mem::take(text)));
    }
}

/// Name at the start of `s` if it is followed by `}`.
fn var_name(s: &str) -> Option<&str> {
    let end = s.find('}')?;
    let name = &s[..end];
    let valid = !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_');
    valid.then_some(name)
}

/// Distinct variables referenced as `${Name}` in an `#if` condition.
fn condition_vars(condition: &str) -> Vec<String> {
    let mut vars: Vec<String> = Vec::new();
    let mut rest = condition;
    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        match var_name(after) {
            Some(name) => {
                if !vars.iter().any(|v| v == name) {
                    vars.push(name.to_string());
                }
                rest = &after[name.len() + 1..];
            }
            None => rest = after,
        }
    }
    vars
}

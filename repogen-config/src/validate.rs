//! Validation of parsed configuration values.

use miette::SourceSpan;

use crate::{Config, Result, SourceContext};

/// Java reserved words, which can never be a segment of a qualified name.
const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "break", "case", "catch", "class", "const", "continue",
    "default", "do", "else", "enum", "extends", "final", "finally", "for", "goto", "if",
    "implements", "import", "instanceof", "interface", "native", "new", "package", "private",
    "protected", "public", "return", "static", "strictfp", "super", "switch", "synchronized",
    "this", "throw", "throws", "transient", "try", "void", "volatile", "while", "true", "false",
    "null", "boolean", "byte", "char", "short", "int", "long", "float", "double",
];

/// Primitive types, which cannot be generic type arguments.
const JAVA_PRIMITIVES: &[&str] = &[
    "boolean", "byte", "char", "short", "int", "long", "float", "double",
];

/// Validate a parsed config against its source.
pub(crate) fn validate_config(config: &Config, ctx: &SourceContext) -> Result<()> {
    validate_markers(&config.markers.entity, "markers.entity", "entity", ctx)?;
    validate_markers(&config.markers.id, "markers.id", "id", ctx)?;

    let output = &config.output;
    if let Some(reason) = validate_identifier_part(&output.suffix) {
        return Err(ctx.invalid_name_error(
            &output.suffix,
            "output.suffix",
            reason,
            find_value_span(ctx.src(), &output.suffix),
        ));
    }

    if output.extension.is_empty()
        || !output.extension.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return Err(ctx.invalid_name_error(
            &output.extension,
            "output.extension",
            "the extension is written without a leading dot, using letters and digits only",
            find_value_span(ctx.src(), &output.extension),
        ));
    }

    if let Some(reason) = validate_primary_key_type(&output.default_primary_key_type) {
        return Err(ctx.invalid_name_error(
            &output.default_primary_key_type,
            "output.default_primary_key_type",
            reason,
            find_value_span(ctx.src(), &output.default_primary_key_type),
        ));
    }

    if output
        .template
        .as_ref()
        .is_some_and(|t| t.as_os_str().is_empty())
    {
        return Err(ctx.validation_error(
            "output.template must not be empty",
            find_key_span(ctx.src(), "template"),
        ));
    }

    Ok(())
}

fn validate_markers(
    markers: &[String],
    key: &str,
    leaf: &str,
    ctx: &SourceContext,
) -> Result<()> {
    if markers.is_empty() {
        return Err(ctx.empty_markers_error(key, find_key_span(ctx.src(), leaf)));
    }

    for marker in markers {
        if let Some(reason) = validate_qualified_name(marker) {
            return Err(ctx.invalid_name_error(
                marker,
                format!("annotation in '{}'", key),
                reason,
                find_value_span(ctx.src(), marker),
            ));
        }
    }
    Ok(())
}

/// Validate a dotted Java name like `javax.persistence.Entity`.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_qualified_name(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }

    for segment in name.split('.') {
        if segment.is_empty() {
            return Some("name cannot contain empty segments");
        }
        if JAVA_KEYWORDS.contains(&segment) {
            return Some("a segment is a Java reserved word");
        }
        let mut chars = segment.chars();
        match chars.next() {
            Some(c) if is_java_identifier_start(c) => {}
            _ => return Some("each segment must start with a letter, '_' or '$'"),
        }
        if !chars.all(is_java_identifier_part) {
            return Some("segments may only contain letters, digits, '_' and '$'");
        }
    }

    None
}

/// A primary-key type must be a reference type: `JpaRepository<T, long>` does not compile.
fn validate_primary_key_type(name: &str) -> Option<&'static str> {
    if JAVA_PRIMITIVES.contains(&name) {
        return Some("use the boxed type, e.g. 'Long' instead of 'long'");
    }
    validate_qualified_name(name)
}

/// Validate a fragment appended to a Java identifier (no start-char rule).
fn validate_identifier_part(s: &str) -> Option<&'static str> {
    if s.is_empty() {
        return Some("suffix cannot be empty");
    }
    if !s.chars().all(is_java_identifier_part) {
        return Some("suffix may only contain letters, digits, '_' and '$'");
    }
    None
}

fn is_java_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_java_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Find a quoted string value in the TOML source, spanning its content.
fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{value}{quote}");
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, value.len())));
        }
    }
    None
}

/// Find a `key =` assignment in the TOML source, spanning the key.
fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if trimmed
            .strip_prefix(key)
            .is_some_and(|rest| rest.trim_start().starts_with('='))
        {
            let start = offset + (line.len() - trimmed.len());
            return Some(SourceSpan::from((start, key.len())));
        }
        offset += line.len();
    }
    None
}

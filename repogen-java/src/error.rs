use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for repogen-java operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load the Java grammar")]
    #[diagnostic(code(repogen::grammar))]
    Grammar {
        #[source]
        source: tree_sitter::LanguageError,
    },

    #[error("failed to parse Java source")]
    #[diagnostic(code(repogen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("syntax error in Java source")]
    #[diagnostic(
        code(repogen::syntax_error),
        help("fix the source file before generating a repository for it")
    )]
    Syntax {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
        message: String,
    },
}

impl Error {
    pub(crate) fn syntax(
        src: &str,
        filename: &str,
        span: impl Into<SourceSpan>,
        message: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::Syntax {
            src: NamedSource::new(filename, src.to_string()),
            span: span.into(),
            message: message.into(),
        })
    }
}

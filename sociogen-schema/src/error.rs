use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for structure-file operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse structure file")]
    #[diagnostic(code(sociogen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error for an unreadable structure file
    pub fn io(path: &Path, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Create a parse error from a serde_json error with source context
    pub fn parse(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = span_for(src, &source);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

/// Translate the line/column carried by a serde_json error into a byte
/// offset usable as a miette span.
fn span_for(src: &str, err: &serde_json::Error) -> Option<SourceSpan> {
    if err.line() == 0 {
        return None;
    }
    let mut offset = 0usize;
    for (idx, line) in src.split('\n').enumerate() {
        if idx + 1 == err.line() {
            let column = err.column().saturating_sub(1).min(line.len());
            return Some(SourceSpan::new((offset + column).into(), 1));
        }
        offset += line.len() + 1;
    }
    None
}

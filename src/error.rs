//! Error types for the generative boundary

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Character range in source text, as ariadne counts positions
pub type Span = std::ops::Range<usize>;

/// Why a generative response could not be turned into a plan draft
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("response contains no JSON object")]
    NoPayload,

    #[error("invalid JSON at {span:?}: {message}")]
    Syntax { span: Span, message: String },

    #[error("unexpected plan shape at {span:?}: {message}")]
    Schema { span: Span, message: String },
}

impl DecodeError {
    /// Build a decode error from a serde_json failure on `source`
    pub fn from_json(err: &serde_json::Error, source: &str) -> Self {
        let start = char_offset(source, byte_offset(source, err.line(), err.column()));
        let span = start..(start + 1).min(source.chars().count()).max(start);
        let message = strip_position(&err.to_string());
        match err.classify() {
            serde_json::error::Category::Data => DecodeError::Schema { span, message },
            _ => DecodeError::Syntax { span, message },
        }
    }

    pub fn span(&self) -> Option<&Span> {
        match self {
            DecodeError::NoPayload => None,
            DecodeError::Syntax { span, .. } | DecodeError::Schema { span, .. } => Some(span),
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (span, message) = match self {
            DecodeError::NoPayload => return format!("Error: {}\n", self),
            DecodeError::Syntax { span, message } | DecodeError::Schema { span, message } => {
                (span.clone(), message)
            }
        };

        let title = match self {
            DecodeError::Schema { .. } => "Unexpected plan shape",
            _ => "Invalid JSON",
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(title)
            .with_label(
                Label::new((filename, span))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("Error: {}\n", self),
        }
    }
}

/// Failures of the external text service
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("generative service unavailable: {0}")]
    Unavailable(String),

    #[error("generative service returned an empty response")]
    EmptyResponse,

    #[error("failed to read response: {0}")]
    Io(#[from] std::io::Error),
}

/// Convert serde_json's 1-based line and column into a byte offset.
///
/// serde_json reports line 0 for errors with no position; those map to offset 0.
fn byte_offset(source: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(source.len())
}

/// Number of characters before `byte` in `source`
fn char_offset(source: &str, byte: usize) -> usize {
    source.char_indices().take_while(|(i, _)| *i < byte).count()
}

/// serde_json appends " at line X column Y"; the span already carries that
fn strip_position(message: &str) -> String {
    match message.rfind(" at line ") {
        Some(idx) => message[..idx].to_string(),
        None => message.to_string(),
    }
}

use std::error::Error as StdError;
use std::fmt;

use crate::core::segment::Segment;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Internal,
    Usage,
    Malformed,
    Base64,
    Json,
    Io,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    segment: Option<Segment>,
    segment_count: Option<usize>,
    hint: Option<String>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            segment: None,
            segment_count: None,
            hint: None,
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn segment(&self) -> Option<Segment> {
        self.segment
    }

    pub fn segment_count(&self) -> Option<usize> {
        self.segment_count
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_segment(mut self, segment: Segment) -> Self {
        self.segment = Some(segment);
        self
    }

    pub fn with_segment_count(mut self, count: usize) -> Self {
        self.segment_count = Some(count);
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(segment) = self.segment {
            write!(f, " (segment: {segment})")?;
        }
        if let Some(count) = self.segment_count {
            write!(f, " (segments: {count})")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

pub fn to_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::Internal => 1,
        ErrorKind::Usage => 2,
        ErrorKind::Malformed => 3,
        ErrorKind::Base64 => 4,
        ErrorKind::Json => 5,
        ErrorKind::Io => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind, to_exit_code};
    use crate::core::segment::Segment;

    #[test]
    fn exit_code_mapping_is_stable() {
        let cases = [
            (ErrorKind::Internal, 1),
            (ErrorKind::Usage, 2),
            (ErrorKind::Malformed, 3),
            (ErrorKind::Base64, 4),
            (ErrorKind::Json, 5),
            (ErrorKind::Io, 6),
        ];

        for (kind, code) in cases {
            assert_eq!(to_exit_code(kind), code);
        }
    }

    #[test]
    fn display_includes_segment_context() {
        let err = Error::new(ErrorKind::Base64)
            .with_message("payload segment is not valid base64")
            .with_segment(Segment::Payload);
        let rendered = err.to_string();
        assert!(rendered.starts_with("Base64: "));
        assert!(rendered.contains("(segment: payload)"));
    }

    #[test]
    fn display_includes_segment_count_context() {
        let err = Error::new(ErrorKind::Malformed)
            .with_message("token has 4 segments, expected 3")
            .with_segment_count(4);
        assert!(err.to_string().contains("(segments: 4)"));
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    /// The argument named `name` was required but not supplied.
    pub fn missing_arg(name: impl Into<String>) -> Error {
        Error::invalid_arg(name, "value is absent")
    }

    pub fn empty_sequence() -> Error {
        Error(ErrorKind::EmptySequence.into())
    }

    /// Returns `true` if this error was raised for an absent or out-of-range argument.
    pub fn is_invalid_arg(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidArgument { .. })
    }

    /// Returns `true` if this error was raised because a sequence yielded no elements.
    pub fn is_empty_sequence(&self) -> bool {
        matches!(self.kind(), ErrorKind::EmptySequence)
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("sequence contains no elements")]
    EmptySequence,
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};

    #[test]
    fn test_invalid_arg_message() {
        let e = Error::missing_arg("source");
        assert!(e.is_invalid_arg());
        assert_eq!(e.to_string(), "invalid argument source: value is absent");
        match e.into_kind() {
            ErrorKind::InvalidArgument { name, .. } => assert_eq!(name, "source"),
            kind => panic!("unexpected kind {kind:?}"),
        }
    }

    #[test]
    fn test_empty_sequence_message() {
        let e = Error::empty_sequence();
        assert!(e.is_empty_sequence());
        assert!(!e.is_invalid_arg());
        assert_eq!(e.to_string(), "sequence contains no elements");
    }

    #[test]
    fn test_error_kinds() {
        let describe = |e: Error| match e.into_kind() {
            ErrorKind::InvalidArgument { name, message } => format!("{name}: {message}"),
            ErrorKind::EmptySequence => "empty".to_string(),
        };
        assert_eq!(describe(Error::invalid_arg("count", "too large")), "count: too large");
        assert_eq!(describe(Error::empty_sequence()), "empty");
        assert_eq!(describe(ErrorKind::EmptySequence.into()), "empty");
    }
}

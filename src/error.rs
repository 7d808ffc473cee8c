use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("unsupported {kind}: '{name}'")]
    UnsupportedVariant { kind: &'static str, name: String },

    #[error("pattern '{pattern}' is documented only and has no runnable demo")]
    NotRunnable { pattern: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PatternError {
    pub fn unsupported(kind: &'static str, name: impl Into<String>) -> Self {
        Self::UnsupportedVariant {
            kind,
            name: name.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_message() {
        let err = PatternError::unsupported("design tool", "sketch");
        assert_eq!(err.to_string(), "unsupported design tool: 'sketch'");
    }

    #[test]
    fn test_io_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = PatternError::from(io);
        assert_eq!(err.to_string(), "pipe closed");
    }
}

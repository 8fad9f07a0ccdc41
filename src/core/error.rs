//! Error types for the logging facade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Priority text that matches no canonical name or synonym
    #[error("invalid priority: {0}")]
    InvalidPriority(String),

    /// IO error from an explicit stream operation such as flush
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LoggerError {
    /// Create an invalid-priority error carrying the offending token
    pub fn invalid_priority(token: impl Into<String>) -> Self {
        LoggerError::InvalidPriority(token.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_priority_display() {
        let err = LoggerError::invalid_priority("fatal");
        assert!(matches!(err, LoggerError::InvalidPriority(_)));
        assert_eq!(err.to_string(), "invalid priority: fatal");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = LoggerError::from(io);
        assert!(err.to_string().contains("pipe closed"));
    }
}

//! Structured error types for proftree
//!
//! Using thiserror for automatic Display implementation and error chaining.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("profile CSV is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_display() {
        let err = LoadError::MissingColumn("Profile");
        assert_eq!(err.to_string(), "profile CSV is missing required column 'Profile'");
    }

    #[test]
    fn test_io_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = LoadError::from(io);
        assert!(err.to_string().contains("no such file"));
    }
}

use thiserror::Error;

/// Everything that can stop the questionnaire before the summary is printed.
#[derive(Debug, Error)]
pub enum InputError {
    /// A token could not be converted to the type the current question needs.
    #[error("invalid {expected} for {field}: '{token}'")]
    Parse {
        field: &'static str,
        expected: &'static str,
        token: String,
    },

    /// The input ended before the field was answered.
    #[error("no input left for {field}")]
    MissingInput { field: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InputError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Parse { .. } | Self::MissingInput { .. } => 1,
            Self::Io(_) => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = InputError::Parse {
            field: "age",
            expected: "integer",
            token: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid integer for age: 'abc'");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_io_error_exit_code() {
        let err = InputError::from(std::io::Error::other("boom"));
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "I/O error: boom");
    }
}

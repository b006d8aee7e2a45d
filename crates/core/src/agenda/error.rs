use thiserror::Error;

/// Errors that can occur when normalizing an appointment for display.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnnotateError {
    #[error("Unparseable start time: {0}")]
    BadStartTime(String),
    #[error("Unparseable end time: {0}")]
    BadEndTime(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotate_error_display() {
        assert_eq!(
            AnnotateError::BadStartTime("garbage".to_string()).to_string(),
            "Unparseable start time: garbage"
        );
        assert_eq!(
            AnnotateError::BadEndTime("".to_string()).to_string(),
            "Unparseable end time: "
        );
    }
}

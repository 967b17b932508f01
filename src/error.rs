use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while converting a single TestLink document.
///
/// Absent optional fields (suite names, importance, preconditions, summary) never
/// produce an error; they are replaced by defaults during flattening and transformation.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The document could not be turned into a suite tree.
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    /// Reading an input document or writing its output failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<quick_xml::DeError> for ConvertError {
    fn from(e: quick_xml::DeError) -> Self {
        ConvertError::MalformedInput(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_input_message() {
        let err = ConvertError::MalformedInput("unexpected end of document".to_string());
        assert_eq!(err.to_string(), "Malformed input: unexpected end of document");
    }

    #[test]
    fn test_io_error_message() {
        let err = ConvertError::Io {
            path: PathBuf::from("cases.xml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "I/O error on cases.xml: not found");
    }
}

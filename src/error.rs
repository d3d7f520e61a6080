//! Pipeline error types

use thiserror::Error;

/// Errors that can abort an update run
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("row at line {line}: expected at least 9 columns, found {found}")]
    ShortRow { line: u64, found: usize },

    #[error("row at line {line}: {field} value '{value}' is not a number")]
    InvalidCoordinate {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("plist error: {0}")]
    Plist(#[from] plist::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl UpdateError {
    /// Check if this failure came from the network side (transport or status)
    pub fn is_network(&self) -> bool {
        matches!(self, UpdateError::Network(_) | UpdateError::Status { .. })
    }

    /// Check if this failure came from a malformed CSV row
    pub fn is_malformed_row(&self) -> bool {
        matches!(
            self,
            UpdateError::ShortRow { .. } | UpdateError::InvalidCoordinate { .. } | UpdateError::Csv(_)
        )
    }

    /// Get the HTTP status if this is a status failure
    pub fn status(&self) -> Option<u16> {
        match self {
            UpdateError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_network() {
        let err = UpdateError::Status {
            status: 503,
            url: "http://example.com/cities.csv".to_string(),
        };
        assert!(err.is_network());
        assert!(!err.is_malformed_row());
    }

    #[test]
    fn test_is_malformed_row() {
        let err = UpdateError::ShortRow { line: 3, found: 5 };
        assert!(err.is_malformed_row());
        assert!(!err.is_network());

        let err = UpdateError::InvalidCoordinate {
            line: 7,
            field: "lat",
            value: "north".to_string(),
        };
        assert!(err.is_malformed_row());
    }

    #[test]
    fn test_status() {
        let err = UpdateError::Status {
            status: 404,
            url: "http://example.com/cities.csv".to_string(),
        };
        assert_eq!(err.status(), Some(404));

        let err = UpdateError::ShortRow { line: 2, found: 1 };
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_display_carries_line_number() {
        let err = UpdateError::InvalidCoordinate {
            line: 12,
            field: "long",
            value: "east".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("line 12"));
        assert!(rendered.contains("long"));
        assert!(rendered.contains("east"));
    }
}

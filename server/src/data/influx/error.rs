//! InfluxDB error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfluxError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Query error: {0}")]
    Query(String),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = InfluxError::Status {
            status: 401,
            body: "unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "Server returned 401: unauthorized");
    }

    #[test]
    fn test_query_error_display() {
        let err = InfluxError::Query("database not found: stats".to_string());
        assert_eq!(err.to_string(), "Query error: database not found: stats");
    }

    #[test]
    fn test_malformed_error_display() {
        let err = InfluxError::Malformed("missing results field".to_string());
        assert!(err.to_string().contains("missing results field"));
    }

    #[test]
    fn test_error_debug() {
        let err = InfluxError::Status {
            status: 500,
            body: "oops".to_string(),
        };
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Status"));
        assert!(debug_str.contains("500"));
    }
}

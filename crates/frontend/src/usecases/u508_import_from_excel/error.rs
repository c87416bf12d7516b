use thiserror::Error;

/// Failure of a submission after validation passed.
///
/// `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// Non-2xx response; the body is shown as the server wrote it.
    #[error("{}", server_message(.status, .body))]
    Server { status: u16, body: String },

    #[error("{0}")]
    Transport(String),

    /// 2xx response whose body is not an import result; shown like
    /// `Server`, `reason` only goes to the log.
    #[error("{}", server_message(.status, .body))]
    Decode {
        status: u16,
        body: String,
        reason: String,
    },

    /// The multipart payload could not be built from the form
    #[error("Could not read the form: {0}")]
    Payload(String),
}

fn server_message(status: &u16, body: &str) -> String {
    if body.trim().is_empty() {
        format!("Request failed with status {}", status)
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_body_is_shown_verbatim() {
        let err = ImportError::Server {
            status: 400,
            body: "Invalid file format".into(),
        };
        assert_eq!(err.to_string(), "Invalid file format");
    }

    #[test]
    fn test_server_without_body() {
        let err = ImportError::Server {
            status: 502,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "Request failed with status 502");
    }

    #[test]
    fn test_decode_shows_body_not_reason() {
        let err = ImportError::Decode {
            status: 200,
            body: "Import done".into(),
            reason: "expected value at line 1 column 1".into(),
        };
        assert_eq!(err.to_string(), "Import done");
    }

    #[test]
    fn test_decode_without_body() {
        let err = ImportError::Decode {
            status: 204,
            body: String::new(),
            reason: "EOF while parsing a value".into(),
        };
        assert_eq!(err.to_string(), "Request failed with status 204");
    }
}

/// Failure of a single submit attempt. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UploadError {
    #[error("Please select an image before uploading.")]
    NoFileSelected,
    #[error("Server error: {}", .message.as_deref().unwrap_or("Unknown error"))]
    Server { status: u16, message: Option<String> },
    #[error("Unable to connect to the server. Please try again later.")]
    Transport(String),
    #[error("Received invalid response from server")]
    MalformedResponse(String),
}

impl UploadError {
    /// Diagnostic detail for logs; never rendered.
    pub fn detail(&self) -> String {
        match self {
            UploadError::NoFileSelected => "no file selected".to_string(),
            UploadError::Server { status, message } => {
                format!("status {} ({})", status, message.as_deref().unwrap_or("no error field"))
            }
            UploadError::Transport(detail) | UploadError::MalformedResponse(detail) => {
                detail.clone()
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse form config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid form config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_uses_server_text() {
        let err = UploadError::Server {
            status: 400,
            message: Some("bad image".into()),
        };
        assert_eq!(err.to_string(), "Server error: bad image");
    }

    #[test]
    fn server_error_without_text_falls_back() {
        let err = UploadError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "Server error: Unknown error");
        assert_eq!(err.detail(), "status 500 (no error field)");
    }

    #[test]
    fn transport_detail_is_not_displayed() {
        let err = UploadError::Transport("connection refused".into());
        assert_eq!(
            err.to_string(),
            "Unable to connect to the server. Please try again later."
        );
        assert_eq!(err.detail(), "connection refused");
    }
}

use thiserror::Error;

/// A failed HTTP exchange: a non-2xx response (`status_code` set) or a
/// network-level failure (`status_code` absent).
///
/// Services hand this back as a value; it never escapes as a panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render(.status_code, .message))]
pub struct TransportError {
    pub status_code: Option<u16>,
    pub message: String,
}

fn render(status_code: &Option<u16>, message: &str) -> String {
    match status_code {
        Some(code) => format!("HTTP {}: {}", code, message),
        None => format!("network error: {}", message),
    }
}

impl TransportError {
    pub fn http(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code: Some(status_code),
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            status_code: None,
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status_code, Some(401 | 403))
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self.status_code, Some(400..=499))
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self.status_code, Some(500..=599))
    }

    pub fn is_network(&self) -> bool {
        self.status_code.is_none()
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        let message = if e.is_timeout() {
            "request timed out".to_string()
        } else if e.is_connect() {
            format!("could not connect: {}", e)
        } else {
            e.to_string()
        };
        match e.status() {
            Some(status) => Self::http(status.as_u16(), message),
            None => Self::network(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            TransportError::http(404, "Lava-jato não encontrado").to_string(),
            "HTTP 404: Lava-jato não encontrado"
        );
        assert_eq!(
            TransportError::network("connection refused").to_string(),
            "network error: connection refused"
        );
    }

    #[test]
    fn test_classification() {
        let not_found = TransportError::http(404, "");
        assert!(not_found.is_not_found());
        assert!(not_found.is_client_error());
        assert!(!not_found.is_server_error());

        assert!(TransportError::http(401, "").is_unauthorized());
        assert!(TransportError::http(503, "").is_server_error());
        assert!(TransportError::network("x").is_network());
        assert!(!TransportError::network("x").is_client_error());
    }
}

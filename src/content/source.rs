use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while fetching a documentation resource.
#[derive(Debug)]
pub enum ContentError {
    /// The source has no resource with this name.
    NotFound(String),
    /// The name would escape the content root (`/`, `\`, `..`).
    InvalidName(String),
    /// Filesystem failure other than a missing file.
    Io(std::io::Error),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The server answered with a non-success status.
    Status { status: u16, resource: String },
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::NotFound(name) => write!(f, "resource not found: {name}"),
            ContentError::InvalidName(name) => write!(f, "invalid resource name: {name:?}"),
            ContentError::Io(e) => write!(f, "content I/O error: {e}"),
            ContentError::Network(msg) => write!(f, "network error: {msg}"),
            ContentError::Status { status, resource } => {
                write!(f, "HTTP {status} while fetching {resource}")
            }
        }
    }
}

impl std::error::Error for ContentError {}

/// A place documentation markdown can be read from.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Short label for logs and the header (`bundled`, `dir`, `http`).
    fn name(&self) -> &str;

    /// Fetch the raw text of `resource` (e.g. `"economy.md"`).
    async fn fetch(&self, resource: &str) -> Result<String, ContentError>;
}

/// Reject names that are empty or could address anything outside `docs/`.
pub fn validate_resource_name(resource: &str) -> Result<(), ContentError> {
    if resource.is_empty()
        || resource.contains('/')
        || resource.contains('\\')
        || resource.contains("..")
    {
        return Err(ContentError::InvalidName(resource.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_are_valid() {
        assert!(validate_resource_name("economy.md").is_ok());
        assert!(validate_resource_name("xpsync.md").is_ok());
    }

    #[test]
    fn traversal_and_separators_rejected() {
        for bad in ["", "../secret.md", "docs/economy.md", "a\\b.md", "..md"] {
            assert!(
                matches!(validate_resource_name(bad), Err(ContentError::InvalidName(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn status_error_display_names_resource() {
        let err = ContentError::Status {
            status: 404,
            resource: "graves.md".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404 while fetching graves.md");
    }
}

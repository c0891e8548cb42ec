//! Documentation read from disk at `<root>/docs/<name>`.
//!
//! Lets authors edit markdown and reload pages without rebuilding.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use log::debug;

use crate::content::{ContentError, ContentSource, validate_resource_name};

pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, resource: &str) -> PathBuf {
        self.root.join("docs").join(resource)
    }
}

#[async_trait]
impl ContentSource for DirectorySource {
    fn name(&self) -> &str {
        "dir"
    }

    async fn fetch(&self, resource: &str) -> Result<String, ContentError> {
        validate_resource_name(resource)?;
        let path = self.path_for(resource);
        debug!("Reading {}", path.display());
        tokio::fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ContentError::NotFound(resource.to_string())
            } else {
                ContentError::Io(e)
            }
        })
    }
}

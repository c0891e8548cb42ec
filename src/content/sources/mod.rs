pub mod bundled;
pub mod directory;
pub mod http;

pub use bundled::BundledSource;
pub use directory::DirectorySource;
pub use http::HttpSource;

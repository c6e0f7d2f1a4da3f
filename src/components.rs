pub mod catalog;
pub use catalog::CatalogBrowser;

pub mod header;
pub use header::SessionIndicator;

pub mod profile;
pub use profile::ProfileManager;

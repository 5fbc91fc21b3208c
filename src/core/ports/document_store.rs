//! Document store port
//!
//! Defines the interface for loading and saving the summary document.

/// Storage for the summary document (the README)
#[cfg_attr(test, mockall::automock)]
pub trait DocumentStore {
    /// Load the document, `Ok(None)` if it does not exist
    fn load(&self) -> anyhow::Result<Option<String>>;

    /// Replace the document with `text`
    fn save(&mut self, text: &str) -> anyhow::Result<()>;

    /// Human-readable description for logs
    fn describe(&self) -> String;
}

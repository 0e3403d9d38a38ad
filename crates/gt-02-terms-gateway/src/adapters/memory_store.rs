//! In-memory terms store.

use crate::ports::outbound::{StoreError, TermsStore};
use parking_lot::RwLock;

/// Keeps the current terms in process memory.
#[derive(Debug, Default)]
pub struct InMemoryTermsStore {
    content: RwLock<Option<String>>,
}

impl InMemoryTermsStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `content`.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: RwLock::new(Some(content.into())),
        }
    }
}

#[async_trait::async_trait]
impl TermsStore for InMemoryTermsStore {
    async fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.content.read().clone())
    }

    async fn save(&self, content: &str) -> Result<(), StoreError> {
        *self.content.write() = Some(content.to_string());
        Ok(())
    }
}

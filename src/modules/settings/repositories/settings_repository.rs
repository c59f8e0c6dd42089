use async_trait::async_trait;

use crate::core::Result;

/// Read seam to the key/value settings store.
///
/// The store itself, and any response caching in front of it, belongs to the
/// persistence collaborator. An absent key is `Ok(None)`, never an error;
/// resolving defaults for recognized codes happens in the typed resolver.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Look up the raw stored value for a setting code
    async fn find_value(&self, setting_code: &str) -> Result<Option<String>>;
}

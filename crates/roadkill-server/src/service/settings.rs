//! Settings service
//!
//! Read access to the singleton site settings saved during installation.

use roadkill_common::RoadkillError;
use roadkill_persistence::model::StoredSettings;
use roadkill_persistence::traits::SitePersistence;

/// Load the current site settings.
///
/// A missing settings document is an error here: once the install gate is
/// open the document must exist.
pub async fn current<S>(store: &S) -> anyhow::Result<StoredSettings>
where
    S: SitePersistence + ?Sized,
{
    match store.settings_find().await? {
        Some(stored) => Ok(stored),
        None => Err(RoadkillError::Settings("site settings have not been saved".to_string()).into()),
    }
}

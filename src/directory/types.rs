use async_trait::async_trait;

use crate::error::Result;
use crate::zone::ZoneRecord;

/// Source of truth for the zones visible to the account.
///
/// Implementations return the complete current listing. If the backend pages
/// its results, every page must be drained before returning.
#[async_trait]
pub trait ZoneDirectory {
    async fn list_zones(&self) -> Result<Vec<ZoneRecord>>;
}

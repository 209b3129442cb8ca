use crate::domain::catalogue::Catalogue;
use async_trait::async_trait;

/// Source of the phrase catalogue.
/// Abstracts the backing storage so services can be wired against fixed
/// in-memory catalogues in tests.
///
/// Implementations must never fail: an unreadable or malformed source
/// degrades to the empty catalogue so the service keeps answering with
/// empty results.
#[async_trait]
pub trait CatalogueRepository: Send + Sync {
    /// Load the current catalogue. Safe to call on every request.
    async fn load(&self) -> Catalogue;
}

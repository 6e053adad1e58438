//! Seam between the UI and whatever produces philosopher content.

use async_trait::async_trait;

use crate::model::{PhilosopherDetail, PhilosopherSummary};

use super::error::ContentFetchError;

/// Source of philosopher content.
///
/// Implementations perform one remote request per call and never cache:
/// calling twice may return different generated content.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Returns the name of this source for logging.
    fn name(&self) -> &'static str;

    /// Fetch the list of philosopher summaries.
    async fn fetch_summary_list(&self) -> Result<Vec<PhilosopherSummary>, ContentFetchError>;

    /// Fetch biography, works, quotes and ideas for `summary`, merged onto it.
    async fn fetch_detail(
        &self,
        summary: &PhilosopherSummary,
    ) -> Result<PhilosopherDetail, ContentFetchError>;
}

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::SalaryEntry;

/// Something that can list the most recent salary entries.
///
/// Implementations return entries in the order the API lists them and map
/// every failure onto one of the recoverable `AppError::Source*` variants.
#[async_trait]
pub trait SalarySource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Fetch the first page of entries
    async fn fetch_entries(&self) -> AppResult<Vec<SalaryEntry>>;
}

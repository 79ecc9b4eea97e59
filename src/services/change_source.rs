use async_trait::async_trait;

use crate::domain::change::ChangeRecord;
use crate::error::AppResult;

#[async_trait]
pub trait ChangeSourceService: Send + Sync {
    /// Most recent change on the server, submitted or pending.
    async fn fetch_latest(&self) -> AppResult<ChangeRecord>;
    async fn server_info(&self) -> AppResult<String>;
}

use async_trait::async_trait;

use crate::domain::change::ChangeRecord;
use crate::error::AppResult;

#[async_trait]
pub trait NotifierService: Send + Sync {
    async fn notify(&self, record: &ChangeRecord) -> AppResult<()>;
}

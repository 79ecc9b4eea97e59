use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{ChangeSourceService, NotifierService};

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub change_source: Arc<dyn ChangeSourceService>,
    pub notifier: Arc<dyn NotifierService>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        change_source: Arc<dyn ChangeSourceService>,
        notifier: Arc<dyn NotifierService>,
    ) -> Self {
        Self {
            config,
            change_source,
            notifier,
        }
    }
}

use crate::{config::AppConfig, db::DbPool, services::bot::BotService};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: DbPool,
    pub bot: BotService,
}

impl AppState {
    pub fn new(config: AppConfig, db: DbPool, bot: BotService) -> Self {
        Self { config, db, bot }
    }
}

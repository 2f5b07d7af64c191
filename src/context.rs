use std::sync::Arc;

use crate::{
    config::Config,
    management::{OperationGate, SessionStore},
    telegram::Bot,
};

/// Process-wide state shared by every update handler.
///
/// One instance is built at startup and cloned into each spawned handler
/// task; all fields are either immutable or internally shared, so clones
/// are cheap and always observe the same state.
#[derive(Clone)]
pub struct Context {
    pub config: Arc<Config>,
    pub bot: Bot,
    pub session: SessionStore,
    pub gate: OperationGate,
}

impl Context {
    pub fn new(config: Config) -> Self {
        let bot = Bot::new(&config.telegram_api_url, &config.bot_token);
        Context {
            config: Arc::new(config),
            bot,
            session: SessionStore::new(),
            gate: OperationGate::new(),
        }
    }
}

use std::sync::Arc;

use shufbot::{config::Config, context::Context, error, handlers, info};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("{e}"),
    };

    info!("Configuration loaded");
    let ctx = Arc::new(Context::new(config));
    handlers::run(ctx).await;
}

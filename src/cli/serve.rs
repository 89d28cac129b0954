use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    config::Config,
    error, info,
    server::{AppState, bind, start_api_server},
};

pub async fn serve() {
    let config = match Config::from_env() {
        Ok(c) => Arc::new(c),
        Err(e) => error!("Cannot load configuration. Err: {}", e),
    };

    let listener = match bind(&config.server_address).await {
        Ok(l) => l,
        Err(e) => error!("Cannot listen on {}. Err: {}", config.server_address, e),
    };

    info!("Listening on http://{}", config.server_address);

    let state = AppState {
        config,
        grant: Arc::new(Mutex::new(None)),
    };

    if let Err(e) = start_api_server(listener, state).await {
        error!("Server stopped. Err: {}", e);
    }
}

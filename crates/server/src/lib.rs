//! Clarify HTTP Server
//!
//! Actix-web REST API exposing the simplification endpoint

pub mod routes;
pub mod state;
pub mod types;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use clarify_common::{AppConfig, Result};
use tracing::info;
use tracing_actix_web::TracingLogger;

use crate::state::AppState;

/// Start the HTTP server and block until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_address = config.server_bind_address();
    let state = Arc::new(AppState::from_config(config)?);

    info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        // The caller is a browser extension; any page origin may post here
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(state.clone()))
            .service(routes::simplify::simplify)
            .service(routes::health::health)
    })
    .bind(bind_address)?
    .run()
    .await?;

    Ok(())
}

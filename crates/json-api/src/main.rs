//! Ristoro JSON API Server

use std::{process, sync::Arc};

use salvo::{
    affix_state::inject,
    catch_panic::CatchPanic,
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ristoro_app::{
    auth::{IdentityConfig, RemoteIdentityProvider},
    blobs::FsBlobStore,
    context::AppContext,
    payments::{StripeConfig, StripeGateway},
};

use crate::{config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod auth;
mod carts;
mod config;
mod envelope;
mod extensions;
mod healthcheck;
mod menu;
mod orders;
mod payments;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Ristoro JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.log_level)),
        )
        .init();

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let identity = Arc::new(RemoteIdentityProvider::new(IdentityConfig {
        addr: config.identity.addr,
    }));

    let blobs = Arc::new(FsBlobStore::new(
        config.media.media_root,
        config.media.media_base_url,
    ));

    let gateway = Arc::new(StripeGateway::new(StripeConfig {
        secret_key: config.payments.stripe_secret_key,
        api_base: config.payments.stripe_api_base,
    }));

    let app = match AppContext::from_database_url(
        &config.database.database_url,
        identity,
        blobs,
        gateway,
        config.payments.currency,
    )
    .await
    {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(app)))
        .push(router::build());

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}

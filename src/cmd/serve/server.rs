// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::PathBuf;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use tokio::time::sleep;

use crate::cmd::serve::get::deck_handler;
use crate::cmd::serve::get::index_handler;
use crate::cmd::serve::get::not_found_handler;
use crate::cmd::serve::get::script_handler;
use crate::cmd::serve::get::stylesheet_handler;
use crate::cmd::serve::post::action_handler;
use crate::cmd::serve::state::ServerState;
use crate::error::Fallible;
use crate::registry::Registry;

pub struct ServeConfig {
    /// The directory holding the deck files.
    pub directory: PathBuf,
    pub host: String,
    pub port: u16,
    /// Whether to open the deck list in a browser once the server is up.
    pub open_browser: bool,
}

pub async fn start_server(config: ServeConfig) -> Fallible<()> {
    let registry = Registry::load(&config.directory)?;
    log::info!(
        "Loaded {} decks with {} cards from {}.",
        registry.len(),
        registry.card_count(),
        registry.directory().display()
    );

    let app = router(ServerState::new(registry));
    let bind = format!("{}:{}", config.host, config.port);

    if config.open_browser {
        // Start a separate task to open the browser.
        let url = format!("http://{bind}/");
        let bind = bind.clone();
        tokio::spawn(async move {
            loop {
                if let Ok(stream) = TcpStream::connect(&bind).await {
                    drop(stream);
                    break;
                }
                sleep(Duration::from_millis(1)).await;
            }
            if let Err(e) = open::that(&url) {
                log::error!("Failed to open {url}: {e}");
            }
        });
    }

    log::debug!("Starting server on {bind}");
    let listener = TcpListener::bind(&bind).await?;
    println!("Serving decks on http://{bind}/");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

pub fn router(state: ServerState) -> Router {
    let app = Router::new();
    let app = app.route("/", get(index_handler));
    let app = app.route("/script.js", get(script_handler));
    let app = app.route("/style.css", get(stylesheet_handler));
    let app = app.route("/{deck_id}", get(deck_handler).post(action_handler));
    let app = app.fallback(not_found_handler);
    app.with_state(state)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("Shutting down."),
        Err(e) => {
            log::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    }
}

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

use axum::extract::Path;
use axum::extract::State;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::Uri;
use axum::http::header::CACHE_CONTROL;
use axum::http::header::CONTENT_TYPE;
use axum::response::Html;

use crate::cmd::serve::state::ServerState;
use crate::cmd::serve::view::index_page;
use crate::cmd::serve::view::not_found_page;
use crate::cmd::serve::view::study_page;
use crate::session::Session;

pub async fn index_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let html = index_page(&state.registry);
    (StatusCode::OK, Html(html.into_string()))
}

/// Every visit starts the deck over with a freshly shuffled session.
pub async fn deck_handler(
    State(state): State<ServerState>,
    Path(deck_id): Path<String>,
    uri: Uri,
) -> (StatusCode, Html<String>) {
    let Some(deck) = state.registry.get(&deck_id) else {
        return not_found(uri.path());
    };
    log::debug!("Starting session for '{deck_id}' with {} cards.", deck.len());
    let session = Session::shuffled(deck.len());
    let html = study_page(deck, &session);
    state.sessions().insert(deck_id, session);
    (StatusCode::OK, Html(html.into_string()))
}

pub async fn not_found_handler(uri: Uri) -> (StatusCode, Html<String>) {
    not_found(uri.path())
}

pub fn not_found(path: &str) -> (StatusCode, Html<String>) {
    log::debug!("Not found: {path}");
    (
        StatusCode::NOT_FOUND,
        Html(not_found_page(path).into_string()),
    )
}

pub async fn script_handler() -> (StatusCode, [(HeaderName, &'static str); 1], &'static str) {
    (
        StatusCode::OK,
        [(CONTENT_TYPE, "text/javascript")],
        include_str!("script.js"),
    )
}

pub async fn stylesheet_handler() -> (StatusCode, [(HeaderName, &'static str); 2], &'static [u8]) {
    let bytes = include_bytes!("style.css");
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/css"),
            (CACHE_CONTROL, "public, max-age=604800, immutable"),
        ],
        bytes,
    )
}

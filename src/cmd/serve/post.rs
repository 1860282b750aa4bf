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

use axum::Form;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::Uri;
use axum::response::Html;
use serde::Deserialize;

use crate::cmd::serve::get::not_found;
use crate::cmd::serve::state::ServerState;
use crate::cmd::serve::view::study_page;
use crate::session::Action;
use crate::session::Session;

#[derive(Deserialize)]
pub struct FormData {
    action: Action,
}

pub async fn action_handler(
    State(state): State<ServerState>,
    Path(deck_id): Path<String>,
    uri: Uri,
    Form(form): Form<FormData>,
) -> (StatusCode, Html<String>) {
    let Some(deck) = state.registry.get(&deck_id) else {
        return not_found(uri.path());
    };
    let mut sessions = state.sessions();
    let session = sessions
        .entry(deck_id)
        .or_insert_with(|| Session::shuffled(deck.len()));
    session.apply(form.action);
    log::debug!(
        "{:?} on '{}': {} waiting, {} learned.",
        form.action,
        deck.id(),
        session.to_learn_count(),
        session.learned_count()
    );
    let html = study_page(deck, session);
    (StatusCode::OK, Html(html.into_string()))
}

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

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use crate::registry::Registry;
use crate::session::Session;

#[derive(Clone)]
pub struct ServerState {
    /// Loaded once at startup and never modified.
    pub registry: Arc<Registry>,
    /// The current session of each deck, keyed by deck identifier.
    pub sessions: Arc<Mutex<HashMap<String, Session>>>,
}

impl ServerState {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: Arc::new(registry),
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn sessions(&self) -> MutexGuard<'_, HashMap<String, Session>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

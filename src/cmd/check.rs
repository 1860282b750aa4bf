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

use std::path::Path;

use crate::error::Fallible;
use crate::registry::Registry;

pub fn check_decks(directory: &Path) -> Fallible<()> {
    let registry = Registry::load(directory)?;
    for deck in registry.decks() {
        if deck.is_empty() {
            log::warn!("Deck '{}' has no cards.", deck.id());
        }
    }
    println!(
        "ok: {} decks, {} cards.",
        registry.len(),
        registry.card_count()
    );
    Ok(())
}

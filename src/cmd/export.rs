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

use serde::Serialize;

use crate::error::Fallible;
use crate::registry::Registry;
use crate::types::deck::Deck;

pub fn export_decks(directory: &Path) -> Fallible<()> {
    let registry = Registry::load(directory)?;
    let export = get_export(&registry);
    let json: String = serde_json::to_string_pretty(&export)?;
    println!("{json}");
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Export<'a> {
    directory: String,
    decks: Vec<&'a Deck>,
}

fn get_export(registry: &Registry) -> Export<'_> {
    Export {
        directory: registry.directory().display().to_string(),
        decks: registry.decks().collect(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use serde_json::json;

    use super::*;
    use crate::helper::create_deck_directory;

    #[test]
    fn test_export() -> Fallible<()> {
        let directory = create_deck_directory(&[(
            "GermanNouns.txt",
            "der Hund\nFLIP\nthe dog\nNEW\ndie Katze\n.\nfeminine\nFLIP\nthe cat",
        )])?;
        let registry = Registry::load(directory.path())?;
        let export = get_export(&registry);
        let value: Value = serde_json::to_value(&export)?;
        assert_eq!(
            value["decks"],
            json!([{
                "id": "GermanNouns",
                "displayName": "German Nouns",
                "cards": [
                    { "front": "der Hund", "back": "the dog" },
                    { "front": "die Katze\n\nfeminine", "back": "the cat" }
                ]
            }])
        );
        Ok(())
    }

    #[test]
    fn test_export_non_existent_directory() {
        assert!(export_decks(Path::new("./derpherp")).is_err());
    }
}

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

use std::collections::BTreeMap;
use std::fs::read_to_string;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use walkdir::WalkDir;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::parser::parse_cards;
use crate::types::deck::Deck;
use crate::types::deck::deck_id;

const DECK_EXTENSION: &str = "txt";

/// Every deck found in a directory, keyed by deck identifier.
pub struct Registry {
    directory: PathBuf,
    decks: BTreeMap<String, Deck>,
}

impl Registry {
    /// Loads every `.txt` file directly inside `directory`. Fails if the
    /// directory or any deck file cannot be read, or if two files map to the
    /// same deck identifier.
    pub fn load(directory: &Path) -> Fallible<Self> {
        if !directory.exists() {
            return fail("directory does not exist.");
        }
        if !directory.is_dir() {
            return fail("not a directory.");
        }
        let directory = directory.canonicalize()?;

        log::debug!("Loading decks from {}...", directory.display());
        let start = Instant::now();
        let mut decks: BTreeMap<String, Deck> = BTreeMap::new();
        let mut sources: BTreeMap<String, PathBuf> = BTreeMap::new();
        for entry in WalkDir::new(&directory)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() || !is_deck_file(path) {
                continue;
            }
            let Some(id) = path.file_name().and_then(|name| name.to_str()).map(deck_id) else {
                log::warn!("Skipping {}: file name is not valid UTF-8.", path.display());
                continue;
            };
            if id.is_empty() {
                log::warn!("Skipping {}: empty deck name.", path.display());
                continue;
            }
            if let Some(existing) = sources.get(id) {
                return fail(&format!(
                    "duplicate deck identifier '{id}': {} and {}.",
                    existing.display(),
                    path.display()
                ));
            }
            let deck = load_deck(id, path)?;
            log::debug!("Deck '{id}' has {} cards.", deck.len());
            sources.insert(id.to_string(), path.to_path_buf());
            decks.insert(id.to_string(), deck);
        }
        let duration = start.elapsed().as_millis();
        log::debug!("{} decks loaded in {duration}ms.", decks.len());

        Ok(Self { directory, decks })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn get(&self, id: &str) -> Option<&Deck> {
        self.decks.get(id)
    }

    /// Decks in identifier order.
    pub fn decks(&self) -> impl Iterator<Item = &Deck> {
        self.decks.values()
    }

    pub fn len(&self) -> usize {
        self.decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    pub fn card_count(&self) -> usize {
        self.decks.values().map(Deck::len).sum()
    }
}

fn is_deck_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == DECK_EXTENSION)
}

fn load_deck(id: &str, path: &Path) -> Fallible<Deck> {
    let content = read_to_string(path)
        .map_err(|e| ErrorReport::new(&format!("failed to read {}: {e}", path.display())))?;
    Ok(Deck::new(id, parse_cards(&content)))
}

#[cfg(test)]
mod tests {
    use std::fs::create_dir;
    use std::fs::write;

    use super::*;
    use crate::helper::create_tmp_directory;

    #[test]
    fn test_non_existent_directory() {
        let result = Registry::load(Path::new("./derpherp"));
        assert!(result.is_err());
        let err = result.err().unwrap();
        assert_eq!(err.to_string(), "error: directory does not exist.");
    }

    #[test]
    fn test_file_instead_of_directory() -> Fallible<()> {
        let tmp = create_tmp_directory()?;
        let path = tmp.path().join("Deck.txt");
        write(&path, "q\nFLIP\na")?;
        assert!(Registry::load(&path).is_err());
        Ok(())
    }

    #[test]
    fn test_empty_directory() -> Fallible<()> {
        let tmp = create_tmp_directory()?;
        let directory = tmp.path();
        let registry = Registry::load(directory)?;
        assert!(registry.is_empty());
        assert_eq!(registry.card_count(), 0);
        Ok(())
    }

    #[test]
    fn test_load_decks() -> Fallible<()> {
        let tmp = create_tmp_directory()?;
        let directory = tmp.path();
        write(
            directory.join("GermanNouns.txt"),
            "der Hund\nFLIP\nthe dog\nNEW\ndie Katze\nFLIP\nthe cat",
        )?;
        write(directory.join("Capitals.txt"), "France\nFLIP\nParis")?;
        let registry = Registry::load(directory)?;
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.card_count(), 3);

        let ids: Vec<&str> = registry.decks().map(Deck::id).collect();
        assert_eq!(ids, vec!["Capitals", "GermanNouns"]);

        let deck = registry.get("GermanNouns").unwrap();
        assert_eq!(deck.display_name(), "German Nouns");
        assert_eq!(deck.cards()[1].front(), "die Katze");
        assert_eq!(deck.cards()[1].back(), "the cat");
        Ok(())
    }

    #[test]
    fn test_unknown_deck() -> Fallible<()> {
        let tmp = create_tmp_directory()?;
        let directory = tmp.path();
        write(directory.join("Capitals.txt"), "France\nFLIP\nParis")?;
        let registry = Registry::load(directory)?;
        assert!(registry.get("Nope").is_none());
        assert!(registry.get("capitals").is_none());
        Ok(())
    }

    #[test]
    fn test_ignores_other_files_and_subdirectories() -> Fallible<()> {
        let tmp = create_tmp_directory()?;
        let directory = tmp.path();
        write(directory.join("notes.md"), "q\nFLIP\na")?;
        create_dir(directory.join("nested"))?;
        write(directory.join("nested").join("Hidden.txt"), "q\nFLIP\na")?;
        create_dir(directory.join("Folder.txt"))?;
        write(directory.join("Visible.txt"), "q\nFLIP\na")?;
        let registry = Registry::load(directory)?;
        let ids: Vec<&str> = registry.decks().map(Deck::id).collect();
        assert_eq!(ids, vec!["Visible"]);
        Ok(())
    }

    #[test]
    fn test_duplicate_identifier() -> Fallible<()> {
        let tmp = create_tmp_directory()?;
        let directory = tmp.path();
        write(directory.join("Spanish.verbs.txt"), "q\nFLIP\na")?;
        write(directory.join("Spanish.nouns.txt"), "q\nFLIP\na")?;
        let result = Registry::load(directory);
        assert!(result.is_err());
        let err = result.err().unwrap();
        assert!(err.to_string().contains("duplicate deck identifier 'Spanish'"));
        Ok(())
    }

    #[test]
    fn test_empty_deck_file() -> Fallible<()> {
        let tmp = create_tmp_directory()?;
        let directory = tmp.path();
        write(directory.join("Empty.txt"), "")?;
        let registry = Registry::load(directory)?;
        let deck = registry.get("Empty").unwrap();
        assert!(deck.is_empty());
        Ok(())
    }
}

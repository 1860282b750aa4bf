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

use serde::Serialize;

use crate::types::card::Card;

/// A named, ordered collection of cards parsed from one deck file.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    id: String,
    display_name: String,
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(id: impl Into<String>, cards: Vec<Card>) -> Self {
        let id: String = id.into();
        let display_name = display_name(&id);
        Self {
            id,
            display_name,
            cards,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The deck identifier is everything before the first `.` of the file name,
/// so `Spanish.verbs.txt` is the deck `Spanish`.
pub fn deck_id(file_name: &str) -> &str {
    match file_name.split_once('.') {
        Some((id, _)) => id,
        None => file_name,
    }
}

/// Splits camel case identifiers into words: `MeinDeck` becomes `Mein Deck`.
/// Only a lowercase letter followed by an uppercase letter is a boundary, so
/// acronyms stay intact.
pub fn display_name(id: &str) -> String {
    let mut spaced = String::with_capacity(id.len() + 4);
    let mut prev: Option<char> = None;
    for c in id.chars() {
        if let Some(p) = prev {
            if p.is_ascii_lowercase() && c.is_ascii_uppercase() {
                spaced.push(' ');
            }
        }
        spaced.push(c);
        prev = Some(c);
    }
    collapse_whitespace_runs(&spaced).trim().to_string()
}

/// Replaces every run of two or more whitespace characters with one space.
/// A lone whitespace character is kept as is.
fn collapse_whitespace_runs(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut run = String::new();
    for c in text.chars() {
        if c.is_whitespace() {
            run.push(c);
            continue;
        }
        flush_run(&mut collapsed, &mut run);
        collapsed.push(c);
    }
    flush_run(&mut collapsed, &mut run);
    collapsed
}

fn flush_run(out: &mut String, run: &mut String) {
    if run.chars().count() > 1 {
        out.push(' ');
    } else {
        out.push_str(run);
    }
    run.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_camel_case() {
        assert_eq!(display_name("MeinDeck"), "Mein Deck");
        assert_eq!(display_name("spanishVerbsPresent"), "spanish Verbs Present");
    }

    #[test]
    fn test_display_name_uppercase_run() {
        assert_eq!(display_name("ABDeck"), "ABDeck");
        assert_eq!(display_name("myHTTPNotes"), "my HTTPNotes");
    }

    #[test]
    fn test_display_name_collapses_whitespace() {
        assert_eq!(display_name("  Mein   Deck "), "Mein Deck");
        assert_eq!(display_name("mein Deck"), "mein Deck");
        assert_eq!(display_name("mein \t Deck"), "mein Deck");
    }

    #[test]
    fn test_display_name_keeps_single_tab() {
        assert_eq!(display_name("mein\tDeck"), "mein\tDeck");
        assert_eq!(display_name("\tMeinDeck"), "Mein Deck");
    }

    #[test]
    fn test_deck_id() {
        assert_eq!(deck_id("MeinDeck.txt"), "MeinDeck");
        assert_eq!(deck_id("Spanish.verbs.txt"), "Spanish");
        assert_eq!(deck_id("README"), "README");
    }

    #[test]
    fn test_new_deck() {
        let deck = Deck::new("GermanNouns", vec![Card::new("der Hund", "the dog")]);
        assert_eq!(deck.id(), "GermanNouns");
        assert_eq!(deck.display_name(), "German Nouns");
        assert_eq!(deck.len(), 1);
        assert!(!deck.is_empty());
    }
}

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

use std::mem::take;

use crate::types::card::Card;

const NEW_CARD: &str = "NEW";
const FLIP: &str = "FLIP";
const BLANK_MARKER: &str = ".";
const DECORATION: [char; 4] = ['-', '=', '#', '_'];

#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    /// Ends the current card.
    NewCard,
    /// Ends the front side of the current card.
    Flip,
    /// A `.` line: an empty line kept inside the current side.
    Blank,
    /// An empty line. Dropped.
    Empty,
    Text(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    let line = line.trim();
    if line.is_empty() {
        return Line::Empty;
    }
    let bare: String = line.chars().filter(|c| !DECORATION.contains(c)).collect();
    let bare = bare.trim();
    if bare.eq_ignore_ascii_case(NEW_CARD) {
        Line::NewCard
    } else if bare.eq_ignore_ascii_case(FLIP) {
        Line::Flip
    } else if line == BLANK_MARKER {
        Line::Blank
    } else {
        Line::Text(line)
    }
}

#[derive(Default)]
struct CardBuilder {
    front: Vec<String>,
    current: Vec<String>,
}

impl CardBuilder {
    fn push(&mut self, line: &str) {
        self.current.push(line.to_string());
    }

    fn flip(&mut self) {
        self.front = take(&mut self.current);
    }

    /// Everything since the last flip is the back. Returns `None` when
    /// neither side has a single line.
    fn finish(&mut self) -> Option<Card> {
        let front = take(&mut self.front);
        let back = take(&mut self.current);
        if front.is_empty() && back.is_empty() {
            None
        } else {
            Some(Card::new(front.join("\n"), back.join("\n")))
        }
    }
}

/// Parses the text of a deck file. Never fails: text without any separators
/// becomes at most one card with an empty front.
pub fn parse_cards(content: &str) -> Vec<Card> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut cards = Vec::new();
    let mut builder = CardBuilder::default();
    // A bare `\r` ends a line too.
    for line in content.split(['\n', '\r']) {
        match classify(line) {
            Line::NewCard => cards.extend(builder.finish()),
            Line::Flip => builder.flip(),
            Line::Blank => builder.push(""),
            Line::Empty => {}
            Line::Text(text) => builder.push(text),
        }
    }
    cards.extend(builder.finish());
    cards
}

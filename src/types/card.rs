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

use maud::Markup;
use maud::PreEscaped;
use serde::Serialize;

use crate::markdown::markdown_to_html;

/// A two-sided flashcard. Both sides are Markdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    front: String,
    back: String,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back(&self) -> &str {
        &self.back
    }

    pub fn html_front(&self) -> Markup {
        PreEscaped(markdown_to_html(&self.front))
    }

    pub fn html_back(&self) -> Markup {
        PreEscaped(markdown_to_html(&self.back))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_sides() {
        let card = Card::new("What is *2+2*?", "4");
        assert_eq!(
            card.html_front().into_string(),
            "<p>What is <em>2+2</em>?</p>\n"
        );
        assert_eq!(card.html_back().into_string(), "<p>4</p>\n");
    }
}

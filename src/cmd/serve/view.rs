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
use maud::html;
use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;
use percent_encoding::utf8_percent_encode;

use crate::cmd::serve::template::page_template;
use crate::registry::Registry;
use crate::session::Session;
use crate::session::SessionState;
use crate::types::card::Card;
use crate::types::deck::Deck;

const TITLE: &str = "Karteikarten";

/// Characters left alone when a deck identifier is used as a path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub fn deck_href(id: &str) -> String {
    format!("/{}", utf8_percent_encode(id, PATH_SEGMENT))
}

pub fn index_page(registry: &Registry) -> Markup {
    let body = html! {
        div.home {
            h1 { (TITLE) }
            @if registry.is_empty() {
                p.empty { "No decks found in " (registry.directory().display().to_string()) "." }
            } @else {
                ul.decks {
                    @for deck in registry.decks() {
                        li {
                            a href=(deck_href(deck.id())) { (deck.display_name()) }
                            " "
                            span.count { (card_count_label(deck.len())) }
                        }
                    }
                }
            }
        }
    };
    page_template(TITLE, body)
}

/// The study page: waiting cards on the left, the active card in the middle,
/// learned cards on the right.
pub fn study_page(deck: &Deck, session: &Session) -> Markup {
    let cards = deck.cards();
    let state = session.state();
    let action = deck_href(deck.id());
    let disabled = session.active().is_none();
    let progress = format!("{} / {}", session.learned_count(), session.total());

    // The next card sits at the bottom of the left pile, next to the active
    // card. The most recently learned card sits at the bottom of the right
    // pile.
    let waiting: Vec<usize> = session.to_learn().rev().collect();

    let body = html! {
        a.home-link href="/" { "Home" }
        div.study {
            div.header {
                h1 { (deck.display_name()) }
                div.progress { (progress) }
            }
            div.table {
                div.pile.to-learn {
                    h2 { "To Learn (" (session.to_learn_count()) ")" }
                    (pile(cards, &waiting, Side::Front))
                }
                div.middle {
                    div.display.flipped[state == SessionState::Flipped] {
                        @match (session.active(), state) {
                            (Some(index), SessionState::Flipped) => {
                                div.card.active {
                                    div.back.rich-text { (cards[index].html_back()) }
                                }
                            }
                            (Some(index), _) => {
                                div.card.active {
                                    div.front.rich-text { (cards[index].html_front()) }
                                }
                            }
                            (None, SessionState::Empty) => {
                                div.finished { "This deck has no cards." }
                            }
                            (None, _) => {
                                div.finished { "All cards learned." }
                            }
                        }
                    }
                    div.controls {
                        form action=(action) method="post" {
                            input #flip type="submit" name="action" value="Flip" title="Turn the card over. Shortcut: space or f." disabled[disabled];
                            input #skip type="submit" name="action" value="Skip" title="Put the card back. Shortcut: s." disabled[disabled];
                            input #done type="submit" name="action" value="Done" title="Mark the card as learned. Shortcut: d." disabled[disabled];
                        }
                    }
                }
                div.pile.learned {
                    h2 { "Learned (" (session.learned_count()) ")" }
                    (pile(cards, session.learned(), Side::Back))
                }
            }
        }
    };
    page_template(deck.display_name(), body)
}

pub fn not_found_page(path: &str) -> Markup {
    let body = html! {
        h1 { "404 Not Found" }
        p { "The requested URL " code { (path) } " was not found on this server." }
        a.home-link href="/" { "Home" }
    };
    page_template("404 Not Found", body)
}

#[derive(Clone, Copy)]
enum Side {
    Front,
    Back,
}

/// Renders a pile of cards. Only the last card shows any content; the rest
/// are drawn as a stack.
fn pile(cards: &[Card], indices: &[usize], side: Side) -> Markup {
    html! {
        div.stack {
            @for (position, &index) in indices.iter().enumerate() {
                @if position + 1 == indices.len() {
                    div.card.top data-card=(index) {
                        @match side {
                            Side::Front => {
                                div.front.rich-text { (cards[index].html_front()) }
                            }
                            Side::Back => {
                                div.back.rich-text { (cards[index].html_back()) }
                            }
                        }
                    }
                } @else {
                    div.card data-card=(index) {}
                }
            }
        }
    }
}

fn card_count_label(count: usize) -> String {
    match count {
        1 => "(1 card)".to_string(),
        n => format!("({n} cards)"),
    }
}

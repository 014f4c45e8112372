//! List: an ordered column of cards within a board.
//!
//! Structural operations never renumber implicitly. Callers invoke
//! [`List::update_card_positions`] after any change to order or membership;
//! single-field edits stay free of renumbering cost.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::card::{Card, CardId};
use crate::order::{self, Positioned};

/// Unique identifier for a list.
pub type ListId = Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub title: String,
    #[serde(default)]
    pub cards: Vec<Card>,
    /// Index within the owning board after the last renumber.
    #[serde(default)]
    pub position: usize,
}

impl List {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(), title: title.into(), cards: Vec::new(), position: 0 }
    }

    /// Create a list pre-populated with `cards`, already renumbered.
    #[must_use]
    pub fn with_cards(title: impl Into<String>, cards: Vec<Card>) -> Self {
        let mut list = Self::new(title);
        for card in cards {
            list.add_card(card);
        }
        list.update_card_positions();
        list
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.card_index(id).is_some()
    }

    /// Append a card. Rejected (returns `false`) if a card with the same id is
    /// already in the list.
    pub fn add_card(&mut self, card: Card) -> bool {
        if self.contains(&card.id) {
            return false;
        }
        self.cards.push(card);
        true
    }

    /// Insert a card before `index`. Any `index >= len` appends.
    pub fn insert_card(&mut self, card: Card, index: usize) -> bool {
        if self.contains(&card.id) {
            return false;
        }
        if index >= self.cards.len() {
            self.cards.push(card);
        } else {
            self.cards.insert(index, card);
        }
        true
    }

    /// Remove the card with `id`, returning it. `None` if absent.
    pub fn remove_card(&mut self, id: &CardId) -> Option<Card> {
        let index = self.card_index(id)?;
        Some(self.cards.remove(index))
    }

    /// Take the card at `index` out of the list.
    pub fn take_card_at(&mut self, index: usize) -> Option<Card> {
        if index >= self.cards.len() {
            return None;
        }
        Some(self.cards.remove(index))
    }

    /// Reposition the card at `from` to `to` in place. No-op when either index
    /// is out of range or they are equal.
    pub fn move_card(&mut self, from: usize, to: usize) -> bool {
        order::rotate_move(&mut self.cards, from, to)
    }

    #[must_use]
    pub fn find_card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == *id)
    }

    pub fn find_card_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == *id)
    }

    #[must_use]
    pub fn card_index(&self, id: &CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == *id)
    }

    /// Rewrite each card's `position` from its index.
    pub fn update_card_positions(&mut self) {
        order::renumber(&mut self.cards);
    }

    /// True when every card's stored position equals its index.
    #[must_use]
    pub fn positions_consistent(&self) -> bool {
        order::positions_consistent(&self.cards)
    }
}

impl Positioned for List {
    fn position(&self) -> usize {
        self.position
    }

    fn set_position(&mut self, position: usize) {
        self.position = position;
    }
}

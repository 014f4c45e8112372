//! Board: the top-level container owning an ordered sequence of lists.
//!
//! DESIGN
//! ======
//! A board exclusively owns its lists and each list exclusively owns its
//! cards. Nothing holds a back-reference to its owner; finding the list that
//! owns a card is a linear walk. Every structural mutation bumps `updated_at`
//! so persistence can tell which boards changed.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::card::{Card, CardId};
use crate::drag::DragPayload;
use crate::dropzone::Level;
use crate::list::{List, ListId};
use crate::order;
use crate::reorder::{self, AppliedMove, MoveError};

/// Unique identifier for a board.
pub type BoardId = Uuid;

pub(crate) fn now_ms() -> i64 {
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(dur.as_millis()).unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub lists: Vec<List>,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
    /// Milliseconds since the Unix epoch; bumped by every structural mutation.
    pub updated_at: i64,
    #[serde(default)]
    pub archived: bool,
}

impl Board {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title)
    }

    /// Create a board with an id chosen by the caller (the store assigns ids).
    #[must_use]
    pub fn with_id(id: BoardId, title: impl Into<String>) -> Self {
        let now = now_ms();
        Self {
            id,
            title: title.into(),
            description: None,
            lists: Vec::new(),
            created_at: now,
            updated_at: now,
            archived: false,
        }
    }

    /// Record a structural mutation.
    pub fn touch(&mut self) {
        self.updated_at = now_ms().max(self.updated_at);
    }

    // --- List operations ---

    /// Append a new empty list and return it.
    pub fn add_list(&mut self, title: impl Into<String>) -> &mut List {
        self.push_list(List::new(title))
    }

    /// Append an existing list (e.g. one built with [`List::with_cards`]).
    pub fn push_list(&mut self, mut list: List) -> &mut List {
        let index = self.lists.len();
        list.position = index;
        self.lists.push(list);
        self.touch();
        &mut self.lists[index]
    }

    /// Insert a new empty list before `index`. Any `index >= len` appends.
    pub fn insert_list(&mut self, title: impl Into<String>, index: usize) -> &mut List {
        if index >= self.lists.len() {
            return self.add_list(title);
        }
        self.lists.insert(index, List::new(title));
        self.update_list_positions();
        self.touch();
        &mut self.lists[index]
    }

    /// Remove the list with `id`, returning it with its cards.
    pub fn remove_list(&mut self, id: &ListId) -> Option<List> {
        let index = self.list_index(id)?;
        let removed = self.lists.remove(index);
        self.update_list_positions();
        self.touch();
        Some(removed)
    }

    /// Reposition the list at `from` to `to` in place and renumber. No-op when
    /// either index is out of range or they are equal.
    pub fn move_list(&mut self, from: usize, to: usize) -> bool {
        let moved = order::rotate_move(&mut self.lists, from, to);
        if moved {
            self.update_list_positions();
            self.touch();
        }
        moved
    }

    // --- Card operations ---
    //
    // Editing `lists[i]` directly bypasses `touch`; these keep `updated_at`
    // and card positions current.

    /// Append `card` to the list with `list_id`. Returns `false` when the list
    /// is missing or the card id is already on the board.
    pub fn add_card(&mut self, list_id: &ListId, card: Card) -> bool {
        let len = self.find_list(list_id).map_or(0, List::len);
        self.insert_card(list_id, card, len)
    }

    /// Insert `card` before `index` of the list with `list_id`. Any
    /// `index >= len` appends. Returns `false` when the list is missing or the
    /// card id is already on the board.
    pub fn insert_card(&mut self, list_id: &ListId, card: Card, index: usize) -> bool {
        if self.find_card(&card.id).is_some() {
            return false;
        }
        let Some(list) = self.find_list_mut(list_id) else {
            return false;
        };
        list.insert_card(card, index);
        list.update_card_positions();
        self.touch();
        true
    }

    /// Remove a card from whichever list holds it.
    pub fn remove_card(&mut self, card_id: &CardId) -> Option<Card> {
        let (list_index, _) = self.card_location(card_id)?;
        let list = &mut self.lists[list_index];
        let card = list.remove_card(card_id)?;
        list.update_card_positions();
        self.touch();
        Some(card)
    }

    /// Reposition the card at `from` to `to` within the list with `list_id`.
    /// No-op when the list is missing, either index is out of range, or they
    /// are equal.
    pub fn move_card_within(&mut self, list_id: &ListId, from: usize, to: usize) -> bool {
        let Some(list) = self.find_list_mut(list_id) else {
            return false;
        };
        if !list.move_card(from, to) {
            return false;
        }
        list.update_card_positions();
        self.touch();
        true
    }

    /// Rewrite each list's `position` from its index.
    pub fn update_list_positions(&mut self) {
        order::renumber(&mut self.lists);
    }

    /// Renumber lists and every list's cards.
    pub fn update_all_positions(&mut self) {
        self.update_list_positions();
        for list in &mut self.lists {
            list.update_card_positions();
        }
    }

    /// True when list positions and every list's card positions are consistent.
    #[must_use]
    pub fn positions_consistent(&self) -> bool {
        order::positions_consistent(&self.lists) && self.lists.iter().all(List::positions_consistent)
    }

    // --- Queries ---

    #[must_use]
    pub fn find_list(&self, id: &ListId) -> Option<&List> {
        self.lists.iter().find(|l| l.id == *id)
    }

    pub fn find_list_mut(&mut self, id: &ListId) -> Option<&mut List> {
        self.lists.iter_mut().find(|l| l.id == *id)
    }

    #[must_use]
    pub fn list_index(&self, id: &ListId) -> Option<usize> {
        self.lists.iter().position(|l| l.id == *id)
    }

    /// Find a card anywhere on the board together with the list that owns it.
    #[must_use]
    pub fn find_card(&self, id: &CardId) -> Option<(&List, &Card)> {
        self.lists
            .iter()
            .find_map(|list| list.find_card(id).map(|card| (list, card)))
    }

    /// Mutable access to a card anywhere on the board.
    pub fn find_card_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.lists.iter_mut().find_map(|list| list.find_card_mut(id))
    }

    /// `(list index, card index)` of a card.
    #[must_use]
    pub fn card_location(&self, id: &CardId) -> Option<(usize, usize)> {
        self.lists
            .iter()
            .enumerate()
            .find_map(|(li, list)| list.card_index(id).map(|ci| (li, ci)))
    }

    /// The item a drag payload currently refers to, if it still exists.
    ///
    /// Hosts use this to render the preview that follows the pointer.
    #[must_use]
    pub fn dragged_card(&self, payload: &DragPayload) -> Option<&Card> {
        if payload.level != Level::Card {
            return None;
        }
        self.find_list(&payload.origin_collection)?
            .cards
            .get(payload.origin_index)
    }

    /// Move a card addressed by id into `target_list` before slot `target_index`.
    ///
    /// Shares the reorder engine's same-list correction, so dropping a card
    /// into a later slot of its own list lands where the slot indicated.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] when the card or target list does not exist or
    /// the move would leave the card where it is. The board is untouched.
    pub fn move_card_to(
        &mut self,
        card_id: &CardId,
        target_list: &ListId,
        target_index: usize,
    ) -> Result<AppliedMove, MoveError> {
        let (list_index, card_index) = self.card_location(card_id).ok_or(MoveError::ItemNotFound(*card_id))?;
        let source_list = self.lists[list_index].id;
        reorder::move_card(self, source_list, card_index, *target_list, target_index)
    }

    #[must_use]
    pub fn total_card_count(&self) -> usize {
        self.lists.iter().map(List::len).sum()
    }

    #[must_use]
    pub fn list_count(&self) -> usize {
        self.lists.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

//! Board store. Owns every board, assigns ids, and tracks what changed.
//!
//! DESIGN
//! ======
//! The store is the single source of truth the rest of the system mutates in
//! place. It records which boards were modified since persistence last
//! drained them (`dirty`) and a queue of lifecycle events the host can drain
//! once per frame to refresh its views.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashSet;

use tracing::{info, warn};
use uuid::Uuid;

use crate::board::{Board, BoardId};
use crate::engine::DragEngine;
use crate::error::ErrorCode;
use crate::reorder::AppliedMove;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("board not found: {0}")]
    BoardNotFound(BoardId),
}

impl ErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::BoardNotFound(_) => "E_BOARD_NOT_FOUND",
        }
    }
}

/// Lifecycle notification for hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Created(BoardId),
    Deleted(BoardId),
    Modified(BoardId),
}

#[derive(Debug, Default)]
pub struct BoardStore {
    boards: Vec<Board>,
    /// Board ids modified since the last [`BoardStore::take_dirty`].
    dirty: HashSet<BoardId>,
    events: Vec<StoreEvent>,
}

impl BoardStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- CRUD ---

    /// Create an empty board with a fresh id.
    pub fn create(&mut self, title: &str) -> &mut Board {
        let mut id = Uuid::new_v4();
        while self.exists(&id) {
            id = Uuid::new_v4();
        }
        let index = self.boards.len();
        self.boards.push(Board::with_id(id, title));
        self.dirty.insert(id);
        self.events.push(StoreEvent::Created(id));
        info!(board_id = %id, title, "board created");
        &mut self.boards[index]
    }

    #[must_use]
    pub fn get(&self, id: &BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| b.id == *id)
    }

    pub fn get_mut(&mut self, id: &BoardId) -> Option<&mut Board> {
        self.boards.iter_mut().find(|b| b.id == *id)
    }

    /// Remove a board and return it.
    ///
    /// # Errors
    ///
    /// Returns `BoardNotFound` if no board has `id`.
    pub fn delete(&mut self, id: &BoardId) -> Result<Board, StoreError> {
        let index = self
            .boards
            .iter()
            .position(|b| b.id == *id)
            .ok_or(StoreError::BoardNotFound(*id))?;
        let board = self.boards.remove(index);
        self.dirty.remove(id);
        self.events.push(StoreEvent::Deleted(*id));
        info!(board_id = %id, "board deleted");
        Ok(board)
    }

    /// Run `f` against a board and record it as modified.
    ///
    /// # Errors
    ///
    /// Returns `BoardNotFound` if no board has `id`.
    pub fn modify<R>(&mut self, id: &BoardId, f: impl FnOnce(&mut Board) -> R) -> Result<R, StoreError> {
        let board = self.get_mut(id).ok_or(StoreError::BoardNotFound(*id))?;
        let out = f(board);
        self.mark_dirty(*id);
        Ok(out)
    }

    #[must_use]
    pub fn exists(&self, id: &BoardId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Replace all boards with a snapshot.
    ///
    /// A board whose id repeats an earlier one is skipped, as is any list or
    /// card whose id already appeared on the same board. Positions are
    /// renumbered. Every previous board is reported as `Deleted` and every
    /// loaded board as `Created`; nothing is marked dirty.
    pub fn load_snapshot(&mut self, boards: Vec<Board>) {
        for old in self.boards.drain(..) {
            self.events.push(StoreEvent::Deleted(old.id));
        }
        self.dirty.clear();
        let mut seen = HashSet::new();
        for mut board in boards {
            if !seen.insert(board.id) {
                warn!(board_id = %board.id, "duplicate board id in snapshot; skipping");
                continue;
            }
            let dropped = drop_repeated_ids(&mut board);
            if dropped > 0 {
                warn!(board_id = %board.id, dropped, "repeated list or card ids in snapshot; dropped");
            }
            board.update_all_positions();
            self.events.push(StoreEvent::Created(board.id));
            self.boards.push(board);
        }
        info!(count = self.boards.len(), "loaded board snapshot");
    }

    // --- Drag integration ---

    /// Apply the engine's pending move to a stored board.
    ///
    /// The pending move is consumed even when the board is missing. A move
    /// that mutated the board marks it dirty and emits `Modified`.
    ///
    /// # Errors
    ///
    /// Returns `BoardNotFound` if no board has `board_id`.
    pub fn apply_pending_move(
        &mut self,
        engine: &mut DragEngine,
        board_id: &BoardId,
    ) -> Result<Option<AppliedMove>, StoreError> {
        let Some(board) = self.get_mut(board_id) else {
            engine.discard_pending();
            return Err(StoreError::BoardNotFound(*board_id));
        };
        let applied = engine.apply_pending_move(board);
        if applied.is_some() {
            self.mark_dirty(*board_id);
        }
        Ok(applied)
    }

    // --- Dirty tracking ---

    /// Record a board as modified. Unknown ids are ignored. `Modified` is
    /// emitted once per dirty period, not once per mutation.
    pub fn mark_dirty(&mut self, id: BoardId) {
        if !self.exists(&id) {
            return;
        }
        if self.dirty.insert(id) {
            self.events.push(StoreEvent::Modified(id));
        }
    }

    #[must_use]
    pub fn is_dirty(&self, id: &BoardId) -> bool {
        self.dirty.contains(id)
    }

    /// Hand the dirty set to persistence and start a new one.
    pub fn take_dirty(&mut self) -> HashSet<BoardId> {
        std::mem::take(&mut self.dirty)
    }

    /// Drain queued lifecycle events in the order they happened.
    pub fn drain_events(&mut self) -> Vec<StoreEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Drop lists and cards whose id already appeared earlier on `board`.
/// Returns how many lists and cards were dropped.
fn drop_repeated_ids(board: &mut Board) -> usize {
    let mut list_ids = HashSet::new();
    let mut card_ids = HashSet::new();
    let lists_before = board.lists.len();
    board.lists.retain(|list| list_ids.insert(list.id));
    let mut dropped = lists_before - board.lists.len();
    for list in &mut board.lists {
        let cards_before = list.cards.len();
        list.cards.retain(|card| card_ids.insert(card.id));
        dropped += cards_before - list.cards.len();
    }
    dropped
}

//! Reorder engine. Applies a completed drag to the entity model.
//!
//! DESIGN
//! ======
//! A move is either within one collection or across two. Within a collection
//! the drop slot is translated into a final index (removing the source shifts
//! every later slot down by one) and the item is rotated into place. Across
//! collections the item is taken out of the source and inserted into the
//! target at the clamped slot. Lists within a board only ever take the first
//! path, and they share [`move_within`] with cards.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is detected before anything is mutated, so a rejected move
//! leaves the board exactly as it was. Callers at the frame boundary drop the
//! error after logging it; the user simply retries the gesture.

#[cfg(test)]
#[path = "reorder_test.rs"]
mod reorder_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::board::Board;
use crate::drag::PendingMove;
use crate::dropzone::Level;
use crate::error::ErrorCode;
use crate::list::ListId;
use crate::order::{self, Positioned};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("source collection not found: {0}")]
    SourceNotFound(Uuid),
    #[error("target collection not found: {0}")]
    TargetNotFound(Uuid),
    #[error("item not found: {0}")]
    ItemNotFound(Uuid),
    #[error("source index {index} out of range for collection of {len}")]
    SourceIndexOutOfRange { index: usize, len: usize },
    #[error("move leaves item at index {0}")]
    Degenerate(usize),
    #[error("item {0} already present in target collection")]
    DuplicateId(Uuid),
}

impl ErrorCode for MoveError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SourceNotFound(_) => "E_SOURCE_NOT_FOUND",
            Self::TargetNotFound(_) => "E_TARGET_NOT_FOUND",
            Self::ItemNotFound(_) => "E_ITEM_NOT_FOUND",
            Self::SourceIndexOutOfRange { .. } => "E_SOURCE_INDEX",
            Self::Degenerate(_) => "E_DEGENERATE_MOVE",
            Self::DuplicateId(_) => "E_DUPLICATE_ID",
        }
    }
}

/// Record of a move that mutated the board, for logging and persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedMove {
    pub level: Level,
    /// Id of the card or list that moved.
    pub item_id: Uuid,
    pub from_collection: Uuid,
    pub from_index: usize,
    pub to_collection: Uuid,
    /// Final index of the item after the move.
    pub to_index: usize,
}

// =============================================================================
// SHARED PATH
// =============================================================================

/// Move the item at `source` into insertion slot `target` of the same slice
/// and renumber. Returns the item's final index.
///
/// # Errors
///
/// `SourceIndexOutOfRange` when `source` is not an index of `items`;
/// `Degenerate` when the slot leaves the item where it is.
pub fn move_within<T: Positioned>(items: &mut [T], source: usize, target: usize) -> Result<usize, MoveError> {
    let len = items.len();
    if source >= len {
        return Err(MoveError::SourceIndexOutOfRange { index: source, len });
    }
    let dest = order::same_collection_destination(source, target, len);
    if dest == source {
        return Err(MoveError::Degenerate(source));
    }
    order::rotate_move(items, source, dest);
    order::renumber(items);
    Ok(dest)
}

// =============================================================================
// CARD MOVES
// =============================================================================

/// Move the card at `source_index` of `source_list` into slot `target_index`
/// of `target_list`.
///
/// # Errors
///
/// Any [`MoveError`]; the board is unchanged when an error is returned.
pub fn move_card(
    board: &mut Board,
    source_list: ListId,
    source_index: usize,
    target_list: ListId,
    target_index: usize,
) -> Result<AppliedMove, MoveError> {
    let src = board.list_index(&source_list).ok_or(MoveError::SourceNotFound(source_list))?;
    let tgt = board.list_index(&target_list).ok_or(MoveError::TargetNotFound(target_list))?;

    let src_len = board.lists[src].len();
    if source_index >= src_len {
        return Err(MoveError::SourceIndexOutOfRange { index: source_index, len: src_len });
    }
    let item_id = board.lists[src].cards[source_index].id;

    if src == tgt {
        let to_index = move_within(&mut board.lists[src].cards, source_index, target_index)?;
        board.touch();
        return Ok(AppliedMove {
            level: Level::Card,
            item_id,
            from_collection: source_list,
            from_index: source_index,
            to_collection: target_list,
            to_index,
        });
    }

    if board.lists[tgt].contains(&item_id) {
        return Err(MoveError::DuplicateId(item_id));
    }

    let to_index = order::clamp_insert_index(target_index, board.lists[tgt].len());
    let card = board.lists[src].cards.remove(source_index);
    board.lists[tgt].cards.insert(to_index, card);
    board.lists[src].update_card_positions();
    board.lists[tgt].update_card_positions();
    board.touch();

    Ok(AppliedMove {
        level: Level::Card,
        item_id,
        from_collection: source_list,
        from_index: source_index,
        to_collection: target_list,
        to_index,
    })
}

// =============================================================================
// LIST MOVES
// =============================================================================

/// Move the list at `source_index` into slot `target_index` of the same board.
///
/// # Errors
///
/// `SourceIndexOutOfRange` or `Degenerate`; the board is unchanged on error.
pub fn move_list(board: &mut Board, source_index: usize, target_index: usize) -> Result<AppliedMove, MoveError> {
    let item_id = board
        .lists
        .get(source_index)
        .map(|l| l.id)
        .ok_or(MoveError::SourceIndexOutOfRange { index: source_index, len: board.lists.len() })?;
    let to_index = move_within(&mut board.lists, source_index, target_index)?;
    board.touch();
    Ok(AppliedMove {
        level: Level::List,
        item_id,
        from_collection: board.id,
        from_index: source_index,
        to_collection: board.id,
        to_index,
    })
}

// =============================================================================
// PENDING MOVES
// =============================================================================

/// Apply a pending move to `board`, dispatching on its level.
///
/// List moves must name `board` as both source and target collection; there
/// is only ever one board in play.
///
/// # Errors
///
/// Any [`MoveError`]; the board is unchanged when an error is returned.
pub fn apply(board: &mut Board, pending: &PendingMove) -> Result<AppliedMove, MoveError> {
    match pending.level {
        Level::Card => move_card(
            board,
            pending.source_collection,
            pending.source_index,
            pending.target_collection,
            pending.target_index,
        ),
        Level::List => {
            if pending.source_collection != board.id {
                return Err(MoveError::SourceNotFound(pending.source_collection));
            }
            if pending.target_collection != board.id {
                return Err(MoveError::TargetNotFound(pending.target_collection));
            }
            move_list(board, pending.source_index, pending.target_index)
        }
    }
}

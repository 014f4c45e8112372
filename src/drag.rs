//! Drag model: the payload handed to the host, the host seam, the session
//! state machine, and the pending move recorded on release.
//!
//! The host owns a single opaque drag-payload slot. The engine hands it a
//! [`DragPayload`] (or its byte encoding) when a drag starts and reads it back
//! every frame. The session exists exactly as long as the host reports a
//! payload; a drop and a cancel both simply end it.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use serde::{Deserialize, Serialize};

use crate::board::BoardId;
use crate::dropzone::{CollectionId, Dropzone, Level};
use crate::error::ErrorCode;
use crate::geom::Point;
use crate::list::ListId;

// =============================================================================
// PAYLOAD
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("drag payload codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

impl ErrorCode for PayloadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Codec(_) => "E_PAYLOAD_CODEC",
        }
    }
}

/// What is being dragged and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    pub level: Level,
    /// The list for a card drag, the board for a list drag.
    pub origin_collection: CollectionId,
    pub origin_index: usize,
}

impl DragPayload {
    /// Payload for dragging the card at `index` of `list_id`.
    #[must_use]
    pub fn card(list_id: ListId, index: usize) -> Self {
        Self { level: Level::Card, origin_collection: list_id, origin_index: index }
    }

    /// Payload for dragging the list at `index` of `board_id`.
    #[must_use]
    pub fn list(board_id: BoardId, index: usize) -> Self {
        Self { level: Level::List, origin_collection: board_id, origin_index: index }
    }

    /// Encode for a host that only carries raw bytes.
    ///
    /// # Errors
    ///
    /// Returns a codec error if serialization fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PayloadError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode bytes previously produced by [`DragPayload::to_bytes`].
    ///
    /// # Errors
    ///
    /// Returns a codec error if the bytes are not a valid payload.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PayloadError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// True when this payload is the item at `index` of `collection`.
    #[must_use]
    pub fn is_item(&self, level: Level, collection: CollectionId, index: usize) -> bool {
        self.level == level && self.origin_collection == collection && self.origin_index == index
    }
}

// =============================================================================
// HOST SEAM
// =============================================================================

/// What the engine reads from (and clears on) the host each frame.
pub trait DragHost {
    /// Current pointer position in screen space.
    fn pointer(&self) -> Point;
    /// Whether the primary button is currently held.
    fn primary_down(&self) -> bool;
    /// The active drag payload, if a drag is in progress.
    fn payload(&self) -> Option<DragPayload>;
    /// Drop the host's payload so its own drop handling never sees it.
    fn clear_payload(&mut self);
}

/// Plain per-frame host snapshot, for hosts that poll their input once per
/// frame and for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub pointer: Point,
    pub primary_down: bool,
    pub payload: Option<DragPayload>,
}

impl FrameInput {
    /// Pointer at `pointer`, button held, no drag.
    #[must_use]
    pub fn pressed(pointer: Point) -> Self {
        Self { pointer, primary_down: true, payload: None }
    }

    /// Start dragging `payload` with the button held.
    pub fn start_drag(&mut self, payload: DragPayload) {
        self.payload = Some(payload);
        self.primary_down = true;
    }

    pub fn move_to(&mut self, pointer: Point) {
        self.pointer = pointer;
    }

    pub fn release(&mut self) {
        self.primary_down = false;
    }
}

impl DragHost for FrameInput {
    fn pointer(&self) -> Point {
        self.pointer
    }

    fn primary_down(&self) -> bool {
        self.primary_down
    }

    fn payload(&self) -> Option<DragPayload> {
        self.payload
    }

    fn clear_payload(&mut self) {
        self.payload = None;
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// Transient record of the drag in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragSession {
    /// No drag payload is active.
    #[default]
    Idle,
    /// The host reports an active payload.
    Dragging {
        /// Origin of the dragged item.
        payload: DragPayload,
    },
}

/// How a [`DragSession::sync`] changed the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionChange {
    Unchanged,
    Started,
    /// The host swapped the payload without an intervening idle frame.
    Replaced,
    Ended,
}

impl DragSession {
    /// Follow the host's payload slot.
    pub fn sync(&mut self, payload: Option<DragPayload>) -> SessionChange {
        let change = match (*self, payload) {
            (Self::Idle, None) => SessionChange::Unchanged,
            (Self::Idle, Some(_)) => SessionChange::Started,
            (Self::Dragging { .. }, None) => SessionChange::Ended,
            (Self::Dragging { payload: current }, Some(next)) if current == next => SessionChange::Unchanged,
            (Self::Dragging { .. }, Some(_)) => SessionChange::Replaced,
        };
        *self = match payload {
            Some(payload) => Self::Dragging { payload },
            None => Self::Idle,
        };
        change
    }

    /// End the session immediately.
    pub fn end(&mut self) {
        *self = Self::Idle;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Origin of the item being dragged.
    #[must_use]
    pub fn dragged(&self) -> Option<&DragPayload> {
        match self {
            Self::Dragging { payload } => Some(payload),
            Self::Idle => None,
        }
    }
}

// =============================================================================
// PENDING MOVE
// =============================================================================

/// A recorded, not-yet-applied reorder. Lives from pointer release until the
/// next reorder tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingMove {
    pub level: Level,
    pub source_collection: CollectionId,
    pub source_index: usize,
    pub target_collection: CollectionId,
    pub target_index: usize,
}

impl PendingMove {
    /// Combine a drag origin with the zone it was released over.
    #[must_use]
    pub fn from_drop(payload: &DragPayload, zone: &Dropzone) -> Self {
        Self {
            level: payload.level,
            source_collection: payload.origin_collection,
            source_index: payload.origin_index,
            target_collection: zone.collection_id,
            target_index: zone.insert_index,
        }
    }

    /// A card move between (or within) lists.
    #[must_use]
    pub fn card(source_list: ListId, source_index: usize, target_list: ListId, target_index: usize) -> Self {
        Self {
            level: Level::Card,
            source_collection: source_list,
            source_index,
            target_collection: target_list,
            target_index,
        }
    }

    /// A list move within `board_id`.
    #[must_use]
    pub fn list(board_id: BoardId, source_index: usize, target_index: usize) -> Self {
        Self {
            level: Level::List,
            source_collection: board_id,
            source_index,
            target_collection: board_id,
            target_index,
        }
    }
}

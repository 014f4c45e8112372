//! Per-frame drag engine: the five calls the host makes every frame.
//!
//! DESIGN
//! ======
//! `DragEngine` is an explicit context object owned by whatever drives the
//! frame loop. It holds one [`DropzoneIndex`] per level, the drag session,
//! the zone highlighted this frame, and at most one pending move. Within a
//! frame the host calls, in order:
//!
//! 1. [`DragEngine::clear_zones`] at the start of the first collection's pass
//! 2. [`DragEngine::register_collection_bounds`] per visible collection
//! 3. [`DragEngine::register_dropzone`] per candidate slot
//! 4. [`DragEngine::resolve_nearest_dropzone`] once all zones are in
//! 5. [`DragEngine::apply_pending_move`] on the board the host owns
//!
//! Only the session and the pending move survive from one frame to the next.
//!
//! ERROR HANDLING
//! ==============
//! A pending move that no longer applies (item deleted mid-drag, index out of
//! range, drop onto its own slot) is logged at debug level and discarded. The
//! board is never partially mutated.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::debug;

use crate::board::Board;
use crate::config::DragConfig;
use crate::drag::{DragHost, DragSession, PendingMove, SessionChange};
use crate::dropzone::{CollectionId, Dropzone, DropzoneIndex, Level};
use crate::error::ErrorCode;
use crate::geom::Rect;
use crate::reorder::{self, AppliedMove};

#[derive(Debug, Clone, Default)]
pub struct DragEngine {
    config: DragConfig,
    card_zones: DropzoneIndex,
    list_zones: DropzoneIndex,
    session: DragSession,
    highlighted: Option<Dropzone>,
    pending: Option<PendingMove>,
}

impl DragEngine {
    #[must_use]
    pub fn new(config: DragConfig) -> Self {
        Self { config, ..Self::default() }
    }

    #[must_use]
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    // --- Zone registration ---

    /// Forget last frame's zones and bounds for `level`.
    pub fn clear_zones(&mut self, level: Level) {
        self.zones_mut(level).clear();
    }

    pub fn register_collection_bounds(&mut self, level: Level, collection_id: CollectionId, rect: Rect) {
        self.zones_mut(level).register_bounds(collection_id, rect);
    }

    pub fn register_dropzone(&mut self, level: Level, rect: Rect, collection_id: CollectionId, insert_index: usize) {
        self.zones_mut(level).register_zone(rect, collection_id, insert_index);
    }

    #[must_use]
    pub fn zones(&self, level: Level) -> &DropzoneIndex {
        match level {
            Level::Card => &self.card_zones,
            Level::List => &self.list_zones,
        }
    }

    fn zones_mut(&mut self, level: Level) -> &mut DropzoneIndex {
        match level {
            Level::Card => &mut self.card_zones,
            Level::List => &mut self.list_zones,
        }
    }

    // --- Resolution ---

    /// Sync the drag session from the host, resolve the zone nearest to the
    /// pointer, and record a pending move if the button has been released
    /// over a zone.
    ///
    /// Returns the zone to highlight this frame.
    pub fn resolve_nearest_dropzone<H>(&mut self, host: &mut H) -> Option<Dropzone>
    where
        H: DragHost + ?Sized,
    {
        match self.session.sync(host.payload()) {
            SessionChange::Started | SessionChange::Replaced => {
                if let Some(payload) = self.session.dragged() {
                    debug!(
                        level = ?payload.level,
                        origin = %payload.origin_collection,
                        index = payload.origin_index,
                        "drag started"
                    );
                }
            }
            SessionChange::Ended => debug!("drag cancelled"),
            SessionChange::Unchanged => {}
        }

        let Some(payload) = self.session.dragged().copied() else {
            self.highlighted = None;
            return None;
        };

        let zone = self
            .zones(payload.level)
            .nearest(host.pointer(), self.config.sticky_bias, self.config.fallback_all_zones)
            .copied();
        self.highlighted = zone;

        if let Some(zone) = zone {
            if !host.primary_down() {
                let pending = PendingMove::from_drop(&payload, &zone);
                debug!(
                    level = ?pending.level,
                    target = %pending.target_collection,
                    slot = pending.target_index,
                    "drag released over dropzone"
                );
                self.pending = Some(pending);
                host.clear_payload();
                self.session.end();
            }
        }
        zone
    }

    /// The zone resolved by the last [`DragEngine::resolve_nearest_dropzone`].
    #[must_use]
    pub fn highlighted(&self) -> Option<&Dropzone> {
        self.highlighted.as_ref()
    }

    #[must_use]
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    // --- Pending moves ---

    #[must_use]
    pub fn pending(&self) -> Option<&PendingMove> {
        self.pending.as_ref()
    }

    /// Queue a move without a pointer gesture (keyboard reordering, tests).
    /// Replaces any move already pending.
    pub fn queue_move(&mut self, pending: PendingMove) {
        self.pending = Some(pending);
    }

    /// Drop the pending move without applying it.
    pub fn discard_pending(&mut self) -> Option<PendingMove> {
        self.pending.take()
    }

    /// Apply the pending move, if any, to `board` and clear it.
    ///
    /// The pending move is cleared whether or not it applied. Returns the
    /// applied move when the board changed.
    pub fn apply_pending_move(&mut self, board: &mut Board) -> Option<AppliedMove> {
        let pending = self.pending.take()?;
        match reorder::apply(board, &pending) {
            Ok(applied) => {
                debug!(
                    level = ?applied.level,
                    item = %applied.item_id,
                    from = applied.from_index,
                    to = applied.to_index,
                    "applied pending move"
                );
                Some(applied)
            }
            Err(e) => {
                debug!(error = %e, code = e.error_code(), "discarded pending move");
                None
            }
        }
    }
}

//! Dropzone index and nearest-zone resolution.
//!
//! The layout collaborator rebuilds the index every frame: it clears it at the
//! start of the first collection's pass, registers each visible collection's
//! screen bounds, and registers one zone before every item plus one after the
//! last. A collection of n items therefore yields n + 1 zones.
//!
//! Resolution restricts candidates to the collection under the pointer (first
//! registered match wins) and falls back to every zone when the pointer is
//! outside all collections, so a drag past the end of a scrolled strip still
//! finds a target. Among candidates the zone centre closest to the pointer
//! wins, with a stickiness bias: a later candidate only replaces the current
//! best when it is closer by more than the bias. Two zones at equal distance
//! therefore always resolve to the one registered first.

#[cfg(test)]
#[path = "dropzone_test.rs"]
mod dropzone_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geom::{Point, Rect};

/// Id of the collection that owns a zone: a list for card zones, a board for
/// list zones.
pub type CollectionId = Uuid;

/// Which kind of item a zone (or a drag) is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Cards within lists.
    Card,
    /// Lists within a board.
    List,
}

/// A candidate insertion slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dropzone {
    pub rect: Rect,
    pub collection_id: CollectionId,
    /// Insertion slot: 0 is before the first item, `len` is after the last.
    pub insert_index: usize,
}

/// Screen bounds of one visible collection, used for the containment test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectionBounds {
    pub collection_id: CollectionId,
    pub rect: Rect,
}

/// Per-frame registry of zones and collection bounds for one level.
#[derive(Debug, Clone, Default)]
pub struct DropzoneIndex {
    zones: Vec<Dropzone>,
    bounds: Vec<CollectionBounds>,
}

impl DropzoneIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every zone and bound registered for the previous frame.
    pub fn clear(&mut self) {
        self.zones.clear();
        self.bounds.clear();
    }

    pub fn register_bounds(&mut self, collection_id: CollectionId, rect: Rect) {
        self.bounds.push(CollectionBounds { collection_id, rect });
    }

    pub fn register_zone(&mut self, rect: Rect, collection_id: CollectionId, insert_index: usize) {
        self.zones.push(Dropzone { rect, collection_id, insert_index });
    }

    #[must_use]
    pub fn zones(&self) -> &[Dropzone] {
        &self.zones
    }

    #[must_use]
    pub fn bounds(&self) -> &[CollectionBounds] {
        &self.bounds
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// The first registered collection whose bounds contain `pt`.
    #[must_use]
    pub fn containing_collection(&self, pt: Point) -> Option<CollectionId> {
        self.bounds
            .iter()
            .find(|b| b.rect.contains(pt))
            .map(|b| b.collection_id)
    }

    /// Resolve the zone nearest to `pointer`.
    ///
    /// `sticky_bias` is in squared-pixel units. With `fallback_all` false, a
    /// pointer outside every collection resolves to nothing.
    #[must_use]
    pub fn nearest(&self, pointer: Point, sticky_bias: f64, fallback_all: bool) -> Option<&Dropzone> {
        let hovered = self.containing_collection(pointer);
        if hovered.is_none() && !fallback_all {
            return None;
        }

        let mut best: Option<(&Dropzone, f64)> = None;
        for zone in &self.zones {
            if hovered.is_some_and(|id| zone.collection_id != id) {
                continue;
            }
            let dist = pointer.dist_sq(zone.rect.center());
            match best {
                Some((_, best_dist)) if dist + sticky_bias >= best_dist => {}
                _ => best = Some((zone, dist)),
            }
        }
        best.map(|(zone, _)| zone)
    }
}

//! Reference column layout.
//!
//! Lays a board out as a horizontal strip of fixed-width columns with cards
//! stacked vertically, and registers the resulting collection bounds and
//! dropzones with a [`DragEngine`]. Real hosts lay out their own widgets and
//! register zones as they render; this layout exists for headless drivers and
//! tests.
//!
//! While an item is being dragged its own slot collapses: the item is not laid
//! out and the zone before it is skipped, so the gap it leaves behind is a
//! single zone.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::board::Board;
use crate::consts::{
    CARD_HEIGHT_PX, COLUMN_SPACING_PX, COLUMN_WIDTH_PX, HEADER_HEIGHT_PX, LIST_ZONE_WIDTH_PX, ZONE_HEIGHT_PX,
};
use crate::drag::DragPayload;
use crate::dropzone::Level;
use crate::engine::DragEngine;
use crate::geom::{Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnLayout {
    /// Top-left corner of the first column.
    pub origin: Point,
    pub column_width: f64,
    pub column_spacing: f64,
    pub header_height: f64,
    pub card_height: f64,
    pub zone_height: f64,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            origin: Point::new(20.0, 50.0),
            column_width: COLUMN_WIDTH_PX,
            column_spacing: COLUMN_SPACING_PX,
            header_height: HEADER_HEIGHT_PX,
            card_height: CARD_HEIGHT_PX,
            zone_height: ZONE_HEIGHT_PX,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn as_f64(n: usize) -> f64 {
    n as f64
}

impl ColumnLayout {
    /// Left edge of column `index`.
    #[must_use]
    pub fn column_x(&self, index: usize) -> f64 {
        self.origin.x + as_f64(index) * (self.column_width + self.column_spacing)
    }

    /// Height shared by every column so the strip has a flat bottom edge.
    #[must_use]
    pub fn column_height(&self, board: &Board) -> f64 {
        let tallest = board.lists.iter().map(crate::list::List::len).max().unwrap_or(0);
        let stacked = as_f64(tallest) * (self.card_height + self.zone_height);
        self.header_height + stacked + self.zone_height + self.card_height
    }

    /// Screen bounds of column `index`.
    #[must_use]
    pub fn column_rect(&self, board: &Board, index: usize) -> Rect {
        Rect::from_origin_size(self.column_x(index), self.origin.y, self.column_width, self.column_height(board))
    }

    /// Centre of card `card_index` in column `list_index` with nothing collapsed.
    #[must_use]
    pub fn card_center(&self, list_index: usize, card_index: usize) -> Point {
        let stride = self.card_height + self.zone_height;
        let top = self.origin.y + self.header_height + self.zone_height + as_f64(card_index) * stride;
        Point::new(
            self.column_x(list_index) + self.column_width * 0.5,
            top + self.card_height * 0.5,
        )
    }

    /// Centre of card insertion slot `slot` in column `list_index` with
    /// nothing collapsed.
    #[must_use]
    pub fn slot_center(&self, list_index: usize, slot: usize) -> Point {
        let stride = self.card_height + self.zone_height;
        let top = self.origin.y + self.header_height + as_f64(slot) * stride;
        Point::new(
            self.column_x(list_index) + self.column_width * 0.5,
            top + self.zone_height * 0.5,
        )
    }

    /// Centre of column `index`.
    #[must_use]
    pub fn column_center(&self, board: &Board, index: usize) -> Point {
        self.column_rect(board, index).center()
    }

    /// Register this frame's bounds and zones for `board`.
    ///
    /// `dragged` is the active drag payload, if any.
    pub fn register(&self, engine: &mut DragEngine, board: &Board, dragged: Option<&DragPayload>) {
        engine.clear_zones(Level::Card);
        engine.clear_zones(Level::List);

        let height = self.column_height(board);
        let count = board.lists.len();
        let strip_width = as_f64(count) * (self.column_width + self.column_spacing) + self.column_spacing;
        let strip = Rect::from_origin_size(self.origin.x - self.column_spacing, self.origin.y, strip_width, height);
        engine.register_collection_bounds(Level::List, board.id, strip);

        for (li, list) in board.lists.iter().enumerate() {
            let x = self.column_x(li);
            engine.register_collection_bounds(Level::Card, list.id, self.column_rect(board, li));

            let mut y = self.origin.y + self.header_height;
            for slot in 0..=list.len() {
                if dragged.is_some_and(|p| p.is_item(Level::Card, list.id, slot)) {
                    continue;
                }
                engine.register_dropzone(
                    Level::Card,
                    Rect::from_origin_size(x, y, self.column_width, self.zone_height),
                    list.id,
                    slot,
                );
                y += self.zone_height;
                if slot < list.len() {
                    y += self.card_height;
                }
            }
        }

        for slot in 0..=count {
            if dragged.is_some_and(|p| p.is_item(Level::List, board.id, slot)) {
                continue;
            }
            let x = self.column_x(slot) - self.column_spacing * 0.5 - LIST_ZONE_WIDTH_PX * 0.5;
            engine.register_dropzone(
                Level::List,
                Rect::from_origin_size(x, self.origin.y, LIST_ZONE_WIDTH_PX, height),
                board.id,
                slot,
            );
        }
    }
}

//! Shared numeric constants for the drag-reorder engine.

// ── Nearest-zone resolution ─────────────────────────────────────

/// Default stickiness bias in squared-pixel units. A challenger zone must be
/// closer than the current best by more than this amount to take over.
pub const DEFAULT_STICKY_BIAS: f64 = 10.0;

/// Whether resolution falls back to every zone when the pointer is outside
/// all registered collection bounds.
pub const DEFAULT_FALLBACK_ALL_ZONES: bool = true;

// ── Reference layout ────────────────────────────────────────────

/// Width of a list column in pixels.
pub const COLUMN_WIDTH_PX: f64 = 280.0;

/// Horizontal gap between adjacent columns in pixels.
pub const COLUMN_SPACING_PX: f64 = 12.0;

/// Height reserved for a list header above its first card.
pub const HEADER_HEIGHT_PX: f64 = 40.0;

/// Height of a single card in the reference layout.
pub const CARD_HEIGHT_PX: f64 = 72.0;

/// Height of the thin insertion slot between cards.
pub const ZONE_HEIGHT_PX: f64 = 1.0;

/// Width of the thin insertion slot between columns.
pub const LIST_ZONE_WIDTH_PX: f64 = 1.0;

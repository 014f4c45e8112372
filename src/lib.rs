//! Drag-and-drop reordering engine for Kanban boards.
//!
//! A board owns lists, a list owns cards. Every frame the host registers the
//! places an item could be dropped, and the engine resolves the one nearest to
//! the pointer, records a move when the pointer is released, and applies it to
//! the board on the next tick. The engine never renders; hosts draw the
//! highlighted zone and the dragged preview themselves.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Per-frame [`engine::DragEngine`] the host drives |
//! | [`dropzone`] | Per-level zone registry and nearest-zone resolution |
//! | [`drag`] | Drag payload, host seam, session state, pending moves |
//! | [`reorder`] | Applies moves to the entity model |
//! | [`board`] / [`list`] / [`card`] | Entity model |
//! | [`order`] | Position bookkeeping shared by cards and lists |
//! | [`store`] | In-memory board store with dirty tracking |
//! | [`layout`] | Reference column layout for headless hosts and tests |
//! | [`config`] | Environment-driven tuning |
//! | [`geom`] | Points and rectangles in screen space |
//! | [`consts`] | Default tuning values and layout metrics |
//! | [`error`] | Stable error codes shared by every error type |

pub mod board;
pub mod card;
pub mod config;
pub mod consts;
pub mod drag;
pub mod dropzone;
pub mod engine;
pub mod error;
pub mod geom;
pub mod layout;
pub mod list;
pub mod order;
pub mod reorder;
pub mod store;

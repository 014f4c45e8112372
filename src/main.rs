//! Headless demo: seeds a board, scripts a card drag and a list drag through
//! the frame loop, and prints the resulting board as JSON.

use std::process::ExitCode;

use tracing::{error, info, warn};

use kanboard::board::BoardId;
use kanboard::card::Card;
use kanboard::config::DragConfig;
use kanboard::drag::{DragPayload, FrameInput};
use kanboard::engine::DragEngine;
use kanboard::error::ErrorCode;
use kanboard::geom::Point;
use kanboard::layout::ColumnLayout;
use kanboard::reorder::AppliedMove;
use kanboard::store::{BoardStore, StoreError};

/// Frames spent moving the pointer from pickup to drop.
const GESTURE_FRAMES: usize = 8;

/// A scripted drag: what is picked up, and where the pointer travels.
struct Gesture {
    payload: DragPayload,
    from: Point,
    to: Point,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let config = match DragConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, code = e.error_code(), "invalid drag config; using defaults");
            DragConfig::default()
        }
    };
    info!(sticky_bias = config.sticky_bias, fallback_all_zones = config.fallback_all_zones, "drag config");

    let mut store = BoardStore::new();
    let board_id = seed(&mut store);
    let mut engine = DragEngine::new(config);
    let layout = ColumnLayout::default();

    let Some(board) = store.get(&board_id) else {
        error!(%board_id, "seeded board missing");
        return ExitCode::FAILURE;
    };
    // "Write docs" from To Do to the top of Doing, then To Do to the far end.
    let card_drag = Gesture {
        payload: DragPayload::card(board.lists[0].id, 1),
        from: layout.card_center(0, 1),
        to: layout.slot_center(1, 0),
    };
    let strip_y = layout.column_center(board, 0).y;
    let list_drag = Gesture {
        payload: DragPayload::list(board_id, 0),
        from: layout.column_center(board, 0),
        to: Point::new(layout.column_x(board.lists.len()) - layout.column_spacing * 0.5, strip_y),
    };

    for gesture in [card_drag, list_drag] {
        match drive(&mut store, &mut engine, &layout, board_id, &gesture) {
            Ok(Some(applied)) => info!(
                level = ?applied.level,
                item = %applied.item_id,
                to = applied.to_index,
                "gesture applied"
            ),
            Ok(None) => warn!(level = ?gesture.payload.level, "gesture changed nothing"),
            Err(e) => {
                error!(error = %e, code = e.error_code(), "gesture failed");
                return ExitCode::FAILURE;
            }
        }
    }

    let events = store.drain_events();
    let dirty = store.take_dirty();
    info!(events = events.len(), dirty = dirty.len(), "store activity");

    let Some(board) = store.get(&board_id) else {
        error!(%board_id, "board vanished");
        return ExitCode::FAILURE;
    };
    match serde_json::to_string_pretty(board) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "failed to serialize board");
            ExitCode::FAILURE
        }
    }
}

fn seed(store: &mut BoardStore) -> BoardId {
    let board = store.create("Product launch");
    board.description = Some("Everything between now and the launch party".into());

    let todo = board.add_list("To Do").id;
    let doing = board.add_list("Doing").id;
    let done = board.add_list("Done").id;

    board.add_card(&todo, Card::new("Design schema").with_badges(["backend"]));
    board.add_card(&todo, Card::new("Write docs").with_badges(["docs"]));
    board.add_card(
        &todo,
        Card::new("Fix login bug")
            .with_description("Session cookie is dropped after redirect")
            .with_badges(["bug", "urgent"]),
    );

    let mut reorder = Card::new("Drag reorder").with_badges(["frontend"]);
    reorder.add_checklist_item("Card level");
    let list_level = reorder.add_checklist_item("List level");
    reorder.toggle_checklist_item(&list_level);
    board.add_card(&doing, reorder);

    let mut ci = Card::new("Set up CI");
    ci.is_completed = true;
    board.add_card(&done, ci);

    board.id
}

/// Run one gesture through the frame loop, one frame per pointer step, and
/// return whatever the drop applied.
fn drive(
    store: &mut BoardStore,
    engine: &mut DragEngine,
    layout: &ColumnLayout,
    board_id: BoardId,
    gesture: &Gesture,
) -> Result<Option<AppliedMove>, StoreError> {
    let mut host = FrameInput::pressed(gesture.from);
    host.start_drag(gesture.payload);

    let mut applied = None;
    for step in 0..=GESTURE_FRAMES {
        host.move_to(lerp(gesture.from, gesture.to, step));
        if step == GESTURE_FRAMES {
            host.release();
        }

        let board = store.get(&board_id).ok_or(StoreError::BoardNotFound(board_id))?;
        layout.register(engine, board, host.payload.as_ref());
        engine.resolve_nearest_dropzone(&mut host);
        if let Some(applied_move) = store.apply_pending_move(engine, &board_id)? {
            applied = Some(applied_move);
        }
    }
    Ok(applied)
}

#[allow(clippy::cast_precision_loss)]
fn lerp(from: Point, to: Point, step: usize) -> Point {
    let t = step as f64 / GESTURE_FRAMES as f64;
    Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t)
}

//! End-to-end drags through the frame loop: layout registration, resolution,
//! release and application against a stored board.

use kanboard::board::BoardId;
use kanboard::card::Card;
use kanboard::config::DragConfig;
use kanboard::drag::{DragHost, DragPayload, FrameInput};
use kanboard::dropzone::Level;
use kanboard::engine::DragEngine;
use kanboard::geom::Point;
use kanboard::layout::ColumnLayout;
use kanboard::reorder::AppliedMove;
use kanboard::store::{BoardStore, StoreEvent};

struct Harness {
    store: BoardStore,
    engine: DragEngine,
    layout: ColumnLayout,
    board_id: BoardId,
}

impl Harness {
    fn new(lists: &[(&str, &[&str])]) -> Self {
        let mut store = BoardStore::new();
        let board = store.create("Flow");
        for (title, cards) in lists {
            let list_id = board.add_list(*title).id;
            for card in *cards {
                assert!(board.add_card(&list_id, Card::new(*card)));
            }
        }
        let board_id = board.id;
        store.take_dirty();
        store.drain_events();
        Self { store, engine: DragEngine::new(DragConfig::default()), layout: ColumnLayout::default(), board_id }
    }

    fn list_id(&self, index: usize) -> uuid::Uuid {
        self.store.get(&self.board_id).unwrap().lists[index].id
    }

    fn titles(&self, index: usize) -> Vec<String> {
        self.store.get(&self.board_id).unwrap().lists[index].cards.iter().map(|c| c.title.clone()).collect()
    }

    fn list_titles(&self) -> Vec<String> {
        self.store.get(&self.board_id).unwrap().lists.iter().map(|l| l.title.clone()).collect()
    }

    /// One full frame: register, resolve, apply.
    fn frame<H: DragHost>(&mut self, host: &mut H) -> Option<AppliedMove> {
        let board = self.store.get(&self.board_id).unwrap();
        let dragged = host.payload();
        self.layout.register(&mut self.engine, board, dragged.as_ref());
        self.engine.resolve_nearest_dropzone(host);
        self.store.apply_pending_move(&mut self.engine, &self.board_id).unwrap()
    }

    /// Pick up `payload` at `from`, travel to `to` over a few frames, release.
    fn drag(&mut self, payload: DragPayload, from: Point, to: Point) -> Option<AppliedMove> {
        let mut host = FrameInput::pressed(from);
        host.start_drag(payload);
        for step in 0..4_i32 {
            let t = f64::from(step) / 4.0;
            host.move_to(Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t));
            assert!(self.frame(&mut host).is_none(), "nothing applies while the button is held");
        }
        host.move_to(to);
        host.release();
        let applied = self.frame(&mut host);
        assert!(host.payload.is_none());
        applied
    }
}

#[test]
fn card_moves_to_another_list() {
    let mut h = Harness::new(&[("L1", &["x", "y"]), ("L2", &[])]);
    let l1 = h.list_id(0);
    let from = h.layout.card_center(0, 0);
    let to = h.layout.slot_center(1, 0);

    let applied = h.drag(DragPayload::card(l1, 0), from, to).unwrap();

    assert_eq!(applied.to_collection, h.list_id(1));
    assert_eq!(h.titles(0), vec!["y"]);
    assert_eq!(h.titles(1), vec!["x"]);
    assert!(h.store.is_dirty(&h.board_id));
    assert_eq!(h.store.drain_events(), vec![StoreEvent::Modified(h.board_id)]);
}

#[test]
fn card_moves_down_its_own_list() {
    let mut h = Harness::new(&[("L", &["a", "b", "c", "d"])]);
    let l = h.list_id(0);
    // With "a" lifted out, everything below it shifts up one slot; the zone
    // between "c" and "d" sits where slot 2 would be with nothing collapsed.
    let from = h.layout.card_center(0, 0);
    let to = h.layout.slot_center(0, 2);

    let applied = h.drag(DragPayload::card(l, 0), from, to).unwrap();

    assert_eq!(applied.to_index, 2);
    assert_eq!(h.titles(0), vec!["b", "c", "a", "d"]);
    assert!(h.store.get(&h.board_id).unwrap().positions_consistent());
}

#[test]
fn card_moves_up_its_own_list() {
    let mut h = Harness::new(&[("L", &["a", "b", "c"])]);
    let l = h.list_id(0);
    let from = h.layout.card_center(0, 2);
    let to = h.layout.slot_center(0, 0);

    h.drag(DragPayload::card(l, 2), from, to).unwrap();
    assert_eq!(h.titles(0), vec!["c", "a", "b"]);
}

#[test]
fn dropping_back_in_place_changes_nothing() {
    let mut h = Harness::new(&[("L", &["a", "b", "c"])]);
    let l = h.list_id(0);
    let at = h.layout.card_center(0, 1);

    assert!(h.drag(DragPayload::card(l, 1), at, at).is_none());
    assert_eq!(h.titles(0), vec!["a", "b", "c"]);
    assert!(!h.store.is_dirty(&h.board_id));
    assert!(h.store.drain_events().is_empty());
}

#[test]
fn cancelled_drag_changes_nothing() {
    let mut h = Harness::new(&[("L1", &["x"]), ("L2", &["y"])]);
    let l1 = h.list_id(0);
    let mut host = FrameInput::pressed(h.layout.card_center(0, 0));
    host.start_drag(DragPayload::card(l1, 0));
    h.frame(&mut host);
    host.move_to(h.layout.slot_center(1, 1));
    h.frame(&mut host);
    assert!(h.engine.highlighted().is_some());

    host.payload = None;
    host.release();
    assert!(h.frame(&mut host).is_none());
    assert!(h.engine.highlighted().is_none());
    assert_eq!(h.titles(0), vec!["x"]);
    assert_eq!(h.titles(1), vec!["y"]);
}

#[test]
fn list_moves_to_the_end() {
    let mut h = Harness::new(&[("A", &["a"]), ("B", &[]), ("C", &["c"])]);
    let board = h.store.get(&h.board_id).unwrap();
    let from = h.layout.column_center(board, 0);
    let to = Point::new(h.layout.column_x(3) - h.layout.column_spacing * 0.5, from.y);
    let board_id = h.board_id;

    let applied = h.drag(DragPayload::list(board_id, 0), from, to).unwrap();

    assert_eq!(applied.level, Level::List);
    assert_eq!(applied.to_index, 2);
    assert_eq!(h.list_titles(), vec!["B", "C", "A"]);
    assert_eq!(h.titles(2), vec!["a"]);
    assert!(h.store.get(&h.board_id).unwrap().positions_consistent());
}

#[test]
fn sequential_drags_keep_every_card() {
    let mut h = Harness::new(&[("L1", &["1", "2", "3"]), ("L2", &["4"]), ("L3", &[])]);
    let moves = [(0, 0, 2, 0), (0, 1, 1, 1), (1, 0, 0, 0), (2, 0, 0, 2)];
    for (src_list, src_index, tgt_list, slot) in moves {
        let payload = DragPayload::card(h.list_id(src_list), src_index);
        let from = h.layout.card_center(src_list, src_index);
        let to = h.layout.slot_center(tgt_list, slot);
        assert!(h.drag(payload, from, to).is_some());
    }
    let board = h.store.get(&h.board_id).unwrap();
    assert_eq!(board.total_card_count(), 4);
    assert!(board.positions_consistent());
}

/// A host whose payload slot only carries bytes.
struct ByteHost {
    pointer: Point,
    down: bool,
    slot: Option<Vec<u8>>,
}

impl DragHost for ByteHost {
    fn pointer(&self) -> Point {
        self.pointer
    }

    fn primary_down(&self) -> bool {
        self.down
    }

    fn payload(&self) -> Option<DragPayload> {
        self.slot.as_deref().and_then(|bytes| DragPayload::from_bytes(bytes).ok())
    }

    fn clear_payload(&mut self) {
        self.slot = None;
    }
}

#[test]
fn byte_slot_host_drives_a_drop() {
    let mut h = Harness::new(&[("L1", &["x"]), ("L2", &[])]);
    let payload = DragPayload::card(h.list_id(0), 0);
    let mut host = ByteHost {
        pointer: h.layout.slot_center(1, 0),
        down: true,
        slot: Some(payload.to_bytes().unwrap()),
    };

    assert!(h.frame(&mut host).is_none());
    host.down = false;
    assert!(h.frame(&mut host).is_some());
    assert!(host.slot.is_none());
    assert_eq!(h.titles(1), vec!["x"]);
}

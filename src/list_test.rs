use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;

fn list_of(titles: &[&str]) -> List {
    List::with_cards("L", titles.iter().map(|t| Card::new(*t)).collect())
}

fn titles(list: &List) -> Vec<String> {
    list.cards.iter().map(|c| c.title.clone()).collect()
}

// =============================================================
// add / insert
// =============================================================

#[test]
fn with_cards_is_renumbered() {
    let list = list_of(&["A", "B", "C"]);
    assert!(list.positions_consistent());
    assert_eq!(list.len(), 3);
}

#[test]
fn add_card_appends() {
    let mut list = list_of(&["A"]);
    assert!(list.add_card(Card::new("B")));
    assert_eq!(titles(&list), vec!["A", "B"]);
}

#[test]
fn add_card_rejects_duplicate_id() {
    let mut list = List::new("L");
    let card = Card::new("A");
    assert!(list.add_card(card.clone()));
    assert!(!list.add_card(card.clone()));
    assert!(!list.insert_card(card, 0));
    assert_eq!(list.len(), 1);
}

#[test]
fn insert_card_shifts_right() {
    let mut list = list_of(&["A", "C"]);
    list.insert_card(Card::new("B"), 1);
    assert_eq!(titles(&list), vec!["A", "B", "C"]);
}

#[test]
fn insert_card_at_len_appends() {
    let mut list = list_of(&["A", "B"]);
    let len = list.len();
    list.insert_card(Card::new("C"), len);
    assert_eq!(titles(&list), vec!["A", "B", "C"]);
}

#[test]
fn insert_card_past_len_appends() {
    let mut list = list_of(&["A"]);
    list.insert_card(Card::new("B"), 42);
    assert_eq!(titles(&list), vec!["A", "B"]);
}

#[test]
fn insert_at_end_equals_add() {
    let base = list_of(&["A", "B", "C"]);
    let extra = Card::new("D");

    let mut via_insert = base.clone();
    let len = via_insert.len();
    via_insert.insert_card(extra.clone(), len);
    via_insert.update_card_positions();

    let mut via_add = base;
    via_add.add_card(extra);
    via_add.update_card_positions();

    assert_eq!(via_insert, via_add);
}

// =============================================================
// remove
// =============================================================

#[test]
fn remove_card_by_id() {
    let mut list = list_of(&["A", "B", "C"]);
    let id = list.cards[1].id;
    let removed = list.remove_card(&id).unwrap();
    assert_eq!(removed.title, "B");
    assert_eq!(titles(&list), vec!["A", "C"]);
}

#[test]
fn remove_missing_card_is_noop() {
    let mut list = list_of(&["A", "B"]);
    let before = list.clone();
    assert!(list.remove_card(&Uuid::new_v4()).is_none());
    assert_eq!(list, before);
}

#[test]
fn take_card_at_out_of_range_is_none() {
    let mut list = list_of(&["A"]);
    assert!(list.take_card_at(1).is_none());
    assert_eq!(list.take_card_at(0).unwrap().title, "A");
    assert!(list.is_empty());
}

// =============================================================
// move
// =============================================================

#[test]
fn move_card_forward() {
    let mut list = list_of(&["A", "B", "C"]);
    assert!(list.move_card(0, 2));
    assert_eq!(titles(&list), vec!["B", "C", "A"]);
}

#[test]
fn move_card_backward() {
    let mut list = list_of(&["A", "B", "C"]);
    assert!(list.move_card(2, 0));
    assert_eq!(titles(&list), vec!["C", "A", "B"]);
}

#[test]
fn move_card_out_of_range_leaves_list_unchanged() {
    let mut list = list_of(&["A", "B", "C"]);
    let before = list.clone();
    assert!(!list.move_card(3, 0));
    assert!(!list.move_card(0, 3));
    assert!(!list.move_card(1, 1));
    assert_eq!(list, before);
}

#[test]
fn move_then_renumber_restores_invariant() {
    let mut list = list_of(&["A", "B", "C", "D"]);
    list.move_card(3, 1);
    assert!(!list.positions_consistent());
    list.update_card_positions();
    assert!(list.positions_consistent());
}

// =============================================================
// Position invariant under random operation sequences
// =============================================================

#[test]
fn random_operation_sequences_keep_invariant() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let mut list = list_of(&["A", "B", "C"]);
        for step in 0..30 {
            let len = list.len();
            match rng.random_range(0..4) {
                0 => {
                    list.add_card(Card::new(format!("n{step}")));
                }
                1 => {
                    let at = rng.random_range(0..=len + 1);
                    list.insert_card(Card::new(format!("i{step}")), at);
                }
                2 => {
                    if len > 0 {
                        let id = list.cards[rng.random_range(0..len)].id;
                        list.remove_card(&id);
                    }
                }
                _ => {
                    let from = rng.random_range(0..=len);
                    let to = rng.random_range(0..=len);
                    list.move_card(from, to);
                }
            }
            list.update_card_positions();
            assert!(list.positions_consistent());
        }
    }
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn find_card_and_index() {
    let list = list_of(&["A", "B"]);
    let id = list.cards[1].id;
    assert_eq!(list.card_index(&id), Some(1));
    assert_eq!(list.find_card(&id).unwrap().title, "B");
    assert!(list.find_card(&Uuid::new_v4()).is_none());
}

#[test]
fn find_card_mut_edits_in_place() {
    let mut list = list_of(&["A"]);
    let id = list.cards[0].id;
    list.find_card_mut(&id).unwrap().title = "Z".into();
    assert_eq!(titles(&list), vec!["Z"]);
}

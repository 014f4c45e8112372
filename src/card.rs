//! Card: a single work item with title, description, badges and checklist.
//!
//! A card knows nothing about the list that owns it. Its `position` is only
//! meaningful after the owning list has renumbered (see [`crate::order`]).

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::order::Positioned;

/// Unique identifier for a card.
pub type CardId = Uuid;

/// Unique identifier for a checklist entry.
pub type ChecklistItemId = Uuid;

/// One entry in a card's checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: ChecklistItemId,
    pub text: String,
    pub checked: bool,
}

impl ChecklistItem {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(), text: text.into(), checked: false }
    }
}

/// A card as stored in a list and handed to persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Assigned at construction and never changed.
    pub id: CardId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Label set. Duplicates are rejected by [`Card::add_badge`].
    #[serde(default)]
    pub badges: BTreeSet<String>,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    /// Index within the owning list after the last renumber.
    #[serde(default)]
    pub position: usize,
    #[serde(default)]
    pub is_completed: bool,
    /// Due date in milliseconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,
}

impl Card {
    /// Create a card with a fresh id and no content beyond its title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            badges: BTreeSet::new(),
            checklist: Vec::new(),
            position: 0,
            is_completed: false,
            due_date: None,
        }
    }

    /// Builder-style description setter. Empty text clears the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = if description.is_empty() { None } else { Some(description) };
        self
    }

    /// Builder-style badge setter.
    #[must_use]
    pub fn with_badges<I, S>(mut self, badges: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for badge in badges {
            self.add_badge(badge);
        }
        self
    }

    #[must_use]
    pub fn has_description(&self) -> bool {
        self.description.as_deref().is_some_and(|d| !d.is_empty())
    }

    // --- Badges ---

    /// Add a badge. Returns `false` if it was already present.
    pub fn add_badge(&mut self, badge: impl Into<String>) -> bool {
        self.badges.insert(badge.into())
    }

    /// Remove a badge. Returns `false` if it was absent.
    pub fn remove_badge(&mut self, badge: &str) -> bool {
        self.badges.remove(badge)
    }

    #[must_use]
    pub fn has_badge(&self, badge: &str) -> bool {
        self.badges.contains(badge)
    }

    // --- Checklist ---

    /// Append an unchecked checklist entry and return its id.
    pub fn add_checklist_item(&mut self, text: impl Into<String>) -> ChecklistItemId {
        let item = ChecklistItem::new(text);
        let id = item.id;
        self.checklist.push(item);
        id
    }

    /// Remove the checklist entry with `id`. Returns `false` if absent.
    pub fn remove_checklist_item(&mut self, id: &ChecklistItemId) -> bool {
        let before = self.checklist.len();
        self.checklist.retain(|item| item.id != *id);
        self.checklist.len() != before
    }

    /// Flip the checked state of the entry with `id`. Returns the new state.
    pub fn toggle_checklist_item(&mut self, id: &ChecklistItemId) -> Option<bool> {
        let item = self.find_checklist_item_mut(id)?;
        item.checked = !item.checked;
        Some(item.checked)
    }

    #[must_use]
    pub fn find_checklist_item(&self, id: &ChecklistItemId) -> Option<&ChecklistItem> {
        self.checklist.iter().find(|item| item.id == *id)
    }

    pub fn find_checklist_item_mut(&mut self, id: &ChecklistItemId) -> Option<&mut ChecklistItem> {
        self.checklist.iter_mut().find(|item| item.id == *id)
    }

    /// Number of checked entries.
    #[must_use]
    pub fn checklist_completed(&self) -> usize {
        self.checklist.iter().filter(|item| item.checked).count()
    }

    /// Fraction of checked entries in `[0, 1]`; `0.0` for an empty checklist.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn checklist_progress(&self) -> f32 {
        if self.checklist.is_empty() {
            return 0.0;
        }
        self.checklist_completed() as f32 / self.checklist.len() as f32
    }
}

impl Positioned for Card {
    fn position(&self) -> usize {
        self.position
    }

    fn set_position(&mut self, position: usize) {
        self.position = position;
    }
}

//! Properties picked for side-by-side comparison, and the
//! "latest recommendations" projection over the chat log.

use crate::models::{Message, Property};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, info};

/// Most properties that can be compared at once
pub const MAX_SELECTION: usize = 2;

/// What a toggle did to the selection
#[derive(Debug, Clone, PartialEq)]
pub enum Toggle {
    Selected,
    Deselected,
    /// The selection was full; the oldest entry made room
    Replaced { evicted: Arc<Property> },
}

/// Bounded queue of selected properties, oldest first.
///
/// Toggling a selected id removes it. Toggling a new id while full evicts
/// the front (oldest) entry and appends the new one at the back.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Selection {
    slots: VecDeque<Arc<Property>>,
}

impl Selection {
    pub fn new() -> Self {
        Self {
            slots: VecDeque::with_capacity(MAX_SELECTION),
        }
    }

    pub fn toggle(&mut self, property: Arc<Property>) -> Toggle {
        if let Some(pos) = self.slots.iter().position(|p| p.id == property.id) {
            self.slots.remove(pos);
            debug!("Deselected property {}", property.id);
            return Toggle::Deselected;
        }

        let evicted = if self.slots.len() >= MAX_SELECTION {
            self.slots.pop_front()
        } else {
            None
        };
        debug!("Selected property {}", property.id);
        self.slots.push_back(property);

        match evicted {
            Some(evicted) => {
                info!("Selection full, evicted property {}", evicted.id);
                Toggle::Replaced { evicted }
            }
            None => Toggle::Selected,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.slots.iter().any(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Property>> {
        self.slots.iter()
    }

    /// Selected properties, oldest first
    pub fn to_vec(&self) -> Vec<Arc<Property>> {
        self.slots.iter().cloned().collect()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.slots.iter().map(|p| p.id.as_str()).collect()
    }
}

/// Properties attached to the most recent message that carries any.
/// Recomputed from the log on every call.
pub fn latest_recommendations(log: &[Message]) -> Vec<Arc<Property>> {
    log.iter()
        .rev()
        .find(|m| m.has_properties())
        .map(|m| m.properties.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{mock_messages, mock_properties};
    use crate::models::Role;

    fn property(id: &str) -> Arc<Property> {
        let mut p = (*mock_properties()[0]).clone();
        p.id = id.to_string();
        Arc::new(p)
    }

    #[test]
    fn toggle_twice_restores_selection() {
        let mut selection = Selection::new();
        selection.toggle(property("a"));

        assert_eq!(selection.toggle(property("b")), Toggle::Selected);
        assert_eq!(selection.ids(), vec!["a", "b"]);
        assert_eq!(selection.toggle(property("b")), Toggle::Deselected);
        assert_eq!(selection.ids(), vec!["a"]);
    }

    #[test]
    fn full_selection_evicts_oldest() {
        let mut selection = Selection::new();
        selection.toggle(property("a"));
        selection.toggle(property("b"));

        match selection.toggle(property("c")) {
            Toggle::Replaced { evicted } => assert_eq!(evicted.id, "a"),
            other => panic!("expected eviction, got {:?}", other),
        }
        assert_eq!(selection.ids(), vec!["b", "c"]);
        assert_eq!(selection.len(), MAX_SELECTION);
    }

    #[test]
    fn deselecting_from_full_selection_keeps_order() {
        let mut selection = Selection::new();
        selection.toggle(property("a"));
        selection.toggle(property("b"));
        selection.toggle(property("a"));

        assert_eq!(selection.ids(), vec!["b"]);
        assert!(!selection.contains("a"));
        assert!(selection.contains("b"));
    }

    #[test]
    fn latest_recommendations_uses_last_message_with_properties() {
        let properties = mock_properties();
        let messages = mock_messages(&properties).unwrap();

        let latest = latest_recommendations(&messages);
        let ids: Vec<_> = latest.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn later_messages_without_properties_do_not_clear_recommendations() {
        let properties = mock_properties();
        let mut messages = mock_messages(&properties).unwrap();
        messages.push(Message::new(Role::User, "thanks", 1));
        messages.push(Message::new(Role::Assistant, "anytime", 2));

        assert_eq!(latest_recommendations(&messages).len(), 2);
    }

    #[test]
    fn empty_log_has_no_recommendations() {
        assert!(latest_recommendations(&[]).is_empty());
        assert!(latest_recommendations(&[Message::new(Role::User, "hi", 0)]).is_empty());
    }
}

use crate::catalog::Catalog;
use crate::chat::ChatSession;
use crate::comparison::{build_rows, Comparison};
use crate::config::SessionConfig;
use crate::models::{Message, Property};
use crate::selection::{latest_recommendations, Selection, Toggle, MAX_SELECTION};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Right-hand panel tab
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Properties,
    Compare,
}

/// Everything the presentation layer talks to for one browsing session
pub struct Dashboard {
    catalog: Catalog,
    chat: ChatSession,
    selection: Selection,
    tab: Tab,
}

impl Dashboard {
    pub fn new(catalog: Catalog, config: SessionConfig) -> Self {
        let chat = ChatSession::new(catalog.seed_messages().to_vec(), config);
        Self {
            catalog,
            chat,
            selection: Selection::new(),
            tab: Tab::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Submit chat input. Blank text or a submission while a reply is pending is ignored.
    pub fn submit_user_message(&mut self, text: &str) {
        if self.chat.append_user_message(text).is_none() {
            debug!("Submission ignored");
        }
    }

    pub fn is_reply_pending(&self) -> bool {
        self.chat.is_reply_pending()
    }

    pub async fn wait_for_reply(&self) {
        self.chat.wait_for_reply().await;
    }

    pub fn message_log(&self) -> Vec<Message> {
        self.chat.messages()
    }

    /// Toggle a catalog property in or out of the comparison selection.
    /// Unknown ids are a caller bug and are reported as errors.
    pub fn toggle_property_selection(&mut self, property_id: &str) -> Result<()> {
        let Some(property) = self.catalog.get(property_id).cloned() else {
            bail!("Cannot select unknown property id: {}", property_id);
        };

        match self.selection.toggle(property) {
            Toggle::Selected => info!("➕ Selected {}", property_id),
            Toggle::Deselected => info!("➖ Deselected {}", property_id),
            Toggle::Replaced { evicted } => {
                info!("🔁 Selected {}, replacing {}", property_id, evicted.id)
            }
        }

        Ok(())
    }

    pub fn selection(&self) -> Vec<Arc<Property>> {
        self.selection.to_vec()
    }

    pub fn is_selected(&self, property_id: &str) -> bool {
        self.selection.contains(property_id)
    }

    /// The compare tab is only enabled once the selection is full
    pub fn can_compare(&self) -> bool {
        self.selection.len() >= MAX_SELECTION
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Switch tabs. Switching to compare is ignored until two properties are selected.
    pub fn select_tab(&mut self, tab: Tab) {
        if tab == Tab::Compare && !self.can_compare() {
            debug!("Compare tab disabled with {} selected", self.selection.len());
            return;
        }
        self.tab = tab;
    }

    pub fn comparison_rows(&self) -> Comparison {
        build_rows(&self.selection.to_vec())
    }

    pub fn latest_recommendations(&self) -> Vec<Arc<Property>> {
        latest_recommendations(&self.chat.messages())
    }

    /// Tear down the session, dropping any reply still in flight
    pub fn shutdown(&mut self) {
        self.chat.shutdown();
    }
}

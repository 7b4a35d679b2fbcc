use serde::Serialize;

use crate::ussd::engine::UssdEngine;
use crate::ussd::screen::ScreenId;

/// Read-only view of the session handed to presentation adapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub session_id: String,
    pub screen: ScreenId,
    pub title: String,
    pub options: Vec<OptionView>,
    pub breadcrumb: Vec<String>,
    pub pending_input: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub key: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl SessionSnapshot {
    pub fn capture(engine: &UssdEngine) -> Self {
        let screen = engine.current_screen();
        Self {
            session_id: engine.session_id().to_string(),
            screen: screen.id,
            title: screen.title.to_string(),
            options: screen
                .options
                .iter()
                .map(|option| OptionView {
                    key: option.key.to_string(),
                    label: option.label.to_string(),
                    icon: option.icon.map(str::to_string),
                })
                .collect(),
            breadcrumb: engine.breadcrumb().into_iter().map(str::to_string).collect(),
            pending_input: engine.session().pending_input().to_string(),
        }
    }
}

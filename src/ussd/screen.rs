//! Static menu types: screen identifiers, options and screen definitions.

use serde::Serialize;
use std::fmt;

/// Identifier of one of the fixed menu screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScreenId {
    Welcome,
    Auth,
    FaithPaths,
    LearnEarn,
    Circles,
    TheWall,
    Marketplace,
    Events,
    Profile,
}

impl ScreenId {
    /// Every screen, in menu order.
    pub const ALL: [ScreenId; 9] = [
        ScreenId::Welcome,
        ScreenId::Auth,
        ScreenId::FaithPaths,
        ScreenId::LearnEarn,
        ScreenId::Circles,
        ScreenId::TheWall,
        ScreenId::Marketplace,
        ScreenId::Events,
        ScreenId::Profile,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScreenId::Welcome => "welcome",
            ScreenId::Auth => "auth",
            ScreenId::FaithPaths => "faithPaths",
            ScreenId::LearnEarn => "learnEarn",
            ScreenId::Circles => "circles",
            ScreenId::TheWall => "theWall",
            ScreenId::Marketplace => "marketplace",
            ScreenId::Events => "events",
            ScreenId::Profile => "profile",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where selecting an option leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Navigate forward (or loop back) to a screen.
    Screen(ScreenId),
    /// Pop one step of history.
    Back,
    /// Terminate the session.
    Exit,
}

/// One selectable entry of a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOption {
    pub key: &'static str,
    pub label: &'static str,
    pub target: Target,
    pub icon: Option<&'static str>,
}

impl MenuOption {
    pub const fn new(key: &'static str, label: &'static str, target: Target) -> Self {
        Self {
            key,
            label,
            target,
            icon: None,
        }
    }

    pub const fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Title plus ordered options for one screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenDefinition {
    pub id: ScreenId,
    pub title: &'static str,
    pub options: &'static [MenuOption],
}

impl ScreenDefinition {
    /// Find the option bound to `key`.
    pub fn option(&self, key: &str) -> Option<&'static MenuOption> {
        self.options.iter().find(|option| option.key == key)
    }

    /// First word of the title, used by the breadcrumb trail.
    pub fn short_title(&self) -> &'static str {
        self.title.split(' ').next().unwrap_or(self.title)
    }
}

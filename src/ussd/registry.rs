//! The menu registry: every screen of the *384*855# service.

use std::collections::HashSet;
use thiserror::Error;

use crate::ussd::input::is_valid_key;
use crate::ussd::screen::{MenuOption, ScreenDefinition, ScreenId, Target};

/// Integrity problems in a menu registry. All of them are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Screen '{screen}' has no definition")]
    MissingScreen { screen: ScreenId },

    #[error("Screen '{screen}' is defined more than once")]
    DuplicateScreen { screen: ScreenId },

    #[error("Screen '{screen}' binds key '{key}' more than once")]
    DuplicateKey { screen: ScreenId, key: &'static str },

    #[error("Screen '{screen}' option '{key}' targets undefined screen '{target}'")]
    DanglingTarget {
        screen: ScreenId,
        key: &'static str,
        target: ScreenId,
    },

    #[error("Screen '{screen}' uses '{key}' as a key; keys must be one ASCII character")]
    InvalidKey { screen: ScreenId, key: &'static str },
}

/// Lookup table from screen id to definition.
#[derive(Debug, Clone, Copy)]
pub struct MenuRegistry {
    screens: &'static [ScreenDefinition],
}

impl MenuRegistry {
    pub const fn new(screens: &'static [ScreenDefinition]) -> Self {
        Self { screens }
    }

    /// The registry shipped with the application.
    pub const fn builtin() -> Self {
        Self::new(SCREENS)
    }

    pub fn screens(&self) -> &'static [ScreenDefinition] {
        self.screens
    }

    pub fn get(&self, id: ScreenId) -> Option<&'static ScreenDefinition> {
        self.screens.iter().find(|screen| screen.id == id)
    }

    /// Definition for `id`.
    ///
    /// A miss means the registry was never validated. Debug builds panic;
    /// release builds log and fall back to the built-in welcome screen.
    pub fn screen(&self, id: ScreenId) -> &'static ScreenDefinition {
        match self.get(id) {
            Some(screen) => screen,
            None => {
                debug_assert!(false, "screen '{id}' missing from menu registry");
                tracing::error!(screen = %id, "Screen missing from menu registry, showing welcome");
                self.get(ScreenId::Welcome).unwrap_or(&WELCOME)
            }
        }
    }

    /// Check the closed-world invariants of the registry.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut defined = HashSet::new();
        for screen in self.screens {
            if !defined.insert(screen.id) {
                return Err(RegistryError::DuplicateScreen { screen: screen.id });
            }
        }

        for screen in self.screens {
            let mut keys = HashSet::new();
            for option in screen.options {
                if !is_valid_key(option.key) {
                    return Err(RegistryError::InvalidKey {
                        screen: screen.id,
                        key: option.key,
                    });
                }
                if !keys.insert(option.key) {
                    return Err(RegistryError::DuplicateKey {
                        screen: screen.id,
                        key: option.key,
                    });
                }
                if let Target::Screen(target) = option.target {
                    if !defined.contains(&target) {
                        return Err(RegistryError::DanglingTarget {
                            screen: screen.id,
                            key: option.key,
                            target,
                        });
                    }
                }
            }
        }

        if let Some(missing) = ScreenId::ALL.iter().find(|id| !defined.contains(*id)) {
            return Err(RegistryError::MissingScreen { screen: *missing });
        }

        Ok(())
    }
}

impl Default for MenuRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

const fn nav(key: &'static str, label: &'static str, screen: ScreenId, icon: &'static str) -> MenuOption {
    MenuOption::new(key, label, Target::Screen(screen)).with_icon(icon)
}

const MAIN_MENU: MenuOption = MenuOption::new("0", "Main Menu", Target::Screen(ScreenId::Welcome));

const WELCOME: ScreenDefinition = ScreenDefinition {
    id: ScreenId::Welcome,
    title: "Karibu TheCircle 🌍",
    options: &[
        nav("1", "Join / Log In", ScreenId::Auth, "🔐"),
        nav("2", "Faith Paths", ScreenId::FaithPaths, "📖"),
        nav("3", "Learn & Earn", ScreenId::LearnEarn, "🎓"),
        nav("4", "Circles", ScreenId::Circles, "🤝"),
        nav("5", "The Wall", ScreenId::TheWall, "🙏"),
        nav("6", "Marketplace", ScreenId::Marketplace, "🛍"),
        nav("7", "Events", ScreenId::Events, "📅"),
        nav("8", "My Profile", ScreenId::Profile, "👤"),
        MenuOption::new("0", "Exit", Target::Exit),
    ],
};

// Leaf entries below loop back to their own screen; the detail screens
// they stand in for do not exist yet.
const SCREENS: &[ScreenDefinition] = &[
    WELCOME,
    ScreenDefinition {
        id: ScreenId::Auth,
        title: "Join TheCircle 🔐",
        options: &[
            nav("1", "Register (Free)", ScreenId::Welcome, "✍️"),
            nav("2", "Login with Phone", ScreenId::Welcome, "📱"),
            nav("3", "Forgot Password", ScreenId::Welcome, "🔑"),
            MenuOption::new("0", "Back", Target::Back),
        ],
    },
    ScreenDefinition {
        id: ScreenId::FaithPaths,
        title: "Faith Paths 📖",
        options: &[
            nav("1", "New Believer Journey", ScreenId::FaithPaths, "🌱"),
            nav("2", "Prayer & Worship", ScreenId::FaithPaths, "🙏"),
            nav("3", "Bible Study Plans", ScreenId::FaithPaths, "📚"),
            nav("4", "Discipleship Training", ScreenId::FaithPaths, "🎯"),
            nav("5", "Mental Health & Faith", ScreenId::FaithPaths, "💙"),
            nav("9", "Daily Verse (SMS)", ScreenId::FaithPaths, "✉️"),
            MAIN_MENU,
        ],
    },
    ScreenDefinition {
        id: ScreenId::LearnEarn,
        title: "Learn & Earn 🎓",
        options: &[
            nav("1", "Free Skills Courses", ScreenId::LearnEarn, "💻"),
            nav("2", "Job Opportunities", ScreenId::LearnEarn, "💼"),
            nav("3", "Mentorship Program", ScreenId::LearnEarn, "👨‍🏫"),
            nav("4", "Certifications", ScreenId::LearnEarn, "🏆"),
            nav("5", "Scholarship Info", ScreenId::LearnEarn, "🎓"),
            MAIN_MENU,
        ],
    },
    ScreenDefinition {
        id: ScreenId::Circles,
        title: "Circles (Groups) 🤝",
        options: &[
            nav("1", "Join Prayer Circle", ScreenId::Circles, "🙏"),
            nav("2", "Find Study Group", ScreenId::Circles, "📖"),
            nav("3", "Youth Fellowship", ScreenId::Circles, "🎉"),
            nav("4", "Career Support Group", ScreenId::Circles, "💼"),
            nav("5", "My Active Circles", ScreenId::Circles, "👥"),
            nav("6", "Create New Circle", ScreenId::Circles, "➕"),
            MAIN_MENU,
        ],
    },
    ScreenDefinition {
        id: ScreenId::TheWall,
        title: "The Wall 🙏",
        options: &[
            nav("1", "Post Prayer Request", ScreenId::TheWall, "🙏"),
            nav("2", "Share Testimony", ScreenId::TheWall, "✨"),
            nav("3", "View Latest Posts", ScreenId::TheWall, "📱"),
            nav("4", "My Posts", ScreenId::TheWall, "📝"),
            nav("5", "Saved Posts", ScreenId::TheWall, "🔖"),
            MAIN_MENU,
        ],
    },
    ScreenDefinition {
        id: ScreenId::Marketplace,
        title: "Marketplace 🛍",
        options: &[
            nav("1", "Creative Services", ScreenId::Marketplace, "🎨"),
            nav("2", "Digital Products", ScreenId::Marketplace, "💾"),
            nav("3", "Freelance Gigs", ScreenId::Marketplace, "💻"),
            nav("4", "My Listings", ScreenId::Marketplace, "📦"),
            nav("5", "Post New Service", ScreenId::Marketplace, "➕"),
            MAIN_MENU,
        ],
    },
    ScreenDefinition {
        id: ScreenId::Events,
        title: "Events & Resources 📅",
        options: &[
            nav("1", "Upcoming Events", ScreenId::Events, "📅"),
            nav("2", "Safe Spaces Near Me", ScreenId::Events, "📍"),
            nav("3", "Church Services", ScreenId::Events, "⛪"),
            nav("4", "Workshops & Training", ScreenId::Events, "🎓"),
            nav("5", "Get Help Now (Crisis)", ScreenId::Events, "🆘"),
            nav("9", "Event Reminders (SMS)", ScreenId::Events, "🔔"),
            MAIN_MENU,
        ],
    },
    ScreenDefinition {
        id: ScreenId::Profile,
        title: "My Profile 👤",
        options: &[
            nav("1", "View My Info", ScreenId::Profile, "ℹ️"),
            nav("2", "Update Phone Number", ScreenId::Profile, "📱"),
            nav("3", "My Achievements", ScreenId::Profile, "🏆"),
            nav("4", "Settings", ScreenId::Profile, "⚙️"),
            nav("5", "Privacy & Security", ScreenId::Profile, "🔒"),
            nav("6", "Help & Support", ScreenId::Profile, "❓"),
            MAIN_MENU,
        ],
    },
];

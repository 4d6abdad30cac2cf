//! Screen selection for the presentation layer
//!
//! The kernel only reports an [`Outcome`]. Which screen is showing is owned by
//! the caller; this table tracks it and reports switches.

use serde::{Deserialize, Serialize};

use crate::sim::Outcome;

/// Screens a front end can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    /// Nothing drawn yet (before the session starts)
    #[default]
    Noop,
    Normal,
    Dead,
    Win,
}

impl Screen {
    pub fn for_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Normal => Screen::Normal,
            Outcome::Dead => Screen::Dead,
            Outcome::Win => Screen::Win,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Noop => "noop",
            Screen::Normal => "normal",
            Screen::Dead => "dead",
            Screen::Win => "win",
        }
    }

    /// Banner text for the end screens
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            Screen::Dead => Some("You are dead"),
            Screen::Win => Some("You won!"),
            Screen::Noop | Screen::Normal => None,
        }
    }
}

/// Tracks the active screen across ticks
#[derive(Debug, Clone, Default)]
pub struct ScreenTable {
    active: Screen,
}

impl ScreenTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Screen {
        self.active
    }

    /// Feed a tick outcome; returns the new screen if it changed
    pub fn switch(&mut self, outcome: Outcome) -> Option<Screen> {
        let next = Screen::for_outcome(outcome);
        if next == self.active {
            return None;
        }
        log::debug!("screen {} -> {}", self.active.as_str(), next.as_str());
        self.active = next;
        Some(next)
    }
}

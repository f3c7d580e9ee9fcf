//! Panel State
//!
//! Tracks which HUD panel is active. The configured order defines the swipe
//! cycle.

use super::HudError;
use serde::{Deserialize, Serialize};

/// Named HUD panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelName {
    Main,
    Spells,
    Inventory,
    Settings,
}

impl PanelName {
    /// All panels in default order.
    pub const ALL: [PanelName; 4] = [
        PanelName::Main,
        PanelName::Spells,
        PanelName::Inventory,
        PanelName::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PanelName::Main => "main",
            PanelName::Spells => "spells",
            PanelName::Inventory => "inventory",
            PanelName::Settings => "settings",
        }
    }
}

impl std::fmt::Display for PanelName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PanelName {
    type Err = HudError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PanelName::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| HudError::UnknownPanel(s.to_string()))
    }
}

/// Relative panel movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelStep {
    Next,
    Previous,
}

impl PanelStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelStep::Next => "next",
            PanelStep::Previous => "previous",
        }
    }
}

/// Active panel tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    order: Vec<PanelName>,
    active: usize,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            order: PanelName::ALL.to_vec(),
            active: 0,
        }
    }
}

impl PanelState {
    /// Create a panel state over the given order, starting at the first panel.
    pub fn new(order: Vec<PanelName>) -> Result<Self, HudError> {
        if order.is_empty() {
            return Err(HudError::EmptyPanelOrder);
        }
        for (i, panel) in order.iter().enumerate() {
            if order[..i].contains(panel) {
                return Err(HudError::DuplicatePanel(*panel));
            }
        }

        Ok(Self { order, active: 0 })
    }

    /// Get the active panel.
    pub fn current(&self) -> PanelName {
        self.order[self.active]
    }

    /// Get the panel order.
    pub fn order(&self) -> &[PanelName] {
        &self.order
    }

    /// Get the number of panels.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Position of `name` in the order.
    pub fn index_of(&self, name: PanelName) -> Option<usize> {
        self.order.iter().position(|p| *p == name)
    }

    /// Move to the next or previous panel, wrapping at either end.
    pub fn advance(&mut self, step: PanelStep) -> PanelName {
        let count = self.order.len();
        self.active = match step {
            PanelStep::Next => (self.active + 1) % count,
            PanelStep::Previous => (self.active + count - 1) % count,
        };
        self.current()
    }

    /// Activate a panel by name.
    pub fn select(&mut self, name: PanelName) -> Result<PanelName, HudError> {
        let index = self.index_of(name).ok_or(HudError::InvalidPanel(name))?;
        self.active = index;
        Ok(name)
    }
}

//! Command Mapping
//!
//! Defines the HUD commands and the stateless mapping from buttons, panel
//! tabs and gestures to commands.

use super::panels::{PanelName, PanelStep};
use crate::audio::FeedbackCategory;
use crate::input::{Gesture, SwipeDirection};
use serde::{Deserialize, Serialize};

/// HUD buttons, identified by their kebab-case action names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonId {
    // D-pad
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    ContextMenu,

    PrimaryAction,

    // Action buttons
    CastSpell,
    Ability,
    UseItem,
    UseSkill,

    // Top controls
    PanCamera,
    ZoomToggle,
    ToggleMenu,
}

impl ButtonId {
    /// All buttons in layout order.
    pub const ALL: [ButtonId; 13] = [
        ButtonId::MoveUp,
        ButtonId::MoveDown,
        ButtonId::MoveLeft,
        ButtonId::MoveRight,
        ButtonId::ContextMenu,
        ButtonId::PrimaryAction,
        ButtonId::CastSpell,
        ButtonId::Ability,
        ButtonId::UseItem,
        ButtonId::UseSkill,
        ButtonId::PanCamera,
        ButtonId::ZoomToggle,
        ButtonId::ToggleMenu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonId::MoveUp => "move-up",
            ButtonId::MoveDown => "move-down",
            ButtonId::MoveLeft => "move-left",
            ButtonId::MoveRight => "move-right",
            ButtonId::ContextMenu => "context-menu",
            ButtonId::PrimaryAction => "primary-action",
            ButtonId::CastSpell => "cast-spell",
            ButtonId::Ability => "ability",
            ButtonId::UseItem => "use-item",
            ButtonId::UseSkill => "use-skill",
            ButtonId::PanCamera => "pan-camera",
            ButtonId::ZoomToggle => "zoom-toggle",
            ButtonId::ToggleMenu => "toggle-menu",
        }
    }

    /// Look up a button by action name.
    pub fn from_name(name: &str) -> Option<Self> {
        ButtonId::ALL.into_iter().find(|b| b.as_str() == name)
    }
}

impl std::fmt::Display for ButtonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target of a panel switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelTarget {
    /// Resolved against the active panel at dispatch time
    Relative(PanelStep),
    /// Explicit tab selection
    Named(PanelName),
}

/// Abstract HUD commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Move the selection by whole grid cells
    MoveBy { dx: i32, dy: i32 },
    PrimaryAction,
    OpenSpellMenu,
    OpenAbilityMenu,
    OpenInventory,
    OpenSkillCheck,
    PanCamera,
    ToggleZoom,
    ToggleMenu,
    SwitchPanel(PanelTarget),
    NoOp,
}

impl Command {
    /// Stable kind label used in outcome events.
    pub fn kind(&self) -> &'static str {
        match self {
            Command::MoveBy { .. } => "move_by",
            Command::PrimaryAction => "primary_action",
            Command::OpenSpellMenu => "open_spell_menu",
            Command::OpenAbilityMenu => "open_ability_menu",
            Command::OpenInventory => "open_inventory",
            Command::OpenSkillCheck => "open_skill_check",
            Command::PanCamera => "pan_camera",
            Command::ToggleZoom => "toggle_zoom",
            Command::ToggleMenu => "toggle_menu",
            Command::SwitchPanel(_) => "switch_panel",
            Command::NoOp => "no_op",
        }
    }

    /// Feedback played when this command succeeds.
    ///
    /// Relative panel switches only come from swipes; everything else is a
    /// button or tab press.
    pub fn feedback_category(&self) -> Option<FeedbackCategory> {
        match self {
            Command::NoOp => None,
            Command::SwitchPanel(PanelTarget::Relative(_)) => Some(FeedbackCategory::Swipe),
            _ => Some(FeedbackCategory::Click),
        }
    }
}

/// Anything the HUD can turn into a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputId {
    Button(ButtonId),
    Tab(PanelName),
    Gesture(Gesture),
}

/// Stateless input-to-command lookup.
pub struct CommandMap;

impl CommandMap {
    /// Map any input to its command.
    pub fn map(input: &InputId) -> Command {
        match input {
            InputId::Button(button) => Self::map_button(*button),
            InputId::Tab(panel) => Command::SwitchPanel(PanelTarget::Named(*panel)),
            InputId::Gesture(gesture) => Self::map_gesture(*gesture),
        }
    }

    pub fn map_button(button: ButtonId) -> Command {
        match button {
            ButtonId::MoveUp => Command::MoveBy { dx: 0, dy: -1 },
            ButtonId::MoveDown => Command::MoveBy { dx: 0, dy: 1 },
            ButtonId::MoveLeft => Command::MoveBy { dx: -1, dy: 0 },
            ButtonId::MoveRight => Command::MoveBy { dx: 1, dy: 0 },
            ButtonId::ContextMenu => Command::NoOp,
            ButtonId::PrimaryAction => Command::PrimaryAction,
            ButtonId::CastSpell => Command::OpenSpellMenu,
            ButtonId::Ability => Command::OpenAbilityMenu,
            ButtonId::UseItem => Command::OpenInventory,
            ButtonId::UseSkill => Command::OpenSkillCheck,
            ButtonId::PanCamera => Command::PanCamera,
            ButtonId::ZoomToggle => Command::ToggleZoom,
            ButtonId::ToggleMenu => Command::ToggleMenu,
        }
    }

    pub fn map_gesture(gesture: Gesture) -> Command {
        match gesture {
            Gesture::Swipe(SwipeDirection::Left) => {
                Command::SwitchPanel(PanelTarget::Relative(PanelStep::Next))
            }
            Gesture::Swipe(SwipeDirection::Right) => {
                Command::SwitchPanel(PanelTarget::Relative(PanelStep::Previous))
            }
            Gesture::Swipe(SwipeDirection::Up | SwipeDirection::Down) => Command::NoOp,
            Gesture::Tap | Gesture::None => Command::NoOp,
        }
    }

    /// Map a button action name; unknown names become `NoOp`.
    pub fn resolve_action(name: &str) -> Command {
        match ButtonId::from_name(name) {
            Some(button) => Self::map_button(button),
            None => {
                tracing::debug!("Unknown action identifier: {}", name);
                Command::NoOp
            }
        }
    }

    /// Map a panel tab name; unknown names become `NoOp`.
    pub fn resolve_panel(name: &str) -> Command {
        match name.parse::<PanelName>() {
            Ok(panel) => Self::map(&InputId::Tab(panel)),
            Err(e) => {
                tracing::debug!("{}", e);
                Command::NoOp
            }
        }
    }
}

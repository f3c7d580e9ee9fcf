//! Scripted host and input replay.
//!
//! Drives a [`TouchHud`] from a JSON-lines script against an in-memory host
//! that records every request made of it.

use crate::hud::{
    Entity, HostContext, HostUi, NoticeLevel, OutcomeEvent, SelectionProvider, TouchHud,
};
use crate::input::TouchEvent;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Default grid cell size in board units.
pub const DEFAULT_GRID_UNIT: f64 = 100.0;

/// In-memory board with an optional selected token.
#[derive(Debug, Clone)]
pub struct ScriptedBoard {
    pub selected: Option<Entity>,
    pub grid_unit: f64,
    /// Every move request as (entity, x, y)
    pub moves: Vec<(Uuid, f64, f64)>,
}

impl Default for ScriptedBoard {
    fn default() -> Self {
        Self {
            selected: None,
            grid_unit: DEFAULT_GRID_UNIT,
            moves: Vec::new(),
        }
    }
}

impl SelectionProvider for ScriptedBoard {
    fn selected_entity(&self) -> Option<Entity> {
        self.selected.clone()
    }

    fn grid_unit_size(&self) -> f64 {
        self.grid_unit
    }

    fn request_move(&mut self, entity: &Entity, x: f64, y: f64) {
        self.moves.push((entity.id, x, y));
        if let Some(selected) = self.selected.as_mut().filter(|s| s.id == entity.id) {
            selected.x = x;
            selected.y = y;
        }
    }
}

/// In-memory camera and notification area.
#[derive(Debug, Clone)]
pub struct ScriptedScreen {
    pub camera_scale: f64,
    /// Every zoom request as (scale, animated)
    pub zoom_requests: Vec<(f64, bool)>,
    pub sidebar_open: bool,
    pub notices: Vec<(NoticeLevel, String)>,
}

impl Default for ScriptedScreen {
    fn default() -> Self {
        Self {
            camera_scale: 1.0,
            zoom_requests: Vec::new(),
            sidebar_open: false,
            notices: Vec::new(),
        }
    }
}

impl HostUi for ScriptedScreen {
    fn camera_scale(&self) -> f64 {
        self.camera_scale
    }

    fn set_camera_scale(&mut self, scale: f64, animated: bool) {
        self.zoom_requests.push((scale, animated));
        self.camera_scale = scale;
    }

    fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    fn notify(&mut self, level: NoticeLevel, message: &str) {
        self.notices.push((level, message.to_string()));
    }
}

/// Scripted host combining board and screen.
#[derive(Debug, Clone, Default)]
pub struct ScriptedHost {
    pub board: ScriptedBoard,
    pub screen: ScriptedScreen,
}

impl ScriptedHost {
    /// Create a host with `entity` selected.
    pub fn with_selection(entity: Entity, grid_unit: f64) -> Self {
        Self {
            board: ScriptedBoard {
                selected: Some(entity),
                grid_unit,
                moves: Vec::new(),
            },
            screen: ScriptedScreen::default(),
        }
    }

    /// Borrow the host as a dispatch context.
    pub fn context(&mut self) -> HostContext<'_> {
        HostContext::new(&mut self.board, &mut self.screen)
    }
}

/// One scripted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ReplayInput {
    Touch { event: TouchEvent },
    Button { id: String },
    Tab { panel: String },
}

/// Replay errors
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Parse a JSON-lines script. Blank lines and `#` comments are skipped.
pub fn parse_script(script: &str) -> Result<Vec<ReplayInput>, ReplayError> {
    script
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|e| ReplayError::Parse {
                line: i + 1,
                message: e.to_string(),
            })
        })
        .collect()
}

/// Feed every input to the HUD and collect the outcomes.
pub fn run_script(
    hud: &mut TouchHud,
    host: &mut ScriptedHost,
    inputs: &[ReplayInput],
) -> Vec<OutcomeEvent> {
    let mut ctx = host.context();
    inputs
        .iter()
        .filter_map(|input| match input {
            ReplayInput::Touch { event } => hud.handle_touch(&mut ctx, *event),
            ReplayInput::Button { id } => hud.handle_button(&mut ctx, id),
            ReplayInput::Tab { panel } => hud.handle_tab(&mut ctx, panel),
        })
        .collect()
}

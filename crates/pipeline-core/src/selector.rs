use crate::constants::{TITLE_HINT, WINDOW_TITLE};
use crate::space::CoordinateSpace;

/// Digit keys that pick a stage. Anything not listed here is ignored.
pub const SPACE_KEY_BINDINGS: [(&str, CoordinateSpace); 4] = [
    ("1", CoordinateSpace::Model),
    ("2", CoordinateSpace::World),
    ("3", CoordinateSpace::View),
    ("4", CoordinateSpace::Clip),
];

pub const EXIT_KEY: &str = "Escape";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Repeat,
    Release,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Select(CoordinateSpace),
    Exit,
}

#[inline]
pub fn space_for_key(key: &str) -> Option<CoordinateSpace> {
    SPACE_KEY_BINDINGS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, space)| *space)
}

/// Owns the active coordinate space. Starts in model space.
#[derive(Clone, Debug, Default)]
pub struct StageSelector {
    active: CoordinateSpace,
}

impl StageSelector {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn active_space(&self) -> CoordinateSpace {
        self.active
    }

    pub fn set_active_space(&mut self, space: CoordinateSpace) {
        if self.active != space {
            log::debug!("[selector] {:?} -> {:?}", self.active, space);
        }
        self.active = space;
    }

    /// Apply one keyboard transition. Only fresh presses act; held keys
    /// (repeats) and releases never change state.
    pub fn handle_key(&mut self, key: &str, action: KeyAction) -> Option<Command> {
        if action != KeyAction::Press {
            return None;
        }
        if let Some(space) = space_for_key(key) {
            self.set_active_space(space);
            return Some(Command::Select(space));
        }
        (key == EXIT_KEY).then_some(Command::Exit)
    }

    pub fn title(&self) -> String {
        window_title(self.active)
    }
}

pub fn window_title(space: CoordinateSpace) -> String {
    format!("{WINDOW_TITLE} - {} {TITLE_HINT}", space.label())
}

use crate::{
    common::{Cell, MatchStatus},
    config::BOARD_CELLS,
    game::GameEngine,
};

/// View of the engine handed to a presentation layer after every operation.
/// Collaborators render from this; they hold no authoritative state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub cells: [Cell; BOARD_CELLS],
    pub status: MatchStatus,
    /// `true` until the first match starts; the front end shows the
    /// marker-choice prompt instead of the board.
    pub show_marker_prompt: bool,
}

impl From<&GameEngine> for Snapshot {
    fn from(engine: &GameEngine) -> Self {
        Snapshot {
            cells: *engine.board().cells(),
            status: engine.status(),
            show_marker_prompt: !engine.started(),
        }
    }
}

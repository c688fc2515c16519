//! All game entity types. Pure data, no logic.

use std::collections::BTreeSet;

pub const GOING_LEFT: i32 = -1;
pub const GOING_RIGHT: i32 = 1;
pub const STOPPED: i32 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Stop,
    Fire,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    /// More than half of the line is painted.
    LevelComplete,
    GameOver,
}

// ── Motion ────────────────────────────────────────────────────────────────────

/// Position and signed velocity on the line `[0, bound]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mover {
    pub position: i32,
    /// One of `GOING_LEFT`, `STOPPED`, `GOING_RIGHT`.
    pub direction: i32,
    pub speed: i32,
    pub bound: i32,
}

/// A dot that bounces between the screen edges and the painted walls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rover {
    pub mover: Mover,
}

// ── Player ────────────────────────────────────────────────────────────────────

/// Painted cells. A set: painting a cell twice neither scores twice nor
/// counts twice toward the level-up threshold.
pub type Walls = BTreeSet<i32>;

#[derive(Clone, Debug)]
pub struct Player {
    pub mover: Mover,
    /// Pending fire, consumed by the next update.
    pub firing: bool,
    pub dead: bool,
    pub walls: Walls,
}

// ── Master game state ─────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub rovers: Vec<Rover>,
    /// Carried across levels for the whole run.
    pub score: u32,
    /// Level index, also the number of rovers in play.
    pub level: u32,
    pub screen_size: i32,
}

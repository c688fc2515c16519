//! Game-logic functions.
//!
//! Movement, fire resolution and the per-tick step all mutate the state in
//! place.  Side effects are limited to the injected RNG, which only the
//! constructors touch.

use rand::Rng;

use crate::config::Config;
use crate::entities::{
    Command, GameState, GameStatus, Mover, Player, Rover, Walls, GOING_LEFT, GOING_RIGHT,
    STOPPED,
};
use crate::timing::FixedTimestep;

/// Points per newly painted cell.
pub const POINTS_PER_CELL: u32 = 100;

/// A rover this close to the player when it fires is a direct hit.
const MARGIN: i32 = 1;

/// Fraction of the line that must be painted (strictly exceeded) to level up.
const LEVEL_UP_RATIO: f64 = 0.50;

// ── Constructors ─────────────────────────────────────────────────────────────

impl Rover {
    /// Random position, left or right (never stopped), speed 1 or 2.
    pub fn new(screen_size: i32, rng: &mut impl Rng) -> Self {
        let direction = if rng.gen_bool(0.5) { GOING_LEFT } else { GOING_RIGHT };
        Rover {
            mover: Mover {
                position: rng.gen_range(0..=screen_size),
                direction,
                speed: rng.gen_range(1..=2),
                bound: screen_size,
            },
        }
    }

    pub fn position(&self) -> i32 {
        self.mover.position
    }

    pub fn update(&mut self, walls: &Walls) {
        self.mover.bounce(walls);
    }
}

impl Player {
    /// Random position, standing still, speed 1.
    pub fn new(screen_size: i32, rng: &mut impl Rng) -> Self {
        Player {
            mover: Mover {
                position: rng.gen_range(0..=screen_size),
                direction: STOPPED,
                speed: 1,
                bound: screen_size,
            },
            firing: false,
            dead: false,
            walls: Walls::new(),
        }
    }
}

/// Build the first level of a run: one rover, a fresh player, zero score.
pub fn init_state(config: &Config, rng: &mut impl Rng) -> GameState {
    new_level(config.screen_size(), 1, 0, rng)
}

/// Start the level after `state`: one more rover, walls cleared, score kept.
pub fn next_level(state: &GameState, rng: &mut impl Rng) -> GameState {
    new_level(state.screen_size, state.level + 1, state.score, rng)
}

fn new_level(screen_size: i32, level: u32, score: u32, rng: &mut impl Rng) -> GameState {
    let rovers = (0..level).map(|_| Rover::new(screen_size, rng)).collect();
    let player = Player::new(screen_size, rng);
    log::info!("level {} started, player at {}", level, player.mover.position);
    GameState {
        player,
        rovers,
        score,
        level,
        screen_size,
    }
}

// ── Motion ───────────────────────────────────────────────────────────────────

impl Mover {
    /// Nearest wall strictly ahead in the direction of travel. The screen
    /// edges count as walls.
    pub fn closest_wall(&self, walls: &Walls) -> i32 {
        if self.direction == GOING_LEFT {
            walls
                .range(..self.position)
                .next_back()
                .copied()
                .unwrap_or(0)
        } else {
            walls
                .range(self.position + 1..)
                .next()
                .copied()
                .unwrap_or(self.bound)
        }
    }

    /// Advance and bounce off the closest wall ahead, landing one cell short
    /// of it however far the step overshot.
    pub fn bounce(&mut self, walls: &Walls) {
        let closest = self.closest_wall(walls);
        self.position += self.direction * self.speed;
        if self.direction == GOING_RIGHT && self.position >= closest {
            self.position = closest - 1;
            self.direction = -self.direction;
        } else if self.direction == GOING_LEFT && self.position <= closest {
            self.position = closest + 1;
            self.direction = -self.direction;
        }
    }

    /// Advance and stop dead at either edge of the line.
    pub fn slide(&mut self) {
        self.position += self.direction * self.speed;
        if self.position > self.bound {
            self.direction = STOPPED;
            self.position = self.bound;
        } else if self.position < 0 {
            self.direction = STOPPED;
            self.position = 0;
        }
    }
}

// ── Input-driven state transitions ───────────────────────────────────────────

impl Player {
    pub fn slide_left(&mut self) {
        self.mover.direction = GOING_LEFT;
    }

    pub fn slide_right(&mut self) {
        self.mover.direction = GOING_RIGHT;
    }

    pub fn stop(&mut self) {
        self.mover.direction = STOPPED;
    }

    pub fn fire(&mut self) {
        self.firing = true;
    }

    pub fn die(&mut self) {
        self.dead = true;
    }

    pub fn position(&self) -> i32 {
        self.mover.position
    }

    pub fn should_level_up(&self) -> bool {
        self.walls.len() as f64 / self.mover.bound as f64 > LEVEL_UP_RATIO
    }

    /// Move, then resolve a pending fire. Returns `true` on a direct hit,
    /// in which case nothing is painted.
    pub fn update(&mut self, rovers: &[Rover], score: &mut u32) -> bool {
        if self.dead {
            return false;
        }
        self.mover.slide();
        if !self.firing {
            return false;
        }
        self.firing = false;

        let pos = self.mover.position;
        if self.walls.contains(&pos) {
            log::debug!("fire at {} void: already a wall", pos);
            return false;
        }

        // first the limiting walls either side of us
        let mut paint_left_until = self.walls.range(..pos).next_back().copied().unwrap_or(0);
        let mut paint_right_until = self
            .walls
            .range(pos + 1..)
            .next()
            .copied()
            .unwrap_or(self.mover.bound);

        // then rovers caught inside those walls
        for rover in rovers {
            let x = rover.position();
            if x > paint_left_until && x < pos - MARGIN {
                paint_left_until = pos;
            } else if x < paint_right_until && x > pos + MARGIN {
                paint_right_until = pos;
            } else if (x - pos).abs() <= MARGIN {
                log::debug!("fire at {} hit rover at {}", pos, x);
                return true;
            }
        }

        let painted = (paint_left_until..=paint_right_until)
            .filter(|&cell| self.walls.insert(cell))
            .count() as u32;
        *score = score.saturating_add(painted.saturating_mul(POINTS_PER_CELL));
        log::debug!(
            "fire at {} painted [{}, {}]: {} new cells",
            pos,
            paint_left_until,
            paint_right_until,
            painted
        );
        false
    }
}

/// Apply one input command to the player.
pub fn apply_command(player: &mut Player, command: Command) {
    match command {
        Command::MoveLeft => player.slide_left(),
        Command::MoveRight => player.slide_right(),
        Command::Stop => player.stop(),
        Command::Fire => player.fire(),
        Command::Quit => player.die(),
    }
}

// ── Per-tick step ────────────────────────────────────────────────────────────

/// One fixed simulation step. The player moves and fires first so the rovers
/// bounce off walls painted in this same tick.
pub fn step(rovers: &mut [Rover], player: &mut Player, score: &mut u32) {
    if player.update(rovers, score) {
        player.die();
        return;
    }
    for rover in rovers.iter_mut() {
        rover.update(&player.walls);
    }
}

/// Advance the whole game state by one tick.
pub fn tick(state: &mut GameState) {
    step(&mut state.rovers, &mut state.player, &mut state.score);
}

/// Spend every whole tick banked in `clock`, stopping as soon as the level is
/// decided. Returns the number of ticks run.
pub fn run_ticks(state: &mut GameState, clock: &mut FixedTimestep) -> u32 {
    let mut ran = 0;
    while status(state) == GameStatus::Playing && clock.consume_tick() {
        tick(state);
        ran += 1;
    }
    log::trace!("{} ticks run, {:?} still banked", ran, clock.lag());
    ran
}

/// Death outranks the level-up threshold.
pub fn status(state: &GameState) -> GameStatus {
    if state.player.dead {
        GameStatus::GameOver
    } else if state.player.should_level_up() {
        GameStatus::LevelComplete
    } else {
        GameStatus::Playing
    }
}

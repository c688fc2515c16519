//! Rendering layer. All terminal output lives here.
//!
//! `render_line` composes a frame into a plain string and is pure.  The
//! `draw_*` functions receive a mutable writer and only translate finished
//! text into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::entities::{Player, Rover};

// ── Glyphs ────────────────────────────────────────────────────────────────────

const G_EMPTY: char = ' ';
const G_ROVER: char = '.';
/// A rover drawn over something already on the cell.
const G_ROVER_STACKED: char = ':';
const G_WALL: char = '|';
const G_PLAYER: char = '_';
const G_PLAYER_ON_WALL: char = 'L';

const C_GAME_OVER: Color = Color::Red;
const C_SCORE: Color = Color::Yellow;

pub const GAME_OVER_BANNER: &str = "[G A M E  O V E R ]";

// ── Compositing ───────────────────────────────────────────────────────────────

/// Compose one frame: the playfield `[0, screen_size]` followed by the status
/// suffix.  Rovers go down first, then walls, then the player on top.
pub fn render_line(
    rovers: &[Rover],
    player: &Player,
    score: u32,
    level: u32,
    screen_size: i32,
) -> String {
    let mut cells = vec![G_EMPTY; screen_size as usize + 1];

    for rover in rovers {
        if let Some(cell) = cell_mut(&mut cells, rover.position()) {
            *cell = if *cell == G_EMPTY { G_ROVER } else { G_ROVER_STACKED };
        }
    }
    for &wall in &player.walls {
        if let Some(cell) = cell_mut(&mut cells, wall) {
            *cell = G_WALL;
        }
    }
    if let Some(cell) = cell_mut(&mut cells, player.position()) {
        *cell = if *cell == G_WALL { G_PLAYER_ON_WALL } else { G_PLAYER };
    }

    let mut line: String = cells.into_iter().collect();
    line.push_str(&status_suffix(level, score));
    line
}

pub fn status_suffix(level: u32, score: u32) -> String {
    format!("| Level {} Score {}", level, score)
}

fn cell_mut(cells: &mut [char], x: i32) -> Option<&mut char> {
    usize::try_from(x).ok().and_then(|i| cells.get_mut(i))
}

// ── Terminal output ───────────────────────────────────────────────────────────

/// Overwrite the current terminal line with `line`.
pub fn draw_frame<W: Write>(out: &mut W, line: &str) -> std::io::Result<()> {
    out.queue(cursor::MoveToColumn(0))?;
    out.queue(Print(line))?;
    out.queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
    out.flush()?;
    Ok(())
}

pub fn draw_startup_banner<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(Print(format!(
        "xonitix {}: arrows move, space fires, q quits. try -h for usage\r\n",
        env!("CARGO_PKG_VERSION")
    )))?;
    out.flush()?;
    Ok(())
}

/// Leave the playfield behind and report the final score.
pub fn draw_game_over<W: Write>(out: &mut W, score: u32) -> std::io::Result<()> {
    out.queue(Print("\r\n"))?;
    out.queue(style::SetForegroundColor(C_GAME_OVER))?;
    out.queue(Print(GAME_OVER_BANNER))?;
    out.queue(Print("\r\n"))?;
    out.queue(style::SetForegroundColor(C_SCORE))?;
    out.queue(Print(format!("Final score: {}", score)))?;
    out.queue(style::ResetColor)?;
    out.queue(Print("\r\n"))?;
    out.flush()?;
    Ok(())
}

/// Stealth exit: wipe the playfield so nothing is left on screen.
pub fn draw_stealth_clear<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
    out.queue(cursor::MoveToColumn(0))?;
    out.queue(Print("\r\n"))?;
    out.flush()?;
    Ok(())
}

//! Keyboard mapping and per-frame input latching.
//!
//! The terminal may deliver several key events between two frames.  They are
//! collapsed into an `InputLatch` so that at most one movement and one fire
//! reach the player per frame.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::compute::apply_command;
use crate::entities::{Command, Player};

/// Non-blocking source of terminal events.
pub trait EventSource {
    /// True if `next_event` would return without blocking.
    fn has_event(&mut self) -> std::io::Result<bool>;
    fn next_event(&mut self) -> std::io::Result<Event>;
}

/// The real terminal, read through crossterm.
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn has_event(&mut self) -> std::io::Result<bool> {
        event::poll(Duration::ZERO)
    }

    fn next_event(&mut self) -> std::io::Result<Event> {
        event::read()
    }
}

/// Latch every pending event without blocking.
pub fn poll_input(source: &mut impl EventSource, latch: &mut InputLatch) -> std::io::Result<()> {
    while source.has_event()? {
        if let Some(command) = command_for(&source.next_event()?) {
            latch.latch(command);
        }
    }
    Ok(())
}

/// Throw away everything typed while the game was not listening, e.g. during
/// the level-up pause. Returns how many events were dropped.
pub fn discard_input(source: &mut impl EventSource) -> std::io::Result<usize> {
    let mut dropped = 0;
    while source.has_event()? {
        source.next_event()?;
        dropped += 1;
    }
    Ok(dropped)
}

/// Translate a terminal event into a game command, if it is one.
pub fn command_for(event: &Event) -> Option<Command> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind,
        ..
    }) = event
    else {
        return None;
    };
    if *kind == KeyEventKind::Release {
        return None;
    }
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::Stop),
        KeyCode::Char(' ') => Some(Command::Fire),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputLatch {
    /// Last of `MoveLeft`, `MoveRight` or `Stop` seen this frame.
    pub direction: Option<Command>,
    pub fire: bool,
    pub quit: bool,
}

impl InputLatch {
    pub fn latch(&mut self, command: Command) {
        match command {
            Command::MoveLeft | Command::MoveRight | Command::Stop => {
                self.direction = Some(command)
            }
            Command::Fire => self.fire = true,
            Command::Quit => self.quit = true,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Hand the latched intents to the player and clear the latch.
    pub fn apply(&mut self, player: &mut Player) {
        if self.quit {
            apply_command(player, Command::Quit);
        }
        if let Some(direction) = self.direction {
            apply_command(player, direction);
        }
        if self.fire {
            apply_command(player, Command::Fire);
        }
        *self = Self::default();
    }
}

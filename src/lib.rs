//! Xonitix, a one-line terminal game where you gain points by limiting the
//! space of the moving dots.
//!
//! - `entities`: pure data (movers, rovers, player, game state)
//! - `compute`: movement, fire resolution and the per-tick step
//! - `timing`: fixed-timestep accumulator
//! - `input`: key mapping and per-frame latching
//! - `display`: single-line compositing and terminal output
//! - `config`: command line and validated startup configuration

pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod input;
pub mod timing;

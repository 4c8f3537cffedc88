//! Rules of Go: board state, captures, suicide and the turn/pass state machine.

use serde::Serialize;

pub mod board;
pub mod error;
pub mod game;
pub mod stones;

pub use board::Group;
pub use error::IllegalMove;

/// Side length used when none is given.
pub const DEFAULT_SIZE: usize = 9;

/// A player color. The discriminants match the `1` / `-1` encoding
/// used by downstream feature planes.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum Color {
  Black = 1,
  White = -1,
}

/// Occupancy of a single cell.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum Stone {
  Empty = 0,
  Black = 1,
  White = -1,
}

/// A 0-based board coordinate, `x` is the column and `y` the row.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize)]
pub struct Point {
  pub x: usize,
  pub y: usize,
}

/// Either a stone placement or a pass.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum Move {
  Place(Point),
  Pass,
}

/// A square grid of stones.
///
/// There is no ko rule: any position may repeat.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct Board {
  size: usize,
  grid: Vec<Stone>, // row-major, y * size + x
}

/// A two player game on one [`Board`], ending after two consecutive passes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game {
  board: Board,
  turn: Color,
  consecutive_passes: u32,
  finished: bool,
}

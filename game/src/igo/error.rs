use super::Point;
use derive_more::{Display, Error};

/// Why a move was rejected.
///
/// Every variant leaves the board and game state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum IllegalMove {
  #[display("{} is off the board", _0)]
  OffBoard(#[error(not(source))] Point),
  #[display("{} is already occupied", _0)]
  Occupied(#[error(not(source))] Point),
  #[display("playing at {} would be suicide", _0)]
  Suicide(#[error(not(source))] Point),
  #[display("the game is over")]
  GameOver,
}

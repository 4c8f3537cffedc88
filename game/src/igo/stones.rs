use super::*;
use std::fmt;
use std::fmt::{Display, Formatter};
use auto_ops::impl_op;
use serde::{Serialize, Serializer};

impl_op!(- |a: Color| -> Color {
  match a {
    Color::Black => Color::White,
    Color::White => Color::Black,
  }
});

impl Color {
  pub fn rev(self) -> Color {
    -self
  }
}

impl From<Color> for Stone {
  fn from(color: Color) -> Stone {
    match color {
      Color::Black => Stone::Black,
      Color::White => Stone::White,
    }
  }
}

impl Stone {
  pub fn color(self) -> Option<Color> {
    match self {
      Stone::Empty => None,
      Stone::Black => Some(Color::Black),
      Stone::White => Some(Color::White),
    }
  }
  pub fn is_empty(self) -> bool {
    self == Stone::Empty
  }
  pub fn glyph(self) -> char {
    match self {
      Stone::Empty => '.',
      Stone::Black => 'X',
      Stone::White => 'O',
    }
  }
}

impl PartialEq<Color> for Stone {
  fn eq(&self, rhs: &Color) -> bool {
    *self == Stone::from(*rhs)
  }
}

impl Point {
  pub fn new(x: usize, y: usize) -> Point {
    Point { x, y }
  }
}

impl Move {
  /// Flat index of the move: `y * size + x` for a placement, `size * size` for a pass.
  pub fn index(&self, size: usize) -> usize {
    match self {
      Move::Place(p) => p.y * size + p.x,
      Move::Pass => size * size,
    }
  }
  /// Inverse of [`Move::index`]; `None` past the pass index.
  pub fn from_index(index: usize, size: usize) -> Option<Move> {
    let cells = size * size;
    if index < cells {
      Some(Move::Place(Point::new(index % size, index / size)))
    } else if index == cells {
      Some(Move::Pass)
    } else {
      None
    }
  }
}

impl From<Point> for Move {
  fn from(p: Point) -> Move {
    Move::Place(p)
  }
}

// "pass" for a pass, the point itself otherwise
impl Serialize for Move {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Move::Place(p) => p.serialize(serializer),
      Move::Pass => serializer.serialize_str("pass"),
    }
  }
}

impl Display for Color {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Color::Black => write!(f, "Black"),
      Color::White => write!(f, "White"),
    }
  }
}

impl Display for Stone {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.glyph())
  }
}

impl Display for Point {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

impl Display for Move {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Move::Place(p) => write!(f, "{}", p),
      Move::Pass => write!(f, "pass"),
    }
  }
}

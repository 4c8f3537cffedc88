use super::*;
use std::collections::HashSet;
use std::fmt;
use std::fmt::{Display, Formatter};
use tracing::{debug, trace};

/// A connected group of same-colored stones and its liberty count.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Group {
  pub stones: Vec<Point>,
  pub liberties: usize,
}

impl Board {
  pub fn new(size: usize) -> Board {
    Board {
      size,
      grid: vec![Stone::Empty; size * size],
    }
  }
  pub fn size(&self) -> usize {
    self.size
  }
  pub fn is_on_board(&self, x: usize, y: usize) -> bool {
    x < self.size && y < self.size
  }
  /// The stone at `(x, y)`, or `None` off the board.
  pub fn get(&self, x: usize, y: usize) -> Option<Stone> {
    if self.is_on_board(x, y) {
      Some(self.grid[y * self.size + x])
    } else {
      None
    }
  }
  fn stone(&self, p: Point) -> Stone {
    self.grid[p.y * self.size + p.x]
  }
  fn set(&mut self, p: Point, stone: Stone) {
    self.grid[p.y * self.size + p.x] = stone;
  }
  /// Every cell with its stone, row by row.
  pub fn cells(&self) -> impl Iterator<Item = (Point, Stone)> + '_ {
    let size = self.size;
    self.grid
      .iter()
      .enumerate()
      .map(move |(i, &s)| (Point::new(i % size, i / size), s))
  }
  pub fn count(&self, stone: Stone) -> usize {
    self.grid.iter().filter(|&&s| s == stone).count()
  }
  /// Orthogonal neighbours inside the board: left, right, up, down.
  pub fn neighbors(&self, x: usize, y: usize) -> Vec<Point> {
    let mut ns = Vec::with_capacity(4);
    if x > 0 {
      ns.push(Point::new(x - 1, y));
    }
    if x + 1 < self.size {
      ns.push(Point::new(x + 1, y));
    }
    if y > 0 {
      ns.push(Point::new(x, y - 1));
    }
    if y + 1 < self.size {
      ns.push(Point::new(x, y + 1));
    }
    ns
  }
  /// Flood fills the group containing `(x, y)`.
  ///
  /// An empty or off-board cell yields an empty group with no liberties.
  pub fn group_and_liberties(&self, x: usize, y: usize) -> Group {
    let color = match self.get(x, y) {
      Some(s) if !s.is_empty() => s,
      _ => return Group::default(),
    };
    let start = Point::new(x, y);
    let mut visited: HashSet<Point> = HashSet::new();
    let mut liberties: HashSet<Point> = HashSet::new();
    let mut stones = Vec::new();
    let mut stack = vec![start];
    visited.insert(start);
    while let Some(p) = stack.pop() {
      stones.push(p);
      for n in self.neighbors(p.x, p.y) {
        let s = self.stone(n);
        if s.is_empty() {
          liberties.insert(n);
        } else if s == color && visited.insert(n) {
          stack.push(n);
        }
      }
    }
    Group {
      stones,
      liberties: liberties.len(),
    }
  }
  // Place, capture and check suicide on a copy. Both the trial and the
  // commit path go through here.
  fn resolve(&self, color: Color, x: usize, y: usize) -> Result<(Board, Vec<Point>), IllegalMove> {
    let at = Point::new(x, y);
    match self.get(x, y) {
      None => return Err(IllegalMove::OffBoard(at)),
      Some(Stone::Empty) => {}
      Some(_) => return Err(IllegalMove::Occupied(at)),
    }
    let mut next = self.clone();
    next.set(at, color.into());
    let opp = Stone::from(-color);
    let mut dead: HashSet<Point> = HashSet::new();
    for n in next.neighbors(x, y) {
      if next.stone(n) != opp || dead.contains(&n) {
        continue;
      }
      let group = next.group_and_liberties(n.x, n.y);
      if group.liberties == 0 {
        dead.extend(group.stones);
      }
    }
    for &p in &dead {
      next.set(p, Stone::Empty);
    }
    if next.group_and_liberties(x, y).liberties == 0 {
      return Err(IllegalMove::Suicide(at));
    }
    let mut captured: Vec<Point> = dead.into_iter().collect();
    captured.sort_by_key(|p| (p.y, p.x));
    Ok((next, captured))
  }
  /// Whether `color` may play at `(x, y)`, with the reason when it may not.
  pub fn check(&self, color: Color, x: usize, y: usize) -> Result<(), IllegalMove> {
    self.resolve(color, x, y).map(|_| ()).map_err(|err| {
      trace!(%color, x, y, %err, "rejected");
      err
    })
  }
  pub fn is_legal(&self, color: Color, x: usize, y: usize) -> bool {
    self.check(color, x, y).is_ok()
  }
  /// Plays `color` at `(x, y)` and returns the captured points in row-major order.
  ///
  /// On error the board is left as it was.
  pub fn try_play(&mut self, color: Color, x: usize, y: usize) -> Result<Vec<Point>, IllegalMove> {
    let (next, captured) = self.resolve(color, x, y)?;
    *self = next;
    if !captured.is_empty() {
      debug!(%color, x, y, captured = captured.len(), "captured stones");
    }
    Ok(captured)
  }
  pub fn play_move(&mut self, color: Color, x: usize, y: usize) -> bool {
    self.try_play(color, x, y).is_ok()
  }
  /// Legal placements for `color`, row by row.
  pub fn legal_moves(&self, color: Color) -> Vec<Point> {
    self.cells()
      .filter(|&(p, s)| s.is_empty() && self.is_legal(color, p.x, p.y))
      .map(|(p, _)| p)
      .collect()
  }
}

impl Default for Board {
  fn default() -> Board {
    Board::new(DEFAULT_SIZE)
  }
}

impl Display for Board {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let rows: Vec<String> = self.grid
      .chunks(self.size.max(1))
      .map(|row| {
        row.iter()
          .map(|s| s.glyph().to_string())
          .collect::<Vec<_>>()
          .join(" ")
      })
      .collect();
    write!(f, "{}", rows.join("\n"))
  }
}

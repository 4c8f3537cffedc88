use super::*;
use tracing::{debug, instrument};

impl Game {
  pub fn new(size: usize) -> Game {
    Game {
      board: Board::new(size),
      turn: Color::Black,
      consecutive_passes: 0,
      finished: false,
    }
  }
  pub fn board(&self) -> &Board {
    &self.board
  }
  pub fn current_player(&self) -> Color {
    self.turn
  }
  pub fn is_over(&self) -> bool {
    self.finished
  }
  pub fn consecutive_passes(&self) -> u32 {
    self.consecutive_passes
  }
  /// Plays the current player at `(x, y)`, returning the captured points.
  ///
  /// A rejected move changes nothing.
  #[instrument(skip(self), fields(player = %self.turn))]
  pub fn try_play(&mut self, x: usize, y: usize) -> Result<Vec<Point>, IllegalMove> {
    if self.finished {
      return Err(IllegalMove::GameOver);
    }
    let captured = self.board.try_play(self.turn, x, y)?;
    debug!(x, y, captured = captured.len(), "played");
    self.consecutive_passes = 0;
    self.turn = -self.turn;
    Ok(captured)
  }
  pub fn play(&mut self, x: usize, y: usize) -> bool {
    self.try_play(x, y).is_ok()
  }
  /// Passes the turn. Returns `false` once the game is over.
  #[instrument(skip(self), fields(player = %self.turn))]
  pub fn pass(&mut self) -> bool {
    if self.finished {
      return false;
    }
    self.consecutive_passes += 1;
    if self.consecutive_passes >= 2 {
      self.finished = true;
      debug!("game over after two passes");
      return true;
    }
    self.turn = -self.turn;
    true
  }
  pub fn apply(&mut self, mov: Move) -> bool {
    match mov {
      Move::Place(p) => self.play(p.x, p.y),
      Move::Pass => self.pass(),
    }
  }
  /// Legal placements for the player to move followed by [`Move::Pass`].
  pub fn legal_moves(&self) -> Vec<Move> {
    let mut moves: Vec<Move> = self.board
      .legal_moves(self.turn)
      .into_iter()
      .map(Move::Place)
      .collect();
    moves.push(Move::Pass);
    moves
  }
}

impl Default for Game {
  fn default() -> Game {
    Game::new(DEFAULT_SIZE)
  }
}

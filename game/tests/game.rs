use go_rules::igo::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::io;
use std::sync::{Arc, Mutex};

// collects formatted log lines for inspection
#[derive(Clone, Default)]
struct LogBuf(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuf {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.0.lock().unwrap().extend_from_slice(buf);
    Ok(buf.len())
  }
  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

impl LogBuf {
  fn text(&self) -> String {
    String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
  }
}

#[cfg(test)]
mod game {
  use super::*;

  #[test]
  fn new_game() {
    let game = Game::default();
    assert_eq!(game.current_player(), Color::Black);
    assert_eq!(game.consecutive_passes(), 0);
    assert!(!game.is_over());
    assert_eq!(game.board().size(), 9);
  }
  #[test]
  fn play_alternates_turn() {
    let mut game = Game::default();
    assert!(game.play(4, 4));
    assert_eq!(game.current_player(), Color::White);
    assert_eq!(game.board().get(4, 4), Some(Stone::Black));
    assert!(game.play(3, 3));
    assert_eq!(game.current_player(), Color::Black);
    assert_eq!(game.board().get(3, 3), Some(Stone::White));
  }
  #[test]
  fn failed_play_changes_nothing() {
    let mut game = Game::default();
    assert!(game.play(4, 4));
    assert!(game.pass());
    let before = game.clone();
    assert!(!game.play(4, 4));
    assert!(!game.play(9, 0));
    assert_eq!(game.try_play(4, 4), Err(IllegalMove::Occupied(Point::new(4, 4))));
    assert_eq!(game, before);
    assert_eq!(game.consecutive_passes(), 1);
  }
  #[test]
  fn suicide_rejected_in_game() {
    let mut game = Game::default();
    // B(5,5) W(1,0) B(6,6) W(0,1), then black at (0,0) is suicide
    for &(x, y) in &[(5, 5), (1, 0), (6, 6), (0, 1)] {
      assert!(game.play(x, y));
    }
    let before = game.clone();
    assert_eq!(game.try_play(0, 0), Err(IllegalMove::Suicide(Point::new(0, 0))));
    assert_eq!(game, before);
    assert_eq!(game.current_player(), Color::Black);
  }
  #[test]
  fn capture_in_game() {
    let mut game = Game::default();
    for &(x, y) in &[(0, 1), (1, 1), (2, 1), (8, 8), (1, 0), (8, 7)] {
      assert!(game.play(x, y));
    }
    assert_eq!(game.try_play(1, 2), Ok(vec![Point::new(1, 1)]));
    assert_eq!(game.board().get(1, 1), Some(Stone::Empty));
    assert_eq!(game.current_player(), Color::White);
  }
  #[test]
  fn two_passes_end_the_game() {
    let mut game = Game::default();
    assert!(game.pass());
    assert_eq!(game.current_player(), Color::White);
    assert!(!game.is_over());
    assert!(game.pass());
    assert!(game.is_over());
    // turn is not flipped by the final pass
    assert_eq!(game.current_player(), Color::White);
  }
  #[test]
  fn play_resets_passes() {
    let mut game = Game::default();
    assert!(game.pass());
    assert!(game.play(2, 2));
    assert_eq!(game.consecutive_passes(), 0);
    assert!(game.pass());
    assert!(!game.is_over());
    assert_eq!(game.current_player(), Color::White);
  }
  #[test]
  fn failed_play_keeps_pass_count() {
    let mut game = Game::default();
    assert!(game.play(2, 2));
    assert!(game.pass());
    assert!(!game.play(2, 2));
    assert!(game.pass());
    assert!(game.is_over());
  }
  #[test]
  fn finished_game_is_frozen() {
    let mut game = Game::default();
    game.pass();
    game.pass();
    let before = game.clone();
    assert!(!game.pass());
    assert!(!game.play(0, 0));
    assert_eq!(game.try_play(0, 0), Err(IllegalMove::GameOver));
    assert!(!game.apply(Move::Pass));
    assert_eq!(game, before);
  }
  #[test]
  fn legal_moves_end_with_pass() {
    let mut game = Game::default();
    let moves = game.legal_moves();
    assert_eq!(moves.len(), 82);
    assert_eq!(moves[0], Move::Place(Point::new(0, 0)));
    assert_eq!(moves.last(), Some(&Move::Pass));
    assert!(game.play(0, 0));
    let moves = game.legal_moves();
    assert_eq!(moves.len(), 81);
    assert!(!moves.contains(&Move::Place(Point::new(0, 0))));
  }
  #[test]
  fn pass_always_available() {
    let mut game = Game::new(1);
    // a lone point is suicide for either side
    assert_eq!(game.legal_moves(), vec![Move::Pass]);
    assert!(game.apply(Move::Pass));
    assert!(game.apply(Move::Pass));
    assert!(game.is_over());
  }
  #[test]
  fn apply_dispatches() {
    let mut game = Game::default();
    assert!(game.apply(Move::Place(Point::new(3, 3))));
    assert!(game.apply(Move::Pass));
    assert_eq!(game.board().get(3, 3), Some(Stone::Black));
    assert_eq!(game.current_player(), Color::Black);
    assert_eq!(game.consecutive_passes(), 1);
  }
  #[test]
  fn move_indices_of_legal_moves() {
    let game = Game::default();
    let indices: Vec<usize> = game.legal_moves().iter().map(|m| m.index(9)).collect();
    assert_eq!(indices, (0..82).collect::<Vec<_>>());
  }
  #[test]
  fn committed_move_is_logged() {
    let logs = LogBuf::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
      .with_max_level(tracing::Level::DEBUG)
      .with_ansi(false)
      .with_writer(move || writer.clone())
      .finish();
    let mut game = Game::default();
    tracing::subscriber::with_default(subscriber, || {
      assert!(game.play(4, 4));
      assert!(!game.play(4, 4));
    });
    let text = logs.text();
    assert_eq!(text.matches("played").count(), 1);
    assert!(text.contains("x=4"));
    assert!(text.contains("captured=0"));
  }
  #[test]
  fn random_games_keep_invariants() {
    for seed in 0..4 {
      let mut rng = StdRng::seed_from_u64(seed);
      let mut game = Game::default();
      for _ in 0..300 {
        if game.is_over() {
          break;
        }
        let player = game.current_player();
        let passes = game.consecutive_passes();
        let mov = *game.legal_moves().choose(&mut rng).unwrap();
        assert!(game.apply(mov));
        match mov {
          Move::Place(p) => {
            assert_eq!(game.board().get(p.x, p.y), Some(Stone::from(player)));
            assert_eq!(game.consecutive_passes(), 0);
            assert_eq!(game.current_player(), -player);
          }
          Move::Pass => {
            assert_eq!(game.consecutive_passes(), passes + 1);
            assert_eq!(game.is_over(), passes == 1);
            if !game.is_over() {
              assert_eq!(game.current_player(), -player);
            }
          }
        }
      }
    }
  }
}

use go_rules::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let mut game = Game::default();
  let grid_moves = game.legal_moves().len() - 1; // minus pass
  info!("legal moves for Black (excluding pass): {}", grid_moves);
  let (x, y) = (4, 4);
  let played = game.play(x, y);
  info!("Black plays at ({}, {}): {}", x, y, if played { "ok" } else { "illegal" });
  println!("{}\n", game.board());
  game.pass();
  game.pass();
  info!("game over: {}", game.is_over());

  let seed = match std::env::args().nth(1).map(|s| s.parse::<u64>()) {
    Some(Ok(seed)) => seed,
    Some(Err(e)) => {
      warn!("ignoring seed argument: {}", e);
      0
    }
    None => 0,
  };
  let mut rng = StdRng::seed_from_u64(seed);
  let mut game = Game::default();
  let max_moves = DEFAULT_SIZE * DEFAULT_SIZE * 4;
  let mut moves = 0;
  while !game.is_over() && moves < max_moves {
    let legal = game.legal_moves();
    if let Some(&mov) = legal.choose(&mut rng) {
      game.apply(mov);
    }
    moves += 1;
  }
  println!("{}\n", game.board());
  info!(seed, moves, finished = game.is_over(), "random playout done");
}

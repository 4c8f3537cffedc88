extern crate console_error_panic_hook;
use std::convert::TryFrom;
use std::panic;

pub mod igo;
pub use igo::*;

extern crate wasm_bindgen;
use wasm_bindgen::prelude::*;

/// Largest board a JavaScript host may ask for; bigger sizes are clamped.
pub const MAX_WASM_SIZE: usize = 25;

fn coord(v: i32) -> Option<usize> {
  usize::try_from(v).ok()
}

#[wasm_bindgen]
pub fn start() {
  panic::set_hook(Box::new(console_error_panic_hook::hook));
}

/// [`Game`] as seen from JavaScript. Colors are `1` (black) and `-1` (white),
/// an empty cell or one off the board is `0`.
#[wasm_bindgen]
pub struct WasmGame {
  game: Game,
}

#[wasm_bindgen]
impl WasmGame {
  /// `size` is clamped to [`MAX_WASM_SIZE`].
  #[wasm_bindgen(constructor)]
  pub fn new(size: usize) -> WasmGame {
    WasmGame { game: Game::new(size.min(MAX_WASM_SIZE)) }
  }
  pub fn size(&self) -> usize {
    self.game.board().size()
  }
  pub fn play(&mut self, x: i32, y: i32) -> bool {
    match (coord(x), coord(y)) {
      (Some(x), Some(y)) => self.game.play(x, y),
      _ => false,
    }
  }
  pub fn pass(&mut self) -> bool {
    self.game.pass()
  }
  pub fn current_player(&self) -> i32 {
    self.game.current_player() as i32
  }
  pub fn is_over(&self) -> bool {
    self.game.is_over()
  }
  pub fn get(&self, x: i32, y: i32) -> i32 {
    match (coord(x), coord(y)) {
      (Some(x), Some(y)) => self.game.board().get(x, y).map_or(0, |s| s as i32),
      _ => 0,
    }
  }
  /// Legal moves as flat indices, pass being `size * size`.
  pub fn legal_move_indices(&self) -> js_sys::Int32Array {
    let size = self.size();
    let indices: Vec<i32> = self.game
      .legal_moves()
      .iter()
      .map(|m| m.index(size) as i32)
      .collect();
    js_sys::Int32Array::from(&indices[..])
  }
  pub fn legal_moves_json(&self) -> Result<String, JsValue> {
    serde_json::to_string(&self.game.legal_moves()).map_err(|e| JsValue::from_str(&e.to_string()))
  }
  pub fn board_string(&self) -> String {
    self.game.board().to_string()
  }
}

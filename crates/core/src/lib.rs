//! Core game logic - the bit-board falling-piece engine
//!
//! Everything here is pure and deterministic: no I/O, no clocks, no
//! rendering. A front end drives a [`GameState`] at [`types::TICK_HZ`] ticks
//! per second and reads back [`types::Actions`].
//!
//! # Module Structure
//!
//! - [`board`]: 24 rows of `u16` with walls, floor and window operations
//! - [`pieces`]: the 7 kinds x 4 rotations pattern table
//! - [`game_state`]: session state and the per-tick pipeline
//! - [`movement`]: input handling, gravity, wall and floor kicks
//! - [`timer`]: the move/drop/snap counters
//! - [`spawn`] / [`rng`]: seeded kind and rotation selection
//! - [`color`]: per-cell kind overlay for renderers
//! - [`speed`]: line tally and level speed-ups
//! - [`snapshot`]: plain copy of the state for observers
//!
//! # Rules
//!
//! - **Auto-shift**: holding left or right moves at once, then repeats with a
//!   step that grows by 5/2 up to a cap
//! - **Soft drop**: holding down drops every other tick and locks on the
//!   second blocked attempt
//! - **Lock delay**: a piece that keeps failing to fall locks once the snap
//!   counter passes its limit (66 blocked ticks at default tuning)
//! - **Recovery**: a blocked rotation tries one column either side, then one
//!   or two rows up
//! - **Clearing**: only the 4 rows under the locked piece are scanned
//!
//! # Example
//!
//! ```
//! use monstro_core::GameState;
//! use monstro_types::{Actions, Inputs};
//!
//! let mut game = GameState::new(12345);
//! game.set_inputs(Inputs::DOWN);
//!
//! loop {
//!     let actions = game.tick();
//!     if actions.contains(Actions::SPAWN) {
//!         break;
//!     }
//! }
//!
//! // The front end decides when the next piece appears.
//! assert!(game.spawn_piece());
//! assert_eq!(game.pieces(), 2);
//! ```

pub mod board;
pub mod color;
pub mod game_state;
pub mod movement;
pub mod pieces;
pub mod rng;
pub mod snapshot;
pub mod spawn;
pub mod speed;
pub mod timer;

pub use monstro_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use color::{color_of, ColorBoard, COLOR_EMPTY, COLOR_WALL};
pub use game_state::{GameState, Piece};
pub use pieces::{get_pattern, Pattern};
pub use rng::SimpleRng;
pub use snapshot::{Snapshot, TimersSnapshot};
pub use spawn::Spawner;
pub use speed::{speed_up, LineTally};
pub use timer::Timer;

//! Headless simulation driver
//!
//! Runs seeded sessions at the nominal tick rate without sleeping, under a
//! scripted pseudo-random player, and reports one summary per game. This is
//! the reference front end: it owns the loop, feeds inputs, spawns on SPAWN,
//! applies level speed-ups and keeps the colour overlay in sync.

use clap::Parser;
use serde::Serialize;

use crate::core::{ColorBoard, GameState, LineTally, SimpleRng};
use crate::types::{Actions, Inputs, BOARD_ROWS, TICK_MS};

const DEFAULT_SEED: u32 = 1;
const DEFAULT_GAMES: u32 = 1;
const DEFAULT_MAX_TICKS: u64 = 100_000;

/// Driver settings; every flag can also come from a `MONSTRO_*` variable
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "monstro-sim", about = "Headless falling-piece simulation")]
pub struct SimConfig {
    /// Seed of the first game; game `n` uses `seed + n`
    #[arg(long, env = "MONSTRO_SEED", default_value_t = DEFAULT_SEED)]
    pub seed: u32,

    #[arg(long, env = "MONSTRO_GAMES", default_value_t = DEFAULT_GAMES)]
    pub games: u32,

    /// Ticks after which a game is stopped without a top-out
    #[arg(long, env = "MONSTRO_MAX_TICKS", default_value_t = DEFAULT_MAX_TICKS)]
    pub max_ticks: u64,

    /// Emit one JSON object per game instead of text
    #[arg(long, env = "MONSTRO_JSON")]
    pub json: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            games: DEFAULT_GAMES,
            max_ticks: DEFAULT_MAX_TICKS,
            json: false,
        }
    }
}

/// Pseudo-random player holding and releasing directions
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    rng: SimpleRng,
}

impl ScriptedInput {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed ^ 0x5EED_1234),
        }
    }

    /// Inputs for the next tick given the ones still held
    pub fn next(&mut self, held: Inputs) -> Inputs {
        let mut inputs = held;

        if self.rng.chance(1, 24) {
            inputs.remove(Inputs::HORIZONTAL);
            match self.rng.next_range(3) {
                0 => inputs.insert(Inputs::LEFT),
                1 => inputs.insert(Inputs::RIGHT),
                _ => {}
            }
        }
        if self.rng.chance(1, 40) {
            inputs.set(Inputs::DOWN, !inputs.contains(Inputs::DOWN));
        }
        if self.rng.chance(1, 12) {
            inputs.insert(if self.rng.chance(1, 2) {
                Inputs::ROTATE_LEFT
            } else {
                Inputs::ROTATE_RIGHT
            });
        }

        inputs
    }
}

/// Outcome of one simulated game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub game: u32,
    pub seed: u32,
    pub ticks: u64,
    /// Simulated play time at the nominal tick rate
    pub millis: u64,
    pub pieces: u32,
    pub lines: u32,
    pub level: u32,
    pub wall_kicks: u32,
    pub floor_kicks: u32,
    /// Locked cells left on the board at the end
    pub stack_cells: u32,
    pub topped_out: bool,
}

/// Play one game to a top-out or the tick limit
pub fn run_game(config: &SimConfig, game: u32) -> GameSummary {
    let seed = config.seed.wrapping_add(game);
    let mut state = GameState::new(seed);
    let mut player = ScriptedInput::new(seed);
    let mut tally = LineTally::new();
    let mut colors = ColorBoard::new();
    let (mut wall_kicks, mut floor_kicks) = (0, 0);

    while state.ticks() < config.max_ticks {
        let inputs = player.next(state.inputs());
        state.set_inputs(inputs);

        let actions = state.tick();
        colors.update(&state, actions);
        if actions.contains(Actions::WALL_KICK) {
            wall_kicks += 1;
        }
        if actions.contains(Actions::FLOOR_KICK) {
            floor_kicks += 1;
        }
        tally.apply(&mut state, actions);

        if actions.contains(Actions::SPAWN) && !state.spawn_piece() {
            break;
        }
    }

    let stack_cells = (1..BOARD_ROWS as i32)
        .flat_map(|y| (0..16).map(move |bit| (bit, y)))
        .filter(|&(bit, y)| colors.kind_at(bit, y).is_some())
        .count() as u32;

    GameSummary {
        game,
        seed,
        ticks: state.ticks(),
        millis: state.ticks() * u64::from(TICK_MS),
        pieces: state.pieces(),
        lines: tally.total(),
        level: tally.level(),
        wall_kicks,
        floor_kicks,
        stack_cells,
        topped_out: state.game_over(),
    }
}

impl std::fmt::Display for GameSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "game {} (seed {}): {} ticks ({:.1}s), {} pieces, {} lines, level {}, \
             {} wall kicks, {} floor kicks, {} cells stacked, {}",
            self.game,
            self.seed,
            self.ticks,
            self.millis as f64 / 1000.0,
            self.pieces,
            self.lines,
            self.level,
            self.wall_kicks,
            self.floor_kicks,
            self.stack_cells,
            if self.topped_out { "topped out" } else { "stopped" }
        )
    }
}

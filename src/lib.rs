#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited
#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)] // 3x3 domain: counts fit u8

pub mod types;
pub mod grid;
pub mod cards;
pub mod rng;
pub mod filters;
pub mod sampler;
pub mod generator;
pub mod banks;
pub mod persist;

pub mod engine {
    pub mod overlay;
    pub mod score;
}

pub mod solver;

// Re-exports: stable minimal API surface for external callers
pub use crate::cards::{validate_card, validate_deck, Card, Deck, DECK_SIZE, SELECTION_SIZE};
pub use crate::engine::overlay::{overlay, overlay_cell};
pub use crate::engine::score::{kill_count, obviousness};
pub use crate::filters::{center_clean, family_compatible};
pub use crate::generator::{
    generate_puzzle, Candidate, GenerateConfig, GenerateError, PickMode, Puzzle,
};
pub use crate::grid::{rotate, Grid};
pub use crate::rng::{rng_for_draw, rng_from_seed};
pub use crate::sampler::{make_candidate, random_card};
pub use crate::solver::{exists_solution_for_selection, solve_all, SolveError, Solution};
pub use crate::types::{Symbol, PRIMARIES};

//! Two-phase puzzle generator.
//!
//! Each round: sample and filter a candidate pool (cheap), rank it by
//! (obviousness, kill count), then exact-solve only the top-K candidates in
//! rank order and accept the first whose solution count satisfies the
//! policy. Rounds repeat up to `max_rounds`; total exhaustion is a hard
//! failure surfaced to the caller.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::Deck;
use crate::engine::score::{kill_count, obviousness};
use crate::filters::{center_clean, family_compatible};
use crate::grid::Grid;
use crate::rng::rng_for_draw;
use crate::sampler::make_candidate;
use crate::solver::{solve_all, Solution};

/// Ranking direction for phase 2. Prefer-hard scans the least obvious
/// candidates first; prefer-easy the most obvious.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickMode {
    PreferHard,
    PreferEasy,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Colored cells per sampled card, 0..=9.
    pub density: u8,
    /// Minimum mixed-color cells required in the target.
    pub min_mixed: u8,
    /// Maximum black cells allowed in the target.
    pub max_black: u8,
    /// Reject candidates whose target center is colored.
    pub require_center_white: bool,
    /// Accept only puzzles with exactly one solution.
    pub require_unique_solution: bool,
    /// Apply the family-compatibility deck filter.
    pub require_family_compat: bool,
    /// Apply the center-clean deck filter.
    pub require_center_clean: bool,
    /// Phase-1 sample budget per round.
    pub cheap_candidates: u32,
    /// Phase-3 exact-solve budget per round (top of the ranking).
    pub solve_top_k: usize,
    /// Round (retry) budget before giving up.
    pub max_rounds: u32,
    pub pick_mode: PickMode,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            density: 3,
            min_mixed: 0,
            max_black: 1,
            require_center_white: true,
            require_unique_solution: true,
            require_family_compat: false,
            require_center_clean: false,
            cheap_candidates: 2000,
            solve_top_k: 120,
            max_rounds: 15,
            pick_mode: PickMode::PreferHard,
        }
    }
}

impl GenerateConfig {
    /// Bounds check, run once before any sampling. Out-of-range values are
    /// an error here, never clamped mid-pipeline.
    pub fn validate(&self) -> Result<(), String> {
        if self.density > 9 {
            return Err(format!("density must be in 0..=9, got {}", self.density));
        }
        if self.cheap_candidates == 0 {
            return Err("cheap_candidates must be at least 1".to_string());
        }
        if self.solve_top_k == 0 {
            return Err("solve_top_k must be at least 1".to_string());
        }
        if self.max_rounds == 0 {
            return Err("max_rounds must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Transient generation-time record: one sampled deck+target that survived
/// the filters, scored for ranking. Discarded on accept/reject.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub deck: Deck,
    pub target: Grid,
    pub kill: u8,
    pub obviousness: f64,
}

/// Accepted generator output. Immutable once produced; `num_solutions` is
/// exactly 1 when uniqueness was required, otherwise >= 1, and `solution`
/// is the lexicographically smallest member of the solution set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puzzle {
    pub deck: Deck,
    pub target: Grid,
    pub solution: Solution,
    pub num_solutions: usize,
    pub kill: u8,
    pub obviousness: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("invalid generator configuration: {0}")]
    InvalidConfig(String),
    #[error(
        "no puzzle satisfied the configuration after {rounds} rounds \
         ({attempts} candidate draws); raise cheap_candidates/solve_top_k or \
         relax unique/center_clean"
    )]
    Exhausted { rounds: u32, attempts: u64 },
}

/// Rank comparator: obviousness first, kill count as tie-break. Scores are
/// finite by construction, and the sort is stable, so equal-scored
/// candidates keep draw order.
#[inline]
fn rank(a: &Candidate, b: &Candidate) -> std::cmp::Ordering {
    a.obviousness
        .partial_cmp(&b.obviousness)
        .unwrap_or(std::cmp::Ordering::Equal)
        .then(a.kill.cmp(&b.kill))
}

/// Generate one puzzle for the given configuration and seed, or fail after
/// exhausting the round budget.
///
/// Deterministic: the same (config, seed) pair always yields the same
/// puzzle. Phase-1 draws run in parallel, but each draw owns an RNG
/// derived from (seed, round, draw) and the pool is collected in draw
/// order, so parallelism never changes the outcome.
pub fn generate_puzzle(config: &GenerateConfig, seed: u64) -> Result<Puzzle, GenerateError> {
    config.validate().map_err(GenerateError::InvalidConfig)?;

    let mut attempts: u64 = 0;
    for round in 0..config.max_rounds {
        attempts += u64::from(config.cheap_candidates);

        // Phase 1: sample + filter into the round's pool.
        let mut pool: Vec<Candidate> = (0..config.cheap_candidates)
            .into_par_iter()
            .filter_map(|draw| {
                let mut rng = rng_for_draw(seed, round, draw);
                let (deck, target) = make_candidate(
                    &mut rng,
                    config.density,
                    config.min_mixed,
                    config.max_black,
                    config.require_center_white,
                )?;
                if config.require_family_compat && !family_compatible(&deck, &target) {
                    return None;
                }
                if config.require_center_clean && !center_clean(&deck, &target) {
                    return None;
                }
                let kill = kill_count(&deck, &target);
                let obviousness = obviousness(&deck, &target);
                Some(Candidate {
                    deck,
                    target,
                    kill,
                    obviousness,
                })
            })
            .collect();

        if pool.is_empty() {
            continue;
        }

        // Phase 2: rank.
        match config.pick_mode {
            PickMode::PreferHard => pool.sort_by(rank),
            PickMode::PreferEasy => pool.sort_by(|a, b| rank(b, a)),
        }

        // Phase 3: exact-solve the ranked prefix, accept the first hit.
        // Sequential on purpose: acceptance order is part of the semantics.
        for cand in pool.iter().take(config.solve_top_k) {
            let sols = solve_all(&cand.deck, &cand.target);
            let accept = if config.require_unique_solution {
                sols.len() == 1
            } else {
                !sols.is_empty()
            };
            if accept {
                return Ok(Puzzle {
                    deck: cand.deck,
                    target: cand.target,
                    solution: sols[0],
                    num_solutions: sols.len(),
                    kill: cand.kill,
                    obviousness: cand.obviousness,
                });
            }
        }
    }

    Err(GenerateError::Exhausted {
        rounds: config.max_rounds,
        attempts,
    })
}

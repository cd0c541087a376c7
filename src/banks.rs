//! Difficulty tiers and bulk bank generation.
//!
//! Each tier is a named [`GenerateConfig`]; `generate_bank` fills a bank
//! from per-slot derived seeds, rejecting duplicate puzzles within the
//! bank via 128-bit fingerprints.

use std::hash::BuildHasherDefault;

use hashbrown::HashSet as HbHashSet;
use indicatif::{ProgressBar, ProgressStyle};

use crate::generator::{generate_puzzle, GenerateConfig, GenerateError, PickMode, Puzzle};
use crate::persist::{fingerprint_deck, fingerprint_grid};
use crate::rng::{derive_seed, tag_from_label};

type FastHasher = BuildHasherDefault<ahash::AHasher>;
type FastSet = HbHashSet<u128, FastHasher>;

/// Per-slot regeneration budget when a freshly generated puzzle duplicates
/// an earlier one in the same bank.
const DEDUP_RETRIES: u64 = 8;

#[derive(Debug, Clone)]
pub struct BankSpec {
    pub name: &'static str,
    pub config: GenerateConfig,
}

/// The five built-in tiers, easiest first. Parameters follow the shipped
/// tier table: density and minimum mixed cells rise with difficulty, the
/// harder tiers demand uniqueness plus the leak filters, and only
/// expert/elite require clean card centers.
pub fn builtin_banks() -> [BankSpec; 5] {
    [
        BankSpec {
            name: "easy",
            config: GenerateConfig {
                density: 2,
                min_mixed: 0,
                require_unique_solution: false,
                require_family_compat: false,
                require_center_clean: false,
                cheap_candidates: 1200,
                solve_top_k: 80,
                // easy = pick the most obvious candidates
                pick_mode: PickMode::PreferEasy,
                ..GenerateConfig::default()
            },
        },
        BankSpec {
            name: "normal",
            config: GenerateConfig {
                density: 3,
                min_mixed: 1,
                require_unique_solution: true,
                require_family_compat: true,
                require_center_clean: false,
                cheap_candidates: 1500,
                solve_top_k: 100,
                pick_mode: PickMode::PreferHard,
                ..GenerateConfig::default()
            },
        },
        BankSpec {
            name: "hard",
            config: GenerateConfig {
                density: 3,
                min_mixed: 2,
                require_unique_solution: true,
                require_family_compat: true,
                require_center_clean: false,
                cheap_candidates: 1800,
                solve_top_k: 120,
                pick_mode: PickMode::PreferHard,
                ..GenerateConfig::default()
            },
        },
        BankSpec {
            name: "expert",
            config: GenerateConfig {
                density: 4,
                min_mixed: 2,
                require_unique_solution: true,
                require_family_compat: true,
                require_center_clean: true,
                cheap_candidates: 2200,
                solve_top_k: 140,
                pick_mode: PickMode::PreferHard,
                ..GenerateConfig::default()
            },
        },
        BankSpec {
            name: "elite",
            config: GenerateConfig {
                density: 4,
                min_mixed: 3,
                require_unique_solution: true,
                require_family_compat: true,
                require_center_clean: true,
                cheap_candidates: 2600,
                solve_top_k: 160,
                pick_mode: PickMode::PreferHard,
                ..GenerateConfig::default()
            },
        },
    ]
}

#[inline]
fn puzzle_fingerprint(pz: &Puzzle) -> u128 {
    fingerprint_grid(&pz.target) ^ fingerprint_deck(&pz.deck).rotate_left(9)
}

/// Generate `count` puzzles for one tier. Each slot draws its own seed
/// derived from (master seed, tier name, slot, retry), so banks are
/// reproducible and slots are independent.
///
/// Duplicate puzzles (same deck and target) are regenerated up to
/// [`DEDUP_RETRIES`] times; a still-colliding slot keeps its last draw.
pub fn generate_bank(spec: &BankSpec, count: usize, seed: u64) -> Result<Vec<Puzzle>, GenerateError> {
    let tag = tag_from_label(spec.name);

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {prefix:>6} {bar:40.cyan/blue} {pos}/{len}")
            .unwrap()
            .progress_chars("=>-"),
    );
    pb.set_prefix(spec.name);

    let mut seen: FastSet = HbHashSet::default();
    let mut out: Vec<Puzzle> = Vec::with_capacity(count);

    for slot in 0..count {
        let pz = 'dedup: {
            for retry in 0..DEDUP_RETRIES {
                let slot_seed = derive_seed(seed, tag, (slot as u64) | (retry << 48));
                let pz = generate_puzzle(&spec.config, slot_seed)?;
                if seen.insert(puzzle_fingerprint(&pz)) {
                    break 'dedup pz;
                }
            }
            let slot_seed = derive_seed(seed, tag, (slot as u64) | (DEDUP_RETRIES << 48));
            let pz = generate_puzzle(&spec.config, slot_seed)?;
            seen.insert(puzzle_fingerprint(&pz));
            println!(
                "[banks] bank '{}' slot {slot}: still duplicated after {DEDUP_RETRIES} retries, keeping last draw",
                spec.name
            );
            break 'dedup pz;
        };
        out.push(pz);
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(out)
}

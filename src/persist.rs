use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::cards::Deck;
use crate::generator::Puzzle;
use crate::grid::Grid;
use crate::solver::Solution;

pub const FORMAT_VERSION: u32 = 1;

/// One persisted puzzle. `target` and `cards` are what the player-facing
/// layer consumes; solution and score fields are kept as diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleRecord {
    pub target: Grid,
    pub cards: Vec<Grid>,
    pub solution: Solution,
    pub num_solutions: usize,
    pub kill: u8,
    pub obviousness: f64,
}

impl From<&Puzzle> for PuzzleRecord {
    fn from(pz: &Puzzle) -> Self {
        Self {
            target: pz.target,
            cards: pz.deck.to_vec(),
            solution: pz.solution,
            num_solutions: pz.num_solutions,
            kill: pz.kill,
            obviousness: pz.obviousness,
        }
    }
}

/// Bank file: puzzles grouped by tier name, in stable name order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankFile {
    pub version: u32,
    pub seed: u64,
    pub banks: BTreeMap<String, Vec<PuzzleRecord>>,
}

/// Save a bank file as pretty-printed JSON (the format the web player
/// consumes).
pub fn save_banks<P: AsRef<Path>>(path: P, file: &BankFile) -> Result<(), String> {
    let json = serde_json::to_string_pretty(file).map_err(|e| format!("JSON serialize error: {e}"))?;
    fs::write(path.as_ref(), json).map_err(|e| format!("write error: {e}"))?;
    Ok(())
}

/// Load a bank file written by [`save_banks`].
pub fn load_banks<P: AsRef<Path>>(path: P) -> Result<BankFile, String> {
    let data = fs::read_to_string(path.as_ref()).map_err(|e| format!("read error: {e}"))?;
    let file: BankFile = serde_json::from_str(&data).map_err(|e| format!("JSON parse error: {e}"))?;
    if file.version != FORMAT_VERSION {
        return Err(format!(
            "unsupported bank file version {} (expected {FORMAT_VERSION})",
            file.version
        ));
    }
    Ok(file)
}

#[inline]
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[inline]
fn mix_into(acc_a: &mut u64, acc_b: &mut u64, data: u64, salt: u64) {
    let m1 = splitmix64(data ^ salt);
    let m2 = splitmix64(m1 ^ 0xA5A5_A5A5_A5A5_A5A5);
    *acc_a ^= m1.rotate_left(17);
    *acc_b = acc_b.rotate_left(13) ^ m2;
}

/// 128-bit fingerprint of a grid: cells mixed in stable index order with
/// tagged salts. Used for duplicate detection in bank building.
pub fn fingerprint_grid(grid: &Grid) -> u128 {
    let mut a: u64 = 0xC0FF_EE00_D15E_CAFE;
    let mut b: u64 = 0xDEAD_BEEF_F00D_FACE;
    for (idx, sym) in grid.iter().enumerate() {
        let data = (idx as u64) | (u64::from(sym.mask()) << 8) | (0x21u64 << 56);
        mix_into(&mut a, &mut b, data, 0x9E37_79B9_7F4A_7C15);
    }
    (u128::from(a) << 64) | u128::from(b)
}

/// 128-bit fingerprint of a whole deck, order-sensitive.
pub fn fingerprint_deck(deck: &Deck) -> u128 {
    let mut acc: u128 = 0;
    for (i, card) in deck.iter().enumerate() {
        acc = acc.rotate_left(11) ^ fingerprint_grid(card) ^ (u128::from(i as u64) << 120);
    }
    acc
}

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde_json::json;

use trichroma::persist::{
    fingerprint_deck, fingerprint_grid, load_banks, save_banks, BankFile, PuzzleRecord,
    FORMAT_VERSION,
};
use trichroma::{Deck, Grid, Solution, Symbol};

fn tmp_file(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    let ts = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    p.push(format!("trichroma_{name}_{}_{ts}.json", std::process::id()));
    p
}

fn sample_record() -> PuzzleRecord {
    let mut deck: Deck = [Grid::new(); 9];
    deck[0].set_rc(0, 0, Symbol::Red);
    deck[1].set_rc(0, 1, Symbol::Blue);
    deck[2].set_rc(0, 2, Symbol::Yellow);

    let mut target = Grid::new();
    target.set_rc(0, 0, Symbol::Red);
    target.set_rc(0, 1, Symbol::Blue);
    target.set_rc(0, 2, Symbol::Yellow);

    PuzzleRecord {
        target,
        cards: deck.to_vec(),
        solution: Solution {
            cards: [0, 1, 2],
            rots: [0, 0, 0],
        },
        num_solutions: 1,
        kill: 0,
        obviousness: 14.4,
    }
}

/// The wire format for grids is a 3x3 array of one-letter codes.
#[test]
fn grid_serializes_as_letter_rows() {
    let mut g = Grid::new();
    g.set_rc(0, 0, Symbol::Red);
    g.set_rc(1, 1, Symbol::Purple);
    g.set_rc(2, 2, Symbol::Black);

    let value = serde_json::to_value(g).expect("serialize");
    assert_eq!(
        value,
        json!([["R", "N", "N"], ["N", "P", "N"], ["N", "N", "K"]])
    );
}

#[test]
fn grid_json_roundtrip() {
    let mut g = Grid::new();
    g.set_rc(0, 2, Symbol::Green);
    g.set_rc(2, 0, Symbol::Orange);

    let text = serde_json::to_string(&g).expect("serialize");
    let back: Grid = serde_json::from_str(&text).expect("deserialize");
    assert_eq!(back, g);
}

#[test]
fn bank_file_roundtrip() {
    let mut banks = BTreeMap::new();
    banks.insert("normal".to_string(), vec![sample_record()]);
    let file = BankFile {
        version: FORMAT_VERSION,
        seed: 0xC0FF_EE,
        banks,
    };

    let path = tmp_file("roundtrip");
    save_banks(&path, &file).expect("save");
    let loaded = load_banks(&path).expect("load");
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.version, FORMAT_VERSION);
    assert_eq!(loaded.seed, 0xC0FF_EE);
    let puzzles = loaded.banks.get("normal").expect("bank present");
    assert_eq!(puzzles.len(), 1);
    assert_eq!(puzzles[0].target, file.banks["normal"][0].target);
    assert_eq!(puzzles[0].cards, file.banks["normal"][0].cards);
    assert_eq!(puzzles[0].solution, file.banks["normal"][0].solution);
    assert_eq!(puzzles[0].num_solutions, 1);
}

#[test]
fn version_mismatch_is_rejected() {
    let file = BankFile {
        version: 99,
        seed: 0,
        banks: BTreeMap::new(),
    };
    let path = tmp_file("badversion");
    save_banks(&path, &file).expect("save");
    let err = load_banks(&path).expect_err("must reject unknown version");
    let _ = std::fs::remove_file(&path);
    assert!(err.contains("version"), "unexpected error: {err}");
}

#[test]
fn fingerprints_distinguish_grids_and_decks() {
    let a = Grid::new();
    let mut b = Grid::new();
    b.set_rc(1, 1, Symbol::Red);

    assert_eq!(fingerprint_grid(&a), fingerprint_grid(&a));
    assert_ne!(fingerprint_grid(&a), fingerprint_grid(&b));

    let deck_a: Deck = [a; 9];
    let mut deck_b: Deck = [a; 9];
    deck_b[8] = b;
    assert_ne!(fingerprint_deck(&deck_a), fingerprint_deck(&deck_b));

    // Order sensitivity: the same cards in different slots differ.
    let mut deck_c: Deck = [a; 9];
    deck_c[0] = b;
    assert_ne!(fingerprint_deck(&deck_b), fingerprint_deck(&deck_c));
}

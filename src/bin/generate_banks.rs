use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Parser;

use trichroma::banks::{builtin_banks, generate_bank, BankSpec};
use trichroma::persist::{save_banks, BankFile, PuzzleRecord, FORMAT_VERSION};

#[derive(Debug, Parser)]
#[command(name = "generate-banks", about = "Trichroma puzzle bank builder")]
struct Args {
    /// Output JSON path
    #[arg(long, default_value = "puzzles.json")]
    out: PathBuf,

    /// Puzzles per bank
    #[arg(long, default_value_t = 10)]
    count: usize,

    /// Master seed; bank contents are a pure function of (seed, tiers)
    #[arg(long, default_value_t = 0x00C0_FFEEu64)]
    seed: u64,

    /// Comma-separated tier names to build (default: all five)
    #[arg(long)]
    banks: Option<String>,
}

fn select_banks(all: &[BankSpec], wanted: Option<&str>) -> Result<Vec<BankSpec>, String> {
    let Some(list) = wanted else {
        return Ok(all.to_vec());
    };
    let mut picked = Vec::new();
    for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match all.iter().find(|spec| spec.name == name) {
            Some(spec) => picked.push(spec.clone()),
            None => return Err(format!("unknown bank '{name}'")),
        }
    }
    if picked.is_empty() {
        return Err("no banks selected".to_string());
    }
    Ok(picked)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let all = builtin_banks();
    let specs = select_banks(&all, args.banks.as_deref())?;

    let mut banks: BTreeMap<String, Vec<PuzzleRecord>> = BTreeMap::new();
    for spec in &specs {
        println!(
            "[banks] generating bank '{}' ({} puzzles, seed {:#x})",
            spec.name, args.count, args.seed
        );
        let puzzles = generate_bank(spec, args.count, args.seed)?;
        banks.insert(
            spec.name.to_string(),
            puzzles.iter().map(PuzzleRecord::from).collect(),
        );
    }

    let file = BankFile {
        version: FORMAT_VERSION,
        seed: args.seed,
        banks,
    };
    save_banks(&args.out, &file)?;
    println!("[banks] wrote {}", args.out.display());

    Ok(())
}

use std::path::PathBuf;

use clap::Parser;

use trichroma::persist::load_banks;
use trichroma::solve_all;

#[derive(Debug, Parser)]
#[command(name = "query", about = "Trichroma puzzle bank query tool")]
struct Args {
    /// Bank file produced by generate-banks
    #[arg(long, default_value = "puzzles.json")]
    file: PathBuf,

    /// Bank (tier) name to inspect
    #[arg(long, default_value = "normal")]
    bank: String,

    /// Puzzle index within the bank
    #[arg(long, default_value_t = 0)]
    index: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let bank_file = load_banks(&args.file)?;
    let puzzles = bank_file
        .banks
        .get(&args.bank)
        .ok_or_else(|| format!("no bank '{}' in {}", args.bank, args.file.display()))?;
    let rec = puzzles.get(args.index).ok_or_else(|| {
        format!(
            "bank '{}' holds {} puzzles, index {} out of range",
            args.bank,
            puzzles.len(),
            args.index
        )
    })?;

    println!(
        "[query] bank '{}' puzzle {} (kill={}, obviousness={:.2})",
        args.bank, args.index, rec.kill, rec.obviousness
    );
    println!("[query] target:");
    print!("{}", rec.target);

    for (i, card) in rec.cards.iter().enumerate() {
        println!("[query] card {i}:");
        print!("{card}");
    }

    // Re-solve from scratch; stored counts should always agree.
    let sols = solve_all(&rec.cards, &rec.target);
    println!(
        "[query] {} solution(s), stored num_solutions={}",
        sols.len(),
        rec.num_solutions
    );
    for s in &sols {
        println!("[query]   cards {:?} rotations {:?}", s.cards, s.rots);
    }

    Ok(())
}

mod utils;

use crate::utils::*;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use slider_common::Board;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Board dimension
    #[arg(short = 'n', long, default_value_t = 3, value_name = "N",
          value_parser = clap::value_parser!(u8).range(2..=5))]
    size: u8,
    /// Seed for board generation (random if omitted)
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
    /// Scramble with a random walk of this many slides instead of a full shuffle
    #[arg(short, long, value_name = "STEPS")]
    walk: Option<usize>,
    /// Only draw solvable boards when shuffling
    #[arg(long, conflicts_with = "walk")]
    solvable: bool,
    /// Preview the generated board without solving
    #[arg(short, long)]
    preview: bool,
    /// Log search progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let Cli {
        size,
        seed,
        walk,
        solvable,
        preview,
        verbose,
    } = Cli::parse();

    init_tracing(verbose);

    let size = usize::from(size);
    if walk.is_none() && size > MAX_SHUFFLE_SIZE {
        bail!(
            "Full shuffles above {MAX_SHUFFLE_SIZE}x{MAX_SHUFFLE_SIZE} take too long to solve; use `--walk`."
        );
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let board = match walk {
        Some(steps) => Board::scrambled(size, steps, &mut rng),
        None if solvable => Board::random_solvable(size, &mut rng),
        None => Board::random(size, &mut rng),
    }
    .context("Failed to generate board")?;

    if preview {
        print_preview(&board);
        return Ok(());
    }
    do_solve(board);

    Ok(())
}

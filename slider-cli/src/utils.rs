use slider_common::Board;
use slider_solver::{SearchStats, Solver};

use std::{
    io::{IsTerminal, Write, stderr},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tracing_subscriber::EnvFilter;

/// Largest dimension accepted for a full shuffle.
pub const MAX_SHUFFLE_SIZE: usize = 3;

pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .with_ansi(stderr().is_terminal())
        .init();
}

pub fn print_preview(board: &Board) {
    println!("{board}");
    println!(
        "Hamming: {}, Manhattan: {}, Solvable: {}",
        board.hamming(),
        board.manhattan(),
        board.has_solvable_parity()
    );
}

pub fn do_solve(board: Board) -> Solver {
    println!("{board}");
    let solver = with_spinner("Solving the puzzle...", move || Solver::new(board));
    let SearchStats {
        expanded,
        generated,
        elapsed,
    } = solver.stats();
    let elapsed = format_elapsed(*elapsed);

    match solver.solution() {
        Some(path) => {
            println!("Minimum number of moves = {}\n", path.len() - 1);
            for board in path {
                println!("{board}");
            }
        }
        None => println!("No solution possible\n"),
    }
    println!("Time: {elapsed}, Expanded: {expanded}, States: {generated}");
    solver
}

fn with_spinner<T, F: FnOnce() -> T>(message: &str, f: F) -> T {
    if !stderr().is_terminal() {
        return f();
    }

    let spinning = Arc::new(AtomicBool::new(true));
    let handle = {
        let spinning = Arc::clone(&spinning);
        let message = message.to_string();
        std::thread::spawn(move || {
            // Lock per frame so log events on stderr are not blocked.
            let emit = |text: &str| {
                let mut out = stderr().lock();
                let _ = out.write_all(text.as_bytes());
                let _ = out.flush();
            };
            emit("\x1b[?25l"); // hide cursor
            for frame in ['|', '/', '-', '\\'].iter().cycle() {
                if !spinning.load(Ordering::Relaxed) {
                    break;
                }
                emit(&format!("\r{frame} {message}"));
                std::thread::sleep(Duration::from_millis(100));
            }
            emit("\r\x1b[2K\r\x1b[?25h"); // clear line, show cursor
        })
    };

    let result = f();
    spinning.store(false, Ordering::Relaxed);
    let _ = handle.join();
    result
}

fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    if secs < 90 {
        format!("{secs}.{:03}s", elapsed.subsec_millis())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_millis(1_234)), "1.234s");
        assert_eq!(format_elapsed(Duration::from_secs(89)), "89.000s");
        assert_eq!(format_elapsed(Duration::from_secs(125)), "2m 5s");
    }

    #[test]
    fn test_do_solve_returns_solver() {
        let board = Board::new(&[[1, 2], [0, 3]]).unwrap();
        let solver = do_solve(board);
        assert_eq!(solver.moves(), Some(1));
    }
}

//! Example usage of the Munkres library
//!
//! Solves a handful of small assignment problems and prints the results.
//! Set `RUST_LOG=munkres=debug` to see solver progress.

use munkres::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("Munkres: Optimal Assignment");
    println!("===========================\n");

    let cost = CostMatrix::from_rows(&[
        [10, 5, 13, 15, 16],
        [3, 9, 18, 13, 6],
        [10, 7, 2, 2, 2],
        [7, 11, 9, 7, 12],
        [7, 9, 10, 4, 12],
    ])
    .expect("demo matrix is rectangular");

    report("5x5 minimum cost", solve(&cost, &SolveOptions::new()));
    report("5x5 maximum profit", solve(&cost, &SolveOptions::new().maximize()));

    // Three workers, two tasks: pair values by distance
    let workers = [1.0, 4.0, 10.0];
    let tasks = [2.0, 3.5];
    let distances = CostMatrix::from_fn(&workers, &tasks, |a: &f64, b: &f64| (a - b).abs())
        .expect("demo lists are non-empty");
    report("3x2 built from |a - b|", solve(&distances, &SolveOptions::new()));

    let constrained = CostMatrix::from_rows(&[[5, 9, 0], [10, 0, 2], [8, 0, 4]])
        .expect("demo matrix is rectangular");
    let options = SolveOptions::new()
        .disallow(0, 2)
        .disallow(1, 1)
        .disallow(2, 1);
    report("3x3 with forbidden pairs", solve(&constrained, &options));
}

fn report(title: &str, result: munkres::Result<Assignment>) {
    println!("{title}");
    match result {
        Ok(a) => {
            println!("  assignments: {:?}", a.signed_assignments());
            println!("  inversions:  {:?}", a.signed_inversions());
            println!("  total:       {}", a.cost);
            println!("  optimal:     {}", a.is_optimal);
            if !a.stripped.is_empty() {
                println!("  stripped:    {:?}", a.stripped);
            }
        }
        Err(e) => println!("  error: {e}"),
    }
    println!();
}

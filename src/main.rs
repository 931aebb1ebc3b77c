//! DIMACS front-end executable.
//!
//! Output contract: every diagnostic line starts with `c`. On UNSAT the
//! literal string `UNSAT` is printed; on SAT the unit-literal solution is
//! printed in DIMACS format. Exit code 0 on success, 1 on usage or I/O
//! errors.

use anyhow::Context;
use clap::Parser;
use dpll_sat::sat::clause::Clause;
use dpll_sat::sat::dimacs::{parse_file, to_dimacs};
use dpll_sat::sat::literal::PackedLiteral;
use dpll_sat::sat::solver::Solver;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "dpll-sat", version, about = "A DPLL SAT solver for DIMACS CNF files")]
struct Cli {
    /// Path to the DIMACS .cnf file.
    path: PathBuf,

    /// Re-check the reported solution against every input clause.
    #[arg(short, long, default_value_t = false)]
    verify: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            for line in err.to_string().lines() {
                println!("c {line}");
            }
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("c error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let (clauses, num_vars) = parse_file::<PackedLiteral>(&cli.path)
        .with_context(|| format!("could not read {}", cli.path.display()))?;

    println!("c file: {}", cli.path.display());
    println!("c vars: {num_vars}");
    println!("c clauses: {}", clauses.len());

    let mut weighted: Solver = Solver::new(num_vars);
    let mut first: Solver = Solver::new(num_vars);

    let mut consistent = true;
    for clause in &clauses {
        consistent &= weighted.add_clause(Clause::from(clause.clone()));
        consistent &= first.add_clause(Clause::from(clause.clone()));
    }

    if !consistent {
        println!("UNSAT");
        return Ok(());
    }

    let start = Instant::now();
    let sat_weighted = weighted.solve();
    println!(
        "c time weighted-degree + restarts: {} ms ({} restarts)",
        start.elapsed().as_millis(),
        weighted.num_restarts()
    );

    let start = Instant::now();
    let sat_first = first.solve_first_variable();
    println!("c time first-variable: {} ms", start.elapsed().as_millis());

    if sat_weighted != sat_first {
        println!("c WARNING: strategies disagree on satisfiability");
    }

    if !sat_weighted {
        println!("UNSAT");
        return Ok(());
    }

    if cli.verify {
        let model = weighted.model();
        let ok = clauses
            .iter()
            .all(|clause| clause.iter().any(|&l| model.satisfied(l)));
        if ok {
            println!("c solution verified against all input clauses");
        } else {
            println!("c WARNING: solution failed verification");
        }
    }

    let solution: Vec<Vec<PackedLiteral>> = weighted
        .unit_literals()
        .iter()
        .map(|&l| vec![l])
        .collect();
    print!("{}", to_dimacs(&solution, num_vars));

    Ok(())
}

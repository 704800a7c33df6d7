#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::path::PathBuf;

use otter_maxsat::{
    context::Context,
    maxsat::MaxContext,
    types::err::ErrorKind,
};

mod misc;
mod parse;

use misc::{load_dimacs, LoadError};

/// Exit codes of the binary.
mod exit {
    pub const UNREADABLE: i32 = 1;
    pub const MALFORMED: i32 = 2;
    pub const INTERNAL: i32 = 3;
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = match parse::cli::cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            let _ = e.print();
            let code = match e.use_stderr() {
                true => exit::UNREADABLE,
                false => 0,
            };
            std::process::exit(code);
        }
    };

    let config = match parse::config::config_from_args(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("c Bad argument: {e}");
            std::process::exit(exit::UNREADABLE);
        }
    };

    let verbose = matches!(matches.try_get_one::<bool>("verbose"), Ok(Some(true)));
    let path = matches.get_one::<PathBuf>("path");

    let formula = match load_dimacs(path) {
        Ok(formula) => formula,
        Err(LoadError::Io(e)) => {
            eprintln!("c Could not read input: {e}");
            std::process::exit(exit::UNREADABLE);
        }
        Err(LoadError::Formula(e)) => {
            eprintln!("c Malformed input: {e:?}");
            std::process::exit(exit::MALFORMED);
        }
    };

    if verbose {
        println!(
            "c Parsed {} variables and {} clauses",
            formula.variable_count,
            formula.clauses.len()
        );
    }

    let engine = Context::from_config(config.clone());
    let mut max_ctx = match MaxContext::from_formula(engine, &formula, &config) {
        Ok(max_ctx) => max_ctx,
        Err(e) => {
            eprintln!("c Could not relax the formula: {e:?}");
            std::process::exit(exit_code(&e));
        }
    };

    if verbose {
        max_ctx.set_callback_budget(Box::new(|budget, report| {
            println!("c Budget {budget}: {report}");
        }));
    }

    let outcome = match max_ctx.solve() {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("c Search failed: {e:?}");
            std::process::exit(exit_code(&e));
        }
    };

    if verbose {
        let counters = &max_ctx.engine().counters;
        println!("c Budgets tried: {}", max_ctx.budgets_tried().len());
        println!("c Solves:        {}", counters.solves);
        println!("c Conflicts:     {}", counters.total_conflicts);
        println!("c Decisions:     {}", counters.total_decisions);
        println!("c Restarts:      {}", counters.restarts);
    }

    if let Err(e) = outcome.write(std::io::stdout().lock()) {
        eprintln!("c Could not write result: {e}");
        std::process::exit(exit::INTERNAL);
    }
}

fn exit_code(error: &ErrorKind) -> i32 {
    match error {
        ErrorKind::MalformedInput(_) | ErrorKind::Parse(_) => exit::MALFORMED,
        _ => exit::INTERNAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use otter_maxsat::types::err::{EncodingBoundsError, MalformedInputError, ParseError, SearchError};

    #[test]
    fn exit_codes() {
        assert_eq!(
            exit_code(&ErrorKind::MalformedInput(MalformedInputError::ClauseCount {
                declared: 2,
                found: 1
            })),
            exit::MALFORMED
        );
        assert_eq!(
            exit_code(&ErrorKind::Parse(ParseError::MissingProblem)),
            exit::MALFORMED
        );
        assert_eq!(
            exit_code(&ErrorKind::Search(SearchError::Interrupted(3))),
            exit::INTERNAL
        );
        assert_eq!(
            exit_code(&ErrorKind::EncodingBounds(EncodingBoundsError::Repeat(0))),
            exit::INTERNAL
        );
        assert_eq!(exit_code(&ErrorKind::NoModel), exit::INTERNAL);

        let codes = [exit::UNREADABLE, exit::MALFORMED, exit::INTERNAL];
        assert!(codes.iter().all(|code| *code != 0));
        assert!(codes[0] != codes[1] && codes[1] != codes[2] && codes[0] != codes[2]);
    }

    fn temporary_cnf(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("otter_maxsat_{}_{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn malformed_file() {
        let path = temporary_cnf("malformed.cnf", "p cnf 2 1\n1 x 0\n");
        let loaded = load_dimacs(Some(&path));
        let _ = std::fs::remove_file(&path);

        match loaded {
            Err(LoadError::Formula(e)) => assert_eq!(exit_code(&e), exit::MALFORMED),
            _ => panic!("malformed input was loaded"),
        }
    }

    #[test]
    fn huge_declared_count() {
        let path = temporary_cnf("huge.cnf", "p cnf 1 18446744073709551615\n1 0\n");
        let loaded = load_dimacs(Some(&path));
        let _ = std::fs::remove_file(&path);

        let formula = match loaded {
            Ok(formula) => formula,
            Err(_) => panic!("failed to read the formula"),
        };

        let config = otter_maxsat::config::Config::default();
        match MaxContext::from_formula(Context::from_config(config.clone()), &formula, &config) {
            Err(e) => assert_eq!(exit_code(&e), exit::MALFORMED),
            Ok(_) => panic!("count disagreement was accepted"),
        }
    }

    #[test]
    fn missing_file() {
        let path = std::env::temp_dir().join("otter_maxsat_no_such_file.cnf");
        assert!(matches!(load_dimacs(Some(&path)), Err(LoadError::Io(_))));
    }

    #[test]
    fn well_formed_file() {
        let path = temporary_cnf("scenario.cnf", "p cnf 1 2\n1 0\n-1 0\n");
        let loaded = load_dimacs(Some(&path));
        let _ = std::fs::remove_file(&path);

        let formula = match loaded {
            Ok(formula) => formula,
            Err(_) => panic!("failed to read the formula"),
        };
        assert_eq!(formula.clauses.len(), 2);
    }
}

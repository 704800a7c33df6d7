use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use otter_maxsat::{
    builder::dimacs::parse_dimacs, config::Config, context::Context, maxsat::MaxContext,
};

fn cnf_path() -> PathBuf {
    Path::new(".").join("tests").join("cnf")
}

/// The optimum stated by a `c optimum <n>` comment of the file at `path`.
fn stated_optimum(path: &Path) -> Option<usize> {
    let file = File::open(path).ok()?;
    BufReader::new(file).lines().map_while(Result::ok).find_map(|line| {
        line.strip_prefix("c optimum ")
            .and_then(|count| count.trim().parse().ok())
    })
}

fn optimum_on_file(path: &Path, config: &Config) -> usize {
    let file = File::open(path).unwrap_or_else(|_| panic!("{path:?} missing"));
    let formula = parse_dimacs(BufReader::new(file)).expect("failed to parse");

    let engine = Context::from_config(config.clone());
    let mut max_ctx = MaxContext::from_formula(engine, &formula, config).expect("failed to relax");
    let outcome = max_ctx.solve().expect("failed to solve");

    assert_eq!(
        formula.satisfied_count(&outcome.valuation()),
        outcome.satisfied_count(),
        "witness disagrees with count on {path:?}"
    );

    outcome.satisfied_count()
}

fn library_on_config(config: &Config) {
    let pattern = cnf_path().join("*.cnf");
    let pattern = pattern.to_str().expect("unicode path");

    let mut count = 0;
    for path in glob::glob(pattern).expect("bad pattern").flatten() {
        let optimum = stated_optimum(&path).unwrap_or_else(|| panic!("{path:?} without optimum"));
        assert_eq!(optimum_on_file(&path, config), optimum, "on {path:?}");
        count += 1;
    }
    assert!(count >= 10);
}

mod library {
    use super::*;

    #[test]
    fn default() {
        library_on_config(&Config::default());
    }

    #[test]
    fn without_tightness() {
        let mut config = Config::default();
        config.switch.tightness = false;
        library_on_config(&config);
    }

    #[test]
    fn elephant() {
        let mut config = Config::default();
        config.switch.restart = false;
        config.switch.reduction = false;
        library_on_config(&config);
    }

    #[test]
    fn restless() {
        let mut config = Config::default();
        config.luby_u.value = 1;
        config.scheduler.luby = Some(1);
        config.random_decision_bias.value = 0.2;
        library_on_config(&config);
    }
}

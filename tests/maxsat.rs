use std::{cell::RefCell, rc::Rc};

use otter_maxsat::{
    config::Config,
    context::Context,
    generic::random::MinimalPCG32,
    maxsat::MaxContext,
    reports::Report,
    structures::{formula::Formula, literal::CLiteral, literal::Literal},
    types::err::{ErrorKind, SearchError},
};

use rand::{Rng, SeedableRng};

fn max_context(formula: &Formula) -> MaxContext<Context> {
    let config = Config::default();
    MaxContext::from_formula(Context::from_config(config.clone()), formula, &config)
        .expect("failed to relax")
}

mod scenarios {
    use super::*;

    #[test]
    fn all_satisfiable() {
        let formula = Formula::from_clauses(2, vec![vec![1, 2], vec![-1, -2], vec![1, -2]]);
        let mut max_ctx = max_context(&formula);

        let outcome = max_ctx.solve().unwrap();
        assert_eq!(outcome.satisfied_count(), 3);
        assert_eq!(outcome.budget(), 0);
        assert_eq!(formula.satisfied_count(&outcome.valuation()), 3);
        assert_eq!(max_ctx.budgets_tried(), &[0]);
    }

    #[test]
    fn contradictory_units() {
        let formula = Formula::from_clauses(1, vec![vec![1], vec![-1]]);
        let mut max_ctx = max_context(&formula);

        let outcome = max_ctx.solve().unwrap();
        assert_eq!(outcome.satisfied_count(), 1);
        assert_eq!(max_ctx.budgets_tried(), &[0, 1]);
    }

    #[test]
    fn single_clause() {
        let formula = Formula::from_clauses(3, vec![vec![1, 2, 3]]);
        let mut max_ctx = max_context(&formula);

        let outcome = max_ctx.solve().unwrap();
        assert_eq!(outcome.satisfied_count(), 1);
        assert_eq!(outcome.budget(), 0);
        assert!(outcome.valuation().iter().any(|value| *value));
    }

    #[test]
    fn no_clauses() {
        let formula = Formula::from_clauses(2, Vec::default());
        let mut max_ctx = max_context(&formula);

        let outcome = max_ctx.solve().unwrap();
        assert_eq!(outcome.satisfied_count(), 0);
        assert_eq!(outcome.model().len(), 2);
        assert_eq!(max_ctx.budgets_tried(), &[0]);
    }

    #[test]
    fn only_empty_clauses() {
        let formula = Formula::from_clauses(1, vec![vec![], vec![0]]);
        let mut max_ctx = max_context(&formula);

        let outcome = max_ctx.solve().unwrap();
        assert_eq!(outcome.satisfied_count(), 0);
        assert_eq!(max_ctx.budgets_tried(), &[0, 1, 2]);
    }
}

mod search {
    use super::*;

    #[test]
    fn budgets_in_order() {
        // Every clause over two variables, so exactly one clause is violated.
        let formula = Formula::from_clauses(
            2,
            vec![vec![1, 2], vec![1, -2], vec![-1, 2], vec![-1, -2], vec![1], vec![-1]],
        );
        let mut max_ctx = max_context(&formula);

        let outcome = max_ctx.solve().unwrap();
        assert_eq!(outcome.satisfied_count(), 4);
        assert_eq!(max_ctx.budgets_tried(), &[0, 1, 2]);
        assert_eq!(max_ctx.assumption_atoms().len(), 3);
    }

    #[test]
    fn callback_sees_each_budget() {
        let formula = Formula::from_clauses(1, vec![vec![1], vec![-1], vec![-1]]);
        let mut max_ctx = max_context(&formula);

        let seen = Rc::new(RefCell::new(Vec::default()));
        let seen_by_callback = seen.clone();
        max_ctx.set_callback_budget(Box::new(move |budget, report| {
            seen_by_callback.borrow_mut().push((budget, report));
        }));

        let outcome = max_ctx.solve().unwrap();
        assert_eq!(outcome.satisfied_count(), 2);
        assert_eq!(
            *seen.borrow(),
            vec![(0, Report::Unsatisfiable), (1, Report::Satisfiable)]
        );
    }

    #[test]
    fn repeat_solve_is_stable() {
        let formula = Formula::from_clauses(2, vec![vec![1], vec![-1, 2], vec![-2]]);
        let mut max_ctx = max_context(&formula);

        let first = max_ctx.solve().unwrap();
        let tried = max_ctx.budgets_tried().to_vec();
        let second = max_ctx.solve().unwrap();

        assert_eq!(first, second);
        assert_eq!(max_ctx.budgets_tried(), tried.as_slice());
        assert_eq!(max_ctx.report(), Ok(&first));
    }

    #[test]
    fn no_report_before_solve() {
        let formula = Formula::from_clauses(1, vec![vec![1]]);
        let max_ctx = max_context(&formula);
        assert_eq!(max_ctx.report(), Err(ErrorKind::NoModel));
    }

    #[test]
    fn model_is_idempotent() {
        let formula = Formula::from_clauses(3, vec![vec![1, -2], vec![2, 3], vec![-3]]);
        let mut max_ctx = max_context(&formula);
        let _ = max_ctx.solve().unwrap();

        let atoms = max_ctx.soft_formula().variable_atoms().to_vec();
        let first = atoms
            .iter()
            .map(|atom| max_ctx.engine().value_of(*atom))
            .collect::<Vec<_>>();
        let second = atoms
            .iter()
            .map(|atom| max_ctx.engine().value_of(*atom))
            .collect::<Vec<_>>();

        assert_eq!(first, second);
        assert!(first.iter().all(|value| value.is_some()));
    }

    #[test]
    fn exhausted_by_hard_contradiction() {
        let formula = Formula::from_clauses(1, vec![vec![1]]);
        let mut max_ctx = max_context(&formula);

        let hard = max_ctx.soft_formula().variable_atoms()[0];
        let engine = max_ctx.engine_mut();
        assert!(engine.add_clause(vec![CLiteral::new(hard, true)]).is_ok());
        assert!(engine.add_clause(vec![CLiteral::new(hard, false)]).is_ok());

        assert_eq!(
            max_ctx.solve(),
            Err(ErrorKind::Search(SearchError::Exhausted))
        );
    }

    #[test]
    fn interrupted_then_resumed() {
        let formula = Formula::from_clauses(1, vec![vec![1], vec![-1]]);
        let mut max_ctx = max_context(&formula);

        let mut calls = 0;
        max_ctx
            .engine_mut()
            .set_callback_terminate(Box::new(move || {
                calls += 1;
                calls == 1
            }));

        assert_eq!(
            max_ctx.solve(),
            Err(ErrorKind::Search(SearchError::Interrupted(0)))
        );

        let outcome = max_ctx.solve().unwrap();
        assert_eq!(outcome.satisfied_count(), 1);
        assert_eq!(max_ctx.budgets_tried(), &[0, 0, 1]);
        assert_eq!(max_ctx.assumption_atoms().len(), 2);
    }
}

mod brute_force {
    use super::*;

    fn random_formula(rng: &mut MinimalPCG32) -> Formula {
        let variable_count = rng.random_range(1..=5_usize);
        let clause_count = rng.random_range(1..=12_usize);

        let clauses = (0..clause_count)
            .map(|_| {
                let length = rng.random_range(1..=3_usize);
                (0..length)
                    .map(|_| {
                        let variable = rng.random_range(1..=variable_count) as isize;
                        match rng.random_bool(0.5) {
                            true => variable,
                            false => -variable,
                        }
                    })
                    .collect()
            })
            .collect();

        Formula::from_clauses(variable_count, clauses)
    }

    fn brute_optimum(formula: &Formula) -> usize {
        (0..1_usize << formula.variable_count)
            .map(|mask| {
                let valuation = (0..formula.variable_count)
                    .map(|variable| mask & (1 << variable) != 0)
                    .collect::<Vec<_>>();
                formula.satisfied_count(&valuation)
            })
            .max()
            .unwrap_or(0)
    }

    fn check_on_config(config: &Config, seed: u64, instances: usize) {
        let mut rng = MinimalPCG32::from_seed(seed.to_le_bytes());

        for _ in 0..instances {
            let formula = random_formula(&mut rng);
            let engine = Context::from_config(config.clone());
            let mut max_ctx = MaxContext::from_formula(engine, &formula, config).unwrap();

            let outcome = max_ctx.solve().unwrap();
            let optimum = brute_optimum(&formula);

            assert_eq!(outcome.satisfied_count(), optimum, "on {formula:?}");
            assert_eq!(formula.satisfied_count(&outcome.valuation()), optimum);

            let expected_budgets = (0..=outcome.budget()).collect::<Vec<_>>();
            assert_eq!(max_ctx.budgets_tried(), expected_budgets.as_slice());
        }
    }

    #[test]
    fn default_config() {
        check_on_config(&Config::default(), 73, 200);
    }

    #[test]
    fn without_tightness() {
        let mut config = Config::default();
        config.switch.tightness = false;
        check_on_config(&config, 2, 200);
    }

    #[test]
    fn random_decisions() {
        let mut config = Config::default();
        config.random_decision_bias.value = 0.5;
        config.polarity_lean.value = 0.5;
        config.switch.phase_saving = false;
        check_on_config(&config, 11, 100);
    }
}

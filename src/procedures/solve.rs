//! Determines the satisfiability of the formula in a context, under assumptions.
//!
//! # Overview
//!
//! A solve is a loop over propagation, with the action taken after propagation depending on the outcome:
//!
//! - If propagation finds a conflict at level zero, the formula is unsatisfiable regardless of assumptions.
//! - If propagation finds a conflict above level zero, [analysis](crate::procedures::analysis) derives an asserting clause, a [backjump](crate::procedures::backjump) is made to the level at which the clause asserts, and the clause asserts.
//! - If propagation is exhausted and some assumption remains to be made, the next assumption is made on a fresh level.
//!   + If the assumption is already true the level is left empty, so the level of each assumption matches the position of the assumption.
//!   + If the assumption is already false the formula is unsatisfiable under the assumptions, and the responsible assumptions are [recorded](crate::context::GenericContext::failed_assumptions).
//! - Otherwise, a [decision](crate::procedures::decision) is made on a fresh level, unless every atom has a value and so the formula is satisfiable.
//!
//! ```none
//!                          +------------------+
//!   +----------------------| assume or decide |<----------+
//!   |                      +------------------+           |
//!   ⌄                                                     |  if exhausted
//! +-----------+  if conflict  +----------+  +----------+  |
//! | propagate |-------------->| analysis |->| backjump |--+
//! +-----------+               +----------+  +----------+
//! ```
//!
//! After a conflict a restart may be made, and after a restart the clause database may be reduced (see [schedulers](crate::procedures::schedulers)).
//!
//! Whatever the outcome, on return from a solve the context is at level zero, and so clauses may be added before the next solve.
//! If the solve was satisfiable the valuation found is kept as a model, and may be read with [value_of](GenericContext::value_of).
//!
//! # Example
//!
//! ```rust
//! # use otter_maxsat::config::Config;
//! # use otter_maxsat::context::Context;
//! # use otter_maxsat::reports::Report;
//! # use otter_maxsat::structures::literal::{CLiteral, Literal};
//! let mut the_context = Context::from_config(Config::default());
//!
//! let p = the_context.fresh_or_max_atom();
//! let q = the_context.fresh_or_max_atom();
//! let r = the_context.fresh_or_max_atom();
//!
//! let p_lit = CLiteral::new(p, true);
//! let q_lit = CLiteral::new(q, true);
//! let r_lit = CLiteral::new(r, true);
//!
//! let _ = the_context.add_clause(vec![-p_lit, q_lit]);
//! let _ = the_context.add_clause(vec![-q_lit, r_lit]);
//!
//! assert_eq!(the_context.solve_given(vec![p_lit]), Ok(Report::Satisfiable));
//! assert_eq!(the_context.value_of(r), Some(true));
//!
//! assert_eq!(the_context.solve_given(vec![p_lit, -r_lit]), Ok(Report::Unsatisfiable));
//! assert_eq!(the_context.failed_assumptions(), &[r_lit.negate(), p_lit]);
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! ```
//!
//! # Literature
//!
//! The treatment of assumptions follows [An Extensible SAT-solver](https://doi.org/10.1007/978-3-540-24605-3_37), where each assumption is made as though a decision.

use std::time::Instant;

use crate::{
    context::{ContextState, GenericContext},
    db::{watches::Watch, LevelIndex},
    misc::log::targets::{self},
    procedures::decision::DecisionOk,
    reports::Report,
    structures::{
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Determines the satisfiability of the formula of the context, without assumptions.
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        self.solve_given(Vec::default())
    }

    /// Determines the satisfiability of the formula of the context when each literal in `assumptions` is true.
    ///
    /// For documentation, see [procedures::solve](crate::procedures::solve).
    pub fn solve_given(&mut self, assumptions: Vec<CLiteral>) -> Result<Report, ErrorKind> {
        for assumption in &assumptions {
            self.check_atom(assumption.atom())?;
        }

        self.failed_assumptions.clear();
        self.atom_db.clear_model();
        self.counters.solves += 1;

        if self.state == ContextState::Inconsistent {
            return Ok(Report::Unsatisfiable);
        }

        self.state = ContextState::Solving;
        let start = Instant::now();

        let result = self.solve_loop(&assumptions, start);

        self.counters.time = start.elapsed();
        self.backjump(0);

        let report = result?;
        self.state = match report {
            Report::Satisfiable => ContextState::Satisfiable,
            Report::Unsatisfiable if self.state == ContextState::Inconsistent => {
                ContextState::Inconsistent
            }
            Report::Unsatisfiable => ContextState::Unsatisfiable,
            Report::Unknown => ContextState::Input,
        };

        log::info!(target: targets::PROPAGATION, "Solve {} under {} assumptions: {report}", self.counters.solves, assumptions.len());

        Ok(report)
    }

    fn solve_loop(
        &mut self,
        assumptions: &[CLiteral],
        start: Instant,
    ) -> Result<Report, ErrorKind> {
        let time_limit = self.config.time_limit();

        'solve_loop: loop {
            self.counters.total_iterations += 1;

            if time_limit.is_some_and(|limit| start.elapsed() > limit) {
                log::info!("Time limit reached");
                return Ok(Report::Unknown);
            }
            if self.check_callback_terminate() {
                log::info!("Terminated by callback");
                return Ok(Report::Unknown);
            }

            match self.propagate() {
                Ok(()) => {}

                Err(err::BCPError::Conflict(key)) => {
                    self.counters.total_conflicts += 1;
                    self.counters.fresh_conflicts += 1;

                    if self.trail.level() == 0 {
                        log::info!(target: targets::ANALYSIS, "Conflict at level zero from {key}");
                        self.state = ContextState::Inconsistent;
                        return Ok(Report::Unsatisfiable);
                    }

                    let (clause, level) = self.conflict_analysis(key)?;
                    self.backjump(level);
                    self.assert_learnt(clause, level)?;

                    self.atom_db.decay_activity();
                    self.clause_db.decay_activity();

                    if self.config.switch.restart && self.luby_fresh_conflict_interrupt() {
                        self.restart();
                    }

                    continue 'solve_loop;
                }
            }

            if let Some(&assumption) = assumptions.get(self.trail.level() as usize) {
                match self.atom_db.value_of_literal(assumption) {
                    Some(true) => self.trail.open_level(),

                    Some(false) => {
                        self.analyse_final(assumption)?;
                        return Ok(Report::Unsatisfiable);
                    }

                    None => {
                        self.trail.open_level();
                        let level = self.trail.level();
                        self.atom_db.set_value(assumption, level, None);
                        self.trail.store_assignment(assumption);
                    }
                }
                continue 'solve_loop;
            }

            match self.make_decision() {
                DecisionOk::Literal(decision) => {
                    self.trail.open_level();
                    let level = self.trail.level();
                    self.atom_db.set_value(decision, level, None);
                    self.trail.store_assignment(decision);
                }

                DecisionOk::Exhausted => {
                    self.atom_db.store_model();
                    return Ok(Report::Satisfiable);
                }
            }
        }
    }

    /// Stores `clause`, if not a unit, and records the first literal of the clause as true at `level`.
    ///
    /// # Soundness
    /// Every literal of the clause other than the first must be false, and the second literal (if any) must have been valued at `level`.
    pub fn assert_learnt(&mut self, clause: CClause, level: LevelIndex) -> Result<(), ErrorKind> {
        let asserted = *clause.first().ok_or(err::AnalysisError::EmptyResolution)?;

        let reason = match clause.len() {
            1 => None,
            _ => {
                let second = clause[1];
                let key = self.clause_db.store(clause, false)?;
                self.watches.watch(asserted, Watch { key, blocker: second });
                self.watches.watch(second, Watch { key, blocker: asserted });
                self.clause_db.bump_activity(key);
                Some(key)
            }
        };

        self.atom_db.set_value(asserted, level, reason);
        self.trail.store_assignment(asserted);
        Ok(())
    }
}

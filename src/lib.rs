//! A library for determining the maximum number of simultaneously satisfiable clauses of a boolean formula written in conjunctive normal form.
//!
//! otter_maxsat solves plain (unweighted, every clause soft) MaxSAT by an incremental relaxation search:
//! - Each clause *i* of the formula is extended with a fresh *relaxation* atom r<sub>i</sub>, so a clause may be 'relaxed' by valuing r<sub>i</sub> true.
//! - For budgets *k* = 0, 1, 2, … a SAT engine is asked whether the formula is satisfiable when at most *k* relaxation atoms are true.
//! - The first satisfiable budget is the minimum number of violated clauses, and so the number of clauses less the budget is the maximum number of satisfied clauses.
//!
//! The constraint "at most *k* relaxation atoms are true" is written as a [ladder](crate::maxsat::ladder) (or sequential counter) encoding.
//! The atoms of the ladder are shared between budgets, and the clauses for each budget are guarded by a dedicated assumption atom, so the clause database of the engine only ever grows and anything learnt during one solve remains valid for every later solve.
//!
//! # Orientation
//!
//! The library is in two parts:
//!
//! - A conflict-driven clause-learning SAT engine, built around a [context].
//!   Formulas are added to a context [programatically](crate::context::GenericContext::add_clause) and solves take place under [assumptions](crate::context::GenericContext::solve_given).
//!   The [procedures] module documents the dynamics of a solve, and the [db] module the data a solve reads and writes.
//! - The MaxSAT layer, in [maxsat], which talks to any SAT engine through the [Engine](crate::engine::Engine) trait.
//!
//! Formulas are read from the DIMACS representation by the [builder](crate::builder::dimacs).
//!
//! # Examples
//!
//! + Find the maximum number of satisfiable clauses of a formula.
//!
//! ```rust
//! # use otter_maxsat::config::Config;
//! # use otter_maxsat::context::Context;
//! # use otter_maxsat::maxsat::MaxContext;
//! # use otter_maxsat::structures::formula::Formula;
//! let formula = Formula::from_clauses(1, vec![vec![1], vec![-1]]);
//!
//! let config = Config::default();
//! let engine = Context::from_config(config.clone());
//! let mut max_ctx = MaxContext::from_formula(engine, &formula, &config).unwrap();
//!
//! let outcome = max_ctx.solve().unwrap();
//! assert_eq!(outcome.satisfied_count(), 1);
//! assert_eq!(max_ctx.budgets_tried(), &[0, 1]);
//! ```
//!
//! + Use the SAT engine directly.
//!
//! ```rust
//! # use otter_maxsat::config::Config;
//! # use otter_maxsat::context::Context;
//! # use otter_maxsat::reports::Report;
//! # use otter_maxsat::structures::literal::{CLiteral, Literal};
//! let mut ctx = Context::from_config(Config::default());
//!
//! let p = ctx.fresh_or_max_atom();
//! let q = ctx.fresh_or_max_atom();
//!
//! assert!(ctx.add_clause(vec![CLiteral::new(p, true), CLiteral::new(q, true)]).is_ok());
//! assert!(ctx.add_clause(vec![CLiteral::new(p, false)]).is_ok());
//!
//! assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
//! assert_eq!(ctx.value_of(q), Some(true));
//!
//! assert_eq!(ctx.solve_given(vec![CLiteral::new(q, false)]), Ok(Report::Unsatisfiable));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//! No log implementation is provided by the library.
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs of each budget tried by the search can be found with `RUST_LOG=search=info …`
//! - Logs of the clauses written by the ladder encoding can be found with `RUST_LOG=encoding=trace …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod engine;
pub mod generic;
pub mod maxsat;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;

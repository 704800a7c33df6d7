use otter_maxsat::{
    config::Config,
    context::Context,
    maxsat::ladder::Ladder,
    reports::Report,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// A context with `size` relaxation atoms and nothing else.
fn context_with_relaxation(size: usize) -> (Context, Vec<Atom>) {
    let mut ctx = Context::from_config(Config::default());
    let relaxation = (0..size).map(|_| ctx.fresh_or_max_atom()).collect();
    (ctx, relaxation)
}

/// The relaxation atoms valued by `mask`, as assumptions.
fn mask_assumptions(relaxation: &[Atom], mask: usize) -> Vec<CLiteral> {
    relaxation
        .iter()
        .enumerate()
        .map(|(index, atom)| CLiteral::new(*atom, mask & (1 << index) != 0))
        .collect()
}

fn exhaustive_on(tightness: bool) {
    for size in 1..=8_usize {
        for budget in 0..size {
            let (mut ctx, relaxation) = context_with_relaxation(size);
            let gate = ctx.fresh_or_max_atom();

            let mut ladder = Ladder::new(relaxation.clone(), tightness);
            assert!(ladder.encode(&mut ctx, budget, gate).is_ok());

            for mask in 0..(1_usize << size) {
                let mut assumptions = vec![CLiteral::new(gate, true)];
                assumptions.extend(mask_assumptions(&relaxation, mask));

                let expected = match mask.count_ones() as usize <= budget {
                    true => Report::Satisfiable,
                    false => Report::Unsatisfiable,
                };

                assert_eq!(
                    ctx.solve_given(assumptions),
                    Ok(expected),
                    "size {size}, budget {budget}, mask {mask:b}"
                );
            }
        }
    }
}

mod correctness {
    use super::*;

    #[test]
    fn exhaustive_with_tightness() {
        exhaustive_on(true);
    }

    #[test]
    fn exhaustive_without_tightness() {
        exhaustive_on(false);
    }

    #[test]
    fn inactive_without_gate() {
        let (mut ctx, relaxation) = context_with_relaxation(4);
        let gate = ctx.fresh_or_max_atom();

        let mut ladder = Ladder::new(relaxation.clone(), true);
        assert!(ladder.encode(&mut ctx, 0, gate).is_ok());

        let every = mask_assumptions(&relaxation, 0b1111);
        assert_eq!(ctx.solve_given(every.clone()), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(gate), Some(false));

        let mut gated = every;
        gated.push(CLiteral::new(gate, true));
        assert_eq!(ctx.solve_given(gated), Ok(Report::Unsatisfiable));
    }
}

mod isolation {
    use super::*;

    #[test]
    fn shared_ladder() {
        let size = 6;
        let (mut ctx, relaxation) = context_with_relaxation(size);
        let mut ladder = Ladder::new(relaxation.clone(), true);

        let gates = (0..size)
            .map(|budget| {
                let gate = ctx.fresh_or_max_atom();
                assert!(ladder.encode(&mut ctx, budget, gate).is_ok());
                gate
            })
            .collect::<Vec<_>>();

        assert_eq!(ladder.columns_obtained(), size - 1);

        for budget in 0..size {
            for mask in 0..(1_usize << size) {
                let mut assumptions = gates[..budget]
                    .iter()
                    .map(|gate| CLiteral::new(*gate, false))
                    .collect::<Vec<_>>();
                assumptions.push(CLiteral::new(gates[budget], true));
                assumptions.extend(mask_assumptions(&relaxation, mask));

                let expected = match mask.count_ones() as usize <= budget {
                    true => Report::Satisfiable,
                    false => Report::Unsatisfiable,
                };

                assert_eq!(
                    ctx.solve_given(assumptions),
                    Ok(expected),
                    "budget {budget}, mask {mask:b}"
                );
            }
        }
    }

    #[test]
    fn later_gates_unassumed() {
        // With budget 1 active and the gate of budget 2 free, at most one relaxation atom may be true.
        let (mut ctx, relaxation) = context_with_relaxation(4);
        let mut ladder = Ladder::new(relaxation.clone(), true);

        let gates = (0..3)
            .map(|budget| {
                let gate = ctx.fresh_or_max_atom();
                assert!(ladder.encode(&mut ctx, budget, gate).is_ok());
                gate
            })
            .collect::<Vec<_>>();

        let mut assumptions = vec![CLiteral::new(gates[0], false), CLiteral::new(gates[1], true)];
        assumptions.extend(mask_assumptions(&relaxation, 0b0101));
        assert_eq!(ctx.solve_given(assumptions), Ok(Report::Unsatisfiable));

        let mut assumptions = vec![CLiteral::new(gates[0], false), CLiteral::new(gates[1], true)];
        assumptions.extend(mask_assumptions(&relaxation, 0b0100));
        assert_eq!(ctx.solve_given(assumptions), Ok(Report::Satisfiable));
    }
}

/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

That is, the atoms of a context are [0..*m*) for some *m*, and so atoms may be used directly as the indicies of a structure.

The atom `0` is reserved by each context and is fixed to the value true.
As a consequence, the atoms made for the variables of a DIMACS formula need not coincide with the variables, and a map from variables to atoms is kept wherever needed (see [SoftFormula](crate::maxsat::soft::SoftFormula)).

# Notes
In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The atom fixed with a value of true in every context.
pub const TOP_ATOM: Atom = 0;

/// The maximum instance of an atom.
///
/// Bounded so that any atom may be written as a (positive or negative) `i32`.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();

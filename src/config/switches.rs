/// Boolean valued configurations.
///
/// When set to true things related to the identifier are enabled.
#[derive(Clone, Debug)]
pub struct Switches {
    /// Default to the last set value of an atom when choosing a value for the atom, otherwise decide with the polarity lean.
    pub phase_saving: bool,

    /// Permit (scheduled) reductions of the clause database.
    pub reduction: bool,

    /// Permit (scheduled) restarts.
    pub restart: bool,

    /// Write the clauses of a ladder encoding which forbid a rung from being reached too early.
    ///
    /// These are not required for the encoding to be correct, though help propagation.
    pub tightness: bool,
}

impl Default for Switches {
    fn default() -> Self {
        Switches {
            phase_saving: true,
            reduction: true,
            restart: true,
            tightness: true,
        }
    }
}

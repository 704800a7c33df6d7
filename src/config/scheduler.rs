/// Schedulers, for reduction of the clause database.
///
/// Reductions only take place immediately after a restart.
/// If two scheduled reductions coincide, only one reduction takes place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduler {
    /// Reduce the clause database every `luby` restarts.
    pub luby: Option<u32>,

    /// Reduce the clause database at the first restart after every `conflict` conflicts.
    pub conflict: Option<u32>,
}

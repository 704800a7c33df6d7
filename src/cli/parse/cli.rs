use std::path::PathBuf;

use clap::{value_parser, Arg, Command};

use otter_maxsat::config::{Activity, Config, PolarityLean, RandomDecisionBias};
use otter_maxsat::generic::luby::LubyRepresentation;

pub fn cli() -> Command {
    let defaults = Config::default();

    Command::new("otter_maxsat")
        .about("Determines the maximum number of simultaneously satisfiable clauses of a formula")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("path")
            .required(false)
            .value_parser(value_parser!(PathBuf))
            .help("The DIMACS form CNF file to parse.")
            .long_help("The DIMACS form CNF file to parse.
If no path is given the formula is read from standard input.
With the 'xz' feature, files with an 'xz' extension are decompressed."))

        .arg(Arg::new("atom_decay")
            .long("atom-decay")
            .value_name("DECAY")
            .value_parser(value_parser!(Activity))
            .required(false)
            .num_args(1)
            .help(format!("The decay to use for atom activity.
Default: {}

After a conflict the activity of each atom is multiplied by the decay.", defaults.atom_db.decay.value)))

        .arg(Arg::new("clause_decay")
            .long("clause-decay")
            .value_name("DECAY")
            .value_parser(value_parser!(Activity))
            .required(false)
            .num_args(1)
            .help(format!("The decay to use for clause activity.
Default: {}

Works the same as atom activity, but applied to learnt clauses.
If reductions are allowed then clauses are removed from low to high activity.", defaults.clause_db.decay.value)))

        .arg(Arg::new("luby")
            .long("luby")
            .short('l')
            .value_name("U")
            .value_parser(value_parser!(LubyRepresentation))
            .required(false)
            .num_args(1)
            .help(format!("The 'u' value to use for the luby calculation when restarts are permitted.
Default: {}", defaults.luby_u.value)))

        .arg(Arg::new("polarity_lean")
            .long("polarity-lean")
            .value_name("LEAN")
            .value_parser(value_parser!(PolarityLean))
            .required(false)
            .num_args(1)
            .help(format!("The chance of choosing positive polarity when making a decision without a saved phase.
Default: {}", defaults.polarity_lean.value)))

        .arg(Arg::new("random_decision_bias")
            .long("random-decision-bias")
            .short('r')
            .value_name("BIAS")
            .value_parser(value_parser!(RandomDecisionBias))
            .required(false)
            .num_args(1)
            .help(format!("The chance of deciding on a random atom (as opposed to the most active atom).
Default: {}", defaults.random_decision_bias.value)))

        .arg(Arg::new("no_restart")
            .long("no-restart")
            .value_parser(value_parser!(bool))
            .required(false)
            .num_args(0)
            .help("Prevent decisions from being forgotten."))

        .arg(Arg::new("no_reduction")
            .long("no-reduction")
            .value_parser(value_parser!(bool))
            .required(false)
            .num_args(0)
            .help("Prevent learnt clauses from being forgotten."))

        .arg(Arg::new("no_phase_saving")
            .long("no-phase-saving")
            .value_parser(value_parser!(bool))
            .required(false)
            .num_args(0)
            .help("Decide on polarity by the polarity lean, rather than the previous value of an atom."))

        .arg(Arg::new("time_limit")
            .long("time-limit")
            .short('t')
            .value_name("SECONDS")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("Time limit for each solve of the engine in seconds.
Default: No limit"))

        // MaxSAT specific arguments

        .arg(Arg::new("no_tightness")
            .long("no-tightness")
            .value_parser(value_parser!(bool))
            .required(false)
            .num_args(0)
            .help("Omit the (optional) tightness clauses of the ladder encoding."))

        // CLI specific arguments

        .arg(Arg::new("verbose")
            .long("verbose")
            .short('v')
            .value_parser(value_parser!(bool))
            .required(false)
            .num_args(0)
            .help("Write comments on the input and on each budget tried."))
}

use clap::ArgMatches;

use otter_maxsat::{
    config::{self, Config, ConfigOption},
    generic::luby::LubyRepresentation,
};

/// A value given for some option outside of the permitted range of the option.
#[derive(Debug)]
pub struct OutOfRange {
    pub message: String,
}

impl std::fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

fn set_option<T: Clone + PartialOrd + std::fmt::Debug>(
    option: &mut ConfigOption<T>,
    value: T,
) -> Result<(), OutOfRange> {
    match option.set(value.clone()) {
        true => Ok(()),
        false => {
            let (min, max) = option.min_max();
            Err(OutOfRange {
                message: format!("{} of {value:?} outside of [{min:?}, {max:?}]", option.name),
            })
        }
    }
}

pub fn config_from_args(args: &ArgMatches) -> Result<Config, OutOfRange> {
    let mut the_config = Config::default();

    if let Ok(Some(decay)) = args.try_get_one::<config::Activity>("atom_decay") {
        set_option(&mut the_config.atom_db.decay, *decay)?;
    };

    if let Ok(Some(decay)) = args.try_get_one::<config::Activity>("clause_decay") {
        set_option(&mut the_config.clause_db.decay, *decay)?;
    };

    if let Ok(Some(u)) = args.try_get_one::<LubyRepresentation>("luby") {
        set_option(&mut the_config.luby_u, *u)?;
    };

    if let Ok(Some(lean)) = args.try_get_one::<config::PolarityLean>("polarity_lean") {
        set_option(&mut the_config.polarity_lean, *lean)?;
    };

    if let Ok(Some(bias)) = args.try_get_one::<config::RandomDecisionBias>("random_decision_bias") {
        set_option(&mut the_config.random_decision_bias, *bias)?;
    };

    if let Ok(Some(true)) = args.try_get_one::<bool>("no_restart") {
        the_config.switch.restart = false;
    };

    if let Ok(Some(true)) = args.try_get_one::<bool>("no_reduction") {
        the_config.switch.reduction = false;
        the_config.scheduler.luby = None;
        the_config.scheduler.conflict = None;
    };

    if let Ok(Some(true)) = args.try_get_one::<bool>("no_phase_saving") {
        the_config.switch.phase_saving = false;
    };

    if let Ok(Some(secs)) = args.try_get_one::<u64>("time_limit") {
        set_option(
            &mut the_config.time_limit,
            std::time::Duration::from_secs(*secs),
        )?;
    };

    if let Ok(Some(true)) = args.try_get_one::<bool>("no_tightness") {
        the_config.switch.tightness = false;
    };

    Ok(the_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switches() {
        let matches = crate::parse::cli::cli()
            .try_get_matches_from(["otter_maxsat", "--no-tightness", "--no-restart"])
            .unwrap();
        let config = config_from_args(&matches).unwrap();
        assert!(!config.switch.tightness);
        assert!(!config.switch.restart);
        assert!(config.switch.reduction);
    }

    #[test]
    fn out_of_range() {
        let matches = crate::parse::cli::cli()
            .try_get_matches_from(["otter_maxsat", "--polarity-lean", "1.5"])
            .unwrap();
        assert!(config_from_args(&matches).is_err());
    }
}

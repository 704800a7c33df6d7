use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use otter_maxsat::{builder::dimacs::parse_dimacs, structures::formula::Formula, types::err};

/// Ways in which a formula may fail to be loaded.
pub enum LoadError {
    /// The input could not be read.
    Io(std::io::Error),

    /// The input was read, but is not a formula.
    Formula(err::ErrorKind),
}

/// Reads a formula from the file at `path`, or from standard input if no path is given.
pub fn load_dimacs(path: Option<&PathBuf>) -> Result<Formula, LoadError> {
    let reader: Box<dyn BufRead> = match path {
        None => Box::new(BufReader::new(std::io::stdin())),

        Some(path) => {
            let file = File::open(path).map_err(LoadError::Io)?;
            match path.extension() {
                #[cfg(feature = "xz")]
                Some(extension) if extension == "xz" => {
                    Box::new(BufReader::new(xz2::read::XzDecoder::new(file)))
                }
                _ => Box::new(BufReader::new(file)),
            }
        }
    };

    parse_dimacs(reader).map_err(LoadError::Formula)
}

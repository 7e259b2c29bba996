use crate::{
    compare::{Nearest, Pairs},
    error::Error,
    format::{write_nearest, write_pairs},
    help,
    record::load,
    style::Style,
};
use std::{io::Write, path::PathBuf};
use tracing::debug;

/// What the arguments ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Usage,
    Pairs(PathBuf),
    Nearest { reference: PathBuf, test: PathBuf },
}

impl Command {
    /// Uses `std::env::args_os()`, skipping the program name.
    pub fn parse() -> Self {
        Self::parse_with(std::env::args_os().skip(1))
    }

    /// One path selects all-pairs mode, two paths select reference mode (the
    /// reference file first); anything else selects the usage text.
    pub fn parse_with<I: IntoIterator<Item = T>, T: Into<PathBuf>>(arguments: I) -> Self {
        let mut arguments = arguments.into_iter().map(Into::into);
        match (arguments.next(), arguments.next(), arguments.next()) {
            (Some(path), None, None) => Command::Pairs(path),
            (Some(reference), Some(test), None) => Command::Nearest { reference, test },
            _ => Command::Usage,
        }
    }

    /// Loads every input before comparing anything, then writes the results
    /// and returns the number of result lines.
    pub fn run(&self, mut writer: impl Write, style: &dyn Style) -> Result<usize, Error> {
        match self {
            Command::Usage => {
                write!(writer, "{}", help::usage(style)?)?;
                writer.flush()?;
                Ok(0)
            }
            Command::Pairs(path) => {
                let records = load(path)?;
                let count = write_pairs(writer, Pairs::new(&records))?;
                debug!(records = records.len(), results = count, "compared all pairs");
                Ok(count)
            }
            Command::Nearest { reference, test } => {
                let references = load(reference)?;
                let tests = load(test)?;
                let count = write_nearest(writer, Nearest::new(&references, &tests))?;
                debug!(
                    references = references.len(),
                    tests = tests.len(),
                    results = count,
                    "compared against references"
                );
                Ok(count)
            }
        }
    }
}

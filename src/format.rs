use crate::{
    compare::{Block, Match},
    error::Error,
};
use core::fmt;
use std::io::{self, Write};

pub const BREAK: &str = "----";
const PRECISION: usize = 4;

/// Formats a score with 4 significant digits, like C's `%.4g`.
///
/// Trailing zeros are removed, and the exponent form (`1.234e-05`) is used
/// when the decimal exponent is below -4 or at least the precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score(pub f64);

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(value) = *self;
        if value == 0.0 || !value.is_finite() {
            return write!(f, "{value}");
        }

        // Rounding to the precision first gives the exponent of the printed digits.
        let precision = PRECISION - 1;
        let scientific = format!("{value:.precision$e}");
        let Some((mantissa, exponent)) = scientific.split_once('e') else {
            return write!(f, "{scientific}");
        };
        let exponent = exponent.parse::<i32>().map_err(|_| fmt::Error)?;
        if exponent < -4 || exponent >= PRECISION as i32 {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{sign}{:02}",
                strip(mantissa),
                exponent.unsigned_abs()
            )
        } else {
            let decimals = (PRECISION as i32 - 1 - exponent) as usize;
            write!(f, "{}", strip(&format!("{value:.decimals$}")))
        }
    }
}

fn strip(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Renders invalid UTF-8 in the records as replacement characters; the
/// writers below emit the original bytes.
impl fmt::Display for Match<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}",
            Score(self.score()),
            self.distance,
            self.left.position(),
            self.right.position(),
            self.left.text(),
            self.right.text()
        )
    }
}

impl fmt::Display for Block<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for found in &self.matches {
            writeln!(f, "{found}")?;
        }
        write!(f, "{BREAK}")
    }
}

fn write_match(writer: &mut impl Write, found: &Match<'_>) -> io::Result<()> {
    write!(
        writer,
        "{}\t{}\t{}\t{}\t",
        Score(found.score()),
        found.distance,
        found.left.position(),
        found.right.position()
    )?;
    writer.write_all(found.left.as_bytes())?;
    writer.write_all(b"\t")?;
    writer.write_all(found.right.as_bytes())?;
    writer.write_all(b"\n")
}

/// Writes one line per pair and returns the number of lines written.
pub fn write_pairs<'a>(
    mut writer: impl Write,
    pairs: impl IntoIterator<Item = Match<'a>>,
) -> Result<usize, Error> {
    let mut count = 0;
    for found in pairs {
        write_match(&mut writer, &found)?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// Writes every block followed by its break line and returns the number of
/// result lines written, break lines excluded.
pub fn write_nearest<'a>(
    mut writer: impl Write,
    blocks: impl IntoIterator<Item = Block<'a>>,
) -> Result<usize, Error> {
    let mut count = 0;
    for block in blocks {
        for found in &block.matches {
            write_match(&mut writer, found)?;
        }
        writeln!(writer, "{BREAK}")?;
        count += block.matches.len();
    }
    writer.flush()?;
    Ok(count)
}

//! Pairwise string similarity based on a restricted Damerau-Levenshtein distance.
//!
//! Two modes are supported: every string of one set against every other
//! ([`Pairs`]), and every string of a test set against a reference set, keeping
//! only the closest references for each test string ([`Nearest`]).

pub mod command;
pub mod compare;
pub mod distance;
mod error;
pub mod format;
mod help;
pub mod minima;
pub mod record;
pub mod style;

pub use crate::{
    command::Command,
    compare::{Block, Match, Nearest, Pairs},
    distance::{distance, Distance},
    error::Error,
    format::Score,
    help::usage,
    minima::Minima,
    record::Record,
};

/// How many references are kept for each test string.
pub const CAPACITY: usize = 3;
/// Initial capacity of a loaded record list.
pub const INITIAL_RECORDS: usize = 64;

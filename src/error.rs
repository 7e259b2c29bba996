use core::fmt;
use std::{error, io, path::PathBuf};

pub enum Error {
    Open(PathBuf, io::Error),
    Read(PathBuf, usize, io::Error),
    Write(io::Error),
    Format(fmt::Error),
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Open(_, error) | Error::Read(_, _, error) | Error::Write(error) => Some(error),
            Error::Format(error) => Some(error),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Open(path, error) => write!(
                f,
                "Unable to open the input file: {}; {error}",
                path.display()
            ),
            Error::Read(path, line, error) => write!(
                f,
                "Unable to read line {line} of the input file: {}; {error}",
                path.display()
            ),
            Error::Write(error) => write!(f, "Unable to write the results; {error}"),
            Error::Format(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Write(error)
    }
}

impl From<fmt::Error> for Error {
    fn from(error: fmt::Error) -> Self {
        Error::Format(error)
    }
}

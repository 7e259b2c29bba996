use crate::{error::Error, INITIAL_RECORDS};
use std::{
    borrow::Cow,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};
use tracing::debug;

/// A trimmed, non-empty input line and its 1-based position among the retained lines.
///
/// The line is kept as raw bytes; no encoding is assumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    position: usize,
    text: Vec<u8>,
}

impl Record {
    pub fn new(position: usize, text: impl Into<Vec<u8>>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }

    pub const fn position(&self) -> usize {
        self.position
    }

    /// The line as text, with invalid UTF-8 sequences replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.text)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.text
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Numbers the given strings from 1, keeping them as they are.
pub fn records<T: Into<Vec<u8>>>(texts: impl IntoIterator<Item = T>) -> Vec<Record> {
    texts
        .into_iter()
        .enumerate()
        .map(|(index, text)| Record::new(index + 1, text))
        .collect()
}

/// Strips spaces and horizontal tabs, and nothing else.
pub fn trim(line: &[u8]) -> &[u8] {
    let blank = |byte: &u8| *byte == b' ' || *byte == b'\t';
    let start = line.iter().position(|byte| !blank(byte)).unwrap_or(line.len());
    let end = line.iter().rposition(|byte| !blank(byte)).map_or(start, |index| index + 1);
    &line[start..end]
}

/// Reads one record per line, dropping the lines that are blank once trimmed.
///
/// Lines end with `\n` or `\r\n`. Their bytes are kept as they are, whatever
/// their encoding. On failure, returns the 1-based number of the line that
/// could not be read along with the error.
pub fn read(reader: impl BufRead) -> Result<Vec<Record>, (usize, io::Error)> {
    let mut records = Vec::with_capacity(INITIAL_RECORDS);
    for (index, line) in reader.split(b'\n').enumerate() {
        let line = line.map_err(|error| (index + 1, error))?;
        let line = line.strip_suffix(b"\r").unwrap_or(&line);
        let text = trim(line);
        if !text.is_empty() {
            records.push(Record::new(records.len() + 1, text));
        }
    }
    Ok(records)
}

pub fn load(path: impl AsRef<Path>) -> Result<Vec<Record>, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|error| Error::Open(path.to_path_buf(), error))?;
    let records = read(BufReader::new(file))
        .map_err(|(line, error)| Error::Read(path.to_path_buf(), line, error))?;
    debug!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}

//! Damerau-Levenshtein distance over raw byte sequences.
//!
//! This is the restricted variant: a transposition is only recognized when the
//! current pair of bytes is an immediate swap of the previous pair. There is no
//! per-symbol last-occurrence table, so for alphabets with repeated symbols the
//! result can differ from the textbook Damerau-Levenshtein distance and the
//! triangle inequality does not hold in general.

/// Computes the distance between `left` and `right` with a freshly allocated table.
pub fn distance(left: &[u8], right: &[u8]) -> usize {
    Distance::new().distance(left, right)
}

/// A distance engine that keeps its dynamic programming table between calls.
///
/// The table is re-initialized on every call, so reusing a `Distance` across
/// unrelated comparisons never changes a result; it only avoids reallocating.
#[derive(Debug, Default, Clone)]
pub struct Distance(Vec<usize>);

impl Distance {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Pre-allocates room for a table of `cells` entries.
    pub fn with_capacity(cells: usize) -> Self {
        Self(Vec::with_capacity(cells))
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.0.capacity()
    }

    pub fn distance(&mut self, left: &[u8], right: &[u8]) -> usize {
        let left_count = left.len();
        let right_count = right.len();
        if left_count == 0 {
            return right_count;
        } else if right_count == 0 {
            return left_count;
        }

        // Row 0 and column 0 hold `limit` so that the transposition lookup at
        // `[i - 1][j - 1]` never leaves the table.
        let width = right_count + 2;
        let limit = left_count + right_count;
        let Self(table) = self;
        table.clear();
        table.resize((left_count + 2) * width, 0);

        let at = |i: usize, j: usize| i * width + j;
        table[at(0, 0)] = limit;
        for i in 0..=left_count {
            table[at(i + 1, 0)] = limit;
            table[at(i + 1, 1)] = i;
        }
        for j in 0..=right_count {
            table[at(0, j + 1)] = limit;
            table[at(1, j + 1)] = j;
        }

        for i in 1..=left_count {
            for j in 1..=right_count {
                let cost = if left[i - 1] == right[j - 1] { 0 } else { 1 };
                let delete = table[at(i, j + 1)] + 1;
                let insert = table[at(i + 1, j)] + 1;
                let replace = table[at(i, j)] + cost;
                let mut value = delete.min(insert).min(replace);
                if i > 1 && j > 1 && left[i - 1] == right[j - 2] && left[i - 2] == right[j - 1] {
                    value = value.min(table[at(i - 1, j - 1)] + cost);
                }
                table[at(i + 1, j + 1)] = value;
            }
        }

        table[at(left_count + 1, right_count + 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        assert_eq!(distance(b"boba", b"boba"), 0);
        assert_eq!(distance(b"boba", b"bobo"), 1);
        assert_eq!(distance(b"boba", b"bobba"), 1);
        assert_eq!(distance(b"boba", b"boa"), 1);
        assert_eq!(distance(b"boba", b"fett"), 4);
        assert_eq!(distance(b"kitten", b"sitting"), 3);
        assert_eq!(distance(b"flaw", b"lawn"), 2);
    }

    #[test]
    fn empty() {
        assert_eq!(distance(b"", b""), 0);
        assert_eq!(distance(b"", b"fett"), 4);
        assert_eq!(distance(b"boba", b""), 4);
    }

    #[test]
    fn adjacent_transpositions() {
        assert_eq!(distance(b"ab", b"ba"), 1);
        assert_eq!(distance(b"abcd", b"abdc"), 1);
        assert_eq!(distance(b"abcd", b"badc"), 2);
        assert_eq!(distance(b"teh", b"the"), 1);
    }

    #[test]
    fn transposition_does_not_see_through_edits() {
        // A full Damerau-Levenshtein would answer 2 ("ca" -> "ac" -> "abc").
        assert_eq!(distance(b"ca", b"abc"), 3);
    }

    #[test]
    fn bytes_not_characters() {
        assert_eq!(distance("é".as_bytes(), b"e"), 2);
        assert_eq!(distance("é".as_bytes(), "è".as_bytes()), 1);
    }

    #[test]
    fn reused_table_matches_fresh_table() {
        let words: [&[u8]; 6] = [b"kitten", b"", b"sitting", b"a", b"abracadabra", b"cadabra"];
        let mut engine = Distance::with_capacity(64);
        for left in words {
            for right in words {
                assert_eq!(engine.distance(left, right), distance(left, right));
            }
        }
    }
}

use crate::{distance::Distance, minima::Minima, record::Record, CAPACITY};
use core::iter::FusedIterator;
use std::slice;

/// The outcome of comparing two records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match<'a> {
    pub distance: usize,
    pub left: &'a Record,
    pub right: &'a Record,
}

impl<'a> Match<'a> {
    pub fn new(distance: usize, left: &'a Record, right: &'a Record) -> Self {
        Self {
            distance,
            left,
            right,
        }
    }

    /// The distance divided by the combined byte length of both records, or
    /// `0.0` when both are empty.
    pub fn score(&self) -> f64 {
        if self.left.is_empty() && self.right.is_empty() {
            0.0
        } else {
            self.distance as f64 / (self.left.len() + self.right.len()) as f64
        }
    }
}

/// Side of the distance table needed for the longest of `records`.
fn span(records: &[Record]) -> usize {
    records
        .iter()
        .map(Record::len)
        .max()
        .map_or(0, |longest| longest + 2)
}

/// Compares every record with every record that follows it.
///
/// Pairs are produced in ascending order of the first position, then of the
/// second.
pub struct Pairs<'a> {
    records: &'a [Record],
    left: usize,
    right: usize,
    distance: Distance,
}

impl<'a> Pairs<'a> {
    pub fn new(records: &'a [Record]) -> Self {
        Self {
            records,
            left: 0,
            right: 1,
            distance: Distance::with_capacity(span(records) * span(records)),
        }
    }

    /// Number of pairs left to produce.
    fn remaining(&self) -> usize {
        let count = self.records.len();
        if self.left + 1 >= count {
            return 0;
        }
        let rest = count - self.left - 1;
        count - self.right + rest * (rest - 1) / 2
    }
}

impl<'a> Iterator for Pairs<'a> {
    type Item = Match<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let records = self.records;
        if self.right >= records.len() {
            self.left += 1;
            self.right = self.left + 1;
            if self.right >= records.len() {
                self.left = records.len();
                return None;
            }
        }

        let left = &records[self.left];
        let right = &records[self.right];
        self.right += 1;
        let distance = self.distance.distance(left.as_bytes(), right.as_bytes());
        Some(Match::new(distance, left, right))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Pairs<'_> {}
impl FusedIterator for Pairs<'_> {}

/// The closest references found for one test record, closest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Block<'a> {
    pub test: &'a Record,
    pub matches: Vec<Match<'a>>,
}

/// Compares each test record with every reference record and keeps the
/// closest references for it.
pub struct Nearest<'a> {
    references: &'a [Record],
    tests: slice::Iter<'a, Record>,
    capacity: usize,
    distance: Distance,
}

impl<'a> Nearest<'a> {
    pub fn new(references: &'a [Record], tests: &'a [Record]) -> Self {
        Self::with_capacity(references, tests, CAPACITY)
    }

    /// Keeps `capacity` references per test record instead of the default.
    pub fn with_capacity(references: &'a [Record], tests: &'a [Record], capacity: usize) -> Self {
        Self {
            references,
            tests: tests.iter(),
            capacity,
            distance: Distance::with_capacity(span(references) * span(tests)),
        }
    }
}

impl<'a> Iterator for Nearest<'a> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let test = self.tests.next()?;
        let mut minima = Minima::new(self.capacity);
        for reference in self.references {
            let distance = self.distance.distance(test.as_bytes(), reference.as_bytes());
            minima.insert(distance, reference);
        }
        let matches = minima
            .into_iter()
            .map(|(distance, reference)| Match::new(distance, test, reference))
            .collect();
        Some(Block { test, matches })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tests.size_hint()
    }
}

impl ExactSizeIterator for Nearest<'_> {}
impl FusedIterator for Nearest<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::records;

    fn positions<'a>(matches: impl IntoIterator<Item = Match<'a>>) -> Vec<(usize, usize)> {
        matches
            .into_iter()
            .map(|found| (found.left.position(), found.right.position()))
            .collect()
    }

    #[test]
    fn pairs_in_order() {
        let records = records(["a", "b", "c"]);
        let pairs = Pairs::new(&records);
        assert_eq!(pairs.len(), 3);
        assert_eq!(positions(pairs), [(1, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn pairs_count() {
        for count in 0usize..8 {
            let records = records((0..count).map(|index| index.to_string()));
            let mut pairs = Pairs::new(&records);
            let expected = count * count.saturating_sub(1) / 2;
            assert_eq!(pairs.len(), expected);
            let mut produced = 0;
            while pairs.next().is_some() {
                produced += 1;
                assert_eq!(pairs.len(), expected - produced);
            }
            assert_eq!(produced, expected);
            assert!(pairs.next().is_none());
        }
    }

    #[test]
    fn pairs_of_too_few_records() {
        assert_eq!(Pairs::new(&[]).count(), 0);
        assert_eq!(Pairs::new(&records(["alone"])).count(), 0);
    }

    #[test]
    fn pair_distances_and_scores() {
        let records = records(["kitten", "sitting", "kitten"]);
        let matches = Pairs::new(&records).collect::<Vec<_>>();
        assert_eq!(matches[0].distance, 3);
        assert_eq!(matches[0].score(), 3.0 / 13.0);
        assert_eq!(matches[1].distance, 0);
        assert_eq!(matches[1].score(), 0.0);
        assert_eq!(matches[2].distance, 3);
    }

    #[test]
    fn empty_strings_score_zero() {
        let records = records(["", ""]);
        let found = Pairs::new(&records).next().unwrap();
        assert_eq!(found.distance, 0);
        assert_eq!(found.score(), 0.0);
    }

    #[test]
    fn nearest_block() {
        let references = records(["cat", "cart", "car"]);
        let tests = records(["care"]);
        let blocks = Nearest::new(&references, &tests).collect::<Vec<_>>();
        assert_eq!(blocks.len(), 1);
        let block = &blocks[0];
        assert_eq!(block.test.text(), "care");
        let found = block
            .matches
            .iter()
            .map(|found| (found.distance, found.right.as_bytes()))
            .collect::<Vec<_>>();
        assert_eq!(found, [(1, &b"cart"[..]), (1, &b"car"[..]), (2, &b"cat"[..])]);
    }

    #[test]
    fn nearest_keeps_three_per_test() {
        let references = records(["aaaa", "aaab", "aabb", "abbb", "bbbb"]);
        let tests = records(["bbbb", "aaaa"]);
        let blocks = Nearest::new(&references, &tests).collect::<Vec<_>>();
        assert_eq!(blocks.len(), 2);
        assert_eq!(positions(blocks[0].matches.clone()), [(1, 5), (1, 4), (1, 3)]);
        assert_eq!(positions(blocks[1].matches.clone()), [(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn nearest_without_references() {
        let tests = records(["boba", "fett"]);
        let blocks = Nearest::new(&[], &tests).collect::<Vec<_>>();
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|block| block.matches.is_empty()));
    }

    #[test]
    fn nearest_with_capacity() {
        let references = records(["a", "b", "c", "d"]);
        let tests = records(["a"]);
        let block = Nearest::with_capacity(&references, &tests, 1).next().unwrap();
        assert_eq!(positions(block.matches), [(1, 1)]);
    }

    #[test]
    fn comparisons_fit_in_the_reserved_table() {
        let words = records(["a", "kitten", "sit"]);
        let mut pairs = Pairs::new(&words);
        let reserved = pairs.distance.capacity();
        assert!(reserved >= 8 * 8);
        assert_eq!(pairs.by_ref().count(), 3);
        assert_eq!(pairs.distance.capacity(), reserved);

        let references = records(["sitting", "a"]);
        let tests = records(["kitten", "sit"]);
        let mut nearest = Nearest::new(&references, &tests);
        let reserved = nearest.distance.capacity();
        assert!(reserved >= 9 * 8);
        assert_eq!(nearest.by_ref().count(), 2);
        assert_eq!(nearest.distance.capacity(), reserved);
    }
}

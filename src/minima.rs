use crate::CAPACITY;
use std::{slice, vec};

/// Retains the `capacity` smallest distances seen so far, in ascending order.
///
/// Insertion scans for the first entry with a strictly greater distance, so
/// among equal distances the entry that was inserted first is kept when the
/// set is full. A set with a capacity of 0 retains nothing.
#[derive(Debug, Clone)]
pub struct Minima<T> {
    entries: Vec<(usize, T)>,
    capacity: usize,
}

impl<T> Minima<T> {
    pub const fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    pub fn insert(&mut self, distance: usize, item: T) {
        if self.capacity == 0 {
            return;
        }

        match self
            .entries
            .iter()
            .position(|&(retained, _)| retained > distance)
        {
            Some(index) => {
                self.entries.insert(index, (distance, item));
                self.entries.truncate(self.capacity);
            }
            None if self.entries.len() < self.capacity => self.entries.push((distance, item)),
            None => {}
        }
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn distances(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|&(distance, _)| distance)
    }

    pub fn iter(&self) -> slice::Iter<'_, (usize, T)> {
        self.entries.iter()
    }
}

impl<T> Default for Minima<T> {
    fn default() -> Self {
        Self::new(CAPACITY)
    }
}

impl<T> IntoIterator for Minima<T> {
    type Item = (usize, T);
    type IntoIter = vec::IntoIter<(usize, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Minima<T> {
    type Item = &'a (usize, T);
    type IntoIter = slice::Iter<'a, (usize, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

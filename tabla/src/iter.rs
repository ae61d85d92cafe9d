use std::iter::FusedIterator;

use crate::{Key, Value};

/// Forward-only iterator over the elements of a sequence.
///
/// Created by [`crate::sequence::values`]. It cannot be restarted, and once
/// exhausted every further call returns `None`.
#[derive(Debug)]
pub struct Values<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Values<'a, T> {
    pub(crate) fn new(seq: &'a [T]) -> Self {
        Self { inner: seq.iter() }
    }
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Values<'_, T> {}
impl<T> FusedIterator for Values<'_, T> {}

/// Key/value pairs of a table in sorted key order.
///
/// Created by [`crate::structure::pairs_by_keys`]. All pairs are collected
/// and sorted up front, before the first one is produced.
#[derive(Debug)]
pub struct PairsByKeys {
    pairs: std::vec::IntoIter<(Key, Value)>,
}

impl PairsByKeys {
    pub(crate) fn new(pairs: Vec<(Key, Value)>) -> Self {
        Self {
            pairs: pairs.into_iter(),
        }
    }
}

impl Iterator for PairsByKeys {
    type Item = (Key, Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.pairs.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pairs.size_hint()
    }
}

impl ExactSizeIterator for PairsByKeys {}
impl FusedIterator for PairsByKeys {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_past_end() {
        let items = [1, 2];
        let mut values = Values::new(&items);
        assert_eq!(values.len(), 2);
        assert_eq!(values.next(), Some(&1));
        assert_eq!(values.next(), Some(&2));
        assert_eq!(values.next(), None);
        assert_eq!(values.next(), None);
        assert_eq!(values.next(), None);
    }

    #[test]
    fn test_pairs_by_keys_past_end() {
        let mut pairs = PairsByKeys::new(vec![(Key::from(1), Value::from("a"))]);
        assert_eq!(pairs.next(), Some((Key::from(1), Value::from("a"))));
        assert_eq!(pairs.next(), None);
        assert_eq!(pairs.next(), None);
    }
}

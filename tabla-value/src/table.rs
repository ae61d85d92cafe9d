use std::rc::Rc;

use ahash::HashMap;

use crate::key::Key;
use crate::profile::Profile;
use crate::value::Value;

#[derive(Debug, Clone, Default, PartialEq)]
struct Storage {
    // keys 1..=sequence.len(), never nil
    sequence: Vec<Value>,
    // never holds the key sequence.len() + 1, never holds nil
    hash: HashMap<Key, Value>,
}

impl Storage {
    fn get(&self, key: &Key) -> Option<&Value> {
        if let Some(position) = key.position() {
            if position <= self.sequence.len() {
                return self.sequence.get(position - 1);
            }
        }
        self.hash.get(key)
    }

    fn set(&mut self, key: Key, value: Value) -> Option<Value> {
        if let Some(position) = key.position() {
            let len = self.sequence.len();
            if position <= len {
                if value.is_nil() {
                    return self.cut_border(position);
                }
                return Some(std::mem::replace(&mut self.sequence[position - 1], value));
            }
            if position == len + 1 && !value.is_nil() {
                self.sequence.push(value);
                self.migrate();
                return None;
            }
        }
        if value.is_nil() {
            self.hash.remove(&key)
        } else {
            self.hash.insert(key, value)
        }
    }

    // Removing a value from inside the sequence part ends the sequence there.
    // Everything after the hole moves to the hash part under its own index.
    fn cut_border(&mut self, position: usize) -> Option<Value> {
        let mut tail = self.sequence.split_off(position - 1).into_iter();
        let removed = tail.next();
        if tail.len() > 0 {
            log::debug!(
                "sequence cut at {}, moving {} values to the hash part",
                position,
                tail.len()
            );
        }
        for (offset, value) in tail.enumerate() {
            self.hash.insert(Key::from((position + 1 + offset) as i64), value);
        }
        removed
    }

    // Pull integer keys that continue the sequence out of the hash part.
    fn migrate(&mut self) {
        loop {
            let next = Key::from((self.sequence.len() + 1) as i64);
            match self.hash.remove(&next) {
                Some(value) => self.sequence.push(value),
                None => break,
            }
        }
    }
}

/// An associative table with a sequence part.
///
/// Values stored under the keys `1..=n` without a gap form the sequence part
/// of the table, everything else lives in the hash part. [`Table::len`]
/// counts the sequence part, [`Table::size`] counts every pair.
///
/// Storage is shared between clones and copied on the first write, so a
/// clone never observes mutations made through another clone. All mutating
/// methods take `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct Table {
    storage: Rc<Storage>,
    profile: Option<Rc<Profile>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a table whose sequence part holds the given values.
    ///
    /// A nil value ends the sequence part; the values after it are kept
    /// under their positions in the hash part.
    pub fn from_sequence(values: Vec<Value>) -> Self {
        if values.iter().all(|value| !value.is_nil()) {
            return Self {
                storage: Rc::new(Storage {
                    sequence: values,
                    hash: HashMap::default(),
                }),
                profile: None,
            };
        }
        let mut table = Self::new();
        for (i, value) in values.into_iter().enumerate() {
            table.set(Key::from((i + 1) as i64), value);
        }
        table
    }

    /// Associate this table with a behavior profile.
    pub fn with_profile(mut self, profile: Rc<Profile>) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn profile(&self) -> Option<&Rc<Profile>> {
        self.profile.as_ref()
    }

    pub fn set_profile(&mut self, profile: Option<Rc<Profile>>) {
        self.profile = profile;
    }

    /// The length of the sequence part.
    pub fn len(&self) -> usize {
        self.storage.sequence.len()
    }

    /// The number of key/value pairs, sequence and hash part together.
    pub fn size(&self) -> usize {
        self.storage.sequence.len() + self.storage.hash.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// The sequence part as a slice.
    pub fn sequence(&self) -> &[Value] {
        &self.storage.sequence
    }

    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.storage.get(key)
    }

    pub fn contains_key(&self, key: &Key) -> bool {
        self.get(key).is_some()
    }

    /// Set a key to a value, returning the previous value.
    ///
    /// Setting nil removes the key.
    pub fn set(&mut self, key: Key, value: Value) -> Option<Value> {
        Rc::make_mut(&mut self.storage).set(key, value)
    }

    /// Convenience wrapper around [`Table::set`].
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.set(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        if !self.contains_key(key) {
            return None;
        }
        self.set(key.clone(), Value::Nil)
    }

    /// Append a value to the end of the sequence part. Nil is ignored.
    pub fn push(&mut self, value: impl Into<Value>) {
        let key = Key::from((self.len() + 1) as i64);
        self.set(key, value.into());
    }

    /// Iterate over all pairs: the sequence part in order, then the hash part
    /// in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Key, &Value)> + '_ {
        let sequence = self
            .storage
            .sequence
            .iter()
            .enumerate()
            .map(|(i, value)| (Key::from((i + 1) as i64), value));
        let hash = self.storage.hash.iter().map(|(key, value)| (key.clone(), value));
        sequence.chain(hash)
    }

    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.iter().map(|(_, value)| value)
    }

    /// Check whether two tables share the same storage.
    pub fn ptr_eq(a: &Table, b: &Table) -> bool {
        Rc::ptr_eq(&a.storage, &b.storage)
    }

    pub fn as_ptr(&self) -> *const () {
        Rc::as_ptr(&self.storage).cast()
    }
}

/// Raw structural equality. Profiles and their custom equality are not
/// consulted; use deep comparison for that.
impl PartialEq for Table {
    fn eq(&self, other: &Self) -> bool {
        Table::ptr_eq(self, other) || self.storage == other.storage
    }
}

impl From<Vec<Value>> for Table {
    fn from(values: Vec<Value>) -> Self {
        Self::from_sequence(values)
    }
}

impl FromIterator<(Key, Value)> for Table {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, value) in iter {
            table.set(key, value);
        }
        table
    }
}

impl FromIterator<Value> for Table {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from_sequence(iter.into_iter().collect())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Table {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(values: &[&str]) -> Table {
        values.iter().map(|s| Value::from(*s)).collect()
    }

    #[test]
    fn test_len_counts_sequence_size_counts_all() {
        let mut table = seq(&["a", "b", "c"]);
        table.insert("name", "x");
        table.insert(10, "far");
        assert_eq!(table.len(), 3);
        assert_eq!(table.size(), 5);
    }

    #[test]
    fn test_integral_float_key_addresses_sequence() {
        let table = seq(&["a", "b"]);
        let key = Key::try_from(2.0_f64).unwrap();
        assert_eq!(table.get(&key), Some(&Value::from("b")));
    }

    #[test]
    fn test_set_next_position_migrates() {
        let mut table = Table::new();
        table.insert(3, "c");
        table.insert(2, "b");
        assert_eq!(table.len(), 0);
        table.insert(1, "a");
        assert_eq!(table.sequence(), &[Value::from("a"), "b".into(), "c".into()]);
        assert_eq!(table.size(), 3);
    }

    #[test]
    fn test_nil_inside_sequence_cuts_border() {
        let mut table = seq(&["a", "b", "c", "d"]);
        let removed = table.set(Key::from(2), Value::Nil);
        assert_eq!(removed, Some(Value::from("b")));
        assert_eq!(table.len(), 1);
        assert_eq!(table.size(), 3);
        assert_eq!(table.get(&Key::from(4)), Some(&Value::from("d")));
        // filling the hole restores the sequence
        table.insert(2, "B");
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_from_sequence_with_nil() {
        let table = Table::from_sequence(vec!["a".into(), Value::Nil, "c".into()]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.size(), 2);
        assert_eq!(table.get(&Key::from(3)), Some(&Value::from("c")));
    }

    #[test]
    fn test_remove() {
        let mut table = Table::new();
        table.insert("k", 1);
        assert_eq!(table.remove(&Key::from("k")), Some(Value::from(1)));
        assert_eq!(table.remove(&Key::from("k")), None);
        assert!(table.is_empty());
    }

    #[test]
    fn test_clone_is_copy_on_write() {
        let original = seq(&["a"]);
        let mut copy = original.clone();
        assert!(Table::ptr_eq(&original, &copy));
        copy.push("b");
        assert!(!Table::ptr_eq(&original, &copy));
        assert_eq!(original.len(), 1);
        assert_eq!(copy.len(), 2);
    }

    #[test]
    fn test_iter_sequence_first_in_order() {
        let mut table = seq(&["a", "b"]);
        table.insert("x", 1);
        let keys = table.keys().collect::<Vec<_>>();
        assert_eq!(&keys[..2], &[Key::from(1), Key::from(2)]);
        assert_eq!(keys[2], Key::from("x"));
    }

    #[test]
    fn test_values_follow_iteration_order() {
        let mut table = seq(&["a", "b"]);
        table.insert("x", "c");
        let values = table.values().cloned().collect::<Vec<_>>();
        assert_eq!(values, vec![Value::from("a"), "b".into(), "c".into()]);
    }

    #[test]
    fn test_equality_ignores_profile() {
        let profile = Rc::new(Profile::new("point"));
        let a = seq(&["a"]).with_profile(profile);
        let b = seq(&["a"]);
        assert_eq!(a, b);
    }
}

// Deep comparison, deep copy and other operations over whole tables.

use std::cmp::Ordering;

use crate::iter::PairsByKeys;
use crate::{EqualityFn, Error, Key, Result, Table, Value};

/// Compare two values structurally.
///
/// Values that are not tables compare with `==`. When both are tables and
/// `ignore_equality` is false, a custom equality declared by the profile of
/// the first table (or else of the second) decides. Otherwise every key of
/// `a` must be present in `b` with a deeply equal value, and every key of `b`
/// must be present in `a` likewise. Tables never store nil, so a key mapped
/// to nil is the same as a missing key.
///
/// ```
/// use tabla::{seq, structure::deep_compare};
/// assert!(deep_compare(&seq![1, seq![2]], &seq![1, seq![2]], false));
/// assert!(!deep_compare(&seq![1, 2], &seq![2, 1], false));
/// ```
pub fn deep_compare(a: &Value, b: &Value, ignore_equality: bool) -> bool {
    match (a, b) {
        (Value::Table(a), Value::Table(b)) => deep_compare_tables(a, b, ignore_equality),
        (a, b) => a == b,
    }
}

/// [`deep_compare`] for two tables.
pub fn deep_compare_tables(a: &Table, b: &Table, ignore_equality: bool) -> bool {
    if !ignore_equality {
        if let Some(equality) = custom_equality(a, b) {
            return equality(a, b);
        }
    }
    contains_all(a, b, ignore_equality) && contains_all(b, a, ignore_equality)
}

fn custom_equality<'a>(a: &'a Table, b: &'a Table) -> Option<&'a EqualityFn> {
    a.profile()
        .and_then(|profile| profile.equality())
        .or_else(|| b.profile().and_then(|profile| profile.equality()))
}

// every key of `a` is in `b`, with a deeply equal value
fn contains_all(a: &Table, b: &Table, ignore_equality: bool) -> bool {
    a.iter().all(|(key, value)| match b.get(&key) {
        Some(found) => deep_compare(value, found, ignore_equality),
        None => false,
    })
}

/// Copy a value, recursing into tables.
///
/// The copy of a table shares no storage with the original, at any depth,
/// but is associated with the very same profile.
pub fn deepcopy(value: &Value) -> Value {
    match value {
        Value::Table(table) => Value::Table(deepcopy_table(table)),
        other => other.clone(),
    }
}

/// [`deepcopy`] for a table.
pub fn deepcopy_table(table: &Table) -> Table {
    let mut copy = table
        .iter()
        .map(|(key, value)| (key, deepcopy(value)))
        .collect::<Table>();
    copy.set_profile(table.profile().cloned());
    copy
}

/// The number of key/value pairs in the table.
///
/// Unlike [`Table::len`], which only counts the sequence part, this counts
/// every key.
pub fn size(table: &Table) -> usize {
    table.size()
}

/// Swap keys and values.
///
/// When several keys share a value, only one of them survives; which one
/// depends on iteration order and must not be relied upon. Fails with
/// [`Error::InvalidKey`] if a value cannot be a key.
pub fn invert(table: &Table) -> Result<Table> {
    let mut inverted = Table::new();
    for (key, value) in table.iter() {
        let new_key = Key::try_from(value)?;
        if let Some(dropped) = inverted.set(new_key.clone(), key.to_value()) {
            log::debug!(
                "invert: value {} occurs more than once, dropping key {}",
                new_key,
                dropped
            );
        }
    }
    Ok(inverted)
}

/// Insert `value` under `key`, or combine it with the value already there.
///
/// If `key` is absent, `value` is inserted as is and `None` is returned. If
/// it is present, the entry is replaced by `f(key, value, previous)` and the
/// previous value is returned. The table is mutated in place.
///
/// ```
/// use tabla::{structure::insert_with, table, Key, Value};
/// let mut owners = table! { "shoes" => "Cindy" };
/// let previous = insert_with(
///     |_, new, old| Ok(Value::from(format!("{old} & {new}"))),
///     Key::from("shoes"),
///     Value::from("Sam"),
///     &mut owners,
/// );
/// assert_eq!(previous, Ok(Some(Value::from("Cindy"))));
/// assert_eq!(owners.get(&Key::from("shoes")), Some(&Value::from("Cindy & Sam")));
/// ```
pub fn insert_with<F>(f: F, key: Key, value: Value, table: &mut Table) -> Result<Option<Value>>
where
    F: FnOnce(&Key, Value, Value) -> Result<Value>,
{
    match table.get(&key).cloned() {
        None => {
            table.set(key, value);
            Ok(None)
        }
        Some(previous) => {
            let combined = f(&key, value, previous.clone())?;
            table.set(key, combined);
            Ok(Some(previous))
        }
    }
}

/// Apply `f` to the values until it returns something truthy, and return
/// that key together with the result.
///
/// `None` means no value matched. The order in which values are visited is
/// the table's iteration order: the sequence part first, then the hash part
/// in unspecified order.
pub fn find_with<F>(mut f: F, table: &Table) -> Result<Option<(Key, Value)>>
where
    F: FnMut(&Value) -> Result<Value>,
{
    for (key, value) in table.iter() {
        let result = f(value)?;
        if result.is_truthy() {
            return Ok(Some((key, result)));
        }
    }
    Ok(None)
}

/// Iterate over the pairs of a table with its keys in natural order.
///
/// Natural order only exists among numbers or among strings, so a table
/// mixing kinds of keys (or with more than one boolean key) fails with
/// [`Error::Incomparable`].
pub fn pairs_by_keys(table: &Table) -> Result<PairsByKeys> {
    let pairs = collect_pairs(table);
    if let Some(((first, _), rest)) = pairs.split_first() {
        if rest.iter().any(|(key, _)| first.compare(key).is_none()) {
            return Err(Error::Incomparable);
        }
    }
    Ok(sorted(pairs, |a, b| a.compare(b).unwrap_or(Ordering::Equal)))
}

/// Iterate over the pairs of a table with its keys ordered by `compare`.
pub fn pairs_by_keys_with<F>(table: &Table, compare: F) -> PairsByKeys
where
    F: FnMut(&Key, &Key) -> Ordering,
{
    sorted(collect_pairs(table), compare)
}

fn collect_pairs(table: &Table) -> Vec<(Key, Value)> {
    let pairs = table
        .iter()
        .map(|(key, value)| (key, value.clone()))
        .collect::<Vec<_>>();
    log::trace!("materialized {} pairs for sorting", pairs.len());
    pairs
}

fn sorted<F>(mut pairs: Vec<(Key, Value)>, mut compare: F) -> PairsByKeys
where
    F: FnMut(&Key, &Key) -> Ordering,
{
    pairs.sort_by(|(a, _), (b, _)| compare(a, b));
    PairsByKeys::new(pairs)
}

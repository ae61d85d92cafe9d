// Operations over ordered sequences.
//
// Sequences come in as slices and go out as fresh vectors; the input is
// never touched. The one exception is `merge`, which takes its target by
// `&mut` and says so in its signature.
//
// Positions are 1-based, as are all the position arguments below.

use std::cmp::Ordering;

use crate::iter::Values;
use crate::{Error, Result, Value};

/// Apply `f` to every element, preserving order and length.
///
/// The first error returned by `f` is propagated and no result is produced.
///
/// ```
/// use tabla::{sequence, values, Value};
/// let doubled = sequence::map(|v: &Value| Ok(v.as_f64().unwrap_or(0.0) * 2.0), &values![1, 2]);
/// assert_eq!(doubled.unwrap(), vec![2.0, 4.0]);
/// ```
pub fn map<T, U, F>(f: F, seq: &[T]) -> Result<Vec<U>>
where
    F: FnMut(&T) -> Result<U>,
{
    seq.iter().map(f).collect()
}

/// Left fold.
///
/// Without `init` the first element is the seed and folding starts at the
/// second one. An empty sequence without `init` has no result (`None`).
pub fn reduce<T, F>(mut f: F, seq: &[T], init: Option<T>) -> Result<Option<T>>
where
    T: Clone,
    F: FnMut(T, &T) -> Result<T>,
{
    let mut items = seq.iter();
    let mut accumulator = match init {
        Some(init) => init,
        None => match items.next() {
            Some(first) => first.clone(),
            None => return Ok(None),
        },
    };
    for item in items {
        accumulator = f(accumulator, item)?;
    }
    Ok(Some(accumulator))
}

/// Concatenate strings and numbers, separated by `separator`.
///
/// Elements of any other kind are an [`Error::InvalidArgument`].
pub fn join(seq: &[Value], separator: &str) -> Result<String> {
    let pieces = seq
        .iter()
        .map(Value::to_coerced_string)
        .collect::<Result<Vec<_>>>()?;
    Ok(pieces.join(separator))
}

pub fn reverse<T: Clone>(seq: &[T]) -> Vec<T> {
    seq.iter().rev().cloned().collect()
}

/// True if `predicate` holds for any element. Stops at the first match.
pub fn any<T, F>(mut predicate: F, seq: &[T]) -> Result<bool>
where
    F: FnMut(&T) -> Result<bool>,
{
    for item in seq {
        if predicate(item)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// True if `predicate` holds for every element. Stops at the first miss.
pub fn all<T, F>(mut predicate: F, seq: &[T]) -> Result<bool>
where
    F: FnMut(&T) -> Result<bool>,
{
    for item in seq {
        if !predicate(item)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// The largest number in the sequence.
///
/// Elements that are not numbers (and NaN) are skipped. `None` if there are
/// no numbers at all. On ties the first occurrence wins.
pub fn maximum(seq: &[Value]) -> Option<Value> {
    extreme(seq, Ordering::Greater)
}

/// The smallest number in the sequence. See [`maximum`].
pub fn minimum(seq: &[Value]) -> Option<Value> {
    extreme(seq, Ordering::Less)
}

fn extreme(seq: &[Value], wanted: Ordering) -> Option<Value> {
    let mut best: Option<&Value> = None;
    let candidates = seq
        .iter()
        .filter(|value| value.as_f64().is_some_and(|f| !f.is_nan()));
    for candidate in candidates {
        match best {
            Some(current) if candidate.compare(current) != Some(wanted) => {}
            _ => best = Some(candidate),
        }
    }
    best.cloned()
}

pub fn filter<T, F>(mut predicate: F, seq: &[T]) -> Result<Vec<T>>
where
    T: Clone,
    F: FnMut(&T) -> Result<bool>,
{
    let mut result = Vec::new();
    for item in seq {
        if predicate(item)? {
            result.push(item.clone());
        }
    }
    Ok(result)
}

// Negative positions resolve to `len + 1 - position`. Note that this is not
// counting from the end: -1 lands past the end of the sequence.
fn resolve_negative(position: i64, len: i64) -> i64 {
    if position < 0 {
        (len + 1).saturating_sub(position)
    } else {
        position
    }
}

/// The elements from position `first` up to and including `last`.
///
/// `last` defaults to the end of the sequence. A negative position `p`
/// resolves to `len + 1 - p`. After that `first` is raised to 1 and `last`
/// is lowered to `len`; if `first` ends up past `last` the result is empty.
///
/// ```
/// use tabla::{sequence, values};
/// let letters = values!["a", "b", "c", "d", "e", "f"];
/// assert_eq!(sequence::slice(&letters, 1, Some(3)), values!["a", "b", "c"]);
/// assert_eq!(sequence::slice(&letters, 5, None), values!["e", "f"]);
/// ```
pub fn slice<T: Clone>(seq: &[T], first: i64, last: Option<i64>) -> Vec<T> {
    let len = seq.len() as i64;
    let first = resolve_negative(first, len).max(1);
    let last = resolve_negative(last.unwrap_or(len), len).min(len);
    if first > last {
        return Vec::new();
    }
    seq[(first - 1) as usize..last as usize].to_vec()
}

/// Remove `delete_count` elements starting at `start` and put `inserts` in
/// their place.
///
/// Returns the resulting sequence and the removed elements, in that order.
/// Without a `delete_count` everything from `start` to the end is removed.
/// `start` is clamped to `1..=len + 1` and the count to the elements
/// available. A negative `delete_count` is an [`Error::InvalidArgument`].
///
/// ```
/// use tabla::{sequence, values};
/// let letters = values!["a", "b", "c", "d", "e", "f"];
/// let (remainder, removed) =
///     sequence::splice(&letters, 3, Some(2), &values!["one", "two"]).unwrap();
/// assert_eq!(remainder, values!["a", "b", "one", "two", "e", "f"]);
/// assert_eq!(removed, values!["c", "d"]);
/// ```
pub fn splice<T: Clone>(
    seq: &[T],
    start: i64,
    delete_count: Option<i64>,
    inserts: &[T],
) -> Result<(Vec<T>, Vec<T>)> {
    let len = seq.len();
    let start = (start.clamp(1, len as i64 + 1) - 1) as usize;
    let available = len - start;
    let count = match delete_count {
        None => available,
        Some(count) => usize::try_from(count)
            .map_err(|_| Error::InvalidArgument)?
            .min(available),
    };
    let end = start + count;

    let mut remainder = Vec::with_capacity(len - count + inserts.len());
    remainder.extend_from_slice(&seq[..start]);
    remainder.extend_from_slice(inserts);
    remainder.extend_from_slice(&seq[end..]);
    let removed = seq[start..end].to_vec();
    Ok((remainder, removed))
}

/// Append all of `source` to `target`, in place.
///
/// This mutates `target` and hands the same reference back, so calls can be
/// chained.
pub fn merge<'a, T: Clone>(target: &'a mut Vec<T>, source: &[T]) -> &'a mut Vec<T> {
    target.extend_from_slice(source);
    target
}

/// Concatenate the arguments, flattening exactly one level: a table argument
/// contributes the elements of its sequence part, any other argument
/// contributes itself.
///
/// With exactly one argument, that argument is unwrapped and its elements
/// are used as the arguments, so `concat(&[a, b, c])` and
/// `concat(&[seq![a, b, c]])` are the same. The decision is made on the
/// argument count alone; a single argument that is not a table cannot be
/// unwrapped and is an [`Error::InvalidArgument`].
pub fn concat(args: &[Value]) -> Result<Vec<Value>> {
    let args = match args {
        [Value::Table(table)] => table.sequence(),
        [other] => {
            log::warn!(
                "concat called with a single {} argument, which cannot be unwrapped",
                other.type_name()
            );
            return Err(Error::InvalidArgument);
        }
        args => args,
    };
    let mut result = Vec::with_capacity(args.len());
    for arg in args {
        match arg {
            Value::Table(table) => result.extend_from_slice(table.sequence()),
            other => result.push(other.clone()),
        }
    }
    Ok(result)
}

/// Flatten arbitrarily deep nesting, depth first and left to right.
///
/// ```
/// use tabla::{sequence, seq, values};
/// let nested = values![seq![1, 2], 3, seq![4, seq![5, 6]]];
/// assert_eq!(sequence::flatten(&nested), values![1, 2, 3, 4, 5, 6]);
/// ```
pub fn flatten(seq: &[Value]) -> Vec<Value> {
    let mut result = Vec::with_capacity(seq.len());
    flatten_into(seq, &mut result);
    result
}

fn flatten_into(seq: &[Value], result: &mut Vec<Value>) {
    for value in seq {
        match value {
            Value::Table(table) => flatten_into(table.sequence(), result),
            other => result.push(other.clone()),
        }
    }
}

/// A forward-only iterator over the elements.
///
/// Once exhausted it keeps returning `None`.
pub fn values<T>(seq: &[T]) -> Values<'_, T> {
    Values::new(seq)
}

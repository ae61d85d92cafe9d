// String helpers. Results that are sequences come back as values so they can
// be fed straight into the sequence operations.

use crate::Value;

/// Split `s` on every occurrence of `separator`.
///
/// Empty pieces are kept. An empty separator splits into characters.
///
/// ```
/// use tabla::{string, values};
/// assert_eq!(string::split("a,b,,c", ","), values!["a", "b", "", "c"]);
/// assert_eq!(string::split("abc", ""), values!["a", "b", "c"]);
/// ```
pub fn split(s: &str, separator: &str) -> Vec<Value> {
    if separator.is_empty() {
        return s
            .chars()
            .map(|c| Value::from(c.to_string()))
            .collect();
    }
    s.split(separator).map(Value::from).collect()
}

/// Strip leading and trailing whitespace.
pub fn trim(s: &str) -> &str {
    s.trim()
}

pub fn starts_with(s: &str, prefix: &str) -> bool {
    s.starts_with(prefix)
}

pub fn ends_with(s: &str, suffix: &str) -> bool {
    s.ends_with(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{sequence, values};

    #[test]
    fn test_split_join_round_trip() {
        let pieces = split("a,b,c,d,e,f", ",");
        assert_eq!(pieces.len(), 6);
        assert_eq!(sequence::join(&pieces, ",").unwrap(), "a,b,c,d,e,f");
    }

    #[test]
    fn test_split_without_separator_match() {
        assert_eq!(split("abc", ";"), values!["abc"]);
        assert_eq!(split("", ","), values![""]);
        assert!(split("", "").is_empty());
    }

    #[test]
    fn test_trim() {
        assert_eq!(trim("  padded\t\n"), "padded");
        assert_eq!(trim(""), "");
    }

    #[test]
    fn test_affixes() {
        assert!(starts_with("tabla", "tab"));
        assert!(!starts_with("tab", "tabla"));
        assert!(ends_with("tabla", "bla"));
        assert!(ends_with("tabla", ""));
    }
}

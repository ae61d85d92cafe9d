/// Build a `Vec<Value>` from anything that converts into a value.
///
/// ```
/// use tabla_value::{values, Value};
/// let v = values!["a", 1, 2.5, true];
/// assert_eq!(v[1], Value::Integer(1));
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($value)),+]
    };
}

/// Build a sequence table value. Nests, so it can describe nested sequences.
///
/// ```
/// use tabla_value::seq;
/// let nested = seq![1, seq![2, 3]];
/// assert_eq!(nested.as_table().unwrap().len(), 2);
/// ```
#[macro_export]
macro_rules! seq {
    ($($value:expr),* $(,)?) => {
        $crate::Value::from($crate::values![$($value),*])
    };
}

/// Build a table from `key => value` pairs.
///
/// ```
/// use tabla_value::{table, Key, Value};
/// let t = table! { "shoes" => "Cindy", 1 => "first" };
/// assert_eq!(t.get(&Key::from("shoes")), Some(&Value::from("Cindy")));
/// assert_eq!(t.len(), 1);
/// ```
#[macro_export]
macro_rules! table {
    () => {
        $crate::Table::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut table = $crate::Table::new();
        $(table.insert($key, $value);)+
        table
    }};
}

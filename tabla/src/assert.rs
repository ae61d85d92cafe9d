/// Assert that two values are deeply equal, using
/// [`deep_compare`](crate::structure::deep_compare).
///
/// On failure both values are shown with their debug representation.
///
/// ```
/// use tabla::{assert_deep_eq, seq, structure::deepcopy};
/// let nested = seq!["a", seq!["b"]];
/// assert_deep_eq!(nested, deepcopy(&nested));
/// ```
#[macro_export]
macro_rules! assert_deep_eq {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                if !$crate::structure::deep_compare(left, right, false) {
                    panic!(
                        "assertion `deep_compare(left, right)` failed\n  left: {:?}\n right: {:?}",
                        left, right
                    );
                }
            }
        }
    };
}

use std::fmt;
use std::rc::Rc;

use crate::table::Table;

/// Custom equality between two tables.
pub type EqualityFn = Rc<dyn Fn(&Table, &Table) -> bool>;

/// A behavior profile that tables can be associated with.
///
/// Tables hold their profile by `Rc`; copies of a table refer to the very
/// same profile. A profile may declare a custom equality capability, which
/// deep comparison delegates to unless told to ignore it.
#[derive(Clone)]
pub struct Profile {
    name: String,
    equality: Option<EqualityFn>,
}

impl Profile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            equality: None,
        }
    }

    /// Declare a custom equality capability.
    pub fn with_equality(mut self, equality: impl Fn(&Table, &Table) -> bool + 'static) -> Self {
        self.equality = Some(Rc::new(equality));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn equality(&self) -> Option<&EqualityFn> {
        self.equality.as_ref()
    }

    pub fn has_equality(&self) -> bool {
        self.equality.is_some()
    }
}

impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("name", &self.name)
            .field("equality", &self.equality.is_some())
            .finish()
    }
}

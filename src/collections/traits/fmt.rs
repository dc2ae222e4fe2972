//! Formatting and comparison that only rely on iteration, so that every collection renders and
//! compares the same way regardless of its internal layout.

use std::fmt::{self, Display, Formatter};

/// Writes `entries` in the form `[k1=v1, k2=v2]`.
pub fn fmt_dictionary<'a, K, V, I>(entries: I, f: &mut Formatter<'_>) -> fmt::Result
where
    K: Display + 'a,
    V: Display + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    write!(f, "[")?;
    for (i, (key, value)) in entries.into_iter().enumerate() {
        if i != 0 {
            write!(f, ", ")?;
        }
        write!(f, "{key}={value}")?;
    }
    write!(f, "]")
}

/// Writes `items` in the form `[a, b, c]`.
pub fn fmt_list<'a, T, I>(items: I, f: &mut Formatter<'_>) -> fmt::Result
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    write!(f, "[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i != 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "]")
}

/// Compares two dictionaries by content. They are equal if they have the same number of entries
/// and every key in `a` maps to an equal value in `b`. Entry order is ignored.
pub fn dictionaries_eq<K, V, A, B>(a: &A, b: &B) -> bool
where
    K: Eq,
    V: PartialEq,
    A: super::Dictionary<K, V>,
    B: super::Dictionary<K, V>,
{
    if a.len() != b.len() { return false; }

    for (key, value) in a.iter() {
        match b.try_get(key) {
            Ok(other) if other == value => {},
            _ => return false,
        }
    }
    true
}

//! Interned string identifier.

use std::fmt;

/// Interned string identifier.
///
/// A 32-bit index into a [`StringInterner`](crate::StringInterner). Two names
/// from the same interner are equal iff their strings are equal.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Create from a raw index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }

    /// Index into the interner's string table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_index() {
        assert_eq!(Name::from_raw(3).index(), 3);
        assert_eq!(Name::from_raw(3), Name::from_raw(3));
    }

    #[test]
    fn test_name_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Name::from_raw(1));
        set.insert(Name::from_raw(1));
        set.insert(Name::from_raw(2));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_name_ord() {
        assert!(Name::from_raw(1) < Name::from_raw(2));
    }
}

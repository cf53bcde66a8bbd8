//! String interning.
//!
//! Identifiers, operator names, string literal contents and doc-strings are
//! stored once and referred to by [`Name`]. Strings are leaked, so lookups
//! hand out `&'static str` without holding the lock.
//!
//! The interner is `Sync`: files lexed on separate threads may share one.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::Name;

/// Error when the interner runs out of 32-bit indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternError {
    pub count: usize,
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "string interner overflow after {} strings", self.count)
    }
}

impl std::error::Error for InternError {}

#[derive(Default)]
struct Inner {
    map: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

/// Thread-safe string interner.
pub struct StringInterner {
    inner: RwLock<Inner>,
    total: AtomicUsize,
}

impl StringInterner {
    pub fn new() -> Self {
        let interner = StringInterner {
            inner: RwLock::new(Inner::default()),
            total: AtomicUsize::new(0),
        };
        interner.intern("");
        interner.pre_intern_keywords();
        interner
    }

    /// Intern `s`, failing only when more than `u32::MAX` strings exist.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        if let Some(&index) = self.inner.read().map.get(s) {
            return Ok(Name::from_raw(index));
        }

        let mut guard = self.inner.write();
        // Another thread may have won the race for the write lock.
        if let Some(&index) = guard.map.get(s) {
            return Ok(Name::from_raw(index));
        }

        let index = u32::try_from(guard.strings.len()).map_err(|_| InternError {
            count: guard.strings.len(),
        })?;
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, index);
        self.total.fetch_add(1, Ordering::Relaxed);
        Ok(Name::from_raw(index))
    }

    /// Intern `s`.
    ///
    /// # Panics
    /// Panics after `u32::MAX` distinct strings. Use [`try_intern`](Self::try_intern)
    /// to handle that case.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// The string behind `name`.
    ///
    /// Names from a different interner yield `""` when out of range.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.inner
            .read()
            .strings
            .get(name.index())
            .copied()
            .unwrap_or("")
    }

    /// Number of distinct strings, including the empty string.
    pub fn len(&self) -> usize {
        self.total.load(Ordering::Relaxed)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn pre_intern_keywords(&self) {
        const KEYWORDS: &[&str] = &[
            "using",
            "inductive",
            "public",
            "sealed",
            "private",
            "internal",
            "if",
            "then",
            "else",
            "match",
            "return",
            "is",
            "let",
            "U",
        ];
        for kw in KEYWORDS {
            self.intern(kw);
        }
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_string_is_name_empty() {
        let interner = StringInterner::new();
        assert_eq!(interner.intern(""), Name::EMPTY);
        assert_eq!(interner.lookup(Name::EMPTY), "");
    }

    #[test]
    fn interning_is_idempotent() {
        let interner = StringInterner::new();
        let a = interner.intern("succ$");
        let b = interner.intern("succ$");
        let c = interner.intern("zero$");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(interner.lookup(c), "zero$");
    }

    #[test]
    fn keywords_are_pre_interned() {
        let interner = StringInterner::new();
        let before = interner.len();
        interner.intern("inductive");
        assert_eq!(interner.len(), before);
    }

    #[test]
    fn shared_across_threads() {
        let interner = StringInterner::new();
        let names: Vec<Name> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| interner.intern("Nat")))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap_or(Name::EMPTY))
                .collect()
        });
        assert!(names.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(interner.lookup(names[0]), "Nat");
    }
}

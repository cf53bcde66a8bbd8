//! Parse context flags.
//!
//! The same tokens mean different things in value and type position, and
//! a few positions forbid constructs that would otherwise be ambiguous.

/// Context flags for parsing; combine with [`with`](Self::with).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParseContext(u16);

impl ParseContext {
    pub const NONE: Self = Self(0);

    /// Type position: applications are `TypeApp` and take no trailing block.
    pub const IN_TYPE: Self = Self(1 << 0);

    /// A `{` after an application is not a trailing block.
    /// Set in `match` scrutinees and `if` conditions.
    pub const NO_BLOCK_CALL: Self = Self(1 << 1);

    /// `is` ends the expression instead of annotating it.
    /// Set on the type operand of `is` so chains stay left-associated.
    pub const NO_ANNOTATION: Self = Self(1 << 2);

    #[inline]
    pub const fn has(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    #[inline]
    #[must_use]
    pub const fn with(self, flag: Self) -> Self {
        Self(self.0 | flag.0)
    }

    #[inline]
    pub const fn in_type(self) -> bool {
        self.has(Self::IN_TYPE)
    }

    #[inline]
    pub const fn allows_block_call(self) -> bool {
        !self.has(Self::IN_TYPE) && !self.has(Self::NO_BLOCK_CALL)
    }

    #[inline]
    pub const fn allows_annotation(self) -> bool {
        !self.has(Self::NO_ANNOTATION)
    }

    /// Context for the inside of a bracket group: keeps the mode, drops the
    /// position restrictions.
    #[inline]
    #[must_use]
    pub const fn nested(self) -> Self {
        Self(self.0 & Self::IN_TYPE.0)
    }
}

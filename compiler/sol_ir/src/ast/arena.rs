//! Flat storage for expressions and patterns.

use std::fmt;

use super::{Expr, Pattern};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Index of an [`Expr`] in an [`ExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// Index of a [`Pattern`] in an [`ExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct PatternId(u32);

impl PatternId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PatternId({})", self.0)
    }
}

/// Owns every expression and pattern of one parsed module.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExprArena {
    exprs: Vec<Expr>,
    patterns: Vec<Pattern>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `expr`.
    ///
    /// # Panics
    /// Panics past `u32::MAX` expressions, which the `u32` span limit on
    /// source size already rules out.
    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = u32::try_from(self.exprs.len())
            .unwrap_or_else(|_| panic!("expression arena overflow"));
        self.exprs.push(expr);
        ExprId(id)
    }

    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn get_expr_mut(&mut self, id: ExprId) -> &mut Expr {
        &mut self.exprs[id.index()]
    }

    /// Store `pattern`.
    ///
    /// # Panics
    /// Panics past `u32::MAX` patterns.
    #[inline]
    pub fn alloc_pattern(&mut self, pattern: Pattern) -> PatternId {
        let id = u32::try_from(self.patterns.len())
            .unwrap_or_else(|_| panic!("pattern arena overflow"));
        self.patterns.push(pattern);
        PatternId(id)
    }

    #[inline]
    pub fn get_pattern(&self, id: PatternId) -> &Pattern {
        &self.patterns[id.index()]
    }

    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ExprKind, Literal, PatternKind};
    use crate::token::IntLit;
    use crate::Span;
    use pretty_assertions::assert_eq;

    #[test]
    fn ids_are_sequential_per_kind() {
        let mut arena = ExprArena::new();
        let a = arena.alloc_expr(Expr {
            kind: ExprKind::Universe,
            span: Span::new(0, 1),
        });
        let p = arena.alloc_pattern(Pattern {
            kind: PatternKind::Rest,
            span: Span::new(2, 4),
        });
        let b = arena.alloc_expr(Expr {
            kind: ExprKind::Literal(Literal::Int(IntLit::decimal(3))),
            span: Span::new(5, 6),
        });
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(p.index(), 0);
        assert_eq!(arena.expr_count(), 2);
        assert_eq!(arena.pattern_count(), 1);
        assert_eq!(arena.get_pattern(p).kind, PatternKind::Rest);
    }

    #[test]
    fn get_expr_mut_retags_in_place() {
        let mut arena = ExprArena::new();
        let id = arena.alloc_expr(Expr {
            kind: ExprKind::Universe,
            span: Span::DUMMY,
        });
        arena.get_expr_mut(id).kind = ExprKind::Return(None);
        assert_eq!(arena.get_expr(id).kind, ExprKind::Return(None));
    }
}

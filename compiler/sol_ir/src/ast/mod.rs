//! Syntax tree for sol modules.
//!
//! Expressions and patterns live in an [`ExprArena`] and are referenced by
//! [`ExprId`] / [`PatternId`]. Children are always allocated before their
//! parent, so ids only ever point backwards and the tree is acyclic.
//!
//! Declarations own their nodes directly; a [`Module`] plus its arena is
//! everything a consumer needs.

mod arena;

pub use arena::{ExprArena, ExprId, PatternId};

use smallvec::SmallVec;

use crate::token::{FloatLit, IntLit};
use crate::{Name, Span};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether an identifier was written as a plain name or with a backtick.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IdentKind {
    Simple,
    /// `` `++ `` style operator name.
    Symbol,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Identifier {
    pub name: Name,
    pub kind: IdentKind,
    pub span: Span,
}

impl Identifier {
    pub const fn simple(name: Name, span: Span) -> Self {
        Identifier {
            name,
            kind: IdentKind::Simple,
            span,
        }
    }

    pub const fn symbol(name: Name, span: Span) -> Self {
        Identifier {
            name,
            kind: IdentKind::Symbol,
            span,
        }
    }
}

/// Dotted name: `Nat`, `Data.Nat.Succ`. Never empty.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Path {
    segments: SmallVec<[Identifier; 2]>,
    pub span: Span,
}

impl Path {
    pub fn single(ident: Identifier) -> Self {
        let mut segments = SmallVec::new();
        segments.push(ident);
        Path {
            segments,
            span: ident.span,
        }
    }

    pub fn new(first: Identifier, rest: impl IntoIterator<Item = Identifier>) -> Self {
        let mut path = Path::single(first);
        for ident in rest {
            path.push(ident);
        }
        path
    }

    pub fn push(&mut self, ident: Identifier) {
        self.span = self.span.merge(ident.span);
        self.segments.push(ident);
    }

    pub fn segments(&self) -> &[Identifier] {
        &self.segments
    }

    pub fn first(&self) -> Identifier {
        self.segments[0]
    }

    pub fn last(&self) -> Identifier {
        self.segments[self.segments.len() - 1]
    }

    pub fn is_single(&self) -> bool {
        self.segments.len() == 1
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    Int(IntLit),
    Float(FloatLit),
    String(Name),
    Char(char),
}

// Patterns

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pattern {
    pub kind: PatternKind,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PatternKind {
    /// `Cons x xs`; a bare path has no arguments.
    Constructor { path: Path, args: Vec<PatternId> },
    /// `( pattern )`
    Group(PatternId),
    /// `..`
    Rest,
    Literal(Literal),
}

// Expressions

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

/// Where an `if` was parsed; only statements may omit `else`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IfPosition {
    Expr,
    Stmt,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExprKind {
    Literal(Literal),
    Path(Path),
    /// `^name`
    FreeVar(Identifier),
    /// `U`
    Universe,
    /// `(e)`: one element, no trailing comma.
    Group(ExprId),
    /// `()`, `(a,)`, `(a, b)`.
    Tuple {
        items: Vec<ExprId>,
        trailing_comma: bool,
    },
    Array(Vec<ExprId>),
    /// `|pat+| body`
    Lambda { params: Vec<PatternId>, body: ExprId },
    /// Value-position application, optionally with a trailing block.
    App {
        callee: ExprId,
        args: Vec<ExprId>,
        block: Option<Block>,
    },
    /// Type-position application.
    TypeApp { callee: ExprId, args: Vec<ExprId> },
    Binary {
        lhs: ExprId,
        op: Identifier,
        rhs: ExprId,
    },
    /// `value is ty`
    Ann { value: ExprId, ty: ExprId },
    Pi { params: ParamSet, result: ExprId },
    Sigma { params: ParamSet, result: ExprId },
    Match {
        scrutinee: ExprId,
        arms: Vec<MatchArm>,
    },
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: Option<ExprId>,
        position: IfPosition,
    },
    Return(Option<ExprId>),
    /// Braced body of a match arm or an `if` branch.
    Block(Block),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchArm {
    pub pattern: PatternId,
    pub body: ExprId,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Stmt {
    Let {
        pattern: PatternId,
        ty: Option<ExprId>,
        value: ExprId,
        span: Span,
    },
    Expr(ExprId),
}

// Parameters

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Parameter {
    pub kind: ParamKind,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParamKind {
    /// `x : T`, or just `T` when `binding` is `None`.
    Typed {
        binding: Option<PatternId>,
        ty: ExprId,
    },
    /// `'a`
    Forall(Identifier),
    /// A Sigma binder written as a bare pattern; its type is left to inference.
    Untyped(PatternId),
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParamSetKind {
    /// `( … )`
    Explicit,
    /// `{ … }`
    Implicit,
    /// `[ … ]` before `=>`, or after a declared name
    Sigma,
    /// No binder written: a single unnamed parameter.
    Domain,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParamSet {
    pub kind: ParamSetKind,
    pub params: Vec<Parameter>,
    pub span: Span,
}

// Declarations

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Visibility {
    Public,
    Sealed,
    Private,
    Internal,
}

/// `@path` or `@path(args…)`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Attribute {
    pub path: Path,
    pub args: Vec<ExprId>,
    pub span: Span,
}

/// Doc-strings and attributes written before a declaration or constructor.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Attributes {
    pub docs: Vec<Name>,
    pub attributes: Vec<Attribute>,
}

impl Attributes {
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty() && self.attributes.is_empty()
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConstructorKind {
    /// `Succ : Nat -> Nat`
    Signature { ty: ExprId },
    /// `Succ(Nat)`, or a bare `Zero` with no fields.
    Function { fields: Vec<ExprId> },
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Constructor {
    pub attrs: Attributes,
    pub name: Identifier,
    pub kind: ConstructorKind,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DeclKind {
    /// `#name args…`
    Command { name: Path, args: Vec<ExprId> },
    Using { path: Path },
    Inductive {
        name: Path,
        params: Vec<ParamSet>,
        ty: Option<ExprId>,
        constructors: Vec<Constructor>,
    },
    Signature {
        name: Path,
        params: Vec<ParamSet>,
        ty: Option<ExprId>,
        body: Option<Block>,
    },
    /// One equation of a possibly multi-clause definition.
    Clause {
        name: Path,
        patterns: Vec<PatternId>,
        value: Option<ExprId>,
    },
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Decl {
    pub attrs: Attributes,
    pub visibility: Option<Visibility>,
    pub kind: DeclKind,
    pub span: Span,
}

impl Decl {
    /// The declared name; `None` for `using`.
    pub fn name(&self) -> Option<&Path> {
        match &self.kind {
            DeclKind::Command { name, .. }
            | DeclKind::Inductive { name, .. }
            | DeclKind::Signature { name, .. }
            | DeclKind::Clause { name, .. } => Some(name),
            DeclKind::Using { .. } => None,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Module {
    /// Text of the `#!` line, without the `#!`.
    pub hash_bang: Option<Name>,
    pub decls: Vec<Decl>,
}

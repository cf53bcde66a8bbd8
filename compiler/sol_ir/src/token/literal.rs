//! Literal payloads shared by tokens and AST literals.

use std::fmt;

/// Type suffix fixing a numeric literal's intended type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumericSuffix {
    U1,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    I128,
    U128,
    F32,
    F64,
    /// `n`: natural number.
    Nat,
}

impl NumericSuffix {
    pub const ALL: [NumericSuffix; 14] = [
        NumericSuffix::U1,
        NumericSuffix::I8,
        NumericSuffix::U8,
        NumericSuffix::I16,
        NumericSuffix::U16,
        NumericSuffix::I32,
        NumericSuffix::U32,
        NumericSuffix::I64,
        NumericSuffix::U64,
        NumericSuffix::I128,
        NumericSuffix::U128,
        NumericSuffix::F32,
        NumericSuffix::F64,
        NumericSuffix::Nat,
    ];

    /// Parse the suffix text exactly as written after the mantissa.
    pub fn from_suffix(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == text)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            NumericSuffix::U1 => "u1",
            NumericSuffix::I8 => "i8",
            NumericSuffix::U8 => "u8",
            NumericSuffix::I16 => "i16",
            NumericSuffix::U16 => "u16",
            NumericSuffix::I32 => "i32",
            NumericSuffix::U32 => "u32",
            NumericSuffix::I64 => "i64",
            NumericSuffix::U64 => "u64",
            NumericSuffix::I128 => "i128",
            NumericSuffix::U128 => "u128",
            NumericSuffix::F32 => "f32",
            NumericSuffix::F64 => "f64",
            NumericSuffix::Nat => "n",
        }
    }

    pub const fn is_float(self) -> bool {
        matches!(self, NumericSuffix::F32 | NumericSuffix::F64)
    }

    /// Width in bits, or `None` for unbounded naturals.
    pub const fn bit_width(self) -> Option<u32> {
        match self {
            NumericSuffix::U1 => Some(1),
            NumericSuffix::I8 | NumericSuffix::U8 => Some(8),
            NumericSuffix::I16 | NumericSuffix::U16 => Some(16),
            NumericSuffix::I32 | NumericSuffix::U32 | NumericSuffix::F32 => Some(32),
            NumericSuffix::I64 | NumericSuffix::U64 | NumericSuffix::F64 => Some(64),
            NumericSuffix::I128 | NumericSuffix::U128 => Some(128),
            NumericSuffix::Nat => None,
        }
    }
}

impl fmt::Display for NumericSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base an integer literal was written in.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Radix {
    Binary,
    Octal,
    #[default]
    Decimal,
    Hex,
}

impl Radix {
    pub const fn value(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }

    pub const fn prefix(self) -> &'static str {
        match self {
            Radix::Binary => "0b",
            Radix::Octal => "0o",
            Radix::Decimal => "",
            Radix::Hex => "0x",
        }
    }
}

/// Integer literal. The value is unsigned; negation is an ordinary operator.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntLit {
    pub value: u128,
    pub radix: Radix,
    pub suffix: Option<NumericSuffix>,
}

impl IntLit {
    pub const fn decimal(value: u128) -> Self {
        IntLit {
            value,
            radix: Radix::Decimal,
            suffix: None,
        }
    }

    #[must_use]
    pub const fn with_suffix(self, suffix: NumericSuffix) -> Self {
        IntLit {
            suffix: Some(suffix),
            ..self
        }
    }
}

impl fmt::Display for IntLit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = self.radix.prefix();
        match self.radix {
            Radix::Binary => write!(f, "{prefix}{:b}", self.value)?,
            Radix::Octal => write!(f, "{prefix}{:o}", self.value)?,
            Radix::Decimal => write!(f, "{}", self.value)?,
            Radix::Hex => write!(f, "{prefix}{:x}", self.value)?,
        }
        if let Some(suffix) = self.suffix {
            write!(f, "{suffix}")?;
        }
        Ok(())
    }
}

/// Float literal, stored as bits so tokens stay `Eq + Hash`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloatLit {
    pub bits: u64,
    pub suffix: Option<NumericSuffix>,
}

impl FloatLit {
    pub fn new(value: f64, suffix: Option<NumericSuffix>) -> Self {
        FloatLit {
            bits: value.to_bits(),
            suffix,
        }
    }

    pub fn value(self) -> f64 {
        f64::from_bits(self.bits)
    }
}

impl fmt::Display for FloatLit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps the `.0` on integral values so the text re-lexes as a float.
        write!(f, "{:?}", self.value())?;
        if let Some(suffix) = self.suffix {
            write!(f, "{suffix}")?;
        }
        Ok(())
    }
}

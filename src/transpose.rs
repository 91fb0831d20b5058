//! Transpose tags for GEMM operands.

use crate::error::GemmError;
use std::fmt;

/// How an operand enters the product: as stored, transposed, or
/// conjugate-transposed.
///
/// For real element types `ConjTrans` behaves exactly like `Trans`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Transpose {
    /// Use the operand as stored.
    #[default]
    NoTrans = b'N',
    /// Use the transpose of the operand.
    Trans = b'T',
    /// Use the conjugate transpose of the operand.
    ConjTrans = b'C',
}

impl Transpose {
    /// True for `Trans` and `ConjTrans`: rows and columns of the stored
    /// matrix swap roles.
    #[inline(always)]
    pub fn is_trans(self) -> bool {
        !matches!(self, Transpose::NoTrans)
    }

    /// True only for `ConjTrans`.
    #[inline(always)]
    pub fn is_conj(self) -> bool {
        matches!(self, Transpose::ConjTrans)
    }

    /// The BLAS character for this tag.
    pub fn as_char(self) -> char {
        self as u8 as char
    }

    /// Stored `(rows, cols)` of an operand whose logical shape is
    /// `rows x cols` after applying this tag.
    #[inline(always)]
    pub fn stored_shape(self, rows: usize, cols: usize) -> (usize, usize) {
        if self.is_trans() {
            (cols, rows)
        } else {
            (rows, cols)
        }
    }
}

impl TryFrom<char> for Transpose {
    type Error = GemmError;

    fn try_from(tag: char) -> Result<Self, Self::Error> {
        match tag {
            'N' | 'n' => Ok(Transpose::NoTrans),
            'T' | 't' => Ok(Transpose::Trans),
            'C' | 'c' => Ok(Transpose::ConjTrans),
            other => Err(GemmError::InvalidTranspose(other)),
        }
    }
}

impl TryFrom<u8> for Transpose {
    type Error = GemmError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Transpose::try_from(tag as char)
    }
}

impl fmt::Display for Transpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

//! A fixed-size bitboard using const generics.
//!
//! Boards are an `N×N` grid stored as `N` rows, each packed into an unsigned
//! integer `T`, so a 15×15 board fits in `[u16; 15]`. The type is `no_std`
//! friendly and never allocates.

use core::fmt;
use core::mem;
use num_traits::{PrimInt, Unsigned};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Row or column index is out of bounds [0..N), or past the bits of `T`.
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}

/// A fixed-size N×N bitboard, one `T` per row.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned,
{
    rows: [T; N],
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    const CAPACITY: usize = mem::size_of::<T>() * 8;

    #[inline]
    pub fn new() -> Self {
        BitBoard {
            rows: [T::zero(); N],
        }
    }

    /// Number of set cells.
    pub fn count_ones(&self) -> usize {
        self.rows.iter().map(|r| r.count_ones() as usize).sum()
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        self.check_bounds(row, col)?;
        Ok(((self.rows[row] >> col) & T::one()) != T::zero())
    }

    /// Sets the bit at (row, col).
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        self.check_bounds(row, col)?;
        self.rows[row] = self.rows[row] | (T::one() << col);
        Ok(())
    }

    /// Iterate over set cells as `(row, col)`, row-major.
    pub fn iter_set(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..N).flat_map(move |r| {
            (0..N).filter_map(move |c| {
                if ((self.rows[r] >> c) & T::one()) != T::zero() {
                    Some((r, c))
                } else {
                    None
                }
            })
        })
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BitBoardError> {
        if row >= N || col >= N || col >= Self::CAPACITY {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitBoard<{}x{}> [", N, N)?;
        for (i, (r, c)) in self.iter_set().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "({},{})", r, c)?;
        }
        write!(f, "]")
    }
}

//! Dimension, range and shape types plus the wildcard wire codec.

use smallvec::SmallVec;
use snafu::ensure;

use crate::error::*;
use crate::{UNKNOWN_DIM, UNKNOWN_RANK};

/// One axis size: a concrete value or the unknown-dim wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dim {
    Const(u64),
    Unknown,
}

impl Dim {
    pub fn is_const(&self) -> bool {
        matches!(self, Dim::Const(_))
    }

    pub fn as_const(&self) -> Option<u64> {
        match self {
            Dim::Const(v) => Some(*v),
            Dim::Unknown => None,
        }
    }

    pub fn is_one(&self) -> bool {
        matches!(self, Dim::Const(1))
    }
}

/// Inclusive runtime bounds of one axis; `hi: None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub lo: u64,
    pub hi: Option<u64>,
}

impl Range {
    pub const fn new(lo: u64, hi: Option<u64>) -> Self {
        Self { lo, hi }
    }

    pub const fn exact(v: u64) -> Self {
        Self { lo: v, hi: Some(v) }
    }

    pub fn contains(&self, v: u64) -> bool {
        v >= self.lo && self.hi.is_none_or(|hi| v <= hi)
    }

    /// Interval product; an unbounded factor absorbs any finite bound.
    pub fn mul(&self, other: &Range) -> Range {
        let hi = match (self.hi, other.hi) {
            (Some(a), Some(b)) => Some(a.saturating_mul(b)),
            _ => None,
        };
        Range { lo: self.lo.saturating_mul(other.lo), hi }
    }

    /// Pointwise maximum of bounds (broadcast result range).
    pub fn max(&self, other: &Range) -> Range {
        let hi = match (self.hi, other.hi) {
            (Some(a), Some(b)) => Some(a.max(b)),
            _ => None,
        };
        Range { lo: self.lo.max(other.lo), hi }
    }
}

/// One tensor axis: size plus runtime range.
///
/// Invariant: a concrete size always carries the exact range `(n, n)`;
/// the constructors below enforce this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension {
    size: Dim,
    range: Range,
}

impl Dimension {
    pub const fn known(n: u64) -> Self {
        Self { size: Dim::Const(n), range: Range::exact(n) }
    }

    pub const fn one() -> Self {
        Self::known(1)
    }

    pub fn unknown(lo: u64, hi: Option<u64>) -> Result<Self> {
        if let Some(hi) = hi {
            ensure!(lo <= hi, InvalidRangeSnafu { lo, hi });
        }
        Ok(Self { size: Dim::Unknown, range: Range::new(lo, hi) })
    }

    /// Unknown axis with the default open range `(1, None)`.
    pub const fn dynamic() -> Self {
        Self { size: Dim::Unknown, range: Range::new(1, None) }
    }

    pub fn size(&self) -> Dim {
        self.size
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn is_one(&self) -> bool {
        self.size.is_one()
    }

    /// True when the axis may be empty at run time.
    pub fn can_be_empty(&self) -> bool {
        self.range.lo == 0
    }

    /// Fuse with a following axis (sizes multiply, ranges multiply).
    pub fn fuse(&self, other: &Dimension) -> Dimension {
        match (self.size.as_const(), other.size.as_const()) {
            (Some(a), Some(b)) => Dimension::known(a * b),
            _ => Dimension { size: Dim::Unknown, range: self.range.mul(&other.range) },
        }
    }

    pub fn to_wire(&self) -> i64 {
        match self.size {
            Dim::Const(v) => v as i64,
            Dim::Unknown => UNKNOWN_DIM,
        }
    }
}

/// Shape vector with inline capacity for the common 1D-4D ranks.
pub type Dims = SmallVec<[Dimension; 4]>;

/// A tensor shape: ranked axes, or the unknown-rank wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Ranked(Dims),
    UnknownRank,
}

impl Shape {
    /// Decode the wire form: `-1` per axis means unknown size, a whole shape
    /// of `[-2]` means unknown rank. Ranges apply positionally to the axes;
    /// a concrete axis ignores any supplied range and keeps `(n, n)`.
    pub fn from_wire(sizes: &[i64], ranges: Option<&[(u64, Option<u64>)]>) -> Result<Shape> {
        if sizes.contains(&UNKNOWN_RANK) {
            ensure!(sizes == [UNKNOWN_RANK], UnknownRankMisuseSnafu { shape: SmallVec::from_slice(sizes) });
            return Ok(Shape::UnknownRank);
        }

        let mut dims = Dims::with_capacity(sizes.len());
        for (i, &s) in sizes.iter().enumerate() {
            let dim = match s {
                UNKNOWN_DIM => {
                    let (lo, hi) = ranges.and_then(|r| r.get(i)).copied().unwrap_or((1, None));
                    Dimension::unknown(lo, hi)?
                }
                s if s >= 0 => Dimension::known(s as u64),
                s => return InvalidNegativeDimSnafu { value: s }.fail(),
            };
            dims.push(dim);
        }
        Ok(Shape::Ranked(dims))
    }

    pub fn to_wire(&self) -> SmallVec<[i64; 4]> {
        match self {
            Shape::Ranked(dims) => dims.iter().map(Dimension::to_wire).collect(),
            Shape::UnknownRank => SmallVec::from_slice(&[UNKNOWN_RANK]),
        }
    }

    /// Borrow the ranked axes, failing for unknown-rank shapes.
    pub fn dims(&self, operation: &'static str) -> Result<&Dims> {
        match self {
            Shape::Ranked(dims) => Ok(dims),
            Shape::UnknownRank => UnknownRankUnsupportedSnafu { operation }.fail(),
        }
    }

    pub fn rank(&self) -> Option<usize> {
        match self {
            Shape::Ranked(dims) => Some(dims.len()),
            Shape::UnknownRank => None,
        }
    }
}

impl From<Dims> for Shape {
    fn from(dims: Dims) -> Self {
        Shape::Ranked(dims)
    }
}

/// Check if a dims vector is fully concrete.
pub fn is_static(dims: &Dims) -> bool {
    dims.iter().all(|d| d.size().is_const())
}

/// Convert to concrete sizes if fully static, None otherwise.
pub fn to_static(dims: &Dims) -> Option<SmallVec<[u64; 4]>> {
    is_static(dims).then(|| dims.iter().map(|d| d.size().as_const().unwrap()).collect())
}

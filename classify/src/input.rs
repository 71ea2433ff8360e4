//! Wire-level descriptors flowing in and out of the classifiers.

use smallvec::SmallVec;
use tessel_dtype::ScalarDType;
use tessel_shape::{Dimension, Dims, Shape};

use crate::error::Result;

/// Abstract input tensor as supplied by an operator entry point.
///
/// `shape` uses the wildcard wire encoding: `-1` per axis for unknown size,
/// a whole shape of `[-2]` for unknown rank.
#[derive(Debug, Clone, PartialEq)]
pub struct TensorDesc {
    pub shape: Vec<i64>,
    pub ranges: Option<Vec<(u64, Option<u64>)>>,
    pub dtype: ScalarDType,
    /// Compile-time payload for value-carrying descriptors (e.g. an axis
    /// tensor whose content is already known).
    pub const_value: Option<Vec<i64>>,
}

impl TensorDesc {
    pub fn new(shape: impl Into<Vec<i64>>, dtype: ScalarDType) -> Self {
        Self { shape: shape.into(), ranges: None, dtype, const_value: None }
    }

    pub fn with_ranges(mut self, ranges: impl Into<Vec<(u64, Option<u64>)>>) -> Self {
        self.ranges = Some(ranges.into());
        self
    }

    pub fn with_const_value(mut self, value: impl Into<Vec<i64>>) -> Self {
        self.const_value = Some(value.into());
        self
    }

    /// Decode into the shape algebra's representation.
    pub fn decode(&self) -> Result<Shape> {
        Ok(Shape::from_wire(&self.shape, self.ranges.as_deref())?)
    }
}

/// How the split axis was supplied.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisArg {
    /// Directly as an integer attribute (possibly negative).
    Value(i64),
    /// As a value-carrying tensor descriptor.
    Desc(TensorDesc),
}

/// Operation-specific parameter bundle for classify calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtraParams {
    pub num_split: Option<i64>,
    pub avg_split: bool,
    pub size_splits: Option<Vec<i64>>,
}

impl ExtraParams {
    pub fn num_split(n: i64) -> Self {
        Self { num_split: Some(n), ..Self::default() }
    }

    pub fn avg_split(mut self) -> Self {
        self.avg_split = true;
        self
    }

    pub fn size_splits(mut self, sizes: impl Into<Vec<i64>>) -> Self {
        self.size_splits = Some(sizes.into());
        self
    }
}

/// Kernel-template selector carried by every output descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Mode {
    Split,
    SplitGeneral,
    SplitEmpty,
    Common,
    Empty,
}

/// One concretized/bucketed shape descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputDesc {
    pub shape: SmallVec<[i64; 4]>,
    pub range: Vec<(u64, Option<u64>)>,
    pub mode: Mode,
    pub split_factor: u32,
}

impl OutputDesc {
    pub(crate) fn from_dims(dims: &Dims, mode: Mode, split_factor: u32) -> Self {
        Self {
            shape: dims.iter().map(Dimension::to_wire).collect(),
            range: dims.iter().map(|d| (d.range().lo, d.range().hi)).collect(),
            mode,
            split_factor,
        }
    }
}

/// One classification bucket: descriptor, resolved axis, per-segment sizes.
///
/// Wire-faithful to the `[(desc, axis, sizes), ...]` tuples operator entry
/// points consume.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub desc: OutputDesc,
    pub axis: usize,
    pub segment_sizes: Vec<i64>,
}

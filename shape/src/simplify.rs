//! Reduce-aware axis fusion and small total shape helpers.

use smallvec::{SmallVec, smallvec};

use crate::dim::{Dimension, Dims};
use crate::error::*;

/// Fuse consecutive non-reduced axes and consecutive reduced axes.
///
/// Reduce axes never fuse across a non-reduce boundary. Returns the fused
/// shape plus the renumbered reduce-axis indices. An empty input shape is
/// promoted to `[1]` with no reduce axes.
///
/// # Errors
/// Fails if any reduce axis is out of range for the shape's rank.
pub fn simplify_axis_shape(dims: &Dims, reduce_axes: &[usize]) -> Result<(Dims, Vec<usize>)> {
    if dims.is_empty() {
        return Ok((smallvec![Dimension::one()], Vec::new()));
    }

    let mut is_reduce = vec![false; dims.len()];
    for &axis in reduce_axes {
        if axis >= dims.len() {
            return AxisOutOfRangeSnafu { axis: axis as i64, rank: dims.len() }.fail();
        }
        is_reduce[axis] = true;
    }

    let mut fused = Dims::new();
    let mut new_reduce_axes = Vec::new();

    let mut i = 0;
    while i < dims.len() {
        let reduce_run = is_reduce[i];
        let mut dim = dims[i];
        let mut j = i + 1;
        while j < dims.len() && is_reduce[j] == reduce_run {
            dim = dim.fuse(&dims[j]);
            j += 1;
        }
        if reduce_run {
            new_reduce_axes.push(fused.len());
        }
        fused.push(dim);
        i = j;
    }

    Ok((fused, new_reduce_axes))
}

/// Remove all unit axes; a shape that would become empty collapses to `[1]`.
pub fn squeeze_shape(shape: &[i64]) -> SmallVec<[i64; 4]> {
    let squeezed: SmallVec<[i64; 4]> = shape.iter().copied().filter(|&s| s != 1).collect();
    if squeezed.is_empty() { smallvec![1] } else { squeezed }
}

/// Map possibly-negative axis indices into `[0, rank)`.
///
/// # Errors
/// Fails on any axis outside `[-rank, rank)`.
pub fn wrap_axes_to_positive(axes: &[i64], rank: usize) -> Result<Vec<usize>> {
    axes.iter()
        .map(|&axis| {
            let wrapped = if axis < 0 { axis + rank as i64 } else { axis };
            if wrapped < 0 || wrapped >= rank as i64 {
                return AxisOutOfRangeSnafu { axis, rank }.fail();
            }
            Ok(wrapped as usize)
        })
        .collect()
}

/// Promote a scalar (empty) shape to the one-element tensor shape `[1]`.
pub fn scalar2tensor_one(shape: &[i64]) -> SmallVec<[i64; 4]> {
    if shape.is_empty() { smallvec![1] } else { SmallVec::from_slice(shape) }
}

//! Broadcast compatibility, n-ary unification and run fusion.
//!
//! Broadcasting is explicit and right-aligned: the shorter shape is padded on
//! the left with unit axes, then axes combine pointwise. An unknown axis
//! broadcast against a concrete non-unit axis stays unknown in the result;
//! only a concrete unit axis is transparent.

use smallvec::SmallVec;

use crate::dim::{Dim, Dimension, Dims, Range};
use crate::error::*;

/// Right-align two shapes by left-padding the shorter with unit axes.
pub fn align_right(a: &Dims, b: &Dims) -> (Dims, Dims) {
    let rank = a.len().max(b.len());
    (pad_left(a, rank), pad_left(b, rank))
}

fn pad_left(dims: &Dims, rank: usize) -> Dims {
    let mut out = Dims::with_capacity(rank);
    out.extend(std::iter::repeat_n(Dimension::one(), rank - dims.len()));
    out.extend(dims.iter().copied());
    out
}

/// Combine one aligned axis pair into the broadcast result axis.
fn broadcast_dim(l: &Dimension, r: &Dimension, position: usize) -> Result<Dimension> {
    match (l.size(), r.size()) {
        (Dim::Const(a), Dim::Const(b)) => {
            if a == b {
                Ok(*l)
            } else if a == 1 {
                Ok(*r)
            } else if b == 1 {
                Ok(*l)
            } else {
                BroadcastIncompatibleSnafu { lhs: a, rhs: b, position }.fail()
            }
        }
        (Dim::Const(1), Dim::Unknown) => Ok(*r),
        (Dim::Unknown, Dim::Const(1)) => Ok(*l),
        (Dim::Const(n), Dim::Unknown) | (Dim::Unknown, Dim::Const(n)) => {
            let unknown = if l.size().is_const() { r } else { l };
            // The unknown side must be able to equal n, or to be 1.
            let range = unknown.range();
            if !range.contains(n) && !range.contains(1) {
                return BroadcastIncompatibleSnafu { lhs: n, rhs: range.lo, position }.fail();
            }
            Ok(unknown_dim(l.range().max(&r.range())))
        }
        (Dim::Unknown, Dim::Unknown) => Ok(unknown_dim(l.range().max(&r.range()))),
    }
}

fn unknown_dim(range: Range) -> Dimension {
    // max() preserves lo <= hi, so the constructor check cannot fail here;
    // the fallback is unreachable.
    Dimension::unknown(range.lo, range.hi).unwrap_or(Dimension::dynamic())
}

/// Broadcast two shapes.
///
/// Returns the right-aligned operands plus the combined broadcast shape.
///
/// # Errors
/// Fails when two axes are concrete, unequal and neither is 1, or when an
/// unknown axis' range permits neither equality nor a unit size.
pub fn broadcast_shapes(a: &Dims, b: &Dims) -> Result<(Dims, Dims, Dims)> {
    let (a, b) = align_right(a, b);
    let mut m = Dims::with_capacity(a.len());
    for (pos, (l, r)) in a.iter().zip(b.iter()).enumerate() {
        m.push(broadcast_dim(l, r, pos)?);
    }
    Ok((a, b, m))
}

/// N-ary broadcast: iteratively folds pairwise broadcast over the list.
///
/// Returns the aligned inputs and the unified broadcast shape.
pub fn unify_broadcast_shapes(shapes: &[Dims]) -> Result<(Vec<Dims>, Dims)> {
    if shapes.is_empty() {
        return Ok((Vec::new(), Dims::new()));
    }

    let rank = shapes.iter().map(|s| s.len()).max().unwrap();
    let aligned: Vec<Dims> = shapes.iter().map(|s| pad_left(s, rank)).collect();

    let mut m = aligned[0].clone();
    for shape in &aligned[1..] {
        let mut next = Dims::with_capacity(rank);
        for (pos, (l, r)) in m.iter().zip(shape.iter()).enumerate() {
            next.push(broadcast_dim(l, r, pos)?);
        }
        m = next;
    }
    Ok((aligned, m))
}

/// Per-axis broadcast pattern used for run fusion.
///
/// `Opaque` marks an axis whose pattern cannot be proven constant at compile
/// time (e.g. unknown vs. concrete non-unit); opaque axes never fuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BroadcastPattern {
    BothUnit,
    Matched,
    LeftUnit,
    RightUnit,
    Opaque,
}

fn axis_pattern(l: &Dimension, r: &Dimension) -> BroadcastPattern {
    match (l.size(), r.size()) {
        (Dim::Const(1), Dim::Const(1)) => BroadcastPattern::BothUnit,
        (Dim::Const(a), Dim::Const(b)) if a == b => BroadcastPattern::Matched,
        (Dim::Const(1), _) => BroadcastPattern::LeftUnit,
        (_, Dim::Const(1)) => BroadcastPattern::RightUnit,
        _ => BroadcastPattern::Opaque,
    }
}

/// Fuse maximal contiguous runs of axes whose broadcast pattern is constant,
/// producing a shorter shape pair with identical broadcast semantics.
///
/// This is a semantics-preserving rewrite: broadcasting the refined pair
/// yields the same element layout as broadcasting the originals (up to
/// reshape). Axes with a compile-time-ambiguous pattern are left alone.
pub fn refine_shapes_for_broadcast(a: &Dims, b: &Dims) -> Result<(Dims, Dims)> {
    let (a, b) = align_right(a, b);
    let mut out_a = Dims::new();
    let mut out_b = Dims::new();

    let mut i = 0;
    while i < a.len() {
        let pattern = axis_pattern(&a[i], &b[i]);
        let mut fused_a = a[i];
        let mut fused_b = b[i];
        let mut j = i + 1;
        if pattern != BroadcastPattern::Opaque {
            while j < a.len() && axis_pattern(&a[j], &b[j]) == pattern {
                fused_a = fused_a.fuse(&a[j]);
                fused_b = fused_b.fuse(&b[j]);
                j += 1;
            }
        }
        out_a.push(fused_a);
        out_b.push(fused_b);
        i = j;
    }

    Ok((out_a, out_b))
}

/// Concrete broadcast result sizes for fully static shapes (test helper for
/// the refine round-trip law; classifier uses [`broadcast_shapes`]).
pub fn static_broadcast(a: &[u64], b: &[u64]) -> Result<SmallVec<[u64; 4]>> {
    let dims_a: Dims = a.iter().map(|&v| Dimension::known(v)).collect();
    let dims_b: Dims = b.iter().map(|&v| Dimension::known(v)).collect();
    let (_, _, m) = broadcast_shapes(&dims_a, &dims_b)?;
    Ok(m.iter().map(|d| d.size().as_const().unwrap()).collect())
}

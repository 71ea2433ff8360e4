//! Split-family classifier.
//!
//! Splitting axis `k` of shape `[d0..dn]` into segments only touches the
//! memory region spanned by axes `k..n`, so every bucket is normalized to
//! the two-axis view `[prod(d0..k), prod(dk..n)]` with the split axis last.
//! The generated kernel then dispatches over the returned buckets in order:
//! the exact bucket first, the general 128-lane fallback second, and the
//! degenerate empty bucket (a separately generated no-op kernel) last.

use smallvec::smallvec;
use tessel_shape::{Dim, Dimension, Dims, Shape, wrap_axes_to_positive};

use crate::context::{CompileContext, CompileValue, ORI_AXIS};
use crate::error::*;
use crate::input::{AxisArg, Bucket, ExtraParams, Mode, OutputDesc, TensorDesc};

/// Hardware minimum addressable granularity, in lanes.
pub const GENERAL_SPLIT_FACTOR: u32 = 128;

/// Enumerate the shape buckets for a split operation.
///
/// Buckets come back in the fixed order `[exact, general, empty]`; a shape
/// that is provably always empty produces the empty bucket alone. The raw,
/// possibly negative, user-supplied axis is recorded under `_ori_axis` in
/// the compile-info context.
///
/// # Errors
/// [`ClassifyError`] with `errCode E90001` on a malformed parameter bundle.
pub fn classify_split(
    ctx: &mut CompileContext,
    inputs: &[TensorDesc],
    axis: &AxisArg,
    extra_params: &ExtraParams,
) -> Result<Vec<Bucket>> {
    let Some(num_split) = extra_params.num_split else {
        return Err(ClassifyError::param_invalid(
            "inputs of classify must include the dict extra_params with the key num_split when mode is split",
        ));
    };
    if num_split < 1 {
        return Err(ClassifyError::param_invalid(format!("num_split must be a positive integer, got {num_split}")));
    }
    let num_split = num_split as usize;

    let [input] = inputs else {
        return Err(ClassifyError::param_invalid(format!(
            "classify split expects exactly one input tensor, got {}",
            inputs.len()
        )));
    };

    if extra_params.avg_split && extra_params.size_splits.is_some() {
        return Err(ClassifyError::param_invalid("extra_params must not set both avg_split and size_splits"));
    }
    if let Some(sizes) = &extra_params.size_splits
        && sizes.len() != num_split
    {
        return Err(ClassifyError::param_invalid(format!(
            "size_splits length {} must equal num_split {num_split}",
            sizes.len()
        )));
    }

    let ori_axis = resolve_axis(axis)?;
    ctx.set(ORI_AXIS, CompileValue::Int(ori_axis));

    let (dims, split_axis): (Dims, usize) = match input.decode()? {
        // Unknown rank collapses directly to the canonical two-axis view.
        Shape::UnknownRank => (smallvec![Dimension::dynamic(), Dimension::dynamic()], 1),
        Shape::Ranked(dims) => {
            let wrapped = wrap_axes_to_positive(&[ori_axis], dims.len())?[0];
            (dims, wrapped)
        }
    };

    let segment_sizes = segment_sizes(&dims, split_axis, num_split, extra_params);

    // A concrete zero axis makes the whole operation a no-op at every runtime
    // shape; only the empty kernel is generated.
    let always_empty = dims.iter().any(|d| d.size() == Dim::Const(0));
    let may_be_empty = dims.iter().any(Dimension::can_be_empty);

    let mut buckets = Vec::new();

    if !always_empty {
        let (out_dims, out_axis) = canonical_view(&dims, split_axis);
        buckets.push(Bucket {
            desc: OutputDesc::from_dims(&out_dims, Mode::Split, 1),
            axis: out_axis,
            segment_sizes: segment_sizes.clone(),
        });
        buckets.push(Bucket {
            desc: OutputDesc::from_dims(&out_dims, Mode::SplitGeneral, GENERAL_SPLIT_FACTOR),
            axis: out_axis,
            segment_sizes: segment_sizes.clone(),
        });
    }

    if always_empty || may_be_empty {
        let empty: Dims = smallvec![Dimension::known(0), Dimension::known(0)];
        buckets.push(Bucket {
            desc: OutputDesc::from_dims(&empty, Mode::SplitEmpty, 1),
            axis: 0,
            segment_sizes,
        });
    }

    tracing::debug!(ori_axis, split_axis, buckets = buckets.len(), "classify_split");
    Ok(buckets)
}

/// The raw user-supplied axis: a literal, or a fully-determined singleton
/// value descriptor.
fn resolve_axis(axis: &AxisArg) -> Result<i64> {
    match axis {
        AxisArg::Value(v) => Ok(*v),
        AxisArg::Desc(desc) => match desc.const_value.as_deref() {
            Some([v]) => Ok(*v),
            _ => Err(ClassifyError::param_invalid("split axis must be a fully-determined compile-time constant")),
        },
    }
}

/// Collapse to `[prod(before), prod(split..)]`; a split at axis 0 has no
/// leading block and stays one-dimensional.
fn canonical_view(dims: &Dims, split_axis: usize) -> (Dims, usize) {
    let tail = fuse_run(&dims[split_axis..]);
    if split_axis == 0 {
        (smallvec![tail], 0)
    } else {
        (smallvec![fuse_run(&dims[..split_axis]), tail], 1)
    }
}

fn fuse_run(run: &[Dimension]) -> Dimension {
    let mut iter = run.iter();
    let first = *iter.next().expect("fuse_run on empty axis run");
    iter.fold(first, |acc, d| acc.fuse(d))
}

/// Per-segment sizes along the split axis: the explicit size list when
/// given, an even floor-then-remainder-to-last division of a concrete axis
/// under `avg_split`, and runtime-determined `-1` markers otherwise.
fn segment_sizes(dims: &Dims, split_axis: usize, num_split: usize, extra_params: &ExtraParams) -> Vec<i64> {
    if let Some(sizes) = &extra_params.size_splits {
        return sizes.clone();
    }

    if extra_params.avg_split
        && let Some(n) = dims[split_axis].size().as_const()
    {
        let n = n as i64;
        let floor = n / num_split as i64;
        let mut sizes = vec![floor; num_split];
        sizes[num_split - 1] = n - floor * (num_split as i64 - 1);
        return sizes;
    }

    vec![-1; num_split]
}

//! Elementwise/broadcast-family classifier.
//!
//! Elementwise kernels are rank-agnostic once axes with a constant broadcast
//! pattern are fused, so the common bucket carries maximally fused operand
//! shapes. An extra all-empty bucket covers runtime shapes where the
//! broadcast result has no elements.

use smallvec::smallvec;
use tessel_shape::{Dimension, Dims, Shape, refine_shapes_for_broadcast, simplify_axis_shape, unify_broadcast_shapes};

use crate::context::{BROADCAST_SHAPE, CompileContext, CompileValue};
use crate::error::*;
use crate::input::{Mode, OutputDesc, TensorDesc};

/// Enumerate the shape buckets for an elementwise operation.
///
/// Each bucket is one descriptor per input, in input order. The common
/// bucket always comes first; the empty bucket follows when the broadcast
/// result may have a zero-sized axis at run time. The unified broadcast
/// shape is recorded under `_broadcast_shape` in the compile-info context.
///
/// # Errors
/// [`ClassifyError`] on an empty input list or broadcast-incompatible shapes.
pub fn classify_elementwise(ctx: &mut CompileContext, inputs: &[TensorDesc]) -> Result<Vec<Vec<OutputDesc>>> {
    if inputs.is_empty() {
        return Err(ClassifyError::param_invalid("classify elementwise expects at least one input tensor"));
    }

    let mut shapes: Vec<Dims> = Vec::with_capacity(inputs.len());
    for input in inputs {
        shapes.push(match input.decode()? {
            // Unknown rank degrades the whole operand to one open axis.
            Shape::UnknownRank => smallvec![Dimension::dynamic()],
            Shape::Ranked(dims) if dims.is_empty() => smallvec![Dimension::one()],
            Shape::Ranked(dims) => dims,
        });
    }

    let (_, unified) = unify_broadcast_shapes(&shapes)?;
    ctx.set(BROADCAST_SHAPE, CompileValue::IntList(unified.iter().map(Dimension::to_wire).collect()));

    let fused = fuse_operands(&shapes)?;
    let mut buckets = vec![fused.iter().map(|dims| OutputDesc::from_dims(dims, Mode::Common, 1)).collect::<Vec<_>>()];

    if unified.iter().any(Dimension::can_be_empty) {
        let empty: Dims = smallvec![Dimension::known(0)];
        buckets.push(inputs.iter().map(|_| OutputDesc::from_dims(&empty, Mode::Empty, 1)).collect());
    }

    tracing::debug!(inputs = inputs.len(), buckets = buckets.len(), "classify_elementwise");
    Ok(buckets)
}

/// Fuse operand axes as far as broadcast semantics allow.
///
/// A lone operand collapses to one axis; a pair fuses runs with a constant
/// broadcast pattern; three or more operands only right-align, which is
/// always safe.
fn fuse_operands(shapes: &[Dims]) -> Result<Vec<Dims>> {
    match shapes {
        [single] => {
            let (fused, _) = simplify_axis_shape(single, &[])?;
            Ok(vec![fused])
        }
        [a, b] => {
            let (ra, rb) = refine_shapes_for_broadcast(a, b)?;
            Ok(vec![ra, rb])
        }
        many => {
            let (aligned, _) = unify_broadcast_shapes(many)?;
            Ok(aligned)
        }
    }
}

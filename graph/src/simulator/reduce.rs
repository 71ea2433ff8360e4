//! Reduce family: sum/prod/max/min.
//!
//! Each reduce kind has an identity-under-padding rule: before a reduction
//! runs, padding lanes along the reduce axes must hold a value the reduction
//! ignores. `do_adjust` decides whether the lanes need rewriting and to what;
//! `do_calc` gives the node's own padding-lane category. The tables are a
//! hardware convention, pinned verbatim by the unit tests; note in particular
//! that PROD treats EXACT(0) as needing no rewrite (zero absorption), not
//! only its multiplicative identity 1.

use tessel_dtype::{ConstValue, ScalarDType};

use crate::error::*;
use crate::graph::{Graph, NodeId};
use crate::padding::{PaddingValue, PvKind};
use crate::simulator::PaddingSimulator;

pub static REDUCE_SUM: ReduceSumSimulator = ReduceSumSimulator;
pub static REDUCE_PROD: ReduceProdSimulator = ReduceProdSimulator;
pub static REDUCE_MAX: ReduceMaxSimulator = ReduceMaxSimulator;
pub static REDUCE_MIN: ReduceMinSimulator = ReduceMinSimulator;

/// Shared adjust rule: `None` means the lanes already hold an acceptable
/// value; `Some(v)` means they must be forced to `v` before reducing.
fn adjust(
    has_pad: bool,
    pvalue: &PaddingValue,
    identity: ConstValue,
    acceptable: impl Fn(ConstValue) -> bool,
) -> Option<ConstValue> {
    match pvalue.kind() {
        PvKind::Exact(v) if acceptable(v) => None,
        PvKind::Exact(_) => Some(identity),
        PvKind::Tensor => has_pad.then_some(identity),
        PvKind::Any => Some(identity),
    }
}

/// Shared calc rule: an acceptable EXACT value rests as itself; any other
/// EXACT value becomes ANY (the lanes were rewritten to the identity, but the
/// reduce output lanes are no longer a single known constant); TENSOR and ANY
/// keep their category.
fn calc(
    dtype: ScalarDType,
    pvalue: &PaddingValue,
    acceptable: impl Fn(ConstValue) -> bool,
) -> PaddingValue {
    let kind = match pvalue.kind() {
        PvKind::Exact(v) if acceptable(v) => PvKind::Exact(v),
        PvKind::Exact(_) => PvKind::Any,
        PvKind::Tensor => PvKind::Tensor,
        PvKind::Any => PvKind::Any,
    };
    PaddingValue::new(dtype, kind)
}

fn graph_adjust_calc(
    graph: &mut Graph,
    node: NodeId,
    acceptable: impl Fn(ScalarDType, ConstValue) -> bool,
) -> Result<()> {
    let src_id = graph.inputs(node)[0];
    let src = graph.input_value(node, src_id)?;
    let dtype = graph.expr(node).dtype();

    let pvalue = PaddingValue::new(src.dtype, src.kind);
    let result = calc(dtype, &pvalue, |v| acceptable(dtype, v));

    graph.consume(node, src.source);
    graph.set_result(node, result.kind());
    Ok(())
}

pub struct ReduceSumSimulator;

impl ReduceSumSimulator {
    /// SUM identity is 0: an EXACT(0) lane needs no rewrite.
    pub fn do_adjust(&self, has_pad: bool, pvalue: &PaddingValue) -> Option<ConstValue> {
        adjust(has_pad, pvalue, pvalue.dtype().zero(), |v| v.is_zero())
    }

    pub fn do_calc(&self, pvalue: &PaddingValue) -> PaddingValue {
        calc(pvalue.dtype(), pvalue, |v| v.is_zero())
    }
}

impl PaddingSimulator for ReduceSumSimulator {
    fn op_type(&self) -> &'static str {
        "reduce_sum"
    }

    fn adjust_calc(&self, graph: &mut Graph, node: NodeId) -> Result<()> {
        graph_adjust_calc(graph, node, |_, v| v.is_zero())
    }
}

pub struct ReduceProdSimulator;

impl ReduceProdSimulator {
    /// PROD accepts EXACT(1) (identity) and EXACT(0) (zero absorption).
    pub fn do_adjust(&self, has_pad: bool, pvalue: &PaddingValue) -> Option<ConstValue> {
        adjust(has_pad, pvalue, pvalue.dtype().one(), |v| v.is_one() || v.is_zero())
    }

    pub fn do_calc(&self, pvalue: &PaddingValue) -> PaddingValue {
        calc(pvalue.dtype(), pvalue, |v| v.is_one() || v.is_zero())
    }
}

impl PaddingSimulator for ReduceProdSimulator {
    fn op_type(&self) -> &'static str {
        "reduce_prod"
    }

    fn adjust_calc(&self, graph: &mut Graph, node: NodeId) -> Result<()> {
        graph_adjust_calc(graph, node, |_, v| v.is_one() || v.is_zero())
    }
}

pub struct ReduceMaxSimulator;

impl ReduceMaxSimulator {
    /// MAX identity is the dtype's minimum representable value.
    pub fn do_adjust(&self, has_pad: bool, pvalue: &PaddingValue) -> Option<ConstValue> {
        let min = pvalue.dtype().min_value();
        adjust(has_pad, pvalue, min, |v| v.num_eq(min))
    }

    pub fn do_calc(&self, pvalue: &PaddingValue) -> PaddingValue {
        let min = pvalue.dtype().min_value();
        calc(pvalue.dtype(), pvalue, |v| v.num_eq(min))
    }
}

impl PaddingSimulator for ReduceMaxSimulator {
    fn op_type(&self) -> &'static str {
        "reduce_max"
    }

    fn adjust_calc(&self, graph: &mut Graph, node: NodeId) -> Result<()> {
        graph_adjust_calc(graph, node, |dtype, v| v.num_eq(dtype.min_value()))
    }
}

pub struct ReduceMinSimulator;

impl ReduceMinSimulator {
    /// MIN identity is the dtype's maximum representable value.
    pub fn do_adjust(&self, has_pad: bool, pvalue: &PaddingValue) -> Option<ConstValue> {
        let max = pvalue.dtype().max_value();
        adjust(has_pad, pvalue, max, |v| v.num_eq(max))
    }

    pub fn do_calc(&self, pvalue: &PaddingValue) -> PaddingValue {
        let max = pvalue.dtype().max_value();
        calc(pvalue.dtype(), pvalue, |v| v.num_eq(max))
    }
}

impl PaddingSimulator for ReduceMinSimulator {
    fn op_type(&self) -> &'static str {
        "reduce_min"
    }

    fn adjust_calc(&self, graph: &mut Graph, node: NodeId) -> Result<()> {
        graph_adjust_calc(graph, node, |dtype, v| v.num_eq(dtype.max_value()))
    }
}

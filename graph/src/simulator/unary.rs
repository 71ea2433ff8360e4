//! Elementwise nonlinearity family.
//!
//! Closed elementwise functions preserve the padding-lane category: an EXACT
//! lane maps through the closed form, TENSOR stays TENSOR, ANY stays ANY.

use std::cmp::Ordering;

use tessel_dtype::ConstValue;

use crate::error::*;
use crate::expr::{Op, UnaryOp};
use crate::graph::{Graph, NodeId};
use crate::padding::PvKind;
use crate::simulator::PaddingSimulator;

pub static RELU: ReluSimulator = ReluSimulator;
pub static LEAKY_RELU: LeakyReluSimulator = LeakyReluSimulator;

fn propagate(graph: &mut Graph, node: NodeId, f: impl Fn(&Graph, NodeId, ConstValue) -> ConstValue) -> Result<()> {
    let src_id = graph.inputs(node)[0];
    let src = graph.input_value(node, src_id)?;

    let result = match src.kind {
        PvKind::Exact(v) => PvKind::Exact(f(graph, node, v)),
        PvKind::Tensor => PvKind::Tensor,
        PvKind::Any => PvKind::Any,
    };

    graph.consume(node, src.source);
    graph.set_result(node, result);
    Ok(())
}

fn is_negative(v: ConstValue) -> bool {
    v.compare(ConstValue::Int(0)) == Some(Ordering::Less)
}

pub struct ReluSimulator;

impl PaddingSimulator for ReluSimulator {
    fn op_type(&self) -> &'static str {
        "relu"
    }

    fn adjust_calc(&self, graph: &mut Graph, node: NodeId) -> Result<()> {
        propagate(graph, node, |graph, node, v| {
            if is_negative(v) { graph.expr(node).dtype().zero() } else { v }
        })
    }
}

pub struct LeakyReluSimulator;

impl PaddingSimulator for LeakyReluSimulator {
    fn op_type(&self) -> &'static str {
        "leaky_relu"
    }

    fn adjust_calc(&self, graph: &mut Graph, node: NodeId) -> Result<()> {
        propagate(graph, node, |graph, node, v| {
            let expr = graph.expr(node);
            let Op::Unary { op: UnaryOp::LeakyRelu(slope), .. } = expr.op() else {
                return v;
            };
            if is_negative(v) { ConstValue::Float(v.as_f64() * slope).cast(expr.dtype()) } else { v }
        })
    }
}

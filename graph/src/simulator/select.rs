//! Ternary mux on a boolean control tensor.
//!
//! A control whose padding lanes are statically EXACT picks exactly one
//! branch: the other branch's padding value is left unconsumed (no target
//! entry). An unresolved control (TENSOR, ANY, or an explicit setting
//! override) consumes both branches and the result degrades to ANY.

use crate::error::*;
use crate::graph::{Graph, NodeId};
use crate::padding::PvKind;
use crate::simulator::PaddingSimulator;

pub static SELECT: SelectSimulator = SelectSimulator;

pub struct SelectSimulator;

impl PaddingSimulator for SelectSimulator {
    fn op_type(&self) -> &'static str {
        "select"
    }

    fn adjust_calc(&self, graph: &mut Graph, node: NodeId) -> Result<()> {
        let inputs = graph.inputs(node);
        let (cond_id, then_id, else_id) = (inputs[0], inputs[1], inputs[2]);

        let cond = graph.input_value(node, cond_id)?;

        if let (PvKind::Exact(v), false) = (cond.kind, cond.overridden) {
            let branch_id = if v.is_zero() { else_id } else { then_id };
            let branch = graph.input_value(node, branch_id)?;

            graph.consume(node, cond.source);
            graph.consume(node, branch.source);
            graph.set_result(node, branch.kind);
            return Ok(());
        }

        // Result lanes could come from either branch under the unresolved mask.
        let then_ = graph.input_value(node, then_id)?;
        let else_ = graph.input_value(node, else_id)?;

        graph.consume(node, cond.source);
        graph.consume(node, then_.source);
        graph.consume(node, else_.source);
        graph.set_result(node, PvKind::Any);
        Ok(())
    }
}

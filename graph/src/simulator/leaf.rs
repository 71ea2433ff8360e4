//! Leaf simulators: placeholders and compile-time constants.

use crate::error::*;
use crate::graph::{Graph, NodeId};
use crate::padding::PvKind;
use crate::simulator::PaddingSimulator;

pub static PLACEHOLDER: PlaceholderSimulator = PlaceholderSimulator;
pub static CONST: ConstSimulator = ConstSimulator;

/// Placeholders cannot synthesize a padding value; the caller seeds one via
/// `set_pvalue` before simulation.
pub struct PlaceholderSimulator;

impl PaddingSimulator for PlaceholderSimulator {
    fn op_type(&self) -> &'static str {
        "placeholder"
    }

    fn adjust_calc(&self, graph: &mut Graph, node: NodeId) -> Result<()> {
        let expr = graph.expr(node);
        snafu::ensure!(
            graph.get_pvalue(node).is_some(),
            MissingPaddingValueSnafu { node: expr.id, op_type: expr.op_type() }
        );
        Ok(())
    }
}

/// A scalar constant's padding lanes hold the constant itself.
pub struct ConstSimulator;

impl PaddingSimulator for ConstSimulator {
    fn op_type(&self) -> &'static str {
        "const"
    }

    fn adjust_calc(&self, graph: &mut Graph, node: NodeId) -> Result<()> {
        if let Some(value) = graph.expr(node).as_scalar_const() {
            graph.set_result(node, PvKind::Exact(value));
        }
        Ok(())
    }
}

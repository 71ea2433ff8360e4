//! Broadcast: replicating a tensor's lanes preserves their category.

use crate::error::*;
use crate::graph::{Graph, NodeId};
use crate::simulator::PaddingSimulator;

pub static BROADCAST: BroadcastSimulator = BroadcastSimulator;

pub struct BroadcastSimulator;

impl PaddingSimulator for BroadcastSimulator {
    fn op_type(&self) -> &'static str {
        "broadcast"
    }

    fn adjust_calc(&self, graph: &mut Graph, node: NodeId) -> Result<()> {
        let src_id = graph.inputs(node)[0];
        let src = graph.input_value(node, src_id)?;

        graph.consume(node, src.source);
        graph.set_result(node, src.kind);
        Ok(())
    }
}

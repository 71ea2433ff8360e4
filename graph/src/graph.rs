//! Arena-backed compute graph.
//!
//! Nodes live in a single `Vec` and reference each other through [`NodeId`]
//! indices; target lists on padding/setting values are index lists as well.
//! Discovery order is a topological order of the expression DAG, so iterating
//! node ids in order always visits producers before consumers.

use std::collections::HashMap;
use std::sync::Arc;

use smallvec::SmallVec;
use snafu::OptionExt;
use tessel_dtype::ScalarDType;

use crate::error::*;
use crate::expr::Expr;
use crate::padding::{PaddingValue, PvKind, SettingValue};
use crate::simulator::{PaddingSimulator, simulator_for};

/// Index of a node in the graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

pub(crate) struct Node {
    expr: Arc<Expr>,
    inputs: SmallVec<[NodeId; 2]>,
    simulator: &'static dyn PaddingSimulator,
    pvalue: Option<PaddingValue>,
    svalues: Vec<SettingValue>,
    resolved: bool,
}

/// Where a consumed input value lives, for fan-out bookkeeping.
#[derive(Debug, Clone, Copy)]
pub(crate) enum ValueRef {
    Pvalue(NodeId),
    Svalue { node: NodeId, index: usize },
    /// Scalar constants own no padding lanes and are never targeted.
    Scalar,
}

/// An input's effective padding value as seen by one consumer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResolvedInput {
    pub kind: PvKind,
    pub dtype: ScalarDType,
    pub source: ValueRef,
    /// True when the value came from a consumer-local setting override.
    pub overridden: bool,
}

/// DAG of compute nodes with per-node padding simulation.
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<u64, NodeId>,
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.nodes.len())
            .finish_non_exhaustive()
    }
}

impl Graph {
    /// Discover every distinct node reachable from `roots` and attach each
    /// node's simulator.
    ///
    /// # Errors
    /// Fails with [`Error::UnsupportedOperator`] if any node's operator kind
    /// has no registered simulator; no partial simulation happens.
    pub fn new(roots: &[Arc<Expr>]) -> Result<Graph> {
        let mut graph = Graph { nodes: Vec::new(), index: HashMap::new() };

        for root in roots {
            for expr in root.toposort() {
                if graph.index.contains_key(&expr.id) {
                    continue;
                }

                let simulator = simulator_for(expr.op())?;
                let mut inputs = SmallVec::new();
                expr.for_each_child(|child| {
                    // Children precede parents in toposort order.
                    inputs.push(graph.index[&child.id]);
                });

                let id = NodeId(graph.nodes.len() as u32);
                tracing::trace!(node = id.0, op_type = expr.op_type(), "graph node discovered");
                graph.index.insert(expr.id, id);
                graph.nodes.push(Node { expr, inputs, simulator, pvalue: None, svalues: Vec::new(), resolved: false });
            }
        }

        Ok(graph)
    }

    /// Node ids in deterministic topological order (producers first).
    pub fn get_nodes(&self) -> Vec<NodeId> {
        (0..self.nodes.len() as u32).map(NodeId).collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Graph node id of an expression built into this graph.
    pub fn node_of(&self, expr: &Arc<Expr>) -> Result<NodeId> {
        self.index.get(&expr.id).copied().context(UnknownExprSnafu { expr: expr.id })
    }

    pub fn expr(&self, id: NodeId) -> &Arc<Expr> {
        &self.nodes[id.index()].expr
    }

    pub(crate) fn inputs(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].inputs
    }

    /// Seed or replace a node's padding value (leaf/placeholder setup).
    pub fn set_pvalue(&mut self, id: NodeId, pvalue: PaddingValue) {
        self.nodes[id.index()].pvalue = Some(pvalue);
    }

    /// Append a consumer-local override. Overrides are not deduplicated;
    /// callers own the responsibility of not adding semantic duplicates.
    pub fn add_svalue(&mut self, id: NodeId, svalue: SettingValue) {
        self.nodes[id.index()].svalues.push(svalue);
    }

    pub fn get_pvalue(&self, id: NodeId) -> Option<&PaddingValue> {
        self.nodes[id.index()].pvalue.as_ref()
    }

    pub fn svalues(&self, id: NodeId) -> &[SettingValue] {
        &self.nodes[id.index()].svalues
    }

    /// Resolve this node's padding value through its simulator.
    ///
    /// Runs at most once per node: calling again after a successful
    /// resolution is a no-op, so fan-out bookkeeping stays idempotent.
    /// Inputs must already be resolved (or seeded, for leaves).
    pub fn adjust_calc(&mut self, id: NodeId) -> Result<()> {
        if self.nodes[id.index()].resolved {
            return Ok(());
        }

        let simulator = self.nodes[id.index()].simulator;
        tracing::debug!(node = id.0, op_type = simulator.op_type(), "adjust_calc");
        simulator.adjust_calc(self, id)?;

        self.nodes[id.index()].resolved = true;
        Ok(())
    }

    /// The effective value of `input` as seen by `consumer`: a setting
    /// override anchored to the consumer wins over the input's own pvalue;
    /// scalar constants resolve to their exact value without owning lanes.
    pub(crate) fn input_value(&self, consumer: NodeId, input: NodeId) -> Result<ResolvedInput> {
        let node = &self.nodes[input.index()];

        if let Some(value) = node.expr.as_scalar_const() {
            return Ok(ResolvedInput {
                kind: PvKind::Exact(value),
                dtype: node.expr.dtype(),
                source: ValueRef::Scalar,
                overridden: false,
            });
        }

        // Latest matching override wins.
        if let Some((index, sv)) =
            node.svalues.iter().enumerate().rev().find(|(_, sv)| sv.consumer() == consumer)
        {
            return Ok(ResolvedInput {
                kind: PvKind::Exact(sv.value()),
                dtype: sv.dtype(),
                source: ValueRef::Svalue { node: input, index },
                overridden: true,
            });
        }

        let pvalue = node.pvalue.as_ref().context(MissingPaddingValueSnafu {
            node: node.expr.id,
            op_type: node.expr.op_type(),
        })?;
        Ok(ResolvedInput {
            kind: pvalue.kind(),
            dtype: pvalue.dtype(),
            source: ValueRef::Pvalue(input),
            overridden: false,
        })
    }

    /// Record `consumer` on the consumed value's target list.
    pub(crate) fn consume(&mut self, consumer: NodeId, source: ValueRef) {
        match source {
            ValueRef::Pvalue(node) => {
                if let Some(pvalue) = self.nodes[node.index()].pvalue.as_mut() {
                    pvalue.add_target(consumer);
                }
            }
            ValueRef::Svalue { node, index } => {
                self.nodes[node.index()].svalues[index].add_target(consumer);
            }
            ValueRef::Scalar => {}
        }
    }

    /// Store the simulator's result as this node's padding value, keeping a
    /// caller-seeded value untouched.
    pub(crate) fn set_result(&mut self, id: NodeId, kind: PvKind) {
        let node = &mut self.nodes[id.index()];
        if node.pvalue.is_none() {
            node.pvalue = Some(PaddingValue::new(node.expr.dtype(), kind));
        }
    }

    /// True once `adjust_calc` has completed for this node.
    pub fn is_resolved(&self, id: NodeId) -> bool {
        self.nodes[id.index()].resolved
    }
}

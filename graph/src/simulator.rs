//! Per-operator-kind padding propagation.
//!
//! Each operator family implements [`PaddingSimulator`]; the registry is a
//! compile-time exhaustive match from operator kind to a static simulator
//! instance, so an operator without a simulator fails graph construction
//! instead of failing mid-simulation.

pub mod broadcast;
pub mod compare;
pub mod leaf;
pub mod reduce;
pub mod select;
pub mod unary;

use crate::error::*;
use crate::expr::{CmpOp, Op, ReduceOp, UnaryOp};
use crate::graph::{Graph, NodeId};

pub use reduce::{ReduceMaxSimulator, ReduceMinSimulator, ReduceProdSimulator, ReduceSumSimulator};

/// Uniform contract of a per-operator padding simulator.
///
/// Simulators are stateless capability objects: all state lives on the graph
/// nodes they resolve. `adjust_calc` runs at most once per node (the graph
/// enforces the no-op-on-repeat rule).
pub trait PaddingSimulator: Sync {
    /// Stable operator-kind identifier (registry key, golden-test name).
    fn op_type(&self) -> &'static str;

    /// Resolve `node`'s padding value from its inputs' padding/setting
    /// values and record the node on each consumed value's target list.
    fn adjust_calc(&self, graph: &mut Graph, node: NodeId) -> Result<()>;
}

/// Look up the simulator for an operator kind.
///
/// # Errors
/// [`Error::UnsupportedOperator`] for foreign operator kinds.
pub fn simulator_for(op: &Op) -> Result<&'static dyn PaddingSimulator> {
    Ok(match op {
        Op::Placeholder { .. } => &leaf::PLACEHOLDER,
        Op::Const(_) => &leaf::CONST,
        Op::Cmp { op: CmpOp::Eq, .. } => &compare::CMP_EQ,
        Op::Cmp { op: CmpOp::Ne, .. } => &compare::CMP_NE,
        Op::Cmp { op: CmpOp::Lt, .. } => &compare::CMP_LT,
        Op::Cmp { op: CmpOp::Le, .. } => &compare::CMP_LE,
        Op::Cmp { op: CmpOp::Gt, .. } => &compare::CMP_GT,
        Op::Cmp { op: CmpOp::Ge, .. } => &compare::CMP_GE,
        Op::Select { .. } => &select::SELECT,
        Op::Unary { op: UnaryOp::Relu, .. } => &unary::RELU,
        Op::Unary { op: UnaryOp::LeakyRelu(_), .. } => &unary::LEAKY_RELU,
        Op::Reduce { op: ReduceOp::Sum, .. } => &reduce::REDUCE_SUM,
        Op::Reduce { op: ReduceOp::Prod, .. } => &reduce::REDUCE_PROD,
        Op::Reduce { op: ReduceOp::Max, .. } => &reduce::REDUCE_MAX,
        Op::Reduce { op: ReduceOp::Min, .. } => &reduce::REDUCE_MIN,
        Op::Broadcast { .. } => &broadcast::BROADCAST,
        Op::Extern { op_type, .. } => {
            return UnsupportedOperatorSnafu { op_type: op_type.clone() }.fail();
        }
    })
}

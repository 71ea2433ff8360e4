//! Comparison family: eq/ne/lt/le/gt/ge producing a bit tensor.
//!
//! Two EXACT operands evaluate the comparison at compile time. Anything less
//! determined degrades to ANY, except the trivial identity cases (a node
//! compared against itself) and definite-bound cases (ordering against the
//! operand dtype's extreme value).

use std::cmp::Ordering;

use tessel_dtype::ConstValue;

use crate::error::*;
use crate::expr::CmpOp;
use crate::graph::{Graph, NodeId, ResolvedInput};
use crate::padding::PvKind;
use crate::simulator::PaddingSimulator;

pub static CMP_EQ: CompareSimulator = CompareSimulator { op: CmpOp::Eq };
pub static CMP_NE: CompareSimulator = CompareSimulator { op: CmpOp::Ne };
pub static CMP_LT: CompareSimulator = CompareSimulator { op: CmpOp::Lt };
pub static CMP_LE: CompareSimulator = CompareSimulator { op: CmpOp::Le };
pub static CMP_GT: CompareSimulator = CompareSimulator { op: CmpOp::Gt };
pub static CMP_GE: CompareSimulator = CompareSimulator { op: CmpOp::Ge };

pub struct CompareSimulator {
    op: CmpOp,
}

impl CompareSimulator {
    fn evaluate(&self, a: ConstValue, b: ConstValue) -> PvKind {
        let Some(ordering) = a.compare(b) else {
            // NaN operand: no compile-time answer.
            return PvKind::Any;
        };
        let result = match self.op {
            CmpOp::Eq => ordering == Ordering::Equal,
            CmpOp::Ne => ordering != Ordering::Equal,
            CmpOp::Lt => ordering == Ordering::Less,
            CmpOp::Le => ordering != Ordering::Greater,
            CmpOp::Gt => ordering == Ordering::Greater,
            CmpOp::Ge => ordering != Ordering::Less,
        };
        PvKind::Exact(ConstValue::Bool(result))
    }

    /// Definite answers when one operand is pinned to the other side's
    /// representable extreme: `x <= max` and `x >= min` always hold,
    /// `x < min` and `x > max` never do.
    fn against_bound(&self, lhs: &ResolvedInput, rhs: &ResolvedInput) -> Option<PvKind> {
        if let PvKind::Exact(v) = rhs.kind {
            let max = lhs.dtype.max_value();
            let min = lhs.dtype.min_value();
            match self.op {
                CmpOp::Le if v.num_eq(max) => return Some(PvKind::Exact(ConstValue::Bool(true))),
                CmpOp::Ge if v.num_eq(min) => return Some(PvKind::Exact(ConstValue::Bool(true))),
                CmpOp::Lt if v.num_eq(min) => return Some(PvKind::Exact(ConstValue::Bool(false))),
                CmpOp::Gt if v.num_eq(max) => return Some(PvKind::Exact(ConstValue::Bool(false))),
                _ => {}
            }
        }
        if let PvKind::Exact(v) = lhs.kind {
            let max = rhs.dtype.max_value();
            let min = rhs.dtype.min_value();
            match self.op {
                CmpOp::Ge if v.num_eq(max) => return Some(PvKind::Exact(ConstValue::Bool(true))),
                CmpOp::Le if v.num_eq(min) => return Some(PvKind::Exact(ConstValue::Bool(true))),
                CmpOp::Gt if v.num_eq(min) => return Some(PvKind::Exact(ConstValue::Bool(false))),
                CmpOp::Lt if v.num_eq(max) => return Some(PvKind::Exact(ConstValue::Bool(false))),
                _ => {}
            }
        }
        None
    }

    fn calc(&self, same_operand: bool, lhs: &ResolvedInput, rhs: &ResolvedInput) -> PvKind {
        if same_operand {
            let result = matches!(self.op, CmpOp::Eq | CmpOp::Le | CmpOp::Ge);
            return PvKind::Exact(ConstValue::Bool(result));
        }

        if let (PvKind::Exact(a), PvKind::Exact(b)) = (lhs.kind, rhs.kind) {
            return self.evaluate(a, b);
        }

        self.against_bound(lhs, rhs).unwrap_or(PvKind::Any)
    }
}

impl PaddingSimulator for CompareSimulator {
    fn op_type(&self) -> &'static str {
        match self.op {
            CmpOp::Eq => "compare_eq",
            CmpOp::Ne => "compare_ne",
            CmpOp::Lt => "compare_lt",
            CmpOp::Le => "compare_le",
            CmpOp::Gt => "compare_gt",
            CmpOp::Ge => "compare_ge",
        }
    }

    fn adjust_calc(&self, graph: &mut Graph, node: NodeId) -> Result<()> {
        let inputs = graph.inputs(node);
        let (lhs_id, rhs_id) = (inputs[0], inputs[1]);

        let lhs = graph.input_value(node, lhs_id)?;
        let rhs = graph.input_value(node, rhs_id)?;

        let result = self.calc(lhs_id == rhs_id && !lhs.overridden && !rhs.overridden, &lhs, &rhs);

        graph.consume(node, lhs.source);
        graph.consume(node, rhs.source);
        graph.set_result(node, result);
        Ok(())
    }
}

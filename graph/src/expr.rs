//! Immutable expression nodes.
//!
//! [`Expr`] nodes form a DAG through owned `Arc` children. Identity is
//! reference identity via the stable `id` field: two structurally identical
//! but separately constructed expressions are distinct nodes, and the same
//! `Arc` appearing twice is one node. There is no hash consing here on
//! purpose - the padding simulator reasons about fan-out per object.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use smallvec::SmallVec;
use tessel_dtype::{ConstValue, ScalarDType};
use tessel_shape::Dims;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Comparison operator producing a boolean/bit tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

/// Elementwise nonlinearity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnaryOp {
    Relu,
    /// Leaky ReLU with a fixed slope coefficient for the negative half.
    LeakyRelu(f64),
}

/// Reduction kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReduceOp {
    Sum,
    Prod,
    Max,
    Min,
}

/// Operation of one expression node.
#[derive(Debug, Clone)]
pub enum Op {
    /// Symbolic input tensor; its padding value is seeded by the caller.
    Placeholder { name: String },
    /// Compile-time scalar. Scalars own no padding lanes.
    Const(ConstValue),
    Cmp { op: CmpOp, lhs: Arc<Expr>, rhs: Arc<Expr> },
    /// Ternary mux on a boolean control tensor.
    Select { cond: Arc<Expr>, then_: Arc<Expr>, else_: Arc<Expr> },
    Unary { op: UnaryOp, src: Arc<Expr> },
    Reduce { op: ReduceOp, src: Arc<Expr>, axes: SmallVec<[usize; 2]> },
    Broadcast { src: Arc<Expr>, shape: Dims },
    /// A foreign operator kind with no padding simulator. Building a graph
    /// over one of these fails fast at construction time.
    Extern { op_type: String, srcs: SmallVec<[Arc<Expr>; 2]> },
}

/// Expression node in the compute DAG.
#[derive(Debug)]
pub struct Expr {
    /// Unique stable id, used for identity-based graph discovery.
    pub id: u64,
    op: Op,
    dtype: ScalarDType,
}

impl Expr {
    fn new(op: Op, dtype: ScalarDType) -> Arc<Self> {
        Arc::new(Self { id: NEXT_ID.fetch_add(1, Ordering::Relaxed), op, dtype })
    }

    pub fn placeholder(name: impl Into<String>, dtype: ScalarDType) -> Arc<Self> {
        Self::new(Op::Placeholder { name: name.into() }, dtype)
    }

    pub fn const_(dtype: ScalarDType, value: ConstValue) -> Arc<Self> {
        Self::new(Op::Const(value.cast(dtype)), dtype)
    }

    pub fn cmp(op: CmpOp, lhs: &Arc<Expr>, rhs: &Arc<Expr>) -> Arc<Self> {
        Self::new(Op::Cmp { op, lhs: lhs.clone(), rhs: rhs.clone() }, ScalarDType::Bool)
    }

    pub fn select(cond: &Arc<Expr>, then_: &Arc<Expr>, else_: &Arc<Expr>) -> Arc<Self> {
        let dtype = then_.dtype();
        Self::new(Op::Select { cond: cond.clone(), then_: then_.clone(), else_: else_.clone() }, dtype)
    }

    pub fn relu(src: &Arc<Expr>) -> Arc<Self> {
        let dtype = src.dtype();
        Self::new(Op::Unary { op: UnaryOp::Relu, src: src.clone() }, dtype)
    }

    pub fn leaky_relu(src: &Arc<Expr>, slope: f64) -> Arc<Self> {
        let dtype = src.dtype();
        Self::new(Op::Unary { op: UnaryOp::LeakyRelu(slope), src: src.clone() }, dtype)
    }

    pub fn reduce(op: ReduceOp, src: &Arc<Expr>, axes: impl IntoIterator<Item = usize>) -> Arc<Self> {
        let dtype = src.dtype();
        Self::new(Op::Reduce { op, src: src.clone(), axes: axes.into_iter().collect() }, dtype)
    }

    pub fn broadcast(src: &Arc<Expr>, shape: Dims) -> Arc<Self> {
        let dtype = src.dtype();
        Self::new(Op::Broadcast { src: src.clone(), shape }, dtype)
    }

    pub fn extern_(op_type: impl Into<String>, srcs: &[Arc<Expr>], dtype: ScalarDType) -> Arc<Self> {
        Self::new(Op::Extern { op_type: op_type.into(), srcs: srcs.iter().cloned().collect() }, dtype)
    }

    pub fn op(&self) -> &Op {
        &self.op
    }

    pub fn dtype(&self) -> ScalarDType {
        self.dtype
    }

    /// Scalar constant payload, if this node is a `Const`.
    pub fn as_scalar_const(&self) -> Option<ConstValue> {
        match self.op {
            Op::Const(v) => Some(v),
            _ => None,
        }
    }

    /// Visit each direct child.
    pub fn for_each_child(&self, mut f: impl FnMut(&Arc<Expr>)) {
        match &self.op {
            Op::Placeholder { .. } | Op::Const(_) => {}
            Op::Cmp { lhs, rhs, .. } => {
                f(lhs);
                f(rhs);
            }
            Op::Select { cond, then_, else_ } => {
                f(cond);
                f(then_);
                f(else_);
            }
            Op::Unary { src, .. } | Op::Reduce { src, .. } | Op::Broadcast { src, .. } => f(src),
            Op::Extern { srcs, .. } => srcs.iter().for_each(f),
        }
    }

    /// Topological sort of this expression's dependency graph.
    ///
    /// Returns nodes with every producer strictly before its consumers.
    /// Discovery is by stable id, so shared subtrees appear once.
    pub fn toposort(self: &Arc<Self>) -> Vec<Arc<Self>> {
        let mut visited = std::collections::HashSet::new();
        let mut result = Vec::new();
        let mut stack = vec![(self.clone(), false)];

        while let Some((node, processed)) = stack.pop() {
            if visited.contains(&node.id) {
                continue;
            }

            if processed {
                visited.insert(node.id);
                result.push(node);
            } else {
                stack.push((node.clone(), true));

                let mut children = Vec::new();
                node.for_each_child(|child| {
                    if !visited.contains(&child.id) {
                        children.push(child.clone());
                    }
                });

                for child in children.into_iter().rev() {
                    stack.push((child, false));
                }
            }
        }

        result
    }

    /// Stable operator-kind name (registry key and test identifier).
    pub fn op_type(&self) -> &'static str {
        match &self.op {
            Op::Placeholder { .. } => "placeholder",
            Op::Const(_) => "const",
            Op::Cmp { op: CmpOp::Eq, .. } => "compare_eq",
            Op::Cmp { op: CmpOp::Ne, .. } => "compare_ne",
            Op::Cmp { op: CmpOp::Lt, .. } => "compare_lt",
            Op::Cmp { op: CmpOp::Le, .. } => "compare_le",
            Op::Cmp { op: CmpOp::Gt, .. } => "compare_gt",
            Op::Cmp { op: CmpOp::Ge, .. } => "compare_ge",
            Op::Select { .. } => "select",
            Op::Unary { op: UnaryOp::Relu, .. } => "relu",
            Op::Unary { op: UnaryOp::LeakyRelu(_), .. } => "leaky_relu",
            Op::Reduce { op: ReduceOp::Sum, .. } => "reduce_sum",
            Op::Reduce { op: ReduceOp::Prod, .. } => "reduce_prod",
            Op::Reduce { op: ReduceOp::Max, .. } => "reduce_max",
            Op::Reduce { op: ReduceOp::Min, .. } => "reduce_min",
            Op::Broadcast { .. } => "broadcast",
            Op::Extern { .. } => "extern",
        }
    }
}

//! Compute DAG and padding-lane simulation.
//!
//! Hardware tiles are fixed-granularity, so a tensor's last tile usually
//! extends past its logical boundary. The lanes in that overhang still flow
//! through every downstream operator; this crate tracks what value they hold
//! at each node of a compute graph so code generation can rely on them.
//!
//! # Module Organization
//!
//! - [`expr`] - immutable expression nodes ([`Expr`], [`Op`]) with stable ids
//! - [`padding`] - [`PaddingValue`] / [`SettingValue`] data model
//! - [`graph`] - arena-backed [`Graph`] over expression roots
//! - [`simulator`] - per-operator-kind padding propagation
//! - [`error`] - error taxonomy
//!
//! The caller builds expressions, wraps the roots in a [`Graph`], seeds leaf
//! placeholders via [`Graph::set_pvalue`] / [`Graph::add_svalue`], then calls
//! [`Graph::adjust_calc`] per node in topological order and reads back
//! resolved values with [`Graph::get_pvalue`].

pub mod error;
pub mod expr;
pub mod graph;
pub mod padding;
pub mod simulator;


pub use error::{Error, Result};
pub use expr::{CmpOp, Expr, Op, ReduceOp, UnaryOp};
pub use graph::{Graph, NodeId};
pub use padding::{
    PaddingValue, PvKind, SettingValue, SvKind, new_pvalue_0, new_pvalue_1, new_pvalue_any, new_pvalue_max,
    new_pvalue_min, new_pvalue_tensor, new_pvalue_x,
};
pub use simulator::PaddingSimulator;

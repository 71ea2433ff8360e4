//! Shape algebra for dynamic-shape classification.
//!
//! Shapes here are sequences of [`Dimension`]s where each axis is either a
//! concrete size or an unknown size constrained by an inclusive runtime range.
//! A whole shape may also be of unknown rank (wire encoding `[-2]`).
//!
//! # Module Organization
//!
//! - [`dim`] - `Dim`, `Range`, `Dimension`, `Shape` and the wire codec
//! - [`broadcast`] - broadcast compatibility, n-ary unification, run fusion
//! - [`simplify`] - reduce-aware axis fusion, squeeze, axis wrapping
//! - [`error`] - shape error taxonomy

pub mod broadcast;
pub mod dim;
pub mod error;
pub mod simplify;


pub use broadcast::{broadcast_shapes, refine_shapes_for_broadcast, unify_broadcast_shapes};
pub use dim::{Dim, Dimension, Dims, Range, Shape};
pub use error::{Error, Result};
pub use simplify::{scalar2tensor_one, simplify_axis_shape, squeeze_shape, wrap_axes_to_positive};

/// Wire sentinel for an axis of unknown size but fixed rank.
pub const UNKNOWN_DIM: i64 = -1;

/// Wire sentinel for a whole shape of unknown rank (must stand alone).
pub const UNKNOWN_RANK: i64 = -2;

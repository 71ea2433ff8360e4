//! Dynamic-shape classification.
//!
//! A kernel for a dynamic-shape operator cannot be generated for every
//! possible runtime shape; instead the classifier partitions the space of
//! runtime shapes into a finite set of buckets, each tagged with a mode and a
//! split factor the code generator specializes for. At run time the generated
//! dispatch chain tries buckets in the returned order and the first
//! structural match wins, so bucket order is part of the contract.
//!
//! # Module Organization
//!
//! - [`input`] - wire-level tensor descriptors and parameter bundles
//! - [`context`] - the per-compilation compile-info side channel
//! - [`split`] - the split-family classifier
//! - [`elementwise`] - the broadcast/elementwise-family classifier
//! - [`error`] - the `errCode`/`detailed_cause` error contract

pub mod context;
pub mod elementwise;
pub mod error;
pub mod input;
pub mod split;


pub use context::{BROADCAST_SHAPE, CompileContext, CompileValue, ORI_AXIS};
pub use elementwise::classify_elementwise;
pub use error::{ClassifyError, ERR_PARAM_INVALID, Result};
pub use input::{AxisArg, Bucket, ExtraParams, Mode, OutputDesc, TensorDesc};
pub use split::classify_split;

//! The compile-info side channel.
//!
//! Classifier-chosen values the code generator reads back after
//! classification (e.g. the raw, possibly negative, user-supplied split
//! axis). One context spans one logical operator-compilation unit: the
//! caller constructs it at entry, hands it to the classifier by mutable
//! reference, reads it at exit and drops it. Overlapping compilation units
//! use distinct contexts; there is no ambient global state.

use std::collections::HashMap;

/// Key for the raw pre-wrap split axis the user supplied.
pub const ORI_AXIS: &str = "_ori_axis";

/// Key for the unified broadcast shape an elementwise classify resolved.
pub const BROADCAST_SHAPE: &str = "_broadcast_shape";

/// A value recorded in the compile-info map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileValue {
    Int(i64),
    IntList(Vec<i64>),
    Str(String),
}

impl CompileValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CompileValue::Int(v) => Some(*v),
            _ => None,
        }
    }
}

/// Per-compilation-unit compile-info map.
#[derive(Debug, Default)]
pub struct CompileContext {
    info: HashMap<String, CompileValue>,
}

impl CompileContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: CompileValue) {
        self.info.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&CompileValue> {
        self.info.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.info.is_empty()
    }
}

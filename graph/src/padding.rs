//! The padding-lane value data model.
//!
//! A [`PaddingValue`] describes what every padding lane of a tensor holds at
//! one point in the graph; a [`SettingValue`] is a consumer-local override of
//! that description. Both carry a `targets` list: the consumers that have
//! already locked in this value. Once a consumer appears in `targets`, that
//! (value, consumer) edge is immutable - re-simulation must not duplicate it.

use tessel_dtype::{ConstValue, ScalarDType};

use crate::graph::NodeId;

/// Category of a tensor's padding lanes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PvKind {
    /// Every padding lane holds the identical known scalar.
    Exact(ConstValue),
    /// Padding lanes hold data-dependent values; propagation stops here.
    Tensor,
    /// A single unconstrained symbolic value, still usable algebraically.
    Any,
}

impl PvKind {
    pub fn is_exact(&self) -> bool {
        matches!(self, PvKind::Exact(_))
    }

    pub fn as_exact(&self) -> Option<ConstValue> {
        match self {
            PvKind::Exact(v) => Some(*v),
            _ => None,
        }
    }
}

/// Resolved padding-lane description of one graph node.
#[derive(Debug, Clone, PartialEq)]
pub struct PaddingValue {
    kind: PvKind,
    dtype: ScalarDType,
    targets: Vec<NodeId>,
}

impl PaddingValue {
    pub fn new(dtype: ScalarDType, kind: PvKind) -> Self {
        Self { kind, dtype, targets: Vec::new() }
    }

    pub fn kind(&self) -> PvKind {
        self.kind
    }

    pub fn dtype(&self) -> ScalarDType {
        self.dtype
    }

    /// Consumers that have locked in this value.
    pub fn targets(&self) -> &[NodeId] {
        &self.targets
    }

    /// Record a consumer; appending the same consumer twice is a no-op.
    pub(crate) fn add_target(&mut self, consumer: NodeId) {
        if !self.targets.contains(&consumer) {
            self.targets.push(consumer);
        }
    }
}

pub fn new_pvalue_0(dtype: ScalarDType) -> PaddingValue {
    PaddingValue::new(dtype, PvKind::Exact(dtype.zero()))
}

pub fn new_pvalue_1(dtype: ScalarDType) -> PaddingValue {
    PaddingValue::new(dtype, PvKind::Exact(dtype.one()))
}

pub fn new_pvalue_x(dtype: ScalarDType, x: ConstValue) -> PaddingValue {
    PaddingValue::new(dtype, PvKind::Exact(x.cast(dtype)))
}

pub fn new_pvalue_tensor(dtype: ScalarDType) -> PaddingValue {
    PaddingValue::new(dtype, PvKind::Tensor)
}

pub fn new_pvalue_any(dtype: ScalarDType) -> PaddingValue {
    PaddingValue::new(dtype, PvKind::Any)
}

/// Padding value holding the dtype's minimum representable value.
pub fn new_pvalue_min(dtype: ScalarDType) -> PaddingValue {
    PaddingValue::new(dtype, PvKind::Exact(dtype.min_value()))
}

/// Padding value holding the dtype's maximum representable value.
pub fn new_pvalue_max(dtype: ScalarDType) -> PaddingValue {
    PaddingValue::new(dtype, PvKind::Exact(dtype.max_value()))
}

/// Kind tag of a setting value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SvKind {
    Normal,
}

/// Consumer-local override of a producer's padding-lane value.
///
/// Anchored to exactly one consumer node: only that consumer reads the
/// override instead of the producer's own [`PaddingValue`].
#[derive(Debug, Clone, PartialEq)]
pub struct SettingValue {
    kind: SvKind,
    dtype: ScalarDType,
    value: ConstValue,
    consumer: NodeId,
    targets: Vec<NodeId>,
}

impl SettingValue {
    pub fn normal(dtype: ScalarDType, value: ConstValue, consumer: NodeId) -> Self {
        Self { kind: SvKind::Normal, dtype, value: value.cast(dtype), consumer, targets: Vec::new() }
    }

    pub fn kind(&self) -> SvKind {
        self.kind
    }

    pub fn dtype(&self) -> ScalarDType {
        self.dtype
    }

    pub fn value(&self) -> ConstValue {
        self.value
    }

    /// The one consumer this override applies to.
    pub fn consumer(&self) -> NodeId {
        self.consumer
    }

    pub fn targets(&self) -> &[NodeId] {
        &self.targets
    }

    pub(crate) fn add_target(&mut self, consumer: NodeId) {
        if !self.targets.contains(&consumer) {
            self.targets.push(consumer);
        }
    }
}

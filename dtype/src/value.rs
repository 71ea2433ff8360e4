//! Tagged scalar constants.
//!
//! [`ConstValue`] is the single currency for compile-time scalars: padding-lane
//! values, reduce identities, comparison operands. Casts follow the truncating
//! cast-via-target-width semantics of hardware conversions.

use std::cmp::Ordering;

use crate::ScalarDType;

/// Largest finite value of IEEE binary16.
pub const F16_MAX: f64 = 65504.0;

/// Largest finite value of bfloat16.
pub const BF16_MAX: f64 = 3.3895313892515355e38;

/// Constant scalar value tagged with its storage class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstValue {
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

/// Cast to target width and back to the storage type (truncation/extension).
macro_rules! cast_via {
    ($v:expr, $target:ty, $storage:ty) => {
        ($v as $target) as $storage
    };
}

#[inline]
fn cast_bool(v: bool, to: ScalarDType) -> ConstValue {
    use ScalarDType::*;
    match to {
        Bool => ConstValue::Bool(v),
        Int8 | Int16 | Int32 | Int64 => ConstValue::Int(v as i64),
        UInt8 | UInt16 | UInt32 | UInt64 => ConstValue::UInt(v as u64),
        Float16 | BFloat16 | Float32 | Float64 => ConstValue::Float(v as u8 as f64),
    }
}

#[inline]
fn cast_int(v: i64, to: ScalarDType) -> ConstValue {
    use ScalarDType::*;
    match to {
        Bool => ConstValue::Bool(v != 0),
        Int8 => ConstValue::Int(cast_via!(v, i8, i64)),
        Int16 => ConstValue::Int(cast_via!(v, i16, i64)),
        Int32 => ConstValue::Int(cast_via!(v, i32, i64)),
        Int64 => ConstValue::Int(v),
        UInt8 => ConstValue::UInt(cast_via!(v, u8, u64)),
        UInt16 => ConstValue::UInt(cast_via!(v, u16, u64)),
        UInt32 => ConstValue::UInt(cast_via!(v, u32, u64)),
        UInt64 => ConstValue::UInt(v as u64),
        Float16 | BFloat16 | Float32 | Float64 => ConstValue::Float(v as f64),
    }
}

#[inline]
fn cast_uint(v: u64, to: ScalarDType) -> ConstValue {
    use ScalarDType::*;
    match to {
        Bool => ConstValue::Bool(v != 0),
        Int8 => ConstValue::Int(cast_via!(v, i8, i64)),
        Int16 => ConstValue::Int(cast_via!(v, i16, i64)),
        Int32 => ConstValue::Int(cast_via!(v, i32, i64)),
        Int64 => ConstValue::Int(v as i64),
        UInt8 => ConstValue::UInt(cast_via!(v, u8, u64)),
        UInt16 => ConstValue::UInt(cast_via!(v, u16, u64)),
        UInt32 => ConstValue::UInt(cast_via!(v, u32, u64)),
        UInt64 => ConstValue::UInt(v),
        Float16 | BFloat16 | Float32 | Float64 => ConstValue::Float(v as f64),
    }
}

#[inline]
fn cast_float(v: f64, to: ScalarDType) -> ConstValue {
    use ScalarDType::*;
    match to {
        Bool => ConstValue::Bool(v != 0.0),
        Int8 => ConstValue::Int(cast_via!(v, i8, i64)),
        Int16 => ConstValue::Int(cast_via!(v, i16, i64)),
        Int32 => ConstValue::Int(cast_via!(v, i32, i64)),
        Int64 => ConstValue::Int(v as i64),
        UInt8 => ConstValue::UInt(cast_via!(v, u8, u64)),
        UInt16 => ConstValue::UInt(cast_via!(v, u16, u64)),
        UInt32 => ConstValue::UInt(cast_via!(v, u32, u64)),
        UInt64 => ConstValue::UInt(v as u64),
        Float32 => ConstValue::Float(v as f32 as f64),
        Float16 | BFloat16 | Float64 => ConstValue::Float(v),
    }
}

impl ConstValue {
    /// Cast to the given dtype's storage class.
    pub fn cast(self, to: ScalarDType) -> ConstValue {
        match self {
            ConstValue::Bool(v) => cast_bool(v, to),
            ConstValue::Int(v) => cast_int(v, to),
            ConstValue::UInt(v) => cast_uint(v, to),
            ConstValue::Float(v) => cast_float(v, to),
        }
    }

    /// View as f64 (lossy for large 64-bit integers; fine for compare use).
    pub fn as_f64(self) -> f64 {
        match self {
            ConstValue::Int(v) => v as f64,
            ConstValue::UInt(v) => v as f64,
            ConstValue::Float(v) => v,
            ConstValue::Bool(v) => v as u8 as f64,
        }
    }

    /// Numeric comparison across storage classes.
    ///
    /// Integer-vs-integer compares exactly through i128; any float operand
    /// compares through f64. Returns None only for NaN operands.
    pub fn compare(self, other: ConstValue) -> Option<Ordering> {
        use ConstValue::*;
        match (self, other) {
            (Float(_), _) | (_, Float(_)) => self.as_f64().partial_cmp(&other.as_f64()),
            (a, b) => Some(a.as_i128().cmp(&b.as_i128())),
        }
    }

    /// Cross-variant numeric equality (0i64 == 0u64 == false).
    pub fn num_eq(self, other: ConstValue) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }

    fn as_i128(self) -> i128 {
        match self {
            ConstValue::Int(v) => v as i128,
            ConstValue::UInt(v) => v as i128,
            ConstValue::Bool(v) => v as i128,
            // Unreachable from compare(); truncating fallback otherwise.
            ConstValue::Float(v) => v as i128,
        }
    }

    pub fn is_zero(self) -> bool {
        self.num_eq(ConstValue::Int(0))
    }

    pub fn is_one(self) -> bool {
        self.num_eq(ConstValue::Int(1))
    }
}

impl From<i64> for ConstValue {
    fn from(v: i64) -> Self {
        ConstValue::Int(v)
    }
}

impl From<u64> for ConstValue {
    fn from(v: u64) -> Self {
        ConstValue::UInt(v)
    }
}

impl From<f64> for ConstValue {
    fn from(v: f64) -> Self {
        ConstValue::Float(v)
    }
}

impl From<bool> for ConstValue {
    fn from(v: bool) -> Self {
        ConstValue::Bool(v)
    }
}

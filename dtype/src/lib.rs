//! Scalar data types for the tessel compiler.
//!
//! This crate defines the scalar dtype universe shared by the shape algebra,
//! the padding simulator and the shape classifier:
//!
//! - [`ScalarDType`] - the closed set of scalar element types
//! - [`ConstValue`] - a tagged scalar constant with cast and compare helpers
//! - [`ext::HasDType`] - mapping from Rust primitives to dtypes

pub mod ext;
pub mod value;


pub use value::ConstValue;

/// Scalar data types (base numeric types).
///
/// The string representation is the wire form consumed from operator
/// descriptors (`"float32"`, `"int8"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(strum::EnumCount, strum::EnumIter, strum::VariantArray)]
#[derive(strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ScalarDType {
    Bool = 0,

    Int8 = 1,
    UInt8 = 2,
    Int16 = 3,
    UInt16 = 4,
    Int32 = 5,
    UInt32 = 6,
    Int64 = 7,
    UInt64 = 8,

    Float16 = 9,
    BFloat16 = 10,
    Float32 = 11,
    Float64 = 12,
}

impl ScalarDType {
    pub const fn bytes(&self) -> usize {
        match self {
            Self::Bool | Self::Int8 | Self::UInt8 => 1,
            Self::Int16 | Self::UInt16 | Self::Float16 | Self::BFloat16 => 2,
            Self::Int32 | Self::UInt32 | Self::Float32 => 4,
            Self::Int64 | Self::UInt64 | Self::Float64 => 8,
        }
    }

    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float16 | Self::BFloat16 | Self::Float32 | Self::Float64)
    }

    pub const fn is_signed(&self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64) || self.is_float()
    }

    pub const fn is_unsigned(&self) -> bool {
        matches!(self, Self::UInt8 | Self::UInt16 | Self::UInt32 | Self::UInt64)
    }

    pub const fn is_int(&self) -> bool {
        self.is_unsigned() || matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    /// Smallest representable value of this dtype.
    ///
    /// Used as the reduce identity for MAX and by `new_pvalue_min`.
    pub fn min_value(&self) -> ConstValue {
        match self {
            Self::Bool => ConstValue::Bool(false),
            Self::Int8 => ConstValue::Int(i8::MIN as i64),
            Self::Int16 => ConstValue::Int(i16::MIN as i64),
            Self::Int32 => ConstValue::Int(i32::MIN as i64),
            Self::Int64 => ConstValue::Int(i64::MIN),
            Self::UInt8 | Self::UInt16 | Self::UInt32 | Self::UInt64 => ConstValue::UInt(0),
            Self::Float16 => ConstValue::Float(-value::F16_MAX),
            Self::BFloat16 => ConstValue::Float(-value::BF16_MAX),
            Self::Float32 => ConstValue::Float(f32::MIN as f64),
            Self::Float64 => ConstValue::Float(f64::MIN),
        }
    }

    /// Largest representable value of this dtype.
    ///
    /// Used as the reduce identity for MIN and by `new_pvalue_max`.
    pub fn max_value(&self) -> ConstValue {
        match self {
            Self::Bool => ConstValue::Bool(true),
            Self::Int8 => ConstValue::Int(i8::MAX as i64),
            Self::Int16 => ConstValue::Int(i16::MAX as i64),
            Self::Int32 => ConstValue::Int(i32::MAX as i64),
            Self::Int64 => ConstValue::Int(i64::MAX),
            Self::UInt8 => ConstValue::UInt(u8::MAX as u64),
            Self::UInt16 => ConstValue::UInt(u16::MAX as u64),
            Self::UInt32 => ConstValue::UInt(u32::MAX as u64),
            Self::UInt64 => ConstValue::UInt(u64::MAX),
            Self::Float16 => ConstValue::Float(value::F16_MAX),
            Self::BFloat16 => ConstValue::Float(value::BF16_MAX),
            Self::Float32 => ConstValue::Float(f32::MAX as f64),
            Self::Float64 => ConstValue::Float(f64::MAX),
        }
    }

    /// The zero constant of this dtype.
    pub fn zero(&self) -> ConstValue {
        match self {
            Self::Bool => ConstValue::Bool(false),
            _ if self.is_unsigned() => ConstValue::UInt(0),
            _ if self.is_float() => ConstValue::Float(0.0),
            _ => ConstValue::Int(0),
        }
    }

    /// The one constant of this dtype.
    pub fn one(&self) -> ConstValue {
        match self {
            Self::Bool => ConstValue::Bool(true),
            _ if self.is_unsigned() => ConstValue::UInt(1),
            _ if self.is_float() => ConstValue::Float(1.0),
            _ => ConstValue::Int(1),
        }
    }
}

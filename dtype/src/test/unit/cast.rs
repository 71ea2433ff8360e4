//! ConstValue cast and comparison tests.

use std::cmp::Ordering;

use test_case::test_case;

use crate::{ConstValue, ScalarDType};

#[test_case(ConstValue::Int(300), ScalarDType::Int8, ConstValue::Int(44); "int truncates to i8")]
#[test_case(ConstValue::Int(-1), ScalarDType::UInt8, ConstValue::UInt(255); "negative wraps to u8")]
#[test_case(ConstValue::Float(1.5), ScalarDType::Int32, ConstValue::Int(1); "float truncates toward zero")]
#[test_case(ConstValue::Bool(true), ScalarDType::Float32, ConstValue::Float(1.0); "bool widens to float")]
#[test_case(ConstValue::UInt(7), ScalarDType::Bool, ConstValue::Bool(true); "nonzero uint is true")]
fn test_cast(from: ConstValue, to: ScalarDType, expected: ConstValue) {
    assert_eq!(from.cast(to), expected);
}

#[test]
fn test_cast_float32_rounds_through_f32() {
    let v = ConstValue::Float(1.0000000001).cast(ScalarDType::Float32);
    assert_eq!(v, ConstValue::Float(1.0));
}

#[test]
fn test_compare_cross_variant() {
    assert!(ConstValue::Int(0).num_eq(ConstValue::UInt(0)));
    assert!(ConstValue::Int(0).num_eq(ConstValue::Bool(false)));
    assert!(ConstValue::Float(1.0).num_eq(ConstValue::Int(1)));
    assert_eq!(ConstValue::Int(-1).compare(ConstValue::UInt(0)), Some(Ordering::Less));
    assert_eq!(ConstValue::Float(f64::NAN).compare(ConstValue::Int(0)), None);
}

#[test]
fn test_compare_large_integers_exact() {
    // Beyond f64's 53-bit mantissa, integer compares must stay exact.
    let a = ConstValue::Int(i64::MAX);
    let b = ConstValue::UInt(i64::MAX as u64 - 1);
    assert_eq!(a.compare(b), Some(Ordering::Greater));
}

#[test]
fn test_zero_one_predicates() {
    assert!(ConstValue::Float(0.0).is_zero());
    assert!(ConstValue::UInt(1).is_one());
    assert!(!ConstValue::Int(2).is_one());
}

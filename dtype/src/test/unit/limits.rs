//! Numeric limit and wire-name tests.

use std::str::FromStr;

use strum::IntoEnumIterator;
use test_case::test_case;

use crate::{ConstValue, ScalarDType};

#[test_case(ScalarDType::Int8, ConstValue::Int(-128), ConstValue::Int(127))]
#[test_case(ScalarDType::UInt16, ConstValue::UInt(0), ConstValue::UInt(65535))]
#[test_case(ScalarDType::Float16, ConstValue::Float(-65504.0), ConstValue::Float(65504.0))]
#[test_case(ScalarDType::Bool, ConstValue::Bool(false), ConstValue::Bool(true))]
fn test_limits(dtype: ScalarDType, min: ConstValue, max: ConstValue) {
    assert_eq!(dtype.min_value(), min);
    assert_eq!(dtype.max_value(), max);
}

#[test]
fn test_min_below_max_for_all_dtypes() {
    for dtype in ScalarDType::iter() {
        let (lo, hi) = (dtype.min_value(), dtype.max_value());
        assert_eq!(lo.compare(hi), Some(std::cmp::Ordering::Less), "{dtype}");
    }
}

#[test_case("float32", ScalarDType::Float32)]
#[test_case("bfloat16", ScalarDType::BFloat16)]
#[test_case("uint64", ScalarDType::UInt64)]
#[test_case("bool", ScalarDType::Bool)]
fn test_wire_names_round_trip(name: &str, dtype: ScalarDType) {
    assert_eq!(ScalarDType::from_str(name).unwrap(), dtype);
    assert_eq!(dtype.to_string(), name);
}

#[test]
fn test_zero_one_match_storage_class() {
    assert_eq!(ScalarDType::UInt32.zero(), ConstValue::UInt(0));
    assert_eq!(ScalarDType::Float64.one(), ConstValue::Float(1.0));
    assert_eq!(ScalarDType::Int16.one(), ConstValue::Int(1));
}

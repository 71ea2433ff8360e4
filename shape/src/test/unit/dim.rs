//! Dimension, range and wire-codec tests.

use smallvec::smallvec;

use crate::dim::{Dim, Dimension, Range, Shape};
use crate::error::Error;

#[test]
fn test_known_dim_carries_exact_range() {
    let d = Dimension::known(16);
    assert_eq!(d.size(), Dim::Const(16));
    assert_eq!(d.range(), Range::exact(16));
}

#[test]
fn test_unknown_dim_rejects_inverted_range() {
    assert!(matches!(Dimension::unknown(10, Some(2)), Err(Error::InvalidRange { lo: 10, hi: 2 })));
}

#[test]
fn test_range_contains_unbounded() {
    let r = Range::new(1, None);
    assert!(r.contains(1));
    assert!(r.contains(u64::MAX));
    assert!(!r.contains(0));
}

#[test]
fn test_range_mul_absorbs_unbounded() {
    let bounded = Range::new(2, Some(8));
    let unbounded = Range::new(3, None);
    assert_eq!(bounded.mul(&unbounded), Range::new(6, None));
    assert_eq!(bounded.mul(&bounded), Range::new(4, Some(64)));
}

#[test]
fn test_from_wire_mixed_axes() {
    let shape = Shape::from_wire(&[4, -1, 1], Some(&[(4, Some(4)), (2, Some(100)), (1, Some(1))])).unwrap();
    let dims = shape.dims("test").unwrap();
    assert_eq!(dims[0], Dimension::known(4));
    assert_eq!(dims[1].size(), Dim::Unknown);
    assert_eq!(dims[1].range(), Range::new(2, Some(100)));
    assert_eq!(dims[2], Dimension::one());
}

#[test]
fn test_from_wire_unknown_dim_defaults_to_open_range() {
    let shape = Shape::from_wire(&[-1], None).unwrap();
    assert_eq!(shape.dims("test").unwrap()[0].range(), Range::new(1, None));
}

#[test]
fn test_from_wire_unknown_rank_stands_alone() {
    assert_eq!(Shape::from_wire(&[-2], None).unwrap(), Shape::UnknownRank);

    let err = Shape::from_wire(&[-2, 4], None).unwrap_err();
    assert!(matches!(err, Error::UnknownRankMisuse { .. }));
}

#[test]
fn test_from_wire_rejects_other_negatives() {
    assert!(matches!(Shape::from_wire(&[3, -5], None), Err(Error::InvalidNegativeDim { value: -5 })));
}

#[test]
fn test_to_wire_round_trip() {
    let shape = Shape::from_wire(&[-1, 8, -1], None).unwrap();
    assert_eq!(shape.to_wire().as_slice(), &[-1, 8, -1]);
    assert_eq!(Shape::UnknownRank.to_wire().as_slice(), &[-2]);
}

#[test]
fn test_dims_accessor_rejects_unknown_rank() {
    let err = Shape::UnknownRank.dims("broadcast").unwrap_err();
    assert!(matches!(err, Error::UnknownRankUnsupported { operation: "broadcast" }));
}

#[test]
fn test_fuse_concrete_and_unknown() {
    let a = Dimension::known(3);
    let b = Dimension::known(4);
    assert_eq!(a.fuse(&b), Dimension::known(12));

    let u = Dimension::unknown(2, Some(5)).unwrap();
    let fused = a.fuse(&u);
    assert_eq!(fused.size(), Dim::Unknown);
    assert_eq!(fused.range(), Range::new(6, Some(15)));
}

#[test]
fn test_shape_rank() {
    let shape = Shape::Ranked(smallvec![Dimension::one(), Dimension::dynamic()]);
    assert_eq!(shape.rank(), Some(2));
    assert_eq!(Shape::UnknownRank.rank(), None);
}

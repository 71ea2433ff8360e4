//! Axis simplification tests.

use smallvec::smallvec;
use test_case::test_case;

use crate::dim::{Dimension, Dims};
use crate::error::Error;
use crate::simplify::{scalar2tensor_one, simplify_axis_shape, squeeze_shape, wrap_axes_to_positive};

fn known(sizes: &[u64]) -> Dims {
    sizes.iter().map(|&v| Dimension::known(v)).collect()
}

#[test]
fn test_simplify_fuses_around_reduce_boundary() {
    // Axes 2,3 reduced: [2,3 | 4,5 | 6] -> [6, 20, 6], reduce axis 1.
    let (fused, axes) = simplify_axis_shape(&known(&[2, 3, 4, 5, 6]), &[2, 3]).unwrap();
    assert_eq!(fused, known(&[6, 20, 6]));
    assert_eq!(axes, vec![1]);
}

#[test]
fn test_simplify_separate_reduce_runs_stay_separate() {
    let (fused, axes) = simplify_axis_shape(&known(&[2, 3, 4, 5]), &[0, 2]).unwrap();
    assert_eq!(fused, known(&[2, 3, 4, 5]));
    assert_eq!(axes, vec![0, 2]);
}

#[test]
fn test_simplify_all_reduced_collapses_to_one_axis() {
    let (fused, axes) = simplify_axis_shape(&known(&[2, 3, 4]), &[0, 1, 2]).unwrap();
    assert_eq!(fused, known(&[24]));
    assert_eq!(axes, vec![0]);
}

#[test]
fn test_simplify_empty_shape_promotes_to_one() {
    let (fused, axes) = simplify_axis_shape(&Dims::new(), &[]).unwrap();
    assert_eq!(fused, known(&[1]));
    assert!(axes.is_empty());
}

#[test]
fn test_simplify_axis_out_of_range() {
    assert!(matches!(simplify_axis_shape(&known(&[2, 3]), &[2]), Err(Error::AxisOutOfRange { axis: 2, rank: 2 })));
}

#[test]
fn test_simplify_preserves_unknown_ranges() {
    let dims: Dims = smallvec![Dimension::unknown(2, Some(4)).unwrap(), Dimension::known(3)];
    let (fused, _) = simplify_axis_shape(&dims, &[]).unwrap();
    assert_eq!(fused.len(), 1);
    assert_eq!(fused[0].range(), crate::dim::Range::new(6, Some(12)));
}

#[test_case(&[1, 1, 1], &[1]; "all units collapse to single one")]
#[test_case(&[1, 2, 1, 3], &[2, 3]; "units removed")]
#[test_case(&[4, 5], &[4, 5]; "no units untouched")]
fn test_squeeze_shape(input: &[i64], expected: &[i64]) {
    assert_eq!(squeeze_shape(input).as_slice(), expected);
}

#[test]
fn test_wrap_axes_to_positive() {
    assert_eq!(wrap_axes_to_positive(&[1, 2, -7], 10).unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_wrap_axes_out_of_range_fails() {
    assert!(matches!(wrap_axes_to_positive(&[1, 2, 100], 10), Err(Error::AxisOutOfRange { axis: 100, rank: 10 })));
    assert!(wrap_axes_to_positive(&[-11], 10).is_err());
}

#[test]
fn test_scalar2tensor_one() {
    assert_eq!(scalar2tensor_one(&[]).as_slice(), &[1]);
    assert_eq!(scalar2tensor_one(&[3, 4]).as_slice(), &[3, 4]);
}

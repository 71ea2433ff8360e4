//! Reduce-family truth tables.
//!
//! These tables are a hardware convention, pinned exactly; they are not
//! derivable from pure algebraic identity reasoning (see the PROD zero case).

use test_case::test_case;

use tessel_dtype::{ConstValue, ScalarDType};

use crate::expr::{Expr, ReduceOp};
use crate::graph::Graph;
use crate::padding::{PaddingValue, PvKind, new_pvalue_any, new_pvalue_min, new_pvalue_tensor, new_pvalue_x};
use crate::simulator::{ReduceMaxSimulator, ReduceMinSimulator, ReduceProdSimulator, ReduceSumSimulator};

const F32: ScalarDType = ScalarDType::Float32;

fn exact(v: f64) -> PaddingValue {
    new_pvalue_x(F32, ConstValue::Float(v))
}

#[test_case(true,  exact(0.0),             None; "pad exact zero needs nothing")]
#[test_case(true,  exact(3.0),             Some(ConstValue::Float(0.0)); "pad exact nonzero forced to zero")]
#[test_case(true,  new_pvalue_tensor(F32), Some(ConstValue::Float(0.0)); "pad tensor forced to zero")]
#[test_case(true,  new_pvalue_any(F32),    Some(ConstValue::Float(0.0)); "pad any forced to zero")]
#[test_case(false, exact(0.0),             None; "no pad exact zero needs nothing")]
#[test_case(false, exact(3.0),             Some(ConstValue::Float(0.0)); "no pad exact nonzero forced to zero")]
#[test_case(false, new_pvalue_tensor(F32), None; "no pad tensor left alone")]
#[test_case(false, new_pvalue_any(F32),    Some(ConstValue::Float(0.0)); "no pad any forced to zero")]
fn test_sum_do_adjust(has_pad: bool, pvalue: PaddingValue, expected: Option<ConstValue>) {
    assert_eq!(ReduceSumSimulator.do_adjust(has_pad, &pvalue), expected);
}

#[test_case(exact(0.0),             PvKind::Exact(ConstValue::Float(0.0)); "exact zero rests as zero")]
#[test_case(exact(3.0),             PvKind::Any; "exact nonzero degrades to any")]
#[test_case(new_pvalue_tensor(F32), PvKind::Tensor; "tensor stays tensor")]
#[test_case(new_pvalue_any(F32),    PvKind::Any; "any stays any")]
fn test_sum_do_calc(pvalue: PaddingValue, expected: PvKind) {
    assert_eq!(ReduceSumSimulator.do_calc(&pvalue).kind(), expected);
}

#[test_case(exact(1.0), None; "identity one needs nothing")]
#[test_case(exact(0.0), None; "zero absorbs and needs nothing")]
#[test_case(exact(2.0), Some(ConstValue::Float(1.0)); "other exact forced to one")]
#[test_case(new_pvalue_any(F32), Some(ConstValue::Float(1.0)); "any forced to one")]
fn test_prod_do_adjust_with_pad(pvalue: PaddingValue, expected: Option<ConstValue>) {
    assert_eq!(ReduceProdSimulator.do_adjust(true, &pvalue), expected);
}

#[test]
fn test_prod_do_adjust_tensor_depends_on_padding() {
    let tensor = new_pvalue_tensor(F32);
    assert_eq!(ReduceProdSimulator.do_adjust(true, &tensor), Some(ConstValue::Float(1.0)));
    assert_eq!(ReduceProdSimulator.do_adjust(false, &tensor), None);
}

#[test_case(exact(1.0), PvKind::Exact(ConstValue::Float(1.0)))]
#[test_case(exact(0.0), PvKind::Exact(ConstValue::Float(0.0)))]
#[test_case(exact(2.0), PvKind::Any)]
fn test_prod_do_calc(pvalue: PaddingValue, expected: PvKind) {
    assert_eq!(ReduceProdSimulator.do_calc(&pvalue).kind(), expected);
}

#[test]
fn test_max_do_adjust() {
    assert_eq!(ReduceMaxSimulator.do_adjust(true, &new_pvalue_min(F32)), None);
    assert_eq!(
        ReduceMaxSimulator.do_adjust(true, &new_pvalue_x(F32, ConstValue::Float(10.0))),
        Some(F32.min_value())
    );
}

#[test]
fn test_min_do_adjust() {
    let max = F32.max_value();
    assert_eq!(ReduceMinSimulator.do_adjust(true, &new_pvalue_x(F32, max)), None);
    assert_eq!(ReduceMinSimulator.do_adjust(true, &exact(10.0)), Some(max));
}

#[test]
fn test_min_max_do_calc_categories() {
    assert_eq!(ReduceMaxSimulator.do_calc(&new_pvalue_min(F32)).kind(), PvKind::Exact(F32.min_value()));
    assert_eq!(ReduceMaxSimulator.do_calc(&exact(10.0)).kind(), PvKind::Any);
    assert_eq!(ReduceMaxSimulator.do_calc(&new_pvalue_tensor(F32)).kind(), PvKind::Tensor);
    assert_eq!(ReduceMinSimulator.do_calc(&new_pvalue_any(F32)).kind(), PvKind::Any);
}

#[test]
fn test_integer_dtype_identities() {
    let i8_min = ScalarDType::Int8.min_value();
    let pv = new_pvalue_x(ScalarDType::Int8, ConstValue::Int(5));
    assert_eq!(ReduceMaxSimulator.do_adjust(true, &pv), Some(i8_min));

    let at_min = new_pvalue_min(ScalarDType::Int8);
    assert_eq!(ReduceMaxSimulator.do_adjust(true, &at_min), None);
}

#[test]
fn test_graph_level_reduce_propagation() {
    let x = Expr::placeholder("x", F32);
    let sum = Expr::reduce(ReduceOp::Sum, &x, [1]);
    let mut graph = Graph::new(&[sum.clone()]).unwrap();

    let x_id = graph.node_of(&x).unwrap();
    let sum_id = graph.node_of(&sum).unwrap();
    graph.set_pvalue(x_id, exact(0.0));
    graph.adjust_calc(sum_id).unwrap();

    assert_eq!(graph.get_pvalue(sum_id).unwrap().kind(), PvKind::Exact(ConstValue::Float(0.0)));
    assert_eq!(graph.get_pvalue(x_id).unwrap().targets(), &[sum_id]);
}

//! Elementwise nonlinearity propagation tests.

use test_case::test_case;

use tessel_dtype::{ConstValue, ScalarDType};

use crate::expr::Expr;
use crate::graph::Graph;
use crate::padding::{PaddingValue, PvKind, new_pvalue_any, new_pvalue_tensor, new_pvalue_x};

const F32: ScalarDType = ScalarDType::Float32;

fn run_relu(pv: PaddingValue) -> PvKind {
    let x = Expr::placeholder("x", F32);
    let r = Expr::relu(&x);
    let mut graph = Graph::new(&[r.clone()]).unwrap();
    let x_id = graph.node_of(&x).unwrap();
    let r_id = graph.node_of(&r).unwrap();
    graph.set_pvalue(x_id, pv);
    graph.adjust_calc(r_id).unwrap();
    graph.get_pvalue(r_id).unwrap().kind()
}

#[test_case(-3.0, 0.0; "negative clamps to zero")]
#[test_case(2.5, 2.5; "positive passes through")]
#[test_case(0.0, 0.0; "zero is fixed point")]
fn test_relu_exact(input: f64, expected: f64) {
    assert_eq!(run_relu(new_pvalue_x(F32, ConstValue::Float(input))), PvKind::Exact(ConstValue::Float(expected)));
}

#[test]
fn test_relu_preserves_category() {
    assert_eq!(run_relu(new_pvalue_tensor(F32)), PvKind::Tensor);
    assert_eq!(run_relu(new_pvalue_any(F32)), PvKind::Any);
}

#[test_case(-4.0, 0.5, -2.0; "negative scaled by slope")]
#[test_case(3.0, 0.5, 3.0; "positive untouched")]
fn test_leaky_relu_exact(input: f64, slope: f64, expected: f64) {
    let x = Expr::placeholder("x", F32);
    let r = Expr::leaky_relu(&x, slope);
    let mut graph = Graph::new(&[r.clone()]).unwrap();
    let x_id = graph.node_of(&x).unwrap();
    let r_id = graph.node_of(&r).unwrap();
    graph.set_pvalue(x_id, new_pvalue_x(F32, ConstValue::Float(input)));
    graph.adjust_calc(r_id).unwrap();

    assert_eq!(graph.get_pvalue(r_id).unwrap().kind(), PvKind::Exact(ConstValue::Float(expected)));
}

#[test]
fn test_relu_int_dtype_uses_int_zero() {
    let x = Expr::placeholder("x", ScalarDType::Int32);
    let r = Expr::relu(&x);
    let mut graph = Graph::new(&[r.clone()]).unwrap();
    let x_id = graph.node_of(&x).unwrap();
    let r_id = graph.node_of(&r).unwrap();
    graph.set_pvalue(x_id, new_pvalue_x(ScalarDType::Int32, ConstValue::Int(-7)));
    graph.adjust_calc(r_id).unwrap();

    assert_eq!(graph.get_pvalue(r_id).unwrap().kind(), PvKind::Exact(ConstValue::Int(0)));
}

#[test]
fn test_chain_propagates_through_broadcast() {
    use smallvec::smallvec;
    use tessel_shape::Dimension;

    let x = Expr::placeholder("x", F32);
    let b = Expr::broadcast(&x, smallvec![Dimension::known(4), Dimension::known(16)]);
    let r = Expr::relu(&b);
    let mut graph = Graph::new(&[r.clone()]).unwrap();

    let x_id = graph.node_of(&x).unwrap();
    graph.set_pvalue(x_id, new_pvalue_x(F32, ConstValue::Float(-1.0)));
    for id in graph.get_nodes() {
        graph.adjust_calc(id).unwrap();
    }

    let r_id = graph.node_of(&r).unwrap();
    assert_eq!(graph.get_pvalue(r_id).unwrap().kind(), PvKind::Exact(ConstValue::Float(0.0)));
}

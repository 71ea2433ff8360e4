//! Compile-info context tests.

use crate::context::{CompileContext, CompileValue, ORI_AXIS};

#[test]
fn test_set_then_get() {
    let mut ctx = CompileContext::new();
    assert!(ctx.is_empty());
    ctx.set(ORI_AXIS, CompileValue::Int(-1));
    assert_eq!(ctx.get(ORI_AXIS), Some(&CompileValue::Int(-1)));
    assert!(!ctx.is_empty());
}

#[test]
fn test_set_overwrites() {
    let mut ctx = CompileContext::new();
    ctx.set(ORI_AXIS, CompileValue::Int(1));
    ctx.set(ORI_AXIS, CompileValue::Int(2));
    assert_eq!(ctx.get(ORI_AXIS).and_then(CompileValue::as_int), Some(2));
}

#[test]
fn test_as_int_rejects_other_variants() {
    assert_eq!(CompileValue::Str("x".into()).as_int(), None);
    assert_eq!(CompileValue::IntList(vec![1]).as_int(), None);
}

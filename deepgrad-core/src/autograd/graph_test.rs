use super::*;
use crate::value::Value;

#[test]
fn test_topological_sort_orders_operands_first() {
    let a = Value::new(2.0);
    let b = Value::new(3.0);
    let c = &a * &b;
    let d = &c + &a;
    let order = topological_sort(d.as_tensor());

    let pos = |t: &Tensor| order.iter().position(|n| n.ptr_eq(t)).unwrap();
    assert_eq!(order.len(), 4);
    assert!(pos(a.as_tensor()) < pos(c.as_tensor()));
    assert!(pos(b.as_tensor()) < pos(c.as_tensor()));
    assert!(pos(c.as_tensor()) < pos(d.as_tensor()));
    assert!(order.last().unwrap().ptr_eq(d.as_tensor()));
}

#[test]
fn test_topological_sort_visits_shared_nodes_once() {
    let x = Value::new(1.0);
    let mut y = x.clone();
    for _ in 0..10 {
        y = &y * &x;
    }
    let order = topological_sort(y.as_tensor());
    let x_count = order.iter().filter(|n| n.ptr_eq(x.as_tensor())).count();
    assert_eq!(x_count, 1);
    assert_eq!(order.len(), 11);
}

#[test]
fn test_deep_chain_does_not_overflow() -> Result<(), DeepGradError> {
    let x = Value::new(0.5);
    let mut y = x.clone();
    for _ in 0..20_000 {
        y = &y + 0.0;
    }
    y.backward()?;
    assert_eq!(x.grad(), 1.0);
    Ok(())
}

#[test]
fn test_intermediate_grads_are_stored() -> Result<(), DeepGradError> {
    let a = Value::new(2.0);
    let b = &a * 3.0;
    let c = &b * &b;
    c.backward()?;
    assert_eq!(b.grad(), 12.0);
    assert_eq!(a.grad(), 36.0);
    Ok(())
}

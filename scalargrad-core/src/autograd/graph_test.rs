use super::*;
use std::collections::HashMap;

fn position_map(order: &[Scalar]) -> HashMap<NodeId, usize> {
    order
        .iter()
        .enumerate()
        .map(|(i, node)| (node.node_id(), i))
        .collect()
}

#[test]
fn test_topological_sort_leaf() {
    let a = Scalar::new(1.0);
    let order = topological_sort(&a);
    assert_eq!(order.len(), 1);
    assert!(order[0].ptr_eq(&a));
}

#[test]
fn test_topological_sort_operands_before_consumers() {
    let a = Scalar::new(2.0);
    let b = Scalar::new(-3.0);
    let c = Scalar::new(10.0);
    let e = &a * &b;
    let d = &e + &c;
    let f = Scalar::new(-2.0);
    let l = &d * &f;

    let order = topological_sort(&l);
    assert_eq!(order.len(), 7);
    assert!(order.last().unwrap().ptr_eq(&l));

    let pos = position_map(&order);
    for node in &order {
        for operand in node.operands() {
            assert!(pos[&operand.node_id()] < pos[&node.node_id()]);
        }
    }
}

#[test]
fn test_topological_sort_deduplicates_shared_operands() {
    let a = Scalar::new(3.0);
    let b = &a + &a;
    let c = &b * &a;
    let order = topological_sort(&c);
    // a, b, c: `a` is referenced three times but listed once.
    assert_eq!(order.len(), 3);
    assert!(order[0].ptr_eq(&a));
    assert!(order[1].ptr_eq(&b));
    assert!(order[2].ptr_eq(&c));
}

#[test]
fn test_topological_sort_distinguishes_equal_values() {
    let a = Scalar::new(1.0);
    let b = Scalar::new(1.0);
    let c = &a + &b;
    assert_eq!(topological_sort(&c).len(), 3);
}

#[test]
fn test_topological_sort_diamond() {
    // a feeds both b and c, which both feed d.
    let a = Scalar::new(0.5);
    let b = a.exp();
    let c = a.tanh();
    let d = &b * &c;
    let order = topological_sort(&d);
    assert_eq!(order.len(), 4);
    let pos = position_map(&order);
    assert!(pos[&a.node_id()] < pos[&b.node_id()]);
    assert!(pos[&a.node_id()] < pos[&c.node_id()]);
    assert!(pos[&b.node_id()] < pos[&d.node_id()]);
    assert!(pos[&c.node_id()] < pos[&d.node_id()]);
}

#[test]
fn test_trace_nodes_and_edges() {
    let a = Scalar::with_label(2.0, "a");
    let b = Scalar::with_label(-3.0, "b");
    let e = &a * &b;
    e.set_label("e");
    let (nodes, edges) = trace(&e);
    assert_eq!(nodes.len(), 3);
    assert_eq!(edges.len(), 2);
    for (operand, consumer) in &edges {
        assert!(consumer.ptr_eq(&e));
        assert!(operand.ptr_eq(&a) || operand.ptr_eq(&b));
    }
}

#[test]
fn test_trace_does_not_touch_gradients() {
    let a = Scalar::new(2.0);
    let b = &a * 4.0;
    b.backward().unwrap();
    let before: Vec<f64> = topological_sort(&b).iter().map(|n| n.grad()).collect();
    let (nodes, _) = trace(&b);
    let after: Vec<f64> = nodes.iter().map(|n| n.grad()).collect();
    assert_eq!(before, after);
}

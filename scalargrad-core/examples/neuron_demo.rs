//! Walks through two small graphs and prints every node's value and gradient:
//! the expression `L = (a*b + c) * f`, and a single tanh neuron.
//!
//! `cargo run --example neuron_demo`

use scalargrad_core::autograd::trace;
use scalargrad_core::nn::Neuron;
use scalargrad_core::{Scalar, ScalarGradError};

fn print_graph(root: &Scalar) {
    let (nodes, edges) = trace(root);
    for node in &nodes {
        let op = node.op().map(|op| op.to_string()).unwrap_or_default();
        println!(
            "  {:>3} {:<4} data {:>9.4} | grad {:>9.4}",
            node.label(),
            op,
            node.value(),
            node.grad()
        );
    }
    println!("  ({} nodes, {} edges)", nodes.len(), edges.len());
}

fn expression() -> Result<(), ScalarGradError> {
    let a = Scalar::with_label(2.0, "a");
    let b = Scalar::with_label(-3.0, "b");
    let c = Scalar::with_label(10.0, "c");
    let e = &a * &b;
    e.set_label("e");
    let d = &e + &c;
    d.set_label("d");
    let f = Scalar::with_label(-2.0, "f");
    let l = &d * &f;
    l.set_label("L");

    l.backward()?;
    println!("L = (a*b + c) * f = {}", l);
    print_graph(&l);
    Ok(())
}

fn neuron() -> Result<(), ScalarGradError> {
    let neuron = Neuron::from_values(&[-3.0, 1.0], 6.8813735870195432);
    let inputs = [Scalar::with_label(2.0, "x1"), Scalar::with_label(0.0, "x2")];
    let n = neuron.pre_activation(&inputs)?;
    n.set_label("n");
    let o = n.tanh();
    o.set_label("o");

    o.backward()?;
    println!("\no = tanh(n) = {}", o);
    println!("  1 - o^2 = {:.6}, n.grad = {:.6}", 1.0 - o.value().powi(2), n.grad());
    print_graph(&o);
    Ok(())
}

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();
    expression()?;
    neuron()
}

use crate::autograd::OpTag;
use crate::scalar::Scalar;
use std::rc::Rc;

/// The shared state behind a [`Scalar`] handle.
///
/// A `ScalarData` is created once per graph node and is never rebuilt. Only `grad`
/// changes during a backward pass, and `value` is rewritten only when an optimizer
/// updates a parameter between iterations.
#[derive(Debug)]
pub struct ScalarData {
    /// Forward value of the node.
    pub value: f64,
    /// Accumulated gradient of the last backward root with respect to this node.
    pub grad: f64,
    /// The rule that produced this node, `None` for leaves.
    pub op: Option<OpTag>,
    /// Nodes this one was computed from, in operand order.
    pub operands: Vec<Scalar>,
    /// Human-readable tag, only consumed by graph visualizers.
    pub label: String,
}

impl ScalarData {
    pub(crate) fn leaf(value: f64) -> Self {
        ScalarData {
            value,
            grad: 0.0,
            op: None,
            operands: Vec::new(),
            label: String::new(),
        }
    }

    pub(crate) fn from_op(value: f64, op: OpTag, operands: Vec<Scalar>) -> Self {
        ScalarData {
            value,
            grad: 0.0,
            op: Some(op),
            operands,
            label: String::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.op.is_none()
    }
}

// Dropping a long chain of nodes would otherwise recurse once per level.
impl Drop for ScalarData {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.operands);
        while let Some(node) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(node.data) {
                let mut inner = cell.into_inner();
                pending.append(&mut inner.operands);
            }
        }
    }
}

use crate::autograd::OpTag;
use crate::scalar_data::ScalarData;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

pub mod autograd_methods;
pub mod math_methods;
pub mod ops_impls;

/// Stable identity of a graph node, used to deduplicate nodes during traversal.
///
/// Two distinct nodes may hold the same value, so traversal never compares values.
pub type NodeId = *const RefCell<ScalarData>;

/// A handle to a node in the scalar computation graph.
///
/// Cloning a `Scalar` is cheap and yields another handle to the *same* node: the
/// underlying [`ScalarData`] is reference counted, so a node stays alive as long as any
/// consumer still lists it as an operand.
///
/// Leaves are created with [`Scalar::new`]. Interior nodes are created by the operations
/// in [`crate::ops`] (or the `std::ops` operators on `&Scalar`), each of which allocates a
/// fresh node and records how to push its gradient back into its operands.
#[derive(Clone)]
pub struct Scalar {
    pub(crate) data: Rc<RefCell<ScalarData>>,
}

impl Scalar {
    /// Creates a leaf node (no operands) with a zero gradient.
    pub fn new(value: f64) -> Self {
        Scalar {
            data: Rc::new(RefCell::new(ScalarData::leaf(value))),
        }
    }

    /// Creates a labelled leaf node.
    pub fn with_label(value: f64, label: impl Into<String>) -> Self {
        let scalar = Scalar::new(value);
        scalar.set_label(label);
        scalar
    }

    /// Creates the output node of an operation.
    pub(crate) fn from_op(value: f64, op: OpTag, operands: Vec<Scalar>) -> Self {
        Scalar {
            data: Rc::new(RefCell::new(ScalarData::from_op(value, op, operands))),
        }
    }

    pub(crate) fn read_data(&self) -> Ref<'_, ScalarData> {
        self.data.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, ScalarData> {
        self.data.borrow_mut()
    }

    /// Returns the forward value of this node.
    pub fn value(&self) -> f64 {
        self.read_data().value
    }

    /// Returns the gradient accumulated into this node by previous backward passes.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Returns the operation that produced this node, or `None` for a leaf.
    pub fn op(&self) -> Option<OpTag> {
        self.read_data().op
    }

    /// Returns handles to the operands of this node, in operand order.
    pub fn operands(&self) -> Vec<Scalar> {
        self.read_data().operands.clone()
    }

    pub fn label(&self) -> String {
        self.read_data().label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = label.into();
    }

    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }

    /// Returns the identity of the node behind this handle.
    pub fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// Returns `true` if both handles point at the same node.
    pub fn ptr_eq(&self, other: &Scalar) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    /// Resets the gradient accumulator to `0.0`.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    /// Adds `delta` into the gradient accumulator.
    pub(crate) fn acc_grad(&self, delta: f64) {
        self.write_data().grad += delta;
    }

    pub(crate) fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Overwrites the forward value. Reserved for parameter updates.
    pub(crate) fn set_value(&self, value: f64) {
        self.write_data().value = value;
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={})", self.value())
    }
}

// Operands are summarized by count so that formatting never walks the graph.
impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.read_data();
        f.debug_struct("Scalar")
            .field("value", &data.value)
            .field("grad", &data.grad)
            .field("op", &data.op)
            .field("operands", &data.operands.len())
            .field("label", &data.label)
            .finish()
    }
}

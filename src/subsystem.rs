
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// Index of a resource inside the scheduler that registered it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(pub usize);

/// A resource owning one or more actuator groups.
///
/// Behaviors stage output on it during a tick; the scheduler then calls
/// `periodic` and `commit`, once each, after every behavior has executed.
pub trait Subsystem {
    fn periodic(&mut self) {}

    /// Writes the staged output to the actuators.
    fn commit(&mut self);
}

/// Typed, shared access to a registered subsystem.
pub struct Handle<S> {
    id: ResourceId,
    inner: Rc<RefCell<S>>,
}

impl<S> Handle<S> {
    pub(crate) fn new(id: ResourceId, inner: Rc<RefCell<S>>) -> Handle<S> {
        Handle {
            id: id,
            inner: inner,
        }
    }

    pub fn id(&self) -> ResourceId {
        self.id
    }

    pub fn borrow(&self) -> Ref<S> {
        self.inner.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<S> {
        self.inner.borrow_mut()
    }
}

impl<S> Clone for Handle<S> {
    fn clone(&self) -> Handle<S> {
        Handle {
            id: self.id,
            inner: self.inner.clone(),
        }
    }
}


//! In-memory stand-ins for the gamepad and the motor controllers.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use actuator::Actuator;
use input::{AxisId, ButtonId, InputSource};

/// A gamepad whose state is set by hand.
pub struct MockInput {
    axes: RefCell<HashMap<AxisId, f64>>,
    buttons: RefCell<HashMap<ButtonId, bool>>,
}

impl MockInput {
    pub fn new() -> MockInput {
        MockInput {
            axes: RefCell::new(HashMap::new()),
            buttons: RefCell::new(HashMap::new()),
        }
    }

    pub fn set_axis(&self, axis: AxisId, value: f64) {
        self.axes.borrow_mut().insert(axis, value);
    }

    pub fn set_button(&self, button: ButtonId, pressed: bool) {
        self.buttons.borrow_mut().insert(button, pressed);
    }
}

impl InputSource for MockInput {
    fn axis(&self, axis: AxisId) -> f64 {
        self.axes.borrow().get(&axis).cloned().unwrap_or(0.0)
    }

    fn button(&self, button: ButtonId) -> bool {
        self.buttons.borrow().get(&button).cloned().unwrap_or(false)
    }
}

/// Records every output it is given. Clones share the same history.
#[derive(Clone)]
pub struct MockActuator {
    history: Rc<RefCell<Vec<f64>>>,
}

impl MockActuator {
    pub fn new() -> MockActuator {
        MockActuator { history: Rc::new(RefCell::new(vec![])) }
    }

    pub fn history(&self) -> Vec<f64> {
        self.history.borrow().clone()
    }

    pub fn last(&self) -> Option<f64> {
        self.history.borrow().last().cloned()
    }
}

impl Actuator for MockActuator {
    fn set_output(&mut self, value: f64) {
        self.history.borrow_mut().push(value);
    }
}

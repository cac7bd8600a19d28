
use std::rc::Rc;

use actuator::clamp;

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisId {
    LeftStickX,
    LeftStickY,
    RightStickX,
    RightStickY,
    LeftTrigger,
    RightTrigger,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonId {
    South,
    East,
    North,
    West,
    LeftBumper,
    RightBumper,
    Select,
    Start,
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
}

/// The operator's input device. Reads are fresh every call.
pub trait InputSource {
    fn axis(&self, axis: AxisId) -> f64;
    fn button(&self, button: ButtonId) -> bool;
}

/// A continuous value sampled by a behavior every tick.
pub trait DoubleSource {
    fn read(&self) -> f64;
}

/// A boolean level sampled by a trigger every tick.
pub trait BoolSource {
    fn read(&self) -> bool;
}

impl DoubleSource for f64 {
    fn read(&self) -> f64 {
        *self
    }
}

impl BoolSource for bool {
    fn read(&self) -> bool {
        *self
    }
}

pub struct AxisReader {
    input: Rc<InputSource>,
    axis: AxisId,
}

impl AxisReader {
    pub fn new(input: Rc<InputSource>, axis: AxisId) -> AxisReader {
        AxisReader {
            input: input,
            axis: axis,
        }
    }
}

impl DoubleSource for AxisReader {
    fn read(&self) -> f64 {
        clamp(self.input.axis(self.axis), -1.0, 1.0)
    }
}

pub struct ButtonReader {
    input: Rc<InputSource>,
    button: ButtonId,
}

impl ButtonReader {
    pub fn new(input: Rc<InputSource>, button: ButtonId) -> ButtonReader {
        ButtonReader {
            input: input,
            button: button,
        }
    }
}

impl BoolSource for ButtonReader {
    fn read(&self) -> bool {
        self.input.button(self.button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock::MockInput;

    #[test]
    fn readers_follow_the_device() {
        let input = Rc::new(MockInput::new());
        let axis = AxisReader::new(input.clone(), AxisId::LeftStickY);
        let button = ButtonReader::new(input.clone(), ButtonId::South);

        assert_eq!(axis.read(), 0.0);
        assert!(!button.read());

        input.set_axis(AxisId::LeftStickY, -0.5);
        input.set_button(ButtonId::South, true);
        assert_eq!(axis.read(), -0.5);
        assert!(button.read());
    }

    #[test]
    fn axis_reader_clamps() {
        let input = Rc::new(MockInput::new());
        input.set_axis(AxisId::RightStickX, 1.7);
        assert_eq!(AxisReader::new(input, AxisId::RightStickX).read(), 1.0);
    }

    #[test]
    fn axis_reader_zeroes_nan() {
        let input = Rc::new(MockInput::new());
        input.set_axis(AxisId::LeftStickY, ::std::f64::NAN);
        assert_eq!(AxisReader::new(input, AxisId::LeftStickY).read(), 0.0);
    }
}

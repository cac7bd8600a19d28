
use std::cell::RefCell;

use gilrs::{self, Gilrs};

use errors::*;
use input::{AxisId, ButtonId, InputSource};

/// The first connected gamepad, read through gilrs.
pub struct GamepadInput {
    gilrs: RefCell<Gilrs>,
}

impl GamepadInput {
    pub fn new() -> Result<GamepadInput> {
        let gilrs = Gilrs::new().map_err(|e| ErrorKind::Gamepad(e.to_string()))?;
        Ok(GamepadInput { gilrs: RefCell::new(gilrs) })
    }

    /// Drains pending events so the cached state is current. Returns whether a
    /// gamepad is connected.
    pub fn refresh(&self) -> bool {
        let mut gilrs = self.gilrs.borrow_mut();
        while let Some(_event) = gilrs.next_event() {}
        let connected = gilrs.gamepads().next().is_some();
        connected
    }

    pub fn name(&self) -> Option<String> {
        self.gilrs.borrow().gamepads().next().map(|(_id, gamepad)| gamepad.name().to_owned())
    }
}

fn button(id: ButtonId) -> gilrs::Button {
    use gilrs::Button;
    match id {
        ButtonId::South => Button::South,
        ButtonId::East => Button::East,
        ButtonId::North => Button::North,
        ButtonId::West => Button::West,
        ButtonId::LeftBumper => Button::LeftTrigger,
        ButtonId::RightBumper => Button::RightTrigger,
        ButtonId::Select => Button::Select,
        ButtonId::Start => Button::Start,
        ButtonId::DPadUp => Button::DPadUp,
        ButtonId::DPadDown => Button::DPadDown,
        ButtonId::DPadLeft => Button::DPadLeft,
        ButtonId::DPadRight => Button::DPadRight,
    }
}

impl InputSource for GamepadInput {
    fn axis(&self, axis: AxisId) -> f64 {
        use gilrs::{Axis, Button};
        let gilrs = self.gilrs.borrow();
        let gamepad = match gilrs.gamepads().next() {
            Some((_id, gamepad)) => gamepad,
            None => return 0.0,
        };
        let value = match axis {
            AxisId::LeftStickX => gamepad.value(Axis::LeftStickX),
            AxisId::LeftStickY => gamepad.value(Axis::LeftStickY),
            AxisId::RightStickX => gamepad.value(Axis::RightStickX),
            AxisId::RightStickY => gamepad.value(Axis::RightStickY),
            AxisId::LeftTrigger => {
                gamepad.button_data(Button::LeftTrigger2).map(|data| data.value()).unwrap_or(0.0)
            }
            AxisId::RightTrigger => {
                gamepad.button_data(Button::RightTrigger2).map(|data| data.value()).unwrap_or(0.0)
            }
        };
        value as f64
    }

    fn button(&self, id: ButtonId) -> bool {
        let gilrs = self.gilrs.borrow();
        let pressed = match gilrs.gamepads().next() {
            Some((_id, gamepad)) => gamepad.is_pressed(button(id)),
            None => false,
        };
        pressed
    }
}

//! Arcade-style mixing for a differential drivetrain.

use vecmath;

use actuator::clamp;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelSpeeds {
    pub left: f64,
    pub right: f64,
}

impl WheelSpeeds {
    pub fn zero() -> WheelSpeeds {
        WheelSpeeds { left: 0.0, right: 0.0 }
    }
}

/// Maps (forward, rotation) to per-side outputs.
///
/// When either side saturates both are divided by the larger magnitude, so the
/// ratio between the sides (and with it the turning radius) is kept.
pub fn arcade(forward: f64, rotation: f64) -> WheelSpeeds {
    let forward = clamp(forward, -1.0, 1.0);
    let rotation = clamp(rotation, -1.0, 1.0);

    let raw = vecmath::vec2_add([forward, forward], [rotation, -rotation]);
    let max = raw[0].abs().max(raw[1].abs());
    if max > 1.0 {
        WheelSpeeds {
            left: raw[0] / max,
            right: raw[1] / max,
        }
    } else {
        WheelSpeeds {
            left: raw[0],
            right: raw[1],
        }
    }
}

/// Squares an input while keeping its sign.
pub fn square(value: f64) -> f64 {
    value * value.abs()
}

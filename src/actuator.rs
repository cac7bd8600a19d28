
use slog::Logger;

/// A single motor controller output.
///
/// Writes are fire-and-forget; faults are the driver's business.
pub trait Actuator {
    fn set_output(&mut self, value: f64);
}

/// Clamps into `[low, high]`. NaN and infinities become 0.0.
pub fn clamp(val: f64, low: f64, high: f64) -> f64 {
    match val {
        val if !val.is_finite() => 0.0,
        val if val < low => low,
        val if val > high => high,
        _ => val,
    }
}

/// Several actuators driven as one logical output.
pub struct ActuatorGroup {
    members: Vec<(Box<Actuator>, f64)>,
}

impl ActuatorGroup {
    pub fn new() -> ActuatorGroup {
        ActuatorGroup { members: vec![] }
    }

    pub fn with<A: Actuator + 'static>(mut self, actuator: A, inverted: bool) -> ActuatorGroup {
        self.push(Box::new(actuator), inverted);
        self
    }

    pub fn push(&mut self, actuator: Box<Actuator>, inverted: bool) {
        let sign = if inverted { -1.0 } else { 1.0 };
        self.members.push((actuator, sign));
    }

    /// Fans `value` out to every member, each with its own sign.
    pub fn set_output(&mut self, value: f64) {
        for &mut (ref mut actuator, sign) in self.members.iter_mut() {
            actuator.set_output(clamp(sign * value, -1.0, 1.0));
        }
    }
}

/// Actuator that only reports what it would have driven.
pub struct LogActuator {
    channel: u8,
    last: Option<f64>,
    logger: Logger,
}

impl LogActuator {
    pub fn new(channel: u8, logger: Logger) -> LogActuator {
        LogActuator {
            channel: channel,
            last: None,
            logger: logger,
        }
    }
}

impl Actuator for LogActuator {
    fn set_output(&mut self, value: f64) {
        if self.last != Some(value) {
            trace!(self.logger, "output"; "channel" => self.channel, "value" => value);
            self.last = Some(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock::MockActuator;

    #[test]
    fn group_applies_member_sign() {
        let a = MockActuator::new();
        let b = MockActuator::new();
        let mut group = ActuatorGroup::new().with(a.clone(), false).with(b.clone(), true);

        group.set_output(0.4);
        group.set_output(-0.25);

        assert_eq!(a.history(), vec![0.4, -0.25]);
        assert_eq!(b.history(), vec![-0.4, 0.25]);
    }

    #[test]
    fn group_clamps_each_member() {
        let a = MockActuator::new();
        let mut group = ActuatorGroup::new().with(a.clone(), true);
        group.set_output(-3.0);
        assert_eq!(a.last(), Some(1.0));
    }

    #[test]
    fn non_finite_output_becomes_zero() {
        let a = MockActuator::new();
        let mut group = ActuatorGroup::new().with(a.clone(), false);
        group.set_output(::std::f64::NAN);
        group.set_output(::std::f64::INFINITY);
        assert_eq!(a.history(), vec![0.0, 0.0]);
    }

    #[test]
    fn empty_group_is_a_no_op() {
        let mut group = ActuatorGroup::new();
        group.set_output(1.0);
    }
}


use actuator::ActuatorGroup;
use behavior::{Action, Behavior, Instant};
use input::DoubleSource;
use kinematics::{self, WheelSpeeds};
use subsystem::{Handle, Subsystem};

/// Differential drivetrain: a left and a right actuator group.
pub struct Drive {
    left: ActuatorGroup,
    right: ActuatorGroup,
    square_inputs: bool,
    staged: WheelSpeeds,
}

impl Drive {
    pub fn new(left: ActuatorGroup, right: ActuatorGroup, square_inputs: bool) -> Drive {
        Drive {
            left: left,
            right: right,
            square_inputs: square_inputs,
            staged: WheelSpeeds::zero(),
        }
    }

    pub fn arcade_drive(&mut self, forward: f64, rotation: f64) {
        let (forward, rotation) = if self.square_inputs {
            (kinematics::square(forward), kinematics::square(rotation))
        } else {
            (forward, rotation)
        };
        let speeds = kinematics::arcade(forward, rotation);
        // The right side is mounted mirrored.
        self.staged = WheelSpeeds {
            left: speeds.left,
            right: -speeds.right,
        };
    }

    pub fn stop(&mut self) {
        self.staged = WheelSpeeds::zero();
    }

    /// Output that will be written on the next commit.
    pub fn staged(&self) -> WheelSpeeds {
        self.staged
    }
}

impl Subsystem for Drive {
    fn commit(&mut self) {
        self.left.set_output(self.staged.left);
        self.right.set_output(self.staged.right);
    }
}

struct DriveWith<F, R> {
    drive: Handle<Drive>,
    forward: F,
    rotation: R,
}

impl<F: DoubleSource, R: DoubleSource> Action for DriveWith<F, R> {
    fn execute(&mut self) {
        let (forward, rotation) = (self.forward.read(), self.rotation.read());
        self.drive.borrow_mut().arcade_drive(forward, rotation);
    }

    fn end(&mut self, _interrupted: bool) {
        self.drive.borrow_mut().stop();
    }
}

/// Arcade drive from two live sources, re-read every tick. Never finishes.
pub fn drive_with<F, R>(drive: &Handle<Drive>, forward: F, rotation: R) -> Behavior
    where F: DoubleSource + 'static,
          R: DoubleSource + 'static
{
    Behavior::continuous("drive", drive.id(), DriveWith {
        drive: drive.clone(),
        forward: forward,
        rotation: rotation,
    })
}

pub fn stop(drive: &Handle<Drive>) -> Behavior {
    let target = drive.clone();
    Behavior::one_shot("drive stop", drive.id(), Instant::new(move || target.borrow_mut().stop()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock::MockActuator;
    use slog::{self, Logger};
    use scheduler::Scheduler;
    use time::Duration;

    struct Rig {
        scheduler: Scheduler,
        drive: Handle<Drive>,
        left: MockActuator,
        right: MockActuator,
    }

    fn rig(square_inputs: bool) -> Rig {
        let left = MockActuator::new();
        let right = MockActuator::new();
        let mut scheduler = Scheduler::new(Duration::milliseconds(20),
                                           Logger::root(slog::Discard, o!()));
        let drive = scheduler.register("drive",
                                       Drive::new(ActuatorGroup::new().with(left.clone(), false),
                                                  ActuatorGroup::new().with(right.clone(), false),
                                                  square_inputs));
        Rig {
            scheduler: scheduler,
            drive: drive,
            left: left,
            right: right,
        }
    }

    #[test]
    fn right_side_is_inverted() {
        let mut rig = rig(false);
        rig.scheduler.schedule(drive_with(&rig.drive, 0.6, 0.5)).unwrap();
        rig.scheduler.tick();

        assert_eq!(rig.left.last(), Some(1.0));
        let right = rig.right.last().unwrap();
        assert!((right + 0.1 / 1.1).abs() < 1e-9, "right was {}", right);
    }

    #[test]
    fn squared_inputs() {
        let mut rig = rig(true);
        rig.scheduler.schedule(drive_with(&rig.drive, 0.5, 0.0)).unwrap();
        rig.scheduler.tick();
        assert_eq!(rig.left.last(), Some(0.25));
        assert_eq!(rig.right.last(), Some(-0.25));
    }

    #[test]
    fn stop_preempts_and_zeroes() {
        let mut rig = rig(false);
        rig.scheduler.schedule(drive_with(&rig.drive, 0.3, 0.0)).unwrap();
        rig.scheduler.tick();
        rig.scheduler.schedule(stop(&rig.drive)).unwrap();
        rig.scheduler.tick();

        assert_eq!(rig.left.history(), vec![0.3, 0.0]);
        assert_eq!(rig.drive.borrow().staged(), WheelSpeeds::zero());
        assert!(rig.scheduler.active().is_empty());
    }
}

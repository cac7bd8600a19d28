
use actuator::ActuatorGroup;
use behavior::{Action, Behavior, Instant};
use subsystem::{Handle, Subsystem};

pub struct Climber {
    winch: ActuatorGroup,
    speed: f64,
    staged: f64,
}

impl Climber {
    pub fn new(winch: ActuatorGroup, speed: f64) -> Climber {
        Climber {
            winch: winch,
            speed: speed,
            staged: 0.0,
        }
    }

    // Sign may need flipping depending on how the winch motor is mounted.
    pub fn winch_up(&mut self) {
        let speed = self.speed;
        self.set(speed);
    }

    pub fn winch_down(&mut self) {
        let speed = self.speed;
        self.set(-speed);
    }

    pub fn stop(&mut self) {
        self.set(0.0);
    }

    pub fn set(&mut self, speed: f64) {
        self.staged = speed;
    }

    pub fn staged(&self) -> f64 {
        self.staged
    }
}

impl Subsystem for Climber {
    fn commit(&mut self) {
        self.winch.set_output(self.staged);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

struct Winch {
    climber: Handle<Climber>,
    direction: Direction,
}

impl Action for Winch {
    fn execute(&mut self) {
        let mut climber = self.climber.borrow_mut();
        match self.direction {
            Direction::Up => climber.winch_up(),
            Direction::Down => climber.winch_down(),
        }
    }

    fn end(&mut self, _interrupted: bool) {
        self.climber.borrow_mut().stop();
    }
}

/// Runs the winch while held. Ends only when something else takes the climber.
pub fn winch(climber: &Handle<Climber>, direction: Direction) -> Behavior {
    let name = match direction {
        Direction::Up => "winch up",
        Direction::Down => "winch down",
    };
    Behavior::momentary(name, climber.id(), Winch {
        climber: climber.clone(),
        direction: direction,
    })
}

pub fn winch_up(climber: &Handle<Climber>) -> Behavior {
    winch(climber, Direction::Up)
}

pub fn winch_down(climber: &Handle<Climber>) -> Behavior {
    winch(climber, Direction::Down)
}

pub fn stop(climber: &Handle<Climber>) -> Behavior {
    let target = climber.clone();
    Behavior::one_shot("winch stop", climber.id(), Instant::new(move || target.borrow_mut().stop()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock::MockActuator;
    use scheduler::Scheduler;
    use slog::{self, Logger};
    use time::Duration;

    fn setup() -> (Scheduler, Handle<Climber>, MockActuator) {
        let motor = MockActuator::new();
        let mut scheduler = Scheduler::new(Duration::milliseconds(20),
                                           Logger::root(slog::Discard, o!()));
        let climber = scheduler.register("climber",
                                         Climber::new(ActuatorGroup::new().with(motor.clone(), false),
                                                      0.8));
        (scheduler, climber, motor)
    }

    #[test]
    fn winch_runs_until_stopped() {
        let (mut scheduler, climber, motor) = setup();
        scheduler.schedule(winch_down(&climber)).unwrap();
        scheduler.tick();
        scheduler.tick();
        scheduler.schedule(stop(&climber)).unwrap();
        scheduler.tick();

        assert_eq!(motor.history(), vec![-0.8, -0.8, 0.0]);
        assert_eq!(scheduler.claimant(climber.id()), None);
    }

    #[test]
    fn reversing_direction_quiesces_first() {
        let (mut scheduler, climber, motor) = setup();
        scheduler.schedule(winch_up(&climber)).unwrap();
        scheduler.tick();
        scheduler.schedule(winch_down(&climber)).unwrap();
        assert_eq!(climber.borrow().staged(), 0.0);
        scheduler.tick();

        assert_eq!(motor.history(), vec![0.8, -0.8]);
        assert_eq!(scheduler.claimant(climber.id()), Some("winch down"));
    }

    #[test]
    fn raw_set() {
        let (mut scheduler, climber, motor) = setup();
        climber.borrow_mut().set(0.3);
        scheduler.tick();
        assert_eq!(motor.last(), Some(0.3));
    }
}

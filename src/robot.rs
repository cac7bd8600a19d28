//! Wiring of the robot: resources, the default drive and the button bindings.

use std::rc::Rc;

use slog::Logger;
use time::Duration;

use actuator::{Actuator, ActuatorGroup};
use config::{Config, MotorConfig};
use errors::*;
use input::{AxisReader, ButtonReader, InputSource};
use scheduler::{Scheduler, Trigger};
use subsystem::Handle;
use subsystems::{climber, drive, Climber, Drive};

pub struct Robot {
    scheduler: Scheduler,
    drive: Handle<Drive>,
    climber: Handle<Climber>,
}

fn group<F>(motors: &[MotorConfig], actuator_for: &mut F) -> ActuatorGroup
    where F: FnMut(&MotorConfig) -> Box<Actuator>
{
    let mut group = ActuatorGroup::new();
    for motor in motors {
        group.push(actuator_for(motor), motor.inverted);
    }
    group
}

impl Robot {
    /// Builds the robot. `actuator_for` supplies the output for each
    /// configured motor channel.
    pub fn new<F>(config: &Config,
                  input: Rc<InputSource>,
                  mut actuator_for: F,
                  logger: Logger)
                  -> Result<Robot>
        where F: FnMut(&MotorConfig) -> Box<Actuator>
    {
        config.validate()?;

        let mut scheduler = Scheduler::new(Duration::milliseconds(config.period_ms as i64),
                                           logger.new(o!("component" => "scheduler")));

        let drive = scheduler.register("drive",
                                       Drive::new(group(&config.drive.left, &mut actuator_for),
                                                  group(&config.drive.right, &mut actuator_for),
                                                  config.drive.square_inputs));
        let climber = scheduler.register("climber",
                                         Climber::new(group(&config.climber.winch,
                                                            &mut actuator_for),
                                                      config.climber.speed));

        let default_drive =
            drive::drive_with(&drive,
                              AxisReader::new(input.clone(), config.drive.forward_axis),
                              AxisReader::new(input.clone(), config.drive.rotation_axis));
        scheduler.set_default(drive.id(), default_drive)?;

        let bindings = [("winch down", config.bindings.winch_down, climber::Direction::Down),
                        ("winch up", config.bindings.winch_up, climber::Direction::Up)];
        for &(name, button, direction) in bindings.iter() {
            let (on_press, on_release) = (climber.clone(), climber.clone());
            let trigger = Trigger::new(name, ButtonReader::new(input.clone(), button))
                .on_press(move || climber::winch(&on_press, direction))
                .on_release(move || climber::stop(&on_release));
            scheduler.bind(trigger)?;
        }

        info!(logger, "robot ready";
              "period_ms" => config.period_ms,
              "drive_motors" => config.drive.left.len() + config.drive.right.len(),
              "winch_motors" => config.climber.winch.len());

        Ok(Robot {
            scheduler: scheduler,
            drive: drive,
            climber: climber,
        })
    }

    pub fn tick(&mut self) {
        self.scheduler.tick();
    }

    /// Ends every running behavior. The defaults come back on the next tick.
    pub fn disable(&mut self) {
        self.scheduler.cancel_all();
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn drive(&self) -> &Handle<Drive> {
        &self.drive
    }

    pub fn climber(&self) -> &Handle<Climber> {
        &self.climber
    }
}

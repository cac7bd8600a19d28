
#[macro_use]
extern crate fomat_macros;
#[macro_use]
extern crate slog;
extern crate slog_scope;
extern crate teleop_core;
extern crate time;

use std::rc::Rc;
use std::thread;

use teleop_core::Robot;
use teleop_core::actuator::{Actuator, LogActuator};
use teleop_core::config::Config;
use teleop_core::errors::*;
use teleop_core::gamepad::GamepadInput;
use teleop_core::logging::build_logger;
use teleop_core::util::{get_error_trace, load_config_from_file};
use time::PreciseTime;

fn main() {
    if let Err(ref e) = run() {
        epintln!((get_error_trace(e)));
        ::std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = match ::std::env::args().nth(1) {
        Some(path) => {
            pintln!("Loading config from "(path));
            load_config_from_file(path.trim())?
        }
        None => Config::default(),
    };

    let logger = build_logger(&config.logging)?;
    let _guard = slog_scope::set_global_logger(logger.clone());

    let input = Rc::new(GamepadInput::new()?);
    let actuator_logger = logger.new(o!("component" => "actuator"));
    let mut robot = Robot::new(&config,
                               input.clone(),
                               |motor| {
                                   Box::new(LogActuator::new(motor.channel,
                                                             actuator_logger.clone())) as
                                   Box<Actuator>
                               },
                               logger.clone())?;

    let period = robot.scheduler().period();
    let mut enabled = false;
    loop {
        let started = PreciseTime::now();

        // Ticks only run while a gamepad is connected.
        let connected = input.refresh();
        match (enabled, connected) {
            (false, true) => {
                info!(slog_scope::logger(), "enabled";
                      "gamepad" => input.name().unwrap_or_default());
            }
            (true, false) => {
                warn!(slog_scope::logger(), "gamepad lost, disabling");
                robot.disable();
            }
            _ => {}
        }
        enabled = connected;

        if enabled {
            robot.tick();
        }

        let remaining = period - started.to(PreciseTime::now());
        if let Ok(remaining) = remaining.to_std() {
            thread::sleep(remaining);
        }
    }
}

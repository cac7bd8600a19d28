#![recursion_limit = "1024"]

//! Control core for a teleoperated differential-drive robot with a winch.
//!
//! A [`Scheduler`](scheduler::Scheduler) is ticked once per control period. It
//! turns button edges into behaviors, gives each resource (drivetrain,
//! climber) to at most one behavior at a time, runs defaults for idle
//! resources and commits every resource's output once per tick.

#[macro_use]
extern crate error_chain;
#[cfg(feature = "gamepad")]
extern crate gilrs;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate slog;
extern crate slog_async;
extern crate slog_json;
extern crate slog_term;
extern crate time;
extern crate toml;
extern crate vecmath;

#[cfg(test)]
extern crate tempfile;

pub mod actuator;
pub mod behavior;
pub mod config;
pub mod edge;
pub mod errors;
#[cfg(feature = "gamepad")]
pub mod gamepad;
pub mod input;
pub mod kinematics;
pub mod logging;
pub mod mock;
pub mod robot;
pub mod scheduler;
pub mod subsystem;
pub mod subsystems;
pub mod util;

pub use behavior::{Action, Behavior, BehaviorKind, Instant, Phase};
pub use robot::Robot;
pub use scheduler::{Scheduler, TickStats, Trigger};
pub use subsystem::{Handle, ResourceId, Subsystem};

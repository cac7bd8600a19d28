//! Schedulable units of work.
//!
//! A [`Behavior`] pairs an [`Action`] with the resources it needs exclusively
//! and a [`BehaviorKind`] that decides when it finishes on its own:
//!
//! - `Continuous` never finishes; it leaves only when pre-empted or cancelled.
//!   Default behaviors are continuous.
//! - `Momentary` never finishes either; it is bound to a button press and is
//!   expected to be pre-empted by the matching release action.
//! - `OneShot` finishes right after its single execute step.

use subsystem::ResourceId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BehaviorKind {
    Continuous,
    Momentary,
    OneShot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Initializing,
    Running,
    Ending,
}

/// The work a behavior does. Hooks must not block.
pub trait Action {
    fn initialize(&mut self) {}

    fn execute(&mut self);

    /// `interrupted` is true when pre-empted or cancelled.
    fn end(&mut self, _interrupted: bool) {}
}

/// Runs a closure as the execute step.
pub struct Instant<F> {
    run: F,
}

impl<F: FnMut()> Instant<F> {
    pub fn new(run: F) -> Instant<F> {
        Instant { run: run }
    }
}

impl<F: FnMut()> Action for Instant<F> {
    fn execute(&mut self) {
        (self.run)()
    }
}

pub struct Behavior {
    name: String,
    kind: BehaviorKind,
    requirements: Vec<ResourceId>,
    action: Box<Action>,
    phase: Phase,
    executed: bool,
}

impl Behavior {
    pub fn new<A>(name: &str, kind: BehaviorKind, requirements: &[ResourceId], action: A) -> Behavior
        where A: Action + 'static
    {
        let mut unique: Vec<ResourceId> = Vec::with_capacity(requirements.len());
        for &id in requirements {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        Behavior {
            name: name.to_owned(),
            kind: kind,
            requirements: unique,
            action: Box::new(action),
            phase: Phase::Idle,
            executed: false,
        }
    }

    pub fn continuous<A: Action + 'static>(name: &str, resource: ResourceId, action: A) -> Behavior {
        Behavior::new(name, BehaviorKind::Continuous, &[resource], action)
    }

    pub fn momentary<A: Action + 'static>(name: &str, resource: ResourceId, action: A) -> Behavior {
        Behavior::new(name, BehaviorKind::Momentary, &[resource], action)
    }

    pub fn one_shot<A: Action + 'static>(name: &str, resource: ResourceId, action: A) -> Behavior {
        Behavior::new(name, BehaviorKind::OneShot, &[resource], action)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> BehaviorKind {
        self.kind
    }

    pub fn requirements(&self) -> &[ResourceId] {
        &self.requirements
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        match self.kind {
            BehaviorKind::Continuous | BehaviorKind::Momentary => false,
            BehaviorKind::OneShot => self.executed,
        }
    }

    pub(crate) fn start(&mut self) {
        debug_assert_eq!(self.phase, Phase::Idle);
        self.executed = false;
        self.phase = Phase::Initializing;
        self.action.initialize();
        self.phase = Phase::Running;
    }

    pub(crate) fn execute(&mut self) {
        debug_assert_eq!(self.phase, Phase::Running);
        self.action.execute();
        self.executed = true;
    }

    pub(crate) fn end(&mut self, interrupted: bool) {
        self.phase = Phase::Ending;
        self.action.end(interrupted);
        self.phase = Phase::Idle;
    }
}

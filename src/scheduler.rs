//! The periodic arbiter between behaviors and resources.
//!
//! Each `tick` runs, in order:
//!
//! 1. every trigger's edge detector, in registration order, collecting the
//!    behaviors bound to the edges that fired;
//! 2. admission of those behaviors, pre-empting whatever holds a resource they
//!    need (the ousted behavior's end hook runs before the newcomer's
//!    initialize);
//! 3. one execute step of every active behavior, oldest claim first;
//! 4. completion of behaviors whose finish predicate holds;
//! 5. admission of the default behavior of every unclaimed resource;
//!
//! and finally `periodic` and `commit` on every resource, so each actuator is
//! written once per tick with the resolved output.

use std::cell::RefCell;
use std::rc::Rc;

use slog::Logger;
use time::{Duration, PreciseTime};

use behavior::{Behavior, BehaviorKind};
use edge::{Edge, EdgeDetector};
use errors::*;
use input::BoolSource;
use subsystem::{Handle, ResourceId, Subsystem};

/// Builds a fresh behavior each time its edge fires.
pub type Factory = Box<Fn() -> Behavior>;

/// A button with the actions bound to its press and release.
pub struct Trigger {
    name: String,
    source: Box<BoolSource>,
    detector: EdgeDetector,
    on_press: Option<Factory>,
    on_release: Option<Factory>,
}

impl Trigger {
    /// The detector starts from the level read now, so a button held while
    /// binding does not count as a press.
    pub fn new<B: BoolSource + 'static>(name: &str, source: B) -> Trigger {
        let initial = source.read();
        Trigger {
            name: name.to_owned(),
            source: Box::new(source),
            detector: EdgeDetector::new(initial),
            on_press: None,
            on_release: None,
        }
    }

    pub fn on_press<F: Fn() -> Behavior + 'static>(mut self, factory: F) -> Trigger {
        self.on_press = Some(Box::new(factory));
        self
    }

    pub fn on_release<F: Fn() -> Behavior + 'static>(mut self, factory: F) -> Trigger {
        self.on_release = Some(Box::new(factory));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    pub ticks: u64,
    pub overruns: u64,
    pub preemptions: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Origin {
    Scheduled,
    Default(ResourceId),
}

struct Active {
    key: u64,
    origin: Origin,
    behavior: Behavior,
}

struct Slot {
    name: String,
    subsystem: Rc<RefCell<Subsystem>>,
    claimant: Option<u64>,
    // Parked here while not running.
    default: Option<Behavior>,
    has_default: bool,
}

pub struct Scheduler {
    logger: Logger,
    period: Duration,
    resources: Vec<Slot>,
    triggers: Vec<Trigger>,
    active: Vec<Active>,
    next_key: u64,
    stats: TickStats,
}

impl Scheduler {
    pub fn new(period: Duration, logger: Logger) -> Scheduler {
        Scheduler {
            logger: logger,
            period: period,
            resources: vec![],
            triggers: vec![],
            active: vec![],
            next_key: 0,
            stats: TickStats::default(),
        }
    }

    pub fn register<S: Subsystem + 'static>(&mut self, name: &str, subsystem: S) -> Handle<S> {
        let id = ResourceId(self.resources.len());
        let inner = Rc::new(RefCell::new(subsystem));
        self.resources.push(Slot {
            name: name.to_owned(),
            subsystem: inner.clone(),
            claimant: None,
            default: None,
            has_default: false,
        });
        debug!(self.logger, "registered resource"; "resource" => name, "id" => id.0);
        Handle::new(id, inner)
    }

    /// Sets the behavior that runs whenever nothing else claims `id`.
    /// Allowed once per resource, and only for behaviors requiring exactly `id`.
    pub fn set_default(&mut self, id: ResourceId, behavior: Behavior) -> Result<()> {
        self.check(&behavior)?;
        let slot = match self.resources.get_mut(id.0) {
            Some(slot) => slot,
            None => bail!(ErrorKind::UnknownResource(behavior.name().to_owned(), id.0)),
        };
        if slot.has_default {
            bail!(ErrorKind::DuplicateDefault(slot.name.clone()));
        }
        if behavior.requirements() != &[id][..] {
            bail!(ErrorKind::InvalidDefault(slot.name.clone(), behavior.name().to_owned()));
        }
        debug!(self.logger, "default set"; "resource" => &slot.name, "behavior" => behavior.name());
        slot.default = Some(behavior);
        slot.has_default = true;
        Ok(())
    }

    /// Registers a trigger. Each bound factory is built once so a bad
    /// requirement set is refused here rather than at tick time.
    pub fn bind(&mut self, trigger: Trigger) -> Result<()> {
        let mut press_kind = None;
        if let Some(ref factory) = trigger.on_press {
            let built = factory();
            self.check(&built)?;
            press_kind = Some(built.kind());
        }
        if let Some(ref factory) = trigger.on_release {
            self.check(&factory())?;
        }
        if press_kind == Some(BehaviorKind::Momentary) && trigger.on_release.is_none() {
            warn!(self.logger, "momentary press action has no release action; \
                                it runs until something pre-empts it";
                  "trigger" => trigger.name());
        }
        debug!(self.logger, "bound trigger"; "trigger" => trigger.name());
        self.triggers.push(trigger);
        Ok(())
    }

    /// Admits a behavior immediately, outside of any binding.
    pub fn schedule(&mut self, behavior: Behavior) -> Result<()> {
        self.check(&behavior)?;
        self.admit(behavior, Origin::Scheduled);
        Ok(())
    }

    /// Ends the named behavior as interrupted. Returns whether it was active.
    pub fn cancel(&mut self, name: &str) -> bool {
        let key = self.active.iter().find(|a| a.behavior.name() == name).map(|a| a.key);
        match key {
            Some(key) => {
                self.retire(key, true);
                true
            }
            None => false,
        }
    }

    /// Ends every active behavior as interrupted, newest first, and commits
    /// what their end hooks staged so the actuators are not left running.
    pub fn cancel_all(&mut self) {
        while let Some(key) = self.active.last().map(|a| a.key) {
            self.retire(key, true);
        }
        self.commit_all();
    }

    pub fn tick(&mut self) {
        let started = PreciseTime::now();

        let mut admissions = vec![];
        for trigger in self.triggers.iter_mut() {
            let edge = trigger.detector.sample(trigger.source.read());
            let factory = match edge {
                Edge::Rising => trigger.on_press.as_ref(),
                Edge::Falling => trigger.on_release.as_ref(),
                Edge::None => None,
            };
            if let Some(factory) = factory {
                trace!(self.logger, "edge"; "trigger" => &trigger.name, "edge" => ?edge);
                admissions.push(factory());
            }
        }

        for behavior in admissions {
            if let Err(e) = self.check(&behavior) {
                error!(self.logger, "dropping behavior"; "error" => %e);
                continue;
            }
            self.admit(behavior, Origin::Scheduled);
        }

        for entry in self.active.iter_mut() {
            entry.behavior.execute();
        }

        let finished: Vec<u64> = self.active
            .iter()
            .filter(|a| a.behavior.is_finished())
            .map(|a| a.key)
            .collect();
        for key in finished {
            self.retire(key, false);
        }

        for index in 0..self.resources.len() {
            if self.resources[index].claimant.is_some() {
                continue;
            }
            if let Some(default) = self.resources[index].default.take() {
                self.admit(default, Origin::Default(ResourceId(index)));
            }
        }

        self.commit_all();

        self.stats.ticks += 1;
        let elapsed = started.to(PreciseTime::now());
        if elapsed > self.period {
            self.stats.overruns += 1;
            warn!(self.logger, "tick overran its period";
                  "tick" => self.stats.ticks,
                  "elapsed_us" => elapsed.num_microseconds(),
                  "period_ms" => self.period.num_milliseconds());
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn stats(&self) -> TickStats {
        self.stats
    }

    /// Name of the behavior currently holding `id`.
    pub fn claimant(&self, id: ResourceId) -> Option<&str> {
        let key = match self.resources.get(id.0).and_then(|slot| slot.claimant) {
            Some(key) => key,
            None => return None,
        };
        self.active.iter().find(|a| a.key == key).map(|a| a.behavior.name())
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active.iter().any(|a| a.behavior.name() == name)
    }

    /// Active behaviors, oldest claim first.
    pub fn active(&self) -> Vec<&str> {
        self.active.iter().map(|a| a.behavior.name()).collect()
    }

    fn commit_all(&mut self) {
        for slot in self.resources.iter() {
            let mut subsystem = slot.subsystem.borrow_mut();
            subsystem.periodic();
            subsystem.commit();
        }
    }

    fn check(&self, behavior: &Behavior) -> Result<()> {
        if behavior.requirements().is_empty() {
            bail!(ErrorKind::EmptyRequirements(behavior.name().to_owned()));
        }
        for id in behavior.requirements() {
            if id.0 >= self.resources.len() {
                bail!(ErrorKind::UnknownResource(behavior.name().to_owned(), id.0));
            }
        }
        Ok(())
    }

    fn admit(&mut self, mut behavior: Behavior, origin: Origin) {
        let key = self.next_key;
        self.next_key += 1;

        for id in behavior.requirements() {
            if let Some(holder) = self.resources[id.0].claimant {
                debug!(self.logger, "pre-empting";
                       "resource" => &self.resources[id.0].name,
                       "by" => behavior.name());
                self.stats.preemptions += 1;
                self.retire(holder, true);
            }
        }
        for id in behavior.requirements() {
            self.resources[id.0].claimant = Some(key);
        }

        debug!(self.logger, "admitted"; "behavior" => behavior.name(), "kind" => ?behavior.kind());
        behavior.start();
        self.active.push(Active {
            key: key,
            origin: origin,
            behavior: behavior,
        });
    }

    fn retire(&mut self, key: u64, interrupted: bool) {
        let index = match self.active.iter().position(|a| a.key == key) {
            Some(index) => index,
            None => return,
        };
        let mut entry = self.active.remove(index);
        entry.behavior.end(interrupted);
        for slot in self.resources.iter_mut() {
            if slot.claimant == Some(key) {
                slot.claimant = None;
            }
        }
        debug!(self.logger, "ended"; "behavior" => entry.behavior.name(), "interrupted" => interrupted);
        if let Origin::Default(id) = entry.origin {
            self.resources[id.0].default = Some(entry.behavior);
        }
    }
}

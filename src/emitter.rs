//! Particle emitter: the hover-driven emoji stream of a profile-flip control.
//!
//! Each emitter owns one emission session (`Idle` or `Emitting`) and at most
//! one recurring timer. Starting an active session is a no-op, so overlapping
//! enter events cannot stack timers. Every particle schedules its own removal
//! when it is attached; stopping the session never touches those removals.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::config::EmitterConfig;
use crate::mode::ModeState;
use crate::particle::Particle;
use crate::timer::Scheduler;

/// Where particles are rendered (a DOM node in the browser).
pub trait ParticleSurface: Clone + 'static {
    type Node: 'static;

    /// Attach a node for `particle`. `None` means the surface could not take it
    /// and nothing will be scheduled.
    fn attach(&self, particle: &Particle) -> Option<Self::Node>;

    fn detach(&self, node: Self::Node);
}

enum Session<H> {
    Idle,
    Emitting(H),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Emitting,
}

struct Inner<S: Scheduler> {
    scheduler: S,
    mode: ModeState,
    config: EmitterConfig,
    rng: RefCell<fastrand::Rng>,
    session: RefCell<Session<S::Repeating>>,
    emitted: Cell<u64>,
}

impl<S: Scheduler + 'static> Inner<S> {
    fn emit<C: ParticleSurface>(&self, container: &C) {
        let particle = {
            let mut rng = self.rng.borrow_mut();
            Particle::roll(self.mode.get(), &mut rng, &self.config)
        };
        let Some(node) = container.attach(&particle) else {
            tracing::trace!("particle surface rejected node");
            return;
        };
        self.emitted.set(self.emitted.get() + 1);
        let owner = container.clone();
        self.scheduler
            .defer(self.config.particle_lifetime_ms, Box::new(move || owner.detach(node)));
    }
}

pub struct ParticleEmitter<S: Scheduler> {
    inner: Rc<Inner<S>>,
}

impl<S: Scheduler> Clone for ParticleEmitter<S> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<S: Scheduler + 'static> ParticleEmitter<S> {
    pub fn new(scheduler: S, mode: ModeState, config: EmitterConfig, seed: u64) -> Self {
        Self {
            inner: Rc::new(Inner {
                scheduler,
                mode,
                config,
                rng: RefCell::new(fastrand::Rng::with_seed(seed)),
                session: RefCell::new(Session::Idle),
                emitted: Cell::new(0),
            }),
        }
    }

    pub fn state(&self) -> SessionState {
        match *self.inner.session.borrow() {
            Session::Idle => SessionState::Idle,
            Session::Emitting(_) => SessionState::Emitting,
        }
    }

    /// Total particles attached over the emitter's lifetime.
    pub fn emitted(&self) -> u64 {
        self.inner.emitted.get()
    }

    /// Attach one particle to `container` and schedule its removal after the
    /// configured lifetime. The glyph follows the mode at the time of the call.
    pub fn emit_particle<C: ParticleSurface>(&self, container: &C) {
        self.inner.emit(container);
    }

    /// Begin emitting into `container`: one particle now, then one per period.
    /// Returns `false` without side effects if a session is already running.
    pub fn start_session<C: ParticleSurface>(&self, container: C) -> bool {
        if matches!(*self.inner.session.borrow(), Session::Emitting(_)) {
            return false;
        }
        self.inner.emit(&container);

        let weak: Weak<Inner<S>> = Rc::downgrade(&self.inner);
        let handle = self.inner.scheduler.repeat(
            self.inner.config.emission_period_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.emit(&container);
                }
            }),
        );
        *self.inner.session.borrow_mut() = Session::Emitting(handle);
        tracing::debug!("emission session started");
        true
    }

    /// Cancel future emissions. Particles already attached keep their removal
    /// timers. Safe to call while idle.
    pub fn stop_session(&self) {
        let previous = std::mem::replace(&mut *self.inner.session.borrow_mut(), Session::Idle);
        if let Session::Emitting(handle) = previous {
            drop(handle);
            tracing::debug!(emitted = self.emitted(), "emission session stopped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::{ModeToggle, VisualMode};
    use crate::timer::VirtualScheduler;

    #[derive(Clone, Default)]
    struct Stage {
        live: Rc<RefCell<Vec<(u64, &'static str)>>>,
        next: Rc<Cell<u64>>,
    }

    impl ParticleSurface for Stage {
        type Node = u64;

        fn attach(&self, particle: &Particle) -> Option<u64> {
            let id = self.next.get();
            self.next.set(id + 1);
            self.live.borrow_mut().push((id, particle.glyph));
            Some(id)
        }

        fn detach(&self, node: u64) {
            self.live.borrow_mut().retain(|(id, _)| *id != node);
        }
    }

    fn emitter(sched: &VirtualScheduler, mode: ModeState) -> ParticleEmitter<VirtualScheduler> {
        ParticleEmitter::new(sched.clone(), mode, EmitterConfig::default(), 42)
    }

    #[test]
    fn second_start_is_a_noop() {
        let sched = VirtualScheduler::new();
        let em = emitter(&sched, ModeState::new());
        let stage = Stage::default();
        assert!(em.start_session(stage.clone()));
        assert!(!em.start_session(stage.clone()));
        assert_eq!(sched.active_repeating(), 1);
        assert_eq!(stage.live.borrow().len(), 1);
    }

    #[test]
    fn stop_while_idle_is_harmless() {
        let sched = VirtualScheduler::new();
        let em = emitter(&sched, ModeState::new());
        em.stop_session();
        assert_eq!(em.state(), SessionState::Idle);
        assert_eq!(sched.active_repeating(), 0);
    }

    #[test]
    fn removals_survive_session_stop() {
        let sched = VirtualScheduler::new();
        let em = emitter(&sched, ModeState::new());
        let stage = Stage::default();
        em.start_session(stage.clone());
        sched.advance(400);
        em.stop_session();
        assert_eq!(stage.live.borrow().len(), 3);
        sched.advance(2_000);
        assert!(stage.live.borrow().is_empty());
    }

    #[test]
    fn glyph_follows_mode_mid_session() {
        let sched = VirtualScheduler::new();
        let toggle = ModeToggle::new(ModeState::new());
        let em = emitter(&sched, toggle.state().clone());
        let stage = Stage::default();
        em.start_session(stage.clone());
        toggle.toggle();
        sched.advance(1_000);
        let live = stage.live.borrow();
        assert!(VisualMode::Default.particle_glyphs().contains(&live[0].1));
        for (_, glyph) in live.iter().skip(1) {
            assert!(VisualMode::Colorful.particle_glyphs().contains(glyph));
        }
    }

    #[test]
    fn dropped_emitter_stops_ticking() {
        let sched = VirtualScheduler::new();
        let stage = Stage::default();
        {
            let em = emitter(&sched, ModeState::new());
            em.start_session(stage.clone());
        }
        sched.advance(1_000);
        assert_eq!(sched.active_repeating(), 0);
        assert_eq!(stage.next.get(), 1);
    }
}

//! Scheduler: tween ownership and the per-frame update loop.
//!
//! The host constructs a [`Scheduler`] explicitly (one per subsystem if it
//! likes) and threads it through calls; there is no process-wide singleton.
//! All mutation goes through `&mut self`, so the active-tween set can never
//! be touched concurrently and callbacks can never re-enter the scheduler
//! mid-tick.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::easing::Ease;
use crate::error::TweenError;
use crate::events::TweenEvent;
use crate::ids::{IdAllocator, TweenId};

/// Lifecycle of a scheduler entry.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum TweenState {
    /// Registered since the previous tick; first advanced on the next one.
    Pending,
    Running,
    Finished,
    Cancelled,
}

type UpdateFn = Box<dyn FnMut(f32)>;
type FinishFn = Box<dyn FnOnce()>;

/// One in-flight interpolation.
///
/// The scheduler owns every field. Callers hold only the [`TweenId`] and
/// configure the tween through scheduler methods, which keeps `elapsed` and
/// `state` impossible to mutate from outside.
struct Tween {
    id: TweenId,
    ease: Ease,
    duration: f32,
    elapsed: f32,
    state: TweenState,
    on_update: UpdateFn,
    on_finish: Option<FinishFn>,
}

impl Tween {
    fn new(id: TweenId, duration: f32, on_update: UpdateFn) -> Self {
        Self {
            id,
            ease: Ease::default(),
            duration,
            elapsed: 0.0,
            state: TweenState::Pending,
            on_update,
            on_finish: None,
        }
    }
}

/// Owns the active-tween set and drives it forward on each tick.
pub struct Scheduler {
    cfg: Config,
    ids: IdAllocator,
    tweens: Vec<Tween>,
    events: Vec<TweenEvent>,
}

impl Scheduler {
    /// Create a scheduler with the given config. The host owns the instance
    /// and is responsible for calling [`Scheduler::tick`] once per frame with
    /// a non-negative time delta.
    pub fn new(cfg: Config) -> Self {
        Self {
            tweens: Vec::with_capacity(cfg.tween_capacity),
            cfg,
            ids: IdAllocator::new(),
            events: Vec::new(),
        }
    }

    /// Register a new tween with the default ease.
    ///
    /// `on_update` receives the eased progress each tick; overshoot curves may
    /// hand it values outside `[0, 1]`. The tween starts advancing on the next
    /// `tick` call, so a tween created from inside another tween's callback is
    /// never stepped within the same frame.
    ///
    /// Fails if `duration` is not a positive, finite number of seconds.
    pub fn create<F>(&mut self, duration: f32, on_update: F) -> Result<TweenId, TweenError>
    where
        F: FnMut(f32) + 'static,
    {
        if !(duration.is_finite() && duration > 0.0) {
            return Err(TweenError::NonPositiveDuration(duration));
        }
        let id = self.ids.alloc();
        self.tweens.push(Tween::new(id, duration, Box::new(on_update)));
        log::trace!("tween {id:?} created, duration {duration:.3}s");
        self.push_event(TweenEvent::Started { tween: id });
        Ok(id)
    }

    /// Select the easing curve. Returns the same handle to allow chaining.
    pub fn set_ease(&mut self, id: TweenId, ease: Ease) -> Result<TweenId, TweenError> {
        self.get_mut(id)?.ease = ease;
        Ok(id)
    }

    /// Install (or replace) the finish callback. Returns the same handle.
    ///
    /// The callback runs at most once, right after the final update; it never
    /// runs for a cancelled tween. Configuring a tween that already retired
    /// reports [`TweenError::StaleHandle`].
    pub fn set_on_finish<F>(&mut self, id: TweenId, on_finish: F) -> Result<TweenId, TweenError>
    where
        F: FnOnce() + 'static,
    {
        self.get_mut(id)?.on_finish = Some(Box::new(on_finish));
        Ok(id)
    }

    /// Remove a tween immediately, without running its finish callback.
    ///
    /// Idempotent: returns whether a tween was actually removed, so a second
    /// cancel on the same handle reports `false` instead of erroring.
    pub fn cancel(&mut self, id: TweenId) -> bool {
        let before = self.tweens.len();
        self.tweens.retain(|t| t.id != id);
        let removed = self.tweens.len() != before;
        if removed {
            log::trace!("tween {id:?} cancelled");
            self.push_event(TweenEvent::Cancelled { tween: id });
        }
        removed
    }

    /// Current lifecycle state, while the tween is known to the scheduler.
    ///
    /// Finished and cancelled tweens are swept from the table, so this
    /// returns `None` once a tween retires.
    pub fn state(&self, id: TweenId) -> Option<TweenState> {
        self.tweens.iter().find(|t| t.id == id).map(|t| t.state)
    }

    /// Number of tweens currently registered.
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Drop every tween without running finish callbacks.
    pub fn clear(&mut self) {
        self.tweens.clear();
    }

    /// Drain the events recorded since the last drain.
    pub fn drain_events(&mut self) -> impl Iterator<Item = TweenEvent> + '_ {
        self.events.drain(..)
    }

    /// Advance every running tween by `dt` seconds.
    ///
    /// Per tween: `elapsed` advances, then `progress = clamp(elapsed /
    /// duration, 0, 1)` is eased and handed to the update callback. When
    /// `elapsed` crosses the duration the final update reports exactly
    /// `progress = 1`, after which the finish callback runs once and the
    /// tween retires. Writing the exact target value on completion is the
    /// finish callback's job; the eased value is close to 1 but carries
    /// formula round-off.
    ///
    /// Bookkeeping (state transition, finish-callback extraction) is
    /// committed before user callbacks are invoked, so a panicking callback
    /// cannot leave the table inconsistent. Tweens registered since the
    /// previous tick start advancing on this one.
    pub fn tick(&mut self, dt: f32) {
        debug_assert!(dt >= 0.0, "tick expects a non-negative time delta");
        for tw in &mut self.tweens {
            if tw.state == TweenState::Pending {
                tw.state = TweenState::Running;
            }
        }
        for i in 0..self.tweens.len() {
            let mut finished = None;
            {
                let tw = &mut self.tweens[i];
                if tw.state != TweenState::Running {
                    continue;
                }
                tw.elapsed += dt;
                let progress = (tw.elapsed / tw.duration).clamp(0.0, 1.0);
                let done = tw.elapsed >= tw.duration;
                let fin = if done {
                    tw.state = TweenState::Finished;
                    tw.on_finish.take()
                } else {
                    None
                };
                let eased = tw.ease.apply(progress);
                (tw.on_update)(eased);
                if done {
                    finished = Some((tw.id, fin));
                }
            }
            if let Some((id, fin)) = finished {
                if let Some(cb) = fin {
                    cb();
                }
                log::trace!("tween {id:?} finished");
                self.push_event(TweenEvent::Finished { tween: id });
            }
        }
        self.tweens
            .retain(|t| matches!(t.state, TweenState::Pending | TweenState::Running));
    }

    fn get_mut(&mut self, id: TweenId) -> Result<&mut Tween, TweenError> {
        self.tweens
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TweenError::StaleHandle(id))
    }

    fn push_event(&mut self, event: TweenEvent) {
        if self.events.len() < self.cfg.max_events_per_tick {
            self.events.push(event);
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("cfg", &self.cfg)
            .field("tweens", &self.tweens.len())
            .field("events", &self.events.len())
            .finish()
    }
}

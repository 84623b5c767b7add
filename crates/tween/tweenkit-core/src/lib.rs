//! Tweenkit Core (engine-agnostic)
//!
//! A minimal tweening engine: the host constructs a [`Scheduler`], registers
//! tweens with a duration and an update callback, and drives everything by
//! calling [`Scheduler::tick`] once per frame with the elapsed time delta.
//! Easing curves live in [`easing`]; adapters that drive a concrete value
//! toward a target live in [`bind`].
//!
//! ```
//! use tweenkit_core::{Config, Ease, Scheduler};
//!
//! let mut sched = Scheduler::new(Config::default());
//! let id = sched.create(2.0, |t| println!("eased progress: {t}")).unwrap();
//! sched.set_ease(id, Ease::OutBounce).unwrap();
//! sched.tick(0.016);
//! ```

pub mod bind;
pub mod config;
pub mod easing;
pub mod error;
pub mod events;
pub mod ids;
pub mod scheduler;

// Re-exports for consumers (hosts/adapters)
pub use bind::{lerp_f32, lerp_vec3, tween_f32, tween_vec3};
pub use config::Config;
pub use easing::Ease;
pub use error::TweenError;
pub use events::TweenEvent;
pub use ids::TweenId;
pub use scheduler::{Scheduler, TweenState};

//! Interpolation helpers and adapters that drive a value toward a target.
//!
//! The scheduler hands callbacks an eased progress; these adapters turn that
//! into "move this value from `from` to `to`". On completion the finish
//! callback writes the exact target, so per-frame lerp round-off never leaks
//! into the final value. The scheduler does not guarantee the animated target
//! still exists when a callback runs; setters that reach into host-owned
//! state must self-check (e.g. upgrade a `Weak` and no-op when the target is
//! gone).

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::TweenError;
use crate::ids::TweenId;
use crate::scheduler::Scheduler;

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Component-wise linear interpolation of 3-vectors.
#[inline]
pub fn lerp_vec3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        lerp_f32(a[0], b[0], t),
        lerp_f32(a[1], b[1], t),
        lerp_f32(a[2], b[2], t),
    ]
}

/// Tween a scalar from `from` to `to` over `duration` seconds, pushing every
/// intermediate value through `set`.
///
/// Returns the handle for fluent configuration (`set_ease`, `cancel`). The
/// installed finish callback writes `to` exactly; replacing it via
/// `set_on_finish` forfeits that snap.
pub fn tween_f32<S>(
    sched: &mut Scheduler,
    from: f32,
    to: f32,
    duration: f32,
    set: S,
) -> Result<TweenId, TweenError>
where
    S: FnMut(f32) + 'static,
{
    let set = Rc::new(RefCell::new(set));
    let step = Rc::clone(&set);
    let id = sched.create(duration, move |t| {
        let mut apply = step.borrow_mut();
        (*apply)(lerp_f32(from, to, t));
    })?;
    sched.set_on_finish(id, move || {
        let mut apply = set.borrow_mut();
        (*apply)(to);
    })?;
    Ok(id)
}

/// Tween a 3-vector from `from` to `to` over `duration` seconds.
///
/// The position/scale analogue of [`tween_f32`]; the host owns the actual
/// transform and applies each interpolated triple however it likes.
pub fn tween_vec3<S>(
    sched: &mut Scheduler,
    from: [f32; 3],
    to: [f32; 3],
    duration: f32,
    set: S,
) -> Result<TweenId, TweenError>
where
    S: FnMut([f32; 3]) + 'static,
{
    let set = Rc::new(RefCell::new(set));
    let step = Rc::clone(&set);
    let id = sched.create(duration, move |t| {
        let mut apply = step.borrow_mut();
        (*apply)(lerp_vec3(from, to, t));
    })?;
    sched.set_on_finish(id, move || {
        let mut apply = set.borrow_mut();
        (*apply)(to);
    })?;
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(lerp_f32(100.0, 200.0, 0.0), 100.0);
        assert_eq!(lerp_f32(100.0, 200.0, 0.5), 150.0);
        assert_eq!(lerp_vec3([0.0, 1.0, 2.0], [2.0, 3.0, 4.0], 0.5), [1.0, 2.0, 3.0]);
    }
}

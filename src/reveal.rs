//! Viewport reveal detection: a fire-once latch wired to an intersection
//! observation.

/// Fraction of a section that must be on screen before its entrance plays.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Fire-once visibility latch.
///
/// Starts unfired and can only ever move to fired; re-entering or leaving
/// the viewport afterwards has no effect on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    fired: bool,
}

impl RevealLatch {
    pub const fn new() -> Self {
        RevealLatch { fired: false }
    }

    /// Trip the latch. Returns `true` only on the first call.
    pub fn fire(&mut self) -> bool {
        let first = !self.fired;
        self.fired = true;
        first
    }

    pub const fn fired(&self) -> bool {
        self.fired
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use observe::use_reveal;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
mod observe {
    use leptos::{html, prelude::*};
    use leptos_use::{
        use_intersection_observer_with_options, UseIntersectionObserverOptions,
        UseIntersectionObserverReturn,
    };

    use super::RevealLatch;

    /// Observe `target` and hand back a signal that flips to `true` once the
    /// element's visible fraction first reaches `threshold`, then stays
    /// there.
    ///
    /// The underlying observation stops after the first crossing, and
    /// leptos-use releases it with the owning scope, so nothing fires
    /// against an unmounted section. Binding before the node is mounted is
    /// fine — the observer attaches once the `NodeRef` fills in.
    pub fn use_reveal(target: NodeRef<html::Div>, threshold: f64) -> ReadSignal<bool> {
        let (revealed, set_revealed) = signal(false);
        let latch = StoredValue::new(RevealLatch::new());
        let stop_observing = StoredValue::new_local(None::<Box<dyn Fn()>>);

        let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
            target,
            move |entries: Vec<web_sys::IntersectionObserverEntry>, _| {
                let crossed = entries.iter().any(|entry| entry.is_intersecting());
                if crossed && latch.try_update_value(RevealLatch::fire).unwrap_or(false) {
                    log::debug!("reveal fired at threshold {threshold}");
                    set_revealed.set(true);
                    stop_observing.with_value(|stop| {
                        if let Some(stop) = stop {
                            stop();
                        }
                    });
                }
            },
            UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
        );
        stop_observing.set_value(Some(Box::new(stop)));

        revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_starts_unfired() {
        let latch = RevealLatch::new();
        assert!(!latch.fired());
    }

    #[test]
    fn latch_fires_exactly_once() {
        let mut latch = RevealLatch::new();
        assert!(latch.fire());
        assert!(!latch.fire());
        assert!(!latch.fire());
    }

    #[test]
    fn latch_never_resets() {
        let mut latch = RevealLatch::new();
        latch.fire();
        // repeated observations after the first crossing change nothing
        for _ in 0..10 {
            latch.fire();
            assert!(latch.fired());
        }
    }
}

//! Entrance-animation timelines for the page sections.
//!
//! Each section declares a pair of rest states (hidden and visible) plus
//! timing, and gates the transition between them behind its reveal signal.
//! The browser's CSS transition engine performs the actual interpolation;
//! [`Sequencer::frame`] describes the timeline that engine must follow.

/// Timing curve applied to an entrance transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Eased progress for linear progress `t`, clamped to `[0, 1]`.
    pub fn progress(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    (4.0 - 2.0 * t) * t - 1.0
                }
            }
        }
    }

    /// Timing-function name understood by the CSS engine.
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// A named rest state for an animated element.
///
/// Hidden variants always carry opacity 0; visible variants rest at opacity
/// 1 with no offset. The [`Entrance`] constructors keep that invariant, so
/// the fields stay private.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    opacity: f64,
    offset_y: f64,
}

impl Variant {
    pub const fn opacity(&self) -> f64 {
        self.opacity
    }

    pub const fn offset_y(&self) -> f64 {
        self.offset_y
    }

    /// Inline declarations pinning an element to this rest state.
    pub fn style(&self) -> String {
        format!(
            "opacity:{};transform:translateY({}px)",
            self.opacity, self.offset_y
        )
    }
}

/// Snapshot of the animated properties at one instant of the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    pub offset_y: f64,
}

impl VisualState {
    const fn resting(variant: Variant) -> Self {
        VisualState {
            opacity: variant.opacity,
            offset_y: variant.offset_y,
        }
    }
}

/// One hidden-to-visible transition: the variant pair plus its timing.
///
/// Declared `const` once per section at composition time and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    hidden: Variant,
    visible: Variant,
    duration: f64,
    easing: Easing,
    stagger: f64,
}

impl Entrance {
    /// Plain opacity fade over `duration` seconds, no travel.
    pub const fn fade(duration: f64) -> Self {
        Self::rise(0.0, duration)
    }

    /// Fade in while rising from `offset_y` pixels below the rest position.
    pub const fn rise(offset_y: f64, duration: f64) -> Self {
        Entrance {
            hidden: Variant {
                opacity: 0.0,
                offset_y,
            },
            visible: Variant {
                opacity: 1.0,
                offset_y: 0.0,
            },
            duration,
            easing: Easing::EaseOut,
            stagger: 0.0,
        }
    }

    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Offset added per child index when this entrance drives a run of
    /// siblings.
    pub const fn with_stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger;
        self
    }

    pub const fn hidden(&self) -> Variant {
        self.hidden
    }

    pub const fn visible(&self) -> Variant {
        self.visible
    }

    pub const fn duration(&self) -> f64 {
        self.duration
    }

    pub const fn stagger(&self) -> f64 {
        self.stagger
    }

    /// Visual state `elapsed` seconds after this element's own transition
    /// started. Anything at or before the start samples to `hidden`; anything
    /// past `duration` rests at `visible` permanently.
    pub fn sample(&self, elapsed: f64) -> VisualState {
        if elapsed <= 0.0 {
            return VisualState::resting(self.hidden);
        }
        let t = if self.duration <= 0.0 {
            1.0
        } else {
            (elapsed / self.duration).clamp(0.0, 1.0)
        };
        let k = self.easing.progress(t);
        VisualState {
            opacity: self.hidden.opacity + (self.visible.opacity - self.hidden.opacity) * k,
            offset_y: self.hidden.offset_y + (self.visible.offset_y - self.hidden.offset_y) * k,
        }
    }

    fn style_with_delay(&self, revealed: bool, delay: f64) -> String {
        if revealed {
            format!(
                "{};transition:opacity {dur}s {ease} {delay}s,transform {dur}s {ease} {delay}s",
                self.visible.style(),
                dur = self.duration,
                ease = self.easing.css(),
                delay = delay,
            )
        } else {
            self.hidden.style()
        }
    }
}

/// Container plus per-child visual states at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub container: VisualState,
    pub children: Vec<VisualState>,
}

/// Gates a container entrance and a staggered run of child entrances behind
/// one reveal signal.
///
/// The container starts the moment the signal fires; child `i` starts
/// `i * stagger` seconds later, so children never lead the container. The
/// signal is a fire-once latch, so there is no reverse playback: once the
/// timeline completes everything rests at its visible state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sequencer {
    container: Entrance,
    child: Entrance,
    children: usize,
}

impl Sequencer {
    pub const fn new(container: Entrance, child: Entrance, children: usize) -> Self {
        Sequencer {
            container,
            child,
            children,
        }
    }

    /// Transition start of child `index`, in seconds after the reveal
    /// instant. The stagger is declared on the container entrance, matching
    /// where the sections declare it.
    pub fn child_start(&self, index: usize) -> f64 {
        index as f64 * self.container.stagger()
    }

    /// Seconds from the reveal instant until every element rests visible.
    pub fn total_duration(&self) -> f64 {
        let last_child = if self.children == 0 {
            0.0
        } else {
            self.child_start(self.children - 1) + self.child.duration()
        };
        if self.container.duration() > last_child {
            self.container.duration()
        } else {
            last_child
        }
    }

    /// Timeline frame `since_reveal` seconds after the signal fired; `None`
    /// while the signal is still down pins everything to its hidden state.
    ///
    /// An element already in view at initial layout still gets `Some(0.0)`
    /// here — the timeline always plays from hidden rather than snapping.
    pub fn frame(&self, since_reveal: Option<f64>) -> Frame {
        let elapsed = since_reveal.unwrap_or(0.0);
        Frame {
            container: self.container.sample(elapsed),
            children: (0..self.children)
                .map(|i| self.child.sample(elapsed - self.child_start(i)))
                .collect(),
        }
    }

    /// Inline style for the container under the current reveal state.
    pub fn container_style(&self, revealed: bool) -> String {
        self.container.style_with_delay(revealed, 0.0)
    }

    /// Inline style for child `index`, delayed behind the container by its
    /// stagger slot.
    pub fn child_style(&self, revealed: bool, index: usize) -> String {
        self.child.style_with_delay(revealed, self.child_start(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEQ: Sequencer = Sequencer::new(
        Entrance::fade(0.8).with_stagger(0.2),
        Entrance::rise(30.0, 0.8),
        4,
    );

    #[test]
    fn everything_hidden_while_signal_down() {
        let frame = SEQ.frame(None);
        assert_eq!(frame.container.opacity, 0.0);
        assert_eq!(frame.children.len(), 4);
        for child in &frame.children {
            assert_eq!(child.opacity, 0.0);
            assert_eq!(child.offset_y, 30.0);
        }
    }

    #[test]
    fn reveal_plays_from_hidden_even_when_already_in_view() {
        // The observer may fire on the very first layout; the timeline still
        // starts at the hidden state instead of snapping to visible.
        let frame = SEQ.frame(Some(0.0));
        assert_eq!(frame.container.opacity, 0.0);
        assert_eq!(frame.children[0].opacity, 0.0);

        let mid = SEQ.frame(Some(0.4));
        assert!(mid.container.opacity > 0.0 && mid.container.opacity < 1.0);
    }

    #[test]
    fn timeline_rests_at_visible_permanently() {
        let done = SEQ.frame(Some(SEQ.total_duration() + 5.0));
        assert_eq!(done.container.opacity, 1.0);
        for child in &done.children {
            assert_eq!(child.opacity, 1.0);
            assert_eq!(child.offset_y, 0.0);
        }
    }

    #[test]
    fn opacity_and_offset_are_monotonic() {
        let entrance = Entrance::rise(30.0, 0.8);
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            let entrance = entrance.with_easing(easing);
            let mut last = entrance.sample(0.0);
            let mut t = 0.0;
            while t <= 1.0 {
                let state = entrance.sample(t);
                assert!(state.opacity >= last.opacity, "opacity dipped under {easing:?}");
                assert!(state.offset_y <= last.offset_y, "offset rose under {easing:?}");
                last = state;
                t += 0.05;
            }
        }
    }

    #[test]
    fn children_start_after_the_container_in_stagger_order() {
        for i in 0..4 {
            let start = SEQ.child_start(i);
            assert!((start - i as f64 * 0.2).abs() < 1e-9);
            // strictly hidden right up to its own start
            let frame = SEQ.frame(Some(start));
            assert_eq!(frame.children[i].opacity, 0.0);
            // earlier siblings are already moving by then
            if i > 0 {
                assert!(frame.children[i - 1].opacity > 0.0);
            }
        }
    }

    #[test]
    fn easing_curves_hit_both_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert_eq!(easing.progress(0.0), 0.0);
            assert_eq!(easing.progress(1.0), 1.0);
            // out-of-range inputs clamp instead of extrapolating
            assert_eq!(easing.progress(-2.0), 0.0);
            assert_eq!(easing.progress(3.0), 1.0);
        }
    }

    #[test]
    fn hidden_style_has_no_transition() {
        let style = SEQ.container_style(false);
        assert!(style.contains("opacity:0"));
        assert!(!style.contains("transition"));
    }

    #[test]
    fn revealed_child_style_carries_its_stagger_delay() {
        let style = SEQ.child_style(true, 2);
        assert!(style.contains("opacity:1"));
        assert!(style.contains("translateY(0px)"));
        assert!(style.contains("ease-out"));
        assert!(style.contains("0.4s"));
    }

    #[test]
    fn total_duration_covers_the_last_child() {
        // container: 0.8s; last child starts at 0.6s and runs 0.8s
        assert!((SEQ.total_duration() - 1.4).abs() < 1e-9);
    }
}

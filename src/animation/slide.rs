use std::collections::HashMap;

use crate::{
    foundation::error::{MarqueeError, MarqueeResult},
    style::inline::{BoxSizing, Display, HostKey, Millis, Overflow, StyleHost},
};

/// Properties a slide animates, as written into `transition-property`.
const TRANSITION_PROPERTIES: &str = "height, margin, padding";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SlideKind {
    Open,
    Close,
}

#[derive(Clone, Copy, Debug)]
struct PendingCleanup {
    token: u64,
    kind: SlideKind,
    deadline: Millis,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Completion handle for one slide call.
///
/// Stays live until the slide settles, is cancelled, or a newer slide on the
/// same element supersedes it.
pub struct SlideHandle {
    key: HostKey,
    token: u64,
}

impl SlideHandle {
    /// The element this handle belongs to.
    pub fn key(&self) -> HostKey {
        self.key
    }
}

#[derive(Debug, Default)]
/// Drives slide-open/slide-close transitions and their deferred cleanup.
///
/// The controller never waits: each slide call rewrites the element's inline
/// styles, records a cleanup deadline, and returns a [`SlideHandle`]. The
/// embedder's loop calls [`TransitionController::settle`] with the current
/// clock to fire cleanups that have come due. At most one cleanup is pending
/// per element; starting a new slide on the same element supersedes the old
/// one, so a stale cleanup can never clobber a reversed animation.
///
/// Time is a caller-supplied monotonic [`Millis`] clock, which keeps
/// settlement deterministic under test.
pub struct TransitionController {
    pending: HashMap<HostKey, PendingCleanup>,
    next_token: u64,
}

impl TransitionController {
    /// Create a controller with no pending cleanups.
    pub fn new() -> Self {
        Self::default()
    }

    #[tracing::instrument(skip(self, host))]
    /// Slide an element open from zero height to its natural height.
    ///
    /// Measures the natural height with the element temporarily shown,
    /// collapses height/padding/margin to zero, flushes layout so the
    /// collapsed state is the transition's starting point, then restores the
    /// measured height under a `height, margin, padding` transition of
    /// `duration`. Cleanup is scheduled for `now + duration`; until it fires,
    /// height/overflow/transition overrides remain pinned.
    ///
    /// A zero `duration` is rejected before any style is touched.
    pub fn slide_down(
        &mut self,
        host: &mut impl StyleHost,
        duration: Millis,
        now: Millis,
    ) -> MarqueeResult<SlideHandle> {
        ensure_duration(duration)?;

        host.inline_mut().display = None;
        let mut display = host.computed_display();
        if display == Display::None {
            display = Display::Block;
        }
        host.inline_mut().display = Some(display);
        let height = host.offset_height();

        let styles = host.inline_mut();
        styles.overflow = Some(Overflow::Hidden);
        styles.height = Some(0.0);
        styles.padding_top = Some(0.0);
        styles.padding_bottom = Some(0.0);
        styles.margin_top = Some(0.0);
        styles.margin_bottom = Some(0.0);
        let _ = host.offset_height();

        let styles = host.inline_mut();
        styles.box_sizing = Some(BoxSizing::BorderBox);
        styles.transition_property = Some(TRANSITION_PROPERTIES.to_string());
        styles.transition_duration = Some(duration);
        styles.height = Some(height);
        styles.padding_top = None;
        styles.padding_bottom = None;
        styles.margin_top = None;
        styles.margin_bottom = None;

        Ok(self.schedule(host.key(), SlideKind::Open, now, duration))
    }

    #[tracing::instrument(skip(self, host))]
    /// Slide an element closed from its current height to zero.
    ///
    /// Pins the current height under a `height, margin, padding` transition
    /// of `duration`, flushes layout, then collapses height/padding/margin
    /// to zero. The cleanup scheduled for `now + duration` hides the element
    /// with `display: none` and strips the animation overrides.
    ///
    /// A zero `duration` is rejected before any style is touched.
    pub fn slide_up(
        &mut self,
        host: &mut impl StyleHost,
        duration: Millis,
        now: Millis,
    ) -> MarqueeResult<SlideHandle> {
        ensure_duration(duration)?;

        let styles = host.inline_mut();
        styles.transition_property = Some(TRANSITION_PROPERTIES.to_string());
        styles.transition_duration = Some(duration);
        styles.box_sizing = Some(BoxSizing::BorderBox);
        let height = host.offset_height();
        host.inline_mut().height = Some(height);
        let _ = host.offset_height();

        let styles = host.inline_mut();
        styles.overflow = Some(Overflow::Hidden);
        styles.height = Some(0.0);
        styles.padding_top = Some(0.0);
        styles.padding_bottom = Some(0.0);
        styles.margin_top = Some(0.0);
        styles.margin_bottom = Some(0.0);

        Ok(self.schedule(host.key(), SlideKind::Close, now, duration))
    }

    /// Fire the element's pending cleanup if its deadline has passed.
    ///
    /// Returns whether a cleanup ran. An open cleanup clears the
    /// height/overflow/transition overrides, leaving the element visible; a
    /// close cleanup additionally sets `display: none` and clears the zeroed
    /// paddings and margins. The `box-sizing: border-box` override is left
    /// in place either way. Superseded and cancelled cleanups never run.
    pub fn settle(&mut self, host: &mut impl StyleHost, now: Millis) -> bool {
        let key = host.key();
        let Some(pending) = self.pending.get(&key) else {
            return false;
        };
        if now.0 < pending.deadline.0 {
            return false;
        }
        let kind = pending.kind;
        self.pending.remove(&key);

        let styles = host.inline_mut();
        match kind {
            SlideKind::Open => {
                styles.height = None;
                styles.overflow = None;
                styles.transition_duration = None;
                styles.transition_property = None;
            }
            SlideKind::Close => {
                styles.display = Some(Display::None);
                styles.height = None;
                styles.padding_top = None;
                styles.padding_bottom = None;
                styles.margin_top = None;
                styles.margin_bottom = None;
                styles.overflow = None;
                styles.transition_duration = None;
                styles.transition_property = None;
            }
        }
        true
    }

    /// Abandon a pending cleanup, leaving the element's styles as they are.
    ///
    /// Returns whether the handle was still live.
    pub fn cancel(&mut self, handle: &SlideHandle) -> bool {
        match self.pending.get(&handle.key) {
            Some(pending) if pending.token == handle.token => {
                self.pending.remove(&handle.key);
                true
            }
            _ => false,
        }
    }

    /// Whether the slide behind `handle` still has its cleanup ahead of it.
    ///
    /// `false` once the slide settled, was cancelled, or was superseded by a
    /// newer slide on the same element.
    pub fn is_pending(&self, handle: &SlideHandle) -> bool {
        self.pending
            .get(&handle.key)
            .is_some_and(|pending| pending.token == handle.token)
    }

    /// Earliest deadline across all pending cleanups.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.pending.values().map(|pending| pending.deadline).min()
    }

    /// Number of elements with a cleanup still pending.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    fn schedule(
        &mut self,
        key: HostKey,
        kind: SlideKind,
        now: Millis,
        duration: Millis,
    ) -> SlideHandle {
        self.next_token += 1;
        let token = self.next_token;
        self.pending.insert(
            key,
            PendingCleanup {
                token,
                kind,
                deadline: Millis(now.0.saturating_add(duration.0)),
            },
        );
        SlideHandle { key, token }
    }
}

fn ensure_duration(duration: Millis) -> MarqueeResult<()> {
    if duration.0 == 0 {
        return Err(MarqueeError::validation("slide duration must be > 0"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/slide.rs"]
mod tests;

use super::*;

use crate::style::inline::InlineStyles;

struct FakeHost {
    key: HostKey,
    stylesheet_display: Display,
    natural_height: f64,
    styles: InlineStyles,
    flushes: usize,
}

impl FakeHost {
    fn new(key: u64, stylesheet_display: Display, natural_height: f64) -> Self {
        Self {
            key: HostKey(key),
            stylesheet_display,
            natural_height,
            styles: InlineStyles::default(),
            flushes: 0,
        }
    }

    fn effective_display(&self) -> Display {
        self.styles.display.unwrap_or(self.stylesheet_display)
    }
}

impl StyleHost for FakeHost {
    fn key(&self) -> HostKey {
        self.key
    }

    fn inline(&self) -> &InlineStyles {
        &self.styles
    }

    fn inline_mut(&mut self) -> &mut InlineStyles {
        &mut self.styles
    }

    fn computed_display(&self) -> Display {
        self.stylesheet_display
    }

    fn offset_height(&mut self) -> f64 {
        self.flushes += 1;
        if self.effective_display() == Display::None {
            return 0.0;
        }
        self.styles.height.unwrap_or(self.natural_height)
    }
}

#[test]
fn slide_down_measures_then_collapses_then_restores() {
    let mut ctl = TransitionController::new();
    let mut host = FakeHost::new(1, Display::None, 120.0);

    let handle = ctl
        .slide_down(&mut host, Millis(300), Millis(1000))
        .unwrap();

    // Hidden by the stylesheet, so the element is shown as a block.
    assert_eq!(host.styles.display, Some(Display::Block));
    assert_eq!(host.styles.height, Some(120.0));
    assert_eq!(host.styles.padding_top, None);
    assert_eq!(host.styles.padding_bottom, None);
    assert_eq!(host.styles.margin_top, None);
    assert_eq!(host.styles.margin_bottom, None);
    assert_eq!(host.styles.overflow, Some(Overflow::Hidden));
    assert_eq!(host.styles.box_sizing, Some(BoxSizing::BorderBox));
    assert_eq!(
        host.styles.transition_property.as_deref(),
        Some("height, margin, padding")
    );
    assert_eq!(host.styles.transition_duration, Some(Millis(300)));

    assert_eq!(host.flushes, 2);
    assert!(ctl.is_pending(&handle));
    assert_eq!(ctl.next_deadline(), Some(Millis(1300)));
}

#[test]
fn slide_down_keeps_a_visible_stylesheet_display() {
    let mut ctl = TransitionController::new();
    let mut host = FakeHost::new(1, Display::Flex, 60.0);

    ctl.slide_down(&mut host, Millis(100), Millis(0)).unwrap();
    assert_eq!(host.styles.display, Some(Display::Flex));
}

#[test]
fn slide_up_pins_then_zeroes() {
    let mut ctl = TransitionController::new();
    let mut host = FakeHost::new(2, Display::Block, 80.0);

    let handle = ctl.slide_up(&mut host, Millis(200), Millis(0)).unwrap();

    assert_eq!(host.styles.height, Some(0.0));
    assert_eq!(host.styles.padding_top, Some(0.0));
    assert_eq!(host.styles.padding_bottom, Some(0.0));
    assert_eq!(host.styles.margin_top, Some(0.0));
    assert_eq!(host.styles.margin_bottom, Some(0.0));
    assert_eq!(host.styles.overflow, Some(Overflow::Hidden));
    assert_eq!(host.styles.box_sizing, Some(BoxSizing::BorderBox));
    assert_eq!(host.styles.transition_duration, Some(Millis(200)));
    // The element is not hidden until the cleanup fires.
    assert_eq!(host.styles.display, None);

    assert_eq!(host.flushes, 2);
    assert!(ctl.is_pending(&handle));
}

#[test]
fn settle_before_deadline_is_a_noop() {
    let mut ctl = TransitionController::new();
    let mut host = FakeHost::new(3, Display::Block, 50.0);

    ctl.slide_up(&mut host, Millis(200), Millis(100)).unwrap();
    let before = host.styles.clone();

    assert!(!ctl.settle(&mut host, Millis(299)));
    assert_eq!(host.styles, before);
    assert_eq!(ctl.pending_count(), 1);
}

#[test]
fn settle_after_open_strips_animation_overrides() {
    let mut ctl = TransitionController::new();
    let mut host = FakeHost::new(4, Display::None, 90.0);

    let handle = ctl.slide_down(&mut host, Millis(150), Millis(0)).unwrap();
    assert!(ctl.settle(&mut host, Millis(150)));

    assert_eq!(
        host.styles,
        InlineStyles {
            display: Some(Display::Block),
            box_sizing: Some(BoxSizing::BorderBox),
            ..InlineStyles::default()
        }
    );
    assert!(!ctl.is_pending(&handle));
    assert!(!ctl.settle(&mut host, Millis(1000)));
}

#[test]
fn settle_after_close_hides_the_element() {
    let mut ctl = TransitionController::new();
    let mut host = FakeHost::new(5, Display::Block, 90.0);

    ctl.slide_up(&mut host, Millis(150), Millis(0)).unwrap();
    assert!(ctl.settle(&mut host, Millis(150)));

    assert_eq!(
        host.styles,
        InlineStyles {
            display: Some(Display::None),
            box_sizing: Some(BoxSizing::BorderBox),
            ..InlineStyles::default()
        }
    );
    assert_eq!(host.effective_display(), Display::None);
}

#[test]
fn zero_duration_is_rejected_before_any_style_changes() {
    let mut ctl = TransitionController::new();
    let mut host = FakeHost::new(6, Display::Block, 40.0);

    assert!(ctl.slide_down(&mut host, Millis(0), Millis(0)).is_err());
    assert!(ctl.slide_up(&mut host, Millis(0), Millis(0)).is_err());

    assert!(host.styles.is_empty());
    assert_eq!(host.flushes, 0);
    assert_eq!(ctl.pending_count(), 0);
}

#[test]
fn newer_slide_supersedes_the_pending_cleanup() {
    let mut ctl = TransitionController::new();
    let mut host = FakeHost::new(7, Display::Block, 70.0);

    let close = ctl.slide_up(&mut host, Millis(100), Millis(0)).unwrap();
    let open = ctl.slide_down(&mut host, Millis(100), Millis(50)).unwrap();

    assert!(!ctl.is_pending(&close));
    assert!(ctl.is_pending(&open));
    assert_eq!(ctl.pending_count(), 1);

    // The stale close cleanup must not fire at its old deadline and hide
    // the reopened element.
    assert!(!ctl.settle(&mut host, Millis(100)));
    assert_eq!(host.styles.display, Some(Display::Block));

    assert!(ctl.settle(&mut host, Millis(150)));
    assert_eq!(host.styles.display, Some(Display::Block));
    assert_eq!(host.styles.height, None);
}

#[test]
fn cancel_abandons_the_cleanup_and_leaves_styles() {
    let mut ctl = TransitionController::new();
    let mut host = FakeHost::new(8, Display::Block, 70.0);

    let handle = ctl.slide_up(&mut host, Millis(100), Millis(0)).unwrap();
    assert!(ctl.cancel(&handle));
    assert!(!ctl.cancel(&handle));

    assert!(!ctl.settle(&mut host, Millis(500)));
    // Mid-animation styles stay exactly as the slide left them.
    assert_eq!(host.styles.height, Some(0.0));
    assert_eq!(host.styles.display, None);
}

#[test]
fn deadlines_track_multiple_elements() {
    let mut ctl = TransitionController::new();
    let mut a = FakeHost::new(10, Display::Block, 30.0);
    let mut b = FakeHost::new(11, Display::None, 45.0);

    ctl.slide_up(&mut a, Millis(100), Millis(0)).unwrap();
    ctl.slide_down(&mut b, Millis(300), Millis(0)).unwrap();

    assert_eq!(ctl.pending_count(), 2);
    assert_eq!(ctl.next_deadline(), Some(Millis(100)));

    assert!(ctl.settle(&mut a, Millis(120)));
    assert!(!ctl.settle(&mut b, Millis(120)));
    assert_eq!(ctl.pending_count(), 1);
    assert_eq!(ctl.next_deadline(), Some(Millis(300)));

    assert!(ctl.settle(&mut b, Millis(300)));
    assert_eq!(ctl.next_deadline(), None);
}

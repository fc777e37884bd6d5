//! Integration tests: the showcase screen driving both controllers over
//! simulated time, plus a headless egui frame to exercise the widgets.

use std::time::{Duration, Instant};

use vitrine::carousel::{CarouselPhase, SlideDirection, AUTOPLAY_INTERVAL, TRANSITION_DURATION};
use vitrine::content::ShowcaseContent;
use vitrine::ui::screens::ShowcaseScreen;
use vitrine::ui::theme::Theme;

#[test]
fn screen_builds_controllers_from_content() {
    let now = Instant::now();
    let content = ShowcaseContent::sample();
    let faq_len = content.faq.len();
    let slide_count = content.testimonials.len();

    let screen = ShowcaseScreen::new(content, now);

    assert_eq!(screen.accordion().len(), faq_len);
    let carousel = screen.carousel().expect("sample content has testimonials");
    assert_eq!(carousel.slide_count(), slide_count);
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn screen_without_testimonials_has_no_carousel() {
    let now = Instant::now();
    let content = ShowcaseContent {
        testimonials: Vec::new(),
        ..ShowcaseContent::sample()
    };

    let mut screen = ShowcaseScreen::new(content, now);

    assert!(screen.carousel().is_none());
    assert_eq!(screen.time_until_next_event(now), None);

    // Ticking with nothing bound must be harmless
    screen.tick(now + AUTOPLAY_INTERVAL * 2);
    assert!(screen.carousel().is_none());
}

/// The documented three-slide walkthrough: manual next, wait for the
/// transition, manual prev.
#[test]
fn three_slide_walkthrough() {
    let t0 = Instant::now();
    let content = ShowcaseContent::sample();
    assert_eq!(content.testimonials.len(), 3);

    let mut screen = ShowcaseScreen::new(content, t0);

    {
        let carousel = screen.carousel().unwrap();
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.phase(), CarouselPhase::Idle);
    }

    // next(): index becomes 1 immediately, direction Next
    let mut now = t0 + Duration::from_secs(1);
    screen.tick(now);
    {
        // Controllers are driven the way the widgets drive them
        let carousel = screen_carousel_mut(&mut screen);
        assert!(carousel.next(now));
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.outgoing(), Some((0, SlideDirection::Next)));
    }

    // 600 ms later the outgoing slide is gone and the carousel is idle
    now += TRANSITION_DURATION;
    screen.tick(now);
    {
        let carousel = screen.carousel().unwrap();
        assert_eq!(carousel.phase(), CarouselPhase::Idle);
        assert!(carousel.outgoing().is_none());
    }

    // prev(): back to index 0
    {
        let carousel = screen_carousel_mut(&mut screen);
        assert!(carousel.prev(now));
        assert_eq!(carousel.current_index(), 0);
    }
}

/// Autoplay alone cycles through all slides and wraps.
#[test]
fn autoplay_cycles_through_all_slides() {
    let t0 = Instant::now();
    let mut screen = ShowcaseScreen::new(ShowcaseContent::sample(), t0);

    let mut expected = 0;
    let mut deadline = t0 + AUTOPLAY_INTERVAL;
    for _ in 0..4 {
        screen.tick(deadline);
        expected = (expected + 1) % 3;
        assert_eq!(screen.carousel().unwrap().current_index(), expected);

        screen.tick(deadline + TRANSITION_DURATION);
        assert_eq!(screen.carousel().unwrap().phase(), CarouselPhase::Idle);

        deadline += AUTOPLAY_INTERVAL;
    }

    // Three automatic advances on a three-slide deck wrap to the start
    assert_eq!(screen.carousel().unwrap().current_index(), 1);
}

/// A swipe resets the autoplay clock just like any other manual navigation.
#[test]
fn swipe_navigation_restarts_autoplay() {
    let t0 = Instant::now();
    let mut screen = ShowcaseScreen::new(ShowcaseContent::sample(), t0);

    let t_swipe = t0 + Duration::from_secs(4);
    {
        let carousel = screen_carousel_mut(&mut screen);
        carousel.touch_start(300.0);
        assert!(carousel.touch_end(200.0, t_swipe));
        assert_eq!(carousel.current_index(), 1);
    }
    screen.tick(t_swipe + TRANSITION_DURATION);

    // The pre-swipe deadline passes without effect
    screen.tick(t0 + AUTOPLAY_INTERVAL);
    assert_eq!(screen.carousel().unwrap().current_index(), 1);

    // The post-swipe deadline fires
    screen.tick(t_swipe + AUTOPLAY_INTERVAL);
    assert_eq!(screen.carousel().unwrap().current_index(), 2);
}

/// The widgets render in a headless egui context without panicking, both
/// at rest and mid-transition.
#[test]
fn screen_renders_headless() {
    let t0 = Instant::now();
    let mut screen = ShowcaseScreen::new(ShowcaseContent::sample(), t0);
    screen_carousel_mut(&mut screen).next(t0);

    let ctx = egui::Context::default();
    let palette = Theme::Dark.palette();

    for offset_ms in [0u64, 300, 700] {
        let now = t0 + Duration::from_millis(offset_ms);
        screen.tick(now);
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                screen.show(ui, now, palette);
            });
        });
    }

    assert_eq!(screen.carousel().unwrap().current_index(), 1);
}

/// Accordion state is owned by the screen and survives renders.
#[test]
fn accordion_state_is_independent_of_rendering() {
    let t0 = Instant::now();
    let mut screen = ShowcaseScreen::new(ShowcaseContent::sample(), t0);

    screen_accordion_mut(&mut screen).toggle(0);
    screen_accordion_mut(&mut screen).toggle(2);

    let ctx = egui::Context::default();
    let palette = Theme::Light.palette();
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            screen.show(ui, t0, palette);
        });
    });

    assert!(screen.accordion().is_expanded(0));
    assert!(!screen.accordion().is_expanded(1));
    assert!(screen.accordion().is_expanded(2));
}

fn screen_carousel_mut(screen: &mut ShowcaseScreen) -> &mut vitrine::CarouselController {
    screen.carousel_mut().expect("carousel expected")
}

fn screen_accordion_mut(screen: &mut ShowcaseScreen) -> &mut vitrine::AccordionController {
    screen.accordion_mut()
}

//! A full session across both screens, ticked frame by frame

use halo_animation::AnimationScheduler;
use halo_app::{Action, AppConfig, Category, HapticsScreen, Screen};
use halo_core::{DrawCommand, RecordingContext, Size};
use halo_platform::{Feedback, ImpactStyle, NotificationKind, RecordingHaptics, ScreenEvent};
use std::f32::consts::TAU;
use std::sync::Arc;

const FRAME_MS: f32 = 1000.0 / 60.0;

fn frame(screen: &dyn Screen, size: Size) -> Vec<DrawCommand> {
    let mut ctx = RecordingContext::new(size);
    screen.paint(&mut ctx);
    ctx.take_commands()
}

#[test]
fn test_full_session() {
    let scheduler = AnimationScheduler::new();
    let engine = Arc::new(RecordingHaptics::new());
    let mut main = HapticsScreen::new(&AppConfig::default(), engine.clone(), scheduler.handle())
        .expect("default config is valid");

    let size = Size::new(390.0, 844.0);
    main.handle_event(ScreenEvent::resized(size.width, size.height));
    main.handle_event(ScreenEvent::DidAppear);

    for _ in 0..60 {
        scheduler.tick_by(FRAME_MS);
    }
    // Ten-second period: one second in is a tenth of a turn
    assert!((main.glow().angle() - TAU / 10.0).abs() < 1e-3);
    assert!(!frame(&main, size).is_empty());

    main.tap(Action::Impact(ImpactStyle::Soft));
    main.select_category(Category::Selection);
    main.tap(Action::MultipleSelections);
    for _ in 0..60 {
        scheduler.tick_by(FRAME_MS);
    }

    // Compose over the main screen
    let mut composer = main.open_composer().expect("composer config is valid");
    composer.handle_event(ScreenEvent::resized(size.width, size.height));
    composer.handle_event(ScreenEvent::DidAppear);
    assert_eq!(scheduler.loop_count(), 2);

    composer.insert("ship it");
    assert!(composer.send());
    assert!(composer.is_dismissed());
    composer.handle_event(ScreenEvent::WillDisappear);
    assert_eq!(scheduler.loop_count(), 1);

    main.handle_event(ScreenEvent::WillDisappear);
    assert_eq!(scheduler.loop_count(), 0);
    assert_eq!(main.glow().angle(), 0.0);

    let mut expected = vec![Feedback::Impact(ImpactStyle::Soft), Feedback::Selection];
    expected.extend([Feedback::Selection; 5]);
    expected.push(Feedback::Impact(ImpactStyle::Light));
    expected.push(Feedback::Notification(NotificationKind::Success));
    assert_eq!(engine.triggered(), expected);
}

#[test]
fn test_degenerate_viewport_session() {
    let scheduler = AnimationScheduler::new();
    let engine = Arc::new(RecordingHaptics::new());
    let mut main = HapticsScreen::new(&AppConfig::default(), engine, scheduler.handle())
        .expect("default config is valid");

    main.handle_event(ScreenEvent::resized(0.0, 0.0));
    main.handle_event(ScreenEvent::DidAppear);
    scheduler.tick_by(FRAME_MS);

    assert!(frame(&main, Size::ZERO).is_empty());
    assert!(main.glow().is_animating());
}

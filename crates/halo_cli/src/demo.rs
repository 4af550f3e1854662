//! Scripted session over both screens with logged haptics

use anyhow::{Context, Result};
use halo_animation::AnimationScheduler;
use halo_app::{controls_for, AppConfig, Category, HapticsScreen, Screen};
use halo_core::{RecordingContext, Size};
use halo_platform::{LoggingHaptics, ScreenEvent};
use std::sync::Arc;
use tracing::info;

const FRAME_MS: f32 = 1000.0 / 60.0;
const VIEWPORT: Size = Size::new(390.0, 844.0);

/// Frame counters for the session summary
#[derive(Default)]
struct Stats {
    frames: u64,
    commands: u64,
}

/// Tick and paint `frames` frames of `screen`
fn play_frames(
    scheduler: &AnimationScheduler,
    screen: &dyn Screen,
    frames: u32,
    stats: &mut Stats,
) {
    for _ in 0..frames {
        scheduler.tick_by(FRAME_MS);
        let mut ctx = RecordingContext::new(VIEWPORT);
        screen.paint(&mut ctx);
        stats.frames += 1;
        stats.commands += ctx.commands().len() as u64;
    }
}

pub fn run(config: &AppConfig, frames: u32) -> Result<()> {
    let scheduler = AnimationScheduler::new();
    let mut stats = Stats::default();
    let mut main = HapticsScreen::new(config, Arc::new(LoggingHaptics), scheduler.handle())
        .context("Invalid main screen configuration")?;

    info!("Main screen appears");
    main.handle_event(ScreenEvent::resized(VIEWPORT.width, VIEWPORT.height));
    main.handle_event(ScreenEvent::DidAppear);
    play_frames(&scheduler, &main, frames, &mut stats);

    for category in Category::ALL {
        info!("Category: {}", category.label());
        main.select_category(category);
        for control in controls_for(category) {
            info!("Tap: {} ({})", control.title, control.subtitle);
            main.tap(control.action);
            play_frames(&scheduler, &main, frames, &mut stats);
        }
    }

    info!("Picker: {}", halo_app::haptics::PICKER_OPTIONS[1]);
    main.pick_option(1);

    info!("Toggle haptics off and on");
    main.set_haptics_enabled(false);
    main.set_haptics_enabled(true);
    play_frames(&scheduler, &main, frames, &mut stats);

    info!("Open composer");
    let mut composer = main
        .open_composer()
        .context("Invalid composer configuration")?;
    composer.handle_event(ScreenEvent::resized(VIEWPORT.width, VIEWPORT.height));
    composer.handle_event(ScreenEvent::DidAppear);
    for word in ["glow ", "borders ", "all ", "the ", "way ", "down"] {
        composer.insert(word);
        play_frames(&scheduler, &composer, frames.min(10), &mut stats);
    }

    info!("Send: {:?}", composer.text());
    composer.send();
    composer.handle_event(ScreenEvent::WillDisappear);
    play_frames(&scheduler, &main, frames, &mut stats);

    main.handle_event(ScreenEvent::WillDisappear);

    println!("Session complete");
    println!("  frames painted:    {}", stats.frames);
    println!(
        "  commands / frame:  {:.1}",
        stats.commands as f64 / stats.frames.max(1) as f64
    );
    println!("  loops registered:  {}", scheduler.loop_count());
    println!("  timers pending:    {}", scheduler.timer_count());

    Ok(())
}

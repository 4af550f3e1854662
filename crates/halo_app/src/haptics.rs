//! The haptics playground screen
//!
//! Lists the feedback patterns of one category at a time. Every tap is gated
//! by the "Enable Haptics" toggle. A faint glow border sits on top of the
//! content.

use crate::composer::ComposerScreen;
use crate::config::AppConfig;
use crate::error::Result;
use crate::screen::{drive_glow, play, Screen};
use halo_animation::SchedulerHandle;
use halo_border::{GlowBorder, GlowBorderSpec};
use halo_core::DrawContext;
use halo_platform::{Feedback, HapticEngine, ImpactStyle, NotificationKind, ScreenEvent};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub const TITLE: &str = "VIBECOOODEEEEEEERS NAHUUUUY";
pub const DESCRIPTION: &str = "Explore all iOS haptic feedback types. Each button demonstrates \
     different haptic patterns that you can feel on your iPhone.";

/// Selections played by the "Multiple Selections" control
pub const BURST_COUNT: usize = 5;
/// Spacing between burst selections
pub const BURST_INTERVAL_MS: f32 = 200.0;

/// Options offered by the selection picker
pub const PICKER_OPTIONS: [&str; 3] = ["Option 1", "Option 2", "Option 3"];

/// Feedback family shown on screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    Impact,
    Notification,
    Selection,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Impact, Category::Notification, Category::Selection];

    /// Segment label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Impact => "Impact",
            Category::Notification => "Notification",
            Category::Selection => "Selection",
        }
    }

    pub fn section_title(&self) -> &'static str {
        match self {
            Category::Impact => "Impact Feedback",
            Category::Notification => "Notification Feedback",
            Category::Selection => "Selection Feedback",
        }
    }

    pub fn section_subtitle(&self) -> &'static str {
        match self {
            Category::Impact => "Physical impact sensations with varying intensities",
            Category::Notification => "Contextual feedback for different notification types",
            Category::Selection => "Feedback for UI element selection and interaction",
        }
    }
}

/// What a control does when tapped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Impact(ImpactStyle),
    Notification(NotificationKind),
    SelectionChanged,
    /// A burst of selections spaced [`BURST_INTERVAL_MS`] apart
    MultipleSelections,
}

/// One tappable row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Control {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// SF Symbols name
    pub icon: &'static str,
    pub action: Action,
}

impl Control {
    const fn new(
        title: &'static str,
        subtitle: &'static str,
        icon: &'static str,
        action: Action,
    ) -> Self {
        Self {
            title,
            subtitle,
            icon,
            action,
        }
    }
}

/// Rows for `category`, top to bottom
pub fn controls_for(category: Category) -> Vec<Control> {
    match category {
        Category::Impact => vec![
            Control::new(
                "Light Impact",
                "Subtle, gentle vibration",
                "circle.fill",
                Action::Impact(ImpactStyle::Light),
            ),
            Control::new(
                "Medium Impact",
                "Moderate vibration strength",
                "circle.fill",
                Action::Impact(ImpactStyle::Medium),
            ),
            Control::new(
                "Heavy Impact",
                "Strong, pronounced vibration",
                "circle.fill",
                Action::Impact(ImpactStyle::Heavy),
            ),
            Control::new(
                "Rigid Impact",
                "Sharp, precise vibration",
                "square.fill",
                Action::Impact(ImpactStyle::Rigid),
            ),
            Control::new(
                "Soft Impact",
                "Gentle, rounded vibration",
                "oval.fill",
                Action::Impact(ImpactStyle::Soft),
            ),
        ],
        Category::Notification => vec![
            Control::new(
                "Success",
                "Positive outcome feedback",
                "checkmark.circle.fill",
                Action::Notification(NotificationKind::Success),
            ),
            Control::new(
                "Warning",
                "Cautionary feedback",
                "exclamationmark.triangle.fill",
                Action::Notification(NotificationKind::Warning),
            ),
            Control::new(
                "Error",
                "Negative outcome feedback",
                "xmark.circle.fill",
                Action::Notification(NotificationKind::Error),
            ),
        ],
        Category::Selection => vec![
            Control::new(
                "Selection Changed",
                "Single selection feedback",
                "hand.tap.fill",
                Action::SelectionChanged,
            ),
            Control::new(
                "Multiple Selections",
                "Rapid selection changes",
                "hand.tap.fill",
                Action::MultipleSelections,
            ),
        ],
    }
}

/// The main screen
pub struct HapticsScreen {
    glow: GlowBorder,
    engine: Arc<dyn HapticEngine>,
    scheduler: SchedulerHandle,
    /// Shared with composers so their send handler sees the current toggle
    haptics_enabled: Arc<AtomicBool>,
    category: Category,
    controls: Vec<Control>,
    picker_index: usize,
    composer_spec: GlowBorderSpec,
}

impl HapticsScreen {
    pub fn new(
        config: &AppConfig,
        engine: Arc<dyn HapticEngine>,
        scheduler: SchedulerHandle,
    ) -> Result<Self> {
        config.composer_glow.validate()?;
        let glow = GlowBorder::new(config.main_glow.clone(), scheduler.clone())?;
        engine.prepare();

        let category = Category::default();
        Ok(Self {
            glow,
            engine,
            scheduler,
            haptics_enabled: Arc::new(AtomicBool::new(config.haptics_enabled)),
            category,
            controls: controls_for(category),
            picker_index: 0,
            composer_spec: config.composer_glow.clone(),
        })
    }

    pub fn haptics_enabled(&self) -> bool {
        self.haptics_enabled.load(Ordering::Relaxed)
    }

    /// Flip the toggle; turning it on plays a light impact
    pub fn set_haptics_enabled(&mut self, enabled: bool) {
        if self.haptics_enabled.swap(enabled, Ordering::Relaxed) == enabled {
            return;
        }
        tracing::debug!("HapticsScreen: haptics {}", if enabled { "on" } else { "off" });
        if enabled {
            self.play(Feedback::Impact(ImpactStyle::Light));
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Switch category and rebuild the control list
    pub fn select_category(&mut self, category: Category) {
        if category == self.category {
            return;
        }
        self.category = category;
        self.play_if_enabled(Feedback::Selection);
        self.controls = controls_for(category);
    }

    /// Rows of the current category
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// Whether the selection picker is shown
    pub fn shows_picker(&self) -> bool {
        self.category == Category::Selection
    }

    pub fn picker_index(&self) -> usize {
        self.picker_index
    }

    /// Choose a picker option; out-of-range indices are ignored
    pub fn pick_option(&mut self, index: usize) {
        if index >= PICKER_OPTIONS.len() || index == self.picker_index {
            return;
        }
        self.picker_index = index;
        self.play_if_enabled(Feedback::Selection);
    }

    /// Perform a control's action
    pub fn tap(&self, action: Action) {
        if !self.haptics_enabled() {
            return;
        }
        match action {
            Action::Impact(style) => self.play(Feedback::Impact(style)),
            Action::Notification(kind) => self.play(Feedback::Notification(kind)),
            Action::SelectionChanged => self.play(Feedback::Selection),
            Action::MultipleSelections => self.schedule_burst(),
        }
    }

    /// Present a composer whose send plays a success notification
    pub fn open_composer(&self) -> Result<ComposerScreen> {
        let engine = Arc::clone(&self.engine);
        let enabled = Arc::clone(&self.haptics_enabled);
        let composer = ComposerScreen::new(self.composer_spec.clone(), self.scheduler.clone())?
            .on_send(move |_text| {
                if enabled.load(Ordering::Relaxed) {
                    play(&*engine, Feedback::Notification(NotificationKind::Success));
                }
            });
        self.play_if_enabled(Feedback::Impact(ImpactStyle::Light));
        Ok(composer)
    }

    fn schedule_burst(&self) {
        for i in 0..BURST_COUNT {
            let engine = Arc::clone(&self.engine);
            let delay = i as f32 * BURST_INTERVAL_MS;
            let scheduled = self
                .scheduler
                .schedule_after(delay, move || play(&*engine, Feedback::Selection));
            if scheduled.is_none() {
                tracing::warn!("HapticsScreen: scheduler gone, selection burst dropped");
                return;
            }
        }
    }

    fn play(&self, feedback: Feedback) {
        play(&*self.engine, feedback);
    }

    fn play_if_enabled(&self, feedback: Feedback) {
        if self.haptics_enabled() {
            self.play(feedback);
        }
    }
}

impl Screen for HapticsScreen {
    fn title(&self) -> &str {
        TITLE
    }

    fn handle_event(&mut self, event: ScreenEvent) {
        drive_glow(&mut self.glow, event);
    }

    fn paint(&self, ctx: &mut dyn DrawContext) {
        self.glow.paint(ctx);
    }

    fn glow(&self) -> &GlowBorder {
        &self.glow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use halo_animation::AnimationScheduler;
    use halo_platform::RecordingHaptics;

    fn screen(scheduler: &AnimationScheduler) -> (HapticsScreen, Arc<RecordingHaptics>) {
        let engine = Arc::new(RecordingHaptics::new());
        let screen = HapticsScreen::new(
            &AppConfig::default(),
            engine.clone(),
            scheduler.handle(),
        )
        .unwrap();
        (screen, engine)
    }

    #[test]
    fn test_initial_state() {
        let scheduler = AnimationScheduler::new();
        let (screen, engine) = screen(&scheduler);

        assert!(screen.haptics_enabled());
        assert_eq!(screen.category(), Category::Impact);
        assert_eq!(screen.controls().len(), 5);
        assert_eq!(screen.controls()[3].icon, "square.fill");
        assert!(!screen.shows_picker());
        assert_eq!(engine.prepared(), 1);
        assert_eq!(engine.count(), 0);
    }

    #[test]
    fn test_every_control_plays_its_feedback() {
        let scheduler = AnimationScheduler::new();
        let (screen, engine) = screen(&scheduler);

        for control in controls_for(Category::Impact)
            .into_iter()
            .chain(controls_for(Category::Notification))
        {
            screen.tap(control.action);
        }

        let mut expected: Vec<Feedback> =
            ImpactStyle::ALL.iter().map(|s| Feedback::Impact(*s)).collect();
        expected.extend(NotificationKind::ALL.iter().map(|k| Feedback::Notification(*k)));
        assert_eq!(engine.triggered(), expected);
    }

    #[test]
    fn test_taps_gated_by_toggle() {
        let scheduler = AnimationScheduler::new();
        let (mut screen, engine) = screen(&scheduler);

        screen.set_haptics_enabled(false);
        screen.tap(Action::Impact(ImpactStyle::Heavy));
        screen.tap(Action::MultipleSelections);
        scheduler.tick_by(1_000.0);
        assert_eq!(engine.count(), 0);
        assert_eq!(scheduler.timer_count(), 0);
    }

    #[test]
    fn test_enabling_plays_light_impact() {
        let scheduler = AnimationScheduler::new();
        let (mut screen, engine) = screen(&scheduler);

        // Already on: no change, no feedback
        screen.set_haptics_enabled(true);
        assert_eq!(engine.count(), 0);

        screen.set_haptics_enabled(false);
        screen.set_haptics_enabled(true);
        assert_eq!(engine.triggered(), vec![Feedback::Impact(ImpactStyle::Light)]);
    }

    #[test]
    fn test_category_switch() {
        let scheduler = AnimationScheduler::new();
        let (mut screen, engine) = screen(&scheduler);

        screen.select_category(Category::Selection);
        assert_eq!(screen.controls().len(), 2);
        assert!(screen.shows_picker());
        assert_eq!(engine.triggered(), vec![Feedback::Selection]);

        screen.select_category(Category::Selection);
        assert_eq!(engine.count(), 1);

        screen.set_haptics_enabled(false);
        screen.select_category(Category::Notification);
        assert_eq!(screen.controls()[0].title, "Success");
        assert_eq!(engine.count(), 1);
    }

    #[test]
    fn test_multiple_selections_burst() {
        let scheduler = AnimationScheduler::new();
        let (screen, engine) = screen(&scheduler);

        screen.tap(Action::MultipleSelections);
        assert_eq!(scheduler.timer_count(), BURST_COUNT);
        assert_eq!(engine.count(), 0);

        scheduler.tick_by(0.0);
        assert_eq!(engine.count(), 1);

        scheduler.tick_by(400.0);
        assert_eq!(engine.count(), 3);

        scheduler.tick_by(400.0);
        assert_eq!(engine.triggered(), vec![Feedback::Selection; BURST_COUNT]);
        assert_eq!(scheduler.timer_count(), 0);
    }

    #[test]
    fn test_picker() {
        let scheduler = AnimationScheduler::new();
        let (mut screen, engine) = screen(&scheduler);

        screen.pick_option(0);
        screen.pick_option(7);
        assert_eq!(engine.count(), 0);

        screen.pick_option(2);
        assert_eq!(screen.picker_index(), 2);
        assert_eq!(engine.triggered(), vec![Feedback::Selection]);
    }

    #[test]
    fn test_composer_send_plays_success() {
        let scheduler = AnimationScheduler::new();
        let (mut screen, engine) = screen(&scheduler);

        let mut composer = screen.open_composer().unwrap();
        assert_eq!(engine.triggered(), vec![Feedback::Impact(ImpactStyle::Light)]);

        composer.insert("hi");
        assert!(composer.send());
        assert_eq!(
            engine.triggered().last(),
            Some(&Feedback::Notification(NotificationKind::Success))
        );

        // Toggle is read at send time
        let mut composer = screen.open_composer().unwrap();
        screen.set_haptics_enabled(false);
        engine.clear();
        composer.send();
        assert_eq!(engine.count(), 0);
    }

    #[test]
    fn test_failing_engine_is_absorbed() {
        let scheduler = AnimationScheduler::new();
        let (screen, engine) = screen(&scheduler);
        engine.set_unavailable(true);

        screen.tap(Action::SelectionChanged);
        screen.tap(Action::MultipleSelections);
        scheduler.tick_by(1_000.0);
        assert_eq!(engine.count(), 0);
    }

    #[test]
    fn test_lifecycle_drives_glow() {
        let scheduler = AnimationScheduler::new();
        let (mut screen, _engine) = screen(&scheduler);

        screen.handle_event(ScreenEvent::resized(390.0, 844.0));
        screen.handle_event(ScreenEvent::DidAppear);
        assert!(screen.glow().is_animating());
        assert_eq!(screen.glow().spec().opacity, 0.6);

        screen.handle_event(ScreenEvent::WillDisappear);
        assert!(!screen.glow().is_animating());
        assert_eq!(scheduler.loop_count(), 0);
    }
}

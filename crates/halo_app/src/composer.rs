//! Full-screen text composer framed by a glow border

use crate::error::Result;
use crate::screen::{drive_glow, Screen};
use halo_animation::SchedulerHandle;
use halo_border::{GlowBorder, GlowBorderSpec};
use halo_core::DrawContext;
use halo_platform::ScreenEvent;

/// Called once with the composed text when the user sends
pub type SendCallback = Box<dyn FnOnce(String) + Send + 'static>;

/// A text buffer with a send action
///
/// Sending hands the text to the presenter and dismisses the composer. The
/// host observes [`ComposerScreen::is_dismissed`] and delivers
/// `WillDisappear` as the screen leaves.
pub struct ComposerScreen {
    glow: GlowBorder,
    text: String,
    on_send: Option<SendCallback>,
    editing: bool,
    dismissed: bool,
}

impl ComposerScreen {
    pub fn new(spec: GlowBorderSpec, scheduler: SchedulerHandle) -> Result<Self> {
        Ok(Self {
            glow: GlowBorder::new(spec, scheduler)?,
            text: String::new(),
            on_send: None,
            editing: false,
            dismissed: false,
        })
    }

    /// Install the presenter's send handler
    pub fn on_send<F>(mut self, callback: F) -> Self
    where
        F: FnOnce(String) + Send + 'static,
    {
        self.on_send = Some(Box::new(callback));
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Append at the end of the buffer
    pub fn insert(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Remove the last character
    pub fn delete_backward(&mut self) {
        self.text.pop();
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// True while the text field holds input focus
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Deliver the text and dismiss
    ///
    /// Returns false without side effects when already dismissed.
    pub fn send(&mut self) -> bool {
        if self.dismissed {
            return false;
        }
        let text = self.text.clone();
        tracing::debug!("Composer: sending {} chars", text.chars().count());
        if let Some(callback) = self.on_send.take() {
            callback(text);
        }
        self.editing = false;
        self.dismissed = true;
        true
    }
}

impl Screen for ComposerScreen {
    fn title(&self) -> &str {
        "Message Composer"
    }

    fn handle_event(&mut self, event: ScreenEvent) {
        drive_glow(&mut self.glow, event);
        match event {
            ScreenEvent::DidAppear => self.editing = !self.dismissed,
            ScreenEvent::WillDisappear => self.editing = false,
            ScreenEvent::Resized { .. } => {}
        }
    }

    fn paint(&self, ctx: &mut dyn DrawContext) {
        self.glow.paint(ctx);
    }

    fn glow(&self) -> &GlowBorder {
        &self.glow
    }
}

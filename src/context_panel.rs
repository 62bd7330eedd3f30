//! Floating panel that anchors itself above the chart it was opened from.
//!
//! A single panel is shared by every chart. Opening a slice moves the panel
//! on top of the owning chart and replaces its content. The panel can be
//! minimized to a narrow strip and maximized back to the chart width; both
//! directions animate the width and cross-fade the two content variants.

use egui::{Pos2, Rect};

use crate::config::ContextPanelConfig;
use crate::controllers::DetailView;
use crate::data::filters::FilterRegistry;
use crate::data::transition::Transition;

/// A detail view hosted by the panel, with the chart and time step it was
/// opened for.
pub struct PanelContent {
    pub owner: String,
    pub time_step: usize,
    pub view: Box<dyn DetailView>,
}

pub struct ContextPanel {
    config: ContextPanelConfig,
    content: Option<PanelContent>,
    text: Option<String>,
    anchor: Option<Rect>,
    visible: bool,
    is_minimized: bool,
    expanded_width: f32,
    landing_width: f32,
    width: Transition<f32>,
    expanded_alpha: Transition<f32>,
    minimized_alpha: Transition<f32>,
    clock: f64,
}

impl Default for ContextPanel {
    fn default() -> Self {
        Self::new(ContextPanelConfig::default())
    }
}

impl ContextPanel {
    pub fn new(config: ContextPanelConfig) -> Self {
        Self {
            config,
            content: None,
            text: None,
            anchor: None,
            visible: false,
            is_minimized: false,
            expanded_width: 0.0,
            landing_width: 0.0,
            width: Transition::settled(0.0),
            expanded_alpha: Transition::settled(1.0),
            minimized_alpha: Transition::settled(0.0),
            clock: 0.0,
        }
    }

    /// Advance the panel clock (seconds).
    pub fn advance(&mut self, now: f64) {
        self.clock = now;
    }

    pub fn config(&self) -> &ContextPanelConfig {
        &self.config
    }

    /// Replace the hosted view. The previous view, if any, is destroyed and
    /// the panel text is cleared.
    pub fn set_content(&mut self, owner: &str, time_step: usize, view: Box<dyn DetailView>) {
        self.destroy_content();
        self.content = Some(PanelContent {
            owner: owner.to_string(),
            time_step,
            view,
        });
    }

    /// Free text shown above the hosted view.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Whether a filter exists on the hosted (variable, time step), i.e.
    /// whether the remove-filter button is enabled.
    pub fn can_remove_filter(&self, filters: &FilterRegistry) -> bool {
        self.content
            .as_ref()
            .is_some_and(|c| filters.find(&c.owner, c.time_step).is_some())
    }

    /// Remove the filter on the hosted (variable, time step) and clear the
    /// view's brush. Returns whether a filter was removed; the caller then
    /// refreshes every chart.
    pub fn remove_filter(&mut self, filters: &mut FilterRegistry) -> bool {
        let Some(content) = self.content.as_mut() else {
            return false;
        };
        if !filters.remove_filter(&content.owner, content.time_step) {
            return false;
        }
        log::debug!(
            "removed filter on '{}' at step {} from the panel",
            content.owner,
            content.time_step
        );
        content.view.clear_brush();
        true
    }

    /// Show the panel above `anchor`, sized to the anchor's width unless
    /// minimized.
    pub fn show_panel(&mut self, owner: &str, anchor: Rect) {
        log::debug!("context panel shown for '{owner}'");
        self.anchor = Some(anchor);
        self.expanded_width = anchor.width();
        let width = if self.is_minimized {
            self.config.minimized_width
        } else {
            self.expanded_width
        };
        self.width.snap(width);
        self.visible = true;
    }

    /// Shrink to the minimized strip, fading the expanded content out.
    pub fn minimize(&mut self) {
        self.is_minimized = true;
        let now = self.clock;
        self.minimized_alpha.retarget(1.0, now, self.config.fade_secs);
        self.expanded_alpha.retarget(0.0, now, self.config.fade_secs);
        self.width
            .retarget(self.config.minimized_width, now, self.config.resize_secs);
    }

    /// Grow back to the anchor width, fading the expanded content in.
    pub fn maximize(&mut self) {
        self.is_minimized = false;
        let now = self.clock;
        self.minimized_alpha.retarget(0.0, now, self.config.fade_secs);
        self.expanded_alpha.retarget(1.0, now, self.config.fade_secs);
        self.width
            .retarget(self.expanded_width, now, self.config.resize_secs);
    }

    /// Close action handed out with a detail view: tear the view down and
    /// hide the panel.
    pub fn close(&mut self) {
        self.destroy_content();
        self.visible = false;
    }

    /// Track the landing area width as the window resizes.
    pub fn on_screen_resize(&mut self, window_width: f32) {
        self.landing_width = window_width;
    }

    fn destroy_content(&mut self) {
        self.text = None;
        if let Some(mut content) = self.content.take() {
            log::debug!("destroying detail view '{}'", content.view.title());
            content.view.destroy();
        }
    }

    /// Top-left corner of the panel: directly above the anchor.
    pub fn position(&self) -> Option<Pos2> {
        self.anchor
            .map(|a| Pos2::new(a.left(), a.top() - self.config.height))
    }

    /// Displayed width at the current clock.
    pub fn current_width(&self) -> f32 {
        self.width.value_at(self.clock)
    }

    /// Width to draw: the animated width, never wider than the landing area
    /// once its width is known.
    pub fn display_width(&self) -> f32 {
        let width = self.current_width();
        if self.landing_width > 0.0 {
            width.min(self.landing_width)
        } else {
            width
        }
    }

    /// Opacity of the expanded content at the current clock.
    pub fn expanded_opacity(&self) -> f32 {
        self.expanded_alpha.value_at(self.clock)
    }

    /// Opacity of the minimized glyph at the current clock.
    pub fn minimized_opacity(&self) -> f32 {
        self.minimized_alpha.value_at(self.clock)
    }

    pub fn is_animating(&self) -> bool {
        self.width.is_animating(self.clock)
            || self.expanded_alpha.is_animating(self.clock)
            || self.minimized_alpha.is_animating(self.clock)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_minimized(&self) -> bool {
        self.is_minimized
    }

    pub fn landing_width(&self) -> f32 {
        self.landing_width
    }

    pub fn owner(&self) -> Option<&str> {
        self.content.as_ref().map(|c| c.owner.as_str())
    }

    pub fn content_mut(&mut self) -> Option<&mut PanelContent> {
        self.content.as_mut()
    }

    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }
}

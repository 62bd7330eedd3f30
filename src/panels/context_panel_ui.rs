//! Rendering of the floating [`ContextPanel`].

use egui::{Area, Context, Frame, Id, Order};

use crate::context_panel::ContextPanel;
use crate::data::filters::FilterRegistry;

/// Draw the panel above its anchor chart, if it is visible.
///
/// Returns `true` when the user removed a filter from the panel and every
/// chart needs a refresh.
pub fn show_context_panel(
    ctx: &Context,
    panel: &mut ContextPanel,
    filters: &mut FilterRegistry,
) -> bool {
    panel.advance(ctx.input(|i| i.time));
    panel.on_screen_resize(ctx.content_rect().width());
    if !panel.is_visible() {
        return false;
    }
    let Some(pos) = panel.position() else {
        return false;
    };

    let mut close = false;
    let mut toggle = false;
    let mut remove = false;
    let can_remove = panel.can_remove_filter(filters);
    Area::new(Id::new("fanplot_context_panel"))
        .fixed_pos(pos)
        .order(Order::Foreground)
        .show(ctx, |ui| {
            Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_width(panel.display_width());
                ui.set_max_height(panel.config().height);
                ui.horizontal(|ui| {
                    let glyph = if panel.is_minimized() {
                        egui_phosphor::regular::PLUS
                    } else {
                        egui_phosphor::regular::MINUS
                    };
                    toggle = ui.small_button(glyph).clicked();
                    if panel.is_minimized() {
                        if let Some(owner) = panel.owner() {
                            let owner = owner.to_string();
                            ui.scope(|ui| {
                                ui.multiply_opacity(panel.minimized_opacity());
                                ui.label(owner);
                            });
                        }
                    } else {
                        close = ui
                            .small_button(format!("{} Close Chart", egui_phosphor::regular::X))
                            .clicked();
                        remove = ui
                            .add_enabled(
                                can_remove,
                                egui::Button::new(format!(
                                    "{} Remove filter",
                                    egui_phosphor::regular::ERASER
                                ))
                                .small(),
                            )
                            .clicked();
                    }
                });
                let expanded = panel.expanded_opacity();
                if expanded > 0.0 {
                    let text = panel.text().map(str::to_string);
                    if let Some(content) = panel.content_mut() {
                        ui.scope(|ui| {
                            ui.multiply_opacity(expanded);
                            ui.strong(content.view.title());
                            if let Some(text) = text {
                                ui.label(text);
                            }
                            content.view.ui(ui);
                        });
                    }
                }
            });
        });

    let refresh = remove && panel.remove_filter(filters);
    if toggle {
        if panel.is_minimized() {
            panel.maximize();
        } else {
            panel.minimize();
        }
    }
    if close {
        panel.close();
    }
    if panel.is_animating() {
        ctx.request_repaint();
    }
    refresh
}

//! Saved-chat sidebar — session list plus Save / New controls.

use egui::{self, RichText, ScrollArea, Vec2};

use chrono::DateTime;
use lingo_types::session::SessionSummary;

use crate::theme::*;

/// What the caller should do after rendering the sessions panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    Save,
    New,
    Switch(String),
}

/// Render the saved-chat sidebar. `summaries` is expected newest-first.
pub fn sessions_panel(
    ui: &mut egui::Ui,
    summaries: &[SessionSummary],
    active_id: &str,
    can_save: bool,
) -> Option<SessionAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let save_btn = ui.add_enabled(
                    can_save,
                    egui::Button::new(RichText::new("Save Chat").color(TEXT_PRIMARY))
                        .fill(if can_save { ACCENT } else { BG_SURFACE })
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(80.0, 0.0)),
                );
                if save_btn.clicked() {
                    action = Some(SessionAction::Save);
                }

                if ui
                    .add(
                        egui::Button::new(RichText::new("New Chat").color(TEXT_PRIMARY))
                            .fill(BG_SURFACE)
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(80.0, 0.0)),
                    )
                    .clicked()
                {
                    action = Some(SessionAction::New);
                }
            });

            ui.add_space(8.0);
            ui.label(RichText::new("Saved chats").color(ACCENT).strong());
            ui.separator();

            if summaries.is_empty() {
                ui.label(
                    RichText::new("No saved chats yet.")
                        .color(TEXT_SECONDARY)
                        .small()
                        .italics(),
                );
                return;
            }

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for summary in summaries {
                        let is_active = summary.id == active_id;
                        let fill = if is_active { CHIP_BG } else { BG_SURFACE };

                        let response = egui::Frame::default()
                            .fill(fill)
                            .corner_radius(PANEL_ROUNDING)
                            .inner_margin(6.0)
                            .show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                ui.label(
                                    RichText::new(truncate(&summary.title, 32))
                                        .color(TEXT_PRIMARY)
                                        .small(),
                                );
                                ui.label(
                                    RichText::new(format!(
                                        "{} · {} msg",
                                        format_timestamp(summary.timestamp),
                                        summary.message_count
                                    ))
                                    .color(TEXT_SECONDARY)
                                    .small(),
                                );
                            })
                            .response;

                        if response.interact(egui::Sense::click()).clicked() && !is_active {
                            action = Some(SessionAction::Switch(summary.id.clone()));
                        }
                        ui.add_space(4.0);
                    }
                });
        });

    action
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}…")
    }
}

fn format_timestamp(ms: i64) -> String {
    match DateTime::from_timestamp_millis(ms) {
        Some(dt) => dt.format("%b %d, %H:%M").to_string(),
        None => "—".to_string(),
    }
}

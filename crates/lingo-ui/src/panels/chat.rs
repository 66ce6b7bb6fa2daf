//! Chat panel — message bubbles with per-message enrichment controls and
//! the input row.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};

use lingo_types::config::{language_name, TARGET_LANGUAGES};
use lingo_types::event::EnrichmentKind;
use lingo_types::message::Message;
use lingo_types::session::Session;

use crate::state::UiState;
use crate::theme::*;

/// A user intent reported by the chat panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    Submit(String),
    Summarize { message_id: String },
    Translate { message_id: String, target: String },
    SelectLanguage { message_id: String, lang: String },
}

/// Render the chat panel. Returns at most one action per frame.
pub fn chat_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    session: &Session,
    default_target: &str,
) -> Option<ChatAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("Lingo").color(TEXT_PRIMARY).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let status_color = if state.is_busy_any() { WARNING } else { SUCCESS };
                        ui.label(
                            RichText::new(&state.status_text)
                                .color(status_color)
                                .small(),
                        );
                    });
                });

                ui.separator();

                // Messages area
                let available_height = ui.available_height() - 60.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if session.is_empty() {
                            ui.label(
                                RichText::new("Enter text to process...")
                                    .color(TEXT_SECONDARY)
                                    .italics(),
                            );
                        }
                        for message in &session.messages {
                            if let Some(a) =
                                render_bubble(ui, state, message, default_target)
                            {
                                action = Some(a);
                            }
                            ui.add_space(6.0);
                        }
                    });

                ui.add_space(8.0);

                // Input area
                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text("Enter text to process...")
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add(input);

                    let send_enabled =
                        !state.input_text.trim().is_empty() && !state.is_detecting();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    // Submit on Enter or button click
                    if (response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        && send_enabled)
                        || send_btn.clicked()
                    {
                        let text = state.input_text.trim().to_string();
                        action = Some(ChatAction::Submit(text));
                        state.input_text.clear();
                        response.request_focus();
                    }
                });
            });
        });

    action
}

fn render_bubble(
    ui: &mut egui::Ui,
    state: &UiState,
    message: &Message,
    default_target: &str,
) -> Option<ChatAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(&message.text).color(TEXT_PRIMARY));

            if let Some(code) = &message.detected_language {
                egui::Frame::default()
                    .fill(CHIP_BG)
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(4.0)
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(language_name(code))
                                .color(TEXT_SECONDARY)
                                .small(),
                        );
                    });
            }

            if let Some(summary) = &message.summary {
                ui.add_space(4.0);
                ui.label(RichText::new("Summary").color(ACCENT).small().strong());
                ui.label(RichText::new(summary).color(TEXT_SECONDARY));
            }

            if let Some(translation) = &message.translation {
                ui.add_space(4.0);
                egui::Frame::default()
                    .fill(TRANSLATION_BG)
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(6.0)
                    .show(ui, |ui| {
                        ui.label(RichText::new(translation).color(TEXT_PRIMARY));
                    });
            }

            ui.add_space(4.0);

            // Controls: target language selector, Translate, Summarize
            ui.horizontal(|ui| {
                let current = message
                    .selected_language
                    .as_deref()
                    .unwrap_or(default_target);

                egui::ComboBox::from_id_salt(("target_lang", &message.id))
                    .selected_text(language_name(current))
                    .show_ui(ui, |ui| {
                        for (code, name) in TARGET_LANGUAGES {
                            if ui.selectable_label(current == *code, *name).clicked() {
                                action = Some(ChatAction::SelectLanguage {
                                    message_id: message.id.clone(),
                                    lang: (*code).to_string(),
                                });
                            }
                        }
                    });

                let translating = state.is_busy(&message.id, EnrichmentKind::Translation);
                if ui
                    .add_enabled(
                        !translating,
                        egui::Button::new(
                            RichText::new(if translating { "Translating..." } else { "Translate" })
                                .small(),
                        ),
                    )
                    .clicked()
                {
                    action = Some(ChatAction::Translate {
                        message_id: message.id.clone(),
                        target: current.to_string(),
                    });
                }

                let summarizing = state.is_busy(&message.id, EnrichmentKind::Summarization);
                if ui
                    .add_enabled(
                        !summarizing,
                        egui::Button::new(
                            RichText::new(if summarizing { "Summarizing..." } else { "Summarize" })
                                .small(),
                        ),
                    )
                    .clicked()
                {
                    action = Some(ChatAction::Summarize {
                        message_id: message.id.clone(),
                    });
                }
            });
        });

    action
}

//! Main egui application — composes all panels and manages the session
//! controller, the store, and the enrichment provider.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};

use lingo_core::controller::SessionController;
use lingo_core::event_bus::EventBus;
use lingo_core::ports::{EnrichmentPort, StoragePort};
use lingo_core::store::SessionStore;
use lingo_platform::enrich::{build_provider, BrowserAiProvider};
use lingo_platform::storage::storage_for;
use lingo_types::config::{AssistantConfig, EnrichmentProvider};
use lingo_types::event::AssistantEvent;
use lingo_types::session::SessionSummary;
use lingo_ui::panels::{chat, sessions, settings};
use lingo_ui::state::UiState;
use lingo_ui::theme;

const CONFIG_STORAGE_KEY: &str = "lingo:config";

/// The main application state
pub struct LingoApp {
    ui_state: UiState,
    config: AssistantConfig,
    event_bus: EventBus,
    controller: Rc<SessionController>,
    store: Rc<SessionStore>,
    gateway: Rc<dyn EnrichmentPort>,
    storage: Rc<dyn StoragePort>,
    /// Newest-first cache of the saved-chat list, refreshed when dirty
    summaries: Vec<SessionSummary>,
    save_feedback: Option<settings::SaveFeedback>,
    /// Filled by the async config restore, adopted on the next frame
    restored_config: Rc<RefCell<Option<AssistantConfig>>>,
    first_frame: bool,
    capability_warned: bool,
}

impl LingoApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = AssistantConfig::default();
        let event_bus = EventBus::new();

        let storage = storage_for(&config.storage.backend);
        let store = Rc::new(SessionStore::new(storage.clone()));
        let gateway = build_provider(&config.enrichment);
        let controller = Rc::new(SessionController::new(
            config.clone(),
            store.clone(),
            event_bus.clone(),
        ));

        let restored_config = Rc::new(RefCell::new(None));
        Self::restore_config(storage.clone(), restored_config.clone());
        Self::hydrate_store(store.clone(), controller.clone(), event_bus.clone());

        Self {
            ui_state: UiState::new(),
            config,
            event_bus,
            controller,
            store,
            gateway,
            storage,
            summaries: Vec::new(),
            save_feedback: None,
            restored_config,
            first_frame: true,
            capability_warned: false,
        }
    }

    /// Restore config from storage (async)
    fn restore_config(storage: Rc<dyn StoragePort>, slot: Rc<RefCell<Option<AssistantConfig>>>) {
        wasm_bindgen_futures::spawn_local(async move {
            if let Ok(Some(data)) = storage.get(CONFIG_STORAGE_KEY).await {
                if let Ok(config) = serde_json::from_slice::<AssistantConfig>(&data) {
                    *slot.borrow_mut() = Some(config);
                    log::info!("Config restored from storage");
                }
            }
        });
    }

    /// Save config to storage (async, fire-and-forget)
    fn save_config(storage: Rc<dyn StoragePort>, config: &AssistantConfig) {
        if let Ok(json) = serde_json::to_vec(config) {
            wasm_bindgen_futures::spawn_local(async move {
                let _ = storage.set(CONFIG_STORAGE_KEY, &json).await;
                log::info!("Config saved to storage");
            });
        }
    }

    /// Load saved chats, then make the newest one active (async)
    fn hydrate_store(store: Rc<SessionStore>, controller: Rc<SessionController>, bus: EventBus) {
        wasm_bindgen_futures::spawn_local(async move {
            let count = store.hydrate().await;
            bus.emit(AssistantEvent::StoreLoaded {
                session_count: count,
            });
            if controller.restore_most_recent() {
                log::info!("Restored most recent chat ({} saved)", count);
            }
        });
    }

    fn rebuild_gateway(&mut self) {
        self.gateway = build_provider(&self.config.enrichment);
        self.capability_warned = false;
    }

    /// Warn once when Browser AI is selected but the browser lacks it.
    fn check_capabilities(&mut self) {
        if self.capability_warned {
            return;
        }
        if self.config.enrichment.provider == EnrichmentProvider::BrowserAi
            && !BrowserAiProvider::available()
        {
            self.event_bus.notify(
                lingo_types::event::NoticeLevel::Warning,
                "Your browser doesn't support the required AI capabilities.",
            );
        }
        self.capability_warned = true;
    }

    fn refresh_summaries(&mut self) {
        // Store keeps most-recently-saved last; the sidebar wants newest first
        let mut summaries = self.store.summaries();
        summaries.reverse();
        self.summaries = summaries;
        self.ui_state.sessions_dirty = false;
    }
}

impl eframe::App for LingoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.check_capabilities();
            self.first_frame = false;
        }

        // Adopt the async-restored config
        let restored = self.restored_config.borrow_mut().take();
        if let Some(config) = restored {
            self.config = config;
            self.rebuild_gateway();
            self.check_capabilities();
        }

        // Drain events from the controller
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        if self.ui_state.is_busy_any() {
            ctx.request_repaint();
        }

        self.ui_state.prune_toasts();
        if self.ui_state.sessions_dirty {
            self.refresh_summaries();
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Lingo")
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.separator();
                ui.label(
                    RichText::new(format!(
                        "Provider: {} | Model: {}",
                        self.config.enrichment.provider.label(),
                        self.config.enrichment.model
                    ))
                    .color(theme::TEXT_SECONDARY)
                    .small(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .selectable_label(self.ui_state.show_settings, "Settings")
                        .clicked()
                    {
                        self.ui_state.show_settings = !self.ui_state.show_settings;
                    }
                });
            });
        });

        // ── Settings side panel ──────────────────────────────
        if self.ui_state.show_settings {
            SidePanel::right("settings_panel")
                .min_width(280.0)
                .max_width(350.0)
                .show(ctx, |ui| {
                    match settings::settings_panel(ui, &mut self.config, self.save_feedback.as_ref())
                    {
                        settings::SettingsAction::Changed => {
                            self.rebuild_gateway();
                            self.check_capabilities();
                            self.save_feedback = None;
                        }
                        settings::SettingsAction::SaveClicked => {
                            self.rebuild_gateway();
                            Self::save_config(self.storage.clone(), &self.config);
                            self.save_feedback = Some(settings::SaveFeedback {
                                message: "Settings saved.".to_string(),
                                success: true,
                            });
                        }
                        settings::SettingsAction::None => {}
                    }
                });
        }

        // ── Saved chats sidebar ──────────────────────────────
        SidePanel::left("sessions_panel")
            .min_width(200.0)
            .max_width(280.0)
            .show(ctx, |ui| {
                let active_id = self.controller.active_id();
                let can_save = !self.controller.with_active(|s| s.is_empty());
                if let Some(action) =
                    sessions::sessions_panel(ui, &self.summaries, &active_id, can_save)
                {
                    self.dispatch_session_action(action, ctx);
                }
            });

        // ── Main content ─────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            let controller = self.controller.clone();
            let default_target = controller.default_target_language().to_string();
            let action = controller.with_active(|session| {
                chat::chat_panel(ui, &mut self.ui_state, session, &default_target)
            });
            if let Some(action) = action {
                self.dispatch_chat_action(action, ctx);
            }
        });

        // ── Toast overlay ────────────────────────────────────
        if !self.ui_state.toasts.is_empty() {
            egui::Area::new(egui::Id::new("toast_overlay"))
                .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
                .show(ctx, |ui| {
                    for toast in &self.ui_state.toasts {
                        let color = match toast.level {
                            lingo_types::event::NoticeLevel::Info => theme::TEXT_SECONDARY,
                            lingo_types::event::NoticeLevel::Success => theme::SUCCESS,
                            lingo_types::event::NoticeLevel::Warning => theme::WARNING,
                            lingo_types::event::NoticeLevel::Error => theme::ERROR,
                        };
                        egui::Frame::default()
                            .fill(theme::BG_SECONDARY)
                            .corner_radius(theme::PANEL_ROUNDING)
                            .inner_margin(8.0)
                            .show(ui, |ui| {
                                ui.label(RichText::new(&toast.text).color(color));
                            });
                        ui.add_space(4.0);
                    }
                });
            // Toasts expire on a timer, keep painting
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}

impl LingoApp {
    /// Dispatch a chat panel intent to the controller (async where needed)
    fn dispatch_chat_action(&self, action: chat::ChatAction, ctx: &egui::Context) {
        let controller = self.controller.clone();
        let gateway = self.gateway.clone();
        let ctx = ctx.clone();

        match action {
            chat::ChatAction::Submit(text) => {
                wasm_bindgen_futures::spawn_local(async move {
                    controller.submit_text(gateway.as_ref(), &text).await;
                    ctx.request_repaint();
                });
            }
            chat::ChatAction::Summarize { message_id } => {
                wasm_bindgen_futures::spawn_local(async move {
                    controller.request_summary(gateway.as_ref(), &message_id).await;
                    ctx.request_repaint();
                });
            }
            chat::ChatAction::Translate { message_id, target } => {
                wasm_bindgen_futures::spawn_local(async move {
                    controller
                        .request_translation(gateway.as_ref(), &message_id, &target)
                        .await;
                    ctx.request_repaint();
                });
            }
            chat::ChatAction::SelectLanguage { message_id, lang } => {
                controller.select_target_language(&message_id, &lang);
            }
        }
    }

    /// Dispatch a sidebar intent to the controller
    fn dispatch_session_action(&mut self, action: sessions::SessionAction, ctx: &egui::Context) {
        match action {
            sessions::SessionAction::Save => {
                let controller = self.controller.clone();
                let ctx = ctx.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    controller.save_active_session().await;
                    ctx.request_repaint();
                });
            }
            sessions::SessionAction::New => {
                self.controller.start_new_session();
            }
            sessions::SessionAction::Switch(id) => {
                self.controller.switch_session(&id);
            }
        }
    }
}

//! Main application state and update loop

use eframe::egui;

use asset_verify_core::{
    AssetStatus, Confirmation, EntryId, FormPhase, InventoryPort, InventoryRecord, PortError,
    SubmissionPort, SubmissionReceipt,
};

use crate::state::{describe_error, ResultSlot, Screen, UiState, ATTESTATION_TEXT};
use crate::ui;
use crate::verify_bridge::VerifyBridge;

type LoadResult = Result<Vec<InventoryRecord>, PortError>;
type SubmitResult = Result<SubmissionReceipt, PortError>;

/// The main application state
pub struct App {
    /// Form controller boundary
    bridge: VerifyBridge,
    /// Worker pool for collaborator calls
    runtime: tokio::runtime::Runtime,
    /// Screen, notices and in-flight flags
    ui_state: UiState,
    /// Async inventory fetch result
    load_result: ResultSlot<LoadResult>,
    /// Async submission result
    submit_result: ResultSlot<SubmitResult>,
}

impl App {
    /// Create a new App instance and start fetching the inventory
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        bridge: VerifyBridge,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let mut app = Self {
            bridge,
            runtime,
            ui_state: UiState::default(),
            load_result: ResultSlot::default(),
            submit_result: ResultSlot::default(),
        };
        app.trigger_inventory_load(&cc.egui_ctx);
        app
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        self.check_load_result();
        self.check_submit_result();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.heading(
                    egui::RichText::new("🗂 Asset Verification")
                        .size(22.0)
                        .color(egui::Color32::from_rgb(0, 212, 170)),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let (answered, total) = self.bridge.form().progress();
                    if total > 0 {
                        ui.label(
                            egui::RichText::new(format!("{answered} of {total} assets answered"))
                                .weak(),
                        );
                    }
                });
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "v{} ({}) built {}",
                        env!("CARGO_PKG_VERSION"),
                        env!("GIT_HASH"),
                        env!("BUILD_TIME")
                    ))
                    .weak()
                    .small(),
                );
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(10.0);
                let mut dismissed = false;
                if let Some(notice) = &self.ui_state.notice {
                    dismissed = ui::notice_banner(ui, notice);
                    ui.add_space(10.0);
                }
                if dismissed {
                    self.ui_state.clear_notice();
                }

                match self.ui_state.screen {
                    Screen::Overview => self.render_overview(ui, ctx),
                    Screen::Verify => self.render_verify(ui, ctx),
                    Screen::Submitted => self.render_submitted(ui),
                }
                ui.add_space(20.0);
            });
        });
    }
}

impl App {
    fn render_overview(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui::styled_heading(ui, "Confirm your assigned equipment");
        ui.label("Review the IT assets registered to you and confirm which ones you hold.");
        ui.add_space(15.0);

        ui.label(
            egui::RichText::new(format!("Inventory source: {}", self.bridge.source_label()))
                .weak()
                .small(),
        );
        ui.add_space(5.0);

        if self.ui_state.loading {
            ui::loading_indicator(ui, "Loading your assets…");
            return;
        }

        let entries = self.bridge.entries();
        if entries.is_empty() {
            ui.label("No assets loaded.");
        } else {
            let pending = entries
                .iter()
                .filter(|e| e.status == AssetStatus::PendingConfirmation)
                .count();
            ui.label(
                egui::RichText::new(format!(
                    "You have {} assets assigned to you ({} pending confirmation).",
                    entries.len(),
                    pending
                ))
                .size(15.0),
            );
        }

        ui.add_space(15.0);
        ui.horizontal(|ui| {
            let can_start = !self.bridge.entries().is_empty();
            if ui
                .add_enabled(can_start, egui::Button::new("Start verification ▶"))
                .clicked()
            {
                self.ui_state.clear_notice();
                self.ui_state.screen = Screen::Verify;
            }
            if ui.button("🔄 Reload inventory").clicked() {
                self.trigger_inventory_load(ctx);
            }
        });
    }

    fn render_verify(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui::styled_heading(ui, "Asset Verification");
        ui.label("For each asset, tell us whether it is in your possession.");

        let editable = self.bridge.form().phase() == FormPhase::Editing;
        let mut changes: Vec<(EntryId, Confirmation)> = Vec::new();

        ui::section_header(ui, "Assigned assets");
        for entry in self.bridge.entries() {
            if let Some(value) = ui::asset_card(ui, entry, editable) {
                changes.push((entry.id, value));
            }
            ui.add_space(6.0);
        }
        for (id, value) in changes {
            if let Err(e) = self.bridge.set_confirmation(id, value) {
                self.ui_state.set_error(describe_error(&e));
            }
        }

        ui::section_header(ui, "Attestation");
        let mut agreed = self.bridge.form().attestation().agreed;
        if ui
            .add_enabled(editable, egui::Checkbox::new(&mut agreed, ATTESTATION_TEXT))
            .changed()
        {
            if let Err(e) = self.bridge.set_attestation(agreed) {
                self.ui_state.set_error(describe_error(&e));
            }
        }

        ui.add_space(15.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!self.ui_state.submitting, egui::Button::new("◀ Back"))
                .clicked()
            {
                self.ui_state.screen = Screen::Overview;
            }
            ui.add_space(10.0);
            let submit = egui::Button::new(egui::RichText::new("Submit verification").strong())
                .min_size(egui::vec2(160.0, 0.0));
            if ui.add_enabled(editable, submit).clicked() {
                self.start_submit(ctx);
            }
            if self.ui_state.submitting {
                ui::loading_indicator(ui, "Submitting…");
            }
        });
        ui.label(
            egui::RichText::new(format!("Submits to: {}", self.bridge.target_label()))
                .weak()
                .small(),
        );
    }

    fn render_submitted(&self, ui: &mut egui::Ui) {
        ui::styled_heading(ui, "✅ Verification submitted");
        if let Some(receipt) = self.bridge.form().receipt() {
            match &receipt.reference {
                Some(reference) => {
                    ui.label(format!("Reference: {reference}"));
                }
                None => {
                    ui.label("The verification service accepted your answers.");
                }
            }
        }

        ui::section_header(ui, "Your answers");
        for entry in self.bridge.entries() {
            ui::asset_card(ui, entry, false);
            ui.add_space(6.0);
        }
        let mut agreed = self.bridge.form().attestation().agreed;
        ui.add_enabled(false, egui::Checkbox::new(&mut agreed, ATTESTATION_TEXT));
    }

    fn trigger_inventory_load(&mut self, ctx: &egui::Context) {
        if self.ui_state.loading {
            return;
        }
        self.ui_state.loading = true;

        let port = self.bridge.inventory_port();
        let slot = self.load_result.clone();
        let ctx = ctx.clone();
        self.runtime.spawn_blocking(move || {
            slot.put(port.fetch_assets());
            ctx.request_repaint();
        });
    }

    fn check_load_result(&mut self) {
        let Some(result) = self.load_result.take() else {
            return;
        };
        self.ui_state.loading = false;

        match self.bridge.apply_loaded(result) {
            Ok(count) => {
                tracing::info!(count, "asset list ready");
                self.ui_state.clear_notice();
            }
            Err(e) => {
                tracing::warn!(error = %e, "asset list unavailable");
                self.ui_state.set_error(describe_error(&e));
            }
        }
    }

    fn start_submit(&mut self, ctx: &egui::Context) {
        let payload = match self.bridge.begin_submit() {
            Ok(payload) => payload,
            Err(e) => {
                self.ui_state.set_error(describe_error(&e));
                return;
            }
        };
        self.ui_state.clear_notice();
        self.ui_state.submitting = true;

        let port = self.bridge.submission_port();
        let slot = self.submit_result.clone();
        let ctx = ctx.clone();
        self.runtime.spawn_blocking(move || {
            slot.put(port.submit(&payload));
            ctx.request_repaint();
        });
    }

    fn check_submit_result(&mut self) {
        let Some(result) = self.submit_result.take() else {
            return;
        };
        self.ui_state.submitting = false;

        match self.bridge.finish_submit(result) {
            Ok(receipt) => {
                let message = match receipt.reference {
                    Some(reference) => format!("Thank you. Reference {reference}."),
                    None => "Thank you. Your verification was recorded.".to_owned(),
                };
                self.ui_state.set_info(message);
                self.ui_state.screen = Screen::Submitted;
            }
            Err(e) => self.ui_state.set_error(describe_error(&e)),
        }
    }
}

use std::time::Duration;

use client_core::ViewState;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::UiEvent, orchestration::dispatch_backend_command, reducer::apply_ui_event,
};

const FIELD_WIDTH: f32 = 220.0;

pub struct DigitalWorldApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    /// Name typed into the greeting form; read only when that form is submitted.
    name_draft: String,
    view: ViewState,
    status: String,
}

impl DigitalWorldApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>, status: String) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            name_draft: String::new(),
            view: ViewState::default(),
            status,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            apply_ui_event(&mut self.view, &mut self.status, event);
        }
    }

    fn submit(&mut self, cmd: BackendCommand) {
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status);
    }

    fn show_greeting_form(&mut self, ui: &mut egui::Ui) {
        let mut submitted = false;
        ui.horizontal(|ui| {
            ui.label("Enter your name:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.name_draft)
                    .id_salt("name")
                    .desired_width(FIELD_WIDTH),
            );
            submitted |= submitted_with_enter(ui, &response);
            submitted |= ui.button("Click Me!").clicked();
        });
        if submitted {
            let submission = ViewState::greeting_submission(self.name_draft.clone());
            self.submit(submission.into());
        }

        ui.add_space(4.0);
        ui.label(self.view.greeting());
    }

    fn show_purchase_form(&mut self, ui: &mut egui::Ui) {
        let mut submitted = false;
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label("Digital World ID:");
                let response = ui.add(
                    egui::TextEdit::singleline(self.view.digital_world_id_input_mut())
                        .id_salt("digital_world_id")
                        .desired_width(FIELD_WIDTH),
                );
                submitted |= submitted_with_enter(ui, &response);
            });
            ui.horizontal(|ui| {
                ui.label("Amount:");
                let response = ui.add(
                    egui::TextEdit::singleline(self.view.amount_input_mut())
                        .id_salt("amount")
                        .desired_width(FIELD_WIDTH),
                );
                submitted |= submitted_with_enter(ui, &response);
            });
            submitted |= ui.button("Comprar Item").clicked();
        });
        if submitted {
            let submission = self.view.purchase_submission();
            self.submit(submission.into());
        }
    }

    fn show_claim_form(&mut self, ui: &mut egui::Ui) {
        let mut submitted = false;
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label("Digital World ID:");
                // Same field as the purchase form.
                let response = ui.add(
                    egui::TextEdit::singleline(self.view.digital_world_id_input_mut())
                        .id_salt("digital_world_id_claim")
                        .desired_width(FIELD_WIDTH),
                );
                submitted |= submitted_with_enter(ui, &response);
            });
            submitted |= ui.button("Reivindicar Venda").clicked();
        });
        if submitted {
            let submission = self.view.claim_submission();
            self.submit(submission.into());
        }
    }
}

fn submitted_with_enter(ui: &egui::Ui, response: &egui::Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}

impl eframe::App for DigitalWorldApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Digital World");
            ui.add_space(12.0);

            self.show_greeting_form(ui);
            ui.add_space(16.0);
            ui.separator();

            self.show_purchase_form(ui);
            ui.add_space(8.0);
            self.show_claim_form(ui);

            ui.add_space(8.0);
            ui.label(self.view.result());

            if !self.status.is_empty() {
                ui.add_space(16.0);
                ui.separator();
                ui.weak(self.status.as_str());
            }
        });

        // Completions arrive over the channel; poll for them.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

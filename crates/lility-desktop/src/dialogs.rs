//! Prompts: the start-number window, the settings editor and native
//! message boxes.

use std::collections::BTreeMap;
use std::path::PathBuf;

use lility_core::config::SettingsError;
use lility_core::{Action, Settings, Theme};
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// A modal egui window currently on screen.
pub enum Dialog {
    /// Asks for the first sequence number of an import.
    StartNumber { paths: Vec<PathBuf>, start: u32 },
    Settings(SettingsDraft),
}

/// What the user did with a dialog this frame.
pub enum DialogOutcome {
    Open,
    Cancelled,
    Import { paths: Vec<PathBuf>, start: u32 },
    SaveSettings(Settings),
}

/// Editable copy of the settings; only committed once every shortcut
/// parses.
#[derive(Debug, Clone)]
pub struct SettingsDraft {
    pub hotkeys: BTreeMap<Action, String>,
    pub theme: Theme,
    pub auto_save: bool,
    pub error: Option<String>,
}

impl SettingsDraft {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            hotkeys: settings.hotkeys.clone(),
            theme: settings.theme,
            auto_save: settings.auto_save,
            error: None,
        }
    }

    /// Validate the draft into a new settings document.
    pub fn commit(&self) -> Result<Settings, SettingsError> {
        let mut settings = Settings {
            theme: self.theme,
            auto_save: self.auto_save,
            ..Settings::default()
        };
        for (action, text) in &self.hotkeys {
            settings.set_shortcut(*action, text)?;
        }
        Ok(settings)
    }
}

impl Dialog {
    pub fn show(&mut self, ctx: &egui::Context) -> DialogOutcome {
        match self {
            Dialog::StartNumber { paths, start } => show_start_number(ctx, paths, start),
            Dialog::Settings(draft) => show_settings(ctx, draft),
        }
    }
}

fn show_start_number(ctx: &egui::Context, paths: &mut Vec<PathBuf>, start: &mut u32) -> DialogOutcome {
    let mut outcome = DialogOutcome::Open;
    egui::Window::new("Start number")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label(format!("Number the {} selected images starting at:", paths.len()));
            ui.add(egui::DragValue::new(start).range(1..=999_999));
            ui.horizontal(|ui| {
                if ui.button("Import").clicked() {
                    outcome = DialogOutcome::Import {
                        paths: std::mem::take(paths),
                        start: *start,
                    };
                }
                if ui.button("Cancel").clicked() {
                    outcome = DialogOutcome::Cancelled;
                }
            });
        });
    outcome
}

fn show_settings(ctx: &egui::Context, draft: &mut SettingsDraft) -> DialogOutcome {
    let mut outcome = DialogOutcome::Open;
    egui::Window::new("Settings")
        .collapsible(false)
        .resizable(false)
        .default_width(400.0)
        .show(ctx, |ui| {
            egui::Grid::new("hotkeys").num_columns(2).striped(true).show(ui, |ui| {
                for action in Action::ALL {
                    ui.label(action.label());
                    let text = draft.hotkeys.entry(action).or_default();
                    ui.text_edit_singleline(text);
                    ui.end_row();
                }
            });
            ui.separator();

            egui::ComboBox::from_label("Theme")
                .selected_text(match draft.theme {
                    Theme::Light => "Light",
                    Theme::Dark => "Dark",
                })
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut draft.theme, Theme::Light, "Light");
                    ui.selectable_value(&mut draft.theme, Theme::Dark, "Dark");
                });
            ui.checkbox(&mut draft.auto_save, "Reuse the last export folder");

            if let Some(error) = &draft.error {
                ui.colored_label(ui.visuals().error_fg_color, error);
            }

            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    match draft.commit() {
                        Ok(settings) => outcome = DialogOutcome::SaveSettings(settings),
                        Err(e) => draft.error = Some(e.to_string()),
                    }
                }
                if ui.button("Cancel").clicked() {
                    outcome = DialogOutcome::Cancelled;
                }
            });
        });
    outcome
}

/// Native yes/no question. Blocks until answered.
pub fn confirm(title: &str, question: &str) -> bool {
    let answer = MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(title)
        .set_description(question)
        .set_buttons(MessageButtons::YesNo)
        .show();
    matches!(answer, MessageDialogResult::Yes)
}

/// Native message box for errors that need acknowledging.
pub fn alert(title: &str, message: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

//! The main window.

use std::path::PathBuf;

use egui::KeyboardShortcut;
use lility_core::export::{export_horizontal_slices, plan_horizontal_slices, save_whole_images};
use lility_core::{Action, Event, Notice, NoticeLevel, Redraw, Session, Settings, Theme, Update};
use log::{error, info};

use crate::canvas::{self, CanvasView};
use crate::dialogs::{self, Dialog, DialogOutcome, SettingsDraft};
use crate::shortcuts;
use crate::texture::{self, PreviewKey, PreviewTexture};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

/// Strongest redraw requested by engine updates since the last frame.
///
/// Updates produced after the canvas was painted (dialogs, shortcuts) only
/// show up if another frame is requested.
#[derive(Debug, Default)]
struct PendingRedraw(Redraw);

impl PendingRedraw {
    fn record(&mut self, redraw: Redraw) {
        self.0 = self.0.max(redraw);
    }

    fn take(&mut self) -> Redraw {
        std::mem::take(&mut self.0)
    }
}

pub struct SlicerApp {
    session: Session,
    settings: Settings,
    settings_path: PathBuf,
    bindings: Vec<(Action, KeyboardShortcut)>,
    preview: Option<PreviewTexture>,
    /// Bumped whenever the image list is replaced, so cached textures of
    /// removed images are never reused.
    generation: u64,
    canvas_size: Option<egui::Vec2>,
    pending: PendingRedraw,
    status: Notice,
    dialog: Option<Dialog>,
    last_export_dir: Option<PathBuf>,
}

impl SlicerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, settings_path: PathBuf) -> Self {
        apply_theme(&cc.egui_ctx, settings.theme);
        Self {
            bindings: shortcuts::bindings(&settings),
            session: Session::new(),
            settings,
            settings_path,
            preview: None,
            generation: 0,
            canvas_size: None,
            pending: PendingRedraw::default(),
            status: Notice::info("Ready"),
            dialog: None,
            last_export_dir: None,
        }
    }

    fn apply(&mut self, update: Update) {
        self.pending.record(update.redraw);
        if let Some(notice) = update.notice {
            self.notify(notice);
        }
    }

    fn notify(&mut self, notice: Notice) {
        if notice.level == NoticeLevel::Error {
            dialogs::alert("Lility Slicer", &notice.message);
        }
        self.status = notice;
    }

    fn run_action(&mut self, action: Action) {
        match action {
            Action::AddImages => self.pick_images(),
            Action::SliceImages => self.slice_images(),
            Action::SaveImages => self.save_images(),
            Action::ClearAllImages => self.clear_all(),
            Action::ClearSlices => self.dispatch(Event::ClearSlices),
            Action::ToggleCutMode => self.dispatch(Event::ToggleCutMode),
            Action::NextImage => self.dispatch(Event::NextImage),
            Action::PreviousImage => self.dispatch(Event::PreviousImage),
            Action::UndoVertical => self.dispatch(Event::UndoVerticalCrop),
        }
    }

    fn dispatch(&mut self, event: Event) {
        let update = self.session.handle(event);
        self.apply(update);
    }

    fn pick_images(&mut self) {
        let Some(paths) = rfd::FileDialog::new()
            .add_filter("Images", IMAGE_EXTENSIONS)
            .pick_files()
        else {
            return;
        };
        if paths.is_empty() {
            return;
        }
        self.dialog = Some(Dialog::StartNumber {
            paths,
            start: self.session.sequence_start(),
        });
    }

    fn import(&mut self, paths: &[PathBuf], start: u32) {
        let report = self.session.import_files(paths, start);
        self.generation += 1;
        self.preview = None;
        self.pending.record(Redraw::Full);

        let notice = if report.is_complete() {
            Notice::info(format!("{} images loaded", self.session.image_count()))
        } else {
            let names: Vec<_> = report
                .failures
                .iter()
                .map(|(path, e)| format!("{}: {}", path.display(), e))
                .collect();
            Notice::error(format!(
                "{} images loaded, {} could not be opened:\n{}",
                report.added,
                report.failures.len(),
                names.join("\n")
            ))
        };
        self.notify(notice);
    }

    /// Directory for the next slice export: the previous one when
    /// auto-save is on, otherwise whatever the user picks.
    fn export_dir(&self) -> Option<PathBuf> {
        if self.settings.auto_save {
            if let Some(dir) = &self.last_export_dir {
                return Some(dir.clone());
            }
        }
        rfd::FileDialog::new()
            .set_title("Choose the output folder")
            .pick_folder()
    }

    fn slice_images(&mut self) {
        // Validate before asking for a folder
        if let Err(e) = plan_horizontal_slices(&self.session) {
            self.notify(Notice::error(e.to_string()));
            return;
        }
        let Some(dir) = self.export_dir() else {
            return;
        };

        match export_horizontal_slices(&mut self.session, &dir) {
            Ok(report) => {
                let level = if report.is_complete() {
                    NoticeLevel::Info
                } else {
                    NoticeLevel::Error
                };
                self.notify(Notice {
                    level,
                    message: report.summary(),
                });
                self.last_export_dir = Some(dir);
                self.pending.record(Redraw::Overlay);
            }
            Err(e) => self.notify(Notice::error(e.to_string())),
        }
    }

    fn save_images(&mut self) {
        if self.session.is_empty() {
            self.notify(Notice::warning("No images loaded"));
            return;
        }
        let Some(dir) = rfd::FileDialog::new()
            .set_title("Save images to")
            .pick_folder()
        else {
            return;
        };
        match save_whole_images(&self.session, &dir) {
            Ok(report) if report.is_complete() => self.notify(Notice::info(report.summary())),
            Ok(report) => self.notify(Notice::error(report.summary())),
            Err(e) => self.notify(Notice::error(e.to_string())),
        }
    }

    fn clear_all(&mut self) {
        if self.session.is_empty() {
            return;
        }
        let confirmed = dialogs::confirm(
            "Remove all images",
            "Remove every loaded image? Unsaved cuts are lost.",
        );
        self.dispatch(Event::ClearAll { confirmed });
        if confirmed {
            self.generation += 1;
            self.preview = None;
        }
    }

    fn save_settings(&mut self, settings: Settings) {
        self.settings = settings;
        self.bindings = shortcuts::bindings(&self.settings);
        match self.settings.save(&self.settings_path) {
            Ok(()) => {
                info!("Settings saved to {}", self.settings_path.display());
                self.notify(Notice::info("Settings saved"));
            }
            Err(e) => {
                error!("Could not save settings: {}", e);
                self.notify(Notice::error(format!("Could not save settings: {}", e)));
            }
        }
    }

    fn show_dialog(&mut self, ctx: &egui::Context) {
        let Some(mut dialog) = self.dialog.take() else {
            return;
        };
        match dialog.show(ctx) {
            DialogOutcome::Open => self.dialog = Some(dialog),
            DialogOutcome::Cancelled => {}
            DialogOutcome::Import { paths, start } => self.import(&paths, start),
            DialogOutcome::SaveSettings(settings) => {
                apply_theme(ctx, settings.theme);
                self.save_settings(settings);
            }
        }
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        let loaded = !self.session.is_empty();
        ui.horizontal_wrapped(|ui| {
            if ui.button("Add images").clicked() {
                self.run_action(Action::AddImages);
            }
            if ui.add_enabled(loaded, egui::Button::new("Slice images")).clicked() {
                self.run_action(Action::SliceImages);
            }
            if ui.add_enabled(loaded, egui::Button::new("Clear cuts")).clicked() {
                self.run_action(Action::ClearSlices);
            }
            if ui
                .add_enabled(self.session.can_undo(), egui::Button::new("Undo vertical"))
                .clicked()
            {
                self.run_action(Action::UndoVertical);
            }
            if ui.button("Settings").clicked() {
                self.dialog = Some(Dialog::Settings(SettingsDraft::from_settings(&self.settings)));
            }
            let mode = format!("{} cut", self.session.cut_mode());
            if ui.button(mode).clicked() {
                self.run_action(Action::ToggleCutMode);
            }
            if ui.add_enabled(loaded, egui::Button::new("Remove all")).clicked() {
                self.run_action(Action::ClearAllImages);
            }
            if ui.add_enabled(loaded, egui::Button::new("Save images")).clicked() {
                self.run_action(Action::SaveImages);
            }
        });
    }

    fn navigation(&mut self, ui: &mut egui::Ui) {
        let can_navigate = self.session.can_navigate();
        ui.horizontal(|ui| {
            if ui.add_enabled(can_navigate, egui::Button::new("◀")).clicked() {
                self.run_action(Action::PreviousImage);
            }
            ui.label(self.session.caption());
            if ui.add_enabled(can_navigate, egui::Button::new("▶")).clicked() {
                self.run_action(Action::NextImage);
            }
        });
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click());
        let view = CanvasView::new(response.rect);

        if self.canvas_size != Some(response.rect.size()) {
            self.canvas_size = Some(response.rect.size());
            self.dispatch(Event::Resize);
        }

        let Some(image) = self.session.current_image() else {
            return;
        };
        let key = PreviewKey {
            generation: self.generation,
            index: self.session.current_index(),
            revision: image.revision(),
        };
        self.preview = match texture::refresh(ui.ctx(), self.preview.take(), key, image) {
            Ok(t) => Some(t),
            Err(e) => {
                error!("Could not build preview: {}", e);
                None
            }
        };

        if let (Some(overlay), Some(preview)) = (self.session.overlay(view.size()), &self.preview) {
            canvas::paint(&painter, view, &overlay, preview.handle());
        }

        if let Some(pos) = response.hover_pos() {
            let (x, y) = view.to_local(pos);
            if let Some(guide) = self.session.hover_guide(view.size(), x, y) {
                canvas::paint_hover(&painter, view, &guide);
            }
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let (x, y) = view.to_local(pos);
                self.dispatch(Event::Click {
                    canvas: view.size(),
                    x,
                    y,
                });
            }
        }
    }
}

impl eframe::App for SlicerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.dialog.is_none() {
            for action in shortcuts::pressed(ctx, &self.bindings) {
                self.run_action(action);
            }
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.toolbar(ui);
            self.navigation(ui);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            let color = match self.status.level {
                NoticeLevel::Info => ui.visuals().text_color(),
                NoticeLevel::Warning => ui.visuals().warn_fg_color,
                NoticeLevel::Error => ui.visuals().error_fg_color,
            };
            ui.colored_label(color, self.status.message.lines().next().unwrap_or_default());
        });

        egui::CentralPanel::default().show(ctx, |ui| self.canvas(ui));

        self.show_dialog(ctx);

        if self.pending.take() != Redraw::None {
            ctx.request_repaint();
        }
    }
}

fn apply_theme(ctx: &egui::Context, theme: Theme) {
    ctx.set_visuals(match theme {
        Theme::Light => egui::Visuals::light(),
        Theme::Dark => egui::Visuals::dark(),
    });
}

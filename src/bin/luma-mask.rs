//! Desktop front end for luma-mask.
//!
//! A single window: the preview fills the center, one button per action sits
//! below it. Every handler runs synchronously on the UI thread and is a thin
//! wrapper around [`MaskSession`]; all image logic lives in the library.

use eframe::egui;
use image::{RgbImage, RgbaImage};

use luma_mask::{is_supported_source, preview, MaskSession, Polarity};

/// Bounded preview area, matching the window's default proportions.
const PREVIEW_MAX_WIDTH: u32 = 600;
const PREVIEW_MAX_HEIGHT: u32 = 400;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 520.0])
            .with_title("Luma Mask"),
        ..Default::default()
    };

    eframe::run_native(
        "Luma Mask",
        options,
        Box::new(|_cc| Ok(Box::new(MaskApp::default()))),
    )
}

/// Which image the preview is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shown {
    Source,
    Result,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Warning,
    Error,
    Info,
}

struct Message {
    severity: Severity,
    text: String,
}

#[derive(Default)]
struct MaskApp {
    session: MaskSession,
    shown: Option<Shown>,
    texture: Option<egui::TextureHandle>,
    message: Option<Message>,
}

impl eframe::App for MaskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("actions").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("Load Image").clicked() {
                    self.load_image();
                }
                if ui.button("Show Original").clicked() {
                    self.show_original();
                }
                if ui.button("White → Transparent").clicked() {
                    self.apply(Polarity::WhiteTransparent);
                }
                if ui.button("Black → Transparent").clicked() {
                    self.apply(Polarity::BlackTransparent);
                }
                if ui.button("Save PNG").clicked() {
                    self.save_mask();
                }
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_preview(ui, ctx);
        });

        self.show_message(ctx);
    }
}

impl MaskApp {
    fn load_image(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg"])
            .pick_file()
        else {
            return; // cancelled
        };

        if !is_supported_source(&path) {
            self.report(
                Severity::Error,
                format!("Unsupported file type: {}", path.display()),
            );
            return;
        }

        match self.session.load(&path) {
            Ok(()) => {
                self.shown = Some(Shown::Source);
                self.texture = None;
            }
            Err(e) => self.report(Severity::Error, format!("Failed to load image: {e}")),
        }
    }

    fn show_original(&mut self) {
        if self.session.source().is_some() {
            self.shown = Some(Shown::Source);
            self.texture = None;
        } else {
            self.report(Severity::Warning, "Load an image first.".to_owned());
        }
    }

    fn apply(&mut self, polarity: Polarity) {
        match self.session.apply(polarity) {
            Ok(_) => {
                self.shown = Some(Shown::Result);
                self.texture = None;
            }
            Err(e) => self.report_error(&e, "Transform failed"),
        }
    }

    fn save_mask(&mut self) {
        if self.session.result().is_none() {
            self.report(Severity::Warning, "No transformed image to save.".to_owned());
            return;
        }

        let Some(mut path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name("mask.png")
            .save_file()
        else {
            return; // cancelled
        };
        if path.extension().is_none() {
            path.set_extension("png");
        }

        match self.session.save(&path) {
            Ok(()) => self.report(Severity::Info, format!("Saved {}", path.display())),
            Err(e) => self.report_error(&e, "Failed to save"),
        }
    }

    fn show_preview(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let Some(shown) = self.shown else {
            ui.centered_and_justified(|ui| {
                ui.label("No image loaded. Use Load Image to open a PNG or JPEG.");
            });
            return;
        };

        if self.texture.is_none() {
            let color_image = match shown {
                Shown::Source => self.session.source().map(source_color_image),
                Shown::Result => self.session.result().map(result_color_image),
            };
            if let Some(color_image) = color_image {
                self.texture =
                    Some(ctx.load_texture("preview", color_image, egui::TextureOptions::default()));
            }
        }

        if let Some(ref texture) = self.texture {
            let size = texture.size_vec2();
            let available = ui.available_size();
            // Shrink to the panel but never blow up past native resolution.
            let scale = (available.x / size.x).min(available.y / size.y).min(1.0);
            ui.centered_and_justified(|ui| {
                ui.add(egui::Image::new((texture.id(), size * scale)));
            });
        }
    }

    fn show_message(&mut self, ctx: &egui::Context) {
        let Some(message) = &self.message else {
            return;
        };
        let title = match message.severity {
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Info => "Info",
        };
        let text = message.text.clone();

        let mut dismissed = false;
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(&text);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.message = None;
        }
    }

    fn report_error(&mut self, err: &luma_mask::Error, context: &str) {
        if err.is_warning() {
            self.report(Severity::Warning, err.to_string());
        } else {
            self.report(Severity::Error, format!("{context}: {err}"));
        }
    }

    fn report(&mut self, severity: Severity, text: String) {
        match severity {
            Severity::Warning => log::warn!("{text}"),
            Severity::Error => log::error!("{text}"),
            Severity::Info => log::info!("{text}"),
        }
        self.message = Some(Message { severity, text });
    }
}

#[allow(clippy::cast_possible_truncation)]
fn source_color_image(img: &RgbImage) -> egui::ColorImage {
    let thumb = preview::thumbnail(img, PREVIEW_MAX_WIDTH, PREVIEW_MAX_HEIGHT);
    let size = [thumb.width() as usize, thumb.height() as usize];
    egui::ColorImage::from_rgb(size, thumb.as_raw())
}

#[allow(clippy::cast_possible_truncation)]
fn result_color_image(img: &RgbaImage) -> egui::ColorImage {
    let thumb = preview::thumbnail(img, PREVIEW_MAX_WIDTH, PREVIEW_MAX_HEIGHT);
    let size = [thumb.width() as usize, thumb.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, thumb.as_raw())
}

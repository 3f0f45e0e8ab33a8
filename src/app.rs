use crate::config::ExplorerConfig;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::explorer::Explorer;
use crate::utils::display_table;
use egui::{ComboBox, DragValue, RichText, TextEdit};

pub struct App {
    heading: String,
    info_panel_height: f32,
    explorer: Explorer,
}

impl App {
    /// Called once before the first frame.
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        dataset: Dataset,
        config: &ExplorerConfig,
    ) -> Self {
        Self {
            heading: config.heading.clone(),
            info_panel_height: config.info_panel_height,
            explorer: Explorer::new(dataset, config),
        }
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Feature:");
            let mut feature = self.explorer.selection().feature.clone();
            ComboBox::from_id_source("feature_selector")
                .selected_text(&feature)
                .width(200.0)
                .show_ui(ui, |ui| {
                    for name in self.explorer.dataset().feature_names() {
                        ui.selectable_value(&mut feature, name.clone(), name);
                    }
                });
            if feature != self.explorer.selection().feature {
                report(self.explorer.select_feature(&feature));
            }

            ui.label("Sample Size:");
            let max = self.explorer.dataset().height().max(1);
            let mut size = self.explorer.selection().sample_size;
            ui.add(DragValue::new(&mut size).clamp_range(1..=max));
            self.explorer.set_sample_size(size);

            if ui.button("Vis Hele Datasættet").clicked() {
                report(self.explorer.show_full_dataset());
            }
            if ui.button("Vis 5 Første Rækker").clicked() {
                report(self.explorer.show_head());
            }
            if ui.button("Shuffle Datasættet").clicked() {
                report(self.explorer.shuffle_dataset());
            }
            if ui.button("Vis Statistik").clicked() {
                report(self.explorer.show_statistics());
            }
        });
    }
}

fn report(result: Result<()>) {
    if let Err(e) = result {
        log::error!("{e}");
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(10.0);
            ui.label(RichText::new(&self.heading).text_style(egui::TextStyle::Heading));
            ui.add_space(10.0);
            self.show_controls(ui);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(self.explorer.status());
        });

        egui::TopBottomPanel::bottom("info_panel")
            .resizable(false)
            .exact_height(self.info_panel_height)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        let mut text = self.explorer.info();
                        ui.add(TextEdit::multiline(&mut text).desired_width(f32::INFINITY));
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            display_table(self.explorer.table(), ui);
            egui::warn_if_debug_build(ui);
        });
    }
}

//! One renderer per sidebar view. Panels own their widget state and the
//! sample data they display; only the assistant panel touches the session.

pub mod analytics;
pub mod assistant;
pub mod dashboard;
pub mod documents;
pub mod network;
pub mod settings_view;
pub mod simulation;
pub mod timetable;

use crate::sample::Metric;
use crate::theme::Theme;
use eframe::egui::{self, RichText};

pub fn metric_card(ui: &mut egui::Ui, theme: &Theme, metric: &Metric) {
    theme.card_frame().show(ui, |ui| {
        ui.label(
            RichText::new(metric.label)
                .color(theme.text_muted)
                .size(12.0),
        );
        ui.label(
            RichText::new(&metric.value)
                .color(theme.text_primary)
                .size(22.0)
                .strong(),
        );
        let delta_color = if metric.positive {
            theme.success
        } else {
            theme.danger
        };
        ui.label(RichText::new(&metric.delta).color(delta_color).size(12.0));
    });
}

pub fn metric_row(ui: &mut egui::Ui, theme: &Theme, metrics: &[Metric]) {
    ui.columns(metrics.len(), |columns| {
        for (column, metric) in columns.iter_mut().zip(metrics) {
            metric_card(column, theme, metric);
        }
    });
}

pub fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(8.0);
    ui.label(RichText::new(text).size(15.0).strong());
}

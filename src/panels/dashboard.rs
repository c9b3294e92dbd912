use crate::panels::{metric_row, section_heading};
use crate::sample::{self, DirectionSeries, Impact, Issue, Metric};
use crate::theme::Theme;
use eframe::egui::{self, RichText};
use egui_plot::{Legend, Line, Plot};

pub struct DashboardPanel {
    metrics: Vec<Metric>,
    series: Vec<DirectionSeries>,
    issues: Vec<Issue>,
}

impl DashboardPanel {
    pub fn new() -> Self {
        Self {
            metrics: sample::dashboard_metrics(),
            series: sample::movement_series(),
            issues: sample::current_issues(),
        }
    }

    /// Redraws the fabricated movement data, as the mockup does on each rerun.
    pub fn refresh(&mut self) {
        self.series = sample::movement_series();
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, theme: &Theme) {
        metric_row(ui, theme, &self.metrics);

        section_heading(ui, "Real-Time Train Movements");
        let palette = [
            theme.accent_primary,
            theme.success,
            theme.warning,
            theme.danger,
        ];
        Plot::new("train_movements")
            .height(280.0)
            .legend(Legend::default())
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                for (direction, color) in self.series.iter().zip(palette) {
                    let points: Vec<[f64; 2]> = direction
                        .counts
                        .iter()
                        .enumerate()
                        .map(|(hour, count)| [hour as f64, *count])
                        .collect();
                    plot_ui.line(Line::new(points).name(direction.name).color(color).width(2.0));
                }
            });

        ui.columns(2, |columns| {
            let left = &mut columns[0];
            section_heading(left, "Current Issues");
            for issue in &self.issues {
                let color = match issue.impact {
                    Impact::High => theme.danger,
                    Impact::Medium => theme.warning,
                    Impact::Low => theme.accent_primary,
                };
                theme.card_frame().show(left, |ui| {
                    ui.label(
                        RichText::new(format!("{} at {}", issue.kind, issue.location))
                            .color(color)
                            .strong(),
                    );
                    ui.label(
                        RichText::new(format!("Affecting {} trains", issue.trains))
                            .color(theme.text_muted)
                            .size(12.0),
                    );
                });
            }

            let right = &mut columns[1];
            section_heading(right, "AI Recommendations");
            theme.highlight_frame().show(right, |ui| {
                ui.label(sample::DASHBOARD_RECOMMENDATIONS);
            });
        });
    }
}

use crate::config::AppConfig;
use crate::export;
use crate::jobs::JobRunner;
use crate::panels::{metric_row, section_heading};
use crate::sample::{ReportBundle, ReportRequest};
use crate::theme::Theme;
use crate::toast::Toasts;
use chrono::{Duration, Local, NaiveDate};
use eframe::egui::{self, RichText};
use egui_extras::DatePickerButton;
use egui_plot::{Bar, BarChart, Line, Plot};

const REPORT_TYPES: [&str; 5] = [
    "Executive Summary",
    "Performance Analysis",
    "Financial Report",
    "Safety Metrics",
    "Custom Report",
];

pub struct AnalyticsPanel {
    report_type: usize,
    start: NaiveDate,
    end: NaiveDate,
    generating: bool,
    report: Option<ReportBundle>,
}

impl AnalyticsPanel {
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            report_type: 0,
            start: today - Duration::days(30),
            end: today,
            generating: false,
            report: None,
        }
    }

    pub fn report_ready(&mut self, bundle: ReportBundle) {
        self.generating = false;
        self.report = Some(bundle);
    }

    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        theme: &Theme,
        jobs: &JobRunner,
        config: &AppConfig,
        toasts: &mut Toasts,
    ) {
        ui.horizontal(|ui| {
            egui::ComboBox::from_label("Report Type")
                .selected_text(REPORT_TYPES[self.report_type])
                .show_ui(ui, |ui| {
                    for (index, name) in REPORT_TYPES.iter().enumerate() {
                        ui.selectable_value(&mut self.report_type, index, *name);
                    }
                });

            ui.label("From");
            ui.add(DatePickerButton::new(&mut self.start).id_salt("report_start"));
            ui.label("To");
            ui.add(DatePickerButton::new(&mut self.end).id_salt("report_end"));
        });

        if ui
            .add_enabled(!self.generating, egui::Button::new("Generate Report"))
            .clicked()
        {
            if self.end < self.start {
                std::mem::swap(&mut self.start, &mut self.end);
            }
            self.generating = true;
            self.report = None;
            jobs.generate_report(
                ui.ctx(),
                ReportRequest {
                    report_type: REPORT_TYPES[self.report_type].to_string(),
                    start: self.start,
                    end: self.end,
                },
                config.report_delay(),
            );
        }

        if self.generating {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(
                    RichText::new("Generating comprehensive report...").color(theme.text_muted),
                );
            });
        }

        let Some(report) = &self.report else {
            return;
        };

        section_heading(
            ui,
            &format!(
                "{} - {} to {}",
                report.request.report_type, report.request.start, report.request.end
            ),
        );
        metric_row(ui, theme, &report.kpis);

        ui.columns(2, |columns| {
            let left = &mut columns[0];
            left.label(RichText::new("Daily Performance Trend").strong());
            let points: Vec<[f64; 2]> = report
                .daily_performance
                .iter()
                .enumerate()
                .map(|(day, score)| [day as f64, *score])
                .collect();
            Plot::new("daily_performance")
                .height(220.0)
                .allow_zoom(false)
                .allow_drag(false)
                .allow_scroll(false)
                .show(left, |plot_ui| {
                    plot_ui.line(
                        Line::new(points)
                            .name("Performance")
                            .color(theme.accent_primary)
                            .width(2.0),
                    );
                });

            let right = &mut columns[1];
            right.label(RichText::new("Service Performance Breakdown").strong());
            let bars: Vec<Bar> = report
                .service_breakdown
                .iter()
                .enumerate()
                .map(|(index, (label, share))| {
                    Bar::new(index as f64, *share).width(0.7).name(*label)
                })
                .collect();
            Plot::new("service_breakdown")
                .height(220.0)
                .allow_zoom(false)
                .allow_drag(false)
                .allow_scroll(false)
                .show(right, |plot_ui| {
                    plot_ui.bar_chart(BarChart::new(bars).color(theme.accent_primary));
                });
        });

        section_heading(ui, "Export Options");
        ui.horizontal(|ui| {
            if ui.button("Export JSON").clicked() {
                match export::export_report(report) {
                    Ok(path) => toasts.success(format!("Report exported to {}", path.display())),
                    Err(err) => {
                        tracing::warn!(error = %err, "report export failed");
                        toasts.error(format!("Export failed: {err}"));
                    }
                }
            }
            if ui.button("Export PDF").clicked() {
                toasts.info("PDF export started...");
            }
            if ui.button("Email Report").clicked() {
                toasts.info("Report queued for email delivery");
            }
            if ui.button("Schedule Reports").clicked() {
                toasts.info("Recurring report schedule saved");
            }
        });
    }
}

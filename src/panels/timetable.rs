use crate::config::AppConfig;
use crate::jobs::JobRunner;
use crate::panels::section_heading;
use crate::sample::{self, GanttSpan, OptimizationSummary, TimetableRow, TrainStatus};
use crate::theme::Theme;
use chrono::{Local, NaiveDate};
use eframe::egui::{self, RichText, ScrollArea};
use egui_extras::DatePickerButton;
use egui_plot::{Bar, BarChart, Legend, Plot};

const RAILWAY_LINES: [&str; 5] = [
    "All Lines",
    "Line 1 - Express",
    "Line 2 - Regional",
    "Line 3 - Freight",
    "Line 4 - High Speed",
];

const OPTIMIZATION_GOALS: [&str; 4] = [
    "Minimize Delays",
    "Maximize Throughput",
    "Energy Efficiency",
    "Passenger Comfort",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimetableMode {
    Schedule,
    Gantt,
}

pub struct TimetablePanel {
    line: usize,
    date: NaiveDate,
    mode: TimetableMode,
    rows: Vec<TimetableRow>,
    spans: Vec<GanttSpan>,
    goal: usize,
    optimizing: bool,
    optimization: Option<OptimizationSummary>,
}

impl TimetablePanel {
    pub fn new() -> Self {
        Self {
            line: 0,
            date: Local::now().date_naive(),
            mode: TimetableMode::Schedule,
            rows: sample::timetable_rows(),
            spans: sample::gantt_spans(),
            goal: 0,
            optimizing: false,
            optimization: None,
        }
    }

    pub fn refresh(&mut self) {
        self.rows = sample::timetable_rows();
        self.spans = sample::gantt_spans();
    }

    pub fn optimization_finished(&mut self, summary: OptimizationSummary) {
        self.optimizing = false;
        self.optimization = Some(summary);
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, theme: &Theme, jobs: &JobRunner, config: &AppConfig) {
        ui.horizontal(|ui| {
            egui::ComboBox::from_label("Railway Line")
                .selected_text(RAILWAY_LINES[self.line])
                .show_ui(ui, |ui| {
                    for (index, line) in RAILWAY_LINES.iter().enumerate() {
                        ui.selectable_value(&mut self.line, index, *line);
                    }
                });

            ui.add(DatePickerButton::new(&mut self.date).id_salt("timetable_date"));

            ui.separator();
            ui.radio_value(&mut self.mode, TimetableMode::Schedule, "Schedule");
            ui.radio_value(&mut self.mode, TimetableMode::Gantt, "Gantt Chart");
        });

        match self.mode {
            TimetableMode::Schedule => self.schedule_table(ui, theme),
            TimetableMode::Gantt => self.gantt_chart(ui, theme),
        }

        section_heading(ui, "AI Timetable Optimization");
        ui.horizontal(|ui| {
            egui::ComboBox::from_label("Optimization Goal")
                .selected_text(OPTIMIZATION_GOALS[self.goal])
                .show_ui(ui, |ui| {
                    for (index, goal) in OPTIMIZATION_GOALS.iter().enumerate() {
                        ui.selectable_value(&mut self.goal, index, *goal);
                    }
                });

            if ui
                .add_enabled(!self.optimizing, egui::Button::new("Run AI Optimization"))
                .clicked()
            {
                self.optimizing = true;
                self.optimization = None;
                jobs.optimize_timetable(
                    ui.ctx(),
                    OPTIMIZATION_GOALS[self.goal].to_string(),
                    config.optimization_delay(),
                );
            }
        });

        if self.optimizing {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(
                    RichText::new("Running advanced optimization algorithms...")
                        .color(theme.text_muted),
                );
            });
        }

        if let Some(summary) = &self.optimization {
            ui.label(RichText::new(&summary.headline).color(theme.success).strong());
            theme.highlight_frame().show(ui, |ui| {
                ui.label(summary.detail);
            });
        }
    }

    fn schedule_table(&self, ui: &mut egui::Ui, theme: &Theme) {
        ScrollArea::vertical()
            .id_salt("timetable_rows")
            .max_height(360.0)
            .show(ui, |ui| {
                egui::Grid::new("timetable_grid")
                    .striped(true)
                    .num_columns(6)
                    .min_col_width(90.0)
                    .show(ui, |ui| {
                        for header in ["Train ID", "Station", "Arrival", "Departure", "Platform", "Status"] {
                            ui.label(RichText::new(header).strong());
                        }
                        ui.end_row();

                        for row in &self.rows {
                            ui.label(&row.train_id);
                            ui.label(row.station);
                            ui.label(&row.arrival);
                            ui.label(&row.departure);
                            ui.label(row.platform.to_string());
                            let status_color = match row.status {
                                TrainStatus::OnTime => theme.success,
                                TrainStatus::Delayed => theme.danger,
                                TrainStatus::Early => theme.accent_primary,
                            };
                            ui.label(RichText::new(row.status.label()).color(status_color));
                            ui.end_row();
                        }
                    });
            });
    }

    fn gantt_chart(&self, ui: &mut egui::Ui, theme: &Theme) {
        section_heading(ui, "Train Schedule Visualization");
        let palette = [
            theme.accent_primary,
            theme.success,
            theme.warning,
            theme.danger,
        ];

        Plot::new("timetable_gantt")
            .height(320.0)
            .legend(Legend::default())
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                for line in 1..=4u8 {
                    let bars: Vec<Bar> = self
                        .spans
                        .iter()
                        .enumerate()
                        .filter(|(_, span)| span.line == line)
                        .map(|(index, span)| {
                            Bar::new(index as f64, span.duration_hours)
                                .base_offset(span.start_hour)
                                .width(0.6)
                                .name(span.train.clone())
                        })
                        .collect();
                    plot_ui.bar_chart(
                        BarChart::new(bars)
                            .horizontal()
                            .color(palette[(line - 1) as usize])
                            .name(format!("Line {line}")),
                    );
                }
            });
    }
}

use crate::config::AppConfig;
use crate::jobs::JobRunner;
use crate::panels::{metric_card, section_heading};
use crate::sample::{SimulationOutcome, SimulationRequest};
use crate::theme::Theme;
use crate::toast::Toasts;
use eframe::egui::{self, CollapsingHeader, DragValue, ProgressBar, RichText, Slider};
use egui_plot::{Legend, Line, Plot};

const SIMULATION_TYPES: [&str; 4] = [
    "Traffic Flow",
    "Disruption Recovery",
    "Capacity Planning",
    "Energy Optimization",
];

const TIME_HORIZONS: [&str; 5] = ["1 Hour", "6 Hours", "1 Day", "1 Week", "1 Month"];

const ALGORITHMS: [&str; 3] = ["Genetic Algorithm", "Simulated Annealing", "Particle Swarm"];

const SCENARIOS: [(&str, &str); 4] = [
    (
        "Rush Hour Optimization",
        "Maximize throughput during peak hours",
    ),
    ("Energy Efficiency", "Minimize energy consumption"),
    ("Delay Recovery", "Optimal recovery from major disruptions"),
    (
        "Weekend Service",
        "Balance maintenance and passenger service",
    ),
];

pub struct SimulationPanel {
    simulation_type: usize,
    time_horizon: usize,
    confidence_level: u8,
    iterations: u32,
    algorithm: usize,
    seed: u32,
    include_weather: bool,
    running: bool,
    progress: u8,
    outcome: Option<SimulationOutcome>,
}

impl SimulationPanel {
    pub fn new() -> Self {
        Self {
            simulation_type: 0,
            time_horizon: 2,
            confidence_level: 95,
            iterations: 1000,
            algorithm: 0,
            seed: 42,
            include_weather: true,
            running: false,
            progress: 0,
            outcome: None,
        }
    }

    pub fn progress(&mut self, percent: u8) {
        self.progress = percent;
    }

    pub fn finished(&mut self, outcome: SimulationOutcome) {
        self.running = false;
        self.outcome = Some(outcome);
    }

    fn request(&self) -> SimulationRequest {
        SimulationRequest {
            simulation_type: SIMULATION_TYPES[self.simulation_type].to_string(),
            time_horizon: TIME_HORIZONS[self.time_horizon].to_string(),
            confidence_level: self.confidence_level,
            iterations: self.iterations,
            algorithm: ALGORITHMS[self.algorithm].to_string(),
            seed: self.seed,
            include_weather: self.include_weather,
        }
    }

    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        theme: &Theme,
        jobs: &JobRunner,
        config: &AppConfig,
        toasts: &mut Toasts,
    ) {
        section_heading(ui, "Simulation Parameters");
        ui.horizontal(|ui| {
            egui::ComboBox::from_label("Simulation Type")
                .selected_text(SIMULATION_TYPES[self.simulation_type])
                .show_ui(ui, |ui| {
                    for (index, name) in SIMULATION_TYPES.iter().enumerate() {
                        ui.selectable_value(&mut self.simulation_type, index, *name);
                    }
                });

            egui::ComboBox::from_label("Time Horizon")
                .selected_text(TIME_HORIZONS[self.time_horizon])
                .show_ui(ui, |ui| {
                    for (index, name) in TIME_HORIZONS.iter().enumerate() {
                        ui.selectable_value(&mut self.time_horizon, index, *name);
                    }
                });
        });
        ui.add(Slider::new(&mut self.confidence_level, 80..=99).text("Confidence Level"));

        CollapsingHeader::new("Advanced Settings").show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label("Monte Carlo Iterations");
                ui.add(DragValue::new(&mut self.iterations).range(100..=10_000));
                ui.separator();
                ui.label("Random Seed");
                ui.add(DragValue::new(&mut self.seed).range(0..=9999));
            });
            ui.horizontal(|ui| {
                egui::ComboBox::from_label("Algorithm")
                    .selected_text(ALGORITHMS[self.algorithm])
                    .show_ui(ui, |ui| {
                        for (index, name) in ALGORITHMS.iter().enumerate() {
                            ui.selectable_value(&mut self.algorithm, index, *name);
                        }
                    });
                ui.checkbox(&mut self.include_weather, "Include Weather Patterns");
            });
        });

        if ui
            .add_enabled(
                !self.running,
                egui::Button::new("Run Simulation").min_size(egui::vec2(ui.available_width(), 32.0)),
            )
            .clicked()
        {
            self.running = true;
            self.progress = 0;
            self.outcome = None;
            jobs.run_simulation(ui.ctx(), self.request(), config.simulation_tick());
        }

        if self.running {
            ui.add(ProgressBar::new(self.progress as f32 / 100.0).show_percentage());
            ui.label(
                RichText::new(format!("Running simulation... {}%", self.progress))
                    .color(theme.text_muted),
            );
        }

        if let Some(outcome) = &self.outcome {
            section_heading(ui, "Simulation Results");
            ui.columns(2, |columns| {
                let left = &mut columns[0];
                Plot::new("simulation_results")
                    .height(260.0)
                    .legend(Legend::default())
                    .allow_zoom(false)
                    .allow_drag(false)
                    .allow_scroll(false)
                    .show(left, |plot_ui| {
                        plot_ui.line(
                            Line::new(outcome.baseline.clone())
                                .name("Baseline")
                                .color(theme.danger)
                                .width(2.0),
                        );
                        plot_ui.line(
                            Line::new(outcome.optimized.clone())
                                .name("Optimized")
                                .color(theme.success)
                                .width(2.0),
                        );
                    });

                let right = &mut columns[1];
                right.label(RichText::new("Key Findings").strong());
                for finding in &outcome.findings {
                    metric_card(right, theme, finding);
                }
                right.label(RichText::new("Recommendations").strong());
                for recommendation in outcome.recommendations {
                    theme.highlight_frame().show(right, |ui| {
                        ui.label(recommendation);
                    });
                }
            });
        }

        section_heading(ui, "Pre-configured Scenarios");
        ui.columns(2, |columns| {
            for (index, (name, description)) in SCENARIOS.iter().enumerate() {
                let column = &mut columns[index % 2];
                if column
                    .add(egui::Button::new(*name).min_size(egui::vec2(column.available_width(), 28.0)))
                    .clicked()
                {
                    toasts.info(format!("Loading scenario: {description}"));
                }
            }
        });
    }
}

use crate::panels::section_heading;
use crate::sample::{DATA_SOURCES, DEMO_USERS};
use crate::theme::Theme;
use crate::toast::Toasts;
use eframe::egui::{self, RichText, Slider};

const LANGUAGES: [&str; 4] = ["English", "German", "French", "Spanish"];
const TIME_ZONES: [&str; 4] = ["UTC", "CET", "EST", "PST"];
const UNITS: [&str; 2] = ["Metric", "Imperial"];
const AI_MODELS: [&str; 3] = ["GPT-4", "Claude 3", "Custom Fine-tuned Model"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsTab {
    General,
    AiConfiguration,
    DataSources,
    UserManagement,
}

impl SettingsTab {
    const ALL: [SettingsTab; 4] = [
        SettingsTab::General,
        SettingsTab::AiConfiguration,
        SettingsTab::DataSources,
        SettingsTab::UserManagement,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::AiConfiguration => "AI Configuration",
            Self::DataSources => "Data Sources",
            Self::UserManagement => "User Management",
        }
    }
}

pub struct SettingsPanel {
    tab: SettingsTab,
    organization: String,
    language: usize,
    time_zone: usize,
    units: usize,
    email_notifications: bool,
    sms_alerts: bool,
    daily_summary: bool,
    ai_model: usize,
    creativity: f32,
    safety_threshold: f32,
    auto_optimization: bool,
    predictive_maintenance: bool,
    delay_predictions: bool,
    energy_optimization: bool,
    user_query: String,
}

impl SettingsPanel {
    pub fn new() -> Self {
        Self {
            tab: SettingsTab::General,
            organization: "National Railway Corporation".to_string(),
            language: 0,
            time_zone: 0,
            units: 0,
            email_notifications: true,
            sms_alerts: true,
            daily_summary: true,
            ai_model: 0,
            creativity: 0.7,
            safety_threshold: 0.95,
            auto_optimization: true,
            predictive_maintenance: true,
            delay_predictions: true,
            energy_optimization: true,
            user_query: String::new(),
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, theme: &Theme, toasts: &mut Toasts) {
        ui.horizontal(|ui| {
            for tab in SettingsTab::ALL {
                if ui.selectable_label(self.tab == tab, tab.label()).clicked() {
                    self.tab = tab;
                }
            }
        });
        ui.separator();

        match self.tab {
            SettingsTab::General => self.general_tab(ui),
            SettingsTab::AiConfiguration => self.ai_tab(ui),
            SettingsTab::DataSources => self.data_sources_tab(ui, theme, toasts),
            SettingsTab::UserManagement => self.users_tab(ui, theme, toasts),
        }
    }

    fn combo(ui: &mut egui::Ui, label: &str, options: &[&str], selected: &mut usize) {
        egui::ComboBox::from_label(label.to_string())
            .selected_text(options[*selected])
            .show_ui(ui, |ui| {
                for (index, option) in options.iter().enumerate() {
                    ui.selectable_value(selected, index, *option);
                }
            });
    }

    fn general_tab(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "General Settings");
        ui.horizontal(|ui| {
            ui.label("Organization Name");
            ui.text_edit_singleline(&mut self.organization);
        });
        Self::combo(ui, "Language", &LANGUAGES, &mut self.language);
        Self::combo(ui, "Time Zone", &TIME_ZONES, &mut self.time_zone);
        Self::combo(ui, "Units", &UNITS, &mut self.units);

        section_heading(ui, "Notification Preferences");
        ui.checkbox(&mut self.email_notifications, "Email Notifications");
        ui.checkbox(&mut self.sms_alerts, "SMS Alerts for Critical Events");
        ui.checkbox(&mut self.daily_summary, "Daily Summary Reports");
    }

    fn ai_tab(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "AI Model Configuration");
        Self::combo(ui, "Primary AI Model", &AI_MODELS, &mut self.ai_model);
        ui.add(Slider::new(&mut self.creativity, 0.0..=1.0).text("Response Creativity"));
        ui.add(Slider::new(&mut self.safety_threshold, 0.0..=1.0).text("Safety Threshold"));

        section_heading(ui, "AI Features");
        ui.checkbox(&mut self.auto_optimization, "Automatic Schedule Optimization");
        ui.checkbox(&mut self.predictive_maintenance, "Predictive Maintenance Alerts");
        ui.checkbox(&mut self.delay_predictions, "Real-time Delay Predictions");
        ui.checkbox(&mut self.energy_optimization, "Energy Optimization");
    }

    fn data_sources_tab(&mut self, ui: &mut egui::Ui, theme: &Theme, toasts: &mut Toasts) {
        section_heading(ui, "Connected Data Sources");
        egui::Grid::new("data_sources")
            .striped(true)
            .num_columns(4)
            .min_col_width(120.0)
            .show(ui, |ui| {
                for (name, status, last_sync) in DATA_SOURCES {
                    ui.label(name);
                    let status_color = if status == "Connected" {
                        theme.success
                    } else {
                        theme.warning
                    };
                    ui.label(RichText::new(status).color(status_color));
                    ui.label(RichText::new(last_sync).color(theme.text_muted));
                    if ui.button("Sync").clicked() {
                        toasts.info(format!("{name} sync started"));
                    }
                    ui.end_row();
                }
            });
    }

    fn users_tab(&mut self, ui: &mut egui::Ui, theme: &Theme, toasts: &mut Toasts) {
        section_heading(ui, "User Management");
        ui.add(
            egui::TextEdit::singleline(&mut self.user_query)
                .desired_width(f32::INFINITY)
                .hint_text("Enter name or email"),
        );

        let query = self.user_query.to_ascii_lowercase();
        egui::Grid::new("user_table")
            .striped(true)
            .num_columns(4)
            .min_col_width(120.0)
            .show(ui, |ui| {
                for header in ["Name", "Role", "Department", "Last Active"] {
                    ui.label(RichText::new(header).strong());
                }
                ui.end_row();

                for (name, role, department, last_active) in DEMO_USERS {
                    if !query.is_empty() && !name.to_ascii_lowercase().contains(&query) {
                        continue;
                    }
                    ui.label(name);
                    ui.label(role);
                    ui.label(department);
                    ui.label(RichText::new(last_active).color(theme.text_muted));
                    ui.end_row();
                }
            });

        ui.horizontal(|ui| {
            if ui.button("Add User").clicked() {
                toasts.info("User invitation sent");
            }
            if ui.button("Edit Permissions").clicked() {
                toasts.info("Opening permission editor...");
            }
            if ui.button("Usage Report").clicked() {
                toasts.info("Usage report queued");
            }
        });
    }
}

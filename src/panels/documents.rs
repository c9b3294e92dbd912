use crate::config::AppConfig;
use crate::jobs::JobRunner;
use crate::panels::section_heading;
use crate::sample::{DocumentHit, KNOWLEDGE_BASE_STATS};
use crate::theme::Theme;
use crate::toast::Toasts;
use eframe::egui::{self, CollapsingHeader, RichText, Slider};

const DOC_TYPES: [&str; 5] = ["Regulations", "Standards", "Procedures", "Manuals", "Reports"];
const DATE_RANGES: [&str; 4] = ["Last Week", "Last Month", "Last Year", "All Time"];

pub struct DocumentsPanel {
    query: String,
    selected_types: [bool; 5],
    date_range: usize,
    relevance: f32,
    searching: bool,
    results: Option<Vec<DocumentHit>>,
}

impl DocumentsPanel {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            selected_types: [false; 5],
            date_range: 3,
            relevance: 0.7,
            searching: false,
            results: None,
        }
    }

    pub fn search_finished(&mut self, hits: Vec<DocumentHit>) {
        self.searching = false;
        self.results = Some(hits);
    }

    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        theme: &Theme,
        jobs: &JobRunner,
        config: &AppConfig,
        toasts: &mut Toasts,
    ) {
        section_heading(ui, "Intelligent Document Search");
        ui.add(
            egui::TextEdit::singleline(&mut self.query)
                .desired_width(f32::INFINITY)
                .hint_text("e.g., safety protocols for level crossings"),
        );

        ui.horizontal(|ui| {
            for (index, doc_type) in DOC_TYPES.iter().enumerate() {
                ui.toggle_value(&mut self.selected_types[index], *doc_type);
            }

            ui.separator();
            egui::ComboBox::from_label("Date Range")
                .selected_text(DATE_RANGES[self.date_range])
                .show_ui(ui, |ui| {
                    for (index, range) in DATE_RANGES.iter().enumerate() {
                        ui.selectable_value(&mut self.date_range, index, *range);
                    }
                });
        });

        ui.add(Slider::new(&mut self.relevance, 0.0..=1.0).text("Relevance Threshold"));

        if ui
            .add_enabled(!self.searching, egui::Button::new("Search Documents"))
            .clicked()
        {
            self.searching = true;
            self.results = None;
            jobs.search_documents(ui.ctx(), self.query.clone(), config.search_delay());
        }

        if self.searching {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(
                    RichText::new("Searching through knowledge base...").color(theme.text_muted),
                );
            });
        }

        if let Some(results) = &self.results {
            section_heading(ui, "Search Results");
            for hit in results {
                CollapsingHeader::new(format!(
                    "{} (Relevance: {:.0}%)",
                    hit.title,
                    hit.relevance * 100.0
                ))
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(format!("Type: {} | Date: {}", hit.doc_type, hit.date))
                            .color(theme.text_muted)
                            .size(12.0),
                    );
                    ui.label(RichText::new(hit.excerpt).italics());
                    ui.horizontal(|ui| {
                        if ui.button("View Full Document").clicked() {
                            toasts.info(format!("Opening {}...", hit.title));
                        }
                        if ui.button("Add to Workspace").clicked() {
                            toasts.success("Added to workspace");
                        }
                        if ui.button("Generate Summary").clicked() {
                            toasts.info("Summary generation queued");
                        }
                    });
                });
            }
        }

        section_heading(ui, "Knowledge Base Statistics");
        ui.columns(KNOWLEDGE_BASE_STATS.len(), |columns| {
            for (column, (label, value, note)) in columns.iter_mut().zip(&KNOWLEDGE_BASE_STATS) {
                theme.card_frame().show(column, |ui| {
                    ui.label(RichText::new(*label).color(theme.text_muted).size(12.0));
                    ui.label(RichText::new(*value).strong().size(18.0));
                    ui.label(RichText::new(*note).color(theme.success).size(11.0));
                });
            }
        });
    }
}

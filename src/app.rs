use crate::config::AppConfig;
use crate::event::AppEvent;
use crate::jobs::JobRunner;
use crate::panels::analytics::AnalyticsPanel;
use crate::panels::assistant::AssistantPanel;
use crate::panels::dashboard::DashboardPanel;
use crate::panels::documents::DocumentsPanel;
use crate::panels::network::NetworkPanel;
use crate::panels::settings_view::SettingsPanel;
use crate::panels::simulation::SimulationPanel;
use crate::panels::timetable::TimetablePanel;
use crate::session::{Session, ViewName};
use crate::theme::Theme;
use crate::toast::{ToastKind, Toasts};
use eframe::egui::{self, RichText, ScrollArea};
use std::sync::mpsc::{Receiver, TryRecvError};
use tracing::{debug, info};

pub struct RailPilotApp {
    rx: Receiver<AppEvent>,
    config: AppConfig,
    theme: Theme,
    session: Session,
    jobs: JobRunner,
    toasts: Toasts,
    dashboard: DashboardPanel,
    assistant: AssistantPanel,
    timetable: TimetablePanel,
    network: NetworkPanel,
    documents: DocumentsPanel,
    simulation: SimulationPanel,
    analytics: AnalyticsPanel,
    settings_view: SettingsPanel,
}

impl RailPilotApp {
    pub fn new(config: AppConfig, rx: Receiver<AppEvent>, jobs: JobRunner) -> Self {
        let mut session = Session::new();
        if let Some(name) = config.start_view.as_deref() {
            if let Err(err) = session.select_view(name) {
                tracing::warn!(%err, "ignoring configured start view");
            }
        }

        Self {
            rx,
            config,
            theme: Theme::default(),
            session,
            jobs,
            toasts: Toasts::default(),
            dashboard: DashboardPanel::new(),
            assistant: AssistantPanel::new(),
            timetable: TimetablePanel::new(),
            network: NetworkPanel::new(),
            documents: DocumentsPanel::new(),
            simulation: SimulationPanel::new(),
            analytics: AnalyticsPanel::new(),
            settings_view: SettingsPanel::new(),
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    fn drain_events(&mut self) {
        loop {
            match self.rx.try_recv() {
                Ok(event) => self.apply_event(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    debug!("event channel disconnected");
                    break;
                }
            }
        }
    }

    fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ReplyReady => {
                debug!("assistant reply revealed");
                self.assistant.reply_revealed();
            }
            AppEvent::SimulationProgress(percent) => {
                self.simulation.progress(percent);
            }
            AppEvent::SimulationFinished(outcome) => {
                debug!("simulation job finished");
                self.simulation.finished(outcome);
            }
            AppEvent::OptimizationFinished(summary) => {
                debug!("timetable optimization finished");
                self.timetable.optimization_finished(summary);
            }
            AppEvent::SearchFinished(hits) => {
                debug!(hits = hits.len(), "document search finished");
                self.documents.search_finished(hits);
            }
            AppEvent::ReportReady(bundle) => {
                debug!("report job finished");
                self.analytics.report_ready(bundle);
            }
        }
    }

    fn select_view(&mut self, view: ViewName) {
        if self.session.current_view() == view {
            return;
        }
        self.session.set_view(view);
        info!(view = %view, "view selected");

        // The mockup redraws its random sample data on every rerun; here the
        // equivalent moment is re-entering the view.
        match view {
            ViewName::Dashboard => self.dashboard.refresh(),
            ViewName::Timetable => self.timetable.refresh(),
            ViewName::Network => self.network.refresh(),
            _ => {}
        }
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("RailPilot");
                ui.separator();
                ui.label(
                    RichText::new("Railway Operations Planning Copilot")
                        .color(self.theme.text_muted),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(self.session.current_view().title())
                            .color(self.theme.accent_primary),
                    );
                });
            });
        });
    }

    fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("nav_panel").resizable(true).show(ctx, |ui| {
            ui.heading("RailPilot");
            ui.label(
                RichText::new("AI-Powered Railway Planning Assistant")
                    .color(self.theme.text_muted)
                    .size(12.0),
            );
            ui.separator();

            let mut clicked_view: Option<ViewName> = None;
            for view in ViewName::ALL {
                let selected = self.session.current_view() == view;
                if ui.selectable_label(selected, view.title()).clicked() {
                    clicked_view = Some(view);
                }
            }
            if let Some(view) = clicked_view {
                self.select_view(view);
            }

            ui.separator();
            ui.strong("System Status");
            egui::Grid::new("system_status").num_columns(2).show(ui, |ui| {
                ui.label(RichText::new("AI Model").color(self.theme.text_muted));
                ui.label(RichText::new("Active").color(self.theme.success));
                ui.end_row();
                ui.label(RichText::new("Data Sync").color(self.theme.text_muted));
                ui.label(RichText::new("Live").color(self.theme.success));
                ui.end_row();
            });

            ui.separator();
            ui.strong("Quick Actions");
            if ui.button("Sync Timetables").clicked() {
                self.toasts.success("Timetables synchronized!");
            }
            if ui.button("Import Network Data").clicked() {
                self.toasts.info("Network data import started...");
            }
        });
    }

    fn render_central(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.session.current_view().heading());
            ui.separator();

            ScrollArea::vertical()
                .id_salt("central_view")
                .auto_shrink([false, false])
                .show(ui, |ui| match self.session.current_view() {
                    ViewName::Dashboard => self.dashboard.ui(ui, &self.theme),
                    ViewName::Assistant => self.assistant.ui(
                        ui,
                        &self.theme,
                        &mut self.session,
                        &self.jobs,
                        &self.config,
                    ),
                    ViewName::Timetable => {
                        self.timetable.ui(ui, &self.theme, &self.jobs, &self.config)
                    }
                    ViewName::Network => self.network.ui(ui, &self.theme, &mut self.toasts),
                    ViewName::Documents => self.documents.ui(
                        ui,
                        &self.theme,
                        &self.jobs,
                        &self.config,
                        &mut self.toasts,
                    ),
                    ViewName::Simulation => self.simulation.ui(
                        ui,
                        &self.theme,
                        &self.jobs,
                        &self.config,
                        &mut self.toasts,
                    ),
                    ViewName::Analytics => self.analytics.ui(
                        ui,
                        &self.theme,
                        &self.jobs,
                        &self.config,
                        &mut self.toasts,
                    ),
                    ViewName::Settings => {
                        self.settings_view.ui(ui, &self.theme, &mut self.toasts)
                    }
                });
        });
    }

    fn render_toasts(&mut self, ctx: &egui::Context) {
        if self.toasts.entries().is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toast_stack"))
            .anchor(egui::Align2::RIGHT_TOP, [-16.0, 48.0])
            .show(ctx, |ui| {
                for toast in self.toasts.entries() {
                    let color = match toast.kind {
                        ToastKind::Success => self.theme.success,
                        ToastKind::Info => self.theme.accent_primary,
                        ToastKind::Error => self.theme.danger,
                    };
                    self.theme.panel_frame(self.theme.surface_3, 10).show(ui, |ui| {
                        ui.label(RichText::new(&toast.text).color(color));
                    });
                }
            });
        // Keep repainting while toasts are up so they expire on time.
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}

impl eframe::App for RailPilotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();
        self.toasts.prune();
        self.render_top_bar(ctx);
        self.render_sidebar(ctx);
        self.render_central(ctx);
        self.render_toasts(ctx);
    }
}

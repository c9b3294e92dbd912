//! Background jobs standing in for the mockup's cosmetic pauses. Each job
//! sleeps on the shared runtime, then delivers an `AppEvent` over the channel
//! and wakes the UI. No real work happens inside any of them.

use crate::event::AppEvent;
use crate::sample::{self, ReportRequest, SimulationRequest};
use eframe::egui;
use std::sync::mpsc::Sender;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::time;
use tracing::debug;

#[derive(Clone)]
pub struct JobRunner {
    runtime_handle: Handle,
    tx: Sender<AppEvent>,
}

impl JobRunner {
    pub fn new(runtime_handle: Handle, tx: Sender<AppEvent>) -> Self {
        Self { runtime_handle, tx }
    }

    fn deliver(tx: &Sender<AppEvent>, ctx: &egui::Context, event: AppEvent) {
        if tx.send(event).is_ok() {
            ctx.request_repaint();
        }
    }

    /// Ends the "analyzing" pause on the chat reply. The reply itself is
    /// already in the conversation log; this only reveals it.
    pub fn reveal_reply(&self, ctx: &egui::Context, delay: Duration) {
        debug!(delay_ms = delay.as_millis() as u64, "scheduling reply reveal");
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        self.runtime_handle.spawn(async move {
            time::sleep(delay).await;
            Self::deliver(&tx, &ctx, AppEvent::ReplyReady);
        });
    }

    /// Ticks a fake progress bar to 100%, then emits the fabricated outcome.
    pub fn run_simulation(&self, ctx: &egui::Context, request: SimulationRequest, tick: Duration) {
        debug!(
            simulation_type = %request.simulation_type,
            time_horizon = %request.time_horizon,
            confidence = request.confidence_level,
            iterations = request.iterations,
            algorithm = %request.algorithm,
            seed = request.seed,
            weather = request.include_weather,
            "starting simulation job"
        );
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        self.runtime_handle.spawn(async move {
            for percent in 1..=100u8 {
                time::sleep(tick).await;
                Self::deliver(&tx, &ctx, AppEvent::SimulationProgress(percent));
            }
            let outcome = sample::simulation_outcome(&request);
            Self::deliver(&tx, &ctx, AppEvent::SimulationFinished(outcome));
        });
    }

    pub fn optimize_timetable(&self, ctx: &egui::Context, goal: String, delay: Duration) {
        debug!(%goal, "starting timetable optimization job");
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        self.runtime_handle.spawn(async move {
            time::sleep(delay).await;
            let summary = sample::optimization_summary(&goal);
            Self::deliver(&tx, &ctx, AppEvent::OptimizationFinished(summary));
        });
    }

    pub fn search_documents(&self, ctx: &egui::Context, query: String, delay: Duration) {
        debug!(%query, "starting document search job");
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        self.runtime_handle.spawn(async move {
            time::sleep(delay).await;
            Self::deliver(&tx, &ctx, AppEvent::SearchFinished(sample::document_hits()));
        });
    }

    pub fn generate_report(&self, ctx: &egui::Context, request: ReportRequest, delay: Duration) {
        debug!(report_type = %request.report_type, "starting report job");
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        self.runtime_handle.spawn(async move {
            time::sleep(delay).await;
            let bundle = sample::report_bundle(&request);
            Self::deliver(&tx, &ctx, AppEvent::ReportReady(bundle));
        });
    }
}

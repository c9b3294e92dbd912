use crate::config::AppConfig;
use crate::jobs::JobRunner;
use crate::panels::section_heading;
use crate::responder::QUICK_PROMPTS;
use crate::session::{ChatRole, Session};
use crate::theme::Theme;
use eframe::egui::{self, RichText, ScrollArea};

pub struct AssistantPanel {
    input_buffer: String,
    /// The canned reply is already appended; while this is set it stays
    /// hidden behind the "analyzing" indicator.
    awaiting_reveal: bool,
    scroll_to_bottom: bool,
}

impl AssistantPanel {
    pub fn new() -> Self {
        Self {
            input_buffer: String::new(),
            awaiting_reveal: false,
            scroll_to_bottom: false,
        }
    }

    pub fn reply_revealed(&mut self) {
        self.awaiting_reveal = false;
        self.scroll_to_bottom = true;
    }

    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        theme: &Theme,
        session: &mut Session,
        jobs: &JobRunner,
        config: &AppConfig,
    ) {
        let input_enabled = !self.awaiting_reveal;

        section_heading(ui, "Quick Prompts");
        ui.columns(QUICK_PROMPTS.len(), |columns| {
            for (column, prompt) in columns.iter_mut().zip(&QUICK_PROMPTS) {
                if column
                    .add_enabled(input_enabled, egui::Button::new(prompt.label))
                    .clicked()
                {
                    session.submit_quick_prompt(prompt.message);
                    self.scroll_to_bottom = true;
                }
            }
        });

        section_heading(ui, "Chat with AI Assistant");
        let transcript_height = (ui.available_height() - 140.0).max(120.0);
        let visible_len = if self.awaiting_reveal {
            session.conversation().len().saturating_sub(1)
        } else {
            session.conversation().len()
        };

        ScrollArea::vertical()
            .id_salt("chat_transcript")
            .max_height(transcript_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for message in &session.conversation()[..visible_len] {
                    match message.role {
                        ChatRole::User => {
                            theme.card_frame().show(ui, |ui| {
                                ui.label(
                                    RichText::new("You").color(theme.text_muted).size(11.0),
                                );
                                ui.label(&message.content);
                            });
                        }
                        ChatRole::Assistant => {
                            theme.highlight_frame().show(ui, |ui| {
                                ui.label(
                                    RichText::new("Assistant")
                                        .color(theme.accent_primary)
                                        .size(11.0),
                                );
                                ui.label(&message.content);
                            });
                        }
                    }
                }

                if self.awaiting_reveal {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(
                            RichText::new("Analyzing railway data...").color(theme.text_muted),
                        );
                    });
                }

                if self.scroll_to_bottom {
                    ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
                }
            });
        self.scroll_to_bottom = false;

        ui.separator();
        let hint = if self.awaiting_reveal {
            "Waiting for response..."
        } else {
            "Ask anything about railway operations..."
        };

        let mut send_now = false;
        theme.composer_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                let response = ui.add_enabled(
                    input_enabled,
                    egui::TextEdit::singleline(&mut self.input_buffer)
                        .desired_width(ui.available_width() - 70.0)
                        .hint_text(hint),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    send_now = true;
                }

                let clicked = ui
                    .add_enabled(
                        input_enabled && !self.input_buffer.trim().is_empty(),
                        egui::Button::new("Send"),
                    )
                    .clicked();
                send_now |= clicked;
            });
        });

        if send_now && input_enabled {
            self.submit(ui.ctx(), session, jobs, config);
        }
    }

    fn submit(
        &mut self,
        ctx: &egui::Context,
        session: &mut Session,
        jobs: &JobRunner,
        config: &AppConfig,
    ) {
        let prompt = self.input_buffer.trim().to_string();
        if prompt.is_empty() {
            return;
        }

        session.submit_chat(&prompt);
        tracing::info!(chars = prompt.len(), "chat prompt submitted");

        if !config.reply_delay().is_zero() {
            self.awaiting_reveal = true;
            jobs.reveal_reply(ctx, config.reply_delay());
        }

        self.input_buffer.clear();
        self.scroll_to_bottom = true;
        ctx.request_repaint();
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::responder;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown view: {0}")]
    UnknownView(String),
}

/// The closed set of views reachable from the sidebar menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewName {
    Dashboard,
    Assistant,
    Timetable,
    Network,
    Documents,
    Simulation,
    Analytics,
    Settings,
}

impl ViewName {
    pub const ALL: [ViewName; 8] = [
        ViewName::Dashboard,
        ViewName::Assistant,
        ViewName::Timetable,
        ViewName::Network,
        ViewName::Documents,
        ViewName::Simulation,
        ViewName::Analytics,
        ViewName::Settings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Assistant => "AI Assistant",
            Self::Timetable => "Timetable Manager",
            Self::Network => "Network Visualization",
            Self::Documents => "Document Intelligence",
            Self::Simulation => "Simulation & Optimization",
            Self::Analytics => "Analytics & Reports",
            Self::Settings => "Settings",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Self::Dashboard => "Railway Operations Dashboard",
            Self::Assistant => "AI Railway Planning Assistant",
            Self::Timetable => "Intelligent Timetable Management",
            Self::Network => "Railway Network Visualization",
            Self::Documents => "Document Intelligence & Search",
            Self::Simulation => "Simulation & Optimization Engine",
            Self::Analytics => "Analytics & Reporting Dashboard",
            Self::Settings => "System Settings",
        }
    }
}

impl fmt::Display for ViewName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for ViewName {
    type Err = SessionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        ViewName::ALL
            .into_iter()
            .find(|view| view.title() == raw)
            .ok_or_else(|| SessionError::UnknownView(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Per-run interaction state: the selected view and the conversation log.
/// Nothing here survives the process; there is deliberately no on-disk store.
#[derive(Debug)]
pub struct Session {
    current_view: ViewName,
    conversation: Vec<ChatMessage>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            current_view: ViewName::Dashboard,
            conversation: Vec::new(),
        }
    }

    pub fn current_view(&self) -> ViewName {
        self.current_view
    }

    pub fn set_view(&mut self, view: ViewName) {
        self.current_view = view;
    }

    /// String-driven view selection. Unknown names are rejected and leave the
    /// current view untouched.
    pub fn select_view(&mut self, name: &str) -> Result<ViewName, SessionError> {
        let view = name.parse::<ViewName>()?;
        self.current_view = view;
        Ok(view)
    }

    pub fn conversation(&self) -> &[ChatMessage] {
        &self.conversation
    }

    pub fn append(&mut self, message: ChatMessage) {
        self.conversation.push(message);
    }

    /// Free-text chat submission: appends the user entry and its canned reply
    /// as one step. The log always grows by exactly two entries, user first.
    pub fn submit_chat(&mut self, text: &str) {
        self.append(ChatMessage::user(text));
        self.append(ChatMessage::assistant(responder::reply_to(text)));
    }

    /// Quick-prompt submission appends the user entry only; no reply is
    /// generated on this path.
    pub fn submit_quick_prompt(&mut self, text: &str) {
        self.append(ChatMessage::user(text));
    }
}

#[cfg(test)]
mod tests {
    use super::{ChatMessage, ChatRole, Session, SessionError, ViewName};

    #[test]
    fn new_session_starts_on_dashboard_with_empty_log() {
        let session = Session::new();
        assert_eq!(session.current_view(), ViewName::Dashboard);
        assert!(session.conversation().is_empty());
    }

    #[test]
    fn set_view_tracks_most_recent_selection() {
        let mut session = Session::new();
        session.set_view(ViewName::Network);
        session.set_view(ViewName::Analytics);
        assert_eq!(session.current_view(), ViewName::Analytics);

        session.set_view(ViewName::Analytics);
        assert_eq!(session.current_view(), ViewName::Analytics);
    }

    #[test]
    fn select_view_accepts_every_menu_title() {
        let mut session = Session::new();
        for view in ViewName::ALL {
            let selected = session
                .select_view(view.title())
                .expect("menu titles should parse");
            assert_eq!(selected, view);
            assert_eq!(session.current_view(), view);
        }
    }

    #[test]
    fn select_view_rejects_unknown_names_and_keeps_state() {
        let mut session = Session::new();
        session.set_view(ViewName::Documents);

        let err = session
            .select_view("Cargo Manifest")
            .expect_err("unknown view names should be rejected");
        assert_eq!(err, SessionError::UnknownView("Cargo Manifest".to_string()));
        assert_eq!(session.current_view(), ViewName::Documents);
    }

    #[test]
    fn view_names_round_trip_through_display() {
        for view in ViewName::ALL {
            let parsed: ViewName = view
                .to_string()
                .parse()
                .expect("display output should parse back");
            assert_eq!(parsed, view);
        }
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut session = Session::new();
        session.append(ChatMessage::user("first"));
        session.append(ChatMessage::assistant("second"));
        session.append(ChatMessage::user("third"));

        let contents: Vec<&str> = session
            .conversation()
            .iter()
            .map(|message| message.content.as_str())
            .collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[test]
    fn submit_chat_appends_user_then_assistant() {
        let mut session = Session::new();
        session.submit_chat("Please optimize the morning schedule");

        assert_eq!(session.conversation().len(), 2);
        assert_eq!(session.conversation()[0].role, ChatRole::User);
        assert_eq!(
            session.conversation()[0].content,
            "Please optimize the morning schedule"
        );
        assert_eq!(session.conversation()[1].role, ChatRole::Assistant);
        assert!(!session.conversation()[1].content.is_empty());
    }

    #[test]
    fn submit_quick_prompt_appends_user_entry_only() {
        let mut session = Session::new();
        session.submit_quick_prompt("Create optimal maintenance schedule for next month");

        assert_eq!(session.conversation().len(), 1);
        assert_eq!(session.conversation()[0].role, ChatRole::User);
    }
}

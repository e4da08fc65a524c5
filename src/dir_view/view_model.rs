use actix_web::{http::StatusCode, ResponseError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dir_detail::detail_model::{ClickTarget, DismissTrigger};
use crate::dir_member::member_model::Member;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Error(String),
    Loaded(Vec<Member>),
}

impl ViewState {
    pub fn status(&self) -> &'static str {
        match self {
            ViewState::Loading => "loading",
            ViewState::Error(_) => "error",
            ViewState::Loaded(_) => "loaded",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded(usize),
    Failed,
    AlreadyInFlight,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    ViewMore { id: String },
    CloseButton,
    OverlayClick { target: ClickTarget },
    KeyDown { key: String },
    Retry,
}

impl UiEvent {
    pub fn dismiss_trigger(&self) -> Option<DismissTrigger> {
        match self {
            UiEvent::CloseButton => Some(DismissTrigger::CloseButton),
            UiEvent::OverlayClick { target } => Some(DismissTrigger::OverlayClick(*target)),
            UiEvent::KeyDown { key } => Some(DismissTrigger::KeyDown(key.clone())),
            UiEvent::ViewMore { .. } | UiEvent::Retry => None,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct DirectorySnapshot {
    pub status: &'static str,
    pub message: Option<String>,
    pub members: Vec<Member>,
    pub selected: Option<Member>,
    pub detail_visible: bool,
    pub scroll_locked: bool,
    pub fetch_in_flight: bool,
    pub resolved_at: Option<DateTime<Utc>>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("no team member with id {0}")]
    UnknownMember(String),

    #[error("team members are not loaded")]
    NotLoaded,
}

impl ResponseError for DirectoryError {
    fn status_code(&self) -> StatusCode {
        match self {
            DirectoryError::UnknownMember(_) => StatusCode::NOT_FOUND,
            DirectoryError::NotLoaded => StatusCode::CONFLICT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_event_wire_format() {
        let event: UiEvent = serde_json::from_str(r#"{"type": "key_down", "key": "Escape"}"#).unwrap();
        assert_eq!(event, UiEvent::KeyDown { key: "Escape".to_string() });

        let event: UiEvent =
            serde_json::from_str(r#"{"type": "overlay_click", "target": "content"}"#).unwrap();
        assert_eq!(
            event.dismiss_trigger(),
            Some(DismissTrigger::OverlayClick(ClickTarget::Content))
        );

        let event: UiEvent = serde_json::from_str(r#"{"type": "view_more", "id": "7"}"#).unwrap();
        assert_eq!(event.dismiss_trigger(), None);
    }

    #[test]
    fn test_directory_error_status() {
        assert_eq!(
            DirectoryError::UnknownMember("9".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(DirectoryError::NotLoaded.status_code(), StatusCode::CONFLICT);
    }
}

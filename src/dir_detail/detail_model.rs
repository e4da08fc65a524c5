use serde::{Deserialize, Serialize};

pub const ESCAPE_KEY: &str = "Escape";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClickTarget {
    Overlay,
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DismissTrigger {
    CloseButton,
    OverlayClick(ClickTarget),
    KeyDown(String),
}

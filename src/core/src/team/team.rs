use serde::{Deserialize, Serialize};

pub type TeamId = String;
pub type PlayerId = String;

/// A participant of a league as seen by the scheduler and the standings engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRef {
    pub id: TeamId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl TeamRef {
    pub fn new(id: impl Into<TeamId>, name: impl Into<String>) -> Self {
        TeamRef {
            id: id.into(),
            name: name.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

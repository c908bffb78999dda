use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::goal::Goal;
use crate::models::id::RecordId;

/// An actor and the goals it has a relationship with.
///
/// Goals are stored as full copies, exactly as they looked when appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    #[serde(default)]
    pub accepted_goals: Vec<Goal>,
    #[serde(default)]
    pub achieved_goals: Vec<Goal>,
    #[serde(default)]
    pub challenged_goals: Vec<Goal>,
    #[serde(default)]
    pub gifted_goals: Vec<Goal>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The four ways a user can relate to a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalAction {
    Accept,
    Achieve,
    Challenge,
    Gift,
}

impl GoalAction {
    pub fn as_str(self) -> &'static str {
        match self {
            GoalAction::Accept => "accept",
            GoalAction::Achieve => "achieve",
            GoalAction::Challenge => "challenge",
            GoalAction::Gift => "gift",
        }
    }
}

impl fmt::Display for GoalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl User {
    pub fn goals(&self, action: GoalAction) -> &[Goal] {
        match action {
            GoalAction::Accept => &self.accepted_goals,
            GoalAction::Achieve => &self.achieved_goals,
            GoalAction::Challenge => &self.challenged_goals,
            GoalAction::Gift => &self.gifted_goals,
        }
    }

    /// Append `goal` to the list that `action` maps to.
    pub fn record(&mut self, action: GoalAction, goal: Goal) {
        let list = match action {
            GoalAction::Accept => &mut self.accepted_goals,
            GoalAction::Achieve => &mut self.achieved_goals,
            GoalAction::Challenge => &mut self.challenged_goals,
            GoalAction::Gift => &mut self.gifted_goals,
        };
        list.push(goal);
    }
}

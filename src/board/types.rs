//! Session and readiness types.

use serde::Serialize;

use crate::assignment::AssignmentState;
use crate::ranking::FullRanking;

/// The whole user-visible state. Exactly one mode is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    /// Normal mode: tiers plus the derived pool.
    Tiered(AssignmentState),
    /// Full-ranking mode: one strict order of every entity.
    Ranked(FullRanking),
}

impl Default for Session {
    fn default() -> Self {
        Self::initial()
    }
}

impl Session {
    pub fn initial() -> Self {
        Session::Tiered(AssignmentState::initial())
    }

    pub fn is_ranked(&self) -> bool {
        matches!(self, Session::Ranked(_))
    }

    pub fn assignment(&self) -> Option<&AssignmentState> {
        match self {
            Session::Tiered(state) => Some(state),
            Session::Ranked(_) => None,
        }
    }

    pub fn ranking(&self) -> Option<&FullRanking> {
        match self {
            Session::Tiered(_) => None,
            Session::Ranked(ranking) => Some(ranking),
        }
    }
}

/// Outcome of the export completion policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Readiness {
    pub ready: bool,
    /// Why export is disabled. `None` when ready.
    pub reason: Option<String>,
}

impl Readiness {
    pub fn ready() -> Self {
        Self {
            ready: true,
            reason: None,
        }
    }

    pub fn blocked(reason: impl Into<String>) -> Self {
        Self {
            ready: false,
            reason: Some(reason.into()),
        }
    }
}

//! Full-ranking types.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::catalogue::EntityId;
use crate::error::TierError;

/// A strict total order of every catalogue entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullRanking {
    /// Most favored first.
    pub sequence: Vec<EntityId>,
    /// Entity focused for button or keyboard moves. Not persisted.
    #[serde(skip)]
    pub selected: Option<EntityId>,
}

impl FullRanking {
    pub fn new(sequence: Vec<EntityId>) -> Self {
        Self {
            sequence,
            selected: None,
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Zero-based rank of `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.sequence.iter().position(|e| e.as_str() == id)
    }
}

/// Where a selected entity should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Top,
    Up,
    Down,
    Bottom,
    /// Index `floor((n - 1) / 2)`.
    Middle,
}

impl Direction {
    /// Target index for an entity at `from` in a sequence of length `len`.
    pub fn target(self, from: usize, len: usize) -> usize {
        let last = len.saturating_sub(1);
        match self {
            Direction::Top => 0,
            Direction::Up => from.saturating_sub(1),
            Direction::Down => (from + 1).min(last),
            Direction::Bottom => last,
            Direction::Middle => last / 2,
        }
    }
}

impl FromStr for Direction {
    type Err = TierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Direction::Top),
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "bottom" => Ok(Direction::Bottom),
            "middle" => Ok(Direction::Middle),
            other => Err(TierError::Config(format!("unknown direction: {other}"))),
        }
    }
}

/// Keyboard shortcut in full-ranking mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankKey {
    Move(Direction),
    ClearSelection,
}

impl RankKey {
    /// Maps a DOM `KeyboardEvent.key` value. Letters are case-insensitive.
    ///
    /// ```
    /// use u_tierlist::ranking::{Direction, RankKey};
    ///
    /// assert_eq!(RankKey::parse("ArrowUp"), Some(RankKey::Move(Direction::Up)));
    /// assert_eq!(RankKey::parse("J"), Some(RankKey::Move(Direction::Down)));
    /// assert_eq!(RankKey::parse("Escape"), Some(RankKey::ClearSelection));
    /// assert_eq!(RankKey::parse("x"), None);
    /// ```
    pub fn parse(key: &str) -> Option<RankKey> {
        if key == "Escape" {
            return Some(RankKey::ClearSelection);
        }
        let direction = match key.to_lowercase().as_str() {
            "arrowup" | "k" => Direction::Up,
            "arrowdown" | "j" => Direction::Down,
            "t" => Direction::Top,
            "b" => Direction::Bottom,
            "m" => Direction::Middle,
            _ => return None,
        };
        Some(RankKey::Move(direction))
    }
}

//! Tier identifiers, descriptors and containers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TierError;

/// How many entities a tier may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capacity {
    /// At most one entity; inserting displaces the occupant.
    Single,
    /// No limit.
    Unbounded,
}

impl Capacity {
    pub fn limit(self) -> Option<usize> {
        match self {
            Capacity::Single => Some(1),
            Capacity::Unbounded => None,
        }
    }
}

/// The fixed set of tiers, in display order (most favored first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierId {
    Favorite,
    ReallyLike,
    Positive,
    Neutral,
    Negative,
    AlwaysLose,
}

impl TierId {
    /// Every tier in declaration order.
    pub const ALL: [TierId; 6] = [
        TierId::Favorite,
        TierId::ReallyLike,
        TierId::Positive,
        TierId::Neutral,
        TierId::Negative,
        TierId::AlwaysLose,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TierId::Favorite => "favorite",
            TierId::ReallyLike => "really_like",
            TierId::Positive => "positive",
            TierId::Neutral => "neutral",
            TierId::Negative => "negative",
            TierId::AlwaysLose => "always_lose",
        }
    }

    pub fn descriptor(self) -> &'static TierDescriptor {
        &DESCRIPTORS[self as usize]
    }

    /// Tiers that hold exactly one entity.
    pub fn single_capacity() -> impl Iterator<Item = TierId> {
        TierId::ALL
            .into_iter()
            .filter(|t| t.descriptor().capacity == Capacity::Single)
    }
}

impl fmt::Display for TierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TierId {
    type Err = TierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TierId::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| TierError::UnknownContainer(s.to_owned()))
    }
}

/// Static configuration of one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierDescriptor {
    pub id: TierId,
    /// Heading shown to the user and used in exports.
    pub name: &'static str,
    pub capacity: Capacity,
    /// Whether the user may switch between manual and alphabetical order.
    pub toggleable: bool,
    /// Initial `ordered` flag.
    pub default_ordered: bool,
    /// Decoration appended to the occupant's name on the export card.
    pub marker: Option<&'static str>,
}

impl TierDescriptor {
    /// Whether a tier whose stored flag is `ordered` keeps manual order.
    ///
    /// Single-capacity and non-toggleable tiers are always alphabetical.
    pub fn is_manual(&self, ordered: bool) -> bool {
        ordered && self.toggleable && self.capacity == Capacity::Unbounded
    }
}

static DESCRIPTORS: [TierDescriptor; 6] = [
    TierDescriptor {
        id: TierId::Favorite,
        name: "Favorite",
        capacity: Capacity::Single,
        toggleable: false,
        default_ordered: true,
        marker: Some("\u{1F451}"),
    },
    TierDescriptor {
        id: TierId::ReallyLike,
        name: "Cheer For",
        capacity: Capacity::Unbounded,
        toggleable: true,
        default_ordered: false,
        marker: None,
    },
    TierDescriptor {
        id: TierId::Positive,
        name: "Enjoy When They Win",
        capacity: Capacity::Unbounded,
        toggleable: true,
        default_ordered: false,
        marker: None,
    },
    TierDescriptor {
        id: TierId::Neutral,
        name: "No Feelings",
        capacity: Capacity::Unbounded,
        toggleable: true,
        default_ordered: false,
        marker: None,
    },
    TierDescriptor {
        id: TierId::Negative,
        name: "Enjoy When They Lose",
        capacity: Capacity::Unbounded,
        toggleable: true,
        default_ordered: false,
        marker: None,
    },
    TierDescriptor {
        id: TierId::AlwaysLose,
        name: "Most Hated",
        capacity: Capacity::Single,
        toggleable: false,
        default_ordered: true,
        marker: Some("\u{1F608}"),
    },
];

/// Checks the descriptor table. Run once at startup.
pub fn validate_descriptors() -> Result<(), TierError> {
    let mut unbounded = 0;
    for (i, tier) in TierId::ALL.into_iter().enumerate() {
        let d = tier.descriptor();
        if d.id != tier || tier as usize != i {
            return Err(TierError::Config(format!(
                "descriptor table out of order at {tier}"
            )));
        }
        if d.name.trim().is_empty() {
            return Err(TierError::Config(format!("tier {tier} has no name")));
        }
        match d.capacity {
            Capacity::Single if d.toggleable => {
                return Err(TierError::Config(format!(
                    "single-capacity tier {tier} cannot toggle ordering"
                )));
            }
            Capacity::Single => {}
            Capacity::Unbounded => unbounded += 1,
        }
    }
    if unbounded == 0 {
        return Err(TierError::Config("no unbounded tier".into()));
    }
    Ok(())
}

/// Where an entity lives: the derived pool or a named tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Container {
    Pool,
    Tier(TierId),
}

/// Wire name of the pool container.
pub const POOL_ID: &str = "pool";

impl Container {
    pub fn as_str(self) -> &'static str {
        match self {
            Container::Pool => POOL_ID,
            Container::Tier(t) => t.as_str(),
        }
    }

    pub fn tier(self) -> Option<TierId> {
        match self {
            Container::Pool => None,
            Container::Tier(t) => Some(t),
        }
    }
}

impl From<TierId> for Container {
    fn from(t: TierId) -> Self {
        Container::Tier(t)
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Container {
    type Err = TierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == POOL_ID {
            Ok(Container::Pool)
        } else {
            s.parse().map(Container::Tier)
        }
    }
}

impl TryFrom<String> for Container {
    type Error = TierError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Container> for String {
    fn from(c: Container) -> Self {
        c.as_str().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_table_valid() {
        assert!(validate_descriptors().is_ok());
    }

    #[test]
    fn test_single_capacity_tiers() {
        let singles: Vec<TierId> = TierId::single_capacity().collect();
        assert_eq!(singles, vec![TierId::Favorite, TierId::AlwaysLose]);
    }

    #[test]
    fn test_is_manual() {
        assert!(TierId::Neutral.descriptor().is_manual(true));
        assert!(!TierId::Neutral.descriptor().is_manual(false));
        assert!(!TierId::Favorite.descriptor().is_manual(true));
    }

    #[test]
    fn test_container_parse() {
        assert_eq!("pool".parse::<Container>().unwrap(), Container::Pool);
        assert_eq!(
            "really_like".parse::<Container>().unwrap(),
            Container::Tier(TierId::ReallyLike)
        );
        assert!("bench".parse::<Container>().is_err());
    }

    #[test]
    fn test_container_serde() {
        let json = serde_json::to_string(&Container::Tier(TierId::AlwaysLose)).unwrap();
        assert_eq!(json, "\"always_lose\"");
        let back: Container = serde_json::from_str("\"pool\"").unwrap();
        assert_eq!(back, Container::Pool);
    }

    #[test]
    fn test_tier_serde_snake_case() {
        let json = serde_json::to_string(&TierId::ReallyLike).unwrap();
        assert_eq!(json, "\"really_like\"");
    }
}

//! Versioned session blob.
//!
//! Field aliases accept blobs written by the earlier JavaScript build
//! (`tierState`, `sickoMode`, `sickoIds`, no version field).

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::assignment::AssignmentState;
use crate::board::Session;
use crate::catalogue::{Catalogue, EntityId};
use crate::error::Result;
use crate::ranking::{complete_permutation, FullRanking};

/// Current blob version. Version 0 is the unversioned legacy layout.
pub const SESSION_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct StoredSession {
    version: u32,
    #[serde(alias = "tierState")]
    tier_state: AssignmentState,
    #[serde(alias = "sickoMode")]
    full_ranking: bool,
    #[serde(alias = "sickoIds")]
    ranking: Vec<EntityId>,
}

/// Serializes a session.
pub fn encode(session: &Session) -> Result<String> {
    let stored = match session {
        Session::Tiered(state) => StoredSession {
            version: SESSION_VERSION,
            tier_state: state.clone(),
            full_ranking: false,
            ranking: Vec::new(),
        },
        Session::Ranked(ranking) => StoredSession {
            version: SESSION_VERSION,
            tier_state: AssignmentState::initial(),
            full_ranking: true,
            ranking: ranking.sequence.clone(),
        },
    };
    Ok(serde_json::to_string(&stored)?)
}

/// Restores a session, falling back to the initial session on any problem.
///
/// The restored state is repaired against `catalogue`: unknown or repeated
/// ids are dropped and a full ranking is completed to a permutation.
pub fn decode(catalogue: &Catalogue, text: &str) -> Session {
    let stored: StoredSession = match serde_json::from_str(text) {
        Ok(stored) => stored,
        Err(e) => {
            warn!(error = %e, "discarding unreadable session blob");
            return Session::initial();
        }
    };
    if stored.version > SESSION_VERSION {
        warn!(version = stored.version, "discarding session blob from a newer version");
        return Session::initial();
    }

    if stored.full_ranking {
        let sequence = complete_permutation(catalogue, stored.ranking);
        Session::Ranked(FullRanking::new(sequence))
    } else {
        Session::Tiered(stored.tier_state.sanitize(catalogue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Entity;
    use crate::tiers::TierId;

    fn catalogue() -> Catalogue {
        Catalogue::new(vec![
            Entity::new("a", "Alpha", "X"),
            Entity::new("b", "Beta", "X"),
            Entity::new("c", "Gamma", "Y"),
        ])
        .unwrap()
    }

    fn ids(list: &[&str]) -> Vec<EntityId> {
        list.iter().map(|s| EntityId::from(*s)).collect()
    }

    #[test]
    fn test_tiered_roundtrip() {
        let mut state = AssignmentState::initial();
        state.slot_mut(TierId::Favorite).members = ids(&["b"]);
        let session = Session::Tiered(state);

        let blob = encode(&session).unwrap();
        assert!(blob.contains("\"version\":1"));
        assert_eq!(decode(&catalogue(), &blob), session);
    }

    #[test]
    fn test_ranked_roundtrip() {
        let session = Session::Ranked(FullRanking::new(ids(&["c", "a", "b"])));
        let blob = encode(&session).unwrap();
        assert_eq!(decode(&catalogue(), &blob), session);
    }

    #[test]
    fn test_legacy_blob() {
        let blob = r#"{
            "tierState": {
                "favorite": {"ordered": true, "teamIds": ["c"]},
                "really_like": {"ordered": false, "teamIds": ["b", "a"]}
            },
            "sickoMode": false,
            "sickoIds": []
        }"#;
        let Session::Tiered(state) = decode(&catalogue(), blob) else {
            panic!("expected tiered session");
        };
        assert_eq!(state.members(TierId::Favorite), ids(&["c"]).as_slice());
        assert_eq!(state.members(TierId::ReallyLike), ids(&["a", "b"]).as_slice());
    }

    #[test]
    fn test_partial_tier_state_keeps_other_tiers() {
        let blob = r#"{
            "tierState": {
                "favorite": {"teamIds": ["a"]},
                "retired": {"ordered": false, "teamIds": ["b"]},
                "positive": {"ordered": false, "teamIds": ["c"]}
            }
        }"#;
        let Session::Tiered(state) = decode(&catalogue(), blob) else {
            panic!("expected tiered session");
        };
        assert_eq!(state.members(TierId::Favorite), ids(&["a"]).as_slice());
        assert_eq!(state.members(TierId::Positive), ids(&["c"]).as_slice());
        assert_eq!(state.pool(&catalogue()), ids(&["b"]));
    }

    #[test]
    fn test_garbage_falls_back() {
        assert_eq!(decode(&catalogue(), "not json"), Session::initial());
        assert_eq!(decode(&catalogue(), "[1,2,3]"), Session::initial());
    }

    #[test]
    fn test_future_version_falls_back() {
        let blob = r#"{"version": 99, "sickoMode": true, "sickoIds": ["a"]}"#;
        assert_eq!(decode(&catalogue(), blob), Session::initial());
    }

    #[test]
    fn test_partial_ranking_repaired() {
        let blob = r#"{"version": 1, "full_ranking": true, "ranking": ["c", "ghost", "c"]}"#;
        let Session::Ranked(ranking) = decode(&catalogue(), blob) else {
            panic!("expected ranked session");
        };
        assert_eq!(ranking.sequence, ids(&["c", "a", "b"]));
    }
}

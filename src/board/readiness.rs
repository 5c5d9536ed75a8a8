//! Export completion policy.

use super::types::{Readiness, Session};
use crate::catalogue::Catalogue;
use crate::tiers::TierId;

/// Checks whether the session may be exported.
///
/// Normal mode needs every single-capacity tier (favorite and most hated)
/// filled. Full-ranking mode needs the ranking to cover the catalogue.
pub fn export_readiness(catalogue: &Catalogue, session: &Session) -> Readiness {
    match session {
        Session::Tiered(state) => {
            let filled = TierId::single_capacity().all(|t| state.members(t).len() == 1);
            if filled {
                Readiness::ready()
            } else {
                let names: Vec<&str> = TierId::single_capacity()
                    .map(|t| t.descriptor().name)
                    .collect();
                Readiness::blocked(format!(
                    "You need to pick a {} team to export.",
                    names.join(" and a ")
                ))
            }
        }
        Session::Ranked(ranking) => {
            if ranking.is_complete(catalogue) {
                Readiness::ready()
            } else {
                Readiness::blocked("Every team must be ranked to export.")
            }
        }
    }
}

pub fn is_export_ready(catalogue: &Catalogue, session: &Session) -> bool {
    export_readiness(catalogue, session).ready
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::{AssignmentState, Move};
    use crate::catalogue::{Entity, EntityId};
    use crate::ranking::FullRanking;
    use crate::tiers::Container;

    fn catalogue() -> Catalogue {
        Catalogue::new(vec![
            Entity::new("a", "Alpha", "X"),
            Entity::new("b", "Beta", "X"),
            Entity::new("c", "Gamma", "Y"),
        ])
        .unwrap()
    }

    #[test]
    fn test_tiered_needs_both_single_tiers() {
        let c = catalogue();
        let s = AssignmentState::initial();
        let r = export_readiness(&c, &Session::Tiered(s.clone()));
        assert!(!r.ready);
        assert_eq!(
            r.reason.as_deref(),
            Some("You need to pick a Favorite and a Most Hated team to export.")
        );

        let s = s
            .move_entity(&c, &Move::new("a", Container::Pool, TierId::Favorite.into()))
            .unwrap();
        assert!(!is_export_ready(&c, &Session::Tiered(s.clone())));

        let s = s
            .move_entity(&c, &Move::new("c", Container::Pool, TierId::AlwaysLose.into()))
            .unwrap();
        let r = export_readiness(&c, &Session::Tiered(s));
        assert_eq!(r, Readiness::ready());
    }

    #[test]
    fn test_ranked_needs_total_order() {
        let c = catalogue();
        let full = FullRanking::derive(&c, &AssignmentState::initial(), TierId::Neutral);
        assert!(is_export_ready(&c, &Session::Ranked(full)));

        let partial = FullRanking::new(vec![EntityId::from("a")]);
        let r = export_readiness(&c, &Session::Ranked(partial));
        assert!(!r.ready);
        assert!(r.reason.is_some());
    }
}

//! Plain-text export.

use crate::assignment::AssignmentState;
use crate::board::Session;
use crate::catalogue::{Catalogue, EntityId};
use crate::tiers::{BoardConfig, Capacity};

/// Renders the session as copyable text.
///
/// Readiness is not checked here; see [`Board::export_text`](crate::board::Board::export_text).
pub fn export_text(catalogue: &Catalogue, session: &Session, config: &BoardConfig) -> String {
    match session {
        Session::Tiered(state) => tiered_text(catalogue, state),
        Session::Ranked(ranking) => ranking_text(catalogue, &ranking.sequence, &config.ranking_heading),
    }
}

/// One block per non-empty tier, blocks separated by a blank line.
pub fn tiered_text(catalogue: &Catalogue, state: &AssignmentState) -> String {
    let mut lines: Vec<String> = Vec::new();

    for (tier, slot) in state.iter() {
        if slot.members.is_empty() {
            continue;
        }
        let descriptor = tier.descriptor();
        lines.push(format!("{}:", descriptor.name));

        if descriptor.capacity == Capacity::Single {
            lines.push(catalogue.name_of(slot.members[0].as_str()).to_owned());
        } else if descriptor.is_manual(slot.ordered) {
            lines.extend(numbered(catalogue, &slot.members));
        } else {
            lines.extend(
                slot.members
                    .iter()
                    .map(|id| format!("- {}", catalogue.name_of(id.as_str()))),
            );
        }
        lines.push(String::new());
    }

    lines.join("\n").trim().to_owned()
}

/// Heading line followed by every entity numbered from 1.
pub fn ranking_text(catalogue: &Catalogue, sequence: &[EntityId], heading: &str) -> String {
    let mut lines = vec![format!("{heading}:")];
    lines.extend(numbered(catalogue, sequence));
    lines.join("\n")
}

fn numbered<'a>(
    catalogue: &'a Catalogue,
    ids: &'a [EntityId],
) -> impl Iterator<Item = String> + 'a {
    ids.iter()
        .enumerate()
        .map(|(i, id)| format!("{}. {}", i + 1, catalogue.name_of(id.as_str())))
}

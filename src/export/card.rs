//! Layout model for the image export.
//!
//! Rasterization happens outside the crate; this only decides what goes
//! where.

use serde::Serialize;

use crate::assignment::AssignmentState;
use crate::board::Session;
use crate::catalogue::{Catalogue, EntityId};
use crate::tiers::BoardConfig;

/// One entity line on the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardEntry {
    /// Position number, shown only where order is meaningful.
    pub rank: Option<usize>,
    pub name: String,
    pub category: String,
    /// `https` image URL.
    pub image_url: Option<String>,
    pub marker: Option<&'static str>,
}

impl CardEntry {
    fn build(
        catalogue: &Catalogue,
        id: &EntityId,
        rank: Option<usize>,
        marker: Option<&'static str>,
    ) -> Self {
        let entity = catalogue.lookup(id.as_str());
        Self {
            rank,
            name: catalogue.name_of(id.as_str()).to_owned(),
            category: entity.map(|e| e.category.clone()).unwrap_or_default(),
            image_url: entity.and_then(|e| e.secure_image_url()),
            marker,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardSection {
    pub heading: String,
    pub subtitle: Option<String>,
    /// One column, or two for the full ranking.
    pub columns: Vec<Vec<CardEntry>>,
}

impl CardSection {
    /// All entries, column by column.
    pub fn entries(&self) -> impl Iterator<Item = &CardEntry> {
        self.columns.iter().flatten()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportCard {
    pub title: String,
    pub sections: Vec<CardSection>,
    pub footer: String,
}

impl ExportCard {
    pub fn build(catalogue: &Catalogue, session: &Session, config: &BoardConfig) -> Self {
        let sections = match session {
            Session::Tiered(state) => tier_sections(catalogue, state),
            Session::Ranked(ranking) => vec![ranking_section(catalogue, &ranking.sequence, config)],
        };
        Self {
            title: config.title.clone(),
            sections,
            footer: config.footer.clone(),
        }
    }
}

fn tier_sections(catalogue: &Catalogue, state: &AssignmentState) -> Vec<CardSection> {
    state
        .iter()
        .filter(|(_, slot)| !slot.members.is_empty())
        .map(|(tier, slot)| {
            let d = tier.descriptor();
            let numbered = d.is_manual(slot.ordered);
            let entries = slot
                .members
                .iter()
                .enumerate()
                .map(|(i, id)| CardEntry::build(catalogue, id, numbered.then_some(i + 1), d.marker))
                .collect();
            CardSection {
                heading: d.name.to_owned(),
                subtitle: None,
                columns: vec![entries],
            }
        })
        .collect()
}

fn ranking_section(catalogue: &Catalogue, sequence: &[EntityId], config: &BoardConfig) -> CardSection {
    let mid = sequence.len().div_ceil(2);
    let entries: Vec<CardEntry> = sequence
        .iter()
        .enumerate()
        .map(|(i, id)| CardEntry::build(catalogue, id, Some(i + 1), None))
        .collect();
    let (left, right) = entries.split_at(mid);

    CardSection {
        heading: config.ranking_heading.clone(),
        subtitle: Some(config.ranking_subtitle.clone()),
        columns: vec![left.to_vec(), right.to_vec()],
    }
}

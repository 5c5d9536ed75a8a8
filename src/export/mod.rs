//! Session exports: copyable text and the image card layout.

mod card;
mod text;

pub use card::{CardEntry, CardSection, ExportCard};
pub use text::{export_text, ranking_text, tiered_text};

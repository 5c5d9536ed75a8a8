//! Board configuration.

use super::types::{validate_descriptors, Capacity, TierId};
use crate::catalogue::DEFAULT_CATEGORY;
use crate::error::TierError;

/// Storage key of the persisted session blob.
pub const DEFAULT_STORAGE_KEY: &str = "fbs-affection-ranking:v1.3";

/// Configuration for a [`Board`](crate::board::Board).
///
/// # Examples
///
/// ```
/// use u_tierlist::tiers::{BoardConfig, TierId};
///
/// let config = BoardConfig::default()
///     .with_collapse_tier(TierId::Positive)
///     .with_storage_key("my-ranking:v2");
/// assert!(config.validate().is_ok());
/// assert_eq!(config.collapse_tier, TierId::Positive);
/// ```
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Tier that receives every entity when full ranking is exited.
    ///
    /// Must be unbounded.
    pub collapse_tier: TierId,

    /// The pool is spliced into a derived full ranking right after this tier.
    pub pool_splice_tier: TierId,

    /// Key under which the session blob is stored.
    pub storage_key: String,

    /// Category for entities that arrive without one.
    pub default_category: String,

    /// Export card title.
    pub title: String,

    /// Heading of the full-ranking export.
    pub ranking_heading: String,

    /// Subtitle of the full-ranking export card.
    pub ranking_subtitle: String,

    /// Footer line of the export card.
    pub footer: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            collapse_tier: TierId::Neutral,
            pool_splice_tier: TierId::Neutral,
            storage_key: DEFAULT_STORAGE_KEY.into(),
            default_category: DEFAULT_CATEGORY.into(),
            title: "My College Football Feeling (FBS)".into(),
            ranking_heading: "All Teams (Sicko Mode)".into(),
            ranking_subtitle: "From most favorite to least favorite".into(),
            footer: "cashlock-code.github.io/fbs-affection-ranking/".into(),
        }
    }
}

impl BoardConfig {
    /// Set the tier that receives every entity when full ranking is exited.
    pub fn with_collapse_tier(mut self, tier: TierId) -> Self {
        self.collapse_tier = tier;
        self
    }

    /// Set the tier after which the pool is spliced into a derived ranking.
    pub fn with_pool_splice_tier(mut self, tier: TierId) -> Self {
        self.pool_splice_tier = tier;
        self
    }

    /// Set the persistence key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the category for entities without one.
    pub fn with_default_category(mut self, category: impl Into<String>) -> Self {
        self.default_category = category.into();
        self
    }

    /// Set the export card title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the heading of the full-ranking export.
    pub fn with_ranking_heading(mut self, heading: impl Into<String>) -> Self {
        self.ranking_heading = heading.into();
        self
    }

    /// Set the subtitle of the full-ranking export card.
    pub fn with_ranking_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.ranking_subtitle = subtitle.into();
        self
    }

    /// Set the footer line of the export card.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }

    /// Validates the configuration and the tier table.
    pub fn validate(&self) -> Result<(), TierError> {
        validate_descriptors()?;
        if self.collapse_tier.descriptor().capacity != Capacity::Unbounded {
            return Err(TierError::Config(format!(
                "collapse tier {} must be unbounded",
                self.collapse_tier
            )));
        }
        if self.storage_key.trim().is_empty() {
            return Err(TierError::Config("storage_key must not be empty".into()));
        }
        if self.default_category.trim().is_empty() {
            return Err(TierError::Config("default_category must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.collapse_tier, TierId::Neutral);
        assert_eq!(config.pool_splice_tier, TierId::Neutral);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_single_collapse_tier() {
        let config = BoardConfig::default().with_collapse_tier(TierId::Favorite);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_blank_storage_key() {
        let config = BoardConfig::default().with_storage_key("  ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_blank_category() {
        let config = BoardConfig::default().with_default_category("");
        assert!(config.validate().is_err());
    }
}

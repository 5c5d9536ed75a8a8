//! Entity types.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Stable slug identifying an entity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Wraps a slug. No validation is performed; unknown ids are simply
    /// ignored by the engine.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for EntityId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One rankable item (a team).
///
/// Reads both its own field names and the `conference` / `logoUrl` keys of
/// the static team artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique slug.
    pub id: EntityId,
    /// Display name, also the alphabetical sort key.
    pub name: String,
    /// Grouping label (conference).
    #[serde(default, alias = "conference")]
    pub category: String,
    /// Logo or other image reference.
    #[serde(default, alias = "logoUrl", skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}

impl Entity {
    pub fn new(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            image_ref: None,
        }
    }

    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        let image_ref = image_ref.into();
        self.image_ref = if image_ref.is_empty() {
            None
        } else {
            Some(image_ref)
        };
        self
    }

    /// Image reference with an `http://` scheme upgraded to `https://`.
    ///
    /// Image export renders through a canvas that refuses mixed content.
    pub fn secure_image_url(&self) -> Option<String> {
        let url = self.image_ref.as_deref()?;
        match url.get(..7) {
            Some(scheme) if scheme.eq_ignore_ascii_case("http://") => {
                Some(format!("https://{}", &url[7..]))
            }
            _ => Some(url.to_owned()),
        }
    }
}

/// Filter applied to the pool view (search box + category picker).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolFilter {
    /// Category label, or `None` / the `ALL` wildcard for every category.
    pub category: Option<String>,
    /// Case-insensitive substring of the display name. Blank matches all.
    pub query: String,
}

impl PoolFilter {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }
}

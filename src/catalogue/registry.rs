//! The read-only entity catalogue.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::debug;

use super::types::{Entity, EntityId, PoolFilter};
use crate::error::{Result, TierError};

/// Synthetic category label meaning "every category".
pub const ALL_CATEGORIES: &str = "ALL";

/// Category given to entities that arrive without one.
pub const DEFAULT_CATEGORY: &str = "Independent";

/// Immutable, ordered set of entities.
///
/// Catalogue order is the load order; it breaks ties between entities whose
/// names compare equal.
///
/// # Examples
///
/// ```
/// use u_tierlist::catalogue::{Catalogue, Entity};
///
/// let catalogue = Catalogue::new(vec![
///     Entity::new("b", "beta", "East"),
///     Entity::new("a", "Alpha", "West"),
/// ])
/// .unwrap();
///
/// assert_eq!(catalogue.lookup("a").map(|e| e.name.as_str()), Some("Alpha"));
/// assert_eq!(catalogue.categories(), vec!["ALL", "East", "West"]);
/// ```
#[derive(Debug, Clone)]
pub struct Catalogue {
    entities: Vec<Entity>,
    index: HashMap<EntityId, usize>,
    sort_keys: Vec<String>,
}

impl Catalogue {
    /// Builds a catalogue, filling blank categories with [`DEFAULT_CATEGORY`].
    pub fn new(entities: Vec<Entity>) -> Result<Self> {
        Self::with_default_category(entities, DEFAULT_CATEGORY)
    }

    /// Builds a catalogue with a custom fallback category.
    ///
    /// Fails on blank ids or names and on duplicate ids.
    pub fn with_default_category(mut entities: Vec<Entity>, default_category: &str) -> Result<Self> {
        let mut index = HashMap::with_capacity(entities.len());
        for (i, entity) in entities.iter_mut().enumerate() {
            if entity.id.as_str().trim().is_empty() {
                return Err(TierError::InvalidEntity {
                    index: i,
                    reason: "blank id".into(),
                });
            }
            if entity.name.trim().is_empty() {
                return Err(TierError::InvalidEntity {
                    index: i,
                    reason: format!("blank name for {}", entity.id),
                });
            }
            if entity.category.trim().is_empty() {
                entity.category = default_category.to_owned();
            }
            if entity.image_ref.as_deref() == Some("") {
                entity.image_ref = None;
            }
            if index.insert(entity.id.clone(), i).is_some() {
                return Err(TierError::DuplicateEntity(entity.id.to_string()));
            }
        }

        let sort_keys = entities.iter().map(|e| e.name.to_lowercase()).collect();
        debug!(entities = entities.len(), "catalogue loaded");

        Ok(Self {
            entities,
            index,
            sort_keys,
        })
    }

    /// Parses the static team artifact (a JSON array of entities).
    pub fn from_json(text: &str) -> Result<Self> {
        let entities: Vec<Entity> = serde_json::from_str(text)?;
        Self::new(entities)
    }

    pub fn lookup(&self, id: &str) -> Option<&Entity> {
        self.index.get(id).map(|&i| &self.entities[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Position of the entity in load order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// All entities in load order.
    pub fn all(&self) -> &[Entity] {
        &self.entities
    }

    pub fn ids(&self) -> impl Iterator<Item = &EntityId> + '_ {
        self.entities.iter().map(|e| &e.id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Display name, or `""` for unknown ids.
    pub fn name_of(&self, id: &str) -> &str {
        self.lookup(id).map(|e| e.name.as_str()).unwrap_or("")
    }

    /// Distinct categories, sorted, preceded by [`ALL_CATEGORIES`].
    pub fn categories(&self) -> Vec<String> {
        let distinct: BTreeSet<&str> = self.entities.iter().map(|e| e.category.as_str()).collect();
        std::iter::once(ALL_CATEGORIES)
            .chain(distinct.into_iter().filter(|c| *c != ALL_CATEGORIES))
            .map(str::to_owned)
            .collect()
    }

    fn sort_key(&self, id: &str) -> &str {
        self.index
            .get(id)
            .map(|&i| self.sort_keys[i].as_str())
            .unwrap_or("")
    }

    /// Case-insensitive comparison of display names.
    ///
    /// Unknown ids compare as the empty string and therefore sort first.
    pub fn compare_by_name(&self, a: &str, b: &str) -> Ordering {
        self.sort_key(a).cmp(self.sort_key(b))
    }

    /// Full alphabetical ordering: name first, then catalogue position.
    fn compare_for_sort(&self, a: &str, b: &str) -> Ordering {
        self.compare_by_name(a, b).then_with(|| {
            let pa = self.position(a).unwrap_or(usize::MAX);
            let pb = self.position(b).unwrap_or(usize::MAX);
            pa.cmp(&pb)
        })
    }

    /// Sorts ids alphabetically in place (stable).
    pub fn sort_ids_by_name(&self, ids: &mut [EntityId]) {
        ids.sort_by(|a, b| self.compare_for_sort(a.as_str(), b.as_str()));
    }

    pub fn sorted_by_name(&self, ids: &[EntityId]) -> Vec<EntityId> {
        let mut out = ids.to_vec();
        self.sort_ids_by_name(&mut out);
        out
    }

    pub fn is_sorted_by_name(&self, ids: &[EntityId]) -> bool {
        ids.windows(2)
            .all(|w| self.compare_for_sort(w[0].as_str(), w[1].as_str()) != Ordering::Greater)
    }

    /// Every id in the catalogue that is not in `assigned`, alphabetically.
    pub fn complement(&self, assigned: &HashSet<&str>) -> Vec<EntityId> {
        let mut rest: Vec<EntityId> = self
            .ids()
            .filter(|id| !assigned.contains(id.as_str()))
            .cloned()
            .collect();
        self.sort_ids_by_name(&mut rest);
        rest
    }

    /// Applies the pool view filter and returns the survivors alphabetically.
    pub fn filter_pool(&self, ids: &[EntityId], filter: &PoolFilter) -> Vec<EntityId> {
        let category = filter
            .category
            .as_deref()
            .filter(|c| *c != ALL_CATEGORIES);
        let query = filter.query.trim().to_lowercase();

        let mut out: Vec<EntityId> = ids
            .iter()
            .filter(|id| {
                let Some(entity) = self.lookup(id.as_str()) else {
                    return false;
                };
                if let Some(category) = category {
                    if entity.category != category {
                        return false;
                    }
                }
                query.is_empty() || self.sort_key(id.as_str()).contains(&query)
            })
            .cloned()
            .collect();
        self.sort_ids_by_name(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalogue {
        Catalogue::new(vec![
            Entity::new("gamma", "Gamma", "West"),
            Entity::new("alpha", "alpha", "East"),
            Entity::new("beta", "Beta", ""),
            Entity::new("alpha-2", "Alpha", "East"),
        ])
        .unwrap()
    }

    fn ids(list: &[&str]) -> Vec<EntityId> {
        list.iter().map(|s| EntityId::from(*s)).collect()
    }

    #[test]
    fn test_lookup_and_len() {
        let c = sample();
        assert_eq!(c.len(), 4);
        assert!(c.contains("beta"));
        assert!(c.lookup("nope").is_none());
        assert_eq!(c.name_of("nope"), "");
        assert_eq!(c.position("beta"), Some(2));
    }

    #[test]
    fn test_blank_category_defaults() {
        let c = sample();
        assert_eq!(c.lookup("beta").unwrap().category, DEFAULT_CATEGORY);
    }

    #[test]
    fn test_categories_sorted_with_wildcard() {
        let c = sample();
        assert_eq!(c.categories(), vec!["ALL", "East", "Independent", "West"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = Catalogue::new(vec![
            Entity::new("a", "A", "X"),
            Entity::new("a", "Also A", "X"),
        ])
        .unwrap_err();
        assert!(matches!(err, TierError::DuplicateEntity(id) if id == "a"));
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = Catalogue::new(vec![Entity::new("a", "  ", "X")]).unwrap_err();
        assert!(matches!(err, TierError::InvalidEntity { index: 0, .. }));
    }

    #[test]
    fn test_compare_case_insensitive_unknown_first() {
        let c = sample();
        assert_eq!(c.compare_by_name("alpha", "beta"), Ordering::Less);
        assert_eq!(c.compare_by_name("alpha", "alpha-2"), Ordering::Equal);
        assert_eq!(c.compare_by_name("missing", "alpha"), Ordering::Less);
    }

    #[test]
    fn test_sort_ties_use_catalogue_order() {
        let c = sample();
        let mut list = ids(&["gamma", "alpha-2", "beta", "alpha"]);
        c.sort_ids_by_name(&mut list);
        assert_eq!(list, ids(&["alpha", "alpha-2", "beta", "gamma"]));
        assert!(c.is_sorted_by_name(&list));
    }

    #[test]
    fn test_complement() {
        let c = sample();
        let assigned: HashSet<&str> = ["beta", "alpha"].into_iter().collect();
        assert_eq!(c.complement(&assigned), ids(&["alpha-2", "gamma"]));
    }

    #[test]
    fn test_filter_pool() {
        let c = sample();
        let all = ids(&["gamma", "alpha", "beta", "alpha-2"]);

        let east = c.filter_pool(&all, &PoolFilter::default().with_category("East"));
        assert_eq!(east, ids(&["alpha", "alpha-2"]));

        let wildcard = c.filter_pool(&all, &PoolFilter::default().with_category("ALL"));
        assert_eq!(wildcard.len(), 4);

        let query = c.filter_pool(&all, &PoolFilter::default().with_query("  AM "));
        assert_eq!(query, ids(&["gamma"]));

        let independent = c.filter_pool(&all, &PoolFilter::default().with_category("Independent"));
        assert_eq!(independent, ids(&["beta"]));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id":"air-force","name":"Air Force","conference":"Mountain West","logoUrl":""},
            {"id":"akron","name":"Akron","conference":"Mid-American","logoUrl":"http://a/akron.png"}
        ]"#;
        let c = Catalogue::from_json(json).unwrap();
        assert_eq!(c.len(), 2);
        assert!(c.lookup("air-force").unwrap().image_ref.is_none());
        assert_eq!(c.lookup("akron").unwrap().category, "Mid-American");
    }
}

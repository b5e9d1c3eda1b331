use catalog_sdk::{CatalogItem, Directive, DirectiveFilters, Field};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{collections::BTreeSet, fmt};

/// The literal the catalog uses for an unrestricted city or tag.
pub const ALL: &str = "All";

/// A city or tag selection. `All` places no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Interpret a selection coming from a dropdown or a directive.
    /// Empty text and the literal `"All"` both mean unrestricted.
    pub fn parse(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() || value == ALL {
            Self::All
        } else {
            Self::Only(value)
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Only(value) => value,
        }
    }

    fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == value,
        }
    }

    fn from_field(field: &Field<String>) -> Self {
        match field {
            Field::Present(value) => Self::parse(value.as_str()),
            Field::Missing | Field::Null => Self::All,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        Self::parse(value)
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::parse)
    }
}

/// What the catalog view currently narrows the item list by.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub city: Selection,
    pub tag: Selection,
    /// Empty means no highlight restriction.
    pub highlighted_ids: BTreeSet<i64>,
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Whether the assistant singled out this item.
    pub fn is_highlighted(&self, id: i64) -> bool {
        self.highlighted_ids.contains(&id)
    }

    /// Manual city selection. Leaves tag and highlights as they are.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<Selection>) -> Self {
        self.city = city.into();
        self
    }

    /// Manual tag selection. Leaves city and highlights as they are.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<Selection>) -> Self {
        self.tag = tag.into();
        self
    }

    fn accepts(&self, item: &CatalogItem) -> bool {
        self.city.matches(&item.city)
            && (self.tag.is_all() || item.tags.iter().any(|tag| self.tag.matches(tag)))
            && (self.highlighted_ids.is_empty() || self.highlighted_ids.contains(&item.id))
    }
}

/// Compute the filter state that follows an assistant reply.
///
/// Every field of the result is decided by the directive alone: whatever the
/// directive leaves out is reset, so narrowing from an earlier turn never
/// silently persists. `None` (no directive at all) yields the default state.
/// No field of the previous state carries over.
pub fn reconcile(_previous: &FilterState, directive: Option<&Directive>) -> FilterState {
    let Some(directive) = directive else {
        return FilterState::default();
    };

    let (city, tag) = match &directive.filters {
        Field::Present(DirectiveFilters { city, tag }) => {
            (Selection::from_field(city), Selection::from_field(tag))
        }
        Field::Missing | Field::Null => (Selection::All, Selection::All),
    };

    let highlighted_ids = match &directive.highlight_ids {
        Field::Present(ids) => ids.iter().copied().collect(),
        Field::Missing | Field::Null => BTreeSet::new(),
    };

    FilterState {
        city,
        tag,
        highlighted_ids,
    }
}

/// The items the given state lets through, in their original order.
pub fn visible_items<'a>(items: &'a [CatalogItem], state: &FilterState) -> Vec<&'a CatalogItem> {
    items.iter().filter(|item| state.accepts(item)).collect()
}

/// Choices offered for manual city and tag selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// `"All"` followed by each distinct city in first-seen order.
    pub cities: Vec<String>,
    /// `"All"` followed by each distinct tag in first-seen order.
    pub tags: Vec<String>,
}

impl FilterOptions {
    pub fn from_items(items: &[CatalogItem]) -> Self {
        let mut cities = vec![ALL.to_string()];
        let mut tags = vec![ALL.to_string()];

        for item in items {
            push_unique(&mut cities, &item.city);
            for tag in &item.tags {
                push_unique(&mut tags, tag);
            }
        }

        Self { cities, tags }
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|existing| existing == value) {
        values.push(value.to_string());
    }
}

//! Catalog Data

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::domain::{
    catalog::records::{ProductUuid, VariantUuid},
    pagination::Pagination,
};

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub brand: String,
    pub category: String,
}

/// New Variant Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewVariant {
    pub uuid: VariantUuid,
    pub product_uuid: ProductUuid,
    pub sku: String,
    pub color: String,
    pub storage: String,
    pub price: u64,
    pub stock: u64,
}

/// Variant Update Data
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantUpdate {
    pub price: Option<u64>,
    pub stock: Option<u64>,
    pub is_active: Option<bool>,
}

/// Ordering of the product listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProductSort {
    #[default]
    Newest,
    NameAsc,
    NameDesc,
}

impl ProductSort {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::NameAsc => "name_asc",
            Self::NameDesc => "name_desc",
        }
    }
}

impl fmt::Display for ProductSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("invalid product sort {0:?}")]
pub struct InvalidProductSort(pub String);

impl FromStr for ProductSort {
    type Err = InvalidProductSort;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        [Self::Newest, Self::NameAsc, Self::NameDesc]
            .into_iter()
            .find(|sort| sort.as_str() == value)
            .ok_or_else(|| InvalidProductSort(value.to_string()))
    }
}

/// Filter for the public product listing.
///
/// `search` matches a case-insensitive substring of the name; `brand` and
/// `category` must match exactly. Blank values are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductsQuery {
    pub pagination: Pagination,
    pub search: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub sort: ProductSort,
}

impl ProductsQuery {
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        non_blank(self.search.as_deref())
    }

    #[must_use]
    pub fn brand(&self) -> Option<&str> {
        non_blank(self.brand.as_deref())
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        non_blank(self.category.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_sort_parses_known_values_only() {
        assert_eq!("name_asc".parse::<ProductSort>().ok(), Some(ProductSort::NameAsc));
        assert_eq!("newest".parse::<ProductSort>().ok(), Some(ProductSort::Newest));
        assert!("price".parse::<ProductSort>().is_err());
    }

    #[test]
    fn blank_filters_are_ignored() {
        let query = ProductsQuery {
            search: Some("  ".to_string()),
            brand: Some(" Apple ".to_string()),
            ..ProductsQuery::default()
        };

        assert_eq!(query.search(), None);
        assert_eq!(query.brand(), Some("Apple"));
        assert_eq!(query.category(), None);
    }
}

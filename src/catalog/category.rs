//! Category grouping derived from agent ids.
//!
//! An id such as `installer.docs.changelog` belongs to the category named by
//! its second dot-separated segment (`docs`). Ids whose segment is not a
//! known category land in the synthetic `other` bucket.

use super::scanner::CatalogEntry;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub key: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
}

/// Known categories, in display order.
pub const CATEGORIES: &[Category] = &[
    Category {
        key: "docs",
        display_name: "Documentation",
        description: "Documentation writing and maintenance agents",
    },
    Category {
        key: "backend",
        display_name: "Backend",
        description: "Server-side, API and database agents",
    },
    Category {
        key: "frontend",
        display_name: "Frontend",
        description: "UI, styling and client-side agents",
    },
    Category {
        key: "devops",
        display_name: "DevOps",
        description: "CI/CD, infrastructure and deployment agents",
    },
    Category {
        key: "testing",
        display_name: "Testing",
        description: "Test authoring and quality assurance agents",
    },
    Category {
        key: "security",
        display_name: "Security",
        description: "Security review and hardening agents",
    },
    Category {
        key: "data",
        display_name: "Data",
        description: "Data engineering and analytics agents",
    },
    Category {
        key: "mobile",
        display_name: "Mobile",
        description: "Mobile application agents",
    },
];

/// Fallback bucket for ids without a known category segment.
pub const OTHER: Category = Category {
    key: "other",
    display_name: "Other",
    description: "Uncategorized agents",
};

impl Category {
    /// Look up a category by key, including `other`.
    pub fn find(key: &str) -> Option<Category> {
        if key == OTHER.key {
            return Some(OTHER);
        }
        CATEGORIES.iter().find(|c| c.key == key).copied()
    }
}

/// Second dot-separated segment of an id, if any.
pub fn domain_token(id: &str) -> Option<&str> {
    id.split('.').nth(1)
}

/// Category an id belongs to.
pub fn category_of(id: &str) -> Category {
    domain_token(id)
        .and_then(|token| CATEGORIES.iter().find(|c| c.key == token))
        .copied()
        .unwrap_or(OTHER)
}

/// Entries assigned to one category.
#[derive(Debug, Clone)]
pub struct CategoryGroup {
    pub category: Category,
    pub entries: Vec<CatalogEntry>,
}

/// Non-empty category buckets: known categories in [`CATEGORIES`] order,
/// then `other`.
#[derive(Debug, Clone, Default)]
pub struct CategoryGroups {
    groups: Vec<CategoryGroup>,
}

impl CategoryGroups {
    pub fn get(&self, key: &str) -> Option<&CategoryGroup> {
        self.groups.iter().find(|g| g.category.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryGroup> {
        self.groups.iter()
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.groups.iter().map(|g| g.category.key).collect()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Group entries by category, omitting categories with no entries.
///
/// Entries keep their input order within a bucket.
pub fn group_by_category(entries: &[CatalogEntry]) -> CategoryGroups {
    let mut buckets: Vec<Vec<CatalogEntry>> = vec![Vec::new(); CATEGORIES.len()];
    let mut other: Option<Vec<CatalogEntry>> = None;

    for entry in entries {
        let position = domain_token(&entry.id)
            .and_then(|token| CATEGORIES.iter().position(|c| c.key == token));

        match position {
            Some(i) => buckets[i].push(entry.clone()),
            None => other.get_or_insert_with(Vec::new).push(entry.clone()),
        }
    }

    let mut groups: Vec<CategoryGroup> = CATEGORIES
        .iter()
        .zip(buckets)
        .filter(|(_, entries)| !entries.is_empty())
        .map(|(category, entries)| CategoryGroup {
            category: *category,
            entries,
        })
        .collect();

    if let Some(entries) = other {
        groups.push(CategoryGroup {
            category: OTHER,
            entries,
        });
    }

    CategoryGroups { groups }
}

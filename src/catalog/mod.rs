//! Agent catalog: discovery, field extraction, categories and reconciliation.
//!
//! The catalog is a directory of markdown agent definitions. A project's
//! installed agents live in a second directory with the same layout.
//!
//! # Architecture
//!
//! - **scanner**: lists both directories into [`CatalogEntry`] values
//! - **extract**: pulls `name`, `description` and `instruction` fields
//! - **category**: groups entries by the namespace segment of their id
//! - **reconcile**: installed / not-installed / orphaned set arithmetic
//!
//! # Example
//!
//! ```text
//! ---
//! name: changelog-writer
//! description: Keeps CHANGELOG.md up to date. Examples: ...
//! instruction: Use after merging user-facing changes.
//! ---
//! ```
//!
//! Saved as `installer.docs.changelog.md`, this entry has id
//! `installer.docs.changelog` and belongs to the `docs` category.

pub mod category;
pub mod extract;
pub mod reconcile;
pub mod scanner;

pub use category::{group_by_category, Category, CategoryGroup, CategoryGroups};
pub use reconcile::Reconciliation;
pub use scanner::{list_collection, list_installed, Catalog, CatalogEntry};

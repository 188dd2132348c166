//! Service-package catalog - static definitions and the derived detail view.

mod catalog_model;
mod catalog_service;

pub use catalog_model::{
    base_price_usd, catalog, find_by_key, PackageDefinition, PackageKey,
};
pub use catalog_service::{CatalogService, PackageDetail};

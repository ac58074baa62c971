//! # Preset Catalog
//!
//! Presets are canned inputs users start from. The core only ever reads them,
//! through the [`PresetCatalog`] trait:
//!
//! - [`BuiltinCatalog`]: the presets compiled into the binary.
//! - [`FileCatalog`]: presets loaded from a JSON file (an array of
//!   `{ "id", "label", "data" }` objects).
//!
//! The API facade is generic over the catalog, the same way tests can hand it
//! a small catalog of their own.

use crate::model::Preset;

pub mod builtin;
pub mod file;

pub use builtin::BuiltinCatalog;
pub use file::FileCatalog;

pub trait PresetCatalog {
    fn presets(&self) -> &[Preset];

    fn find(&self, id: &str) -> Option<&Preset> {
        self.presets().iter().find(|preset| preset.id == id)
    }

    fn ids(&self) -> Vec<&str> {
        self.presets().iter().map(|p| p.id.as_str()).collect()
    }
}

impl<T: PresetCatalog + ?Sized> PresetCatalog for Box<T> {
    fn presets(&self) -> &[Preset] {
        (**self).presets()
    }
}

impl PresetCatalog for Vec<Preset> {
    fn presets(&self) -> &[Preset] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_catalog_lookup() {
        let catalog: Box<dyn PresetCatalog> = Box::new(BuiltinCatalog::new().presets().to_vec());
        assert_eq!(catalog.ids(), vec!["support-triage", "sales-rfp"]);
        assert!(catalog.find("sales-rfp").is_some());
        assert!(Vec::<Preset>::new().find("sales-rfp").is_none());
    }
}

//! Table of contents - the ordered asset manifest of one job

use std::collections::HashMap;

use crate::domain::entities::Asset;
use crate::error::{BindataError, BindataResult};

/// Assets in discovery order.
///
/// Order is whatever the directory listings produced; it is not sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toc {
    assets: Vec<Asset>,
}

impl Toc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, asset: Asset) {
        self.assets.push(asset);
    }

    /// Append another manifest, preserving both orders.
    pub fn append(&mut self, other: Toc) {
        self.assets.extend(other.assets);
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Asset> {
        self.assets.iter()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Reject two assets sharing one name.
    pub fn ensure_unique_names(&self) -> BindataResult<()> {
        let mut seen: HashMap<&str, &Asset> = HashMap::with_capacity(self.assets.len());
        for asset in &self.assets {
            if let Some(first) = seen.insert(asset.name(), asset) {
                return Err(BindataError::DuplicateAsset {
                    name: asset.name().to_string(),
                    first: first.path().to_path_buf(),
                    second: asset.path().to_path_buf(),
                });
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Toc {
    type Item = &'a Asset;
    type IntoIter = std::slice::Iter<'a, Asset>;

    fn into_iter(self) -> Self::IntoIter {
        self.assets.iter()
    }
}

impl FromIterator<Asset> for Toc {
    fn from_iter<T: IntoIterator<Item = Asset>>(iter: T) -> Self {
        Self {
            assets: iter.into_iter().collect(),
        }
    }
}

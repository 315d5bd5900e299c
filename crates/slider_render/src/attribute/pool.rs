/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Ordered collection of attribute providers.

use super::{merge_attributes, AttributeProvider};
use slider_core::{AttributeMap, Banner, Slider};

/// Folds the outputs of registered providers into one attribute map per element.
///
/// Providers are sorted once, at construction, by ascending sort order. The
/// sort is stable: providers sharing a sort order run in registration order.
#[derive(Default)]
pub struct AttributeProviderPool {
    providers: Vec<Box<dyn AttributeProvider>>,
}

impl AttributeProviderPool {
    pub fn new(mut providers: Vec<Box<dyn AttributeProvider>>) -> Self {
        // `sort_by_key` is stable, which equal sort orders rely on.
        providers.sort_by_key(|p| p.sort_order());
        Self { providers }
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Merged container attributes from all providers.
    pub fn container_attributes(&self, slider: &Slider, banners: &[Banner]) -> AttributeMap {
        self.fold(|p| p.container_attributes(slider, banners))
    }

    /// Merged slide attributes from all providers.
    pub fn slide_attributes(&self, slider: &Slider, banner: &Banner) -> AttributeMap {
        self.fold(|p| p.slide_attributes(slider, banner))
    }

    /// Merged link attributes from all providers.
    pub fn link_attributes(&self, slider: &Slider, banner: &Banner) -> AttributeMap {
        self.fold(|p| p.link_attributes(slider, banner))
    }

    fn fold<F>(&self, contribute: F) -> AttributeMap
    where
        F: Fn(&dyn AttributeProvider) -> AttributeMap,
    {
        self.providers
            .iter()
            .fold(AttributeMap::new(), |acc, provider| {
                merge_attributes(&acc, &contribute(provider.as_ref()))
            })
    }
}

impl FromIterator<Box<dyn AttributeProvider>> for AttributeProviderPool {
    fn from_iter<I: IntoIterator<Item = Box<dyn AttributeProvider>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

use std::sync::Arc;

use indexmap::IndexMap;

use crate::{
    data::identifier::Identifier,
    model::{ModelResolver, UnbakedModel},
};

use super::{Registry, RegistryId};

/// Unbaked models known to the host, looked up by identifier.
#[derive(Default)]
pub struct ModelRegistry {
    map: IndexMap<Identifier, Arc<dyn UnbakedModel>, ahash::RandomState>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a model, replacing any model previously registered under the same label.
    pub fn register(&mut self, label: Identifier, model: Arc<dyn UnbakedModel>) {
        self.map.insert(label, model);
    }

    pub fn labels(&self) -> impl Iterator<Item = &Identifier> {
        self.map.keys()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl ModelResolver for ModelRegistry {
    fn resolve(&self, location: &Identifier) -> Option<Arc<dyn UnbakedModel>> {
        self.map.get(location).cloned()
    }
}

impl Registry for ModelRegistry {
    type Item<'a> = &'a dyn UnbakedModel;

    fn get_by_label(&self, label: &Identifier) -> Option<Self::Item<'_>> {
        self.map.get(label).map(|model| &**model)
    }

    fn get_by_id(&self, id: RegistryId<Self>) -> Option<Self::Item<'_>> {
        self.map.get_index(id.index()).map(|(_, model)| &**model)
    }

    fn get_id(&self, label: &Identifier) -> Option<RegistryId<Self>> {
        self.map.get_index_of(label).map(|i| RegistryId::new(i as _))
    }
}

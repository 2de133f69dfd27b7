use indexmap::IndexMap;

use crate::{data::identifier::Identifier, model::geometry::BakedDecoratedModel};

use super::{Registry, RegistryId};

/// The output of a bake pass, ready for the renderer.
#[derive(Default, Clone)]
pub struct DecoratedModelRegistry {
    map: IndexMap<Identifier, BakedDecoratedModel, ahash::RandomState>,
}

impl DecoratedModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: Identifier, model: BakedDecoratedModel) {
        self.map.insert(label, model);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Identifier, &BakedDecoratedModel)> {
        self.map.iter()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Registry for DecoratedModelRegistry {
    type Item<'a> = &'a BakedDecoratedModel;

    fn get_by_label(&self, label: &Identifier) -> Option<Self::Item<'_>> {
        self.map.get(label)
    }

    fn get_by_id(&self, id: RegistryId<Self>) -> Option<Self::Item<'_>> {
        self.map.get_index(id.index()).map(|(_, model)| model)
    }

    fn get_id(&self, label: &Identifier) -> Option<RegistryId<Self>> {
        self.map.get_index_of(label).map(|i| RegistryId::new(i as _))
    }
}

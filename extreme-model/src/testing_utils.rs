use std::sync::Arc;

use bevy::math::Rect;
use parking_lot::Mutex;

use crate::{
    data::{
        identifier::{ident, Identifier},
        registries::model::ModelRegistry,
    },
    defaults,
    model::{
        BakedModel, BlockModel, Material, MaterialSet, ModelResolver, ModelTransform, Sprite,
        SpriteResolver, UnbakedModel,
    },
};

#[derive(Debug, PartialEq)]
pub struct MockBaked {
    pub location: Identifier,
    pub sprites: Vec<Sprite>,
    pub transform: ModelTransform,
}

impl BakedModel for MockBaked {}

/// A block-style model using a fixed set of block atlas textures.
#[derive(Debug)]
pub struct MockBlockModel {
    pub textures: Vec<Identifier>,
}

impl MockBlockModel {
    pub fn new(textures: &[&str]) -> Self {
        Self {
            textures: textures.iter().map(|&tex| ident(tex)).collect(),
        }
    }

    fn materials(&self) -> impl Iterator<Item = Material> + '_ {
        self.textures
            .iter()
            .map(|tex| Material::new(defaults::block_atlas(), tex.clone()))
    }
}

impl UnbakedModel for MockBlockModel {
    fn texture_dependencies(&self, _models: &dyn ModelResolver) -> MaterialSet {
        self.materials().collect()
    }

    fn bake(
        &self,
        sprites: &dyn SpriteResolver,
        transform: &ModelTransform,
        location: &Identifier,
    ) -> Arc<dyn BakedModel> {
        Arc::new(MockBaked {
            location: location.clone(),
            sprites: self.materials().map(|mat| sprites.sprite(&mat)).collect(),
            transform: *transform,
        })
    }

    fn as_block_model(&self) -> Option<&dyn BlockModel> {
        Some(self)
    }
}

impl BlockModel for MockBlockModel {}

/// A model that isn't block-style and can't be decorated.
#[derive(Debug)]
pub struct MockEntityModel;

impl UnbakedModel for MockEntityModel {
    fn texture_dependencies(&self, _models: &dyn ModelResolver) -> MaterialSet {
        MaterialSet::default()
    }

    fn bake(
        &self,
        _sprites: &dyn SpriteResolver,
        _transform: &ModelTransform,
        location: &Identifier,
    ) -> Arc<dyn BakedModel> {
        Arc::new(MockBaked {
            location: location.clone(),
            sprites: Vec::new(),
            transform: ModelTransform::default(),
        })
    }
}

/// Wraps a [`ModelRegistry`] and records every lookup.
pub struct RecordingResolver {
    pub registry: ModelRegistry,
    pub queries: Mutex<Vec<Identifier>>,
}

impl RecordingResolver {
    pub fn new(registry: ModelRegistry) -> Self {
        Self {
            registry,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<Identifier> {
        self.queries.lock().clone()
    }
}

impl ModelResolver for RecordingResolver {
    fn resolve(&self, location: &Identifier) -> Option<Arc<dyn UnbakedModel>> {
        self.queries.lock().push(location.clone());
        self.registry.resolve(location)
    }
}

/// Gives every material the same unit region.
pub struct MockSprites;

impl SpriteResolver for MockSprites {
    fn sprite(&self, material: &Material) -> Sprite {
        Sprite {
            atlas: material.atlas.clone(),
            name: material.texture.clone(),
            uv: Rect::new(0.0, 0.0, 1.0, 1.0),
        }
    }
}

/// A model registry with the placeholder and a couple of base models in it.
pub fn mock_models() -> ModelRegistry {
    let mut registry = ModelRegistry::new();

    registry.register(
        defaults::missing_model(),
        Arc::new(MockBlockModel::new(&["minecraft:missingno"])),
    );
    registry.register(
        ident("mod:base_block"),
        Arc::new(MockBlockModel::new(&["mod:block/side", "mod:block/top"])),
    );
    registry.register(ident("mod:entity"), Arc::new(MockEntityModel));

    registry
}

use std::{fmt::Debug, sync::Arc};

use bevy::math::{Quat, Rect};
use downcast_rs::{impl_downcast, DowncastSync};
use indexmap::IndexSet;

use crate::data::identifier::Identifier;

pub mod bakery;
pub mod descriptor;
pub mod error;
pub mod geometry;

pub type MaterialSet = IndexSet<Material, ahash::RandomState>;

/// A texture reference bound to the sprite atlas it lives in.
#[derive(Clone, Debug, Hash, PartialEq, Eq, dm::Constructor, dm::Display)]
#[display("{texture} @ {atlas}")]
pub struct Material {
    pub atlas: Identifier,
    pub texture: Identifier,
}

/// A resolved region of a sprite atlas.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub atlas: Identifier,
    pub name: Identifier,
    pub uv: Rect,
}

/// Orientation applied when baking a model's geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ModelTransform {
    pub rotation: Quat,
    pub uv_lock: bool,
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self {
            rotation: Quat::IDENTITY,
            uv_lock: false,
        }
    }
}

/// Renderer-ready model data. Opaque to this crate.
pub trait BakedModel: DowncastSync + Debug {}

impl_downcast!(sync BakedModel);

/// A model that has been loaded but not baked yet.
pub trait UnbakedModel: Send + Sync + Debug {
    /// Every material this model needs stitched into an atlas before it can be baked.
    fn texture_dependencies(&self, models: &dyn ModelResolver) -> MaterialSet;

    fn bake(
        &self,
        sprites: &dyn SpriteResolver,
        transform: &ModelTransform,
        location: &Identifier,
    ) -> Arc<dyn BakedModel>;

    /// Models that can be wrapped by decorations return themselves here.
    fn as_block_model(&self) -> Option<&dyn BlockModel> {
        None
    }
}

/// Marker for block-style models, whose texture and geometry queries can be delegated to.
pub trait BlockModel: UnbakedModel {}

pub trait ModelResolver: Send + Sync {
    fn resolve(&self, location: &Identifier) -> Option<Arc<dyn UnbakedModel>>;
}

pub trait SpriteResolver: Send + Sync {
    fn sprite(&self, material: &Material) -> Sprite;
}

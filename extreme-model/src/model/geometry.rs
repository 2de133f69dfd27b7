use std::sync::Arc;

use bevy::log::warn;

use super::{
    descriptor::{Argb, ModelDecorationSpec},
    error::{BakeError, ResolveError},
    BakedModel, MaterialSet, ModelResolver, ModelTransform, Sprite, SpriteResolver, UnbakedModel,
};
use crate::{
    data::identifier::Identifier,
    defaults::{BACKGROUND_COLOUR, BACKGROUND_SIZE},
};

/// A decorated model that hasn't been baked yet.
///
/// Loading happens in two steps. [`DecoratedModelGeometry::resolve_dependencies`] looks up the parent
/// model and reports which textures have to be in the atlas, and only after that succeeds can
/// [`DecoratedModelGeometry::bake`] produce a [`BakedDecoratedModel`].
#[derive(Debug)]
pub struct DecoratedModelGeometry {
    spec: ModelDecorationSpec,
    placeholder: Identifier,
    // the parent actually used, which is the placeholder if the requested one didn't resolve
    parent: Identifier,
    inner: Option<Arc<dyn UnbakedModel>>,
}

impl DecoratedModelGeometry {
    pub fn new(spec: ModelDecorationSpec, placeholder: Identifier) -> Self {
        Self {
            parent: spec.parent.clone(),
            spec,
            placeholder,
            inner: None,
        }
    }

    pub fn spec(&self) -> &ModelDecorationSpec {
        &self.spec
    }

    /// The parent this model wraps. Only differs from the descriptor's after a placeholder substitution.
    pub fn parent(&self) -> &Identifier {
        &self.parent
    }

    pub fn is_resolved(&self) -> bool {
        self.inner.is_some()
    }

    pub fn resolve_dependencies(
        &mut self,
        models: &dyn ModelResolver,
    ) -> Result<MaterialSet, ResolveError> {
        // start over, a previous call may have substituted the placeholder or failed halfway
        self.parent = self.spec.parent.clone();
        self.inner = None;

        let inner = match models.resolve(&self.spec.parent) {
            Some(model) => model,
            None => {
                warn!(
                    "Parent model {} not found, falling back to {}",
                    self.spec.parent, self.placeholder
                );

                self.parent = self.placeholder.clone();
                models
                    .resolve(&self.placeholder)
                    .ok_or_else(|| ResolveError::MissingPlaceholder(self.placeholder.clone()))?
            }
        };

        let Some(block_model) = inner.as_block_model() else {
            return Err(ResolveError::IncompatibleBaseModel(self.parent.clone()));
        };

        let mut materials = block_model.texture_dependencies(models);
        if let Some(texture) = self.spec.background.as_ref().and_then(|bg| bg.texture.as_ref()) {
            materials.insert(texture.clone());
        }

        self.inner = Some(inner);
        Ok(materials)
    }

    pub fn bake(
        &self,
        sprites: &dyn SpriteResolver,
        transform: &ModelTransform,
    ) -> Result<BakedDecoratedModel, BakeError> {
        let Some(block_model) = self.inner.as_deref().and_then(|model| model.as_block_model()) else {
            return Err(BakeError::DependenciesNotResolved(self.spec.parent.clone()));
        };

        let background = self.spec.background.as_ref();
        let background_sprite = background
            .and_then(|bg| bg.texture.as_ref())
            .map(|texture| sprites.sprite(texture));

        let inner = block_model.bake(sprites, transform, &self.parent);

        Ok(BakedDecoratedModel {
            inner,
            pulse: self.spec.pulse,
            background_sprite,
            background_colour: background.map_or(BACKGROUND_COLOUR, |bg| bg.colour),
            background_size: background.map_or(BACKGROUND_SIZE, |bg| bg.size),
            light_beam_colour: self.spec.light_beam.colour,
            light_beam_count: self.spec.light_beam.count,
        })
    }
}

/// A parent model's baked geometry plus everything needed to draw the decorations over it.
#[derive(Clone, Debug)]
pub struct BakedDecoratedModel {
    pub inner: Arc<dyn BakedModel>,
    pub pulse: bool,
    pub background_sprite: Option<Sprite>,
    pub background_colour: Argb,
    pub background_size: i32,
    pub light_beam_colour: Argb,
    pub light_beam_count: u32,
}

impl BakedDecoratedModel {
    pub fn has_background(&self) -> bool {
        self.background_sprite.is_some()
    }

    pub fn has_light_beams(&self) -> bool {
        self.light_beam_count > 0
    }
}

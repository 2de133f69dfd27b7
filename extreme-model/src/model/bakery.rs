use bevy::log::{error, info};

use crate::{
    data::{
        descriptor_loader::DescriptorFileLoader, identifier::Identifier,
        registries::baked::DecoratedModelRegistry,
    },
    settings::ExtremeModelSettings,
};

use super::{
    descriptor::{DecoratedModelLoader, ModelDecorationSpec},
    error::DecoratedModelError,
    geometry::{BakedDecoratedModel, DecoratedModelGeometry},
    MaterialSet, ModelResolver, ModelTransform, SpriteResolver,
};

/// Result of one full bake pass.
#[derive(Default)]
pub struct BakeReport {
    pub registry: DecoratedModelRegistry,
    /// Every material the successfully resolved models need in their atlases.
    pub materials: MaterialSet,
    pub failures: Vec<(Identifier, DecoratedModelError)>,
}

impl BakeReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs descriptors through parsing, dependency resolution and baking.
///
/// Failures are scoped to the model they happen in, the rest of the pass carries on.
#[derive(Clone, Debug)]
pub struct ModelBakery {
    loader: DecoratedModelLoader,
    placeholder: Identifier,
    transform: ModelTransform,
}

impl ModelBakery {
    pub fn new(settings: &ExtremeModelSettings) -> Self {
        Self {
            loader: DecoratedModelLoader::new(settings.block_atlas.clone()),
            placeholder: settings.placeholder_model.clone(),
            transform: ModelTransform::default(),
        }
    }

    pub fn with_transform(mut self, transform: ModelTransform) -> Self {
        self.transform = transform;
        self
    }

    pub fn loader(&self) -> &DecoratedModelLoader {
        &self.loader
    }

    pub fn bake_spec(
        &self,
        spec: ModelDecorationSpec,
        models: &dyn ModelResolver,
        sprites: &dyn SpriteResolver,
    ) -> Result<BakedDecoratedModel, DecoratedModelError> {
        let mut geometry = DecoratedModelGeometry::new(spec, self.placeholder.clone());
        geometry.resolve_dependencies(models)?;
        Ok(geometry.bake(sprites, &self.transform)?)
    }

    /// Bakes every descriptor in `files` from scratch.
    pub fn bake_all(
        &self,
        files: &DescriptorFileLoader,
        models: &dyn ModelResolver,
        sprites: &dyn SpriteResolver,
    ) -> BakeReport {
        self.loader.on_reload();

        let mut report = BakeReport::default();
        let mut resolved = Vec::with_capacity(files.len());

        for label in files.labels() {
            let result = files
                .parse(label, &self.loader)
                .map_err(DecoratedModelError::from)
                .and_then(|spec| {
                    let mut geometry = DecoratedModelGeometry::new(spec, self.placeholder.clone());
                    let materials = geometry.resolve_dependencies(models)?;
                    Ok((geometry, materials))
                });

            match result {
                Ok((geometry, materials)) => {
                    report.materials.extend(materials);
                    resolved.push((label.clone(), geometry));
                }
                Err(error) => {
                    error!("Couldn't load decorated model '{label}': {error}");
                    report.failures.push((label.clone(), error));
                }
            }
        }

        for (label, geometry) in resolved {
            match geometry.bake(sprites, &self.transform) {
                Ok(baked) => report.registry.insert(label, baked),
                Err(error) => {
                    error!("Couldn't bake decorated model '{label}': {error}");
                    report.failures.push((label, error.into()));
                }
            }
        }

        info!(
            "Baked {} decorated models, {} failed",
            report.registry.len(),
            report.failures.len()
        );

        report
    }
}

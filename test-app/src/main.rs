extern crate extreme_model as em;

use std::{path::PathBuf, sync::Arc};

use bevy::{log::LogPlugin, prelude::*};
use em::data::{
    identifier::Identifier,
    registries::{
        baked::DecoratedModelRegistry, model::ModelRegistry, sprite::SpriteAtlasLoader, Registries,
    },
};
use em::model::{
    BakedModel, BlockModel, Material, MaterialSet, ModelResolver, ModelTransform, Sprite,
    SpriteResolver, UnbakedModel,
};
use em::settings::ExtremeModelSettings;
use em::ExtremeModelPlugin;

/// A plain cube with one texture on every face.
#[derive(Debug)]
struct CubeModel {
    texture: Material,
}

#[derive(Debug)]
#[allow(dead_code)]
struct BakedCube {
    location: Identifier,
    sprite: Sprite,
    transform: ModelTransform,
}

impl BakedModel for BakedCube {}

impl UnbakedModel for CubeModel {
    fn texture_dependencies(&self, _models: &dyn ModelResolver) -> MaterialSet {
        MaterialSet::from_iter([self.texture.clone()])
    }

    fn bake(
        &self,
        sprites: &dyn SpriteResolver,
        transform: &ModelTransform,
        location: &Identifier,
    ) -> Arc<dyn BakedModel> {
        Arc::new(BakedCube {
            location: location.clone(),
            sprite: sprites.sprite(&self.texture),
            transform: *transform,
        })
    }

    fn as_block_model(&self) -> Option<&dyn BlockModel> {
        Some(self)
    }
}

impl BlockModel for CubeModel {}

/// Entity models can't be decorated.
#[derive(Debug)]
struct EntityModel;

impl UnbakedModel for EntityModel {
    fn texture_dependencies(&self, _models: &dyn ModelResolver) -> MaterialSet {
        MaterialSet::default()
    }

    fn bake(
        &self,
        sprites: &dyn SpriteResolver,
        transform: &ModelTransform,
        location: &Identifier,
    ) -> Arc<dyn BakedModel> {
        Arc::new(BakedCube {
            location: location.clone(),
            sprite: sprites.sprite(&Material::new(
                em::defaults::block_atlas(),
                em::defaults::missing_texture(),
            )),
            transform: *transform,
        })
    }
}

fn id(string: &str) -> Identifier {
    match Identifier::try_from(string) {
        Ok(id) => id,
        Err(error) => panic!("Demo identifier '{string}' is invalid: {error}"),
    }
}

fn setup_registries(settings: &ExtremeModelSettings) -> Registries {
    let registries = Registries::new();

    let cube = |texture: &str| -> Arc<dyn UnbakedModel> {
        Arc::new(CubeModel {
            texture: Material::new(settings.block_atlas.clone(), id(texture)),
        })
    };

    let mut models = ModelRegistry::new();
    models.register(settings.placeholder_model.clone(), cube("minecraft:missingno"));
    models.register(
        id("avaritia:item/infinity_catalyst_base"),
        cube("avaritia:item/infinity_catalyst"),
    );
    models.register(
        id("avaritia:item/crystal_matrix_base"),
        cube("avaritia:item/crystal_matrix"),
    );
    models.register(id("avaritia:entity/skull"), Arc::new(EntityModel));
    registries.add_registry(models);

    let mut atlas = SpriteAtlasLoader::new(settings.block_atlas.clone());
    let sprites = [
        ("avaritia:item/infinity_catalyst", Rect::new(0.0, 0.0, 0.25, 0.25)),
        ("avaritia:item/crystal_matrix", Rect::new(0.25, 0.0, 0.5, 0.25)),
        ("avaritia:misc/halo", Rect::new(0.5, 0.0, 1.0, 0.5)),
    ];
    for (label, region) in sprites {
        if let Err(error) = atlas.register(id(label), region) {
            error!("Couldn't add demo sprite: {error}");
        }
    }

    match atlas.build_registry(Rect::new(0.0, 0.75, 0.25, 1.0)) {
        Ok(atlas) => registries.add_registry(atlas),
        Err(error) => error!("Couldn't build demo atlas: {error}"),
    }

    registries
}

fn report(registries: Res<Registries>) {
    let Some(baked) = registries.get_registry::<DecoratedModelRegistry>() else {
        warn!("No decorated models were baked");
        return;
    };

    for (label, model) in baked.iter() {
        info!(
            "{label}: pulse={} background={:?} colour={} size={} beams={}x{}",
            model.pulse,
            model.background_sprite.as_ref().map(|sprite| sprite.name.to_string()),
            model.background_colour,
            model.background_size,
            model.light_beam_count,
            model.light_beam_colour,
        );
    }
}

fn main() {
    let assets = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets");
    let settings_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| assets.join("extreme_models.toml"));

    let mut settings = match ExtremeModelSettings::load(&settings_path) {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("Couldn't load settings from '{}': {error}", settings_path.display());
            ExtremeModelSettings::default()
        }
    };

    // folders in the settings file are relative to the file itself
    let base = settings_path.parent().map(PathBuf::from).unwrap_or(assets);
    settings.descriptor_folders = settings
        .descriptor_folders
        .iter()
        .map(|folder| base.join(folder))
        .collect();

    let registries = setup_registries(&settings);

    App::new()
        .add_plugins(LogPlugin::default())
        .insert_resource(settings)
        .insert_resource(registries)
        .add_plugins(ExtremeModelPlugin)
        .add_systems(PostStartup, report)
        .update();
}

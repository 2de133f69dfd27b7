use bevy::prelude::*;

use crate::{model::bakery::ModelBakery, settings::ExtremeModelSettings};

use super::{
    descriptor_loader::DescriptorFileLoader,
    registries::{model::ModelRegistry, sprite::SpriteAtlas, Registries},
};

pub(crate) fn bake_extreme_models(world: &mut World) {
    reload_extreme_models(world);
}

/// Rebuilds the decorated model registry from scratch.
///
/// Reads descriptors from the folders in [`ExtremeModelSettings`], resolves them against the
/// [`ModelRegistry`] and [`SpriteAtlas`] in [`Registries`], and replaces the baked registry.
pub fn reload_extreme_models(world: &mut World) {
    let settings = world
        .get_resource::<ExtremeModelSettings>()
        .cloned()
        .unwrap_or_default();
    let registries = Registries::clone(&world.get_resource_or_insert_with(Registries::new));

    let mut files = DescriptorFileLoader::new(settings.descriptor_namespace.as_str());
    for folder in settings.descriptor_folders.iter() {
        for err in files.load_folder(folder, settings.recurse_depth()) {
            let path = folder.as_path().to_string_lossy();
            error!("Error while loading descriptor folder at path '{path}': '{err}'");
        }
    }

    info!("Loaded {} decorated model descriptors", files.len());

    let report = {
        let Some(models) = registries.get_registry::<ModelRegistry>() else {
            error!("No model registry to resolve decorated model parents from");
            return;
        };
        let Some(sprites) = registries.get_registry::<SpriteAtlas>() else {
            error!("No sprite atlas to resolve decorated model textures from");
            return;
        };

        ModelBakery::new(&settings).bake_all(&files, &*models, &*sprites)
    };

    registries.add_registry(report.registry);
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use super::*;
    use crate::{
        data::{
            identifier::ident,
            registries::{baked::DecoratedModelRegistry, sprite::SpriteAtlasLoader, Registry},
        },
        defaults,
        testing_utils::mock_models,
        ExtremeModelPlugin,
    };

    fn descriptor_folder() -> PathBuf {
        let path = std::env::temp_dir().join(format!("extreme-model-plugin-{}", std::process::id()));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).unwrap();

        fs::write(
            path.join("gem.json"),
            r#"{"parent":"mod:base_block","background":{"texture":"mod:bg"}}"#,
        )
        .unwrap();
        fs::write(path.join("broken.json"), r#"{"background":{}}"#).unwrap();

        path
    }

    fn registries() -> Registries {
        let registries = Registries::new();
        registries.add_registry(mock_models());

        let mut atlas = SpriteAtlasLoader::new(defaults::block_atlas());
        atlas
            .register(ident("mod:bg"), Rect::new(0.0, 0.0, 0.5, 0.5))
            .unwrap();
        registries.add_registry(atlas.build_registry(Rect::new(0.5, 0.5, 1.0, 1.0)).unwrap());

        registries
    }

    #[test]
    fn plugin_bakes_on_startup_and_reloads() {
        let folder = descriptor_folder();
        let registries = registries();

        let mut app = App::new();
        app.insert_resource(registries.clone());
        app.insert_resource(ExtremeModelSettings {
            descriptor_namespace: "mod".to_string(),
            descriptor_folders: vec![folder.clone()],
            ..default()
        });
        app.add_plugins(ExtremeModelPlugin);
        app.update();

        {
            let baked = registries.get_registry::<DecoratedModelRegistry>().unwrap();
            assert_eq!(1, baked.len());

            let gem = baked.get_by_label(&ident("mod:gem")).unwrap();
            assert_eq!(
                Some(Rect::new(0.0, 0.0, 0.5, 0.5)),
                gem.background_sprite.as_ref().map(|sprite| sprite.uv)
            );
        }

        fs::write(folder.join("broken.json"), r#"{"parent":"mod:base_block"}"#).unwrap();
        reload_extreme_models(app.world_mut());

        {
            let baked = registries.get_registry::<DecoratedModelRegistry>().unwrap();
            assert_eq!(2, baked.len());
            assert!(baked.get_by_label(&ident("mod:broken")).is_some());
        }

        fs::remove_dir_all(&folder).unwrap();
    }

    #[test]
    fn missing_registries_bake_nothing() {
        let mut world = World::new();
        reload_extreme_models(&mut world);

        let registries = world.resource::<Registries>();
        assert!(!registries.has_registry::<DecoratedModelRegistry>());
    }
}

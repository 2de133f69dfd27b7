extern crate derive_more as dm;
extern crate hashbrown as hb;
extern crate thiserror as te;

use bevy::prelude::*;

pub mod data;
pub mod defaults;
pub mod model;
pub mod settings;

#[cfg(test)]
pub(crate) mod testing_utils;

use crate::{
    data::{registries::Registries, systems::bake_extreme_models},
    settings::ExtremeModelSettings,
};

pub use crate::data::systems::reload_extreme_models;

/// Bakes every decorated model descriptor at startup.
///
/// The host is expected to put a [`ModelRegistry`](data::registries::model::ModelRegistry) and a
/// [`SpriteAtlas`](data::registries::sprite::SpriteAtlas) into the [`Registries`] resource before
/// the startup schedule runs. The baked models end up in the same resource.
pub struct ExtremeModelPlugin;

impl Plugin for ExtremeModelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ExtremeModelSettings>();
        app.init_resource::<Registries>();

        app.add_systems(Startup, bake_extreme_models);
    }
}

use bevy::{
    log::{info, warn},
    math::Rect,
};
use indexmap::IndexMap;

use crate::{
    data::identifier::Identifier,
    defaults,
    model::{Material, Sprite, SpriteResolver},
};

use super::{error::SpriteAtlasError, Registry, RegistryId};

fn validate_region(label: &Identifier, region: Rect) -> Result<(), SpriteAtlasError> {
    if region.width() > 0.0 && region.height() > 0.0 {
        Ok(())
    } else {
        Err(SpriteAtlasError::InvalidRegion(label.clone(), region))
    }
}

/// Collects the already stitched regions of one atlas.
pub struct SpriteAtlasLoader {
    atlas: Identifier,
    regions: IndexMap<Identifier, Rect, ahash::RandomState>,
}

impl SpriteAtlasLoader {
    pub fn new(atlas: Identifier) -> Self {
        Self {
            atlas,
            regions: IndexMap::with_hasher(ahash::RandomState::new()),
        }
    }

    pub fn register(&mut self, label: Identifier, region: Rect) -> Result<(), SpriteAtlasError> {
        validate_region(&label, region)?;

        if self.regions.contains_key(&label) {
            return Err(SpriteAtlasError::DuplicateSprite(label));
        }

        self.regions.insert(label, region);
        Ok(())
    }

    /// `missing` is the region of the texture drawn for anything not in the atlas.
    pub fn build_registry(self, missing: Rect) -> Result<SpriteAtlas, SpriteAtlasError> {
        let missing_label = defaults::missing_texture();
        validate_region(&missing_label, missing)?;

        for (label, region) in self.regions.iter() {
            info!(
                "Sprite atlas {} contains texture '{label}' at {}",
                self.atlas, region.min
            );
        }

        Ok(SpriteAtlas {
            atlas: self.atlas,
            missing_label,
            missing,
            regions: self.regions,
        })
    }
}

pub struct SpriteAtlas {
    atlas: Identifier,
    missing_label: Identifier,
    missing: Rect,
    regions: IndexMap<Identifier, Rect, ahash::RandomState>,
}

impl SpriteAtlas {
    pub fn atlas(&self) -> &Identifier {
        &self.atlas
    }

    pub fn missing_sprite(&self) -> Sprite {
        Sprite {
            atlas: self.atlas.clone(),
            name: self.missing_label.clone(),
            uv: self.missing,
        }
    }
}

impl SpriteResolver for SpriteAtlas {
    fn sprite(&self, material: &Material) -> Sprite {
        if material.atlas != self.atlas {
            warn!(
                "Material {material} requested from atlas {}, using the missing texture",
                self.atlas
            );
            return self.missing_sprite();
        }

        match self.regions.get(&material.texture) {
            Some(&uv) => Sprite {
                atlas: self.atlas.clone(),
                name: material.texture.clone(),
                uv,
            },
            None => {
                warn!("Texture {} not found in atlas {}", material.texture, self.atlas);
                self.missing_sprite()
            }
        }
    }
}

impl Registry for SpriteAtlas {
    type Item<'a> = Rect;

    fn get_by_label(&self, label: &Identifier) -> Option<Self::Item<'_>> {
        self.regions.get(label).copied()
    }

    fn get_by_id(&self, id: RegistryId<Self>) -> Option<Self::Item<'_>> {
        self.regions.get_index(id.index()).map(|(_, &rect)| rect)
    }

    fn get_id(&self, label: &Identifier) -> Option<RegistryId<Self>> {
        self.regions.get_index_of(label).map(|i| RegistryId::new(i as _))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::data::identifier::ident;

    fn atlas() -> SpriteAtlas {
        let mut loader = SpriteAtlasLoader::new(defaults::block_atlas());
        loader
            .register(ident("mod:bg"), Rect::new(0.0, 0.0, 0.5, 0.5))
            .unwrap();
        loader
            .register(ident("mod:block/side"), Rect::new(0.5, 0.0, 1.0, 0.5))
            .unwrap();

        loader.build_registry(Rect::new(0.0, 0.5, 0.5, 1.0)).unwrap()
    }

    #[test]
    fn sprite_lookup() {
        let atlas = atlas();

        let sprite = atlas.sprite(&Material::new(defaults::block_atlas(), ident("mod:bg")));
        assert_eq!(
            Sprite {
                atlas: defaults::block_atlas(),
                name: ident("mod:bg"),
                uv: Rect::new(0.0, 0.0, 0.5, 0.5),
            },
            sprite
        );

        assert_eq!(Some(1), atlas.get_id(&ident("mod:block/side")).map(RegistryId::index));
        assert_eq!(
            Some(Rect::new(0.5, 0.0, 1.0, 0.5)),
            atlas.get_by_id(RegistryId::new(1))
        );
    }

    #[test]
    fn missing_sprites() {
        let atlas = atlas();

        let unknown = atlas.sprite(&Material::new(defaults::block_atlas(), ident("mod:nope")));
        assert_eq!(atlas.missing_sprite(), unknown);
        assert_eq!(defaults::missing_texture(), unknown.name);

        let foreign = atlas.sprite(&Material::new(ident("mod:atlas/gui"), ident("mod:bg")));
        assert_eq!(atlas.missing_sprite(), foreign);
    }

    #[test]
    fn invalid_registrations() {
        let mut loader = SpriteAtlasLoader::new(defaults::block_atlas());
        loader
            .register(ident("mod:bg"), Rect::new(0.0, 0.0, 0.5, 0.5))
            .unwrap();

        assert_eq!(
            Err(SpriteAtlasError::DuplicateSprite(ident("mod:bg"))),
            loader.register(ident("mod:bg"), Rect::new(0.5, 0.5, 1.0, 1.0))
        );

        let flat = Rect {
            min: bevy::math::Vec2::new(0.2, 0.2),
            max: bevy::math::Vec2::new(0.2, 0.4),
        };
        assert_eq!(
            Err(SpriteAtlasError::InvalidRegion(ident("mod:flat"), flat)),
            loader.register(ident("mod:flat"), flat)
        );
        assert!(loader.build_registry(flat).is_err());
    }
}

use bevy::math::Rect;

use crate::data::identifier::Identifier;

#[derive(Debug, Clone, PartialEq, te::Error)]
pub enum SpriteAtlasError {
    #[error("Sprite {0} was registered twice")]
    DuplicateSprite(Identifier),
    #[error("Sprite {0} has an empty or inverted region {1:?}")]
    InvalidRegion(Identifier, Rect),
}

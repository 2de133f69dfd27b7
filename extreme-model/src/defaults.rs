use crate::{data::identifier::Identifier, model::descriptor::Argb};

pub const BACKGROUND_COLOUR: Argb = Argb::new(0xFF000000);
pub const BACKGROUND_SIZE: i32 = 8;
pub const LIGHT_BEAM_COLOUR: Argb = Argb::new(0xE7FFFFFF);
pub const LIGHT_BEAM_COUNT: u32 = 0;

/// The built-in model substituted for parents that don't resolve.
pub fn missing_model() -> Identifier {
    Identifier::new_unchecked("minecraft", "builtin/missing")
}

/// The atlas every descriptor texture is looked up in.
pub fn block_atlas() -> Identifier {
    Identifier::new_unchecked("minecraft", "textures/atlas/blocks.png")
}

pub fn missing_texture() -> Identifier {
    Identifier::new_unchecked("minecraft", "missingno")
}

use bevy::log::{debug, warn};

use crate::{
    data::identifier::Identifier,
    defaults::{self, BACKGROUND_COLOUR, BACKGROUND_SIZE, LIGHT_BEAM_COLOUR, LIGHT_BEAM_COUNT},
};

use super::{error::MalformedDescriptorError, Material};

/// A packed 32-bit ARGB colour.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, dm::Display)]
#[display("#{_0:08X}")]
pub struct Argb(u32);

impl Argb {
    pub const fn new(packed: u32) -> Self {
        Self(packed)
    }

    pub const fn from_i32(packed: i32) -> Self {
        Self(packed as u32)
    }

    /// Descriptors may write colours as signed or unsigned 32-bit integers.
    pub fn from_descriptor_int(value: i64) -> Option<Self> {
        match i32::try_from(value) {
            Ok(signed) => Some(Self::from_i32(signed)),
            Err(_) => u32::try_from(value).ok().map(Self),
        }
    }

    pub const fn packed(self) -> u32 {
        self.0
    }

    pub const fn as_i32(self) -> i32 {
        self.0 as i32
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub fn to_rgba_f32(self) -> [f32; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()].map(|c| c as f32 / 255.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackgroundSpec {
    /// `None` when the descriptor has a background without a texture. No sprite is resolved then.
    pub texture: Option<Material>,
    pub colour: Argb,
    pub size: i32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LightBeamSpec {
    pub colour: Argb,
    pub count: u32,
}

impl Default for LightBeamSpec {
    fn default() -> Self {
        Self {
            colour: LIGHT_BEAM_COLOUR,
            count: LIGHT_BEAM_COUNT,
        }
    }
}

/// Everything a decorated model descriptor says, validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelDecorationSpec {
    pub parent: Identifier,
    pub pulse: bool,
    pub background: Option<BackgroundSpec>,
    pub light_beam: LightBeamSpec,
}

#[derive(serde::Deserialize)]
struct UnparsedDescriptor {
    parent: Option<String>,
    #[serde(default)]
    pulse: bool,
    background: Option<UnparsedBackground>,
    light_beam: Option<UnparsedLightBeam>,
}

#[derive(serde::Deserialize)]
struct UnparsedBackground {
    texture: Option<String>,
    colour: Option<i64>,
    size: Option<i32>,
}

#[derive(serde::Deserialize)]
struct UnparsedLightBeam {
    colour: Option<i64>,
    count: Option<i32>,
}

fn parse_colour(value: Option<i64>, default: Argb) -> Result<Argb, MalformedDescriptorError> {
    match value {
        Some(value) => {
            Argb::from_descriptor_int(value).ok_or(MalformedDescriptorError::ColourOutOfRange(value))
        }
        None => Ok(default),
    }
}

/// Reads decorated model descriptors. Textures are always bound to one atlas.
#[derive(Clone, Debug)]
pub struct DecoratedModelLoader {
    atlas: Identifier,
}

impl Default for DecoratedModelLoader {
    fn default() -> Self {
        Self::new(defaults::block_atlas())
    }
}

impl DecoratedModelLoader {
    pub fn new(atlas: Identifier) -> Self {
        Self { atlas }
    }

    pub fn atlas(&self) -> &Identifier {
        &self.atlas
    }

    /// Called when the host reloads its resources. The loader caches nothing.
    pub fn on_reload(&self) {
        debug!("Decorated model loader reloaded, nothing to invalidate");
    }

    pub fn read_json(&self, json: &str) -> Result<ModelDecorationSpec, MalformedDescriptorError> {
        let unparsed = serde_json::from_str::<UnparsedDescriptor>(json)?;
        self.finish(unparsed)
    }

    pub fn read_json_slice(&self, buffer: &[u8]) -> Result<ModelDecorationSpec, MalformedDescriptorError> {
        let unparsed = serde_json::from_slice::<UnparsedDescriptor>(buffer)?;
        self.finish(unparsed)
    }

    pub fn read_hjson(&self, buffer: &[u8]) -> Result<ModelDecorationSpec, MalformedDescriptorError> {
        let unparsed = deser_hjson::from_slice::<UnparsedDescriptor>(buffer)?;
        self.finish(unparsed)
    }

    pub fn read_value(
        &self,
        value: &serde_json::Value,
    ) -> Result<ModelDecorationSpec, MalformedDescriptorError> {
        let unparsed = <UnparsedDescriptor as serde::Deserialize>::deserialize(value)?;
        self.finish(unparsed)
    }

    fn texture_material(&self, texture: String) -> Result<Material, MalformedDescriptorError> {
        match Identifier::try_from(texture.as_str()) {
            Ok(id) => Ok(Material::new(self.atlas.clone(), id)),
            Err(error) => Err(MalformedDescriptorError::InvalidTexture {
                value: texture,
                error,
            }),
        }
    }

    fn finish(
        &self,
        unparsed: UnparsedDescriptor,
    ) -> Result<ModelDecorationSpec, MalformedDescriptorError> {
        let parent = unparsed
            .parent
            .ok_or(MalformedDescriptorError::MissingParent)?;
        let parent = match Identifier::try_from(parent.as_str()) {
            Ok(id) => id,
            Err(error) => {
                return Err(MalformedDescriptorError::InvalidParent {
                    value: parent,
                    error,
                })
            }
        };

        let background = match unparsed.background {
            Some(background) => Some(BackgroundSpec {
                texture: background
                    .texture
                    .map(|tex| self.texture_material(tex))
                    .transpose()?,
                colour: parse_colour(background.colour, BACKGROUND_COLOUR)?,
                size: background.size.unwrap_or(BACKGROUND_SIZE),
            }),
            None => None,
        };

        let light_beam = match unparsed.light_beam {
            Some(beam) => {
                let count = beam.count.map_or(LIGHT_BEAM_COUNT, |count| {
                    u32::try_from(count).unwrap_or_else(|_| {
                        warn!("Negative light beam count {count} for {parent}, rendering no beams");
                        0
                    })
                });

                LightBeamSpec {
                    colour: parse_colour(beam.colour, LIGHT_BEAM_COLOUR)?,
                    count,
                }
            }
            None => LightBeamSpec::default(),
        };

        Ok(ModelDecorationSpec {
            parent,
            pulse: unparsed.pulse,
            background,
            light_beam,
        })
    }
}

use std::{
    ffi::OsStr,
    fs::File,
    io::Read,
    path::{Component, Path},
};

use itertools::Itertools;

use crate::model::descriptor::{DecoratedModelLoader, ModelDecorationSpec};

use super::{error::DescriptorFileLoaderError, identifier::Identifier};

pub const MAX_RECURSION_DEPTH: usize = 8;
pub static JSON_FILE_EXTENSION: &str = "json";
pub static HJSON_FILE_EXTENSION: &str = "hjson";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DescriptorFormat {
    Json,
    Hjson,
}

impl DescriptorFormat {
    pub fn from_extension(extension: &OsStr) -> Option<Self> {
        match extension.to_str()? {
            ext if ext == JSON_FILE_EXTENSION => Some(Self::Json),
            ext if ext == HJSON_FILE_EXTENSION => Some(Self::Hjson),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
struct RawDescriptor {
    format: DescriptorFormat,
    buffer: Vec<u8>,
}

/// Gathers descriptor files from disk. Labels are `namespace:relative/path` with the extension stripped.
#[derive(Clone)]
pub struct DescriptorFileLoader {
    namespace: String,
    raw_descriptors: hb::HashMap<Identifier, RawDescriptor>,
}

impl DescriptorFileLoader {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            raw_descriptors: hb::HashMap::new(),
        }
    }

    /// Every loaded label, sorted so passes over them are deterministic.
    pub fn labels(&self) -> impl Iterator<Item = &Identifier> {
        self.raw_descriptors.keys().sorted()
    }

    pub fn len(&self) -> usize {
        self.raw_descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw_descriptors.is_empty()
    }

    fn label_for(&self, relative: &Path) -> Option<Identifier> {
        let relative = relative.with_extension("");

        let path = relative
            .components()
            .map(|component| match component {
                Component::Normal(part) => part.to_str(),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()?
            .join("/");

        Identifier::new(self.namespace.as_str(), path).ok()
    }

    /// Loads every descriptor under `path`. A bad entry doesn't stop the walk, its error is
    /// returned alongside the others and the rest of the folder still loads.
    pub fn load_folder(
        &mut self,
        path: impl AsRef<Path>,
        recurse_depth: usize,
    ) -> Vec<DescriptorFileLoaderError> {
        let path = path.as_ref();
        let mut failures = Vec::new();

        // depth 1 is the folder's direct children
        for entry in walkdir::WalkDir::new(path).max_depth(recurse_depth.max(1)) {
            if let Err(error) = self.load_entry(path, entry) {
                failures.push(error);
            }
        }

        failures
    }

    fn load_entry(
        &mut self,
        root: &Path,
        entry: walkdir::Result<walkdir::DirEntry>,
    ) -> Result<(), DescriptorFileLoaderError> {
        let entry = entry?;

        let Some(format) = entry.path().extension().and_then(DescriptorFormat::from_extension)
        else {
            return Ok(());
        };

        if !entry.file_type().is_file() {
            return Ok(());
        }

        let label = entry
            .path()
            .strip_prefix(root)
            .ok()
            .and_then(|relative| self.label_for(relative))
            .ok_or_else(|| DescriptorFileLoaderError::InvalidFileName(entry.path().to_path_buf()))?;

        self.load_file(entry.path(), label, format)
    }

    pub fn load_file(
        &mut self,
        path: impl AsRef<Path>,
        label: Identifier,
        format: DescriptorFormat,
    ) -> Result<(), DescriptorFileLoaderError> {
        let mut file = File::open(path.as_ref())?;

        let mut buffer = Vec::<u8>::with_capacity(file.metadata()?.len() as _);
        file.read_to_end(&mut buffer)?;

        self.add_raw_buffer(label, format, buffer);

        Ok(())
    }

    pub fn add_raw_buffer(&mut self, label: Identifier, format: DescriptorFormat, buffer: Vec<u8>) {
        self.raw_descriptors
            .insert(label, RawDescriptor { format, buffer });
    }

    pub fn parse(
        &self,
        label: &Identifier,
        loader: &DecoratedModelLoader,
    ) -> Result<ModelDecorationSpec, DescriptorFileLoaderError> {
        let raw = self
            .raw_descriptors
            .get(label)
            .ok_or_else(|| DescriptorFileLoaderError::DescriptorNotFound(label.clone()))?;

        let result = match raw.format {
            DescriptorFormat::Json => loader.read_json_slice(&raw.buffer),
            DescriptorFormat::Hjson => loader.read_hjson(&raw.buffer),
        };

        result.map_err(|error| DescriptorFileLoaderError::ParseError(label.clone(), error))
    }
}

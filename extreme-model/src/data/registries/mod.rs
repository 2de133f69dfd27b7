use std::{
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    marker::PhantomData,
    sync::Arc,
};

use anymap::any::Any;
use bevy::ecs::system::Resource;
use parking_lot::{MappedRwLockReadGuard, RwLock, RwLockReadGuard};

use super::identifier::Identifier;

pub mod baked;
pub mod error;
pub mod model;
pub mod sprite;

pub trait Registry: Send + Sync + Sized {
    type Item<'a>
    where
        Self: 'a;

    fn get_by_label(&self, label: &Identifier) -> Option<Self::Item<'_>>;
    fn get_by_id(&self, id: RegistryId<Self>) -> Option<Self::Item<'_>>;
    fn get_id(&self, label: &Identifier) -> Option<RegistryId<Self>>;
}

/// Index of an entry in a registry of type `R`.
pub struct RegistryId<R> {
    inner: u32,
    _registry: PhantomData<fn() -> R>,
}

impl<R> RegistryId<R> {
    pub const fn new(inner: u32) -> Self {
        Self {
            inner,
            _registry: PhantomData,
        }
    }

    #[inline]
    pub fn inner(self) -> u32 {
        self.inner
    }

    #[inline]
    pub fn index(self) -> usize {
        self.inner as usize
    }
}

// Manual impls so we don't require any bounds on `R`.
impl<R> Copy for RegistryId<R> {}

impl<R> Clone for RegistryId<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> PartialEq for RegistryId<R> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<R> Eq for RegistryId<R> {}

impl<R> Hash for RegistryId<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state)
    }
}

impl<R> Debug for RegistryId<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("RegistryId").field(&self.inner).finish()
    }
}

impl<R> Display for RegistryId<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[registry_id:{:08}]", self.inner)
    }
}

type RegistriesAnymap = anymap::Map<dyn Any + Send + Sync>;

/// Every registry the model pipeline reads from or writes to, keyed by type.
#[derive(Clone, Resource)]
pub struct Registries {
    registries: Arc<RwLock<RegistriesAnymap>>,
}

pub type RegistryRef<'a, R> = MappedRwLockReadGuard<'a, R>;

impl Default for Registries {
    fn default() -> Self {
        Self::new()
    }
}

impl Registries {
    pub fn new() -> Self {
        Self {
            registries: Arc::new(RwLock::new(anymap::Map::new())),
        }
    }

    /// Adds the registry, replacing any existing registry of the same type.
    pub fn add_registry<R: Registry + 'static>(&self, registry: R) {
        self.registries.write().insert(registry);
    }

    /// Several of these may be held at once, so this takes a recursive read lock that a queued
    /// writer can't block.
    pub fn get_registry<R: Registry + 'static>(&self) -> Option<RegistryRef<'_, R>> {
        let guard = self.registries.read_recursive();
        RwLockReadGuard::try_map(guard, |g| g.get::<R>()).ok()
    }

    pub fn has_registry<R: Registry + 'static>(&self) -> bool {
        self.registries.read().contains::<R>()
    }
}

#[cfg(test)]
mod tests {
    use super::{baked::DecoratedModelRegistry, model::ModelRegistry, sprite::SpriteAtlas, *};
    use crate::{data::identifier::ident, testing_utils::mock_models};

    #[test]
    fn registries_by_type() {
        let registries = Registries::new();
        assert!(registries.get_registry::<ModelRegistry>().is_none());

        registries.add_registry(mock_models());
        assert!(registries.has_registry::<ModelRegistry>());
        assert!(!registries.has_registry::<SpriteAtlas>());

        let models = registries.get_registry::<ModelRegistry>().unwrap();
        assert!(models.get_by_label(&ident("mod:base_block")).is_some());
    }

    #[test]
    fn nested_reads_with_a_waiting_writer() {
        let registries = Registries::new();
        registries.add_registry(mock_models());
        registries.add_registry(DecoratedModelRegistry::default());

        let models = registries.get_registry::<ModelRegistry>().unwrap();

        let writer = {
            let registries = registries.clone();
            std::thread::spawn(move || registries.add_registry(DecoratedModelRegistry::default()))
        };
        std::thread::sleep(std::time::Duration::from_millis(50));

        let baked = registries.get_registry::<DecoratedModelRegistry>().unwrap();
        assert!(models.get_by_label(&ident("mod:base_block")).is_some());
        assert!(baked.is_empty());

        drop((models, baked));
        writer.join().unwrap();
    }

    #[test]
    fn registry_ids() {
        let id = RegistryId::<ModelRegistry>::new(3);
        assert_eq!(id, id.clone());
        assert_eq!(3, id.index());
        assert_eq!("[registry_id:00000003]", id.to_string());
    }
}

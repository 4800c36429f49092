//! ECS integration: loader resources and commands that load and unload objects.

use std::path::PathBuf;

use bevy::app::{App, Plugin};
use bevy::ecs::resource::Resource;
use bevy::ecs::system::Command as BevyCommand;
use bevy::ecs::world::{Mut, World};

use crate::alloc::{self, ImageAllocator, StringAllocator};
use crate::config::LoaderConfig;
use crate::context::ObjectLookup;
use crate::factory::{self, Factory};
use crate::object::{LoadError, Object};
use crate::repository::Repository;

#[cfg(test)]
mod tests;

pub struct Plug;

impl Plugin for Plug {
    fn build(&self, app: &mut App) {
        app.init_resource::<LoaderConfig>();
        app.init_resource::<ImageAllocator>();
        app.init_resource::<StringAllocator>();
        app.init_resource::<LoadedObjects>();
    }
}

/// Ready objects, in load order.
#[derive(Resource, Default)]
pub struct LoadedObjects {
    objects: Vec<Object>,
}

impl LoadedObjects {
    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<&Object> {
        self.objects.iter().find(|object| object.identifier() == identifier)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Object> { self.objects.iter() }

    #[must_use]
    pub fn len(&self) -> usize { self.objects.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.objects.is_empty() }

    fn take(&mut self, identifier: &str) -> Option<Object> {
        let index = self.objects.iter().position(|object| object.identifier() == identifier)?;
        Some(self.objects.remove(index))
    }
}

/// Scans the configured directories into a [`Repository`] resource,
/// which later loads consult for fix-ups that depend on installed objects.
pub struct ScanCommand;

impl BevyCommand for ScanCommand {
    fn apply(self, world: &mut World) {
        let config = world.get_resource::<LoaderConfig>().cloned().unwrap_or_default();
        let repo = Repository::load_or_construct(&config);
        bevy::log::info!("{} objects available", repo.len());
        world.insert_resource(repo);
    }
}

/// Loads the object file at `path` and makes it ready.
pub struct Command {
    pub path:     PathBuf,
    pub on_error: Box<dyn FnOnce(&mut World, Error) + Send>,
}

impl BevyCommand for Command {
    fn apply(self, world: &mut World) {
        if let Err(err) = do_load(world, self.path) {
            (self.on_error)(world, err);
        }
    }
}

fn do_load(world: &mut World, path: PathBuf) -> Result<(), Error> {
    let config = world.get_resource::<LoaderConfig>().ok_or(Error::NotInitialized)?.clone();

    let mut object = {
        let lookup = world.get_resource::<Repository>().map(|repo| repo as &dyn ObjectLookup);
        Factory::new(&config)
            .with_lookup(lookup)
            .try_create_object_from_file(&path, config.load_images)?
            .ok_or(Error::UnknownType(path))?
    };

    let loaded = world.get_resource::<LoadedObjects>().ok_or(Error::NotInitialized)?;
    if loaded.get(object.identifier()).is_some() {
        return Err(Error::AlreadyLoaded(object.identifier().to_string()));
    }

    with_allocators(world, |images, strings| object.load(images, strings, &config.language))??;
    bevy::log::debug!("Loaded object {}", object.descriptor());

    world.resource_mut::<LoadedObjects>().objects.push(object);
    Ok(())
}

/// Unloads a ready object, releasing its global ids.
pub struct UnloadCommand {
    pub identifier: String,
    pub on_error:   Box<dyn FnOnce(&mut World, Error) + Send>,
}

impl BevyCommand for UnloadCommand {
    fn apply(self, world: &mut World) {
        if let Err(err) = do_unload(world, self.identifier) {
            (self.on_error)(world, err);
        }
    }
}

fn do_unload(world: &mut World, identifier: String) -> Result<(), Error> {
    let object = world
        .get_resource_mut::<LoadedObjects>()
        .ok_or(Error::NotInitialized)?
        .take(&identifier)
        .ok_or(Error::NotLoaded(identifier))?;
    with_allocators(world, |images, strings| object.unload(images, strings))??;
    Ok(())
}

fn with_allocators<R>(
    world: &mut World,
    f: impl FnOnce(&mut ImageAllocator, &mut StringAllocator) -> R,
) -> Result<R, Error> {
    world
        .try_resource_scope(|world, mut images: Mut<ImageAllocator>| {
            let mut strings = world.get_resource_mut::<StringAllocator>()?;
            Some(f(&mut *images, &mut *strings))
        })
        .flatten()
        .ok_or(Error::NotInitialized)
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Object loader resources are not initialized")]
    NotInitialized,
    #[error("{0}")]
    Factory(#[from] factory::Error),
    #[error("{} is not an object of a known type", .0.display())]
    UnknownType(PathBuf),
    #[error("Object {0} is already loaded")]
    AlreadyLoaded(String),
    #[error("Object {0} is not loaded")]
    NotLoaded(String),
    #[error("{0}")]
    Load(#[from] LoadError),
    #[error("{0}")]
    Alloc(#[from] alloc::Error),
}

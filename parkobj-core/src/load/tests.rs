use std::fs;
use std::path::{Path, PathBuf};

use bevy::app::App;
use bevy::ecs::resource::Resource;
use bevy::ecs::system::Command as BevyCommand;
use bevy::ecs::world::World;
use byteorder::{LittleEndian, WriteBytesExt};
use store::{ObjectType, SourceGame};

use super::{Command, Error, LoadedObjects, Plug, ScanCommand, UnloadCommand};
use crate::alloc::{ImageAllocator, StringAllocator};
use crate::chunk::Encoding;
use crate::config::LoaderConfig;
use crate::descriptor::LegacyEntry;
use crate::factory;
use crate::fixture;
use crate::object::ObjectState;
use crate::repository::Repository;
use crate::strings::StringRole;

#[derive(Resource, Default)]
struct Errors(Vec<Error>);

fn app() -> App {
    let mut app = App::new();
    app.add_plugins(Plug);
    app.init_resource::<Errors>();
    app
}

fn record_error() -> Box<dyn FnOnce(&mut World, Error) + Send> {
    Box::new(|world, err| world.resource_mut::<Errors>().0.push(err))
}

fn write_water(dir: &Path, name: &str) -> PathBuf {
    let mut record = vec![0; 14];
    record.write_u16::<LittleEndian>(0).unwrap();
    fixture::strings(&mut record, &[(0, "Cyan"), (2, "Cyan FR")]);
    fixture::images(&mut record, 2);
    let entry = LegacyEntry::new(ObjectType::Water, SourceGame::Rct2, name, 0);
    let path = dir.join(format!("{name}.DAT"));
    fs::write(&path, fixture::legacy_file(entry, Encoding::None, &record)).unwrap();
    path
}

fn load(app: &mut App, path: PathBuf) {
    Command { path, on_error: record_error() }.apply(app.world_mut());
}

fn unload(app: &mut App, identifier: &str) {
    UnloadCommand { identifier: identifier.into(), on_error: record_error() }
        .apply(app.world_mut());
}

fn take_errors(app: &mut App) -> Vec<Error> {
    std::mem::take(&mut app.world_mut().resource_mut::<Errors>().0)
}

#[test]
fn test_plug_resources() {
    let app = app();
    let world = app.world();
    assert!(world.contains_resource::<LoaderConfig>());
    assert!(world.contains_resource::<ImageAllocator>());
    assert!(world.contains_resource::<StringAllocator>());
    assert!(world.resource::<LoadedObjects>().is_empty());
}

#[test]
fn test_load_and_unload() {
    let dir = fixture::temp_dir("load-cycle");
    let path = write_water(&dir, "WTRCYAN");
    let mut app = app();

    load(&mut app, path);
    assert!(take_errors(&mut app).is_empty());

    let world = app.world();
    let object = world.resource::<LoadedObjects>().get("WTRCYAN").unwrap();
    assert_eq!(object.state(), ObjectState::Ready);
    assert_eq!(object.image_range().unwrap().count, 2);
    let name = object.string_id(StringRole::Name).unwrap();
    assert_eq!(world.resource::<StringAllocator>().get(name), Some("Cyan"));
    assert_eq!(world.resource::<ImageAllocator>().outstanding(), 1);

    unload(&mut app, "WTRCYAN");
    assert!(take_errors(&mut app).is_empty());
    let world = app.world();
    assert!(world.resource::<LoadedObjects>().is_empty());
    assert_eq!(world.resource::<ImageAllocator>().outstanding(), 0);
    assert_eq!(world.resource::<StringAllocator>().outstanding(), 0);
}

#[test]
fn test_configured_language() {
    let dir = fixture::temp_dir("load-language");
    let path = write_water(&dir, "WTRCYAN");
    let mut app = app();
    app.world_mut().resource_mut::<LoaderConfig>().language = "fr-FR".into();

    load(&mut app, path);
    let world = app.world();
    let object = world.resource::<LoadedObjects>().get("WTRCYAN").unwrap();
    let name = object.string_id(StringRole::Name).unwrap();
    assert_eq!(world.resource::<StringAllocator>().get(name), Some("Cyan FR"));
}

#[test]
fn test_load_twice() {
    let dir = fixture::temp_dir("load-twice");
    let path = write_water(&dir, "WTRCYAN");
    let mut app = app();

    load(&mut app, path.clone());
    load(&mut app, path);
    let errors = take_errors(&mut app);
    assert!(matches!(errors.as_slice(), [Error::AlreadyLoaded(id)] if id == "WTRCYAN"));
    assert_eq!(app.world().resource::<LoadedObjects>().len(), 1);
    assert_eq!(app.world().resource::<ImageAllocator>().outstanding(), 1);
}

#[test]
fn test_load_errors() {
    let dir = fixture::temp_dir("load-errors");
    let mut app = app();

    load(&mut app, dir.join("missing.dat"));
    unload(&mut app, "WTRCYAN");
    let errors = take_errors(&mut app);
    assert!(matches!(
        errors.as_slice(),
        [Error::Factory(factory::Error::Io(..)), Error::NotLoaded(id)] if id == "WTRCYAN"
    ));
}

#[test]
fn test_unknown_json_type() {
    let dir = fixture::temp_dir("load-unknown");
    let path = dir.join("future.json");
    fs::write(&path, r#"{"objectType": "hologram", "id": "test.hologram"}"#).unwrap();
    let mut app = app();

    load(&mut app, path);
    let errors = take_errors(&mut app);
    assert!(matches!(errors.as_slice(), [Error::UnknownType(_)]));
}

#[test]
fn test_without_plug() {
    let dir = fixture::temp_dir("load-no-plug");
    let path = write_water(&dir, "WTRCYAN");
    let mut app = App::new();
    app.init_resource::<Errors>();

    load(&mut app, path);
    let errors = take_errors(&mut app);
    assert!(matches!(errors.as_slice(), [Error::NotInitialized]));
}

#[test]
fn test_scan_command() {
    let dir = fixture::temp_dir("load-scan");
    write_water(&dir, "WTRCYAN");
    let mut app = app();
    app.world_mut().resource_mut::<LoaderConfig>().object_directories = vec![dir.clone()];

    ScanCommand.apply(app.world_mut());
    let repo = app.world().resource::<Repository>();
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.find_legacy("WTRCYAN").unwrap().name, "Cyan");
}

#![cfg_attr(feature = "precommit-checks", deny(warnings, clippy::pedantic, clippy::dbg_macro))]

use std::fs;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bevy::app::App;
use bevy::ecs::system::Command as _;
use bevy::log::{Level, LogPlugin};
use clap::Parser;
use itertools::Itertools;
use parkobj::chunk::{self, Encoding};
use parkobj::load::{self, LoadedObjects, ScanCommand};
use parkobj::strings::StringRole;
use parkobj::{Factory, LegacyEntry, LoaderConfig, Repository, Stream};

#[derive(clap::Parser)]
#[clap(version, about)]
struct Options {
    /// JSON file with loader settings.
    #[clap(long)]
    config:  Option<PathBuf>,
    /// Log debug messages.
    #[clap(short, long)]
    verbose: bool,
    #[clap(subcommand)]
    action:  Action,
}

#[derive(clap::Subcommand)]
enum Action {
    /// Print the identity, metadata and diagnostics of an object file.
    Inspect {
        path:      PathBuf,
        /// Skip decoding the image table.
        #[clap(long)]
        no_images: bool,
    },
    /// Index object directories and list the objects found.
    Scan {
        /// Directories to scan instead of the configured ones.
        dirs:    Vec<PathBuf>,
        /// Ignore the index cache.
        #[clap(long)]
        rebuild: bool,
    },
    /// Load objects into the global id spaces and print the ids they were given.
    Load { paths: Vec<PathBuf> },
    /// Write the JSON schema of object manifests.
    Schema {
        output: PathBuf,
        #[clap(long)]
        gzip:   bool,
    },
    /// Re-encode the chunk of a legacy object file, keeping its entry.
    Rechunk {
        input:    PathBuf,
        output:   PathBuf,
        /// 0 none, 1 RLE, 2 RLE with repeats, 3 rotate.
        #[clap(long)]
        encoding: u8,
    },
}

fn main() -> Result<()> {
    let options = Options::parse();

    let mut app = App::new();
    app.add_plugins((
        LogPlugin {
            level: if options.verbose { Level::DEBUG } else { Level::INFO },
            ..Default::default()
        },
        load::Plug,
    ));

    let config = match &options.config {
        Some(path) => LoaderConfig::from_json_file(path)
            .with_context(|| format!("read config {}", path.display()))?,
        None => LoaderConfig::default(),
    };
    app.insert_resource(config.clone());

    match options.action {
        Action::Inspect { path, no_images } => inspect(&config, &path, !no_images),
        Action::Scan { dirs, rebuild } => {
            scan(config, dirs, rebuild);
            Ok(())
        }
        Action::Load { paths } => {
            load_objects(&mut app, &config, paths);
            Ok(())
        }
        Action::Schema { output, gzip } => json_schema(&output, gzip),
        Action::Rechunk { input, output, encoding } => rechunk(&input, &output, encoding),
    }
}

fn inspect(config: &LoaderConfig, path: &Path, load_images: bool) -> Result<()> {
    let object = Factory::new(config)
        .try_create_object_from_file(path, load_images)
        .with_context(|| format!("load {}", path.display()))?
        .context("object type is not supported")?;

    println!("descriptor:   {}", object.descriptor());
    println!("identifier:   {}", object.identifier());
    if let Some(entry) = object.descriptor().legacy_entry() {
        println!("legacy entry: {entry}");
    }
    println!("version:      {}", object.version());
    println!("name:         {}", object.name(&config.language).unwrap_or("-"));
    println!("authors:      {}", object.authors().iter().join(", "));
    println!("source games: {}", object.source_games().iter().map(|game| game.name()).join(", "));
    println!("strings:      {}", object.strings().len());
    println!("images:       {}", object.images().len());
    if object.is_compatibility_object() {
        println!("compatibility object");
    }
    for diagnostic in object.diagnostics() {
        println!("  {diagnostic}");
    }
    Ok(())
}

fn scan(mut config: LoaderConfig, dirs: Vec<PathBuf>, rebuild: bool) {
    if !dirs.is_empty() {
        config.object_directories = dirs;
    }
    let repo = if rebuild {
        Repository::construct(&config)
    } else {
        Repository::load_or_construct(&config)
    };

    for item in repo.items() {
        println!("{:<18} {:<40} {}", item.object_type.name(), item.identifier, item.name);
    }
    println!("{} objects, {} conflicts", repo.len(), repo.conflicts());
}

fn load_objects(app: &mut App, config: &LoaderConfig, paths: Vec<PathBuf>) {
    let world = app.world_mut();
    if !config.object_directories.is_empty() {
        ScanCommand.apply(world);
    }
    for path in paths {
        load::Command {
            path,
            on_error: Box::new(|_world, err| bevy::log::error!("Load error: {err}")),
        }
        .apply(world);
    }

    for object in world.resource::<LoadedObjects>().iter() {
        let images = object.image_range().map_or_else(
            || "-".to_string(),
            |range| format!("{}..{}", range.base.0, range.base.0 + range.count),
        );
        let name =
            object.string_id(StringRole::Name).map_or_else(|| "-".to_string(), |id| id.0.to_string());
        println!("{:<40} images {images:<16} name string {name}", object.identifier());
    }
}

fn json_schema(output: &Path, gzip: bool) -> Result<()> {
    let schema = schemars::schema_for!(store::Manifest);
    let mut writer: Box<dyn io::Write> =
        Box::new(BufWriter::new(fs::File::create(output).context("create output")?));
    if gzip {
        writer = Box::new(BufWriter::new(flate2::write::GzEncoder::new(
            writer,
            flate2::Compression::best(),
        )));
    }
    serde_json::to_writer(writer, &schema).context("write schema")?;
    Ok(())
}

fn rechunk(input: &Path, output: &Path, encoding: u8) -> Result<()> {
    let encoding =
        Encoding::from_code(encoding).with_context(|| format!("unknown encoding {encoding}"))?;
    let bytes = fs::read(input).context("read input")?;

    let mut stream = Stream::new(&bytes);
    let entry = LegacyEntry::read(&mut stream).context("read object entry")?;
    let chunk = chunk::read(&mut stream).context("read chunk")?;

    let mut out = entry.to_bytes().to_vec();
    out.extend(chunk::write(encoding, &chunk.data));
    fs::write(output, out).context("write output")?;
    Ok(())
}

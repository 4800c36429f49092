//! Objects and their lifecycle.
//!
//! A resolver creates an object in the populated state, with its record, strings and images
//! read but no global ids assigned. [`Object::load`] assigns image and string ids and makes the
//! object ready. [`Object::unload`] releases the ids and consumes the object.

use std::path::{Path, PathBuf};

use store::{Manifest, ObjectType, SourceGame, Version};

use crate::alloc::{self, ImageAllocator, ImageId, ImageRange, StringAllocator, StringId};
use crate::context::{Diagnostic, ObjectError, ReadContext};
use crate::descriptor::{Identity, ObjectDescriptor};
use crate::images::ImageTable;
use crate::json::Properties;
use crate::stream::{self, Stream};
use crate::strings::{StringRole, StringTable};

pub mod audio;
pub mod banner;
pub mod climate;
pub mod footpath;
pub mod footpath_railings;
pub mod footpath_surface;
mod fixups;
pub mod large_scenery;
pub mod music;
pub mod park_entrance;
pub mod path_addition;
pub mod peep_animations;
pub mod peep_names;
pub mod ride;
pub mod scenario_meta;
pub mod scenery_group;
pub mod small_scenery;
pub mod station;
pub mod terrain_edge;
pub mod terrain_surface;
pub mod wall;
pub mod water;

#[cfg(test)]
mod tests;

/// Tables filled by a format reader alongside the type-specific record.
pub struct Tables<'a> {
    pub strings:    &'a mut StringTable,
    pub images:     &'a mut ImageTable,
    pub descriptor: &'a ObjectDescriptor,
}

/// An image to draw for a preview, relative to the top left of the preview area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Index into the object's image table.
    pub index: u32,
    pub x:     i32,
    pub y:     i32,
}

impl Frame {
    #[must_use]
    pub fn centered(index: u32, width: i32, height: i32) -> Self {
        Self { index, x: width / 2, y: height / 2 }
    }
}

/// A [`Frame`] resolved to a global image id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewFrame {
    pub image: ImageId,
    pub x:     i32,
    pub y:     i32,
}

/// Behaviour of a type-specific record.
pub trait Kind {
    /// Reads the legacy record, including its string and image tables.
    fn read_legacy(
        &mut self,
        ctx: &mut ReadContext<'_>,
        stream: &mut Stream<'_>,
        tables: &mut Tables<'_>,
    ) -> stream::Result<()> {
        ctx.log_error(
            ObjectError::BadEncoding,
            format!("Legacy format is not supported for {}.", tables.descriptor.object_type.name()),
        );
        Ok(())
    }

    /// Reads the `properties` of a manifest.
    /// Strings and images are read by the caller afterwards.
    fn read_json(&mut self, ctx: &mut ReadContext<'_>, props: &Properties, tables: &mut Tables<'_>);

    /// Frames of a `width` by `height` preview.
    fn preview(&self, width: i32, height: i32) -> Vec<Frame> { vec![Frame::centered(0, width, height)] }
}

/// Type-specific record of an object.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectData {
    Ride(ride::Ride),
    SmallScenery(small_scenery::SmallScenery),
    LargeScenery(large_scenery::LargeScenery),
    Wall(wall::Wall),
    Banner(banner::Banner),
    Footpath(footpath::Footpath),
    PathAddition(path_addition::PathAddition),
    SceneryGroup(scenery_group::SceneryGroup),
    ParkEntrance(park_entrance::ParkEntrance),
    Water(water::Water),
    ScenarioMeta(scenario_meta::ScenarioMeta),
    TerrainSurface(terrain_surface::TerrainSurface),
    TerrainEdge(terrain_edge::TerrainEdge),
    Station(station::Station),
    Music(music::Music),
    FootpathSurface(footpath_surface::FootpathSurface),
    FootpathRailings(footpath_railings::FootpathRailings),
    Audio(audio::Audio),
    PeepNames(peep_names::PeepNames),
    PeepAnimations(peep_animations::PeepAnimations),
    Climate(climate::Climate),
}

impl ObjectData {
    /// An empty record of the given type.
    #[must_use]
    pub fn new(object_type: ObjectType) -> Self {
        match object_type {
            ObjectType::Ride => Self::Ride(ride::Ride::default()),
            ObjectType::SmallScenery => Self::SmallScenery(small_scenery::SmallScenery::default()),
            ObjectType::LargeScenery => Self::LargeScenery(large_scenery::LargeScenery::default()),
            ObjectType::Walls => Self::Wall(wall::Wall::default()),
            ObjectType::Banners => Self::Banner(banner::Banner::default()),
            ObjectType::Paths => Self::Footpath(footpath::Footpath::default()),
            ObjectType::PathAdditions => Self::PathAddition(path_addition::PathAddition::default()),
            ObjectType::SceneryGroup => Self::SceneryGroup(scenery_group::SceneryGroup::default()),
            ObjectType::ParkEntrance => Self::ParkEntrance(park_entrance::ParkEntrance::default()),
            ObjectType::Water => Self::Water(water::Water::default()),
            ObjectType::ScenarioMeta => Self::ScenarioMeta(scenario_meta::ScenarioMeta),
            ObjectType::TerrainSurface => {
                Self::TerrainSurface(terrain_surface::TerrainSurface::default())
            }
            ObjectType::TerrainEdge => Self::TerrainEdge(terrain_edge::TerrainEdge::default()),
            ObjectType::Station => Self::Station(station::Station::default()),
            ObjectType::Music => Self::Music(music::Music::default()),
            ObjectType::FootpathSurface => {
                Self::FootpathSurface(footpath_surface::FootpathSurface::default())
            }
            ObjectType::FootpathRailings => {
                Self::FootpathRailings(footpath_railings::FootpathRailings::default())
            }
            ObjectType::Audio => Self::Audio(audio::Audio::default()),
            ObjectType::PeepNames => Self::PeepNames(peep_names::PeepNames::default()),
            ObjectType::PeepAnimations => {
                Self::PeepAnimations(peep_animations::PeepAnimations::default())
            }
            ObjectType::Climate => Self::Climate(climate::Climate::default()),
        }
    }

    #[must_use]
    pub fn object_type(&self) -> ObjectType {
        match self {
            Self::Ride(_) => ObjectType::Ride,
            Self::SmallScenery(_) => ObjectType::SmallScenery,
            Self::LargeScenery(_) => ObjectType::LargeScenery,
            Self::Wall(_) => ObjectType::Walls,
            Self::Banner(_) => ObjectType::Banners,
            Self::Footpath(_) => ObjectType::Paths,
            Self::PathAddition(_) => ObjectType::PathAdditions,
            Self::SceneryGroup(_) => ObjectType::SceneryGroup,
            Self::ParkEntrance(_) => ObjectType::ParkEntrance,
            Self::Water(_) => ObjectType::Water,
            Self::ScenarioMeta(_) => ObjectType::ScenarioMeta,
            Self::TerrainSurface(_) => ObjectType::TerrainSurface,
            Self::TerrainEdge(_) => ObjectType::TerrainEdge,
            Self::Station(_) => ObjectType::Station,
            Self::Music(_) => ObjectType::Music,
            Self::FootpathSurface(_) => ObjectType::FootpathSurface,
            Self::FootpathRailings(_) => ObjectType::FootpathRailings,
            Self::Audio(_) => ObjectType::Audio,
            Self::PeepNames(_) => ObjectType::PeepNames,
            Self::PeepAnimations(_) => ObjectType::PeepAnimations,
            Self::Climate(_) => ObjectType::Climate,
        }
    }

    fn kind(&self) -> &dyn Kind {
        match self {
            Self::Ride(k) => k,
            Self::SmallScenery(k) => k,
            Self::LargeScenery(k) => k,
            Self::Wall(k) => k,
            Self::Banner(k) => k,
            Self::Footpath(k) => k,
            Self::PathAddition(k) => k,
            Self::SceneryGroup(k) => k,
            Self::ParkEntrance(k) => k,
            Self::Water(k) => k,
            Self::ScenarioMeta(k) => k,
            Self::TerrainSurface(k) => k,
            Self::TerrainEdge(k) => k,
            Self::Station(k) => k,
            Self::Music(k) => k,
            Self::FootpathSurface(k) => k,
            Self::FootpathRailings(k) => k,
            Self::Audio(k) => k,
            Self::PeepNames(k) => k,
            Self::PeepAnimations(k) => k,
            Self::Climate(k) => k,
        }
    }

    fn kind_mut(&mut self) -> &mut dyn Kind {
        match self {
            Self::Ride(k) => k,
            Self::SmallScenery(k) => k,
            Self::LargeScenery(k) => k,
            Self::Wall(k) => k,
            Self::Banner(k) => k,
            Self::Footpath(k) => k,
            Self::PathAddition(k) => k,
            Self::SceneryGroup(k) => k,
            Self::ParkEntrance(k) => k,
            Self::Water(k) => k,
            Self::ScenarioMeta(k) => k,
            Self::TerrainSurface(k) => k,
            Self::TerrainEdge(k) => k,
            Self::Station(k) => k,
            Self::Music(k) => k,
            Self::FootpathSurface(k) => k,
            Self::FootpathRailings(k) => k,
            Self::Audio(k) => k,
            Self::PeepNames(k) => k,
            Self::PeepAnimations(k) => k,
            Self::Climate(k) => k,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectState {
    /// Read, but without global ids.
    Populated,
    /// Global ids assigned. Gameplay accessors and previews are available.
    Ready,
}

/// Global ids held by a ready object.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Allocation {
    images:  Option<ImageRange>,
    strings: Vec<(StringRole, StringId)>,
}

impl Allocation {
    fn release(
        self,
        images: &mut ImageAllocator,
        strings: &mut StringAllocator,
    ) -> Result<(), alloc::Error> {
        let mut result = Ok(());
        if let Some(range) = self.images
            && let Err(err) = images.free(range)
        {
            result = Err(err);
        }
        for (_, id) in self.strings {
            if let Err(err) = strings.free(id) {
                result = result.and(Err(err));
            }
        }
        result
    }
}

#[derive(Debug)]
pub struct Object {
    descriptor:              ObjectDescriptor,
    identifier:              String,
    source_games:            Vec<SourceGame>,
    authors:                 Vec<String>,
    is_compatibility_object: bool,
    is_json_object:          bool,
    path:                    Option<PathBuf>,
    strings:                 StringTable,
    images:                  ImageTable,
    diagnostics:             Vec<Diagnostic>,
    data:                    ObjectData,
    allocation:              Option<Allocation>,
}

impl Object {
    /// Creates an empty populated object with the given identity.
    #[must_use]
    pub fn new(descriptor: ObjectDescriptor) -> Self {
        Self {
            identifier: descriptor.name(),
            data: ObjectData::new(descriptor.object_type),
            descriptor,
            source_games: Vec::new(),
            authors: Vec::new(),
            is_compatibility_object: false,
            is_json_object: false,
            path: None,
            strings: StringTable::default(),
            images: ImageTable::default(),
            diagnostics: Vec::new(),
            allocation: None,
        }
    }

    #[must_use]
    pub fn descriptor(&self) -> &ObjectDescriptor { &self.descriptor }

    #[must_use]
    pub fn object_type(&self) -> ObjectType { self.data.object_type() }

    /// The textual identifier, or the trimmed legacy name for legacy objects.
    #[must_use]
    pub fn identifier(&self) -> &str { &self.identifier }

    /// The trimmed legacy name, if the object has a legacy identity.
    #[must_use]
    pub fn legacy_identifier(&self) -> Option<String> {
        self.descriptor.legacy_entry().map(crate::descriptor::LegacyEntry::name)
    }

    #[must_use]
    pub fn version(&self) -> Version { self.descriptor.version }

    #[must_use]
    pub fn source_games(&self) -> &[SourceGame] { &self.source_games }

    #[must_use]
    pub fn authors(&self) -> &[String] { &self.authors }

    #[must_use]
    pub fn is_compatibility_object(&self) -> bool { self.is_compatibility_object }

    #[must_use]
    pub fn is_json_object(&self) -> bool { self.is_json_object }

    /// The file the object was read from.
    #[must_use]
    pub fn path(&self) -> Option<&Path> { self.path.as_deref() }

    #[must_use]
    pub fn strings(&self) -> &StringTable { &self.strings }

    #[must_use]
    pub fn images(&self) -> &ImageTable { &self.images }

    /// Diagnostics raised while reading the object. None of them is fatal.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] { &self.diagnostics }

    /// The type-specific record, for inspection in any state.
    #[must_use]
    pub fn data(&self) -> &ObjectData { &self.data }

    /// Display name in `locale`, with the usual fallbacks.
    #[must_use]
    pub fn name(&self, locale: &str) -> Option<&str> { self.strings.get(StringRole::Name, locale) }

    pub(crate) fn set_identifier(&mut self, identifier: String) { self.identifier = identifier; }

    pub(crate) fn set_source_games(&mut self, games: Vec<SourceGame>) { self.source_games = games; }

    pub(crate) fn set_authors(&mut self, authors: Vec<String>) { self.authors = authors; }

    pub(crate) fn set_compatibility_object(&mut self, value: bool) {
        self.is_compatibility_object = value;
    }

    pub(crate) fn set_json_object(&mut self, value: bool) { self.is_json_object = value; }

    pub(crate) fn set_path(&mut self, path: Option<PathBuf>) { self.path = path; }

    pub(crate) fn extend_diagnostics(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    fn split(&mut self) -> (&mut dyn Kind, Tables<'_>) {
        (self.data.kind_mut(), Tables {
            strings:    &mut self.strings,
            images:     &mut self.images,
            descriptor: &self.descriptor,
        })
    }

    pub(crate) fn read_legacy(
        &mut self,
        ctx: &mut ReadContext<'_>,
        stream: &mut Stream<'_>,
    ) -> stream::Result<()> {
        let (kind, mut tables) = self.split();
        kind.read_legacy(ctx, stream, &mut tables)
    }

    pub(crate) fn read_json(&mut self, ctx: &mut ReadContext<'_>, manifest: &Manifest) {
        let (kind, mut tables) = self.split();
        kind.read_json(ctx, &manifest.properties, &mut tables);
        tables.strings.read_json(ctx, &manifest.strings);
        tables.images.read_json(ctx, &manifest.images);
    }

    #[must_use]
    pub fn state(&self) -> ObjectState {
        if self.allocation.is_some() { ObjectState::Ready } else { ObjectState::Populated }
    }

    /// Assigns global image and string ids, making the object ready.
    ///
    /// Strings are resolved in `language`. On failure nothing stays allocated.
    pub fn load(
        &mut self,
        images: &mut ImageAllocator,
        strings: &mut StringAllocator,
        language: &str,
    ) -> Result<(), LoadError> {
        if self.allocation.is_some() {
            return Err(LoadError::AlreadyLoaded);
        }
        self.strings.sort(language);

        let image_range = if self.images.is_empty() {
            None
        } else {
            let count = u32::try_from(self.images.len())
                .map_err(|_| alloc::Error::Exhausted { requested: u32::MAX })?;
            let range = images.allocate(count)?;
            debug_assert_eq!(range.count, count);
            Some(range)
        };
        let mut allocation = Allocation { images: image_range, strings: Vec::new() };

        for role in self.strings.roles() {
            let text = self.strings.get(role, language).unwrap_or_default();
            match strings.allocate(text) {
                Ok(id) => allocation.strings.push((role, id)),
                Err(err) => {
                    if let Err(release_err) = allocation.release(images, strings) {
                        bevy::log::error!(
                            "[{}] Cannot roll back partial load: {release_err}",
                            self.identifier
                        );
                    }
                    return Err(err.into());
                }
            }
        }

        self.allocation = Some(allocation);
        Ok(())
    }

    /// Releases all global ids and discards the object.
    pub fn unload(
        self,
        images: &mut ImageAllocator,
        strings: &mut StringAllocator,
    ) -> Result<(), alloc::Error> {
        match self.allocation {
            Some(allocation) => allocation.release(images, strings),
            None => Ok(()),
        }
    }

    /// Global id range of the image table, if ready and the table is not empty.
    #[must_use]
    pub fn image_range(&self) -> Option<ImageRange> { self.allocation.as_ref()?.images }

    /// Global id of the string with the given role, if ready.
    #[must_use]
    pub fn string_id(&self, role: StringRole) -> Option<StringId> {
        let allocation = self.allocation.as_ref()?;
        allocation.strings.iter().find(|(r, _)| *r == role).map(|&(_, id)| id)
    }

    /// The record for gameplay use, which requires the object to be ready.
    pub fn ready_data(&self) -> Result<&ObjectData, NotReady> {
        if self.allocation.is_some() { Ok(&self.data) } else { Err(NotReady) }
    }

    /// Images to draw for a `width` by `height` preview of a ready object.
    pub fn preview(&self, width: i32, height: i32) -> Result<Vec<PreviewFrame>, NotReady> {
        let allocation = self.allocation.as_ref().ok_or(NotReady)?;
        let Some(range) = allocation.images else { return Ok(Vec::new()) };
        Ok(self
            .data
            .kind()
            .preview(width, height)
            .into_iter()
            .filter_map(|frame| {
                Some(PreviewFrame { image: range.get(frame.index)?, x: frame.x, y: frame.y })
            })
            .collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("object is not loaded")]
pub struct NotReady;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("object is already loaded")]
    AlreadyLoaded,
    #[error("{0}")]
    Alloc(#[from] alloc::Error),
}

/// Reads a legacy entry used as a reference to another object.
/// An unused slot reads as `None`.
pub(crate) fn read_legacy_reference(stream: &mut Stream<'_>) -> stream::Result<Option<Identity>> {
    let entry = crate::descriptor::LegacyEntry::read(stream)?;
    Ok((!entry.is_empty()).then_some(Identity::Legacy(entry)))
}

/// Reads a textual reference to another object from a JSON property.
pub(crate) fn json_reference(props: &Properties, key: &str) -> Option<Identity> {
    crate::json::string(props, key)
        .filter(|id| !id.is_empty())
        .map(|id| Identity::Textual(id.to_string()))
}

/// Logs an error if a build price is free or negative.
pub(crate) fn check_price(ctx: &mut ReadContext<'_>, price: i16) {
    if price <= 0 {
        ctx.log_error(ObjectError::InvalidProperty, "Price can not be free or negative.");
    }
}

/// Logs errors for a free build price or a removal refund above the build price.
pub(crate) fn check_prices(ctx: &mut ReadContext<'_>, price: i16, removal_price: i16) {
    check_price(ctx, price);
    if removal_price > price {
        ctx.log_error(ObjectError::InvalidProperty, "Sell price can not be more than buy price.");
    }
}

use byteorder::{LittleEndian, WriteBytesExt};
use enum_map::EnumMap;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde_json::json;
use store::{Manifest, Month, ObjectType, SourceGame, WEATHER_DIST_SIZE, WeatherKind};
use strum::IntoEnumIterator;

use super::climate::{self, Climate};
use super::small_scenery::{SmallScenery, SmallSceneryFlags};
use super::{LoadError, Object, ObjectData, ObjectState};
use crate::alloc::{ImageAllocator, StringAllocator};
use crate::context::{ObjectError, ObjectLookup, ReadContext, Severity};
use crate::descriptor::{Identity, LegacyEntry, ObjectDescriptor};
use crate::fixture::{self, StubImageSource};
use crate::lookup::Cursor;
use crate::stream::Stream;
use crate::strings::StringRole;

fn legacy_object(ty: ObjectType, game: SourceGame, name: &str, data: &[u8]) -> (Object, ReadContext<'static>) {
    let entry = LegacyEntry::new(ty, game, name, 0);
    let mut object = Object::new(ObjectDescriptor::from_legacy(entry).unwrap());
    let mut ctx = ReadContext::new(name, true);
    object.read_legacy(&mut ctx, &mut Stream::new(data)).unwrap();
    (object, ctx)
}

fn json_object(manifest: serde_json::Value, source: &StubImageSource) -> (Object, Vec<crate::context::Diagnostic>) {
    let manifest: Manifest = serde_json::from_value(manifest).unwrap();
    let ty = ObjectType::from_name(&manifest.object_type).unwrap();
    let mut object = Object::new(ObjectDescriptor::from_identifier(ty, manifest.id.clone()));
    let mut ctx = ReadContext::new(manifest.id.clone(), true).with_image_source(Some(source));
    object.read_json(&mut ctx, &manifest);
    (object, ctx.into_diagnostics())
}

fn errors<'a>(ctx: &'a ReadContext<'_>) -> Vec<&'a str> {
    ctx.diagnostics()
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .map(|d| d.message.as_str())
        .collect()
}

fn small_scenery_bytes(flags: u32, height: u8, price: i16, removal_price: i16) -> Vec<u8> {
    let mut out = vec![0; 6];
    out.write_u32::<LittleEndian>(flags).unwrap();
    out.push(height);
    out.push(Cursor::TreeDown as u8);
    out.write_i16::<LittleEndian>(price).unwrap();
    out.write_i16::<LittleEndian>(removal_price).unwrap();
    out.extend([0; 4]);
    out.write_u16::<LittleEndian>(0).unwrap();
    out.write_u16::<LittleEndian>(0).unwrap();
    out.write_u16::<LittleEndian>(0).unwrap();
    out.push(0);
    fixture::strings(&mut out, &[(0, "Oak Tree")]);
    fixture::no_group(&mut out);
    fixture::images(&mut out, 2);
    out
}

#[test]
fn test_create_every_type() {
    for ty in ObjectType::iter() {
        assert_eq!(ObjectData::new(ty).object_type(), ty);
    }
}

#[test]
fn test_load_and_unload_balance() {
    let data = small_scenery_bytes(SmallSceneryFlags::ROTATABLE.bits(), 32, 10, 5);
    let (mut object, ctx) = legacy_object(ObjectType::SmallScenery, SourceGame::Rct2, "TL0", &data);
    assert!(!ctx.was_error());
    assert_eq!(object.state(), ObjectState::Populated);

    let mut images = ImageAllocator::default();
    let mut strings = StringAllocator::default();
    object.load(&mut images, &mut strings, "en-GB").unwrap();
    assert_eq!(object.state(), ObjectState::Ready);
    assert_eq!(object.image_range().unwrap().count, 2);
    let name = object.string_id(StringRole::Name).unwrap();
    assert_eq!(strings.get(name), Some("Oak Tree"));
    assert_eq!(images.outstanding(), 1);
    assert_eq!(strings.outstanding(), 1);

    object.unload(&mut images, &mut strings).unwrap();
    assert_eq!(images.outstanding(), 0);
    assert_eq!(strings.outstanding(), 0);
}

#[test]
fn test_load_twice() {
    let data = small_scenery_bytes(0, 32, 10, 5);
    let (mut object, _) = legacy_object(ObjectType::SmallScenery, SourceGame::Rct2, "TL0", &data);
    let mut images = ImageAllocator::default();
    let mut strings = StringAllocator::default();
    object.load(&mut images, &mut strings, "en-GB").unwrap();
    assert_eq!(object.load(&mut images, &mut strings, "en-GB"), Err(LoadError::AlreadyLoaded));
    assert_eq!(images.outstanding(), 1);
}

#[test]
fn test_load_rolls_back_on_failure() {
    let data = small_scenery_bytes(0, 32, 10, 5);
    let (mut object, _) = legacy_object(ObjectType::SmallScenery, SourceGame::Rct2, "TL0", &data);
    let mut images = ImageAllocator::default();
    let mut strings = StringAllocator::new(0..1);
    strings.allocate("taken").unwrap();

    assert!(matches!(
        object.load(&mut images, &mut strings, "en-GB"),
        Err(LoadError::Alloc(crate::alloc::Error::Exhausted { .. }))
    ));
    assert_eq!(object.state(), ObjectState::Populated);
    assert_eq!(images.outstanding(), 0);
    assert_eq!(strings.outstanding(), 1);
}

#[test]
fn test_gameplay_access_requires_ready() {
    let data = small_scenery_bytes(SmallSceneryFlags::HAS_GLASS.bits(), 32, 10, 5);
    let (mut object, _) = legacy_object(ObjectType::SmallScenery, SourceGame::Rct2, "TL0", &data);
    assert!(object.ready_data().is_err());
    assert!(object.preview(112, 112).is_err());
    assert!(object.string_id(StringRole::Name).is_none());

    let mut images = ImageAllocator::default();
    let mut strings = StringAllocator::default();
    object.load(&mut images, &mut strings, "en-GB").unwrap();
    let base = object.image_range().unwrap().base;
    let preview = object.preview(112, 112).unwrap();
    assert_eq!(preview.len(), 1, "glass overlay frame 4 is outside a two image table");
    assert_eq!(preview[0].image, base);
    assert!(matches!(object.ready_data(), Ok(ObjectData::SmallScenery(_))));
}

#[test]
fn test_legacy_and_json_agree() {
    let data = small_scenery_bytes(SmallSceneryFlags::ROTATABLE.bits(), 32, 10, 5);
    let (mut legacy, ctx) = legacy_object(ObjectType::SmallScenery, SourceGame::Rct2, "TL0", &data);
    assert!(ctx.diagnostics().is_empty());

    let source = StubImageSource { names: vec!["G1"] };
    let (mut modern, diagnostics) = json_object(
        json!({
            "objectType": "scenery_small",
            "id": "test.scenery.oak",
            "properties": {
                "price": 10,
                "removalPrice": 5,
                "cursor": "CURSOR_TREE_DOWN",
                "height": 32,
                "isRotatable": true,
            },
            "strings": { "name": { "en-GB": "Oak Tree" } },
            "images": ["$G1[0..1]"],
        }),
        &source,
    );
    assert!(diagnostics.is_empty(), "{diagnostics:?}");

    let mut images = ImageAllocator::default();
    let mut strings = StringAllocator::default();
    legacy.load(&mut images, &mut strings, "en-GB").unwrap();
    modern.load(&mut images, &mut strings, "en-GB").unwrap();

    assert_eq!(legacy.ready_data().unwrap(), modern.ready_data().unwrap());
    assert_eq!(legacy.images().len(), modern.images().len());
    assert_eq!(legacy.strings().len(), modern.strings().len());
    assert_eq!(legacy.name("en-GB"), modern.name("en-GB"));
}

#[test]
fn test_removal_price_above_price() {
    let data = small_scenery_bytes(0, 32, 10, 11);
    let (_, ctx) = legacy_object(ObjectType::SmallScenery, SourceGame::Rct2, "TL0", &data);
    assert!(ctx.was_error());
    assert_eq!(errors(&ctx), ["Sell price can not be more than buy price."]);
}

#[test]
fn test_free_scenery() {
    let data = small_scenery_bytes(0, 32, 0, 0);
    let (_, ctx) = legacy_object(ObjectType::SmallScenery, SourceGame::Rct2, "TL0", &data);
    assert_eq!(errors(&ctx), ["Price can not be free or negative."]);
    assert_eq!(ctx.diagnostics()[0].code, ObjectError::InvalidProperty);
}

#[test]
fn test_tall_legacy_scenery_is_tree() {
    let data = small_scenery_bytes(0, 80, 10, 5);
    let (object, _) = legacy_object(ObjectType::SmallScenery, SourceGame::Rct2, "TL0", &data);
    let ObjectData::SmallScenery(scenery) = object.data() else { panic!("wrong kind") };
    assert!(scenery.flags.contains(SmallSceneryFlags::IS_TREE));

    let data = small_scenery_bytes(0, 64, 10, 5);
    let (object, _) = legacy_object(ObjectType::SmallScenery, SourceGame::Rct2, "TL0", &data);
    let ObjectData::SmallScenery(scenery) = object.data() else { panic!("wrong kind") };
    assert!(!scenery.flags.contains(SmallSceneryFlags::IS_TREE));
}

#[test]
fn test_frame_offsets() {
    let mut data = vec![0; 6];
    data.write_u32::<LittleEndian>(SmallSceneryFlags::HAS_FRAME_OFFSETS.bits()).unwrap();
    data.push(16);
    data.push(0);
    data.write_i16::<LittleEndian>(10).unwrap();
    data.write_i16::<LittleEndian>(5).unwrap();
    data.extend([0; 11]);
    fixture::strings(&mut data, &[(0, "Clock")]);
    fixture::no_group(&mut data);
    data.extend([0, 1, 2, 1, 0xFF]);
    fixture::images(&mut data, 3);

    let (object, ctx) = legacy_object(ObjectType::SmallScenery, SourceGame::Rct2, "CLOCK", &data);
    assert!(!ctx.was_error());
    let ObjectData::SmallScenery(SmallScenery { frame_offsets, .. }) = object.data() else {
        panic!("wrong kind")
    };
    assert_eq!(frame_offsets, &[0, 1, 2, 1]);
    assert_eq!(object.images().len(), 3);
}

#[test]
fn test_scenery_group_fixup() {
    let data = small_scenery_bytes(0, 32, 10, 5);
    let (object, _) =
        legacy_object(ObjectType::SmallScenery, SourceGame::TimeTwister, "TTRFTL02", &data);
    let ObjectData::SmallScenery(scenery) = object.data() else { panic!("wrong kind") };
    assert_eq!(
        scenery.scenery_group,
        Some(Identity::Textual("rct2.scenery_group.scgabstr".into()))
    );

    let (object, _) = legacy_object(ObjectType::SmallScenery, SourceGame::Rct2, "TL0", &data);
    let ObjectData::SmallScenery(scenery) = object.data() else { panic!("wrong kind") };
    assert_eq!(scenery.scenery_group, None);
}

fn wall_bytes(flags2: u8, price: i16) -> Vec<u8> {
    let mut out = vec![0; 6];
    out.push(Cursor::FenceDown as u8);
    out.push(0);
    out.push(8);
    out.push(flags2);
    out.write_i16::<LittleEndian>(price).unwrap();
    out.push(0);
    out.push(0xFF);
    fixture::strings(&mut out, &[(0, "Brick Wall")]);
    fixture::no_group(&mut out);
    fixture::images(&mut out, 1);
    out
}

#[test]
fn test_wall_door_sound_fixup() {
    let data = wall_bytes(0, 20);
    let (object, ctx) = legacy_object(ObjectType::Walls, SourceGame::Rct2, "XXWLBR03", &data);
    assert!(!ctx.was_error());
    let ObjectData::Wall(wall) = object.data() else { panic!("wrong kind") };
    assert_eq!(wall.door_sound(), 1);

    let (object, _) = legacy_object(ObjectType::Walls, SourceGame::Rct2, "XXWLBR02", &data);
    let ObjectData::Wall(wall) = object.data() else { panic!("wrong kind") };
    assert_eq!(wall.door_sound(), 0);
}

fn path_addition_bytes(price: i16) -> Vec<u8> {
    let mut out = vec![0; 6];
    out.write_u16::<LittleEndian>(0).unwrap();
    out.push(1);
    out.push(Cursor::BinDown as u8);
    out.write_i16::<LittleEndian>(price).unwrap();
    out.extend([0; 2]);
    fixture::strings(&mut out, &[(0, "Litter Bin")]);
    fixture::no_group(&mut out);
    fixture::images(&mut out, 1);
    out
}

#[test]
fn test_free_path_addition() {
    let data = path_addition_bytes(0);
    let (_, ctx) = legacy_object(ObjectType::PathAdditions, SourceGame::Rct2, "LITTER1", &data);
    assert!(ctx.was_error());
    assert_eq!(errors(&ctx), ["Price can not be free or negative."]);
}

struct Installed(Vec<ObjectDescriptor>);

impl ObjectLookup for Installed {
    fn contains(&self, descriptor: &ObjectDescriptor) -> bool {
        self.0.iter().any(|d| d.identity.matches(&descriptor.identity))
    }
}

#[test]
fn test_footpath_signs_group() {
    let lookup = Installed(vec![ObjectDescriptor::from_identifier(
        ObjectType::SceneryGroup,
        "rct2.scenery_group.scgpathx",
    )]);
    let data = path_addition_bytes(5);
    let read = |game, lookup: Option<&Installed>| {
        let entry = LegacyEntry::new(ObjectType::PathAdditions, game, "LITTER9", 0);
        let mut object = Object::new(ObjectDescriptor::from_legacy(entry).unwrap());
        let mut ctx = ReadContext::new("LITTER9", false)
            .with_lookup(lookup.map(|l| l as &dyn ObjectLookup));
        object.read_legacy(&mut ctx, &mut Stream::new(&data)).unwrap();
        let ObjectData::PathAddition(addition) = object.data() else { panic!("wrong kind") };
        addition.scenery_group.clone()
    };

    let signs = Some(Identity::Textual("rct2.scenery_group.scgpathx".into()));
    assert_eq!(read(SourceGame::Custom, Some(&lookup)), signs);
    assert_eq!(read(SourceGame::WackyWorlds, Some(&lookup)), signs);
    assert_eq!(read(SourceGame::Rct2, Some(&lookup)), None);
    assert_eq!(read(SourceGame::Custom, None), None);
}

#[test]
fn test_large_scenery_tiles() {
    let mut data = vec![0; 6];
    data.push(Cursor::StatueDown as u8);
    data.push(0);
    data.write_i16::<LittleEndian>(40).unwrap();
    data.write_i16::<LittleEndian>(20).unwrap();
    data.extend([0; 5]);
    data.push(0xFF);
    data.extend([0; 4]);
    fixture::strings(&mut data, &[(0, "Castle")]);
    fixture::no_group(&mut data);
    for (x, y) in [(0i16, 0i16), (32, 0)] {
        data.write_i16::<LittleEndian>(x).unwrap();
        data.write_i16::<LittleEndian>(y).unwrap();
        data.write_i16::<LittleEndian>(0).unwrap();
        data.push(64);
        data.write_u16::<LittleEndian>(0x0F00).unwrap();
    }
    data.write_u16::<LittleEndian>(0xFFFF).unwrap();
    fixture::images(&mut data, 4);

    let (object, ctx) = legacy_object(ObjectType::LargeScenery, SourceGame::Rct2, "CASTLE", &data);
    assert!(!ctx.was_error(), "{:?}", ctx.diagnostics());
    let ObjectData::LargeScenery(scenery) = object.data() else { panic!("wrong kind") };
    assert_eq!(scenery.tiles.len(), 2);
    assert_eq!(scenery.tiles[1].x, 32);
    assert_eq!(scenery.tiles[1].clearance, 64);
    assert_eq!(object.images().len(), 4);
}

#[test]
fn test_large_scenery_without_tiles() {
    let source = StubImageSource { names: Vec::new() };
    let (_, diagnostics) = json_object(
        json!({
            "objectType": "scenery_large",
            "id": "test.scenery_large.empty",
            "properties": { "price": 10, "tiles": [] },
        }),
        &source,
    );
    assert!(diagnostics.iter().any(|d| d.message == "Large scenery has no tiles."));
}

#[test]
fn test_scenery_group_entries() {
    let mut data = vec![0; 6 + 0x100];
    data.extend([0, 0, 55, 0]);
    data.write_u32::<LittleEndian>(1 << 4).unwrap();
    fixture::strings(&mut data, &[(0, "Trees")]);
    let tree = LegacyEntry::new(ObjectType::SmallScenery, SourceGame::Rct2, "TL0", 0x1234);
    let shrub = LegacyEntry::new(ObjectType::SmallScenery, SourceGame::Rct2, "SH1", 0x5678);
    data.extend(tree.to_bytes());
    data.extend(shrub.to_bytes());
    data.push(0xFF);
    fixture::images(&mut data, 2);

    let (object, ctx) = legacy_object(ObjectType::SceneryGroup, SourceGame::Rct2, "SCGTREES", &data);
    assert!(!ctx.was_error());
    let ObjectData::SceneryGroup(group) = object.data() else { panic!("wrong kind") };
    assert_eq!(group.priority, 55);
    assert!(group.has_costume(super::scenery_group::EntertainerCostume::Panda));
    assert_eq!(group.entries, [Identity::Legacy(tree), Identity::Legacy(shrub)]);
}

#[test]
fn test_scenery_group_json_defaults() {
    let source = StubImageSource { names: Vec::new() };
    let (object, diagnostics) = json_object(
        json!({
            "objectType": "scenery_group",
            "id": "test.scenery_group.demo",
            "properties": {
                "entries": ["test.scenery.oak", "test.scenery.elm"],
                "entertainerCostumes": ["tiger", "unicorn"],
            },
        }),
        &source,
    );
    let ObjectData::SceneryGroup(group) = object.data() else { panic!("wrong kind") };
    assert_eq!(group.priority, super::scenery_group::DEFAULT_PRIORITY);
    assert_eq!(group.entries.len(), 2);
    assert!(group.has_costume(super::scenery_group::EntertainerCostume::Tiger));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Warning);
}

#[test]
fn test_ride_multiplier_too_high() {
    let source = StubImageSource { names: Vec::new() };
    let (_, diagnostics) = json_object(
        json!({
            "objectType": "ride",
            "id": "test.ride.coaster",
            "properties": {
                "type": "wooden_rc",
                "category": "rollercoaster",
                "ratingMultipler": { "excitement": 80, "intensity": 10 },
            },
        }),
        &source,
    );
    let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(messages, ["Excitement multiplier too high."]);
}

#[test]
fn test_ride_json() {
    let source = StubImageSource { names: Vec::new() };
    let (object, diagnostics) = json_object(
        json!({
            "objectType": "ride",
            "id": "test.ride.stall",
            "properties": {
                "type": ["food_stall"],
                "category": "stall",
                "sells": ["burger", "tshirt"],
                "carColours": [[["bright_red", "white"]]],
            },
        }),
        &source,
    );
    assert!(diagnostics.is_empty(), "{diagnostics:?}");
    let ObjectData::Ride(ride) = object.data() else { panic!("wrong kind") };
    assert!(ride.is_shop());
    assert_eq!(ride.shop_items, [crate::lookup::ShopItem::Burger, crate::lookup::ShopItem::TShirt]);
    assert_eq!(ride.preset_colours.len(), 1);
    assert_eq!(ride.preset_colours[0].trim, crate::lookup::Colour::White);
}

#[test]
fn test_ride_without_type() {
    let source = StubImageSource { names: Vec::new() };
    let (_, diagnostics) = json_object(
        json!({ "objectType": "ride", "id": "test.ride.none", "properties": {} }),
        &source,
    );
    assert_eq!(diagnostics[0].message, "No valid ride types specified.");
}

#[test]
fn test_json_only_kind_rejects_legacy_data() {
    let mut object = Object::new(ObjectDescriptor::from_identifier(
        ObjectType::Climate,
        "test.climate.demo",
    ));
    let mut ctx = ReadContext::new("test.climate.demo", false);
    object.read_legacy(&mut ctx, &mut Stream::new(&[])).unwrap();
    assert_eq!(errors(&ctx), ["Legacy format is not supported for climate."]);
    assert_eq!(ctx.diagnostics()[0].code, ObjectError::BadEncoding);
}

#[test]
fn test_peep_names_sorted() {
    let source = StubImageSource { names: Vec::new() };
    let (object, diagnostics) = json_object(
        json!({
            "objectType": "peep_names",
            "id": "test.peep_names.demo",
            "properties": { "givenNames": ["Zoe", "Adam", "Maya"], "surnames": ["B."] },
        }),
        &source,
    );
    assert!(diagnostics.is_empty());
    let ObjectData::PeepNames(names) = object.data() else { panic!("wrong kind") };
    assert_eq!(names.given_names, ["Adam", "Maya", "Zoe"]);
}

fn weights(pairs: &[(WeatherKind, u32)]) -> EnumMap<WeatherKind, u32> {
    let mut out = EnumMap::default();
    for &(kind, weight) in pairs {
        out[kind] = weight;
    }
    out
}

#[test]
fn test_normalize_exact() {
    let dist = climate::normalize(&weights(&[(WeatherKind::Sunny, 10), (WeatherKind::Rain, 13)]), 0)
        .unwrap();
    assert_eq!(dist.len(), WEATHER_DIST_SIZE);
    assert_eq!(dist.iter().filter(|&&k| k == WeatherKind::Sunny).count(), 10);
    assert_eq!(dist.iter().filter(|&&k| k == WeatherKind::Rain).count(), 13);
    assert_eq!(dist[0], WeatherKind::Sunny);
    assert_eq!(dist[22], WeatherKind::Rain);
}

#[test]
fn test_normalize_scales_and_rotates() {
    let dist = climate::normalize(&weights(&[(WeatherKind::Sunny, 20), (WeatherKind::Cloudy, 26)]), 3)
        .unwrap();
    assert_eq!(dist.iter().filter(|&&k| k == WeatherKind::Sunny).count(), 10);
    assert_eq!(dist[0], WeatherKind::Sunny);
    assert_eq!(dist[6], WeatherKind::Sunny);
    assert_eq!(dist[7], WeatherKind::Cloudy);
    assert_eq!(dist[22], WeatherKind::Sunny);
}

#[test]
fn test_normalize_empty_month() {
    assert_eq!(climate::normalize(&weights(&[]), 0), None);
}

#[test]
#[should_panic = "weather distribution must have exactly 23 slots"]
fn test_normalize_truncation_undercounts() {
    let _ = climate::normalize(&weights(&[(WeatherKind::Sunny, 1), (WeatherKind::Cloudy, 1)]), 0);
}

fn climate_manifest(months: &[Month]) -> serde_json::Value {
    let months: serde_json::Map<_, _> = months
        .iter()
        .map(|&month| {
            let name: &str = month.into();
            (name.to_string(), json!({
                "baseTemperature": 12,
                "randomBias": 3,
                "weather": { "sunny": 10, "partiallyCloudy": 13 },
            }))
        })
        .collect();
    json!({
        "objectType": "climate",
        "id": "test.climate.demo",
        "properties": { "months": months },
    })
}

#[test]
fn test_climate() {
    let source = StubImageSource { names: Vec::new() };
    let all: Vec<_> = Month::iter().collect();
    let (object, diagnostics) = json_object(climate_manifest(&all), &source);
    assert!(diagnostics.is_empty(), "{diagnostics:?}");

    let ObjectData::Climate(climate) = object.data() else { panic!("wrong kind") };
    assert_eq!(climate.distribution().len(), 8 * WEATHER_DIST_SIZE);
    assert_eq!(climate.base_temperature(Month::July), 12);
    assert_eq!(climate.random_bias(Month::July), 3);

    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..50 {
        let weather = climate.roll_weather(Month::May, &mut rng);
        assert!(matches!(weather, WeatherKind::Sunny | WeatherKind::PartiallyCloudy));
        let temperature = climate.roll_temperature(Month::May, &mut rng);
        assert!((12..=15).contains(&temperature));
    }
}

#[test]
fn test_climate_missing_month() {
    let source = StubImageSource { names: Vec::new() };
    let months: Vec<_> = Month::iter().filter(|&m| m != Month::June).collect();
    let (_, diagnostics) = json_object(climate_manifest(&months), &source);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "Month june is not defined.");
    assert_eq!(Climate::default().base_temperature(Month::June), 0);
}

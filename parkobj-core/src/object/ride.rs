//! Rides, shops and stalls.

use serde_json::Value;

use super::{Frame, Kind, Tables};
use crate::context::{ObjectError, ReadContext};
use crate::json::{self, FlagKey, Properties};
use crate::lookup::{Colour, RIDE_TYPE_NULL, RideCategory, RideType, SHOP_ITEM_NONE, ShopItem};
use crate::stream::{self, Stream};
use crate::strings::StringRole;

/// Number of ride type slots of a legacy record.
pub const MAX_RIDE_TYPES: usize = 3;
/// Number of car slots of a legacy record.
pub const MAX_CARS: usize = 4;
/// Size of one legacy car record. Car geometry is consumed by the renderer, not this loader.
const LEGACY_CAR_LEN: usize = 0x65;
/// Rating multipliers above this are rejected.
pub const MAX_RATING_MULTIPLIER: i8 = 75;

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct RideFlags: u32 {
        const VEHICLE_TAB_SCALE_HALF     = 1 << 0;
        const NO_INVERSIONS              = 1 << 1;
        const NO_BANKED_TRACK            = 1 << 2;
        const PLAY_DEPART_SOUND          = 1 << 3;
        const ALTERNATIVE_SWING_MODE_1   = 1 << 4;
        const ALTERNATIVE_ROTATION_MODE_1 = 1 << 5;
        const ALTERNATIVE_ROTATION_MODE_2 = 1 << 6;
        const DISABLE_WANDERING          = 1 << 7;
        const PLAY_SPLASH_SOUND          = 1 << 8;
        const PLAY_SPLASH_SOUND_SLIDE    = 1 << 9;
        const COVERED                    = 1 << 10;
        const LIMIT_AIRTIME_BONUS        = 1 << 11;
        const SEPARATE_RIDE_NAME         = 1 << 12;
        const DISABLE_BREAKDOWNS         = 1 << 13;
        const _ = !0;
    }
}

const FLAG_KEYS: &[FlagKey<RideFlags>] = &[
    FlagKey::normal("noInversions", RideFlags::NO_INVERSIONS),
    FlagKey::normal("noBanking", RideFlags::NO_BANKED_TRACK),
    FlagKey::normal("playDepartSound", RideFlags::PLAY_DEPART_SOUND),
    FlagKey::normal("playSplashSound", RideFlags::PLAY_SPLASH_SOUND),
    FlagKey::normal("playSplashSoundSlide", RideFlags::PLAY_SPLASH_SOUND_SLIDE),
    FlagKey::normal("hasShelter", RideFlags::COVERED),
    FlagKey::normal("limitAirTimeBonus", RideFlags::LIMIT_AIRTIME_BONUS),
    FlagKey::normal("disableBreakdown", RideFlags::DISABLE_BREAKDOWNS),
    FlagKey::inverted("allowWandering", RideFlags::DISABLE_WANDERING),
];

/// Body, trim and tertiary colour of a vehicle preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VehicleColour {
    pub body:     Colour,
    pub trim:     Colour,
    pub tertiary: Colour,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ride {
    pub flags:                  RideFlags,
    pub ride_types:             Vec<RideType>,
    pub min_cars_in_train:      u8,
    pub max_cars_in_train:      u8,
    pub cars_per_flat_ride:     u8,
    pub zero_cars:              u8,
    pub tab_car:                u8,
    pub default_car:            u8,
    pub excitement_multiplier:  i8,
    pub intensity_multiplier:   i8,
    pub nausea_multiplier:      i8,
    pub max_height:             u8,
    pub categories:             Vec<RideCategory>,
    pub shop_items:             Vec<ShopItem>,
    pub preset_colours:         Vec<VehicleColour>,
    /// Peep positions of each car, indexed like the car slots.
    pub peep_loading_positions: Vec<Vec<i8>>,
}

impl Ride {
    /// Whether the ride is a stall or shop rather than a ride with vehicles.
    #[must_use]
    pub fn is_shop(&self) -> bool { self.categories.contains(&RideCategory::Shop) }

    fn validate(&self, ctx: &mut ReadContext<'_>) {
        if self.ride_types.is_empty() {
            ctx.log_error(ObjectError::InvalidProperty, "No valid ride types specified.");
        }
        for (value, what) in [
            (self.excitement_multiplier, "Excitement"),
            (self.intensity_multiplier, "Intensity"),
            (self.nausea_multiplier, "Nausea"),
        ] {
            if value > MAX_RATING_MULTIPLIER {
                ctx.log_error(ObjectError::InvalidProperty, format!("{what} multiplier too high."));
            }
        }
    }
}

impl Kind for Ride {
    fn read_legacy(
        &mut self,
        ctx: &mut ReadContext<'_>,
        stream: &mut Stream<'_>,
        tables: &mut Tables<'_>,
    ) -> stream::Result<()> {
        stream.skip(8)?;
        self.flags = RideFlags::from_bits_retain(stream.read_u32()?);

        self.ride_types.clear();
        for code in stream.read_array::<MAX_RIDE_TYPES>()? {
            if code == RIDE_TYPE_NULL {
                continue;
            }
            match RideType::from_repr(code) {
                Some(ty) => self.ride_types.push(ty),
                None => ctx.log_error(ObjectError::InvalidProperty, format!("Unknown ride type {code}.")),
            }
        }

        self.min_cars_in_train = stream.read_u8()?;
        self.max_cars_in_train = stream.read_u8()?;
        self.cars_per_flat_ride = stream.read_u8()?;
        self.zero_cars = stream.read_u8()?;
        self.tab_car = stream.read_u8()?;
        self.default_car = stream.read_u8()?;
        // Front, second, third and rear car indices, then a pad byte.
        stream.skip(5)?;
        stream.skip(LEGACY_CAR_LEN * MAX_CARS)?;

        self.excitement_multiplier = stream.read_i8()?;
        self.intensity_multiplier = stream.read_i8()?;
        self.nausea_multiplier = stream.read_i8()?;
        self.max_height = stream.read_u8()?;
        // Enabled track pieces.
        stream.skip(8)?;

        self.categories = stream
            .read_array::<2>()?
            .into_iter()
            .filter(|&code| code != 0xFF)
            .filter_map(RideCategory::from_repr)
            .collect();
        self.shop_items = stream
            .read_array::<2>()?
            .into_iter()
            .filter(|&code| code != SHOP_ITEM_NONE)
            .filter_map(ShopItem::from_repr)
            .collect();

        tables.strings.read_legacy(ctx, stream, StringRole::Name)?;
        tables.strings.read_legacy(ctx, stream, StringRole::Description)?;
        tables.strings.read_legacy(ctx, stream, StringRole::Capacity)?;

        self.preset_colours = read_legacy_colours(stream)?;
        self.peep_loading_positions.clear();
        for _ in 0..MAX_CARS {
            let mut count = usize::from(stream.read_u8()?);
            if count == 0xFF {
                count = usize::from(stream.read_u16()?);
            }
            let positions = stream.read_bytes(count)?;
            self.peep_loading_positions
                .push(positions.iter().map(|&b| i8::from_le_bytes([b])).collect());
        }

        tables.images.read_legacy(ctx, stream)?;

        self.validate(ctx);
        Ok(())
    }

    fn read_json(&mut self, ctx: &mut ReadContext<'_>, props: &Properties, _: &mut Tables<'_>) {
        self.ride_types.clear();
        for name in json::string_list(props.get("type")) {
            match RideType::from_name(&name) {
                Some(ty) if self.ride_types.len() < MAX_RIDE_TYPES => self.ride_types.push(ty),
                Some(_) => ctx.log_warning(
                    ObjectError::InvalidProperty,
                    format!("Too many ride types, {name} is ignored."),
                ),
                None => ctx
                    .log_error(ObjectError::InvalidProperty, format!("Unknown ride type {name}.")),
            }
        }

        self.categories = json::string_list(props.get("category"))
            .iter()
            .filter_map(|name| name.parse().ok())
            .collect();
        self.shop_items =
            json::string_list(props.get("sells")).iter().filter_map(|name| name.parse().ok()).collect();

        self.min_cars_in_train = json::int(props, "minCarsPerTrain", 1);
        self.max_cars_in_train = json::int(props, "maxCarsPerTrain", 1);
        self.cars_per_flat_ride = json::int(props, "carsPerFlatRide", 0xFF);
        self.zero_cars = json::int(props, "numEmptyCars", 0);
        self.tab_car = json::int(props, "tabCar", 0);
        self.default_car = json::int(props, "defaultCar", 0);
        self.max_height = json::int(props, "maxHeight", 0);

        if let Some(ratings) = json::object(props, "ratingMultipler") {
            self.excitement_multiplier = json::int(ratings, "excitement", 0);
            self.intensity_multiplier = json::int(ratings, "intensity", 0);
            self.nausea_multiplier = json::int(ratings, "nausea", 0);
        }

        self.preset_colours = json::array(props, "carColours")
            .iter()
            .filter_map(|preset| read_json_colour(preset.as_array()?.first()?))
            .collect();

        self.flags = json::flags(props, FLAG_KEYS);
        if self.is_shop() {
            self.flags |= RideFlags::SEPARATE_RIDE_NAME;
        }

        self.validate(ctx);
    }

    fn preview(&self, _: i32, _: i32) -> Vec<Frame> { vec![Frame { index: 0, x: 0, y: 0 }] }
}

fn read_legacy_colours(stream: &mut Stream<'_>) -> stream::Result<Vec<VehicleColour>> {
    let mut count = stream.read_u8()?;
    if count == 0xFF {
        count = 32;
    }
    (0..count)
        .map(|_| {
            let [body, trim, tertiary] = stream.read_array::<3>()?;
            let colour = |code| Colour::from_repr(code & 0x1F).unwrap_or_default();
            Ok(VehicleColour { body: colour(body), trim: colour(trim), tertiary: colour(tertiary) })
        })
        .collect()
}

/// Reads `["body", "trim", "tertiary"]`. Missing entries are black.
fn read_json_colour(value: &Value) -> Option<VehicleColour> {
    let names = value.as_array()?;
    let colour = |index: usize| {
        names.get(index).and_then(Value::as_str).map_or(Colour::Black, |name| {
            Colour::from_name(name, Colour::Black)
        })
    };
    Some(VehicleColour { body: colour(0), trim: colour(1), tertiary: colour(2) })
}

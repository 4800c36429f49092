use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Number of months in a park year.
pub const NUM_CLIMATE_MONTHS: usize = 8;

/// Number of weather slots per month after normalization.
pub const WEATHER_DIST_SIZE: usize = 23;

/// `properties` of a climate object.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ClimateProperties {
    /// Weather of each month. Every month must be present.
    #[serde(default)]
    pub months: BTreeMap<Month, MonthWeather>,
}

/// Weather parameters of one month.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct MonthWeather {
    /// Temperature before random variation, in degrees Celsius.
    pub base_temperature:      i8,
    /// Upper bound of the random temperature increase.
    #[serde(default)]
    pub random_bias:           u8,
    /// Number of slots to rotate the expanded distribution left by.
    #[serde(default)]
    pub distribution_rotation: u8,
    /// Relative weight of each weather kind. Absent kinds have zero weight.
    #[serde(default)]
    pub weather:               BTreeMap<WeatherKind, u32>,
}

/// A month of the park year, which runs from March to October.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    enum_map::Enum,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum Month {
    /// The first month.
    March,
    /// The second month.
    April,
    /// The third month.
    May,
    /// The fourth month.
    June,
    /// The fifth month.
    July,
    /// The sixth month.
    August,
    /// The seventh month.
    September,
    /// The last month.
    October,
}

/// A kind of weather.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    enum_map::Enum,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum WeatherKind {
    /// Clear sky.
    Sunny,
    /// Some clouds.
    PartiallyCloudy,
    /// Overcast.
    Cloudy,
    /// Light rain.
    Rain,
    /// Heavy rain.
    HeavyRain,
    /// Thunderstorm.
    Thunder,
    /// Light snow.
    Snow,
    /// Heavy snow.
    HeavySnow,
    /// Blizzard.
    Blizzard,
}

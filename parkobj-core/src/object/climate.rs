//! Climates: per-month temperature and weather distributions.

use enum_map::EnumMap;
use rand::Rng;
use serde_json::Value;
use store::{ClimateProperties, Month, MonthWeather, NUM_CLIMATE_MONTHS, WEATHER_DIST_SIZE, WeatherKind};
use strum::IntoEnumIterator;

use super::{Kind, Tables};
use crate::context::{ObjectError, ReadContext};
use crate::json::Properties;

/// Weather parameters of one month after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClimateMonth {
    pub base_temperature: i8,
    pub random_bias:      u8,
    /// One weather kind per slot. Rolling weather picks a slot uniformly.
    pub distribution:     [WeatherKind; WEATHER_DIST_SIZE],
}

impl Default for ClimateMonth {
    fn default() -> Self {
        Self {
            base_temperature: 0,
            random_bias:      0,
            distribution:     [WeatherKind::Sunny; WEATHER_DIST_SIZE],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Climate {
    months: EnumMap<Month, ClimateMonth>,
}

impl Climate {
    #[must_use]
    pub fn month(&self, month: Month) -> &ClimateMonth { &self.months[month] }

    #[must_use]
    pub fn base_temperature(&self, month: Month) -> i8 { self.months[month].base_temperature }

    #[must_use]
    pub fn random_bias(&self, month: Month) -> u8 { self.months[month].random_bias }

    /// The distributions of all months concatenated, March first.
    #[must_use]
    pub fn distribution(&self) -> Vec<WeatherKind> {
        let out: Vec<_> =
            self.months.values().flat_map(|month| month.distribution.iter().copied()).collect();
        debug_assert_eq!(out.len(), NUM_CLIMATE_MONTHS * WEATHER_DIST_SIZE);
        out
    }

    /// Picks the weather of a day in `month`.
    pub fn roll_weather(&self, month: Month, rng: &mut impl Rng) -> WeatherKind {
        self.months[month].distribution[rng.random_range(0..WEATHER_DIST_SIZE)]
    }

    /// Picks the temperature of a day in `month`.
    pub fn roll_temperature(&self, month: Month, rng: &mut impl Rng) -> i8 {
        let month = &self.months[month];
        let bias = rng.random_range(0..=month.random_bias);
        month.base_temperature.saturating_add(i8::try_from(bias).unwrap_or(i8::MAX))
    }
}

impl Kind for Climate {
    fn read_json(&mut self, ctx: &mut ReadContext<'_>, props: &Properties, _: &mut Tables<'_>) {
        let props: ClimateProperties = match serde_json::from_value(Value::Object(props.clone())) {
            Ok(props) => props,
            Err(err) => {
                ctx.log_error(ObjectError::InvalidProperty, format!("Invalid climate: {err}"));
                return;
            }
        };

        for month in Month::iter() {
            let name: &str = month.into();
            let Some(weather) = props.months.get(&month) else {
                ctx.log_error(ObjectError::InvalidProperty, format!("Month {name} is not defined."));
                continue;
            };
            match read_month(weather) {
                Some(parsed) => self.months[month] = parsed,
                None => ctx.log_error(
                    ObjectError::InvalidProperty,
                    format!("Month {name} has no weather defined."),
                ),
            }
        }
    }
}

fn read_month(weather: &MonthWeather) -> Option<ClimateMonth> {
    let mut weights = EnumMap::<WeatherKind, u32>::default();
    for (&kind, &weight) in &weather.weather {
        weights[kind] = weight;
    }
    Some(ClimateMonth {
        base_temperature: weather.base_temperature,
        random_bias:      weather.random_bias,
        distribution:     normalize(&weights, weather.distribution_rotation)?,
    })
}

/// Rescales `weights` to [`WEATHER_DIST_SIZE`] slots and expands them into a slot table,
/// rotated left by `rotation` slots.
///
/// Weights are rescaled with truncating division.
/// Returns `None` if all weights are zero.
///
/// # Panics
/// Panics if the truncated weights do not add up to exactly [`WEATHER_DIST_SIZE`].
#[must_use]
pub fn normalize(
    weights: &EnumMap<WeatherKind, u32>,
    rotation: u8,
) -> Option<[WeatherKind; WEATHER_DIST_SIZE]> {
    let sum: u64 = weights.values().map(|&w| u64::from(w)).sum();
    if sum == 0 {
        return None;
    }

    let size = WEATHER_DIST_SIZE as u64;
    let scaled: EnumMap<WeatherKind, u64> =
        EnumMap::from_fn(|kind| u64::from(weights[kind]) * size / sum);
    let total: u64 = scaled.values().sum();
    assert_eq!(total, size, "weather distribution must have exactly {WEATHER_DIST_SIZE} slots");

    let mut out = [WeatherKind::Sunny; WEATHER_DIST_SIZE];
    let slots = scaled.iter().flat_map(|(kind, &count)| (0..count).map(move |_| kind));
    for (slot, kind) in out.iter_mut().zip(slots) {
        *slot = kind;
    }
    out.rotate_left(usize::from(rotation) % WEATHER_DIST_SIZE);
    Some(out)
}

//! Name tables shared by the format readers.

use std::str::FromStr;

#[cfg(test)]
mod tests;

/// Palette colour index.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::FromRepr,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Colour {
    #[default]
    Black,
    Grey,
    White,
    DarkPurple,
    LightPurple,
    BrightPurple,
    DarkBlue,
    LightBlue,
    IcyBlue,
    Teal,
    Aquamarine,
    SaturatedGreen,
    DarkGreen,
    MossGreen,
    BrightGreen,
    OliveGreen,
    DarkOliveGreen,
    BrightYellow,
    Yellow,
    DarkYellow,
    LightOrange,
    DarkOrange,
    LightBrown,
    SaturatedBrown,
    DarkBrown,
    SalmonPink,
    BordeauxRed,
    SaturatedRed,
    BrightRed,
    DarkPink,
    BrightPink,
    LightPink,
}

impl Colour {
    /// Returns `default` for names that are not in the table.
    #[must_use]
    pub fn from_name(name: &str, default: Self) -> Self { Self::from_str(name).unwrap_or(default) }

    #[must_use]
    pub fn name(self) -> &'static str { self.into() }
}

/// Mouse cursor shown while a tool is active.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::FromRepr,
)]
#[repr(u8)]
pub enum Cursor {
    #[default]
    #[strum(serialize = "CURSOR_ARROW")]
    Arrow,
    #[strum(serialize = "CURSOR_BLANK")]
    Blank,
    #[strum(serialize = "CURSOR_UP_ARROW")]
    UpArrow,
    #[strum(serialize = "CURSOR_UP_DOWN_ARROW")]
    UpDownArrow,
    #[strum(serialize = "CURSOR_HAND_POINT")]
    HandPoint,
    #[strum(serialize = "CURSOR_ZZZ")]
    Zzz,
    #[strum(serialize = "CURSOR_DIAGONAL_ARROWS")]
    DiagonalArrows,
    #[strum(serialize = "CURSOR_PICKER")]
    Picker,
    #[strum(serialize = "CURSOR_TREE_DOWN")]
    TreeDown,
    #[strum(serialize = "CURSOR_FOUNTAIN_DOWN")]
    FountainDown,
    #[strum(serialize = "CURSOR_STATUE_DOWN")]
    StatueDown,
    #[strum(serialize = "CURSOR_BENCH_DOWN")]
    BenchDown,
    #[strum(serialize = "CURSOR_CROSS_HAIR")]
    CrossHair,
    #[strum(serialize = "CURSOR_BIN_DOWN")]
    BinDown,
    #[strum(serialize = "CURSOR_LAMPPOST_DOWN")]
    LamppostDown,
    #[strum(serialize = "CURSOR_FENCE_DOWN")]
    FenceDown,
    #[strum(serialize = "CURSOR_FLOWER_DOWN")]
    FlowerDown,
    #[strum(serialize = "CURSOR_PATH_DOWN")]
    PathDown,
    #[strum(serialize = "CURSOR_DIG_DOWN")]
    DigDown,
    #[strum(serialize = "CURSOR_WATER_DOWN")]
    WaterDown,
    #[strum(serialize = "CURSOR_HOUSE_DOWN")]
    HouseDown,
    #[strum(serialize = "CURSOR_VOLCANO_DOWN")]
    VolcanoDown,
    #[strum(serialize = "CURSOR_WALK_DOWN")]
    WalkDown,
    #[strum(serialize = "CURSOR_PAINT_DOWN")]
    PaintDown,
    #[strum(serialize = "CURSOR_ENTRANCE_DOWN")]
    EntranceDown,
    #[strum(serialize = "CURSOR_HAND_OPEN")]
    HandOpen,
    #[strum(serialize = "CURSOR_HAND_CLOSED")]
    HandClosed,
}

impl Cursor {
    #[must_use]
    pub fn from_name(name: &str, default: Self) -> Self { Self::from_str(name).unwrap_or(default) }

    /// Legacy records store the cursor as a raw byte.
    #[must_use]
    pub fn from_legacy(code: u8, default: Self) -> Self { Self::from_repr(code).unwrap_or(default) }
}

/// Number of ride type slots, including unused ones.
pub const RIDE_TYPE_COUNT: u8 = 91;

/// Value of a ride type slot that is not used.
pub const RIDE_TYPE_NULL: u8 = 0xFF;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::IntoStaticStr, strum::FromRepr,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum RideType {
    SpiralRc             = 0,
    StandUpRc            = 1,
    SuspendedSwingingRc  = 2,
    InvertedRc           = 3,
    JuniorRc             = 4,
    MiniatureRailway     = 5,
    Monorail             = 6,
    MiniSuspendedRc      = 7,
    BoatHire             = 8,
    WoodenWildMouse      = 9,
    Steeplechase         = 10,
    CarRide              = 11,
    LaunchedFreefall     = 12,
    BobsleighRc          = 13,
    ObservationTower     = 14,
    LoopingRc            = 15,
    DinghySlide          = 16,
    MineTrainRc          = 17,
    Chairlift            = 18,
    CorkscrewRc          = 19,
    Maze                 = 20,
    SpiralSlide          = 21,
    GoKarts              = 22,
    LogFlume             = 23,
    RiverRapids          = 24,
    Dodgems              = 25,
    SwingingShip         = 26,
    SwingingInverterShip = 27,
    FoodStall            = 28,
    DrinkStall           = 30,
    Shop                 = 32,
    MerryGoRound         = 33,
    InformationKiosk     = 35,
    Toilets              = 36,
    FerrisWheel          = 37,
    MotionSimulator      = 38,
    #[strum(serialize = "3d_cinema")]
    ThreeDCinema         = 39,
    TopSpin              = 40,
    SpaceRings           = 41,
    ReverseFreefallRc    = 42,
    Lift                 = 43,
    VerticalDropRc       = 44,
    CashMachine          = 45,
    Twist                = 46,
    HauntedHouse         = 47,
    FirstAid             = 48,
    Circus               = 49,
    GhostTrain           = 50,
    TwisterRc            = 51,
    WoodenRc             = 52,
    SideFrictionRc       = 53,
    SteelWildMouse       = 54,
    MultiDimensionRc     = 55,
    FlyingRc             = 57,
    VirginiaReel         = 59,
    SplashBoats          = 60,
    MiniHelicopters      = 61,
    LayDownRc            = 62,
    SuspendedMonorail    = 63,
    ReverserRc           = 65,
    HeartlineTwisterRc   = 66,
    MiniGolf             = 67,
    GigaRc               = 68,
    RotoDrop             = 69,
    FlyingSaucers        = 70,
    CrookedHouse         = 71,
    MonorailCycles       = 72,
    CompactInvertedRc    = 73,
    WaterCoaster         = 74,
    AirPoweredVerticalRc = 75,
    InvertedHairpinRc    = 76,
    MagicCarpet          = 77,
    SubmarineRide        = 78,
    RiverRafts           = 79,
    Enterprise           = 81,
    InvertedImpulseRc    = 86,
    MiniRc               = 87,
    MineRide             = 88,
    LimLaunchedRc        = 90,
}

impl RideType {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> { Self::from_str(name).ok() }

    #[must_use]
    pub fn name(self) -> &'static str { self.into() }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::IntoStaticStr, strum::FromRepr,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum RideCategory {
    Transport     = 0,
    Gentle        = 1,
    Rollercoaster = 2,
    Thrill        = 3,
    Water         = 4,
    #[strum(serialize = "stall")]
    Shop          = 5,
}

/// Value of a shop item slot that sells nothing.
pub const SHOP_ITEM_NONE: u8 = 0xFF;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::IntoStaticStr, strum::FromRepr,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum ShopItem {
    Balloon          = 0,
    Toy              = 1,
    Map              = 2,
    Photo            = 3,
    Umbrella         = 4,
    Drink            = 5,
    Burger           = 6,
    Chips            = 7,
    IceCream         = 8,
    Candyfloss       = 9,
    EmptyCan         = 10,
    Rubbish          = 11,
    EmptyBurgerBox   = 12,
    Pizza            = 13,
    Voucher          = 14,
    Popcorn          = 15,
    HotDog           = 16,
    Tentacle         = 17,
    Hat              = 18,
    ToffeeApple      = 19,
    #[strum(serialize = "tshirt")]
    TShirt           = 20,
    Doughnut         = 21,
    Coffee           = 22,
    EmptyCup         = 23,
    Chicken          = 24,
    Lemonade         = 25,
    EmptyBox         = 26,
    EmptyBottle      = 27,
    #[strum(serialize = "photo2")]
    Photo2           = 32,
    #[strum(serialize = "photo3")]
    Photo3           = 33,
    #[strum(serialize = "photo4")]
    Photo4           = 34,
    Pretzel          = 35,
    Chocolate        = 36,
    IcedTea          = 37,
    FunnelCake       = 38,
    Sunglasses       = 39,
    BeefNoodles      = 40,
    FriedRiceNoodles = 41,
    WontonSoup       = 42,
    MeatballSoup     = 43,
    FruitJuice       = 44,
    SoybeanMilk      = 45,
    Sujeonggwa       = 46,
    SubSandwich      = 47,
    Cookie           = 48,
    EmptyBowlRed     = 49,
    EmptyDrinkCarton = 50,
    EmptyJuiceCup    = 51,
    RoastSausage     = 52,
    EmptyBowlBlue    = 53,
}

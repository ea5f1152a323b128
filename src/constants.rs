/// Life areas goals, journal tags and win states are grouped under
pub const LIFE_AREAS: &[&str] = &[
    "general",
    "finances",
    "fitness",
    "jiu-jitsu",
    "women",
    "attractiveness",
    "nutrition",
    "philosophy",
    "languages",
];

/// Default length of a custom timeframe when no end date is given
pub const CUSTOM_TIMEFRAME_DAYS: i64 = 30;

/// Decimal precision for display amounts
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

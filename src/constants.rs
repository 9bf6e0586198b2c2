// Player defaults
pub const DEFAULT_MAX_HP: i64 = 100;

// Hunt costs and stake limits
pub const HUNT_BASE_SP: i64 = 1;
pub const HUNT_EXTRA_SP_MAX: i64 = 5;

// Rest conversion rate
pub const REST_HP_PER_SP: i64 = 25;

// Progression constants
pub const XP_CURVE_STEP: i64 = 100;
pub const LEVEL_UP_MAX_HP_GAIN: i64 = 10;
pub const LEVEL_UP_HEAL: i64 = 10;

// Save system constants
pub const SAVE_FILE_NAME: &str = "grimoire.json";

// Admin capability configuration
pub const ADMIN_KEY_ENV: &str = "GRIMOIRE_ADMIN_KEY";
pub const ADMIN_NONINTERACTIVE_ENV: &str = "GRIMOIRE_ADMIN_NONINTERACTIVE";

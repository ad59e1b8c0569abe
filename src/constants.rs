// Catalog shape
pub const TOTAL_LEVELS: u32 = 50;
pub const WORDS_PER_LEVEL: u32 = 10;
pub const LEVELS_PER_WORLD: u32 = 10;
pub const OPTION_COUNT: usize = 4;

// Account progression
pub const XP_BASE: f64 = 200.0; // XP needed for level 1 -> 2 is 1 * XP_BASE
pub const XP_WIN_BASE: f64 = 100.0;
pub const XP_PER_STAR: f64 = 50.0;
pub const XP_MATCH_BONUS: f64 = 50.0;
pub const XP_LOSS: f64 = 20.0;

// Quiz combat
pub const PLAYER_START_HP: i32 = 100;
pub const WRONG_ANSWER_DAMAGE: i32 = 34; // three misses are lethal
pub const QUIZ_HIT_SCORE: u32 = 1000;
pub const QUIZ_COMBO_BONUS: u32 = 200;
pub const ENEMY_HP_STEP_PER_LEVEL: u32 = 5;
pub const QUIZ_RESOLVE_MS: u64 = 800;
pub const QUIZ_TWO_STAR_MISTAKES: u32 = 2;

// Match mode
pub const MATCH_MISTAKE_LIMIT: u32 = 8;
pub const MATCH_TWO_STAR_MISTAKES: u32 = 3;

// Versus mode
pub const VERSUS_START_HP: i32 = 100;
pub const VERSUS_ROUND_DAMAGE: i32 = 20;
pub const VERSUS_ROUND_SCORE: u32 = 10;
pub const VERSUS_TOAST_MS: u64 = 1500;
pub const VERSUS_DECK_SIZE: usize = 20;
pub const VERSUS_MANUAL_DECK_SIZE: usize = 15;

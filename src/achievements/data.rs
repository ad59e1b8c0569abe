//! Static achievement definitions.

use super::Condition;

/// Static definition of one achievement.
#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    pub id: &'static str,
    pub name: &'static str,
    pub desc: &'static str,
    pub icon: &'static str,
    pub condition: Condition,
}

const ALL_ACHIEVEMENTS: [AchievementDef; 12] = [
    AchievementDef {
        id: "first_clear",
        name: "Langkah Pertama",
        desc: "Tamatkan tahap pertama anda",
        icon: "🌱",
        condition: Condition::LevelsCleared(1),
    },
    AchievementDef {
        id: "perfect_clear",
        name: "Tanpa Cela",
        desc: "Tamatkan satu tahap dengan 3 bintang",
        icon: "✨",
        condition: Condition::PerfectLevels(1),
    },
    AchievementDef {
        id: "ten_levels",
        name: "Pengembara",
        desc: "Tamatkan 10 tahap",
        icon: "🗺️",
        condition: Condition::LevelsCleared(10),
    },
    AchievementDef {
        id: "world_one",
        name: "Wira Kampung",
        desc: "Tamatkan semua tahap Kampung Permulaan",
        icon: "🏡",
        condition: Condition::WorldCleared(1),
    },
    AchievementDef {
        id: "thirty_stars",
        name: "Pengumpul Bintang",
        desc: "Kumpul 30 bintang",
        icon: "⭐",
        condition: Condition::TotalStars(30),
    },
    AchievementDef {
        id: "hundred_stars",
        name: "Langit Berbintang",
        desc: "Kumpul 100 bintang",
        icon: "🌟",
        condition: Condition::TotalStars(100),
    },
    AchievementDef {
        id: "level_five",
        name: "Semakin Kuat",
        desc: "Capai aras pemain 5",
        icon: "💪",
        condition: Condition::PlayerLevel(5),
    },
    AchievementDef {
        id: "level_ten",
        name: "Pahlawan Kata",
        desc: "Capai aras pemain 10",
        icon: "🛡️",
        condition: Condition::PlayerLevel(10),
    },
    AchievementDef {
        id: "big_score",
        name: "Pemburu Mata",
        desc: "Dapat 10,000 mata dalam satu kuiz",
        icon: "🎯",
        condition: Condition::BestScore(10_000),
    },
    AchievementDef {
        id: "collector",
        name: "Buku Kesilapan",
        desc: "Kumpul 50 perkataan dalam bank kesilapan",
        icon: "📚",
        condition: Condition::MistakeBank(50),
    },
    AchievementDef {
        id: "all_unlocked",
        name: "Peneroka Penuh",
        desc: "Buka semua 50 tahap",
        icon: "🔓",
        condition: Condition::UnlockedLevel(50),
    },
    AchievementDef {
        id: "grandmaster",
        name: "Mahaguru Kata",
        desc: "3 bintang pada semua 50 tahap",
        icon: "👑",
        condition: Condition::PerfectLevels(50),
    },
];

/// The full catalog, in display order.
pub fn all_achievements() -> &'static [AchievementDef] {
    &ALL_ACHIEVEMENTS
}

//! Static achievement definitions and their unlock rules.

use super::types::{AchievementCategory, AchievementDef, AchievementId};
use crate::constants::{FIBONACCI_NUMBERS, MAX_LEVEL, PRIME_NUMBERS};
use crate::core::session::GameSession;

fn first_find(session: &GameSession) -> bool {
    session.stats().collected_count >= 1
}

fn quarter_club(session: &GameSession) -> bool {
    session.stats().collected_count >= 25
}

fn halfway_there(session: &GameSession) -> bool {
    session.stats().collected_count >= 50
}

fn home_stretch(session: &GameSession) -> bool {
    session.stats().collected_count >= 75
}

fn completionist(session: &GameSession) -> bool {
    session.is_complete()
}

fn hot_streak(session: &GameSession) -> bool {
    session.stats().best_streak >= 5
}

fn unstoppable(session: &GameSession) -> bool {
    session.stats().best_streak >= 10
}

fn prime_collector(session: &GameSession) -> bool {
    PRIME_NUMBERS
        .iter()
        .all(|&p| session.collection().item(p).map_or(false, |slot| slot.count > 0))
}

fn golden_spiral(session: &GameSession) -> bool {
    FIBONACCI_NUMBERS
        .iter()
        .all(|&f| session.collection().item(f).map_or(false, |slot| slot.count > 0))
}

fn rising_star(session: &GameSession) -> bool {
    !session.collection().leveled_items(1).is_empty()
}

fn centurion(session: &GameSession) -> bool {
    !session.collection().leveled_items(MAX_LEVEL).is_empty()
}

fn dedicated_roller(session: &GameSession) -> bool {
    session.stats().total_rolls >= 100
}

fn marathon_roller(session: &GameSession) -> bool {
    session.stats().total_rolls >= 1000
}

fn automated(session: &GameSession) -> bool {
    session.auto_roll_unlocked()
}

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // COLLECTION ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::FirstFind,
        name: "First Find",
        description: "Collect your first number",
        category: AchievementCategory::Collection,
        secret: false,
        icon: "🎲",
        predicate: first_find,
    },
    AchievementDef {
        id: AchievementId::QuarterClub,
        name: "Quarter Club",
        description: "Collect 25 numbers",
        category: AchievementCategory::Collection,
        secret: false,
        icon: "📈",
        predicate: quarter_club,
    },
    AchievementDef {
        id: AchievementId::HalfwayThere,
        name: "Halfway There",
        description: "Collect 50 numbers",
        category: AchievementCategory::Collection,
        secret: false,
        icon: "📈",
        predicate: halfway_there,
    },
    AchievementDef {
        id: AchievementId::HomeStretch,
        name: "Home Stretch",
        description: "Collect 75 numbers",
        category: AchievementCategory::Collection,
        secret: false,
        icon: "📈",
        predicate: home_stretch,
    },
    AchievementDef {
        id: AchievementId::Completionist,
        name: "Completionist",
        description: "Collect all 100 numbers",
        category: AchievementCategory::Collection,
        secret: false,
        icon: "🏆",
        predicate: completionist,
    },
    // ═══════════════════════════════════════════════════════════════
    // STREAK ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::HotStreak,
        name: "Hot Streak",
        description: "Draw 5 new numbers in a row",
        category: AchievementCategory::Streaks,
        secret: false,
        icon: "🔥",
        predicate: hot_streak,
    },
    AchievementDef {
        id: AchievementId::Unstoppable,
        name: "Unstoppable",
        description: "Draw 10 new numbers in a row",
        category: AchievementCategory::Streaks,
        secret: false,
        icon: "⚡",
        predicate: unstoppable,
    },
    // ═══════════════════════════════════════════════════════════════
    // MASTERY ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::PrimeCollector,
        name: "Prime Collector",
        description: "Collect every prime number",
        category: AchievementCategory::Mastery,
        secret: false,
        icon: "🧮",
        predicate: prime_collector,
    },
    AchievementDef {
        id: AchievementId::GoldenSpiral,
        name: "Golden Spiral",
        description: "Collect every Fibonacci number",
        category: AchievementCategory::Mastery,
        secret: true,
        icon: "🌀",
        predicate: golden_spiral,
    },
    AchievementDef {
        id: AchievementId::RisingStar,
        name: "Rising Star",
        description: "Level up your first number",
        category: AchievementCategory::Mastery,
        secret: false,
        icon: "⭐",
        predicate: rising_star,
    },
    AchievementDef {
        id: AchievementId::Centurion,
        name: "Centurion",
        description: "Raise a number to max level",
        category: AchievementCategory::Mastery,
        secret: false,
        icon: "💯",
        predicate: centurion,
    },
    // ═══════════════════════════════════════════════════════════════
    // DEDICATION ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::DedicatedRoller,
        name: "Dedicated Roller",
        description: "Make 100 draws",
        category: AchievementCategory::Dedication,
        secret: false,
        icon: "🎯",
        predicate: dedicated_roller,
    },
    AchievementDef {
        id: AchievementId::MarathonRoller,
        name: "Marathon Roller",
        description: "Make 1,000 draws",
        category: AchievementCategory::Dedication,
        secret: false,
        icon: "🏃",
        predicate: marathon_roller,
    },
    AchievementDef {
        id: AchievementId::Automated,
        name: "Automated",
        description: "Unlock auto drawing",
        category: AchievementCategory::Dedication,
        secret: false,
        icon: "🤖",
        predicate: automated,
    },
];

/// Get the definition for an achievement ID.
pub fn get_achievement_def(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|def| def.id == id)
}

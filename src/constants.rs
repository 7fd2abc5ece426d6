// Collection size constants
pub const ITEM_COUNT: u32 = 100;

// Leveling constants
pub const LEVEL_THRESHOLDS: [u32; 5] = [0, 10, 25, 50, 100];
pub const MAX_LEVEL: u8 = 4;

// Bias constants
pub const LEVEL_BIAS_BONUS: [f64; 5] = [0.0, 0.8, 2.0, 4.5, 8.0];
pub const PRIME_MULTIPLIER: f64 = 1.5;
pub const FIBONACCI_MULTIPLIER: f64 = 1.2;
pub const BIAS_CAP: f64 = 85.0;
pub const NEAR_MISS_RADIUS: u32 = 3;
pub const NEAR_MISS_BIAS_THRESHOLD: f64 = 50.0;

// Cooldown constants
pub const COOLDOWN_MANUAL_MS: u64 = 3000;
pub const COOLDOWN_AUTO_MS: u64 = 8000;
pub const COOLDOWN_FLOOR_PERCENT: u64 = 15;
pub const COOLDOWN_PER_DIV5_ITEM: u32 = 2;
pub const COOLDOWN_PER_LEVEL: u32 = 1;
pub const COOLDOWN_REDUCTION_CAP: u32 = 85;
pub const UNLOCK_AUTO_THRESHOLD: u32 = 10;

// Milestone constants
pub const COMPLETION_MILESTONES: [u32; 4] = [25, 50, 75, 100];
pub const RECORDED_MILESTONES: [u32; 16] = [
    10, 20, 30, 40, 50, 60, 70, 80, 85, 90, 93, 95, 97, 98, 99, 100,
];

// Primes in 1..=100
pub const PRIME_NUMBERS: [u32; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

// Fibonacci values in 1..=100. The sequence starts 1, 1 but membership
// counts the duplicate once.
pub const FIBONACCI_NUMBERS: [u32; 10] = [1, 2, 3, 5, 8, 13, 21, 34, 55, 89];

/// Whether an item index is prime.
pub fn is_prime(index: u32) -> bool {
    PRIME_NUMBERS.contains(&index)
}

/// Whether an item index is a Fibonacci number.
pub fn is_fibonacci(index: u32) -> bool {
    FIBONACCI_NUMBERS.contains(&index)
}

/// Whether an item index is divisible by 5.
pub fn is_divisible_by_5(index: u32) -> bool {
    index % 5 == 0
}

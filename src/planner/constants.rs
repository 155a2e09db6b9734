/// Hard cap on fixed-point rounds for every solver.
pub const MAX_ITERATIONS: u32 = 10;

/// Default convergence tolerance (currency units) for break-even and target-profit solves.
pub const DEFAULT_TOLERANCE: f64 = 100.0;

/// Default capital-delta tolerance (currency units) for profit ladder rows.
pub const DEFAULT_LADDER_TOLERANCE: f64 = 1.0;

/// Reserve fund added on top of fixed + ingredient costs (10%).
pub const RESERVE_RATE: f64 = 0.10;

/// Profit percentages compared in the profit ladder.
pub const DEFAULT_LADDER_PERCENTAGES: [u32; 7] = [10, 20, 30, 40, 50, 60, 70];

// ─────────────────────────────────────────────────────────────────────────────
// Sales mix
// ─────────────────────────────────────────────────────────────────────────────

/// Proportions are expected to total this many percent.
pub const PROPORTION_TARGET: f64 = 100.0;

/// Slack allowed before a proportion total is reported.
pub const PROPORTION_EPSILON: f64 = 0.01;

/// Jaro-Winkler score above which a typed name is offered as a menu item match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

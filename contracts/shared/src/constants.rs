//! Constants used by the voting contract
//!
//! Defaults for the ballot configuration and the storage TTL values.

// ===== Ballot Defaults =====

/// Default maximum length of a proposal description (bytes)
pub const MAX_DESCRIPTION_LEN: u32 = 256;

/// Default voter limit (0 = unlimited)
pub const DEFAULT_MAX_VOTERS: u32 = 0;

/// Default proposal limit (0 = unlimited)
pub const DEFAULT_MAX_PROPOSALS: u32 = 0;

// ===== Ledger TTL =====

/// Ledgers per day at ~5s per ledger
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// TTL a ballot entry is extended to on every write (30 days)
pub const BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// Remaining TTL below which a write extends the entry
pub const LIFETIME_THRESHOLD: u32 = BUMP_AMOUNT - DAY_IN_LEDGERS;

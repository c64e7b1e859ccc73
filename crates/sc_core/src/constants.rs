//! Fixed system parameters. None of these are runtime-configurable.

/// Contingency fee as a fraction of the counterparty's economic benefit.
pub const FEE_RATE: f64 = 0.03;

/// Maximum payable fee, in smallest currency units (5억).
pub const FEE_CAP: u64 = 500_000_000;

/// Minimum benefit ratio (percent) for the fee arrangement to qualify.
pub const THRESHOLD_RATIO: f64 = 60.0;

/// Smallest-unit value of one major display unit (억).
pub const MAJOR_UNIT_SCALE: u64 = 100_000_000;

/// Smallest-unit value of one sub display unit (천만).
pub const SUB_UNIT_SCALE: u64 = 10_000_000;

/// Human-entry ceiling on the fee field, in major units.
pub const FEE_MAJOR_MAX: u32 = 5;

/// Human-entry ceiling on the total field, in major units.
pub const TOTAL_MAJOR_MAX: u32 = 999;

/// Sub-unit fields hold a single digit.
pub const SUB_UNIT_MAX: u32 = 9;

/// Win-ratio quick picks offered next to the free ratio entry.
pub const RATIO_PRESETS: [u8; 6] = [0, 10, 20, 30, 40, 50];

/// Upper bound on the win ratio (exclusive).
pub const RATIO_MAX_EXCLUSIVE: f64 = 100.0;

pub const MAJOR_UNIT_LABEL: &str = "억";
pub const SUB_UNIT_LABEL: &str = "천만";
pub const CURRENCY_LABEL: &str = "원";

/// Earliest supported year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Latest supported year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each month for a common year (index 0 is unused, months are 1-indexed)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Days in one 400-year Gregorian era
pub(crate) const DAYS_PER_ERA: i64 = 146_097;
/// Offset from 0000-03-01 to 1970-01-01 in days
pub(crate) const EPOCH_SHIFT: i64 = 719_468;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Currency symbol used when displaying amounts
pub const CURRENCY_SYMBOL: char = '$';
/// Decimal point for amounts
pub const DECIMAL_POINT: char = '.';
/// Minor units (cents) per major unit
pub const CENTS_PER_UNIT: u64 = 100;

/// Length of the default availability window, in days
pub const DEFAULT_BLOCK_WINDOW_DAYS: u32 = 25;
/// Every n-th day in the default availability window is blocked
pub const DEFAULT_BLOCK_STRIDE: u32 = 5;

//! Token amounts are plain `U256` values with 18 implied decimals.

use {
    crate::{error::PotError, math::common::*},
    alloc::string::{String, ToString},
    odra::casper_types::U256,
};

/// Render a token amount with all 18 decimals, e.g. `1.500000000000000000`.
pub fn format_wad(amount: U256) -> String {
    let mut scaled_val = amount.to_string();
    if scaled_val.len() <= WAD_SCALE {
        let padding = "0".repeat(WAD_SCALE - scaled_val.len());
        scaled_val.insert_str(0, &padding);
        scaled_val.insert_str(0, "0.");
    } else {
        scaled_val.insert(scaled_val.len() - WAD_SCALE, '.');
    }
    scaled_val
}

/// Parse a decimal token amount such as `"10"` or `"0.488088"`.
///
/// More than 18 fractional digits is rejected rather than rounded.
pub fn parse_wad(input: &str) -> Result<U256, PotError> {
    let (whole, fraction) = match input.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (input, ""),
    };
    if (whole.is_empty() && fraction.is_empty()) || fraction.len() > WAD_SCALE {
        return Err(PotError::InvalidParam);
    }
    if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return Err(PotError::InvalidParam);
    }

    let mut digits = String::with_capacity(whole.len() + WAD_SCALE);
    digits.push_str(whole);
    digits.push_str(fraction);
    for _ in fraction.len()..WAD_SCALE {
        digits.push('0');
    }
    U256::from_dec_str(&digits).map_err(|_| PotError::MathOverflow)
}

//! Ticket pricing by holder age.

/// Price for children up to and including this age.
pub const CHILD_MAX_AGE: u32 = 12;
/// Price for adults up to and including this age; older holders pay the senior price.
pub const ADULT_MAX_AGE: u32 = 65;

pub const CHILD_PRICE: u32 = 10;
pub const ADULT_PRICE: u32 = 15;
pub const SENIOR_PRICE: u32 = 5;

/// Ticket price in whole dollars for a holder of the given age.
pub fn ticket_price(age: u32) -> u32 {
    if age <= CHILD_MAX_AGE {
        CHILD_PRICE
    } else if age <= ADULT_MAX_AGE {
        ADULT_PRICE
    } else {
        SENIOR_PRICE
    }
}

/// Parse free-form age input.
///
/// Leading whitespace and a sign are tolerated and anything after the leading
/// digits is ignored. Input without leading digits, and negative values, yield 0.
pub fn parse_age(input: &str) -> u32 {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if negative || digits.is_empty() {
        return 0;
    }

    digits.parse().unwrap_or(u32::MAX)
}

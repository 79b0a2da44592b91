use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::display::format_price;
use crate::error::Result;
use crate::pricing::{parse_age, ticket_price};

/// Show the ticket price for an age, parsed the way the purchase form parses it.
pub fn cmd_price(age: &str, json: bool) -> Result<()> {
    let parsed = parse_age(age);
    let price = ticket_price(parsed);

    CommandOutput::new(json!({
        "input": age,
        "age": parsed,
        "price": price,
    }))
    .with_text(format!(
        "Age {}: {}",
        parsed,
        format_price(f64::from(price)).green()
    ))
    .print(json)
}

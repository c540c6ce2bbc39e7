//! Writing JSON to stdout.

use anyhow::Result;
use serde_json::Value;

use skill_response_types::response::Response;

/// Print a response, pretty or compact.
pub fn print_response(response: &Response, pretty: bool) -> Result<()> {
    let json = if pretty {
        response.to_json_pretty()?
    } else {
        response.to_json()?
    };
    println!("{json}");
    Ok(())
}

pub fn print_value(value: &Value, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

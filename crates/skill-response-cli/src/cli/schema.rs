//! `skresp schema` -- print the response JSON schema.

use anyhow::Result;

use skill_response_types::response::response_schema;

use crate::output::print_value;

pub fn run(pretty: bool) -> Result<()> {
    let schema = serde_json::to_value(response_schema())?;
    print_value(&schema, pretty)
}

//! `skresp render` -- build a response from a template file.

use std::path::Path;

use anyhow::{Context, Result};

use skill_response_core::template::apply_template;
use skill_response_types::config::CliConfig;
use skill_response_types::response::Response;
use skill_response_types::template::{ResponseTemplate, TemplateFormat};

use crate::config::seed_builder;
use crate::output::print_response;

/// Handle `skresp render`.
pub fn run(path: &Path, config: &CliConfig, pretty: bool) -> Result<()> {
    let response = render_file(path, config)?;
    print_response(&response, pretty)
}

/// Load the template at `path` and render it on top of the configured defaults.
pub fn render_file(path: &Path, config: &CliConfig) -> Result<Response> {
    let template = load_template(path)?;
    let mut builder = seed_builder(config);
    apply_template(&template, &mut builder)
        .with_context(|| format!("Failed to apply template {}", path.display()))?;
    Ok(builder.build())
}

fn load_template(path: &Path) -> Result<ResponseTemplate> {
    let format = TemplateFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read template {}", path.display()))?;
    let template = ResponseTemplate::parse(&content, format)
        .with_context(|| format!("Invalid template {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?format, "loaded template");
    Ok(template)
}

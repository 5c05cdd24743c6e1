//! Inventory rendering.
//!
//! The template is a Jinja2-style file with `{{ primary_ip }}` and
//! `{{ secondary_ip }}` placeholders; the rendered result is written to
//! the fixed-name inventory artifact the playbook run points at.

use std::path::PathBuf;

use tera::{Context, Tera};
use tracing::info;

use pgpick_core::{ProvisionConfig, RankedPair};

use crate::error::ProvisionError;

/// Render the inventory template for the selected pair and write the
/// artifact. Returns the path of the written inventory.
pub fn render_inventory(
    pair: &RankedPair,
    config: &ProvisionConfig,
) -> Result<PathBuf, ProvisionError> {
    let template = std::fs::read_to_string(&config.template_path).map_err(|source| {
        ProvisionError::TemplateRead {
            path: config.template_path.clone(),
            source,
        }
    })?;

    let mut context = Context::new();
    context.insert("primary_ip", &pair.primary);
    context.insert("secondary_ip", &pair.secondary);
    let rendered = Tera::one_off(&template, &context, false)?;

    std::fs::write(&config.inventory_path, rendered).map_err(|source| {
        ProvisionError::InventoryWrite {
            path: config.inventory_path.clone(),
            source,
        }
    })?;

    info!(path = %config.inventory_path.display(), "inventory rendered");
    Ok(config.inventory_path.clone())
}

//! Human-readable rendering for the CLI: resource tables, schema trees and
//! diagnostics.

use tabled::settings::Style;
use tabled::{Table, Tabled};
use termtree::Tree;

use crate::provider::PROVIDER_TYPE_NAME;
use crate::resources::ResourceDescriptor;
use crate::terraform::{Attribute, Diagnostics, Mode, Schema};

#[derive(Tabled)]
struct ResourceRow {
    #[tabled(rename = "TYPE")]
    type_name: String,
    #[tabled(rename = "API")]
    api_version: String,
    #[tabled(rename = "COLLECTION")]
    collection_path: String,
}

pub fn resources_table(descriptors: &[ResourceDescriptor]) -> String {
    let rows = descriptors.iter().map(|descriptor| ResourceRow {
        type_name: format!("{}_{}", PROVIDER_TYPE_NAME, descriptor.type_name),
        api_version: descriptor.api_version.to_string(),
        collection_path: format!("/{}", descriptor.collection_path),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn schema_tree(type_name: &str, schema: &Schema) -> Tree<String> {
    Tree::new(type_name.to_string()).with_leaves(schema.attributes.iter().map(attribute_tree))
}

fn attribute_tree(attribute: &Attribute) -> Tree<String> {
    let mode = match attribute.mode {
        Mode::Required => "required",
        Mode::Optional => "optional",
        Mode::Computed => "computed",
    };
    let mut label = format!("{} ({}, {})", attribute.name, attribute.type_label(), mode);
    if !attribute.allowed_values.is_empty() {
        label.push_str(&format!(" [{}]", attribute.allowed_values.join(" | ")));
    }
    Tree::new(label).with_leaves(attribute.nested().iter().map(attribute_tree))
}

/// One block per diagnostic, `Error: summary` followed by the indented detail.
pub fn render_diagnostics(diagnostics: &Diagnostics) -> String {
    diagnostics
        .iter()
        .map(|d| {
            if d.detail.is_empty() {
                format!("{}: {}\n", d.severity, d.summary)
            } else {
                format!("{}: {}\n\n  {}\n", d.severity, d.summary, d.detail)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::registry;

    #[test]
    fn test_resources_table_lists_every_type() {
        let table = resources_table(&registry());
        assert!(table.contains("TYPE"));
        assert!(
            table.contains("microsoft365_graph_beta_device_and_app_management_assignment_filter")
        );
        assert!(table.contains("/deviceManagement/virtualEndpoint/provisioningPolicies"));
        assert!(table.contains("v1.0"));
        assert!(table.contains("beta"));
    }

    #[test]
    fn test_schema_tree_shows_nesting_and_enums() {
        let schema = Schema {
            description: "test",
            attributes: vec![
                Attribute::string("state", Mode::Optional, "").one_of(&["on", "off"]),
                Attribute::single_nested(
                    "settings",
                    Mode::Optional,
                    "",
                    vec![Attribute::bool("is_enabled", Mode::Required, "")],
                ),
            ],
        };
        let rendered = schema_tree("microsoft365_example", &schema).to_string();
        assert!(rendered.starts_with("microsoft365_example"));
        assert!(rendered.contains("state (string, optional) [on | off]"));
        assert!(rendered.contains("settings (object, optional)"));
        assert!(rendered.contains("is_enabled (bool, required)"));
    }

    #[test]
    fn test_render_diagnostics() {
        let mut diags = Diagnostics::new();
        diags.add_warning("Policy not found", "Removing from state.");
        diags.add_error("Error updating policy", "");
        let rendered = render_diagnostics(&diags);
        assert!(rendered.contains("Warning: Policy not found\n\n  Removing from state."));
        assert!(rendered.contains("Error: Error updating policy"));
    }
}

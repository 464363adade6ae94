use std::path::Path;

use crate::cli::args::{ApplyArgs, Cli, Command, ImportArgs, InstanceArgs};
use crate::config::ProviderConfig;
use crate::error::M365Error;
use crate::output;
use crate::provider::{M365Provider, strip_provider_prefix};
use crate::resource::ResourceResponse;
use crate::resources::{self, ResourceError};
use crate::terraform::{Diagnostics, StateFile};

/// Runs one CLI invocation. Resource failures come back as error diagnostics;
/// `Err` is reserved for problems outside a resource operation.
pub async fn run(cli: Cli) -> Result<Diagnostics, M365Error> {
    match &cli.command {
        Command::Resources => {
            println!("{}", output::resources_table(&resources::registry()));
            Ok(Diagnostics::new())
        }
        Command::Schema { resource_type } => {
            let resource = resources::new_resource(strip_provider_prefix(resource_type)?)?;
            println!("{}", output::schema_tree(resource_type, &resource.schema()));
            Ok(Diagnostics::new())
        }
        _ => {
            let mut provider = M365Provider::new(clap::crate_version!());
            let diags = provider.configure(&ProviderConfig::from(&cli.global));
            if diags.has_error() {
                return Ok(diags);
            }
            execute(&provider, cli.command, &cli.global.state).await
        }
    }
}

/// Runs a state-changing command against a configured provider and persists
/// the resulting state.
pub async fn execute(
    provider: &M365Provider,
    command: Command,
    state_path: &Path,
) -> Result<Diagnostics, M365Error> {
    let mut state = StateFile::load(state_path)?;

    let (instance, response) = match command {
        Command::Apply(ApplyArgs { instance, config }) => {
            let plan = load_plan(&config, &instance.resource_type)?;
            let resource = provider.resource(&instance.resource_type)?;
            let response = match state.get(&instance.resource_type, &instance.name) {
                Some(prior) => {
                    tracing::info!(
                        resource_type = %instance.resource_type,
                        name = %instance.name,
                        "updating"
                    );
                    resource.update(&plan, &prior.attributes).await
                }
                None => {
                    tracing::info!(
                        resource_type = %instance.resource_type,
                        name = %instance.name,
                        "creating"
                    );
                    resource.create(&plan).await
                }
            };
            (instance, response)
        }
        Command::Refresh(instance) => {
            let prior = prior_attributes(&state, &instance)?;
            let resource = provider.resource(&instance.resource_type)?;
            let response = resource.read(&prior).await;
            (instance, response)
        }
        Command::Destroy(instance) => {
            let prior = prior_attributes(&state, &instance)?;
            let resource = provider.resource(&instance.resource_type)?;
            let response = resource.delete(&prior).await;
            (instance, response)
        }
        Command::Import(ImportArgs { instance, id }) => {
            let resource = provider.resource(&instance.resource_type)?;
            let mut response = resource.import_state(&id);
            if let (Some(attributes), false) =
                (response.state.clone(), response.diagnostics.has_error())
            {
                let read = resource.read(&attributes).await;
                response.state = read.state;
                response.diagnostics.append(read.diagnostics);
                if response.state.is_none() {
                    response.diagnostics.add_error(
                        "Cannot import non-existent remote object",
                        format!("No {} exists with ID {}.", instance.resource_type, id),
                    );
                }
            }
            // A failed import leaves any existing instance under that name alone.
            if response.diagnostics.has_error() {
                return Ok(response.diagnostics);
            }
            (instance, response)
        }
        Command::Resources | Command::Schema { .. } => return Ok(Diagnostics::new()),
    };

    apply_response(&mut state, &instance, &response);
    state.save(state_path)?;
    Ok(response.diagnostics)
}

fn apply_response(state: &mut StateFile, instance: &InstanceArgs, response: &ResourceResponse) {
    match &response.state {
        Some(attributes) => {
            state.upsert(&instance.resource_type, &instance.name, attributes.clone());
        }
        None => {
            if state.remove(&instance.resource_type, &instance.name).is_some() {
                tracing::info!(
                    resource_type = %instance.resource_type,
                    name = %instance.name,
                    "removed from state"
                );
            }
        }
    }
}

fn prior_attributes(
    state: &StateFile,
    instance: &InstanceArgs,
) -> Result<serde_json::Value, M365Error> {
    state
        .get(&instance.resource_type, &instance.name)
        .map(|prior| prior.attributes.clone())
        .ok_or_else(|| M365Error::MissingInstance {
            resource_type: instance.resource_type.clone(),
            name: instance.name.clone(),
        })
}

fn load_plan(path: &Path, resource_type: &str) -> Result<serde_json::Value, M365Error> {
    let contents = std::fs::read_to_string(path)?;
    let plan: serde_json::Value = serde_json::from_str(&contents)?;
    if !plan.is_object() {
        return Err(ResourceError::InvalidDocument {
            what: "configuration",
            resource_type: resource_type.to_string(),
            message: format!("{} must contain a JSON object", path.display()),
        }
        .into());
    }
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_plan_rejects_non_object() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2, 3]").unwrap();
        let err = load_plan(file.path(), "microsoft365_graph_cloud_pc_provisioning_policy")
            .unwrap_err();
        assert!(matches!(
            err,
            M365Error::Resource(ResourceError::InvalidDocument { what: "configuration", .. })
        ));
    }

    #[test]
    fn test_load_plan_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = load_plan(file.path(), "x").unwrap_err();
        assert!(matches!(err, M365Error::Json(_)));
    }

    #[test]
    fn test_prior_attributes_missing_instance() {
        let state = StateFile::default();
        let instance = InstanceArgs {
            resource_type: "microsoft365_graph_cloud_pc_provisioning_policy".to_string(),
            name: "finance".to_string(),
        };
        assert!(matches!(
            prior_attributes(&state, &instance),
            Err(M365Error::MissingInstance { .. })
        ));
    }

    #[test]
    fn test_apply_response_upserts_and_removes() {
        let mut state = StateFile::default();
        let instance = InstanceArgs {
            resource_type: "microsoft365_graph_cloud_pc_provisioning_policy".to_string(),
            name: "finance".to_string(),
        };

        let created = ResourceResponse {
            state: Some(serde_json::json!({ "id": "abc" })),
            diagnostics: Diagnostics::new(),
        };
        apply_response(&mut state, &instance, &created);
        assert_eq!(
            state.get(&instance.resource_type, "finance").unwrap().attributes["id"],
            "abc"
        );

        let deleted = ResourceResponse {
            state: None,
            diagnostics: Diagnostics::new(),
        };
        apply_response(&mut state, &instance, &deleted);
        assert!(state.get(&instance.resource_type, "finance").is_none());
    }
}

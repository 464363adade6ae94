use super::model::*;
use super::types::*;
use crate::mapping::{
    flatten_enum, flatten_enum_list, flatten_flags, flatten_object, flatten_string,
};
use crate::terraform::ListValue;

pub(super) fn map_remote_state(
    data: &mut ConditionalAccessPolicyModel,
    remote: &ConditionalAccessPolicy,
) {
    data.display_name = flatten_string(&remote.display_name);
    data.description = flatten_string(&remote.description);
    data.state = flatten_enum(&remote.state);
    data.created_date_time = flatten_string(&remote.created_date_time);
    data.modified_date_time = flatten_string(&remote.modified_date_time);
    data.conditions = flatten_object(&remote.conditions, map_conditions);
    data.grant_controls = flatten_object(&remote.grant_controls, map_grant_controls);
    data.session_controls = flatten_object(&remote.session_controls, map_session_controls);
}

fn strings(remote: &Option<Vec<String>>) -> ListValue<String> {
    remote.clone().into()
}

fn map_conditions(remote: &ConditionalAccessConditionSet) -> ConditionsModel {
    ConditionsModel {
        applications: flatten_object(&remote.applications, |apps| ApplicationsModel {
            include_applications: strings(&apps.include_applications),
            exclude_applications: strings(&apps.exclude_applications),
            include_user_actions: strings(&apps.include_user_actions),
            include_authentication_context_class_references: strings(
                &apps.include_authentication_context_class_references,
            ),
        }),
        users: flatten_object(&remote.users, map_users),
        client_applications: flatten_object(&remote.client_applications, |clients| {
            ClientApplicationsModel {
                include_service_principals: strings(&clients.include_service_principals),
                exclude_service_principals: strings(&clients.exclude_service_principals),
            }
        }),
        client_app_types: flatten_enum_list(&remote.client_app_types),
        devices: flatten_object(&remote.devices, |devices| DevicesModel {
            include_devices: strings(&devices.include_devices),
            exclude_devices: strings(&devices.exclude_devices),
            device_filter: flatten_object(&devices.device_filter, |filter| DeviceFilterModel {
                mode: flatten_enum(&filter.mode),
                rule: flatten_string(&filter.rule),
            }),
        }),
        device_states: flatten_object(&remote.device_states, |states| DeviceStatesModel {
            include_states: strings(&states.include_states),
            exclude_states: strings(&states.exclude_states),
        }),
        locations: flatten_object(&remote.locations, |locations| LocationsModel {
            include_locations: strings(&locations.include_locations),
            exclude_locations: strings(&locations.exclude_locations),
        }),
        platforms: flatten_object(&remote.platforms, |platforms| PlatformsModel {
            include_platforms: flatten_enum_list(&platforms.include_platforms),
            exclude_platforms: flatten_enum_list(&platforms.exclude_platforms),
        }),
        authentication_flows: flatten_object(&remote.authentication_flows, |flows| {
            AuthenticationFlowsModel {
                transfer_methods: flatten_flags(&flows.transfer_methods),
            }
        }),
        insider_risk_levels: flatten_flags(&remote.insider_risk_levels),
        sign_in_risk_levels: flatten_enum_list(&remote.sign_in_risk_levels),
        user_risk_levels: flatten_enum_list(&remote.user_risk_levels),
        service_principal_risk_levels: flatten_enum_list(&remote.service_principal_risk_levels),
    }
}

fn map_users(remote: &ConditionalAccessUsers) -> UsersModel {
    UsersModel {
        include_users: strings(&remote.include_users),
        exclude_users: strings(&remote.exclude_users),
        include_groups: strings(&remote.include_groups),
        exclude_groups: strings(&remote.exclude_groups),
        include_roles: strings(&remote.include_roles),
        exclude_roles: strings(&remote.exclude_roles),
        include_guests_or_external_users: flatten_object(
            &remote.include_guests_or_external_users,
            map_guests_or_external_users,
        ),
        exclude_guests_or_external_users: flatten_object(
            &remote.exclude_guests_or_external_users,
            map_guests_or_external_users,
        ),
    }
}

fn map_guests_or_external_users(
    remote: &ConditionalAccessGuestsOrExternalUsers,
) -> GuestsOrExternalUsersModel {
    GuestsOrExternalUsersModel {
        guest_or_external_user_types: flatten_flags(&remote.guest_or_external_user_types),
        external_tenants: flatten_object(&remote.external_tenants, |tenants| ExternalTenantsModel {
            membership_kind: flatten_enum(&tenants.membership_kind),
            members: strings(&tenants.members),
        }),
    }
}

fn map_grant_controls(remote: &ConditionalAccessGrantControls) -> GrantControlsModel {
    GrantControlsModel {
        operator: flatten_enum(&remote.operator),
        built_in_controls: flatten_enum_list(&remote.built_in_controls),
        custom_authentication_factors: strings(&remote.custom_authentication_factors),
        terms_of_use: strings(&remote.terms_of_use),
        authentication_strength: flatten_object(&remote.authentication_strength, |strength| {
            AuthenticationStrengthModel {
                id: flatten_string(&strength.id),
                display_name: flatten_string(&strength.display_name),
                description: flatten_string(&strength.description),
                policy_type: flatten_string(&strength.policy_type),
                requirements_satisfied: flatten_string(&strength.requirements_satisfied),
                allowed_combinations: strings(&strength.allowed_combinations),
            }
        }),
    }
}

fn map_session_controls(remote: &ConditionalAccessSessionControls) -> SessionControlsModel {
    let toggle = |control: &SessionControlToggle| SessionControlToggleModel {
        is_enabled: control.is_enabled.into(),
    };

    SessionControlsModel {
        application_enforced_restrictions: flatten_object(
            &remote.application_enforced_restrictions,
            toggle,
        ),
        cloud_app_security: flatten_object(&remote.cloud_app_security, |control| {
            CloudAppSecurityModel {
                is_enabled: control.is_enabled.into(),
                cloud_app_security_type: flatten_enum(&control.cloud_app_security_type),
            }
        }),
        continuous_access_evaluation: flatten_object(
            &remote.continuous_access_evaluation,
            |control| ContinuousAccessEvaluationModel {
                mode: flatten_enum(&control.mode),
            },
        ),
        persistent_browser: flatten_object(&remote.persistent_browser, |control| {
            PersistentBrowserModel {
                is_enabled: control.is_enabled.into(),
                mode: flatten_enum(&control.mode),
            }
        }),
        sign_in_frequency: flatten_object(&remote.sign_in_frequency, |control| {
            SignInFrequencyModel {
                is_enabled: control.is_enabled.into(),
                frequency_type: flatten_enum(&control.frequency_type),
                value: control.value.map(i64::from).into(),
                frequency_interval: flatten_enum(&control.frequency_interval),
                authentication_type: flatten_enum(&control.authentication_type),
            }
        }),
        secure_sign_in_session: flatten_object(&remote.secure_sign_in_session, toggle),
        disable_resilience_defaults: remote.disable_resilience_defaults.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Flags;
    use crate::terraform::Value;

    #[test]
    fn test_absent_nested_objects_become_null() {
        let mut data = ConditionalAccessPolicyModel {
            id: "policy-1".into(),
            grant_controls: Value::Known(GrantControlsModel::default()),
            ..Default::default()
        };
        let remote = ConditionalAccessPolicy {
            display_name: Some("Block legacy auth".to_string()),
            ..Default::default()
        };

        map_remote_state(&mut data, &remote);

        assert_eq!(data.id, "policy-1".into());
        assert!(data.grant_controls.is_null());
        assert!(data.conditions.is_null());
        assert!(data.state.is_null());
    }

    #[test]
    fn test_flags_and_enum_lists_flatten_to_wire_strings() {
        let remote = ConditionalAccessPolicy {
            conditions: Some(ConditionalAccessConditionSet {
                insider_risk_levels: Some(Flags(vec![
                    ConditionalAccessInsiderRiskLevel::Moderate,
                    ConditionalAccessInsiderRiskLevel::Minor,
                ])),
                platforms: Some(ConditionalAccessPlatforms {
                    include_platforms: Some(vec![
                        ConditionalAccessDevicePlatform::Ios,
                        ConditionalAccessDevicePlatform::MacOs,
                    ]),
                    exclude_platforms: None,
                }),
                ..Default::default()
            }),
            ..Default::default()
        };

        let mut data = ConditionalAccessPolicyModel::default();
        map_remote_state(&mut data, &remote);

        let conditions = data.conditions.as_known().unwrap();
        assert_eq!(conditions.insider_risk_levels, "moderate,minor".into());
        let platforms = conditions.platforms.as_known().unwrap();
        assert_eq!(
            platforms.include_platforms,
            Value::Known(vec!["iOS".to_string(), "macOS".to_string()])
        );
        assert!(platforms.exclude_platforms.is_null());
    }

    #[test]
    fn test_computed_timestamps() {
        let remote = ConditionalAccessPolicy {
            created_date_time: Some("2024-05-01T10:00:00Z".to_string()),
            modified_date_time: Some("2024-06-01T10:00:00Z".to_string()),
            ..Default::default()
        };
        let mut data = ConditionalAccessPolicyModel::default();
        map_remote_state(&mut data, &remote);
        assert_eq!(data.created_date_time, "2024-05-01T10:00:00Z".into());
        assert_eq!(data.modified_date_time, "2024-06-01T10:00:00Z".into());
    }
}

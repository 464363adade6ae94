use super::model::*;
use super::types::*;
use crate::mapping::{
    ConstructError, optional, optional_enum, optional_enum_list, optional_flags, optional_i32,
    optional_object, required, required_enum,
};

pub(super) fn construct_resource(
    data: &ConditionalAccessPolicyModel,
) -> Result<ConditionalAccessPolicy, ConstructError> {
    Ok(ConditionalAccessPolicy {
        odata_type: Some(ODATA_TYPE.to_string()),
        display_name: Some(required("display_name", &data.display_name)?),
        description: optional(&data.description),
        state: optional_enum("state", &data.state)?,
        conditions: optional_object(&data.conditions, construct_conditions)?,
        grant_controls: optional_object(&data.grant_controls, construct_grant_controls)?,
        session_controls: optional_object(&data.session_controls, construct_session_controls)?,
        ..Default::default()
    })
}

fn construct_conditions(
    data: &ConditionsModel,
) -> Result<ConditionalAccessConditionSet, ConstructError> {
    Ok(ConditionalAccessConditionSet {
        applications: optional_object(&data.applications, |apps| {
            Ok(ConditionalAccessApplications {
                include_applications: optional(&apps.include_applications),
                exclude_applications: optional(&apps.exclude_applications),
                include_user_actions: optional(&apps.include_user_actions),
                include_authentication_context_class_references: optional(
                    &apps.include_authentication_context_class_references,
                ),
            })
        })?,
        users: optional_object(&data.users, construct_users)?,
        client_applications: optional_object(&data.client_applications, |clients| {
            Ok(ConditionalAccessClientApplications {
                include_service_principals: optional(&clients.include_service_principals),
                exclude_service_principals: optional(&clients.exclude_service_principals),
            })
        })?,
        client_app_types: optional_enum_list(
            "conditions.client_app_types",
            &data.client_app_types,
        )?,
        devices: optional_object(&data.devices, construct_devices)?,
        device_states: optional_object(&data.device_states, |states| {
            Ok(ConditionalAccessDeviceStates {
                include_states: optional(&states.include_states),
                exclude_states: optional(&states.exclude_states),
            })
        })?,
        locations: optional_object(&data.locations, |locations| {
            Ok(ConditionalAccessLocations {
                include_locations: optional(&locations.include_locations),
                exclude_locations: optional(&locations.exclude_locations),
            })
        })?,
        platforms: optional_object(&data.platforms, |platforms| {
            Ok(ConditionalAccessPlatforms {
                include_platforms: optional_enum_list(
                    "conditions.platforms.include_platforms",
                    &platforms.include_platforms,
                )?,
                exclude_platforms: optional_enum_list(
                    "conditions.platforms.exclude_platforms",
                    &platforms.exclude_platforms,
                )?,
            })
        })?,
        authentication_flows: optional_object(&data.authentication_flows, |flows| {
            Ok(ConditionalAccessAuthenticationFlows {
                transfer_methods: optional_flags(
                    "conditions.authentication_flows.transfer_methods",
                    &flows.transfer_methods,
                )?,
            })
        })?,
        insider_risk_levels: optional_flags(
            "conditions.insider_risk_levels",
            &data.insider_risk_levels,
        )?,
        sign_in_risk_levels: optional_enum_list(
            "conditions.sign_in_risk_levels",
            &data.sign_in_risk_levels,
        )?,
        user_risk_levels: optional_enum_list(
            "conditions.user_risk_levels",
            &data.user_risk_levels,
        )?,
        service_principal_risk_levels: optional_enum_list(
            "conditions.service_principal_risk_levels",
            &data.service_principal_risk_levels,
        )?,
    })
}

fn construct_users(data: &UsersModel) -> Result<ConditionalAccessUsers, ConstructError> {
    Ok(ConditionalAccessUsers {
        include_users: optional(&data.include_users),
        exclude_users: optional(&data.exclude_users),
        include_groups: optional(&data.include_groups),
        exclude_groups: optional(&data.exclude_groups),
        include_roles: optional(&data.include_roles),
        exclude_roles: optional(&data.exclude_roles),
        include_guests_or_external_users: optional_object(
            &data.include_guests_or_external_users,
            |guests| construct_guests_or_external_users("include_guests_or_external_users", guests),
        )?,
        exclude_guests_or_external_users: optional_object(
            &data.exclude_guests_or_external_users,
            |guests| construct_guests_or_external_users("exclude_guests_or_external_users", guests),
        )?,
    })
}

fn construct_guests_or_external_users(
    attribute: &str,
    data: &GuestsOrExternalUsersModel,
) -> Result<ConditionalAccessGuestsOrExternalUsers, ConstructError> {
    let prefix = format!("conditions.users.{}", attribute);
    Ok(ConditionalAccessGuestsOrExternalUsers {
        guest_or_external_user_types: optional_flags(
            &format!("{}.guest_or_external_user_types", prefix),
            &data.guest_or_external_user_types,
        )?,
        external_tenants: optional_object(&data.external_tenants, |tenants| {
            construct_external_tenants(&format!("{}.external_tenants", prefix), tenants)
        })?,
    })
}

/// The `@odata.type` follows the membership kind so Graph picks the right subtype.
fn construct_external_tenants(
    prefix: &str,
    data: &ExternalTenantsModel,
) -> Result<ConditionalAccessExternalTenants, ConstructError> {
    let field = format!("{}.membership_kind", prefix);
    let membership_kind: ConditionalAccessExternalTenantsMembershipKind =
        required_enum(&field, &data.membership_kind)?;
    let odata_type = match membership_kind {
        ConditionalAccessExternalTenantsMembershipKind::All => ALL_EXTERNAL_TENANTS_ODATA_TYPE,
        ConditionalAccessExternalTenantsMembershipKind::Enumerated => {
            ENUMERATED_EXTERNAL_TENANTS_ODATA_TYPE
        }
        ConditionalAccessExternalTenantsMembershipKind::UnknownFutureValue => {
            return Err(ConstructError::InvalidEnum {
                field,
                value: data.membership_kind.value_string().to_string(),
                allowed: "all, enumerated".to_string(),
            });
        }
    };

    Ok(ConditionalAccessExternalTenants {
        odata_type: Some(odata_type.to_string()),
        membership_kind: Some(membership_kind),
        members: optional(&data.members),
    })
}

fn construct_devices(data: &DevicesModel) -> Result<ConditionalAccessDevices, ConstructError> {
    Ok(ConditionalAccessDevices {
        include_devices: optional(&data.include_devices),
        exclude_devices: optional(&data.exclude_devices),
        device_filter: optional_object(&data.device_filter, |filter| {
            Ok(ConditionalAccessFilter {
                mode: optional_enum("conditions.devices.device_filter.mode", &filter.mode)?,
                rule: optional(&filter.rule),
            })
        })?,
    })
}

fn construct_grant_controls(
    data: &GrantControlsModel,
) -> Result<ConditionalAccessGrantControls, ConstructError> {
    Ok(ConditionalAccessGrantControls {
        operator: optional_enum("grant_controls.operator", &data.operator)?,
        built_in_controls: optional_enum_list(
            "grant_controls.built_in_controls",
            &data.built_in_controls,
        )?,
        custom_authentication_factors: optional(&data.custom_authentication_factors),
        terms_of_use: optional(&data.terms_of_use),
        authentication_strength: optional_object(&data.authentication_strength, |strength| {
            Ok(AuthenticationStrengthPolicy {
                id: optional(&strength.id),
                display_name: optional(&strength.display_name),
                description: optional(&strength.description),
                policy_type: optional(&strength.policy_type),
                requirements_satisfied: optional(&strength.requirements_satisfied),
                allowed_combinations: optional(&strength.allowed_combinations),
            })
        })?,
    })
}

fn construct_session_controls(
    data: &SessionControlsModel,
) -> Result<ConditionalAccessSessionControls, ConstructError> {
    Ok(ConditionalAccessSessionControls {
        application_enforced_restrictions: optional_object(
            &data.application_enforced_restrictions,
            construct_toggle,
        )?,
        cloud_app_security: optional_object(&data.cloud_app_security, |control| {
            Ok(CloudAppSecuritySessionControl {
                is_enabled: optional(&control.is_enabled),
                cloud_app_security_type: optional_enum(
                    "session_controls.cloud_app_security.cloud_app_security_type",
                    &control.cloud_app_security_type,
                )?,
            })
        })?,
        continuous_access_evaluation: optional_object(
            &data.continuous_access_evaluation,
            |control| {
                Ok(ContinuousAccessEvaluationSessionControl {
                    mode: optional_enum(
                        "session_controls.continuous_access_evaluation.mode",
                        &control.mode,
                    )?,
                })
            },
        )?,
        persistent_browser: optional_object(&data.persistent_browser, |control| {
            Ok(PersistentBrowserSessionControl {
                is_enabled: optional(&control.is_enabled),
                mode: optional_enum("session_controls.persistent_browser.mode", &control.mode)?,
            })
        })?,
        sign_in_frequency: optional_object(&data.sign_in_frequency, construct_sign_in_frequency)?,
        secure_sign_in_session: optional_object(&data.secure_sign_in_session, construct_toggle)?,
        disable_resilience_defaults: optional(&data.disable_resilience_defaults),
    })
}

fn construct_toggle(
    data: &SessionControlToggleModel,
) -> Result<SessionControlToggle, ConstructError> {
    Ok(SessionControlToggle {
        is_enabled: optional(&data.is_enabled),
    })
}

fn construct_sign_in_frequency(
    data: &SignInFrequencyModel,
) -> Result<SignInFrequencySessionControl, ConstructError> {
    Ok(SignInFrequencySessionControl {
        is_enabled: optional(&data.is_enabled),
        frequency_type: optional_enum(
            "session_controls.sign_in_frequency.type",
            &data.frequency_type,
        )?,
        value: optional_i32("session_controls.sign_in_frequency.value", &data.value)?,
        frequency_interval: optional_enum(
            "session_controls.sign_in_frequency.frequency_interval",
            &data.frequency_interval,
        )?,
        authentication_type: optional_enum(
            "session_controls.sign_in_frequency.authentication_type",
            &data.authentication_type,
        )?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terraform::Value;

    fn strings(items: &[&str]) -> Value<Vec<String>> {
        Value::Known(items.iter().map(|s| s.to_string()).collect())
    }

    fn minimal() -> ConditionalAccessPolicyModel {
        ConditionalAccessPolicyModel {
            display_name: "Require MFA".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_body() {
        let json = serde_json::to_value(construct_resource(&minimal()).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "@odata.type": "#microsoft.graph.conditionalAccessPolicy",
                "displayName": "Require MFA"
            })
        );
    }

    #[test]
    fn test_invalid_state_names_field_and_value() {
        let mut data = minimal();
        data.state = "on".into();
        let err = construct_resource(&data).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value 'on' for 'state': expected one of \
             [enabled, disabled, enabledForReportingButNotEnforced, unknownFutureValue]"
        );
    }

    #[test]
    fn test_unknown_future_value_state() {
        let mut data = minimal();
        data.state = "unknownFutureValue".into();
        let body = construct_resource(&data).unwrap();
        assert_eq!(body.state, Some(ConditionalAccessPolicyState::UnknownFutureValue));
    }

    #[test]
    fn test_risk_levels_and_flags() {
        let mut data = minimal();
        data.conditions = Value::Known(ConditionsModel {
            client_app_types: strings(&["browser", "mobileAppsAndDesktopClients"]),
            sign_in_risk_levels: strings(&["high", "medium"]),
            user_risk_levels: Value::Known(vec![]),
            insider_risk_levels: "elevated,minor".into(),
            ..Default::default()
        });

        let json = serde_json::to_value(construct_resource(&data).unwrap()).unwrap();
        let conditions = &json["conditions"];
        assert_eq!(
            conditions["clientAppTypes"],
            serde_json::json!(["browser", "mobileAppsAndDesktopClients"]),
        );
        assert_eq!(conditions["signInRiskLevels"], serde_json::json!(["high", "medium"]));
        assert_eq!(conditions["userRiskLevels"], serde_json::json!([]));
        assert_eq!(conditions["insiderRiskLevels"], "elevated,minor");
        assert!(conditions.get("servicePrincipalRiskLevels").is_none());
    }

    #[test]
    fn test_invalid_risk_level_reports_path() {
        let mut data = minimal();
        data.conditions = Value::Known(ConditionsModel {
            user_risk_levels: strings(&["low", "severe"]),
            ..Default::default()
        });
        let err = construct_resource(&data).unwrap_err();
        assert_eq!(
            err,
            ConstructError::InvalidEnum {
                field: "conditions.user_risk_levels".to_string(),
                value: "severe".to_string(),
                allowed: "low, medium, high, hidden, none, unknownFutureValue".to_string(),
            }
        );
    }

    #[test]
    fn test_guest_flags_and_enumerated_tenants() {
        let mut data = minimal();
        data.conditions = Value::Known(ConditionsModel {
            users: Value::Known(UsersModel {
                include_users: strings(&["All"]),
                exclude_guests_or_external_users: Value::Known(GuestsOrExternalUsersModel {
                    guest_or_external_user_types: "b2bCollaborationGuest,serviceProvider".into(),
                    external_tenants: Value::Known(ExternalTenantsModel {
                        membership_kind: "enumerated".into(),
                        members: strings(&["11111111-2222-3333-4444-555555555555"]),
                    }),
                }),
                ..Default::default()
            }),
            ..Default::default()
        });

        let json = serde_json::to_value(construct_resource(&data).unwrap()).unwrap();
        let guests = &json["conditions"]["users"]["excludeGuestsOrExternalUsers"];
        assert_eq!(guests["guestOrExternalUserTypes"], "b2bCollaborationGuest,serviceProvider");
        assert_eq!(
            guests["externalTenants"]["@odata.type"],
            ENUMERATED_EXTERNAL_TENANTS_ODATA_TYPE,
        );
        assert_eq!(guests["externalTenants"]["membershipKind"], "enumerated");
        assert_eq!(
            guests["externalTenants"]["members"],
            serde_json::json!(["11111111-2222-3333-4444-555555555555"])
        );
    }

    #[test]
    fn test_invalid_guest_flag_member() {
        let mut data = minimal();
        data.conditions = Value::Known(ConditionsModel {
            users: Value::Known(UsersModel {
                include_guests_or_external_users: Value::Known(GuestsOrExternalUsersModel {
                    guest_or_external_user_types: "internalGuest,partner".into(),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        });
        let err = construct_resource(&data).unwrap_err();
        match err {
            ConstructError::InvalidEnum { field, value, .. } => {
                assert_eq!(
                    field,
                    "conditions.users.include_guests_or_external_users.\
                     guest_or_external_user_types",
                );
                assert_eq!(value, "partner");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    fn flags_error(data: &ConditionalAccessPolicyModel) -> (String, String) {
        match construct_resource(data).unwrap_err() {
            ConstructError::NonCanonicalFlags { field, canonical, .. } => (field, canonical),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_insider_risk_levels_must_be_canonical() {
        let mut data = minimal();
        data.conditions = Value::Known(ConditionsModel {
            insider_risk_levels: "minor, elevated".into(),
            ..Default::default()
        });
        assert_eq!(
            flags_error(&data),
            ("conditions.insider_risk_levels".to_string(), "minor,elevated".to_string())
        );
    }

    #[test]
    fn test_transfer_methods_must_be_canonical() {
        let mut data = minimal();
        data.conditions = Value::Known(ConditionsModel {
            authentication_flows: Value::Known(AuthenticationFlowsModel {
                transfer_methods: "deviceCodeFlow,,authenticationTransfer".into(),
            }),
            ..Default::default()
        });
        assert_eq!(
            flags_error(&data),
            (
                "conditions.authentication_flows.transfer_methods".to_string(),
                "deviceCodeFlow,authenticationTransfer".to_string()
            )
        );
    }

    #[test]
    fn test_guest_types_must_be_canonical() {
        let mut data = minimal();
        data.conditions = Value::Known(ConditionsModel {
            users: Value::Known(UsersModel {
                exclude_guests_or_external_users: Value::Known(GuestsOrExternalUsersModel {
                    guest_or_external_user_types: " internalGuest,serviceProvider".into(),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        });
        assert_eq!(
            flags_error(&data),
            (
                "conditions.users.exclude_guests_or_external_users.guest_or_external_user_types"
                    .to_string(),
                "internalGuest,serviceProvider".to_string()
            )
        );
    }

    #[test]
    fn test_external_tenants_require_membership_kind() {
        for kind in [Value::Null, "unknownFutureValue".into()] {
            let mut data = minimal();
            data.conditions = Value::Known(ConditionsModel {
                users: Value::Known(UsersModel {
                    include_guests_or_external_users: Value::Known(GuestsOrExternalUsersModel {
                        guest_or_external_user_types: "b2bDirectConnectUser".into(),
                        external_tenants: Value::Known(ExternalTenantsModel {
                            membership_kind: kind,
                            members: strings(&["11111111-2222-3333-4444-555555555555"]),
                        }),
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            });
            let field = match construct_resource(&data).unwrap_err() {
                ConstructError::MissingRequired { field } => field,
                ConstructError::InvalidEnum { field, allowed, .. } => {
                    assert_eq!(allowed, "all, enumerated");
                    field
                }
                other => panic!("unexpected error: {other:?}"),
            };
            assert_eq!(
                field,
                "conditions.users.include_guests_or_external_users.external_tenants.membership_kind"
            );
        }
    }

    #[test]
    fn test_device_states() {
        let mut data = minimal();
        data.conditions = Value::Known(ConditionsModel {
            device_states: Value::Known(DeviceStatesModel {
                include_states: strings(&["All"]),
                exclude_states: Value::Known(vec![]),
            }),
            ..Default::default()
        });
        let json = serde_json::to_value(construct_resource(&data).unwrap()).unwrap();
        assert_eq!(
            json["conditions"]["deviceStates"],
            serde_json::json!({ "includeStates": ["All"], "excludeStates": [] })
        );
    }

    #[test]
    fn test_grant_and_session_controls() {
        let mut data = minimal();
        data.grant_controls = Value::Known(GrantControlsModel {
            operator: "OR".into(),
            built_in_controls: strings(&["mfa", "compliantDevice"]),
            authentication_strength: Value::Known(AuthenticationStrengthModel {
                id: "00000000-0000-0000-0000-000000000002".into(),
                ..Default::default()
            }),
            ..Default::default()
        });
        data.session_controls = Value::Known(SessionControlsModel {
            sign_in_frequency: Value::Known(SignInFrequencyModel {
                is_enabled: Value::Known(true),
                frequency_type: "hours".into(),
                value: Value::Known(12),
                frequency_interval: "timeBased".into(),
                ..Default::default()
            }),
            disable_resilience_defaults: Value::Known(false),
            ..Default::default()
        });

        let json = serde_json::to_value(construct_resource(&data).unwrap()).unwrap();
        assert_eq!(json["grantControls"]["operator"], "OR");
        assert_eq!(
            json["grantControls"]["builtInControls"],
            serde_json::json!(["mfa", "compliantDevice"]),
        );
        assert_eq!(
            json["grantControls"]["authenticationStrength"],
            serde_json::json!({"id": "00000000-0000-0000-0000-000000000002"})
        );
        assert_eq!(
            json["sessionControls"],
            serde_json::json!({
                "signInFrequency": {
                    "isEnabled": true,
                    "type": "hours",
                    "value": 12,
                    "frequencyInterval": "timeBased"
                },
                "disableResilienceDefaults": false
            })
        );
    }

    #[test]
    fn test_invalid_grant_operator() {
        let mut data = minimal();
        data.grant_controls = Value::Known(GrantControlsModel {
            operator: "XOR".into(),
            ..Default::default()
        });
        let err = construct_resource(&data).unwrap_err();
        assert!(err.to_string().contains("'grant_controls.operator'"));
        assert!(err.to_string().contains("'XOR'"));
    }
}

use akin_core::errors::*;

#[test]
fn session_terminated_has_its_own_code() {
    let err = SessionError::Terminated { id: "s1".into() };
    assert_eq!(err.error_code(), "SESSION_TERMINATED");
    assert_eq!(
        err.boundary_string(),
        "[SESSION_TERMINATED] session s1 already reached a terminal state"
    );
}

#[test]
fn protocol_errors_are_distinct_from_config_errors() {
    let session: AkinError = SessionError::UnknownFeature { key: "tag_x".into() }.into();
    let config: AkinError = ConfigError::ValidationFailed {
        field: "scoring.beta".into(),
        message: "must be finite and > 0".into(),
    }
    .into();
    assert_eq!(session.error_code(), "SESSION_ERROR");
    assert_eq!(config.error_code(), "CONFIG_ERROR");
    assert!(session.to_string().contains("tag_x"));
}

#[test]
fn missing_parameter_names_mode_and_field() {
    let err = ConfigError::MissingParameter {
        field: "coverage.min_works".into(),
        mode: "works".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("works"));
    assert!(msg.contains("coverage.min_works"));
}

#[test]
fn storage_and_catalog_codes() {
    assert_eq!(
        StorageError::Backend { reason: "down".into() }.error_code(),
        "STORAGE_ERROR"
    );
    assert_eq!(CatalogError::Empty.error_code(), "CATALOG_ERROR");
}

use kafka_lag_scaler::auth::{AuthConfig, AuthMode};
use kafka_lag_scaler::{validate, RawAuthConfig, RawConfig, ScalerMetadata, ValidationError};

fn valid_metadata() -> RawConfig {
    [
        ("bootstrapServers", "broker1:9092,broker2:9092"),
        ("consumerGroup", "my-group"),
        ("topic", "my-topic"),
    ]
    .into_iter()
    .collect()
}

fn validate_auth(auth: &[(&str, &str)]) -> Result<ScalerMetadata, ValidationError> {
    let raw_auth: RawAuthConfig = auth.iter().copied().collect();
    validate(&valid_metadata(), &raw_auth)
}

#[test]
fn no_auth_params_means_no_auth() {
    let meta = validate_auth(&[]).unwrap();
    assert_eq!(meta.auth(), None);
}

#[test]
fn sasl_plaintext_with_credentials() {
    let meta = validate_auth(&[
        ("authMode", "sasl_plaintext"),
        ("username", "admin"),
        ("password", "admin"),
    ])
    .unwrap();

    let auth = meta.auth().unwrap();
    assert_eq!(auth.mode(), AuthMode::SaslPlaintext);
    let credentials = auth.credentials().unwrap();
    assert_eq!(credentials.username(), "admin");
    assert_eq!(credentials.password(), "admin");
}

#[test]
fn every_credential_mode_builds_its_variant() {
    for (name, mode) in [
        ("sasl_plaintext", AuthMode::SaslPlaintext),
        ("sasl_ssl", AuthMode::SaslSsl),
        ("sasl_scram_sha256", AuthMode::SaslScramSha256),
        ("sasl_scram_sha512", AuthMode::SaslScramSha512),
    ] {
        let meta = validate_auth(&[("authMode", name), ("username", "u"), ("password", "p")])
            .unwrap_or_else(|e| panic!("{name}: {e}"));

        assert_eq!(meta.auth().map(|x| x.mode()), Some(mode));
    }
}

#[test]
fn sasl_plaintext_without_password() {
    let err = validate_auth(&[("authMode", "sasl_plaintext"), ("username", "admin")]).unwrap_err();

    assert_eq!(
        err,
        ValidationError::MissingAuthField {
            mode: AuthMode::SaslPlaintext,
            field: "password",
        }
    );
}

#[test]
fn sasl_plaintext_without_username() {
    let err = validate_auth(&[("authMode", "sasl_plaintext"), ("password", "admin")]).unwrap_err();

    assert_eq!(err.field(), "username");
    assert!(matches!(err, ValidationError::MissingAuthField { .. }));
}

#[test]
fn sasl_plaintext_with_empty_credentials() {
    let err = validate_auth(&[
        ("authMode", "sasl_plaintext"),
        ("username", ""),
        ("password", ""),
    ])
    .unwrap_err();

    assert_eq!(err.field(), "username");
}

#[test]
fn sasl_plaintext_without_any_credentials() {
    let err = validate_auth(&[("authMode", "sasl_plaintext")]).unwrap_err();

    assert!(matches!(
        err,
        ValidationError::MissingAuthField {
            mode: AuthMode::SaslPlaintext,
            ..
        }
    ));
}

#[test]
fn mode_without_credentials_ignores_them() {
    let meta = validate_auth(&[("authMode", "none"), ("username", "admin")]).unwrap();
    assert_eq!(meta.auth(), Some(&AuthConfig::None));
}

#[test]
fn credentials_without_mode_are_not_checked() {
    let meta = validate_auth(&[("username", "admin")]).unwrap();
    assert_eq!(meta.auth(), Some(&AuthConfig::None));
}

#[test]
fn unknown_auth_mode() {
    let err = validate_auth(&[
        ("authMode", "kerberos"),
        ("username", "admin"),
        ("password", "admin"),
    ])
    .unwrap_err();

    assert_eq!(err.field(), "authMode");
    assert!(matches!(
        err,
        ValidationError::InvalidEnumValue { ref value, .. } if value == "kerberos"
    ));
}

#[test]
fn metadata_errors_come_before_auth_errors() {
    let raw_auth: RawAuthConfig = [("authMode", "sasl_plaintext")].into_iter().collect();

    let err = validate(&RawConfig::new(), &raw_auth).unwrap_err();

    assert_eq!(err, ValidationError::MissingField("bootstrapServers"));
}

#[test]
fn error_message_names_mode_and_field() {
    let err = validate_auth(&[("authMode", "sasl_ssl"), ("username", "admin")]).unwrap_err();

    assert_eq!(
        err.to_string(),
        "auth mode sasl_ssl requires password, but it was not given"
    );
}

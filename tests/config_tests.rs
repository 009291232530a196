use std::sync::Mutex;

use qbit_client::config::Config;
use qbit_client::QbitError;

// Environment variables are process-wide; tests touching them run one at a time.
static ENV_LOCK: Mutex<()> = Mutex::new(());

const ENV_VARS: &[&str] = &[
    "QBIT_CLIENT_URL",
    "QBIT_CLIENT_USERNAME",
    "QBIT_CLIENT_PASSWORD",
    "QBIT_CLIENT_AUTH_USERPASS",
    "QBIT_CLIENT_TIMEOUT",
    "QBIT_CLIENT_LOG_LEVEL",
];

fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    for name in ENV_VARS {
        std::env::remove_var(name);
    }
    for (name, value) in vars {
        std::env::set_var(name, value);
    }
    let result = f();
    for (name, _) in vars {
        std::env::remove_var(name);
    }
    result
}

#[test]
fn test_timeout_negative_from_env() {
    let result = with_env(&[("QBIT_CLIENT_TIMEOUT", "-1")], || {
        Config::default().merge_from_env()
    });
    assert!(
        matches!(result, Err(QbitError::InvalidArgument(_))),
        "Negative timeout from environment should fail to parse"
    );
}

#[test]
fn test_timeout_garbage_from_env() {
    for value in ["", "abc", "10s", "1.5", "99999999999999999999999"] {
        let result = with_env(&[("QBIT_CLIENT_TIMEOUT", value)], || {
            Config::default().merge_from_env()
        });
        assert!(result.is_err(), "Timeout {:?} should be rejected", value);
    }
}

#[test]
fn test_timeout_valid_from_env() {
    let config = with_env(&[("QBIT_CLIENT_TIMEOUT", "30")], || {
        Config::default().merge_from_env()
    })
    .unwrap();
    assert_eq!(config.api.timeout_secs, Some(30));
    assert!(config.validate().is_ok());
}

#[test]
fn test_timeout_zero_from_env_fails_validation() {
    let config = with_env(&[("QBIT_CLIENT_TIMEOUT", "0")], || {
        Config::default().merge_from_env()
    })
    .unwrap();
    assert!(config.validate().is_err(), "Timeout of 0 should fail validation");
}

#[test]
fn test_url_override_from_env() {
    let config = with_env(&[("QBIT_CLIENT_URL", "http://seedbox:9091")], || {
        Config::default().merge_from_env()
    })
    .unwrap();
    assert_eq!(config.api.url, "http://seedbox:9091");
}

#[test]
fn test_combined_userpass_from_env() {
    let config = with_env(
        &[
            ("QBIT_CLIENT_AUTH_USERPASS", "admin:pa:ss"),
            ("QBIT_CLIENT_USERNAME", "ignored"),
        ],
        || Config::default().merge_from_env(),
    )
    .unwrap();
    assert_eq!(config.api.username.as_deref(), Some("admin"));
    // Only the first colon separates the two halves.
    assert_eq!(config.api.password.as_deref(), Some("pa:ss"));
}

#[test]
fn test_separate_credentials_from_env() {
    let config = with_env(
        &[
            ("QBIT_CLIENT_USERNAME", "admin"),
            ("QBIT_CLIENT_PASSWORD", "adminadmin"),
        ],
        || Config::default().merge_from_env(),
    )
    .unwrap();
    assert_eq!(config.api.username.as_deref(), Some("admin"));
    assert_eq!(config.api.password.as_deref(), Some("adminadmin"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_username_without_password_fails_validation() {
    let config = with_env(&[("QBIT_CLIENT_USERNAME", "admin")], || {
        Config::default().merge_from_env()
    })
    .unwrap();

    match config.validate() {
        Err(QbitError::ValidationError(issues)) => {
            assert_eq!(issues.len(), 1);
            assert_eq!(issues[0].field, "api.username");
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_bad_log_level_from_env() {
    let config = with_env(&[("QBIT_CLIENT_LOG_LEVEL", "loud")], || {
        Config::default().merge_from_env()
    })
    .unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn test_validation_collects_every_issue() {
    let mut config = Config::default();
    config.api.url = "not a url".to_string();
    config.api.timeout_secs = Some(0);
    config.api.password = Some("secret".to_string());
    config.logging.level = "verbose".to_string();

    let err = config.validate().unwrap_err();
    match &err {
        QbitError::ValidationError(issues) => {
            let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
            assert_eq!(
                fields,
                vec!["api.url", "api.timeout_secs", "api.username", "logging.level"]
            );
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    assert!(err.to_string().contains("api.url"));
}

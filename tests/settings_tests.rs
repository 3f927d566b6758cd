use std::str::FromStr;

use portfolio_api::{
    entities::resume::ResumeProfile,
    settings::{AppConfig, AppEnvironment, LogFormat},
};

fn config(env: AppEnvironment, origins: &[&str]) -> AppConfig {
    AppConfig {
        env,
        name: "Portfolio-API".to_string(),
        port: 8080,
        host: "127.0.0.1".to_string(),
        worker_count: 2,
        database_url: "postgres://localhost/portfolio".to_string(),
        cors_allowed_origins: origins.iter().map(|o| o.to_string()).collect(),
        log_format: LogFormat::Pretty,
        resume: ResumeProfile::default(),
    }
}

#[test]
fn valid_development_config_passes() {
    assert!(config(AppEnvironment::Development, &["*"]).validate().is_ok());
}

#[test]
fn wildcard_cors_is_rejected_in_production() {
    let err = config(AppEnvironment::Production, &["https://a.dev", "*"])
        .validate()
        .unwrap_err();

    assert!(err.to_string().contains("Wildcard CORS"));
}

#[test]
fn missing_required_values_are_all_reported() {
    let mut cfg = config(AppEnvironment::Testing, &["https://a.dev"]);
    cfg.database_url = "  ".to_string();
    cfg.worker_count = 0;
    cfg.resume.name = String::new();

    let message = cfg.validate().unwrap_err().to_string();

    assert!(message.contains("DATABASE_URL"));
    assert!(message.contains("WORKER_COUNT"));
    assert!(message.contains("RESUME name"));
}

#[test]
fn cors_origins_split_comma_joined_entries() {
    let cfg = config(
        AppEnvironment::Production,
        &["https://a.dev, https://b.dev", " ", "https://c.dev"],
    );

    assert_eq!(
        cfg.cors_origins(),
        vec!["https://a.dev", "https://b.dev", "https://c.dev"]
    );
    assert!(cfg.validate().is_ok());
}

#[test]
fn environment_names_parse_case_insensitively() {
    assert_eq!(AppEnvironment::from_str("Production").unwrap(), AppEnvironment::Production);
    assert_eq!(AppEnvironment::from_str("testing").unwrap(), AppEnvironment::Testing);
    assert!(AppEnvironment::from_str("staging").is_err());
    assert_eq!(AppEnvironment::Development.to_string(), "development");
}

#[test]
fn debug_output_redacts_the_database_url() {
    let rendered = format!("{:?}", config(AppEnvironment::Development, &["*"]));

    assert!(rendered.contains("[REDACTED]"));
    assert!(!rendered.contains("postgres://"));
}

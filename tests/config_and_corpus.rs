// Startup loading: configuration file and FAQ corpus files.
use std::fs;
use studybuddy::config::Config;
use studybuddy::context::{AppContext, TestContext};
use studybuddy::corpus::{load_corpus, parse_corpus};
use studybuddy::model::DEFAULT_THRESHOLD;

#[test]
fn test_missing_config_falls_back_to_defaults() {
    let ctx = TestContext::new();
    let err = Config::load(&ctx).unwrap_err();
    assert!(Config::is_missing_config_error(&err));

    let config = Config::load_or_default(&ctx).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.similarity_threshold, DEFAULT_THRESHOLD);
}

#[test]
fn test_config_roundtrip() {
    let ctx = TestContext::new();
    let config = Config {
        faq_path: Some("/tmp/faq.json".to_string()),
        similarity_threshold: 0.3,
        log_level: "debug".to_string(),
    };
    config.save(&ctx).unwrap();
    assert_eq!(Config::load(&ctx).unwrap(), config);
}

#[test]
fn test_partial_config_uses_serde_defaults() {
    let ctx = TestContext::new();
    let path = ctx.get_config_file_path().unwrap();
    fs::write(&path, "log_level = \"warn\"\n").unwrap();
    let config = Config::load(&ctx).unwrap();
    assert_eq!(config.log_level, "warn");
    assert_eq!(config.faq_path, None);
    assert_eq!(config.similarity_threshold, DEFAULT_THRESHOLD);
}

#[test]
fn test_malformed_config_is_fatal() {
    let ctx = TestContext::new();
    let path = ctx.get_config_file_path().unwrap();
    fs::write(&path, "similarity_threshold = \"high\"").unwrap();
    let err = Config::load_or_default(&ctx).unwrap_err();
    assert!(!Config::is_missing_config_error(&err));
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_out_of_range_threshold_is_rejected() {
    let ctx = TestContext::new();
    let path = ctx.get_config_file_path().unwrap();
    fs::write(&path, "similarity_threshold = 1.5").unwrap();
    assert!(Config::load(&ctx).is_err());
}

#[test]
fn test_corpus_accepts_short_and_long_keys() {
    let entries = parse_corpus(
        r#"[{"q": "Short?", "a": "Yes."}, {"question": "Long?", "answer": "Also."}]"#,
    )
    .unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].question, "Short?");
    assert_eq!(entries[1].answer, "Also.");
}

#[test]
fn test_malformed_corpus_is_fatal() {
    assert!(parse_corpus("{\"q\": \"not an array\"}").is_err());
    assert!(parse_corpus(r#"[{"q": "missing answer"}]"#).is_err());
}

#[test]
fn test_missing_corpus_file_names_path() {
    let ctx = TestContext::new();
    let path = ctx.get_data_dir().unwrap().join("nope.json");
    let err = load_corpus(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("nope.json"));
}

#[test]
fn test_corpus_file_loads() {
    let ctx = TestContext::new();
    let path = ctx.get_data_dir().unwrap().join("faq.json");
    fs::write(&path, r#"[{"q": "Where is room 101?", "a": "Second floor."}]"#).unwrap();
    let entries = load_corpus(&path).unwrap();
    assert_eq!(entries[0].answer, "Second floor.");
}

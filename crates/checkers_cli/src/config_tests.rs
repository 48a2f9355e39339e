use super::*;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.search.depth, 5);
    assert_eq!(config.analysis.match_policy, MatchPolicy::EveryState);
    assert_eq!(config.play.max_turns, 200);
    assert_eq!(config.play.seed, None);
    assert_eq!(config.log.filter, "info");
}

#[test]
fn test_empty_file_gives_defaults() {
    assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
}

#[test]
fn test_partial_file_overrides_only_given_keys() {
    let config = Config::from_toml_str(
        r#"
        [search]
        depth = 3

        [analysis]
        match_policy = "complete-only"

        [play]
        seed = 42
        "#,
    )
    .unwrap();

    assert_eq!(config.search.limits(), SearchLimits::depth(3));
    assert_eq!(config.analysis.match_policy, MatchPolicy::CompleteOnly);
    assert_eq!(config.play.seed, Some(42));
    assert_eq!(config.play.max_turns, 200);
    assert_eq!(config.log, LogConfig::default());
}

#[test]
fn test_bad_policy_is_rejected() {
    assert!(Config::from_toml_str("[analysis]\nmatch_policy = \"sometimes\"").is_err());
}

#[test]
fn test_missing_explicit_file_is_error() {
    let path = std::path::Path::new("definitely/not/here/checkers.toml");
    assert!(Config::load_or_default(Some(path)).is_err());
}

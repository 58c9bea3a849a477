use lift_config::load_toml;
use rstest::rstest;

#[test]
fn accepts_minimal_config_with_defaults() {
    let toml = r#"
[pins]
lift_up = 4
lift_down = 7
"#;
    let cfg = load_toml(toml).expect("parse TOML");
    cfg.validate().expect("validate");
    assert_eq!(cfg.tick.tick_hz, 200);
    assert!(cfg.pins.active_low);
    assert_eq!(
        cfg.persist.threshold_path.to_string_lossy(),
        "threshold.cal"
    );
}

#[rstest]
#[case::equal_pins(
    "[pins]\nlift_up = 4\nlift_down = 4\n",
    "must differ"
)]
#[case::zero_tick_rate(
    "[pins]\nlift_up = 4\nlift_down = 7\n\n[loop]\ntick_hz = 0\n",
    "tick_hz must be > 0"
)]
#[case::absurd_tick_rate(
    "[pins]\nlift_up = 4\nlift_down = 7\n\n[loop]\ntick_hz = 50000\n",
    "unreasonably large"
)]
#[case::empty_threshold_path(
    "[pins]\nlift_up = 4\nlift_down = 7\n\n[persist]\nthreshold_path = \"\"\n",
    "must not be empty"
)]
fn rejects_invalid_values(#[case] toml: &str, #[case] needle: &str) {
    let cfg = load_toml(toml).expect("parse TOML");
    let err = cfg.validate().expect_err("should fail validation");
    assert!(format!("{err}").contains(needle));
}

#[test]
fn reads_full_config() {
    let toml = r#"
[pins]
lift_up = 4
lift_down = 7
active_low = false

[loop]
tick_hz = 500

[persist]
threshold_path = "/var/lib/liftctl/threshold.cal"

[logging]
file = "liftctl.log"
level = "debug"
"#;
    let cfg = load_toml(toml).expect("parse TOML");
    cfg.validate().expect("validate");
    assert_eq!(cfg.tick.tick_hz, 500);
    assert!(!cfg.pins.active_low);
    assert_eq!(cfg.logging.level.as_deref(), Some("debug"));
}

#[test]
fn rejects_malformed_toml() {
    assert!(load_toml("[pins").is_err());
}

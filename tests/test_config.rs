use clap::Parser;

use xonitix::config::*;

#[test]
fn rejects_degenerate_line_sizes() {
    assert_eq!(Config::new(0, false, false), Err(ConfigError::ScreenTooSmall(0)));
    assert_eq!(Config::new(-5, false, false), Err(ConfigError::ScreenTooSmall(-5)));
    assert_eq!(
        Config::new(MAX_SCREEN_SIZE + 1, false, false),
        Err(ConfigError::ScreenTooLarge(MAX_SCREEN_SIZE + 1))
    );
}

#[test]
fn accepts_small_but_valid_lines() {
    let config = Config::new(10, true, false).unwrap();
    assert_eq!(config.screen_size(), 10);
    assert!(config.stealth);
    assert!(!config.quiet);
    assert!(config.is_cramped());
    assert!(!Config::new(PLAYABLE_SCREEN_SIZE, false, false).unwrap().is_cramped());
}

#[test]
fn explicit_line_wins_over_terminal_width() {
    let args = Args::try_parse_from(["xonitix", "-l", "60", "-s", "-q", "--seed", "9"]).unwrap();
    let config = Config::from_args(&args, Some(200)).unwrap();
    assert_eq!(config.screen_size(), 60);
    assert!(config.stealth);
    assert!(config.quiet);
    assert_eq!(config.seed, Some(9));
}

#[test]
fn default_line_leaves_room_for_status() {
    let args = Args::try_parse_from(["xonitix"]).unwrap();
    assert_eq!(Config::from_args(&args, Some(100)).unwrap().screen_size(), 70);
    assert_eq!(Config::from_args(&args, None).unwrap().screen_size(), 50);
    assert_eq!(
        Config::from_args(&args, Some(20)),
        Err(ConfigError::ScreenTooSmall(-10))
    );
}

#[test]
fn non_numeric_line_is_rejected_by_parser() {
    assert!(Args::try_parse_from(["xonitix", "-l", "wide"]).is_err());
}

#[test]
fn error_messages_name_the_limit() {
    let msg = ConfigError::ScreenTooSmall(1).to_string();
    assert!(msg.contains("too small"));
    assert!(msg.contains(&MIN_SCREEN_SIZE.to_string()));
}

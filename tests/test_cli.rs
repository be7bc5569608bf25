use clap::Parser;
use dinedir::cli::args::{Args, Command};
use dinedir::domain::ViewMode;
use std::path::PathBuf;

#[test]
fn given_no_subcommand_when_parsing_then_fails() {
    // Arrange
    let args = vec!["dinedir", "--hour", "13"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail without subcommand");
}

#[test]
fn given_cards_without_mood_when_parsing_then_defaults_to_all() {
    // Arrange
    let args = vec!["dinedir", "cards"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Cards { mood, plain } => {
            assert_eq!(mood, "all");
            assert!(!plain);
        }
        _ => panic!("Expected Cards command"),
    }
    assert_eq!(parsed.config, None);
    assert_eq!(parsed.hour, None);
}

#[test]
fn given_global_flags_after_subcommand_when_parsing_then_succeeds() {
    // Arrange
    let args = vec![
        "dinedir",
        "table",
        "--plain",
        "--catalog",
        "/data/restaurants.json",
        "--hour",
        "0",
        "-vv",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert!(matches!(parsed.command, Command::Table { plain: true }));
    assert_eq!(parsed.catalog, Some(PathBuf::from("/data/restaurants.json")));
    assert_eq!(parsed.hour, Some(0));
    assert_eq!(parsed.verbose, 2);
}

#[test]
fn given_hour_24_when_parsing_then_fails() {
    let result = Args::try_parse_from(vec!["dinedir", "--hour", "24", "status"]);
    assert!(result.is_err(), "Hour must be 0-23");
}

#[test]
fn given_random_with_seed_when_parsing_then_succeeds() {
    let parsed = Args::try_parse_from(vec!["dinedir", "random", "--seed", "42"]).unwrap();

    match parsed.command {
        Command::Random { seed, plain } => {
            assert_eq!(seed, Some(42));
            assert!(!plain);
        }
        _ => panic!("Expected Random command"),
    }
}

#[test]
fn given_page_with_view_and_mood_when_parsing_then_succeeds() {
    // Arrange
    let args = vec![
        "dinedir",
        "page",
        "--mood",
        "Late Night",
        "--view",
        "table",
        "-o",
        "/tmp/out.html",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Page { mood, view, output, open } => {
            assert_eq!(mood.as_deref(), Some("Late Night"));
            assert_eq!(view, Some(ViewMode::Table));
            assert_eq!(output, Some(PathBuf::from("/tmp/out.html")));
            assert!(!open);
        }
        _ => panic!("Expected Page command"),
    }
}

#[test]
fn given_unknown_view_when_parsing_then_fails() {
    let result = Args::try_parse_from(vec!["dinedir", "page", "--view", "grid"]);
    assert!(result.is_err());
}

#[test]
fn given_list_json_when_parsing_then_succeeds() {
    let parsed = Args::try_parse_from(vec!["dinedir", "list", "-m", "coffee", "--json"]).unwrap();

    match parsed.command {
        Command::List { mood, json } => {
            assert_eq!(mood, "coffee");
            assert!(json);
        }
        _ => panic!("Expected List command"),
    }
}

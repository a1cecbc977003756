//! Unit tests for the activities listing.

use super::*;
use crate::activities::write_activities;
use rstest::rstest;
use tideline_core::Activity;

#[rstest]
fn json_lists_the_whole_catalogue_in_order() {
    let mut buffer = Vec::new();
    write_activities(&mut buffer, OutputFormat::Json).expect("listing succeeds");
    let value: serde_json::Value = serde_json::from_slice(&buffer).expect("valid json");
    let keys: Vec<&str> = value
        .as_array()
        .expect("array of activities")
        .iter()
        .map(|entry| entry["key"].as_str().expect("key is a string"))
        .collect();
    let expected: Vec<&str> = Activity::ALL.into_iter().map(Activity::key).collect();
    assert_eq!(keys, expected);
}

#[rstest]
fn text_prints_one_line_per_activity() {
    let mut buffer = Vec::new();
    write_activities(&mut buffer, OutputFormat::Text).expect("listing succeeds");
    let text = String::from_utf8(buffer).expect("utf-8");
    assert_eq!(text.lines().count(), Activity::ALL.len());
    assert!(text.contains("Paddleboarding"));
}

#[rstest]
fn activities_subcommand_parses_format() {
    let cli = Cli::try_parse_from(["tideline", "activities", "--format", "json"])
        .expect("arguments parse");
    match cli.command {
        Command::Activities(args) => assert_eq!(args.format, OutputFormat::Json),
        _ => panic!("expected activities command"),
    }
}

//! End-to-end checks through the library API with canned command output.

use appdocs::check::AppsCheck;
use appdocs::document::{Document, Region};
use appdocs::runner::{CommandLine, StaticRunner};
use appdocs::{App, CheckError};

use crate::support::fixtures::{load_fixture, APPS_OUTPUT};

fn command() -> CommandLine {
    CommandLine::new("cargo", ["run", "--", "--apps"])
}

fn apps_marker() -> Region {
    Region::Marker("apps".to_string())
}

#[test]
fn test_marker_region_matches_command_output() {
    let doc = Document::parse("README.md", &load_fixture("readme_marker"));
    let region = doc.region(&apps_marker()).unwrap();

    let report = AppsCheck::default()
        .run(&StaticRunner::new(APPS_OUTPUT), &command(), &region)
        .unwrap();

    assert_eq!(
        report.apps,
        vec![
            App::new("actionlint", "https://github.com/actionlint/actionlint"),
            App::new("alphavet", "https://github.com/alphavet/alphavet"),
            App::new("gh", "https://cli.github.com"),
        ]
    );
}

#[test]
fn test_heading_region_matches_command_output() {
    let doc = Document::parse("README.md", &load_fixture("readme_heading"));
    let region = doc
        .region(&Region::Heading("Installable applications".to_string()))
        .unwrap();

    let result = AppsCheck::default().run(&StaticRunner::new(APPS_OUTPUT), &command(), &region);
    assert!(result.is_ok(), "check failed: {:?}", result);
}

#[test]
fn test_whole_document_includes_unrelated_lists() {
    let doc = Document::parse("README.md", &load_fixture("readme_marker"));

    let err = AppsCheck::default()
        .run(&StaticRunner::new(APPS_OUTPUT), &command(), &doc.nodes())
        .unwrap_err();

    assert!(err.is_mismatch());
    assert!(err.to_string().contains("+ asdf https://asdf-vm.com"));
}

#[test]
fn test_reordered_command_output_fails() {
    let doc = Document::parse("README.md", &load_fixture("readme_marker"));
    let region = doc.region(&apps_marker()).unwrap();
    let reordered = "gh https://cli.github.com
actionlint https://github.com/actionlint/actionlint
alphavet https://github.com/alphavet/alphavet
";

    let err = AppsCheck::default()
        .run(&StaticRunner::new(reordered), &command(), &region)
        .unwrap_err();

    match err {
        CheckError::Mismatch { details, .. } => {
            assert!(details.contains("first difference at position 1"));
            assert!(details.contains("installable: gh https://cli.github.com"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_new_app_missing_from_documentation() {
    let doc = Document::parse("README.md", &load_fixture("readme_marker"));
    let region = doc.region(&apps_marker()).unwrap();
    let output = format!("{}scc https://github.com/boyter/scc\n", APPS_OUTPUT);

    let err = AppsCheck::default()
        .run(&StaticRunner::new(output), &command(), &region)
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("missing from the documentation:"));
    assert!(message.contains("- scc https://github.com/boyter/scc"));
}

#[test]
fn test_missing_link_is_reported_with_location() {
    let doc = Document::parse("README.md", &load_fixture("readme_missing_link"));
    let region = doc.region(&apps_marker()).unwrap();

    let err = AppsCheck::default()
        .run(&StaticRunner::new(APPS_OUTPUT), &command(), &region)
        .unwrap_err();

    assert_eq!(
        err,
        CheckError::MissingLink {
            location: "README.md:6".to_string()
        }
    );
}

#[test]
fn test_command_failure_stops_the_check() {
    let doc = Document::parse("README.md", &load_fixture("readme_marker"));
    let region = doc.region(&apps_marker()).unwrap();

    let err = AppsCheck::default()
        .run(&StaticRunner::failing("not found"), &command(), &region)
        .unwrap_err();

    assert!(matches!(err, CheckError::CommandFailed { .. }));
}

#[test]
fn test_empty_output_and_empty_region_agree() {
    let doc = Document::parse("README.md", "<a type=\"apps\">\n\n</a>\n");
    let region = doc.region(&apps_marker()).unwrap();

    let report = AppsCheck::default()
        .run(&StaticRunner::new("\n\n"), &command(), &region)
        .unwrap();

    assert!(report.apps.is_empty());
}

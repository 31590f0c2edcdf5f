use crate::common::seeded_repository;
use gitling::Repository;
use gitling::commands::porcelain::MergeOutcome;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Pulling right after a push finds the same tip on both sides
#[rstest]
fn push_then_pull_reports_up_to_date(mut seeded_repository: Repository) {
    let repository = &mut seeded_repository;
    repository
        .remote_add("origin", "https://example.com/repo")
        .unwrap();
    repository.push("main", false).unwrap();

    let outcome = repository.pull().unwrap();

    assert_eq!(outcome, MergeOutcome::AlreadyUpToDate);
    assert_eq!(repository.database().len(), 1);
}

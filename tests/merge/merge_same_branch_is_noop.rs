use crate::common::seeded_repository;
use gitling::Repository;
use gitling::commands::porcelain::MergeOutcome;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Merging a branch whose tip equals HEAD does nothing
#[rstest]
fn merge_same_branch_is_noop(mut seeded_repository: Repository) {
    let repository = &mut seeded_repository;
    repository.branch("twin").unwrap();

    let outcome = repository.merge("twin").unwrap();

    assert_eq!(outcome, MergeOutcome::AlreadyUpToDate);
    assert_eq!(repository.database().len(), 1);
}

/// Merging a branch whose tip is an ancestor of HEAD does nothing
#[rstest]
fn merge_ancestor_branch_is_noop(mut seeded_repository: Repository) {
    let repository = &mut seeded_repository;
    repository.branch("behind").unwrap();
    crate::common::commit_files(repository, &[("ahead.txt", "x")], "advance main");

    let outcome = repository.merge("behind").unwrap();

    assert_eq!(outcome, MergeOutcome::AlreadyUpToDate);
    assert_eq!(repository.database().len(), 2);
}

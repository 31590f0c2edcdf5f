use crate::common::repository;
use gitling::Repository;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// An unborn HEAD branch has an empty history
#[rstest]
fn log_empty_before_first_commit(repository: Repository) {
    let commits = repository.log().unwrap();

    assert_eq!(commits.len(), 0);
}

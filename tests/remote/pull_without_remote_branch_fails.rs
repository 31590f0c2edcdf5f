use crate::common::seeded_repository;
use gitling::{Error, Repository};
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Pulling a branch the mirror has never seen fails
#[rstest]
fn pull_without_remote_branch_fails(mut seeded_repository: Repository) {
    let repository = &mut seeded_repository;
    repository
        .remote_add("origin", "https://example.com/repo")
        .unwrap();
    repository.push("main", false).unwrap();

    repository.checkout_new("feature").unwrap();

    let result = repository.pull();

    assert_eq!(
        result,
        Err(Error::NotFound("remote branch 'origin/feature'".to_string()))
    );
}

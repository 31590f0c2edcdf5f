use crate::common::seeded_repository;
use gitling::{Error, Repository};
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Creating a branch whose name is already taken fails, including the
/// name of the HEAD branch itself
#[rstest]
fn create_duplicate_branch_fails(mut seeded_repository: Repository) {
    let repository = &mut seeded_repository;

    repository.branch("feature").unwrap();

    assert_eq!(
        repository.branch("feature"),
        Err(Error::AlreadyExists("branch 'feature'".to_string()))
    );
    assert_eq!(
        repository.branch("main"),
        Err(Error::AlreadyExists("branch 'main'".to_string()))
    );
}

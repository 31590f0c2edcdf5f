use crate::common::seeded_repository;
use gitling::{Error, Repository};
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Pulling before `remote add origin` fails
#[rstest]
fn pull_without_remote_fails(mut seeded_repository: Repository) {
    let result = seeded_repository.pull();

    assert_eq!(result, Err(Error::NotFound("remote 'origin'".to_string())));
}

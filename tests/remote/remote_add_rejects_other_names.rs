use crate::common::repository;
use gitling::{Error, Repository};
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Only `origin` is accepted as a remote name
#[rstest]
fn remote_add_rejects_other_names(mut repository: Repository) {
    let result = repository.remote_add("upstream", "https://example.com/repo");

    assert_eq!(
        result,
        Err(Error::Unsupported(
            "remote 'upstream' (only 'origin' is supported)".to_string()
        ))
    );
    assert!(repository.remote().is_none());
}

/// Re-adding origin replaces the recorded URL
#[rstest]
fn remote_add_again_replaces_url(mut repository: Repository) {
    repository
        .remote_add("origin", "https://example.com/old")
        .unwrap();
    repository
        .remote_add("origin", "https://example.com/new")
        .unwrap();

    assert_eq!(
        repository.remote().unwrap().url(),
        "https://example.com/new"
    );
}

use crate::common::{commit_files, repository};
use gitling::Repository;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Each commit records the previous HEAD as its single parent and builds
/// its tree on top of the previous one
#[rstest]
fn commit_links_to_previous_head(mut repository: Repository) {
    let first = commit_files(&mut repository, &[("a.txt", "1")], "first");
    let second = commit_files(&mut repository, &[("b.txt", "2")], "second");

    assert_eq!(second.parents(), &[first.id().clone()]);
    assert!(!second.is_merge());

    assert_eq!(second.tree().get("a.txt"), Some("1"));
    assert_eq!(second.tree().get("b.txt"), Some("2"));

    assert_eq!(repository.refs().read_head(), Some(second.id()));
    assert_eq!(repository.database().len(), 2);
}

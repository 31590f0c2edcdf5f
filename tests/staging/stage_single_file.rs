use crate::common::repository;
use gitling::Repository;
use gitling::commands::porcelain::AddTarget;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Staging one of two new files reports the staged one under `A ` and
/// leaves the other untracked
#[rstest]
fn stage_single_file(mut repository: Repository) {
    repository.write_file("notes.txt", "jot").unwrap();
    repository.write_file("draft.txt", "wip").unwrap();

    let staged = repository
        .add(AddTarget::Paths(vec!["notes.txt".to_string()]))
        .unwrap();

    assert_eq!(staged, 1);

    let report = repository.status().unwrap();
    assert_eq!(report.staged, vec!["notes.txt"]);
    assert_eq!(report.modified, Vec::<String>::new());
    assert_eq!(report.untracked, vec!["draft.txt"]);
}

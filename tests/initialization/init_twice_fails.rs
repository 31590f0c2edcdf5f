use gitling::artifacts::branch::DEFAULT_BRANCH;
use gitling::{Error, Repository};
use pretty_assertions::assert_eq;
use rstest::rstest;

/// `init` creates an unborn default branch and refuses to run twice
#[rstest]
fn init_twice_fails() {
    let mut repository = Repository::new();

    let branch = repository.init().expect("first init succeeds");

    assert_eq!(branch, DEFAULT_BRANCH);
    assert_eq!(repository.refs().head_branch().as_ref(), DEFAULT_BRANCH);
    assert_eq!(repository.refs().read_head(), None);

    let second = repository.init();

    assert_eq!(second, Err(Error::AlreadyExists("repository".to_string())));
}

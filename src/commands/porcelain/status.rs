use crate::areas::index::IndexEntry;
use crate::areas::repository::Repository;
use crate::artifacts::status::status_info::StatusReport;

// Terminology:
// - staged: index content differs from the HEAD tree content
// - modified: working content differs from the HEAD tree and the path is
//   not staged
// - untracked: path has no HEAD tree entry and is not staged
impl Repository {
    /// Classify every interesting path; no side effects
    pub fn status(&self) -> crate::errors::Result<StatusReport> {
        self.require_initialized()?;

        let head_tree = self.head_tree()?;
        let mut report = StatusReport::default();

        for (path, entry) in self.index().entries() {
            let differs_from_head = match entry {
                IndexEntry::Staged(content) => head_tree.get(path) != Some(content.as_str()),
                IndexEntry::Removed => head_tree.contains(path),
            };
            // a path staged identically to HEAD is not reported
            if differs_from_head {
                report.staged.push(path.to_string());
            }
        }

        for (path, file) in self.workspace().files() {
            if self.index().contains(path) {
                continue;
            }
            match head_tree.get(path) {
                Some(head_content) if head_content != file.content() => {
                    report.modified.push(path.to_string());
                }
                Some(_) => {}
                None => report.untracked.push(path.to_string()),
            }
        }

        Ok(report)
    }
}

use crate::areas::repository::Repository;
use crate::errors::Error;

/// What `add` should stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddTarget {
    /// Every working file, unconditionally, including unchanged ones
    All,
    /// The named working files
    Paths(Vec<String>),
}

impl Repository {
    /// Copy working file contents into the index
    ///
    /// Fails with `NotFound` before staging anything if a named path is
    /// missing from the working set.
    ///
    /// # Returns
    ///
    /// The number of files staged
    pub fn add(&mut self, target: AddTarget) -> crate::errors::Result<usize> {
        self.require_initialized()?;

        let paths: Vec<String> = match target {
            AddTarget::All => self
                .workspace()
                .files()
                .map(|(path, _)| path.to_string())
                .collect(),
            AddTarget::Paths(paths) => {
                for path in &paths {
                    if !self.workspace().contains(path) {
                        return Err(Error::NotFound(format!("pathspec '{path}'")));
                    }
                }
                paths
            }
        };

        let count = paths.len();
        for path in paths {
            let content = self.workspace().read_file(&path)?.to_string();
            self.index_mut().stage(path, content);
        }

        Ok(count)
    }
}

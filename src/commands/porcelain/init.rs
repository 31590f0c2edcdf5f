use crate::areas::repository::Repository;
use crate::artifacts::branch::DEFAULT_BRANCH;
use crate::errors::Error;

impl Repository {
    /// Initialize the repository
    ///
    /// Sets the HEAD branch to `main`, unbound. The identity configured
    /// before `init` survives; everything else starts empty. Initializing
    /// twice fails so lessons can rely on a clean slate.
    pub fn init(&mut self) -> crate::errors::Result<&'static str> {
        if self.is_initialized() {
            return Err(Error::AlreadyExists("repository".to_string()));
        }

        self.mark_initialized();
        Ok(DEFAULT_BRANCH)
    }
}

use crate::areas::repository::Repository;
use crate::errors::Error;

/// Configuration keys the sandbox understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    UserName,
    UserEmail,
}

impl ConfigKey {
    pub fn try_parse(key: &str) -> crate::errors::Result<Self> {
        match key {
            "user.name" => Ok(ConfigKey::UserName),
            "user.email" => Ok(ConfigKey::UserEmail),
            other => Err(Error::Unsupported(format!("config key '{other}'"))),
        }
    }
}

impl Repository {
    /// Set an identity field
    ///
    /// Allowed before `init`, so a lesson can configure the committer up
    /// front.
    pub fn config(&mut self, key: ConfigKey, value: &str) -> crate::errors::Result<()> {
        match key {
            ConfigKey::UserName => self.identity_mut().set_name(value.to_string()),
            ConfigKey::UserEmail => self.identity_mut().set_email(value.to_string()),
        }
        Ok(())
    }
}

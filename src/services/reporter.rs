use crate::error::AppResult;

/// Log sink and run-status channel of the hosting CI platform.
pub trait Reporter: Send + Sync {
    fn info(&self, message: &str);
    /// Marks the run as failed.
    fn fail(&self, message: &str);
    /// Hides `secret` from everything the platform logs afterwards.
    fn mask(&self, secret: &str);
    fn set_output(&self, name: &str, value: &str) -> AppResult<()>;
}

//! Admin credential check for the dashboard login.

/// A single configured admin account.
#[derive(Debug, Clone)]
pub struct Credentials {
  username: String,
  password: String,
}

impl Credentials {
  pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
    Self {
      username: username.into(),
      password: password.into(),
    }
  }

  /// True iff both values match exactly.
  pub fn check(&self, username: &str, password: &str) -> bool {
    self.username == username && self.password == password
  }
}

impl Default for Credentials {
  fn default() -> Self {
    Self::new("admin", "password123")
  }
}

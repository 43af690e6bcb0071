use serde::Deserialize;

// Form payload for login submissions. Missing fields default to empty
// strings so a partial form reads as a credential mismatch, never a 422.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

// Static page bodies served by the handlers.
pub const HOME_PAGE: &str = "Hello World";
pub const ADMIN_PAGE: &str = "Admin Page";

pub const LOGIN_PAGE: &str = r#"<!doctype html>
<html>
  <head><title>Login</title></head>
  <body>
    <form method="post" action="/login">
      <label>Username <input type="text" name="username"></label>
      <label>Password <input type="password" name="password"></label>
      <button type="submit">Log in</button>
    </form>
  </body>
</html>
"#;

use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "type")]
    pub login_type: String,
    pub login: String,
    pub password: String,
}

impl LoginRequest {
    pub fn standard(login: &str, password: &str) -> Self {
        Self {
            login_type: "STANDARD_LOGIN".to_string(),
            login: login.to_string(),
            password: password.to_string(),
        }
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("type", &self.login_type)
            .field("login", &self.login)
            .finish()
    }
}

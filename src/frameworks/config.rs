use std::env;

// Runtime/server configuration, environment-driven with fixed defaults.

pub fn http_port() -> u16 {
    env::var("SESSION_GATE_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000)
}

pub fn admin_username() -> String {
    env::var("SESSION_GATE_USERNAME").unwrap_or_else(|_| "admin".to_string())
}

pub fn admin_password() -> String {
    env::var("SESSION_GATE_PASSWORD").unwrap_or_else(|_| "admin".to_string())
}

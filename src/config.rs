use std::env;

const DEFAULT_SESSIONS: &str = "08:30 - 10:00,10:00 - 11:30,13:00 - 14:30,14:30 - 16:00";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub slot_capacity: i64,
    pub department_quota: i64,
    pub sessions: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "slotbook.db".to_string()),
            slot_capacity: env::var("SLOT_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(25),
            department_quota: env::var("DEPARTMENT_QUOTA")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            sessions: env::var("SESSIONS")
                .ok()
                .map(|v| parse_sessions(&v))
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| parse_sessions(DEFAULT_SESSIONS)),
        }
    }

    pub fn knows_session(&self, session: &str) -> bool {
        self.sessions.iter().any(|s| s == session)
    }
}

fn parse_sessions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

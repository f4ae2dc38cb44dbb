use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub employee_id: String,
    pub name: String,
    pub division: String,
    pub department: String,
    pub date: String,
    pub session: String,
    /// The value encoded into the confirmation QR image. Derived from the
    /// employee id and regenerable, never authoritative.
    pub barcode: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub division: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub session: String,
}

impl CreateBookingRequest {
    pub fn validate(&self, config: &AppConfig) -> Result<(), String> {
        let required = [
            ("employeeId", &self.employee_id),
            ("name", &self.name),
            ("division", &self.division),
            ("department", &self.department),
            ("date", &self.date),
            ("session", &self.session),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(format!("{field} is required"));
            }
        }
        validate_slot(config, &self.date, &self.session)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleRequest {
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub new_date: String,
    #[serde(default)]
    pub new_session: String,
}

impl RescheduleRequest {
    pub fn validate(&self, config: &AppConfig) -> Result<(), String> {
        let required = [
            ("employeeId", &self.employee_id),
            ("newDate", &self.new_date),
            ("newSession", &self.new_session),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(format!("{field} is required"));
            }
        }
        validate_slot(config, &self.new_date, &self.new_session)
    }
}

/// Dates travel as ISO strings; sessions must be one of the configured labels.
fn validate_slot(config: &AppConfig, date: &str, session: &str) -> Result<(), String> {
    if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err(format!("invalid date: {date}"));
    }
    if !config.knows_session(session) {
        return Err(format!("unknown session: {session}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            port: 3000,
            database_url: ":memory:".to_string(),
            slot_capacity: 25,
            department_quota: 3,
            sessions: vec!["08:30 - 10:00".to_string(), "10:00 - 11:30".to_string()],
        }
    }

    fn valid_request() -> CreateBookingRequest {
        CreateBookingRequest {
            employee_id: "E-1001".to_string(),
            name: "Alice".to_string(),
            division: "Manufacturing".to_string(),
            department: "Quality".to_string(),
            date: "2025-06-01".to_string(),
            session: "08:30 - 10:00".to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(valid_request().validate(&test_config()).is_ok());
    }

    #[test]
    fn test_missing_department() {
        let mut req = valid_request();
        req.department = String::new();
        let err = req.validate(&test_config()).unwrap_err();
        assert!(err.contains("department"));
    }

    #[test]
    fn test_blank_employee_id() {
        let mut req = valid_request();
        req.employee_id = "   ".to_string();
        assert!(req.validate(&test_config()).is_err());
    }

    #[test]
    fn test_malformed_date() {
        let mut req = valid_request();
        req.date = "01-06-2025".to_string();
        let err = req.validate(&test_config()).unwrap_err();
        assert!(err.contains("invalid date"));
    }

    #[test]
    fn test_unknown_session() {
        let mut req = valid_request();
        req.session = "23:00 - 23:30".to_string();
        let err = req.validate(&test_config()).unwrap_err();
        assert!(err.contains("unknown session"));
    }

    #[test]
    fn test_reschedule_requires_all_fields() {
        let req = RescheduleRequest {
            employee_id: "E-1001".to_string(),
            new_date: String::new(),
            new_session: "08:30 - 10:00".to_string(),
        };
        let err = req.validate(&test_config()).unwrap_err();
        assert!(err.contains("newDate"));
    }
}

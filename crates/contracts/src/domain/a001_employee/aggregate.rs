use crate::enums::division::Division;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Employee record as served by `GET /employees`.
///
/// The schema is closed: unknown or missing fields reject the payload instead
/// of rendering blanks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Employee {
    /// NIP, the server-assigned employee number
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub position: String,
    pub division: Division,
    pub salary: Salary,
    #[serde(with = "calendar_date")]
    pub birth_date: NaiveDate,
    #[serde(with = "calendar_date")]
    pub join_date: NaiveDate,
    #[serde(
        rename = "WorkingStatus",
        alias = "workingStatus",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub working_status: Option<String>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Salary amount, kept as the decimal text the backend sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Salary(String);

impl Salary {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let trimmed = raw.trim();
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() && !trimmed.is_empty() => Ok(Self(trimmed.to_string())),
            _ => Err(format!("salary is not a number: {:?}", raw)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Salary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Salary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // the backend is inconsistent: some records carry a number, some a string
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawSalary {
            Text(String),
            Number(serde_json::Number),
        }

        let text = match RawSalary::deserialize(deserializer)? {
            RawSalary::Text(s) => s,
            RawSalary::Number(n) => n.to_string(),
        };
        Salary::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// Calendar dates on the wire: `YYYY-MM-DD` or a full RFC 3339 timestamp.
pub mod calendar_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{Deserialize, Deserializer, Serializer};

    pub const WIRE_FORMAT: &str = "%Y-%m-%d";

    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, WIRE_FORMAT)
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
    }

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(WIRE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {:?}", raw)))
    }
}

/// Form payload for `POST /employees` and `PUT /employees/{id}`.
///
/// Every field is kept as text so it can bind directly to inputs; validation
/// happens in the form before the payload is sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub position: String,
    pub division: String,
    pub salary: String,
    pub birth_date: String,
    pub join_date: String,
    #[serde(
        rename = "WorkingStatus",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub working_status: Option<String>,
}

impl From<Employee> for EmployeeDto {
    fn from(e: Employee) -> Self {
        Self {
            id: Some(e.id),
            first_name: e.first_name,
            last_name: e.last_name,
            address: e.address,
            position: e.position,
            division: e.division.into(),
            salary: e.salary.as_str().to_string(),
            birth_date: e.birth_date.format(calendar_date::WIRE_FORMAT).to_string(),
            join_date: e.join_date.format(calendar_date::WIRE_FORMAT).to_string(),
            working_status: e.working_status,
        }
    }
}

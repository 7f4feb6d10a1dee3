use async_trait::async_trait;
use contracts::domain::a001_employee::aggregate::{Employee, EmployeeDto};
use gloo_net::http::Request;
use thiserror::Error;

use crate::shared::api_utils::{api_url, employee_url};

/// Status the backend answers a successful delete with
const DELETE_OK_STATUS: u16 = 200;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmployeeApiError {
    #[error("failed to send request: {0}")]
    Transport(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("failed to serialize request: {0}")]
    Encode(String),
}

/// Remote employee collection used by the list page.
///
/// Each call is a single attempt; `fetch_all` returns the whole collection or
/// fails as a whole.
#[async_trait(?Send)]
pub trait EmployeeApi {
    async fn fetch_all(&self) -> Result<Vec<Employee>, EmployeeApiError>;
    async fn delete(&self, id: &str) -> Result<(), EmployeeApiError>;
}

/// `EmployeeApi` over HTTP
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpEmployeeApi;

#[async_trait(?Send)]
impl EmployeeApi for HttpEmployeeApi {
    async fn fetch_all(&self) -> Result<Vec<Employee>, EmployeeApiError> {
        fetch_employees().await
    }

    async fn delete(&self, id: &str) -> Result<(), EmployeeApiError> {
        delete_employee(id).await
    }
}

/// Decode the `GET /employees` body against the closed record schema
pub fn decode_employees(body: &str) -> Result<Vec<Employee>, EmployeeApiError> {
    serde_json::from_str(body).map_err(|e| EmployeeApiError::Decode(e.to_string()))
}

fn transport(e: gloo_net::Error) -> EmployeeApiError {
    EmployeeApiError::Transport(e.to_string())
}

/// Fetch all employees
pub async fn fetch_employees() -> Result<Vec<Employee>, EmployeeApiError> {
    let response = Request::get(&api_url("/employees"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(transport)?;

    if !response.ok() {
        return Err(EmployeeApiError::Status(response.status()));
    }

    let body = response.text().await.map_err(transport)?;
    decode_employees(&body)
}

/// Fetch one employee by NIP
pub async fn fetch_employee(id: &str) -> Result<Employee, EmployeeApiError> {
    let response = Request::get(&employee_url(id))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(transport)?;

    if !response.ok() {
        return Err(EmployeeApiError::Status(response.status()));
    }

    let body = response.text().await.map_err(transport)?;
    serde_json::from_str(&body).map_err(|e| EmployeeApiError::Decode(e.to_string()))
}

/// Delete employee. Only a 200 answer counts as success.
pub async fn delete_employee(id: &str) -> Result<(), EmployeeApiError> {
    let response = Request::delete(&employee_url(id))
        .send()
        .await
        .map_err(transport)?;

    if response.status() != DELETE_OK_STATUS {
        return Err(EmployeeApiError::Status(response.status()));
    }
    Ok(())
}

/// Create a new employee, or update it when the form carries an id
pub async fn save_employee(dto: &EmployeeDto) -> Result<(), EmployeeApiError> {
    let request = match dto.id.as_deref() {
        Some(id) => Request::put(&employee_url(id)),
        None => Request::post(&api_url("/employees")),
    };

    let response = request
        .header("Accept", "application/json")
        .json(dto)
        .map_err(|e| EmployeeApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(transport)?;

    if !response.ok() {
        return Err(EmployeeApiError::Status(response.status()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::division::Division;

    #[test]
    fn test_decode_collection() {
        let body = r#"[
            {"id":"A1","firstName":"Budi","lastName":"Santoso","address":"Bandung",
             "position":"Engineer","division":"Engineering","salary":"12000000",
             "birthDate":"1990-05-17","joinDate":"2019-02-01"},
            {"id":"A2","firstName":"Rina","lastName":"Putri","address":"Jakarta",
             "position":"Analyst","division":"Legal","salary":9000000,
             "birthDate":"1994-11-02","joinDate":"2022-08-10T00:00:00Z","WorkingStatus":"Remote"}
        ]"#;
        let records = decode_employees(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].division, Division::Engineering);
        assert_eq!(records[1].division, Division::Unrecognized("Legal".into()));
        assert_eq!(records[1].working_status.as_deref(), Some("Remote"));
    }

    #[test]
    fn test_decode_rejects_whole_collection_on_bad_record() {
        let body = r#"[
            {"id":"A1","firstName":"Budi","lastName":"Santoso","address":"Bandung",
             "position":"Engineer","division":"Engineering","salary":"12000000",
             "birthDate":"1990-05-17","joinDate":"2019-02-01"},
            {"id":"A2","firstName":"Rina"}
        ]"#;
        assert!(matches!(
            decode_employees(body),
            Err(EmployeeApiError::Decode(_))
        ));
    }

    #[test]
    fn test_decode_rejects_non_array() {
        assert!(decode_employees(r#"{"employees": []}"#).is_err());
        assert_eq!(decode_employees("[]").unwrap(), Vec::new());
    }
}

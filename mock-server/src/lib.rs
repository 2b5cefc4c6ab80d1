use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Employee {
    pub id: u64,
    pub name: String,
    pub salary: f64,
    pub city: String,
}

#[derive(Deserialize)]
pub struct EmployeeInput {
    pub name: String,
    pub salary: f64,
    pub city: String,
}

impl EmployeeInput {
    /// Same rules the client enforces, so a buggy client still gets a 400.
    fn check(&self) -> Result<(), ApiFailure> {
        if self.name.chars().count() < 2 {
            return Err(ApiFailure::bad_request("Name must be at least 2 characters"));
        }
        if !self.salary.is_finite() || self.salary < 0.0 {
            return Err(ApiFailure::bad_request("Salary must be positive"));
        }
        if self.city.chars().count() < 2 {
            return Err(ApiFailure::bad_request("City must be at least 2 characters"));
        }
        Ok(())
    }
}

/// Error response with the `{"error": ...}` body clients read.
pub struct ApiFailure {
    status: StatusCode,
    message: String,
}

impl ApiFailure {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "Employee not found".to_string(),
        }
    }
}

impl From<JsonRejection> for ApiFailure {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[derive(Default)]
pub struct Staff {
    next_id: u64,
    employees: BTreeMap<u64, Employee>,
}

pub type Db = Arc<RwLock<Staff>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Staff::default()));
    let employees = Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .with_state(db);
    Router::new().nest("/api", employees)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_employees(State(db): State<Db>) -> Json<Vec<Employee>> {
    let staff = db.read().await;
    Json(staff.employees.values().cloned().collect())
}

async fn create_employee(
    State(db): State<Db>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Employee>), ApiFailure> {
    let Json(input) = payload?;
    input.check()?;
    let mut staff = db.write().await;
    staff.next_id += 1;
    let employee = Employee {
        id: staff.next_id,
        name: input.name,
        salary: input.salary,
        city: input.city,
    };
    staff.employees.insert(employee.id, employee.clone());
    info!(id = employee.id, "employee created");
    Ok((StatusCode::CREATED, Json(employee)))
}

async fn get_employee(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Employee>, ApiFailure> {
    let staff = db.read().await;
    staff
        .employees
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(ApiFailure::not_found)
}

async fn update_employee(
    State(db): State<Db>,
    Path(id): Path<u64>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> Result<Json<Employee>, ApiFailure> {
    let Json(input) = payload?;
    let mut staff = db.write().await;
    let employee = staff.employees.get_mut(&id).ok_or_else(ApiFailure::not_found)?;
    input.check()?;
    employee.name = input.name;
    employee.salary = input.salary;
    employee.city = input.city;
    info!(id, "employee updated");
    Ok(Json(employee.clone()))
}

async fn delete_employee(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiFailure> {
    let mut staff = db.write().await;
    staff
        .employees
        .remove(&id)
        .ok_or_else(ApiFailure::not_found)?;
    info!(id, "employee deleted");
    Ok(StatusCode::NO_CONTENT)
}

//! # HR API
//!
//! Employee and meeting endpoints of the mock HR service.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use onboarding_core::models::{
    Employee, EmployeeUpdate, Meeting, NewMeeting, DEFAULT_MEETING_DURATION_MINUTES,
};
use onboarding_core::state::{EmployeeStore, MeetingStore};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use super::error::{ApiError, ErrorResponse};
use super::HealthResponse;

/// Stores served by the HR process
#[derive(Debug, Clone, Default)]
pub struct HrState {
    pub employees: EmployeeStore,
    pub meetings: MeetingStore,
}

// === API Types ===

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmployeeBody {
    pub name: String,
    pub email: String,
    pub title: String,
}

impl From<EmployeeBody> for Employee {
    fn from(body: EmployeeBody) -> Self {
        Employee::new(body.name, body.email, body.title)
    }
}

impl From<Employee> for EmployeeBody {
    fn from(employee: Employee) -> Self {
        Self {
            name: employee.name,
            email: employee.email,
            title: employee.title,
        }
    }
}

/// Partial update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub title: Option<String>,
}

impl From<EmployeePatch> for EmployeeUpdate {
    fn from(patch: EmployeePatch) -> Self {
        Self {
            name: patch.name,
            email: patch.email,
            title: patch.title,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedEmployee {
    pub employee_id: String,
}

fn default_duration() -> u32 {
    DEFAULT_MEETING_DURATION_MINUTES
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct MeetingRequest {
    pub subject: String,
    pub participants: Vec<String>,
    /// ISO-8601 start time, stored verbatim
    pub start_time: String,
    #[serde(default = "default_duration")]
    pub duration_minutes: u32,
}

impl From<MeetingRequest> for NewMeeting {
    fn from(req: MeetingRequest) -> Self {
        Self {
            subject: req.subject,
            participants: req.participants,
            start_time: req.start_time,
            duration_minutes: req.duration_minutes,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ScheduledResponse {
    pub meeting_id: String,
    /// Always `"scheduled"`
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MeetingResponse {
    pub meeting_id: String,
    pub subject: String,
    pub participants: Vec<String>,
    pub start_time: String,
    pub duration_minutes: u32,
    pub created_at: String,
}

impl From<Meeting> for MeetingResponse {
    fn from(meeting: Meeting) -> Self {
        Self {
            meeting_id: meeting.meeting_id,
            subject: meeting.subject,
            participants: meeting.participants,
            start_time: meeting.start_time,
            duration_minutes: meeting.duration_minutes,
            created_at: meeting.created_at.to_rfc3339(),
        }
    }
}

// === OpenAPI Definition ===

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mock HR API",
        version = "1.0.0",
        description = "In-memory employee profiles and meetings for the onboarding assistant"
    ),
    paths(
        create_employee,
        get_employee,
        update_employee,
        create_meeting,
        get_meeting,
        list_meetings
    ),
    components(schemas(
        EmployeeBody,
        EmployeePatch,
        CreatedEmployee,
        MeetingRequest,
        ScheduledResponse,
        MeetingResponse,
        ErrorResponse
    )),
    tags(
        (name = "employees", description = "Employee profiles"),
        (name = "meetings", description = "Meeting scheduling")
    )
)]
struct HrApiDoc;

pub fn hr_router(state: HrState) -> Router {
    Router::new()
        .route("/employees", post(create_employee))
        .route("/employees/:id", get(get_employee).patch(update_employee))
        .route("/meetings", get(list_meetings).post(create_meeting))
        .route("/meetings/:id", get(get_meeting))
        .route("/health", get(health))
        .route("/openapi.json", get(serve_openapi))
        .with_state(state)
}

// === Employee Handlers ===

/// Create an employee profile
#[utoipa::path(
    post,
    path = "/employees",
    tag = "employees",
    request_body = EmployeeBody,
    responses(
        (status = 200, description = "Profile created", body = CreatedEmployee)
    )
)]
async fn create_employee(
    State(state): State<HrState>,
    Json(body): Json<EmployeeBody>,
) -> Result<Json<CreatedEmployee>, ApiError> {
    let employee_id = state.employees.create(body.into())?;
    tracing::info!(employee_id = %employee_id, "Employee created");
    Ok(Json(CreatedEmployee { employee_id }))
}

/// Get an employee profile
#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = "employees",
    params(("id" = String, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee profile", body = EmployeeBody),
        (status = 404, description = "Unknown employee", body = ErrorResponse)
    )
)]
async fn get_employee(
    State(state): State<HrState>,
    Path(id): Path<String>,
) -> Result<Json<EmployeeBody>, ApiError> {
    let employee = state.employees.get(&id)?;
    Ok(Json(employee.into()))
}

/// Update only the supplied fields of a profile
#[utoipa::path(
    patch,
    path = "/employees/{id}",
    tag = "employees",
    params(("id" = String, Path, description = "Employee ID")),
    request_body = EmployeePatch,
    responses(
        (status = 200, description = "Merged profile", body = EmployeeBody),
        (status = 404, description = "Unknown employee", body = ErrorResponse)
    )
)]
async fn update_employee(
    State(state): State<HrState>,
    Path(id): Path<String>,
    Json(patch): Json<EmployeePatch>,
) -> Result<Json<EmployeeBody>, ApiError> {
    let employee = state.employees.update(&id, patch.into())?;
    tracing::info!(employee_id = %id, "Employee updated");
    Ok(Json(employee.into()))
}

// === Meeting Handlers ===

/// Schedule a meeting
#[utoipa::path(
    post,
    path = "/meetings",
    tag = "meetings",
    request_body = MeetingRequest,
    responses(
        (status = 201, description = "Meeting scheduled", body = ScheduledResponse)
    )
)]
async fn create_meeting(
    State(state): State<HrState>,
    Json(req): Json<MeetingRequest>,
) -> Result<(StatusCode, Json<ScheduledResponse>), ApiError> {
    let participants = req.participants.len();
    let scheduled = state.meetings.create(req.into())?;
    tracing::info!(meeting_id = %scheduled.meeting_id, participants, "Meeting scheduled");

    Ok((
        StatusCode::CREATED,
        Json(ScheduledResponse {
            meeting_id: scheduled.meeting_id,
            status: scheduled.status.as_str().to_string(),
        }),
    ))
}

/// Get a meeting
#[utoipa::path(
    get,
    path = "/meetings/{id}",
    tag = "meetings",
    params(("id" = String, Path, description = "Meeting ID")),
    responses(
        (status = 200, description = "Meeting record", body = MeetingResponse),
        (status = 404, description = "Unknown meeting", body = ErrorResponse)
    )
)]
async fn get_meeting(
    State(state): State<HrState>,
    Path(id): Path<String>,
) -> Result<Json<MeetingResponse>, ApiError> {
    let meeting = state
        .meetings
        .get(&id)
        .map_err(|e| ApiError::from_store(e, "Meeting not found"))?;
    Ok(Json(meeting.into()))
}

/// List all meetings
#[utoipa::path(
    get,
    path = "/meetings",
    tag = "meetings",
    responses(
        (status = 200, description = "All meetings in booking order", body = Vec<MeetingResponse>)
    )
)]
async fn list_meetings(
    State(state): State<HrState>,
) -> Result<Json<Vec<MeetingResponse>>, ApiError> {
    let meetings = state.meetings.list()?;
    Ok(Json(meetings.into_iter().map(Into::into).collect()))
}

async fn health(State(state): State<HrState>) -> Json<HealthResponse> {
    tracing::debug!(
        employees = state.employees.len(),
        meetings = state.meetings.len(),
        "Health check"
    );
    Json(HealthResponse::ok("hr"))
}

async fn serve_openapi() -> impl IntoResponse {
    let spec = HrApiDoc::openapi().to_json().unwrap_or_default();
    ([(header::CONTENT_TYPE, "application/json")], spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, response::Response};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response: Response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_create_and_get_employee() {
        let app = hr_router(HrState::default());

        let (status, created) = call(
            &app,
            "POST",
            "/employees",
            Some(json!({"name": "Alice", "email": "alice@example.com", "title": "Engineer"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let id = created["employee_id"].as_str().unwrap().to_string();

        let (status, employee) = call(&app, "GET", &format!("/employees/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            employee,
            json!({"name": "Alice", "email": "alice@example.com", "title": "Engineer"})
        );
    }

    #[tokio::test]
    async fn test_get_nonexistent_employee() {
        let app = hr_router(HrState::default());
        let (status, body) = call(&app, "GET", "/employees/not-exist", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "Not found"}));
    }

    #[tokio::test]
    async fn test_patch_merges_supplied_fields() {
        let state = HrState::default();
        let id = state
            .employees
            .create(Employee::new("Alice", "alice@example.com", "Engineer"))
            .unwrap();
        let app = hr_router(state);

        let (status, body) = call(
            &app,
            "PATCH",
            &format!("/employees/{}", id),
            Some(json!({"title": "Lead"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"name": "Alice", "email": "alice@example.com", "title": "Lead"})
        );
    }

    #[tokio::test]
    async fn test_patch_unknown_employee() {
        let app = hr_router(HrState::default());
        let (status, _) = call(&app, "PATCH", "/employees/nope", Some(json!({"name": "X"}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_employee_rejects_missing_fields() {
        let state = HrState::default();
        let app = hr_router(state.clone());
        let (status, _) = call(&app, "POST", "/employees", Some(json!({"name": "Alice"}))).await;

        assert!(status.is_client_error());
        assert!(state.employees.is_empty());
    }

    #[tokio::test]
    async fn test_meeting_lifecycle() {
        let app = hr_router(HrState::default());

        let (status, scheduled) = call(
            &app,
            "POST",
            "/meetings",
            Some(json!({
                "subject": "Orientation",
                "participants": ["alice@example.com", "bob@example.com"],
                "start_time": "2025-01-06T09:00:00"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(scheduled["status"], "scheduled");
        let id = scheduled["meeting_id"].as_str().unwrap().to_string();

        let (status, meeting) = call(&app, "GET", &format!("/meetings/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(meeting["meeting_id"], id.as_str());
        assert_eq!(meeting["duration_minutes"], 60);
        assert!(meeting["created_at"].as_str().is_some());

        let (status, all) = call(&app, "GET", "/meetings", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(all.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_meeting() {
        let app = hr_router(HrState::default());
        let (status, body) = call(&app, "GET", "/meetings/missing", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Meeting not found");
    }

    #[tokio::test]
    async fn test_openapi_lists_routes() {
        let app = hr_router(HrState::default());
        let (status, doc) = call(&app, "GET", "/openapi.json", None).await;

        assert_eq!(status, StatusCode::OK);
        assert!(doc["paths"].get("/employees/{id}").is_some());
        assert!(doc["paths"].get("/meetings").is_some());
    }
}

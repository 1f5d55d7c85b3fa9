use crate::errors::AppError;
use crate::format::{format_fcfa, format_time};
use crate::models::{
    CourseForm, CourseListResponse, CourseRequest, CourseResponse, CourseSubmission, ExpenseForm,
    ExpenseListResponse, ExpenseRequest, ExpenseResponse, ExpenseSubmission, LedgerTotalsResponse,
    OnlineResponse, PaymentMode, SessionResponse, SessionState, Tab,
};
use crate::state::AppState;
use crate::ui::render_index;
use crate::view::{self, DashboardView};
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form, Json,
};
use tracing::debug;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    let view = DashboardView::build(&state.driver, &session);
    Html(render_index(&view))
}

pub async fn toggle_online(State(state): State<AppState>) -> Redirect {
    state.session.lock().await.toggle_online();
    Redirect::to("/")
}

pub async fn set_tab(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Redirect, AppError> {
    let tab = Tab::parse(&key).ok_or_else(|| AppError::bad_request("unknown tab"))?;
    state.session.lock().await.set_tab(tab);
    Ok(Redirect::to("/"))
}

pub async fn submit_course(
    State(state): State<AppState>,
    Form(form): Form<CourseForm>,
) -> Redirect {
    // invalid input is dropped without feedback; the page re-renders unchanged
    match CourseSubmission::parse_form(&form.amount, form.mode.as_deref(), form.note.as_deref()) {
        Some(submission) => {
            state.session.lock().await.record_course(submission);
        }
        None => debug!("dropped invalid course submission: {:?}", form.amount),
    }
    Redirect::to("/")
}

pub async fn submit_depense(
    State(state): State<AppState>,
    Form(form): Form<ExpenseForm>,
) -> Redirect {
    match ExpenseSubmission::parse_form(&form.label, &form.amount) {
        Some(submission) => {
            state.session.lock().await.record_depense(submission);
        }
        None => debug!("dropped invalid expense submission"),
    }
    Redirect::to("/")
}

pub async fn api_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let session = state.session.lock().await;
    Json(to_session_response(&session))
}

pub async fn api_online(State(state): State<AppState>) -> Json<OnlineResponse> {
    let online = state.session.lock().await.toggle_online();
    Json(OnlineResponse {
        online,
        label: view::online_label(online).to_string(),
    })
}

pub async fn api_course(
    State(state): State<AppState>,
    Json(payload): Json<CourseRequest>,
) -> Result<Json<LedgerTotalsResponse>, AppError> {
    let submission = CourseSubmission::new(
        payload.amount,
        PaymentMode::from_form(payload.mode.as_deref()),
        payload.note.as_deref().unwrap_or_default(),
    )
    .ok_or_else(|| AppError::bad_request("amount must be a positive integer"))?;

    let mut session = state.session.lock().await;
    session.record_course(submission);
    Ok(Json(course_totals(&session)))
}

pub async fn api_depense(
    State(state): State<AppState>,
    Json(payload): Json<ExpenseRequest>,
) -> Result<Json<LedgerTotalsResponse>, AppError> {
    let submission = ExpenseSubmission::new(&payload.label, payload.amount)
        .ok_or_else(|| AppError::bad_request("label and a positive amount are required"))?;

    let mut session = state.session.lock().await;
    session.record_depense(submission);
    Ok(Json(depense_totals(&session)))
}

fn course_totals(session: &SessionState) -> LedgerTotalsResponse {
    let total = view::courses_total(&session.courses);
    LedgerTotalsResponse {
        count: session.courses.len(),
        total,
        total_label: format_fcfa(total),
    }
}

fn depense_totals(session: &SessionState) -> LedgerTotalsResponse {
    let total = view::depenses_total(&session.depenses);
    LedgerTotalsResponse {
        count: session.depenses.len(),
        total,
        total_label: format_fcfa(total),
    }
}

fn to_session_response(session: &SessionState) -> SessionResponse {
    let courses_total = view::courses_total(&session.courses);
    let depenses_total = view::depenses_total(&session.depenses);

    SessionResponse {
        online: session.is_online,
        tab: session.current_tab.key().to_string(),
        gps: session.gps.clone(),
        courses: CourseListResponse {
            count: session.courses.len(),
            total: courses_total,
            total_label: format_fcfa(courses_total),
            entries: session
                .courses
                .iter()
                .map(|entry| CourseResponse {
                    id: entry.id.clone(),
                    amount: entry.amount,
                    mode: entry.mode.key().to_string(),
                    note: entry.note.clone(),
                    time: format_time(entry.created_at),
                })
                .collect(),
        },
        depenses: ExpenseListResponse {
            count: session.depenses.len(),
            total: depenses_total,
            total_label: format_fcfa(depenses_total),
            entries: session
                .depenses
                .iter()
                .map(|entry| ExpenseResponse {
                    id: entry.id.clone(),
                    label: entry.label.clone(),
                    amount: entry.amount,
                    time: format_time(entry.created_at),
                })
                .collect(),
        },
    }
}

use axum::{
    extract::{Path, Query, Request, State},
    http::HeaderMap,
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::auth;
use crate::catalog::Catalog;
use crate::error::ApiError;
use crate::models::{Currency, Role};
use crate::routes::{Route, RouteEntry};
use crate::session::{LoginStep, SessionContext, SessionSnapshot};
use crate::views::{dashboard, detail, marketplace, news, p2p};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub session: Arc<RwLock<SessionContext>>,
    pub jwt_secret: Arc<str>,
}

impl AppState {
    pub fn new(catalog: Catalog, session: SessionContext, jwt_secret: &str) -> Self {
        Self {
            catalog: Arc::new(catalog),
            session: Arc::new(RwLock::new(session)),
            jwt_secret: Arc::from(jwt_secret),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct RoleRequest {
    pub role: Role,
}

#[derive(Debug, Deserialize)]
pub struct CurrencyRequest {
    pub currency: Currency,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepResponse {
    pub step: LoginStep,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub redirect: String,
    pub session: SessionSnapshot,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutResponse {
    pub redirect: String,
    pub session: SessionSnapshot,
}

async fn authenticate(
    headers: HeaderMap,
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = headers.get("Authorization").ok_or(ApiError::MissingToken)?;
    let token = auth_header
        .to_str()
        .ok()
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or(ApiError::MalformedToken)?;
    let role = auth::validate_token(token, &state.jwt_secret)?;
    // The token only stands for the session; logout or a role switch revokes it.
    if state.session.read().await.role() != Some(role) {
        return Err(ApiError::SessionEnded(role));
    }
    log::info!("Authenticated {} for {}", role.as_str(), request.uri().path());
    request.extensions_mut().insert(role);
    Ok(next.run(request).await)
}

fn require_role(actual: Role, required: Role) -> Result<(), ApiError> {
    if actual == required {
        Ok(())
    } else {
        Err(ApiError::Forbidden(required))
    }
}

fn redirect(route: Route) -> Response {
    let path = route.path();
    log::info!("Redirecting to {}", path);
    Redirect::to(&path).into_response()
}

async fn route_surface() -> Json<Vec<RouteEntry>> {
    Json(Route::surface())
}

async fn list_lots(
    State(state): State<AppState>,
    Query(query): Query<marketplace::LotsQuery>,
) -> Json<marketplace::LotsView> {
    Json(marketplace::lots_view(&state.catalog, &query))
}

async fn get_lot(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match detail::object_detail(&state.catalog, &id) {
        Some(detail) => Json(detail).into_response(),
        None => redirect(Route::Lots),
    }
}

async fn get_owner(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match dashboard::owner_dashboard(&state.catalog, &id) {
        Some(view) => Json(view).into_response(),
        None => redirect(Route::Home),
    }
}

async fn order_book(
    State(state): State<AppState>,
    Query(query): Query<p2p::OrderBookQuery>,
) -> Json<p2p::OrderBookView> {
    Json(p2p::order_book(&state.catalog, &query))
}

async fn list_news(State(state): State<AppState>, Query(query): Query<news::NewsQuery>) -> Response {
    match query.article.as_deref() {
        Some(slug) => match news::article(&state.catalog, slug) {
            Some(item) => Json(item).into_response(),
            None => redirect(Route::News),
        },
        None => Json(news::news_feed(&state.catalog, query.category.as_deref())).into_response(),
    }
}

async fn get_session(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.session.read().await.snapshot())
}

async fn submit_email(
    State(state): State<AppState>,
    Json(body): Json<EmailRequest>,
) -> Result<Json<StepResponse>, ApiError> {
    let mut session = state.session.write().await;
    session.submit_email(&body.email)?;
    Ok(Json(StepResponse { step: session.login_step() }))
}

async fn choose_role(
    State(state): State<AppState>,
    Json(body): Json<RoleRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let mut session = state.session.write().await;
    let (route, token) = session.choose_role_with(body.role, |role| {
        auth::create_token(role, &state.jwt_secret).map_err(ApiError::TokenIssue)
    })?;
    Ok(Json(LoginResponse {
        token,
        redirect: route.path(),
        session: session.snapshot(),
    }))
}

async fn set_currency(
    State(state): State<AppState>,
    Json(body): Json<CurrencyRequest>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let mut session = state.session.write().await;
    session.set_currency(body.currency)?;
    Ok(Json(session.snapshot()))
}

async fn logout(State(state): State<AppState>) -> Result<Json<LogoutResponse>, ApiError> {
    let mut session = state.session.write().await;
    let route = session.logout()?;
    Ok(Json(LogoutResponse {
        redirect: route.path(),
        session: session.snapshot(),
    }))
}

async fn investor_dashboard(
    State(state): State<AppState>,
    Extension(role): Extension<Role>,
) -> Result<Json<dashboard::InvestorDashboard>, ApiError> {
    require_role(role, Role::Investor)?;
    let wallet = state.session.read().await.wallet();
    Ok(Json(dashboard::investor_dashboard(&state.catalog, wallet)))
}

async fn owner_dashboard(
    State(state): State<AppState>,
    Extension(role): Extension<Role>,
) -> Result<Response, ApiError> {
    require_role(role, Role::Owner)?;
    let view = state
        .catalog
        .demo_owner()
        .and_then(|owner| dashboard::owner_dashboard(&state.catalog, &owner.id));
    Ok(match view {
        Some(view) => Json(view).into_response(),
        None => redirect(Route::Home),
    })
}

pub fn router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/api/dashboard/investor", get(investor_dashboard))
        .route("/api/dashboard/owner", get(owner_dashboard))
        .layer(middleware::from_fn_with_state(state.clone(), authenticate));

    Router::new()
        .route("/", get(|| async { "Fractional Estate demo API" }))
        .route("/api/routes", get(route_surface))
        .route("/api/lots", get(list_lots))
        .route("/api/lots/:id", get(get_lot))
        .route("/api/owners/:id", get(get_owner))
        .route("/api/p2p", get(order_book))
        .route("/api/news", get(list_news))
        .route("/api/session", get(get_session))
        .route("/api/session/email", post(submit_email))
        .route("/api/session/role", post(choose_role))
        .route("/api/session/currency", post(set_currency))
        .route("/api/session/logout", post(logout))
        .merge(protected_routes)
        .with_state(state)
}

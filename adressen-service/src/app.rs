use std::sync::Arc;

use adressen::{
    Adressen, AdressenError, CoordinateQuery, DetailRef, MatchQuery, Resolution, SearchReport,
};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use serde_json::json;

const WELCOME: &str = "Welcome to adressenregister-fuzzy-search-service.";
const MISSING_QUERY: &str = "Please, include ?query=your address";
const MISSING_URI: &str = "Please, include ?uri=http://foo";
const BAD_LATLON: &str = "Please, include ?lat=<latitude>&lon=<longitude>";

/// Build the route table over a shared orchestrator.
pub fn router(adressen: Arc<Adressen>) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/search", get(search))
        .route("/match", get(match_address))
        .route("/detail", get(detail))
        .route("/suggest-from-latlon", get(suggest_from_latlon))
        .with_state(adressen)
}

/// Error body `{ "msg": ... }` with its status.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    msg: String,
}

impl ApiError {
    fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            msg: msg.into(),
        }
    }
}

impl From<AdressenError> for ApiError {
    fn from(e: AdressenError) -> Self {
        Self {
            status: StatusCode::from_u16(e.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            msg: e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = self.status.as_u16(), msg = %self.msg, "request failed");
        }
        (self.status, Json(json!({ "msg": self.msg }))).into_response()
    }
}

async fn welcome() -> Json<serde_json::Value> {
    Json(json!({ "msg": WELCOME }))
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    query: Option<String>,
}

async fn search(
    State(adressen): State<Arc<Adressen>>,
    Query(p): Query<SearchParams>,
) -> Result<Json<SearchReport>, ApiError> {
    let Some(query) = p.query.filter(|q| !q.is_empty()) else {
        return Err(ApiError::bad_request(MISSING_QUERY));
    };
    Ok(Json(adressen.search(&query).await?))
}

#[derive(Debug, Deserialize)]
struct MatchParams {
    municipality: Option<String>,
    zipcode: Option<String>,
    thoroughfarename: Option<String>,
    housenumber: Option<String>,
}

impl From<MatchParams> for MatchQuery {
    fn from(p: MatchParams) -> Self {
        Self {
            municipality: p.municipality,
            zipcode: p.zipcode,
            thoroughfare_name: p.thoroughfarename,
            house_number: p.housenumber,
        }
    }
}

async fn match_address(
    State(adressen): State<Arc<Adressen>>,
    Query(p): Query<MatchParams>,
) -> Result<Json<Resolution>, ApiError> {
    Ok(Json(adressen.match_address(&p.into()).await?))
}

#[derive(Debug, Deserialize)]
struct DetailParams {
    uri: Option<String>,
    id: Option<String>,
}

async fn detail(
    State(adressen): State<Arc<Adressen>>,
    Query(p): Query<DetailParams>,
) -> Result<Json<Resolution>, ApiError> {
    let reference = match (p.uri.filter(|s| !s.is_empty()), p.id.filter(|s| !s.is_empty())) {
        (Some(uri), _) => DetailRef::Uri(uri),
        (None, Some(id)) => DetailRef::Id(id),
        (None, None) => return Err(ApiError::bad_request(MISSING_URI)),
    };
    match adressen.detail(&reference).await {
        Ok(r) => Ok(Json(r)),
        Err(AdressenError::NotFound { .. }) => Err(ApiError {
            status: StatusCode::NOT_FOUND,
            msg: format!("Details not found for {reference}"),
        }),
        Err(e) => Err(e.into()),
    }
}

#[derive(Debug, Deserialize)]
struct LatLonParams {
    lat: Option<String>,
    lon: Option<String>,
    count: Option<String>,
}

impl TryFrom<LatLonParams> for CoordinateQuery {
    type Error = ApiError;

    fn try_from(p: LatLonParams) -> Result<Self, ApiError> {
        let coord = |v: Option<String>| {
            v.and_then(|s| s.trim().parse::<f64>().ok())
                .ok_or_else(|| ApiError::bad_request(BAD_LATLON))
        };
        let mut q = Self::new(coord(p.lat)?, coord(p.lon)?);
        if let Some(c) = p.count.filter(|s| !s.is_empty()) {
            let c = c
                .trim()
                .parse::<u32>()
                .map_err(|_| ApiError::bad_request(format!("count must be a positive integer, got '{c}'")))?;
            q = q.count(c);
        }
        Ok(q)
    }
}

async fn suggest_from_latlon(
    State(adressen): State<Arc<Adressen>>,
    Query(p): Query<LatLonParams>,
) -> Result<Json<Vec<adressen::AddressEnvelope>>, ApiError> {
    let q = CoordinateQuery::try_from(p)?;
    Ok(Json(adressen.suggest_from_latlon(&q).await?))
}

// region:    --- Imports
use crate::auction::commands::{create_new_auction, CreateAuctionCommand};
use crate::bidding::commands::{make_new_bid, PlaceBidCommand};
use crate::database::SharedDatabase;
use crate::error::StoreError;
use crate::query;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

// endregion: --- Imports

// region:    --- Router
/// 라우터 설정
pub fn routes(db: SharedDatabase) -> Router {
    Router::new()
        .route("/auctions", post(handle_create_auction))
        .route("/auctions/available", get(handle_get_available_auctions))
        .route("/auctions/range", get(handle_get_auctions_in_range))
        .route("/auctions/:id", get(handle_get_auction))
        .route(
            "/sellers/:seller_id/auctions",
            get(handle_get_seller_auctions),
        )
        .route("/bids", post(handle_make_bid))
        .with_state(db)
}

/// 저장소 오류 응답
fn error_response(e: StoreError) -> Response {
    let (status, code) = match &e {
        StoreError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
        StoreError::Read { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "STORE_READ_FAILED"),
        StoreError::Write { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "STORE_WRITE_FAILED"),
    };
    (status, Json(json!({"error": e.to_string(), "code": code}))).into_response()
}
// endregion: --- Router

// region:    --- Command Handlers

/// 경매 생성 요청 처리
pub async fn handle_create_auction(
    State(db): State<SharedDatabase>,
    Json(cmd): Json<CreateAuctionCommand>,
) -> impl IntoResponse {
    info!("{:<12} --> 경매 생성 요청: {:?}", "Handler", cmd);
    match create_new_auction(db.as_ref(), cmd).await {
        Ok(id) => (StatusCode::CREATED, Json(json!({ "id": id }))).into_response(),
        Err(e) => error_response(e),
    }
}

/// 입찰 요청 처리
pub async fn handle_make_bid(
    State(db): State<SharedDatabase>,
    Json(cmd): Json<PlaceBidCommand>,
) -> impl IntoResponse {
    info!("{:<12} --> 입찰 요청: {:?}", "Handler", cmd);
    match make_new_bid(db.as_ref(), cmd).await {
        Ok(id) => (StatusCode::CREATED, Json(json!({ "id": id }))).into_response(),
        Err(e) => error_response(e),
    }
}

// endregion: --- Command Handlers

// region:    --- Query Handlers

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeParams {
    pub start_time: i64,
    pub end_time: Option<i64>,
}

/// 경매 상세 조회
pub async fn handle_get_auction(
    State(db): State<SharedDatabase>,
    Path(auction_id): Path<String>,
) -> impl IntoResponse {
    info!("{:<12} --> 경매 상세 조회 id: {}", "Handler", auction_id);
    match query::handlers::fetch_auction_by_id(db.as_ref(), &auction_id).await {
        Ok(Some(details)) => Json(details).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": format!("auction {} not found", auction_id),
                "code": "NOT_FOUND"
            })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// 판매자 경매 조회
pub async fn handle_get_seller_auctions(
    State(db): State<SharedDatabase>,
    Path(seller_id): Path<String>,
) -> impl IntoResponse {
    info!("{:<12} --> 판매자 경매 조회 seller: {}", "Handler", seller_id);
    match query::handlers::fetch_auctions_by_seller(db.as_ref(), &seller_id).await {
        Ok(auctions) => Json(auctions).into_response(),
        Err(e) => error_response(e),
    }
}

/// 진행 중인 경매 조회
pub async fn handle_get_available_auctions(State(db): State<SharedDatabase>) -> impl IntoResponse {
    info!("{:<12} --> 진행 중인 경매 조회", "Handler");
    match query::handlers::fetch_available_auctions(db.as_ref()).await {
        Ok(auctions) => Json(auctions).into_response(),
        Err(e) => error_response(e),
    }
}

/// 기간 내 경매 조회
pub async fn handle_get_auctions_in_range(
    State(db): State<SharedDatabase>,
    Query(params): Query<RangeParams>,
) -> impl IntoResponse {
    info!("{:<12} --> 기간 내 경매 조회: {:?}", "Handler", params);
    match query::handlers::fetch_auctions_in_range(db.as_ref(), params.start_time, params.end_time)
        .await
    {
        Ok(auctions) => Json(auctions).into_response(),
        Err(e) => error_response(e),
    }
}

// endregion: --- Query Handlers

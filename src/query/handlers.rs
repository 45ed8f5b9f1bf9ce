// region:    --- Imports
use super::filter::AuctionFilter;
use crate::auction::model::{AuctionDetails, StoredAuction};
use crate::database::AuctionDatabase;
use crate::error::StoreError;
use chrono::Utc;
use tracing::{error, info};

// endregion: --- Imports

// region:    --- Query Handlers

/// 경매 상세 조회 (입찰 내역 포함)
/// 경매가 없으면 None, 이 경우 입찰은 조회하지 않는다.
pub async fn fetch_auction_by_id(
    db: &dyn AuctionDatabase,
    auction_id: &str,
) -> Result<Option<AuctionDetails>, StoreError> {
    info!("{:<12} --> 경매 상세 조회 id: {}", "Query", auction_id);
    let auction = db.get_auction(auction_id).await.map_err(|e| {
        error!("{:<12} --> 경매 {} 조회 실패: {}", "Query", auction_id, e);
        StoreError::read("fetch_auction_by_id", e)
    })?;

    let Some(auction) = auction else {
        info!("{:<12} --> 경매 없음 id: {}", "Query", auction_id);
        return Ok(None);
    };

    let bidders_and_bids = db.find_bids_by_auction(auction_id).await.map_err(|e| {
        error!(
            "{:<12} --> 경매 {} 입찰 내역 조회 실패: {}",
            "Query", auction_id, e
        );
        StoreError::read("fetch_auction_by_id", e)
    })?;

    Ok(Some(AuctionDetails {
        auction,
        bidders_and_bids,
    }))
}

/// 판매자별 경매 조회
pub async fn fetch_auctions_by_seller(
    db: &dyn AuctionDatabase,
    seller_id: &str,
) -> Result<Vec<StoredAuction>, StoreError> {
    info!("{:<12} --> 판매자 경매 조회 seller: {}", "Query", seller_id);
    find(
        db,
        "fetch_auctions_by_seller",
        &AuctionFilter::by_seller(seller_id),
    )
    .await
}

/// 진행 중인 경매 조회 (endTime >= 현재 시각)
pub async fn fetch_available_auctions(
    db: &dyn AuctionDatabase,
) -> Result<Vec<StoredAuction>, StoreError> {
    let now = Utc::now().timestamp_millis();
    info!("{:<12} --> 진행 중인 경매 조회 now: {}", "Query", now);
    find(db, "fetch_available_auctions", &AuctionFilter::open_at(now)).await
}

/// 기간 내 경매 조회
pub async fn fetch_auctions_in_range(
    db: &dyn AuctionDatabase,
    start_time: i64,
    end_time: Option<i64>,
) -> Result<Vec<StoredAuction>, StoreError> {
    info!(
        "{:<12} --> 기간 내 경매 조회 start: {}, end: {:?}",
        "Query", start_time, end_time
    );
    find(
        db,
        "fetch_auctions_in_range",
        &AuctionFilter::in_range(start_time, end_time),
    )
    .await
}

async fn find(
    db: &dyn AuctionDatabase,
    operation: &'static str,
    filter: &AuctionFilter,
) -> Result<Vec<StoredAuction>, StoreError> {
    db.find_auctions(filter).await.map_err(|e| {
        error!(
            "{:<12} --> {} 실패 filter: {:?}: {}",
            "Query", operation, filter, e
        );
        StoreError::read(operation, e)
    })
}

// endregion: --- Query Handlers

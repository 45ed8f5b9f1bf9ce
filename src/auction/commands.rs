/// 경매 관련 커맨드 처리
/// 1. 경매 생성
// region:    --- Imports
use crate::auction::model::{Auction, AuctionId};
use crate::database::AuctionDatabase;
use crate::error::{StoreError, ValidationError};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Commands
/// 경매 생성 명령
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuctionCommand {
    pub seller: String,
    pub initial_price: f64,
    pub item: String,
    /// 경매 기간 (ms)
    pub duration: i64,
    pub quantity: i64,
}

impl CreateAuctionCommand {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.seller.trim().is_empty() {
            return Err(ValidationError::EmptyField("seller"));
        }
        if self.item.trim().is_empty() {
            return Err(ValidationError::EmptyField("item"));
        }
        if !self.initial_price.is_finite() {
            return Err(ValidationError::NonFiniteAmount("initialPrice"));
        }
        Ok(())
    }
}

/// 1. 경매 생성
pub async fn create_new_auction(
    db: &dyn AuctionDatabase,
    cmd: CreateAuctionCommand,
) -> Result<AuctionId, StoreError> {
    info!("{:<12} --> 경매 생성 요청 처리 시작: {:?}", "Command", cmd);
    let now = Utc::now().timestamp_millis();

    let auction = Auction::open(&cmd, now).map_err(|e| {
        error!("{:<12} --> 경매 생성 입력 오류: {}", "Command", e);
        StoreError::from(e)
    })?;

    let auction_id = db.insert_auction(&auction).await.map_err(|e| {
        error!("{:<12} --> 경매 생성 실패: {}", "Command", e);
        StoreError::write("create_new_auction", e)
    })?;

    info!("{:<12} --> 경매 생성 완료 id: {}", "Command", auction_id);
    Ok(auction_id)
}
// endregion: --- Commands

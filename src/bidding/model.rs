use serde::{Deserialize, Serialize};

/// 입찰 식별자 (저장소가 생성)
pub type BidId = String;

// 입찰 모델
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Bid {
    #[serde(rename = "auctionId")]
    pub auction_id: String,
    #[serde(rename = "bidderId")]
    pub bidder_id: String,
    pub bid: f64,
    pub time: i64,
}

// id가 붙은 입찰 모델
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct StoredBid {
    pub id: BidId,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub bid: Bid,
}

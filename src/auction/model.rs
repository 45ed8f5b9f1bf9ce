use crate::auction::commands::CreateAuctionCommand;
use crate::bidding::model::StoredBid;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// 경매 식별자 (저장소가 생성)
pub type AuctionId = String;

// 경매 모델
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Auction {
    pub seller: String,
    pub item: String,
    pub quantity: i64,
    pub highest_bidder: Option<String>,
    pub highest_bid: f64,
    pub number_bidders: i64,
    #[serde(rename = "startTime")]
    pub start_time: i64,
    #[serde(rename = "endTime")]
    pub end_time: i64,
}

impl Auction {
    /// 새 경매 레코드 생성
    /// 최고 입찰가는 시작가, 최고 입찰자는 없음, 입찰자 수는 0으로 시작한다.
    pub fn open(cmd: &CreateAuctionCommand, now: i64) -> Result<Self, ValidationError> {
        cmd.validate()?;
        let end_time = now
            .checked_add(cmd.duration)
            .ok_or(ValidationError::DurationOverflow)?;

        Ok(Self {
            seller: cmd.seller.clone(),
            item: cmd.item.clone(),
            quantity: cmd.quantity,
            highest_bidder: None,
            highest_bid: cmd.initial_price,
            number_bidders: 0,
            start_time: now,
            end_time,
        })
    }

    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }

    /// 주어진 시각에 아직 종료되지 않았는지 여부
    pub fn is_open_at(&self, now: i64) -> bool {
        self.end_time >= now
    }
}

// id가 붙은 경매 모델
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct StoredAuction {
    pub id: AuctionId,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub auction: Auction,
}

// 입찰 내역이 합쳐진 경매 상세
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionDetails {
    #[serde(flatten)]
    pub auction: StoredAuction,
    #[serde(rename = "biddersAndBids")]
    pub bidders_and_bids: Vec<StoredBid>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn command(duration: i64) -> CreateAuctionCommand {
        CreateAuctionCommand {
            seller: "S1".to_string(),
            initial_price: 10.0,
            item: "widget".to_string(),
            duration,
            quantity: 5,
        }
    }

    #[test]
    fn test_open_initializes_summary_fields() {
        let auction = Auction::open(&command(3_600_000), 1_000).unwrap();
        assert_eq!(auction.highest_bid, 10.0);
        assert_eq!(auction.highest_bidder, None);
        assert_eq!(auction.number_bidders, 0);
        assert_eq!(auction.start_time, 1_000);
        assert_eq!(auction.end_time, 3_601_000);
        assert_eq!(auction.duration(), 3_600_000);
    }

    #[test]
    fn test_open_with_negative_duration_is_already_closed() {
        let auction = Auction::open(&command(-1), 1_000).unwrap();
        assert_eq!(auction.end_time, 999);
        assert!(!auction.is_open_at(1_000));
        assert!(auction.is_open_at(999));
    }

    #[test]
    fn test_open_rejects_overflowing_duration() {
        let err = Auction::open(&command(i64::MAX), 1_000).unwrap_err();
        assert_eq!(err, ValidationError::DurationOverflow);
    }

    #[test]
    fn test_details_serialize_with_document_field_names() {
        let details = AuctionDetails {
            auction: StoredAuction {
                id: "A".to_string(),
                auction: Auction::open(&command(3_600_000), 5).unwrap(),
            },
            bidders_and_bids: vec![],
        };

        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "A",
                "seller": "S1",
                "item": "widget",
                "quantity": 5,
                "highest_bidder": null,
                "highest_bid": 10.0,
                "number_bidders": 0,
                "startTime": 5,
                "endTime": 3_600_005,
                "biddersAndBids": []
            })
        );
    }
}

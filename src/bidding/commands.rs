/// 입찰 관련 커맨드 처리
/// 1. 입찰
///
/// 입찰은 기록만 한다. 경매 존재 여부, 종료 여부, 최고 입찰가 비교를 하지 않으며
/// 경매의 highest_bid / highest_bidder / number_bidders 는 갱신되지 않는다.
// region:    --- Imports
use crate::bidding::model::{Bid, BidId};
use crate::database::AuctionDatabase;
use crate::error::{StoreError, ValidationError};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Commands
/// 입찰 명령
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceBidCommand {
    pub bidder_id: String,
    pub auction_id: String,
    pub bid: f64,
}

impl PlaceBidCommand {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.bidder_id.trim().is_empty() {
            return Err(ValidationError::EmptyField("bidderId"));
        }
        if self.auction_id.trim().is_empty() {
            return Err(ValidationError::EmptyField("auctionId"));
        }
        if !self.bid.is_finite() {
            return Err(ValidationError::NonFiniteAmount("bid"));
        }
        Ok(())
    }

    fn into_bid(self, now: i64) -> Bid {
        Bid {
            auction_id: self.auction_id,
            bidder_id: self.bidder_id,
            bid: self.bid,
            time: now,
        }
    }
}

/// 1. 입찰
pub async fn make_new_bid(
    db: &dyn AuctionDatabase,
    cmd: PlaceBidCommand,
) -> Result<BidId, StoreError> {
    info!("{:<12} --> 입찰 요청 처리 시작: {:?}", "Command", cmd);

    if let Err(e) = cmd.validate() {
        error!("{:<12} --> 입찰 입력 오류: {}", "Command", e);
        return Err(e.into());
    }

    let bid = cmd.into_bid(Utc::now().timestamp_millis());
    let bid_id = db.insert_bid(&bid).await.map_err(|e| {
        error!(
            "{:<12} --> 입찰 실패 auction: {}: {}",
            "Command", bid.auction_id, e
        );
        StoreError::write("make_new_bid", e)
    })?;

    info!("{:<12} --> 입찰 완료 id: {}", "Command", bid_id);
    Ok(bid_id)
}
// endregion: --- Commands

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction::commands::{create_new_auction, CreateAuctionCommand};
    use crate::database::memory::InMemoryDatabase;
    use crate::database::{DatabaseError, MockAuctionDatabase};
    use crate::query::handlers::fetch_auction_by_id;
    use std::collections::HashSet;

    async fn create_widget_auction(db: &InMemoryDatabase) -> String {
        create_new_auction(
            db,
            CreateAuctionCommand {
                seller: "S1".to_string(),
                initial_price: 10.0,
                item: "widget".to_string(),
                duration: 3_600_000,
                quantity: 5,
            },
        )
        .await
        .unwrap()
    }

    fn bid(bidder_id: &str, auction_id: &str, amount: f64) -> PlaceBidCommand {
        PlaceBidCommand {
            bidder_id: bidder_id.to_string(),
            auction_id: auction_id.to_string(),
            bid: amount,
        }
    }

    #[tokio::test]
    async fn test_bid_is_recorded_without_touching_summary() {
        let db = InMemoryDatabase::new();
        let auction_id = create_widget_auction(&db).await;

        let before = Utc::now().timestamp_millis();
        let bid_id = make_new_bid(&db, bid("B1", &auction_id, 12.0))
            .await
            .unwrap();

        let details = fetch_auction_by_id(&db, &auction_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(details.bidders_and_bids.len(), 1);
        let stored = &details.bidders_and_bids[0];
        assert_eq!(stored.id, bid_id);
        assert_eq!(stored.bid.auction_id, auction_id);
        assert_eq!(stored.bid.bidder_id, "B1");
        assert_eq!(stored.bid.bid, 12.0);
        assert!(stored.bid.time >= before);

        // 요약 필드는 그대로
        assert_eq!(details.auction.auction.highest_bid, 10.0);
        assert_eq!(details.auction.auction.highest_bidder, None);
        assert_eq!(details.auction.auction.number_bidders, 0);
    }

    #[tokio::test]
    async fn test_bids_are_grouped_by_auction() {
        let db = InMemoryDatabase::new();
        let first = create_widget_auction(&db).await;
        let second = create_widget_auction(&db).await;

        let mut expected = HashSet::new();
        for (i, amount) in [15.0, 11.0, 30.0].into_iter().enumerate() {
            let bid_id = make_new_bid(&db, bid(&format!("B{}", i), &first, amount))
                .await
                .unwrap();
            expected.insert(bid_id);
        }
        make_new_bid(&db, bid("B9", &second, 99.0)).await.unwrap();

        let details = fetch_auction_by_id(&db, &first).await.unwrap().unwrap();
        let actual: HashSet<_> = details
            .bidders_and_bids
            .into_iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn test_bid_on_unknown_auction_is_still_recorded() {
        let db = InMemoryDatabase::new();
        let bid_id = make_new_bid(&db, bid("B1", "no-such-auction", 1.0)).await;
        assert!(bid_id.is_ok());
    }

    #[tokio::test]
    async fn test_bid_rejects_empty_bidder() {
        let mut db = MockAuctionDatabase::new();
        db.expect_insert_bid().never();

        let err = make_new_bid(&db, bid("", "A", 1.0)).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidInput(ValidationError::EmptyField("bidderId"))
        ));
    }

    #[tokio::test]
    async fn test_bid_surfaces_write_error() {
        let mut db = MockAuctionDatabase::new();
        db.expect_insert_bid()
            .withf(|bid| bid.auction_id == "A" && bid.bidder_id == "B1")
            .times(1)
            .returning(|_| Err(DatabaseError::Unavailable("write refused".to_string())));

        let err = make_new_bid(&db, bid("B1", "A", 12.0)).await.unwrap_err();
        assert!(err.is_write());
    }
}

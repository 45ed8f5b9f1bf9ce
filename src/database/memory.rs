// region:    --- Imports
use super::{AuctionDatabase, DatabaseError};
use crate::auction::model::{Auction, AuctionId, StoredAuction};
use crate::bidding::model::{Bid, BidId, StoredBid};
use crate::query::filter::AuctionFilter;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

// endregion: --- Imports

// region:    --- In Memory Database
/// 프로세스 내부 저장소
/// DATABASE_URL 이 없을 때와 테스트에서 사용한다.
#[derive(Debug, Default)]
pub struct InMemoryDatabase {
    auctions: RwLock<HashMap<AuctionId, Auction>>,
    bids: RwLock<HashMap<BidId, Bid>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }
}

#[async_trait]
impl AuctionDatabase for InMemoryDatabase {
    async fn get_auction(&self, auction_id: &str) -> Result<Option<StoredAuction>, DatabaseError> {
        let auctions = self.auctions.read().await;
        Ok(auctions.get(auction_id).map(|auction| StoredAuction {
            id: auction_id.to_string(),
            auction: auction.clone(),
        }))
    }

    async fn find_auctions(
        &self,
        filter: &AuctionFilter,
    ) -> Result<Vec<StoredAuction>, DatabaseError> {
        let auctions = self.auctions.read().await;
        Ok(auctions
            .iter()
            .filter(|(_, auction)| filter.matches(auction))
            .map(|(id, auction)| StoredAuction {
                id: id.clone(),
                auction: auction.clone(),
            })
            .collect())
    }

    async fn find_bids_by_auction(&self, auction_id: &str) -> Result<Vec<StoredBid>, DatabaseError> {
        let bids = self.bids.read().await;
        Ok(bids
            .iter()
            .filter(|(_, bid)| bid.auction_id == auction_id)
            .map(|(id, bid)| StoredBid {
                id: id.clone(),
                bid: bid.clone(),
            })
            .collect())
    }

    async fn insert_auction(&self, auction: &Auction) -> Result<AuctionId, DatabaseError> {
        let auction_id = Self::generate_id();
        self.auctions
            .write()
            .await
            .insert(auction_id.clone(), auction.clone());
        debug!("{:<12} --> 경매 저장 id: {}", "Memory", auction_id);
        Ok(auction_id)
    }

    async fn insert_bid(&self, bid: &Bid) -> Result<BidId, DatabaseError> {
        let bid_id = Self::generate_id();
        self.bids.write().await.insert(bid_id.clone(), bid.clone());
        debug!("{:<12} --> 입찰 저장 id: {}", "Memory", bid_id);
        Ok(bid_id)
    }
}
// endregion: --- In Memory Database

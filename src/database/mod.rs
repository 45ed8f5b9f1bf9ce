// region:    --- Imports
use crate::auction::model::{Auction, AuctionId, StoredAuction};
use crate::bidding::model::{Bid, BidId, StoredBid};
use crate::query::filter::AuctionFilter;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use std::sync::Arc;
use thiserror::Error;

// endregion: --- Imports

pub mod memory;
pub mod postgres;

pub use memory::InMemoryDatabase;
pub use postgres::DatabaseManager;

// region:    --- Database Error
/// 저장소 오류 (분류하지 않음)
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}
// endregion: --- Database Error

// region:    --- Database Trait
/// 경매/입찰 저장소 트레이트
/// auctions, bids 두 컬렉션에 대한 단건 조회, 조건 조회, 추가만 제공한다.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AuctionDatabase: Send + Sync + 'static {
    /// id 로 경매 조회
    async fn get_auction(&self, auction_id: &str) -> Result<Option<StoredAuction>, DatabaseError>;

    /// 조건에 맞는 경매 조회 (순서는 저장소 기본 순서)
    async fn find_auctions(
        &self,
        filter: &AuctionFilter,
    ) -> Result<Vec<StoredAuction>, DatabaseError>;

    /// auctionId 가 일치하는 입찰 조회
    async fn find_bids_by_auction(&self, auction_id: &str) -> Result<Vec<StoredBid>, DatabaseError>;

    /// 경매 추가, 생성된 id 반환
    async fn insert_auction(&self, auction: &Auction) -> Result<AuctionId, DatabaseError>;

    /// 입찰 추가, 생성된 id 반환
    async fn insert_bid(&self, bid: &Bid) -> Result<BidId, DatabaseError>;
}

pub type SharedDatabase = Arc<dyn AuctionDatabase>;
// endregion: --- Database Trait

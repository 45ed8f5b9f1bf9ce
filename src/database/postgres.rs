// region:    --- Imports
use super::{AuctionDatabase, DatabaseError};
use crate::auction::model::{Auction, AuctionId, StoredAuction};
use crate::bidding::model::{Bid, BidId, StoredBid};
use crate::query::filter::AuctionFilter;
use crate::query::queries;
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::{Postgres, QueryBuilder};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::{error, info};

// endregion: --- Imports

// region:    --- Database Manager
pub struct DatabaseManager {
    pub pool: Arc<PgPool>,
}

impl DatabaseManager {
    /// 데이터베이스 매니저 생성
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// 트랜잭션 실행
    pub async fn transaction<F, R, E>(&self, f: F) -> Result<R, E>
    where
        F: for<'c> FnOnce(
            &'c mut sqlx::Transaction<'_, sqlx::Postgres>,
        ) -> Pin<Box<dyn Future<Output = Result<R, E>> + Send + 'c>>,
        E: From<sqlx::Error>,
    {
        let mut tx = self.pool.begin().await?;
        let result = f(&mut tx).await;
        match result {
            Ok(r) => {
                tx.commit().await?;
                Ok(r)
            }
            Err(e) => {
                tx.rollback().await?;
                Err(e)
            }
        }
    }

    /// 스키마 초기화 (이미 있으면 유지)
    pub async fn initialize_database(&self) -> Result<(), sqlx::Error> {
        let create_schema_sql = include_str!("../sql/01-create-schema.sql");
        self.execute_multi_query(create_schema_sql).await?;
        info!("{:<12} --> 스키마 초기화 완료", "Database");
        Ok(())
    }

    /// 여러 쿼리 실행
    async fn execute_multi_query(&self, sql: &str) -> Result<(), sqlx::Error> {
        for query in sql.split(';') {
            let query = query.trim();
            if !query.is_empty() {
                sqlx::query(query).execute(&*self.pool).await?;
            }
        }
        Ok(())
    }
}

/// 조건을 WHERE 절로 변환
fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &AuctionFilter) {
    let mut separator = " WHERE ";
    if let Some(seller) = &filter.seller {
        builder.push(separator).push("seller = ").push_bind(seller.clone());
        separator = " AND ";
    }
    if let Some(start_time) = filter.start_time_from {
        builder.push(separator).push("start_time >= ").push_bind(start_time);
        separator = " AND ";
    }
    if let Some(end_time) = filter.end_time_from {
        builder.push(separator).push("end_time >= ").push_bind(end_time);
        separator = " AND ";
    }
    if let Some(end_time) = filter.end_time_until {
        builder.push(separator).push("end_time <= ").push_bind(end_time);
    }
}
// endregion: --- Database Manager

// region:    --- Auction Database
#[async_trait]
impl AuctionDatabase for DatabaseManager {
    async fn get_auction(&self, auction_id: &str) -> Result<Option<StoredAuction>, DatabaseError> {
        let auction_id = auction_id.to_owned();
        self.transaction(|tx| {
            Box::pin(async move {
                let auction = sqlx::query_as::<_, StoredAuction>(queries::GET_AUCTION)
                    .bind(auction_id)
                    .fetch_optional(&mut **tx)
                    .await?;
                Ok::<_, DatabaseError>(auction)
            })
        })
        .await
    }

    async fn find_auctions(
        &self,
        filter: &AuctionFilter,
    ) -> Result<Vec<StoredAuction>, DatabaseError> {
        let filter = filter.clone();
        self.transaction(|tx| {
            Box::pin(async move {
                let mut builder = QueryBuilder::<Postgres>::new(queries::SELECT_AUCTIONS);
                push_filter(&mut builder, &filter);
                let auctions = builder
                    .build_query_as::<StoredAuction>()
                    .fetch_all(&mut **tx)
                    .await?;
                Ok::<_, DatabaseError>(auctions)
            })
        })
        .await
    }

    async fn find_bids_by_auction(&self, auction_id: &str) -> Result<Vec<StoredBid>, DatabaseError> {
        let auction_id = auction_id.to_owned();
        self.transaction(|tx| {
            Box::pin(async move {
                let bids = sqlx::query_as::<_, StoredBid>(queries::GET_AUCTION_BIDS)
                    .bind(auction_id)
                    .fetch_all(&mut **tx)
                    .await?;
                Ok::<_, DatabaseError>(bids)
            })
        })
        .await
    }

    async fn insert_auction(&self, auction: &Auction) -> Result<AuctionId, DatabaseError> {
        sqlx::query_scalar::<_, String>(queries::INSERT_AUCTION)
            .bind(&auction.seller)
            .bind(&auction.item)
            .bind(auction.quantity)
            .bind(&auction.highest_bidder)
            .bind(auction.highest_bid)
            .bind(auction.number_bidders)
            .bind(auction.start_time)
            .bind(auction.end_time)
            .fetch_one(&*self.pool)
            .await
            .map_err(|e| {
                error!("{:<12} --> 경매 INSERT 실패: {}", "Database", e);
                DatabaseError::from(e)
            })
    }

    async fn insert_bid(&self, bid: &Bid) -> Result<BidId, DatabaseError> {
        sqlx::query_scalar::<_, String>(queries::INSERT_BID)
            .bind(&bid.auction_id)
            .bind(&bid.bidder_id)
            .bind(bid.bid)
            .bind(bid.time)
            .fetch_one(&*self.pool)
            .await
            .map_err(|e| {
                error!("{:<12} --> 입찰 INSERT 실패: {}", "Database", e);
                DatabaseError::from(e)
            })
    }
}
// endregion: --- Auction Database

use crate::auction::model::Auction;

/// 경매 조회 조건
///
/// 지정된 조건은 모두 AND 로 결합된다. 비어 있으면 모든 경매와 일치한다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuctionFilter {
    /// seller == 값
    pub seller: Option<String>,
    /// startTime >= 값
    pub start_time_from: Option<i64>,
    /// endTime >= 값
    pub end_time_from: Option<i64>,
    /// endTime <= 값
    pub end_time_until: Option<i64>,
}

impl AuctionFilter {
    pub fn by_seller(seller: impl Into<String>) -> Self {
        Self {
            seller: Some(seller.into()),
            ..Default::default()
        }
    }

    /// now 시점에 종료되지 않은 경매
    pub fn open_at(now: i64) -> Self {
        Self {
            end_time_from: Some(now),
            ..Default::default()
        }
    }

    pub fn in_range(start_time: i64, end_time: Option<i64>) -> Self {
        Self {
            start_time_from: Some(start_time),
            end_time_until: end_time,
            ..Default::default()
        }
    }

    pub fn matches(&self, auction: &Auction) -> bool {
        self.seller
            .as_deref()
            .map_or(true, |seller| auction.seller == seller)
            && self
                .start_time_from
                .map_or(true, |t| auction.start_time >= t)
            && self.end_time_from.map_or(true, |t| auction.end_time >= t)
            && self.end_time_until.map_or(true, |t| auction.end_time <= t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auction(seller: &str, start_time: i64, end_time: i64) -> Auction {
        Auction {
            seller: seller.to_string(),
            item: "widget".to_string(),
            quantity: 1,
            highest_bidder: None,
            highest_bid: 1.0,
            number_bidders: 0,
            start_time,
            end_time,
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(AuctionFilter::default().matches(&auction("S1", 0, 0)));
    }

    #[test]
    fn test_open_at_includes_boundary() {
        let filter = AuctionFilter::open_at(100);
        assert!(filter.matches(&auction("S1", 0, 100)));
        assert!(filter.matches(&auction("S1", 0, 101)));
        assert!(!filter.matches(&auction("S1", 0, 99)));
    }

    #[test]
    fn test_in_range_bounds() {
        let bounded = AuctionFilter::in_range(10, Some(50));
        assert!(bounded.matches(&auction("S1", 10, 50)));
        assert!(!bounded.matches(&auction("S1", 9, 50)));
        assert!(!bounded.matches(&auction("S1", 10, 51)));

        let open_ended = AuctionFilter::in_range(10, None);
        assert!(open_ended.matches(&auction("S1", 10, i64::MAX)));
        assert!(!open_ended.matches(&auction("S1", 9, 20)));

        // 0 도 유효한 종료 경계
        let zero = AuctionFilter::in_range(-10, Some(0));
        assert!(!zero.matches(&auction("S1", -5, 1)));
    }

    #[test]
    fn test_by_seller() {
        let filter = AuctionFilter::by_seller("S1");
        assert!(filter.matches(&auction("S1", 0, 0)));
        assert!(!filter.matches(&auction("S2", 0, 0)));
    }
}

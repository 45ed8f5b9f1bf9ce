/// 경매 조회
pub const GET_AUCTION: &str = r#"
    SELECT id, seller, item, quantity, highest_bidder, highest_bid, number_bidders, start_time, end_time
    FROM auctions
    WHERE id = $1
"#;

/// 경매 목록 조회 (조건은 QueryBuilder 로 덧붙임)
pub const SELECT_AUCTIONS: &str = "SELECT id, seller, item, quantity, highest_bidder, highest_bid, number_bidders, start_time, end_time FROM auctions";

/// 경매별 입찰 조회
pub const GET_AUCTION_BIDS: &str = r#"
    SELECT id, auction_id, bidder_id, bid, time
    FROM bids
    WHERE auction_id = $1
"#;

/// 경매 생성
pub const INSERT_AUCTION: &str = r#"
    INSERT INTO auctions (seller, item, quantity, highest_bidder, highest_bid, number_bidders, start_time, end_time)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
    RETURNING id
"#;

/// 입찰 생성
pub const INSERT_BID: &str = r#"
    INSERT INTO bids (auction_id, bidder_id, bid, time)
    VALUES ($1, $2, $3, $4)
    RETURNING id
"#;

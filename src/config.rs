use clap::Parser;

/// 경매 저장소 서버 설정
/// 모든 값은 환경 변수로도 지정할 수 있다.
#[derive(Parser, Debug, Clone)]
#[command(name = "auction-store", version, about = "Auction and bid store service")]
pub struct Options {
    /// Postgres 접속 URL. 없으면 메모리 저장소를 사용한다.
    #[arg(long = "database-url", env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// 커넥션 풀 최대 크기
    #[arg(long = "max-connections", env = "DATABASE_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// HTTP 리슨 주소
    #[arg(long = "listen-addr", env = "LISTEN_ADDR", default_value = "0.0.0.0:3000")]
    pub listen_addr: String,
}

//! Shared helpers and fixture payloads for integration tests.

#![allow(dead_code)]

use dexpaprika::{Config, DexPaprikaClient};
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// Config pointed at a mock server with near-instant retries.
pub fn test_config(base_url: &str) -> Config {
    Config::default()
        .with_api_url(base_url)
        .with_backoff_ms(vec![1, 2, 3, 4])
        .with_jitter_ratio(0.0)
        .with_request_timeout(5)
}

pub fn test_client(base_url: &str) -> DexPaprikaClient {
    DexPaprikaClient::new(&test_config(base_url))
}

/// A one-connection-per-response HTTP server that replays `responses` in order.
///
/// Returns the base URL and a handle yielding how many requests were served.
pub fn scripted_server(responses: Vec<(u16, &'static str)>) -> (String, JoinHandle<usize>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let mut served = 0;
        for (status, body) in responses {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);
            let mut line = String::new();
            // Request line and headers; GETs carry no body.
            loop {
                line.clear();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
            }

            let reason = match status {
                200 => "OK",
                503 => "Service Unavailable",
                _ => "Error",
            };
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason,
                body.len(),
                body
            );
            let mut stream = reader.into_inner();
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            served += 1;
        }
        served
    });

    (url, handle)
}

pub const NETWORKS_BODY: &str = r#"[
    {"id": "ethereum", "display_name": "Ethereum"},
    {"id": "solana", "display_name": "Solana"}
]"#;

pub const STATS_BODY: &str = r#"{"chains": 21, "factories": 180, "pools": 5400000, "tokens": 4100000}"#;

pub const POOLS_BODY: &str = r#"{
    "pools": [{
        "id": "0x88e6a0c2ddd26feeb64f039a2c41296fcb3f5640",
        "dex_id": "uniswap_v3",
        "dex_name": "Uniswap V3",
        "chain": "ethereum",
        "volume_usd": 152000000.5,
        "created_at": "2021-05-05T21:42:11Z",
        "created_at_block_number": 12376729,
        "transactions": 48211,
        "price_usd": 1.0002,
        "last_price_change_usd_24h": -0.12,
        "fee": 500,
        "tokens": [
            {"id": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48", "name": "USD Coin", "symbol": "USDC", "chain": "ethereum", "decimals": 6},
            {"id": "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2", "name": "Wrapped Ether", "symbol": "WETH", "chain": "ethereum", "decimals": 18}
        ]
    }],
    "page_info": {"limit": 10, "page": 0, "total_items": 1, "total_pages": 1}
}"#;

pub const DEXES_BODY: &str = r#"{
    "dexes": [
        {"dex_id": "uniswap_v3", "dex_name": "Uniswap V3", "chain": "ethereum", "protocol": "uniswap_v3"},
        {"dex_id": "sushiswap", "dex_name": "SushiSwap", "chain": "ethereum", "protocol": "uniswap_v2"}
    ],
    "page_info": {"limit": 10, "page": 0, "total_items": 2, "total_pages": 1}
}"#;

pub const TOKEN_BODY: &str = r#"{
    "id": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
    "name": "USD Coin",
    "symbol": "USDC",
    "chain": "ethereum",
    "decimals": 6,
    "total_supply": 45000000000,
    "website": "https://www.circle.com",
    "summary": {"price_usd": 0.9998, "fdv": 45000000000, "liquidity_usd": 900000000, "pools": 3200}
}"#;

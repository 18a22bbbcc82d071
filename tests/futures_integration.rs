use std::sync::Arc;

use rust_decimal::Decimal;
use time::OffsetDateTime;
use time::macros::datetime;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use binance_api_client::auth::StaticCredentials;
use binance_api_client::futures::PositionSide;
use binance_api_client::rest::BinanceClient;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[tokio::test]
async fn test_futures_account_uses_futures_host() {
    let spot = MockServer::start().await;
    let futures = MockServer::start().await;
    let response = serde_json::json!({
        "feeTier": 0,
        "canTrade": true,
        "canDeposit": true,
        "canWithdraw": true,
        "updateTime": 0,
        "totalInitialMargin": "0.00000000",
        "totalWalletBalance": "23.72469206",
        "assets": [{
            "asset": "USDT",
            "walletBalance": "23.72469206",
            "marginBalance": "23.72469206"
        }],
        "positions": [{
            "symbol": "BTCUSDT",
            "positionAmt": "0.010",
            "entryPrice": "64000.0",
            "leverage": "20",
            "isolated": false,
            "positionSide": "BOTH"
        }]
    });

    Mock::given(method("GET"))
        .and(path("/fapi/v2/account"))
        .and(query_param("recvWindow", "10000"))
        .and(header("X-MBX-APIKEY", "test_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&futures)
        .await;

    let client = BinanceClient::builder()
        .base_url(spot.uri())
        .futures_base_url(futures.uri())
        .credentials(Arc::new(StaticCredentials::new("test_key", "test_secret")))
        .build();

    let account = client
        .futures_account()
        .recv_window(10_000)
        .send()
        .await
        .unwrap();
    assert!(account.can_trade);
    assert_eq!(account.update_time, OffsetDateTime::UNIX_EPOCH);
    assert_eq!(account.total_wallet_balance, dec("23.72469206"));
    assert_eq!(account.asset("USDT").unwrap().margin_balance, dec("23.72469206"));

    let open: Vec<_> = account.open_positions().collect();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].position_amt, dec("0.01"));
    assert_eq!(open[0].position_side, PositionSide::Both);

    assert!(spot.received_requests().await.unwrap().is_empty());
    let requests = futures.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap();
    assert!(query.contains("timestamp="));
    assert!(query.contains("&signature="));
}

#[tokio::test]
async fn test_futures_server_time() {
    let futures = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fapi/v1/time"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"serverTime": 1499827319559i64})),
        )
        .mount(&futures)
        .await;

    let client = BinanceClient::builder()
        .futures_base_url(futures.uri())
        .build();
    let time = client.futures_server_time().send().await.unwrap();
    assert_eq!(time.server_time, datetime!(2017-07-12 02:41:59.559 UTC));
}

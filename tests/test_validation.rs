//! Invalid parameters are rejected before any request is sent.

mod common;

use chrono::NaiveDate;
use common::*;
use dexpaprika::{
    DexPaprikaError, OhlcvInterval, OhlcvParams, PageParams, PoolListParams, PoolOrderBy,
    SortOrder, TokenPoolsParams, TransactionParams, ValidationError,
};
use mockito::{Matcher, Server};

fn expect_validation<T: std::fmt::Debug>(result: Result<T, DexPaprikaError>) -> ValidationError {
    match result {
        Err(DexPaprikaError::Validation(err)) => err,
        other => panic!("expected a validation error, got {:?}", other),
    }
}

#[test]
fn test_out_of_range_limit_sends_nothing() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", Matcher::Any)
        .match_query(Matcher::Any)
        .expect(0)
        .create();

    let client = test_client(&server.url());
    let err = expect_validation(client.pools().list(&PoolListParams::new().limit(500)));
    assert_eq!(err.param(), "limit");
    assert!(err.to_string().contains("between 1 and 100"));
    assert!(err.to_string().contains("500"));

    let err = expect_validation(
        client
            .networks()
            .dexes("ethereum", &PageParams::new().limit(0)),
    );
    assert_eq!(err.param(), "limit");

    let err = expect_validation(client.pools().transactions(
        "ethereum",
        "0xpool",
        &TransactionParams::new().limit(101),
    ));
    assert_eq!(err.param(), "limit");

    mock.assert();
    assert_eq!(client.metrics().http_requests_total(), 0);
}

#[test]
fn test_blank_identifiers_send_nothing() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", Matcher::Any)
        .match_query(Matcher::Any)
        .expect(0)
        .create();

    let client = test_client(&server.url());

    let err = expect_validation(client.tokens().details("", "0xusdc"));
    assert_eq!(err.param(), "network");

    let err = expect_validation(client.tokens().details("ethereum", "   "));
    assert_eq!(err.param(), "token_address");

    let err = expect_validation(client.pools().details("ethereum", "", false));
    assert_eq!(err.param(), "pool_address");

    let err = expect_validation(
        client
            .dexes()
            .pools("ethereum", " ", &PoolListParams::new()),
    );
    assert_eq!(err.param(), "dex");

    let err = expect_validation(client.search().search("\t"));
    assert_eq!(err.param(), "query");
    assert_eq!(err.to_string(), "query is required and cannot be empty");

    mock.assert();
}

#[test]
fn test_ohlcv_bounds_are_checked() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", Matcher::Any)
        .match_query(Matcher::Any)
        .expect(0)
        .create();

    let client = test_client(&server.url());
    let start = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

    let backwards = OhlcvParams::new(start).end(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    let err = expect_validation(client.pools().ohlcv("ethereum", "0xpool", &backwards));
    assert_eq!(err.param(), "end");

    let too_many = OhlcvParams::new(start).limit(367);
    let err = expect_validation(client.pools().ohlcv("ethereum", "0xpool", &too_many));
    assert_eq!(err.param(), "limit");

    mock.assert();
}

#[test]
fn test_ohlcv_accepts_a_full_year_of_candles() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/networks/ethereum/pools/0xpool/ohlcv")
        .match_query(Matcher::UrlEncoded("limit".into(), "366".into()))
        .with_status(200)
        .with_body("[]")
        .expect(1)
        .create();

    let client = test_client(&server.url());
    let params = OhlcvParams::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        .limit(366)
        .interval(OhlcvInterval::OneDay);
    let candles = client.pools().ohlcv("ethereum", "0xpool", &params).unwrap();

    mock.assert();
    assert!(candles.is_empty());
}

#[test]
fn test_token_pools_nested_limit_is_checked() {
    let client = test_client("http://127.0.0.1:9");
    let params = TokenPoolsParams::new().list(PoolListParams::new().limit(1000));

    let err = expect_validation(client.tokens().pools("ethereum", "0xusdc", &params));
    assert_eq!(err.param(), "limit");
}

#[test]
fn test_unknown_choices_list_the_accepted_values() {
    let err = "bogus".parse::<SortOrder>().unwrap_err();
    assert_eq!(err.param(), "sort");
    assert!(err.to_string().contains("asc, desc"));

    let err = "tvl".parse::<PoolOrderBy>().unwrap_err();
    assert_eq!(err.param(), "order_by");
    assert!(err.to_string().contains("volume_usd"));

    let err = "2d".parse::<OhlcvInterval>().unwrap_err();
    assert_eq!(err.param(), "interval");
    assert!(err.to_string().contains("24h"));

    // Converts into the client error like any other validation failure.
    let err: DexPaprikaError = err.into();
    assert!(err.is_validation());
}

#[test]
fn test_choices_parse_from_wire_names() {
    assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
    assert_eq!(" DESC ".parse::<SortOrder>().unwrap(), SortOrder::Desc);
    assert_eq!(
        "last_price_change_usd_24h".parse::<PoolOrderBy>().unwrap(),
        PoolOrderBy::LastPriceChangeUsd24h
    );
    assert_eq!("1h".parse::<OhlcvInterval>().unwrap(), OhlcvInterval::OneHour);
}

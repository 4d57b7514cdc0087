use super::*;

/// Tests parsing a well-formed Birdeye response.
///
/// Verifies that price and 24h change are read from `data.value` and
/// `data.priceChange24h` exactly as sent, ignoring unknown fields.
///
/// Expected: Ok with exact price and change
#[test]
fn parses_birdeye_price_and_change() {
    let body = fixture::price::birdeye_body(142.123456789, Some(3.2));
    let now = Utc::now();

    let sample = parse_price_response(&birdeye(), 200, &body, now).unwrap();

    assert_eq!(sample.price_usd(), 142.123456789);
    assert_eq!(sample.change_24h_pct(), Some(3.2));
    assert_eq!(sample.fetched_at(), now);
}

/// Tests parsing a well-formed CoinGecko response.
///
/// Expected: Ok with price from `solana.usd` and change from `solana.usd_24h_change`
#[test]
fn parses_coingecko_price_and_change() {
    let body = fixture::price::coingecko_body(0.0, Some(-1.5));

    let sample = parse_price_response(&coingecko(), 200, &body, Utc::now()).unwrap();

    assert_eq!(sample.price_usd(), 0.0);
    assert_eq!(sample.change_24h_pct(), Some(-1.5));
}

/// Tests that a missing 24h change is a soft failure.
///
/// Expected: Ok with `change_24h_pct` of None
#[test]
fn missing_change_still_yields_sample() {
    let body = fixture::price::birdeye_body(1.25, None);

    let sample = parse_price_response(&birdeye(), 200, &body, Utc::now()).unwrap();

    assert_eq!(sample.price_usd(), 1.25);
    assert_eq!(sample.change_24h_pct(), None);
}

/// Tests that a null 24h change is treated like an absent one.
///
/// Expected: Ok with `change_24h_pct` of None
#[test]
fn null_change_still_yields_sample() {
    let body = fixture::price::birdeye_envelope(serde_json::json!({
        "value": 1.25,
        "priceChange24h": null,
    }));

    let sample = parse_price_response(&birdeye(), 200, &body, Utc::now()).unwrap();

    assert_eq!(sample.change_24h_pct(), None);
}

/// Tests that a response without a price is rejected.
///
/// Expected: Err(MissingField("price"))
#[test]
fn missing_price_is_missing_field() {
    let body = fixture::price::birdeye_envelope(serde_json::json!({
        "priceChange24h": 2.0,
    }));

    let result = parse_price_response(&birdeye(), 200, &body, Utc::now());

    assert_eq!(result, Err(FetchError::MissingField("price")));
}

/// Tests that a non-numeric price is rejected.
///
/// Expected: Err(MalformedValue) naming the price field
#[test]
fn non_numeric_price_is_malformed() {
    let body = fixture::price::birdeye_envelope(serde_json::json!({ "value": "soon" }));

    let result = parse_price_response(&birdeye(), 200, &body, Utc::now());

    assert!(matches!(
        result,
        Err(FetchError::MalformedValue { field: "price", .. })
    ));
}

/// Tests that a non-numeric 24h change is rejected rather than dropped.
///
/// Expected: Err(MalformedValue) naming the change field
#[test]
fn non_numeric_change_is_malformed() {
    let body = fixture::price::birdeye_envelope(serde_json::json!({
        "value": 1.0,
        "priceChange24h": [1, 2],
    }));

    let result = parse_price_response(&birdeye(), 200, &body, Utc::now());

    assert!(matches!(
        result,
        Err(FetchError::MalformedValue {
            field: "change24h",
            ..
        })
    ));
}

/// Tests that a negative price never produces a sample.
///
/// Expected: Err(MalformedValue)
#[test]
fn negative_price_is_malformed() {
    let body = fixture::price::birdeye_body(-0.5, Some(1.0));

    let result = parse_price_response(&birdeye(), 200, &body, Utc::now());

    assert!(matches!(
        result,
        Err(FetchError::MalformedValue { field: "price", .. })
    ));
}

/// Tests that a truncated body is a transport error, not a panic.
///
/// Expected: Err(Transport) carrying status and raw body
#[test]
fn truncated_json_is_transport_error() {
    let body = r#"{"data":{"value":142.5,"#;

    let result = parse_price_response(&birdeye(), 200, body, Utc::now());

    assert_eq!(
        result,
        Err(FetchError::Transport {
            status: Some(200),
            body: body.to_string(),
        })
    );
}

/// Tests that a non-JSON body (e.g. an HTML error page) is a transport error.
///
/// Expected: Err(Transport)
#[test]
fn html_body_is_transport_error() {
    let result = parse_price_response(&birdeye(), 200, "<html>502 Bad Gateway</html>", Utc::now());

    assert!(matches!(result, Err(FetchError::Transport { .. })));
}

/// Tests that a non-success status is a transport error even with a JSON body.
///
/// Expected: Err(Transport) with the 401 status and body preserved
#[test]
fn unauthorized_status_is_transport_error() {
    let body = fixture::price::birdeye_unauthorized_body();

    let result = parse_price_response(&birdeye(), 401, &body, Utc::now());

    assert_eq!(
        result,
        Err(FetchError::Transport {
            status: Some(401),
            body,
        })
    );
}

/// Tests that `-0.0` is stored as a plain zero price.
///
/// Expected: Ok with a positive-signed zero, so the nickname never reads `$-0`
#[test]
fn negative_zero_price_is_normalized() {
    let body = fixture::price::birdeye_envelope(serde_json::json!({
        "value": "-0.0",
        "priceChange24h": 0.0,
    }));

    let sample = parse_price_response(&birdeye(), 200, &body, Utc::now()).unwrap();

    assert_eq!(sample.price_usd(), 0.0);
    assert!(sample.price_usd().is_sign_positive());
    assert_eq!(
        crate::service::display::derive_display_state(&sample, 6).nickname,
        "$0.000000"
    );
}

mod fetch {
    use super::*;
    use crate::{
        data::price::PriceProvider,
        service::price::{PriceFetcher, PriceSource},
    };
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    /// Provider with a flat `{ price, change }` body at a local URL.
    struct LocalProvider {
        url: String,
    }

    impl PriceProvider for LocalProvider {
        fn name(&self) -> &str {
            "Local"
        }

        fn request(&self, client: &reqwest::Client) -> reqwest::RequestBuilder {
            client.get(&self.url)
        }

        fn price_path(&self) -> Vec<&str> {
            vec!["price"]
        }

        fn change_path(&self) -> Vec<&str> {
            vec!["change"]
        }
    }

    fn fetcher(url: String) -> PriceFetcher {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        PriceFetcher::new(client, Box::new(LocalProvider { url }))
    }

    /// Serves one canned HTTP response on a local port and returns its URL.
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{}/price", addr)
    }

    /// Tests a full fetch against a server returning a valid body.
    ///
    /// Expected: Ok with price and change from the body
    #[tokio::test]
    async fn fetches_sample_from_server() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 31\r\nConnection: close\r\n\r\n{\"price\":142.5,\"change\":-1.25}\n",
        )
        .await;

        let sample = fetcher(url).fetch().await.unwrap();

        assert_eq!(sample.price_usd(), 142.5);
        assert_eq!(sample.change_24h_pct(), Some(-1.25));
    }

    /// Tests that a non-success response from the server keeps its status and body.
    ///
    /// Expected: Err(Transport) with status 503 and the raw body
    #[tokio::test]
    async fn server_error_is_transport_error_with_status() {
        let url = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 4\r\nConnection: close\r\n\r\noops",
        )
        .await;

        let result = fetcher(url).fetch().await;

        assert_eq!(
            result,
            Err(FetchError::Transport {
                status: Some(503),
                body: "oops".to_string(),
            })
        );
    }

    /// Tests that a request which never gets a response is a transport error.
    ///
    /// Expected: Err(Transport) with no status
    #[tokio::test]
    async fn refused_connection_is_transport_error_without_status() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = fetcher(format!("http://{}/price", addr)).fetch().await;

        match result {
            Err(FetchError::Transport { status, body }) => {
                assert_eq!(status, None);
                assert!(!body.is_empty());
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }
}

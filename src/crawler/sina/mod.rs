//! # 新浪財經採集模組
//!
//! - 來源域名：`hq.sinajs.cn`
//! - 抓取技術：HTTP GET `?list=<交易所><代碼>`，回應為 JavaScript 變數賦值的純文字。

use async_trait::async_trait;
use log::debug;
use reqwest::header::{self, HeaderMap, HeaderValue};
use tokio_util::sync::CancellationToken;

use crate::{
    crawler::QuoteProvider,
    declare::{MarketIndex, Quote},
    error::Result,
    util,
};

/// 即時行情解析子模組
pub mod quote;

/// 新浪行情的主機域名
pub const HOST: &str = "hq.sinajs.cn";

/// 沒有 Referer 的請求會被平台拒絕
const REFERER: &str = "https://finance.sina.com.cn";

/// 新浪財經採集器
#[derive(Debug, Clone)]
pub struct Sina {
    base_url: String,
}

impl Sina {
    pub fn new() -> Self {
        Self::with_base_url(format!("https://{host}/", host = HOST))
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn build_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::REFERER, HeaderValue::from_static(REFERER));
        headers
    }
}

impl Default for Sina {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteProvider for Sina {
    async fn fetch(
        &self,
        number: &str,
        index: MarketIndex,
        cancel: &CancellationToken,
    ) -> Result<Quote> {
        let list = format!("{}{}", index, number);
        let text = util::http::get(
            &self.base_url,
            &[("list", list.as_str())],
            Some(Self::build_headers()),
            cancel,
        )
        .await?;
        debug!("sina response for {}: {}", list, text.trim_end());

        quote::to_quote(&text, number)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::NaiveDate;
    use wiremock::{
        matchers::{header as header_eq, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    use super::{quote::tests::SAMPLE, *};
    use crate::error::QuoteError;

    async fn mock_sina(status: u16, body: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&server)
            .await;
        server
    }

    fn sina_for(server: &MockServer) -> Sina {
        Sina::with_base_url(format!("{}/", server.uri()))
    }

    #[test]
    fn test_new_sina() {
        let sina = Sina::new();
        assert_eq!(sina.base_url, "https://hq.sinajs.cn/");
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("list", "sh600000"))
            .and(header_eq("referer", REFERER))
            .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE))
            .expect(1)
            .mount(&server)
            .await;

        let quote = sina_for(&server)
            .fetch("600000", MarketIndex::Sh, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(quote.name, "test");
        assert_eq!(quote.number, "600000");
        assert_eq!(quote.opening_price, "10.880");
        assert_eq!(quote.previous_closing_price, "10.900");
        assert_eq!(quote.current_price, "11.120");
        assert_eq!(quote.high_price, "11.240");
        assert_eq!(quote.low_price, "10.880");
        assert_eq!(quote.percentage_change, "2.02%");
        assert_eq!(
            quote.date,
            NaiveDate::from_ymd_opt(2021, 3, 15)
                .unwrap()
                .and_hms_opt(15, 0, 0)
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_fetch_uses_index_prefix() {
        let server = MockServer::start().await;
        Mock::given(query_param("list", "sz000001"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE))
            .expect(1)
            .mount(&server)
            .await;

        let quote = sina_for(&server)
            .fetch("000001", MarketIndex::Sz, &CancellationToken::new())
            .await
            .unwrap();

        // 代碼取自呼叫端，不是回應內容
        assert_eq!(quote.number, "000001");
    }

    #[tokio::test]
    async fn test_fetch_wrong_data() {
        let server = mock_sina(200, r#"var hq_str_sh999999="";"#).await;

        let why = sina_for(&server)
            .fetch("999999", MarketIndex::Sh, &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(why, QuoteError::InsufficientData));
        assert_eq!(why.to_string(), "platform returns wrong data");
    }

    #[tokio::test]
    async fn test_fetch_404() {
        let server = mock_sina(404, SAMPLE).await;

        let why = sina_for(&server)
            .fetch("600000", MarketIndex::Sh, &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(why, QuoteError::Client { status: 404 }));
        assert!(why.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_fetch_500() {
        let server = mock_sina(500, SAMPLE).await;

        let why = sina_for(&server)
            .fetch("600000", MarketIndex::Sh, &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(why, QuoteError::Server { status: 500 }));
        assert!(why.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_fetch_cancelled() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(SAMPLE)
                    .set_delay(Duration::from_secs(10)),
            )
            .mount(&server)
            .await;

        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            trigger.cancel();
        });

        let why = sina_for(&server)
            .fetch("600000", MarketIndex::Sh, &cancel)
            .await
            .unwrap_err();

        assert!(matches!(why, QuoteError::Cancelled));
    }
}

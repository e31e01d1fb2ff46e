use std::time::Instant;

use log::{debug, info};
use once_cell::sync::OnceCell;
use reqwest::{header, Client, Method, Response, StatusCode};
use tokio_util::sync::CancellationToken;

use crate::{
    error::{QuoteError, Result},
    util,
};

/// A singleton instance of the reqwest client.
static CLIENT: OnceCell<Client> = OnceCell::new();

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Returns the reqwest client singleton instance or creates one if it doesn't exist.
///
/// No request timeout is configured, the transport defaults apply.
fn get_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        util::ensure_rustls_crypto_provider();

        Client::builder()
            // ===== 壓縮 =====
            .brotli(true)
            .gzip(true)
            .zstd(true)
            // ===== TCP =====
            .tcp_nodelay(true)
            // ===== 重定向 =====
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(USER_AGENT)
            .build()
            .map_err(QuoteError::from)
    })
}

/// Performs an HTTP GET request and returns the whole response body as text.
///
/// The exchange races against `cancel`; once the token fires the in-flight
/// request is dropped, which aborts it and closes the connection.
///
/// # Arguments
///
/// * `url`: The URL to send the GET request to.
/// * `query`: Query string pairs appended to `url`.
/// * `headers`: An optional set of headers to include with the request.
/// * `cancel`: External cancellation signal.
///
/// # Errors
///
/// * `QuoteError::Cancelled` when the token fires first.
/// * `QuoteError::Server` / `QuoteError::Client` for 5xx / 4xx responses.
/// * `QuoteError::Transport` for connection, DNS or body read failures.
pub async fn get(
    url: &str,
    query: &[(&str, &str)],
    headers: Option<header::HeaderMap>,
    cancel: &CancellationToken,
) -> Result<String> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            debug!("GET:{} cancelled", url);
            Err(QuoteError::Cancelled)
        }
        text = get_text(url, query, headers) => text,
    }
}

async fn get_text(
    url: &str,
    query: &[(&str, &str)],
    headers: Option<header::HeaderMap>,
) -> Result<String> {
    let response = send(Method::GET, url, query, headers).await?;
    check_status(response.status())?;

    response.text().await.map_err(QuoteError::from)
}

/// Classifies the response status.
///
/// Anything below 400 is accepted and its body is handed to the parser.
pub fn check_status(status: StatusCode) -> Result<()> {
    let code = status.as_u16();

    if code >= StatusCode::INTERNAL_SERVER_ERROR.as_u16() {
        return Err(QuoteError::Server { status: code });
    }

    if code >= StatusCode::BAD_REQUEST.as_u16() {
        return Err(QuoteError::Client { status: code });
    }

    Ok(())
}

/// Sends one HTTP request. There is no retry: a failed attempt is reported as is.
async fn send(
    method: Method,
    url: &str,
    query: &[(&str, &str)],
    headers: Option<header::HeaderMap>,
) -> Result<Response> {
    let visit_log = format!("{method}:{url}");
    let client = get_client()?;
    let mut rb = client.request(method, url).query(query);

    if let Some(h) = headers {
        rb = rb.headers(h);
    }

    let start = Instant::now();
    let res = rb.send().await;
    let elapsed = start.elapsed().as_millis();

    match res {
        Ok(response) => {
            info!("{} {} {} ms", visit_log, response.status(), elapsed);
            Ok(response)
        }
        Err(why) => {
            debug!("{} failed because {:?}. {} ms", visit_log, why, elapsed);
            Err(why.into())
        }
    }
}

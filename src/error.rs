use std::num::ParseFloatError;

use thiserror::Error;

/// 取得報價過程中可能發生的錯誤
///
/// 核心流程不做任何重試或補救，錯誤一律回傳給呼叫端，由最外層決定如何呈現。
#[derive(Debug, Error)]
pub enum QuoteError {
    /// 連線、DNS 或建立請求失敗
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// 平台回應 5xx
    #[error("server error, status: {status}")]
    Server { status: u16 },

    /// 平台回應 4xx
    #[error("client error, status: {status}")]
    Client { status: u16 },

    /// 切割後的欄位數量不足
    #[error("platform returns wrong data")]
    InsufficientData,

    /// 日期或時間欄位無法解析
    #[error("invalid timestamp {value:?}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: Option<chrono::ParseError>,
    },

    /// 價格欄位不是合法的數字
    #[error("failed to parse {token:?} as number: {source}")]
    NumericParse {
        token: String,
        #[source]
        source: ParseFloatError,
    },

    /// 請求被外部取消
    #[error("request cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, QuoteError>;

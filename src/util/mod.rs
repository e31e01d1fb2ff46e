use once_cell::sync::OnceCell;

pub mod datetime;
pub mod http;

/// 安裝 rustls 使用的 ring 加密實作，重複呼叫只會生效一次
pub fn ensure_rustls_crypto_provider() {
    static INSTALLED: OnceCell<()> = OnceCell::new();

    INSTALLED.get_or_init(|| {
        // 其他地方先安裝過也沒關係
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

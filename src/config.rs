use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use config::{Config as config_config, Environment, File as config_file, Map};
use serde::{Deserialize, Serialize};

use crate::{
    cli::Args,
    declare::{LogFormat, MarketIndex, Platform},
};

/// 設定檔目錄名稱 ($HOME/.ztock)
const CONFIG_DIR: &str = ".ztock";
/// 設定檔名稱，副檔名可以是 config 支援的任何格式
const CONFIG_NAME: &str = "config";
/// 環境變數前綴 (例︰ZTOCK_INDEX)
const ENV_PREFIX: &str = "ZTOCK";

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// 執行期間的設定值
///
/// 由 [`App::load`] 依序疊加預設值、設定檔、環境變數與命令列參數，
/// 之後以參數的方式傳遞，不放在全域變數。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct App {
    /// 股票代碼
    #[serde(default)]
    pub number: String,
    /// 交易所
    #[serde(default)]
    pub index: MarketIndex,
    /// 報價來源平台
    #[serde(default)]
    pub platform: Platform,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for App {
    fn default() -> Self {
        App {
            number: Default::default(),
            index: Default::default(),
            platform: Default::default(),
            log_level: default_log_level(),
            log_format: Default::default(),
        }
    }
}

impl App {
    /// 讀取設定
    ///
    /// 優先順序由低到高：預設值、設定檔、`ZTOCK_` 環境變數、命令列參數。
    /// 股票代碼一律取自命令列。
    pub fn load(args: &Args) -> Result<Self> {
        Self::build(args, home_dir().as_deref(), None)
    }

    fn build(
        args: &Args,
        home: Option<&Path>,
        env_source: Option<Map<String, String>>,
    ) -> Result<Self> {
        let mut builder = config_config::builder();

        builder = match &args.config {
            Some(path) => builder.add_source(config_file::from(path.as_path())),
            None => match home {
                Some(home) => {
                    let name = home.join(CONFIG_DIR).join(CONFIG_NAME);
                    let source = config_file::with_name(&name.to_string_lossy()).required(false);
                    builder.add_source(source)
                }
                None => builder,
            },
        };

        builder = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).source(env_source))
            .set_override_option("index", args.index.map(|v| v.to_string()))?
            .set_override_option("platform", args.platform.map(|v| v.to_string()))?
            .set_override_option("log_level", args.log_level.clone())?
            .set_override_option("log_format", args.log_format.map(|v| v.to_string()))?;

        let mut app: App = builder
            .build()
            .context("cannot read config")?
            .try_deserialize()
            .context("cannot unmarshal config")?;
        app.number = args.number.clone();

        Ok(app)
    }
}

/// 回傳使用者家目錄
fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

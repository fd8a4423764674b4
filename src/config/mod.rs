pub mod cli;

use crate::domain::model::Level;
use crate::utils::error::{GeoError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Plugin configuration, merged field-by-field over the defaults below.
/// Immutable after `attach`; selectors are resolved to live controls at
/// init and the record itself is never rebound.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoConfig {
    pub session_id: String,
    pub webroot: String,
    /// 定義過濾查詢或回傳全部資料（joined 結果集）
    pub joined: bool,
    pub has_enhanced_select: bool,
    pub debug: bool,

    // 要執行連動的目標 select（空字串 = 未設定）
    pub continente_id: String,
    pub pais_id: String,
    pub estado_id: String,
    pub cidade_id: String,

    // Endpoint paths, appended to webroot
    pub pais_url: String,
    pub estado_url: String,
    pub cidade_url: String,

    // Placeholder texts shown while loading / before a selection exists
    pub loading_message: String,
    pub pais_loading_message: String,
    pub estado_loading_message: String,
    pub cidade_loading_message: String,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            session_id: String::new(),
            webroot: String::new(),
            joined: false,
            has_enhanced_select: false,
            debug: false,
            continente_id: String::new(),
            pais_id: String::new(),
            estado_id: String::new(),
            cidade_id: String::new(),
            pais_url: "geo/paises/".to_string(),
            estado_url: "geo/estados/".to_string(),
            cidade_url: "geo/cidades/".to_string(),
            loading_message: "Carregando...".to_string(),
            pais_loading_message: "Selecione o País".to_string(),
            estado_loading_message: "Selecione o Estado".to_string(),
            cidade_loading_message: "Escolha um país e um estado".to_string(),
        }
    }
}

impl GeoConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GeoError::IoError)?;
        Self::from_str(&content)
    }

    /// 從 TOML 字串解析配置，缺少的欄位採用預設值
    pub fn from_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GeoError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換 ${VAR} 環境變數，未定義的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Caller-supplied selector for a level; "" means not configured.
    pub fn selector(&self, level: Level) -> &str {
        match level {
            Level::Continente => &self.continente_id,
            Level::Pais => &self.pais_id,
            Level::Estado => &self.estado_id,
            Level::Cidade => &self.cidade_id,
        }
    }
}

impl Validate for GeoConfig {
    /// CLI-side validation only. Library `attach` never errors on config:
    /// an empty webroot silently skips setup instead.
    fn validate(&self) -> Result<()> {
        validate_url("webroot", &self.webroot)?;
        validate_non_empty_string("pais_url", &self.pais_url)?;
        validate_non_empty_string("estado_url", &self.estado_url)?;
        validate_non_empty_string("cidade_url", &self.cidade_url)?;
        Ok(())
    }
}

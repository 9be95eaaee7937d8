use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Result, ViewerError};

pub const EMPTY_CONTAINER_ID: &str = "Empty div ids are invalid!";
pub const UNKNOWN_CONTAINER_ID: &str = "Given div id does not exist!";
pub const EMPTY_SERVER: &str = "Empty server name was given!";
pub const INVALID_DATA_SET_ID: &str = "Data Set id has to be greater than 0!";
pub const NO_CANVAS_SUPPORT: &str = "Sorry, your browser does not support the HTML 5 feature canvas";

/// Stylesheet appended to the page before any module is loaded
pub const DEFAULT_STYLESHEET: &str = "/css/default.css";

/// Viewer modules that must be present before the widget can be built,
/// in the order they are requested.
pub const REQUIRED_MODULES: &[&str] = &[
    "/js/libs/sylvester/sylvester.js",
    "/js/TissueStack.js",
    "/js/TissueStack.MouseWheel.js",
    "/js/TissueStack.Utils.js",
    "/js/TissueStack.Extent.js",
    "/js/TissueStack.Queue.js",
    "/js/TissueStack.Canvas.js",
    "/js/TissueStack.Events.js",
    "/js/TissueStack.DataSetStore.js",
    "/js/TissueStack.ComponentFactory.js",
];

/// Arguments exactly as handed over by the embedding page.
///
/// Everything is loosely typed here; `BootstrapConfig` is the validated form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmbedArgs {
    #[serde(default)]
    pub container_id: Value,
    #[serde(default)]
    pub server: Value,
    #[serde(default)]
    pub data_set_id: Value,
    #[serde(default)]
    pub include_cross_hair: Value,
    #[serde(default)]
    pub use_image_service: Value,
    #[serde(default)]
    pub init_opts: Value,
}

impl EmbedArgs {
    /// Container id, trimmed. Blank or non-string ids are rejected.
    pub fn container_id(&self) -> Result<String> {
        non_blank(&self.container_id)
            .ok_or_else(|| ViewerError::Validation(EMPTY_CONTAINER_ID.to_string()))
    }

    pub fn server(&self) -> Result<String> {
        non_blank(&self.server).ok_or_else(|| ViewerError::Validation(EMPTY_SERVER.to_string()))
    }

    /// Data set ids are positive integers. Strings are not coerced.
    pub fn data_set_id(&self) -> Result<u64> {
        let invalid = || ViewerError::Validation(INVALID_DATA_SET_ID.to_string());
        let number = match &self.data_set_id {
            Value::Number(n) => n,
            _ => return Err(invalid()),
        };
        if let Some(id) = number.as_u64() {
            return if id > 0 { Ok(id) } else { Err(invalid()) };
        }
        match number.as_f64() {
            Some(f) if f >= 1.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => Ok(f as u64),
            _ => Err(invalid()),
        }
    }

    /// Cross hair is on unless explicitly switched off.
    pub fn include_cross_hair(&self) -> bool {
        !matches!(self.include_cross_hair, Value::Bool(false))
    }

    /// Image service is off unless explicitly switched on.
    pub fn use_image_service(&self) -> bool {
        matches!(self.use_image_service, Value::Bool(true))
    }

    pub fn init_opts(&self) -> Option<InitOptions> {
        InitOptions::from_value(&self.init_opts)
    }
}

fn non_blank(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Initial view parameters requested by the embedding page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InitOptions {
    pub plane: Option<String>,
    pub zoom: Option<i64>,
    pub color: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl InitOptions {
    /// Lenient parse: only JSON objects qualify, and a field of the
    /// wrong type counts as absent.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let string = |key: &str| obj.get(key).and_then(Value::as_str).map(String::from);
        let number = |key: &str| obj.get(key).and_then(Value::as_f64);

        let zoom = obj.get("zoom").and_then(|v| {
            v.as_i64()
                .or_else(|| v.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
        });

        Some(Self {
            plane: string("plane"),
            zoom,
            color: string("color"),
            x: number("x"),
            y: number("y"),
            z: number("z"),
        })
    }

    pub fn has_coordinates(&self) -> bool {
        self.x.is_some() || self.y.is_some() || self.z.is_some()
    }
}

/// Validated, immutable embedding configuration
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapConfig {
    pub container_id: String,
    /// Bare domain derived from the server address
    pub server_host: String,
    pub data_set_id: u64,
    pub include_cross_hair: bool,
    pub use_image_service: bool,
    pub init_opts: Option<InitOptions>,
}

/// Tunables of the bootstrap sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapSettings {
    pub dependency_timeout_ms: u64,
    /// Used until the server configuration supplies `server_proxy_path`
    pub default_proxy_path: String,
    pub default_plane: String,
    pub default_color_map: String,
    pub widget_slot: u32,
    pub stylesheet: String,
    pub required_modules: Vec<String>,
}

impl Default for BootstrapSettings {
    fn default() -> Self {
        Self {
            dependency_timeout_ms: 30_000,
            default_proxy_path: "server".to_string(),
            default_plane: "y".to_string(),
            default_color_map: "grey".to_string(),
            widget_slot: 1,
            stylesheet: DEFAULT_STYLESHEET.to_string(),
            required_modules: REQUIRED_MODULES.iter().map(|m| m.to_string()).collect(),
        }
    }
}

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Data set metadata as returned by the data service.
///
/// Only the fields the bootstrapper looks at are typed; everything else is
/// kept in `extra` so the data set store receives the record untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetDescriptor {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// One entry per plane. A null list means no planes.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<PlaneDefinition>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DatasetDescriptor {
    pub fn plane_count(&self) -> usize {
        self.data.len()
    }

    pub fn has_planes(&self) -> bool {
        !self.data.is_empty()
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaneDefinition {
    /// Plane id, e.g. `x`, `y` or `z`
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A point in either world or pixel space. Missing axes read as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Coordinates {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Arguments for the widget factory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetRequest {
    pub container_id: String,
    pub slot_index: u32,
    pub host: String,
    pub include_cross_hair: bool,
    /// The widget is driven by this loader rather than the full desktop page
    pub managed: bool,
    pub use_image_service: bool,
}

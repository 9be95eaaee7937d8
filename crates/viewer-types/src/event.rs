use serde::{Deserialize, Serialize};

/// Progress of a bootstrap run.
/// The embedding entry point drains these for logging and status queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BootstrapEvent {
    /// Embedding arguments passed validation
    Validated { container_id: String, host: String, data_set_id: u64 },

    DependenciesLoaded { count: usize },

    ConfigurationLoaded { entries: usize },

    DataSetLoaded { data_set_id: u64, planes: usize },

    WidgetCreated { container_id: String },

    UserParametersApplied { plane: String },

    ResizeHandlerRegistered,

    /// The run stopped; the message has already been shown to the user
    Failed { message: String },
}

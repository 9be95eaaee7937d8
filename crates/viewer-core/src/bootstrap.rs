//! Embedded viewer bootstrap — the whole setup sequence.
//!
//! 1. Validate the embedding arguments and resolve the viewer host
//! 2. Load the stylesheet and the required viewer modules
//! 3. Fetch the server configuration (and kick off color map loading)
//! 4. Fetch the data set, hand it to the store and build the widget
//! 5. Apply the page's initial view parameters, if any
//! 6. Keep canvas sizes in sync with the window
//!
//! Each step must finish before the next one starts. Any failure is shown
//! to the user once (alert or container text) and ends the run.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use viewer_types::{
    Result, ViewerError,
    config::{
        BootstrapConfig, BootstrapSettings, EmbedArgs, NO_CANVAS_SUPPORT, UNKNOWN_CONTAINER_ID,
    },
    data_set::WidgetRequest,
    event::BootstrapEvent,
};
use crate::configuration::ConfigurationService;
use crate::event_bus::EventBus;
use crate::host::extract_host_name;
use crate::modules::load_dependencies;
use crate::ports::*;
use crate::registry::DataSetRegistry;
use crate::services::{fetch_configuration, fetch_data_set};
use crate::user_params::apply_user_parameters;

pub const LIBRARY_LOAD_FAILED: &str = "Failed to load required library!";

/// Everything the bootstrapper talks to
#[derive(Clone)]
pub struct ViewerPorts {
    pub service: Rc<dyn ServicePort>,
    pub modules: Rc<dyn ModuleLoaderPort>,
    pub host: Rc<dyn HostPort>,
    pub store: Rc<dyn DataSetStorePort>,
    pub widgets: Rc<dyn WidgetFactoryPort>,
    pub color_maps: Rc<dyn ColorMapPort>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapState {
    Created,
    Validated,
    DependenciesLoaded,
    Configured,
    Ready,
    Failed(String),
}

impl fmt::Display for BootstrapState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapState::Created => write!(f, "created"),
            BootstrapState::Validated => write!(f, "validated"),
            BootstrapState::DependenciesLoaded => write!(f, "dependencies loaded"),
            BootstrapState::Configured => write!(f, "configured"),
            BootstrapState::Ready => write!(f, "ready"),
            BootstrapState::Failed(message) => write!(f, "failed: {}", message),
        }
    }
}

/// Where a failure is shown
enum Surface<'a> {
    Alert,
    Container(&'a str),
}

pub struct EmbeddedViewerBootstrapper {
    pub settings: BootstrapSettings,
    pub configuration: ConfigurationService,
    pub registry: DataSetRegistry,
    pub event_bus: EventBus,
    /// Shared so the embedding page can watch progress while `run` is pending
    state: Rc<RefCell<BootstrapState>>,
    ports: ViewerPorts,
}

impl EmbeddedViewerBootstrapper {
    pub fn new(
        ports: ViewerPorts,
        settings: BootstrapSettings,
        configuration: ConfigurationService,
        registry: DataSetRegistry,
        event_bus: EventBus,
    ) -> Self {
        Self {
            settings,
            configuration,
            registry,
            event_bus,
            state: Rc::new(RefCell::new(BootstrapState::Created)),
            ports,
        }
    }

    pub fn state(&self) -> BootstrapState {
        self.state.borrow().clone()
    }

    pub fn state_handle(&self) -> Rc<RefCell<BootstrapState>> {
        self.state.clone()
    }

    fn set_state(&self, state: BootstrapState) {
        log::debug!("Bootstrap state: {}", state);
        *self.state.borrow_mut() = state;
    }

    /// Run the full sequence.
    ///
    /// The returned error has already been shown to the user; callers only
    /// need it for logging.
    pub async fn run(&mut self, args: EmbedArgs) -> Result<BootstrapConfig> {
        let config = self.validate(&args)?;
        self.set_state(BootstrapState::Validated);
        self.event_bus.emit(BootstrapEvent::Validated {
            container_id: config.container_id.clone(),
            host: config.server_host.clone(),
            data_set_id: config.data_set_id,
        });

        // Modules
        let event_bus = self.event_bus.clone();
        let loaded = load_dependencies(
            self.ports.modules.as_ref(),
            &config.server_host,
            &self.settings,
            move |count| {
                event_bus.emit(BootstrapEvent::DependenciesLoaded { count });
                count
            },
        )
        .await;
        if let Err(e) = loaded {
            return Err(self.fail(e, Surface::Alert, Some(LIBRARY_LOAD_FAILED)));
        }
        self.set_state(BootstrapState::DependenciesLoaded);

        // Server configuration
        let configured = self.load_configuration(&config.server_host).await;
        if let Err(e) = configured {
            return Err(self.fail(e, Surface::Alert, None));
        }
        self.set_state(BootstrapState::Configured);

        // Data set and widget
        let loaded = self.load_data_set(&config).await;
        let data_set = match loaded {
            Ok(ds) => ds,
            Err(e) => return Err(self.fail(e, Surface::Container(&config.container_id), None)),
        };

        if let Some(opts) = &config.init_opts {
            let now = chrono::Utc::now().timestamp_millis();
            if let Some(applied) = apply_user_parameters(
                opts,
                data_set.as_ref(),
                self.ports.host.as_ref(),
                &self.settings,
                now,
            ) {
                log::info!("Initial view: plane {} at {:?}", applied.plane, applied.coordinates);
                self.event_bus
                    .emit(BootstrapEvent::UserParametersApplied { plane: applied.plane });
            }
        }

        self.register_resize_handler();

        self.set_state(BootstrapState::Ready);
        Ok(config)
    }

    /// Check the embedding arguments in order, showing the first problem.
    pub fn validate(&mut self, args: &EmbedArgs) -> Result<BootstrapConfig> {
        let container_id = match args.container_id() {
            Ok(id) => id,
            Err(e) => return Err(self.fail(e, Surface::Alert, None)),
        };
        if !self.ports.host.container_exists(&container_id) {
            let e = ViewerError::Validation(UNKNOWN_CONTAINER_ID.to_string());
            return Err(self.fail(e, Surface::Alert, None));
        }

        let in_container = |this: &mut Self, e: ViewerError| {
            this.fail(e, Surface::Container(&container_id), None)
        };

        let server = match args.server() {
            Ok(s) => s,
            Err(e) => return Err(in_container(self, e)),
        };
        let server_host = extract_host_name(&server);

        let data_set_id = match args.data_set_id() {
            Ok(id) => id,
            Err(e) => return Err(in_container(self, e)),
        };

        if !self.ports.host.supports_canvas() {
            let e = ViewerError::Environment(NO_CANVAS_SUPPORT.to_string());
            return Err(in_container(self, e));
        }

        Ok(BootstrapConfig {
            container_id: container_id.clone(),
            server_host,
            data_set_id,
            include_cross_hair: args.include_cross_hair(),
            use_image_service: args.use_image_service(),
            init_opts: args.init_opts(),
        })
    }

    async fn load_configuration(&self, host: &str) -> Result<usize> {
        let entries = fetch_configuration(self.ports.service.as_ref(), host, &self.configuration).await?;
        log::info!("Loaded {} configuration entries", entries);
        self.event_bus.emit(BootstrapEvent::ConfigurationLoaded { entries });

        if let Err(e) = self.ports.color_maps.load_color_maps(&self.configuration).await {
            log::warn!("Color maps unavailable: {}", e);
        }
        Ok(entries)
    }

    async fn load_data_set(&self, config: &BootstrapConfig) -> Result<Rc<dyn LoadedDataSet>> {
        self.registry.clear();

        let descriptor = fetch_data_set(
            self.ports.service.as_ref(),
            &config.server_host,
            &self.configuration,
            config.data_set_id,
        )
        .await?;
        self.event_bus.emit(BootstrapEvent::DataSetLoaded {
            data_set_id: descriptor.id,
            planes: descriptor.plane_count(),
        });

        let data_set = self.ports.store.add_data_set(&descriptor, &config.server_host)?;
        self.registry.add(data_set.clone());

        let request = WidgetRequest {
            container_id: config.container_id.clone(),
            slot_index: self.settings.widget_slot,
            host: config.server_host.clone(),
            include_cross_hair: config.include_cross_hair,
            managed: true,
            use_image_service: config.use_image_service,
        };
        self.ports.widgets.create_data_set_widget(&request, data_set.as_ref())?;
        log::info!("Data set {} shown in #{}", descriptor.id, config.container_id);
        self.event_bus.emit(BootstrapEvent::WidgetCreated {
            container_id: config.container_id.clone(),
        });

        Ok(data_set)
    }

    fn register_resize_handler(&self) {
        let registry = self.registry.clone();
        let handler = Box::new(move || {
            registry.resize_first();
        });
        match self.ports.host.on_resize(handler) {
            Ok(()) => self.event_bus.emit(BootstrapEvent::ResizeHandlerRegistered),
            Err(e) => log::warn!("Resize handler not registered: {}", e),
        }
    }

    /// Show a failure to the user and end the run. `message` overrides the
    /// error's own text.
    fn fail(&mut self, err: ViewerError, surface: Surface<'_>, message: Option<&str>) -> ViewerError {
        let text = message.map(String::from).unwrap_or_else(|| err.to_string());
        log::error!("Viewer bootstrap failed: {}", err);

        match surface {
            Surface::Alert => self.ports.host.alert(&text),
            Surface::Container(id) => self.ports.host.write_into_container(id, &text),
        }

        self.set_state(BootstrapState::Failed(text.clone()));
        self.event_bus.emit(BootstrapEvent::Failed { message: text });
        err
    }
}

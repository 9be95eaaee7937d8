//! Calls to the backend's configuration and data services.

use viewer_types::{
    Result, ViewerError,
    data_set::DatasetDescriptor,
    service::{ConfigRecord, ServiceReply},
};
use serde_json::Value;
use crate::configuration::ConfigurationService;
use crate::ports::ServicePort;

pub const NOTHING_RECEIVED: &str = "Did not receive anything, neither success nor error ....";
pub const NOTHING_RECEIVED_FROM_BACKEND: &str =
    "Did not receive anything from backend, neither success nor error ....";
pub const NO_CONFIGURATION: &str = "No configuration info found in database";
pub const NO_DATA_SET: &str = "No data set found in configuration database for given id";

pub fn configuration_url(host: &str, proxy_path: &str) -> String {
    format!(
        "http://{}/{}/?service=services&sub_service=configuration&action=all",
        host, proxy_path
    )
}

pub fn data_set_url(host: &str, proxy_path: &str, data_set_id: u64) -> String {
    format!(
        "http://{}/{}/?service=services&sub_service=data&action=all&id={}&include_planes=true",
        host, proxy_path, data_set_id
    )
}

/// Fetch the full server configuration and store it in `configuration`.
/// Returns the number of entries stored.
pub async fn fetch_configuration(
    service: &dyn ServicePort,
    host: &str,
    configuration: &ConfigurationService,
) -> Result<usize> {
    let url = configuration_url(host, &configuration.proxy_path());
    log::debug!("GET {}", url);
    let body = service.get_json(&url).await?;

    let records = match ServiceReply::from_value(&body) {
        ServiceReply::Response(value) => config_records(value),
        ServiceReply::ApplicationError(description) => {
            return Err(ViewerError::Application(description))
        }
        ServiceReply::NoResults => return Err(ViewerError::NoResults(NO_CONFIGURATION.to_string())),
        ServiceReply::Empty => return Err(ViewerError::EmptyReply(NOTHING_RECEIVED.to_string())),
    };

    Ok(configuration.populate(records))
}

/// Decode configuration rows one by one; null or malformed rows are dropped
/// so one bad row cannot take the whole configuration down.
fn config_records(response: Value) -> Vec<ConfigRecord> {
    let Value::Array(rows) = response else {
        log::warn!("Configuration reply is not a list: {}", response);
        return Vec::new();
    };
    let total = rows.len();
    let records: Vec<ConfigRecord> = rows
        .into_iter()
        .filter_map(|row| serde_json::from_value(row).ok())
        .collect();
    if records.len() < total {
        log::warn!("Skipped {} unreadable configuration rows", total - records.len());
    }
    records
}

/// Fetch the metadata of one data set, planes included.
pub async fn fetch_data_set(
    service: &dyn ServicePort,
    host: &str,
    configuration: &ConfigurationService,
    data_set_id: u64,
) -> Result<DatasetDescriptor> {
    let url = data_set_url(host, &configuration.proxy_path(), data_set_id);
    log::debug!("GET {}", url);
    let body = service.get_json(&url).await?;

    let response = match ServiceReply::from_value(&body) {
        ServiceReply::Response(value) => value,
        ServiceReply::ApplicationError(description) => {
            return Err(ViewerError::Application(description))
        }
        ServiceReply::NoResults => return Err(ViewerError::NoResults(NO_DATA_SET.to_string())),
        ServiceReply::Empty => {
            return Err(ViewerError::EmptyReply(NOTHING_RECEIVED_FROM_BACKEND.to_string()))
        }
    };

    let first = match response {
        Value::Array(mut items) if !items.is_empty() => items.swap_remove(0),
        Value::Array(_) => return Err(ViewerError::NoResults(NO_DATA_SET.to_string())),
        single => single,
    };

    let descriptor: DatasetDescriptor = serde_json::from_value(first)?;
    if !descriptor.has_planes() {
        return Err(ViewerError::NoPlanes(descriptor.id));
    }
    Ok(descriptor)
}

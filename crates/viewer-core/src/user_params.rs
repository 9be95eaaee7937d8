//! Initial view parameters requested by the embedding page: primary plane,
//! zoom level, color map and slice position.

use viewer_types::{config::{BootstrapSettings, InitOptions}, data_set::Coordinates};
use crate::ports::{HostPort, LoadedDataSet, PlaneView};

/// What was actually applied, for logging and tests
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedParameters {
    pub plane: String,
    pub swapped: bool,
    pub zoom: Option<usize>,
    pub color: Option<String>,
    pub coordinates: Coordinates,
    pub timestamp: i64,
}

/// Apply `opts` to `data_set`. Does nothing when the requested plane does
/// not exist. `timestamp` tags both the preview and the full draw so the
/// latter can supersede the former.
pub fn apply_user_parameters(
    opts: &InitOptions,
    data_set: &dyn LoadedDataSet,
    host: &dyn HostPort,
    settings: &BootstrapSettings,
    timestamp: i64,
) -> Option<AppliedParameters> {
    let plane_id = opts
        .plane
        .clone()
        .unwrap_or_else(|| settings.default_plane.clone());

    let Some(plane) = data_set.plane(&plane_id) else {
        log::warn!("Data set {} has no plane '{}', ignoring view parameters", data_set.id(), plane_id);
        return None;
    };

    let swapped = host.maximize_plane(&plane_id);

    let zoom = opts
        .zoom
        .and_then(|z| usize::try_from(z).ok())
        .filter(|&z| z < plane.zoom_level_count());
    if let Some(level) = zoom {
        plane.change_to_zoom_level(level);
    }

    let color = opts
        .color
        .clone()
        .filter(|c| !c.is_empty() && *c != settings.default_color_map);
    if let Some(name) = &color {
        for p in data_set.planes() {
            p.set_color_map(name);
        }
    }

    let coordinates = target_coordinates(opts, plane.as_ref());

    plane.change_slice(coordinates.z);
    plane.draw_low_resolution_preview(timestamp);
    plane.draw_after_low_resolution_preview(timestamp);

    Some(AppliedParameters {
        plane: plane_id,
        swapped,
        zoom,
        color,
        coordinates,
        timestamp,
    })
}

/// Explicit coordinates win (unset axes are 0, mapped to pixel space when
/// the extent knows how). Otherwise the current cross hair position at the
/// current slice.
fn target_coordinates(opts: &InitOptions, plane: &dyn PlaneView) -> Coordinates {
    if opts.has_coordinates() {
        let given = Coordinates::new(
            opts.x.unwrap_or(0.0),
            opts.y.unwrap_or(0.0),
            opts.z.unwrap_or(0.0),
        );
        if plane.has_world_transform() {
            plane.world_to_pixel(given)
        } else {
            given
        }
    } else {
        let mut cross = plane.relative_cross_coordinates();
        cross.z = plane.current_slice();
        cross
    }
}

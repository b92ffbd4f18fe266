//! Plotter configuration and the resolver that merges partial overrides onto
//! defaults.
//!
//! Overrides are plain JSON objects so callers can hand over any subset of
//! fields, nested arbitrarily, in either `snake_case` or `camelCase`:
//!
//! ```
//! use fngraph::config::PlotterConfig;
//! use serde_json::json;
//!
//! let config = PlotterConfig::resolve(&json!({ "axes": { "scale": 80 } })).unwrap();
//! assert_eq!(config.axes.scale, 80.0);
//! assert!(config.axes.show_negative_x);
//! ```

mod merge;
mod schema;
mod validation;

use serde_json::Value;
use tracing::debug;

use crate::error::{PlotError, PlotResult};

pub use schema::{AxesConfig, GraphConfig, MarkingsConfig, Passthrough, PlotterConfig, PointConfig};

impl PlotterConfig {
    /// Resolves a partial override onto the default configuration.
    pub fn resolve(overrides: &Value) -> PlotResult<Self> {
        Self::default().merged(overrides)
    }

    /// Deep-merges `overrides` onto this configuration.
    ///
    /// `null` leaves, values of the wrong JSON type, unparsable colors and
    /// unusable numbers keep the current value and are logged. Only an
    /// override that is not an object at all is reported as
    /// [`PlotError::InvalidConfig`].
    pub fn merged(&self, overrides: &Value) -> PlotResult<Self> {
        let current = self.clone().sanitized();
        let mut tree = serde_json::to_value(&current)
            .map_err(|err| PlotError::InvalidConfig(err.to_string()))?;
        let schema = serde_json::to_value(Self::default())
            .map_err(|err| PlotError::InvalidConfig(err.to_string()))?;
        merge::merge_overrides(&mut tree, overrides, &schema)?;

        let merged: Self =
            serde_json::from_value(tree).map_err(|err| PlotError::InvalidConfig(err.to_string()))?;
        debug!(
            passthrough_keys = merged.passthrough_len(),
            "resolved plotter configuration"
        );
        Ok(validation::sanitize(merged, &current))
    }

    /// Replaces unusable values with their defaults, logging each one.
    #[must_use]
    pub fn sanitized(self) -> Self {
        validation::sanitize(self, &Self::default())
    }

    fn passthrough_len(&self) -> usize {
        self.extra.len()
            + self.axes.extra.len()
            + self.axes.markings.extra.len()
            + self.graph.extra.len()
            + self.point.extra.len()
    }
}

//! Application services - Use case implementations

mod pipeline_service;
mod transform_service;

pub use pipeline_service::{DEFAULT_FORECAST_DAYS, PipelineRun, PipelineService};
pub use transform_service::{
    AlertThresholds, TransformService, analyze_current, analyze_forecast, precipitation_outlook,
    temperature_range, trend, week_summary,
};

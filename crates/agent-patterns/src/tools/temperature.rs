use std::future::ready;

use agent_patterns_core::tool::{Tool, ToolResult};
use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The unit of a temperature reading.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    /// Degrees Celsius.
    #[default]
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
}

/// Input of [`TemperatureTool`].
#[derive(Deserialize, JsonSchema)]
pub struct TemperatureToolParameters {
    #[schemars(description = "The city and state, e.g. Austin, TX")]
    location: String,
    #[serde(default)]
    #[schemars(
        description = "The unit of temperature to use. Defaults to celsius."
    )]
    unit: TemperatureUnit,
}

/// A tool reporting the current temperature of a location.
///
/// The readings are fixed, there is no weather service behind it.
pub struct TemperatureTool {
    parameter_schema: Value,
}

impl TemperatureTool {
    /// Creates a new temperature tool.
    #[inline]
    pub fn new() -> Self {
        TemperatureTool {
            parameter_schema: schema_for!(TemperatureToolParameters)
                .to_value(),
        }
    }
}

impl Default for TemperatureTool {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for TemperatureTool {
    type Input = TemperatureToolParameters;

    fn name(&self) -> &str {
        "get_current_temprature"
    }

    fn description(&self) -> &str {
        "Use this to retrieve the temperature of any particular location."
    }

    fn parameter_schema(&self) -> &Value {
        &self.parameter_schema
    }

    fn execute(
        &self,
        input: TemperatureToolParameters,
    ) -> impl Future<Output = ToolResult> + Send + 'static {
        debug!("reading temperature of {}", input.location);
        let reading = match input.unit {
            TemperatureUnit::Celsius => "30",
            TemperatureUnit::Fahrenheit => "45",
        };
        ready(Ok(reading.to_owned()))
    }
}

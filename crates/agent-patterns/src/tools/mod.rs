//! A set of built-in tools that models can use.

mod hacker_news;
mod temperature;

use agent_patterns_core::{Error, ToolRegistry};

pub use hacker_news::{
    DEFAULT_BASE_URL as HACKER_NEWS_BASE_URL, HackerNewsTool,
    HackerNewsToolParameters,
};
pub use temperature::{
    TemperatureTool, TemperatureToolParameters, TemperatureUnit,
};

/// Creates a registry holding every built-in tool.
pub fn builtin_registry() -> Result<ToolRegistry, Error> {
    ToolRegistry::builder()
        .with_tool(TemperatureTool::new())
        .with_tool(HackerNewsTool::new())
        .build()
}

//! Tool call supports.

mod descriptor;
mod error;
mod object;
mod registry;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub use descriptor::ToolDescriptor;
pub use error::{Error, ErrorKind};
pub use registry::{ToolRegistry, ToolRegistryBuilder};

/// The result of a tool call.
pub type ToolResult = Result<String, Error>;

/// A tool that can be called by the model.
///
/// Implementations of this trait should be stateless. The same tool may be
/// invoked by several independent runs at once.
///
/// The tool can be context-aware, meaning it can access additional information
/// such as an HTTP client or an endpoint. To do this, make the context an
/// immutable state of the tool, set during initialization, and copy it into
/// the future returned by [`Tool::execute`].
pub trait Tool: Send + Sync + 'static {
    /// The type of input that the tool accepts.
    type Input: DeserializeOwned;

    /// Returns the name of the tool.
    fn name(&self) -> &str;

    /// Returns the description of the tool.
    fn description(&self) -> &str;

    /// Returns the parameter schema of the tool.
    ///
    /// This must be a JSON schema of `"type": "object"`, every name listed
    /// in `required` must be declared in `properties`.
    fn parameter_schema(&self) -> &Value;

    /// Executes the tool with the given input.
    ///
    /// This method must return a future that is fully independent of `self`.
    fn execute(
        &self,
        input: Self::Input,
    ) -> impl Future<Output = ToolResult> + Send + 'static;
}

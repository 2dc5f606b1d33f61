use std::collections::BTreeMap;
use std::sync::Arc;

use agent_patterns_model::{ToolCallRequest, ToolCallResult};
use serde_json::Value;
use tracing::Instrument;

use super::object::{ToolObject, ToolObjectImpl};
use super::{Error, Tool, ToolDescriptor, ToolResult};
use crate::error::Error as CoreError;

struct Entry {
    descriptor: ToolDescriptor,
    tool: Arc<dyn ToolObject>,
}

/// An immutable set of tools, keyed by name.
///
/// The registry is what the model is told about ([`describe`]) and what
/// its tool calls are dispatched against ([`invoke`], [`dispatch`]).
///
/// [`describe`]: ToolRegistry::describe
/// [`invoke`]: ToolRegistry::invoke
/// [`dispatch`]: ToolRegistry::dispatch
pub struct ToolRegistry {
    entries: BTreeMap<String, Entry>,
}

/// [`ToolRegistry`] builder.
#[derive(Default)]
pub struct ToolRegistryBuilder {
    tools: Vec<Arc<dyn ToolObject>>,
}

impl ToolRegistryBuilder {
    /// Registers a tool.
    #[inline]
    pub fn with_tool<T: Tool>(mut self, tool: T) -> Self {
        self.tools.push(Arc::new(ToolObjectImpl(tool)));
        self
    }

    /// Validates the tools and builds the registry.
    ///
    /// Fails when two tools share a name, a name is empty, or a parameter
    /// schema does not describe an object whose required parameters are all
    /// declared.
    pub fn build(self) -> Result<ToolRegistry, CoreError> {
        let mut entries = BTreeMap::new();
        for tool in self.tools {
            let name = tool.name().to_owned();
            if name.is_empty() {
                return Err(CoreError::RegistryConsistency(
                    "a tool has an empty name".to_owned(),
                ));
            }
            let descriptor = ToolDescriptor::from_schema(
                name.clone(),
                tool.description().trim(),
                tool.parameter_schema().clone(),
            );
            if let Some(problem) = descriptor.schema_problem() {
                return Err(CoreError::RegistryConsistency(problem));
            }
            if entries.contains_key(&name) {
                return Err(CoreError::RegistryConsistency(format!(
                    "tool `{name}` is registered twice"
                )));
            }
            entries.insert(name, Entry { descriptor, tool });
        }
        debug!("tool registry built with {} tools", entries.len());
        Ok(ToolRegistry { entries })
    }
}

impl ToolRegistry {
    /// Creates a builder.
    #[inline]
    pub fn builder() -> ToolRegistryBuilder {
        ToolRegistryBuilder::default()
    }

    /// Returns the descriptors of all tools, ordered by name.
    pub fn describe(&self) -> Vec<ToolDescriptor> {
        self.entries
            .values()
            .map(|entry| entry.descriptor.clone())
            .collect()
    }

    /// Returns whether a tool named `name` is registered.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the number of tools.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the registry has no tools.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Calls the tool named `name` with `arguments`.
    ///
    /// The tool runs in its own task, a panic inside it is reported as an
    /// execution error instead of unwinding into the caller.
    pub async fn invoke(&self, name: &str, arguments: Value) -> ToolResult {
        let Some(entry) = self.entries.get(name) else {
            warn!("tool not found: {name}");
            return Err(Error::unknown_tool().with_reason(format!("`{name}`")));
        };
        entry.descriptor.check_arguments(&arguments)?;

        // `execute` itself runs inside the task, a tool may panic before it
        // returns its future.
        let tool = Arc::clone(&entry.tool);
        tokio::spawn(
            async move { tool.execute(arguments).await }
                .instrument(debug_span!("tool execute", tool = name)),
        )
        .await
            .unwrap_or_else(|err| {
                error!("tool `{name}` did not finish: {err}");
                Err(Error::execution_error().with_reason("the tool crashed"))
            })
    }

    /// Handles one tool call request from the model.
    ///
    /// Always produces a result carrying the request's id and name, errors
    /// become the content of the result.
    pub async fn dispatch(&self, req: ToolCallRequest) -> ToolCallResult {
        let ToolCallRequest {
            id,
            name,
            arguments,
        } = req;
        trace!("calling tool `{name}` ({id}) with args: {arguments}");
        let content = match self.invoke(&name, arguments).await {
            Ok(content) => content,
            Err(err) => {
                info!("tool call {id} failed: {err}");
                err.to_tool_content()
            }
        };
        ToolCallResult { id, name, content }
    }
}

use agent_patterns_model::ModelTool;
use serde::Serialize;
use serde_json::Value;

use super::Error;

/// What the model is told about a tool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    /// Name of the tool, the join key with the registered callable.
    pub name: String,
    /// Description of the tool.
    pub description: String,
    /// JSON schema of the arguments.
    pub parameters: Value,
    /// Parameters the model must always provide.
    pub required: Vec<String>,
}

impl ToolDescriptor {
    /// Creates a descriptor, taking the required parameter names from the
    /// schema's `required` array.
    pub fn from_schema<N, D>(name: N, description: D, parameters: Value) -> Self
    where
        N: Into<String>,
        D: Into<String>,
    {
        let required = parameters
            .get("required")
            .and_then(Value::as_array)
            .map(|names| {
                names
                    .iter()
                    .filter_map(Value::as_str)
                    .map(ToOwned::to_owned)
                    .collect()
            })
            .unwrap_or_default();
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
            required,
        }
    }

    /// Converts to the provider-neutral tool definition.
    #[inline]
    pub fn to_model_tool(&self) -> ModelTool {
        ModelTool {
            name: self.name.clone(),
            description: self.description.clone(),
            parameters: self.parameters.clone(),
        }
    }

    /// Checks that `arguments` is an object carrying every required
    /// parameter.
    pub fn check_arguments(&self, arguments: &Value) -> Result<(), Error> {
        let Some(object) = arguments.as_object() else {
            return Err(Error::invalid_arguments()
                .with_reason(format!("expected a JSON object, got `{arguments}`")));
        };
        let missing: Vec<_> = self
            .required
            .iter()
            .filter(|name| object.get(name.as_str()).is_none_or(Value::is_null))
            .map(String::as_str)
            .collect();
        if !missing.is_empty() {
            return Err(Error::invalid_arguments().with_reason(format!(
                "missing required parameter(s): {}",
                missing.join(", ")
            )));
        }
        Ok(())
    }

    /// Returns why the schema cannot describe a tool's arguments, if it
    /// can't.
    pub(crate) fn schema_problem(&self) -> Option<String> {
        if self.parameters.get("type").and_then(Value::as_str) != Some("object")
        {
            return Some(format!(
                "parameters of `{}` must be an object schema",
                self.name
            ));
        }
        let properties = self.parameters.get("properties");
        self.required
            .iter()
            .find(|name| {
                properties.and_then(|p| p.get(name.as_str())).is_none()
            })
            .map(|name| {
                format!(
                    "`{}` requires `{name}` which is not a declared property",
                    self.name
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::tool::ErrorKind;

    fn weather() -> ToolDescriptor {
        ToolDescriptor::from_schema(
            "get_current_temprature",
            "Retrieves the temperature of a location",
            json!({
                "type": "object",
                "properties": {
                    "location": { "type": "string" },
                    "unit": { "type": "string", "enum": ["celsius", "fahrenheit"] }
                },
                "required": ["location"]
            }),
        )
    }

    #[test]
    fn test_required_from_schema() {
        assert_eq!(weather().required, ["location"]);
        assert_eq!(weather().schema_problem(), None);
    }

    #[test]
    fn test_check_arguments() {
        let tool = weather();
        assert!(tool.check_arguments(&json!({ "location": "Austin" })).is_ok());

        let err = tool
            .check_arguments(&json!({ "unit": "celsius" }))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArguments);
        assert!(err.reason().contains("location"));

        let err = tool.check_arguments(&json!({ "location": null })).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArguments);

        let err = tool.check_arguments(&json!("{location: Austin")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArguments);
    }

    #[test]
    fn test_schema_problems() {
        let tool = ToolDescriptor::from_schema("a", "", json!({ "type": "string" }));
        assert!(tool.schema_problem().is_some());

        let tool = ToolDescriptor::from_schema(
            "b",
            "",
            json!({
                "type": "object",
                "properties": { "x": { "type": "integer" } },
                "required": ["y"]
            }),
        );
        assert!(tool.schema_problem().unwrap().contains("`y`"));
    }
}

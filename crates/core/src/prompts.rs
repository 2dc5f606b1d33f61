//! Built-in system prompts.
//!
//! Callers may put their own text in front of these prompts, the built-in
//! part is always appended.

/// Marker the critic includes when the content needs no further changes.
pub const APPROVAL_SENTINEL: &str = "<OK>";

/// Instructions for the generation side of a reflection run.
pub const BASE_GENERATION_SYSTEM_PROMPT: &str = r#"
Your task is to generate the best content possible for the user's request.
If the user provides critique, respond with a revised version of your previous attempt.
You must always output the revised content.
"#;

/// Instructions for the reflection side of a reflection run.
pub const BASE_REFLECTION_SYSTEM_PROMPT: &str = r#"
You are tasked with validating the user's content and generating recommendations for it.
If the content has something wrong or something to be improved, output a list of recommendations
and critiques. If the content is fine and there is nothing to change, output '<OK>' and nothing else.
"#;

/// Instructions for a tool-use run.
pub const BASE_TOOL_SYSTEM_PROMPT: &str = r#"
Your task is to generate the best content possible for the user's request.
You are provided with several tools, each with a clear description. Use them to get the information
required to generate the best response.
You must always output the final content.
"#;

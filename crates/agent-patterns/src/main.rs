//! Runs the reflection or the tool-use agent from the terminal.

#[macro_use]
extern crate tracing;

use std::time::Duration;

use agent_patterns::Settings;
use agent_patterns::tools::builtin_registry;
use agent_patterns_core::reflection::DEFAULT_MAX_ITERATIONS;
use agent_patterns_core::{
    ApprovalMatch, ReflectionOrchestrator, ToolOrchestrator,
};
use agent_patterns_openai_model::OpenAIProvider;
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tokio::io::{self, AsyncReadExt};

const BAR_CHAR: &str = "▎";

#[derive(Parser, Debug)]
#[command(name = "agent-patterns", version)]
#[command(about = "Reflection and tool-use agents over a chat completion API")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate content and refine it through self-critique.
    Reflect {
        /// The request, read from stdin when omitted.
        request: Option<String>,

        /// Maximum number of generate/reflect cycles.
        #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
        max_iterations: usize,

        /// Text put in front of the generation system prompt.
        #[arg(long, default_value = "")]
        generation_prompt: String,

        /// Text put in front of the reflection system prompt.
        #[arg(long, default_value = "")]
        reflection_prompt: String,

        /// Only accept a critique consisting of the approval sentinel alone.
        #[arg(long)]
        exact_approval: bool,
    },

    /// Answer with the help of the built-in tools.
    Tool {
        /// The request, read from stdin when omitted.
        request: Option<String>,

        /// Text put in front of the system prompt.
        #[arg(long, default_value = "")]
        system_prompt: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env()?;
    let config = settings.to_openai_config();
    info!("using model {}", config.model());
    let provider = OpenAIProvider::new(config);

    let progress_bar = ProgressBar::new_spinner();
    let output = match cli.command {
        Command::Reflect {
            request,
            max_iterations,
            generation_prompt,
            reflection_prompt,
            exact_approval,
        } => {
            let request = read_request(request).await?;
            let approval_match = if exact_approval {
                ApprovalMatch::Exact
            } else {
                ApprovalMatch::Contains
            };
            let orchestrator = ReflectionOrchestrator::builder(provider)
                .with_approval_match(approval_match)
                .build();

            start_spinner(&progress_bar, "🤔 Reflecting...")?;
            orchestrator
                .run(
                    &request,
                    &generation_prompt,
                    &reflection_prompt,
                    max_iterations,
                )
                .await
        }
        Command::Tool {
            request,
            system_prompt,
        } => {
            let request = read_request(request).await?;
            let registry = builtin_registry()?;
            let orchestrator =
                ToolOrchestrator::builder(provider, registry).build();

            start_spinner(&progress_bar, "🤔 Thinking...")?;
            orchestrator.run(&request, &system_prompt).await
        }
    };
    progress_bar.finish_and_clear();

    let output = output.context("the agent run failed")?;
    println!("{}🤖 {}", BAR_CHAR.bright_cyan(), output.bright_white());
    Ok(())
}

async fn read_request(request: Option<String>) -> Result<String> {
    let request = match request {
        Some(request) => request,
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .await
                .context("failed to read the request from stdin")?;
            input
        }
    };

    let request = request.trim();
    if request.is_empty() {
        bail!("the request is empty");
    }
    Ok(request.to_owned())
}

fn start_spinner(progress_bar: &ProgressBar, message: &'static str) -> Result<()> {
    let style = ProgressStyle::with_template("{spinner} {wide_msg}")?
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    progress_bar.set_style(style);
    progress_bar.set_message(message);
    progress_bar.enable_steady_tick(Duration::from_millis(100));
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli() {
        Cli::command().debug_assert();

        let cli = Cli::parse_from([
            "agent-patterns",
            "reflect",
            "Write a haiku",
            "--max-iterations",
            "5",
            "--exact-approval",
        ]);
        let Command::Reflect {
            request,
            max_iterations,
            exact_approval,
            ..
        } = cli.command
        else {
            panic!("expected the reflect subcommand");
        };
        assert_eq!(request.as_deref(), Some("Write a haiku"));
        assert_eq!(max_iterations, 5);
        assert!(exact_approval);

        let cli = Cli::parse_from(["agent-patterns", "tool"]);
        let Command::Tool {
            request,
            system_prompt,
        } = cli.command
        else {
            panic!("expected the tool subcommand");
        };
        assert_eq!(request, None);
        assert_eq!(system_prompt, "");
    }
}

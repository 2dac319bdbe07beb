//! bfhl command-line front end.
//!
//! Provides the `bfhl` binary, which runs one computation in-process and
//! prints the same JSON envelope the HTTP endpoint returns. Configuration is
//! read from the same environment variables as the server.
//!
//! Uses the same `ComputeService::dispatch()` as the HTTP handler, so
//! validation and results are identical from both entry points.

use std::process;

use clap::{Parser, Subcommand};

use bfhl_core::{BigInt, ComputedValue, FunctionRequestBody};
use bfhl_server::config::ServiceConfig;
use bfhl_server::error::ApiError;
use bfhl_server::schema::envelope::ResponseEnvelope;
use bfhl_server::service::ComputeService;

/// Path reported in failure envelopes produced by the CLI.
const CLI_PATH: &str = "cli";

/// bfhl compute service, in-process.
#[derive(Parser)]
#[command(name = "bfhl", about = "Run bfhl computations from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// First N Fibonacci terms.
    Fibonacci {
        #[arg(allow_negative_numbers = true)]
        n: BigInt,
    },

    /// Keep the primes of a list.
    Prime {
        #[arg(required = true, allow_negative_numbers = true)]
        nums: Vec<BigInt>,
    },

    /// LCM of a list.
    Lcm {
        #[arg(required = true, allow_negative_numbers = true)]
        nums: Vec<BigInt>,
    },

    /// HCF of a list.
    Hcf {
        #[arg(required = true, allow_negative_numbers = true)]
        nums: Vec<BigInt>,
    },

    /// Ask the AI resolver for a one-word answer.
    Ask { question: String },

    /// Send a raw JSON request body, validated like the HTTP endpoint.
    Request { json: String },
}

impl Commands {
    fn into_body(self) -> Result<FunctionRequestBody, ApiError> {
        let body = match self {
            Commands::Fibonacci { n } => FunctionRequestBody {
                fibonacci: Some(n),
                ..Default::default()
            },
            Commands::Prime { nums } => FunctionRequestBody {
                prime: Some(nums),
                ..Default::default()
            },
            Commands::Lcm { nums } => FunctionRequestBody {
                lcm: Some(nums),
                ..Default::default()
            },
            Commands::Hcf { nums } => FunctionRequestBody {
                hcf: Some(nums),
                ..Default::default()
            },
            Commands::Ask { question } => FunctionRequestBody {
                ai: Some(question),
                ..Default::default()
            },
            Commands::Request { json } => serde_json::from_str(&json).map_err(|err| {
                ApiError::ValidationFailed(serde_json::json!([{
                    "type": "json_error",
                    "msg": err.to_string(),
                }]))
            })?,
        };
        Ok(body)
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ServiceConfig::from_env();
    let email = config.official_email.clone();

    let (output, exit_code) = match run(cli.command, config).await {
        Ok(value) => (serde_json::to_string_pretty(&ResponseEnvelope::success(&email, value)), 0),
        Err(err) => (
            serde_json::to_string_pretty(&ResponseEnvelope::failure(&email, &err, CLI_PATH)),
            1,
        ),
    };

    match output {
        Ok(text) => println!("{}", text),
        Err(err) => {
            eprintln!("error: failed to render envelope: {}", err);
            process::exit(2);
        }
    }
    process::exit(exit_code);
}

async fn run(command: Commands, config: ServiceConfig) -> Result<ComputedValue, ApiError> {
    let body = command.into_body()?;
    let service = ComputeService::new(config)?;
    service.dispatch(body).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_for(args: &[&str]) -> Result<FunctionRequestBody, ApiError> {
        Cli::try_parse_from(args).unwrap().command.into_body()
    }

    fn ints(nums: &[i64]) -> Vec<BigInt> {
        nums.iter().map(|&n| BigInt::from(n)).collect()
    }

    #[test]
    fn list_subcommands_accept_negative_numbers() {
        let body = body_for(&["bfhl", "hcf", "-12", "18"]).unwrap();
        assert_eq!(body.hcf, Some(ints(&[-12, 18])));
        assert!(body.fibonacci.is_none());
    }

    #[test]
    fn ask_fills_ai_field() {
        let body = body_for(&["bfhl", "ask", "Who wrote Hamlet?"]).unwrap();
        assert_eq!(body.ai.as_deref(), Some("Who wrote Hamlet?"));
    }

    #[test]
    fn raw_request_is_parsed() {
        let body = body_for(&["bfhl", "request", r#"{"lcm": [4, 6]}"#]).unwrap();
        assert_eq!(body.lcm, Some(ints(&[4, 6])));

        let err = body_for(&["bfhl", "request", r#"{"lcm": "x"}"#]).unwrap_err();
        assert_eq!(err.to_string(), "Request validation failed");
    }

    #[tokio::test]
    async fn run_uses_dispatcher() {
        let config = ServiceConfig::new("cli@example.com");
        let value = run(Commands::Fibonacci { n: BigInt::from(3) }, config.clone())
            .await
            .unwrap();
        assert_eq!(serde_json::to_value(value).unwrap(), serde_json::json!([0, 1, 1]));

        let err = run(Commands::Prime { nums: vec![] }, config).await.unwrap_err();
        assert_eq!(err.to_string(), "prime array size invalid");
    }

    #[tokio::test]
    async fn arguments_beyond_64_bits_are_exact() {
        let args = ["bfhl", "hcf", "36893488147419103232", "18446744073709551616"];
        let command = Cli::try_parse_from(args).unwrap().command;
        let value = run(command, ServiceConfig::new("cli@example.com")).await.unwrap();
        assert_eq!(serde_json::to_string(&value).unwrap(), "18446744073709551616");
    }
}

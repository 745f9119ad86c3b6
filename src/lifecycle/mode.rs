//! Hosting mode selection.

use clap::ValueEnum;

/// Environment variable the Lambda runtime sets for its API endpoint.
pub const LAMBDA_RUNTIME_API_ENV: &str = "AWS_LAMBDA_RUNTIME_API";

/// How the handler is hosted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RuntimeMode {
    /// Driven by the Lambda runtime (API Gateway proxy events).
    Lambda,
    /// Plain HTTP listener, for development.
    Local,
}

impl RuntimeMode {
    /// Explicit choice wins; otherwise detect from the environment.
    pub fn detect(explicit: Option<RuntimeMode>) -> Self {
        Self::resolve(explicit, std::env::var_os(LAMBDA_RUNTIME_API_ENV).is_some())
    }

    fn resolve(explicit: Option<RuntimeMode>, in_lambda: bool) -> Self {
        match explicit {
            Some(mode) => mode,
            None if in_lambda => RuntimeMode::Lambda,
            None => RuntimeMode::Local,
        }
    }
}

//! Request validation and dispatch.
//!
//! [`ComputeService`] owns everything a compute request needs: the immutable
//! [`ServiceConfig`] and the [`AnswerResolver`] built from it. Handlers and
//! the CLI call [`ComputeService::dispatch`]; no business logic lives in
//! either of them.

use bfhl_core::kernels::{fibonacci_series, filter_primes, hcf_of_list, lcm_of_list};
use bfhl_core::{ComputedValue, FunctionCall, FunctionRequestBody};

use crate::answer_resolver::AnswerResolver;
use crate::config::ServiceConfig;
use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct ComputeService {
    config: ServiceConfig,
    resolver: AnswerResolver,
}

impl ComputeService {
    pub fn new(config: ServiceConfig) -> Result<Self, ApiError> {
        let resolver = AnswerResolver::new(config.provider.clone())?;
        Ok(ComputeService { config, resolver })
    }

    pub fn official_email(&self) -> &str {
        &self.config.official_email
    }

    /// Whether AI questions go to a live provider.
    pub fn is_live(&self) -> bool {
        self.resolver.is_live()
    }

    /// Validates `body` and computes the result for its single key.
    pub async fn dispatch(&self, body: FunctionRequestBody) -> Result<ComputedValue, ApiError> {
        let call = FunctionCall::try_from(body)?;
        tracing::debug!(key = %call.key(), "dispatching compute request");
        self.evaluate(call).await
    }

    /// Computes an already validated call.
    ///
    /// Numeric kernels are CPU-bound (trial division over big integers can
    /// take seconds), so they run on the blocking pool and never stall the
    /// async workers.
    pub async fn evaluate(&self, call: FunctionCall) -> Result<ComputedValue, ApiError> {
        match call {
            FunctionCall::Fibonacci(n) => {
                run_blocking(move || ComputedValue::from(fibonacci_series(n))).await
            }
            FunctionCall::Prime(nums) => {
                run_blocking(move || ComputedValue::from(filter_primes(&nums))).await
            }
            FunctionCall::Lcm(nums) => {
                run_blocking(move || ComputedValue::from(lcm_of_list(&nums))).await
            }
            FunctionCall::Hcf(nums) => {
                run_blocking(move || ComputedValue::from(hcf_of_list(&nums))).await
            }
            FunctionCall::Ai(question) => {
                let word = self.resolver.ask_single_word(&question).await?;
                Ok(ComputedValue::from(word))
            }
        }
    }
}

async fn run_blocking<F>(kernel: F) -> Result<ComputedValue, ApiError>
where
    F: FnOnce() -> ComputedValue + Send + 'static,
{
    tokio::task::spawn_blocking(kernel)
        .await
        .map_err(|err| ApiError::Internal(format!("compute task failed: {}", err)))
}

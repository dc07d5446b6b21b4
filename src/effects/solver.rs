//! AI solver relay.
//!
//! Sends a free-text math problem to a language-model backend and parses
//! the reply into a structured step-by-step [`AiSolution`].

use crate::effects::error::ServiceError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use stillwater::effect::Effect;
use stillwater::prelude::*;
use tracing::{debug, warn};

/// Structured answer returned by the solver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AiSolution {
    /// The problem as restated by the model
    pub problem: String,
    /// Ordered explanation steps, never empty
    pub steps: Vec<String>,
    pub final_answer: String,
}

/// A single request handed to a [`SolverBackend`].
#[derive(Clone, Debug, PartialEq)]
pub struct SolveRequest {
    pub prompt: String,
    /// JSON schema the reply must conform to
    pub response_schema: Value,
}

impl SolveRequest {
    /// Build the request for `problem`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use novacalc::effects::SolveRequest;
    ///
    /// let request = SolveRequest::for_problem("2x + 3 = 7");
    /// assert_eq!(
    ///     request.prompt,
    ///     "Solve this mathematical problem step-by-step: \"2x + 3 = 7\""
    /// );
    /// assert_eq!(request.response_schema["required"][2], "finalAnswer");
    /// ```
    pub fn for_problem(problem: &str) -> Self {
        Self {
            prompt: build_prompt(problem),
            response_schema: response_schema(),
        }
    }
}

/// Instruction sent to the model for `problem`.
pub fn build_prompt(problem: &str) -> String {
    format!("Solve this mathematical problem step-by-step: \"{problem}\"")
}

/// Schema of the JSON object the model is asked to produce.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "problem": { "type": "STRING" },
            "steps": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "finalAnswer": { "type": "STRING" }
        },
        "required": ["problem", "steps", "finalAnswer"]
    })
}

/// Parse the model's reply text into an [`AiSolution`].
pub fn parse_solution(text: &str) -> Result<AiSolution, ServiceError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ServiceError::new("No response from AI"));
    }

    let solution: AiSolution = serde_json::from_str(text)?;
    if solution.steps.is_empty() {
        return Err(ServiceError::new(
            "Malformed AI response: solution has no steps",
        ));
    }

    Ok(solution)
}

/// Language-model service that turns a prompt into reply text.
#[async_trait]
pub trait SolverBackend: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &str;

    /// Send the request and return the raw reply text.
    async fn generate(&self, request: &SolveRequest) -> Result<String, ServiceError>;
}

/// Environment the relay effect runs in.
#[derive(Clone)]
pub struct SolverEnv {
    backend: Arc<dyn SolverBackend>,
}

impl SolverEnv {
    pub fn new(backend: impl SolverBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    pub fn from_arc(backend: Arc<dyn SolverBackend>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &dyn SolverBackend {
        self.backend.as_ref()
    }
}

/// Solve `problem` through the backend in the environment.
///
/// Nothing happens until the effect is run. Failures are logged at `warn`
/// and returned as a [`ServiceError`]; no retries are attempted.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use novacalc::effects::{solve, ServiceError, SolveRequest, SolverBackend, SolverEnv};
/// use stillwater::effect::Effect;
///
/// struct Canned;
///
/// #[async_trait]
/// impl SolverBackend for Canned {
///     fn name(&self) -> &str {
///         "canned"
///     }
///
///     async fn generate(&self, _request: &SolveRequest) -> Result<String, ServiceError> {
///         Ok(r#"{"problem":"1+1","steps":["Add"],"finalAnswer":"2"}"#.to_string())
///     }
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let env = SolverEnv::new(Canned);
/// let solution = solve("1+1").run(&env).await.unwrap();
/// assert_eq!(solution.final_answer, "2");
/// # }
/// ```
pub fn solve(
    problem: impl Into<String>,
) -> impl Effect<Output = AiSolution, Error = ServiceError, Env = SolverEnv> {
    let problem = problem.into();
    let request = SolveRequest::for_problem(&problem);

    from_async(move |env: &SolverEnv| {
        let backend = Arc::clone(&env.backend);
        let request = request.clone();
        async move {
            let text = backend.generate(&request).await;
            text.map(|text| (backend.name().to_string(), text))
        }
    })
    .and_then(|(backend, text)| {
        from_result(parse_solution(&text).map(|solution| (backend, solution)))
    })
    .map(|(backend, solution)| {
        debug!(
            backend = %backend,
            steps = solution.steps.len(),
            "AI solver returned a solution"
        );
        solution
    })
    .map_err(move |err| {
        warn!(problem = %problem, error = %err, "AI solver request failed");
        err
    })
}

/// Identifies one request issued by a [`Solver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Outcome of a request, tagged with the token it was issued under.
#[derive(Clone, Debug, PartialEq)]
pub struct Tracked<T> {
    pub token: RequestToken,
    pub outcome: Result<T, ServiceError>,
}

/// Front for the relay that tags each request with a token.
///
/// Requests may overlap; only the response for the most recently issued
/// token is current; the caller discards the rest.
pub struct Solver {
    env: SolverEnv,
    issued: AtomicU64,
}

impl Solver {
    pub fn new(env: SolverEnv) -> Self {
        Self {
            env,
            issued: AtomicU64::new(0),
        }
    }

    /// Issue a fresh token, superseding all earlier ones.
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `token` is the most recently issued one.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.issued.load(Ordering::SeqCst) == token.0
    }

    /// Solve `problem` under a newly issued token.
    pub async fn solve(&self, problem: impl Into<String>) -> Tracked<AiSolution> {
        let token = self.issue();
        let outcome = solve(problem).run(&self.env).await;
        Tracked { token, outcome }
    }
}

//! Framework-agnostic request adapter.
//!
//! The adapter sits between an HTTP framework and the validator:
//!
//! 1. path parameters, query parameters and body fields are merged into one
//!    data bag, later sources overwriting earlier ones;
//! 2. the bag is validated against the route's field list;
//! 3. on failure an optional hook decides whether the request proceeds anyway,
//!    otherwise a fixed `400 EBADPARAM` response is produced.
//!
//! Whether the response lists the individual errors is controlled by
//! [`AdapterConfig::debug`]; the validator itself always reports everything.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use stillwater::Validation;
use tracing::debug;

use crate::error::{SchemaError, SchemaErrors};
use crate::schema::Schema;
use crate::validator::{DataBag, Validate};

/// Error code of every rejected request.
pub const ERROR_CODE: &str = "EBADPARAM";

/// HTTP status of every rejected request.
pub const ERROR_STATUS: u16 = 400;

/// Adapter configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Include the detailed error list in failure responses.
    #[serde(default)]
    pub debug: bool,
}

impl AdapterConfig {
    /// Returns a configuration with debug output switched on or off.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// The raw parameter sources of one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParams {
    pub path: DataBag,
    pub query: DataBag,
    pub body: Value,
}

impl RequestParams {
    /// Merges path, query and body fields into one bag.
    ///
    /// Only object bodies contribute fields. A string body holding a JSON
    /// object is parsed first; any other body is ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use paramguard::RequestParams;
    /// use serde_json::json;
    ///
    /// let params = RequestParams {
    ///     path: json!({"id": "1"}).as_object().cloned().unwrap(),
    ///     query: json!({"id": "2", "page": "3"}).as_object().cloned().unwrap(),
    ///     body: json!({"page": 4}),
    /// };
    ///
    /// let bag = params.into_bag();
    /// assert_eq!(bag["id"], json!("2"));
    /// assert_eq!(bag["page"], json!(4));
    /// ```
    pub fn into_bag(self) -> DataBag {
        let mut bag = self.path;
        bag.extend(self.query);

        let body = match self.body {
            Value::String(text) => serde_json::from_str(&text).unwrap_or(Value::Null),
            other => other,
        };
        if let Value::Object(fields) = body {
            bag.extend(fields);
        }
        bag
    }
}

/// Body of a rejected request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureBody {
    pub code: &'static str,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<SchemaError>>,
}

/// A rejected request, ready to be written by the HTTP framework.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureResponse {
    pub status: u16,
    pub body: FailureBody,
}

impl FailureResponse {
    fn new(errors: SchemaErrors, config: &AdapterConfig) -> Self {
        Self {
            status: ERROR_STATUS,
            body: FailureBody {
                code: ERROR_CODE,
                message: "invalid parameters",
                errors: config.debug.then(|| errors.into_vec()),
            },
        }
    }
}

/// What the framework should do with the request.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardOutcome {
    /// Continue to the handler with the coerced bag.
    Proceed(DataBag),
    /// Stop and send the failure response.
    Reject(FailureResponse),
}

/// Called with the errors of a failed validation; returns true to let the
/// request proceed anyway.
pub type FailureHook<Req, Res> = dyn Fn(&SchemaErrors, &mut Req, &mut Res) -> bool + Send + Sync;

/// Validates the parameters of one route.
///
/// `Req` and `Res` are the framework's request and response context types;
/// they are only handed to the failure hook.
///
/// # Example
///
/// ```rust
/// use paramguard::{AdapterConfig, GuardOutcome, ParamGuard, RequestParams, Schema};
/// use serde_json::json;
///
/// let guard: ParamGuard<(), ()> =
///     ParamGuard::new(vec![Schema::int("id")], AdapterConfig::default().with_debug(true));
///
/// let params = RequestParams {
///     query: json!({"id": "abc"}).as_object().cloned().unwrap(),
///     ..RequestParams::default()
/// };
///
/// match guard.check(params, &mut (), &mut ()) {
///     GuardOutcome::Reject(response) => {
///         assert_eq!(response.status, 400);
///         assert_eq!(response.body.errors.unwrap()[0].name, "id");
///     }
///     GuardOutcome::Proceed(_) => unreachable!(),
/// }
/// ```
pub struct ParamGuard<Req, Res> {
    fields: Arc<[Schema]>,
    config: AdapterConfig,
    on_failure: Option<Box<FailureHook<Req, Res>>>,
}

impl<Req, Res> ParamGuard<Req, Res> {
    /// Creates a guard for the given field list.
    pub fn new(fields: impl Into<Arc<[Schema]>>, config: AdapterConfig) -> Self {
        Self {
            fields: fields.into(),
            config,
            on_failure: None,
        }
    }

    /// Installs a failure hook.
    pub fn on_failure<F>(mut self, hook: F) -> Self
    where
        F: Fn(&SchemaErrors, &mut Req, &mut Res) -> bool + Send + Sync + 'static,
    {
        self.on_failure = Some(Box::new(hook));
        self
    }

    /// Returns the guarded field list.
    pub fn fields(&self) -> &[Schema] {
        &self.fields
    }

    /// Merges and validates the request parameters.
    ///
    /// The bag handed to the handler carries every coerced field, also when
    /// the hook lets a failed request through.
    pub fn check(&self, params: RequestParams, req: &mut Req, res: &mut Res) -> GuardOutcome {
        let mut bag = params.into_bag();

        let errors = match self.fields.validate(&mut bag) {
            Validation::Success(()) => return GuardOutcome::Proceed(bag),
            Validation::Failure(errors) => errors,
        };

        if let Some(hook) = &self.on_failure {
            if hook(&errors, req, res) {
                debug!(error_count = errors.len(), "failure hook let request proceed");
                return GuardOutcome::Proceed(bag);
            }
        }

        debug!(
            error_count = errors.len(),
            detailed = self.config.debug,
            "rejecting request parameters"
        );
        GuardOutcome::Reject(FailureResponse::new(errors, &self.config))
    }
}

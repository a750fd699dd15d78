#![deny(missing_docs)]

//! A static JSON responder for AWS Lambda http events.
//!
//! Every invocation, whether it comes from API Gateway (REST or HTTP API) or
//! an Application Load Balancer, is answered with
//!
//! ```text
//! 200 OK
//! Content-Type: application/json
//!
//! {"message":"Hello from Go Lambda!"}
//! ```
//!
//! wrapped in the envelope shape the originating gateway expects. When enabled,
//! the runtime-assigned request id of each invocation is written to the log.
//!
//! # Example
//!
//! ```rust,no_run
//! use hello_http::{Config, LambdaRequest, Responder};
//! use lamedh_runtime::{handler_fn, run, Context, Error};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let responder = Responder::new(Config::default());
//!     run(handler_fn(move |event: LambdaRequest, ctx: Context| responder.invoke(event, ctx))).await?;
//!     Ok(())
//! }
//! ```

use lamedh_runtime::Context;
use serde::Serialize;
use tracing::{debug, info};

pub mod config;
mod error;
pub mod logging;
pub mod request;
pub mod response;

pub use crate::{
    config::Config,
    error::Error,
    request::{LambdaRequest, RequestOrigin},
    response::LambdaResponse,
};

/// Message returned by every invocation
pub const MESSAGE: &str = "Hello from Go Lambda!";

/// The response payload
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Greeting {
    message: &'static str,
}

impl Default for Greeting {
    fn default() -> Self {
        Greeting { message: MESSAGE }
    }
}

/// Answers invocations with the [`Greeting`].
///
/// A responder holds no per-invocation state; copies of it are handed to the
/// runtime, which may drive several invocations at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct Responder {
    config: Config,
}

impl Responder {
    /// Creates a responder with the given configuration
    pub fn new(config: Config) -> Self {
        Responder { config }
    }

    /// Answers `request` with the greeting.
    ///
    /// `request_id` is the runtime's correlation id for this invocation. It is
    /// only logged, and only when the configuration asks for it. An empty id
    /// is treated as absent.
    pub fn handle(&self, request: &LambdaRequest, request_id: Option<&str>) -> Result<LambdaResponse, Error> {
        self.respond(request, request_id, &Greeting::default())
    }

    /// Answers `request` with an arbitrary json `payload`.
    ///
    /// If `payload` fails to serialize, nothing is logged and no envelope is
    /// produced.
    pub fn respond<T>(&self, request: &LambdaRequest, request_id: Option<&str>, payload: &T) -> Result<LambdaResponse, Error>
    where
        T: Serialize + ?Sized,
    {
        debug!(
            origin = ?request.request_origin(),
            method = request.method().unwrap_or("-"),
            path = request.path().unwrap_or("-"),
            "invocation received"
        );
        let response = LambdaResponse::json(request.request_origin(), payload)?;

        if self.config.log_request_id {
            if let Some(request_id) = request_id.filter(|id| !id.is_empty()) {
                info!("RequestID:  {} , Lambda triggered!", request_id);
            }
        }

        Ok(response)
    }

    /// Runtime entry point: answers `request` using the request id found in
    /// `context`.
    ///
    /// A context whose request id is empty is deliberately treated like one
    /// without an id: nothing is logged for it.
    pub async fn invoke(self, request: LambdaRequest, context: Context) -> Result<LambdaResponse, lamedh_runtime::Error> {
        Ok(self.handle(&request, Some(context.request_id.as_str()))?)
    }
}

//! ALB and API Gateway request classification
//!
//! The responder never validates the inbound event. It only works out which
//! gateway sent it, so the envelope can be shaped the way that gateway expects.
//!
use serde::Deserialize;
use serde_json::{error::Error as JsonError, Value};
use std::io::Read;

/// A Lambda http event from the ALB, API Gateway REST or HTTP API
/// perspective, reduced to what the responder uses.
///
/// Any JSON value deserializes into a `LambdaRequest`. Events matching none of
/// the known shapes are treated as API Gateway REST proxy events.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "Value")]
pub struct LambdaRequest {
    origin: RequestOrigin,
    method: Option<String>,
    path: Option<String>,
}

impl LambdaRequest {
    /// Return the `RequestOrigin` of the request, so that the appropriate
    /// response can be selected based on what the request origin expects.
    pub fn request_origin(&self) -> RequestOrigin {
        self.origin
    }

    /// HTTP method, when the event carries one
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    /// Request path, when the event carries one
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

impl Default for LambdaRequest {
    fn default() -> Self {
        Value::Null.into()
    }
}

impl From<Value> for LambdaRequest {
    fn from(event: Value) -> Self {
        let origin = RequestOrigin::of(&event);
        let (method, path) = match origin {
            RequestOrigin::ApiGatewayV2 => (&event["requestContext"]["http"]["method"], &event["rawPath"]),
            RequestOrigin::ApiGatewayV1 | RequestOrigin::Alb => (&event["httpMethod"], &event["path"]),
        };

        LambdaRequest {
            origin,
            method: method.as_str().map(String::from),
            path: path.as_str().map(String::from),
        }
    }
}

/// Represents the origin from which the lambda was requested from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOrigin {
    /// API Gateway proxy request origin
    ApiGatewayV1,
    /// API Gateway v2 request origin
    ApiGatewayV2,
    /// ALB request origin
    Alb,
}

impl RequestOrigin {
    fn of(event: &Value) -> Self {
        let context = &event["requestContext"];
        if !context["elb"].is_null() {
            RequestOrigin::Alb
        } else if event["version"] == "2.0" || !context["http"].is_null() {
            RequestOrigin::ApiGatewayV2
        } else {
            RequestOrigin::ApiGatewayV1
        }
    }
}

/// Deserializes a `LambdaRequest` from a `Read` impl providing JSON events.
///
/// # Example
///
/// ```rust,no_run
/// use hello_http::request::from_reader;
/// use std::fs::File;
/// use std::error::Error;
///
/// fn main() -> Result<(), Box<dyn Error>> {
///     let request = from_reader(
///         File::open("path/to/request.json")?
///     )?;
///     Ok(println!("{:#?}", request))
/// }
/// ```
pub fn from_reader<R>(rdr: R) -> Result<LambdaRequest, JsonError>
where
    R: Read,
{
    serde_json::from_reader(rdr)
}

/// Deserializes a `LambdaRequest` from a string of JSON text.
pub fn from_str(s: &str) -> Result<LambdaRequest, JsonError> {
    serde_json::from_str(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_apigw_rest_event() {
        let request = from_str(include_str!("../tests/data/apigw_proxy_request.json")).expect("failed to parse event");
        assert_eq!(request.request_origin(), RequestOrigin::ApiGatewayV1);
        assert_eq!(request.method(), Some("GET"));
        assert_eq!(request.path(), Some("/hello"));
    }

    #[test]
    fn classifies_apigw_v2_event() {
        let request = from_str(include_str!("../tests/data/apigw_v2_proxy_request.json")).expect("failed to parse event");
        assert_eq!(request.request_origin(), RequestOrigin::ApiGatewayV2);
        assert_eq!(request.method(), Some("POST"));
        assert_eq!(request.path(), Some("/default/hello"));
    }

    #[test]
    fn classifies_alb_event() {
        let request = from_str(include_str!("../tests/data/alb_request.json")).expect("failed to parse event");
        assert_eq!(request.request_origin(), RequestOrigin::Alb);
        assert_eq!(request.method(), Some("GET"));
        assert_eq!(request.path(), Some("/lambda"));
    }

    #[test]
    fn v2_detected_by_context_without_version() {
        let request = from_str(r#"{"requestContext":{"http":{"method":"PUT"}}}"#).expect("failed to parse event");
        assert_eq!(request.request_origin(), RequestOrigin::ApiGatewayV2);
        assert_eq!(request.method(), Some("PUT"));
        assert_eq!(request.path(), None);
    }

    #[test]
    fn empty_event_defaults_to_rest() {
        let request = from_str("{}").expect("failed to parse event");
        assert_eq!(request, LambdaRequest::default());
        assert_eq!(request.request_origin(), RequestOrigin::ApiGatewayV1);
        assert_eq!(request.method(), None);
        assert_eq!(request.path(), None);
    }

    #[test]
    fn non_object_events_are_accepted() {
        for raw in &["null", "42", r#""ping""#, "[1,2,3]"] {
            let request = from_str(raw).expect("failed to parse event");
            assert_eq!(request.request_origin(), RequestOrigin::ApiGatewayV1);
        }
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(from_str("{not json").is_err());
    }

    #[test]
    fn reads_events_from_reader() {
        let raw = include_bytes!("../tests/data/alb_request.json");
        let request = from_reader(&raw[..]).expect("failed to parse event");
        assert_eq!(request.request_origin(), RequestOrigin::Alb);
    }
}

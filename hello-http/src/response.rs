//! Response types

use aws_lambda_events::encodings::Body;
use http::StatusCode;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::{error::Error, request::RequestOrigin};

/// Header announcing the body's media type
pub const CONTENT_TYPE: &str = "Content-Type";

/// Response headers, keyed by name exactly as written
pub type Headers = BTreeMap<String, String>;

/// API Gateway REST proxy response
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayProxyResponse {
    status_code: u16,
    headers: Headers,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<Body>,
    is_base64_encoded: bool,
}

/// API Gateway HTTP API response
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayV2httpResponse {
    status_code: u16,
    headers: Headers,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<Body>,
    is_base64_encoded: bool,
    cookies: Vec<String>,
}

/// ALB target group response
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AlbTargetGroupResponse {
    status_code: u16,
    status_description: String,
    headers: Headers,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<Body>,
    is_base64_encoded: bool,
}

/// Representation of Lambda response
///
/// Serializes to the envelope shape the request origin expects. Header names
/// keep the case they were given.
#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum LambdaResponse {
    /// API Gateway HTTP API response
    ApiGatewayV2(ApiGatewayV2httpResponse),
    /// API Gateway REST proxy response
    ApiGatewayV1(ApiGatewayProxyResponse),
    /// ALB target group response
    Alb(AlbTargetGroupResponse),
}

impl LambdaResponse {
    pub(crate) fn from_parts(request_origin: RequestOrigin, status: StatusCode, headers: Headers, body: Body) -> Self {
        let (is_base64_encoded, body) = match body {
            Body::Empty => (false, None),
            b @ Body::Text(_) => (false, Some(b)),
            b @ Body::Binary(_) => (true, Some(b)),
        };
        let status_code = status.as_u16();

        match request_origin {
            RequestOrigin::ApiGatewayV2 => LambdaResponse::ApiGatewayV2(ApiGatewayV2httpResponse {
                status_code,
                headers,
                body,
                is_base64_encoded,
                cookies: Vec::new(),
            }),
            RequestOrigin::ApiGatewayV1 => LambdaResponse::ApiGatewayV1(ApiGatewayProxyResponse {
                status_code,
                headers,
                body,
                is_base64_encoded,
            }),
            RequestOrigin::Alb => LambdaResponse::Alb(AlbTargetGroupResponse {
                status_code,
                status_description: format!("{} {}", status_code, status.canonical_reason().unwrap_or_default()),
                headers,
                body,
                is_base64_encoded,
            }),
        }
    }

    /// Builds a `200 OK` json envelope around `payload`.
    pub fn json<T>(request_origin: RequestOrigin, payload: &T) -> Result<Self, Error>
    where
        T: Serialize + ?Sized,
    {
        let body = serde_json::to_string(payload)?;
        let mut headers = Headers::new();
        headers.insert(CONTENT_TYPE.to_string(), "application/json".to_string());
        Ok(Self::from_parts(request_origin, StatusCode::OK, headers, Body::Text(body)))
    }

    /// HTTP status code carried by the envelope
    pub fn status_code(&self) -> u16 {
        match self {
            LambdaResponse::ApiGatewayV2(res) => res.status_code,
            LambdaResponse::ApiGatewayV1(res) => res.status_code,
            LambdaResponse::Alb(res) => res.status_code,
        }
    }

    /// Response headers
    pub fn headers(&self) -> &Headers {
        match self {
            LambdaResponse::ApiGatewayV2(res) => &res.headers,
            LambdaResponse::ApiGatewayV1(res) => &res.headers,
            LambdaResponse::Alb(res) => &res.headers,
        }
    }

    /// Response body, if any
    pub fn body(&self) -> Option<&Body> {
        match self {
            LambdaResponse::ApiGatewayV2(res) => res.body.as_ref(),
            LambdaResponse::ApiGatewayV1(res) => res.body.as_ref(),
            LambdaResponse::Alb(res) => res.body.as_ref(),
        }
    }
}

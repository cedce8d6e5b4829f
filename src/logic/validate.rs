use std::collections::HashMap;

use axum::body::{to_bytes, Body, Bytes};
use axum::extract::{FromRequestParts, Query, RawPathParams, Request};
use axum::http::request::Parts;
use axum::http::Uri;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use itertools::Itertools;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Largest request body the validator will buffer.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// The request parts a schema can declare rules for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPart {
    Body,
    Params,
    Query,
}

impl RequestPart {
    pub fn label(&self) -> &'static str {
        match self {
            RequestPart::Body => "Body",
            RequestPart::Params => "Params",
            RequestPart::Query => "Query",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Number,
}

/// A single declarative field constraint. The label is used verbatim in
/// violation messages.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    field: &'static str,
    label: &'static str,
    field_type: FieldType,
    required: bool,
    email: bool,
}

impl FieldRule {
    pub const fn string(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            field_type: FieldType::String,
            required: false,
            email: false,
        }
    }

    pub const fn number(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            field_type: FieldType::Number,
            required: false,
            email: false,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn email(mut self) -> Self {
        self.email = true;
        self
    }

    /// Check this rule against the value of a whole request part. Returns the
    /// violation message, without the part prefix, if the rule is broken.
    fn check(&self, part_value: &Value) -> Option<String> {
        let value = match part_value.get(self.field) {
            None | Some(Value::Null) => {
                return self
                    .required
                    .then(|| format!("{} is required", self.label));
            }
            Some(value) => value,
        };

        match self.field_type {
            FieldType::String => match value.as_str() {
                None => Some(format!("{} must be a string", self.label)),
                Some("") => Some(format!("{} cannot be empty", self.label)),
                Some(text) => (self.email && !is_valid_email(text))
                    .then(|| format!("{} must be valid", self.label)),
            },
            FieldType::Number => {
                let numeric = value.is_number()
                    || value
                        .as_str()
                        .map_or(false, |text| text.parse::<f64>().is_ok());
                (!numeric).then(|| format!("{} must be a number", self.label))
            }
        }
    }
}

/// Ordered rules for one request part.
#[derive(Debug, Clone, Copy)]
pub struct PartRules {
    pub part: RequestPart,
    pub rules: &'static [FieldRule],
}

/// Per-operation validation schema: the parts to validate, in order. Absent
/// parts are not validated; a schema with no parts passes every request.
#[derive(Debug, Clone, Copy)]
pub struct RequestSchema {
    pub parts: &'static [PartRules],
}

/// Validation middleware. Buffers the body, validates every declared part,
/// and short-circuits with a single aggregated 400 on any violation. On
/// success the downstream handler sees the request unchanged.
pub async fn validate_request(
    schema: &'static RequestSchema,
    req: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = req.into_parts();

    let bytes = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(_) => {
            return ApiError::Validation("Body: request body could not be read".to_string())
                .into_response();
        }
    };

    let mut messages: Vec<String> = Vec::new();
    for part_rules in schema.parts {
        let value = match part_rules.part {
            RequestPart::Body => parse_body(&bytes),
            RequestPart::Params => path_params_value(&mut parts).await,
            RequestPart::Query => query_value(&parts.uri),
        };
        messages.extend(validate_part(part_rules.part, part_rules.rules, &value));
    }

    if !messages.is_empty() {
        return ApiError::Validation(messages.iter().join(", ")).into_response();
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

/// Validate one request part, prefixing each violation with the part label.
pub fn validate_part(part: RequestPart, rules: &[FieldRule], value: &Value) -> Vec<String> {
    rules
        .iter()
        .filter_map(|rule| rule.check(value))
        .map(|message| format!("{}: {}", part.label(), message))
        .collect()
}

/// An absent or unparseable body is treated as an empty object so that
/// required-field rules fire.
fn parse_body(bytes: &Bytes) -> Value {
    if bytes.is_empty() {
        return Value::Object(Map::new());
    }
    serde_json::from_slice(bytes).unwrap_or_else(|_| Value::Object(Map::new()))
}

async fn path_params_value(parts: &mut Parts) -> Value {
    match RawPathParams::from_request_parts(parts, &()).await {
        Ok(params) => Value::Object(
            params
                .iter()
                .map(|(name, value)| (name.to_string(), Value::String(value.to_string())))
                .collect(),
        ),
        Err(_) => Value::Object(Map::new()),
    }
}

fn query_value(uri: &Uri) -> Value {
    match Query::<HashMap<String, String>>::try_from_uri(uri) {
        Ok(Query(map)) => Value::Object(
            map.into_iter()
                .map(|(name, value)| (name, Value::String(value)))
                .collect(),
        ),
        Err(_) => Value::Object(Map::new()),
    }
}

/// Structural email check: one `@`, non-empty local part, dotted domain.
fn is_valid_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

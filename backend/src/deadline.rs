//! Request scoped query deadlines
//!
//! Handlers accept an optional `timeout` query parameter written as a Go
//! style duration (`300ms`, `1.5s`, `2h45m`). When it parses, every query
//! the handler issues is bounded by a single deadline that starts when the
//! handler builds its service. A zero or negative timeout has already
//! expired, so the first query fails without running. When the parameter is
//! absent or malformed the queries run unbounded and are only cancelled if
//! the client goes away, which drops the handler future and the query with
//! it.

use std::convert::Infallible;
use std::future::Future;
use std::time::Duration;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use tokio::time::Instant;
use utoipa::IntoParams;

use crate::error::{AppError, AppResult};

/// Query parameters accepted by every data endpoint
///
/// Extraction never rejects a request. A repeated `timeout` keeps the first
/// value and any other query string problem leaves the request unbounded.
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TimeoutParams {
    /// Cancel the request after this duration (e.g. `500ms`, `2s`, `1m30s`)
    pub timeout: Option<String>,
}

impl TimeoutParams {
    pub fn deadline(&self) -> QueryDeadline {
        QueryDeadline::from_param(self.timeout.as_deref())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for TimeoutParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let timeout = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map(|Query(pairs)| pairs)
            .unwrap_or_default()
            .into_iter()
            .find(|(key, _)| key == "timeout")
            .map(|(_, value)| value);

        Ok(Self { timeout })
    }
}

/// Deadline shared by all queries of one request
#[derive(Debug, Clone, Copy)]
pub struct QueryDeadline {
    limit: Option<(Duration, Instant)>,
}

impl QueryDeadline {
    pub fn unbounded() -> Self {
        Self { limit: None }
    }

    pub fn after(timeout: Duration) -> Self {
        let limit = Instant::now()
            .checked_add(timeout)
            .map(|at| (timeout, at));
        Self { limit }
    }

    /// Build a deadline from the raw `timeout` parameter
    pub fn from_param(param: Option<&str>) -> Self {
        match param.and_then(parse_duration) {
            Some(timeout) => Self::after(timeout),
            None => Self::unbounded(),
        }
    }

    /// The requested timeout, if any
    pub fn timeout(&self) -> Option<Duration> {
        self.limit.map(|(timeout, _)| timeout)
    }

    /// Run a query, failing with [`AppError::DeadlineExceeded`] once the
    /// deadline passes. The query future is dropped on expiry and is never
    /// polled if the deadline has already passed.
    pub async fn run<T, F>(&self, query: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        match self.limit {
            Some((timeout, at)) if Instant::now() >= at => Err(AppError::DeadlineExceeded(timeout)),
            Some((timeout, at)) => tokio::time::timeout_at(at, query)
                .await
                .map_err(|_| AppError::DeadlineExceeded(timeout))?,
            None => query.await,
        }
    }
}

const NANOS_PER_UNIT: &[(&str, f64)] = &[
    ("ns", 1.0),
    ("us", 1e3),
    ("\u{b5}s", 1e3),
    ("\u{3bc}s", 1e3),
    ("ms", 1e6),
    ("s", 1e9),
    ("m", 60e9),
    ("h", 3600e9),
];

/// Parse a Go style duration string such as `1h15m30.5s`.
///
/// Strings without units (other than `0`) are rejected. A negative duration
/// parses as [`Duration::ZERO`], a timeout that has already elapsed.
pub fn parse_duration(input: &str) -> Option<Duration> {
    let s = input.trim();
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    if s == "0" {
        return Some(Duration::ZERO);
    }
    if s.is_empty() {
        return None;
    }

    let mut rest = s;
    let mut total_nanos = 0f64;

    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(number_len);
        if number.is_empty() || number == "." || number.matches('.').count() > 1 {
            return None;
        }
        let value: f64 = number.parse().ok()?;

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_len);
        let scale = NANOS_PER_UNIT
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, scale)| *scale)?;

        total_nanos += value * scale;
        rest = tail;
    }

    if !total_nanos.is_finite() || total_nanos > u64::MAX as f64 {
        return None;
    }

    if negative {
        return Some(Duration::ZERO);
    }

    Some(Duration::from_nanos(total_nanos.round() as u64))
}

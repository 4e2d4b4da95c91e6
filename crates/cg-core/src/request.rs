//! Request option building
//!
//! Every endpoint call is reduced to a [`RequestOptions`] value before any
//! network activity happens. Building options is pure and never fails; the
//! helpers at the bottom of this module are the shared validation rules the
//! endpoint builders apply first.

use crate::error::{Error, Result};
use crate::types::{HttpMethod, IdList};
use crate::{API_PATH_PREFIX, DEFAULT_VS_CURRENCY, HOST, PORT};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Ordered query parameters.
///
/// Pairs are encoded in insertion order. Absent optional values are simply
/// never pushed, so the encoded string only carries what the caller set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
  pairs: Vec<(String, String)>,
}

impl QueryParams {
  pub fn new() -> Self {
    Self::default()
  }

  /// Append a pair
  pub fn push(&mut self, key: &str, value: impl ToString) -> &mut Self {
    self.pairs.push((key.to_string(), value.to_string()));
    self
  }

  /// Append a pair only when the value is present
  pub fn push_opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
    if let Some(value) = value {
      self.push(key, value);
    }
    self
  }

  /// Append an id list, comma-joined, when present and non-empty
  pub fn push_ids(&mut self, key: &str, ids: Option<&IdList>) -> &mut Self {
    if let Some(ids) = ids.filter(|ids| !ids.is_empty()) {
      self.push(key, ids.joined());
    }
    self
  }

  pub fn is_empty(&self) -> bool {
    self.pairs.is_empty()
  }

  pub fn len(&self) -> usize {
    self.pairs.len()
  }

  /// Look up the first value stored under `key`
  pub fn get(&self, key: &str) -> Option<&str> {
    self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }

  /// `key=value` pairs joined by `&`, form-urlencoded
  pub fn encode(&self) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in &self.pairs {
      serializer.append_pair(key, value);
    }
    serializer.finish()
  }
}

impl<K: ToString, V: ToString> FromIterator<(K, V)> for QueryParams {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    QueryParams {
      pairs: iter.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
    }
  }
}

/// Everything needed to issue one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestOptions {
  /// Versioned path plus encoded query string
  pub path: String,
  /// Always `GET`
  pub method: String,
  pub host: String,
  pub port: u16,
}

impl RequestOptions {
  /// Build options for `path` (relative to the API version prefix)
  ///
  /// # Examples
  ///
  /// ```
  /// use cg_core::{HttpMethod, QueryParams, RequestOptions};
  ///
  /// let mut params = QueryParams::new();
  /// params.push("vs_currency", "usd");
  /// let opts = RequestOptions::build(HttpMethod::Get, "/coins/markets", Some(&params));
  /// assert_eq!(opts.path, "/api/v3/coins/markets?vs_currency=usd");
  /// assert_eq!(opts.port, 443);
  /// ```
  pub fn build(method: HttpMethod, path: &str, params: Option<&QueryParams>) -> Self {
    let mut full_path = format!("{}{}", API_PATH_PREFIX, path);

    if let Some(params) = params.filter(|p| !p.is_empty()) {
      full_path.push('?');
      full_path.push_str(&params.encode());
    }

    RequestOptions {
      path: full_path,
      method: method.as_str().to_uppercase(),
      host: HOST.to_string(),
      port: PORT,
    }
  }

  /// Shorthand for a GET without parameters
  pub fn get(path: &str) -> Self {
    Self::build(HttpMethod::Get, path, None)
  }

  /// Shorthand for a GET with parameters
  pub fn get_with(path: &str, params: &QueryParams) -> Self {
    Self::build(HttpMethod::Get, path, Some(params))
  }

  /// Absolute URL on the production host
  pub fn url(&self) -> String {
    format!("https://{}{}", self.host, self.path)
  }

  /// The path without the query string
  pub fn path_only(&self) -> &str {
    self.path.split_once('?').map_or(self.path.as_str(), |(p, _)| p)
  }

  /// The encoded query string, if any
  pub fn query(&self) -> Option<&str> {
    self.path.split_once('?').map(|(_, q)| q)
  }
}

/// Percent-encoded spellings that a URL parser would decode into a separator
/// or a dot segment.
const ENCODED_DELIMITERS: [(&str, &str); 5] =
  [("%2e", "."), ("%2f", "/"), ("%5c", "\\"), ("%3f", "?"), ("%23", "#")];

/// A required path segment must be a non-empty string.
///
/// Returns the trimmed value. The value is placed in the path as given;
/// identifiers on this API are plain slugs or hex addresses. Anything that
/// would let the URL resolve to a different endpoint is rejected: path and
/// query delimiters, and the dot segments `.` and `..` in plain or
/// percent-encoded form.
pub fn require_segment<'a>(name: &str, value: &'a str) -> Result<&'a str> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return Err(Error::InvalidParameter(format!("`{}` must be a non-empty string", name)));
  }

  let mut decoded = trimmed.to_ascii_lowercase();
  for (encoded, plain) in ENCODED_DELIMITERS {
    decoded = decoded.replace(encoded, plain);
  }

  if decoded.contains(['/', '\\', '?', '#']) {
    return Err(Error::InvalidParameter(format!(
      "`{}` must not contain '/', '\\', '?' or '#': {}",
      name, trimmed
    )));
  }
  if decoded == "." || decoded == ".." {
    return Err(Error::InvalidParameter(format!("`{}` must not be a dot segment: {}", name, trimmed)));
  }
  Ok(trimmed)
}

/// Currency fallback: absent or blank becomes `usd`
pub fn currency_or_default(value: Option<&str>) -> String {
  match value.map(str::trim) {
    Some(v) if !v.is_empty() => v.to_string(),
    _ => DEFAULT_VS_CURRENCY.to_string(),
  }
}

/// A required field of a parameter record
pub fn require_field<'a>(name: &str, value: Option<&'a str>) -> Result<&'a str> {
  match value.map(str::trim) {
    Some(v) if !v.is_empty() => Ok(v),
    _ => Err(missing(name)),
  }
}

/// A required non-string field of a parameter record
pub fn require_value<T>(name: &str, value: Option<T>) -> Result<T> {
  value.ok_or_else(|| missing(name))
}

/// A required id-list field of a parameter record
pub fn require_ids(name: &str, value: Option<&IdList>) -> Result<String> {
  match value {
    Some(ids) if !ids.is_empty() => Ok(ids.joined()),
    _ => Err(missing(name)),
  }
}

fn missing(name: &str) -> Error {
  Error::MissingParameter(format!("`{}` is required", name))
}

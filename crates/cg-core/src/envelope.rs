/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Uniform result envelope for completed HTTP round-trips

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Length of the body excerpt carried in error messages
const EXCERPT_LEN: usize = 200;

/// Result of one completed request.
///
/// Returned for logical success and for HTTP-level failure alike; callers
/// inspect `success`/`code` to tell them apart. Transport and parse failures
/// never produce an envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
  /// `true` iff `code` is in `[200, 300)`
  pub success: bool,
  /// HTTP status message
  pub message: String,
  /// HTTP status code
  pub code: u16,
  /// Parsed JSON body, passed through untouched
  pub data: Value,
}

impl Envelope {
  /// Normalize a raw response into an envelope.
  ///
  /// An HTML body means the gateway served an error page rather than the API
  /// answering, which is reported as [`Error::InvalidRequest`]. Any other body
  /// must be JSON.
  pub fn from_response(code: u16, message: &str, body: &str) -> Result<Self> {
    if looks_like_html(body) {
      return Err(Error::InvalidRequest(format!(
        "gateway returned an HTML page (status {} {}), check the endpoint and parameters: {}",
        code,
        message,
        excerpt(body)
      )));
    }

    let data: Value = serde_json::from_str(body).map_err(|e| {
      Error::Parse(format!("Failed to parse response: {}. Response: {}", e, excerpt(body)))
    })?;

    Ok(Envelope { success: (200..300).contains(&code), message: message.to_string(), code, data })
  }

  /// Decode `data` into a caller-chosen type
  pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
    Ok(T::deserialize(&self.data)?)
  }

  /// Take `data` and decode it
  pub fn into_data<T: DeserializeOwned>(self) -> Result<T> {
    Ok(serde_json::from_value(self.data)?)
  }
}

fn looks_like_html(body: &str) -> bool {
  let head: String = body.trim_start().chars().take(15).collect::<String>().to_ascii_lowercase();
  head.starts_with("<!doctype html") || head.starts_with("<html")
}

fn excerpt(body: &str) -> String {
  body.chars().take(EXCERPT_LEN).collect()
}

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

//! Lookup tables of values the CoinGecko API accepts as parameters

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Declares a parameter enum together with its wire strings.
///
/// Generates `as_str`, an `ALL` table in declaration order, `Display` and
/// `FromStr` (exact match on the wire string).
macro_rules! wire_enum {
  (
    $(#[$meta:meta])*
    $name:ident, $label:literal {
      $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
    }
  ) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum $name {
      $( $(#[$vmeta])* #[serde(rename = $wire)] $variant ),+
    }

    impl $name {
      /// Every accepted value, in documentation order
      pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

      /// The value as sent on the wire
      pub fn as_str(&self) -> &'static str {
        match self {
          $( $name::$variant => $wire ),+
        }
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
      }
    }

    impl FromStr for $name {
      type Err = Error;

      fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
          $( $wire => Ok($name::$variant), )+
          other => Err(Error::InvalidParameter(format!("unknown {} '{}'", $label, other))),
        }
      }
    }
  };
}

wire_enum! {
  /// HTTP methods the client will issue
  HttpMethod, "HTTP method" {
    Get => "GET",
  }
}

wire_enum! {
  /// Sort order for coin, exchange and ticker listings
  Order, "order" {
    GeckoAsc => "gecko_asc",
    GeckoDesc => "gecko_desc",
    MarketCapAsc => "market_cap_asc",
    MarketCapDesc => "market_cap_desc",
    VolumeAsc => "volume_asc",
    VolumeDesc => "volume_desc",
    CoinNameAsc => "coin_name_asc",
    CoinNameDesc => "coin_name_desc",
    PriceAsc => "price_asc",
    PriceDesc => "price_desc",
    /// 24h price change, ascending
    H24ChangeAsc => "h24_change_asc",
    /// 24h price change, descending
    H24ChangeDesc => "h24_change_desc",
    TrustScoreDesc => "trust_score_desc",
    NameDesc => "name_desc",
    NameAsc => "name_asc",
    IdAsc => "id_asc",
    IdDesc => "id_desc",
  }
}

wire_enum! {
  /// Category filter for project status updates
  StatusUpdateCategory, "status update category" {
    General => "general",
    Milestone => "milestone",
    Partnership => "partnership",
    ExchangeListing => "exchange_listing",
    SoftwareRelease => "software_release",
    FundMovement => "fund_movement",
    NewListings => "new_listings",
    Event => "event",
  }
}

wire_enum! {
  /// Kind of project a status update belongs to
  StatusUpdateProjectType, "status update project type" {
    Coin => "coin",
    Market => "market",
  }
}

wire_enum! {
  /// Event type filter for the events feed
  EventType, "event type" {
    Event => "Event",
    Conference => "Conference",
    Meetup => "Meetup",
  }
}

/// Length of a chart window: a number of days or the full history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Days {
  /// Fixed number of days back from now
  Count(u32),
  /// All available data
  Max,
}

impl Default for Days {
  fn default() -> Self {
    Days::Count(crate::DEFAULT_DAYS)
  }
}

impl From<u32> for Days {
  fn from(value: u32) -> Self {
    Days::Count(value)
  }
}

impl fmt::Display for Days {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Days::Count(n) => write!(f, "{}", n),
      Days::Max => f.write_str("max"),
    }
  }
}

impl FromStr for Days {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s == "max" {
      return Ok(Days::Max);
    }
    s.parse::<u32>()
      .map(Days::Count)
      .map_err(|_| Error::InvalidParameter(format!("days must be a number or 'max', got '{}'", s)))
  }
}

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

static PERCENT_FEE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<value>[0-9][0-9,]*(?:\.[0-9]+)?)\s*%$").expect("static regex")
});

static AMOUNT_FEE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:₩\s*)?(?P<value>[0-9][0-9,]*(?:\.[0-9]+)?)\s*(?:원)?$").expect("static regex")
});

/// Errors raised when a free-text channel fee cannot be understood.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChannelFeeError {
    #[error("channel fee is empty")]
    Empty,

    #[error("unrecognised channel fee '{0}' (expected e.g. \"8%\" or \"1000원\")")]
    Unrecognized(String),

    #[error("commission percentage must be between 0 and 100, got {0}")]
    PercentOutOfRange(Decimal),
}

/// A fee typed in by the user for a channel that is not in the built-in list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ChannelFee {
    /// Percentage of the selling price taken per unit sold.
    Percent(Decimal),
    /// Flat amount in won taken per unit sold.
    PerUnit(Decimal),
}

impl ChannelFee {
    /// Parses fee text such as `"8%"`, `"8.5 %"`, `"1000원"`, `"₩1,000"` or `"1,000"`.
    ///
    /// A trailing `%` makes it a percentage of price; anything else that is a
    /// plain number (optionally with `₩`, `원` and thousands separators) is a
    /// flat per-unit amount.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use econ_core::ChannelFee;
    ///
    /// assert_eq!(ChannelFee::parse("8%"), Ok(ChannelFee::Percent(dec!(8))));
    /// assert_eq!(ChannelFee::parse("1,000원"), Ok(ChannelFee::PerUnit(dec!(1000))));
    /// assert!(ChannelFee::parse("eight").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ChannelFeeError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ChannelFeeError::Empty);
        }

        if let Some(caps) = PERCENT_FEE.captures(trimmed) {
            let percent = parse_grouped(&caps["value"])
                .ok_or_else(|| ChannelFeeError::Unrecognized(s.to_string()))?;
            if percent > dec!(100) {
                return Err(ChannelFeeError::PercentOutOfRange(percent));
            }
            return Ok(Self::Percent(percent));
        }

        if let Some(caps) = AMOUNT_FEE.captures(trimmed) {
            let amount = parse_grouped(&caps["value"])
                .ok_or_else(|| ChannelFeeError::Unrecognized(s.to_string()))?;
            return Ok(Self::PerUnit(amount));
        }

        Err(ChannelFeeError::Unrecognized(s.to_string()))
    }
}

fn parse_grouped(value: &str) -> Option<Decimal> {
    value.replace(',', "").parse().ok()
}

impl fmt::Display for ChannelFee {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Percent(percent) => write!(f, "{}%", percent.normalize()),
            Self::PerUnit(amount) => write!(f, "{}원", amount.normalize()),
        }
    }
}

impl TryFrom<String> for ChannelFee {
    type Error = ChannelFeeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ChannelFee> for String {
    fn from(fee: ChannelFee) -> Self {
        fee.to_string()
    }
}

/// Online marketplaces with a known commission schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    SmartStore,
    Coupang,
    #[serde(rename = "11st")]
    ElevenStreet,
    Gmarket,
}

impl Platform {
    pub fn all() -> &'static [Platform] {
        &[
            Platform::SmartStore,
            Platform::Coupang,
            Platform::ElevenStreet,
            Platform::Gmarket,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SmartStore => "smartstore",
            Self::Coupang => "coupang",
            Self::ElevenStreet => "11st",
            Self::Gmarket => "gmarket",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SmartStore => "스마트스토어",
            Self::Coupang => "쿠팡",
            Self::ElevenStreet => "11번가",
            Self::Gmarket => "지마켓",
        }
    }

    /// Lowest and highest commission percentage charged by the platform.
    /// Category-dependent platforms have a range; the others a single rate.
    pub fn commission_range(&self) -> (Decimal, Decimal) {
        match self {
            Self::SmartStore => (dec!(4), dec!(4)),
            Self::Coupang => (dec!(11), dec!(11)),
            Self::ElevenStreet => (dec!(1), dec!(20)),
            Self::Gmarket => (dec!(4), dec!(15)),
        }
    }

    /// Commission percentage to charge, honouring a user-chosen rate when it
    /// falls inside the platform's range and using the upper bound otherwise.
    pub fn commission_percent(
        &self,
        requested: Option<Decimal>,
    ) -> Decimal {
        let (min, max) = self.commission_range();
        match requested {
            Some(rate) if rate >= min && rate <= max => rate,
            Some(rate) => {
                warn!(
                    platform = self.as_str(),
                    requested = %rate,
                    min = %min,
                    max = %max,
                    "Requested commission outside platform range; using upper bound"
                );
                max
            }
            None => max,
        }
    }
}

/// Regions for an offline store, each with a typical monthly rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Seoul,
    Gyeonggi,
    Chungcheong,
    Jeolla,
    Gyeongsang,
    Gangwon,
}

impl Region {
    pub fn all() -> &'static [Region] {
        &[
            Region::Seoul,
            Region::Gyeonggi,
            Region::Chungcheong,
            Region::Jeolla,
            Region::Gyeongsang,
            Region::Gangwon,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Seoul => "seoul",
            Self::Gyeonggi => "gyeonggi",
            Self::Chungcheong => "chungcheong",
            Self::Jeolla => "jeolla",
            Self::Gyeongsang => "gyeongsang",
            Self::Gangwon => "gangwon",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|r| r.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Seoul => "서울권",
            Self::Gyeonggi => "경기/인천권",
            Self::Chungcheong => "충청권",
            Self::Jeolla => "전라권",
            Self::Gyeongsang => "경상권",
            Self::Gangwon => "강원/제주권",
        }
    }

    /// Typical monthly store rent in won.
    pub fn monthly_rent(&self) -> Decimal {
        match self {
            Self::Seoul => dec!(3000000),
            Self::Gyeonggi => dec!(2000000),
            Self::Chungcheong => dec!(1500000),
            Self::Jeolla => dec!(1400000),
            Self::Gyeongsang => dec!(1600000),
            Self::Gangwon => dec!(1200000),
        }
    }
}

/// Where the product is sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SalesChannel {
    Online {
        platform: Platform,
        #[serde(default)]
        commission_percent: Option<Decimal>,
    },
    Offline {
        region: Region,
    },
    Custom {
        fee: ChannelFee,
    },
}

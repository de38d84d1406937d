use derive_more::{Constructor, Deref, From, Into};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - Price in the selected currency
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - Traded volume in the selected currency
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct Volume(f64);

impl Volume {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - Unix time in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn from_millis(value: u64) -> Self {
        Self(value)
    }
}

/// Coins offered by the dashboard, serialized as CoinGecko ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Coin {
    #[default]
    Bitcoin,
    Ethereum,
    Dogecoin,
}

impl Coin {
    pub fn id(&self) -> &str {
        self.as_ref()
    }

    /// Button label, e.g. `Bitcoin`
    pub fn display_name(&self) -> &'static str {
        match self {
            Coin::Bitcoin => "Bitcoin",
            Coin::Ethereum => "Ethereum",
            Coin::Dogecoin => "Dogecoin",
        }
    }
}

/// Quote currencies, serialized as CoinGecko `vs_currency` codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Usd,
    Inr,
    Eur,
}

impl Currency {
    pub fn code(&self) -> &str {
        self.as_ref()
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Inr => "₹",
            Currency::Eur => "€",
        }
    }

    /// Button label, e.g. `USD`
    pub fn label(&self) -> String {
        self.code().to_uppercase()
    }
}

/// History window in days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
pub enum DayRange {
    #[strum(serialize = "7")]
    #[serde(rename = "7")]
    Week,
    #[default]
    #[strum(serialize = "30")]
    #[serde(rename = "30")]
    Month,
    #[strum(serialize = "90")]
    #[serde(rename = "90")]
    Quarter,
}

impl DayRange {
    /// Value of the `days` query parameter
    pub fn days(&self) -> &str {
        self.as_ref()
    }

    /// Button label, e.g. `30D`
    pub fn label(&self) -> String {
        format!("{}D", self.days())
    }
}

/// The user-chosen coin, currency and range triple driving the fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Constructor, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    pub coin: Coin,
    pub currency: Currency,
    pub range: DayRange,
}

impl Selection {
    pub fn request_key(&self) -> RequestKey {
        RequestKey { coin: self.coin, currency: self.currency, range: self.range }
    }
}

/// Deterministic identifier of one market-chart request.
///
/// Displays as the CoinGecko path and query relative to the API base url.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestKey {
    pub coin: Coin,
    pub currency: Currency,
    pub range: DayRange,
}

impl fmt::Display for RequestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "coins/{}/market_chart?vs_currency={}&days={}&interval=daily",
            self.coin.id(),
            self.currency.code(),
            self.range.days()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn enums_round_trip_through_api_strings() {
        assert_eq!(Coin::from_str("dogecoin").unwrap(), Coin::Dogecoin);
        assert_eq!(Currency::Inr.code(), "inr");
        assert_eq!(DayRange::from_str("90").unwrap(), DayRange::Quarter);
        assert!(DayRange::from_str("365").is_err());
    }

    #[test]
    fn labels_match_buttons() {
        assert_eq!(Coin::Ethereum.display_name(), "Ethereum");
        assert_eq!(Currency::Eur.label(), "EUR");
        assert_eq!(DayRange::Week.label(), "7D");
    }

    #[test]
    fn default_selection_is_bitcoin_usd_30() {
        let key = Selection::default().request_key();
        assert_eq!(
            key.to_string(),
            "coins/bitcoin/market_chart?vs_currency=usd&days=30&interval=daily"
        );
    }
}

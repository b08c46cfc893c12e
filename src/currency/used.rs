use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Currency;
use crate::{
    errors::{Result, SwitcherError},
    storage::KeyValueStore,
};

/// Storage key holding the used-currency list.
pub const USED_CURRENCIES_KEY: &str = "usedCurrencies";

pub const DEFAULT_USED_CURRENCIES: &[Currency] = &[Currency::Eur, Currency::Usd, Currency::Rub];

/// Currencies the user keeps visible, in the order they were enabled.
///
/// Serialized as a plain list of codes. Deserializing goes through
/// [`UsedCurrencies::new`], so repeated codes never survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Currency>", into = "Vec<Currency>")]
pub struct UsedCurrencies(Vec<Currency>);

impl UsedCurrencies {
    /// Builds a list, dropping repeated entries after their first occurrence.
    pub fn new(currencies: impl IntoIterator<Item = Currency>) -> Self {
        let mut list = Vec::new();
        for currency in currencies {
            if !list.contains(&currency) {
                list.push(currency);
            }
        }
        Self(list)
    }

    /// Reads the persisted list, or `defaults` when nothing was stored yet.
    pub fn load(store: &dyn KeyValueStore, defaults: &[Currency]) -> Result<Self> {
        let Some(value) = store.get(USED_CURRENCIES_KEY)? else {
            tracing::debug!("no stored used currencies, applying defaults");
            return Ok(Self::new(defaults.iter().copied()));
        };
        Self::from_value(value)
    }

    fn from_value(value: Value) -> Result<Self> {
        let Value::Array(items) = value else {
            return Err(SwitcherError::Storage(format!(
                "`{}` must be a list of currency codes",
                USED_CURRENCIES_KEY
            )));
        };
        let mut currencies = Vec::with_capacity(items.len());
        for item in &items {
            let code = item.as_str().ok_or_else(|| {
                SwitcherError::Storage(format!("`{}` holds a non-string entry", USED_CURRENCIES_KEY))
            })?;
            currencies.push(code.parse::<Currency>()?);
        }
        let used = Self::new(currencies);
        if used.len() != items.len() {
            tracing::warn!(
                stored = items.len(),
                kept = used.len(),
                "dropped duplicate used currencies"
            );
        }
        Ok(used)
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        store.set(USED_CURRENCIES_KEY, serde_json::to_value(self)?)
    }

    /// Removes `currency` if present, appends it otherwise, then persists.
    ///
    /// The list is left untouched when the store rejects the write.
    pub fn toggle(&mut self, currency: Currency, store: &mut dyn KeyValueStore) -> Result<()> {
        let mut next = self.0.clone();
        let enabled = if let Some(pos) = next.iter().position(|c| *c == currency) {
            next.remove(pos);
            false
        } else {
            next.push(currency);
            true
        };
        let next = Self(next);
        next.save(store)?;
        *self = next;
        tracing::info!(%currency, enabled, used = self.0.len(), "toggled used currency");
        Ok(())
    }

    pub fn contains(&self, currency: Currency) -> bool {
        self.0.contains(&currency)
    }

    pub fn iter(&self) -> impl Iterator<Item = Currency> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Currency] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for UsedCurrencies {
    fn default() -> Self {
        Self::new(DEFAULT_USED_CURRENCIES.iter().copied())
    }
}

impl From<Vec<Currency>> for UsedCurrencies {
    fn from(currencies: Vec<Currency>) -> Self {
        Self::new(currencies)
    }
}

impl From<UsedCurrencies> for Vec<Currency> {
    fn from(used: UsedCurrencies) -> Self {
        used.0
    }
}

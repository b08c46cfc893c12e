mod common;

use common::{approx_eq, open_store, setup_test_env};
use switcher_core::currency::{
    calculate_by_currency, convert_to_currency, AmountWithCurrency, Currency, UsedCurrencies,
    BASE_CURRENCY,
};

#[test]
fn usd_to_every_currency_scenario() {
    let base = convert_to_currency(AmountWithCurrency::new(10.0, Currency::Usd));
    assert!(approx_eq(base, 10.0 / 1.086));

    let results = calculate_by_currency(Currency::Usd, 10.0);
    assert_eq!(results[Currency::Usd], 10.0);
    assert_eq!(results[Currency::Eur], 9.21);
    assert_eq!(results[Currency::Rub], 923.02);
    assert_eq!(results[Currency::Gbp], 7.92);
}

#[test]
fn every_table_is_total_and_echoes_source() {
    for &currency in Currency::ALL {
        let results = calculate_by_currency(currency, 250.75);
        assert_eq!(results.len(), Currency::ALL.len());
        assert_eq!(results[currency], 250.75);
        let order: Vec<Currency> = results.iter().map(|(code, _)| code).collect();
        assert_eq!(order, Currency::ALL);
    }
}

#[test]
fn converted_entries_have_two_decimals() {
    let results = calculate_by_currency(Currency::Kzt, 12_345.0);
    for (currency, amount) in results.iter() {
        if currency == Currency::Kzt {
            continue;
        }
        assert!(approx_eq(amount * 100.0, (amount * 100.0).round()), "{currency}");
    }
}

#[test]
fn same_currency_round_trip_is_identity_within_tolerance() {
    for &currency in Currency::ALL {
        for amount in [0.01, 1.0, 77.7, 123_456.789] {
            let converted =
                convert_to_currency(AmountWithCurrency::new(amount, currency).to(currency));
            assert!(approx_eq(converted, amount), "{currency} {amount}");
        }
    }
}

#[test]
fn two_hop_conversion_matches_product_of_rates() {
    let thb = convert_to_currency(AmountWithCurrency::new(100.0, Currency::Gel).to(Currency::Thb));
    assert!(approx_eq(thb, 100.0 / 2.94 * 39.40));

    let back = convert_to_currency(AmountWithCurrency::new(thb, Currency::Thb).to(Currency::Gel));
    assert!(approx_eq(back, 100.0));

    let eur = convert_to_currency(AmountWithCurrency::new(thb, Currency::Thb).to(BASE_CURRENCY));
    assert!(approx_eq(eur, 100.0 / 2.94));
}

#[test]
fn used_currencies_survive_reopening_the_store() {
    let (_, config) = setup_test_env();

    let mut store = open_store(&config);
    let mut used = UsedCurrencies::load(&store, &config.default_used_currencies).unwrap();
    assert_eq!(used.as_slice(), &[Currency::Eur, Currency::Usd, Currency::Rub]);

    used.toggle(Currency::Usd, &mut store).unwrap();
    used.toggle(Currency::Aed, &mut store).unwrap();

    let reopened = open_store(&config);
    let reloaded = UsedCurrencies::load(&reopened, &config.default_used_currencies).unwrap();
    assert_eq!(reloaded.as_slice(), &[Currency::Eur, Currency::Rub, Currency::Aed]);
}

#[test]
fn double_toggle_restores_original_list() {
    let (_, config) = setup_test_env();
    let mut store = open_store(&config);
    let mut used = UsedCurrencies::load(&store, &config.default_used_currencies).unwrap();
    let original = used.clone();

    for &currency in Currency::ALL.iter().filter(|c| !original.contains(**c)) {
        used.toggle(currency, &mut store).unwrap();
        used.toggle(currency, &mut store).unwrap();
        assert_eq!(used, original);
    }
}

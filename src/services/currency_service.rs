//! Static currency reference sheet. Base currency is EUR; rates and deposit
//! bounds are fixed at process start, so editing them means editing this table.

use crate::models::CurrencyMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrencyInfo {
    pub rate: f64,
    pub min_deposit: f64,
    pub max_deposit: f64,
}

const fn info(rate: f64, min_deposit: f64, max_deposit: f64) -> CurrencyInfo {
    CurrencyInfo {
        rate,
        min_deposit,
        max_deposit,
    }
}

pub const CURRENCY_REFERENCE: &[(&str, CurrencyInfo)] = &[
    ("EUR", info(1.0, 25.0, 300.0)),
    ("USD", info(1.0, 25.0, 300.0)),
    ("GBP", info(1.0, 25.0, 300.0)),
    ("CAD", info(1.0, 25.0, 300.0)),
    ("AUD", info(1.0, 25.0, 300.0)),
    ("NZD", info(1.0, 25.0, 300.0)),
    ("BRL", info(2.0, 50.0, 600.0)),
    ("NOK", info(10.0, 250.0, 3000.0)),
    ("PEN", info(1.0, 25.0, 300.0)),
    ("CLP", info(800.0, 20000.0, 240000.0)),
    ("MXN", info(6.0, 150.0, 1800.0)),
    ("CHF", info(1.0, 25.0, 300.0)),
    ("ZAR", info(10.0, 250.0, 300.0)),
    ("PLN", info(4.0, 100.0, 1200.0)),
    ("AZN", info(1.0, 25.0, 300.0)),
    ("TRY", info(10.0, 250.0, 3000.0)),
    ("JPY", info(150.0, 3750.0, 45000.0)),
    ("KZT", info(150.0, 3750.0, 45000.0)),
    ("RUB", info(50.0, 1250.0, 15000.0)),
    ("UZS", info(10000.0, 250000.0, 3000000.0)),
];

pub const LANGUAGES: &[&str] = &[
    "en", "de", "fi", "no", "fr", "pt", "es", "it", "pl", "ru", "tr", "az",
];

/// Currency variants per language, used to key translated text that differs
/// by currency within the same language.
pub const LANGUAGE_CURRENCY_VARIANTS: &[(&str, &[&str])] = &[
    (
        "en",
        &[
            "USD_en", "GBP_en", "AUD_en", "NZD_en", "CAD_en", "UZS_en", "NGN_en",
        ],
    ),
    ("no", &["NOK_no"]),
    ("pt", &["BRL_pt"]),
    ("pl", &["EUR_pl", "PLN_pl"]),
    ("es", &["CLP_es"]),
    ("ru", &["AZN_ru", "RUB_ru", "KZT_ru", "UZS_ru"]),
    ("az", &["AZN_az"]),
    ("tr", &["TRY_tr", "AZN_tr"]),
    ("fr", &["CAD_fr"]),
];

pub fn lookup_currency(currency: &str) -> Option<&'static CurrencyInfo> {
    CURRENCY_REFERENCE
        .iter()
        .find(|(code, _)| *code == currency)
        .map(|(_, info)| info)
}

/// Convert an EUR amount into the given currency, rounded to the nearest
/// whole unit. Unknown currencies pass the amount through unchanged.
pub fn convert_eur_to_currency(eur_amount: f64, currency: &str) -> f64 {
    match lookup_currency(currency) {
        Some(info) => (eur_amount * info.rate).round(),
        None => eur_amount,
    }
}

/// Convert an EUR amount into every supported currency, EUR included.
pub fn all_currency_conversions(eur_amount: f64) -> CurrencyMap {
    CURRENCY_REFERENCE
        .iter()
        .map(|(code, _)| {
            (
                (*code).to_string(),
                convert_eur_to_currency(eur_amount, code),
            )
        })
        .collect()
}

pub fn all_currencies() -> impl Iterator<Item = &'static str> {
    CURRENCY_REFERENCE.iter().map(|(code, _)| *code)
}

pub fn all_languages() -> &'static [&'static str] {
    LANGUAGES
}

pub fn currency_variants_for_language(language: &str) -> &'static [&'static str] {
    LANGUAGE_CURRENCY_VARIANTS
        .iter()
        .find(|(lang, _)| *lang == language)
        .map(|(_, variants)| *variants)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_known_currency_rounds() {
        assert_eq!(convert_eur_to_currency(25.0, "NOK"), 250.0);
        assert_eq!(convert_eur_to_currency(25.0, "CLP"), 20000.0);
        assert_eq!(convert_eur_to_currency(25.5, "EUR"), 26.0);
        assert_eq!(convert_eur_to_currency(0.26, "BRL"), 1.0);
    }

    #[test]
    fn test_convert_unknown_currency_is_identity() {
        assert_eq!(convert_eur_to_currency(25.5, "XYZ"), 25.5);
        assert_eq!(convert_eur_to_currency(25.5, "NGN"), 25.5);
    }

    #[test]
    fn test_all_conversions_cover_every_currency() {
        let conversions = all_currency_conversions(25.0);
        for (code, info) in CURRENCY_REFERENCE {
            assert_eq!(conversions.get(code), Some((25.0 * info.rate).round()));
        }
        assert_eq!(conversions.get("EUR"), Some(25.0));
    }

    #[test]
    fn test_all_conversions_eur_is_rounded_amount() {
        assert_eq!(all_currency_conversions(25.4).get("EUR"), Some(25.0));
        assert_eq!(all_currency_conversions(25.5).get("EUR"), Some(26.0));
    }

    #[test]
    fn test_language_variants() {
        assert_eq!(
            currency_variants_for_language("ru"),
            &["AZN_ru", "RUB_ru", "KZT_ru", "UZS_ru"]
        );
        assert!(currency_variants_for_language("fi").is_empty());
        assert!(all_languages().contains(&"fi"));
        assert_eq!(all_currencies().count(), CURRENCY_REFERENCE.len());
    }
}

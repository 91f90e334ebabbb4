//! Assembly of the rendered bonus/offer documents.
//!
//! Pure functions over already-loaded rows; the owning services do the
//! fetching. Rendering the same stored state twice yields identical output.

use crate::entities::{
    bonus_template_entity as bonus_templates, bonus_translation_entity as bonus_translations,
    offer_entity as offers, offer_translation_entity as offer_translations,
};
use crate::models::{
    BonusConfig, BonusJson, BonusSchedule, BonusTrigger, CurrencyMap, OfferJson,
    OfferTranslationText,
};
use crate::services::currency_service::{all_currencies, convert_eur_to_currency};
use chrono::Utc;
use std::collections::BTreeMap;

// Wildcard defaults for the stake/withdraw maps and the EUR fallbacks for
// the amount expansion, carried over from the reference sheet's EUR bounds.
const DEFAULT_MINIMUM_STAKE: f64 = 0.5;
const DEFAULT_MAXIMUM_STAKE: f64 = 5.0;
const DEFAULT_MAXIMUM_WITHDRAW: f64 = 3.0;
const DEFAULT_EUR_MINIMUM_AMOUNT: f64 = 25.0;
const DEFAULT_EUR_MAXIMUM_AMOUNT: f64 = 300.0;

/// Key for a translation row: `"{currency}_{language}"` when a currency
/// qualifier is present, else the bare language code.
fn translation_key(translation: &bonus_translations::Model) -> String {
    match translation.currency.as_deref() {
        Some(currency) => format!("{}_{}", currency, translation.language),
        None => translation.language.clone(),
    }
}

/// Amount maps inherit the EUR value as their wildcard; nothing is
/// synthesized when EUR itself is absent.
fn ensure_wildcard_from_eur(map: &mut CurrencyMap) {
    if !map.contains_key("*")
        && let Some(eur) = map.get("EUR")
    {
        map.insert("*", eur);
    }
}

fn ensure_wildcard_default(map: &mut CurrencyMap, default: f64) {
    if !map.contains_key("*") {
        map.insert("*", default);
    }
}

/// Build the base document: schedule/trigger/config groups with translation
/// rows merged into the trigger text maps and wildcard entries in place.
pub fn build_bonus_json(
    template: &bonus_templates::Model,
    translations: &[bonus_translations::Model],
) -> BonusJson {
    let mut trigger_name = template.trigger_name.clone().unwrap_or_default();
    let mut trigger_description = template.trigger_description.clone().unwrap_or_default();

    for translation in translations {
        let key = translation_key(translation);
        if let Some(name) = &translation.name {
            trigger_name.insert(key.clone(), name.clone());
        }
        if let Some(description) = &translation.description {
            trigger_description.insert(key, description.clone());
        }
    }

    let mut minimum_amount = template.minimum_amount.clone().unwrap_or_default();
    ensure_wildcard_from_eur(&mut minimum_amount);

    let mut maximum_amount = template.maximum_amount.clone().unwrap_or_default();
    ensure_wildcard_from_eur(&mut maximum_amount);

    let mut minimum_stake = template.minimum_stake_to_wager.clone().unwrap_or_default();
    ensure_wildcard_default(&mut minimum_stake, DEFAULT_MINIMUM_STAKE);

    let mut maximum_stake = template.maximum_stake_to_wager.clone().unwrap_or_default();
    ensure_wildcard_default(&mut maximum_stake, DEFAULT_MAXIMUM_STAKE);

    let mut maximum_withdraw = template.maximum_withdraw.clone().unwrap_or_default();
    ensure_wildcard_default(&mut maximum_withdraw, DEFAULT_MAXIMUM_WITHDRAW);

    BonusJson {
        id: template.id.clone(),
        schedule: BonusSchedule {
            schedule_type: template.schedule_type.clone(),
            schedule_from: template.schedule_from.clone(),
            schedule_to: template.schedule_to.clone(),
        },
        trigger: BonusTrigger {
            name: trigger_name,
            description: trigger_description,
            minimum_amount,
            iterations: template.trigger_iterations,
            trigger_type: template.trigger_type.clone(),
            duration: template.trigger_duration,
        },
        config: BonusConfig {
            minimum_stake_to_wager: minimum_stake,
            maximum_stake_to_wager: maximum_stake,
            compensate_overspending: template.compensate_overspending,
            maximum_amount,
            percentage: template.percentage,
            wagering_multiplier: template.wagering_multiplier,
            include_amount_on_target_wager_calculation: template.include_amount_on_target_wager,
            cap_calculation_amount_to_maximum_bonus: template.cap_calculation_to_maximum,
            bonus_type: template.bonus_type.clone(),
            withdraw_active: template.withdraw_active,
            category: template.category.clone(),
            provider: template.provider.clone(),
            brand: template.brand.clone(),
            maximum_withdraw,
        },
    }
}

/// Base document plus the currency expansion stage: the EUR baselines for
/// minimum/maximum amount are converted into every other currency of the
/// reference sheet.
pub fn build_bonus_json_with_currencies(
    template: &bonus_templates::Model,
    translations: &[bonus_translations::Model],
) -> BonusJson {
    let mut document = build_bonus_json(template, translations);

    let eur_minimum = document
        .trigger
        .minimum_amount
        .get("EUR")
        .unwrap_or(DEFAULT_EUR_MINIMUM_AMOUNT);
    let eur_maximum = document
        .config
        .maximum_amount
        .get("EUR")
        .unwrap_or(DEFAULT_EUR_MAXIMUM_AMOUNT);

    for currency in all_currencies() {
        if currency == "EUR" {
            continue;
        }

        document
            .trigger
            .minimum_amount
            .insert(currency, convert_eur_to_currency(eur_minimum, currency));
        document
            .config
            .maximum_amount
            .insert(currency, convert_eur_to_currency(eur_maximum, currency));
    }

    document
}

/// Offer export: the cached conversion map becomes `min_deposits` as-is,
/// translations are keyed by language, and the document is stamped.
pub fn build_offer_json(
    offer: &offers::Model,
    translations: &[offer_translations::Model],
) -> OfferJson {
    let mut translation_map = BTreeMap::new();
    for translation in translations {
        translation_map.insert(
            translation.language.clone(),
            OfferTranslationText {
                name: translation.offer_name.clone(),
                description: translation.offer_description.clone(),
            },
        );
    }

    OfferJson {
        offer_id: offer.id,
        offer_name: offer.name.clone(),
        offer_type: offer.offer_type.clone(),
        bonus_percentage: offer.bonus_percentage,
        wagering_multiplier: offer.wagering_multiplier,
        min_deposits: offer.currency_conversions.clone().unwrap_or_default(),
        translations: translation_map,
        generated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TextMap;

    fn empty_template(id: &str) -> bonus_templates::Model {
        bonus_templates::Model {
            id: id.to_string(),
            schedule_type: Some("interval".to_string()),
            schedule_from: Some("2024-01-01T00:00:00".to_string()),
            schedule_to: Some("2024-12-31T23:59:59".to_string()),
            trigger_type: Some("deposit".to_string()),
            trigger_iterations: Some(1),
            trigger_duration: Some(86400),
            trigger_name: None,
            trigger_description: None,
            minimum_amount: None,
            percentage: Some(100.0),
            wagering_multiplier: Some(35.0),
            minimum_stake_to_wager: None,
            maximum_stake_to_wager: None,
            maximum_amount: None,
            maximum_withdraw: None,
            include_amount_on_target_wager: Some(true),
            cap_calculation_to_maximum: Some(false),
            compensate_overspending: Some(false),
            withdraw_active: Some(true),
            category: Some("welcome".to_string()),
            provider: Some("pragmatic".to_string()),
            brand: Some("luckyspin".to_string()),
            bonus_type: Some("deposit".to_string()),
            created_at: None,
            updated_at: None,
        }
    }

    fn translation(
        template_id: &str,
        language: &str,
        currency: Option<&str>,
        name: &str,
    ) -> bonus_translations::Model {
        bonus_translations::Model {
            id: 1,
            template_id: template_id.to_string(),
            language: language.to_string(),
            currency: currency.map(|c| c.to_string()),
            name: Some(name.to_string()),
            description: Some(format!("{name} description")),
            created_at: None,
        }
    }

    #[test]
    fn test_translation_keys_merge_into_trigger_maps() {
        let mut template = empty_template("welcome-100");
        let mut names = TextMap::default();
        names.insert("en", "Welcome bonus");
        template.trigger_name = Some(names);

        let translations = vec![
            translation("welcome-100", "de", None, "Willkommensbonus"),
            translation("welcome-100", "no", Some("NOK"), "Velkomstbonus"),
        ];

        let document = build_bonus_json(&template, &translations);
        assert_eq!(document.trigger.name.get("en"), Some("Welcome bonus"));
        assert_eq!(document.trigger.name.get("de"), Some("Willkommensbonus"));
        assert_eq!(document.trigger.name.get("NOK_no"), Some("Velkomstbonus"));
        assert_eq!(
            document.trigger.description.get("NOK_no"),
            Some("Velkomstbonus description")
        );
    }

    #[test]
    fn test_wildcard_defaults() {
        let mut template = empty_template("wildcards");
        let mut minimum = CurrencyMap::default();
        minimum.insert("EUR", 25.0);
        template.minimum_amount = Some(minimum);

        let document = build_bonus_json(&template, &[]);
        assert_eq!(document.trigger.minimum_amount.get("*"), Some(25.0));
        // no EUR entry, no wildcard synthesized
        assert!(!document.config.maximum_amount.contains_key("*"));
        // stake/withdraw maps always carry their fixed defaults
        assert_eq!(document.config.minimum_stake_to_wager.get("*"), Some(0.5));
        assert_eq!(document.config.maximum_stake_to_wager.get("*"), Some(5.0));
        assert_eq!(document.config.maximum_withdraw.get("*"), Some(3.0));
    }

    #[test]
    fn test_wildcard_not_overwritten_when_present() {
        let mut template = empty_template("explicit-wildcard");
        let mut minimum = CurrencyMap::default();
        minimum.insert("EUR", 25.0);
        minimum.insert("*", 10.0);
        template.minimum_amount = Some(minimum);
        let mut stake = CurrencyMap::default();
        stake.insert("*", 1.5);
        template.minimum_stake_to_wager = Some(stake);

        let document = build_bonus_json(&template, &[]);
        assert_eq!(document.trigger.minimum_amount.get("*"), Some(10.0));
        assert_eq!(document.config.minimum_stake_to_wager.get("*"), Some(1.5));
    }

    #[test]
    fn test_currency_expansion_from_eur_baseline() {
        let mut template = empty_template("expansion");
        let mut minimum = CurrencyMap::default();
        minimum.insert("EUR", 25.0);
        template.minimum_amount = Some(minimum);
        let mut maximum = CurrencyMap::default();
        maximum.insert("EUR", 300.0);
        template.maximum_amount = Some(maximum);

        let document = build_bonus_json_with_currencies(&template, &[]);
        assert_eq!(document.trigger.minimum_amount.get("NOK"), Some(250.0));
        assert_eq!(document.trigger.minimum_amount.get("CLP"), Some(20000.0));
        assert_eq!(document.trigger.minimum_amount.get("EUR"), Some(25.0));
        assert_eq!(document.config.maximum_amount.get("NOK"), Some(3000.0));
        assert_eq!(document.config.maximum_amount.get("UZS"), Some(3000000.0));
    }

    #[test]
    fn test_currency_expansion_defaults_when_eur_absent() {
        let template = empty_template("no-amounts");
        let document = build_bonus_json_with_currencies(&template, &[]);
        // falls back to the 25/300 EUR baselines
        assert_eq!(document.trigger.minimum_amount.get("NOK"), Some(250.0));
        assert_eq!(document.config.maximum_amount.get("NOK"), Some(3000.0));
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let mut template = empty_template("stable");
        let mut minimum = CurrencyMap::default();
        minimum.insert("EUR", 25.0);
        template.minimum_amount = Some(minimum);
        let translations = vec![
            translation("stable", "ru", Some("RUB"), "Бонус"),
            translation("stable", "de", None, "Bonus"),
        ];

        let first = build_bonus_json_with_currencies(&template, &translations);
        let second = build_bonus_json_with_currencies(&template, &translations);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_offer_json_uses_cached_conversions() {
        let offer = offers::Model {
            id: 7,
            name: "Reload 50%".to_string(),
            offer_type: Some("reload".to_string()),
            bonus_percentage: Some(50.0),
            min_deposit_eur: 25.0,
            wagering_multiplier: Some(30.0),
            description: None,
            currency_conversions: Some(
                crate::services::currency_service::all_currency_conversions(25.0),
            ),
            created_at: None,
            updated_at: None,
        };
        let translations = vec![offer_translations::Model {
            id: 1,
            offer_id: 7,
            language: "en".to_string(),
            offer_name: Some("Reload 50%".to_string()),
            offer_description: Some("Half on top".to_string()),
            created_at: None,
        }];

        let document = build_offer_json(&offer, &translations);
        assert_eq!(document.offer_id, 7);
        assert_eq!(document.min_deposits.get("NOK"), Some(250.0));
        assert_eq!(
            document.translations.get("en").and_then(|t| t.name.clone()),
            Some("Reload 50%".to_string())
        );
    }
}

//! Locales with built-in resource name translations.
//!
//! The `{{ abilityresourcename }}` placeholder renders the champion's resource
//! (`partype` in the base-locale record) in the target locale. Unknown locales
//! and untranslated resources fall back to the English label, then to the raw
//! value.

/// Locale with a resource name table.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Locale {
    /// English (base locale)
    #[default]
    En,
    /// Russian
    Ru,
}

impl Locale {
    /// Translates a raw resource type (`Mana`, `No Cost`, ...).
    ///
    /// Returns `None` for resources missing from this locale's table.
    /// `None` (the resource) translates to an empty string.
    pub fn translate_resource(&self, partype: &str) -> Option<&'static str> {
        let translated = match (self, partype) {
            (_, "None") => "",

            (Locale::En, "Mana") => "Mana",
            (Locale::En, "Energy") => "Energy",
            (Locale::En, "Fury") => "Fury",
            (Locale::En, "Rage") => "Rage",
            (Locale::En, "Bloodthirst") => "Bloodthirst",
            (Locale::En, "Heat") => "Heat",
            (Locale::En, "Shield") => "Shield",
            (Locale::En, "Health") => "Health",
            (Locale::En, "No Cost") => "No Cost",
            (Locale::En, "Flow") => "Flow",
            (Locale::En, "Grit") => "Grit",
            (Locale::En, "Ferocity") => "Ferocity",
            (Locale::En, "Courage") => "Courage",
            (Locale::En, "Rage Power") => "Rage Power",

            (Locale::Ru, "Mana") => "Мана",
            (Locale::Ru, "Energy") => "Энергия",
            (Locale::Ru, "Fury" | "Rage") => "Ярость",
            (Locale::Ru, "Bloodthirst") => "Жажда крови",
            (Locale::Ru, "Heat") => "Перегрев",
            (Locale::Ru, "Shield") => "Щит",
            (Locale::Ru, "Health") => "Здоровье",
            (Locale::Ru, "No Cost") => "Без затрат",
            (Locale::Ru, "Flow") => "Поток",
            (Locale::Ru, "Grit") => "Настойчивость",
            (Locale::Ru, "Ferocity") => "Свирепость",
            (Locale::Ru, "Courage") => "Отвага",
            (Locale::Ru, "Rage Power") => "Сила гнева",

            _ => return None,
        };
        Some(translated)
    }
}

/// Resource name for `partype` in the locale named `locale`.
///
/// Translation, else English label, else `partype` unchanged.
pub fn resource_name(locale: &str, partype: &str) -> String {
    locale
        .parse::<Locale>()
        .ok()
        .and_then(|locale| locale.translate_resource(partype))
        .or_else(|| Locale::En.translate_resource(partype))
        .unwrap_or(partype)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_locale_codes() {
        assert_eq!("ru".parse::<Locale>().unwrap(), Locale::Ru);
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert!("de".parse::<Locale>().is_err());
        assert_eq!(Locale::Ru.to_string(), "ru");
    }

    #[test]
    fn translates_known_resources() {
        assert_eq!(resource_name("ru", "Mana"), "Мана");
        assert_eq!(resource_name("ru", "Rage"), "Ярость");
        assert_eq!(resource_name("en", "Energy"), "Energy");
        assert_eq!(resource_name("ru", "None"), "");
    }

    #[test]
    fn falls_back_to_english_then_raw() {
        assert_eq!(resource_name("de", "Mana"), "Mana");
        assert_eq!(resource_name("ru", "Blood Well"), "Blood Well");
        assert_eq!(resource_name("en", ""), "");
    }
}

//! Built-in English names for common language and region codes

use crate::contract::LocaleDisplayNames;

/// Locales offered when configuration does not list any
pub const DEFAULT_SUPPORTED_LOCALES: &[&str] = &[
    "en_US", "en_GB", "fr_FR", "de_DE", "es_ES", "it_IT", "pt_BR", "pt_PT", "nl_NL", "sv_SE",
    "pl_PL", "ro_RO", "ru_RU", "uk_UA", "tr_TR", "ja_JP", "ko_KR", "zh_CN",
];

/// Static lookup table; unknown codes yield `None`
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLocaleNames;

impl LocaleDisplayNames for BuiltinLocaleNames {
    fn language_name(&self, language_code: &str) -> Option<String> {
        let name = match language_code.to_ascii_lowercase().as_str() {
            "ar" => "Arabic",
            "cs" => "Czech",
            "da" => "Danish",
            "de" => "German",
            "el" => "Greek",
            "en" => "English",
            "es" => "Spanish",
            "fi" => "Finnish",
            "fr" => "French",
            "he" => "Hebrew",
            "hi" => "Hindi",
            "hu" => "Hungarian",
            "it" => "Italian",
            "ja" => "Japanese",
            "ko" => "Korean",
            "nb" => "Norwegian Bokmål",
            "nl" => "Dutch",
            "pl" => "Polish",
            "pt" => "Portuguese",
            "ro" => "Romanian",
            "ru" => "Russian",
            "sr" => "Serbian",
            "sv" => "Swedish",
            "tr" => "Turkish",
            "uk" => "Ukrainian",
            "zh" => "Chinese",
            _ => return None,
        };
        Some(name.to_string())
    }

    fn region_name(&self, region_code: &str) -> Option<String> {
        let name = match region_code.to_ascii_uppercase().as_str() {
            "AT" => "Austria",
            "AU" => "Australia",
            "BE" => "Belgium",
            "BR" => "Brazil",
            "CA" => "Canada",
            "CH" => "Switzerland",
            "CN" => "China",
            "CZ" => "Czechia",
            "DE" => "Germany",
            "DK" => "Denmark",
            "ES" => "Spain",
            "FI" => "Finland",
            "FR" => "France",
            "GB" => "United Kingdom",
            "GR" => "Greece",
            "IE" => "Ireland",
            "IN" => "India",
            "IT" => "Italy",
            "JP" => "Japan",
            "KR" => "South Korea",
            "MX" => "Mexico",
            "NL" => "Netherlands",
            "NO" => "Norway",
            "NZ" => "New Zealand",
            "PL" => "Poland",
            "PT" => "Portugal",
            "RO" => "Romania",
            "RS" => "Serbia",
            "RU" => "Russia",
            "SE" => "Sweden",
            "TR" => "Türkiye",
            "TW" => "Taiwan",
            "UA" => "Ukraine",
            "US" => "United States",
            "419" => "Latin America",
            _ => return None,
        };
        Some(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_default_locale_has_names() {
        let names = BuiltinLocaleNames;
        for id in DEFAULT_SUPPORTED_LOCALES {
            let (language, region) = id.split_once('_').unwrap();
            assert!(names.language_name(language).is_some(), "{id}");
            assert!(names.region_name(region).is_some(), "{id}");
        }
    }
}

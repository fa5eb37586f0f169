//! Field labels by locale.
//!
//! Label lookup is a plain `(field, locale) -> &str` table. Every field has a label
//! in every supported locale, so lookups cannot fail.

use crate::error::{AnuarioError, Result};
use crate::model::Field;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
    Eu,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Es, Locale::En, Locale::Eu];

    pub fn code(self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
            Locale::Eu => "eu",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = AnuarioError;

    /// Accepts a bare language code or a full tag such as `es_ES.UTF-8` or `en-GB`.
    fn from_str(s: &str) -> Result<Self> {
        let lang = s
            .trim()
            .split(['_', '-', '.'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        Locale::ALL
            .iter()
            .copied()
            .find(|l| l.code() == lang)
            .ok_or_else(|| AnuarioError::InvalidArgument(format!("Unsupported locale: {}", s)))
    }
}

pub fn label(field: Field, locale: Locale) -> &'static str {
    let (es, en, eu) = match field {
        Field::Id => ("Identificador", "Identifier", "Identifikatzailea"),
        Field::Type => ("Tipo", "Type", "Mota"),
        Field::Slug => ("Slug", "Slug", "Slug"),
        Field::AliasNames => ("Alias", "Aliases", "Ezizenak"),
        Field::Animagus => ("Animago", "Animagus", "Animagoa"),
        Field::BloodStatus => ("Estado de sangre", "Blood status", "Odol egoera"),
        Field::Boggart => ("Boggart", "Boggart", "Boggarta"),
        Field::Born => ("Nacimiento", "Born", "Jaiotza"),
        Field::Died => ("Fallecimiento", "Died", "Heriotza"),
        Field::EyeColor => ("Color de ojos", "Eye colour", "Begien kolorea"),
        Field::FamilyMembers => ("Familiares", "Family members", "Senideak"),
        Field::Gender => ("Género", "Gender", "Generoa"),
        Field::HairColor => ("Color de pelo", "Hair colour", "Ilearen kolorea"),
        Field::Height => ("Altura", "Height", "Altuera"),
        Field::House => ("Casa", "House", "Etxea"),
        Field::Image => ("Imagen", "Image", "Irudia"),
        Field::Jobs => ("Trabajos", "Jobs", "Lanak"),
        Field::MaritalStatus => ("Estado civil", "Marital status", "Egoera zibila"),
        Field::Name => ("Nombre", "Name", "Izena"),
        Field::Nationality => ("Nacionalidad", "Nationality", "Nazionalitatea"),
        Field::Patronus => ("Patronus", "Patronus", "Patronusa"),
        Field::Romances => ("Romances", "Romances", "Amodioak"),
        Field::SkinColor => ("Color de piel", "Skin colour", "Azalaren kolorea"),
        Field::Species => ("Especie", "Species", "Espeziea"),
        Field::Titles => ("Títulos", "Titles", "Tituluak"),
        Field::Wands => ("Varitas", "Wands", "Makilak"),
        Field::Weight => ("Peso", "Weight", "Pisua"),
        Field::Wiki => ("Wiki", "Wiki", "Wikia"),
    };
    match locale {
        Locale::Es => es,
        Locale::En => en,
        Locale::Eu => eu,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_is_spanish() {
        assert_eq!(Locale::default(), Locale::Es);
    }

    #[test]
    fn parses_codes_and_tags() {
        assert_eq!("es".parse::<Locale>().unwrap(), Locale::Es);
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("en-GB".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("eu_ES.UTF-8".parse::<Locale>().unwrap(), Locale::Eu);
        assert!("fr".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn labels_differ_by_locale() {
        assert_eq!(label(Field::House, Locale::Es), "Casa");
        assert_eq!(label(Field::House, Locale::En), "House");
        assert_eq!(label(Field::House, Locale::Eu), "Etxea");
    }

    #[test]
    fn every_field_has_a_label_everywhere() {
        for locale in Locale::ALL {
            for field in Field::ALL {
                assert!(!label(field, locale).is_empty());
            }
        }
    }

    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_string(&Locale::Eu).unwrap(), "\"eu\"");
        let parsed: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Locale::En);
    }
}

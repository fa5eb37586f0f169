//! # Data Model
//!
//! A [`Record`] is one character of the yearbook: a fixed, ordered set of 28 named
//! fields. Most fields are plain text; six of them ([`FieldKind::List`]) hold a list
//! of values.
//!
//! ## Empty Means Absent
//!
//! Every text field is a `String` and every list field a `Vec<String>`. An empty
//! string or an empty list is how the model spells "no value". The only field with
//! meaning on its own is `slug`, the case-insensitive key the store uses to find,
//! update and delete records.
//!
//! ## Field Order
//!
//! [`Field::ALL`] is the persisted column order. The codec, the header line and the
//! detail sheet all walk fields in this order, so adding a field means adding it
//! here and nowhere else.

use crate::error::{AnuarioError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display fallback for a record whose `name` column is missing.
pub const DEFAULT_NAME: &str = "Sin Nombre";
/// Display fallback for a record whose `house` column is missing.
pub const DEFAULT_HOUSE: &str = "Sin Casa";

/// Separator between the elements of a list field inside one cell.
pub const LIST_SEPARATOR: char = ';';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    List,
}

/// One column of the record file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Id,
    Type,
    Slug,
    AliasNames,
    Animagus,
    BloodStatus,
    Boggart,
    Born,
    Died,
    EyeColor,
    FamilyMembers,
    Gender,
    HairColor,
    Height,
    House,
    Image,
    Jobs,
    MaritalStatus,
    Name,
    Nationality,
    Patronus,
    Romances,
    SkinColor,
    Species,
    Titles,
    Wands,
    Weight,
    Wiki,
}

impl Field {
    /// All fields, in persisted column order.
    pub const ALL: [Field; 28] = [
        Field::Id,
        Field::Type,
        Field::Slug,
        Field::AliasNames,
        Field::Animagus,
        Field::BloodStatus,
        Field::Boggart,
        Field::Born,
        Field::Died,
        Field::EyeColor,
        Field::FamilyMembers,
        Field::Gender,
        Field::HairColor,
        Field::Height,
        Field::House,
        Field::Image,
        Field::Jobs,
        Field::MaritalStatus,
        Field::Name,
        Field::Nationality,
        Field::Patronus,
        Field::Romances,
        Field::SkinColor,
        Field::Species,
        Field::Titles,
        Field::Wands,
        Field::Weight,
        Field::Wiki,
    ];

    /// The column name used in the header line.
    pub fn name(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Type => "type",
            Field::Slug => "slug",
            Field::AliasNames => "alias_names",
            Field::Animagus => "animagus",
            Field::BloodStatus => "blood_status",
            Field::Boggart => "boggart",
            Field::Born => "born",
            Field::Died => "died",
            Field::EyeColor => "eye_color",
            Field::FamilyMembers => "family_members",
            Field::Gender => "gender",
            Field::HairColor => "hair_color",
            Field::Height => "height",
            Field::House => "house",
            Field::Image => "image",
            Field::Jobs => "jobs",
            Field::MaritalStatus => "marital_status",
            Field::Name => "name",
            Field::Nationality => "nationality",
            Field::Patronus => "patronus",
            Field::Romances => "romances",
            Field::SkinColor => "skin_color",
            Field::Species => "species",
            Field::Titles => "titles",
            Field::Wands => "wands",
            Field::Weight => "weight",
            Field::Wiki => "wiki",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::AliasNames
            | Field::FamilyMembers
            | Field::Jobs
            | Field::Romances
            | Field::Titles
            | Field::Wands => FieldKind::List,
            _ => FieldKind::Text,
        }
    }

    pub fn is_list(self) -> bool {
        self.kind() == FieldKind::List
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = AnuarioError;

    /// Accepts the header name, case-insensitively, with `-` standing in for `_`
    /// (`eye-color` and `EYE_COLOR` both parse).
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Field::ALL
            .iter()
            .copied()
            .find(|f| f.name() == normalized)
            .ok_or_else(|| AnuarioError::InvalidArgument(format!("Unknown field: {}", s)))
    }
}

/// One character of the yearbook.
///
/// Records are replaced wholesale by [`crate::store::DataStore::update`], so a
/// record handed to the store must carry every value the caller wants to keep.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub slug: String,
    pub alias_names: Vec<String>,
    pub animagus: String,
    pub blood_status: String,
    pub boggart: String,
    pub born: String,
    pub died: String,
    pub eye_color: String,
    pub family_members: Vec<String>,
    pub gender: String,
    pub hair_color: String,
    pub height: String,
    pub house: String,
    pub image: String,
    pub jobs: Vec<String>,
    pub marital_status: String,
    pub name: String,
    pub nationality: String,
    pub patronus: String,
    pub romances: Vec<String>,
    pub skin_color: String,
    pub species: String,
    pub titles: Vec<String>,
    pub wands: Vec<String>,
    pub weight: String,
    pub wiki: String,
}

impl Record {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            ..Default::default()
        }
    }

    /// Case-insensitive slug comparison, the only key equality the store knows.
    pub fn slug_matches(&self, slug: &str) -> bool {
        slug_eq(&self.slug, slug)
    }

    /// The text value of a text field, `None` for list fields.
    pub fn text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Id => &self.id,
            Field::Type => &self.kind,
            Field::Slug => &self.slug,
            Field::Animagus => &self.animagus,
            Field::BloodStatus => &self.blood_status,
            Field::Boggart => &self.boggart,
            Field::Born => &self.born,
            Field::Died => &self.died,
            Field::EyeColor => &self.eye_color,
            Field::Gender => &self.gender,
            Field::HairColor => &self.hair_color,
            Field::Height => &self.height,
            Field::House => &self.house,
            Field::Image => &self.image,
            Field::MaritalStatus => &self.marital_status,
            Field::Name => &self.name,
            Field::Nationality => &self.nationality,
            Field::Patronus => &self.patronus,
            Field::SkinColor => &self.skin_color,
            Field::Species => &self.species,
            Field::Weight => &self.weight,
            Field::Wiki => &self.wiki,
            _ => return None,
        };
        Some(value)
    }

    /// The elements of a list field, `None` for text fields.
    pub fn list(&self, field: Field) -> Option<&[String]> {
        let value = match field {
            Field::AliasNames => &self.alias_names,
            Field::FamilyMembers => &self.family_members,
            Field::Jobs => &self.jobs,
            Field::Romances => &self.romances,
            Field::Titles => &self.titles,
            Field::Wands => &self.wands,
            _ => return None,
        };
        Some(value)
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        let value = match field {
            Field::Id => &mut self.id,
            Field::Type => &mut self.kind,
            Field::Slug => &mut self.slug,
            Field::Animagus => &mut self.animagus,
            Field::BloodStatus => &mut self.blood_status,
            Field::Boggart => &mut self.boggart,
            Field::Born => &mut self.born,
            Field::Died => &mut self.died,
            Field::EyeColor => &mut self.eye_color,
            Field::Gender => &mut self.gender,
            Field::HairColor => &mut self.hair_color,
            Field::Height => &mut self.height,
            Field::House => &mut self.house,
            Field::Image => &mut self.image,
            Field::MaritalStatus => &mut self.marital_status,
            Field::Name => &mut self.name,
            Field::Nationality => &mut self.nationality,
            Field::Patronus => &mut self.patronus,
            Field::SkinColor => &mut self.skin_color,
            Field::Species => &mut self.species,
            Field::Weight => &mut self.weight,
            Field::Wiki => &mut self.wiki,
            _ => return None,
        };
        Some(value)
    }

    fn list_mut(&mut self, field: Field) -> Option<&mut Vec<String>> {
        let value = match field {
            Field::AliasNames => &mut self.alias_names,
            Field::FamilyMembers => &mut self.family_members,
            Field::Jobs => &mut self.jobs,
            Field::Romances => &mut self.romances,
            Field::Titles => &mut self.titles,
            Field::Wands => &mut self.wands,
            _ => return None,
        };
        Some(value)
    }

    /// The first field whose cell text contains a line break.
    pub fn field_with_line_break(&self) -> Option<Field> {
        Field::ALL
            .iter()
            .copied()
            .find(|f| has_line_break(&self.cell(*f)))
    }

    /// The value of any field as one cell of text; list elements are joined with `;`.
    pub fn cell(&self, field: Field) -> String {
        match self.list(field) {
            Some(items) => join_list(items),
            None => self.text(field).unwrap_or_default().to_string(),
        }
    }

    /// Sets a field from its cell text. List fields are split on `;`.
    pub fn set(&mut self, field: Field, value: &str) {
        if let Some(items) = self.list_mut(field) {
            *items = split_list(value);
        } else if let Some(text) = self.text_mut(field) {
            *text = value.to_string();
        }
    }

    /// Name as shown to users; falls back to [`DEFAULT_NAME`] when blank.
    pub fn display_name(&self) -> &str {
        non_blank(&self.name).unwrap_or(DEFAULT_NAME)
    }

    /// House as shown to users; falls back to [`DEFAULT_HOUSE`] when blank.
    pub fn display_house(&self) -> &str {
        non_blank(&self.house).unwrap_or(DEFAULT_HOUSE)
    }
}

fn non_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Case-insensitive slug equality. Only the stored slug is trimmed; the requested
/// slug is compared as given.
pub fn slug_eq(stored: &str, wanted: &str) -> bool {
    stored.trim().to_lowercase() == wanted.to_lowercase()
}

/// True when `value` would break a record across lines.
pub fn has_line_break(value: &str) -> bool {
    value.contains(['\n', '\r'])
}

/// Splits a list cell into its elements. Blank elements are dropped, so an empty
/// cell yields an empty list.
pub fn split_list(cell: &str) -> Vec<String> {
    cell.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_list(items: &[String]) -> String {
    items.join(&LIST_SEPARATOR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_order_matches_header_names() {
        let names: Vec<&str> = Field::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names.len(), 28);
        assert_eq!(names[0], "id");
        assert_eq!(names[2], "slug");
        assert_eq!(names[14], "house");
        assert_eq!(names[18], "name");
        assert_eq!(names[27], "wiki");
    }

    #[test]
    fn exactly_six_list_fields() {
        let lists: Vec<Field> = Field::ALL.iter().copied().filter(|f| f.is_list()).collect();
        assert_eq!(
            lists,
            vec![
                Field::AliasNames,
                Field::FamilyMembers,
                Field::Jobs,
                Field::Romances,
                Field::Titles,
                Field::Wands
            ]
        );
    }

    #[test]
    fn field_parses_loosely() {
        assert_eq!("eye-color".parse::<Field>().unwrap(), Field::EyeColor);
        assert_eq!("EYE_COLOR".parse::<Field>().unwrap(), Field::EyeColor);
        assert_eq!(" house ".parse::<Field>().unwrap(), Field::House);
        assert!("wand".parse::<Field>().is_err());
    }

    #[test]
    fn every_field_is_readable_and_writable() {
        let mut record = Record::default();
        for field in Field::ALL {
            record.set(field, "x");
        }
        for field in Field::ALL {
            assert_eq!(record.cell(field), "x", "field {}", field);
        }
    }

    #[test]
    fn set_splits_list_fields() {
        let mut record = Record::new("harry-potter");
        record.set(Field::FamilyMembers, "James Potter; Lily Potter;;");
        assert_eq!(
            record.family_members,
            vec!["James Potter".to_string(), "Lily Potter".to_string()]
        );
        assert_eq!(record.cell(Field::FamilyMembers), "James Potter;Lily Potter");
    }

    #[test]
    fn text_and_list_accessors_are_disjoint() {
        let record = Record::new("a");
        assert!(record.text(Field::Jobs).is_none());
        assert!(record.list(Field::Name).is_none());
        assert_eq!(record.text(Field::Slug), Some("a"));
    }

    #[test]
    fn slug_match_ignores_case() {
        let record = Record::new("harry-potter");
        assert!(record.slug_matches("HARRY-POTTER"));
        assert!(record.slug_matches("Harry-Potter"));
        assert!(!record.slug_matches("harry"));
    }

    #[test]
    fn slug_match_trims_only_the_stored_side() {
        let padded = Record::new(" harry-potter ");
        assert!(padded.slug_matches("harry-potter"));

        let record = Record::new("harry-potter");
        assert!(!record.slug_matches("  harry-potter "));
    }

    #[test]
    fn line_breaks_are_found_in_any_field() {
        let mut record = Record::new("luna-lovegood");
        assert_eq!(record.field_with_line_break(), None);

        record.name = "Luna\nLovegood".into();
        assert_eq!(record.field_with_line_break(), Some(Field::Name));

        record.name = "Luna Lovegood".into();
        record.jobs = vec!["Editor\rAuror".into()];
        assert_eq!(record.field_with_line_break(), Some(Field::Jobs));
    }

    #[test]
    fn display_fallbacks() {
        let mut record = Record::new("x");
        assert_eq!(record.display_name(), DEFAULT_NAME);
        assert_eq!(record.display_house(), DEFAULT_HOUSE);
        record.name = "Luna Lovegood".into();
        record.house = "Ravenclaw".into();
        assert_eq!(record.display_name(), "Luna Lovegood");
        assert_eq!(record.display_house(), "Ravenclaw");
    }

    #[test]
    fn serializes_kind_as_type() {
        let mut record = Record::new("x");
        record.kind = "character".into();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "character");
        assert!(json.get("kind").is_none());
    }
}

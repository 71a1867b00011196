//! Specimen record data model.
//!
//! A [`RawRecord`] is one row exactly as the data source provides it. A [`Record`] is the
//! normalized, display-ready form the filter and renderer work with: ten owned string
//! fields in a fixed column order.

use serde::{Deserialize, Deserializer, Serialize};

/// Display fields of a record, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CatalogNumber,
    Order,
    Family,
    Genus,
    ScientificName,
    StateProvince,
    Municipality,
    Locality,
    EventDate,
    Preparations,
}

impl Field {
    /// Number of display fields.
    pub const COUNT: usize = 10;

    /// All fields in column order. The search blob concatenates fields in this order.
    pub const ALL: [Field; Field::COUNT] = [
        Field::CatalogNumber,
        Field::Order,
        Field::Family,
        Field::Genus,
        Field::ScientificName,
        Field::StateProvince,
        Field::Municipality,
        Field::Locality,
        Field::EventDate,
        Field::Preparations,
    ];

    /// Column title shown in table headers.
    pub fn header(self) -> &'static str {
        match self {
            Field::CatalogNumber => "Catalog",
            Field::Order => "Order",
            Field::Family => "Family",
            Field::Genus => "Genus",
            Field::ScientificName => "Scientific name",
            Field::StateProvince => "State",
            Field::Municipality => "Municipality",
            Field::Locality => "Locality",
            Field::EventDate => "Date",
            Field::Preparations => "Preparations",
        }
    }

    /// Key used for this field in source data.
    pub fn source_key(self) -> &'static str {
        match self {
            Field::CatalogNumber => "catalogNumber",
            Field::Order => "order",
            Field::Family => "family",
            Field::Genus => "genus",
            Field::ScientificName => "scientificName",
            Field::StateProvince => "stateProvince",
            Field::Municipality => "municipality",
            Field::Locality => "locality",
            Field::EventDate => "eventDate",
            Field::Preparations => "preparations",
        }
    }
}

/// Source columns carried by a raw row, in the order the bundle builder writes them.
pub const SOURCE_COLUMNS: [&str; 13] = [
    "catalogNumber",
    "order",
    "family",
    "genus",
    "scientificName",
    "specificEpithet",
    "stateProvince",
    "municipality",
    "locality",
    "eventDate",
    "preparations",
    "decimalLatitude",
    "decimalLongitude",
];

/// One row as supplied by a data source.
///
/// Every column is optional in the source. Absent, `null`, `false` and numeric zero
/// values deserialize to an empty string; other numbers and `true` keep their literal
/// text, and nested arrays or objects become compact JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub catalog_number: String,
    #[serde(deserialize_with = "lenient_string")]
    pub order: String,
    #[serde(deserialize_with = "lenient_string")]
    pub family: String,
    #[serde(deserialize_with = "lenient_string")]
    pub genus: String,
    #[serde(deserialize_with = "lenient_string")]
    pub scientific_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub specific_epithet: String,
    #[serde(deserialize_with = "lenient_string")]
    pub state_province: String,
    #[serde(deserialize_with = "lenient_string")]
    pub municipality: String,
    #[serde(deserialize_with = "lenient_string")]
    pub locality: String,
    #[serde(deserialize_with = "lenient_string")]
    pub event_date: String,
    #[serde(deserialize_with = "lenient_string")]
    pub preparations: String,
    #[serde(deserialize_with = "lenient_string")]
    pub decimal_latitude: String,
    #[serde(deserialize_with = "lenient_string")]
    pub decimal_longitude: String,
}

impl RawRecord {
    /// Assign a column by its source key. Unknown keys are ignored.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let slot = match key {
            "catalogNumber" => &mut self.catalog_number,
            "order" => &mut self.order,
            "family" => &mut self.family,
            "genus" => &mut self.genus,
            "scientificName" => &mut self.scientific_name,
            "specificEpithet" => &mut self.specific_epithet,
            "stateProvince" => &mut self.state_province,
            "municipality" => &mut self.municipality,
            "locality" => &mut self.locality,
            "eventDate" => &mut self.event_date,
            "preparations" => &mut self.preparations,
            "decimalLatitude" => &mut self.decimal_latitude,
            "decimalLongitude" => &mut self.decimal_longitude,
            _ => return,
        };
        *slot = value.into();
    }
}

/// Cell values as they appear in JSON data files.
#[derive(Deserialize)]
#[serde(untagged)]
enum CellValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
    Nested(serde_json::Value),
}

/// Decode any JSON cell as text. Falsy values (`null`, `false`, `0`) read as empty.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<CellValue>::deserialize(deserializer)? {
        Some(CellValue::Text(text)) => text,
        Some(CellValue::Number(number)) if number.as_f64() == Some(0.0) => String::new(),
        Some(CellValue::Number(number)) => number.to_string(),
        Some(CellValue::Flag(true)) => "true".to_string(),
        Some(CellValue::Flag(false)) | None => String::new(),
        Some(CellValue::Nested(value)) => value.to_string(),
    })
}

/// A normalized specimen record.
///
/// Field values are owned copies taken at normalization time and never change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    values: [String; Field::COUNT],
}

impl Record {
    /// Build a record from explicit values in [`Field::ALL`] order.
    pub fn new(values: [String; Field::COUNT]) -> Self {
        Self { values }
    }

    /// Normalize a raw row.
    ///
    /// The scientific name falls back to the specific epithet when it is empty.
    pub fn from_raw(raw: &RawRecord) -> Self {
        let scientific_name = if raw.scientific_name.is_empty() {
            raw.specific_epithet.clone()
        } else {
            raw.scientific_name.clone()
        };

        Self {
            values: [
                raw.catalog_number.clone(),
                raw.order.clone(),
                raw.family.clone(),
                raw.genus.clone(),
                scientific_name,
                raw.state_province.clone(),
                raw.municipality.clone(),
                raw.locality.clone(),
                raw.event_date.clone(),
                raw.preparations.clone(),
            ],
        }
    }

    /// Value of a single field (empty when the source had none).
    pub fn get(&self, field: Field) -> &str {
        &self.values[field as usize]
    }

    /// Values in column order.
    pub fn values(&self) -> &[String; Field::COUNT] {
        &self.values
    }

    /// Lowercased concatenation of all fields separated by single spaces.
    pub fn search_blob(&self) -> String {
        self.values.join(" ").to_lowercase()
    }
}

impl From<&RawRecord> for Record {
    fn from(raw: &RawRecord) -> Self {
        Self::from_raw(raw)
    }
}

impl From<RawRecord> for Record {
    fn from(raw: RawRecord) -> Self {
        Self::from_raw(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_and_keys() {
        assert_eq!(Field::ALL.len(), Field::COUNT);
        assert_eq!(Field::ALL[0], Field::CatalogNumber);
        assert_eq!(Field::ALL[9], Field::Preparations);
        for (idx, field) in Field::ALL.iter().enumerate() {
            assert_eq!(*field as usize, idx);
        }
        assert_eq!(Field::StateProvince.source_key(), "stateProvince");
    }

    #[test]
    fn test_raw_record_missing_fields_default_empty() {
        let raw: RawRecord =
            serde_json::from_str(r#"{"catalogNumber":"IBS001","genus":"Panthera"}"#).unwrap();
        assert_eq!(raw.catalog_number, "IBS001");
        assert_eq!(raw.genus, "Panthera");
        assert_eq!(raw.family, "");
        assert_eq!(raw.decimal_longitude, "");
    }

    #[test]
    fn test_raw_record_lenient_values() {
        let raw: RawRecord = serde_json::from_str(
            r#"{"catalogNumber":42,"order":null,"decimalLatitude":-12.5,"preparations":true}"#,
        )
        .unwrap();
        assert_eq!(raw.catalog_number, "42");
        assert_eq!(raw.order, "");
        assert_eq!(raw.decimal_latitude, "-12.5");
        assert_eq!(raw.preparations, "true");
    }

    #[test]
    fn test_falsy_values_read_as_empty() {
        let raw: RawRecord = serde_json::from_str(
            r#"{"catalogNumber":0,"order":false,"family":"0","decimalLatitude":0.0,"scientificName":0,"specificEpithet":"onca"}"#,
        )
        .unwrap();
        assert_eq!(raw.catalog_number, "");
        assert_eq!(raw.order, "");
        assert_eq!(raw.family, "0");
        assert_eq!(raw.decimal_latitude, "");
        assert_eq!(
            Record::from_raw(&raw).get(Field::ScientificName),
            "onca"
        );
    }

    #[test]
    fn test_nested_values_become_json_text() {
        let raw: RawRecord = serde_json::from_str(
            r#"{"genus":"Leo","locality":{"x":1},"preparations":["skin","skull"]}"#,
        )
        .unwrap();
        assert_eq!(raw.genus, "Leo");
        assert_eq!(raw.locality, r#"{"x":1}"#);
        assert_eq!(raw.preparations, r#"["skin","skull"]"#);
    }

    #[test]
    fn test_scientific_name_falls_back_to_epithet() {
        let raw = RawRecord {
            specific_epithet: "leo".to_string(),
            ..RawRecord::default()
        };
        let record = Record::from_raw(&raw);
        assert_eq!(record.get(Field::ScientificName), "leo");

        let raw = RawRecord {
            scientific_name: "Panthera leo".to_string(),
            specific_epithet: "leo".to_string(),
            ..RawRecord::default()
        };
        assert_eq!(
            Record::from_raw(&raw).get(Field::ScientificName),
            "Panthera leo"
        );
    }

    #[test]
    fn test_search_blob_joins_fields_in_order() {
        let mut raw = RawRecord::default();
        raw.set("catalogNumber", "IBS001");
        raw.set("genus", "Panthera");
        raw.set("stateProvince", "Bahia");
        raw.set("unknownColumn", "ignored");

        let blob = Record::from_raw(&raw).search_blob();
        assert_eq!(blob, "ibs001   panthera  bahia    ");
        assert_eq!(blob.matches(' ').count(), Field::COUNT - 1);
    }

    #[test]
    fn test_raw_record_serializes_camel_case() {
        let mut raw = RawRecord::default();
        raw.set("scientificName", "Puma concolor");
        let json = serde_json::to_string(&raw).unwrap();
        assert!(json.starts_with(r#"{"catalogNumber":"","order":"""#));
        assert!(json.contains(r#""scientificName":"Puma concolor""#));
        assert!(json.ends_with(r#""decimalLongitude":""}"#));
    }
}

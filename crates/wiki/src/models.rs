//! Wire types for the Wikidata and Wikipedia APIs, plus the values the
//! clients extract from them.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Wikidata entity search (`wbsearchentities`)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub search: Vec<SearchResult>,
}

/// One ranked hit from the entity search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResult {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
}

// ---------------------------------------------------------------------------
// Wikidata SPARQL
// ---------------------------------------------------------------------------

/// Response to an `ASK` query.
#[derive(Debug, Clone, Deserialize)]
pub struct AskResponse {
    pub boolean: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SparqlResponse {
    pub results: SparqlResults,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SparqlResults {
    #[serde(default)]
    pub bindings: Vec<AwardBinding>,
}

/// A bound value in a SPARQL result row. Only the lexical value is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SparqlValue {
    pub value: String,
}

/// One row of the award query. Any variable may be unbound.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardBinding {
    #[serde(default)]
    pub award: Option<SparqlValue>,
    #[serde(default)]
    pub award_label: Option<SparqlValue>,
    #[serde(default)]
    pub year: Option<SparqlValue>,
    #[serde(default)]
    pub work_label: Option<SparqlValue>,
    #[serde(default)]
    pub image: Option<SparqlValue>,
    #[serde(default)]
    pub person_label: Option<SparqlValue>,
}

impl AwardBinding {
    fn text(value: &Option<SparqlValue>) -> &str {
        value.as_ref().map_or("", |v| v.value.as_str())
    }

    pub fn award_id(&self) -> &str {
        Self::text(&self.award)
    }

    pub fn award_label(&self) -> &str {
        Self::text(&self.award_label)
    }

    pub fn work_label(&self) -> &str {
        Self::text(&self.work_label)
    }

    pub fn image(&self) -> &str {
        Self::text(&self.image)
    }

    pub fn person_label(&self) -> &str {
        Self::text(&self.person_label)
    }

    /// The award year, if bound and numeric.
    pub fn year(&self) -> Option<i32> {
        self.year.as_ref().and_then(|v| v.value.trim().parse().ok())
    }
}

// ---------------------------------------------------------------------------
// Extracted values
// ---------------------------------------------------------------------------

/// Person attributes gathered from the award query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonInfo {
    pub wikidata_id: String,
    /// Empty when no row carried a label.
    pub name: String,
    pub photo_url: Option<String>,
}

/// An award statement before classification.
#[derive(Debug, Clone, PartialEq)]
pub struct RawAward {
    pub award_id: String,
    pub label: String,
    pub year: Option<i32>,
    pub work: String,
}

// ---------------------------------------------------------------------------
// Wikipedia REST page summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub source: String,
}

/// Response of `GET /page/summary/{title}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSummary {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub extract: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
}

impl PageSummary {
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail
            .as_ref()
            .map(|t| t.source.as_str())
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_decodes_sparql_json_row() {
        let row: AwardBinding = serde_json::from_value(serde_json::json!({
            "award": { "type": "uri", "value": "http://www.wikidata.org/entity/Q103916" },
            "awardLabel": { "type": "literal", "xml:lang": "en", "value": "Academy Award for Best Actress" },
            "year": { "type": "literal", "value": "1983" },
            "workLabel": { "type": "literal", "value": "Sophie's Choice" }
        }))
        .unwrap();

        assert_eq!(row.award_id(), "http://www.wikidata.org/entity/Q103916");
        assert_eq!(row.award_label(), "Academy Award for Best Actress");
        assert_eq!(row.year(), Some(1983));
        assert_eq!(row.work_label(), "Sophie's Choice");
        assert_eq!(row.image(), "");
        assert_eq!(row.person_label(), "");
    }

    #[test]
    fn non_numeric_year_is_unbound() {
        let row = AwardBinding {
            year: Some(SparqlValue {
                value: "unknown".into(),
            }),
            ..Default::default()
        };
        assert_eq!(row.year(), None);
    }

    #[test]
    fn page_summary_without_thumbnail() {
        let page: PageSummary = serde_json::from_value(serde_json::json!({
            "title": "Anora",
            "extract": "Anora is a 2024 film."
        }))
        .unwrap();
        assert_eq!(page.thumbnail_url(), None);
        assert_eq!(page.description, None);
    }

    #[test]
    fn empty_thumbnail_source_is_absent() {
        let page = PageSummary {
            title: "Anora".into(),
            extract: String::new(),
            description: None,
            thumbnail: Some(Thumbnail {
                source: String::new(),
            }),
        };
        assert_eq!(page.thumbnail_url(), None);
    }
}

//! Celebrity and award records as they arrive from the knowledge base,
//! ready to be stored.

use chrono::NaiveDate;

use crate::award::AwardType;
use crate::naming::slugify;

/// A celebrity to insert. The slug is always derived from the name.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCelebrity {
    pub name: String,
    pub slug: String,
    pub photo_url: Option<String>,
    pub summary: Option<String>,
}

impl CreateCelebrity {
    pub fn new(name: &str, photo_url: Option<String>, summary: Option<String>) -> Self {
        let name = name.trim().to_string();
        Self {
            slug: slugify(&name),
            name,
            photo_url: photo_url.filter(|s| !s.is_empty()),
            summary: summary.filter(|s| !s.is_empty()),
        }
    }
}

/// An award to insert under an existing celebrity.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAward {
    pub award_type: AwardType,
    pub year: Option<i32>,
    pub work: String,
    pub category: String,
    pub is_winner: bool,
    pub ceremony_date: Option<NaiveDate>,
    pub is_upcoming: bool,
}

impl CreateAward {
    /// A past win, which is the only shape the knowledge base supplies.
    pub fn win(award_type: AwardType, year: Option<i32>, work: &str, category: &str) -> Self {
        Self {
            award_type,
            year,
            work: work.to_string(),
            category: category.to_string(),
            is_winner: true,
            ceremony_date: None,
            is_upcoming: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_celebrity_derives_slug_from_trimmed_name() {
        let input = CreateCelebrity::new("  J.K. Simmons ", None, None);
        assert_eq!(input.name, "J.K. Simmons");
        assert_eq!(input.slug, "jk-simmons");
    }

    #[test]
    fn empty_optional_text_is_dropped() {
        let input = CreateCelebrity::new("Cher", Some(String::new()), Some("Singer".into()));
        assert_eq!(input.photo_url, None);
        assert_eq!(input.summary.as_deref(), Some("Singer"));
    }

    #[test]
    fn win_is_past_and_winning() {
        let award = CreateAward::win(AwardType::Tony, Some(1975), "Gypsy", "Best Actress");
        assert!(award.is_winner);
        assert!(!award.is_upcoming);
        assert_eq!(award.ceremony_date, None);
    }
}

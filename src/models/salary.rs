//! Salary entry models as published by the OpenSalary API.

use serde::{Deserialize, Deserializer, Serialize};

/// Public site that hosts the entry and company pages
pub const DEFAULT_SITE_URL: &str = "https://opensalary.jp/en";

/// One page of the `salary-entries` listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryEntriesPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<SalaryEntry>,
}

/// A single compensation disclosure.
///
/// Identity is `id`; every other field is descriptive payload. Sparse
/// submissions omit fields or send `null`, both of which decode to the
/// type's default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryEntry {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role_focus: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub grade: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub annual_compensation: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub annual_salary: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub annual_bonus: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub annual_stock: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub signing_bonus_total: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub years_of_experience: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub years_at_company: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: Company,
}

impl SalaryEntry {
    /// Detail page of this entry on the given site
    pub fn url(&self, site_url: &str) -> String {
        format!("{}/single-salary/{}", site_url.trim_end_matches('/'), self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    #[serde(rename = "name_en", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
}

impl Company {
    /// Company page on the given site
    pub fn url(&self, site_url: &str) -> String {
        format!("{}/companies/{}", site_url.trim_end_matches('/'), self.slug)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_entry() {
        let body = r#"{
            "items": [{
                "id": 4821,
                "role_title": "Software Engineer",
                "role_focus": "Backend",
                "grade": "L5",
                "annual_compensation": 12500000,
                "annual_salary": 9000000,
                "annual_bonus": 1500000,
                "annual_stock": 2000000,
                "signing_bonus_total": 500000,
                "years_of_experience": 8,
                "years_at_company": 2,
                "company": {"name_en": "Mercari", "slug": "mercari", "logo": "x.png"},
                "created_at": "2024-05-01T00:00:00Z"
            }]
        }"#;

        let page: SalaryEntriesPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.items.len(), 1);

        let entry = &page.items[0];
        assert_eq!(entry.id, 4821);
        assert_eq!(entry.role_focus, "Backend");
        assert_eq!(entry.annual_compensation, 12_500_000);
        assert_eq!(entry.signing_bonus_total, 500_000);
        assert_eq!(entry.company.name, "Mercari");
        assert_eq!(entry.company.slug, "mercari");
    }

    #[test]
    fn test_decode_sparse_entry() {
        let body = r#"{"items": [{"id": 7, "grade": null, "annual_stock": null, "company": {"name_en": "Acme"}}]}"#;

        let page: SalaryEntriesPage = serde_json::from_str(body).unwrap();
        let entry = &page.items[0];
        assert_eq!(entry.id, 7);
        assert_eq!(entry.grade, "");
        assert_eq!(entry.annual_stock, 0);
        assert_eq!(entry.role_title, "");
        assert_eq!(entry.company.name, "Acme");
        assert_eq!(entry.company.slug, "");
    }

    #[test]
    fn test_decode_missing_items() {
        let page: SalaryEntriesPage = serde_json::from_str("{}").unwrap();
        assert!(page.items.is_empty());

        let page: SalaryEntriesPage = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_decode_rejects_missing_id() {
        let result = serde_json::from_str::<SalaryEntriesPage>(r#"{"items": [{"grade": "L3"}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_links() {
        let entry = SalaryEntry {
            id: 42,
            company: Company {
                name: "LINE".into(),
                slug: "line".into(),
            },
            ..Default::default()
        };

        assert_eq!(
            entry.url(DEFAULT_SITE_URL),
            "https://opensalary.jp/en/single-salary/42"
        );
        assert_eq!(
            entry.company.url("https://opensalary.jp/en/"),
            "https://opensalary.jp/en/companies/line"
        );
    }
}

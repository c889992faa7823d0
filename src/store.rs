use chrono::{DateTime, Utc};
use reqwest::{header, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::models::{Testimonial, TestimonialDraft, DEFAULT_ROLE, MAX_RATING, MIN_RATING};

const TABLE_PATH: &str = "/rest/v1/testimonials";
const COLUMNS: &str = "id,name,role,content,rating,created_at";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("testimonial store is not configured")]
    Disabled,
    #[error("testimonial store unreachable: {0}")]
    Network(reqwest::Error),
    #[error("testimonial store answered {0}")]
    Rejected(StatusCode),
    #[error("testimonial rows could not be decoded: {0}")]
    Decode(reqwest::Error),
}

/// Primary keys come back as text (uuid) or as a number (bigint identity).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RowId {
    Text(String),
    Number(i64),
}

/// One row as the table returns it, before it is checked.
#[derive(Debug, Deserialize)]
struct StoreRow {
    id: RowId,
    name: String,
    role: Option<String>,
    content: String,
    rating: i64,
    created_at: DateTime<Utc>,
}

impl StoreRow {
    /// `None` when the rating is outside the star range.
    fn into_testimonial(self) -> Option<Testimonial> {
        let rating = u8::try_from(self.rating)
            .ok()
            .filter(|rating| (MIN_RATING..=MAX_RATING).contains(rating))?;
        let role = self
            .role
            .map(|role| role.trim().to_string())
            .filter(|role| !role.is_empty())
            .unwrap_or_else(|| DEFAULT_ROLE.to_string());

        Some(Testimonial {
            id: match self.id {
                RowId::Text(id) => id,
                RowId::Number(id) => id.to_string(),
            },
            name: self.name,
            role,
            content: self.content,
            rating,
            created_at: self.created_at,
        })
    }
}

/// Client for the hosted `testimonials` table.
///
/// Reads return approved rows, newest first. Inserts land as pending and the
/// store decides when they become visible, so a successful insert says
/// nothing about the next read.
#[derive(Clone, Debug)]
pub struct TestimonialStore {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TestimonialStore {
    pub fn new(http: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            api_key: api_key.trim().to_string(),
        }
    }

    pub fn enabled(&self) -> bool {
        !(self.base_url.is_empty() || self.api_key.is_empty())
    }

    fn table_url(&self) -> String {
        format!("{}{}", self.base_url, TABLE_PATH)
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
    }

    pub async fn fetch_all(&self) -> Result<Vec<Testimonial>, StoreError> {
        if !self.enabled() {
            return Err(StoreError::Disabled);
        }

        let response = self
            .request(self.http.get(self.table_url()))
            .query(&[("select", COLUMNS), ("order", "created_at.desc")])
            .send()
            .await
            .map_err(StoreError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Rejected(status));
        }

        let raw: Vec<StoreRow> = response.json().await.map_err(StoreError::Decode)?;
        let total = raw.len();
        let mut rows: Vec<Testimonial> = raw
            .into_iter()
            .filter_map(StoreRow::into_testimonial)
            .collect();
        if rows.len() < total {
            log::warn!(
                "Skipped {} testimonial rows with a rating outside {MIN_RATING}..={MAX_RATING}",
                total - rows.len()
            );
        }
        // The store already orders; keep newest-first even if it didn't.
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    /// One read per page load. Any failure keeps `fallback`.
    pub async fn load_or_fallback(&self, fallback: Vec<Testimonial>) -> Vec<Testimonial> {
        match self.fetch_all().await {
            Ok(rows) => rows,
            Err(StoreError::Disabled) => fallback,
            Err(err) => {
                log::warn!("Testimonial fetch failed, showing built-in list: {err}");
                fallback
            }
        }
    }

    pub async fn insert(&self, draft: &TestimonialDraft) -> Result<(), StoreError> {
        if !self.enabled() {
            return Err(StoreError::Disabled);
        }

        let response = self
            .request(self.http.post(self.table_url()))
            .header("Prefer", "return=minimal")
            .json(&draft.normalized())
            .send()
            .await
            .map_err(StoreError::Network)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(StoreError::Rejected(status))
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fallback_testimonials;

    fn store(base: &str) -> TestimonialStore {
        TestimonialStore::new(reqwest::Client::new(), base, "anon-key")
    }

    #[actix_web::test]
    async fn rows_come_back_newest_first() {
        let base = fake::start(fake::Table::with_rows(vec![
            fake::row("1", "Old", "2023-01-01T00:00:00+00:00"),
            fake::row("2", "New", "2024-06-01T00:00:00+00:00"),
        ]));
        let rows = store(&base).fetch_all().await.unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["New", "Old"]);
    }

    #[actix_web::test]
    async fn numeric_ids_and_null_roles_decode() {
        let base = fake::start(fake::Table::with_rows(vec![serde_json::json!({
            "id": 7,
            "name": "Ada",
            "role": null,
            "content": "Spotless",
            "rating": 4,
            "created_at": "2024-05-01T10:00:00+00:00",
        })]));
        let rows = store(&base).fetch_all().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "7");
        assert_eq!(rows[0].role, "Customer");
        assert_eq!(rows[0].created_at.to_rfc3339(), "2024-05-01T10:00:00+00:00");
    }

    #[actix_web::test]
    async fn rows_outside_star_range_are_skipped() {
        let mut zero = fake::row("1", "Zero", "2024-01-01T00:00:00+00:00");
        zero["rating"] = serde_json::json!(0);
        let mut nine = fake::row("2", "Nine", "2024-02-01T00:00:00+00:00");
        nine["rating"] = serde_json::json!(9);
        let mut negative = fake::row("3", "Negative", "2024-03-01T00:00:00+00:00");
        negative["rating"] = serde_json::json!(-2);
        let kept = fake::row("4", "Kept", "2024-04-01T00:00:00+00:00");

        let base = fake::start(fake::Table::with_rows(vec![zero, nine, negative, kept]));
        let rows = store(&base).fetch_all().await.unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Kept"]);
        assert!(rows.iter().all(|r| (MIN_RATING..=MAX_RATING).contains(&r.rating)));
    }

    #[actix_web::test]
    async fn read_failure_keeps_fallback() {
        let base = fake::start(fake::Table::failing());
        let fallback = fallback_testimonials();
        let rows = store(&base).load_or_fallback(fallback.clone()).await;
        assert_eq!(rows, fallback);
    }

    #[actix_web::test]
    async fn disabled_store_reads_fallback_and_rejects_writes() {
        let disabled = TestimonialStore::new(reqwest::Client::new(), "", "");
        assert!(!disabled.enabled());
        assert_eq!(disabled.load_or_fallback(fallback_testimonials()).await.len(), 4);
        let err = disabled.insert(&TestimonialDraft::default()).await.unwrap_err();
        assert!(matches!(err, StoreError::Disabled));
    }

    #[actix_web::test]
    async fn insert_sends_normalized_draft() {
        let table = fake::Table::with_rows(Vec::new());
        let base = fake::start(table.clone());
        let draft = TestimonialDraft {
            name: " Ada ".into(),
            role: "".into(),
            content: "Spotless kitchen".into(),
            rating: 4,
        };
        store(&format!("{base}/")).insert(&draft).await.unwrap();

        let inserted = table.inserted();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0]["name"], "Ada");
        assert_eq!(inserted[0]["role"], "Customer");
        assert_eq!(inserted[0]["rating"], 4);
    }

    #[actix_web::test]
    async fn insert_failure_is_surfaced() {
        let base = fake::start(fake::Table::failing());
        let err = store(&base).insert(&TestimonialDraft::default()).await.unwrap_err();
        assert!(matches!(err, StoreError::Rejected(_)));
    }
}

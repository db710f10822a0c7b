//! Read-only site content: testimonials and sample assignments.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub name: String,
    pub university: String,
    pub country: String,
    pub subject: String,
    pub grade: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleAssignment {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub subject: String,
    pub word_count: u32,
    pub university: String,
    pub grade: String,
    /// Colour token for the sample's cover.
    pub cover_color: String,
    #[serde(default, alias = "pdfUrl")]
    pub preview_url: Option<String>,
}

#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn reviews(&self) -> Result<Vec<Review>>;
    async fn samples(&self) -> Result<Vec<SampleAssignment>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_deserialization() {
        let json = r#"{
            "id": 3,
            "type": "Dissertation",
            "title": "Supply Chain Resilience",
            "subject": "Business",
            "wordCount": 12000,
            "university": "University of Leeds",
            "grade": "Distinction",
            "coverColor": "from-cyan-500 to-blue-600",
            "pdfUrl": "https://cdn.example.com/samples/3.pdf"
        }"#;
        let sample: SampleAssignment = serde_json::from_str(json).unwrap();
        assert_eq!(sample.kind, "Dissertation");
        assert_eq!(sample.word_count, 12000);
        assert_eq!(
            sample.preview_url.as_deref(),
            Some("https://cdn.example.com/samples/3.pdf")
        );

        let without_preview = r#"{
            "id": 4,
            "type": "Essay",
            "title": "Kantian Ethics in Modern Medicine",
            "subject": "Philosophy",
            "wordCount": 2500,
            "university": "University of Glasgow",
            "grade": "A",
            "coverColor": "from-amber-500 to-orange-600"
        }"#;
        let sample: SampleAssignment = serde_json::from_str(without_preview).unwrap();
        assert!(sample.preview_url.is_none());
    }
}

// src/types/analysis.rs
//! Response types returned by the analysis service.
//!
//! The service replies with one JSON document per submission: the fields it
//! parsed out of the input plus the computed scores. Stored analyses carry
//! an `_id` and `created_at` stamp in addition.

use serde::{Deserialize, Serialize};

/// Root object returned by every analysis endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub parsed_data: ParsedData,
    pub analysis: Scores,

    /// Storage id, present once the service has persisted the analysis.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Original filename, echoed back for resume submissions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Submitted profile URL, echoed back for LinkedIn submissions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// ISO-8601 timestamp stamped by the service at save time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Parsed input fields. Exactly one variant per result, selected by the
/// `type` tag on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ParsedData {
    #[serde(rename = "resume")]
    Resume(ResumeData),
    // The service tags URL analyses "linkedin_url"; older stored rows used
    // the short form.
    #[serde(rename = "linkedin_url", alias = "linkedin")]
    LinkedIn(LinkedInData),
}

impl ParsedData {
    /// Short label used in list output.
    pub fn kind(&self) -> &'static str {
        match self {
            ParsedData::Resume(_) => "resume",
            ParsedData::LinkedIn(_) => "linkedin",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    /// Raw text extracted from the document. Carried but never rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkedInData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
    #[serde(default)]
    pub certificates: CertificatesAnalysis,
    #[serde(default)]
    pub activity: ActivityAnalysis,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificatesAnalysis {
    #[serde(default)]
    pub recent_certificates: Vec<Certificate>,
    #[serde(default)]
    pub total_certificates: u32,
    #[serde(default)]
    pub trending_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    pub name: String,
    pub skill: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityAnalysis {
    #[serde(default)]
    pub post_frequency: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_quality: Option<String>,
}

/// Computed scores, 0-100.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scores {
    #[serde(default)]
    pub overall_score: f64,
    #[serde(default)]
    pub detailed_scores: DetailedScores,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Named sub-scores. The service populates one key set for resume results
/// and another for LinkedIn results, so every field is optional here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetailedScores {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completeness_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_completeness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_optimization: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professional_branding: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_result_deserializes() {
        let body = serde_json::json!({
            "parsed_data": {
                "type": "resume",
                "email": "jane@example.com",
                "phone": "+41 79 000 00 00",
                "skills": ["rust", "sql"],
                "education": ["MSc Computer Science"]
            },
            "analysis": {
                "overall_score": 82.5,
                "detailed_scores": {
                    "technical_score": 90.0,
                    "experience_score": 75.0,
                    "education_score": 80.0,
                    "completeness_score": 85.0
                },
                "recommendations": ["Highlight more work experience and achievements"]
            },
            "filename": "jane_cv.pdf",
            "_id": "3f1c",
            "created_at": "2026-01-15T09:30:00.120000"
        });

        let result: AnalysisResult = serde_json::from_value(body).unwrap();
        match &result.parsed_data {
            ParsedData::Resume(data) => {
                assert_eq!(data.email.as_deref(), Some("jane@example.com"));
                assert_eq!(data.skills.len(), 2);
            }
            ParsedData::LinkedIn(_) => panic!("expected resume variant"),
        }
        assert_eq!(result.id.as_deref(), Some("3f1c"));
        assert_eq!(result.analysis.detailed_scores.technical_score, Some(90.0));
        assert!(result.analysis.detailed_scores.profile_completeness.is_none());
    }

    #[test]
    fn test_linkedin_result_accepts_both_tags() {
        for tag in ["linkedin_url", "linkedin"] {
            let body = serde_json::json!({
                "parsed_data": {
                    "type": tag,
                    "profile_url": "https://linkedin.com/in/jane",
                    "certificates": {
                        "recent_certificates": [
                            {"name": "AWS SA", "skill": "cloud", "date": "2025-11"}
                        ],
                        "total_certificates": 4,
                        "trending_skills": ["kubernetes"]
                    },
                    "activity": {
                        "post_frequency": 3,
                        "engagement_level": "Medium",
                        "content_quality": "High"
                    }
                },
                "analysis": {
                    "overall_score": 64.0,
                    "detailed_scores": {"profile_completeness": 70.0}
                }
            });

            let result: AnalysisResult = serde_json::from_value(body).unwrap();
            match &result.parsed_data {
                ParsedData::LinkedIn(data) => {
                    assert_eq!(data.certificates.total_certificates, 4);
                    assert_eq!(data.activity.post_frequency, 3);
                }
                ParsedData::Resume(_) => panic!("expected linkedin variant for tag {tag}"),
            }
            assert!(result.analysis.recommendations.is_empty());
        }
    }

    #[test]
    fn test_missing_optional_sections_default() {
        let body = serde_json::json!({
            "parsed_data": {"type": "linkedin_url"},
            "analysis": {"overall_score": 50.0}
        });

        let result: AnalysisResult = serde_json::from_value(body).unwrap();
        match &result.parsed_data {
            ParsedData::LinkedIn(data) => {
                assert!(data.certificates.recent_certificates.is_empty());
                assert_eq!(data.activity.post_frequency, 0);
                assert!(data.activity.engagement_level.is_none());
            }
            ParsedData::Resume(_) => panic!("expected linkedin variant"),
        }
    }
}

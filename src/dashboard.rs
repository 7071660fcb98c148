// src/dashboard.rs
//! Renders an analysis result as a styled terminal dashboard.
//!
//! Pure string rendering: callers own stdout. Colors degrade to plain text
//! when the stream is not a terminal.

use chrono::{DateTime, NaiveDateTime};
use console::{style, Emoji, StyledObject};
use std::fmt::Write;

use crate::types::{AnalysisResult, DetailedScores, LinkedInData, ParsedData, ResumeData, Scores};

pub const TROPHY: Emoji = Emoji("🏆", "*");
pub const LAPTOP: Emoji = Emoji("💻", ">");
pub const BRIEFCASE: Emoji = Emoji("💼", ">");
pub const GRAD_CAP: Emoji = Emoji("🎓", ">");
pub const CHECK: Emoji = Emoji("✓", "+");
pub const MAIL: Emoji = Emoji("📧", "@");
pub const TOOLS: Emoji = Emoji("🛠️", "#");
pub const CHART: Emoji = Emoji("📈", "~");
pub const FIRE: Emoji = Emoji("🔥", "^");
pub const BULB: Emoji = Emoji("💡", "!");
pub const PAGE: Emoji = Emoji("📄", "[resume]");
pub const LINK: Emoji = Emoji("🔗", "[linkedin]");
pub const PARTY: Emoji = Emoji("🎉", "");

const NO_RECOMMENDATIONS_MESSAGE: &str =
    "Excellent! Your profile looks great. Keep up the good work!";

/// Display bucket for a score value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    Warning,
    Poor,
}

pub fn score_band(score: f64) -> ScoreBand {
    if score >= 80.0 {
        ScoreBand::Good
    } else if score >= 60.0 {
        ScoreBand::Warning
    } else {
        ScoreBand::Poor
    }
}

fn paint(score: i64) -> StyledObject<i64> {
    match score_band(score as f64) {
        ScoreBand::Good => style(score).green().bold(),
        ScoreBand::Warning => style(score).yellow().bold(),
        ScoreBand::Poor => style(score).red().bold(),
    }
}

// Each card prefers its resume-variant key and falls back to the LinkedIn
// one. A score of exactly 0 falls through to the fallback key as well;
// that matches the service contract, which never distinguishes a genuine
// zero from an absent key.
fn card_score(primary: Option<f64>, fallback: Option<f64>) -> i64 {
    [primary, fallback]
        .into_iter()
        .flatten()
        .find(|v| *v != 0.0)
        .unwrap_or(0.0)
        .round() as i64
}

fn detailed_cards(scores: &DetailedScores) -> [(String, i64); 4] {
    [
        (
            format!("{LAPTOP} Technical Skills"),
            card_score(scores.technical_score, scores.profile_completeness),
        ),
        (
            format!("{BRIEFCASE} Experience"),
            card_score(scores.experience_score, scores.url_optimization),
        ),
        (
            format!("{GRAD_CAP} Education"),
            card_score(scores.education_score, scores.accessibility),
        ),
        (
            format!("{CHECK} Completeness"),
            card_score(scores.completeness_score, scores.professional_branding),
        ),
    ]
}

/// Render the full dashboard for one analysis.
pub fn render(analysis: &AnalysisResult) -> String {
    let mut out = String::new();
    let scores = &analysis.analysis;

    let kind = match &analysis.parsed_data {
        ParsedData::Resume(_) => format!("{PAGE} Resume Analysis"),
        ParsedData::LinkedIn(_) => format!("{LINK} LinkedIn Analysis"),
    };
    let _ = writeln!(out, "{}", style("Your Professional Analysis").bold());
    let _ = writeln!(out, "{}", style(kind).dim());
    let _ = writeln!(out);

    let overall = scores.overall_score.round() as i64;
    let _ = writeln!(out, "{TROPHY} Overall Score: {}", paint(overall));
    let _ = writeln!(out);

    for (title, score) in detailed_cards(&scores.detailed_scores) {
        let _ = writeln!(out, "  {:<22} {:>3}", title, paint(score));
    }
    let _ = writeln!(out);

    match &analysis.parsed_data {
        ParsedData::Resume(data) => render_resume(&mut out, data),
        ParsedData::LinkedIn(data) => render_linkedin(&mut out, data),
    }

    render_recommendations(&mut out, scores);

    out
}

fn render_resume(out: &mut String, data: &ResumeData) {
    let _ = writeln!(out, "{MAIL} Contact Information");
    let _ = writeln!(out, "  Email: {}", data.email.as_deref().unwrap_or("Not found"));
    let _ = writeln!(out, "  Phone: {}", data.phone.as_deref().unwrap_or("Not found"));
    let _ = writeln!(out);

    let _ = writeln!(out, "{TOOLS} Skills Found ({})", data.skills.len());
    if data.skills.is_empty() {
        let _ = writeln!(out, "  No skills detected");
    } else {
        let _ = writeln!(out, "  {}", data.skills.join(" · "));
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{GRAD_CAP} Education");
    if data.education.is_empty() {
        let _ = writeln!(out, "  No education information found");
    } else {
        for entry in &data.education {
            let _ = writeln!(out, "  - {entry}");
        }
    }
    let _ = writeln!(out);
}

fn render_linkedin(out: &mut String, data: &LinkedInData) {
    let _ = writeln!(out, "{TROPHY} Recent Certificates");
    if data.certificates.recent_certificates.is_empty() {
        let _ = writeln!(out, "  No recent certificates found");
    } else {
        for cert in &data.certificates.recent_certificates {
            let _ = writeln!(out, "  - {} - {} ({})", style(&cert.name).bold(), cert.skill, cert.date);
        }
    }
    let _ = writeln!(
        out,
        "  Total Certificates: {}",
        data.certificates.total_certificates
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "{CHART} Activity Analysis");
    let _ = writeln!(
        out,
        "  Post Frequency: {} posts (last 30 days)",
        data.activity.post_frequency
    );
    let _ = writeln!(
        out,
        "  Engagement Level: {}",
        data.activity.engagement_level.as_deref().unwrap_or("Unknown")
    );
    let _ = writeln!(
        out,
        "  Content Quality: {}",
        data.activity.content_quality.as_deref().unwrap_or("Unknown")
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "{FIRE} Trending Skills");
    if data.certificates.trending_skills.is_empty() {
        let _ = writeln!(out, "  No trending skills identified");
    } else {
        let _ = writeln!(out, "  {}", data.certificates.trending_skills.join(" · "));
    }
    let _ = writeln!(out);
}

fn render_recommendations(out: &mut String, scores: &Scores) {
    let _ = writeln!(out, "{BULB} Personalized Recommendations");
    if scores.recommendations.is_empty() {
        let _ = writeln!(out, "  {PARTY} {NO_RECOMMENDATIONS_MESSAGE}");
    } else {
        for (i, rec) in scores.recommendations.iter().enumerate() {
            let _ = writeln!(out, "  {}. {rec}", i + 1);
        }
    }
}

/// Render the stored-analyses list as an aligned table.
pub fn render_history(analyses: &[AnalysisResult]) -> String {
    if analyses.is_empty() {
        return "No stored analyses yet.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<38} {:<10} {:>7}  {:<17}",
        "ID", "Type", "Score", "Submitted"
    );
    let _ = writeln!(out, "{}", "-".repeat(76));

    for analysis in analyses {
        let _ = writeln!(
            out,
            "{:<38} {:<10} {:>7}  {:<17}",
            analysis.id.as_deref().unwrap_or("-"),
            analysis.parsed_data.kind(),
            analysis.analysis.overall_score.round() as i64,
            format_timestamp(analysis.created_at.as_deref()),
        );
    }

    out
}

// The service stamps naive UTC ISO-8601 timestamps; accept RFC 3339 too and
// fall back to the raw string.
fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "-".to_string();
    };

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        })
        .unwrap_or_else(|_| raw.to_string())
}

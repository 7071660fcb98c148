// src/types/mod.rs
//! Wire types for the analysis service API

pub mod analysis;

pub use analysis::{
    ActivityAnalysis, AnalysisResult, Certificate, CertificatesAnalysis, DetailedScores,
    LinkedInData, ParsedData, ResumeData, Scores,
};

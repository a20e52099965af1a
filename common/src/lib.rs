//! Hair Report Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod form;
pub mod report;
pub mod api;
pub mod busy;
pub mod platform;
pub mod submission;
pub mod export;

pub use types::{
    Analyte, ApiEnvelope, FullAnalysisResponse, HairAnalysisInput, HairAnalysisResult,
    HealthIndicator, HealthStatus, HeavyMetal, Level, MetalLevel, Mineral, PersonalInfo,
    TestLevel, TextAnalysisResponse,
};
pub use error::{Error, Result};
pub use form::{FieldErrors, FormDraft, FormField, SpecialOption};
pub use report::{AnalysisReport, ReportMode};
pub use api::{AnalysisApi, Endpoint};
pub use busy::BusyGuard;
pub use submission::{submit, SubmitError};

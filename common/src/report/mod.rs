//! 解析結果（レポート）モデル
//!
//! 2種類のレスポンスはどちらも文字列だけで自己記述的ではないため、
//! 送信時に決めたモードをタグとして持たせる。

pub mod legacy;
pub mod standard;

use crate::types::{FullAnalysisResponse, HairAnalysisResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 結果ページの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    /// 旧形式（`/simple/analyze`）
    #[default]
    Legacy,
    /// 標準7段階（`/api/hair-analysis/full`）
    Standard,
}

impl ReportMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportMode::Legacy => "legacy",
            ReportMode::Standard => "standard",
        }
    }
}

impl fmt::Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 送信結果（モードで判別されたレポート）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisReport {
    Legacy(HairAnalysisResult),
    Standard(FullAnalysisResponse),
}

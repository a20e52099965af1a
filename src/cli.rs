use clap::{Parser, Subcommand};
use hair_report_common::report::ReportMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hair-report")]
#[command(about = "큐모발검사 종합멘트 생성 CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// バックエンドのベースURL（環境変数・設定より優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// バックエンドの稼働確認
    Health,

    /// テストデータを取得
    TestData {
        /// 保存先JSON（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 検査結果を対話的に入力してJSONを保存
    Input {
        /// 出力JSONファイル
        #[arg(short, long, default_value = "hair-input.json")]
        output: PathBuf,
    },

    /// 入力JSONを検証
    Validate {
        /// 入力JSONファイル
        #[arg(required = true)]
        input: PathBuf,
    },

    /// 解析してレポートを出力
    Analyze {
        /// 入力JSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 解析モード (legacy/standard/simple/prompt-based)
        #[arg(short, long, default_value = "legacy")]
        mode: AnalyzeMode,

        /// 出力ファイル/ディレクトリ（省略時は画面表示のみ）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (text/pdf/both)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// PDF用TTFフォント（設定より優先）
        #[arg(long)]
        font: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// ベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// PDF用フォントを設定
        #[arg(long)]
        set_font: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 解析エンドポイントの選択
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnalyzeMode {
    /// `/simple/analyze`
    #[default]
    Legacy,
    /// `/api/hair-analysis/full`
    Standard,
    /// `/api/hair-analysis/simple`
    Simple,
    /// `/api/hair-analysis/prompt-based`
    PromptBased,
}

impl AnalyzeMode {
    /// Webフォームと共通のタグ付きレポートになるモード
    pub fn report_mode(self) -> Option<ReportMode> {
        match self {
            AnalyzeMode::Legacy => Some(ReportMode::Legacy),
            AnalyzeMode::Standard => Some(ReportMode::Standard),
            AnalyzeMode::Simple | AnalyzeMode::PromptBased => None,
        }
    }
}

impl std::str::FromStr for AnalyzeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legacy" | "l" => Ok(AnalyzeMode::Legacy),
            "standard" | "std" | "s" => Ok(AnalyzeMode::Standard),
            "simple" => Ok(AnalyzeMode::Simple),
            "prompt-based" | "prompt" | "p" => Ok(AnalyzeMode::PromptBased),
            _ => Err(format!(
                "Unknown mode: {}. Use legacy, standard, simple, or prompt-based",
                s
            )),
        }
    }
}

impl std::fmt::Display for AnalyzeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalyzeMode::Legacy => write!(f, "legacy"),
            AnalyzeMode::Standard => write!(f, "standard"),
            AnalyzeMode::Simple => write!(f, "simple"),
            AnalyzeMode::PromptBased => write!(f, "prompt-based"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Pdf,
    Both,
}

impl OutputFormat {
    pub fn wants_text(self) -> bool {
        matches!(self, OutputFormat::Text | OutputFormat::Both)
    }

    pub fn wants_pdf(self) -> bool {
        matches!(self, OutputFormat::Pdf | OutputFormat::Both)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "pdf" => Ok(OutputFormat::Pdf),
            "both" => Ok(OutputFormat::Both),
            _ => Err(format!("Unknown format: {}. Use text, pdf, or both", s)),
        }
    }
}

//! 処理サマリー
//!
//! 実行全体で1つだけ作られ、行ごとの結果を追記していく。
//! 件数の数え方:
//! - 処理行数 = ヘッダーを除いたデータ行数（列不足の行も含む）
//! - 生成成功数 = 処理行数 − 失敗数

use serde::Serialize;
use std::fmt;

/// 失敗の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// どの候補ファイルも存在しない
    NotFound,
    /// 読み込み・変換・保存中のエラー
    ProcessingError,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::NotFound => write!(f, "not found"),
            FailureKind::ProcessingError => write!(f, "processing error"),
        }
    }
}

/// 1行分の失敗記録
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Failure {
    pub base_filename: String,
    pub kind: FailureKind,
    /// 元のエラーメッセージ（NotFound の場合は空）
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.base_filename, self.kind)
    }
}

/// 列不足でスキップした行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MalformedLine {
    /// 1始まりの行番号（ヘッダーが1行目）
    pub line_number: usize,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    attempted: usize,
    failures: Vec<Failure>,
    malformed: Vec<MalformedLine>,
    /// 読み込みが途中で止まった場合の理由
    #[serde(skip_serializing_if = "Option::is_none")]
    aborted: Option<String>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// データ行を1行読んだ
    pub fn record_line(&mut self) {
        self.attempted += 1;
    }

    pub fn record_malformed(&mut self, line_number: usize, content: &str) {
        self.malformed.push(MalformedLine {
            line_number,
            content: content.to_string(),
        });
    }

    pub fn record_not_found(&mut self, base_filename: &str) {
        self.failures.push(Failure {
            base_filename: base_filename.to_string(),
            kind: FailureKind::NotFound,
            message: String::new(),
        });
    }

    pub fn record_processing_error(&mut self, base_filename: &str, message: impl Into<String>) {
        self.failures.push(Failure {
            base_filename: base_filename.to_string(),
            kind: FailureKind::ProcessingError,
            message: message.into(),
        });
    }

    pub fn record_abort(&mut self, reason: impl Into<String>) {
        self.aborted = Some(reason.into());
    }

    pub fn attempted(&self) -> usize {
        self.attempted
    }

    pub fn succeeded(&self) -> usize {
        self.attempted.saturating_sub(self.failures.len())
    }

    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    pub fn malformed(&self) -> &[MalformedLine] {
        &self.malformed
    }

    pub fn aborted(&self) -> Option<&str> {
        self.aborted.as_deref()
    }

    /// コンソール表示用のサマリー文字列
    pub fn render(&self) -> String {
        let mut lines = vec![
            String::new(),
            "--- 处理总结 ---".to_string(),
            format!("尝试处理行数: {}", self.attempted()),
            format!("成功生成文件数: {}", self.succeeded()),
        ];

        if !self.malformed.is_empty() {
            lines.push(format!("数据不完整跳过的行数: {}", self.malformed.len()));
        }

        if let Some(reason) = &self.aborted {
            lines.push(format!("CSV 读取中途中断: {}", reason));
        }

        lines.push(String::new());
        if self.failures.is_empty() {
            lines.push("所有找到的文件均已尝试处理完成。".to_string());
        } else {
            lines.push("以下文件未能找到或处理时发生错误：".to_string());
            lines.extend(self.failures.iter().map(|f| format!("- {}", f)));
        }

        lines.join("\n")
    }
}

//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("列数不足: {found} 列（至少需要 {required} 列）")]
    TooFewColumns { found: usize, required: usize },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

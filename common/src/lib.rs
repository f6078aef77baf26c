//! Catalog Album Common Library
//!
//! 画像処理・ファイルI/Oに依存しない型とユーティリティ
//! （CSV行の分割、表レイアウト、出力ファイル名の規則、処理サマリー）

pub mod types;
pub mod layout;
pub mod error;
pub mod parser;
pub mod naming;
pub mod summary;

pub use types::CatalogRow;
pub use layout::{TableLayout, LabelField, LABEL_FIELDS};
pub use error::{Error, Result};
pub use parser::{parse_row, split_line};
pub use naming::{candidate_names, main_image_file_name, output_file_name};
pub use summary::{Failure, FailureKind, RunSummary};

//! CSVから読み込む商品行の型定義

use serde::{Deserialize, Serialize};

/// CSVの1データ行（列の位置で対応付け）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRow {
    /// 拡張子なしの基準ファイル名（相対パスを含んでもよい）
    pub base_filename: String,

    pub brand: String,        // 品牌

    pub name: String,         // 名称

    pub model: String,        // 型号
}

impl CatalogRow {
    /// 表の各行に描画する値を、ラベル順（品牌・名称・型号）で返す
    pub fn table_values(&self) -> [&str; 3] {
        [&self.brand, &self.name, &self.model]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_row_default() {
        let row = CatalogRow::default();
        assert_eq!(row.base_filename, "");
        assert_eq!(row.table_values(), ["", "", ""]);
    }

    #[test]
    fn test_table_values_order() {
        let row = CatalogRow {
            base_filename: "cam01".to_string(),
            brand: "Acme".to_string(),
            name: "ProCam".to_string(),
            model: "X100".to_string(),
        };
        assert_eq!(row.table_values(), ["Acme", "ProCam", "X100"]);
    }

    #[test]
    fn test_catalog_row_serialize() {
        let row = CatalogRow {
            base_filename: "cam01".to_string(),
            brand: "Acme".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_string(&row).expect("シリアライズ失敗");
        assert!(json.contains("\"baseFilename\":\"cam01\""));
        assert!(json.contains("\"brand\":\"Acme\""));
    }
}

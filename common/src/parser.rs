//! CSV行パーサー
//!
//! `list.csv` の1行を列に分割し、CatalogRow に変換する。
//! クォートは「両端が `"` ならその1組を外す」だけの簡易処理で、
//! クォート内のカンマやエスケープには対応しない。

use crate::error::{Error, Result};
use crate::types::CatalogRow;

/// 1行に必要な最小列数（基準ファイル名・品牌・名称・型号）
pub const REQUIRED_COLUMNS: usize = 4;

/// 空白とみなす文字
const WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\x0c', '\x0b'];

/// 1行をカンマで分割し、各列のクォート除去とトリムを行う
///
/// # Arguments
/// * `line` - CSVの1行（改行を含まない）
///
/// # Returns
/// 列のリスト。末尾のカンマは空の列を1つ生む。
///
/// # Examples
/// ```
/// use catalog_album_common::split_line;
///
/// let fields = split_line(r#""cam01", Acme ,"ProCam","X100""#);
/// assert_eq!(fields, vec!["cam01", "Acme", "ProCam", "X100"]);
/// ```
pub fn split_line(line: &str) -> Vec<String> {
    line.split(',')
        .map(|token| strip_quotes(token).trim_matches(WHITESPACE).to_string())
        .collect()
}

/// 両端が `"` の場合のみ、その1組を外す
fn strip_quotes(token: &str) -> &str {
    if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
        &token[1..token.len() - 1]
    } else {
        token
    }
}

/// 1行をパースして CatalogRow を返す
///
/// 5列目以降は無視する。
///
/// # Returns
/// * `Ok(CatalogRow)` - パース成功
/// * `Err(Error::TooFewColumns)` - 列数が4未満
pub fn parse_row(line: &str) -> Result<CatalogRow> {
    let fields = split_line(line);
    if fields.len() < REQUIRED_COLUMNS {
        return Err(Error::TooFewColumns {
            found: fields.len(),
            required: REQUIRED_COLUMNS,
        });
    }

    let mut fields = fields.into_iter();
    let mut next = || fields.next().unwrap_or_default();

    Ok(CatalogRow {
        base_filename: next(),
        brand: next(),
        name: next(),
        model: next(),
    })
}

/// ヘッダー行の先頭に付いたUTF-8 BOMを取り除く
pub fn strip_bom(line: &str) -> &str {
    line.strip_prefix('\u{feff}').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain() {
        assert_eq!(split_line("a,b,c,d"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_split_strips_quotes_and_whitespace() {
        let fields = split_line(r#""cam01","Acme","ProCam","X100""#);
        assert_eq!(fields, vec!["cam01", "Acme", "ProCam", "X100"]);

        let fields = split_line("  cam01 ,\tAcme, Pro Cam ,X100  ");
        assert_eq!(fields, vec!["cam01", "Acme", "Pro Cam", "X100"]);
    }

    #[test]
    fn test_split_quote_then_trim() {
        // クォートを外してから空白を除去する
        assert_eq!(split_line(r#"" spaced ""#), vec!["spaced"]);
        // 先頭が空白の場合はクォートとして扱わない
        assert_eq!(split_line(r#" "quoted""#), vec![r#""quoted""#]);
    }

    #[test]
    fn test_split_single_quote_char_kept() {
        assert_eq!(split_line(r#"""#), vec![r#"""#]);
        assert_eq!(split_line(r#""""#), vec![""]);
    }

    #[test]
    fn test_split_trailing_comma() {
        assert_eq!(split_line("a,b,c,"), vec!["a", "b", "c", ""]);
    }

    #[test]
    fn test_split_empty_line() {
        assert_eq!(split_line(""), vec![""]);
    }

    #[test]
    fn test_parse_row() {
        let row = parse_row(r#""cam01","Acme","ProCam","X100""#).unwrap();
        assert_eq!(row.base_filename, "cam01");
        assert_eq!(row.brand, "Acme");
        assert_eq!(row.name, "ProCam");
        assert_eq!(row.model, "X100");
    }

    #[test]
    fn test_parse_row_extra_columns_ignored() {
        let row = parse_row("cam01,Acme,ProCam,X100,extra,more").unwrap();
        assert_eq!(row.model, "X100");
    }

    #[test]
    fn test_parse_row_too_few_columns() {
        let err = parse_row("cam01,Acme,ProCam").unwrap_err();
        assert!(matches!(err, Error::TooFewColumns { found: 3, required: 4 }));

        let err = parse_row("").unwrap_err();
        assert!(matches!(err, Error::TooFewColumns { found: 1, .. }));
    }

    #[test]
    fn test_parse_row_cjk_values() {
        let row = parse_row("产品/相机01,佳能,数码相机,EOS R5").unwrap();
        assert_eq!(row.base_filename, "产品/相机01");
        assert_eq!(row.brand, "佳能");
        assert_eq!(row.model, "EOS R5");
    }

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom("\u{feff}filename,brand"), "filename,brand");
        assert_eq!(strip_bom("filename,brand"), "filename,brand");
    }
}

//! Spreadsheet export.
//!
//! Produces a single `뉴스클리핑` sheet with columns 그룹, 매체명, 제목, PICK and
//! 게시일. The title cell is a `HYPERLINK` formula pointing at the article; this
//! relies on titles never containing double quotes, which the assembler
//! guarantees. Rows are filled with their group colour, the header row is
//! frozen and an autofilter covers the whole table.

use crate::models::{EnrichedRecord, group_color, group_label};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, XlsxError};
use std::collections::HashMap;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

pub const SHEET_NAME: &str = "뉴스클리핑";

const COLUMNS: [(&str, f64); 5] = [
    ("그룹", 8.0),
    ("매체명", 16.0),
    ("제목", 60.0),
    ("PICK", 6.0),
    ("게시일", 18.0),
];

/// `=HYPERLINK("<link>", "<title>")` for a record.
pub fn hyperlink_formula(record: &EnrichedRecord) -> String {
    format!(
        r#"=HYPERLINK("{}", "{}")"#,
        record.link.replace('"', "\"\""),
        record.title.replace('"', "'")
    )
}

/// Build the workbook and return the `.xlsx` bytes.
pub fn build_workbook(records: &[EnrichedRecord]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new()
        .set_bold()
        .set_background_color("#2C3E50")
        .set_font_color("#FFFFFF")
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);

    for (col, (name, width)) in COLUMNS.iter().enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, *name, &header_format)?;
        worksheet.set_column_width(col, *width)?;
    }

    let mut row_formats: HashMap<&'static str, Format> = HashMap::new();
    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;
        let color = group_color(record.group);
        let format = row_formats.entry(color).or_insert_with(|| {
            Format::new()
                .set_background_color(color)
                .set_border(FormatBorder::Thin)
                .set_align(FormatAlign::VerticalCenter)
        });

        let group = if record.group.is_some() {
            group_label(record.group)
        } else {
            ""
        };
        worksheet.write_string_with_format(row, 0, group, format)?;
        worksheet.write_string_with_format(row, 1, &record.publisher, format)?;
        worksheet.write_formula_with_format(row, 2, hyperlink_formula(record).as_str(), format)?;
        worksheet.write_string_with_format(row, 3, record.pick_label(), format)?;
        worksheet.write_string_with_format(row, 4, record.published_display(), format)?;
    }

    worksheet.set_freeze_panes(1, 0)?;
    worksheet.autofilter(0, 0, records.len() as u32, (COLUMNS.len() - 1) as u16)?;

    workbook.save_to_buffer()
}

/// Write the workbook to `{output_dir}/{file_stem}.xlsx`.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir, file_stem = %file_stem))]
pub async fn write_workbook(
    records: &[EnrichedRecord],
    output_dir: &str,
    file_stem: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let bytes = build_workbook(records)?;
    fs::create_dir_all(output_dir).await?;
    let path = Path::new(output_dir).join(format!("{file_stem}.xlsx"));
    fs::write(&path, &bytes).await?;
    info!(path = %path.display(), rows = records.len(), bytes = bytes.len(), "Wrote spreadsheet");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::assemble;
    use crate::models::EnrichmentResult;
    use crate::test_support::{naver_link, raw_article};

    fn records() -> Vec<EnrichedRecord> {
        let items = vec![
            raw_article(&naver_link("001", 1), "반도체 \"수출\" 회복", 0),
            raw_article("https://m.example-domain.co.kr/article/1", "지역", 60),
        ];
        assemble(
            &items,
            &[
                EnrichmentResult::unpicked("연합뉴스"),
                EnrichmentResult::unpicked("EXAMPLE-DOMAIN"),
            ],
        )
    }

    #[test]
    fn test_hyperlink_formula() {
        let records = records();
        assert_eq!(
            hyperlink_formula(&records[0]),
            r#"=HYPERLINK("https://n.news.naver.com/mnews/article/001/0000000001", "반도체 '수출' 회복")"#
        );
    }

    #[test]
    fn test_build_workbook_is_xlsx() {
        let bytes = build_workbook(&records()).unwrap();
        // xlsx files are zip archives.
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_build_empty_workbook() {
        assert!(build_workbook(&[]).is_ok());
    }

    #[tokio::test]
    async fn test_write_workbook() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_workbook(&records(), tmp.path().to_str().unwrap(), "clip")
            .await
            .unwrap();
        assert!(path.ends_with("clip.xlsx"));
        assert!(std::fs::metadata(path).unwrap().len() > 0);
    }
}

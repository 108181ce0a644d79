//! Export of the assembled clipping.
//!
//! Every writer consumes the final records read-only:
//!
//! - [`html`]: Standalone HTML table with group badges and PICK labels
//! - [`xlsx`]: Formatted spreadsheet with `HYPERLINK` title formulas
//! - [`json`]: Serialized [`Clipping`](crate::models::Clipping) for other tools
//!
//! # Output Structure
//!
//! All files of one run share a stem built from the query and the run time:
//!
//! ```text
//! output_dir/
//! ├── naver_news_패션_20250506_090507.html
//! ├── naver_news_패션_20250506_090507.xlsx
//! └── naver_news_패션_20250506_090507.json
//! ```

pub mod html;
pub mod json;
pub mod xlsx;

// responses/xlsx.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Workbook bytes as a download named `{stem}.xlsx`.
pub fn xlsx_response(buffer: Vec<u8>, stem: &str) -> ResultResp {
    let filename = format!("{}.xlsx", safe_file_stem(stem));

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", XLSX_CONTENT_TYPE)
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from(buffer))
        .map_err(|_| ServerError::InternalError)
}

/// Destination names end up in a header; keep them to `[a-z0-9_-]`.
fn safe_file_stem(stem: &str) -> String {
    let cleaned: String = stem
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();

    if cleaned.trim_matches('_').is_empty() {
        "hotels".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_stem_is_header_safe() {
        assert_eq!(safe_file_stem("hotels_punta-cana"), "hotels_punta-cana");
        assert_eq!(safe_file_stem("Cancún \"beach\""), "canc_n__beach_");
        assert_eq!(safe_file_stem("  "), "hotels");
    }
}

use crate::domain::hotel::Hotel;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

const HEADERS: [&str; 13] = [
    "ID",
    "Hotel",
    "City",
    "Stars",
    "Google Rating",
    "Reviews",
    "Price From",
    "Price To",
    "Price Avg",
    "Drinks 24h",
    "Snacks 24h",
    "Spa",
    "Adults Only",
];

/// Exports the hotels in the order given, one row each.
pub fn export_hotels_xlsx(hotels: &[&Hotel], destination: &str) -> ResultResp {
    let buffer = build_workbook(hotels)
        .map_err(|e| ServerError::XlsxError(format!("Failed to build workbook: {e}")))?;

    let stem = if destination.is_empty() {
        "hotels".to_string()
    } else {
        format!("hotels_{destination}")
    };
    xlsx_response(buffer, &stem)
}

pub fn build_workbook(hotels: &[&Hotel]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (i, hotel) in hotels.iter().enumerate() {
        write_row(worksheet, (i + 1) as u32, hotel)?;
    }

    workbook.save_to_buffer()
}

fn write_row(ws: &mut Worksheet, r: u32, hotel: &Hotel) -> Result<(), XlsxError> {
    ws.write_string(r, 0, &hotel.id)?;
    ws.write_string(r, 1, &hotel.name)?;
    ws.write_string(r, 2, &hotel.city)?;

    // Missing numbers stay blank.
    if let Some(stars) = hotel.stars {
        ws.write_number(r, 3, stars)?;
    }
    if let Some(rating) = hotel.google_rating {
        ws.write_number(r, 4, rating)?;
    }
    if let Some(reviews) = hotel.review_count {
        ws.write_number(r, 5, reviews as f64)?;
    }

    ws.write_number(r, 6, hotel.price_range.min)?;
    ws.write_number(r, 7, hotel.price_range.max)?;
    ws.write_number(r, 8, hotel.price_range.avg)?;

    let a = &hotel.amenities;
    ws.write_string(r, 9, a.drinks24h.label())?;
    ws.write_string(r, 10, a.snacks24h.label())?;
    ws.write_string(r, 11, a.spa.label())?;
    ws.write_string(r, 12, a.adult_only.label())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::utils::two_hotel_dataset;

    #[test]
    fn builds_a_workbook_for_any_view() {
        let dataset = two_hotel_dataset();
        let refs: Vec<&Hotel> = dataset.hotels.iter().collect();

        let full = build_workbook(&refs).unwrap();
        let empty = build_workbook(&[]).unwrap();

        // xlsx files are zip archives
        assert!(full.starts_with(b"PK"));
        assert!(empty.starts_with(b"PK"));
    }
}

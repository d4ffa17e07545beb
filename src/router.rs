use crate::domain::hotel::{Dataset, Hotel, Metadata};
use crate::domain::PriceBounds;
use crate::errors::ServerError;
use crate::query::{apply_params, hotel_id_from_path, parse_query};
use crate::responses::{html_response, json_response, ResultResp};
use crate::spreadsheets::export_hotels_xlsx;
use crate::templates::pages::{hotel_page, hotels_page, HotelsVm};
use crate::viewer::HotelViewer;
use astra::Request;
use serde::Serialize;
use std::sync::Arc;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let query = req.uri().query();

    log::debug!("{method} {path}");

    match (method, path) {
        ("GET", "/") => {
            let viewer = viewer_for(state, query)?;
            let hotels = viewer.filtered_sorted()?;
            log::debug!("{} of {} hotels match", hotels.len(), state.dataset.hotels.len());

            let vm = HotelsVm {
                metadata: &state.dataset.metadata,
                criteria: viewer.criteria()?,
                bounds: viewer.bounds()?,
                total: state.dataset.hotels.len(),
                has_active_filters: viewer.has_active_filters()?,
                hotels,
            };
            html_response(hotels_page(&vm))
        }
        ("GET", "/api/hotels") => {
            let viewer = viewer_for(state, query)?;
            let hotels = viewer.filtered_sorted()?;
            json_response(&JsonView {
                metadata: &state.dataset.metadata,
                bounds: viewer.bounds()?,
                count: viewer.count()?,
                has_active_filters: viewer.has_active_filters()?,
                hotels,
            })
        }
        ("GET", "/export.xlsx") => {
            let viewer = viewer_for(state, query)?;
            let hotels = viewer.filtered_sorted()?;
            log::info!("Exporting {} hotels to xlsx", hotels.len());
            export_hotels_xlsx(&hotels, &state.dataset.metadata.destination)
        }
        ("GET", p) if p.starts_with("/hotels/") => {
            let id = hotel_id_from_path(p.trim_start_matches("/hotels/"));
            let hotel = state.dataset.find(&id).ok_or(ServerError::NotFound)?;
            html_response(hotel_page(hotel, &state.dataset.metadata))
        }
        _ => Err(ServerError::NotFound),
    }
}

/// Fresh session over the shared dataset, configured from the query string.
fn viewer_for(state: &AppState, query: Option<&str>) -> Result<HotelViewer, ServerError> {
    let mut viewer = HotelViewer::with_dataset(Arc::clone(&state.dataset));
    apply_params(&mut viewer, &parse_query(query))?;
    Ok(viewer)
}

#[derive(Serialize)]
struct JsonView<'a> {
    metadata: &'a Metadata,
    bounds: PriceBounds,
    count: usize,
    has_active_filters: bool,
    hotels: Vec<&'a Hotel>,
}

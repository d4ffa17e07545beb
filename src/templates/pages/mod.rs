pub mod hotel;
pub mod hotels;

pub use hotel::hotel_page;
pub use hotels::{hotels_page, HotelsVm};

use crate::domain::criteria::{Amenity, FilterCriteria, SortDirection, SortKey};
use crate::domain::hotel::{Hotel, Metadata};
use crate::domain::PriceBounds;
use crate::query;
use crate::templates::components::{adult_only_badge, format_price, or_dash, presence_badge};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct HotelsVm<'a> {
    pub metadata: &'a Metadata,
    pub criteria: &'a FilterCriteria,
    pub bounds: PriceBounds,
    pub hotels: Vec<&'a Hotel>,
    pub total: usize,
    pub has_active_filters: bool,
}

pub fn hotels_page(vm: &HotelsVm) -> Markup {
    desktop_layout(
        "Hotels",
        vm.metadata,
        html! {
            main class="container" {
                (filter_form(vm))

                p class="summary" {
                    "Showing " strong { (vm.hotels.len()) } " of " (vm.total) " hotels"
                    " · price range " (format_price(vm.bounds.min)) " – " (format_price(vm.bounds.max))
                    " (avg " (format_price(vm.bounds.avg)) ")"
                }

                @if vm.hotels.is_empty() {
                    p class="empty" { "No hotels match these filters." }
                } @else {
                    (results_table(vm))
                }
            }
        },
    )
}

fn filter_form(vm: &HotelsVm) -> Markup {
    let criteria = vm.criteria;
    let price = criteria.price();
    let ratings = rating_options(criteria.min_rating());

    html! {
        form class="filters" method="get" action="/" {
            label {
                "Search"
                input type="search" name="q" value=(criteria.search()) placeholder="Hotel name";
            }
            label {
                "Min stars"
                select name="min_rating" {
                    @for rating in ratings {
                        option value=(rating) selected[criteria.min_rating() == rating] {
                            @if rating == 0.0 { "Any" } @else { (rating) "+" }
                        }
                    }
                }
            }
            label {
                "Price from"
                input type="number" name="price_min" value=(price.min)
                    min=(vm.bounds.min) max=(vm.bounds.max) step="1";
            }
            label {
                "to"
                input type="number" name="price_max" value=(price.max)
                    min=(vm.bounds.min) max=(vm.bounds.max) step="1";
            }
            @for amenity in Amenity::ALL {
                label {
                    input type="checkbox" name=(amenity.as_str()) value="1"
                        checked[criteria.requires(amenity)];
                    (amenity.label())
                }
            }
            input type="hidden" name="sort" value=(criteria.sort_key().as_str());
            input type="hidden" name="dir" value=(criteria.sort_direction().as_str());

            button type="submit" { "Apply" }
            @if vm.has_active_filters {
                a href="/" { "Reset" }
            } @else {
                a href="/" class="disabled" aria-disabled="true" { "Reset" }
            }
            a href=(format!("/export.xlsx?{}", query::to_query_string(criteria, &vm.bounds))) {
                "Download .xlsx"
            }
        }
    }
}

/// Whole stars 0 to 5, plus the current value when it is not one of them,
/// so resubmitting the form keeps it.
fn rating_options(current: f64) -> Vec<f64> {
    let mut options: Vec<f64> = (0..=5u8).map(f64::from).collect();
    if !options.contains(&current) {
        options.push(current);
        options.sort_by(f64::total_cmp);
    }
    options
}

fn results_table(vm: &HotelsVm) -> Markup {
    html! {
        table {
            thead {
                tr {
                    (sort_header(vm, SortKey::Name, "Hotel"))
                    th { "City" }
                    (sort_header(vm, SortKey::Stars, "Stars"))
                    (sort_header(vm, SortKey::Rating, "Google"))
                    (sort_header(vm, SortKey::Reviews, "Reviews"))
                    (sort_header(vm, SortKey::Price, "From"))
                    th { "Drinks 24h" }
                    th { "Snacks 24h" }
                    th { "Spa" }
                    th { "Adults only" }
                }
            }
            tbody {
                @for hotel in &vm.hotels {
                    tr {
                        td { a href=(query::hotel_path(&hotel.id)) { (hotel.name) } }
                        td { (hotel.city) }
                        td { (or_dash(hotel.stars)) }
                        td { (or_dash(hotel.google_rating)) }
                        td { (or_dash(hotel.review_count)) }
                        td { (format_price(hotel.price_range.min)) }
                        td { (presence_badge(hotel.amenities.drinks24h)) }
                        td { (presence_badge(hotel.amenities.snacks24h)) }
                        td { (presence_badge(hotel.amenities.spa)) }
                        td { (adult_only_badge(hotel.amenities.adult_only)) }
                    }
                }
            }
        }
    }
}

/// Column header linking to the sort state a click would produce.
fn sort_header(vm: &HotelsVm, key: SortKey, label: &str) -> Markup {
    let (next_key, next_dir) = vm.criteria.next_sort(key);
    let href = format!("/?{}", query::with_sort(vm.criteria, &vm.bounds, next_key, next_dir));

    let arrow = if vm.criteria.sort_key() == key {
        match vm.criteria.sort_direction() {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        }
    } else {
        ""
    };

    html! {
        th { a href=(href) data-sort=(key.as_str()) { (label) (arrow) } }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_rating_gets_its_own_option() {
        assert_eq!(rating_options(3.5), vec![0.0, 1.0, 2.0, 3.0, 3.5, 4.0, 5.0]);
        assert_eq!(rating_options(4.0), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }
}

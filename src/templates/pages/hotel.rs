use crate::domain::hotel::{Hotel, Metadata, ReviewSummary};
use crate::templates::components::{
    adult_only_badge, card, format_price, or_dash, presence_badge,
};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn hotel_page(hotel: &Hotel, metadata: &Metadata) -> Markup {
    desktop_layout(
        &hotel.name,
        metadata,
        html! {
            main class="container" {
                p { a href="/" { "← Back to results" } }
                h1 { (hotel.name) }
                p class="subtitle" {
                    (hotel.city)
                    @if let Some(stars) = hotel.stars { " · " (stars) "★" }
                    @if let Some(rating) = hotel.google_rating {
                        " · Google " (rating)
                        @if let Some(reviews) = hotel.review_count { " (" (reviews) " reviews)" }
                    }
                }

                @if let Some(thumb) = &hotel.thumbnail_url {
                    img src=(thumb) alt=(hotel.name) width="320";
                }

                (card("Overview", overview(hotel)))

                @if let Some(summary) = &hotel.review_summary {
                    (card("What guests say", review_summary(summary)))
                }

                (card("Packages", packages_table(hotel)))
            }
        },
    )
}

fn overview(hotel: &Hotel) -> Markup {
    let a = &hotel.amenities;
    html! {
        dl {
            dt { "Price" }
            dd {
                (format_price(hotel.price_range.min)) " – " (format_price(hotel.price_range.max))
                " (avg " (format_price(hotel.price_range.avg)) ")"
            }
            dt { "Travel dates" }
            dd { (or_dash(hotel.departure_date)) " → " (or_dash(hotel.return_date)) }
            dt { "Meal plan" }
            dd {
                (hotel.meal_plan_label.as_deref().or(hotel.meal_plan_code.as_deref()).unwrap_or("-"))
            }
            dt { "Restaurants" }
            dd { (or_dash(hotel.number_of_restaurants)) }
            dt { "Drinks 24h" } dd { (presence_badge(a.drinks24h)) }
            dt { "Snacks 24h" } dd { (presence_badge(a.snacks24h)) }
            dt { "Spa" }
            dd {
                (presence_badge(a.spa))
                @if let Some(label) = &hotel.spa_label { " " small { (label) } }
            }
            dt { "Adults only" } dd { (adult_only_badge(a.adult_only)) }
        }
        ul class="links" {
            @if let Some(url) = &hotel.air_transat_url {
                li { a href=(url) rel="noopener" target="_blank" { "Book this package" } }
            }
            @if let Some(url) = &hotel.google_maps_url {
                li { a href=(url) rel="noopener" target="_blank" { "Google Maps" } }
            }
        }
    }
}

fn review_summary(summary: &ReviewSummary) -> Markup {
    let sections = [
        ("The good", &summary.good_points),
        ("The bad", &summary.bad_points),
        ("The ugly", &summary.ugly_points),
    ];

    html! {
        @if !summary.overall_summary.is_empty() {
            p { (summary.overall_summary) }
        }
        @for (title, points) in sections {
            @if !points.is_empty() {
                h4 { (title) }
                ul { @for point in points { li { (point) } } }
            }
        }
        p class="meta" { "Based on " (summary.review_count_analyzed) " reviews." }
    }
}

fn packages_table(hotel: &Hotel) -> Markup {
    html! {
        @if hotel.packages.is_empty() {
            p { "No packages listed." }
        } @else {
            table {
                thead {
                    tr {
                        th { "Departure" }
                        th { "Return" }
                        th { "Nights" }
                        th { "Room" }
                        th { "Price" }
                        th { "Drinks 24h" }
                        th { "Snacks 24h" }
                        th {}
                    }
                }
                tbody {
                    @for pkg in &hotel.packages {
                        tr {
                            td { (or_dash(pkg.departure)) }
                            td { (or_dash(pkg.return_date)) }
                            td { (or_dash(pkg.duration_days)) }
                            td { (pkg.room_type) }
                            td { (format_price(pkg.price)) }
                            td { (presence_badge(pkg.drinks24h)) }
                            td { (presence_badge(pkg.snacks24h)) }
                            td {
                                @if let Some(url) = &pkg.url {
                                    a href=(url) rel="noopener" target="_blank" { "View" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

use crate::domain::classify::{AdultOnly, Presence};
use maud::{html, Markup};

pub mod error;

pub use error::error_page;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn presence_badge(presence: Presence) -> Markup {
    let class = match presence {
        Presence::Yes => "badge yes",
        Presence::No => "badge no",
        Presence::Unknown => "badge unknown",
    };
    html! { span class=(class) { (presence.label()) } }
}

pub fn adult_only_badge(adult_only: AdultOnly) -> Markup {
    let class = match adult_only {
        AdultOnly::Yes => "badge yes",
        AdultOnly::No => "badge no",
        AdultOnly::Maybe | AdultOnly::Unknown => "badge unknown",
    };
    html! { span class=(class) { (adult_only.label()) } }
}

/// Whole dollars with thousands separators: `4200.5` -> `$4,201`.
pub fn format_price(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}")
}

/// `-` for missing values.
pub fn or_dash<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_are_grouped() {
        assert_eq!(format_price(0.0), "$0");
        assert_eq!(format_price(999.4), "$999");
        assert_eq!(format_price(4200.5), "$4,201");
        assert_eq!(format_price(1234567.0), "$1,234,567");
        assert_eq!(format_price(-1500.0), "-$1,500");
    }

    #[test]
    fn dash_for_missing() {
        assert_eq!(or_dash(Some(4.5)), "4.5");
        assert_eq!(or_dash::<u64>(None), "-");
    }
}

use crate::domain::hotel::Metadata;
use maud::{html, Markup, PreEscaped, DOCTYPE};

pub fn desktop_layout(title: &str, metadata: &Metadata, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
              header class="flex items-center justify-between px-6 py-3 shadow" {
                  svg
                      xmlns="http://www.w3.org/2000/svg"
                      width="24"
                      height="24"
                      viewBox="0 0 24 24"
                      fill="none"
                      stroke="#524ed2"
                      stroke-width="2"
                      stroke-linecap="round"
                      stroke-linejoin="round"
                  {
                      path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                      path d="M3 21h18" {}
                      path d="M5 21v-14l8 -4v18" {}
                      path d="M19 21v-10l-6 -4" {}
                  }
                  h3 {
                      @if metadata.destination.is_empty() {
                          "Hotels"
                      } @else {
                          "Hotels in " (metadata.destination)
                      }
                  }
                  nav {
                      ul {
                          li { a href="/" { "All hotels" } }
                          li { a href="/api/hotels" { "JSON" } }
                      }
                  }
              }
                (content)
                footer class="meta" {
                    @if !metadata.source.is_empty() {
                        span { "Source: " (metadata.source) }
                    }
                    @if let Some(budget) = metadata.budget {
                        span { " · Budget: " (crate::templates::components::format_price(budget)) }
                    }
                    @if let Some(generated) = metadata.generated_at {
                        span { " · Generated " (generated.format("%Y-%m-%d %H:%M")) }
                    }
                }
            }
        }
    }
}

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2937; }
header { display: flex; gap: 1rem; align-items: center; padding: 0.75rem 1.5rem; box-shadow: 0 1px 3px #0002; }
header nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
main { max-width: 1200px; margin: 1.5rem auto; padding: 0 1rem; }
table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: 0.5rem; border-bottom: 1px solid #e5e7eb; }
th a { color: inherit; text-decoration: none; }
.filters { display: flex; flex-wrap: wrap; gap: 1rem; align-items: end; margin-bottom: 1rem; }
.badge { display: inline-block; padding: 0 0.5rem; border-radius: 999px; font-size: 0.8rem; }
.badge.yes { background: #d1fae5; color: #065f46; }
.badge.no { background: #fee2e2; color: #991b1b; }
.badge.unknown { background: #f3f4f6; color: #6b7280; }
.card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem; margin-bottom: 1rem; }
.meta { color: #6b7280; font-size: 0.85rem; padding: 1rem 1.5rem; }
a.disabled { pointer-events: none; color: #9ca3af; }
"#;

mod admin;
mod catalog;

pub use admin::ADMIN_HTML;
pub use catalog::{render_catalog, render_catalog_error};

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// "от 5 000 ₽" with ru-RU digit grouping, or the on-request fallback.
pub fn format_price_from(price: Option<f64>) -> String {
    match price {
        Some(value) => format!("от {} ₽", group_digits(value)),
        None => "Цена по запросу".to_string(),
    }
}

pub fn format_duration_hours(hours: Option<f64>) -> String {
    match hours {
        Some(value) if value.fract() == 0.0 => format!("{} ч", value as i64),
        Some(value) => format!("{value} ч"),
        None => "Длительность не указана".to_string(),
    }
}

/// First sentence of a description, used as the card teaser.
pub fn description_teaser(description: Option<&str>) -> String {
    description
        .and_then(|text| text.split('.').next())
        .map(|sentence| sentence.trim().to_string())
        .unwrap_or_default()
}

fn group_digits(value: f64) -> String {
    let whole = value.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_is_grouped_ru_style() {
        assert_eq!(format_price_from(Some(5000.0)), "от 5 000 ₽");
        assert_eq!(format_price_from(Some(900.0)), "от 900 ₽");
        assert_eq!(format_price_from(Some(1250000.0)), "от 1 250 000 ₽");
        assert_eq!(format_price_from(None), "Цена по запросу");
    }

    #[test]
    fn duration_drops_trailing_zero() {
        assert_eq!(format_duration_hours(Some(3.0)), "3 ч");
        assert_eq!(format_duration_hours(Some(1.5)), "1.5 ч");
        assert_eq!(format_duration_hours(None), "Длительность не указана");
    }

    #[test]
    fn teaser_is_first_sentence() {
        assert_eq!(
            description_teaser(Some("Закаты с воды. Шампанское включено.")),
            "Закаты с воды"
        );
        assert_eq!(description_teaser(None), "");
    }

    #[test]
    fn html_is_escaped() {
        assert_eq!(
            escape_html(r#"<b>"Сочи" & Адлер</b>"#),
            "&lt;b&gt;&quot;Сочи&quot; &amp; Адлер&lt;/b&gt;"
        );
    }
}

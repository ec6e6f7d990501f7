//! Display formatting for prediction results.

/// Format a percentage with one decimal place: `87.5%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Format a temperature in degrees Celsius with one decimal place: `21.4 °C`.
pub fn format_celsius(value: f64) -> String {
    // Avoid rendering "-0.0" for values that round to zero.
    let rounded = (value * 10.0).round() / 10.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.1} °C", rounded)
}

/// Field label with its unit in parentheses, when it has one.
pub fn label_with_unit(label: &str, unit: &str) -> String {
    if unit.is_empty() {
        label.to_string()
    } else {
        format!("{} ({})", label, unit)
    }
}

/// Copyright line for the footer.
pub fn copyright(year: u32, holder: &str) -> String {
    format!("© {} {}", year, holder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(87.5), "87.5%");
        assert_eq!(format_percent(100.0), "100.0%");
        assert_eq!(format_percent(12.345), "12.3%");
    }

    #[test]
    fn test_format_celsius() {
        assert_eq!(format_celsius(21.37), "21.4 °C");
        assert_eq!(format_celsius(-4.0), "-4.0 °C");
        assert_eq!(format_celsius(-0.04), "0.0 °C");
    }

    #[test]
    fn test_label_with_unit() {
        assert_eq!(label_with_unit("Nitrogen", "kg/ha"), "Nitrogen (kg/ha)");
        assert_eq!(label_with_unit("pH", ""), "pH");
    }

    #[test]
    fn test_copyright() {
        assert_eq!(copyright(2026, "FarmSight"), "© 2026 FarmSight");
    }
}

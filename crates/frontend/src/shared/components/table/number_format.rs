//! Утилиты форматирования чисел для таблиц

/// Порог, начиная с которого число выводится в экспоненциальной записи
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Форматирует число в кратчайшей десятичной записи, без разделителей разрядов
///
/// Magnitudes from 1e21 up switch to exponent form (`1e+21`), as browsers
/// print numbers. Non-finite values print as `NaN` / `Infinity`.
///
/// ```
/// use frontend::shared::components::table::format_number_plain;
///
/// assert_eq!(format_number_plain(50.0), "50");
/// assert_eq!(format_number_plain(12.5), "12.5");
/// assert_eq!(format_number_plain(1e21), "1e+21");
/// ```
pub fn format_number_plain(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value.abs() >= EXPONENT_THRESHOLD {
        let exp = format!("{:e}", value);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        };
    }
    format!("{}", value)
}

/// Сумма с суффиксом валюты, например `50 ريال`.
///
/// `None`, zero and non-finite values count as "no amount" and yield `None`,
/// so the caller can show its placeholder instead.
pub fn format_amount(value: Option<f64>, currency: &str) -> Option<String> {
    match value {
        Some(v) if v != 0.0 && v.is_finite() => {
            Some(format!("{} {}", format_number_plain(v), currency))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_plain() {
        assert_eq!(format_number_plain(50.0), "50");
        assert_eq!(format_number_plain(12.5), "12.5");
        assert_eq!(format_number_plain(1500.0), "1500");
        assert_eq!(format_number_plain(-7.25), "-7.25");
    }

    #[test]
    fn test_format_number_plain_extremes() {
        assert_eq!(format_number_plain(1e20), "100000000000000000000");
        assert_eq!(format_number_plain(1e21), "1e+21");
        assert_eq!(format_number_plain(-1.5e22), "-1.5e+22");
        assert_eq!(format_number_plain(f64::INFINITY), "Infinity");
        assert_eq!(format_number_plain(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number_plain(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Some(50.0), "ريال").as_deref(), Some("50 ريال"));
        assert_eq!(format_amount(Some(99.9), "SAR").as_deref(), Some("99.9 SAR"));
    }

    #[test]
    fn test_format_amount_missing_values() {
        assert_eq!(format_amount(None, "ريال"), None);
        assert_eq!(format_amount(Some(0.0), "ريال"), None);
        assert_eq!(format_amount(Some(f64::NAN), "ريال"), None);
        assert_eq!(format_amount(Some(f64::INFINITY), "ريال"), None);
        assert_eq!(format_amount(Some(f64::NEG_INFINITY), "ريال"), None);
    }
}

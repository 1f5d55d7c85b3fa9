use chrono::{DateTime, Local};

// fr-FR digit grouping separator
const NNBSP: char = '\u{202f}';

pub fn format_fcfa(amount: u64) -> String {
    format!("{} FCFA", group_digits(amount))
}

pub fn group_digits(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(NNBSP);
        }
        grouped.push(digit);
    }
    grouped
}

pub fn format_time(at: DateTime<Local>) -> String {
    at.format("%H:%M").to_string()
}

pub fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn amounts_group_thousands() {
        assert_eq!(format_fcfa(0), "0 FCFA");
        assert_eq!(format_fcfa(500), "500 FCFA");
        assert_eq!(format_fcfa(1500), "1\u{202f}500 FCFA");
        assert_eq!(format_fcfa(1_000_000), "1\u{202f}000\u{202f}000 FCFA");
    }

    #[test]
    fn time_keeps_only_hour_and_minute() {
        let at = Local.with_ymd_and_hms(2026, 3, 14, 14, 5, 42).unwrap();
        assert_eq!(format_time(at), "14:05");
    }

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("aéroport"), "aéroport");
    }
}

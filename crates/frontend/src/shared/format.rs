/// Korean-won amount with thousands separators: `format_krw(25000)` is "₩25,000".
pub fn format_krw(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();
    format!("₩{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_krw(0), "₩0");
        assert_eq!(format_krw(800), "₩800");
        assert_eq!(format_krw(25_000), "₩25,000");
        assert_eq!(format_krw(1_234_567), "₩1,234,567");
    }
}

/// Thousands separators, e.g. `1250000` -> `1,250,000`
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// US dollars with no decimals
pub fn format_price(price: u64) -> String {
    format!("${}", group_digits(price))
}

pub fn format_sqft(sqft: u64) -> String {
    format!("{} sqft", group_digits(sqft))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1000), "1,000");
        assert_eq!(group_digits(1_250_000), "1,250,000");
    }

    #[test]
    fn formats_prices_and_areas() {
        assert_eq!(format_price(980_000), "$980,000");
        assert_eq!(format_sqft(1850), "1,850 sqft");
    }
}

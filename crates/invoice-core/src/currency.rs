//! Fixed-currency display formatting.
//!
//! The deployment ships one display currency; amounts render as
//! `"<CODE> 1,234.56"`. Formatting never mutates stored values.

/// Formatter for the session's display currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    code: String,
}

impl CurrencyFormat {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Render an amount with two decimals and thousands grouping.
    /// Non-finite amounts render as zero.
    pub fn format(&self, amount: f64) -> String {
        let amount = if amount.is_finite() { amount } else { 0.0 };
        let sign = if amount < 0.0 { "-" } else { "" };
        let fixed = format!("{:.2}", amount.abs());
        let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        format!("{sign}{} {}.{cents}", self.code, group_thousands(whole))
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_with_code_and_two_decimals() {
        let lkr = CurrencyFormat::new("LKR");
        assert_eq!(lkr.format(132.0), "LKR 132.00");
        assert_eq!(lkr.format(0.5), "LKR 0.50");
    }

    #[test]
    fn groups_thousands() {
        let usd = CurrencyFormat::new("USD");
        assert_eq!(usd.format(1234.56), "USD 1,234.56");
        assert_eq!(usd.format(1_000_000.0), "USD 1,000,000.00");
        assert_eq!(usd.format(999.99), "USD 999.99");
    }

    #[test]
    fn negative_amounts_carry_a_leading_sign() {
        let usd = CurrencyFormat::new("USD");
        assert_eq!(usd.format(-1234.5), "-USD 1,234.50");
    }

    #[test]
    fn rounds_to_cents() {
        let usd = CurrencyFormat::new("USD");
        assert_eq!(usd.format(0.005), "USD 0.01");
        assert_eq!(usd.format(10.994), "USD 10.99");
    }

    #[test]
    fn non_finite_renders_as_zero() {
        let usd = CurrencyFormat::new("USD");
        assert_eq!(usd.format(f64::NAN), "USD 0.00");
        assert_eq!(usd.format(f64::INFINITY), "USD 0.00");
    }
}

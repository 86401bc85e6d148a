//! Display currencies and their formatting rules.

/// Currencies the estimate can be shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Inr,
    Usd,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            Currency::Usd => "$",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
        }
    }

    /// Format an amount with the currency symbol, digit grouping, and two
    /// decimals. INR groups in the Indian system (the last three digits,
    /// then pairs); USD groups by thousands.
    pub fn format(&self, amount: f64) -> String {
        let negative = amount < 0.0;
        let cents = (amount.abs() * 100.0).round() as u64;
        let whole = cents / 100;
        let frac = cents % 100;
        let grouped = match self {
            Currency::Inr => group_indian(whole),
            Currency::Usd => group_thousands(whole),
        };
        format!(
            "{}{}{}.{:02}",
            if negative { "-" } else { "" },
            self.symbol(),
            grouped,
            frac
        )
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, digit) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out.push(',');
    out.push_str(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_placeholder() {
        assert_eq!(Currency::Inr.format(0.0), "₹0.00");
        assert_eq!(Currency::Usd.format(0.0), "$0.00");
    }

    #[test]
    fn test_two_decimals_always_shown() {
        assert_eq!(Currency::Inr.format(995.6), "₹995.60");
        assert_eq!(Currency::Usd.format(7.5), "$7.50");
        assert_eq!(Currency::Usd.format(7.0), "$7.00");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(Currency::Inr.format(999.99), "₹999.99");
        assert_eq!(Currency::Inr.format(1996.49), "₹1,996.49");
        assert_eq!(Currency::Inr.format(123456.0), "₹1,23,456.00");
        assert_eq!(Currency::Inr.format(12345678.9), "₹1,23,45,678.90");
    }

    #[test]
    fn test_western_grouping() {
        assert_eq!(Currency::Usd.format(1996.49), "$1,996.49");
        assert_eq!(Currency::Usd.format(123456.0), "$123,456.00");
        assert_eq!(Currency::Usd.format(1234567.89), "$1,234,567.89");
    }

    #[test]
    fn test_negative_amounts_keep_the_sign_outside() {
        assert_eq!(Currency::Usd.format(-12.3), "-$12.30");
    }

    #[test]
    fn test_symbols_and_codes() {
        assert_eq!(Currency::Inr.symbol(), "₹");
        assert_eq!(Currency::Inr.code(), "INR");
        assert_eq!(Currency::Usd.symbol(), "$");
        assert_eq!(Currency::Usd.code(), "USD");
    }
}

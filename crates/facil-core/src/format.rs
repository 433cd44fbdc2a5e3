use chrono::NaiveDate;
use facil_domain::{Transaction, TransactionType};

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: f64, currency: &str) -> String;
}

/// Formats dates for presentation.
pub trait DateFormatter: Send + Sync {
    fn format_date(&self, date: NaiveDate) -> String;
}

/// Brazilian Portuguese number layout: `R$ 1.234,56`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrlFormatter;

impl CurrencyFormatter for BrlFormatter {
    fn format_amount(&self, amount: f64, currency: &str) -> String {
        let cents = (amount.abs() * 100.0).round() as u64;
        let whole = group_thousands(cents / 100, '.');
        let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
        format!(
            "{sign}{} {whole},{:02}",
            currency_symbol(currency),
            cents % 100
        )
    }
}

/// Two-digit day and month, `dd/MM`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DayMonthFormatter;

impl DateFormatter for DayMonthFormatter {
    fn format_date(&self, date: NaiveDate) -> String {
        date.format("%d/%m").to_string()
    }
}

/// Amount prefixed with `+` for income and `-` for expenses.
pub fn signed_amount(
    txn: &Transaction,
    currency: &str,
    formatter: &dyn CurrencyFormatter,
) -> String {
    let prefix = match txn.kind {
        TransactionType::Income => '+',
        TransactionType::Expense => '-',
    };
    format!("{prefix}{}", formatter.format_amount(txn.amount, currency))
}

fn currency_symbol(currency: &str) -> &str {
    match currency {
        "BRL" => "R$",
        "USD" => "US$",
        "EUR" => "€",
        other => other,
    }
}

fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use facil_domain::NewTransaction;

    #[test]
    fn brl_groups_thousands_and_uses_decimal_comma() {
        let fmt = BrlFormatter;
        assert_eq!(fmt.format_amount(1234.5, "BRL"), "R$ 1.234,50");
        assert_eq!(fmt.format_amount(0.0, "BRL"), "R$ 0,00");
        assert_eq!(fmt.format_amount(1_000_000.0, "BRL"), "R$ 1.000.000,00");
        assert_eq!(fmt.format_amount(-12.0, "BRL"), "-R$ 12,00");
        assert_eq!(fmt.format_amount(999.999, "BRL"), "R$ 1.000,00");
    }

    #[test]
    fn day_month_pads_both_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(DayMonthFormatter.format_date(date), "07/03");
    }

    #[test]
    fn signed_amount_follows_type() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let income = Transaction::new(NewTransaction::new(
            100.0,
            "Salário",
            TransactionType::Income,
            "income",
            date,
        ));
        let expense = Transaction::new(NewTransaction::new(
            30.0,
            "Mercado",
            TransactionType::Expense,
            "food",
            date,
        ));
        assert_eq!(signed_amount(&income, "BRL", &BrlFormatter), "+R$ 100,00");
        assert_eq!(signed_amount(&expense, "BRL", &BrlFormatter), "-R$ 30,00");
    }
}

/// Format whole kronor with thousands groups, like `5 195 000 kr`.
pub fn format_sek(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    let number: String = grouped.chars().rev().collect();
    if amount < 0 {
        format!("-{number} kr")
    } else {
        format!("{number} kr")
    }
}

/// Format kronor in millions with one decimal, like `5.2 mn kr`.
pub fn format_mn_sek(amount: i64) -> String {
    format!("{:.1} mn kr", amount as f64 / 1_000_000.0)
}

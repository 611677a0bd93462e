use std::fmt;

/// Money is represented as integer cents to avoid floating-point drift.
/// $50.00 = 5000 cents. Amounts are signed: positive credits an account,
/// negative debits it.
pub type Cents = i64;

/// Format cents as a decimal currency string: 5000 -> "50.00", -1 -> "-0.01".
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Parse a decimal amount into cents. Accepts an optional leading `-` and
/// an optional `$` prefix; at most two fractional digits.
/// "50" -> 5000, "$12.34" -> 1234, "12.5" -> 1250, "-0.01" -> -1.
pub fn parse_cents(input: &str) -> Result<Cents, ParseAmountError> {
    let trimmed = input.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let rest = rest.strip_prefix('$').unwrap_or(rest);
    if rest.is_empty() {
        return Err(ParseAmountError::Malformed);
    }

    let (units_str, frac_str) = match rest.split_once('.') {
        Some((units, frac)) => (units, frac),
        None => (rest, ""),
    };
    if !units_str.chars().all(|c| c.is_ascii_digit())
        || !frac_str.chars().all(|c| c.is_ascii_digit())
    {
        return Err(ParseAmountError::Malformed);
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str
            .parse()
            .map_err(|_| ParseAmountError::Malformed)?
    };

    let frac: i64 = match frac_str.len() {
        0 if units_str.is_empty() => return Err(ParseAmountError::Malformed),
        0 => 0,
        // one fractional digit means tens of cents: "12.5" is 12.50
        1 => 10 * frac_str.parse::<i64>().map_err(|_| ParseAmountError::Malformed)?,
        2 => frac_str.parse().map_err(|_| ParseAmountError::Malformed)?,
        _ => return Err(ParseAmountError::TooPrecise),
    };

    let cents = units
        .checked_mul(100)
        .and_then(|c| c.checked_add(frac))
        .ok_or(ParseAmountError::Overflow)?;

    Ok(if negative { -cents } else { cents })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    Malformed,
    TooPrecise,
    Overflow,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::Malformed => write!(f, "invalid amount format"),
            ParseAmountError::TooPrecise => write!(f, "amounts carry at most two decimal places"),
            ParseAmountError::Overflow => write!(f, "amount is too large"),
        }
    }
}

impl std::error::Error for ParseAmountError {}

use serde::Serialize;

/// How the tick labels of a numeric axis are written.
///
/// The page runtime implements the same rules for the ticks the renderer
/// computes; [TickFormat::format] is used for everything written ahead of time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TickFormat {
    /// The number as is.
    #[default]
    Plain,
    /// Values of at least a thousand are written as `1.5k`.
    Thousands,
    /// Values of at least a million are written as `2.5M`, otherwise as [TickFormat::Thousands].
    Millions,
    /// The number with grouped thousands, as in `12,345`.
    Grouped,
}

const THOUSAND: f64 = 1_000.0;
const MILLION: f64 = 1_000_000.0;

impl TickFormat {
    pub fn format(self, value: f64) -> String {
        match self {
            TickFormat::Plain => number(value),
            TickFormat::Thousands => abbreviate(value, &[(THOUSAND, "k")]),
            TickFormat::Millions => abbreviate(value, &[(MILLION, "M"), (THOUSAND, "k")]),
            TickFormat::Grouped => grouped(value),
        }
    }
}

fn abbreviate(value: f64, units: &[(f64, &str)]) -> String {
    for (unit, suffix) in units {
        if value >= *unit {
            return format!("{}{suffix}", number(value / unit));
        }
    }

    number(value)
}

/// Writes a number in its shortest form: `1500`, `1.5`, `4.25`.
pub fn number(value: f64) -> String {
    format!("{value}")
}

/// Writes a number with grouped thousands and at most three fraction digits.
pub fn grouped(value: f64) -> String {
    if !value.is_finite() {
        return number(value);
    }

    let rounded = (value.abs() * 1000.0).round() / 1000.0;
    let text = format!("{rounded:.3}");
    let (integer, fraction) = text.split_once('.').unwrap_or((&text, ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(text.len() + integer.len() / 3 + 1);
    if value < 0.0 && rounded != 0.0 {
        out.push('-');
    }

    for (idx, digit) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }

    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }

    out
}

/// Picks the lower bound of a rating axis.
///
/// Returns `raised` when every value is strictly above it, `otherwise` when
/// any value is at or below it. An empty series counts as above.
pub fn floor_above<I>(values: I, raised: f64, otherwise: f64) -> f64
where
    I: IntoIterator<Item = f64>,
{
    if values.into_iter().all(|value| value > raised) {
        raised
    } else {
        otherwise
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviate_thousands() {
        assert_eq!(TickFormat::Thousands.format(500.0), "500");
        assert_eq!(TickFormat::Thousands.format(1000.0), "1k");
        assert_eq!(TickFormat::Thousands.format(1500.0), "1.5k");
        assert_eq!(TickFormat::Thousands.format(2_500_000.0), "2500k");
    }

    #[test]
    fn abbreviate_millions() {
        assert_eq!(TickFormat::Millions.format(500.0), "500");
        assert_eq!(TickFormat::Millions.format(1500.0), "1.5k");
        assert_eq!(TickFormat::Millions.format(2_500_000.0), "2.5M");
        assert_eq!(TickFormat::Millions.format(999_999.0), "999.999k");
    }

    #[test]
    fn plain_numbers() {
        assert_eq!(TickFormat::Plain.format(4.0), "4");
        assert_eq!(TickFormat::Plain.format(4.25), "4.25");
    }

    #[test]
    fn group_thousands() {
        assert_eq!(grouped(0.0), "0");
        assert_eq!(grouped(999.0), "999");
        assert_eq!(grouped(1234.0), "1,234");
        assert_eq!(grouped(1_234_567.0), "1,234,567");
        assert_eq!(grouped(12_345.6789), "12,345.679");
        assert_eq!(grouped(-1500.5), "-1,500.5");
    }

    #[test]
    fn floor_above_when_every_value_is_higher() {
        assert_eq!(floor_above([4.9, 4.2], 4.0, 0.0), 4.0);
    }

    #[test]
    fn floor_at_boundary_uses_otherwise() {
        assert_eq!(floor_above([4.9, 4.0], 4.0, 0.0), 0.0);
        assert_eq!(floor_above([4.0], 4.0, 3.0), 3.0);
    }

    #[test]
    fn floor_of_empty_series_is_raised() {
        assert_eq!(floor_above(Vec::<f64>::new(), 3.0, 0.0), 3.0);
    }
}

/// Whether a numeric literal reads as an integer or a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Int,
    Float,
}

/// Raw text of a numeric literal plus its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLiteral {
    pub text: String,
    pub kind: NumberKind,
}

fn split_sign(text: &str) -> (bool, &str) {
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    }
}

/// Accumulates leading digits of `digits` in `radix`, stopping at the first
/// non-digit. Saturates instead of overflowing.
fn accumulate(digits: &str, radix: u32) -> i128 {
    let mut acc: i128 = 0;
    for d in digits.chars().map_while(|c| c.to_digit(radix)) {
        acc = acc.saturating_mul(i128::from(radix)).saturating_add(i128::from(d));
    }
    acc
}

impl NumberLiteral {
    /// Integer value with C `strtoll(.., 0)` rules: `0x` prefix is hex, a
    /// leading `0` is octal, anything else decimal. Parsing stops at the first
    /// character that is not a digit of the base, so float text yields its
    /// integer part. Out-of-range values saturate.
    pub fn to_i64(&self) -> i64 {
        let (negative, body) = split_sign(&self.text);
        let magnitude = if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
            accumulate(hex, 16)
        } else if let Some(octal) = body.strip_prefix('0') {
            accumulate(octal, 8)
        } else {
            accumulate(body, 10)
        };
        let signed = if negative { -magnitude } else { magnitude };
        signed.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
    }

    /// Longest prefix of the float text that reads as a float, cut at the
    /// first `f`/`F`. A second exponent and anything after it fall away.
    /// Empty when the text holds no digits at all.
    fn float_text(&self) -> &str {
        let text = self.text.split(['f', 'F']).next().unwrap_or_default();
        let mut end = text.len();
        // literal text is ASCII, so every index is a char boundary
        while end > 0 && text[..end].parse::<f64>().is_err() {
            end -= 1;
        }
        &text[..end]
    }

    /// Float value, or `None` when the text holds no digits at all.
    pub fn to_f64(&self) -> Option<f64> {
        match self.kind {
            NumberKind::Int => Some(self.to_i64() as f64),
            NumberKind::Float => self.float_text().parse().ok(),
        }
    }

    /// Parses straight to `f32` so that shortest `f32` text round-trips exactly.
    pub fn to_f32(&self) -> Option<f32> {
        match self.kind {
            NumberKind::Int => Some(self.to_i64() as f32),
            NumberKind::Float => self.float_text().parse().ok(),
        }
    }

    /// Color channel: the integer part, wrapped to a byte like a C cast.
    /// `None` for float text with no digits.
    pub fn to_channel(&self) -> Option<u8> {
        self.to_f64().map(|_| self.to_i64() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(text: &str) -> NumberLiteral {
        NumberLiteral { text: text.into(), kind: NumberKind::Int }
    }

    fn float(text: &str) -> NumberLiteral {
        NumberLiteral { text: text.into(), kind: NumberKind::Float }
    }

    #[test]
    fn test_integer_bases() {
        assert_eq!(int("0x1A").to_i64(), 26);
        assert_eq!(int("0X1a").to_i64(), 26);
        assert_eq!(int("010").to_i64(), 8);
        assert_eq!(int("0").to_i64(), 0);
        assert_eq!(int("42").to_i64(), 42);
        assert_eq!(int("-42").to_i64(), -42);
        assert_eq!(int("+7").to_i64(), 7);
        assert_eq!(int("-0x10").to_i64(), -16);
        assert_eq!(int("0x").to_i64(), 0);
    }

    #[test]
    fn test_integer_saturates() {
        assert_eq!(int("99999999999999999999999").to_i64(), i64::MAX);
        assert_eq!(int("-99999999999999999999999").to_i64(), i64::MIN);
        assert_eq!(int("-9223372036854775808").to_i64(), i64::MIN);
    }

    #[test]
    fn test_float_text_cleanup() {
        assert_eq!(float("1.5f").to_f64(), Some(1.5));
        assert_eq!(float("-2.5e1").to_f64(), Some(-25.0));
        assert_eq!(float("2.5e").to_f64(), Some(2.5));
        assert_eq!(float("1.0e-2").to_f64(), Some(0.01));
        assert_eq!(float(".5").to_f64(), Some(0.5));
        assert_eq!(float(".").to_f64(), None);
    }

    #[test]
    fn test_float_reads_longest_prefix() {
        assert_eq!(float("1.5f3").to_f64(), Some(1.5));
        assert_eq!(float("1.f5").to_f64(), Some(1.0));
        assert_eq!(float("1.5e2e3").to_f64(), Some(150.0));
        assert_eq!(float("2.5e-").to_f64(), Some(2.5));
        assert_eq!(float("1.5e2e3").to_f32(), Some(150.0));
        assert_eq!(float(".f").to_f64(), None);
    }

    #[test]
    fn test_channels_wrap() {
        assert_eq!(int("255").to_channel(), Some(255));
        assert_eq!(int("256").to_channel(), Some(0));
        assert_eq!(int("-1").to_channel(), Some(255));
        assert_eq!(float("12.9").to_channel(), Some(12));
        assert_eq!(int("0xff").to_channel(), Some(255));
        assert_eq!(float(".").to_channel(), None);
    }
}

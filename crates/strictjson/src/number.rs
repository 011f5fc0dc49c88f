/// Format a finite f64 as a canonical mapping key:
/// - no exponent notation
/// - no trailing fractional zeros (strip the point if none remains)
/// - -0 normalized to 0
pub(crate) fn format_key_f64(value: f64) -> String {
    debug_assert!(value.is_finite(), "format_key_f64 called with non-finite value");
    if value == 0.0 {
        return String::from("0");
    }
    let mut buf = ryu::Buffer::new();
    let raw = buf.format_finite(value);
    let expanded = match raw.split_once(['e', 'E']) {
        Some((mantissa, exp)) => expand_exponent(mantissa, exp.parse().unwrap_or(0)),
        None => String::from(raw),
    };
    trim_fraction(expanded)
}

fn expand_exponent(mantissa: &str, exp: i32) -> String {
    let (sign, body) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
    let digits = [int_part, frac_part].concat();
    let point = int_part.len() as i32 + exp;

    let mut out = String::from(sign);
    if point <= 0 {
        out.push_str("0.");
        for _ in 0..(-point) as usize {
            out.push('0');
        }
        out.push_str(&digits);
    } else if point as usize >= digits.len() {
        out.push_str(&digits);
        for _ in digits.len()..point as usize {
            out.push('0');
        }
    } else {
        out.push_str(&digits[..point as usize]);
        out.push('.');
        out.push_str(&digits[point as usize..]);
    }
    out
}

fn trim_fraction(mut s: String) -> String {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}

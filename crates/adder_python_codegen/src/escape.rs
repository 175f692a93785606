//! Round-trippable literal rendering: quote selection and escaping for
//! string and bytes literals, and float formatting that survives re-parsing.

/// Render a string literal, choosing the quote style Python's own `repr`
/// would: single quotes, unless the content contains a single quote but no
/// double quote.
pub(crate) fn str_repr(value: &str) -> String {
    let quote = choose_quote(value.contains('\''), value.contains('"'));
    let mut result = String::with_capacity(value.len() + 2);
    result.push(quote);
    for ch in value.chars() {
        match ch {
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            ch if ch == quote => {
                result.push('\\');
                result.push(quote);
            }
            ch if ch.is_control() => {
                result.push_str(&format!("\\x{:02x}", ch as u32));
            }
            ch => result.push(ch),
        }
    }
    result.push(quote);
    result
}

/// Render a bytes literal. Non-printable bytes become `\xHH` escapes.
pub(crate) fn bytes_repr(value: &[u8]) -> String {
    let has_single = value.contains(&b'\'');
    let has_double = value.contains(&b'"');
    let quote = choose_quote(has_single, has_double);
    let mut result = String::with_capacity(value.len() + 3);
    result.push('b');
    result.push(quote);
    for &byte in value {
        match byte {
            b'\\' => result.push_str("\\\\"),
            b'\n' => result.push_str("\\n"),
            b'\r' => result.push_str("\\r"),
            b'\t' => result.push_str("\\t"),
            byte if byte == quote as u8 => {
                result.push('\\');
                result.push(quote);
            }
            byte if byte < 0x20 || byte >= 0x7f => {
                result.push_str(&format!("\\x{byte:02x}"));
            }
            byte => result.push(char::from(byte)),
        }
    }
    result.push(quote);
    result
}

fn choose_quote(has_single: bool, has_double: bool) -> char {
    if has_single && !has_double {
        '"'
    } else {
        '\''
    }
}

fn is_integer(value: f64) -> bool {
    (value - value.round()).abs() < f64::EPSILON
}

/// Render a float so that re-parsing yields the same value and the token is
/// unambiguously a float (a trailing `.0` for integral values, an exponent
/// for very large or small ones).
pub(crate) fn float_repr(value: f64) -> String {
    if value.is_infinite() {
        // No infinity literal exists; a value beyond f64::MAX_10_EXP = 308
        // overflows to the right infinity when re-parsed.
        return if value.is_sign_negative() {
            "-1e309".to_string()
        } else {
            "1e309".to_string()
        };
    }
    let lit = format!("{value:e}");
    if let Some(position) = lit.find('e') {
        let significand = &lit[..position];
        let exponent = lit[position + 1..].parse::<i32>().unwrap();
        if exponent < 16 && exponent > -5 {
            if is_integer(value) {
                format!("{value:.1?}")
            } else {
                value.to_string()
            }
        } else {
            format!("{significand}e{exponent:+#03}")
        }
    } else {
        let mut lit = value.to_string();
        lit.make_ascii_lowercase();
        lit
    }
}

/// Render a complex literal. A zero real part renders as a bare imaginary
/// (`2j`); otherwise the sum is parenthesized so it stays one atom.
pub(crate) fn complex_repr(real: f64, imag: f64) -> String {
    let value = if real == 0.0 {
        format!("{imag}j")
    } else {
        format!("({real}{imag:+}j)")
    };
    if real.is_infinite() || imag.is_infinite() {
        value.replace("inf", "1e309")
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::{bytes_repr, complex_repr, float_repr, str_repr};

    #[test]
    fn str_quote_selection() {
        assert_eq!(str_repr("hello"), "'hello'");
        assert_eq!(str_repr("he\"llo"), "'he\"llo'");
        assert_eq!(str_repr("he'llo"), "\"he'llo\"");
        assert_eq!(str_repr("b'o\"th"), "'b\\'o\"th'");
        assert_eq!(str_repr(""), "''");
    }

    #[test]
    fn str_escapes() {
        assert_eq!(str_repr("a\nb"), "'a\\nb'");
        assert_eq!(str_repr("a\\b"), "'a\\\\b'");
        assert_eq!(str_repr("tab\there"), "'tab\\there'");
        assert_eq!(str_repr("\x07"), "'\\x07'");
        assert_eq!(str_repr("héllo"), "'héllo'");
    }

    #[test]
    fn bytes_escapes() {
        assert_eq!(bytes_repr(b"hello"), "b'hello'");
        assert_eq!(bytes_repr(b"\x00\xff"), "b'\\x00\\xff'");
        assert_eq!(bytes_repr(b"it's"), "b\"it's\"");
    }

    #[test]
    fn float_forms() {
        assert_eq!(float_repr(1.0), "1.0");
        assert_eq!(float_repr(-3.0), "-3.0");
        assert_eq!(float_repr(0.5), "0.5");
        assert_eq!(float_repr(123456.0), "123456.0");
        assert_eq!(float_repr(1e100), "1e+100");
        assert_eq!(float_repr(f64::INFINITY), "1e309");
        assert_eq!(float_repr(f64::NEG_INFINITY), "-1e309");
    }

    #[test]
    fn complex_forms() {
        assert_eq!(complex_repr(0.0, 2.0), "2j");
        assert_eq!(complex_repr(1.0, 2.0), "(1+2j)");
        assert_eq!(complex_repr(1.0, -2.0), "(1-2j)");
    }
}

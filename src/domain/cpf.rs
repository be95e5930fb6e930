//! CPF (Brazilian national ID) checksum validation
//!
//! A CPF is 11 digits; the last two are check digits computed with the
//! standard weighted-sum-mod-11 scheme over the preceding digits.

use validator::ValidationError;

/// Strip formatting punctuation (`123.456.789-09` -> `12345678909`).
///
/// Digits-only input is returned unchanged.
pub fn sanitize_cpf(raw: &str) -> String {
    if raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_string();
    }
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validate a CPF, accepting formatted or bare input.
///
/// Rejects anything that is not exactly 11 digits after sanitizing, any
/// repdigit sequence (`111.111.111-11` passes the checksum but is not a
/// valid CPF), and any string whose two check digits do not match.
pub fn is_valid_cpf(raw: &str) -> bool {
    let cpf = sanitize_cpf(raw);

    if cpf.len() != 11 {
        return false;
    }

    let digits: Vec<u32> = cpf.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    check_digit(&digits, 9) == digits[9] && check_digit(&digits, 10) == digits[10]
}

/// Check digit over the first `length` digits: weight digit `i` by
/// `length + 1 - i`, sum, multiply by 10, mod 11, mapping 10 to 0.
fn check_digit(digits: &[u32], length: usize) -> u32 {
    let sum: u32 = digits[..length]
        .iter()
        .enumerate()
        .map(|(i, &d)| d * (length as u32 + 1 - i as u32))
        .sum();
    let result = (sum * 10) % 11;
    if result == 10 {
        0
    } else {
        result
    }
}

/// `validator` custom-rule adapter for `#[validate(custom(...))]` fields.
pub fn validate_cpf(cpf: &str) -> Result<(), ValidationError> {
    if is_valid_cpf(cpf) {
        Ok(())
    } else {
        let mut err = ValidationError::new("cpf");
        err.message = Some("cpf must be a valid Brazilian CPF".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference CPF with both check digits correct.
    const VALID: &str = "52998224725";

    #[test]
    fn accepts_valid_cpf() {
        assert!(is_valid_cpf(VALID));
    }

    #[test]
    fn accepts_formatted_cpf() {
        assert!(is_valid_cpf("529.982.247-25"));
    }

    #[test]
    fn rejects_repdigit_sequences() {
        for d in 0..=9 {
            let cpf: String = std::iter::repeat(char::from(b'0' + d)).take(11).collect();
            assert!(!is_valid_cpf(&cpf), "repdigit {} accepted", cpf);
        }
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!is_valid_cpf(""));
        assert!(!is_valid_cpf("5299822472"));
        assert!(!is_valid_cpf("529982247250"));
    }

    #[test]
    fn rejects_single_digit_mutations() {
        // Flipping any of the first nine digits breaks at least one check digit.
        for pos in 0..9 {
            let mut bytes = VALID.as_bytes().to_vec();
            bytes[pos] = if bytes[pos] == b'9' { b'0' } else { bytes[pos] + 1 };
            let mutated = String::from_utf8(bytes).unwrap();
            assert!(!is_valid_cpf(&mutated), "mutation at {} accepted", pos);
        }
    }

    #[test]
    fn rejects_wrong_check_digits() {
        assert!(!is_valid_cpf("52998224724"));
        assert!(!is_valid_cpf("52998224735"));
    }

    #[test]
    fn sanitize_strips_punctuation_only() {
        assert_eq!(sanitize_cpf("529.982.247-25"), "52998224725");
        assert_eq!(sanitize_cpf("52998224725"), "52998224725");
        assert_eq!(sanitize_cpf("abc"), "");
    }

    #[test]
    fn custom_rule_reports_message() {
        let err = validate_cpf("12345678900").unwrap_err();
        assert_eq!(err.code, "cpf");
    }
}

//! Log-safe masking of OTP identifiers
//!
//! Identifiers are phone numbers or email addresses and are never validated,
//! so masking works on arbitrary strings.

/// Mask an identifier for logging
///
/// Email addresses keep their first character and domain (`j***@example.com`),
/// anything else is treated as a phone number (`+15****4567`).
pub fn mask_identifier(identifier: &str) -> String {
    match identifier.split_once('@') {
        Some((local, domain)) => mask_email(local, domain),
        None => mask_phone_number(identifier),
    }
}

/// Mask a phone number for display (e.g., +15****4567)
pub fn mask_phone_number(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() >= 7 {
        let head: String = chars[..3].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}****{}", head, tail)
    } else {
        "****".to_string()
    }
}

fn mask_email(local: &str, domain: &str) -> String {
    match local.chars().next() {
        Some(first) => format!("{}***@{}", first, domain),
        None => format!("***@{}", domain),
    }
}

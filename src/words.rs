//! Spanish cardinal numbers for the written total on a settlement receipt.
//!
//! A receipt states its total both in figures and in words so the figure
//! cannot be altered unnoticed. [`to_words`] covers `0..=999_999`; anything
//! larger yields [`TOO_LARGE_SENTINEL`] instead of a partial phrase.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::CurrencyConfig;

/// Largest value [`to_words`] will spell out.
pub const MAX_WORDS_VALUE: u64 = 999_999;

/// Returned by [`to_words`] for values above [`MAX_WORDS_VALUE`].
pub const TOO_LARGE_SENTINEL: &str = "número demasiado grande";

const ZERO: &str = "cero";
const THOUSAND: &str = "mil";
const HUNDRED_EXACT: &str = "cien";

const UNITS: [&str; 10] = [
    "", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve",
];

const TEENS: [&str; 10] = [
    "diez",
    "once",
    "doce",
    "trece",
    "catorce",
    "quince",
    "dieciséis",
    "diecisiete",
    "dieciocho",
    "diecinueve",
];

const TWENTIES: [&str; 10] = [
    "veinte",
    "veintiuno",
    "veintidós",
    "veintitrés",
    "veinticuatro",
    "veinticinco",
    "veintiséis",
    "veintisiete",
    "veintiocho",
    "veintinueve",
];

const TENS: [&str; 10] = [
    "", "diez", "veinte", "treinta", "cuarenta", "cincuenta", "sesenta", "setenta", "ochenta",
    "noventa",
];

const HUNDREDS: [&str; 10] = [
    "",
    "ciento",
    "doscientos",
    "trescientos",
    "cuatrocientos",
    "quinientos",
    "seiscientos",
    "setecientos",
    "ochocientos",
    "novecientos",
];

/// Spells out `n` as a Spanish cardinal number.
///
/// # Examples
///
/// ```
/// use settlement_engine::words::{to_words, TOO_LARGE_SENTINEL};
///
/// assert_eq!(to_words(0), "cero");
/// assert_eq!(to_words(100), "cien");
/// assert_eq!(to_words(1000), "mil");
/// assert_eq!(to_words(1200), "mil doscientos");
/// assert_eq!(to_words(21_000), "veintiún mil");
/// assert_eq!(to_words(1_000_000), TOO_LARGE_SENTINEL);
/// ```
pub fn to_words(n: u64) -> String {
    match n {
        0 => ZERO.to_string(),
        n if n > MAX_WORDS_VALUE => TOO_LARGE_SENTINEL.to_string(),
        n => compose(n),
    }
}

/// Spells out the whole part of an amount followed by the currency name.
///
/// Cents are dropped, not rounded. Amounts above [`MAX_WORDS_VALUE`] produce
/// the sentinel followed by the currency name.
///
/// # Examples
///
/// ```
/// use settlement_engine::config::CurrencyConfig;
/// use settlement_engine::words::amount_in_words;
/// use rust_decimal::Decimal;
///
/// let phrase = amount_in_words(Decimal::new(308499, 2), &CurrencyConfig::cordoba());
/// assert_eq!(phrase, "tres mil ochenta y cuatro córdobas");
/// ```
pub fn amount_in_words(amount: Decimal, currency: &CurrencyConfig) -> String {
    let whole = amount
        .max(Decimal::ZERO)
        .floor()
        .to_u64()
        .unwrap_or(u64::MAX);
    format!("{} {}", to_words(whole), currency.name)
}

/// Converts `1..=999_999`.
fn compose(n: u64) -> String {
    let thousands = n / 1000;
    let remainder = n % 1000;

    let mut parts: Vec<String> = Vec::with_capacity(2);
    match thousands {
        0 => {}
        1 => parts.push(THOUSAND.to_string()),
        t => parts.push(format!("{} {}", shorten_before_noun(compose(t)), THOUSAND)),
    }
    if remainder > 0 {
        parts.push(below_thousand(remainder));
    }
    parts.join(" ")
}

/// Converts `1..=999`.
fn below_thousand(n: u64) -> String {
    if n == 100 {
        return HUNDRED_EXACT.to_string();
    }

    let hundreds = (n / 100) as usize;
    let rest = n % 100;

    let mut parts: Vec<String> = Vec::with_capacity(2);
    if hundreds > 0 {
        parts.push(HUNDREDS[hundreds].to_string());
    }
    if rest > 0 {
        parts.push(below_hundred(rest));
    }
    parts.join(" ")
}

/// Converts `1..=99`.
fn below_hundred(n: u64) -> String {
    let n = n as usize;
    match n {
        1..=9 => UNITS[n].to_string(),
        10..=19 => TEENS[n - 10].to_string(),
        20..=29 => TWENTIES[n - 20].to_string(),
        _ if n % 10 == 0 => TENS[n / 10].to_string(),
        _ => format!("{} y {}", TENS[n / 10], UNITS[n % 10]),
    }
}

/// "uno" becomes "un" (and "veintiuno" becomes "veintiún") in front of "mil".
fn shorten_before_noun(words: String) -> String {
    if let Some(stem) = words.strip_suffix("veintiuno") {
        format!("{}veintiún", stem)
    } else if let Some(stem) = words.strip_suffix("uno") {
        format!("{}un", stem)
    } else {
        words
    }
}

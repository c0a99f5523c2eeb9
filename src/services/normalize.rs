//! Field value normalization.
//!
//! Turns raw application/label strings into a comparable canonical form. Each
//! field has exactly one strategy; typed strategies that fail to parse fall
//! back to generic text so comparison can still proceed.

use crate::models::field::FieldName;

/// 1 US fluid ounce in mL.
pub const ML_PER_FL_OZ: f64 = 29.5735;

/// 1 US pint in mL.
pub const ML_PER_PINT: f64 = 473.176;

/// 1 litre in mL.
pub const ML_PER_LITRE: f64 = 1000.0;

/// 1 centilitre in mL.
pub const ML_PER_CENTILITRE: f64 = 10.0;

/// Canonicalization rule applied to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationStrategy {
    Text,
    AlcoholContent,
    Volume,
    Year,
    Sulfite,
    HealthWarning,
}

/// Canonical form of a field value.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedValue {
    Text(String),
    /// Alcohol by volume, rounded to one decimal place.
    Percent(f64),
    Millilitres(u32),
    Year(u16),
    Flag(bool),
}

pub fn strategy_for(field: FieldName) -> NormalizationStrategy {
    match field {
        FieldName::BrandName
        | FieldName::FancifulName
        | FieldName::ClassType
        | FieldName::NameAndAddress
        | FieldName::QualifyingPhrase
        | FieldName::CountryOfOrigin
        | FieldName::GrapeVarietal
        | FieldName::AppellationOfOrigin
        | FieldName::AgeStatement
        | FieldName::StateOfDistillation => NormalizationStrategy::Text,
        FieldName::AlcoholContent => NormalizationStrategy::AlcoholContent,
        FieldName::NetContents | FieldName::StandardsOfFill => NormalizationStrategy::Volume,
        FieldName::VintageYear => NormalizationStrategy::Year,
        FieldName::SulfiteDeclaration => NormalizationStrategy::Sulfite,
        FieldName::HealthWarning => NormalizationStrategy::HealthWarning,
    }
}

/// Normalize `raw` using the strategy for `field`. Never fails.
pub fn normalize(field: FieldName, raw: &str) -> NormalizedValue {
    let typed = match strategy_for(field) {
        NormalizationStrategy::Text => None,
        NormalizationStrategy::AlcoholContent => {
            parse_alcohol_percent(raw).map(NormalizedValue::Percent)
        }
        NormalizationStrategy::Volume => parse_volume_ml(raw).map(NormalizedValue::Millilitres),
        NormalizationStrategy::Year => parse_vintage_year(raw).map(NormalizedValue::Year),
        NormalizationStrategy::Sulfite => Some(NormalizedValue::Flag(has_sulfite_declaration(raw))),
        NormalizationStrategy::HealthWarning => {
            Some(NormalizedValue::Text(normalize_health_warning(raw)))
        }
    };
    typed.unwrap_or_else(|| NormalizedValue::Text(normalize_text(raw)))
}

/// Generic text folding: lowercase, straight quotes, insignificant
/// punctuation removed, whitespace collapsed.
pub fn normalize_text(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().map(straighten_quote).collect();
    let mut folded = String::with_capacity(raw.len());

    for (i, &ch) in chars.iter().enumerate() {
        let prev = if i > 0 { chars.get(i - 1).copied() } else { None };
        let next = chars.get(i + 1).copied();
        match ch {
            // Decimal points survive ("12.5 year").
            '.' if is_digit(prev) && is_digit(next) => folded.push('.'),
            // Apostrophes survive inside words ("jack's").
            '\'' if is_word_char(prev) && is_word_char(next) => folded.push('\''),
            '.' | ',' | ';' | ':' | '!' | '?' | '*' | '\'' => {}
            _ => folded.extend(ch.to_lowercase()),
        }
    }

    collapse_whitespace(&folded)
}

/// Health warning text: case-insensitive, whitespace-collapsed.
pub fn normalize_health_warning(raw: &str) -> String {
    collapse_whitespace(&raw.to_lowercase())
}

pub fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First number immediately preceding `%`, "percent" or "proof".
/// Proof is halved into ABV. Result is rounded to one decimal place.
pub fn parse_alcohol_percent(raw: &str) -> Option<f64> {
    let tokens = tokenize(raw);
    tokens.iter().enumerate().find_map(|(i, token)| {
        let Token::Number(value) = token else {
            return None;
        };
        let abv = match tokens.get(i + 1)? {
            Token::Percent => *value,
            Token::Word(word) if word == "percent" => *value,
            Token::Word(word) if word == "proof" => *value / 2.0,
            _ => return None,
        };
        Some((abv * 10.0).round() / 10.0)
    })
}

/// Total volume in whole millilitres. Composite statements such as
/// "1 PT. 9.4 FL. OZ." sum their parts.
pub fn parse_volume_ml(raw: &str) -> Option<u32> {
    let tokens = tokenize(raw);
    let mut total = 0.0;
    let mut found = false;
    let mut i = 0;

    while i < tokens.len() {
        if let Token::Number(value) = tokens[i] {
            if let Some((ml_per_unit, consumed)) = unit_at(&tokens, i + 1) {
                total += value * ml_per_unit;
                found = true;
                i += 1 + consumed;
                continue;
            }
        }
        i += 1;
    }

    found.then(|| total.round() as u32)
}

/// First standalone four-digit token.
pub fn parse_vintage_year(raw: &str) -> Option<u16> {
    raw.split(|c: char| !c.is_ascii_digit())
        .find(|run| run.len() == 4)
        .and_then(|run| run.parse().ok())
}

/// Any mention of sulfites counts as a declaration; empty text does not.
pub fn has_sulfite_declaration(raw: &str) -> bool {
    let lower = raw.to_lowercase();
    lower.contains("sulfite") || lower.contains("sulphite")
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Word(String),
    Percent,
}

fn tokenize(raw: &str) -> Vec<Token> {
    let chars: Vec<char> = raw.to_lowercase().chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        let starts_number = ch.is_ascii_digit()
            || (ch == '.' && chars.get(i + 1).is_some_and(|c| c.is_ascii_digit()));

        if starts_number {
            let mut text = String::new();
            let mut seen_point = false;
            while i < chars.len() {
                let c = chars[i];
                let digit_follows = chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
                if c.is_ascii_digit() {
                    text.push(c);
                    i += 1;
                } else if c == ',' && !seen_point && is_digit_group(&chars, i + 1) {
                    // Thousands separator ("1,750 mL").
                    i += 1;
                } else if (c == '.' || c == ',') && !seen_point && digit_follows {
                    // Decimal point or decimal comma ("13,5% vol").
                    seen_point = true;
                    text.push('.');
                    i += 1;
                } else {
                    break;
                }
            }
            if let Ok(value) = text.parse() {
                tokens.push(Token::Number(value));
            }
        } else if ch.is_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_alphabetic() {
                i += 1;
            }
            tokens.push(Token::Word(chars[start..i].iter().collect()));
        } else {
            if ch == '%' {
                tokens.push(Token::Percent);
            }
            i += 1;
        }
    }

    tokens
}

/// Exactly three digits starting at `chars[i]`, not followed by another digit.
fn is_digit_group(chars: &[char], i: usize) -> bool {
    chars.len() >= i + 3
        && chars[i..i + 3].iter().all(char::is_ascii_digit)
        && !chars.get(i + 3).is_some_and(|c| c.is_ascii_digit())
}

/// Unit starting at `tokens[i]`: (mL per unit, tokens consumed).
fn unit_at(tokens: &[Token], i: usize) -> Option<(f64, usize)> {
    let Some(Token::Word(word)) = tokens.get(i) else {
        return None;
    };
    match word.as_str() {
        "ml" | "mls" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => {
            Some((1.0, 1))
        }
        "cl" | "centiliter" | "centiliters" | "centilitre" | "centilitres" => {
            Some((ML_PER_CENTILITRE, 1))
        }
        "l" | "ltr" | "liter" | "liters" | "litre" | "litres" => Some((ML_PER_LITRE, 1)),
        "fl" | "fluid" => match tokens.get(i + 1) {
            Some(Token::Word(next)) if matches!(next.as_str(), "oz" | "ounce" | "ounces") => {
                Some((ML_PER_FL_OZ, 2))
            }
            _ => None,
        },
        "floz" | "oz" | "ounce" | "ounces" => Some((ML_PER_FL_OZ, 1)),
        "pt" | "pint" | "pints" => Some((ML_PER_PINT, 1)),
        _ => None,
    }
}

fn straighten_quote(ch: char) -> char {
    match ch {
        '\u{2018}' | '\u{2019}' | '\u{201B}' | '\u{2032}' => '\'',
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => '"',
        other => other,
    }
}

fn is_digit(ch: Option<char>) -> bool {
    ch.is_some_and(|c| c.is_ascii_digit())
}

fn is_word_char(ch: Option<char>) -> bool {
    ch.is_some_and(char::is_alphanumeric)
}

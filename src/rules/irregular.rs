//! Irregular singular/plural pair expansion.
//!
//! One registered pair expands into a batch of case-aware rules so the pair
//! is recognized regardless of the input word's leading-letter case. When
//! both words share the same first letter (case-insensitively) a single
//! case-insensitive rule per word suffices, with the captured first letter
//! carried into the replacement. Otherwise the first letters differ and the
//! batch pins explicit upper- and lowercase variants for each word.

use super::rule::{Pattern, Rule};
use crate::error::{InflectionError, InflectionResult};

/// The rule batch produced for one irregular pair, in registration order.
#[derive(Debug)]
pub struct IrregularRules {
    /// Rules for the plural list.
    pub plurals: Vec<Rule>,
    /// Rules for the singular list.
    pub singulars: Vec<Rule>,
}

/// Expand an irregular pair into its plural and singular rule batches.
///
/// ```ignore
/// let batch = expand("person", "people")?;   // 2 plural + 2 singular rules
/// let batch = expand("cow", "kine")?;        // 4 plural + 4 singular rules
/// ```
pub fn expand(singular: &str, plural: &str) -> InflectionResult<IrregularRules> {
    let Some((s_head, s_tail)) = split_leading(singular) else {
        return Err(invalid(singular, plural));
    };
    let Some((p_head, p_tail)) = split_leading(plural) else {
        return Err(invalid(singular, plural));
    };

    let mut batch = IrregularRules {
        plurals: Vec::new(),
        singulars: Vec::new(),
    };

    if s_head.to_lowercase().eq(p_head.to_lowercase()) {
        // Same leading letter: match either word case-insensitively and let
        // the captured first letter preserve the input's case.
        batch.plurals.push(capture_rule(s_head, s_tail, p_tail)?);
        batch.plurals.push(capture_rule(p_head, p_tail, p_tail)?);
        batch.singulars.push(capture_rule(s_head, s_tail, s_tail)?);
        batch.singulars.push(capture_rule(p_head, p_tail, s_tail)?);
    } else {
        let s_upper = s_head.to_uppercase().to_string();
        let s_lower = s_head.to_lowercase().to_string();
        let p_upper = p_head.to_uppercase().to_string();
        let p_lower = p_head.to_lowercase().to_string();

        batch
            .plurals
            .push(pinned_rule(&s_upper, s_tail, &p_upper, p_tail)?);
        batch
            .plurals
            .push(pinned_rule(&s_lower, s_tail, &p_lower, p_tail)?);
        batch
            .plurals
            .push(pinned_rule(&p_upper, p_tail, &p_upper, p_tail)?);
        batch
            .plurals
            .push(pinned_rule(&p_lower, p_tail, &p_lower, p_tail)?);

        batch
            .singulars
            .push(pinned_rule(&s_upper, s_tail, &s_upper, s_tail)?);
        batch
            .singulars
            .push(pinned_rule(&s_lower, s_tail, &s_lower, s_tail)?);
        batch
            .singulars
            .push(pinned_rule(&p_upper, p_tail, &s_upper, s_tail)?);
        batch
            .singulars
            .push(pinned_rule(&p_lower, p_tail, &s_lower, s_tail)?);
    }

    Ok(batch)
}

fn split_leading(word: &str) -> Option<(char, &str)> {
    let mut chars = word.chars();
    let head = chars.next()?;
    Some((head, chars.as_str()))
}

fn invalid(singular: &str, plural: &str) -> InflectionError {
    InflectionError::InvalidIrregularPair {
        singular: singular.to_string(),
        plural: plural.to_string(),
    }
}

/// `(?i)(h)ead_tail$` -> `${1}replacement_tail`
fn capture_rule(head: char, tail: &str, replacement_tail: &str) -> InflectionResult<Rule> {
    let pattern = format!(
        "(?i)({}){}$",
        regex::escape(&head.to_string()),
        regex::escape(tail)
    );
    let replacement = format!("${{1}}{}", replacement_tail);
    Ok(Rule::new(Pattern::regex(&pattern)?, replacement))
}

/// `Head(?i)tail$` -> `Replacement` with the leading letter's case pinned.
fn pinned_rule(
    head: &str,
    tail: &str,
    replacement_head: &str,
    replacement_tail: &str,
) -> InflectionResult<Rule> {
    let pattern = format!("{}(?i){}$", regex::escape(head), regex::escape(tail));
    let replacement = format!("{}{}", replacement_head, replacement_tail);
    Ok(Rule::new(Pattern::regex(&pattern)?, replacement))
}

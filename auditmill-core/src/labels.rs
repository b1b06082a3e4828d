//! Fixed label tables rendered into the questionnaire pages

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Answer-format labels, keyed by the `answer` field of a question
pub static ANSWERS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("default", "Yes / No"),
        ("default_na", "Yes / No / Not applicable"),
    ])
});

/// Audience labels, keyed by the `applies` field of a question
pub static APPLIES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("everyone", "Everyone"),
        ("mle", "Medium and large enterprises"),
    ])
});

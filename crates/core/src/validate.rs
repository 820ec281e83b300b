use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static ROUTE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Route name pattern must compile")
});

/// Checks route names against the identifier grammar and the emitter's
/// reserved words.
#[derive(Debug, Clone, Default)]
pub struct RouteNameValidator {
    reserved: HashSet<String>,
}

impl RouteNameValidator {
    pub fn new<I, S>(reserved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reserved: reserved.into_iter().map(Into::into).collect(),
        }
    }

    pub fn matches_grammar(name: &str) -> bool {
        ROUTE_NAME.is_match(name)
    }

    pub fn is_valid(&self, name: &str) -> bool {
        Self::matches_grammar(name) && !self.reserved.contains(name)
    }
}

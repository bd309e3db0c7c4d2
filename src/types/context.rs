use crate::text::Tokens;

#[derive(Debug, PartialEq, Clone)]
pub struct Context {
    /// ISO country code the geocoder restricts lookups to
    pub country: String,
    pub tokens: Tokens
}

impl Context {
    pub fn new(country: String, tokens: Tokens) -> Self {
        Context {
            country: country.to_uppercase(),
            tokens: tokens
        }
    }
}

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;
use crate::Context;

///
/// Titlecase input strings for display
///

pub fn titlecase(text: &String, context: &Context) -> String {
    lazy_static! {
        static ref WORD_BOUNDARY: Regex = Regex::new(r#"[\s\u2000-\u206F\u2E00-\u2E7F\\!#$%&()"*+,\-./:;<=>?@\[\]\^_{\|}~]+"#).unwrap();
    }

    let mut text = text.trim().to_lowercase();
    text = Regex::new(r"\s+").unwrap().replace_all(&text, " ").to_string();
    let mut new = String::new();
    let mut word_count = 0;
    let mut last_match = 0;
    for mat in WORD_BOUNDARY.find_iter(&text[..]) {
        let word = &text[last_match..mat.start()];
        if word.len() > 0 {
            word_count = word_count + 1;
            new.push_str(&capitalize(word, word_count, context));
        }
        new.push_str(&mat.as_str());
        last_match = mat.end();
    }
    // any last words?
    if last_match < text.len() {
        let word = &text[last_match..];
        word_count = word_count + 1;
        new.push_str(&capitalize(word, word_count, context));
    }

    new
}

pub fn capitalize(word: &str, word_count: usize, context: &Context) -> String {
    const MINOR_ES: [&str; 8] = ["a", "de", "del", "el", "la", "las", "los", "y"];

    // don't apply lower casing to the first word in the string
    if word_count > 1
        && context.country == String::from("CO")
        && MINOR_ES.contains(&word) {
        return String::from(word);
    }

    let mut graphemes = UnicodeSegmentation::graphemes(word, true);
    let first_grapheme = match graphemes.next() {
        Some(g) => g,
        None => return String::from(word)
    };
    first_grapheme.to_uppercase() + graphemes.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use crate::Tokens;

    #[test]
    fn test_titlecase() {
        let context = Context::new(String::from("co"), Tokens::new(HashMap::new()));

        assert_eq!(titlecase(&String::from(""), &context), String::from(""));
        assert_eq!(titlecase(&String::from("calle 50 # 50-50"), &context), String::from("Calle 50 # 50-50"));
        assert_eq!(titlecase(&String::from("CARRERA 10 # 20-30"), &context), String::from("Carrera 10 # 20-30"));
        assert_eq!(titlecase(&String::from("avenida de la república"), &context), String::from("Avenida de la República"));
        assert_eq!(titlecase(&String::from("de la cruz"), &context), String::from("De la Cruz"));
        assert_eq!(titlecase(&String::from("diagonal  25g   bis"), &context), String::from("Diagonal 25g Bis"));
        assert_eq!(titlecase(&String::from("ámbar"), &context), String::from("Ámbar"));
        assert_eq!(titlecase(&String::from("ç"), &context), String::from("Ç"));
    }
}

mod tokens;
mod titlecase;

//
// A note on fn names:
// - Functions that operate on Strings should be prefixed with `str_`
// - Functions that generate address synonyms should be prefixed with `syn_`
//

pub use self::titlecase::titlecase;
pub use self::tokens::{Tokens, Tokenized, tokenize};

use regex::Regex;

///
/// Return the similarity ratio between two strings as an integer 0-100
///
/// The ratio is 200 * M / (len(a) + len(b)) where M is the number of
/// characters matched by recursively aligning on the longest common
/// substring and re-applying to the unmatched remainders on either side
///
pub fn ratio<T>(a: &T, b: &T) -> u8
    where T: ToString
{
    let v1: Vec<char> = a.to_string().chars().collect();
    let v2: Vec<char> = b.to_string().chars().collect();

    // Two empty strings are a trivial exact match
    if v1.len() + v2.len() == 0 { return 100; }

    fn longest(a: &[char], b: &[char]) -> (usize, usize, usize) {
        let mut best = (0, 0, 0);
        let mut prev: Vec<usize> = vec![0; b.len() + 1];

        for i in 0..a.len() {
            let mut row: Vec<usize> = vec![0; b.len() + 1];
            for j in 0..b.len() {
                if a[i] == b[j] {
                    row[j + 1] = prev[j] + 1;
                    if row[j + 1] > best.2 {
                        best = (i + 1 - row[j + 1], j + 1 - row[j + 1], row[j + 1]);
                    }
                }
            }
            prev = row;
        }

        best
    }

    fn matched(a: &[char], b: &[char]) -> usize {
        let (ai, bi, len) = longest(a, b);
        if len == 0 { return 0; }

        len
            + matched(&a[..ai], &b[..bi])
            + matched(&a[ai + len..], &b[bi + len..])
    }

    let m = matched(&v1, &v2) as f64;

    ((200.0 * m) / (v1.len() + v2.len()) as f64).round() as u8
}

///
/// Collapse whitespace runs to a single space, trim, and lowercase
///
pub fn str_normalize(text: &String) -> String {
    lazy_static! {
        static ref SPACE: Regex = Regex::new(r"\s+").unwrap();
    }

    SPACE.replace_all(text.trim(), " ").to_string().to_lowercase()
}

///
/// Generate homonymous renderings of an address by substituting every
/// surface form registered for each recognized token, combinatorially
/// across token positions. The verbatim original is always the first
/// member of the returned list.
///
pub fn syn_homonyms(address: &String, tokens: &Tokens) -> Vec<String> {
    let normalized = str_normalize(address);

    if normalized.len() == 0 {
        return vec![address.to_owned()];
    }

    let pieces = tokenize(&normalized);

    // work-list of token sequences, branched once per surface form at every
    // substitutable position. Each group contains its own trigger form, so
    // the unmodified sequence survives every branching step.
    let mut branches: Vec<Vec<Tokenized>> = vec![pieces.clone()];

    for (i, piece) in pieces.iter().enumerate() {
        let forms = match tokens.forms(&piece.token) {
            Some(forms) => forms,
            None => continue
        };

        let mut grown: Vec<Vec<Tokenized>> = Vec::with_capacity(branches.len() * forms.len());
        for branch in &branches {
            for form in forms {
                let mut next = branch.clone();
                next[i].token = form.to_owned();
                grown.push(next);
            }
        }
        branches = grown;
    }

    let mut homonyms: Vec<String> = vec![address.to_owned()];

    for branch in &branches {
        let rendered: String = branch
            .iter()
            .map(|piece| format!("{}{}", piece.token, piece.trail))
            .collect();

        let candidate = str_normalize(&rendered);
        if !homonyms.contains(&candidate) {
            homonyms.push(candidate);
        }
    }

    homonyms
}

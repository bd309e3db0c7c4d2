use std::collections::HashMap;

#[derive(Debug, PartialEq, Clone)]
pub struct Tokens {
    tokens: HashMap<String, Vec<String>>
}

impl Tokens {
    pub fn new(tokens: HashMap<String, Vec<String>>) -> Self {
        Tokens {
            tokens: tokens
        }
    }

    ///
    /// Built-in vocabulary of interchangeable surface forms for Colombian
    /// street addresses. Every member of a group is keyed to the full group
    /// so that any observed spelling reaches all of its alternatives.
    ///
    pub fn generate() -> Self {
        let groups: Vec<Vec<&str>> = vec![
            vec!["kra", "cra", "karrera", "carrera"],
            vec!["cl", "cll", "calle"],
            vec!["av", "avda", "avenida"],
            vec!["dg", "diagonal"],
            vec!["tv", "transversal"],
            vec!["nro", "num", "#", "numero"],
            vec!["-", " "]
        ];

        let mut map: HashMap<String, Vec<String>> = HashMap::new();

        for group in groups {
            let forms: Vec<String> = group
                .iter()
                .map(|form| String::from(*form))
                .collect();

            for form in &group {
                // the space form is only ever a replacement, never a token
                if *form != " " {
                    map.insert(String::from(*form), forms.clone());
                }
            }
        }

        Tokens {
            tokens: map
        }
    }

    pub fn forms(&self, token: &str) -> Option<&Vec<String>> {
        self.tokens.get(token)
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Tokenized {
    pub token: String,

    /// Spacing that followed the token in the source string, so candidates
    /// render with the original adjacency ("20-30" stays "20-30")
    pub trail: String
}

impl Tokenized {
    pub fn new(token: String, trail: String) -> Self {
        Tokenized {
            token,
            trail
        }
    }
}

///
/// Split on whitespace and on the separator characters `#` and `-`,
/// keeping each separator as a one-character token in its own position
///
pub fn tokenize(text: &String) -> Vec<Tokenized> {
    let mut tokenized: Vec<Tokenized> = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if ch == '#' || ch == '-' {
            if current.len() > 0 {
                tokenized.push(Tokenized::new(current.clone(), String::new()));
                current.clear();
            }
            tokenized.push(Tokenized::new(ch.to_string(), String::new()));
        } else if ch.is_whitespace() {
            if current.len() > 0 {
                tokenized.push(Tokenized::new(current.clone(), String::new()));
                current.clear();
            }
            if let Some(last) = tokenized.last_mut() {
                last.trail = String::from(" ");
            }
        } else {
            current.push(ch);
        }
    }

    if current.len() > 0 {
        tokenized.push(Tokenized::new(current, String::new()));
    }

    tokenized
}

use crate::text;

/// Minimum ratio score at which a candidate is treated as referring to the
/// same address as the original
pub const THRESHOLD: u8 = 90;

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct Similarity {
    /// Address the candidate was generated from
    pub original: String,

    /// Homonymous rendering of the original
    pub candidate: String,

    /// Similarity ratio between the two, 0-100
    pub score: u8
}

impl Similarity {
    pub fn new(original: impl ToString, candidate: impl ToString, score: u8) -> Self {
        Similarity {
            original: original.to_string(),
            candidate: candidate.to_string(),
            score: score
        }
    }

    ///
    /// Score every candidate against the original, case-insensitively, and
    /// retain those at or above THRESHOLD in candidate order. An empty
    /// result is a normal outcome, not a fault.
    ///
    pub fn filter(original: &String, candidates: &Vec<String>) -> Vec<Similarity> {
        let original_lower = original.to_lowercase();

        let mut retained: Vec<Similarity> = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            let score = text::ratio(&original_lower, &candidate.to_lowercase());

            if score >= THRESHOLD {
                retained.push(Similarity::new(original, candidate, score));
            }
        }

        retained
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_self() {
        // an address always matches itself at 100
        assert_eq!(
            Similarity::filter(&String::from("Carrera 10 # 20-30"), &vec![String::from("Carrera 10 # 20-30")]),
            vec![Similarity::new("Carrera 10 # 20-30", "Carrera 10 # 20-30", 100)]
        );

        // case differences don't lower the score
        assert_eq!(
            Similarity::filter(&String::from("Carrera 10 # 20-30"), &vec![String::from("carrera 10 # 20-30")]),
            vec![Similarity::new("Carrera 10 # 20-30", "carrera 10 # 20-30", 100)]
        );

        // degenerate input still scores itself maximally
        assert_eq!(
            Similarity::filter(&String::from(""), &vec![String::from("")]),
            vec![Similarity::new("", "", 100)]
        );
    }

    #[test]
    fn test_filter_threshold() {
        // of the two candidates exactly one clears the threshold
        assert_eq!(
            Similarity::filter(&String::from("Calle 50 # 50-50"), &vec![
                String::from("cll 50 # 50-50"),
                String::from("calle 50 num 50-50")
            ]),
            vec![Similarity::new("Calle 50 # 50-50", "cll 50 # 50-50", 93)]
        );

        // candidates below the threshold are absent, those at or above are
        // kept in candidate order
        assert_eq!(
            Similarity::filter(&String::from("carrera 10 # 20-30"), &vec![
                String::from("carrera 10 # 20-30"),
                String::from("cra 10 # 20-30"),
                String::from("carrera 10 # 20 30")
            ]),
            vec![
                Similarity::new("carrera 10 # 20-30", "carrera 10 # 20-30", 100),
                Similarity::new("carrera 10 # 20-30", "carrera 10 # 20 30", 94)
            ]
        );

        // nothing qualifying yields an empty list, not an error
        assert_eq!(
            Similarity::filter(&String::from("carrera 10 # 20-30"), &vec![String::from("bodega 5")]),
            vec![]
        );
    }
}

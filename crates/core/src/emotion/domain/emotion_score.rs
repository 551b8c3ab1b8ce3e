use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Confidence per emotion category, in [0, 100] rounded to one decimal.
///
/// Pair order is the classifier's native response order; that order is
/// the tie-break authority when two categories share the maximum score.
/// Empty when a segment produced no usable transcript.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmotionScore {
    scores: Vec<(String, f64)>,
}

impl EmotionScore {
    pub fn empty() -> Self {
        Self { scores: Vec::new() }
    }

    /// Build from already-scaled percentage scores.
    pub fn from_pairs(pairs: Vec<(String, f64)>) -> Self {
        Self { scores: pairs }
    }

    /// Build from raw model probabilities in [0, 1]: each is scaled to
    /// 0-100 and rounded to one decimal. Rounding may leave the sum
    /// slightly off 100; accepted, not corrected.
    pub fn from_probabilities<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        Self {
            scores: pairs
                .into_iter()
                .map(|(label, p)| (label, round_tenth(p * 100.0)))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.scores
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, score)| *score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(l, s)| (l.as_str(), *s))
    }

    /// Category with the maximum score, or `None` when empty. Ties go to
    /// the first occurrence in native order.
    pub fn dominant(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (label, score) in &self.scores {
            match best {
                Some((_, top)) if *score <= top => {}
                _ => best = Some((label.as_str(), *score)),
            }
        }
        best
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl Serialize for EmotionScore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.scores.len()))?;
        for (label, score) in &self.scores {
            map.serialize_entry(label, score)?;
        }
        map.end()
    }
}

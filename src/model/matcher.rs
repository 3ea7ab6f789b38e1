// Semantic FAQ lookup.
//
// The matcher fits a TF-IDF model over the corpus questions once, at
// construction, and never changes afterwards. Queries are projected into the
// same vocabulary (unknown terms are dropped) and compared against every
// question with cosine similarity.
//
// Weighting:
//   tf(t, d)  = raw count of t in d
//   idf(t)    = ln((1 + n) / (1 + df(t))) + 1
//   w(t, d)   = tf * idf, then the vector is L2-normalized
//
// With unit vectors the cosine is just the dot product.

use crate::model::item::FaqEntry;
use crate::model::stopwords::is_stop_word;
use anyhow::{Result, bail};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Minimum similarity for an answer to be returned.
pub const DEFAULT_THRESHOLD: f32 = 0.22;

static TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("invalid token pattern"));

/// Sparse, L2-normalized term vector: (vocabulary index, weight), sorted by index.
type SparseVec = Vec<(usize, f32)>;

#[derive(Debug, Clone)]
pub struct FaqMatch<'a> {
    pub index: usize,
    pub score: f32,
    pub question: &'a str,
    pub answer: &'a str,
}

/// Fitted vector-space model over the corpus questions.
#[derive(Debug)]
struct CorpusIndex {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    vectors: Vec<SparseVec>,
}

#[derive(Debug)]
pub struct FaqMatcher {
    entries: Vec<FaqEntry>,
    index: CorpusIndex,
}

fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|t| !is_stop_word(t))
        .map(str::to_string)
        .collect()
}

fn normalize(mut vector: SparseVec) -> SparseVec {
    let norm = vector.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
    if norm > 0.0 {
        for (_, w) in vector.iter_mut() {
            *w /= norm;
        }
    }
    vector
}

fn dot(a: &SparseVec, b: &SparseVec) -> f32 {
    let (mut i, mut j, mut sum) = (0, 0, 0.0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}

impl CorpusIndex {
    fn fit(questions: &[&str]) -> Self {
        let docs: Vec<Vec<String>> = questions.iter().map(|q| tokenize(q)).collect();

        // Vocabulary indices follow sorted term order so vectors stay deterministic.
        let mut terms: Vec<&String> = docs.iter().flatten().collect();
        terms.sort();
        terms.dedup();
        let vocabulary: HashMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();

        let mut df = vec![0usize; vocabulary.len()];
        for doc in &docs {
            let mut seen: Vec<usize> = doc
                .iter()
                .filter_map(|t| vocabulary.get(t).copied())
                .collect();
            seen.sort_unstable();
            seen.dedup();
            for idx in seen {
                df[idx] += 1;
            }
        }

        let n = docs.len() as f32;
        let idf: Vec<f32> = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f32)).ln() + 1.0)
            .collect();

        let mut index = Self {
            vocabulary,
            idf,
            vectors: Vec::with_capacity(docs.len()),
        };
        let vectors: Vec<SparseVec> = docs.iter().map(|doc| index.weigh(doc)).collect();
        index.vectors = vectors;
        index
    }

    fn weigh(&self, tokens: &[String]) -> SparseVec {
        let mut counts: HashMap<usize, f32> = HashMap::new();
        for token in tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                *counts.entry(idx).or_default() += 1.0;
            }
        }
        let mut vector: SparseVec = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf * self.idf[idx]))
            .collect();
        vector.sort_by_key(|(idx, _)| *idx);
        normalize(vector)
    }

    fn transform(&self, text: &str) -> SparseVec {
        self.weigh(&tokenize(text))
    }
}

impl FaqMatcher {
    /// Fits the model. An empty corpus, an entry with a blank field, or questions
    /// with no terms left after stop-word removal are rejected.
    pub fn new(entries: Vec<FaqEntry>) -> Result<Self> {
        if entries.is_empty() {
            bail!("FAQ corpus is empty");
        }
        for (i, entry) in entries.iter().enumerate() {
            if entry.question.trim().is_empty() || entry.answer.trim().is_empty() {
                bail!("FAQ entry #{} has an empty question or answer", i + 1);
            }
        }

        let questions: Vec<&str> = entries.iter().map(|e| e.question.as_str()).collect();
        let index = CorpusIndex::fit(&questions);
        if index.vocabulary.is_empty() {
            bail!("FAQ corpus has no usable terms (only stop words?)");
        }
        log::info!(
            "FAQ matcher fitted: {} entries, {} terms",
            entries.len(),
            index.vocabulary.len()
        );
        Ok(Self { entries, index })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Similarity of `query` against every question, in corpus order.
    pub fn scores(&self, query: &str) -> Vec<f32> {
        let q = self.index.transform(query);
        self.index.vectors.iter().map(|v| dot(&q, v)).collect()
    }

    /// Highest scoring entry regardless of threshold. Ties go to the earliest entry.
    pub fn best_match(&self, query: &str) -> Option<FaqMatch<'_>> {
        let scores = self.scores(query);
        let mut best: Option<(usize, f32)> = None;
        for (i, score) in scores.into_iter().enumerate() {
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((i, score)),
            }
        }
        best.map(|(index, score)| {
            let entry = &self.entries[index];
            FaqMatch {
                index,
                score,
                question: &entry.question,
                answer: &entry.answer,
            }
        })
    }

    /// Answer for the closest question, or `None` when the best score is below `threshold`.
    pub fn answer(&self, query: &str, threshold: f32) -> Option<&str> {
        let found = self.best_match(query)?;
        log::debug!(
            "FAQ best match #{} score {:.3} for '{}'",
            found.index,
            found.score,
            query
        );
        if found.score < threshold {
            return None;
        }
        Some(found.answer)
    }

    pub fn answer_default(&self, query: &str) -> Option<&str> {
        self.answer(query, DEFAULT_THRESHOLD)
    }
}

//! End-to-end Kasiski attack: evidence gathering, key recovery and decryption
//!
//! [`analyze`] runs every side-effect-free stage over the ciphertext and returns
//! a [`KasiskiReport`]. The key length to attack with and an optional manual
//! key are chosen by the caller (usually after reading the report) and passed
//! in through [`AttackRequest`]; nothing here blocks on input.

use tracing::{info, warn};

use crate::cipher::{SubstitutionCipher, Vigenere};
use crate::coincidence::IcSweep;
use crate::config::AnalysisConfig;
use crate::distance::{DistanceCount, DistanceSummary};
use crate::error::Result;
use crate::ngram::NGramIndex;
use crate::recovery::RecoveredKey;
use crate::text::NormalizedText;

/// Below this many letters the statistics are unreliable.
pub const SHORT_TEXT_WARNING: usize = 50;

/// Repeated n-grams of one length and the distances between them.
#[derive(Debug, Clone, PartialEq)]
pub struct NGramFinding {
    pub index: NGramIndex,
    pub distances: DistanceSummary,
}

impl NGramFinding {
    pub fn build(text: &NormalizedText, n: usize) -> Result<Self> {
        let index = NGramIndex::build(text, n)?;
        let distances = DistanceSummary::new(index.distances());
        Ok(Self { index, distances })
    }

    pub fn n(&self) -> usize {
        self.index.n()
    }
}

/// Everything the statistical stages learn about a ciphertext.
#[derive(Debug, Clone, PartialEq)]
pub struct KasiskiReport {
    pub ciphertext: NormalizedText,
    /// One finding per configured n-gram length, in configuration order
    pub ngrams: Vec<NGramFinding>,
    /// Distances from every n-gram length combined
    pub merged: DistanceSummary,
    /// Most common merged distances, at most `histogram_top` entries
    pub histogram: Vec<DistanceCount>,
    /// `(length, distances divisible by length)` for `2..=max_key_length`
    pub factor_tally: Vec<(usize, usize)>,
    pub ic: IcSweep,
}

impl KasiskiReport {
    pub fn finding(&self, n: usize) -> Option<&NGramFinding> {
        self.ngrams.iter().find(|f| f.n() == n)
    }

    /// Key length with the highest average IC.
    pub fn best_key_length(&self) -> Option<usize> {
        self.ic.best().map(|h| h.length)
    }
}

/// Runs the n-gram, distance and IC stages over raw ciphertext.
pub fn analyze(raw: &str, config: &AnalysisConfig) -> Result<KasiskiReport> {
    config.validate()?;

    let ciphertext = NormalizedText::new(raw);
    if ciphertext.len() < SHORT_TEXT_WARNING {
        warn!(
            letters = ciphertext.len(),
            "text may be too short for reliable analysis"
        );
    }

    let ngrams = config
        .ngram_lengths
        .iter()
        .map(|&n| NGramFinding::build(&ciphertext, n))
        .collect::<Result<Vec<_>>>()?;

    let merged = ngrams
        .iter()
        .fold(DistanceSummary::default(), |acc, f| acc.merge(&f.distances));

    let mut histogram = merged.histogram();
    histogram.truncate(config.histogram_top);

    let factor_tally = merged.factor_tally(config.max_key_length);
    let ic = IcSweep::run(&ciphertext, config.max_key_length)?;

    match merged.common_factor() {
        Some(gcd) => info!(gcd, distances = merged.distances().len(), "kasiski distances"),
        None => info!("no repeated sequences found"),
    }

    Ok(KasiskiReport {
        ciphertext,
        ngrams,
        merged,
        histogram,
        factor_tally,
        ic,
    })
}

/// Caller-supplied choices that follow the analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttackRequest {
    /// Key length to recover; `None` stops after the analysis
    pub key_length: Option<usize>,
    /// Key to decrypt with in addition to the recovered one
    pub manual_key: Option<String>,
}

/// A key together with the plaintext it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decryption {
    pub key: String,
    pub plaintext: String,
}

impl Decryption {
    /// Decrypts the normalized ciphertext with `key`.
    pub fn with_key(ciphertext: &NormalizedText, key: &str) -> Result<Self> {
        let cipher = Vigenere::new(key)?;
        Ok(Self {
            key: cipher.key(),
            plaintext: cipher.decrypt(ciphertext.as_str()),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttackOutcome {
    pub report: KasiskiReport,
    pub recovered: Option<RecoveredKey>,
    pub decryption: Option<Decryption>,
    pub manual: Option<Decryption>,
}

/// Recovers the key for a chosen length and decrypts the report's ciphertext.
pub fn recover(
    report: &KasiskiReport,
    key_length: usize,
    config: &AnalysisConfig,
) -> Result<(RecoveredKey, Decryption)> {
    config.check_key_length(key_length)?;

    let recovered = RecoveredKey::recover(&report.ciphertext, key_length, &config.reference)?;
    let decryption = Decryption::with_key(&report.ciphertext, recovered.key())?;
    Ok((recovered, decryption))
}

/// Runs the whole attack non-interactively.
///
/// Invalid key lengths and manual keys are rejected before any recovery work.
pub fn run_attack(
    raw: &str,
    config: &AnalysisConfig,
    request: &AttackRequest,
) -> Result<AttackOutcome> {
    if let Some(key_length) = request.key_length {
        config.check_key_length(key_length)?;
    }
    if let Some(key) = &request.manual_key {
        Vigenere::new(key)?;
    }

    let report = analyze(raw, config)?;

    let (recovered, decryption) = match request.key_length {
        Some(key_length) => {
            let (recovered, decryption) = recover(&report, key_length, config)?;
            (Some(recovered), Some(decryption))
        }
        None => (None, None),
    };

    let manual = request
        .manual_key
        .as_deref()
        .map(|key| Decryption::with_key(&report.ciphertext, key))
        .transpose()?;

    Ok(AttackOutcome {
        report,
        recovered,
        decryption,
        manual,
    })
}

//! Console report for each stage of the attack

use std::io::{self, Write};

use kasiski::coincidence::{ENGLISH_IC, RANDOM_IC};
use kasiski::{AnalysisConfig, Decryption, KasiskiReport, NGramFinding, RecoveredKey};

const RULE: &str = "========================================";

fn banner(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "\n{}", RULE)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}\n", RULE)
}

/// One line per repeated n-gram: positions, then pairwise distances.
fn write_finding(out: &mut impl Write, finding: &NGramFinding, limit: Option<usize>) -> io::Result<()> {
    if finding.index.is_empty() {
        return writeln!(out, "(none found)");
    }

    for (shown, occurrence) in finding.index.iter().enumerate() {
        if limit.is_some_and(|limit| shown >= limit) {
            writeln!(out, "... (showing first {} of {})", shown, finding.index.len())?;
            break;
        }

        let positions: Vec<String> = occurrence.positions.iter().map(|p| p.to_string()).collect();
        let distances: Vec<String> = occurrence.distances().iter().map(|d| d.to_string()).collect();
        writeln!(
            out,
            "\"{}\" at positions: {}  -> distances: {}",
            occurrence.sequence,
            positions.join(" "),
            distances.join(" ")
        )?;
    }
    Ok(())
}

fn ngram_name(n: usize) -> String {
    match n {
        2 => "DIGRAMS (2 letters)".to_string(),
        3 => "TRIGRAMS (3 letters)".to_string(),
        4 => "TETRAGRAMS (4 letters)".to_string(),
        n => format!("{}-GRAMS ({} letters)", n, n),
    }
}

pub fn write_kasiski(out: &mut impl Write, report: &KasiskiReport, config: &AnalysisConfig) -> io::Result<()> {
    banner(out, "KASISKI METHOD - Repeated Sequences")?;

    for finding in &report.ngrams {
        let heading = format!("Looking for repeated {}:", ngram_name(finding.n()));
        writeln!(out, "{}", heading)?;
        writeln!(out, "{}", "-".repeat(heading.len()))?;
        // Shorter n-grams repeat by chance far more often
        let limit = (finding.n() < 4).then_some(config.trigram_display_limit);
        write_finding(out, finding, limit)?;
        writeln!(out)?;
    }

    writeln!(out, "Analyzing distances:")?;
    writeln!(out, "--------------------")?;
    for finding in &report.ngrams {
        match finding.distances.common_factor() {
            Some(gcd) => writeln!(out, "GCD of {}-gram distances: {}", finding.n(), gcd)?,
            None => writeln!(out, "GCD of {}-gram distances: no repeats", finding.n())?,
        }
    }

    writeln!(out, "\nMost common distances:")?;
    if report.histogram.is_empty() {
        writeln!(out, "  (no distances)")?;
    }
    for entry in &report.histogram {
        writeln!(out, "  Distance {} appears {} times", entry.distance, entry.count)?;
    }

    if !report.merged.is_empty() {
        writeln!(out, "\nDistances divisible by each key length:")?;
        for &(length, count) in &report.factor_tally {
            writeln!(out, "  {:>2}: {}", length, count)?;
        }
    }
    Ok(())
}

pub fn write_ic_table(out: &mut impl Write, report: &KasiskiReport, config: &AnalysisConfig) -> io::Result<()> {
    banner(out, "INDEX OF COINCIDENCE - Key Length Test")?;

    writeln!(out, "Testing key lengths 1-{}:", config.max_key_length)?;
    writeln!(
        out,
        "(English text IC ≈ {:.4}, random text IC ≈ {:.4})\n",
        ENGLISH_IC, RANDOM_IC
    )?;

    for h in report.ic.hypotheses() {
        write!(out, "Key length {:>2}: IC = {:.4}", h.length, h.avg_ic)?;
        if h.is_likely(config.likely_threshold) {
            write!(out, " *** LIKELY ***")?;
        }
        writeln!(out)?;
    }

    if let Some(best) = report.ic.best() {
        writeln!(
            out,
            "\nBest candidate: key length {} with IC = {:.4}",
            best.length, best.avg_ic
        )?;
    }
    Ok(())
}

pub fn write_recovery(out: &mut impl Write, recovered: &RecoveredKey) -> io::Result<()> {
    banner(out, "KEY RECOVERY - Frequency Analysis")?;

    let key_length = recovered.columns().len();
    writeln!(out, "Attempting to recover key of length {}...\n", key_length)?;

    for column in recovered.columns() {
        writeln!(
            out,
            "Column {} (positions {}, {}, {}, ...) has {} letters",
            column.index,
            column.index,
            column.index + key_length,
            column.index + 2 * key_length,
            column.letters
        )?;
        writeln!(
            out,
            "  -> Key letter {} is: {} (chi-squared {:.2})\n",
            column.index,
            column.best.key_letter(),
            column.best.chi_squared
        )?;
    }

    writeln!(out, "Recovered key: {}", recovered.key())
}

pub fn write_decryption(out: &mut impl Write, decryption: &Decryption) -> io::Result<()> {
    banner(out, "DECRYPTION")?;
    writeln!(out, "Decrypted text:")?;
    writeln!(out, "{}\n", decryption.plaintext)
}

pub fn write_manual(out: &mut impl Write, decryption: &Decryption) -> io::Result<()> {
    writeln!(out, "\nDecrypted with key \"{}\":", decryption.key)?;
    writeln!(out, "{}", decryption.plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kasiski::analyze;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_kasiski_section() {
        let config = AnalysisConfig::default();
        let report = analyze(&"ABCDEF".repeat(5), &config).unwrap();
        let text = render(|out| write_kasiski(out, &report, &config));

        assert!(text.contains("Looking for repeated TETRAGRAMS (4 letters):"));
        assert!(text.contains("\"ABCD\" at positions: 0 6 12 18 24  -> distances: 6 12 18 24 6 12 18 6 12 6"));
        assert!(text.contains("GCD of 4-gram distances: 6"));
        assert!(text.contains("Distance 6 appears"));
    }

    #[test]
    fn test_trigram_listing_truncated() {
        let config = AnalysisConfig {
            trigram_display_limit: 2,
            ..Default::default()
        };
        let report = analyze(&"ABCDEF".repeat(5), &config).unwrap();
        let text = render(|out| write_kasiski(out, &report, &config));
        assert!(text.contains("... (showing first 2 of 6)"));
    }

    #[test]
    fn test_ic_table_marks_likely() {
        let config = AnalysisConfig {
            max_key_length: 4,
            ..Default::default()
        };
        let report = analyze(&"AZ".repeat(20), &config).unwrap();
        let text = render(|out| write_ic_table(out, &report, &config));

        assert!(text.contains("Key length  2: IC = 1.0000 *** LIKELY ***"));
        assert!(text.contains("Best candidate: key length 2 with IC = 1.0000"));
    }

    #[test]
    fn test_no_repeats_reported() {
        let config = AnalysisConfig::default();
        let report = analyze("XYZ", &config).unwrap();
        let text = render(|out| write_kasiski(out, &report, &config));
        assert!(text.contains("GCD of 4-gram distances: no repeats"));
        assert!(text.contains("(no distances)"));
    }
}

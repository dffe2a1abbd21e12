use kasiski::{
    analyze, recover, run_attack, vigenere_encrypt, AnalysisConfig, AttackRequest, NormalizedText,
    RecoveredKey, ENGLISH_FREQUENCIES,
};

const PASSAGE: &str = include_str!("data/passage.txt");

const PANGRAM: &str = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG";

fn sweep_config(max_key_length: usize) -> AnalysisConfig {
    AnalysisConfig {
        max_key_length,
        ..Default::default()
    }
}

#[test]
fn test_passage_key_abc() {
    let ciphertext = vigenere_encrypt(PASSAGE, "ABC").unwrap();
    let config = sweep_config(10);
    let report = analyze(&ciphertext, &config).unwrap();

    let tetragrams = report.finding(4).unwrap();
    assert!(!tetragrams.index.is_empty());
    assert!(tetragrams.distances.distances().iter().all(|d| d % 3 == 0));
    assert_eq!(tetragrams.distances.common_factor(), Some(3));

    assert_eq!(report.best_key_length(), Some(3));
    assert!(report
        .ic
        .likely(config.likely_threshold)
        .iter()
        .all(|h| h.length % 3 == 0));

    let (key, decryption) = recover(&report, 3, &config).unwrap();
    assert_eq!(key.key(), "ABC");
    assert_eq!(decryption.plaintext, NormalizedText::new(PASSAGE).as_str());
}

#[test]
fn test_passage_key_lemon() {
    let ciphertext = vigenere_encrypt(PASSAGE, "lemon").unwrap();
    let config = AnalysisConfig::default();
    let report = analyze(&ciphertext, &config).unwrap();

    assert_eq!(report.finding(4).unwrap().distances.common_factor(), Some(5));
    assert_eq!(report.best_key_length(), Some(5));

    // Kasiski factoring agrees: every tetragram distance is divisible by 5
    let tetragram_count = report.finding(4).unwrap().distances.distances().len();
    let by_five = report
        .finding(4)
        .unwrap()
        .distances
        .factor_tally(5)
        .into_iter()
        .find(|&(length, _)| length == 5)
        .map(|(_, count)| count);
    assert_eq!(by_five, Some(tetragram_count));

    let (key, _) = recover(&report, 5, &config).unwrap();
    assert_eq!(key.key(), "LEMON");
}

#[test]
fn test_passage_seven_letter_key() {
    let ciphertext = vigenere_encrypt(PASSAGE, "KASISKI").unwrap();
    let report = analyze(&ciphertext, &sweep_config(10)).unwrap();

    assert_eq!(report.best_key_length(), Some(7));
    assert_eq!(report.finding(4).unwrap().distances.common_factor(), Some(7));

    let key = RecoveredKey::recover(&report.ciphertext, 7, &ENGLISH_FREQUENCIES).unwrap();
    assert_eq!(key.key(), "KASISKI");
}

#[test]
fn test_run_attack_end_to_end() {
    let ciphertext = vigenere_encrypt(PASSAGE, "LEMON").unwrap();
    let request = AttackRequest {
        key_length: Some(5),
        manual_key: Some("LEMNO".to_string()),
    };
    let outcome = run_attack(&ciphertext, &AnalysisConfig::default(), &request).unwrap();

    let plaintext = NormalizedText::new(PASSAGE);
    assert_eq!(outcome.recovered.unwrap().key(), "LEMON");
    assert_eq!(outcome.decryption.unwrap().plaintext, plaintext.as_str());

    let manual = outcome.manual.unwrap();
    assert_eq!(manual.key, "LEMNO");
    assert_ne!(manual.plaintext, plaintext.as_str());
}

#[test]
fn test_repeated_pangram_key_abc() {
    let plaintext = PANGRAM.repeat(4);
    let ciphertext = vigenere_encrypt(&plaintext, "ABC").unwrap();
    let report = analyze(&ciphertext, &sweep_config(10)).unwrap();

    // The pangram realigns with the key every lcm(35, 3) = 105 letters
    let tetragrams = report.finding(4).unwrap();
    assert!(!tetragrams.index.is_empty());
    assert!(tetragrams.distances.distances().iter().all(|d| d % 3 == 0));
    let gcd = tetragrams.distances.common_factor().unwrap();
    assert_eq!(gcd % 3, 0);

    // 47 letters per column is too few for column 0; the others come back right
    let (key, decryption) = recover(&report, 3, &sweep_config(10)).unwrap();
    assert_eq!(key.key().len(), 3);
    assert!(key.key().ends_with("BC"));
    assert_eq!(decryption.plaintext.len(), plaintext.len());
}

#[test]
fn test_no_letters() {
    let report = analyze("1234 5678 !!!", &AnalysisConfig::default()).unwrap();

    assert!(report.ciphertext.is_empty());
    assert_eq!(report.merged.gcd(), 1);
    assert_eq!(report.merged.common_factor(), None);
    assert!(report.ic.hypotheses().iter().all(|h| h.avg_ic == 0.0));
}

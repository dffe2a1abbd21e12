use std::fs;

use kasiski::io::{read_text, write_prefixed, OutputPrefix};
use kasiski::{vigenere_decrypt, vigenere_encrypt, ErrorKind};

#[test]
fn test_prefixed_output_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("message.txt");
    fs::write(&input, "Attack at dawn!").unwrap();

    let content = read_text(&input).unwrap();
    let encrypted = vigenere_encrypt(&content, "LEMON").unwrap();
    let output = write_prefixed(&input, OutputPrefix::Encrypted, &encrypted).unwrap();

    assert_eq!(output, dir.path().join("encrypted_message.txt"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "LXFOPV EF RNHR!");

    let decrypted = vigenere_decrypt(&read_text(&output).unwrap(), "LEMON").unwrap();
    let output = write_prefixed(&output, OutputPrefix::Decrypted, &decrypted).unwrap();
    assert_eq!(output, dir.path().join("decrypted_encrypted_message.txt"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "ATTACK AT DAWN!");
}

#[test]
fn test_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_text(&dir.path().join("absent.txt")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FileNotFound);
}

#[test]
fn test_unwritable_output() {
    let dir = tempfile::tempdir().unwrap();
    // The parent of the output path does not exist
    let input = dir.path().join("missing_dir").join("plain.txt");
    let err = write_prefixed(&input, OutputPrefix::Shifted, "TEXT").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::WriteFailed);
}

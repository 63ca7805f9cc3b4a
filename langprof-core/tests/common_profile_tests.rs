//! Integration tests for the common baseline profile

use langprof_core::{common_profile, get_profile_or_common, load_profile_file, ProfileError};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_common_sentence_split() {
    let common = common_profile().unwrap();
    let sentences: Vec<_> = common
        .sentences("This is one. This is two! Is this three? Yes")
        .collect();
    assert_eq!(
        sentences,
        vec!["This is one. ", "This is two! ", "Is this three? ", "Yes"]
    );
}

#[test]
fn test_common_requires_space() {
    let common = common_profile().unwrap();
    let sentences: Vec<_> = common.sentences("No.Space.Here").collect();
    assert_eq!(sentences, vec!["No.Space.Here"]);
}

#[test]
fn test_common_lowercase_continuation() {
    let common = common_profile().unwrap();
    let sentences: Vec<_> = common.sentences("Use e.g. this one. Then stop.").collect();
    assert_eq!(sentences, vec!["Use e.g. this one. ", "Then stop."]);
}

#[test]
fn test_common_mixed_script_terminators() {
    let common = common_profile().unwrap();
    let sentences: Vec<_> = common.sentences("你好。 World").collect();
    assert_eq!(sentences, vec!["你好。 ", "World"]);

    // no whitespace: the common profile does not split Chinese text
    let sentences: Vec<_> = common.sentences("你好。再见").collect();
    assert_eq!(sentences, vec!["你好。再见"]);
}

#[test]
fn test_common_words_and_capitals() {
    let common = common_profile().unwrap();
    let words: Vec<_> = common.words("“Hello,” she said — (quietly).").collect();
    assert_eq!(words, vec!["Hello", "she", "said", "—", "quietly"]);
    assert!(common.starts_with_capital("¿Qué?"));
    assert!(!common.starts_with_capital("«bonjour»"));
}

#[test]
fn test_unknown_locale_falls_back_to_common() {
    let profile = get_profile_or_common("de_DE").unwrap();
    assert_eq!(profile.code(), "common");
    assert_eq!(profile.translate_punctuation("Hallo. Welt."), "Hallo. Welt.");
}

#[test]
fn test_load_profile_file_overrides_common() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(
        temp_file,
        r#"
list_separator = "、"

[metadata]
code = "ja"
name = "Japanese"

[sentences]
terminators = ["。", "！", "？"]
trailing_space = "optional"
capital_start = false

[[punctuation]]
from = ". "
to = "。"
"#
    )
    .unwrap();

    let profile = load_profile_file(temp_file.path()).unwrap();
    assert_eq!(profile.code(), "ja");
    assert_eq!(profile.list_separator(), "、");
    let sentences: Vec<_> = profile.sentences("これはペンです。あれは本です。").collect();
    assert_eq!(sentences, vec!["これはペンです。", "あれは本です。"]);
    // inherited from common
    assert_eq!(profile.length_difference(30), 0);
}

#[test]
fn test_load_profile_file_rejects_duplicate_keys() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(
        temp_file,
        r#"
[metadata]
code = "xx"
name = "Broken"

[[punctuation]]
from = ". "
to = "。"

[[punctuation]]
from = ". "
to = "．"
"#
    )
    .unwrap();

    let result = load_profile_file(temp_file.path());
    assert!(matches!(result, Err(ProfileError::InvalidConfig(_))));
}

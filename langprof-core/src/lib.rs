//! Language profiles for translation and localization tooling
//!
//! A language profile holds the locale-specific rules generic translation
//! tooling needs: how to split text into sentences, how Western punctuation
//! maps onto the language's own marks, how long a translation is expected to
//! be relative to its source, and which generic checks to skip.
//!
//! Profiles are described in TOML and layered over a common baseline, so a
//! language only states what it overrides. Chinese ships built in.
//!
//! # Example
//!
//! ```rust
//! use langprof_core::get_profile;
//!
//! let zh = get_profile("zh_CN").unwrap();
//!
//! let sentences: Vec<_> = zh.sentences("今天天气很好。你好！再见").collect();
//! assert_eq!(sentences, vec!["今天天气很好。", "你好！", "再见"]);
//!
//! assert_eq!(zh.punctuation().get(". "), Some("。"));
//! assert_eq!(zh.translate_punctuation("Hello: world."), "Hello：world。");
//! assert_eq!(zh.length_difference(20), 0);
//! assert!(zh.ignores_test("startcaps"));
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod profile;

pub use config::ProfileConfig;
pub use error::{ProfileError, Result};
pub use loader::{
    available_languages, chinese, common_profile, get_profile, get_profile_or_common,
    load_profile_file, ProfileRegistry, COMMON_CODE,
};
pub use profile::{
    BoundaryMatcher, LanguageProfile, LengthRule, PunctuationEntry, PunctuationTable, Sentences,
    TrailingSpace,
};

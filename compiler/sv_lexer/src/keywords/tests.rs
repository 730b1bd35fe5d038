use std::collections::HashSet;

use super::*;

// === Lookup ===

#[test]
fn basic_keywords() {
    let v = KeywordVersion::LATEST;
    assert_eq!(Keyword::lookup("module", v), Some(Keyword::Module));
    assert_eq!(Keyword::lookup("always_ff", v), Some(Keyword::AlwaysFF));
    assert_eq!(Keyword::lookup("$unit", v), Some(Keyword::UnitSystemName));
    assert_eq!(Keyword::lookup("modules", v), None);
    assert_eq!(Keyword::lookup("Module", v), None);
}

#[test]
fn later_keywords_are_identifiers_in_older_revisions() {
    assert_eq!(
        Keyword::lookup("logic", KeywordVersion::V1364_2005),
        None
    );
    assert_eq!(
        Keyword::lookup("logic", KeywordVersion::V1800_2005),
        Some(Keyword::Logic)
    );
    assert_eq!(
        Keyword::lookup("soft", KeywordVersion::V1800_2009),
        None
    );
    assert_eq!(
        Keyword::lookup("soft", KeywordVersion::V1800_2012),
        Some(Keyword::Soft)
    );
}

#[test]
fn config_keywords_need_full_2001() {
    assert_eq!(
        Keyword::lookup("generate", KeywordVersion::V1364_2001NoConfig),
        Some(Keyword::Generate)
    );
    assert_eq!(
        Keyword::lookup("config", KeywordVersion::V1364_2001NoConfig),
        None
    );
    assert_eq!(
        Keyword::lookup("config", KeywordVersion::V1364_2001),
        Some(Keyword::Config)
    );
}

#[test]
fn length_guard() {
    assert_eq!(Keyword::lookup("", KeywordVersion::LATEST), None);
    assert_eq!(Keyword::lookup("a", KeywordVersion::LATEST), None);
    assert_eq!(
        Keyword::lookup("pulsestyle_ondetect", KeywordVersion::LATEST),
        Some(Keyword::PulseStyleOnDetect)
    );
}

// === Table Consistency ===

#[test]
fn every_keyword_resolves_to_itself() {
    for &kw in Keyword::ALL {
        assert_eq!(
            Keyword::lookup(kw.as_str(), kw.introduced()),
            Some(kw),
            "{kw} does not round trip"
        );
    }
}

#[test]
fn spellings_are_unique() {
    let spellings: HashSet<&str> = Keyword::ALL.iter().map(|kw| kw.as_str()).collect();
    assert_eq!(spellings.len(), Keyword::ALL.len());
}

#[test]
fn keyword_counts_per_revision() {
    let count = |v: KeywordVersion| {
        Keyword::ALL
            .iter()
            .filter(|kw| kw.introduced() <= v)
            .count()
    };
    assert_eq!(count(KeywordVersion::V1364_1995), 102);
    assert_eq!(count(KeywordVersion::V1364_2001NoConfig), 113);
    assert_eq!(count(KeywordVersion::V1364_2001), 123);
    assert_eq!(count(KeywordVersion::V1364_2005), 124);
    assert_eq!(count(KeywordVersion::V1800_2017), count(KeywordVersion::V1800_2012));
}

// === Version Specifiers ===

#[test]
fn specifiers_round_trip() {
    for &v in KeywordVersion::ALL {
        assert_eq!(KeywordVersion::from_specifier(v.specifier()), Some(v));
    }
    assert_eq!(KeywordVersion::from_specifier("1800-2023"), None);
    assert_eq!(KeywordVersion::V1800_2017.to_string(), "1800-2017");
}

#[test]
fn versions_are_ordered() {
    assert!(KeywordVersion::V1364_2001NoConfig < KeywordVersion::V1364_2001);
    assert!(KeywordVersion::V1364_2005 < KeywordVersion::V1800_2005);
    assert!(KeywordVersion::ALL.windows(2).all(|w| w[0] < w[1]));
}

use std::collections::HashMap;

use rlint_core::lang::keywords;
use rlint_core::lang::operators::{self, Associativity, OperatorId};
use rlint_core::lang::punctuation::{self, PunctuationCategory};

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn keyword_lookup_is_case_sensitive() {
    assert_eq!(keywords::from_str("NULL"), Some(keywords::KeywordId::Null));
    assert_eq!(keywords::from_str("null"), None);
    assert_eq!(keywords::from_str("True"), None);
    assert_eq!(keywords::from_str("T"), None);
}

#[test]
fn operators_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, OperatorId> = HashMap::new();

    for info in operators::OPERATORS {
        for &spelling in info.spellings {
            assert_eq!(
                operators::from_str(spelling),
                Some(info.id),
                "operator spelling not resolvable: {}",
                spelling
            );
            if let Some(prev) = seen.insert(spelling, info.id) {
                panic!("duplicate operator spelling {:?}: {:?} and {:?}", spelling, prev, info.id);
            }
        }
        assert!(
            !info.spellings.is_empty() || info.id == OperatorId::Special,
            "operator {:?} has no spelling",
            info.id
        );
    }
}

#[test]
fn operators_have_some_position() {
    for info in operators::OPERATORS {
        assert!(
            info.is_infix() || info.prefix_precedence.is_some(),
            "operator {:?} is neither infix nor prefix",
            info.id
        );
    }
}

#[test]
fn precedence_levels_are_spaced_for_binding_powers() {
    for info in operators::OPERATORS {
        assert_eq!(info.precedence % 10, 0, "{:?} precedence not a multiple of ten", info.id);
        if let Some(prefix) = info.prefix_precedence {
            assert_eq!(prefix % 10, 0, "{:?} prefix precedence not a multiple of ten", info.id);
        }
    }
}

#[test]
fn precedence_ladder_matches_language_grammar() {
    let p = |id| operators::info_for(id).precedence;
    let ladder = [
        OperatorId::Question,
        OperatorId::Equals,
        OperatorId::LeftAssign,
        OperatorId::RightAssign,
        OperatorId::Tilde,
        OperatorId::OrOr,
        OperatorId::AndAnd,
        OperatorId::EqEq,
        OperatorId::Plus,
        OperatorId::Star,
        OperatorId::Special,
        OperatorId::Colon,
        OperatorId::Caret,
        OperatorId::Dollar,
        OperatorId::ColonColon,
    ];
    for pair in ladder.windows(2) {
        assert!(p(pair[0]) < p(pair[1]), "{:?} should bind looser than {:?}", pair[0], pair[1]);
    }

    let not = operators::info_for(OperatorId::Not).prefix_precedence;
    assert_eq!(not, Some(80));
    let unary_minus = operators::info_for(OperatorId::Minus).prefix_precedence;
    assert!(unary_minus > Some(p(OperatorId::Colon)));
    assert!(unary_minus < Some(p(OperatorId::Caret)));
}

#[test]
fn associativity_follows_arrow_direction() {
    assert_eq!(operators::info_for(OperatorId::LeftAssign).associativity, Associativity::Right);
    assert_eq!(operators::info_for(OperatorId::RightAssign).associativity, Associativity::Left);
    assert_eq!(operators::info_for(OperatorId::Caret).associativity, Associativity::Right);
    assert_eq!(operators::info_for(OperatorId::Lt).associativity, Associativity::None);
}

#[test]
fn longest_match_prefers_longer_spellings() {
    assert_eq!(operators::longest_match("<<-x"), Some((OperatorId::SuperLeftAssign, 3)));
    assert_eq!(operators::longest_match("<-x"), Some((OperatorId::LeftAssign, 2)));
    assert_eq!(operators::longest_match("< -x"), Some((OperatorId::Lt, 1)));
    assert_eq!(operators::longest_match("->>"), Some((OperatorId::SuperRightAssign, 3)));
    assert_eq!(operators::longest_match(":::f"), Some((OperatorId::ColonColonColon, 3)));
    assert_eq!(operators::longest_match("**2"), Some((OperatorId::Caret, 2)));
    assert_eq!(operators::longest_match("|>f"), Some((OperatorId::Pipe, 2)));
    assert_eq!(operators::longest_match("x"), None);
}

#[test]
fn special_operators_share_one_id() {
    assert_eq!(operators::from_str("%in%"), Some(OperatorId::Special));
    assert_eq!(operators::from_str("%>%"), Some(OperatorId::Special));
    assert_eq!(operators::from_str("%%"), Some(OperatorId::Modulo));
    assert_eq!(operators::from_str("%a%b%"), None);
}

#[test]
fn punctuation_spellings_unique_and_paired() {
    let mut seen: HashMap<&'static str, punctuation::PunctuationId> = HashMap::new();

    for info in punctuation::PUNCTUATION {
        assert_eq!(punctuation::from_str(info.canonical), Some(info.id));
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!("duplicate punctuation spelling {:?}: {:?} and {:?}", info.canonical, prev, info.id);
        }
        match info.category {
            PunctuationCategory::Open => {
                let close = punctuation::closing_for(info.id).expect("open delimiter without a closer");
                assert_eq!(punctuation::category(close), PunctuationCategory::Close);
            }
            _ => assert_eq!(punctuation::closing_for(info.id), None),
        }
    }
}

use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::Display;

use super::replies;

/// Category tag attached to every generated reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ReplyKind {
    Greeting,
    Identity,
    WellBeing,
    Gratitude,
    SmallTalk,
    Hobbies,
    Life,
    TechnicalAnalysis,
    DayTrading,
    TradingBasics,
    MarketSentiment,
    Fallback,
}

/// A generated reply: canned text plus its category tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub kind: ReplyKind,
}

/// How a matched rule produces its text.
enum Body {
    /// One fixed text.
    Fixed(&'static str),
    /// Uniform random pick from a fixed set.
    OneOf(&'static [&'static str]),
}

/// One entry of the dispatch table: keyword set plus response producer.
struct Rule {
    kind: ReplyKind,
    keywords: &'static [&'static str],
    body: Body,
}

/// Priority-ordered dispatch table, evaluated top to bottom; the first rule
/// whose keyword set matches wins. An input may satisfy several keyword sets,
/// so the ordering itself is part of the compatibility contract.
const RULES: &[Rule] = &[
    Rule {
        kind: ReplyKind::Greeting,
        keywords: &["hi", "hello", "hey"],
        body: Body::OneOf(&replies::GREETINGS),
    },
    Rule {
        kind: ReplyKind::Identity,
        keywords: &["name", "who are you", "what are you"],
        body: Body::Fixed(replies::IDENTITY),
    },
    Rule {
        kind: ReplyKind::WellBeing,
        keywords: &["how are you", "how's it going", "what's up"],
        body: Body::OneOf(&replies::WELL_BEING),
    },
    Rule {
        kind: ReplyKind::Gratitude,
        keywords: &["thank", "thanks"],
        body: Body::OneOf(&replies::GRATITUDE),
    },
    Rule {
        kind: ReplyKind::SmallTalk,
        keywords: &["weather", "today"],
        body: Body::Fixed(replies::SMALL_TALK),
    },
    Rule {
        kind: ReplyKind::Hobbies,
        keywords: &["hobby", "interest", "fun", "do you like"],
        body: Body::Fixed(replies::HOBBIES),
    },
    Rule {
        kind: ReplyKind::Life,
        keywords: &["life", "advice", "philosophy"],
        body: Body::Fixed(replies::LIFE),
    },
    Rule {
        kind: ReplyKind::TechnicalAnalysis,
        keywords: &["technical analysis", "aapl", "stock"],
        body: Body::Fixed(replies::TECHNICAL_ANALYSIS),
    },
    Rule {
        kind: ReplyKind::DayTrading,
        keywords: &["day trading", "setups", "us day"],
        body: Body::Fixed(replies::DAY_TRADING),
    },
    Rule {
        kind: ReplyKind::TradingBasics,
        keywords: &["beginner", "basics", "us stock trading basics"],
        body: Body::Fixed(replies::TRADING_BASICS),
    },
    Rule {
        kind: ReplyKind::MarketSentiment,
        keywords: &["sentiment", "market mood", "us market sentiment"],
        body: Body::Fixed(replies::MARKET_SENTIMENT),
    },
];

/// Select a reply for `input`.
///
/// Matching is a case-insensitive substring test against the lowercased
/// input. Total over all inputs: anything that matches no rule, including
/// the empty string, falls through to [`ReplyKind::Fallback`], which echoes
/// the original input verbatim.
pub fn select(input: &str, rng: &mut impl Rng) -> Reply {
    let lowered = input.to_lowercase();
    for rule in RULES {
        if rule.keywords.iter().any(|keyword| lowered.contains(keyword)) {
            let text = match rule.body {
                Body::Fixed(text) => text.to_owned(),
                Body::OneOf(set) => set[rng.random_range(0..set.len())].to_owned(),
            };
            return Reply {
                text,
                kind: rule.kind,
            };
        }
    }
    Reply {
        text: replies::fallback(input),
        kind: ReplyKind::Fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn greeting_inputs_return_one_of_the_three_greetings() {
        let mut rng = rng();
        for input in ["hi", "Hello everyone", "HEY you", "oh hi there"] {
            let reply = select(input, &mut rng);
            assert_eq!(reply.kind, ReplyKind::Greeting, "input: {input}");
            assert!(
                replies::GREETINGS.contains(&reply.text.as_str()),
                "unexpected greeting for input: {input}"
            );
        }
    }

    #[test]
    fn greeting_outranks_identity() {
        // "hi, what's my name" satisfies both the greeting and identity
        // keyword sets; the greeting rule is evaluated first and must win.
        let reply = select("hi, what's my name", &mut rng());
        assert_eq!(reply.kind, ReplyKind::Greeting);
        assert!(replies::GREETINGS.contains(&reply.text.as_str()));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let reply = select("TELL ME ABOUT AAPL", &mut rng());
        assert_eq!(reply.kind, ReplyKind::TechnicalAnalysis);
    }

    #[test]
    fn each_rule_fires_on_its_own_keywords() {
        let mut rng = rng();
        let cases = [
            ("who are you exactly?", ReplyKind::Identity),
            ("how's it going", ReplyKind::WellBeing),
            ("thank you so much", ReplyKind::Gratitude),
            ("nice weather we're having", ReplyKind::SmallTalk),
            ("got any hobby?", ReplyKind::Hobbies),
            ("any advice for me?", ReplyKind::Life),
            ("run a technical analysis", ReplyKind::TechnicalAnalysis),
            ("best day trading plays", ReplyKind::DayTrading),
            ("I'm a beginner", ReplyKind::TradingBasics),
            ("current market mood?", ReplyKind::MarketSentiment),
        ];
        for (input, expected) in cases {
            assert_eq!(select(input, &mut rng).kind, expected, "input: {input}");
        }
    }

    #[test]
    fn empty_input_falls_through_and_echoes_the_empty_string() {
        let reply = select("", &mut rng());
        assert_eq!(reply.kind, ReplyKind::Fallback);
        assert!(reply.text.contains(r#"asking about """#));
    }

    #[test]
    fn unmatched_input_is_echoed_verbatim() {
        let reply = select("purple elephant", &mut rng());
        assert_eq!(reply.kind, ReplyKind::Fallback);
        assert!(reply.text.contains("purple elephant"));
    }

    #[test]
    fn fallback_echo_preserves_original_casing() {
        let reply = select("Purple ELEPHANT", &mut rng());
        assert!(reply.text.contains("Purple ELEPHANT"));
    }

    #[test]
    fn fixed_seed_makes_random_picks_deterministic() {
        let first = select("hello", &mut StdRng::seed_from_u64(7));
        let second = select("hello", &mut StdRng::seed_from_u64(7));
        assert_eq!(first.text, second.text);
    }

    #[test]
    fn substring_match_applies_anywhere_in_the_input() {
        // "this" contains "hi" — the original matched it as a greeting, and
        // that behavior is part of the compatibility contract.
        let reply = select("this", &mut rng());
        assert_eq!(reply.kind, ReplyKind::Greeting);
    }

    #[test]
    fn selector_is_total_over_arbitrary_input() {
        let mut rng = rng();
        for input in ["", " ", "\n", "🙂", "ß", "a".repeat(10_000).as_str()] {
            let reply = select(input, &mut rng);
            assert!(!reply.text.is_empty());
        }
    }
}

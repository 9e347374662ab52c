//! Property-based tests for trust scoring.
//!
//! The score must stay within its bounds for any agent, and adding
//! information to an agent must never lower it.

use proptest::prelude::*;
use serde_json::{json, Value};

use agentsync::agent::trust::{BASE_SCORE, MAX_SCORE};
use agentsync::protocols::{AgentInput, ProtocolRegistry};
use agentsync::{calculate_trust_score, Agent, Skill, Skills};

/// Skills either as a bare count or as a list of declared skills.
fn skills() -> impl Strategy<Value = Skills> {
    let skill = ("[a-z]{1,8}", "[A-Za-z ]{1,16}").prop_map(|(id, name)| Skill {
        id,
        name,
        description: None,
        tags: vec![],
    });
    prop_oneof![
        (0u64..20).prop_map(Skills::Count),
        prop::collection::vec(skill, 0..8).prop_map(Skills::List),
    ]
}

/// Strategy for generating canonical agents with every optional field varied.
fn agent() -> impl Strategy<Value = Agent> {
    (
        "[a-zA-Z ]{0,80}",
        proptest::option::of("https://[a-z]{1,10}\\.dev"),
        prop_oneof![Just(String::new()), "[0-9]\\.[0-9]\\.[0-9]".prop_map(String::from)],
        prop::collection::vec("[a-z_:]{1,12}", 0..12),
        skills(),
        any::<bool>(),
    )
        .prop_map(
            |(description, owner_url, version, capabilities, skills, auth)| Agent {
                description,
                owner_url,
                version,
                capabilities,
                skills,
                authentication: auth.then(|| json!({"type": "api_key"})),
                ..Agent::default()
            },
        )
}

/// Strategy for generating arbitrary JSON objects with format-ish keys mixed in.
fn json_object() -> impl Strategy<Value = Value> {
    let key = prop_oneof![
        Just("name".to_string()),
        Just("id".to_string()),
        Just("agentId".to_string()),
        Just("methods".to_string()),
        Just("memory".to_string()),
        Just("skills".to_string()),
        Just("tools".to_string()),
        Just("ai_goals".to_string()),
        Just("capabilities".to_string()),
        "[a-z_]{1,8}",
    ];
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1000i64..1000).prop_map(|n| json!(n)),
        "[a-zA-Z0-9 ]{0,20}".prop_map(|s| json!(s)),
    ];
    let value = leaf.prop_recursive(2, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z_]{1,8}", inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    });

    prop::collection::btree_map(key, value, 0..8)
        .prop_map(|map| Value::Object(map.into_iter().collect()))
}

proptest! {
    #[test]
    fn test_score_is_bounded(agent in agent()) {
        let score = calculate_trust_score(&agent);
        prop_assert!((BASE_SCORE..=MAX_SCORE).contains(&score));
    }

    #[test]
    fn test_longer_description_never_lowers_score(agent in agent(), extra in "[a-z ]{0,60}") {
        let before = calculate_trust_score(&agent);
        let mut richer = agent.clone();
        richer.description.push_str(&extra);
        prop_assert!(calculate_trust_score(&richer) >= before);
    }

    #[test]
    fn test_more_capabilities_never_lower_score(agent in agent(), tag in "[a-z]{1,10}") {
        let before = calculate_trust_score(&agent);
        let mut richer = agent.clone();
        richer.capabilities.push(tag);
        prop_assert!(calculate_trust_score(&richer) >= before);
    }

    #[test]
    fn test_more_skills_never_lower_score(agent in agent()) {
        let before = calculate_trust_score(&agent);
        let mut richer = agent.clone();
        richer.skills = Skills::Count(richer.skills.count() + 1);
        prop_assert!(calculate_trust_score(&richer) >= before);
    }

    #[test]
    fn test_adding_version_never_lowers_score(agent in agent()) {
        let mut unversioned = agent.clone();
        unversioned.version = String::new();
        let before = calculate_trust_score(&unversioned);

        let mut versioned = unversioned.clone();
        versioned.version = "1.0.0".to_string();
        prop_assert!(calculate_trust_score(&versioned) >= before);
    }

    #[test]
    fn test_adding_auth_and_owner_url_never_lowers_score(agent in agent()) {
        let before = calculate_trust_score(&agent);
        let mut richer = agent.clone();
        richer.authentication = Some(json!({"type": "oauth2"}));
        richer.owner_url = Some("https://example.com".to_string());
        prop_assert!(calculate_trust_score(&richer) >= before);
    }

    /// Any object some adapter claims must parse, and score in range.
    #[test]
    fn test_claimed_objects_always_parse(data in json_object()) {
        let registry = ProtocolRegistry::load();
        let input = AgentInput::from(data);

        if let Some(adapter) = registry.detect(&input) {
            match adapter.parse(&input) {
                Ok(agent) => {
                    let score = calculate_trust_score(&agent);
                    prop_assert!((BASE_SCORE..=MAX_SCORE).contains(&score));
                }
                Err(e) => prop_assert!(false, "{} failed: {}", adapter.name(), e),
            }
        }
    }
}

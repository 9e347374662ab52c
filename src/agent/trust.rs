//! Completeness-based trust score.

use super::definition::Agent;

pub const BASE_SCORE: u32 = 70;
pub const MAX_SCORE: u32 = 100;

const DESCRIPTION_THRESHOLD: usize = 50;
const DESCRIPTION_POINTS: u32 = 5;
const OWNER_URL_POINTS: u32 = 3;
const VERSION_POINTS: u32 = 2;
const POINTS_PER_CAPABILITY: u32 = 2;
const POINTS_PER_SKILL: u32 = 2;
const LIST_POINTS_CAP: u32 = 10;
const AUTHENTICATION_POINTS: u32 = 5;

/// Score an agent in `[BASE_SCORE, MAX_SCORE]`.
///
/// Every contribution is non-negative, so adding information to an agent never
/// lowers its score.
pub fn calculate_trust_score(agent: &Agent) -> u32 {
    let mut score = BASE_SCORE;

    if agent.description.chars().count() > DESCRIPTION_THRESHOLD {
        score += DESCRIPTION_POINTS;
    }
    if agent.owner_url.as_deref().is_some_and(|url| !url.is_empty()) {
        score += OWNER_URL_POINTS;
    }
    if !agent.version.is_empty() {
        score += VERSION_POINTS;
    }

    score += capped(agent.capabilities.len() as u64, POINTS_PER_CAPABILITY);
    score += capped(agent.skills.count(), POINTS_PER_SKILL);

    if agent.authentication.is_some() {
        score += AUTHENTICATION_POINTS;
    }

    score.min(MAX_SCORE)
}

fn capped(count: u64, points_each: u32) -> u32 {
    count
        .saturating_mul(u64::from(points_each))
        .min(u64::from(LIST_POINTS_CAP)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::definition::Skills;
    use serde_json::json;

    fn bare() -> Agent {
        Agent {
            version: String::new(),
            ..Agent::default()
        }
    }

    #[test]
    fn test_base_score() {
        assert_eq!(calculate_trust_score(&bare()), 70);
    }

    #[test]
    fn test_default_agent_gets_version_points() {
        assert_eq!(calculate_trust_score(&Agent::default()), 72);
    }

    #[test]
    fn test_description_threshold_is_exclusive() {
        let mut agent = bare();
        agent.description = "x".repeat(50);
        assert_eq!(calculate_trust_score(&agent), 70);

        agent.description = "x".repeat(51);
        assert_eq!(calculate_trust_score(&agent), 75);
    }

    #[test]
    fn test_owner_url_points() {
        let mut agent = bare();
        agent.owner_url = Some("https://example.com".to_string());
        assert_eq!(calculate_trust_score(&agent), 73);
    }

    #[test]
    fn test_capabilities_capped() {
        let mut agent = bare();
        agent.capabilities = vec!["a".to_string(), "b".to_string()];
        assert_eq!(calculate_trust_score(&agent), 74);

        agent.capabilities = (0..12).map(|i| format!("cap{}", i)).collect();
        assert_eq!(calculate_trust_score(&agent), 80);
    }

    #[test]
    fn test_skills_count_and_list() {
        let mut agent = bare();
        agent.skills = Skills::Count(3);
        assert_eq!(calculate_trust_score(&agent), 76);

        agent.skills = Skills::Count(u64::MAX);
        assert_eq!(calculate_trust_score(&agent), 80);
    }

    #[test]
    fn test_authentication_points() {
        let mut agent = bare();
        agent.authentication = Some(json!({"schemes": ["oauth2"]}));
        assert_eq!(calculate_trust_score(&agent), 75);
    }

    #[test]
    fn test_score_clamped_to_max() {
        let agent = Agent {
            description: "d".repeat(80),
            owner_url: Some("https://example.com".to_string()),
            capabilities: (0..10).map(|i| i.to_string()).collect(),
            skills: Skills::Count(10),
            authentication: Some(json!({})),
            ..Agent::default()
        };
        assert_eq!(calculate_trust_score(&agent), MAX_SCORE);
    }
}

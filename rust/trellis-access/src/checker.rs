use async_trait::async_trait;
use trellis_credentials::Credentials;

use crate::{
    AccessRule, TrellisAccessError,
    vocab::{acl, foaf},
};

/// Decides whether a parsed access rule covers a given credential.
///
/// Rule semantics beyond "modes plus applicability" live behind this trait:
/// the reader asks, per rule and per credential kind, "does this rule apply
/// to these credentials?" and unions the granted modes of the rules that do.
/// Checks carry no ordering dependency, so callers are free to evaluate them
/// concurrently.
#[async_trait]
pub trait AccessChecker: Send + Sync {
    /// Whether `rule` covers `credentials`.
    async fn applies(
        &self,
        rule: &AccessRule,
        credentials: &Credentials,
    ) -> Result<bool, TrellisAccessError>;
}

/// Matches rules naming a specific agent: the rule applies when one of its
/// `acl:agent` WebIDs equals the credential's WebID.
#[derive(Debug, Clone, Copy, Default)]
pub struct AgentAccessChecker;

#[async_trait]
impl AccessChecker for AgentAccessChecker {
    async fn applies(
        &self,
        rule: &AccessRule,
        credentials: &Credentials,
    ) -> Result<bool, TrellisAccessError> {
        Ok(credentials
            .web_id
            .as_deref()
            .is_some_and(|web_id| rule.agents.iter().any(|agent| agent.as_str() == web_id)))
    }
}

/// Matches rules naming an agent class: `foaf:Agent` covers everyone, while
/// `acl:AuthenticatedAgent` covers any credential carrying a WebID.
#[derive(Debug, Clone, Copy, Default)]
pub struct AgentClassAccessChecker;

#[async_trait]
impl AccessChecker for AgentClassAccessChecker {
    async fn applies(
        &self,
        rule: &AccessRule,
        credentials: &Credentials,
    ) -> Result<bool, TrellisAccessError> {
        let applies = rule.agent_classes.iter().any(|class| {
            class.as_str() == foaf::AGENT
                || (class.as_str() == acl::AUTHENTICATED_AGENT && credentials.web_id.is_some())
        });
        Ok(applies)
    }
}

/// Combines several checkers: a rule applies as soon as any member says so.
pub struct AnyAccessChecker {
    checkers: Vec<Box<dyn AccessChecker>>,
}

impl AnyAccessChecker {
    /// Combine the given checkers, in order.
    pub fn new(checkers: Vec<Box<dyn AccessChecker>>) -> Self {
        Self { checkers }
    }

    /// The usual WAC applicability rules: specific agents and agent classes.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(AgentAccessChecker),
            Box::new(AgentClassAccessChecker),
        ])
    }
}

#[async_trait]
impl AccessChecker for AnyAccessChecker {
    async fn applies(
        &self,
        rule: &AccessRule,
        credentials: &Credentials,
    ) -> Result<bool, TrellisAccessError> {
        for checker in &self.checkers {
            if checker.applies(rule, credentials).await? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Term;

    fn rule(agents: Vec<&str>, classes: Vec<&str>) -> AccessRule {
        AccessRule {
            node: Term::from("auth"),
            modes: Vec::new(),
            access_to: Vec::new(),
            default: Vec::new(),
            agents: agents.into_iter().map(Term::from).collect(),
            agent_classes: classes.into_iter().map(Term::from).collect(),
        }
    }

    #[tokio::test]
    async fn agent_checker_requires_an_exact_web_id_match() {
        let checker = AgentAccessChecker;
        let rule = rule(vec!["http://test.com/user"], vec![]);
        let matching = Credentials::with_web_id("http://test.com/user");
        let other = Credentials::with_web_id("http://test.com/other");
        assert!(checker.applies(&rule, &matching).await.unwrap());
        assert!(!checker.applies(&rule, &other).await.unwrap());
        assert!(!checker.applies(&rule, &Credentials::default()).await.unwrap());
    }

    #[tokio::test]
    async fn foaf_agent_rules_cover_everyone() {
        let checker = AgentClassAccessChecker;
        let rule = rule(vec![], vec![foaf::AGENT]);
        assert!(checker.applies(&rule, &Credentials::default()).await.unwrap());
        assert!(
            checker
                .applies(&rule, &Credentials::with_web_id("http://test.com/user"))
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn authenticated_agent_rules_require_a_web_id() {
        let checker = AgentClassAccessChecker;
        let rule = rule(vec![], vec![acl::AUTHENTICATED_AGENT]);
        assert!(!checker.applies(&rule, &Credentials::default()).await.unwrap());
        assert!(
            checker
                .applies(&rule, &Credentials::with_web_id("http://test.com/user"))
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn the_standard_checker_combines_both() {
        let checker = AnyAccessChecker::standard();
        let agent_rule = rule(vec!["http://test.com/user"], vec![]);
        let public_rule = rule(vec![], vec![foaf::AGENT]);
        let credentials = Credentials::with_web_id("http://test.com/user");
        assert!(checker.applies(&agent_rule, &credentials).await.unwrap());
        assert!(checker.applies(&public_rule, &Credentials::default()).await.unwrap());
        assert!(
            !checker
                .applies(&agent_rule, &Credentials::default())
                .await
                .unwrap()
        );
    }
}

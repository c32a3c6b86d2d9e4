//! The authorization decision engine.
//!
//! Two entry points, one per action category. Ownership-gated actions take a
//! mandatory [`OwnershipFact`], so a decision can never be requested without
//! the fact it depends on; role-only actions take none, so nothing tempts a
//! caller into a needless upstream lookup.
//!
//! - No IO
//! - No panics
//! - Pure: same inputs, same decision, nothing mutated

use pressgate_core::{OwnedAction, OwnershipFact, RoleOnlyAction};

use crate::{Principal, Role};

/// Outcome of an authorization decision.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Decide an ownership-gated mutation.
///
/// | Action         | admin | writer              | reader              |
/// |----------------|-------|---------------------|---------------------|
/// | update-article | Allow | Allow iff owner     | Deny                |
/// | update-comment | Allow | Allow iff owner     | Allow iff owner     |
///
/// "iff owner" is exact string equality between the principal identifier and
/// the owner identifier, with no case-folding or normalization.
pub fn decide_owned(
    principal: &Principal,
    action: OwnedAction,
    ownership: &OwnershipFact,
) -> Decision {
    match (principal.role, action) {
        (Role::Admin, _) => Decision::Allow,
        (Role::Writer, OwnedAction::UpdateArticle) => owner_gate(principal, ownership),
        (Role::Reader, OwnedAction::UpdateArticle) => Decision::Deny,
        // Comments are gated on ownership alone; writer gets no special
        // treatment over reader here.
        (Role::Writer | Role::Reader, OwnedAction::UpdateComment) => {
            owner_gate(principal, ownership)
        }
    }
}

/// Decide a role-only mutation. Tag management is admin-only.
///
/// | Action     | admin | writer | reader |
/// |------------|-------|--------|--------|
/// | create-tag | Allow | Deny   | Deny   |
/// | delete-tag | Allow | Deny   | Deny   |
pub fn decide_role_only(principal: &Principal, action: RoleOnlyAction) -> Decision {
    match (principal.role, action) {
        (Role::Admin, RoleOnlyAction::CreateTag | RoleOnlyAction::DeleteTag) => Decision::Allow,
        (Role::Writer | Role::Reader, _) => Decision::Deny,
    }
}

fn owner_gate(principal: &Principal, ownership: &OwnershipFact) -> Decision {
    if principal.id.as_str() == ownership.owner.as_str() {
        Decision::Allow
    } else {
        Decision::Deny
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pressgate_core::OwnerId;

    fn principal(id: &str, role: Role) -> Principal {
        Principal::new(id, role)
    }

    fn owned_by(owner: &str) -> OwnershipFact {
        OwnershipFact::new(OwnerId::new(owner))
    }

    #[test]
    fn admin_updates_any_article() {
        let p = principal("admin-1", Role::Admin);
        let decision = decide_owned(&p, OwnedAction::UpdateArticle, &owned_by("someone-else"));
        assert_eq!(decision, Decision::Allow);
    }

    #[test]
    fn admin_updates_any_comment() {
        let p = principal("admin-1", Role::Admin);
        let decision = decide_owned(&p, OwnedAction::UpdateComment, &owned_by("someone-else"));
        assert_eq!(decision, Decision::Allow);
    }

    #[test]
    fn writer_updates_own_article() {
        let p = principal("writer-123", Role::Writer);
        let decision = decide_owned(&p, OwnedAction::UpdateArticle, &owned_by("writer-123"));
        assert_eq!(decision, Decision::Allow);
    }

    #[test]
    fn writer_denied_on_foreign_article() {
        let p = principal("writer-123", Role::Writer);
        let decision = decide_owned(&p, OwnedAction::UpdateArticle, &owned_by("writer-other"));
        assert_eq!(decision, Decision::Deny);
    }

    #[test]
    fn reader_denied_on_article_even_when_owner() {
        let p = principal("reader-123", Role::Reader);
        let decision = decide_owned(&p, OwnedAction::UpdateArticle, &owned_by("reader-123"));
        assert_eq!(decision, Decision::Deny);
    }

    #[test]
    fn reader_updates_own_comment() {
        let p = principal("reader-123", Role::Reader);
        let decision = decide_owned(&p, OwnedAction::UpdateComment, &owned_by("reader-123"));
        assert_eq!(decision, Decision::Allow);
    }

    #[test]
    fn writer_denied_on_foreign_comment() {
        let p = principal("writer-123", Role::Writer);
        let decision = decide_owned(&p, OwnedAction::UpdateComment, &owned_by("reader-456"));
        assert_eq!(decision, Decision::Deny);
    }

    #[test]
    fn ownership_comparison_is_exact() {
        let p = principal("Writer-123", Role::Writer);
        let decision = decide_owned(&p, OwnedAction::UpdateArticle, &owned_by("writer-123"));
        assert_eq!(decision, Decision::Deny);
    }

    #[test]
    fn tag_actions_are_admin_only() {
        for action in [RoleOnlyAction::CreateTag, RoleOnlyAction::DeleteTag] {
            assert_eq!(
                decide_role_only(&principal("admin-1", Role::Admin), action),
                Decision::Allow
            );
            assert_eq!(
                decide_role_only(&principal("writer-1", Role::Writer), action),
                Decision::Deny
            );
            assert_eq!(
                decide_role_only(&principal("reader-1", Role::Reader), action),
                Decision::Deny
            );
        }
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_role() -> impl Strategy<Value = Role> {
            prop_oneof![Just(Role::Reader), Just(Role::Writer), Just(Role::Admin)]
        }

        fn any_owned_action() -> impl Strategy<Value = OwnedAction> {
            prop_oneof![
                Just(OwnedAction::UpdateArticle),
                Just(OwnedAction::UpdateComment),
            ]
        }

        proptest! {
            /// Admin is allowed regardless of who owns the resource.
            #[test]
            fn admin_always_allowed(
                id in "[a-z0-9-]{1,32}",
                owner in "[a-z0-9-]{1,32}",
                action in any_owned_action(),
            ) {
                let p = principal(&id, Role::Admin);
                prop_assert_eq!(
                    decide_owned(&p, action, &owned_by(&owner)),
                    Decision::Allow
                );
            }

            /// Same inputs, same decision: the engine holds no hidden state.
            #[test]
            fn decisions_are_deterministic(
                id in "[a-z0-9-]{1,32}",
                owner in "[a-z0-9-]{1,32}",
                role in any_role(),
                action in any_owned_action(),
            ) {
                let p = principal(&id, role);
                let fact = owned_by(&owner);
                let first = decide_owned(&p, action, &fact);
                let second = decide_owned(&p, action, &fact);
                prop_assert_eq!(first, second);
            }

            /// Writer on articles: allowed exactly when the ids match.
            #[test]
            fn writer_article_gate_is_ownership(
                id in "[a-z0-9-]{1,32}",
                owner in "[a-z0-9-]{1,32}",
            ) {
                let p = principal(&id, Role::Writer);
                let decision = decide_owned(&p, OwnedAction::UpdateArticle, &owned_by(&owner));
                prop_assert_eq!(decision.is_allow(), id == owner);
            }

            /// Non-admin roles never touch tag actions.
            #[test]
            fn tag_actions_deny_non_admin(id in "[a-z0-9-]{1,32}") {
                for role in [Role::Reader, Role::Writer] {
                    let p = principal(&id, role);
                    prop_assert_eq!(
                        decide_role_only(&p, RoleOnlyAction::CreateTag),
                        Decision::Deny
                    );
                    prop_assert_eq!(
                        decide_role_only(&p, RoleOnlyAction::DeleteTag),
                        Decision::Deny
                    );
                }
            }
        }
    }
}

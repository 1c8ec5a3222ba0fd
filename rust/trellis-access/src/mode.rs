use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use trellis_credentials::CredentialKind;

use crate::{Term, vocab::acl};

/// The four Web Access Control modes.
///
/// This is the canonical mode vocabulary for ACL evaluation; CRUD-style
/// extensions such as `create` or `delete` are not part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AccessMode {
    /// Reading a representation of the resource.
    Read,
    /// Fully replacing or deleting the resource.
    Write,
    /// Adding to the resource without overwriting existing data.
    Append,
    /// Changing the access rules of the resource.
    Control,
}

impl AccessMode {
    /// All modes, in a fixed order.
    pub const ALL: [AccessMode; 4] = [
        AccessMode::Read,
        AccessMode::Write,
        AccessMode::Append,
        AccessMode::Control,
    ];

    /// The `acl:` vocabulary term for this mode.
    pub fn as_term(self) -> Term {
        Term::from(match self {
            AccessMode::Read => acl::READ,
            AccessMode::Write => acl::WRITE,
            AccessMode::Append => acl::APPEND,
            AccessMode::Control => acl::CONTROL,
        })
    }

    /// Parse an `acl:` mode term; unrecognized terms yield `None`.
    pub fn from_term(term: &Term) -> Option<AccessMode> {
        match term.as_str() {
            acl::READ => Some(AccessMode::Read),
            acl::WRITE => Some(AccessMode::Write),
            acl::APPEND => Some(AccessMode::Append),
            acl::CONTROL => Some(AccessMode::Control),
            _ => None,
        }
    }
}

impl Display for AccessMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            AccessMode::Read => "read",
            AccessMode::Write => "write",
            AccessMode::Append => "append",
            AccessMode::Control => "control",
        })
    }
}

/// The tri-state mode flags for one credential kind.
///
/// `Some(true)` grants a mode, `Some(false)` explicitly denies it and `None`
/// means nothing is known — readers combining their outputs treat the three
/// states differently, so the distinction matters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    /// The read mode flag.
    pub read: Option<bool>,
    /// The write mode flag.
    pub write: Option<bool>,
    /// The append mode flag.
    pub append: Option<bool>,
    /// The control mode flag.
    pub control: Option<bool>,
}

impl Permissions {
    /// All four modes set to the given value.
    pub fn all(allow: bool) -> Self {
        Self {
            read: Some(allow),
            write: Some(allow),
            append: Some(allow),
            control: Some(allow),
        }
    }

    /// The flag for one mode.
    pub fn get(&self, mode: AccessMode) -> Option<bool> {
        match mode {
            AccessMode::Read => self.read,
            AccessMode::Write => self.write,
            AccessMode::Append => self.append,
            AccessMode::Control => self.control,
        }
    }

    /// Set the flag for one mode.
    pub fn set(&mut self, mode: AccessMode, value: bool) {
        let flag = match mode {
            AccessMode::Read => &mut self.read,
            AccessMode::Write => &mut self.write,
            AccessMode::Append => &mut self.append,
            AccessMode::Control => &mut self.control,
        };
        *flag = Some(value);
    }

    /// Mark a mode as granted.
    pub fn grant(&mut self, mode: AccessMode) {
        self.set(mode, true);
    }

    /// The modes currently set to `true`.
    pub fn granted(&self) -> impl Iterator<Item = AccessMode> {
        AccessMode::ALL
            .into_iter()
            .filter(|mode| self.get(*mode) == Some(true))
    }

    /// Fold another record in, mode by mode: an explicit `false` is final,
    /// `true` wins over unknown, and unknown never changes anything.
    pub fn combine(&mut self, other: &Permissions) {
        for mode in AccessMode::ALL {
            match other.get(mode) {
                Some(false) => self.set(mode, false),
                Some(true) => {
                    if self.get(mode) != Some(false) {
                        self.set(mode, true);
                    }
                }
                None => {}
            }
        }
    }
}

/// The available permissions per credential kind, as computed by a
/// [`PermissionReader`](crate::PermissionReader) for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet {
    /// Permissions of the authenticated requester.
    pub agent: Option<Permissions>,
    /// Permissions of the public audience.
    pub everyone: Option<Permissions>,
}

impl PermissionSet {
    /// The permissions stored for the given kind.
    pub fn get(&self, kind: CredentialKind) -> Option<&Permissions> {
        match kind {
            CredentialKind::Agent => self.agent.as_ref(),
            CredentialKind::Everyone => self.everyone.as_ref(),
        }
    }

    /// Store permissions for the given kind.
    pub fn set(&mut self, kind: CredentialKind, permissions: Permissions) {
        match kind {
            CredentialKind::Agent => self.agent = Some(permissions),
            CredentialKind::Everyone => self.everyone = Some(permissions),
        }
    }

    /// Whether any credential kind grants the given mode.
    pub fn grants(&self, mode: AccessMode) -> bool {
        CredentialKind::ALL.into_iter().any(|kind| {
            self.get(kind)
                .is_some_and(|permissions| permissions.get(mode) == Some(true))
        })
    }

    /// Fold another set in, kind by kind, with the same precedence as
    /// [`Permissions::combine`]. Kinds absent from `other` stay untouched.
    pub fn combine(&mut self, other: &PermissionSet) {
        for kind in CredentialKind::ALL {
            if let Some(incoming) = other.get(kind) {
                let mut merged = self.get(kind).copied().unwrap_or_default();
                merged.combine(incoming);
                self.set(kind, merged);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_parses_known_mode_terms_and_rejects_others() {
        assert_eq!(
            AccessMode::from_term(&Term::from(acl::READ)),
            Some(AccessMode::Read)
        );
        assert_eq!(
            AccessMode::from_term(&Term::from("http://www.w3.org/ns/auth/acl#fakeMode1")),
            None
        );
        for mode in AccessMode::ALL {
            assert_eq!(AccessMode::from_term(&mode.as_term()), Some(mode));
        }
    }

    #[test]
    fn false_beats_true_beats_unknown() {
        let mut merged = Permissions {
            read: Some(true),
            write: Some(false),
            append: None,
            control: Some(true),
        };
        merged.combine(&Permissions {
            read: Some(false),
            write: Some(true),
            append: Some(true),
            control: None,
        });
        assert_eq!(
            merged,
            Permissions {
                read: Some(false),
                write: Some(false),
                append: Some(true),
                control: Some(true),
            }
        );
    }

    #[test]
    fn unknown_never_changes_a_cell() {
        let mut merged = Permissions {
            read: Some(true),
            ..Permissions::default()
        };
        merged.combine(&Permissions::default());
        assert_eq!(merged.read, Some(true));
        assert_eq!(merged.write, None);
    }

    #[test]
    fn a_set_grants_a_mode_when_any_kind_does() {
        let set = PermissionSet {
            agent: Some(Permissions {
                write: Some(true),
                ..Permissions::default()
            }),
            everyone: Some(Permissions {
                read: Some(true),
                write: Some(false),
                ..Permissions::default()
            }),
        };
        assert!(set.grants(AccessMode::Read));
        assert!(set.grants(AccessMode::Write));
        assert!(!set.grants(AccessMode::Control));
    }

    #[test]
    fn combining_sets_ignores_absent_kinds() {
        let mut set = PermissionSet {
            agent: Some(Permissions {
                read: Some(true),
                ..Permissions::default()
            }),
            everyone: None,
        };
        set.combine(&PermissionSet {
            agent: Some(Permissions {
                write: Some(true),
                ..Permissions::default()
            }),
            everyone: None,
        });
        assert_eq!(
            set.agent,
            Some(Permissions {
                read: Some(true),
                write: Some(true),
                ..Permissions::default()
            })
        );
        assert_eq!(set.everyone, None);
    }
}

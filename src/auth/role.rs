#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

/// Identity classes known to the backend.
///
/// The set is closed: a persisted role string that does not parse is treated
/// as session corruption, so landing-path derivation never has to guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

impl Role {
    /// Canonical name as the backend returns it and as it is persisted.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Teacher => "Teacher",
            Role::Student => "Student",
        }
    }

    /// Parse a persisted or server-provided role name.
    pub fn from_name(name: &str) -> Option<Role> {
        match name {
            "Admin" => Some(Role::Admin),
            "Teacher" => Some(Role::Teacher),
            "Student" => Some(Role::Student),
            _ => None,
        }
    }

    /// Numeric role code the `/login` and `/register` endpoints expect.
    pub fn login_code(self) -> &'static str {
        match self {
            Role::Admin => "1",
            Role::Teacher => "2",
            Role::Student => "3",
        }
    }

    /// Default landing route for the role.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::Admin => "/Admin-dashboard",
            Role::Teacher => "/Teacher-dashboard",
            Role::Student => "/Student-dashboard",
        }
    }
}

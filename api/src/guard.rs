//! Route guard: a pure function of (session user, required role).
//!
//! An authenticated user lacking the required role is sent to the public
//! home, not to login — the portal does not advertise which routes are
//! admin-only to signed-in citizens.

use crate::models::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    RedirectLogin,
    RedirectHome,
}

pub fn check_access(user: Option<&User>, required_role: Option<&str>) -> Access {
    match (user, required_role) {
        (None, _) => Access::RedirectLogin,
        (Some(user), Some(role)) if user.rol.as_deref() != Some(role) => Access::RedirectHome,
        (Some(_), _) => Access::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(rol: &str) -> User {
        User {
            id: 1,
            name: "Prueba".into(),
            email: "prueba@mail.com".into(),
            rol: Some(rol.into()),
            estado: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_anonymous_is_sent_to_login() {
        assert_eq!(check_access(None, None), Access::RedirectLogin);
        assert_eq!(check_access(None, Some("admin")), Access::RedirectLogin);
    }

    #[test]
    fn test_citizen_on_admin_route_goes_home() {
        let u = user("ciudadano");
        assert_eq!(check_access(Some(&u), Some("admin")), Access::RedirectHome);
    }

    #[test]
    fn test_admin_is_allowed() {
        let u = user("admin");
        assert_eq!(check_access(Some(&u), Some("admin")), Access::Allow);
    }

    #[test]
    fn test_any_user_passes_role_free_guard() {
        let u = user("ciudadano");
        assert_eq!(check_access(Some(&u), None), Access::Allow);
    }
}

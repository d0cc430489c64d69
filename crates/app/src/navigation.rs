//! Screen route table
//!
//! Mirrors the navigation graph of the mobile shell; the shell maps these
//! onto its own router.

/// Screens of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    PasswordReset,
    Home,
    Leagues,
    Teams,
    Profile,
    Admin,
}

impl Screen {
    /// Stable route name for the shell's router
    pub fn route(&self) -> &'static str {
        match self {
            Screen::Login => "login",
            Screen::Register => "registro",
            Screen::PasswordReset => "recuperar",
            Screen::Home => "home",
            Screen::Leagues => "ligas",
            Screen::Teams => "equipos",
            Screen::Profile => "perfil",
            Screen::Admin => "admin",
        }
    }

    /// Look a screen up by route name
    pub fn from_route(route: &str) -> Option<Self> {
        match route {
            "login" => Some(Screen::Login),
            "registro" => Some(Screen::Register),
            "recuperar" => Some(Screen::PasswordReset),
            "home" => Some(Screen::Home),
            "ligas" => Some(Screen::Leagues),
            "equipos" => Some(Screen::Teams),
            "perfil" => Some(Screen::Profile),
            "admin" => Some(Screen::Admin),
            _ => None,
        }
    }

    /// Screens reachable without a session
    pub fn is_public(&self) -> bool {
        matches!(
            self,
            Screen::Login | Screen::Register | Screen::PasswordReset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_round_trip() {
        for screen in [
            Screen::Login,
            Screen::Register,
            Screen::PasswordReset,
            Screen::Home,
            Screen::Leagues,
            Screen::Teams,
            Screen::Profile,
            Screen::Admin,
        ] {
            assert_eq!(Screen::from_route(screen.route()), Some(screen));
        }
    }

    #[test]
    fn test_unknown_route_is_none() {
        assert_eq!(Screen::from_route("nada"), None);
    }

    #[test]
    fn test_pre_login_screens_are_public() {
        assert!(Screen::Login.is_public());
        assert!(Screen::Register.is_public());
        assert!(!Screen::Admin.is_public());
        assert!(!Screen::Home.is_public());
    }
}

//! Client-side navigation seam.
//!
//! The actual router lives in the UI layer; the session workflows only
//! ever ask for a route change after a successful login or signup.

/// Routes the state layer can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
}

/// Navigation sink implemented by the embedding UI.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

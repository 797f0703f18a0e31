use serde::Serialize;

use crate::models::Role;

/// Client-side pages the API redirects to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Lots,
    Marketplace,
    Object(String),
    Investor,
    Owner,
    News,
    About,
    Faq,
    Contacts,
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteEntry {
    pub name: &'static str,
    pub path: &'static str,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Lots => "/lots".to_string(),
            Route::Marketplace => "/marketplace".to_string(),
            Route::Object(id) => format!("/object/{id}"),
            Route::Investor => "/investor".to_string(),
            Route::Owner => "/owner".to_string(),
            Route::News => "/news".to_string(),
            Route::About => "/about".to_string(),
            Route::Faq => "/faq".to_string(),
            Route::Contacts => "/contacts".to_string(),
        }
    }

    /// Where the client lands after the session role changes.
    pub fn for_role(role: Option<Role>) -> Self {
        match role {
            Some(Role::Investor) => Route::Investor,
            Some(Role::Owner) => Route::Owner,
            None => Route::Home,
        }
    }

    pub fn surface() -> Vec<RouteEntry> {
        vec![
            RouteEntry { name: "home", path: "/" },
            RouteEntry { name: "lots", path: "/lots" },
            RouteEntry { name: "marketplace", path: "/marketplace" },
            RouteEntry { name: "object", path: "/object/:id" },
            RouteEntry { name: "investor", path: "/investor" },
            RouteEntry { name: "owner", path: "/owner" },
            RouteEntry { name: "news", path: "/news" },
            RouteEntry { name: "about", path: "/about" },
            RouteEntry { name: "faq", path: "/faq" },
            RouteEntry { name: "contacts", path: "/contacts" },
        ]
    }
}

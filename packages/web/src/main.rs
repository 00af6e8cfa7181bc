use dioxus::prelude::*;

use store::ConsoleConfig;
use ui::{use_auth, AuthProvider, NavItem};
use views::{
    ActivityLogs, AuthGuard, Dashboard, Inventory, Login, NotFound, Settings, SidebarLayout,
    Skus, Transactions, Users,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
        #[layout(SidebarLayout)]
            #[route("/dashboard")]
            Dashboard {},
            #[route("/skus")]
            Skus {},
            #[route("/inventory")]
            Inventory {},
            #[route("/transactions")]
            Transactions {},
            #[route("/users")]
            Users {},
            #[route("/logs")]
            ActivityLogs {},
            #[route("/settings")]
            Settings {},
        #[end_layout]
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    fn is_protected(&self) -> bool {
        self.nav_item().is_some()
    }

    /// Sidebar entry highlighted while this route is shown.
    fn nav_item(&self) -> Option<NavItem> {
        match self {
            Route::Dashboard {} => Some(NavItem::Dashboard),
            Route::Skus {} => Some(NavItem::Skus),
            Route::Inventory {} => Some(NavItem::Inventory),
            Route::Transactions {} => Some(NavItem::Transactions),
            Route::Users {} => Some(NavItem::Users),
            Route::ActivityLogs {} => Some(NavItem::ActivityLogs),
            Route::Settings {} => Some(NavItem::Settings),
            Route::Root {} | Route::Login {} | Route::NotFound { .. } => None,
        }
    }
}

impl From<NavItem> for Route {
    fn from(item: NavItem) -> Self {
        match item {
            NavItem::Dashboard => Route::Dashboard {},
            NavItem::Skus => Route::Skus {},
            NavItem::Inventory => Route::Inventory {},
            NavItem::Transactions => Route::Transactions {},
            NavItem::Users => Route::Users {},
            NavItem::ActivityLogs => Route::ActivityLogs {},
            NavItem::Settings => Route::Settings {},
        }
    }
}

/// Where a visit to `route` has to go instead, if anywhere.
///
/// `authenticated` means a token is held; the session itself may still be
/// restoring.
fn redirect_for(route: &Route, authenticated: bool) -> Option<Route> {
    match route {
        Route::Root {} if authenticated => Some(Route::Dashboard {}),
        Route::Root {} => Some(Route::Login {}),
        Route::Login {} if authenticated => Some(Route::Dashboard {}),
        r if r.is_protected() && !authenticated => Some(Route::Login {}),
        _ => None,
    }
}

const CONFIG_TOML: &str = include_str!("../flex-erp.toml");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn load_config() -> ConsoleConfig {
    let config = ConsoleConfig::from_toml_or_default(CONFIG_TOML);
    match option_env!("FLEX_API_URL") {
        Some(url) if !url.trim().is_empty() => config.with_base_url(url.trim()),
        _ => config,
    }
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    tracing::info!("Flex ERP console talking to {}", config.api.base_url);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            config,
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to the dashboard or the login page.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    let auth = use_auth();
    if let Some(target) = redirect_for(&Route::Root {}, auth().is_authenticated()) {
        nav.replace(target);
    }
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_follows_session() {
        assert_eq!(redirect_for(&Route::Root {}, true), Some(Route::Dashboard {}));
        assert_eq!(redirect_for(&Route::Root {}, false), Some(Route::Login {}));
    }

    #[test]
    fn test_signed_in_user_skips_login() {
        assert_eq!(redirect_for(&Route::Login {}, true), Some(Route::Dashboard {}));
        assert_eq!(redirect_for(&Route::Login {}, false), None);
    }

    #[test]
    fn test_protected_pages_need_token() {
        for item in NavItem::ALL {
            let route = Route::from(item);
            assert_eq!(redirect_for(&route, false), Some(Route::Login {}));
            assert_eq!(redirect_for(&route, true), None);
        }
    }

    #[test]
    fn test_unknown_paths_are_not_redirected() {
        let route = Route::NotFound { segments: vec!["nope".to_string()] };
        assert_eq!(redirect_for(&route, false), None);
        assert_eq!(redirect_for(&route, true), None);
    }

    #[test]
    fn test_nav_items_round_trip_through_routes() {
        for item in NavItem::ALL {
            assert_eq!(Route::from(item).nav_item(), Some(item));
        }
    }

    #[test]
    fn test_paths_match_sidebar() {
        for item in NavItem::ALL {
            assert_eq!(Route::from(item).to_string(), item.path());
        }
    }

    #[test]
    fn test_embedded_config_parses() {
        assert!(ConsoleConfig::from_toml(CONFIG_TOML).is_ok());
    }
}

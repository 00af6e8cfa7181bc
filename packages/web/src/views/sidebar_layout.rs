use dioxus::prelude::*;
use ui::views::SidebarLayoutView;
use ui::NavItem;

use crate::Route;

#[component]
pub fn SidebarLayout() -> Element {
    let route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        SidebarLayoutView {
            active: route.nav_item(),
            on_navigate: move |item: NavItem| {
                nav.push(Route::from(item));
            },
            Outlet::<Route> {}
        }
    }
}

//! Application shell around the scanner page

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::pages::ScannerPage;

#[component]
pub fn App() -> impl IntoView {
    // Backup splash removal in case main() ran before the element existed
    Effect::new(move || {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(loading) = document.get_element_by_id("leptos-loading") {
            let _ = loading.class_list().add_1("hidden");
            let _ = loading.set_attribute("style", "display: none;");
        }
    });

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=ScannerPage/>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="scanner-page">
            <div class="card" style="max-width: 420px;">
                <h1 class="card-title">"404 - Page Not Found"</h1>
                <p class="card-subtitle">"There is nothing to scan here."</p>
            </div>
        </div>
    }
}

//! Application shell: router, chrome, and shared context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::config::ApiConfig;
use crate::pages::documentation::DocumentationPage;
use crate::pages::home::HomePage;
use crate::pages::prediction::PredictionPage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiConfig::from_env());

    view! {
        <Title text="FedMind"/>
        <Router>
            <Navbar/>
            <main class="app__main">
                <Routes fallback=|| view! { <p class="app__not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/prediction") view=PredictionPage/>
                    <Route path=path!("/documentation") view=DocumentationPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod data;

mod components {
    pub mod reveal;
    pub mod carousel;
    pub mod hero;
    pub mod about;
    pub mod catalog;
    pub mod how_it_works;
    pub mod testimonials;
    pub mod gallery;
    pub mod contact;
    pub mod footer;
}

mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    // Content tables are compile-time fixtures; refuse to start on a bad one.
    data::validate().expect("invalid static content data");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

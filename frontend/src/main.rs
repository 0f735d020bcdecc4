use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod notify;
mod pages;
mod state;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    SignIn,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::SignIn => html! { <pages::sign_in::SignIn /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::SignIn} /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}

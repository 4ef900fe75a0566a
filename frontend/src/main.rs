use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod motion;
mod pages;
mod utils;

use pages::landing::Landing;
use pages::resources::Resources;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/resources")]
    Resources,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::Resources => html! { <Resources /> },
        Route::NotFound => html! {
            <div class="not-found">
                <h1>{"페이지를 찾을 수 없습니다."}</h1>
                <Link<Route> to={Route::Home}>{"홈으로"}</Link<Route>>
            </div>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    let base_css = r#"
        body {
            margin: 0;
            font-family: "Pretendard", -apple-system, BlinkMacSystemFont, sans-serif;
            color: #111;
            background: #fafafa;
        }
        .fade-up {
            opacity: 0;
            transform: translateY(30px);
            transition: opacity 0.8s ease-out, transform 0.8s ease-out;
        }
        .fade-up.visible {
            opacity: 1;
            transform: translateY(0);
        }
        .not-found {
            min-height: 100vh;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
        }
    "#;
    html! {
        <BrowserRouter>
            <style>{base_css}</style>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    gloo_console::log!("showcase frontend starting");
    yew::Renderer::<App>::new().render();
}

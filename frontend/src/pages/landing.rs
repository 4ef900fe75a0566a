use crate::components::purchase_modal::{book_type_from_event, resolve_edition, PurchaseModal, BOOK_TYPE_ATTR};
use crate::config::{self, BookEdition};
use crate::motion::hooks::{use_auto_scroll_snap, use_fade_up, use_scroll_progress};
use crate::Route;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::components::Link;

#[derive(Properties, PartialEq)]
struct ShowcaseProps {
    id: &'static str,
    book_type: &'static str,
    eyebrow: &'static str,
    headline: &'static str,
    on_buy: Callback<MouseEvent>,
}

/// A tall section whose visual stays pinned while the page scrolls through
/// it. The scroll effects look it up by `id`.
#[function_component(Showcase)]
fn showcase(props: &ShowcaseProps) -> Html {
    html! {
        <section id={props.id} class="showcase">
            <div class="showcase-sticky">
                <div class="showcase-visual">
                    <div class={classes!("book-cover", props.book_type)}></div>
                </div>
            </div>
            <div class="showcase-copy fade-up">
                <p class="eyebrow">{props.eyebrow}</p>
                <h2>{props.headline}</h2>
                <button
                    class="buy-button"
                    data-book-type={props.book_type}
                    onclick={props.on_buy.clone()}
                >
                    {"구매하기"}
                </button>
            </div>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let open_edition = use_state(|| None::<&'static BookEdition>);

    use_fade_up();
    use_scroll_progress("intro", ".intro-visual", config::INTRO_PROGRESS);
    use_scroll_progress(
        config::SHOWCASE_SECTIONS[0],
        config::SHOWCASE_VISUAL_SELECTOR,
        config::HERO_PROGRESS,
    );
    use_scroll_progress(
        config::SHOWCASE_SECTIONS[1],
        config::SHOWCASE_VISUAL_SELECTOR,
        config::HERO_PROGRESS,
    );
    use_auto_scroll_snap(config::SHOWCASE_SECTIONS, config::SHOWCASE_SPAN_VH, config::SNAP);

    let on_buy = {
        let open_edition = open_edition.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(book_type) = book_type_from_event(&e) else {
                log::debug!("buy click without {}", BOOK_TYPE_ATTR);
                return;
            };
            if let Some(edition) = resolve_edition(&book_type) {
                open_edition.set(Some(edition));
            }
        })
    };
    let on_close = {
        let open_edition = open_edition.clone();
        Callback::from(move |_| open_edition.set(None))
    };

    let landing_css = r#"
        .landing-nav {
            position: fixed;
            top: 0;
            left: 0;
            right: 0;
            height: 64px;
            display: flex;
            align-items: center;
            justify-content: space-between;
            padding: 0 2rem;
            background: rgba(255, 255, 255, 0.85);
            backdrop-filter: blur(12px);
            z-index: 10;
        }
        .hero {
            min-height: 100vh;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            text-align: center;
            padding: 0 1.5rem;
        }
        .hero h1 {
            font-size: 3.5rem;
            margin-bottom: 1rem;
        }
        #intro {
            min-height: 80vh;
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .intro-visual {
            max-width: 720px;
            text-align: center;
            opacity: 0.1;
            transform: scale(0.9);
        }
        .showcase {
            position: relative;
            height: 250vh;
        }
        .showcase-sticky {
            position: sticky;
            top: 64px;
            height: calc(100vh - 64px);
            overflow: hidden;
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .showcase-visual {
            transform-origin: center center;
            will-change: transform, opacity;
        }
        .book-cover {
            width: 240px;
            height: 340px;
            border-radius: 6px;
            box-shadow: 0 30px 60px rgba(0, 0, 0, 0.25);
        }
        .book-cover.concept {
            background: linear-gradient(135deg, #1d3557, #457b9d);
        }
        .book-cover.practice {
            background: linear-gradient(135deg, #6a040f, #e85d04);
        }
        .showcase-copy {
            position: absolute;
            bottom: 10vh;
            left: 0;
            right: 0;
            text-align: center;
        }
        .buy-button {
            margin-top: 1rem;
            padding: 0.8rem 2rem;
            border: none;
            border-radius: 999px;
            background: #111;
            color: #fff;
            font-size: 1rem;
            cursor: pointer;
        }
        .modal-overlay {
            position: fixed;
            inset: 0;
            display: none;
            align-items: center;
            justify-content: center;
            background: rgba(0, 0, 0, 0.5);
            z-index: 20;
        }
        .modal-overlay.open {
            display: flex;
        }
        .modal-content {
            position: relative;
            background: #fff;
            border-radius: 12px;
            padding: 2rem;
            min-width: 280px;
        }
        .modal-close {
            position: absolute;
            top: 0.5rem;
            right: 0.75rem;
            border: none;
            background: none;
            font-size: 1.5rem;
            cursor: pointer;
        }
        .modal-links {
            display: flex;
            flex-direction: column;
            gap: 0.75rem;
            margin-top: 1rem;
        }
    "#;

    html! {
        <div class="landing-page">
            <style>{landing_css}</style>
            <nav class="landing-nav">
                <span class="brand">{"수학의 결"}</span>
                <Link<Route> to={Route::Resources} classes="nav-link">{"자료실"}</Link<Route>>
            </nav>
            <header class="hero">
                <h1 class="fade-up">{"개념에서 실전까지, 한 흐름으로."}</h1>
                <p class="fade-up">{"두 권으로 완성하는 고등 수학."}</p>
            </header>
            <section id="intro">
                <div class="intro-visual">
                    <h2>{"읽히는 설명, 남는 풀이"}</h2>
                    <p>{"교과서의 순서를 따라가되, 왜 그렇게 되는지를 먼저 보여줍니다."}</p>
                </div>
            </section>
            <Showcase
                id={config::SHOWCASE_SECTIONS[0]}
                book_type="concept"
                eyebrow="개념편"
                headline="원리부터 차근차근"
                on_buy={on_buy.clone()}
            />
            <Showcase
                id={config::SHOWCASE_SECTIONS[1]}
                book_type="practice"
                eyebrow="실전편"
                headline="시험장에서 통하는 풀이"
                on_buy={on_buy}
            />
            <footer class="landing-footer fade-up">
                <Link<Route> to={Route::Resources}>{"교재 자료 내려받기 →"}</Link<Route>>
            </footer>
            <PurchaseModal edition={*open_edition} on_close={on_close} />
        </div>
    }
}

use crate::components::resource_board::ResourceBoard;
use crate::motion::hooks::use_fade_up;
use crate::Route;
use yew::prelude::*;
use yew_router::components::Link;

#[function_component(Resources)]
pub fn resources() -> Html {
    use_fade_up();
    let css = r#"
        .resources-page {
            max-width: 960px;
            margin: 0 auto;
            padding: 6rem 1.5rem 4rem;
        }
        .resource-header,
        .resource-item {
            display: grid;
            grid-template-columns: 1fr 120px 100px 60px;
            align-items: center;
            padding: 1rem 0.5rem;
            border-bottom: 1px solid rgba(0, 0, 0, 0.08);
        }
        .resource-header {
            font-weight: 600;
            border-bottom: 2px solid #222;
        }
        .file-icon {
            margin-right: 0.5rem;
        }
        .download-btn {
            display: inline-flex;
            width: 32px;
            height: 32px;
            align-items: center;
            justify-content: center;
            border-radius: 50%;
            background: #111;
            color: #fff;
            text-decoration: none;
        }
        .empty-state {
            padding: 3rem 0;
            text-align: center;
            color: #777;
        }
    "#;
    html! {
        <div class="resources-page">
            <style>{css}</style>
            <Link<Route> to={Route::Home} classes="back-link">{"← 홈으로"}</Link<Route>>
            <h1 class="fade-up">{"자료실"}</h1>
            <p class="fade-up">{"교재와 함께 활용할 수 있는 자료를 내려받으세요."}</p>
            <div class="resource-header">
                <div>{"제목"}</div>
                <div>{"등록일"}</div>
                <div>{"크기"}</div>
                <div>{"받기"}</div>
            </div>
            <ResourceBoard />
        </div>
    }
}

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::utils::manifest::{fetch_manifest, BoardView, ResourceFile};

/// Position plus filename, so a manifest listing the same file twice still
/// yields distinct keys.
fn row_key(index: usize, file: &ResourceFile) -> String {
    format!("{}-{}", index, file.filename)
}

#[derive(Properties, PartialEq)]
struct ResourceRowProps {
    file: ResourceFile,
    revealed: bool,
}

#[function_component(ResourceRow)]
fn resource_row(props: &ResourceRowProps) -> Html {
    let file = &props.file;
    html! {
        <div class={classes!("resource-item", "fade-up", props.revealed.then_some(config::VISIBLE_CLASS))}>
            <div class="col-title">
                <span class="file-icon">{"📄"}</span>
                <span class="file-name">{&file.title}</span>
            </div>
            <div class="col-date">{&file.date}</div>
            <div class="col-size">{&file.size}</div>
            <div class="col-action">
                <a href={file.download_href()} download={file.download_name()} class="download-btn">
                    <span class="download-icon">{"↓"}</span>
                </a>
            </div>
        </div>
    }
}

/// Downloadable resources listed from `board_data.json`.
#[function_component(ResourceBoard)]
pub fn resource_board() -> Html {
    let view = use_state(|| BoardView::Loading);
    let revealed = use_state(|| false);

    {
        let view = view.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    view.set(BoardView::from_result(fetch_manifest().await));
                });
                || ()
            },
            (),
        );
    }

    // Rows mount hidden and fade in shortly after.
    {
        let revealed = revealed.clone();
        let loaded = matches!(*view, BoardView::Loaded(_));
        use_effect_with_deps(
            move |loaded| {
                let timeout = loaded.then(|| {
                    Timeout::new(config::REVEAL_DELAY_MS, move || revealed.set(true))
                });
                move || drop(timeout)
            },
            loaded,
        );
    }

    let content = match &*view {
        BoardView::Loaded(files) => files
            .iter()
            .enumerate()
            .map(|(index, file)| {
                html! {
                    <ResourceRow key={row_key(index, file)} file={file.clone()} revealed={*revealed} />
                }
            })
            .collect::<Html>(),
        other => html! {
            <div class="empty-state">{other.message().unwrap_or_default()}</div>
        },
    };

    html! {
        <div id="file-list" class="file-list">
            {content}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::manifest::parse_manifest;

    #[test]
    fn duplicate_filenames_get_distinct_keys() {
        let files = parse_manifest(
            r#"[
                {"title":"A","date":"2024-01-01","size":"1MB","filename":"a.pdf"},
                {"title":"A (again)","date":"2024-01-02","size":"1MB","filename":"a.pdf"}
            ]"#,
        )
        .expect("valid manifest");
        let keys: Vec<String> = files
            .iter()
            .enumerate()
            .map(|(index, file)| row_key(index, file))
            .collect();
        assert_eq!(keys, vec!["0-a.pdf", "1-a.pdf"]);
    }
}

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::config::{self, BookEdition};

pub const BOOK_TYPE_ATTR: &str = "data-book-type";

/// Reads the book type off the clicked trigger, or the nearest ancestor
/// carrying [`BOOK_TYPE_ATTR`].
pub fn book_type_from_event(e: &MouseEvent) -> Option<String> {
    let target = e.target()?.dyn_into::<Element>().ok()?;
    let trigger = target.closest(&format!("[{}]", BOOK_TYPE_ATTR)).ok()??;
    trigger.get_attribute(BOOK_TYPE_ATTR)
}

/// Resolves a clicked book type to its edition. Unknown types are ignored.
pub fn resolve_edition(book_type: &str) -> Option<&'static BookEdition> {
    let edition = config::book_edition(book_type);
    if edition.is_none() {
        log::warn!("no purchase links for book type {:?}", book_type);
    }
    edition
}

#[derive(Properties, PartialEq)]
pub struct PurchaseModalProps {
    pub edition: Option<&'static BookEdition>,
    pub on_close: Callback<()>,
}

#[function_component(PurchaseModal)]
pub fn purchase_modal(props: &PurchaseModalProps) -> Html {
    let is_open = props.edition.is_some();

    // Escape closes the modal while it is open.
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |is_open| {
                let destructor: Box<dyn FnOnce()> = match web_sys::window().filter(|_| *is_open) {
                    Some(window) => {
                        let callback = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                            if e.key() == "Escape" {
                                on_close.emit(());
                            }
                        });
                        if let Err(e) = window
                            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
                        {
                            log::warn!("failed to listen for keydown: {:?}", e);
                        }
                        Box::new(move || {
                            let _ = window.remove_event_listener_with_callback(
                                "keydown",
                                callback.as_ref().unchecked_ref(),
                            );
                        })
                    }
                    None => Box::new(|| ()),
                };
                move || destructor()
            },
            is_open,
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let (title, links) = match props.edition {
        Some(edition) => (edition.title, edition.links.as_array()),
        None => ("", ["#"; 3]),
    };

    html! {
        <div
            id="purchase-modal"
            class={classes!("modal-overlay", is_open.then_some("open"))}
            aria-hidden={(!is_open).to_string()}
            onclick={close.clone()}
        >
            <div class="modal-content" role="dialog" onclick={keep_open}>
                <button class="modal-close" aria-label="닫기" onclick={close}>{"×"}</button>
                <h3 id="modal-title">{title}</h3>
                <div class="modal-links">
                    <a id="link-kyobo" href={links[0]} target="_blank" rel="noopener noreferrer">{"교보문고"}</a>
                    <a id="link-yes24" href={links[1]} target="_blank" rel="noopener noreferrer">{"YES24"}</a>
                    <a id="link-aladin" href={links[2]} target="_blank" rel="noopener noreferrer">{"알라딘"}</a>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concept_resolves_to_configured_links() {
        let edition = resolve_edition("concept").expect("concept edition");
        let links = edition.links;
        assert_eq!(links.kyobo, config::BOOK_EDITIONS[0].links.kyobo);
        assert_eq!(links.yes24, config::BOOK_EDITIONS[0].links.yes24);
        assert_eq!(links.aladin, config::BOOK_EDITIONS[0].links.aladin);
        assert_eq!(edition.title, "개념편");
    }

    #[test]
    fn unknown_type_is_ignored() {
        assert!(resolve_edition("audiobook").is_none());
    }
}

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    /// Container id, e.g. `movieModal`.
    pub id: AttrValue,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub busy: bool,
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Overlay whose backdrop is the container itself. Clicks on the backdrop
/// close it; clicks inside the content do not.
#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    let backdrop_ref = use_node_ref();
    let content_ref = use_node_ref();

    {
        let content_ref = content_ref.clone();
        use_effect_with(props.open, move |open| {
            if *open && let Some(el) = content_ref.cast::<web_sys::HtmlElement>() {
                let _ = el.focus();
            }
            || {}
        });
    }

    let close = {
        let cb = props.on_close.clone();
        let return_focus_id = props.return_focus_id.clone();
        Callback::from(move |()| {
            cb.emit(());
            if let Some(id) = return_focus_id.as_ref() {
                crate::a11y::restore_focus(id);
            }
        })
    };
    let on_backdrop = {
        let close = close.clone();
        let backdrop_ref = backdrop_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target_dyn_into::<web_sys::Element>();
            let backdrop = backdrop_ref.cast::<web_sys::Element>();
            if let (Some(target), Some(backdrop)) = (target, backdrop)
                && target == backdrop
            {
                close.emit(());
            }
        })
    };
    let on_close_btn = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };
    let on_keydown = Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Escape" {
            e.prevent_default();
            close.emit(());
        }
    });

    let style = if props.open { "display: block" } else { "display: none" };
    let title_id = format!("{}-title", props.id);

    html! {
        <div
            id={props.id.clone()}
            class="modal"
            style={style}
            onclick={on_backdrop}
            ref={backdrop_ref}
        >
            if props.open {
                <div
                    class="modal-content"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby={title_id.clone()}
                    aria-busy={props.busy.to_string()}
                    tabindex="-1"
                    onkeydown={on_keydown}
                    ref={content_ref}
                >
                    <span id={title_id} class="sr-only">{ props.title.clone() }</span>
                    <button type="button" class="close-btn" aria-label="Close" onclick={on_close_btn}>
                        {"×"}
                    </button>
                    <div id="modalContent">
                        { for props.children.iter() }
                    </div>
                </div>
            }
        </div>
    }
}

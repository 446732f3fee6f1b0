use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::types::PostDraft;

#[derive(Properties, PartialEq)]
pub struct ComposeProps {
    pub on_submit: Callback<PostDraft>,
}

#[function_component(Compose)]
pub fn compose(props: &ComposeProps) -> Html {
    let draft = use_state(PostDraft::default);

    let oninput_title = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut updated = (*draft).clone();
            updated.title = e.target_unchecked_into::<HtmlInputElement>().value();
            draft.set(updated);
        })
    };
    let oninput_author = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut updated = (*draft).clone();
            updated.author = e.target_unchecked_into::<HtmlInputElement>().value();
            draft.set(updated);
        })
    };
    let oninput_content = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut updated = (*draft).clone();
            updated.content = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            draft.set(updated);
        })
    };
    let submit = {
        let draft = draft.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |_| {
            on_submit.emit((*draft).clone());
        })
    };

    html! {
      <div class="compose">
        <input
          type="text"
          placeholder="Title"
          value={draft.title.clone()}
          oninput={oninput_title}
        />
        <input
          type="text"
          placeholder="Author"
          value={draft.author.clone()}
          oninput={oninput_author}
        />
        <textarea
          placeholder="Content"
          value={draft.content.clone()}
          oninput={oninput_content}
        />
        <button class="add-button" onclick={submit}>{"Add post"}</button>
      </div>
    }
}

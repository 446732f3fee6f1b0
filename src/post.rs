use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::types::{Post, PostDraft};

#[derive(Properties, PartialEq)]
pub struct PostItemProps {
    pub post: Post,
    pub on_delete: Callback<i64>,
    pub on_save: Callback<(i64, PostDraft)>,
}

#[function_component(PostItem)]
pub fn post_item(props: &PostItemProps) -> Html {
    let editing = use_state(|| false);
    let draft = use_state(PostDraft::default);

    let post = &props.post;
    let id = post.id;

    if *editing {
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
        let save = {
            let draft = draft.clone();
            let on_save = props.on_save.clone();
            Callback::from(move |_| {
                on_save.emit((id, (*draft).clone()));
            })
        };
        let cancel = {
            let editing = editing.clone();
            Callback::from(move |_| {
                editing.set(false);
            })
        };

        html! {
          <div class="post post-edit-mode">
            <input
              type="text"
              placeholder="Edit Title"
              value={draft.title.clone()}
              oninput={oninput_title}
            />
            <input
              type="text"
              placeholder="Edit Author"
              value={draft.author.clone()}
              oninput={oninput_author}
            />
            <textarea
              placeholder="Edit Content"
              value={draft.content.clone()}
              oninput={oninput_content}
            />
            <button class="save-button" onclick={save}>{"Save"}</button>
            <button class="cancel-button" onclick={cancel}>{"Cancel"}</button>
          </div>
        }
    } else {
        let edit = {
            let editing = editing.clone();
            let draft = draft.clone();
            let seed = PostDraft {
                title: post.title.clone(),
                content: post.content.clone(),
                author: post.author.clone(),
            };
            Callback::from(move |_| {
                draft.set(seed.clone());
                editing.set(true);
            })
        };
        let delete = {
            let on_delete = props.on_delete.clone();
            Callback::from(move |_| on_delete.emit(id))
        };

        html! {
          <div class="post">
            <h2>{&post.title}</h2>
            <h3>{&post.author}</h3>
            <p>{&post.content}</p>
            <p>{"Posted: "}{&post.date}</p>
            <button class="delete-button" onclick={delete}>{"Delete"}</button>
            <button class="update-button" onclick={edit}>{"Update"}</button>
          </div>
        }
    }
}

use yew::prelude::*;

use crate::post::PostItem;
use crate::types::{Post, PostDraft};

#[derive(Properties, PartialEq)]
pub struct PostListProps {
    pub posts: Vec<Post>,
    pub on_delete: Callback<i64>,
    pub on_save: Callback<(i64, PostDraft)>,
}

#[function_component(PostList)]
pub fn list(props: &PostListProps) -> Html {
    props
        .posts
        .iter()
        .map(|post| {
            html! {
              <PostItem
                key={post.id}
                post={post.clone()}
                on_delete={props.on_delete.clone()}
                on_save={props.on_save.clone()}
              />
            }
        })
        .collect()
}

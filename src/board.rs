use gloo_console::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{
    api::{create_post, delete_post, fetch_posts, update_post},
    compose::Compose,
    list::PostList,
    storage::{load_base_url, store_base_url},
    types::{Post, PostDraft},
};

pub enum Msg {
    BaseUrlInput(String),
    Refresh,
    Loaded(u64, Vec<Post>),
    LoadFailed(u64, String),
    Create(PostDraft),
    Created,
    Delete(i64),
    Save(i64, PostDraft),
    Mutated,
    MutationFailed(String),
    DismissError,
}

pub struct Board {
    base_url: String,
    posts: Vec<Post>,
    loading: bool,
    error: Option<String>,
    // bumped per fetch; responses carrying an older value are ignored
    generation: u64,
    compose_epoch: u64,
}

impl Board {
    fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            posts: vec![],
            loading: false,
            error: None,
            generation: 0,
            compose_epoch: 0,
        }
    }

    fn begin_refresh(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;

        self.generation
    }

    fn apply_loaded(&mut self, generation: u64, posts: Vec<Post>) -> bool {
        if generation != self.generation {
            return false;
        }

        self.loading = false;
        self.error = None;
        self.posts = posts;

        true
    }

    fn apply_load_failure(&mut self, generation: u64, message: String) -> bool {
        if generation != self.generation {
            return false;
        }

        self.loading = false;
        self.error = Some(message);

        true
    }
}

impl Component for Board {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let stored = load_base_url().unwrap_or_default();
        if !stored.is_empty() {
            ctx.link().send_message(Msg::Refresh);
        }

        Board::with_base_url(stored)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::BaseUrlInput(base_url) => {
                store_base_url(&base_url);
                self.base_url = base_url;

                true
            }
            Msg::Refresh => {
                let base_url = self.base_url.trim().to_string();
                if base_url.is_empty() {
                    self.error = Some("Set the API base URL first".to_string());

                    return true;
                }

                store_base_url(&base_url);
                let generation = self.begin_refresh();

                let link = ctx.link().clone();
                spawn_local(async move {
                    match fetch_posts(&base_url).await {
                        Ok(posts) => link.send_message(Msg::Loaded(generation, posts)),
                        Err(err) => {
                            link.send_message(Msg::LoadFailed(generation, err.to_string()))
                        }
                    }
                });

                true
            }
            Msg::Loaded(generation, posts) => self.apply_loaded(generation, posts),
            Msg::LoadFailed(generation, message) => {
                error!("Error loading posts:", message.clone());

                self.apply_load_failure(generation, message)
            }
            Msg::Create(draft) => {
                let base_url = self.base_url.trim().to_string();

                let link = ctx.link().clone();
                spawn_local(async move {
                    match create_post(&base_url, &draft).await {
                        Ok(()) => link.send_message(Msg::Created),
                        Err(err) => link.send_message(Msg::MutationFailed(err.to_string())),
                    }
                });

                false
            }
            Msg::Created => {
                // remounts the compose form with empty inputs
                self.compose_epoch += 1;
                ctx.link().send_message(Msg::Refresh);

                true
            }
            Msg::Delete(id) => {
                let base_url = self.base_url.trim().to_string();

                let link = ctx.link().clone();
                spawn_local(async move {
                    match delete_post(&base_url, id).await {
                        Ok(()) => link.send_message(Msg::Mutated),
                        Err(err) => link.send_message(Msg::MutationFailed(err.to_string())),
                    }
                });

                false
            }
            Msg::Save(id, draft) => {
                let base_url = self.base_url.trim().to_string();

                let link = ctx.link().clone();
                spawn_local(async move {
                    match update_post(&base_url, id, &draft).await {
                        Ok(()) => link.send_message(Msg::Mutated),
                        Err(err) => link.send_message(Msg::MutationFailed(err.to_string())),
                    }
                });

                false
            }
            Msg::Mutated => {
                ctx.link().send_message(Msg::Refresh);

                false
            }
            Msg::MutationFailed(message) => {
                error!("Error updating posts:", message.clone());
                self.error = Some(message);

                true
            }
            Msg::DismissError => {
                self.error = None;

                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        gloo_utils::document().set_title(&format!("PostBoard ({})", self.posts.len()));
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
          <>
            <header>
              <h1>{"Post"}<span>{"Board"}</span></h1>
              <div class="config">
                <input
                  type="text"
                  placeholder="API base URL"
                  value={self.base_url.clone()}
                  oninput={link.callback(|e: InputEvent| {
                      Msg::BaseUrlInput(e.target_unchecked_into::<HtmlInputElement>().value())
                  })}
                />
                <button onclick={link.callback(|_| Msg::Refresh)}>{"Load posts"}</button>
              </div>
            </header>
            if let Some(error) = &self.error {
              <div class="error">
                {error.clone()}
                <button onclick={link.callback(|_| Msg::DismissError)}>{"Dismiss"}</button>
              </div>
            }
            <Compose
              key={self.compose_epoch.to_string()}
              on_submit={link.callback(Msg::Create)}
            />
            if self.posts.is_empty() {
              <div class="empty">
                if self.loading {
                  {"Loading posts…"}
                } else {
                  {"No posts yet"}
                }
              </div>
            } else {
              <div class="post-container">
                <PostList
                  key={self.generation.to_string()}
                  posts={self.posts.clone()}
                  on_delete={link.callback(Msg::Delete)}
                  on_save={link.callback(|(id, draft)| Msg::Save(id, draft))}
                />
              </div>
            }
          </>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: i64, title: &str) -> Post {
        Post {
            id,
            title: title.to_string(),
            author: "Ada".to_string(),
            content: "Content".to_string(),
            date: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn refresh_bumps_the_generation() {
        let mut board = Board::with_base_url("http://localhost/api".into());

        assert_eq!(board.begin_refresh(), 1);
        assert_eq!(board.begin_refresh(), 2);
        assert!(board.loading);
    }

    #[test]
    fn current_response_replaces_the_whole_list() {
        let mut board = Board::with_base_url("http://localhost/api".into());
        board.posts = vec![post(3, "old"), post(7, "old"), post(9, "old")];

        let generation = board.begin_refresh();
        assert!(board.apply_loaded(generation, vec![post(3, "new"), post(9, "new")]));

        let ids: Vec<i64> = board.posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 9]);
        assert!(!board.loading);
        assert!(board.error.is_none());
    }

    #[test]
    fn stale_response_is_ignored() {
        let mut board = Board::with_base_url("http://localhost/api".into());

        let stale = board.begin_refresh();
        let current = board.begin_refresh();
        assert!(board.apply_loaded(current, vec![post(1, "current")]));
        assert!(!board.apply_loaded(stale, vec![post(2, "stale")]));

        let ids: Vec<i64> = board.posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn stale_failure_is_ignored() {
        let mut board = Board::with_base_url("http://localhost/api".into());

        let stale = board.begin_refresh();
        let current = board.begin_refresh();
        assert!(board.apply_loaded(current, vec![post(1, "current")]));
        assert!(!board.apply_load_failure(stale, "request failed".into()));
        assert!(board.error.is_none());
    }

    #[test]
    fn failed_fetch_keeps_the_previous_list() {
        let mut board = Board::with_base_url("http://localhost/api".into());
        board.posts = vec![post(3, "kept"), post(7, "kept")];

        let generation = board.begin_refresh();
        assert!(board.apply_load_failure(generation, "server responded with status 500".into()));

        assert_eq!(board.posts.len(), 2);
        assert_eq!(
            board.error.as_deref(),
            Some("server responded with status 500")
        );
        assert!(!board.loading);
    }

    #[test]
    fn successful_load_clears_the_error_banner() {
        let mut board = Board::with_base_url("http://localhost/api".into());

        let generation = board.begin_refresh();
        assert!(board.apply_load_failure(generation, "request failed".into()));

        let generation = board.begin_refresh();
        assert!(board.apply_loaded(generation, vec![]));
        assert!(board.error.is_none());
    }
}

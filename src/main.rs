use board::Board;

mod api;
mod board;
mod compose;
mod error;
mod list;
mod post;
mod storage;
mod types;

fn main() {
    yew::Renderer::<Board>::new().render();
}

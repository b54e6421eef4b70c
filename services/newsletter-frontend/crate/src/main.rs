pub mod app;
pub mod components;
pub mod domain;
pub mod form;
pub mod theme;

fn main() {
    yew::Renderer::<app::Main>::new().render();
}

fn main() {
    ui::init_logging();
    yew::Renderer::<ui::App>::new().render();
}

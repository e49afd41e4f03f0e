mod hooks;
mod pagination_controls;
mod select;

use yew::BaseComponent;

/// Render the component with the props built by `props`, as plain HTML
/// without hydration markers.
pub async fn render<C>(
    props: impl FnOnce() -> C::Properties + Send + 'static,
) -> String
where
    C: BaseComponent,
{
    yew::ServerRenderer::<C>::with_props(props)
        .hydratable(false)
        .render()
        .await
}

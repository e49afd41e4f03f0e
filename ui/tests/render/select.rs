use ui::components::SelectOption;
use ui::components::select::{Props, Select};
use yew::prelude::*;

use crate::render;

fn props() -> Props {
    Props {
        options: vec![
            SelectOption::new("Option 1", "1"),
            SelectOption::new("Option 2", "2"),
        ],
        placeholder: Some("Choose".into()),
        value: None,
        required: false,
        error: None,
        name: None,
        class: Classes::new(),
        onchange: Callback::noop(),
    }
}

/// The `<option ...>...</option>` markup whose label is `label`.
fn option_markup<'a>(html: &'a str, label: &str) -> Option<&'a str> {
    html.split("<option").find(|segment| segment.contains(label))
}

#[tokio::test]
async fn select_renders_placeholder_and_options() -> anyhow::Result<()> {
    let html = render::<Select>(props).await;

    assert!(html.contains("Choose"));
    assert!(!html.contains("Choose*"));
    assert!(html.contains("Option 1"));
    assert!(html.contains("Option 2"));
    // Nothing chosen yet, so the placeholder is the selected entry
    let placeholder = option_markup(&html, "Choose").expect("placeholder");
    assert!(placeholder.contains("selected"));
    assert!(placeholder.contains("disabled"));

    Ok(())
}

#[tokio::test]
async fn select_marks_controlled_value() -> anyhow::Result<()> {
    let html = render::<Select>(|| Props {
        value: Some("1".into()),
        ..props()
    })
    .await;

    let first = option_markup(&html, "Option 1").expect("first option");
    let second = option_markup(&html, "Option 2").expect("second option");
    assert!(first.contains("selected"));
    assert!(!second.contains("selected"));
    let placeholder = option_markup(&html, "Choose").expect("placeholder");
    assert!(!placeholder.contains("selected"));

    Ok(())
}

#[tokio::test]
async fn select_required_and_error() -> anyhow::Result<()> {
    let html = render::<Select>(|| Props {
        required: true,
        error: Some("Please pick one".into()),
        ..props()
    })
    .await;

    assert!(html.contains("Choose*"));
    assert!(html.contains("Please pick one"));
    assert!(html.contains("border-red-500"));
    assert!(html.contains("aria-invalid"));

    Ok(())
}

#[tokio::test]
async fn select_without_error_has_no_message() -> anyhow::Result<()> {
    let html = render::<Select>(props).await;

    assert!(!html.contains("<p class=\"mt-1"));
    assert!(!html.contains("border-red-500"));
    assert!(!html.contains("aria-invalid"));

    Ok(())
}

use crate::models::{Fragment, FragmentStyle, OutputLine, OutputLineData};
use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

/// Get CSS class for a FragmentStyle
fn style_class(style: FragmentStyle) -> &'static str {
    match style {
        FragmentStyle::Accent => css::textGreen,
        FragmentStyle::Dim => css::textDim,
    }
}

/// Render one output line. Every string is inserted as a text node, so
/// markup in file contents or user input shows up literally.
#[component]
pub fn Output(line: OutputLine) -> impl IntoView {
    match line.data {
        OutputLineData::Command { prompt, input } => {
            view! {
                <div class=css::command>
                    <span class=format!("{} glow", css::textGreen)>{prompt}</span>
                    " "
                    <span class=css::textFg>{input}</span>
                </div>
            }.into_any()
        }
        OutputLineData::Text(text) => {
            view! {
                <div class=format!("{} {}", css::line, css::textFg)>{text}</div>
            }.into_any()
        }
        OutputLineData::Error(text) => {
            view! {
                <div class=format!("{} {}", css::line, css::textRed)>{text}</div>
            }.into_any()
        }
        OutputLineData::Styled(fragments) => {
            view! {
                <div class=css::line>
                    {fragments
                        .into_iter()
                        .map(|Fragment { text, style }| view! {
                            <span class=style_class(style)>{text}</span>
                        })
                        .collect_view()}
                </div>
            }.into_any()
        }
        OutputLineData::Preformatted(text) => {
            view! {
                <pre class=format!("{} {}", css::preformatted, css::textFg)>{text}</pre>
            }.into_any()
        }
    }
}

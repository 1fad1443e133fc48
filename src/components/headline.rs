//! Edge-to-edge display headlines. Characters are laid out as individual
//! spans justified across the full row, so the word physically stretches
//! to whatever width it is given.

use yew::prelude::*;

use crate::theme;

#[derive(Properties, PartialEq)]
pub struct StretchedHeadlineProps {
    pub text: AttrValue,
    #[prop_or(AttrValue::Static(theme::SIZE_H1))]
    pub font_size: AttrValue,
    #[prop_or(900)]
    pub font_weight: u32,
    #[prop_or(AttrValue::Static("0.9"))]
    pub line_height: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(StretchedHeadline)]
pub fn stretched_headline(props: &StretchedHeadlineProps) -> Html {
    let row_style = format!(
        "font-size: {}; font-weight: {}; line-height: {};",
        props.font_size, props.font_weight, props.line_height,
    );

    html! {
        <div class={classes!("stretched-headline", props.class.clone())}>
            <style>
                {r#"
                    .stretched-headline {
                        width: 100%;
                        text-transform: uppercase;
                    }
                    .stretched-headline .stretch-row {
                        display: flex;
                        justify-content: space-between;
                        width: 100%;
                        font-family: inherit;
                    }
                    .stretched-headline .stretch-row span {
                        display: inline-block;
                    }
                "#}
            </style>
            <div class="stretch-row" style={row_style}>
                { for props.text.chars().map(|c| {
                    let shown = if c == ' ' { '\u{a0}' } else { c };
                    html! { <span>{ shown }</span> }
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StretchedHeadlineMultilineProps {
    pub lines: Vec<AttrValue>,
    #[prop_or(AttrValue::Static(theme::SIZE_H1))]
    pub font_size: AttrValue,
    #[prop_or(900)]
    pub font_weight: u32,
    #[prop_or(AttrValue::Static("0.9"))]
    pub line_height: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Several stretched rows stacked flush, for the VOID / FRAME style
/// stacked wordmarks.
#[function_component(StretchedHeadlineMultiline)]
pub fn stretched_headline_multiline(props: &StretchedHeadlineMultilineProps) -> Html {
    html! {
        <div class={classes!("stretched-headline-stack", props.class.clone())}>
            { for props.lines.iter().map(|line| html! {
                <StretchedHeadline
                    text={line.clone()}
                    font_size={props.font_size.clone()}
                    font_weight={props.font_weight}
                    line_height={props.line_height.clone()}
                />
            }) }
        </div>
    }
}

//! Layout primitives: full-viewport containers, ratio splits, section
//! titles. Pure markup plus CSS, no state.

use yew::prelude::*;

use crate::theme;

#[derive(Properties, PartialEq)]
pub struct FullPageContainerProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// One full viewport of vertically centered content, positioned so
/// decorations can be absolutely placed inside it.
#[function_component(FullPageContainer)]
pub fn full_page_container(props: &FullPageContainerProps) -> Html {
    html! {
        <div class={classes!("full-page", props.class.clone())}>
            <style>
                {r#"
                    .full-page {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                    }
                "#}
            </style>
            { for props.children.iter() }
        </div>
    }
}

/// "60:40" style ratio into grid fractions. Malformed input falls back to
/// an even split.
pub fn parse_ratio(ratio: &str) -> (u32, u32) {
    let mut parts = ratio.split(':');
    match (
        parts.next().and_then(|p| p.trim().parse().ok()),
        parts.next().and_then(|p| p.trim().parse().ok()),
    ) {
        (Some(left), Some(right)) if left > 0 && right > 0 => (left, right),
        _ => (50, 50),
    }
}

/// Stacking breakpoint keyword to a max-width in px.
pub fn breakpoint_px(stack_at: &str) -> u32 {
    match stack_at {
        "sm" => 600,
        "md" => 900,
        "lg" => 1200,
        _ => 900,
    }
}

#[derive(Properties, PartialEq)]
pub struct SplitScreenProps {
    pub left: Html,
    pub right: Html,
    /// e.g. "60:40"
    #[prop_or(AttrValue::Static("50:50"))]
    pub ratio: AttrValue,
    /// Breakpoint below which the two halves stack: "sm" | "md" | "lg".
    #[prop_or(AttrValue::Static("md"))]
    pub stack_at: AttrValue,
    /// Gap in rem.
    #[prop_or(2)]
    pub gap: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(SplitScreen)]
pub fn split_screen(props: &SplitScreenProps) -> Html {
    let (left, right) = parse_ratio(&props.ratio);
    // Class name carries the configuration so two differently configured
    // splits on one page get distinct rules.
    let split_class = format!("split-{}-{}-{}", left, right, props.stack_at);
    let css = format!(
        r#"
            .{class} {{
                display: grid;
                grid-template-columns: {left}fr {right}fr;
                gap: {gap}rem;
                width: 100%;
                height: 100%;
            }}
            @media (max-width: {bp}px) {{
                .{class} {{
                    grid-template-columns: 1fr;
                }}
            }}
        "#,
        class = split_class,
        left = left,
        right = right,
        gap = props.gap,
        bp = breakpoint_px(&props.stack_at),
    );

    html! {
        <div class={classes!(split_class, props.class.clone())}>
            <style>{css}</style>
            <div class="split-left">{ props.left.clone() }</div>
            <div class="split-right">{ props.right.clone() }</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub overline: AttrValue,
    pub title: AttrValue,
    #[prop_or(AttrValue::Static(theme::ACCENT))]
    pub overline_color: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Small tracked overline above a display-size title.
#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    let css = format!(
        r#"
            .section-title .section-title-overline {{
                display: block;
                font-size: {overline_size};
                font-weight: 600;
                letter-spacing: {tracking};
                text-transform: uppercase;
                margin-bottom: 0.75rem;
            }}
            .section-title h2 {{
                font-size: {h2};
                font-weight: 900;
                line-height: 0.95;
                letter-spacing: {display_tracking};
                text-transform: uppercase;
                color: {text};
            }}
        "#,
        overline_size = theme::SIZE_OVERLINE,
        tracking = theme::TRACKING_OVERLINE,
        h2 = theme::SIZE_H2,
        display_tracking = theme::TRACKING_DISPLAY,
        text = theme::TEXT_PRIMARY,
    );

    html! {
        <div class={classes!("section-title", props.class.clone())}>
            <style>{css}</style>
            <span
                class="section-title-overline"
                style={format!("color: {};", props.overline_color)}
            >
                { props.overline.clone() }
            </span>
            <h2>{ props.title.clone() }</h2>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_parses_both_sides() {
        assert_eq!(parse_ratio("60:40"), (60, 40));
        assert_eq!(parse_ratio("45:55"), (45, 55));
    }

    #[test]
    fn malformed_ratio_falls_back_to_even_split() {
        assert_eq!(parse_ratio(""), (50, 50));
        assert_eq!(parse_ratio("60"), (50, 50));
        assert_eq!(parse_ratio("a:b"), (50, 50));
        assert_eq!(parse_ratio("0:100"), (50, 50));
    }

    #[test]
    fn unknown_breakpoint_defaults_to_md() {
        assert_eq!(breakpoint_px("sm"), 600);
        assert_eq!(breakpoint_px("xl"), 900);
    }
}

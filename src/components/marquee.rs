//! Infinite horizontal text marquee.
//!
//! The row holds two identical blocks of repeated text and the keyframes
//! translate it by exactly half its width, so the loop point lands on the
//! seam between the blocks and the scroll never visibly restarts.

use yew::prelude::*;

/// The repetitions that make up one of the two blocks.
pub fn marquee_items(text: &str, separator: &str, repeat: usize) -> Vec<String> {
    (0..repeat).map(|_| format!("{text}{separator}")).collect()
}

#[derive(Clone, Copy, PartialEq)]
pub enum MarqueeDirection {
    Left,
    Right,
}

#[derive(Properties, PartialEq)]
pub struct MarqueeTextProps {
    pub text: AttrValue,
    /// Seconds per full cycle.
    #[prop_or(20)]
    pub speed: u32,
    #[prop_or(MarqueeDirection::Left)]
    pub direction: MarqueeDirection,
    #[prop_or(AttrValue::Static(" \u{2014} "))]
    pub separator: AttrValue,
    #[prop_or(AttrValue::Static("clamp(3rem, 10vw, 8rem)"))]
    pub font_size: AttrValue,
    #[prop_or(900)]
    pub font_weight: u32,
    #[prop_or(6)]
    pub repeat: usize,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(MarqueeText)]
pub fn marquee_text(props: &MarqueeTextProps) -> Html {
    let items = marquee_items(&props.text, &props.separator, props.repeat);
    let direction_class = match props.direction {
        MarqueeDirection::Left => "marquee-left",
        MarqueeDirection::Right => "marquee-right",
    };
    let row_style = format!(
        "animation-duration: {}s; font-size: {}; font-weight: {};",
        props.speed, props.font_size, props.font_weight,
    );

    let block = |items: &[String]| -> Html {
        html! {
            <>
                { for items.iter().map(|item| html! {
                    <span class="marquee-item">{ item.clone() }</span>
                }) }
            </>
        }
    };

    html! {
        <div class={classes!("marquee", direction_class, props.class.clone())}>
            <style>
                {r#"
                    @keyframes marquee-scroll-left {
                        from { transform: translateX(0); }
                        to { transform: translateX(-50%); }
                    }
                    @keyframes marquee-scroll-right {
                        from { transform: translateX(-50%); }
                        to { transform: translateX(0); }
                    }
                    .marquee {
                        overflow: hidden;
                        width: 100%;
                    }
                    .marquee .marquee-row {
                        display: flex;
                        width: max-content;
                        animation-timing-function: linear;
                        animation-iteration-count: infinite;
                        line-height: 1;
                        text-transform: uppercase;
                        letter-spacing: -0.02em;
                    }
                    .marquee.marquee-left .marquee-row {
                        animation-name: marquee-scroll-left;
                    }
                    .marquee.marquee-right .marquee-row {
                        animation-name: marquee-scroll-right;
                    }
                    .marquee .marquee-item {
                        white-space: nowrap;
                    }
                "#}
            </style>
            <div class="marquee-row" style={row_style}>
                { block(&items) }
                { block(&items) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_block_holds_exactly_repeat_items() {
        let items = marquee_items("VOIDFRAME", " \u{2014} ", 6);
        assert_eq!(items.len(), 6);
        assert!(items.iter().all(|i| i == "VOIDFRAME \u{2014} "));
    }

    #[test]
    fn rendered_row_duplicates_the_block_once() {
        // Two blocks back to back: 2 * repeat items in the row, loop seam
        // at the -50% translation point.
        let repeat = 6;
        let items = marquee_items("COLLABORATE", " / ", repeat);
        let rendered: Vec<_> = items.iter().chain(items.iter()).collect();
        assert_eq!(rendered.len(), 2 * repeat);
    }
}

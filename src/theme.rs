//! Design tokens for the VOIDFRAME landing theme.
//!
//! Dark brutalist/editorial system: black ground, white display type,
//! one accent red, square corners, no shadows. Components interpolate
//! these into their `<style>` blocks instead of hardcoding values.

pub const BG: &str = "#000000";
pub const SURFACE: &str = "#0A0A0A";
pub const TEXT_PRIMARY: &str = "#FFFFFF";
pub const TEXT_SECONDARY: &str = "rgba(255, 255, 255, 0.5)";
pub const TEXT_FAINT: &str = "rgba(255, 255, 255, 0.3)";
pub const ACCENT: &str = "#D14836";
pub const DIVIDER: &str = "rgba(255, 255, 255, 0.15)";

pub const FONT_STACK: &str =
    "'Outfit', 'Pretendard Variable', Pretendard, -apple-system, BlinkMacSystemFont, system-ui, sans-serif";

/// Display sizes, clamp-based so the type stretches with the viewport.
pub const SIZE_H1: &str = "clamp(4rem, 12vw, 10rem)";
pub const SIZE_H2: &str = "clamp(3rem, 8vw, 7rem)";
pub const SIZE_H3: &str = "clamp(2rem, 5vw, 4rem)";
pub const SIZE_BODY: &str = "1.125rem";
pub const SIZE_OVERLINE: &str = "0.75rem";

pub const TRACKING_OVERLINE: &str = "0.12em";
pub const TRACKING_DISPLAY: &str = "-0.03em";

/// Everything is square. Kept as a token so nobody "fixes" a corner.
pub const RADIUS: &str = "0";

/// Baseline stylesheet applied once at the app root.
pub fn global_css() -> String {
    format!(
        r#"
        * {{
            box-sizing: border-box;
        }}
        html, body {{
            margin: 0;
            padding: 0;
            background-color: {bg};
            color: {text};
            font-family: {font};
            font-size: 16px;
            scrollbar-width: thin;
            scrollbar-color: rgba(255, 255, 255, 0.2) transparent;
        }}
        h1, h2, h3, h4, p {{
            margin: 0;
        }}
        button {{
            border-radius: {radius};
            font-family: {font};
        }}
        input, textarea {{
            border-radius: {radius};
            font-family: {font};
        }}
        a {{
            color: inherit;
            text-decoration: none;
        }}
        "#,
        bg = BG,
        text = TEXT_PRIMARY,
        font = FONT_STACK,
        radius = RADIUS,
    )
}

//! HTML renderer: turns a balance result and two images into a standalone
//! animated seesaw page.

use seesaw_protocol::{BalanceResult, SceneStyle, Side};

use crate::asset::EmbeddedImage;

const CONTAINER_WIDTH: u32 = 800;
const CONTAINER_HEIGHT: u32 = 400;
const PIVOT_BOTTOM: u32 = 100;
const PIVOT_WIDTH: u32 = 50;
const PIVOT_HEIGHT: u32 = 40;
const BAR_WIDTH: u32 = 400;
const BAR_HEIGHT: u32 = 5;
const WRAPPER_OVERHANG: u32 = 30;
const WRAPPER_DROP: u32 = 25;
const COUNTER_SIZE: u32 = 25;

/// Everything needed to render one seesaw page.
#[derive(Debug, Clone)]
pub struct Scene {
    pub good_image: EmbeddedImage,
    pub low_image: EmbeddedImage,
    pub good_count: u64,
    pub low_count: u64,
    pub balance: BalanceResult,
    pub style: SceneStyle,
}

impl Scene {
    fn image(&self, side: Side) -> &EmbeddedImage {
        match side {
            Side::Good => &self.good_image,
            Side::Low => &self.low_image,
        }
    }

    fn count(&self, side: Side) -> u64 {
        match side {
            Side::Good => self.good_count,
            Side::Low => self.low_count,
        }
    }
}

/// Render the scene as a complete HTML document.
///
/// The bar starts level and the emoji at their base size; a script rotates
/// the bar to `tilt_degrees` after `start_delay_ms` and counter-rotates each
/// emoji so it stays upright while scaling.
pub fn render_html(scene: &Scene) -> String {
    let mut html = String::with_capacity(
        scene.good_image.base64().len() + scene.low_image.base64().len() + 4096,
    );
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Seesaw</title>\n");
    push_style(&mut html, &scene.style);
    html.push_str("</head>\n<body>\n");
    push_body(&mut html, scene);
    push_script(&mut html, &scene.balance, &scene.style);
    html.push_str("</body>\n</html>\n");
    html
}

fn push_style(html: &mut String, style: &SceneStyle) {
    let background = css_value(&style.background);
    let good_color = css_value(&style.good_color);
    let low_color = css_value(&style.low_color);
    let size = style.emoji_size_px;
    let transition = style.transition_ms;

    html.push_str("<style>\n");
    html.push_str(&format!(
        "body {{ display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0; background-color: {background}; overflow: hidden; }}\n"
    ));
    html.push_str(&format!(
        ".container {{ position: relative; width: {CONTAINER_WIDTH}px; height: {CONTAINER_HEIGHT}px; }}\n"
    ));
    html.push_str(&format!(
        ".seesaw-pivot-container {{ position: absolute; bottom: {PIVOT_BOTTOM}px; left: 50%; transform: translateX(-50%); }}\n"
    ));
    html.push_str(&format!(
        ".pivot-block {{ position: absolute; bottom: 0; left: 50%; width: {PIVOT_WIDTH}px; height: {PIVOT_HEIGHT}px; background-color: black; transform: translateX(-50%); border-radius: 10px; z-index: 1; }}\n"
    ));
    html.push_str(&format!(
        ".seesaw-bar {{ position: relative; width: {BAR_WIDTH}px; height: {BAR_HEIGHT}px; background-color: black; transform-origin: center; transition: transform {transition}ms ease-in-out; transform: rotate(0deg); z-index: 2; bottom: {PIVOT_HEIGHT}px; }}\n"
    ));
    html.push_str(&format!(
        ".emoji-wrapper {{ position: absolute; bottom: -{WRAPPER_DROP}px; transition: all {transition}ms ease-in-out; transform-origin: 50% 100%; width: {size}px; height: {size}px; }}\n"
    ));
    html.push_str(&format!("#low-wrapper {{ left: -{WRAPPER_OVERHANG}px; }}\n"));
    html.push_str(&format!("#good-wrapper {{ right: -{WRAPPER_OVERHANG}px; }}\n"));
    html.push_str(
        ".emoji { width: 100%; height: 100%; border-radius: 30%; object-fit: cover; }\n",
    );
    html.push_str(&format!(
        ".counter {{ position: absolute; top: 0; right: 0; width: {COUNTER_SIZE}px; height: {COUNTER_SIZE}px; display: flex; justify-content: center; align-items: center; font-family: sans-serif; font-size: 12px; font-weight: bold; color: black; border-radius: 50%; border-style: double; border-width: 3px; background-color: white; z-index: 3; transform: translate(50%, -50%); }}\n"
    ));
    html.push_str(&format!(".good-counter {{ border-color: {good_color}; }}\n"));
    html.push_str(&format!(".low-counter {{ border-color: {low_color}; }}\n"));
    html.push_str("</style>\n");
}

fn push_body(html: &mut String, scene: &Scene) {
    html.push_str("<div class=\"container\">\n<div class=\"seesaw-pivot-container\">\n");
    html.push_str("<div class=\"pivot-block\"></div>\n");
    html.push_str("<div class=\"seesaw-bar\" id=\"seesaw-bar\">\n");
    // Low sits on the left end of the bar, good on the right.
    for side in [Side::Low, Side::Good] {
        html.push_str(&format!(
            "<div class=\"emoji-wrapper\" id=\"{side}-wrapper\">\n<img id=\"{side}-emoji\" class=\"emoji\" alt=\"{side}\" src=\"{}\">\n<div class=\"counter {side}-counter\">{}</div>\n</div>\n",
            scene.image(side).data_uri(),
            scene.count(side),
        ));
    }
    html.push_str("</div>\n</div>\n</div>\n");
}

fn push_script(html: &mut String, balance: &BalanceResult, style: &SceneStyle) {
    html.push_str("<script>\n");
    html.push_str(&format!(
        "const finalTilt = {};\nconst lowSizeFactor = {};\nconst goodSizeFactor = {};\n",
        js_number(balance.tilt_degrees),
        js_number(balance.scale_factor(Side::Low)),
        js_number(balance.scale_factor(Side::Good)),
    ));
    html.push_str(
        "const seesawBar = document.getElementById('seesaw-bar');\n\
         const lowWrapper = document.getElementById('low-wrapper');\n\
         const goodWrapper = document.getElementById('good-wrapper');\n",
    );
    html.push_str(&format!(
        "setTimeout(() => {{\n  seesawBar.style.transform = `rotate(${{finalTilt}}deg)`;\n  lowWrapper.style.transform = `rotate(${{-finalTilt}}deg) scale(${{lowSizeFactor}})`;\n  goodWrapper.style.transform = `rotate(${{-finalTilt}}deg) scale(${{goodSizeFactor}})`;\n}}, {});\n",
        style.start_delay_ms,
    ));
    html.push_str("</script>\n");
}

/// Format a float as a JavaScript numeric literal. Non-finite values fall
/// back to `0` so the script stays valid.
fn js_number(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else {
        "0".to_string()
    }
}

/// Restrict a user-provided CSS value to characters that cannot close the
/// declaration, the rule, or the surrounding `<style>` element.
fn css_value(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '#' | '(' | ')' | ',' | '.' | '%' | ' ' | '-'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
    const GIF_HEADER: &[u8] = b"GIF89a\x01\0\x01\0";

    fn scene(balance: BalanceResult, style: SceneStyle) -> Scene {
        Scene {
            good_image: EmbeddedImage::from_bytes(PNG_HEADER).unwrap(),
            low_image: EmbeddedImage::from_bytes(GIF_HEADER).unwrap(),
            good_count: 4,
            low_count: 6,
            balance,
            style,
        }
    }

    #[test]
    fn basic_html_output() {
        let balance = BalanceResult {
            tilt_degrees: -4.0,
            good_scale_factor: 0.5,
            low_scale_factor: 2.0,
            dominant: Some(Side::Low),
        };
        let html = render_html(&scene(balance, SceneStyle::default()));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
        assert!(html.contains("const finalTilt = -4;"));
        assert!(html.contains("const lowSizeFactor = 2;"));
        assert!(html.contains("const goodSizeFactor = 0.5;"));
        assert!(html.contains("<div class=\"counter good-counter\">4</div>"));
        assert!(html.contains("<div class=\"counter low-counter\">6</div>"));
        assert!(html.contains("}, 50);"));
        assert!(html.contains("transition: transform 1000ms ease-in-out"));
        assert!(html.contains("width: 60px; height: 60px;"));
    }

    #[test]
    fn inlines_both_images_on_their_sides() {
        let s = scene(BalanceResult::NEUTRAL, SceneStyle::default());
        let html = render_html(&s);
        let low_at = html.find("id=\"low-wrapper\"").unwrap();
        let good_at = html.find("id=\"good-wrapper\"").unwrap();
        let gif_at = html.find(&s.low_image.data_uri()).unwrap();
        let png_at = html.find(&s.good_image.data_uri()).unwrap();
        assert!(low_at < gif_at && gif_at < good_at);
        assert!(good_at < png_at);
        assert!(html.contains("src=\"data:image/gif;base64,"));
    }

    #[test]
    fn applies_style_settings() {
        let style = SceneStyle {
            emoji_size_px: 90,
            transition_ms: 2500,
            start_delay_ms: 300,
            background: "#202020".into(),
            good_color: "rgb(0, 128, 0)".into(),
            low_color: "orange".into(),
        };
        let html = render_html(&scene(BalanceResult::NEUTRAL, style));
        assert!(html.contains("background-color: #202020;"));
        assert!(html.contains(".good-counter { border-color: rgb(0, 128, 0); }"));
        assert!(html.contains(".low-counter { border-color: orange; }"));
        assert!(html.contains("width: 90px; height: 90px;"));
        assert!(html.contains("transition: all 2500ms ease-in-out"));
        assert!(html.contains("}, 300);"));
    }

    #[test]
    fn strips_markup_from_style_values() {
        let style = SceneStyle {
            background: "red;}</style><script>alert(1)</script>".into(),
            ..SceneStyle::default()
        };
        let html = render_html(&scene(BalanceResult::NEUTRAL, style));
        assert_eq!(html.matches("</style>").count(), 1);
        assert_eq!(html.matches("<script>").count(), 1);
        assert!(html.contains("background-color: redstylescriptalert(1)script;"));
    }

    #[test]
    fn non_finite_numbers_render_as_zero() {
        assert_eq!(js_number(f64::NAN), "0");
        assert_eq!(js_number(f64::INFINITY), "0");
        assert_eq!(js_number(1.3), "1.3");
    }
}

//! Stems drawn from the x-axis baseline up to every point of a scatter chart.
//!
//! The decorator is attached to a single chart through [Plugin::Lollipop];
//! the page runtime draws the stems after every redraw of that chart.
//!
//! [Plugin::Lollipop]: crate::chart::config::Plugin::Lollipop

use serde::Serialize;

use crate::chart::color::Rgba;

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LollipopStyle {
    pub line_width: f64,
    /// Used when the dataset has no single border color.
    pub fallback_color: Rgba,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::color::PURPLE;
    use crate::chart::config::Plugin;

    #[test]
    fn serializes_as_renderer_plugin() {
        let plugin = Plugin::Lollipop(LollipopStyle {
            line_width: 2.0,
            fallback_color: PURPLE.with_alpha(0.5),
        });

        assert_eq!(
            serde_json::to_string(&plugin).unwrap(),
            r#"{"id":"lollipopLine","lineWidth":2.0,"fallbackColor":"rgba(153, 102, 255, 0.5)"}"#
        );
    }
}

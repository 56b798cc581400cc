//! Layout calculation: content size and selection to rectangles.

use stoat_common::{Rect, Size};

use super::{ChromeMode, LayoutEngine, LayoutPlan};

impl LayoutEngine {
    /// Place the sidebar and every instance surface.
    ///
    /// The active surface fills the content area below the titlebar band
    /// (or all of it with native chrome); every other surface is parked
    /// off-canvas. Negative heights clamp to zero.
    pub fn compute<'a>(
        &self,
        content: Size,
        chrome: ChromeMode,
        active: Option<&str>,
        ids: impl IntoIterator<Item = &'a str>,
    ) -> LayoutPlan {
        let width = content.width.max(0.0);
        let height = content.height.max(0.0);

        let (sidebar, bar) = match chrome {
            ChromeMode::Custom => {
                let bar = self.titlebar_height.min(height);
                (
                    Rect {
                        x: 0.0,
                        y: 0.0,
                        width,
                        height: bar,
                    },
                    bar,
                )
            }
            ChromeMode::Native => (Rect::PARKED, 0.0),
        };

        let body = Rect {
            x: 0.0,
            y: bar,
            width,
            height: (height - bar).max(0.0),
        };

        let surfaces = ids
            .into_iter()
            .map(|id| {
                let rect = if Some(id) == active {
                    body
                } else {
                    Rect::PARKED
                };
                (id.to_string(), rect)
            })
            .collect();

        LayoutPlan { sidebar, surfaces }
    }
}

//! Stroke icons (24x24 viewbox, lucide geometry).

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    ChevronDown,
    ChevronUp,
    Mail,
    Phone,
    MapPin,
    Refresh,
}

impl IconKind {
    /// SVG path data, drawn in order
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            IconKind::ChevronDown => &["m6 9 6 6 6-6"],
            IconKind::ChevronUp => &["m18 15-6-6-6 6"],
            IconKind::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            IconKind::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 \
                 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 \
                 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 \
                 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            IconKind::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
                "M12 7a3 3 0 1 0 0 6a3 3 0 1 0 0-6z",
            ],
            IconKind::Refresh => &[
                "M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8",
                "M21 3v5h-5",
                "M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16",
                "M8 16H3v5",
            ],
        }
    }
}

#[component]
pub fn Icon(
    kind: IconKind,
    /// Rendered width/height in pixels
    #[props(default = 18)]
    size: u32,
) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            width: "{size}",
            height: "{size}",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in kind.paths().iter() {
                path { d: "{d}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_geometry() {
        for kind in [
            IconKind::ChevronDown,
            IconKind::ChevronUp,
            IconKind::Mail,
            IconKind::Phone,
            IconKind::MapPin,
            IconKind::Refresh,
        ] {
            assert!(!kind.paths().is_empty(), "{kind:?}");
        }
    }
}

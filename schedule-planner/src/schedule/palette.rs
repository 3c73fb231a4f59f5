use serde::Serialize;

/// Style classes for one color token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorClasses {
    pub bg: &'static str,
    pub text: &'static str,
    pub border: &'static str,
}

const FALLBACK: ColorClasses = ColorClasses {
    bg: "bg-gray-200",
    text: "text-gray-800",
    border: "border-gray-300",
};

const PALETTE: [(&str, ColorClasses); 5] = [
    (
        "schedule-item-1",
        ColorClasses {
            bg: "bg-schedule-item-1/20",
            text: "text-schedule-item-1",
            border: "border-schedule-item-1",
        },
    ),
    (
        "schedule-item-2",
        ColorClasses {
            bg: "bg-schedule-item-2/20",
            text: "text-schedule-item-2",
            border: "border-schedule-item-2",
        },
    ),
    (
        "schedule-item-3",
        ColorClasses {
            bg: "bg-schedule-item-3/20",
            text: "text-schedule-item-3",
            border: "border-schedule-item-3",
        },
    ),
    (
        "schedule-item-4",
        ColorClasses {
            bg: "bg-schedule-item-4/20",
            text: "text-schedule-item-4",
            border: "border-schedule-item-4",
        },
    ),
    (
        "schedule-item-5",
        ColorClasses {
            bg: "bg-schedule-item-5/20",
            text: "text-schedule-item-5",
            border: "border-schedule-item-5",
        },
    ),
];

/// Looks up the classes for a color token, gray for anything unknown
pub fn color_classes(token: &str) -> ColorClasses {
    PALETTE
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, classes)| *classes)
        .unwrap_or(FALLBACK)
}

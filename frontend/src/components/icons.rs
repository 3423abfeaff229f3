use yew::prelude::*;

/// Lucide Icons
/// SVG 路径来自 https://lucide.dev
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconName {
    ArrowLeft,
    Heart,
    Pencil,
    Trash,
}

impl IconName {
    /// SVG path data of the icon.
    pub fn path(&self) -> &'static str {
        match self {
            IconName::ArrowLeft => "M12 19l-7-7 7-7M5 12h14",
            IconName::Heart => {
                "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 \
                 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"
            },
            IconName::Pencil => "M17 3a2.85 2.83 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5Z",
            IconName::Trash => "M3 6h18M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: IconName,

    #[prop_or(24)]
    pub size: u32,

    #[prop_or_else(|| "currentColor".to_string())]
    pub color: String,

    /// Fill the shape with `color` (used for the active heart).
    #[prop_or_default]
    pub filled: bool,

    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let IconProps {
        name,
        size,
        color,
        filled,
        class,
    } = props;

    let stroke_width = if *size <= 16 { 2.5 } else { 2.0 };
    let fill = if *filled { color.as_str() } else { "none" };

    html! {
        <svg
            class={classes!("icon", class.clone())}
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill={fill.to_string()}
            stroke={color.clone()}
            stroke-width={stroke_width.to_string()}
            stroke-linecap="round"
            stroke-linejoin="round"
            xmlns="http://www.w3.org/2000/svg"
            aria-hidden="true"
        >
            <path d={name.path()} />
        </svg>
    }
}

use dioxus::prelude::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
    /// White button on the primary-coloured band.
    Inverted,
    /// Transparent button with a white border on the primary-coloured band.
    InvertedOutline,
}

impl ButtonVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn-primary",
            Self::Outline => "btn-outline",
            Self::Ghost => "btn-ghost",
            Self::Inverted => "btn-inverted",
            Self::InvertedOutline => "btn-inverted-outline",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Lg,
    Icon,
}

impl ButtonSize {
    const fn class(self) -> &'static str {
        match self {
            Self::Default => "btn-md",
            Self::Lg => "btn-lg",
            Self::Icon => "btn-icon",
        }
    }
}

fn classes(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let mut class = format!("btn {} {}", variant.class(), size.class());
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// A `<button>`; `submit` switches its type from `button` to `submit`.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default)] submit: bool,
    #[props(default)] disabled: bool,
    #[props(default, into)] class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let class = classes(variant, size, &class);
    let kind = if submit { "submit" } else { "button" };

    rsx! {
        button {
            class: "{class}",
            r#type: kind,
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

/// An anchor styled as a button.
#[component]
pub fn ButtonLink(
    #[props(into)] href: String,
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default, into)] class: String,
    children: Element,
) -> Element {
    let class = classes(variant, size, &class);

    rsx! {
        a { class: "{class}", href: "{href}", {children} }
    }
}

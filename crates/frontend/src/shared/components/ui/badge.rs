use leptos::prelude::*;

/// Visual style of a [`Badge`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
}

impl BadgeVariant {
    pub fn class(self) -> &'static str {
        match self {
            BadgeVariant::Primary => "badge--primary",
            BadgeVariant::Secondary => "badge--secondary",
            BadgeVariant::Destructive => "badge--destructive",
        }
    }
}

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant, `Primary` by default
    #[prop(optional)]
    variant: BadgeVariant,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant.class(), additional_class())>
            {children()}
        </span>
    }
}

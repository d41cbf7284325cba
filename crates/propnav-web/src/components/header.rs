//! Site header with responsive navigation and mobile menu
//!
//! All decisions (active entry, badge text, layout variant, panel and backdrop
//! visibility) come from `propnav_core::render_header`; this component only
//! draws the resulting `HeaderView` and feeds user input back as menu events.
//! Every link in the header (brand, entries, secondary bar) is a `Select`
//! event, so following any of them closes the mobile menu.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use propnav_core::render::{LinkView, ToggleView};
use propnav_core::{
    render_header, ItemView, LayoutView, LucideIcons, MenuEvent, MenuState, NavConfig, Navigator,
    RenderInputs, RouteContext,
};
use std::sync::Arc;

use super::{use_favorites_count, use_viewport_width};

/// Apply a menu event. The signal is updated before the navigation request is
/// handed to the router.
fn dispatch(menu: RwSignal<MenuState>, event: MenuEvent, navigator: &mut dyn Navigator) {
    let request = menu.try_update(|state| state.apply(&event)).flatten();
    if let Some(request) = request {
        navigator.navigate_to(&request.path);
    }
}

/// Header with brand, primary navigation, auth slot and mobile menu
#[component]
pub fn Header(
    /// Static navigation config; the built-in site navigation when omitted
    #[prop(optional, into)]
    config: Option<Arc<NavConfig>>,
    /// Externally rendered authentication control
    #[prop(optional)]
    auth_slot: Option<ChildrenFn>,
) -> impl IntoView {
    let config = config.unwrap_or_else(|| Arc::new(NavConfig::default()));
    let menu = RwSignal::new(MenuState::Closed);
    let location = use_location();
    let navigate = use_navigate();
    let favorites = use_favorites_count();
    let width = use_viewport_width(config.breakpoints.wide);

    let header_view = Memo::new(move |_| {
        let inputs = RenderInputs {
            route: RouteContext::new(location.pathname.get()),
            favorites_count: favorites.get(),
            viewport_width: width.get(),
        };
        render_header(&config, &inputs, menu.get(), &LucideIcons)
    });

    let select = Callback::new(move |path: String| {
        dispatch(menu, MenuEvent::Select(path), &mut |target: &str| {
            navigate(target, NavigateOptions::default())
        });
    });

    let brand = header_view.with_untracked(|view| view.brand.clone());
    let home_path = brand.home_path.clone();

    view! {
        <header class="site-header">
            <div class="site-header-bar">
                <a
                    href=brand.home_path.clone()
                    class="brand"
                    on:click=move |ev: MouseEvent| {
                        ev.prevent_default();
                        select.run(home_path.clone());
                    }
                >
                    <span class="brand-logo" inner_html=brand.glyph.svg_markup(20)></span>
                    <span class="brand-text">
                        <span class="brand-title">{brand.title.clone()}</span>
                        {brand
                            .subtitle
                            .clone()
                            .map(|subtitle| view! { <span class="brand-subtitle">{subtitle}</span> })}
                    </span>
                </a>

                {move || match header_view.get().layout {
                    LayoutView::Wide { items } => {
                        view! {
                            <nav class="site-nav site-nav-wide">
                                {items
                                    .into_iter()
                                    .map(|item| nav_item(item, true, select))
                                    .collect_view()}
                            </nav>
                        }
                            .into_any()
                    }
                    LayoutView::Compact { items } => {
                        view! {
                            <nav class="site-nav site-nav-compact">
                                {items
                                    .into_iter()
                                    .map(|item| nav_item(item, false, select))
                                    .collect_view()}
                            </nav>
                        }
                            .into_any()
                    }
                    LayoutView::Mobile { .. } => ().into_any(),
                }}

                <div class="site-header-actions">
                    {auth_slot.map(|slot| view! { <div class="auth-slot">{slot()}</div> })}
                    {move || match header_view.get().layout {
                        LayoutView::Mobile { toggle, .. } => Some(menu_toggle(toggle, menu)),
                        _ => None,
                    }}
                </div>
            </div>

            {move || match header_view.get().layout {
                LayoutView::Mobile { panel: Some(items), .. } => {
                    Some(
                        view! {
                            <div class="mobile-panel">
                                <nav class="site-nav site-nav-mobile">
                                    {items
                                        .into_iter()
                                        .map(|item| nav_item(item, true, select))
                                        .collect_view()}
                                </nav>
                            </div>
                        },
                    )
                }
                _ => None,
            }}
        </header>

        {move || header_view.get().secondary.map(|links| secondary_bar(links, select))}

        <Show when=move || header_view.with(|view| view.backdrop)>
            <div
                class="site-header-backdrop"
                on:click=move |_| dispatch(menu, MenuEvent::BackdropClick, &mut |_: &str| {})
            ></div>
        </Show>
    }
}

/// Navigation button for any of the three layouts
fn nav_item(item: ItemView, show_label: bool, select: Callback<String>) -> impl IntoView {
    let ItemView {
        label,
        path,
        glyph,
        active,
        badge,
        tooltip,
        appear_delay_ms,
    } = item;

    let class = if active {
        "nav-item nav-item-active"
    } else {
        "nav-item"
    };
    let style = appear_delay_ms
        .map(|ms| format!("animation-delay: {}ms", ms))
        .unwrap_or_default();

    view! {
        <button
            class=class
            class:nav-item-staggered=appear_delay_ms.is_some()
            style=style
            title=tooltip
            aria-current=active.then_some("page")
            on:click=move |_| select.run(path.clone())
        >
            <span class="nav-item-icon" inner_html=glyph.svg_markup(18)></span>
            {show_label.then(|| view! { <span class="nav-item-label">{label}</span> })}
            {badge.map(|text| view! { <span class="nav-badge">{text}</span> })}
        </button>
    }
}

fn menu_toggle(toggle: ToggleView, menu: RwSignal<MenuState>) -> impl IntoView {
    view! {
        <button
            class="menu-toggle"
            class:menu-toggle-open=toggle.aria_expanded
            aria-label=toggle.aria_label
            aria-expanded=toggle.aria_expanded.to_string()
            on:click=move |_| dispatch(menu, MenuEvent::Toggle, &mut |_: &str| {})
        >
            <span class="menu-toggle-icon" inner_html=toggle.glyph.svg_markup(22)></span>
        </button>
    }
}

/// Auxiliary links below the header
fn secondary_bar(links: Vec<LinkView>, select: Callback<String>) -> impl IntoView {
    view! {
        <div class="secondary-bar">
            {links
                .into_iter()
                .map(|link| {
                    let path = link.path.clone();
                    view! {
                        <a
                            href=link.path
                            class="secondary-link"
                            on:click=move |ev: MouseEvent| {
                                ev.prevent_default();
                                select.run(path.clone());
                            }
                        >
                            {link
                                .glyph
                                .map(|glyph| {
                                    view! {
                                        <span
                                            class="secondary-link-icon"
                                            inner_html=glyph.svg_markup(12)
                                        ></span>
                                    }
                                })}
                            <span>{link.label}</span>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorded_dispatch(
        menu: RwSignal<MenuState>,
        event: MenuEvent,
    ) -> Vec<(String, MenuState)> {
        let mut seen = Vec::new();
        dispatch(menu, event, &mut |path: &str| {
            seen.push((path.to_string(), menu.get_untracked()))
        });
        seen
    }

    #[test]
    fn test_select_commits_closed_before_navigating() {
        let owner = Owner::new();
        owner.set();

        let menu = RwSignal::new(MenuState::Open);
        let seen = recorded_dispatch(menu, MenuEvent::Select("/".to_string()));

        assert_eq!(seen, vec![("/".to_string(), MenuState::Closed)]);
        assert_eq!(menu.get_untracked(), MenuState::Closed);
    }

    #[test]
    fn test_toggle_and_backdrop_never_navigate() {
        let owner = Owner::new();
        owner.set();

        let menu = RwSignal::new(MenuState::Closed);
        assert!(recorded_dispatch(menu, MenuEvent::Toggle).is_empty());
        assert_eq!(menu.get_untracked(), MenuState::Open);

        assert!(recorded_dispatch(menu, MenuEvent::BackdropClick).is_empty());
        assert_eq!(menu.get_untracked(), MenuState::Closed);
    }

    #[test]
    fn test_brand_and_secondary_links_close_open_menu() {
        let owner = Owner::new();
        owner.set();

        let config = NavConfig::default();
        let targets = std::iter::once(config.brand.home_path.clone())
            .chain(config.secondary.iter().map(|link| link.path.clone()));

        for path in targets {
            let menu = RwSignal::new(MenuState::Open);
            let seen = recorded_dispatch(menu, MenuEvent::Select(path.clone()));
            assert_eq!(seen, vec![(path, MenuState::Closed)]);
        }
    }
}

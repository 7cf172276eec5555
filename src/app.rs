use std::rc::Rc;
use std::time::Duration;

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::HttpSource;
use crate::config::Config;
use crate::nav::{Intent, Navigator, PageSurface, Region};

/// Side menu plus overlay. Every open or close bumps `generation`, so a
/// release scheduled by an earlier close can tell it has been overtaken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct MenuState {
    open: bool,
    overlay_active: bool,
    generation: u64,
}

impl MenuState {
    /// Returns the generation a delayed overlay release must match when closing.
    fn toggle(&mut self, open: bool) -> Option<u64> {
        self.generation += 1;
        self.open = open;
        if open {
            self.overlay_active = true;
            None
        } else {
            Some(self.generation)
        }
    }

    fn release(&mut self, generation: u64) -> bool {
        if self.open || self.generation != generation || !self.overlay_active {
            return false;
        }
        self.overlay_active = false;
        true
    }
}

/// Reactive backing for every page region. The markup written by the
/// navigator is mounted with `inner_html`.
#[derive(Clone, Copy)]
struct PageRegions {
    content: [RwSignal<String>; 4],
    visible: [RwSignal<bool>; 4],
    menu: RwSignal<MenuState>,
    overlay_release: Duration,
}

impl PageRegions {
    fn new(overlay_release: Duration) -> Self {
        Self {
            content: std::array::from_fn(|_| RwSignal::new(String::new())),
            visible: std::array::from_fn(|_| RwSignal::new(true)),
            menu: RwSignal::new(MenuState::default()),
            overlay_release,
        }
    }

    fn content(&self, region: Region) -> RwSignal<String> {
        self.content[region.index()]
    }

    fn visible(&self, region: Region) -> RwSignal<bool> {
        self.visible[region.index()]
    }
}

impl PageSurface for PageRegions {
    fn render(&self, region: Region, markup: String) {
        self.content(region).set(markup);
    }

    fn set_visible(&self, region: Region, visible: bool) {
        self.visible(region).set(visible);
    }

    fn scroll_into_view(&self, region: Region) {
        match document().get_element_by_id(region.element_id()) {
            Some(element) => element.scroll_into_view(),
            None => log::warn!("No element #{} to scroll to", region.element_id()),
        }
    }

    fn scroll_to_top(&self) {
        window().scroll_to_with_x_and_y(0.0, 0.0);
    }

    fn set_menu_open(&self, open: bool) {
        let mut state = self.menu.get_untracked();
        let pending = state.toggle(open);
        self.menu.set(state);
        let Some(generation) = pending else {
            return;
        };
        let menu = self.menu;
        set_timeout(
            move || {
                let mut state = menu.get_untracked();
                if state.release(generation) {
                    menu.set(state);
                }
            },
            self.overlay_release,
        );
    }
}

/// Finds the tile under a click through its `data-meal-id` / `data-category`.
fn tile_intent(ev: &MouseEvent) -> Option<Intent> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let tile = target
        .closest("[data-meal-id], [data-category]")
        .ok()
        .flatten()?;
    Intent::from_tile(
        tile.get_attribute("data-category"),
        tile.get_attribute("data-meal-id"),
    )
}

#[component]
pub fn App(config: Config) -> impl IntoView {
    let regions = PageRegions::new(config.overlay_release);
    log::info!("Using recipe service at {}", config.api_base);
    let navigator = StoredValue::new_local(Rc::new(Navigator::new(
        HttpSource::new(&config),
        regions,
    )));

    let dispatch = move |intent: Intent| {
        let navigator = navigator.get_value();
        spawn_local(async move {
            navigator.handle(intent).await;
        });
    };

    Effect::new(move |_| {
        let navigator = navigator.get_value();
        spawn_local(async move {
            navigator.load_categories().await;
        });
    });

    let (query, set_query) = signal(String::new());

    let on_tile_click = move |ev: MouseEvent| {
        if let Some(intent) = tile_intent(&ev) {
            dispatch(intent);
        }
    };

    let region_view = move |region: Region, class: &'static str| {
        view! {
            <section
                id=region.element_id()
                class=class
                class:hidden=move || !regions.visible(region).get()
                inner_html=move || regions.content(region).get()
                on:click=on_tile_click
            ></section>
        }
    };

    view! {
        <div class="app">
            <header class="topbar">
                <button class="menu-btn" title="Categories" on:click=move |_| dispatch(Intent::OpenMenu)>
                    "☰"
                </button>
                <button class="home-btn" on:click=move |_| dispatch(Intent::Home)>
                    "Home"
                </button>
                <div class="search-area">
                    <input
                        type="text"
                        placeholder="Search for a meal..."
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                        on:keydown=move |ev: KeyboardEvent| {
                            if ev.key() == "Enter" {
                                dispatch(Intent::Search(query.get_untracked()));
                            }
                        }
                    />
                    <button class="search-btn" on:click=move |_| dispatch(Intent::Search(query.get_untracked()))>
                        "Search"
                    </button>
                </div>
            </header>
            <div
                class="overlay"
                class:visible=move || regions.menu.get().open
                class:interactive=move || regions.menu.get().overlay_active
                on:click=move |_| dispatch(Intent::CloseMenu)
            ></div>
            <aside class="side-menu" class:open=move || regions.menu.get().open>
                <button class="close-btn" title="Close" on:click=move |_| dispatch(Intent::CloseMenu)>
                    "×"
                </button>
                <ul
                    id=Region::Menu.element_id()
                    class="menu-list"
                    inner_html=move || regions.content(Region::Menu).get()
                    on:click=on_tile_click
                ></ul>
            </aside>
            <main class="content">
                {region_view(Region::Details, "category-details")}
                {region_view(Region::Meals, "meals-grid")}
                {region_view(Region::Categories, "cards")}
            </main>
        </div>
    }
}

//! Navigation over the page regions: menu, category drill-down, meal detail
//! and search. The controller only talks to the page through [`PageSurface`],
//! so it runs the same against the Leptos shell and against test doubles.

use std::cell::{Cell, RefCell};
use std::future::Future;

use crate::api::MealSource;
use crate::store::CategoryStore;
use crate::view::{self, Notice};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Categories,
    Menu,
    Details,
    Meals,
}

impl Region {
    pub fn index(self) -> usize {
        match self {
            Region::Categories => 0,
            Region::Menu => 1,
            Region::Details => 2,
            Region::Meals => 3,
        }
    }

    pub fn element_id(self) -> &'static str {
        match self {
            Region::Categories => "categories",
            Region::Menu => "menu-list",
            Region::Details => "category-details",
            Region::Meals => "meals",
        }
    }
}

/// What the controller needs from the page.
pub trait PageSurface {
    fn render(&self, region: Region, markup: String);
    fn set_visible(&self, region: Region, visible: bool);
    fn scroll_into_view(&self, region: Region);
    fn scroll_to_top(&self);
    /// Closing must also release the overlay once its transition is over.
    fn set_menu_open(&self, open: bool);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    OpenMenu,
    CloseMenu,
    OpenCategory(String),
    OpenMeal(String),
    Search(String),
    Home,
}

impl Intent {
    /// Maps the data attributes of a clicked tile to an intent. A meal id wins
    /// over a category key.
    pub fn from_tile(category: Option<String>, meal_id: Option<String>) -> Option<Self> {
        match (category, meal_id) {
            (_, Some(id)) if !id.trim().is_empty() => Some(Intent::OpenMeal(id)),
            (Some(name), _) if !name.trim().is_empty() => Some(Intent::OpenCategory(name)),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Home,
    CategoryList {
        category: String,
    },
    MealDetail {
        id: String,
    },
    SearchResult {
        query: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Ticket {
    region: Region,
    generation: u64,
}

/// One counter per region. A response may only touch a region if nothing
/// else claimed the region after the request went out.
#[derive(Debug, Default)]
struct Generations {
    counters: [Cell<u64>; 4],
}

impl Generations {
    fn advance(&self, region: Region) -> Ticket {
        let counter = &self.counters[region.index()];
        counter.set(counter.get() + 1);
        Ticket {
            region,
            generation: counter.get(),
        }
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        self.counters[ticket.region.index()].get() == ticket.generation
    }
}

pub struct Navigator<S, P> {
    source: S,
    page: P,
    store: RefCell<CategoryStore>,
    screen: RefCell<Screen>,
    generations: Generations,
}

impl<S: MealSource, P: PageSurface> Navigator<S, P> {
    pub fn new(source: S, page: P) -> Self {
        Self {
            source,
            page,
            store: RefCell::new(CategoryStore::default()),
            screen: RefCell::new(Screen::Home),
            generations: Generations::default(),
        }
    }

    #[cfg(test)]
    pub fn screen(&self) -> Screen {
        self.screen.borrow().clone()
    }

    pub fn describe(&self, category: &str) -> String {
        self.store.borrow().describe(category).to_string()
    }

    pub async fn handle(&self, intent: Intent) {
        match intent {
            Intent::OpenMenu => self.page.set_menu_open(true),
            Intent::CloseMenu => self.page.set_menu_open(false),
            Intent::OpenCategory(name) => self.open_category(name).await,
            Intent::OpenMeal(id) => self.open_meal(id).await,
            Intent::Search(text) => self.search(text).await,
            Intent::Home => self.home(),
        }
    }

    fn is_stale(&self, ticket: Ticket, what: &str) -> bool {
        let stale = !self.generations.is_current(ticket);
        if stale {
            log::debug!("Dropping stale {what} response for {:?}", ticket.region);
        }
        stale
    }

    /// Loads the category list into the home grid, the side menu and the store.
    pub fn load_categories(&self) -> impl Future<Output = ()> + '_ {
        let ticket = self.generations.advance(Region::Categories);
        async move {
            let result = self.source.categories().await;
            if self.is_stale(ticket, "category") {
                return;
            }
            match result {
                Ok(categories) if categories.is_empty() => {
                    log::warn!("Category list came back empty");
                    self.page
                        .render(Region::Categories, view::notice(&Notice::NoCategories));
                }
                Ok(categories) => {
                    self.store.borrow_mut().record_all(&categories);
                    log::info!("Loaded {} categories", self.store.borrow().len());
                    self.page
                        .render(Region::Categories, view::category_grid(&categories));
                    self.page.render(Region::Menu, view::menu_list(&categories));
                }
                Err(e) => {
                    log::error!("Loading categories failed: {e}");
                    self.page
                        .render(Region::Categories, view::notice(&Notice::CategoriesFailed));
                }
            }
        }
    }

    /// A name that is blank after trimming issues no request.
    pub fn open_category(&self, name: String) -> impl Future<Output = ()> + '_ {
        let name = name.trim().to_string();
        let ticket = if name.is_empty() {
            log::debug!("Ignoring blank category");
            None
        } else {
            self.generations.advance(Region::Details);
            let description = self.describe(&name);
            self.page.set_visible(Region::Details, true);
            self.page
                .render(Region::Details, view::category_blurb(&name, &description));

            let ticket = self.generations.advance(Region::Meals);
            self.page.render(Region::Meals, view::notice(&Notice::Loading));
            *self.screen.borrow_mut() = Screen::CategoryList {
                category: name.clone(),
            };
            Some(ticket)
        };

        async move {
            let Some(ticket) = ticket else {
                return;
            };
            let result = self.source.meals_by_category(&name).await;
            if self.is_stale(ticket, "meal list") {
                return;
            }
            match result {
                Ok(meals) if meals.is_empty() => {
                    log::info!("No meals in category {name}");
                    self.page.render(
                        Region::Meals,
                        view::notice(&Notice::NoMeals { category: name }),
                    );
                }
                Ok(meals) => {
                    log::info!("Showing {} meals for {name}", meals.len());
                    self.page.render(Region::Meals, view::meal_grid(&meals, &name));
                    self.page.set_menu_open(false);
                    self.page.scroll_into_view(Region::Details);
                }
                Err(e) => {
                    log::error!("Loading meals for {name} failed: {e}");
                    self.page.render(
                        Region::Meals,
                        view::notice(&Notice::MealsFailed { category: name }),
                    );
                }
            }
        }
    }

    pub fn open_meal(&self, id: String) -> impl Future<Output = ()> + '_ {
        let ticket = self.generations.advance(Region::Details);
        async move {
            let result = self.source.meal_by_id(&id).await;
            if self.is_stale(ticket, "meal detail") {
                return;
            }
            let markup = match result {
                Ok(Some(meal)) => {
                    log::info!("Showing meal {} ({id})", meal.name);
                    *self.screen.borrow_mut() = Screen::MealDetail { id };
                    view::meal_detail(&meal)
                }
                Ok(None) => {
                    log::warn!("Meal {id} not found");
                    view::notice(&Notice::MealNotFound)
                }
                Err(e) => {
                    log::error!("Loading meal {id} failed: {e}");
                    view::notice(&Notice::MealFailed)
                }
            };
            self.page.render(Region::Details, markup);
            self.page.set_visible(Region::Details, true);
            self.page.scroll_into_view(Region::Details);
        }
    }

    /// Blank or whitespace-only text issues no request.
    pub fn search(&self, text: String) -> impl Future<Output = ()> + '_ {
        let query = text.trim().to_string();
        let ticket = if query.is_empty() {
            log::debug!("Ignoring empty search");
            None
        } else {
            self.generations.advance(Region::Details);
            self.page.set_visible(Region::Details, false);
            let ticket = self.generations.advance(Region::Meals);
            self.page.render(Region::Meals, view::notice(&Notice::Searching));
            *self.screen.borrow_mut() = Screen::SearchResult {
                query: query.clone(),
            };
            Some(ticket)
        };

        async move {
            let Some(ticket) = ticket else {
                return;
            };
            let result = self.source.search(&query).await;
            if self.is_stale(ticket, "search") {
                return;
            }
            let markup = match result {
                Ok(meals) => match meals.first() {
                    Some(meal) => {
                        log::info!("Search {query:?} matched {} meals", meals.len());
                        view::search_result(meal)
                    }
                    None => view::notice(&Notice::NoMealFound { query }),
                },
                Err(e) => {
                    log::error!("Search {query:?} failed: {e}");
                    view::notice(&Notice::SearchFailed { query })
                }
            };
            self.page.render(Region::Meals, markup);
        }
    }

    pub fn home(&self) {
        for region in [Region::Details, Region::Meals] {
            self.generations.advance(region);
            self.page.render(region, String::new());
        }
        self.page.set_visible(Region::Details, true);
        self.page.scroll_to_top();
        *self.screen.borrow_mut() = Screen::Home;
    }
}

//! The catalog store: owns the current result set and drives retrieval
//! pipelines against the remote service.

use std::sync::Mutex;

use serde::Serialize;
use valantis_api::types::Product;
use valantis_api::{Client, FilterQuery};

use crate::dedup::dedupe;
use crate::error::CatalogError;
use crate::paginator::{self, PageView};

/// Observable store status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Status {
    /// No retrieval has been started yet.
    Idle,
    /// A pipeline is in flight.
    Loading,
    /// The result set reflects the last successful pipeline.
    Ready,
    /// The last pipeline failed; carries a user-presentable message.
    Failed(String),
}

/// The filter fields a view can edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Name,
    Price,
    Brand,
}

/// Field-by-field editable filter state, as entered by the user.
///
/// Values stay raw strings until an apply intent; blank fields and
/// non-numeric price input coerce to absent criteria rather than being sent
/// malformed. Editing never triggers a fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterDraft {
    pub name: String,
    pub price: String,
    pub brand: String,
}

impl FilterDraft {
    fn set(&mut self, field: FilterField, value: &str) {
        match field {
            FilterField::Name => self.name = value.to_string(),
            FilterField::Price => self.price = value.to_string(),
            FilterField::Brand => self.brand = value.to_string(),
        }
    }

    fn clear(&mut self) {
        *self = Self::default();
    }

    fn to_query(&self) -> FilterQuery {
        let mut query = FilterQuery::default();
        if !self.name.trim().is_empty() {
            query = query.with_name(self.name.clone());
        }
        if let Ok(price) = self.price.trim().parse::<f64>() {
            query = query.with_price(price);
        }
        if !self.brand.trim().is_empty() {
            query = query.with_brand(self.brand.clone());
        }
        query
    }
}

/// Which id-resolution call opens the pipeline.
enum IdSource {
    All,
    Filtered(FilterQuery),
}

struct State {
    status: Status,
    products: Vec<Product>,
    draft: FilterDraft,
    current_page: usize,
    /// Ticket of the most recently issued pipeline. A completion whose
    /// ticket no longer matches has been superseded and is discarded.
    issued: u64,
}

/// Orchestrates id resolution, item fetch, and deduplication, and owns the
/// resulting product set.
///
/// Intents (`initial_load`, `apply_filter`, `reset_filter`) each run one
/// pipeline: resolve ids (plain or filtered), fetch the items, dedupe,
/// replace the result set wholesale. Any sub-call failure aborts the pass,
/// clears the result set, and surfaces the error; the store stays usable
/// for the next intent. When pipelines overlap, the last *issued* one wins:
/// state transitions are applied atomically under a mutex and a stale
/// completion never touches state. The lock is not held across awaits.
pub struct CatalogStore {
    client: Client,
    state: Mutex<State>,
}

impl CatalogStore {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            state: Mutex::new(State {
                status: Status::Idle,
                products: Vec::new(),
                draft: FilterDraft::default(),
                current_page: 1,
                issued: 0,
            }),
        }
    }

    /// Loads the full, unfiltered catalog.
    pub async fn initial_load(&self) -> Result<(), CatalogError> {
        self.run(IdSource::All).await
    }

    /// Edits one filter field. Never fetches; the draft only takes effect
    /// on the next [`apply_filter`](Self::apply_filter).
    pub fn set_filter_field(&self, field: FilterField, value: &str) {
        self.lock().draft.set(field, value);
    }

    /// Applies the current filter draft.
    pub async fn apply_filter(&self) -> Result<(), CatalogError> {
        let query = self.lock().draft.to_query();
        self.run(IdSource::Filtered(query)).await
    }

    /// Clears the filter draft and reloads the full catalog.
    pub async fn reset_filter(&self) -> Result<(), CatalogError> {
        self.lock().draft.clear();
        self.run(IdSource::All).await
    }

    /// Navigates to a page, clamped to the valid range, and returns its view.
    pub fn go_to_page(&self, page: usize) -> PageView {
        let mut state = self.lock();
        let view = paginator::page_view(&state.products, page);
        state.current_page = view.page;
        view
    }

    /// Returns the view for an arbitrary page without changing the current one.
    pub fn page_view(&self, page: usize) -> PageView {
        paginator::page_view(&self.lock().products, page)
    }

    /// Returns the view for the current page.
    pub fn current_view(&self) -> PageView {
        let state = self.lock();
        paginator::page_view(&state.products, state.current_page)
    }

    pub fn status(&self) -> Status {
        self.lock().status.clone()
    }

    pub fn result_set(&self) -> Vec<Product> {
        self.lock().products.clone()
    }

    pub fn current_page(&self) -> usize {
        self.lock().current_page
    }

    pub fn filter_draft(&self) -> FilterDraft {
        self.lock().draft.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    async fn run(&self, source: IdSource) -> Result<(), CatalogError> {
        let ticket = {
            let mut state = self.lock();
            state.issued += 1;
            state.status = Status::Loading;
            state.issued
        };

        let outcome = self.pipeline(&source).await;

        let mut state = self.lock();
        if state.issued != ticket {
            tracing::debug!(
                "discarding stale pipeline completion (ticket {}, newest {})",
                ticket,
                state.issued
            );
            return Ok(());
        }
        match outcome {
            Ok(products) => {
                state.products = products;
                state.current_page = 1;
                state.status = Status::Ready;
                Ok(())
            }
            Err(err) => {
                state.products.clear();
                state.current_page = 1;
                state.status = Status::Failed(err.user_message());
                Err(err)
            }
        }
    }

    async fn pipeline(&self, source: &IdSource) -> Result<Vec<Product>, CatalogError> {
        let ids = match source {
            IdSource::All => self.client.get_ids().await?,
            IdSource::Filtered(query) => self.client.filter(query).await?,
        };
        let items = self.client.get_items(&ids).await?;
        Ok(dedupe(items))
    }
}

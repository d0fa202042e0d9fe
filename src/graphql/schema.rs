use std::sync::Arc;

use async_graphql::connection::{self, Connection, Edge};
use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, OutputType, Schema};

use crate::config::LimitSettings;
use crate::model;
use crate::storage::{Record, Store};

use super::resolver;
use super::types::*;

pub type GalleySchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Upper bound on edges in a single `vendors` page.
pub const VENDORS_MAX_PAGE_SIZE: usize = 50;

pub fn build_schema(store: Arc<Store>, limits: &LimitSettings) -> GalleySchema {
    let mut builder = Schema::build(QueryRoot, EmptyMutation, EmptySubscription).data(store);

    if let Some(depth) = limits.max_depth {
        builder = builder.limit_depth(depth);
    }
    if let Some(complexity) = limits.max_complexity {
        builder = builder.limit_complexity(complexity);
    }
    if !limits.introspection {
        builder = builder.disable_introspection();
    }

    builder.finish()
}

pub struct QueryRoot;

/// The top level query
#[Object]
impl QueryRoot {
    /// Every recipe, ordered by id
    async fn recipes(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Option<Recipe>>>> {
        let recipes = resolver::run(model::Recipe::MODEL, ctx, |store| {
            Ok(store.all::<model::Recipe>())
        })?;
        Ok(nullable_list(recipes, Recipe))
    }

    /// A single restaurant by id, or null when there is none
    async fn restaurant(
        &self,
        ctx: &Context<'_>,
        id: i32,
    ) -> async_graphql::Result<Option<Restaurant>> {
        let restaurant = resolver::run(model::Restaurant::MODEL, ctx, |store| {
            optional(store.find::<model::Restaurant>(i64::from(id)))
        })?;
        Ok(restaurant.map(Restaurant))
    }

    /// Vendors as a cursor-paginated connection of at most 50 edges per page
    async fn vendors(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        before: Option<String>,
        first: Option<i32>,
        last: Option<i32>,
    ) -> async_graphql::Result<Option<Connection<usize, Vendor>>> {
        let vendors = resolver::run(model::Vendor::MODEL, ctx, |store| {
            Ok(store.all::<model::Vendor>())
        })?;
        let vendors: Vec<Vendor> = vendors.into_iter().map(Vendor).collect();

        connection::query(
            after,
            before,
            first,
            last,
            |after: Option<usize>, before: Option<usize>, first: Option<usize>, last: Option<usize>| async move {
                Ok::<_, async_graphql::Error>(paginate(
                    vendors,
                    Window {
                        after,
                        before,
                        first,
                        last,
                    },
                    VENDORS_MAX_PAGE_SIZE,
                ))
            },
        )
        .await
        .map(Some)
    }
}

/// Decoded connection arguments; cursors are offsets into the full list.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Window {
    pub after: Option<usize>,
    pub before: Option<usize>,
    pub first: Option<usize>,
    pub last: Option<usize>,
}

impl Window {
    /// Resolve to a half-open `[start, end)` range over `total` items.
    ///
    /// `first`/`last` are clamped to `max_page_size`, which is also the page
    /// size when neither is given.
    pub fn range(&self, total: usize, max_page_size: usize) -> (usize, usize) {
        let mut start = self.after.map(|a| a.saturating_add(1)).unwrap_or(0).min(total);
        let mut end = self.before.unwrap_or(total).min(total).max(start);

        match (self.first, self.last) {
            (Some(first), _) => end = end.min(start + first.min(max_page_size)),
            (None, Some(last)) => start = start.max(end.saturating_sub(last.min(max_page_size))),
            (None, None) => end = end.min(start + max_page_size),
        }

        (start, end)
    }
}

pub(crate) fn paginate<T: OutputType>(
    items: Vec<T>,
    window: Window,
    max_page_size: usize,
) -> Connection<usize, T> {
    let total = items.len();
    let (start, end) = window.range(total, max_page_size);

    let mut connection = Connection::new(start > 0, end < total);
    connection.edges.extend(
        items
            .into_iter()
            .enumerate()
            .skip(start)
            .take(end - start)
            .map(|(offset, node)| Edge::new(offset, node)),
    );
    connection
}

//! Market-price retrieval, optionally composed with the aggregation engine.

use crate::config::BASE_PARALLEL;
use crate::engine::price_history::{aggregate_price_history, PriceSeries};
use crate::error::Result;
use crate::models::MarketPrice;
use crate::query_params::QueryParams;

/// Query interface for market-price history.
pub struct PriceClient<'a> {
    conn: &'a crate::connection::ApiConnection,
}

impl<'a> PriceClient<'a> {
    pub fn new(conn: &'a crate::connection::ApiConnection) -> Self {
        Self { conn }
    }

    /// Raw price history for a card. A named parallel is passed through as a
    /// server-side filter; `None` or `"Base"` omits the parameter and returns
    /// the full history (base snapshots are the untagged ones).
    pub fn for_card(&self, card_id: &str, parallel: Option<&str>) -> Result<MarketPrice> {
        let mut params = QueryParams::new();
        params.set_opt("parallel", parallel.filter(|p| *p != BASE_PARALLEL));

        self.conn.get(&format!("/marketprice/{card_id}"), &params)
    }

    /// Fetch and aggregate into a chart-ready series.
    ///
    /// The engine filter is re-applied client-side: for a base selection the
    /// server returns the whole history because it cannot distinguish "no
    /// parallel tag" from "parameter omitted". Returns `Ok(None)` when no
    /// snapshots match the selection.
    pub fn series_for_card(
        &self,
        card_id: &str,
        parallel: Option<&str>,
    ) -> Result<Option<PriceSeries>> {
        let price = self.for_card(card_id, parallel)?;
        Ok(aggregate_price_history(&price.history, parallel))
    }
}

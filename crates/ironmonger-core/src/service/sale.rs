//! # Stock Ledger
//!
//! Records sales and answers sale queries and reports.
//!
//! ## Create Sale Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  NewSale { client_id, items }                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_sale()          ── bad shape ──────────► InvalidInput         │
//! │  price_sale()             ── overflow ───────────► InvalidInput         │
//! │       │                                                                 │
//! │       ▼  pre-flight (outside the transaction)                          │
//! │  client_exists / product_exists ── missing ──────► NotFound             │
//! │       │                                                                 │
//! │       ▼  one transaction (SaleStore::record_sale)                      │
//! │  INSERT sale header                                                     │
//! │  for each item:                                                         │
//! │     UPDATE stock WHERE stock >= qty ── 0 rows ───► InsufficientStock    │
//! │     INSERT sale item                                (full rollback)     │
//! │  COMMIT                                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Sale { id, created_at, total_cents, items }                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pre-flight checks are not covered by the transaction. A client or
//! product deleted in between still cannot produce a partial sale: the
//! header insert fails its foreign key, or the guarded decrement finds no
//! row, and the transaction rolls back.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use tracing::{debug, info, warn};

use crate::error::{CoreError, CoreResult};
use crate::pricing::price_sale;
use crate::store::SaleStore;
use crate::types::{NewSale, Sale, SalesSummary, TopProduct};
use crate::validation::{validate_id, validate_sale};
use crate::{DEFAULT_TOP_PRODUCTS, MAX_TOP_PRODUCTS};

/// Sale operations over a [`SaleStore`].
#[derive(Debug, Clone)]
pub struct SaleService<S> {
    store: S,
}

impl<S: SaleStore> SaleService<S> {
    /// Creates a new SaleService.
    pub fn new(store: S) -> Self {
        SaleService { store }
    }

    /// Records a sale, decrementing stock for every item.
    ///
    /// All-or-nothing: on any error the store is left as it was.
    pub async fn create_sale(&self, request: &NewSale) -> CoreResult<Sale> {
        validate_sale(request)?;
        let priced = price_sale(request.client_id, &request.items)?;

        debug!(
            client_id = request.client_id,
            items = priced.items.len(),
            total = %priced.total,
            "Pre-flight checks for sale"
        );

        if !self.store.client_exists(request.client_id).await? {
            warn!(client_id = request.client_id, "Sale rejected: unknown client");
            return Err(CoreError::not_found("Client", request.client_id));
        }

        for line in &request.items {
            if !self.store.product_exists(line.product_id).await? {
                warn!(product_id = line.product_id, "Sale rejected: unknown product");
                return Err(CoreError::not_found("Product", line.product_id));
            }
        }

        match self.store.record_sale(&priced).await {
            Ok(sale) => {
                info!(
                    sale_id = sale.id,
                    client_id = sale.client_id,
                    total = %sale.total(),
                    items = sale.items.len(),
                    "Sale created"
                );
                Ok(sale)
            }
            Err(err) => {
                warn!(client_id = request.client_id, error = %err, "Sale rolled back");
                Err(err)
            }
        }
    }

    /// Returns a sale with its items.
    pub async fn sale_detail(&self, id: i64) -> CoreResult<Sale> {
        validate_id("sale_id", id)?;

        self.store
            .sale_detail(id)
            .await?
            .ok_or_else(|| CoreError::not_found("Sale", id))
    }

    /// Returns every sale, newest first, without items.
    pub async fn list_sales(&self) -> CoreResult<Vec<Sale>> {
        self.store.list_sales().await
    }

    /// Count and total of the sales made on the server's current local day.
    pub async fn sales_today(&self) -> CoreResult<SalesSummary> {
        let (from, to) = day_bounds(&Local::now());
        self.store.sales_between(from, to).await
    }

    /// Best-selling products by quantity.
    ///
    /// `limit` defaults to 5 and is clamped to `1..=50`.
    pub async fn top_products(&self, limit: Option<u32>) -> CoreResult<Vec<TopProduct>> {
        let limit = limit
            .unwrap_or(DEFAULT_TOP_PRODUCTS)
            .clamp(1, MAX_TOP_PRODUCTS);
        self.store.top_products(limit).await
    }
}

/// Returns the UTC instants of the local midnights that open and close the
/// calendar day containing `now`: `[start, end)`.
pub fn day_bounds<Tz: TimeZone>(now: &DateTime<Tz>) -> (DateTime<Utc>, DateTime<Utc>) {
    let tz = now.timezone();
    let today = now.date_naive();
    let tomorrow = today.succ_opt().unwrap_or(today);

    (local_midnight(&tz, today), local_midnight(&tz, tomorrow))
}

fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::default());

    // A DST jump can skip midnight entirely; fall back to reading it as UTC.
    match tz.from_local_datetime(&midnight).earliest() {
        Some(local) => local.with_timezone(&Utc),
        None => Utc.from_utc_datetime(&midnight),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::pricing::PricedSale;
    use crate::types::SaleLine;
    use chrono::FixedOffset;
    use std::sync::Mutex;

    /// Knows clients 1 and products 1..=3; records what reaches it.
    #[derive(Default)]
    struct FakeStore {
        recorded: Mutex<Vec<PricedSale>>,
        top_limit: Mutex<Option<u32>>,
    }

    impl SaleStore for FakeStore {
        async fn client_exists(&self, id: i64) -> CoreResult<bool> {
            Ok(id == 1)
        }

        async fn product_exists(&self, id: i64) -> CoreResult<bool> {
            Ok((1..=3).contains(&id))
        }

        async fn record_sale(&self, sale: &PricedSale) -> CoreResult<Sale> {
            self.recorded.lock().unwrap().push(sale.clone());
            Ok(Sale {
                id: 1,
                client_id: sale.client_id,
                client_name: "Ana Torres".to_string(),
                created_at: Utc::now(),
                total_cents: sale.total.cents(),
                items: sale.items.clone(),
            })
        }

        async fn sale_detail(&self, _id: i64) -> CoreResult<Option<Sale>> {
            Ok(None)
        }

        async fn list_sales(&self) -> CoreResult<Vec<Sale>> {
            Ok(Vec::new())
        }

        async fn sales_between(
            &self,
            _from: DateTime<Utc>,
            _to: DateTime<Utc>,
        ) -> CoreResult<SalesSummary> {
            Ok(SalesSummary::default())
        }

        async fn top_products(&self, limit: u32) -> CoreResult<Vec<TopProduct>> {
            *self.top_limit.lock().unwrap() = Some(limit);
            Ok(Vec::new())
        }
    }

    fn sale(client_id: i64, items: Vec<SaleLine>) -> NewSale {
        NewSale { client_id, items }
    }

    fn line(product_id: i64, quantity: i64) -> SaleLine {
        SaleLine {
            product_id,
            quantity,
            unit_price_cents: 500,
        }
    }

    #[tokio::test]
    async fn test_invalid_request_never_reaches_store() {
        let service = SaleService::new(FakeStore::default());

        let err = service.create_sale(&sale(1, vec![])).await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidInput(ValidationError::Empty { .. })
        ));

        let err = service.create_sale(&sale(1, vec![line(1, 0)])).await.unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));

        assert!(service.store.recorded.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_references_are_not_found() {
        let service = SaleService::new(FakeStore::default());

        let err = service.create_sale(&sale(9, vec![line(1, 1)])).await.unwrap_err();
        assert!(matches!(err, CoreError::NotFound { ref entity, id: 9 } if entity == "Client"));

        let err = service
            .create_sale(&sale(1, vec![line(1, 1), line(7, 1)]))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::NotFound { ref entity, id: 7 } if entity == "Product"));

        assert!(service.store.recorded.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_receives_server_computed_amounts() {
        let service = SaleService::new(FakeStore::default());

        let created = service
            .create_sale(&sale(1, vec![line(1, 3), line(2, 2)]))
            .await
            .unwrap();

        assert_eq!(created.total_cents, 2500);
        let recorded = service.store.recorded.lock().unwrap();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].items[0].subtotal_cents, 1500);
    }

    #[tokio::test]
    async fn test_missing_sale_is_not_found() {
        let service = SaleService::new(FakeStore::default());

        assert!(matches!(
            service.sale_detail(4).await.unwrap_err(),
            CoreError::NotFound { id: 4, .. }
        ));
        assert!(matches!(
            service.sale_detail(0).await.unwrap_err(),
            CoreError::InvalidInput(_)
        ));
    }

    #[tokio::test]
    async fn test_top_products_limit_is_clamped() {
        let service = SaleService::new(FakeStore::default());

        for (requested, expected) in [(None, 5), (Some(0), 1), (Some(12), 12), (Some(500), 50)] {
            service.top_products(requested).await.unwrap();
            assert_eq!(*service.store.top_limit.lock().unwrap(), Some(expected));
        }
    }

    #[test]
    fn test_day_bounds_utc() {
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap();
        let (from, to) = day_bounds(&now);

        assert_eq!(from, Utc.with_ymd_and_hms(2026, 3, 14, 0, 0, 0).unwrap());
        assert_eq!(to, Utc.with_ymd_and_hms(2026, 3, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_day_bounds_follow_local_calendar_day() {
        // 23:30 on the 14th in UTC-5 is already the 15th in UTC.
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let now = offset.with_ymd_and_hms(2026, 3, 14, 23, 30, 0).unwrap();
        let (from, to) = day_bounds(&now);

        assert_eq!(from, Utc.with_ymd_and_hms(2026, 3, 14, 5, 0, 0).unwrap());
        assert_eq!(to, Utc.with_ymd_and_hms(2026, 3, 15, 5, 0, 0).unwrap());
        assert!(from <= now.with_timezone(&Utc) && now.with_timezone(&Utc) < to);
    }
}

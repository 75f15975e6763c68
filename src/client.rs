//! The MoySklad client facade.
//!
//! [`MoySkladClient`] holds the resolved credentials and the HTTP
//! dispatcher, and exposes one async method per API operation. Every
//! method builds a request value from [`crate::api`], dispatches it, and
//! parses the reply; errors propagate unchanged.

use crate::api::entities::stock::{
    CurrentStock, CurrentStockByStoreReport, CurrentStockParams, CurrentStockReport,
    StockByStoreReport, StockByStoreRow, StockReport, StockReportParams, StockRow,
};
use crate::api::entities::{
    BonusProgram, BonusTransaction, CreateBonusProgram, CreateBonusTransaction, CreateCurrency,
    CreateCustomEntity, CreateCustomEntityElement, CreateDemand, CreateInternalOrder,
    CreateInvoiceIn, CreateMove, CreateOrganization, CreateProduct, CreateProductFolder,
    CreatePurchaseOrder, CreateStore, CreateSupply, CreateWebhook, Currency, CustomEntity,
    CustomEntityElement, DeleteCustomEntity, DeleteCustomEntityElement, Demand,
    GetCustomEntityElement, InternalOrder, InvoiceIn, ListCustomEntityElements, Move,
    Organization, Product, ProductFolder, PurchaseOrder, Store, Supply, UpdateBonusProgram,
    UpdateBonusTransaction, UpdateCurrency, UpdateCustomEntity, UpdateCustomEntityElement,
    UpdateDemand, UpdateInternalOrder, UpdateInvoiceIn, UpdateMove, UpdateOrganization,
    UpdateProduct, UpdateProductFolder, UpdatePurchaseOrder, UpdateStore, UpdateSupply,
    UpdateWebhook, Webhook,
};
use crate::api::{
    ApiRequest, DeleteEntity, Document, DocumentPosition, Entity, FetchPage, GetEntity,
    ListEntities, ListParams, ListPositions, ListResponse, RequestError,
};
use crate::auth::BasicAuthToken;
use crate::clients::HttpClient;
use crate::config::{BaseUrl, MoySkladConfig};
use crate::error::ConfigError;

/// Async client for the MoySklad JSON API.
///
/// The client is immutable after construction and `Send + Sync`; share it
/// behind an `Arc` to issue concurrent requests.
///
/// # Example
///
/// ```rust,no_run
/// use moysklad_api::api::ListParams;
/// use moysklad_api::MoySkladClient;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = MoySkladClient::with_login("admin@company", "secret")?;
///
/// let products = client.get_products(ListParams::new().limit(10)).await?;
/// for product in &products.rows {
///     println!("{:?}", product.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MoySkladClient {
    config: MoySkladConfig,
    http: HttpClient,
}

// Verify MoySkladClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MoySkladClient>();
};

/// Generates the list/get/create/update/delete methods of one entity.
macro_rules! entity_methods {
    (
        $entity:ty, $create:ty, $update:ty, $label:literal,
        $list_fn:ident, $get_fn:ident, $create_fn:ident, $update_fn:ident, $delete_fn:ident
    ) => {
        #[doc = concat!("Lists ", $label, ".")]
        ///
        /// # Errors
        ///
        /// Returns [`RequestError`] if the request fails or the reply cannot be parsed.
        pub async fn $list_fn(&self, params: ListParams) -> Result<ListResponse<$entity>, RequestError> {
            self.list_entities::<$entity>(params).await
        }

        #[doc = concat!("Fetches one of the ", $label, " by id.")]
        ///
        /// # Errors
        ///
        /// Returns [`RequestError`] if the request fails or the reply cannot be parsed.
        pub async fn $get_fn(&self, id: &str) -> Result<$entity, RequestError> {
            self.get_entity::<$entity>(id).await
        }

        #[doc = concat!("Creates one of the ", $label, ".")]
        ///
        /// # Errors
        ///
        /// Returns [`RequestError`] if the request fails or the reply cannot be parsed.
        pub async fn $create_fn(&self, request: &$create) -> Result<$entity, RequestError> {
            self.execute(request).await
        }

        #[doc = concat!("Updates one of the ", $label, "; unset fields stay unchanged.")]
        ///
        /// # Errors
        ///
        /// Returns [`RequestError`] if the request fails or the reply cannot be parsed.
        pub async fn $update_fn(&self, request: &$update) -> Result<$entity, RequestError> {
            self.execute(request).await
        }

        #[doc = concat!("Deletes one of the ", $label, " by id.")]
        ///
        /// # Errors
        ///
        /// Returns [`RequestError`] if the request fails.
        pub async fn $delete_fn(&self, id: &str) -> Result<(), RequestError> {
            self.delete_entity::<$entity>(id).await
        }
    };
}

impl MoySkladClient {
    /// Creates a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the HTTP transport cannot
    /// be initialized.
    pub fn new(config: MoySkladConfig) -> Result<Self, ConfigError> {
        let http = HttpClient::new(&config)?;

        tracing::debug!(
            base_url = %config.base_url(),
            retry_count = config.retry().count(),
            debug = config.debug(),
            "MoySklad client created"
        );

        Ok(Self { config, http })
    }

    /// Creates a client with login and password and default settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] if either value is empty.
    pub fn with_login(login: &str, password: &str) -> Result<Self, ConfigError> {
        Self::new(
            MoySkladConfig::builder()
                .login(login)
                .password(password)
                .build()?,
        )
    }

    /// Creates a client with a pre-encoded Basic-Auth token and default settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidToken`] if the token is not base64 of
    /// `login:password`.
    pub fn with_token(token: &str) -> Result<Self, ConfigError> {
        Self::new(MoySkladConfig::builder().api_token(token).build()?)
    }

    /// Returns the Basic-Auth token used for every request.
    #[must_use]
    pub const fn token(&self) -> &BasicAuthToken {
        self.config.token()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        self.config.base_url()
    }

    /// Returns the configuration the client was built from.
    #[must_use]
    pub const fn config(&self) -> &MoySkladConfig {
        &self.config
    }

    /// Dispatches any request value and parses its reply.
    ///
    /// Use this for operations without a dedicated method, or for
    /// [`ApiRequest`] implementations of your own.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Encode`] if the body cannot be serialized,
    /// [`RequestError::Http`] if dispatch fails, and
    /// [`RequestError::Decode`] if the reply has the wrong shape.
    pub async fn execute<R>(&self, request: &R) -> Result<R::Output, RequestError>
    where
        R: ApiRequest + ?Sized,
    {
        let pending = request.to_request()?;
        let raw = self.http.dispatch(pending).await?;
        request.from_response(raw)
    }

    // Generic entity operations

    /// Lists entities of type `E`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the reply cannot be parsed.
    pub async fn list_entities<E: Entity>(
        &self,
        params: ListParams,
    ) -> Result<ListResponse<E>, RequestError> {
        self.execute(&ListEntities::<E>::new(params)).await
    }

    /// Lists every entity of type `E`, following `nextHref` links.
    ///
    /// `params.limit` sets the page size. Issues one request per page.
    ///
    /// # Errors
    ///
    /// Returns the first [`RequestError`] encountered; rows fetched before
    /// it are discarded.
    pub async fn list_all_entities<E: Entity>(
        &self,
        params: ListParams,
    ) -> Result<Vec<E>, RequestError> {
        let mut page = self.list_entities::<E>(params).await?;
        let mut rows = Vec::new();
        loop {
            let next = page.meta.as_ref().and_then(|m| m.next_href.clone());
            rows.append(&mut page.rows);
            match next {
                Some(href) => page = self.execute(&FetchPage::<E>::new(href)).await?,
                None => return Ok(rows),
            }
        }
    }

    /// Fetches an entity of type `E` by id.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the reply cannot be parsed.
    pub async fn get_entity<E: Entity>(&self, id: &str) -> Result<E, RequestError> {
        self.execute(&GetEntity::<E>::new(id)).await
    }

    /// Deletes an entity of type `E` by id.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails.
    pub async fn delete_entity<E: Entity>(&self, id: &str) -> Result<(), RequestError> {
        self.execute(&DeleteEntity::<E>::new(id)).await
    }

    /// Lists the positions of document `D`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the reply cannot be parsed.
    pub async fn list_positions<D: Document>(
        &self,
        id: &str,
        params: ListParams,
    ) -> Result<ListResponse<DocumentPosition>, RequestError> {
        self.execute(&ListPositions::<D>::new(id, params)).await
    }

    // Catalog

    entity_methods!(
        Product, CreateProduct, UpdateProduct, "products",
        get_products, get_product, create_product, update_product, delete_product
    );

    entity_methods!(
        ProductFolder, CreateProductFolder, UpdateProductFolder, "product folders",
        get_product_folders, get_product_folder, create_product_folder,
        update_product_folder, delete_product_folder
    );

    entity_methods!(
        Store, CreateStore, UpdateStore, "stores",
        get_stores, get_store, create_store, update_store, delete_store
    );

    entity_methods!(
        Organization, CreateOrganization, UpdateOrganization, "organizations",
        get_organizations, get_organization, create_organization,
        update_organization, delete_organization
    );

    entity_methods!(
        Currency, CreateCurrency, UpdateCurrency, "currencies",
        get_currencies, get_currency, create_currency, update_currency, delete_currency
    );

    entity_methods!(
        Webhook, CreateWebhook, UpdateWebhook, "webhooks",
        get_webhooks, get_webhook, create_webhook, update_webhook, delete_webhook
    );

    // Documents

    entity_methods!(
        Demand, CreateDemand, UpdateDemand, "demands",
        get_demands, get_demand, create_demand, update_demand, delete_demand
    );

    entity_methods!(
        Supply, CreateSupply, UpdateSupply, "supplies",
        get_supplies, get_supply, create_supply, update_supply, delete_supply
    );

    entity_methods!(
        Move, CreateMove, UpdateMove, "moves",
        get_moves, get_move, create_move, update_move, delete_move
    );

    entity_methods!(
        PurchaseOrder, CreatePurchaseOrder, UpdatePurchaseOrder, "purchase orders",
        get_purchase_orders, get_purchase_order, create_purchase_order,
        update_purchase_order, delete_purchase_order
    );

    entity_methods!(
        InternalOrder, CreateInternalOrder, UpdateInternalOrder, "internal orders",
        get_internal_orders, get_internal_order, create_internal_order,
        update_internal_order, delete_internal_order
    );

    entity_methods!(
        InvoiceIn, CreateInvoiceIn, UpdateInvoiceIn, "incoming invoices",
        get_invoices_in, get_invoice_in, create_invoice_in, update_invoice_in,
        delete_invoice_in
    );

    /// Lists the positions of a demand.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the reply cannot be parsed.
    pub async fn get_demand_positions(
        &self,
        id: &str,
        params: ListParams,
    ) -> Result<ListResponse<DocumentPosition>, RequestError> {
        self.list_positions::<Demand>(id, params).await
    }

    /// Lists the positions of a supply.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the reply cannot be parsed.
    pub async fn get_supply_positions(
        &self,
        id: &str,
        params: ListParams,
    ) -> Result<ListResponse<DocumentPosition>, RequestError> {
        self.list_positions::<Supply>(id, params).await
    }

    /// Lists the positions of a move.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the reply cannot be parsed.
    pub async fn get_move_positions(
        &self,
        id: &str,
        params: ListParams,
    ) -> Result<ListResponse<DocumentPosition>, RequestError> {
        self.list_positions::<Move>(id, params).await
    }

    /// Lists the positions of a purchase order.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the reply cannot be parsed.
    pub async fn get_purchase_order_positions(
        &self,
        id: &str,
        params: ListParams,
    ) -> Result<ListResponse<DocumentPosition>, RequestError> {
        self.list_positions::<PurchaseOrder>(id, params).await
    }

    /// Lists the positions of an internal order.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the reply cannot be parsed.
    pub async fn get_internal_order_positions(
        &self,
        id: &str,
        params: ListParams,
    ) -> Result<ListResponse<DocumentPosition>, RequestError> {
        self.list_positions::<InternalOrder>(id, params).await
    }

    /// Lists the positions of an incoming invoice.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the reply cannot be parsed.
    pub async fn get_invoice_in_positions(
        &self,
        id: &str,
        params: ListParams,
    ) -> Result<ListResponse<DocumentPosition>, RequestError> {
        self.list_positions::<InvoiceIn>(id, params).await
    }

    // Loyalty

    entity_methods!(
        BonusProgram, CreateBonusProgram, UpdateBonusProgram, "bonus programs",
        get_bonus_programs, get_bonus_program, create_bonus_program,
        update_bonus_program, delete_bonus_program
    );

    entity_methods!(
        BonusTransaction, CreateBonusTransaction, UpdateBonusTransaction, "bonus transactions",
        get_bonus_transactions, get_bonus_transaction, create_bonus_transaction,
        update_bonus_transaction, delete_bonus_transaction
    );

    // Custom entities

    /// Creates a custom entity (directory).
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the reply cannot be parsed.
    pub async fn create_custom_entity(
        &self,
        request: &CreateCustomEntity,
    ) -> Result<CustomEntity, RequestError> {
        self.execute(request).await
    }

    /// Renames a custom entity.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the reply cannot be parsed.
    pub async fn update_custom_entity(
        &self,
        request: &UpdateCustomEntity,
    ) -> Result<CustomEntity, RequestError> {
        self.execute(request).await
    }

    /// Deletes a custom entity and all its elements.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails.
    pub async fn delete_custom_entity(&self, id: &str) -> Result<(), RequestError> {
        self.execute(&DeleteCustomEntity::new(id)).await
    }

    /// Lists the elements of a custom entity.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the reply cannot be parsed.
    pub async fn get_custom_entity_elements(
        &self,
        metadata_id: &str,
        params: ListParams,
    ) -> Result<ListResponse<CustomEntityElement>, RequestError> {
        self.execute(&ListCustomEntityElements::new(metadata_id, params))
            .await
    }

    /// Fetches one element of a custom entity.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the reply cannot be parsed.
    pub async fn get_custom_entity_element(
        &self,
        metadata_id: &str,
        id: &str,
    ) -> Result<CustomEntityElement, RequestError> {
        self.execute(&GetCustomEntityElement::new(metadata_id, id))
            .await
    }

    /// Creates an element of a custom entity.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the reply cannot be parsed.
    pub async fn create_custom_entity_element(
        &self,
        request: &CreateCustomEntityElement,
    ) -> Result<CustomEntityElement, RequestError> {
        self.execute(request).await
    }

    /// Updates an element of a custom entity.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the reply cannot be parsed.
    pub async fn update_custom_entity_element(
        &self,
        request: &UpdateCustomEntityElement,
    ) -> Result<CustomEntityElement, RequestError> {
        self.execute(request).await
    }

    /// Deletes an element of a custom entity.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails.
    pub async fn delete_custom_entity_element(
        &self,
        metadata_id: &str,
        id: &str,
    ) -> Result<(), RequestError> {
        self.execute(&DeleteCustomEntityElement::new(metadata_id, id))
            .await
    }

    // Stock

    /// Fetches the full stock report (`report/stock/all`).
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the reply cannot be parsed.
    pub async fn get_stock_report(
        &self,
        params: StockReportParams,
    ) -> Result<ListResponse<StockRow>, RequestError> {
        self.execute(&StockReport::new(params)).await
    }

    /// Fetches the stock report broken down by store (`report/stock/bystore`).
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the reply cannot be parsed.
    pub async fn get_stock_by_store(
        &self,
        params: StockReportParams,
    ) -> Result<ListResponse<StockByStoreRow>, RequestError> {
        self.execute(&StockByStoreReport::new(params)).await
    }

    /// Fetches current stock totals (`report/stock/all/current`).
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the reply cannot be parsed.
    pub async fn get_current_stock(
        &self,
        params: CurrentStockParams,
    ) -> Result<Vec<CurrentStock>, RequestError> {
        self.execute(&CurrentStockReport::new(params)).await
    }

    /// Fetches current stock per store (`report/stock/bystore/current`).
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the request fails or the reply cannot be parsed.
    pub async fn get_current_stock_by_store(
        &self,
        params: CurrentStockParams,
    ) -> Result<Vec<CurrentStock>, RequestError> {
        self.execute(&CurrentStockByStoreReport::new(params)).await
    }
}

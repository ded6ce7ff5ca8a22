// src/config.rs

use std::{env, sync::Arc, time::Duration};

use sqlx::{MySqlPool, mysql::MySqlPoolOptions};

use crate::{
    db::{
        MySqlBuyerRepository, MySqlCarryRepository, MySqlEmployeeRepository,
        MySqlInboundOrderRepository, MySqlLocalityRepository, MySqlProductBatchRepository,
        MySqlProductRecordRepository, MySqlProductRepository, MySqlPurchaseOrderRepository,
        MySqlSectionRepository, MySqlSellerRepository, MySqlWarehouseRepository,
    },
    services::{
        BuyerService, CarryService, EmployeeService, InboundOrderService, LocalityService,
        ProductBatchService, ProductRecordService, ProductService, PurchaseOrderService,
        SectionService, SellerService, WarehouseService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: MySqlPool,
    pub buyer_service: BuyerService,
    pub seller_service: SellerService,
    pub product_service: ProductService,
    pub section_service: SectionService,
    pub warehouse_service: WarehouseService,
    pub employee_service: EmployeeService,
    pub locality_service: LocalityService,
    pub carry_service: CarryService,
    pub inbound_order_service: InboundOrderService,
    pub purchase_order_service: PurchaseOrderService,
    pub product_record_service: ProductRecordService,
    pub product_batch_service: ProductBatchService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = MySqlPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        Ok(Self {
            buyer_service: BuyerService::new(Arc::new(MySqlBuyerRepository::new(
                db_pool.clone(),
            ))),
            seller_service: SellerService::new(Arc::new(MySqlSellerRepository::new(
                db_pool.clone(),
            ))),
            product_service: ProductService::new(Arc::new(MySqlProductRepository::new(
                db_pool.clone(),
            ))),
            section_service: SectionService::new(Arc::new(MySqlSectionRepository::new(
                db_pool.clone(),
            ))),
            warehouse_service: WarehouseService::new(Arc::new(MySqlWarehouseRepository::new(
                db_pool.clone(),
            ))),
            employee_service: EmployeeService::new(Arc::new(MySqlEmployeeRepository::new(
                db_pool.clone(),
            ))),
            locality_service: LocalityService::new(Arc::new(MySqlLocalityRepository::new(
                db_pool.clone(),
            ))),
            carry_service: CarryService::new(Arc::new(MySqlCarryRepository::new(
                db_pool.clone(),
            ))),
            inbound_order_service: InboundOrderService::new(Arc::new(
                MySqlInboundOrderRepository::new(db_pool.clone()),
            )),
            purchase_order_service: PurchaseOrderService::new(Arc::new(
                MySqlPurchaseOrderRepository::new(db_pool.clone()),
            )),
            product_record_service: ProductRecordService::new(Arc::new(
                MySqlProductRecordRepository::new(db_pool.clone()),
            )),
            product_batch_service: ProductBatchService::new(Arc::new(
                MySqlProductBatchRepository::new(db_pool.clone()),
            )),
            db_pool,
        })
    }
}

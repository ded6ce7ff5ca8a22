pub mod buyer_repo;
pub use buyer_repo::{BuyerRepository, MySqlBuyerRepository};
pub mod seller_repo;
pub use seller_repo::{MySqlSellerRepository, SellerRepository};
pub mod product_repo;
pub use product_repo::{MySqlProductRepository, ProductRepository};
pub mod section_repo;
pub use section_repo::{MySqlSectionRepository, SectionRepository};
pub mod warehouse_repo;
pub use warehouse_repo::{MySqlWarehouseRepository, WarehouseRepository};
pub mod employee_repo;
pub use employee_repo::{EmployeeRepository, MySqlEmployeeRepository};
pub mod locality_repo;
pub use locality_repo::{LocalityRepository, MySqlLocalityRepository};
pub mod carry_repo;
pub use carry_repo::{CarryRepository, MySqlCarryRepository};
pub mod inbound_order_repo;
pub use inbound_order_repo::{InboundOrderRepository, MySqlInboundOrderRepository};
pub mod purchase_order_repo;
pub use purchase_order_repo::{MySqlPurchaseOrderRepository, PurchaseOrderRepository};
pub mod product_record_repo;
pub use product_record_repo::{MySqlProductRecordRepository, ProductRecordRepository};
pub mod product_batch_repo;
pub use product_batch_repo::{MySqlProductBatchRepository, ProductBatchRepository};

pub mod views;

pub mod a001_client;
pub mod a002_product;
pub mod a003_offer;
pub mod a004_order;
pub mod a005_delivery_note;
pub mod a006_invoice;

pub mod store_client;

pub mod storage;
pub mod enrich;

use crate::utils::error::Result;
use async_trait::async_trait;

/// Where a raw request payload comes from.
#[async_trait]
pub trait PayloadSource: Send + Sync {
    async fn read_payload(&self) -> Result<Vec<u8>>;

    fn describe(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn strict_dates(&self) -> bool;
    fn pretty_output(&self) -> bool;
}

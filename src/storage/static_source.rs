//! Fixed, preloaded property records

use crate::core::error::TaskboardResult;
use crate::core::property::{Property, mock_properties};
use crate::core::service::PropertySource;
use async_trait::async_trait;
use std::sync::Arc;

/// Property source backed by an immutable in-memory list
#[derive(Clone)]
pub struct StaticPropertySource {
    records: Arc<[Property]>,
}

impl StaticPropertySource {
    pub fn new(records: Vec<Property>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Source serving the ten demo records
    pub fn demo() -> Self {
        Self::new(mock_properties())
    }
}

impl Default for StaticPropertySource {
    fn default() -> Self {
        Self::demo()
    }
}

#[async_trait]
impl PropertySource for StaticPropertySource {
    async fn load(&self) -> TaskboardResult<Vec<Property>> {
        Ok(self.records.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_source_loads_mock_set() {
        let records = StaticPropertySource::demo().load().await.unwrap();
        assert_eq!(records, mock_properties());
    }

    #[tokio::test]
    async fn test_custom_records() {
        let source = StaticPropertySource::new(mock_properties().into_iter().take(2).collect());
        assert_eq!(source.load().await.unwrap().len(), 2);
    }
}
